use crate::motion::interpolate::{ControlPoints, CurveError, Rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A nav item was chosen, whether or not its target exists.
    Navigate,
    /// Pointer pressed somewhere on the page.
    PointerDown { inside_nav: bool },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, action: MenuAction) -> MenuState {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::Navigate) => MenuState::Closed,
            (MenuState::Open, MenuAction::PointerDown { inside_nav: false }) => MenuState::Closed,
            (state, MenuAction::PointerDown { .. }) => state,
        }
    }
}

/// Scroll position that puts a section's top just under the fixed header.
/// `None` when the section is not in the document.
pub fn anchor_scroll_top(section_top: Option<f64>, header_height: f64) -> Option<f64> {
    section_top.map(|top| (top - header_height).max(0.0))
}

/// Navbar look as a function of page scroll position.
#[derive(Clone, Debug)]
pub struct NavbarCurves {
    opacity: ControlPoints<f64>,
    blur: ControlPoints<f64>,
    background: ControlPoints<Rgba>,
}

impl NavbarCurves {
    pub fn new(scroll_range: f64) -> Result<Self, CurveError> {
        let stops = [0.0, scroll_range];
        Ok(Self {
            opacity: ControlPoints::from_slices(&stops, &[1.0, 0.8])?,
            blur: ControlPoints::from_slices(&stops, &[0.0, 5.0])?,
            background: ControlPoints::from_slices(
                &stops,
                &[Rgba::new(17.0, 24.0, 39.0, 0.0), Rgba::new(17.0, 24.0, 39.0, 0.7)],
            )?,
        })
    }

    pub fn style(&self, scroll_y: f64) -> String {
        let blur = self.blur.sample(scroll_y);
        format!(
            "opacity: {:.3}; backdrop-filter: blur({:.2}px); -webkit-backdrop-filter: blur({:.2}px); background-color: {};",
            self.opacity.sample(scroll_y),
            blur,
            blur,
            self.background.sample(scroll_y).to_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(MenuState::Closed.apply(MenuAction::Toggle), MenuState::Open);
        assert_eq!(MenuState::Open.apply(MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_navigation_closes() {
        assert_eq!(MenuState::Open.apply(MenuAction::Navigate), MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(MenuAction::Navigate), MenuState::Closed);
    }

    #[test]
    fn test_pointer_down_outside() {
        let outside = MenuAction::PointerDown { inside_nav: false };
        let inside = MenuAction::PointerDown { inside_nav: true };
        assert_eq!(MenuState::Open.apply(outside), MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(outside), MenuState::Closed);
        assert_eq!(MenuState::Open.apply(inside), MenuState::Open);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_scroll_top(Some(1280.0), 80.0), Some(1200.0));
        assert_eq!(anchor_scroll_top(Some(30.0), 80.0), Some(0.0));
        assert_eq!(anchor_scroll_top(None, 80.0), None);
    }

    #[test]
    fn test_navbar_style_endpoints() {
        let curves = NavbarCurves::new(100.0).unwrap();
        assert_eq!(
            curves.style(0.0),
            "opacity: 1.000; backdrop-filter: blur(0.00px); -webkit-backdrop-filter: blur(0.00px); background-color: rgba(17, 24, 39, 0);"
        );
        assert_eq!(
            curves.style(400.0),
            "opacity: 0.800; backdrop-filter: blur(5.00px); -webkit-backdrop-filter: blur(5.00px); background-color: rgba(17, 24, 39, 0.7);"
        );
        assert!(curves.style(50.0).contains("blur(2.50px)"));
    }
}
