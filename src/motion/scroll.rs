/// Scroll state of the page, sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    /// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
    pub fn page_progress(&self) -> f64 {
        let scrollable = self.document_height - self.height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

/// Element position in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    /// Builds a box from a viewport-relative rect top.
    pub fn from_client_top(client_top: f64, height: f64, viewport: &Viewport) -> Self {
        Self {
            top: client_top + viewport.scroll_y,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

/// "`element` edge meets `viewport` edge", e.g. `start end` is the moment the
/// element's top reaches the bottom of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub element: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Scroll position at which this offset is reached.
    pub fn scroll_position(&self, element: &ElementBox, viewport_height: f64) -> f64 {
        element.top + self.element.fraction() * element.height
            - self.viewport.fraction() * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    Clamp,
    Extrapolate,
}

/// Maps element scroll position to progress: 0 at `start`, 1 at `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
    pub overflow: Overflow,
}

impl ScrollRange {
    /// Top of the element entering at the bottom, through to its center
    /// reaching the middle of the viewport.
    pub const ENTRANCE: Self = Self {
        start: ScrollOffset::new(Edge::Start, Edge::End),
        end: ScrollOffset::new(Edge::Center, Edge::Center),
        overflow: Overflow::Clamp,
    };

    /// Any part of the element inside the viewport.
    pub const IN_VIEW: Self = Self {
        start: ScrollOffset::new(Edge::Start, Edge::End),
        end: ScrollOffset::new(Edge::End, Edge::Start),
        overflow: Overflow::Clamp,
    };

    pub fn progress(&self, element: &ElementBox, viewport: &Viewport) -> f64 {
        let from = self.start.scroll_position(element, viewport.height);
        let to = self.end.scroll_position(element, viewport.height);
        let span = to - from;
        if span == 0.0 {
            return if viewport.scroll_y >= from { 1.0 } else { 0.0 };
        }
        let raw = (viewport.scroll_y - from) / span;
        match self.overflow {
            Overflow::Clamp => raw.clamp(0.0, 1.0),
            Overflow::Extrapolate => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_HEIGHT: f64 = 800.0;

    fn at(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: VIEWPORT_HEIGHT,
            document_height: 5000.0,
        }
    }

    fn block() -> ElementBox {
        ElementBox {
            top: 2000.0,
            height: 400.0,
        }
    }

    #[test]
    fn test_entrance_endpoints() {
        // Element top meets viewport bottom at scroll 1200.
        assert_eq!(ScrollRange::ENTRANCE.progress(&block(), &at(1200.0)), 0.0);
        // Element center (2200) meets viewport center at scroll 1800.
        assert_eq!(ScrollRange::ENTRANCE.progress(&block(), &at(1800.0)), 1.0);
        assert!((ScrollRange::ENTRANCE.progress(&block(), &at(1500.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_outside_range() {
        assert_eq!(ScrollRange::ENTRANCE.progress(&block(), &at(0.0)), 0.0);
        assert_eq!(ScrollRange::ENTRANCE.progress(&block(), &at(4200.0)), 1.0);
    }

    #[test]
    fn test_extrapolates_when_configured() {
        let range = ScrollRange {
            overflow: Overflow::Extrapolate,
            ..ScrollRange::ENTRANCE
        };
        assert!((range.progress(&block(), &at(600.0)) + 1.0).abs() < 1e-9);
        assert!((range.progress(&block(), &at(2400.0)) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_span_steps() {
        let range = ScrollRange {
            start: ScrollOffset::new(Edge::Start, Edge::Start),
            end: ScrollOffset::new(Edge::Start, Edge::Start),
            overflow: Overflow::Clamp,
        };
        assert_eq!(range.progress(&block(), &at(1999.0)), 0.0);
        assert_eq!(range.progress(&block(), &at(2000.0)), 1.0);
    }

    #[test]
    fn test_in_view_covers_whole_pass() {
        assert_eq!(ScrollRange::IN_VIEW.progress(&block(), &at(1200.0)), 0.0);
        assert_eq!(ScrollRange::IN_VIEW.progress(&block(), &at(2400.0)), 1.0);
        assert!(ScrollRange::IN_VIEW.progress(&block(), &at(1201.0)) > 0.0);
    }

    #[test]
    fn test_page_progress() {
        assert_eq!(at(0.0).page_progress(), 0.0);
        assert!((at(2100.0).page_progress() - 0.5).abs() < 1e-9);
        assert_eq!(at(9999.0).page_progress(), 1.0);
        let short = Viewport {
            scroll_y: 0.0,
            height: 900.0,
            document_height: 600.0,
        };
        assert_eq!(short.page_progress(), 0.0);
    }

    #[test]
    fn test_element_box_from_client_rect() {
        let b = ElementBox::from_client_top(-150.0, 300.0, &at(1000.0));
        assert_eq!(b.top, 850.0);
        assert_eq!(b.height, 300.0);
    }
}
