use super::interpolate::{ControlPoints, CurveError, Inset};
use super::spring::{Spring, SpringConfig};

/// Progress stops shared by the scroll-linked entrance curves.
const STOPS: [f64; 4] = [0.0, 0.2, 0.9, 1.0];
const SLIDE_DISTANCE: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which entrance a block plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preset {
    /// Fade, scale up and slide in, following scroll position.
    Slide(Direction),
    /// Wipe in from the left by clipping the right edge.
    Clip,
    /// Fade in and rise `distance` pixels once the block is in view.
    FadeUp { distance: f64 },
    /// Fade in and grow from 80% once the block is in view.
    Zoom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Offscreen,
    Entering,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    /// Progress drives the curves directly.
    Scrub,
    /// Any progress at all plays the whole curve.
    Threshold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Property {
    Opacity,
    X,
    Y,
    Scale,
}

#[derive(Clone, Debug)]
enum Channel {
    Number {
        property: Property,
        curve: ControlPoints<f64>,
        spring: Spring,
    },
    Clip {
        curve: ControlPoints<Inset>,
        value: Inset,
    },
}

/// Computed style for one frame. Unset properties are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealStyle {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub clip: Option<Inset>,
}

impl RevealStyle {
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            css.push_str(&format!("opacity: {:.4};", opacity));
        }
        if self.x.is_some() || self.y.is_some() || self.scale.is_some() {
            css.push_str(&format!(
                " transform: translate3d({:.3}px, {:.3}px, 0) scale({:.4});",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0),
                self.scale.unwrap_or(1.0)
            ));
        }
        if let Some(clip) = &self.clip {
            let clip = clip.to_css();
            css.push_str(&format!(" clip-path: {}; -webkit-clip-path: {};", clip, clip));
        }
        css.trim_start().to_string()
    }
}

/// Entrance animation for one block: scroll progress in, style out.
///
/// Progress is latched at its highest value, so a block that has entered
/// never plays backwards when the page scrolls up again.
#[derive(Clone, Debug)]
pub struct RevealAnimation {
    channels: Vec<Channel>,
    trigger: Trigger,
    phase: RevealPhase,
    latched: f64,
    settle_threshold: f64,
    delay: f64,
    entering_for: f64,
}

impl RevealAnimation {
    pub fn new(preset: Preset, config: SpringConfig, delay: f64) -> Result<Self, CurveError> {
        let number = |property, outputs: &[f64]| -> Result<Channel, CurveError> {
            let inputs: &[f64] = if outputs.len() == STOPS.len() { &STOPS } else { &[0.0, 1.0] };
            let curve = ControlPoints::from_slices(inputs, outputs)?;
            let spring = Spring::new(*curve.first(), config);
            Ok(Channel::Number {
                property,
                curve,
                spring,
            })
        };

        let (channels, trigger) = match preset {
            Preset::Slide(direction) => {
                let d = SLIDE_DISTANCE;
                let y = match direction {
                    Direction::Down => -d,
                    _ => d,
                };
                let x = match direction {
                    Direction::Left => d,
                    Direction::Right => -d,
                    _ => 0.0,
                };
                (
                    vec![
                        number(Property::Opacity, &[0.0, 1.0, 1.0, 1.0])?,
                        number(Property::Y, &[y, 0.0, 0.0, 0.0])?,
                        number(Property::X, &[x, 0.0, 0.0, 0.0])?,
                        number(Property::Scale, &[0.8, 1.0, 1.0, 1.0])?,
                    ],
                    Trigger::Scrub,
                )
            }
            Preset::Clip => {
                let curve = ControlPoints::from_slices(
                    &STOPS,
                    &[Inset::right(100.0), Inset::NONE, Inset::NONE, Inset::NONE],
                )?;
                let value = *curve.first();
                (vec![Channel::Clip { curve, value }], Trigger::Scrub)
            }
            Preset::FadeUp { distance } => (
                vec![
                    number(Property::Opacity, &[0.0, 1.0])?,
                    number(Property::Y, &[distance, 0.0])?,
                ],
                Trigger::Threshold,
            ),
            Preset::Zoom => (
                vec![
                    number(Property::Opacity, &[0.0, 1.0])?,
                    number(Property::Scale, &[0.8, 1.0])?,
                ],
                Trigger::Threshold,
            ),
        };

        Ok(Self {
            channels,
            trigger,
            phase: RevealPhase::Offscreen,
            latched: 0.0,
            settle_threshold: 1.0,
            delay: delay.max(0.0),
            entering_for: 0.0,
        })
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// True once the block has settled and nothing is moving. A finished
    /// animation never changes again.
    pub fn is_finished(&self) -> bool {
        self.phase == RevealPhase::Settled && self.springs_at_rest()
    }

    fn springs_at_rest(&self) -> bool {
        self.channels.iter().all(|channel| match channel {
            Channel::Number { spring, .. } => spring.is_at_rest(),
            Channel::Clip { .. } => true,
        })
    }

    /// Feeds the latest scroll progress and advances the springs by `dt`
    /// seconds. Returns `true` while more frames are needed without further
    /// scrolling.
    pub fn update(&mut self, progress: f64, dt: f64) -> bool {
        let progress = match self.trigger {
            Trigger::Scrub => progress,
            Trigger::Threshold if progress > 0.0 => 1.0,
            Trigger::Threshold => 0.0,
        };
        if progress > self.latched {
            self.latched = progress;
        }
        self.phase = if self.latched >= self.settle_threshold {
            RevealPhase::Settled
        } else if self.latched > 0.0 {
            RevealPhase::Entering
        } else {
            RevealPhase::Offscreen
        };

        if self.phase != RevealPhase::Offscreen {
            self.entering_for += dt;
        }
        let released = self.phase != RevealPhase::Offscreen && self.entering_for >= self.delay;

        let latched = self.latched;
        for channel in &mut self.channels {
            match channel {
                Channel::Number { curve, spring, .. } => {
                    if released {
                        spring.set_target(curve.sample(latched));
                    }
                    spring.tick(dt);
                }
                Channel::Clip { curve, value } => {
                    if released {
                        *value = curve.sample(latched);
                    }
                }
            }
        }

        let waiting = self.phase != RevealPhase::Offscreen && !released;
        waiting || !self.springs_at_rest()
    }

    pub fn style(&self) -> RevealStyle {
        let mut style = RevealStyle::default();
        for channel in &self.channels {
            match channel {
                Channel::Number {
                    property, spring, ..
                } => {
                    let value = Some(spring.value());
                    match property {
                        Property::Opacity => style.opacity = value,
                        Property::X => style.x = value,
                        Property::Y => style.y = value,
                        Property::Scale => style.scale = value,
                    }
                }
                Channel::Clip { value, .. } => style.clip = Some(*value),
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn slide(direction: Direction) -> RevealAnimation {
        RevealAnimation::new(Preset::Slide(direction), SpringConfig::SCROLL, 0.0).unwrap()
    }

    fn settle(anim: &mut RevealAnimation, progress: f64) {
        for _ in 0..1200 {
            anim.update(progress, FRAME);
        }
    }

    #[test]
    fn test_starts_offscreen_with_initial_style() {
        let anim = slide(Direction::Up);
        assert_eq!(anim.phase(), RevealPhase::Offscreen);
        let style = anim.style();
        assert_eq!(style.opacity, Some(0.0));
        assert_eq!(style.y, Some(50.0));
        assert_eq!(style.x, Some(0.0));
        assert_eq!(style.scale, Some(0.8));
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(slide(Direction::Down).style().y, Some(-50.0));
        assert_eq!(slide(Direction::Left).style().x, Some(50.0));
        assert_eq!(slide(Direction::Right).style().x, Some(-50.0));
        assert_eq!(slide(Direction::Right).style().y, Some(50.0));
    }

    #[test]
    fn test_phases_advance() {
        let mut anim = slide(Direction::Up);
        anim.update(0.0, FRAME);
        assert_eq!(anim.phase(), RevealPhase::Offscreen);
        anim.update(0.4, FRAME);
        assert_eq!(anim.phase(), RevealPhase::Entering);
        anim.update(1.0, FRAME);
        assert_eq!(anim.phase(), RevealPhase::Settled);
    }

    #[test]
    fn test_settles_on_final_outputs_and_stops() {
        let mut anim = slide(Direction::Left);
        settle(&mut anim, 1.0);
        assert!(anim.is_finished());
        let style = anim.style();
        assert_eq!(style.opacity, Some(1.0));
        assert_eq!(style.x, Some(0.0));
        assert_eq!(style.y, Some(0.0));
        assert_eq!(style.scale, Some(1.0));
        assert!(!anim.update(1.0, FRAME));
    }

    #[test]
    fn test_does_not_reverse_on_scroll_up() {
        let mut anim = slide(Direction::Up);
        settle(&mut anim, 1.0);
        settle(&mut anim, 0.0);
        assert_eq!(anim.phase(), RevealPhase::Settled);
        assert_eq!(anim.style().opacity, Some(1.0));

        let mut partial = slide(Direction::Up);
        settle(&mut partial, 0.1);
        let shown = partial.style().opacity.unwrap();
        settle(&mut partial, 0.05);
        assert_eq!(partial.phase(), RevealPhase::Entering);
        assert_eq!(partial.style().opacity.unwrap(), shown);
    }

    #[test]
    fn test_offscreen_needs_no_frames() {
        let mut anim = slide(Direction::Up);
        assert!(!anim.update(0.0, FRAME));
        assert_eq!(anim.style().opacity, Some(0.0));
    }

    #[test]
    fn test_delay_holds_initial_values() {
        let mut anim =
            RevealAnimation::new(Preset::Slide(Direction::Up), SpringConfig::SCROLL, 0.5).unwrap();
        for _ in 0..10 {
            assert!(anim.update(1.0, FRAME));
        }
        assert_eq!(anim.style().opacity, Some(0.0));
        settle(&mut anim, 1.0);
        assert_eq!(anim.style().opacity, Some(1.0));
    }

    #[test]
    fn test_clip_reveal_is_unsmoothed() {
        let mut anim = RevealAnimation::new(Preset::Clip, SpringConfig::SCROLL, 0.0).unwrap();
        assert_eq!(anim.style().clip, Some(Inset::right(100.0)));
        assert!(!anim.update(0.1, FRAME));
        assert_eq!(anim.style().clip, Some(Inset::right(50.0)));
        anim.update(1.0, FRAME);
        assert!(anim.is_finished());
        assert_eq!(anim.style().clip, Some(Inset::NONE));
    }

    #[test]
    fn test_threshold_presets_play_fully() {
        let mut anim =
            RevealAnimation::new(Preset::FadeUp { distance: 20.0 }, SpringConfig::SCROLL, 0.0)
                .unwrap();
        assert_eq!(anim.style().y, Some(20.0));
        anim.update(0.01, FRAME);
        assert_eq!(anim.phase(), RevealPhase::Settled);
        settle(&mut anim, 0.0);
        assert_eq!(anim.style().opacity, Some(1.0));
        assert_eq!(anim.style().y, Some(0.0));

        let zoom = RevealAnimation::new(Preset::Zoom, SpringConfig::SCROLL, 0.0).unwrap();
        assert_eq!(zoom.style().scale, Some(0.8));
        assert_eq!(zoom.style().y, None);
    }

    #[test]
    fn test_style_css() {
        let style = RevealStyle {
            opacity: Some(0.5),
            y: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            style.to_css(),
            "opacity: 0.5000; transform: translate3d(0.000px, 10.000px, 0) scale(1.0000);"
        );
        let clip = RevealStyle {
            clip: Some(Inset::NONE),
            ..Default::default()
        };
        assert_eq!(
            clip.to_css(),
            "clip-path: inset(0% 0% 0% 0%); -webkit-clip-path: inset(0% 0% 0% 0%);"
        );
    }
}
