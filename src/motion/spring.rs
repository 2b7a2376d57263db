use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpringConfigError {
    #[error("spring {field} must be a finite number above zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("spring damping must be finite and non-negative, got {0}")]
    NegativeDamping(f64),
}

/// Parameters for the damped spring that smooths scroll-driven values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Force opposing velocity.
    pub damping: f64,
    pub mass: f64,
    /// Distance to target below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Used by every scroll-linked value on the site.
    pub const SCROLL: Self = Self {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };

    /// Rejects parameters that would make the simulation diverge or never
    /// come to rest.
    pub fn validate(&self) -> Result<(), SpringConfigError> {
        for (field, value) in [
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SpringConfigError::NotPositive { field, value });
            }
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(SpringConfigError::NegativeDamping(self.damping));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SCROLL
    }
}

// Integration step; stable for the stiffness range used here.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
// A dropped frame or a background tab must not launch the spring.
const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jumps straight to `value` with no motion.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advances the simulation by `dt` seconds. Returns `true` while the
    /// spring is still moving; once at rest further ticks change nothing
    /// until the target moves again.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.at_rest {
            return false;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let spring_force = -self.config.stiffness * (self.position - self.target);
            let damping_force = -self.config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / self.config.mass;
            // Semi-implicit Euler
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
        !self.at_rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_converges_and_snaps_to_target() {
        let mut spring = Spring::new(0.0, SpringConfig::SCROLL);
        spring.set_target(1.0);
        run(&mut spring, 600);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_idle_after_convergence() {
        let mut spring = Spring::new(50.0, SpringConfig::SCROLL);
        spring.set_target(0.0);
        run(&mut spring, 900);
        assert!(spring.is_at_rest());
        let before = spring.value();
        assert!(!spring.tick(1.0 / 60.0));
        assert_eq!(spring.value(), before);
    }

    #[test]
    fn test_moves_towards_target_without_snapping() {
        let mut spring = Spring::new(0.0, SpringConfig::SCROLL);
        spring.set_target(1.0);
        assert!(spring.tick(1.0 / 60.0));
        let first = spring.value();
        assert!(first > 0.0 && first < 1.0, "got {}", first);
        spring.tick(1.0 / 60.0);
        assert!(spring.value() > first);
    }

    #[test]
    fn test_overdamped_default_does_not_overshoot() {
        let mut spring = Spring::new(0.0, SpringConfig::SCROLL);
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.tick(1.0 / 60.0);
            assert!(spring.value() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_retarget_wakes_spring() {
        let mut spring = Spring::new(0.0, SpringConfig::SCROLL);
        assert!(!spring.tick(1.0 / 60.0));
        spring.set_target(0.5);
        assert!(!spring.is_at_rest());
        assert!(spring.tick(1.0 / 60.0));
    }

    #[test]
    fn test_huge_frame_gap_is_capped() {
        let mut capped = Spring::new(0.0, SpringConfig::SCROLL);
        capped.set_target(1.0);
        capped.tick(5.0);
        let mut reference = Spring::new(0.0, SpringConfig::SCROLL);
        reference.set_target(1.0);
        reference.tick(MAX_FRAME_SECS);
        assert!((capped.value() - reference.value()).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        assert_eq!(SpringConfig::SCROLL.validate(), Ok(()));
        let zero_mass = SpringConfig {
            mass: 0.0,
            ..SpringConfig::SCROLL
        };
        assert_eq!(
            zero_mass.validate(),
            Err(SpringConfigError::NotPositive {
                field: "mass",
                value: 0.0
            })
        );
        let no_stiffness = SpringConfig {
            stiffness: -5.0,
            ..SpringConfig::SCROLL
        };
        assert!(matches!(
            no_stiffness.validate(),
            Err(SpringConfigError::NotPositive { field: "stiffness", .. })
        ));
        let undamped = SpringConfig {
            damping: 0.0,
            ..SpringConfig::SCROLL
        };
        assert_eq!(undamped.validate(), Ok(()));
        let bad_damping = SpringConfig {
            damping: f64::NAN,
            ..SpringConfig::SCROLL
        };
        assert!(matches!(
            bad_damping.validate(),
            Err(SpringConfigError::NegativeDamping(_))
        ));
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(0.0, SpringConfig::SCROLL);
        spring.set_target(1.0);
        spring.tick(1.0 / 60.0);
        spring.snap_to(0.25);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 0.25);
        assert!(!spring.tick(1.0 / 60.0));
        assert_eq!(spring.value(), 0.25);
    }
}
