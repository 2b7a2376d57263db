//! Wireframe sphere geometry for the hero backdrop.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn rotate_x(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    pub fn rotate_y(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereStyle {
    pub scale: f64,
    /// Radial wobble amplitude as a fraction of the radius.
    pub distort: f64,
    /// Wobble speed multiplier.
    pub speed: f64,
    /// Radians per second about the x and y axes.
    pub spin_x: f64,
    pub spin_y: f64,
    /// Extra turntable rotation about y, radians per second.
    pub auto_rotate: f64,
}

impl Default for SphereStyle {
    fn default() -> Self {
        Self {
            scale: 2.5,
            distort: 0.4,
            speed: 2.0,
            spin_x: 0.2,
            spin_y: 0.3,
            // Orbit auto-rotate speed 0.5 is 0.5 / 60 turns per second.
            auto_rotate: 0.5 * std::f64::consts::TAU / 60.0,
        }
    }
}

/// Unit sphere sampled as latitude rings and longitude meridians.
#[derive(Clone, Debug)]
pub struct WireSphere {
    rings: Vec<Vec<Vec3>>,
}

impl WireSphere {
    pub fn new(latitudes: usize, longitudes: usize, samples: usize) -> Self {
        let latitudes = latitudes.max(1);
        let longitudes = longitudes.max(1);
        let samples = samples.max(3);
        let point = |theta: f64, phi: f64| {
            Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
        };
        let pi = std::f64::consts::PI;
        let tau = std::f64::consts::TAU;

        let mut rings = Vec::with_capacity(latitudes + longitudes);
        for i in 1..=latitudes {
            let phi = pi * i as f64 / (latitudes + 1) as f64;
            rings.push(
                (0..=samples)
                    .map(|s| point(tau * s as f64 / samples as f64, phi))
                    .collect(),
            );
        }
        for j in 0..longitudes {
            let theta = tau * j as f64 / longitudes as f64;
            rings.push(
                (0..=samples)
                    .map(|s| point(theta, pi * s as f64 / samples as f64))
                    .collect(),
            );
        }
        Self { rings }
    }

    pub fn rings(&self) -> &[Vec<Vec3>] {
        &self.rings
    }
}

/// Radial scale for a surface point at time `t`: smooth travelling waves so
/// the silhouette breathes rather than jitters.
pub fn distortion(point: &Vec3, t: f64, style: &SphereStyle) -> f64 {
    let phase = t * style.speed;
    let wave = (point.x * 2.0 + phase).sin() * (point.y * 2.0 + phase * 0.7).cos()
        + (point.z * 3.0 - phase * 0.5).sin() * 0.5;
    1.0 + style.distort * 0.25 * wave
}

/// Moves a unit-sphere point into world space at time `t`.
pub fn transform(point: &Vec3, t: f64, style: &SphereStyle) -> Vec3 {
    point
        .scaled(distortion(point, t, style) * style.scale)
        .rotate_x(t * style.spin_x)
        .rotate_y(t * style.spin_y + t * style.auto_rotate)
}

/// Camera looking down -z from `distance`, field of view `fov` radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 5.0,
            fov: 75.0_f64.to_radians(),
        }
    }
}

impl Camera {
    /// Projects to canvas pixels; `None` for points at or behind the camera.
    pub fn project(&self, point: &Vec3, width: f64, height: f64) -> Option<(f64, f64)> {
        let depth = self.distance - point.z;
        if depth <= 1e-6 {
            return None;
        }
        let focal = (height / 2.0) / (self.fov / 2.0).tan();
        Some((
            width / 2.0 + point.x * focal / depth,
            height / 2.0 - point.y * focal / depth,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_preserves_length() {
        let p = Vec3::new(0.3, -0.8, 0.52);
        let rotated = p.rotate_x(1.1).rotate_y(-2.4);
        assert!((rotated.length() - p.length()).abs() < 1e-12);
    }

    #[test]
    fn test_rings_lie_on_unit_sphere() {
        let sphere = WireSphere::new(8, 12, 32);
        assert_eq!(sphere.rings().len(), 20);
        for ring in sphere.rings() {
            assert_eq!(ring.len(), 33);
            for p in ring {
                assert!((p.length() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default();
        assert_eq!(
            camera.project(&Vec3::new(0.0, 0.0, 0.0), 800.0, 600.0),
            Some((400.0, 300.0))
        );
        assert_eq!(camera.project(&Vec3::new(0.0, 0.0, 6.0), 800.0, 600.0), None);
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let camera = Camera::default();
        let (_, y) = camera.project(&Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(y < 300.0);
    }

    #[test]
    fn test_distortion_bounded() {
        let style = SphereStyle::default();
        let sphere = WireSphere::new(6, 6, 16);
        for ring in sphere.rings() {
            for p in ring {
                for step in 0..50 {
                    let d = distortion(p, step as f64 * 0.37, &style);
                    assert!(d >= 1.0 - style.distort && d <= 1.0 + style.distort);
                }
            }
        }
    }

    #[test]
    fn test_undistorted_transform_is_rotation_and_scale() {
        let style = SphereStyle {
            distort: 0.0,
            ..SphereStyle::default()
        };
        let p = Vec3::new(0.0, 1.0, 0.0);
        let world = transform(&p, 3.0, &style);
        assert!((world.length() - style.scale).abs() < 1e-9);
    }
}
