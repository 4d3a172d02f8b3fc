use super::Color;
use crate::geometry::{RaUnit, Vector};

/// An astronomical object at fixed equatorial coordinates
///
/// `position` is computed once in [`CelestialBody::new`]. Editing the
/// coordinate fields afterwards does not move it; build a new body instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    /// Right ascension in degrees
    pub right_ascension: f64,
    /// Declination in degrees
    pub declination: f64,
    /// Distance, in any unit shared by bodies that are compared
    pub distance: f64,
    /// Visual magnitude; lower is brighter
    pub magnitude: f64,
    pub color: Color,
    position: Vector,
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        right_ascension: f64,
        declination: f64,
        distance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            right_ascension,
            declination,
            distance,
            magnitude: 0.0,
            color: Color::default(),
            position: Vector::from_spherical(
                right_ascension,
                declination,
                distance,
                RaUnit::Degrees,
            ),
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Cartesian position captured at construction
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Unit vector towards the body, zero if the body sits at the origin
    pub fn direction(&self) -> Vector {
        self.position.normalize()
    }

    /// Display size derived from magnitude: `max(1, 5 - magnitude)`
    ///
    /// Not clamped above: very bright objects grow without limit.
    pub fn visual_size(&self) -> f64 {
        (5.0 - self.magnitude).max(1.0)
    }

    /// Angular separation on the sky in degrees, ignoring distance
    pub fn angular_distance_to(&self, other: &CelestialBody) -> f64 {
        self.direction().angle_to(other.direction())
    }

    /// Straight-line separation between the two positions
    ///
    /// Only meaningful when both distances are in the same unit.
    pub fn physical_distance_to(&self, other: &CelestialBody) -> f64 {
        self.position.distance_to(other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sirius() -> CelestialBody {
        CelestialBody::new("Sirius", 101.287155, -16.716116, 8.6).with_magnitude(-1.46)
    }

    fn betelgeuse() -> CelestialBody {
        CelestialBody::new("Betelgeuse", 88.792939, 7.407064, 548.0).with_magnitude(0.42)
    }

    #[test]
    fn test_defaults() {
        let body = CelestialBody::new("Origin", 0.0, 0.0, 1.0);
        assert_eq!(body.magnitude, 0.0);
        assert_eq!(body.color, Color::WHITE);
        assert!(body.position().distance_to(Vector::new(1.0, 0.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_visual_size() {
        let body = |m: f64| CelestialBody::new("x", 0.0, 0.0, 1.0).with_magnitude(m);
        assert_eq!(body(0.0).visual_size(), 5.0);
        assert_eq!(body(10.0).visual_size(), 1.0);
        assert_eq!(body(4.0).visual_size(), 1.0);
        assert_eq!(body(2.5).visual_size(), 2.5);
        assert_eq!(body(-3.0).visual_size(), 8.0);
        assert_eq!(body(-26.74).visual_size(), 31.74);
    }

    #[test]
    fn test_position_is_a_snapshot() {
        let mut body = CelestialBody::new("Vega", 279.234735, 38.783689, 25.0);
        let before = body.position();
        body.right_ascension = 0.0;
        body.declination = 0.0;
        body.distance = 1.0;
        assert_eq!(body.position(), before);

        let rebuilt = CelestialBody::new(
            body.name.clone(),
            body.right_ascension,
            body.declination,
            body.distance,
        );
        assert!(rebuilt.position().distance_to(Vector::new(1.0, 0.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_builders_do_not_move_position() {
        let plain = CelestialBody::new("Mars", 45.0, 10.0, 1.5);
        let styled = plain
            .clone()
            .with_magnitude(-2.0)
            .with_color(Color::new(0xff, 0x44, 0x00));
        assert_eq!(plain.position(), styled.position());
    }

    #[test]
    fn test_same_direction_different_distance() {
        let near = CelestialBody::new("near", 120.0, -33.0, 4.0);
        let far = CelestialBody::new("far", 120.0, -33.0, 10.0);

        assert!(near.angular_distance_to(&far).abs() < 1e-5);
        assert!((near.physical_distance_to(&far) - 6.0).abs() < 1e-9);
        assert!((far.physical_distance_to(&near) - 6.0).abs() < 1e-9);

        let farther = CelestialBody::new("farther", 120.0, -33.0, 104.0);
        assert!(near.angular_distance_to(&farther).abs() < 1e-5);
        assert!((near.physical_distance_to(&farther) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_angular_distance() {
        let a = CelestialBody::new("a", 0.0, 0.0, 1.0);
        let b = CelestialBody::new("b", 90.0, 0.0, 1000.0);
        let c = CelestialBody::new("c", 0.0, 90.0, 0.5);
        assert!((a.angular_distance_to(&b) - 90.0).abs() < 1e-9);
        assert!((a.angular_distance_to(&c) - 90.0).abs() < 1e-9);

        let d = CelestialBody::new("d", 180.0, 0.0, 2.0);
        assert!((a.angular_distance_to(&d) - 180.0).abs() < 1e-9);

        // Known separation between Sirius and Betelgeuse is ~27.1 degrees
        let sep = sirius().angular_distance_to(&betelgeuse());
        assert!((sep - 27.1).abs() < 0.1, "separation {}", sep);
        assert!((sep - betelgeuse().angular_distance_to(&sirius())).abs() < 1e-12);
    }

    #[test]
    fn test_physical_distance() {
        let a = CelestialBody::new("a", 0.0, 0.0, 3.0);
        let b = CelestialBody::new("b", 90.0, 0.0, 4.0);
        assert!((a.physical_distance_to(&b) - 5.0).abs() < 1e-9);
        assert_eq!(a.physical_distance_to(&a), 0.0);
    }

    #[test]
    fn test_body_at_origin() {
        let here = CelestialBody::new("Earth", 10.0, 20.0, 0.0);
        let there = CelestialBody::new("Moon", 10.0, 20.0, 1.0);
        assert_eq!(here.direction(), Vector::zero());
        assert_eq!(here.angular_distance_to(&there), 0.0);
        assert!((here.physical_distance_to(&there) - 1.0).abs() < 1e-12);
    }
}
