//! Celestial bodies and directional lookups over collections of them

mod body;
mod color;
pub mod kdtree;
pub mod ranking;

pub use body::CelestialBody;
pub use color::Color;

use crate::Vector;

impl kdtree::KdPoint<3> for CelestialBody {
    fn point(&self) -> [f64; 3] {
        self.direction().into()
    }
}

/// KD-tree of bodies keyed on their unit direction vectors
pub type BodyKdTree = kdtree::KdTree<CelestialBody, 3>;

/// Chord length between two unit vectors separated by `angle_deg`
fn chord_from_angle_deg(angle_deg: f64) -> f64 {
    2.0 * (angle_deg.to_radians() / 2.0).sin()
}

impl BodyKdTree {
    /// Index bodies by direction
    ///
    /// Bodies at the origin have no direction and are left out.
    pub fn from_bodies(bodies: impl IntoIterator<Item = CelestialBody>) -> Self {
        let (indexable, dropped): (Vec<_>, Vec<_>) = bodies
            .into_iter()
            .partition(|b| b.position().length_squared() > 0.0);
        if !dropped.is_empty() {
            tracing::debug!(
                "Leaving {} zero-distance bodies out of the index",
                dropped.len()
            );
        }
        tracing::debug!("Indexing {} bodies", indexable.len());
        Self::build(indexable)
    }

    /// Closest body to a sky direction, with its angular distance in degrees
    pub fn nearest_body(&self, direction: Vector) -> Option<(&CelestialBody, f64)> {
        self.nearest_bodies(direction, 1).into_iter().next()
    }

    /// The `k` bodies closest to a direction, nearest first, with angular
    /// distances in degrees
    pub fn nearest_bodies(&self, direction: Vector, k: usize) -> Vec<(&CelestialBody, f64)> {
        let Some(query) = unit_query(direction) else {
            return Vec::new();
        };
        self.k_nearest(query.into(), k)
            .into_iter()
            .map(|(idx, _)| {
                let body = &self.items[idx];
                (body, query.angle_to(body.direction()))
            })
            .collect()
    }

    /// Bodies no more than `radius_deg` degrees from a direction
    ///
    /// A body is inside when the chord between unit directions is within
    /// `2 sin(radius / 2)`.
    pub fn bodies_within(&self, direction: Vector, radius_deg: f64) -> Vec<&CelestialBody> {
        if radius_deg < 0.0 {
            return Vec::new();
        }
        let Some(query) = unit_query(direction) else {
            return Vec::new();
        };

        if radius_deg >= 180.0 {
            return self.items.iter().collect();
        }

        self.radius_search(query.into(), chord_from_angle_deg(radius_deg))
            .into_iter()
            .map(|idx| &self.items[idx])
            .collect()
    }
}

fn unit_query(direction: Vector) -> Option<Vector> {
    let unit = direction.normalize();
    if unit.length_squared() == 0.0 {
        tracing::warn!("Query direction has zero length");
        return None;
    }
    Some(unit)
}
