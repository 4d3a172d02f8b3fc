//! Batch distance queries for ordering bodies relative to a reference
//!
//! Distances are evaluated in parallel on the rayon global pool. Results
//! keep the input order, and rankings are stable so equal distances
//! stay in input order.

use rayon::prelude::*;

use super::CelestialBody;

/// Angular distance in degrees from `reference` to every body, in input order
pub fn angular_distances(bodies: &[CelestialBody], reference: &CelestialBody) -> Vec<f64> {
    tracing::trace!("Computing {} angular distances", bodies.len());
    bodies
        .par_iter()
        .map(|body| reference.angular_distance_to(body))
        .collect()
}

/// Physical distance from `reference` to every body, in input order
pub fn physical_distances(bodies: &[CelestialBody], reference: &CelestialBody) -> Vec<f64> {
    tracing::trace!("Computing {} physical distances", bodies.len());
    bodies
        .par_iter()
        .map(|body| reference.physical_distance_to(body))
        .collect()
}

fn rank(distances: Vec<f64>) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = distances.into_iter().enumerate().collect();
    ranked.par_sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

/// (index, degrees) pairs sorted by angular distance from `reference`
pub fn rank_by_angular_distance(
    bodies: &[CelestialBody],
    reference: &CelestialBody,
) -> Vec<(usize, f64)> {
    rank(angular_distances(bodies, reference))
}

/// (index, distance) pairs sorted by physical distance from `reference`
pub fn rank_by_physical_distance(
    bodies: &[CelestialBody],
    reference: &CelestialBody,
) -> Vec<(usize, f64)> {
    rank(physical_distances(bodies, reference))
}

/// Bodies ordered brightest (lowest magnitude) first
pub fn sort_by_brightness(bodies: &[CelestialBody]) -> Vec<&CelestialBody> {
    let mut sorted: Vec<&CelestialBody> = bodies.iter().collect();
    sorted.par_sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies() -> Vec<CelestialBody> {
        vec![
            CelestialBody::new("Sirius", 101.287155, -16.716116, 8.6).with_magnitude(-1.46),
            CelestialBody::new("Betelgeuse", 88.792939, 7.407064, 548.0).with_magnitude(0.42),
            CelestialBody::new("Rigel", 78.634467, -8.201638, 863.0).with_magnitude(0.13),
            CelestialBody::new("Polaris", 37.95456, 89.264108, 433.0).with_magnitude(1.98),
            CelestialBody::new("Procyon", 114.825493, 5.224993, 11.46).with_magnitude(0.34),
        ]
    }

    #[test]
    fn test_distances_keep_input_order() {
        let bodies = bodies();
        let reference = &bodies[0];
        let angular = angular_distances(&bodies, reference);
        let physical = physical_distances(&bodies, reference);
        assert_eq!(angular.len(), bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            assert_eq!(angular[i], reference.angular_distance_to(body));
            assert_eq!(physical[i], reference.physical_distance_to(body));
        }
    }

    #[test]
    fn test_rank_by_angular_distance() {
        let bodies = bodies();
        let ranked = rank_by_angular_distance(&bodies, &bodies[0]);
        assert_eq!(ranked[0].0, 0);
        assert!(ranked[0].1.abs() < 1e-5);
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
        // Rigel is the closest neighbour of Sirius on the sky
        assert_eq!(bodies[ranked[1].0].name, "Rigel");
        assert_eq!(bodies[ranked.last().unwrap().0].name, "Polaris");
    }

    #[test]
    fn test_rank_by_physical_distance() {
        let bodies = bodies();
        let ranked = rank_by_physical_distance(&bodies, &bodies[0]);
        assert_eq!(ranked[0], (0, 0.0));
        assert_eq!(bodies[ranked[1].0].name, "Procyon");
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_ranking_is_stable() {
        let twins: Vec<CelestialBody> = (0..32)
            .map(|i| CelestialBody::new(format!("twin-{i}"), 45.0, 45.0, 10.0))
            .collect();
        let reference = CelestialBody::new("ref", 0.0, 0.0, 1.0);
        let ranked = rank_by_physical_distance(&twins, &reference);
        let order: Vec<usize> = ranked.iter().map(|r| r.0).collect();
        assert_eq!(order, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_by_brightness() {
        let bodies = bodies();
        let names: Vec<&str> = sort_by_brightness(&bodies)
            .into_iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Sirius", "Rigel", "Procyon", "Betelgeuse", "Polaris"]
        );
    }

    #[test]
    fn test_empty_input() {
        let reference = CelestialBody::new("ref", 0.0, 0.0, 1.0);
        assert!(rank_by_angular_distance(&[], &reference).is_empty());
        assert!(sort_by_brightness(&[]).is_empty());
    }
}
