//! Synthetic GPS track along a route.
//!
//! The track visits each step anchor in order, sampled every `spacing_m`
//! metres, with every fix displaced by uniform noise of up to `jitter_m`
//! metres north and east to mimic consumer GPS.

use rand::Rng;
use rand::rngs::SmallRng;

use tbt_core::Coordinate;
use tbt_route::Route;

/// Evenly spaced points along the polyline through all step anchors.
pub fn sample_anchors(route: &Route, spacing_m: f64) -> Vec<Coordinate> {
    let anchors: Vec<Coordinate> = route.steps().iter().map(|s| s.anchor).collect();
    let Some(&first) = anchors.first() else {
        return Vec::new();
    };

    let mut points = vec![first];
    for pair in anchors.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let segments = (a.distance_m(b) / spacing_m).ceil().max(1.0) as usize;
        for i in 1..=segments {
            points.push(a.lerp(b, i as f64 / segments as f64));
        }
    }
    points
}

/// Displace each point by up to `jitter_m` metres on both axes.
pub fn jitter(points: &[Coordinate], rng: &mut SmallRng, jitter_m: f64) -> Vec<Coordinate> {
    if jitter_m <= 0.0 {
        return points.to_vec();
    }
    points
        .iter()
        .map(|p| p.offset_m(rng.gen_range(-jitter_m..=jitter_m), rng.gen_range(-jitter_m..=jitter_m)))
        .collect()
}
