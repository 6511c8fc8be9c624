//! Haversine distance and walking-time estimates.
//!
//! The viewer script in `render::script` carries a line-for-line JavaScript
//! copy of [`distance`] and [`walk_minutes`]; both read the constants below,
//! and [`DISTANCE_VECTORS`] pins the numbers both sides must agree on.

use crate::config::constants::{EARTH_RADIUS_METERS, MIN_WALK_MINUTES, WALKING_SPEED_M_PER_MIN};
use crate::data::location::{Coordinates, Location};
use crate::data::registry::LocationRegistry;

/// Great-circle distance in meters.
pub fn distance(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lon - a.lon).to_radians();

    let h = (delta_phi / 2.0).sin() * (delta_phi / 2.0).sin()
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin() * (delta_lambda / 2.0).sin();
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * central_angle
}

/// Minutes on foot at a constant walking pace, never less than one.
pub fn walk_minutes(meters: f64) -> u32 {
    // JS Math.round rounds halves up; f64::round rounds them away from zero.
    // Distances are non-negative so the two agree.
    let minutes = (meters / WALKING_SPEED_M_PER_MIN).round();
    (minutes as u32).max(MIN_WALK_MINUTES)
}

#[derive(Debug, Clone)]
pub struct DistanceEstimate<'a> {
    pub location: &'a Location,
    pub meters: f64,
    pub minutes: u32,
}

/// Distance from `origin` to every location, in registry order.
pub fn distances_from(origin: Coordinates, registry: &LocationRegistry) -> Vec<DistanceEstimate<'_>> {
    registry
        .iter()
        .map(|location| {
            let meters = distance(origin, location.get_coordinates());
            DistanceEstimate {
                location,
                meters,
                minutes: walk_minutes(meters),
            }
        })
        .collect()
}

/// (from, to, expected meters) shared by the native and embedded estimators.
pub const DISTANCE_VECTORS: &[((f64, f64), (f64, f64), f64)] = &[
    ((37.224750, -80.420909), (37.229637, -80.426111), 712.337),
    ((37.2284, -80.4234), (37.23113957256836, -80.42267514582704), 311.313),
    ((37.2284, -80.4234), (37.22351950716079, -80.42187920803231), 559.141),
    ((0.0, 0.0), (0.0, 180.0), 20_015_086.796),
];
