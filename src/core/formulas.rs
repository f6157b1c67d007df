//! Distance, speed and calorie formulas.
//!
//! Every function here is pure arithmetic over plain numbers. Durations are in
//! hours, weights in kilograms, speeds in km/h and distances in km.

/// Step length for running and walking (meters).
pub const LEN_STEP: f64 = 0.65;

/// Stroke length for swimming (meters).
pub const LEN_STROKE: f64 = 1.38;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Conversion factor from km/h to m/s.
pub const KMH_IN_MSEC: f64 = 0.278;

/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance covered for `action` steps or strokes of `step_len` meters.
pub fn distance_km(action: f64, step_len: f64) -> f64 {
    action * step_len / M_IN_KM
}

/// Mean speed over the whole workout.
///
/// Duration is not checked; zero yields infinity or NaN.
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Swimming speed from the pool geometry rather than the stroke count.
pub fn pool_speed_kmh(pool_length_m: f64, pool_count: f64, duration_h: f64) -> f64 {
    pool_length_m * pool_count / M_IN_KM / duration_h
}

pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * speed_kmh + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_h
        * MIN_IN_H
}

/// Sports walking calories; height is taken in centimeters.
pub fn walking_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let speed_ms = speed_kmh * KMH_IN_MSEC;
    let height_m = height_cm / CM_IN_M;
    (WALK_WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms * speed_ms / height_m) * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * MIN_IN_H
        * duration_h
}

pub fn swimming_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (speed_kmh + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg * duration_h
}
