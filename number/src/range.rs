// Bounding and chunking helpers.

/// Upper bound on the number of pairs `pairs` will build.
const MAX_PAIRS: f64 = 16_777_216.0;

/// Clamps `number` between `min` and `max`.
///
/// Unlike `f64::clamp` this never panics: with `min > max` the lower bound is
/// checked first.
pub fn clamp(number: f64, min: f64, max: f64) -> f64 {
    if number < min {
        min
    } else if number > max {
        max
    } else {
        number
    }
}

/// Splits `0..to` into consecutive `[lower + offset, upper]` pairs of width `by`.
///
/// The last pair is cut short at `to`. A non-positive or non-finite `by`, a
/// non-finite `to`, or a range needing more than `MAX_PAIRS` pairs produces
/// no pairs.
pub fn pairs(to: f64, by: f64, offset: f64) -> Vec<[f64; 2]> {
    if !to.is_finite() || !by.is_finite() || by <= 0.0 {
        return Vec::new();
    }
    if to / by > MAX_PAIRS {
        tracing::debug!(to, by, "pair range too large");
        return Vec::new();
    }

    let mut output = Vec::new();
    let mut lower = 0.0;
    while lower < to {
        let upper = (lower + by).min(to);
        output.push([lower + offset, upper]);
        lower += by;
    }
    output
}
