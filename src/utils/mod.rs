pub mod logging;

/// Rounds to three decimal places, the precision every reported score uses.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
