//! Relationships between the true, eccentric, and mean anomalies
//! of an elliptic orbit.
//!
//! These are closed-form; nothing in here iterates on Kepler's equation.
//!
//! All angles are in radians. The eccentricity is expected to be in
//! the elliptic range `[0, 1)`; outside of it the half-angle forms take
//! the square root of a negative number and return `NaN`.

use crate::math::{atan, sin, sqrt, tan};

/// Gets the eccentric anomaly at a given true anomaly.
///
/// Uses the half-angle identity:
/// ```text
/// tan(E / 2) = sqrt((1 - e) / (1 + e)) * tan(v / 2)
/// ```
/// ...where `E` is the eccentric anomaly, `v` the true anomaly, and `e`
/// the eccentricity.
///
/// For a true anomaly in (-pi, pi), the result is in (-pi, pi) as well and
/// lies in the same half of the orbit.
///
/// This is the exact inverse of [`true_anomaly_at_eccentric_anomaly`].
///
/// # Example
/// ```
/// use kepler_convert::anomaly::eccentric_anomaly_at_true_anomaly;
///
/// // Circular orbits have all three anomalies equal
/// assert!((eccentric_anomaly_at_true_anomaly(1.25, 0.0) - 1.25).abs() < 1e-15);
/// ```
pub fn eccentric_anomaly_at_true_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let ratio = sqrt((1.0 - eccentricity) / (1.0 + eccentricity));

    2.0 * atan(ratio * tan(true_anomaly * 0.5))
}

/// Gets the true anomaly at a given eccentric anomaly.
///
/// Uses the half-angle identity:
/// ```text
/// tan(v / 2) = sqrt((1 + e) / (1 - e)) * tan(E / 2)
/// ```
///
/// Note the ratio is the reciprocal of the one in
/// [`eccentric_anomaly_at_true_anomaly`]. Swapping the two ratios gives a
/// plausible-looking but wrong anomaly for every non-circular orbit.
pub fn true_anomaly_at_eccentric_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let ratio = sqrt((1.0 + eccentricity) / (1.0 - eccentricity));

    2.0 * atan(ratio * tan(eccentric_anomaly * 0.5))
}

/// Gets the mean anomaly at a given eccentric anomaly, using Kepler's equation:
/// ```text
/// M = E - e sin E
/// ```
///
/// <https://en.wikipedia.org/wiki/Kepler%27s_equation#Equation>
#[inline]
pub fn mean_anomaly_at_eccentric_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * sin(eccentric_anomaly)
}

/// Gets the mean motion (average angular rate) of an elliptic orbit.
///
/// `n = sqrt(mu / a^3)`
///
/// The result is in radians per unit of time implied by `mu`.
#[inline]
pub fn mean_motion(mu: f64, semi_major_axis: f64) -> f64 {
    sqrt(mu / (semi_major_axis * semi_major_axis * semi_major_axis))
}
