use core::f64::consts::TAU;

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anomaly::{
    mean_anomaly_at_eccentric_anomaly, mean_motion, true_anomaly_at_eccentric_anomaly,
};
use crate::error::{check_mu, rejected};
use crate::math::{cos, sin, sqrt, wrap_angle};
use crate::{ConversionError, DegenerateOrbitCause, StateVectors};

const CONVERSION: &str = "elements to state vectors";

/// A set of classical (Keplerian) orbital elements describing an
/// elliptic orbit together with a position along it.
///
/// # Example
/// ```
/// use kepler_convert::OrbitalElements;
///
/// let elements = OrbitalElements::new(
///     // Semi-major axis
///     1.0,
///
///     // Eccentricity
///     0.0,
///
///     // Inclination
///     0.0,
///
///     // Argument of periapsis
///     0.0,
///
///     // Longitude of ascending node
///     0.0,
///
///     // Time of periapsis passage
///     0.0,
///
///     // Eccentric anomaly
///     0.0,
/// );
///
/// assert!(elements.is_elliptic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    /// The semi-major axis of the orbit, in meters.
    ///
    /// Half of the longest diameter of the ellipse.
    pub semi_major_axis: f64,

    /// The eccentricity of the orbit.
    /// e = 0: circle
    /// 0 < e < 1: ellipse
    ///
    /// See more: <https://en.wikipedia.org/wiki/Orbital_eccentricity>
    pub eccentricity: f64,

    /// The inclination of the orbit, in radians, within `[0, pi]`.
    pub inclination: f64,

    /// The argument of periapsis of the orbit, in radians.
    ///
    /// The angle from the ascending node to the periapsis, measured in
    /// the direction of motion. For equatorial orbits converted with
    /// [`EquatorialMode::LongitudeOfPeriapsis`][crate::EquatorialMode::LongitudeOfPeriapsis],
    /// this is the longitude of periapsis instead.
    pub arg_pe: f64,

    /// The longitude of ascending node of the orbit, in radians.
    ///
    /// The angle from the reference X axis to the point where the orbit
    /// crosses the reference plane going "up".
    pub long_asc_node: f64,

    /// The time of periapsis passage, in the same time unit as the epoch.
    pub periapsis_time: f64,

    /// The eccentric anomaly of the body on the orbit, in radians.
    ///
    /// <https://en.wikipedia.org/wiki/Eccentric_anomaly>
    pub eccentric_anomaly: f64,
}

impl OrbitalElements {
    /// Creates a new set of orbital elements.
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        periapsis_time: f64,
        eccentric_anomaly: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            periapsis_time,
            eccentric_anomaly,
        }
    }

    /// Whether the elements describe an elliptic orbit:
    /// `0 <= e < 1` and `a > 0`.
    pub fn is_elliptic(&self) -> bool {
        (0.0..1.0).contains(&self.eccentricity) && self.semi_major_axis > 0.0
    }

    /// Whether every element is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.arg_pe,
            self.long_asc_node,
            self.periapsis_time,
            self.eccentric_anomaly,
        ]
        .iter()
        .all(|x| x.is_finite())
    }

    /// Checks that the elements can be turned into state vectors.
    ///
    /// # Errors
    /// - [`ConversionError::DegenerateOrbit`] if an element is non-finite.
    /// - [`ConversionError::UnsupportedOrbitType`] if the orbit is not elliptic.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !self.is_finite() {
            return Err(DegenerateOrbitCause::NonFinite.into());
        }

        if !self.is_elliptic() {
            return Err(ConversionError::UnsupportedOrbitType {
                eccentricity: self.eccentricity,
                semi_major_axis: self.semi_major_axis,
            });
        }

        Ok(())
    }

    /// Gets the semi-latus rectum of the orbit, `p = a (1 - e^2)`.
    ///
    /// <https://en.wikipedia.org/wiki/Ellipse#Semi-latus_rectum>
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Gets the mean motion of the orbit, `n = sqrt(mu / a^3)`.
    pub fn mean_motion(&self, mu: f64) -> f64 {
        mean_motion(mu, self.semi_major_axis)
    }

    /// Gets the time it takes to complete one revolution.
    pub fn orbital_period(&self, mu: f64) -> f64 {
        TAU / self.mean_motion(mu)
    }

    /// Gets the true anomaly matching the stored eccentric anomaly.
    pub fn true_anomaly(&self) -> f64 {
        true_anomaly_at_eccentric_anomaly(self.eccentric_anomaly, self.eccentricity)
    }

    /// Gets the mean anomaly matching the stored eccentric anomaly,
    /// through Kepler's equation.
    pub fn mean_anomaly(&self) -> f64 {
        mean_anomaly_at_eccentric_anomaly(self.eccentric_anomaly, self.eccentricity)
    }

    /// Gets the mean anomaly at a given time, from the time of periapsis
    /// passage: `M = n (t - T)`.
    ///
    /// This is not wrapped; it grows by `2 pi` every revolution.
    pub fn mean_anomaly_at_time(&self, mu: f64, t: f64) -> f64 {
        self.mean_motion(mu) * (t - self.periapsis_time)
    }

    /// Gets how far the stored eccentric anomaly is from the one the
    /// body would have at time `t`, as a mean anomaly difference wrapped
    /// to `(-pi, pi]`.
    ///
    /// This is zero when the eccentric anomaly has been advanced to `t`.
    /// [`to_state_vectors`][Self::to_state_vectors] always trusts the
    /// stored eccentric anomaly, so a non-zero drift means the returned
    /// state is not the state at `t`.
    pub fn mean_anomaly_drift(&self, mu: f64, t: f64) -> f64 {
        wrap_angle(self.mean_anomaly_at_time(mu, t) - self.mean_anomaly())
    }

    /// Converts the orbital elements into state vectors at epoch `t`.
    ///
    /// The position along the orbit comes from the stored
    /// [eccentric anomaly][Self::eccentric_anomaly]; it is not re-solved
    /// from Kepler's equation. Callers who want to move the body along its
    /// orbit should advance the eccentric anomaly themselves first, see
    /// [`mean_anomaly_drift`][Self::mean_anomaly_drift].
    ///
    /// # Errors
    /// - [`ConversionError::UnsupportedOrbitType`] if `e >= 1`, `e < 0`, or `a <= 0`.
    /// - [`ConversionError::DegenerateOrbit`] if an element or `t` is non-finite.
    /// - [`ConversionError::InvalidGravitationalParameter`] if `mu` isn't positive.
    ///
    /// # Example
    /// ```
    /// use glam::DVec3;
    /// use kepler_convert::OrbitalElements;
    ///
    /// let elements = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// let sv = elements.to_state_vectors(1.0, 0.0).unwrap();
    ///
    /// assert_eq!(sv.position, DVec3::new(1.0, 0.0, 0.0));
    /// assert_eq!(sv.velocity, DVec3::new(0.0, 1.0, 0.0));
    /// ```
    pub fn to_state_vectors(&self, mu: f64, t: f64) -> Result<StateVectors, ConversionError> {
        tracing::trace!(elements = ?self, mu, t, "converting orbital elements to state vectors");

        let reject = |error: ConversionError| rejected(CONVERSION, error);

        check_mu(mu).map_err(reject)?;
        self.validate().map_err(reject)?;

        if !t.is_finite() {
            return Err(reject(DegenerateOrbitCause::NonFinite.into()));
        }

        let semi_major_axis = self.semi_major_axis;
        let eccentricity = self.eccentricity;
        let eccentric_anomaly = self.eccentric_anomaly;

        // Steps 1 & 2: Mean anomaly at t, against the one implied by
        // the eccentric anomaly
        tracing::trace!(
            mean_anomaly = self.mean_anomaly_at_time(mu, t),
            mean_anomaly_at_eccentric_anomaly = self.mean_anomaly(),
            drift = self.mean_anomaly_drift(mu, t),
            "mean anomaly consistency"
        );

        // Step 3: True anomaly
        let true_anomaly = true_anomaly_at_eccentric_anomaly(eccentric_anomaly, eccentricity);

        // Step 4: Radius
        let radius = semi_major_axis * (1.0 - eccentricity * cos(eccentric_anomaly));

        // Step 5: Specific angular momentum
        let _1me2 = 1.0 - eccentricity * eccentricity;
        let angular_momentum = sqrt(mu * semi_major_axis * _1me2);

        // Step 6: Position, rotating from the perifocal frame
        let arg_lat = self.arg_pe + true_anomaly;
        let (sin_lan, cos_lan) = (sin(self.long_asc_node), cos(self.long_asc_node));
        let (sin_lat, cos_lat) = (sin(arg_lat), cos(arg_lat));
        let (sin_inc, cos_inc) = (sin(self.inclination), cos(self.inclination));

        let position = radius
            * DVec3::new(
                cos_lan * cos_lat - sin_lan * sin_lat * cos_inc,
                sin_lan * cos_lat + cos_lan * sin_lat * cos_inc,
                sin_inc * sin_lat,
            );

        // Step 7: Velocity, as the time derivative of the position above:
        // a radial part (r' / r) * position, and a transverse part of
        // magnitude h / r along the direction of increasing argument of latitude
        let semi_latus_rectum = semi_major_axis * _1me2;
        let radial_mult =
            angular_momentum * eccentricity * sin(true_anomaly) / (radius * semi_latus_rectum);
        let transverse_speed = angular_momentum / radius;

        let transverse_dir = DVec3::new(
            -(cos_lan * sin_lat + sin_lan * cos_lat * cos_inc),
            -(sin_lan * sin_lat - cos_lan * cos_lat * cos_inc),
            cos_lat * sin_inc,
        );

        let velocity = position * radial_mult + transverse_dir * transverse_speed;

        Ok(StateVectors {
            position,
            velocity,
            epoch: t,
        })
    }
}
