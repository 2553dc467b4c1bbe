use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anomaly::{
    eccentric_anomaly_at_true_anomaly, mean_anomaly_at_eccentric_anomaly, mean_motion,
};
use crate::error::{check_mu, rejected};
use crate::math::{atan2, copysign, cos, hypot, sin, sqrt, wrap_angle};
use crate::{
    ConversionConfig, ConversionError, DegenerateOrbitCause, EquatorialMode, OrbitalElements,
};

const CONVERSION: &str = "state vectors to elements";

/// A struct representing a position and velocity at a given epoch.
///
/// The position and velocity vectors are three-dimensional, expressed in an
/// inertial, right-handed frame centered on the parent body.
///
/// The position vector is in meters, while the velocity vector is in
/// meters per second. The epoch may be in any time unit, as long as it is
/// consistent with the gravitational parameter used alongside it.
///
/// State vectors can be turned into orbital elements, see
/// [`to_elements`][Self::to_elements] for more information.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVectors {
    /// The 3D position relative to the parent body, in meters.
    pub position: DVec3,
    /// The 3D velocity relative to the parent body, in meters per second.
    pub velocity: DVec3,
    /// The time at which this state holds.
    pub epoch: f64,
}

impl StateVectors {
    /// Creates a new set of state vectors.
    pub const fn new(position: DVec3, velocity: DVec3, epoch: f64) -> Self {
        Self {
            position,
            velocity,
            epoch,
        }
    }

    /// Gets the specific angular momentum vector, `h = r x v`.
    ///
    /// This vector is perpendicular to the orbital plane.
    pub fn specific_angular_momentum(&self) -> DVec3 {
        self.position.cross(self.velocity)
    }

    /// Gets the specific orbital energy, `v^2 / 2 - mu / r`.
    ///
    /// Negative for elliptic orbits, zero for parabolic trajectories, and
    /// positive for hyperbolic ones.
    pub fn specific_orbital_energy(&self, mu: f64) -> f64 {
        0.5 * self.velocity.length_squared() - mu / self.position.length()
    }

    /// Gets the eccentricity vector, which points towards the periapsis
    /// and whose length is the eccentricity.
    ///
    /// ```text
    /// e = ((v^2 - mu / r) r - (r . v) v) / mu
    /// ```
    ///
    /// This is not what [`to_elements`][Self::to_elements] derives the
    /// eccentricity from, but it is handy for cross-checking it.
    pub fn eccentricity_vector(&self, mu: f64) -> DVec3 {
        let radius = self.position.length();
        let speed_sq = self.velocity.length_squared();

        ((speed_sq - mu / radius) * self.position
            - self.position.dot(self.velocity) * self.velocity)
            / mu
    }

    /// Whether every component of the state is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.epoch.is_finite()
    }

    /// Converts the state vectors into classical orbital elements,
    /// using the [default configuration][ConversionConfig::DEFAULT].
    ///
    /// # Mu
    /// Mu is also known as the gravitational parameter, and
    /// is equal to `GM`, where `G` is the gravitational constant,
    /// and `M` is the mass of the parent body.
    /// It must be positive and in units consistent with the state.
    ///
    /// Learn more about the gravitational parameter:
    /// <https://en.wikipedia.org/wiki/Standard_gravitational_parameter>
    ///
    /// # Errors
    /// - [`ConversionError::DegenerateOrbit`] if the position is zero, the motion
    ///   is purely radial, the trajectory is parabolic, or an input is non-finite.
    /// - [`ConversionError::UnsupportedOrbitType`] if the trajectory is hyperbolic.
    /// - [`ConversionError::InvalidGravitationalParameter`] if `mu` isn't positive.
    ///
    /// Equatorial orbits are handled by measuring angles from the X axis;
    /// see [`EquatorialMode`] and [`to_elements_with`][Self::to_elements_with].
    ///
    /// # Example
    /// ```
    /// use glam::DVec3;
    /// use kepler_convert::StateVectors;
    ///
    /// let sv = StateVectors::new(
    ///     DVec3::new(1.0, 0.0, 0.0),
    ///     DVec3::new(0.0, 1.0, 0.0),
    ///     0.0,
    /// );
    ///
    /// let elements = sv.to_elements(1.0).unwrap();
    ///
    /// assert!((elements.semi_major_axis - 1.0).abs() < 1e-12);
    /// assert!(elements.eccentricity < 1e-6);
    /// assert_eq!(elements.inclination, 0.0);
    /// ```
    pub fn to_elements(self, mu: f64) -> Result<OrbitalElements, ConversionError> {
        self.to_elements_with(mu, &ConversionConfig::DEFAULT)
    }

    /// Converts the state vectors into classical orbital elements, with
    /// the given tolerances and equatorial handling.
    ///
    /// See [`to_elements`][Self::to_elements] for the errors returned.
    /// On top of those, [`ConversionError::EquatorialSingularity`] is returned
    /// for equatorial orbits when the configuration uses
    /// [`EquatorialMode::Reject`].
    ///
    /// # Ranges
    /// - inclination: `[0, pi]`
    /// - longitude of the ascending node: `(-pi, pi]`
    /// - argument of periapsis: `(-pi, pi]`
    /// - eccentric anomaly: `[-pi, pi]`
    pub fn to_elements_with(
        self,
        mu: f64,
        config: &ConversionConfig,
    ) -> Result<OrbitalElements, ConversionError> {
        // Reference:
        // https://downloads.rene-schwarz.com/download/M002-Cartesian_State_Vectors_to_Keplerian_Orbit_Elements.pdf
        tracing::trace!(
            position = ?self.position,
            velocity = ?self.velocity,
            epoch = self.epoch,
            mu,
            "converting state vectors to orbital elements"
        );

        let reject = |error: ConversionError| rejected(CONVERSION, error);

        check_mu(mu).map_err(reject)?;

        if !self.is_finite() {
            return Err(reject(DegenerateOrbitCause::NonFinite.into()));
        }

        // Step 1: Orbital angular momentum
        let angular_momentum_vector = self.specific_angular_momentum();
        let angular_momentum = angular_momentum_vector.length();

        // Step 2: Position and velocity magnitudes
        let radius = self.position.length();
        let speed = self.velocity.length();

        // Finite inputs can still overflow once squared
        if !(radius.is_finite() && speed.is_finite() && angular_momentum.is_finite()) {
            return Err(reject(DegenerateOrbitCause::NonFinite.into()));
        }

        if radius == 0.0 {
            return Err(reject(DegenerateOrbitCause::ZeroRadius.into()));
        }

        if angular_momentum <= config.degenerate_tolerance * radius * speed {
            return Err(reject(DegenerateOrbitCause::ZeroAngularMomentum.into()));
        }

        // Step 3: Specific orbital energy
        let kinetic = 0.5 * speed * speed;
        let potential = mu / radius;
        let energy = kinetic - potential;

        if energy.abs() <= config.degenerate_tolerance * (kinetic + potential) {
            return Err(reject(DegenerateOrbitCause::ZeroSpecificEnergy.into()));
        }

        // Step 4: Semi-major axis
        let semi_major_axis = -mu / (2.0 * energy);

        // Step 5: Eccentricity
        let radicand = 1.0 - angular_momentum * angular_momentum / (semi_major_axis * mu);

        if semi_major_axis < 0.0 {
            return Err(reject(ConversionError::UnsupportedOrbitType {
                eccentricity: sqrt(radicand),
                semi_major_axis,
            }));
        }

        let eccentricity =
            eccentricity_from_radicand(radicand, config.radicand_tolerance).map_err(reject)?;

        // h^2 / (a mu) lost below the rounding of 1.0: a radial ellipse
        if eccentricity >= 1.0 {
            return Err(reject(DegenerateOrbitCause::ZeroAngularMomentum.into()));
        }

        tracing::trace!(energy, semi_major_axis, eccentricity, "orbit shape");

        // Step 6: Inclination
        // atan2(|h_xy|, h_z) is arccos(h_z / h), minus the precision loss near 0 and pi
        let h = angular_momentum_vector;
        let node_length = hypot(h.x, h.y);
        let inclination = atan2(node_length, h.z);
        let sin_inclination = node_length / angular_momentum;

        // Steps 7 & 8: Longitude of the ascending node and argument of latitude
        let (long_asc_node, arg_lat) = if sin_inclination < config.equatorial_tolerance {
            match config.equatorial_mode {
                EquatorialMode::Reject => {
                    return Err(reject(ConversionError::EquatorialSingularity { inclination }));
                }
                EquatorialMode::LongitudeOfPeriapsis => {
                    tracing::debug!(
                        inclination,
                        "equatorial orbit, measuring angles from the X axis"
                    );

                    // With the node pinned to the X axis, the argument of latitude
                    // becomes the true longitude. Retrograde orbits see the Y axis
                    // flipped by cos(i) = -1.
                    let true_longitude =
                        atan2(copysign(1.0, h.z) * self.position.y, self.position.x);

                    (0.0, true_longitude)
                }
            }
        } else {
            let long_asc_node = atan2(h.x, -h.y);
            let (sin_lan, cos_lan) = (sin(long_asc_node), cos(long_asc_node));

            let arg_lat = atan2(
                self.position.z / sin_inclination,
                self.position.x * cos_lan + self.position.y * sin_lan,
            );

            (long_asc_node, arg_lat)
        };

        // Step 9: True anomaly
        let semi_latus_rectum = semi_major_axis * (1.0 - eccentricity * eccentricity);
        let true_anomaly = atan2(
            sqrt(semi_latus_rectum / mu) * self.position.dot(self.velocity),
            semi_latus_rectum - radius,
        );

        // Step 10: Argument of periapsis
        let arg_pe = wrap_angle(arg_lat - true_anomaly);

        // Step 11: Eccentric anomaly
        let eccentric_anomaly = eccentric_anomaly_at_true_anomaly(true_anomaly, eccentricity);

        // Step 12: Time of periapsis passage
        let mean_anomaly = mean_anomaly_at_eccentric_anomaly(eccentric_anomaly, eccentricity);
        let periapsis_time = self.epoch - mean_anomaly / mean_motion(mu, semi_major_axis);

        let elements = OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            periapsis_time,
            eccentric_anomaly,
        };

        // Whatever comes out on the Ok path must convert back
        elements.validate().map_err(reject)?;

        Ok(elements)
    }
}

/// Takes the square root of the eccentricity radicand `1 - h^2 / (a mu)`.
///
/// Rounding can push the radicand of a (near-)circular orbit just below
/// zero; anything within `tolerance` of zero is clamped.
pub(crate) fn eccentricity_from_radicand(
    radicand: f64,
    tolerance: f64,
) -> Result<f64, ConversionError> {
    if radicand >= 0.0 {
        Ok(sqrt(radicand))
    } else if radicand >= -tolerance {
        Ok(0.0)
    } else {
        Err(DegenerateOrbitCause::NegativeEccentricityRadicand(radicand).into())
    }
}
