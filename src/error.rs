use core::fmt;

/// An error to describe why a conversion between state vectors and
/// orbital elements failed.
///
/// Conversions are deterministic; the same inputs will always fail
/// the same way.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ConversionError {
    /// ### The state does not describe a usable two-body orbit.
    /// The inner cause tells which step of the conversion broke down.
    DegenerateOrbit(DegenerateOrbitCause),

    /// ### The orbit lies in the reference plane.
    /// With a (near-)zero inclination the ascending node is undefined,
    /// and the argument of latitude cannot be measured from it.
    ///
    /// This is only returned when the configuration asks for it with
    /// [`EquatorialMode::Reject`][crate::EquatorialMode::Reject].
    EquatorialSingularity {
        /// The inclination that was computed, in radians.
        inclination: f64,
    },

    /// ### The orbit is not elliptic.
    /// Only elliptic orbits (`0 <= e < 1`, `a > 0`) are supported.
    /// Parabolic and hyperbolic trajectories would need a different
    /// set of anomaly relations.
    UnsupportedOrbitType {
        /// The eccentricity of the rejected orbit.
        eccentricity: f64,
        /// The semi-major axis of the rejected orbit, in meters.
        semi_major_axis: f64,
    },

    /// ### The gravitational parameter is not a positive, finite number.
    InvalidGravitationalParameter(f64),
}

/// The reason an orbit was deemed degenerate.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum DegenerateOrbitCause {
    /// The position vector is at the origin.
    ZeroRadius,

    /// The position and velocity are parallel (or the velocity is zero),
    /// so the motion is purely radial and there is no orbital plane.
    ///
    /// Also returned when the angular momentum is too small to move the
    /// eccentricity below 1 in floating point.
    ZeroAngularMomentum,

    /// The specific orbital energy is zero.
    /// This is the parabolic case, where the semi-major axis is infinite.
    ZeroSpecificEnergy,

    /// The eccentricity radicand `1 - h^2 / (a mu)` came out negative by
    /// more than the configured tolerance.
    NegativeEccentricityRadicand(f64),

    /// One of the inputs is `NaN` or infinite.
    NonFinite,
}

impl fmt::Display for DegenerateOrbitCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRadius => f.write_str("position vector is zero"),
            Self::ZeroAngularMomentum => f.write_str("specific angular momentum is zero"),
            Self::ZeroSpecificEnergy => f.write_str("specific orbital energy is zero"),
            Self::NegativeEccentricityRadicand(radicand) => {
                write!(f, "eccentricity radicand is negative ({radicand:e})")
            }
            Self::NonFinite => f.write_str("input contains a non-finite value"),
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateOrbit(cause) => write!(f, "degenerate orbit: {cause}"),
            Self::EquatorialSingularity { inclination } => write!(
                f,
                "equatorial singularity: inclination {inclination} rad has no ascending node"
            ),
            Self::UnsupportedOrbitType {
                eccentricity,
                semi_major_axis,
            } => write!(
                f,
                "unsupported orbit type: e = {eccentricity}, a = {semi_major_axis} m \
                (only elliptic orbits are supported)"
            ),
            Self::InvalidGravitationalParameter(mu) => {
                write!(f, "invalid gravitational parameter: {mu}")
            }
        }
    }
}

impl core::error::Error for ConversionError {}

impl From<DegenerateOrbitCause> for ConversionError {
    fn from(cause: DegenerateOrbitCause) -> Self {
        Self::DegenerateOrbit(cause)
    }
}

/// Checks that a gravitational parameter is usable.
pub(crate) fn check_mu(mu: f64) -> Result<(), ConversionError> {
    if mu.is_finite() && mu > 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidGravitationalParameter(mu))
    }
}

/// Logs a rejected conversion before handing the error back.
pub(crate) fn rejected(conversion: &'static str, error: ConversionError) -> ConversionError {
    tracing::debug!(%error, conversion, "conversion rejected");
    error
}
