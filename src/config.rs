#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mode to describe how the state vector converter should behave
/// when the orbit lies in the reference plane.
///
/// For an equatorial orbit (`sin(i) ~ 0`), the line of nodes does not
/// exist, so neither the longitude of the ascending node nor the argument
/// of latitude measured from it are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EquatorialMode {
    /// Pin the longitude of the ascending node to zero and measure angles
    /// from the reference X axis instead.
    ///
    /// The argument of periapsis returned then holds the
    /// [longitude of periapsis](https://en.wikipedia.org/wiki/Longitude_of_the_periapsis).
    /// Converting the result back with
    /// [`to_state_vectors`][crate::OrbitalElements::to_state_vectors]
    /// gives back the original state.
    #[default]
    LongitudeOfPeriapsis,

    /// Report the condition as
    /// [`ConversionError::EquatorialSingularity`][crate::ConversionError::EquatorialSingularity].
    Reject,
}

/// Tolerances and modes used by
/// [`StateVectors::to_elements_with`][crate::StateVectors::to_elements_with].
///
/// # Example
/// ```
/// use kepler_convert::{ConversionConfig, EquatorialMode};
///
/// let config = ConversionConfig::default()
///     .with_equatorial_mode(EquatorialMode::Reject);
///
/// assert_eq!(config.equatorial_mode, EquatorialMode::Reject);
/// assert_eq!(config.radicand_tolerance, ConversionConfig::DEFAULT.radicand_tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionConfig {
    /// Relative threshold under which the angular momentum or the specific
    /// orbital energy count as zero.
    ///
    /// The angular momentum is compared against `|r| * |v|`, and the
    /// energy against `v^2 / 2 + mu / r`.
    pub degenerate_tolerance: f64,

    /// How far below zero the eccentricity radicand `1 - h^2 / (a mu)` may
    /// fall from rounding and still be clamped to zero.
    pub radicand_tolerance: f64,

    /// Threshold on `sin(i)` under which an orbit is treated as equatorial.
    pub equatorial_tolerance: f64,

    /// What to do with equatorial orbits.
    pub equatorial_mode: EquatorialMode,
}

impl ConversionConfig {
    /// The configuration used by
    /// [`StateVectors::to_elements`][crate::StateVectors::to_elements].
    pub const DEFAULT: Self = Self {
        degenerate_tolerance: 1e-12,
        radicand_tolerance: 1e-10,
        equatorial_tolerance: 1e-10,
        equatorial_mode: EquatorialMode::LongitudeOfPeriapsis,
    };

    /// Returns this configuration with a different equatorial mode.
    #[must_use]
    pub const fn with_equatorial_mode(self, equatorial_mode: EquatorialMode) -> Self {
        Self {
            equatorial_mode,
            ..self
        }
    }

    /// Returns this configuration with a different equatorial threshold.
    #[must_use]
    pub const fn with_equatorial_tolerance(self, equatorial_tolerance: f64) -> Self {
        Self {
            equatorial_tolerance,
            ..self
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
