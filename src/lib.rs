//! # Keplerian State Conversions
//! This library crate converts between the two usual ways of describing where
//! a body is on a two-body orbit, and how it is moving:
//!
//! - **State vectors**: a position and a velocity in an inertial frame
//!   centered on the parent body, at some epoch.
//! - **Classical orbital elements**: the semi-major axis, eccentricity,
//!   inclination, argument of periapsis, longitude of the ascending node,
//!   time of periapsis passage, and eccentric anomaly.
//!
//! Both directions are closed-form: there is no Kepler's equation solver
//! and no propagation over time. The gravitational parameter of the parent
//! body is passed into every call, so the same code works around any body.
//!
//! Only elliptic orbits are supported. Parabolic and hyperbolic trajectories,
//! as well as other degenerate inputs, are reported as a [`ConversionError`]
//! instead of leaking `NaN`s into the results.
//!
//! ## Getting started
//! This crate provides two main structs:
//! - [`StateVectors`]: A position and velocity at an epoch.
//!   Convert it with [`StateVectors::to_elements`].
//! - [`OrbitalElements`]: An elliptic orbit and a position along it.
//!   Convert it with [`OrbitalElements::to_state_vectors`].
//!
//! The free functions [`state_to_elements`] and [`elements_to_state`] do
//! the same thing.
//!
//! The [`anomaly`] module contains the relations between the true, eccentric
//! and mean anomalies used by both conversions.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//!
//! use kepler_convert::StateVectors;
//!
//! # fn main() {
//! // 600 km above a 6378.1 km Earth, a little too slow for a circular orbit
//! let mu = 3.986004418e14;
//! let sv = StateVectors::new(
//!     DVec3::new(6.9781e6, 0.0, 50.0),
//!     DVec3::new(0.0, 6500.0, 0.0),
//!     0.0,
//! );
//!
//! let elements = sv.to_elements(mu).unwrap();
//! assert!(elements.is_elliptic());
//!
//! let back = elements.to_state_vectors(mu, 0.0).unwrap();
//! assert!(back.position.distance(sv.position) < 1e-3);
//! assert!(back.velocity.distance(sv.velocity) < 1e-6);
//! # }
//! ```
//!
//! ## Features
//! - `std` (default): use the standard library for floating point maths.
//! - `libm`: use [`libm`](https://docs.rs/libm) instead, for `no_std` targets.
//! - `serde`: derive `Serialize` and `Deserialize` on the public types.
//!
//! ## Logging
//! Conversions emit [`tracing`](https://docs.rs/tracing) events: `trace`
//! for intermediate values, `debug` when an input is rejected or when the
//! equatorial fallback is used. No subscriber is installed by this crate.

#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod anomaly;
mod config;
mod elements;
mod error;
mod math;
mod state_vectors;

use glam::DVec3;

pub use config::{ConversionConfig, EquatorialMode};
pub use elements::OrbitalElements;
pub use error::{ConversionError, DegenerateOrbitCause};
pub use state_vectors::StateVectors;

/// Converts a position and velocity at a given epoch into orbital elements.
///
/// This is a shorthand for [`StateVectors::to_elements`]; see there for
/// the units and errors.
pub fn state_to_elements(
    position: DVec3,
    velocity: DVec3,
    mu: f64,
    epoch: f64,
) -> Result<OrbitalElements, ConversionError> {
    StateVectors::new(position, velocity, epoch).to_elements(mu)
}

/// Converts orbital elements into a position and velocity at epoch `t`.
///
/// This is a shorthand for [`OrbitalElements::to_state_vectors`]; see there
/// for the units, errors, and how the eccentric anomaly is used.
pub fn elements_to_state(
    elements: &OrbitalElements,
    mu: f64,
    t: f64,
) -> Result<StateVectors, ConversionError> {
    elements.to_state_vectors(mu, t)
}
