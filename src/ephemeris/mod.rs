//! # Ephemeris providers
//!
//! This module is the **provider boundary** of the crate: everything the recurrence
//! search knows about planetary motion goes through the [`PositionProvider`] trait.
//!
//! Two concrete providers are available, selected by an [`EphemerisSource`] descriptor:
//!
//! - `"horizons"` — Earth position vectors fetched from the JPL Horizons API
//!   ([`HorizonsEphemeris`](crate::ephemeris::horizons::HorizonsEphemeris)). Network-backed,
//!   full JPL ephemeris precision.
//! - `"kepler"` — offline analytic Earth–Moon barycenter position from Standish (1992)
//!   approximate Keplerian elements ([`KeplerEphemeris`](crate::ephemeris::kepler::KeplerEphemeris)).
//!   Deterministic and network-free, suitable for tests and offline use.
//!
//! ## Frames & units
//!
//! Both providers return heliocentric Cartesian positions in **AU** in the
//! **ecliptic J2000** frame. Mixing providers within one search would mix reference
//! conventions and silently skew distances, so a search always runs against a single
//! [`Ephemeris`] handle.

pub mod horizons;
pub mod kepler;

use hifitime::Epoch;

use crate::constants::Position;
use crate::env_state::HeliodayEnv;
use crate::helioday_errors::HeliodayError;
use horizons::HorizonsEphemeris;
use kepler::KeplerEphemeris;

/// Capability consumed by the recurrence search: map a UTC instant to Earth's
/// heliocentric position.
///
/// Implementations must be **deterministic** for a given instant and must express
/// every position in the same reference frame across calls. The search performs one
/// call per sampled offset and never caches; any memoization belongs to the provider.
pub trait PositionProvider {
    /// Earth's heliocentric position in AU (ecliptic J2000) at the given instant.
    fn position_at(&self, instant: &Epoch) -> Result<Position, HeliodayError>;
}

/// Descriptor selecting which ephemeris backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisSource {
    /// JPL Horizons API (network)
    HorizonsApi,
    /// Standish approximate Keplerian elements (offline)
    Kepler,
}

impl TryFrom<&str> for EphemerisSource {
    type Error = HeliodayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "horizons" => Ok(EphemerisSource::HorizonsApi),
            "kepler" => Ok(EphemerisSource::Kepler),
            other => Err(HeliodayError::InvalidEphemerisSource(other.to_string())),
        }
    }
}

/// Handle over the concrete ephemeris backends.
#[derive(Debug, Clone)]
pub enum Ephemeris {
    HorizonsApi(HorizonsEphemeris),
    Kepler(KeplerEphemeris),
}

impl Ephemeris {
    pub fn new(source: &EphemerisSource, env_state: &HeliodayEnv) -> Self {
        match source {
            EphemerisSource::HorizonsApi => {
                Ephemeris::HorizonsApi(HorizonsEphemeris::new(env_state))
            }
            EphemerisSource::Kepler => Ephemeris::Kepler(KeplerEphemeris::new()),
        }
    }
}

impl PositionProvider for Ephemeris {
    fn position_at(&self, instant: &Epoch) -> Result<Position, HeliodayError> {
        match self {
            Ephemeris::HorizonsApi(horizons) => horizons.position_at(instant),
            Ephemeris::Kepler(kepler) => kepler.position_at(instant),
        }
    }
}

#[cfg(test)]
mod ephemeris_tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert_eq!(
            EphemerisSource::try_from("horizons").unwrap(),
            EphemerisSource::HorizonsApi
        );
        assert_eq!(
            EphemerisSource::try_from("kepler").unwrap(),
            EphemerisSource::Kepler
        );

        let err = EphemerisSource::try_from("de421").unwrap_err();
        assert_eq!(
            err,
            HeliodayError::InvalidEphemerisSource("de421".to_string())
        );
    }
}
