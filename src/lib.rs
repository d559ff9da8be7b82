//! Find the instants at which Earth returns closest to its heliocentric position
//! at a reference time — the "cosmic birthday". The core is a day-granular
//! nearest-recurrence search ([`search`]) over a pluggable ephemeris capability
//! ([`ephemeris`]); the [`helioday`] module ties both together behind one façade.

pub mod constants;
pub mod env_state;
pub mod ephemeris;
pub mod helioday;
pub mod helioday_errors;
pub mod search;
pub mod time;
