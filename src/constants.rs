//! # Constants and type definitions for Helioday
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `helioday` library.
//!
//! ## Overview
//!
//! - Astronomical constants (AU, J2000 epoch)
//! - Unit conversions (degrees ↔ radians, AU ↔ miles, JD ↔ MJD)
//! - Core type aliases used across the crate
//! - Default scan spans for the recurrence search
//!
//! These definitions are used by the ephemeris providers, the recurrence search, and the
//! top-level [`Helioday`](crate::helioday::Helioday) façade.

use nalgebra::Vector3;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Astronomical Unit in miles, used when rendering distances for humans
pub const AU_MILES: f64 = 92_955_807.3;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of days scanned backward when looking for a recent recurrence
pub const PAST_SCAN_DAYS: u32 = 30;

/// Number of days scanned forward when looking for the next recurrence,
/// one full orbit plus a leap-year margin
pub const FUTURE_SCAN_DAYS: u32 = 366;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;

/// Modified Julian Date (days)
pub type MJD = f64;

/// Heliocentric Cartesian position in astronomical units, ecliptic J2000 frame
pub type Position = Vector3<f64>;

/// Convert a distance in astronomical units to miles.
///
/// Presentation helper only: every computation in this crate stays in AU.
pub fn au_to_miles(distance_au: f64) -> f64 {
    distance_au * AU_MILES
}
