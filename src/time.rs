use hifitime::{Epoch, TimeScale, Unit};
use std::str::FromStr;

use crate::constants::{JDTOMJD, MJD};
use crate::helioday_errors::HeliodayError;

/// Parse a UTC datetime string in the format YYYY-MM-ddTHH:mm:ss into an [`Epoch`].
///
/// The string is interpreted in the UTC time scale; callers owning a local birth time
/// must localize it to UTC before calling (timezone handling is a preprocessing step,
/// not a concern of this crate).
///
/// Argument
/// --------
/// * `date`: a datetime string in the format YYYY-MM-ddTHH:mm:ss
///
/// Return
/// ------
/// * The corresponding UTC instant, or [`HeliodayError::InvalidDateFormat`]
pub fn parse_utc(date: &str) -> Result<Epoch, HeliodayError> {
    Epoch::from_str(date).map_err(|e| HeliodayError::InvalidDateFormat(format!("{date}: {e}")))
}

/// Transformation from a list of UTC instants to modified julian dates (MJD)
///
/// Argument
/// --------
/// * `epochs`: a slice of UTC instants
///
/// Return
/// ------
/// * a vector of float representing the input instants in modified julian date (MJD)
pub fn epochs_to_mjd(epochs: &[Epoch]) -> Vec<MJD> {
    epochs.iter().map(|e| e.to_mjd_utc_days()).collect()
}

/// Transformation from a Julian Ephemeris Date (TDB) to an [`Epoch`].
///
/// JPL Horizons reports vector timestamps as JDTDB.
pub fn jde_tdb_to_epoch(jd: f64) -> Epoch {
    Epoch::from_mjd_in_time_scale(jd - JDTOMJD, TimeScale::TDB)
}

/// Shift an instant by a whole number of days, positive or negative.
pub fn offset_by_days(anchor: Epoch, days: i64) -> Epoch {
    anchor + Unit::Day * days
}
