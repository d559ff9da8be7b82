use hifitime::Epoch;
use itertools::Itertools;
use log::debug;
use regex::Regex;

use crate::constants::{Position, MJD};
use crate::env_state::HeliodayEnv;
use crate::ephemeris::PositionProvider;
use crate::helioday_errors::HeliodayError;
use crate::time::jde_tdb_to_epoch;

const HORIZONS_FILE_API: &str = "https://ssd.jpl.nasa.gov/api/horizons_file.api";

/// Earth position provider backed by the JPL Horizons API.
///
/// Each query requests a vector table for Earth (body 399) with respect to the Sun
/// (center 500@10), in AU, on the ecliptic reference plane. The provider is stateless
/// apart from the shared HTTP client; every call issues a fresh request.
#[derive(Debug, Clone)]
pub struct HorizonsEphemeris {
    env_state: HeliodayEnv,
}

impl HorizonsEphemeris {
    pub fn new(env_state: &HeliodayEnv) -> Self {
        HorizonsEphemeris {
            env_state: env_state.clone(),
        }
    }

    /// Request the JPL Horizons API to get the position vector of Earth
    /// with respect to the Sun at different times.
    ///
    /// Argument
    /// --------
    /// * `mjd_list`: a slice of dates in modified julian date format (MJD)
    ///
    /// Return
    /// ------
    /// * a vector of [`VectorRecord`], the position vector components are in astronomical units
    pub fn positions_at(&self, mjd_list: &[MJD]) -> Result<Vec<VectorRecord>, HeliodayError> {
        debug!(
            "requesting {} Earth position vector(s) from JPL Horizons",
            mjd_list.len()
        );
        let response_data = self.request_vector(mjd_list)?;
        deserialize_vector(&response_data)
    }

    /// Request the JPL Horizons API to get the Earth position vector with respect to the Sun.
    ///
    /// Argument
    /// --------
    /// * `mjd_list`: a list of dates in modified julian date format (MJD)
    ///
    /// Return
    /// ------
    /// * The JPL API raw response
    fn request_vector(&self, mjd_list: &[MJD]) -> Result<String, HeliodayError> {
        let requested_params = format!(
            "
!$$SOF
COMMAND='399'
OBJ_DATA='NO'
MAKE_EPHEM='YES'
TABLE_TYPE='VECTORS'
CENTER='500@10'
TLIST_TYPE=MJD
TLIST={}
CSV_FORMAT=YES
REF_SYSTEM=ICRF
OUT_UNITS=AU-D
REF_PLANE=ECLIPTIC
VEC_TABLE=1
",
            mjd_tlist(mjd_list)
        );
        self.env_state.post_form(
            HORIZONS_FILE_API,
            &[("format", "text"), ("input", &requested_params)],
        )
    }
}

impl PositionProvider for HorizonsEphemeris {
    fn position_at(&self, instant: &Epoch) -> Result<Position, HeliodayError> {
        let records = self.positions_at(&[instant.to_mjd_utc_days()])?;
        records
            .first()
            .map(VectorRecord::position)
            .ok_or_else(|| {
                HeliodayError::ProviderFailure(format!(
                    "JPL Horizons returned no vector record for {instant}"
                ))
            })
    }
}

fn mjd_tlist(mjd_list: &[MJD]) -> String {
    mjd_list.iter().join(",")
}

/// Contains the information from one row of a JPL Horizons vector state query.
/// x, y, z are the components of the position vector at the time contained in
/// the jd and date fields.
#[derive(Debug, serde::Deserialize, PartialEq)]
pub struct VectorRecord {
    #[serde(rename = "JDTDB")]
    jd: f64,
    #[serde(rename = "CalendarDate(TDB)")]
    date: String,
    #[serde(rename = "X")]
    x: f64, // AU
    #[serde(rename = "Y")]
    y: f64, // AU
    #[serde(rename = "Z")]
    z: f64, // AU
}

impl VectorRecord {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y, self.z)
    }

    pub fn epoch(&self) -> Epoch {
        jde_tdb_to_epoch(self.jd)
    }
}

/// Parse the JPL raw response and return a vector of [`VectorRecord`]
/// containing the components of the Earth position vector.
///
/// The Horizons text payload carries a fixed-width CSV header line followed by the
/// data block delimited by `$$SOE`/`$$EOE` markers. Any deviation from that layout
/// surfaces as [`HeliodayError::InvalidHorizonsResponse`].
///
/// Argument
/// --------
/// * `jpl_response`: the raw JPL response from the API
///
/// Return
/// ------
/// * a vector of [`VectorRecord`]
fn deserialize_vector(jpl_response: &str) -> Result<Vec<VectorRecord>, HeliodayError> {
    // regex to match the data part of the jpl horizons response
    let data_regex = Regex::new(r"\$\$SOE\n([\s\S]*?)\$\$EOE").unwrap();
    // regex to match the CSV header line of the jpl horizons response
    let header_regex = Regex::new(r"(?m)^\s*JDTDB.*$").unwrap();

    let header = header_regex
        .find(jpl_response)
        .ok_or_else(|| {
            HeliodayError::InvalidHorizonsResponse("vector table header not found".to_string())
        })?
        .as_str()
        .replace(' ', "");
    let header = header.trim_end_matches(',');

    let rows = data_regex
        .captures(jpl_response)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            HeliodayError::InvalidHorizonsResponse("no $$SOE/$$EOE data block".to_string())
        })?
        .as_str();

    // Strip the alignment spaces and the trailing comma that would otherwise make
    // the CSV deserializer see an empty column at the end of each row.
    let rows = rows
        .lines()
        .map(|line| line.replace(' ', ""))
        .filter(|line| !line.is_empty())
        .map(|line| line.trim_end_matches(',').to_string())
        .join("\n");

    let data = format!("{header}\n{rows}");

    let mut csv_reader = csv::Reader::from_reader(data.as_bytes());
    csv_reader
        .deserialize::<VectorRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(HeliodayError::from)
}
