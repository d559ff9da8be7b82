//! # Helioday environment state
//!
//! This module defines [`HeliodayEnv`], the shared environment object used across the
//! `helioday` library. It owns a persistent **HTTP client** used to query the JPL
//! Horizons API for Earth position vectors.
//!
//! This object is designed to be **cheaply cloneable** and passed to providers that
//! require access to external data sources.
//!
//! ## Structure
//!
//! ```text
//! HeliodayEnv
//! └── http_client  (ureq::Agent)
//! ```
//!
//! ## Notes
//!
//! - [`HeliodayEnv`] is meant to be reused and shared between different parts of the
//!   crate to avoid redundant HTTP session creation.
//! - All request helpers return [`HeliodayError`](crate::helioday_errors::HeliodayError)
//!   instead of panicking, so provider failures propagate to the caller untouched.
use std::time::Duration;
use ureq::Agent;

use crate::helioday_errors::HeliodayError;

/// This object is passed to the network-backed ephemeris providers
/// to give them access to the shared HTTP client.
#[derive(Debug, Clone)]
pub struct HeliodayEnv {
    pub http_client: Agent,
}

impl Default for HeliodayEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl HeliodayEnv {
    /// Create a new environment object.
    ///
    /// Return
    /// ------
    /// * A new [`HeliodayEnv`] with an HTTP client configured with a global timeout
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();
        let agent: Agent = config.into();

        HeliodayEnv { http_client: agent }
    }

    /// POST an urlencoded form and return the response body as text.
    ///
    /// Arguments
    /// ---------
    /// * `url`: the target URL
    /// * `form`: key/value pairs sent as the form body
    ///
    /// Return
    /// ------
    /// * The raw response body, or [`HeliodayError::UreqHttpError`] on transport failure
    pub(crate) fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String, HeliodayError> {
        let mut response = self.http_client.post(url).send_form(form.iter().copied())?;
        Ok(response.body_mut().read_to_string()?)
    }
}
