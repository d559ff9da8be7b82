//! # Helioday: environment, ephemeris access, and the cosmic-birthday operations
//!
//! This module defines the [`Helioday`] struct, the central façade that wires together:
//!
//! 1. **Environment state** ([`HeliodayEnv`](crate::env_state::HeliodayEnv)) — the shared HTTP client.
//! 2. **Ephemeris access** — lazy, cached handle over a chosen source
//!    ([`EphemerisSource`](crate::ephemeris::EphemerisSource) → [`Ephemeris`](crate::ephemeris::Ephemeris)).
//! 3. **Recurrence search** — the dual-window cosmic-birthday policy built on
//!    [`find_nearest_recurrence`](crate::search::find_nearest_recurrence).
//!
//! The design emphasizes *lazy initialization* and *idempotent caching*: the ephemeris
//! backend is opened on first use via [`OnceCell`](once_cell::sync::OnceCell), then reused.
//!
//! ## Typical usage
//!
//! ```rust
//! use helioday::helioday::Helioday;
//! use helioday::time::parse_utc;
//!
//! // Instantiate the context with an offline ephemeris source
//! let helioday = Helioday::new("kepler").unwrap();
//!
//! let birth = parse_utc("1996-07-14T08:30:00").unwrap();
//! let anchor = parse_utc("2026-01-05T00:00:00").unwrap();
//!
//! let report = helioday.cosmic_birthday(&birth, &anchor).unwrap();
//! println!("next cosmic birthday: {}", report.next.instant);
//! ```
//!
//! ## Notes
//!
//! - Instants are UTC; localizing a birth time is the caller's preprocessing step.
//! - Positions and distances are in AU; see
//!   [`au_to_miles`](crate::constants::au_to_miles) for human-facing output.

use once_cell::sync::OnceCell;

use crate::constants::{Position, FUTURE_SCAN_DAYS, PAST_SCAN_DAYS};
use crate::env_state::HeliodayEnv;
use crate::ephemeris::{Ephemeris, EphemerisSource, PositionProvider};
use crate::helioday_errors::HeliodayError;
use crate::search::{compute_distance, find_nearest_recurrence, ScanWindow, SearchResult};
use hifitime::{Epoch, Unit};

/// Both recurrence windows of one cosmic-birthday computation.
///
/// `next` always holds the nearest instant of the forward window. `recent` holds the
/// nearest instant of the backward window only when it falls within the window's
/// full span; the lookback is bounded and never silently widened, so a `None` here
/// means "no recurrence in the last [`PAST_SCAN_DAYS`] days".
#[derive(Debug, Clone, PartialEq)]
pub struct CosmicBirthday {
    pub birth_position: Position,
    pub next: SearchResult,
    pub recent: Option<SearchResult>,
}

#[derive(Debug)]
pub struct Helioday {
    env_state: HeliodayEnv,
    ephem_source: EphemerisSource,
    ephemeris: OnceCell<Ephemeris>,
}

impl Helioday {
    /// Construct a new [`Helioday`] context.
    ///
    /// Initializes the environment and records the ephemeris source. The backend
    /// itself is **not** opened yet; it is lazily initialized the first time
    /// [`get_ephemeris`](Helioday::get_ephemeris) is called.
    ///
    /// Arguments
    /// -----------------
    /// * `source`: a descriptor resolvable into an [`EphemerisSource`]
    ///   (`"horizons"` or `"kepler"`).
    ///
    /// Return
    /// ----------
    /// * A new [`Helioday`] instance, or [`HeliodayError::InvalidEphemerisSource`]
    ///   for an unknown descriptor.
    pub fn new(source: &str) -> Result<Self, HeliodayError> {
        Ok(Helioday {
            env_state: HeliodayEnv::new(),
            ephem_source: source.try_into()?,
            ephemeris: OnceCell::new(),
        })
    }

    /// Get the lazily-initialized ephemeris handle.
    ///
    /// If this is the first call, the backend is built and cached in an internal
    /// [`OnceCell`]. Subsequent calls return the same reference.
    pub fn get_ephemeris(&self) -> &Ephemeris {
        self.ephemeris
            .get_or_init(|| Ephemeris::new(&self.ephem_source, &self.env_state))
    }

    /// Earth's heliocentric position at the given UTC instant, in AU.
    ///
    /// This is the "birth position" and "current position" operation of the
    /// surrounding API layer; which one it is depends only on the instant passed.
    pub fn position_at(&self, instant: &Epoch) -> Result<Position, HeliodayError> {
        self.get_ephemeris().position_at(instant)
    }

    /// Distance in AU between Earth's positions at two instants, typically the
    /// birth instant and now.
    pub fn distance_to_birth(
        &self,
        birth_instant: &Epoch,
        current_instant: &Epoch,
    ) -> Result<f64, HeliodayError> {
        let ephemeris = self.get_ephemeris();
        let birth_position = ephemeris.position_at(birth_instant)?;
        let current_position = ephemeris.position_at(current_instant)?;
        Ok(compute_distance(&birth_position, &current_position))
    }

    /// Compute the cosmic birthday around `anchor_instant` for a birth at
    /// `birth_instant`.
    ///
    /// Runs two independent searches against the same provider: a backward window
    /// over the last [`PAST_SCAN_DAYS`] days (offsets 1..=30) and a forward window
    /// over the next [`FUTURE_SCAN_DAYS`] days (offsets 0..366). The backward
    /// result is surfaced only when its instant lies within the backward span.
    ///
    /// Arguments
    /// -----------------
    /// * `birth_instant`: UTC birth instant whose Earth position is the reference
    /// * `anchor_instant`: UTC instant both windows are anchored at (typically now)
    ///
    /// Return
    /// ----------
    /// * A [`CosmicBirthday`] report, or the first provider/validation error
    ///   encountered; a failed search never yields a partial report.
    pub fn cosmic_birthday(
        &self,
        birth_instant: &Epoch,
        anchor_instant: &Epoch,
    ) -> Result<CosmicBirthday, HeliodayError> {
        let ephemeris = self.get_ephemeris();
        let birth_position = ephemeris.position_at(birth_instant)?;

        let next = find_nearest_recurrence(
            &birth_position,
            *anchor_instant,
            &ScanWindow::forward(0, FUTURE_SCAN_DAYS),
            ephemeris,
        )?;

        let past_window = ScanWindow::backward(1, PAST_SCAN_DAYS);
        let recent = find_nearest_recurrence(
            &birth_position,
            *anchor_instant,
            &past_window,
            ephemeris,
        )?;

        let days_ago = (*anchor_instant - recent.instant).to_unit(Unit::Day);
        let recent =
            (days_ago <= f64::from(past_window.last_offset())).then_some(recent);

        Ok(CosmicBirthday {
            birth_position,
            next,
            recent,
        })
    }
}
