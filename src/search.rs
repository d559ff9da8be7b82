//! # Nearest-recurrence search
//!
//! This module is the algorithmic core of the crate: given a reference heliocentric
//! position and a bounded, day-granular [`ScanWindow`], find the instant whose Earth
//! position is nearest (Euclidean distance in AU) to the reference.
//!
//! ## Contract
//!
//! - The scan is **sequential**, ascending in absolute day offset, one
//!   [`PositionProvider`](crate::ephemeris::PositionProvider) call per offset.
//! - The minimum is tracked with a strict `<` comparison, so when two offsets tie
//!   the **earliest-sampled** instant is retained. Reproducibility of that
//!   tie-break is why the scan stays sequential.
//! - A window with `offset_count == 0` is rejected before any sampling
//!   ([`HeliodayError::InvalidScanWindow`]); there is no default result.
//! - A provider failure at any offset aborts the whole search; no partial result
//!   is fabricated.
//!
//! Each invocation is independent and reentrant: past and future windows may be
//! searched from separate threads without coordination since all inputs are
//! read-only.

use hifitime::Epoch;
use log::debug;

use crate::constants::Position;
use crate::ephemeris::PositionProvider;
use crate::helioday_errors::HeliodayError;
use crate::time::offset_by_days;

/// Direction in which a [`ScanWindow`] steps away from its anchor instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

/// A bounded day-offset range relative to an anchor instant.
///
/// The window samples the integer offsets
/// `[offset_start, offset_start + offset_count)`, each mapped to
/// `anchor ± offset` days according to `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub offset_start: u32,
    pub offset_count: u32,
    pub direction: ScanDirection,
}

impl ScanWindow {
    /// A forward-looking window starting `offset_start` days after the anchor.
    pub fn forward(offset_start: u32, offset_count: u32) -> Self {
        ScanWindow {
            offset_start,
            offset_count,
            direction: ScanDirection::Forward,
        }
    }

    /// A backward-looking window starting `offset_start` days before the anchor.
    pub fn backward(offset_start: u32, offset_count: u32) -> Self {
        ScanWindow {
            offset_start,
            offset_count,
            direction: ScanDirection::Backward,
        }
    }

    /// Largest absolute day offset sampled by this window.
    pub fn last_offset(&self) -> u32 {
        self.offset_start + self.offset_count.saturating_sub(1)
    }
}

/// Outcome of one recurrence search: the winning instant, its distance to the
/// reference position (AU), and Earth's position there.
///
/// `distance` is the minimum over all sampled instants of the window;
/// `instant` is the first instant achieving that minimum when ties occur.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub instant: Epoch,
    pub distance: f64,
    pub position: Position,
}

/// Euclidean distance between two heliocentric positions, in AU.
///
/// Symmetric, and zero iff both positions coincide componentwise. Conversion to
/// linear units (miles) is a presentation concern, see
/// [`au_to_miles`](crate::constants::au_to_miles).
pub fn compute_distance(position_a: &Position, position_b: &Position) -> f64 {
    (position_a - position_b).norm()
}

/// Find, within a bounded day-granular window, the instant whose Earth position is
/// nearest to `reference_position`.
///
/// For each integer day offset of the window the provider is sampled once at
/// `anchor_instant ± offset` days and the Euclidean distance to the reference is
/// compared against the best seen so far with strict `<`, so the earliest-sampled
/// instant wins ties.
///
/// Arguments
/// -----------------
/// * `reference_position`: the position to recur to, in AU
/// * `anchor_instant`: UTC instant the window offsets are relative to
/// * `window`: the day-offset range to scan
/// * `position_provider`: deterministic instant → position capability
///
/// Return
/// ----------
/// * The [`SearchResult`] for the window, or
///   [`HeliodayError::InvalidScanWindow`] for an empty window, or the provider's
///   error if any sampled instant cannot be resolved.
pub fn find_nearest_recurrence(
    reference_position: &Position,
    anchor_instant: Epoch,
    window: &ScanWindow,
    position_provider: &dyn PositionProvider,
) -> Result<SearchResult, HeliodayError> {
    if window.offset_count == 0 {
        return Err(HeliodayError::InvalidScanWindow);
    }

    let mut best: Option<SearchResult> = None;
    for offset in window.offset_start..window.offset_start + window.offset_count {
        let signed_offset = match window.direction {
            ScanDirection::Forward => i64::from(offset),
            ScanDirection::Backward => -i64::from(offset),
        };
        let check_instant = offset_by_days(anchor_instant, signed_offset);
        let check_position = position_provider.position_at(&check_instant)?;
        let distance = compute_distance(reference_position, &check_position);

        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(SearchResult {
                instant: check_instant,
                distance,
                position: check_position,
            });
        }
    }

    // offset_count >= 1 guarantees at least one sample
    let result = best.ok_or(HeliodayError::InvalidScanWindow)?;
    debug!(
        "scanned {} offset(s) {:?} from {anchor_instant}, best distance {:.6} AU at {}",
        window.offset_count, window.direction, result.distance, result.instant
    );
    Ok(result)
}
