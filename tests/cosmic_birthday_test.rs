use hifitime::Unit;

use helioday::constants::{au_to_miles, AU_MILES, PAST_SCAN_DAYS};
use helioday::helioday::Helioday;
use helioday::search::compute_distance;
use helioday::time::{offset_by_days, parse_utc};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_next_cosmic_birthday_lands_near_the_calendar_birthday() {
    init_logging();
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let anchor = parse_utc("2026-01-05T00:00:00").unwrap();

    let report = helioday.cosmic_birthday(&birth, &anchor).unwrap();

    // Anchored in early January, the next return to a mid-July birth position
    // is ~190 days out
    let offset_days = (report.next.instant - anchor).to_unit(Unit::Day);
    assert!(
        (185.0..=195.0).contains(&offset_days),
        "next recurrence {offset_days} days after anchor"
    );
    assert!(
        report.next.distance < 0.02,
        "recurrence distance {} AU",
        report.next.distance
    );
}

#[test]
fn test_recent_recurrence_stays_inside_the_lookback() {
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let anchor = parse_utc("2026-01-05T00:00:00").unwrap();

    let report = helioday.cosmic_birthday(&birth, &anchor).unwrap();

    let recent = report.recent.expect("backward window yields a bounded result");
    let days_ago = (anchor - recent.instant).to_unit(Unit::Day);
    assert!(
        days_ago >= 1.0 && days_ago <= f64::from(PAST_SCAN_DAYS),
        "recent recurrence {days_ago} days ago"
    );

    // In January the whole 30-day lookback sits far from a July position, while
    // the forward window reaches the true return
    assert!(recent.distance > report.next.distance);
}

#[test]
fn test_anchor_on_the_birthday_matches_immediately() {
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let anchor = parse_utc("2026-07-14T08:30:00").unwrap();

    let report = helioday.cosmic_birthday(&birth, &anchor).unwrap();

    let offset_days = (report.next.instant - anchor).to_unit(Unit::Day);
    assert!(
        offset_days.abs() <= 2.0,
        "next recurrence {offset_days} days after an on-birthday anchor"
    );
    assert!(
        report.next.distance < 0.02,
        "recurrence distance {} AU",
        report.next.distance
    );
}

#[test]
fn test_distance_to_birth_matches_position_lookup() {
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let now = parse_utc("2026-01-05T00:00:00").unwrap();

    let distance = helioday.distance_to_birth(&birth, &now).unwrap();
    let birth_position = helioday.position_at(&birth).unwrap();
    let now_position = helioday.position_at(&now).unwrap();

    assert_eq!(distance, compute_distance(&birth_position, &now_position));
    // January vs July: Earth is on the far side of the Sun
    assert!(distance > 1.5, "distance {distance} AU");
}

#[test]
fn test_report_is_deterministic() {
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("1987-03-21T23:15:00").unwrap();
    let anchor = parse_utc("2026-08-06T12:00:00").unwrap();

    let first = helioday.cosmic_birthday(&birth, &anchor).unwrap();
    let second = helioday.cosmic_birthday(&birth, &anchor).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_windows_share_one_anchor_arithmetic() {
    // The lookback samples anchor-1 .. anchor-30; a birth one year and a few
    // days before the anchor recurs inside that range
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("2025-06-20T00:00:00").unwrap();
    let anchor = parse_utc("2026-07-05T00:00:00").unwrap();

    let report = helioday.cosmic_birthday(&birth, &anchor).unwrap();
    let recent = report.recent.expect("recurrence lies within the lookback");
    let expected = offset_by_days(anchor, -15);
    let gap = (recent.instant - expected).to_unit(Unit::Day).abs();
    assert!(gap <= 2.0, "recent recurrence {gap} days from expected");
    assert!(recent.distance < 0.02);
}

#[test]
fn test_presentation_conversion_is_linear() {
    let helioday = Helioday::new("kepler").unwrap();
    let birth = parse_utc("1996-07-14T08:30:00").unwrap();
    let now = parse_utc("2026-01-05T00:00:00").unwrap();

    let distance = helioday.distance_to_birth(&birth, &now).unwrap();
    assert_eq!(au_to_miles(distance), distance * AU_MILES);
}
