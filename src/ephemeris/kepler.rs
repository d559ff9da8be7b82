//! Offline analytic Earth ephemeris.
//!
//! Propagates the Earth–Moon barycenter on its heliocentric orbit from the
//! approximate Keplerian elements of Standish (1992), *JPL approximate planetary
//! positions*, valid 1800–2050. Accuracy is a few thousandths of an AU, well under
//! the day-to-day motion of Earth (~0.017 AU), which is what the day-granular
//! recurrence search resolves.

use hifitime::Epoch;

use crate::constants::{Degree, Position, RADEG, T2000};
use crate::ephemeris::PositionProvider;
use crate::helioday_errors::HeliodayError;

/// Keplerian orbital elements at J2000 with secular rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    /// Semi-major axis (AU) at J2000 and its rate (AU/century)
    a0: f64,
    a_dot: f64,
    /// Eccentricity at J2000 and its rate (1/century)
    e0: f64,
    e_dot: f64,
    /// Inclination (degrees) at J2000 and its rate (degrees/century)
    i0: Degree,
    i_dot: f64,
    /// Mean longitude (degrees) at J2000 and its rate (degrees/century)
    l0: Degree,
    l_dot: f64,
    /// Longitude of perihelion (degrees) at J2000 and its rate (degrees/century)
    w0: Degree,
    w_dot: f64,
    /// Longitude of ascending node (degrees) at J2000 and its rate (degrees/century)
    node0: Degree,
    node_dot: f64,
}

/// Earth–Moon barycenter, Standish (1992) Table 1
const EM_BARYCENTER: OrbitalElements = OrbitalElements {
    a0: 1.00000261,
    a_dot: 0.00000562,
    e0: 0.01671123,
    e_dot: -0.00004392,
    i0: -0.00001531,
    i_dot: -0.01294668,
    l0: 100.46457166,
    l_dot: 35999.37244981,
    w0: 102.93768193,
    w_dot: 0.32327364,
    node0: 0.0,
    node_dot: 0.0,
};

impl Default for OrbitalElements {
    fn default() -> Self {
        EM_BARYCENTER
    }
}

/// Earth position provider computed from Keplerian elements, no network or data
/// files required.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerEphemeris {
    elements: OrbitalElements,
}

impl KeplerEphemeris {
    pub fn new() -> Self {
        KeplerEphemeris {
            elements: EM_BARYCENTER,
        }
    }
}

impl PositionProvider for KeplerEphemeris {
    fn position_at(&self, instant: &Epoch) -> Result<Position, HeliodayError> {
        let t = (instant.to_mjd_tt_days() - T2000) / 36525.0;
        Ok(heliocentric_position(&self.elements, t))
    }
}

/// Solve Kepler's equation E - e·sin(E) = M by Newton-Raphson iteration.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly in radians
/// * `eccentricity`: orbital eccentricity
///
/// Return
/// ------
/// * the eccentric anomaly in radians
fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..15 {
        let delta = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        let derivative = 1.0 - eccentricity * ecc_anomaly.cos();
        ecc_anomaly -= delta / derivative;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric ecliptic J2000 position (AU) for the given elements at
/// `t_centuries` Julian centuries from J2000.
fn heliocentric_position(elements: &OrbitalElements, t_centuries: f64) -> Position {
    let a = elements.a0 + elements.a_dot * t_centuries;
    let e = elements.e0 + elements.e_dot * t_centuries;
    let incl = (elements.i0 + elements.i_dot * t_centuries) * RADEG;
    let mean_lon = elements.l0 + elements.l_dot * t_centuries;
    let peri_lon = elements.w0 + elements.w_dot * t_centuries;
    let node_lon = elements.node0 + elements.node_dot * t_centuries;

    // Mean anomaly = mean longitude - longitude of perihelion
    let mean_anomaly = (mean_lon - peri_lon).rem_euclid(360.0) * RADEG;
    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    // True anomaly from eccentric anomaly
    let true_anomaly = 2.0
        * ((1.0 + e).sqrt() * (ecc_anomaly / 2.0).sin())
            .atan2((1.0 - e).sqrt() * (ecc_anomaly / 2.0).cos());

    // Heliocentric distance
    let r = a * (1.0 - e * ecc_anomaly.cos());

    // Argument of latitude and rotation into the ecliptic frame
    let arg_lat = (peri_lon - node_lon) * RADEG + true_anomaly;
    let node = node_lon * RADEG;

    let (sin_u, cos_u) = arg_lat.sin_cos();
    let (sin_node, cos_node) = node.sin_cos();
    let cos_i = incl.cos();

    Position::new(
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * sin_u * incl.sin(),
    )
}

#[cfg(test)]
mod kepler_tests {
    use super::*;
    use crate::time::{offset_by_days, parse_utc};
    use hifitime::{Epoch, TimeScale};

    #[test]
    fn test_solve_kepler_circular_orbit() {
        // With zero eccentricity the eccentric anomaly equals the mean anomaly
        for m in [0.0, 0.5, 1.0, 3.0] {
            assert_eq!(solve_kepler(m, 0.0), m);
        }
    }

    #[test]
    fn test_solve_kepler_satisfies_equation() {
        let e = 0.0167;
        for m in [0.1, 1.0, 2.5, 4.0, 6.0] {
            let ecc_anomaly = solve_kepler(m, e);
            let residual = ecc_anomaly - e * ecc_anomaly.sin() - m;
            assert!(residual.abs() < 1e-10, "residual {residual} for M={m}");
        }
    }

    #[test]
    fn test_earth_position_at_j2000() {
        let kepler = KeplerEphemeris::new();
        let j2000 = Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::TT);
        let position = kepler.position_at(&j2000).unwrap();

        // Earth near perihelion in early January, heliocentric longitude ~100°
        assert!(position.x > -0.20 && position.x < -0.15, "x = {}", position.x);
        assert!(position.y > 0.94 && position.y < 0.99, "y = {}", position.y);
        assert!(position.z.abs() < 1e-4, "z = {}", position.z);

        let r = position.norm();
        assert!(r > 0.982 && r < 0.985, "perihelion distance {r} AU");
    }

    #[test]
    fn test_earth_distance_over_one_orbit() {
        let kepler = KeplerEphemeris::new();
        let anchor = parse_utc("2020-01-01T00:00:00").unwrap();
        for offset in [0, 91, 182, 273] {
            let position = kepler.position_at(&offset_by_days(anchor, offset)).unwrap();
            let r = position.norm();
            assert!(
                r > 0.983 && r < 1.017,
                "day {offset}: distance {r} AU outside expected range"
            );
        }
    }

    #[test]
    fn test_near_annual_recurrence() {
        // After 365 days Earth trails its previous position by ~0.25° of mean
        // anomaly, a few thousandths of an AU
        let kepler = KeplerEphemeris::new();
        let anchor = parse_utc("1996-07-14T08:30:00").unwrap();
        let start = kepler.position_at(&anchor).unwrap();
        let one_year_later = kepler
            .position_at(&offset_by_days(anchor, 365))
            .unwrap();
        let gap = (start - one_year_later).norm();
        assert!(gap < 0.01, "recurrence gap {gap} AU");

        // Half a year later Earth is on the far side of the orbit
        let half_year = kepler.position_at(&offset_by_days(anchor, 183)).unwrap();
        let far = (start - half_year).norm();
        assert!(far > 1.9, "opposition distance {far} AU");
    }

    #[test]
    fn test_determinism() {
        let kepler = KeplerEphemeris::new();
        let instant = parse_utc("2026-03-05T17:00:00").unwrap();
        assert_eq!(
            kepler.position_at(&instant).unwrap(),
            kepler.position_at(&instant).unwrap()
        );
    }
}
