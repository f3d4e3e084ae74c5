//! Celestial coordinate value type and conversions.
//!
//! Right ascension and declination are stored in degrees, the catalog's
//! native unit. Hour-angle values exist only through the explicit
//! conversion helpers.

use nalgebra::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialCoordinate {
    /// Right ascension in degrees, by convention in [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, -90 to +90.
    pub dec_deg: f64,
}

impl CelestialCoordinate {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        debug_assert!(ra_deg.is_finite() && dec_deg.is_finite());
        debug_assert!((-90.0..=90.0).contains(&dec_deg));
        Self { ra_deg, dec_deg }
    }

    pub fn from_ra_hours(ra_hours: f64, dec_deg: f64) -> Self {
        Self::new(ra_hours * 15.0, dec_deg)
    }

    /// Right ascension as an hour angle in [0, 24).
    pub fn ra_hours(&self) -> f64 {
        let mut hours = (self.ra_deg / 15.0) % 24.0;
        if hours < 0.0 {
            hours += 24.0;
        }
        hours
    }

    /// Unit direction vector with +Z at the celestial north pole.
    pub fn to_direction(&self) -> Vector3<f64> {
        let ra = self.ra_deg.to_radians();
        let dec = self.dec_deg.to_radians();
        Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
    }

    /// Inverse of `to_direction`. At the poles the right ascension is
    /// undefined and comes back as 0.
    pub fn from_direction(dir: &Vector3<f64>) -> Self {
        let dec_deg = dir.z.clamp(-1.0, 1.0).asin().to_degrees();
        let mut ra_deg = dir.y.atan2(dir.x).to_degrees();
        if ra_deg < 0.0 {
            ra_deg += 360.0;
        }
        Self { ra_deg, dec_deg }
    }

    pub fn format_ra(&self) -> String {
        let total = self.ra_hours();
        let h = total.floor();
        let minutes = (total - h) * 60.0;
        let m = minutes.floor();
        let s = (minutes - m) * 60.0;
        format!("{:02}h {:02}m {:02.0}s", h as u32, m as u32, s)
    }

    pub fn format_dec(&self) -> String {
        let sign = if self.dec_deg < 0.0 { '-' } else { '+' };
        let abs = self.dec_deg.abs();
        let d = abs.floor();
        let m = (abs - d) * 60.0;
        format!("{}{:02}\u{00b0} {:02.0}\u{2032}", sign, d as u32, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "expected {a} ~= {b} (diff = {})",
            (a - b).abs()
        );
    }

    #[test]
    fn roundtrip_direction() {
        let cases = [
            (0.0, 0.0),
            (180.0, 0.0),
            (45.0, 30.0),
            (270.0, -45.0),
            (359.9, 89.0),
            (123.456, -67.89),
        ];
        for (ra, dec) in cases {
            let coord = CelestialCoordinate::new(ra, dec);
            let back = CelestialCoordinate::from_direction(&coord.to_direction());
            assert_close(back.ra_deg, ra, EPS);
            assert_close(back.dec_deg, dec, EPS);
        }
    }

    #[test]
    fn known_directions() {
        let x = CelestialCoordinate::new(0.0, 0.0).to_direction();
        assert_close(x.x, 1.0, EPS);
        assert_close(x.y, 0.0, EPS);
        assert_close(x.z, 0.0, EPS);

        let y = CelestialCoordinate::new(90.0, 0.0).to_direction();
        assert_close(y.y, 1.0, EPS);

        let north = CelestialCoordinate::new(0.0, 90.0).to_direction();
        assert_close(north.z, 1.0, EPS);

        let south = CelestialCoordinate::new(0.0, -90.0).to_direction();
        assert_close(south.z, -1.0, EPS);
    }

    #[test]
    fn direction_is_unit_length() {
        let dir = CelestialCoordinate::new(211.7, -33.2).to_direction();
        assert_close(dir.norm(), 1.0, EPS);
    }

    #[test]
    fn poles_yield_finite_ra() {
        let north = CelestialCoordinate::from_direction(&Vector3::new(0.0, 0.0, 1.0));
        assert!(north.ra_deg.is_finite());
        assert_close(north.dec_deg, 90.0, EPS);

        let south = CelestialCoordinate::from_direction(&Vector3::new(0.0, 0.0, -1.0));
        assert!(south.ra_deg.is_finite());
        assert_close(south.dec_deg, -90.0, EPS);
    }

    #[test]
    fn negative_atan2_branch_normalized() {
        // A direction in the -Y half space comes back with RA in [180, 360).
        let coord = CelestialCoordinate::new(300.0, 10.0);
        let back = CelestialCoordinate::from_direction(&coord.to_direction());
        assert_close(back.ra_deg, 300.0, EPS);
    }

    #[test]
    fn hour_angle_conversions() {
        let coord = CelestialCoordinate::new(90.0, 0.0);
        assert_close(coord.ra_hours(), 6.0, EPS);

        let from_hours = CelestialCoordinate::from_ra_hours(18.0, -20.0);
        assert_close(from_hours.ra_deg, 270.0, EPS);
        assert_close(from_hours.ra_hours(), 18.0, EPS);
    }

    #[test]
    fn formatting() {
        let coord = CelestialCoordinate::new(88.79, 7.41);
        assert_eq!(coord.format_ra(), "05h 55m 10s");
        assert_eq!(coord.format_dec(), "+07\u{00b0} 25\u{2032}");

        let southern = CelestialCoordinate::new(0.0, -8.2);
        assert_eq!(southern.format_dec(), "-08\u{00b0} 12\u{2032}");
    }
}
