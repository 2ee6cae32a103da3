/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_009.0;

/// A sphere used to turn angular separation into surface distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius_meters: f64,
}

impl Sphere {
    pub const EARTH: Sphere = Sphere {
        radius_meters: EARTH_RADIUS_METERS,
    };

    pub fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    /// Great-circle distance using the spherical law of cosines (atan2 form).
    /// Input lat/lon in degrees, expected finite and within [-90, 90] / [-180, 180].
    /// Output in meters, never negative.
    pub fn distance_meters(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let (lat1, lon1, lat2, lon2) = (
            lat1.to_radians(),
            lon1.to_radians(),
            lat2.to_radians(),
            lon2.to_radians(),
        );
        let dlon = lon2 - lon1;
        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_lat2, cos_lat2) = lat2.sin_cos();
        let (sin_dlon, cos_dlon) = dlon.sin_cos();

        let y = ((cos_lat2 * sin_dlon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon).powi(2))
        .sqrt();
        let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon;
        // y >= 0, so atan2 stays in [0, pi]
        y.atan2(x) * self.radius_meters
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::EARTH
    }
}

/// Distance on [`Sphere::EARTH`].
pub fn great_circle_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Sphere::EARTH.distance_meters(lat1, lon1, lat2, lon2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(great_circle_meters(55.75, 37.62, 55.75, 37.62), 0.0);
        assert_eq!(great_circle_meters(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(great_circle_meters(-33.9, 151.2, -33.9, 151.2), 0.0);
    }

    #[test]
    fn quarter_meridian() {
        let d = great_circle_meters(0.0, 0.0, 90.0, 0.0);
        let expected = FRAC_PI_2 * EARTH_RADIUS_METERS;
        assert!((d - expected).abs() < TOLERANCE, "got {}, expected {}", d, expected);
        assert!((d - 10_007_543.0).abs() < 1.0);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = great_circle_meters(0.0, 0.0, 0.0, 180.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((d - expected).abs() < 1e-3, "got {}, expected {}", d, expected);
    }

    #[test]
    fn symmetric_and_non_negative() {
        let points = [
            (55.7558, 37.6173),
            (59.9343, 30.3351),
            (-33.8688, 151.2093),
            (40.7128, -74.0060),
            (0.0, 0.0),
            (90.0, 0.0),
            (-90.0, 180.0),
        ];
        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                let ab = great_circle_meters(lat1, lon1, lat2, lon2);
                let ba = great_circle_meters(lat2, lon2, lat1, lon1);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < TOLERANCE, "{} != {}", ab, ba);
            }
        }
    }

    #[test]
    fn moscow_to_saint_petersburg() {
        // roughly 634 km
        let d = great_circle_meters(55.7558, 37.6173, 59.9343, 30.3351);
        assert!((d - 634_000.0).abs() < 5_000.0, "got {}", d);
    }

    #[test]
    fn radius_scales_distance() {
        let unit = Sphere::new(1.0).distance_meters(0.0, 0.0, 90.0, 0.0);
        assert!((unit - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Sphere::default(), Sphere::EARTH);
    }
}
