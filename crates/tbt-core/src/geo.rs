//! Geographic coordinate type and spatial utilities.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Proximity regions are only
//! ~20 m across, so single precision (≈1 m at the equator) would eat a
//! noticeable share of the radius.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Metres per degree of latitude (and of longitude at the equator).
pub const METRES_PER_DEGREE: f64 = 111_320.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are finite and within WGS-84 bounds.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Shift by `north_m` / `east_m` metres using a local flat-earth
    /// approximation.  Good to well under a metre over a few kilometres.
    pub fn offset_m(self, north_m: f64, east_m: f64) -> Coordinate {
        let d_lat = north_m / METRES_PER_DEGREE;
        let d_lon = east_m / (METRES_PER_DEGREE * self.lat.to_radians().cos().max(1e-6));
        Coordinate::new(self.lat + d_lat, self.lon + d_lon)
    }

    /// Point a fraction `t ∈ [0, 1]` of the way from `self` to `other`,
    /// interpolated linearly in degrees.
    pub fn lerp(self, other: Coordinate, t: f64) -> Coordinate {
        let t = t.clamp(0.0, 1.0);
        Coordinate::new(
            self.lat + (other.lat - self.lat) * t,
            self.lon + (other.lon - self.lon) * t,
        )
    }

    /// Degrees of latitude/longitude that are guaranteed to cover `radius_m`
    /// metres around `self`.  Used to size bounding-box pre-filters.
    #[inline]
    pub fn degree_span(self, radius_m: f64) -> f64 {
        let lon_scale = self.lat.to_radians().cos().abs().max(1e-6);
        radius_m / (METRES_PER_DEGREE * lon_scale)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
