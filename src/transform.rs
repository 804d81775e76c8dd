//! Conversion between ETRS-TM35FIN (EPSG:3067) and WGS84 (EPSG:4326)
//!
//! EPSG:3067 is plain UTM zone 35 on the GRS80 ellipsoid. The projection is
//! evaluated with the 6th-order Krüger series (Poder/Engsager form), the same
//! closed-form approach PROJ uses for `+proj=utm`. Conformal latitude is
//! turned back into geodetic latitude with a trigonometric series, so neither
//! direction iterates.

use crate::error::{Error, Result};
use crate::types::{GeoPoint, ProjectedPoint};
use std::sync::LazyLock;

/// PROJ definition of EPSG:3067 (ETRS-TM35FIN)
pub const EPSG_3067_DEFINITION: &str =
    "+proj=utm +zone=35 +ellps=GRS80 +datum=WGS84 +units=m +no_defs";

const UTM_SCALE_FACTOR: f64 = 0.9996;
const UTM_FALSE_EASTING: f64 = 500_000.0;
const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

static ETRS_TM35FIN: LazyLock<TransverseMercator> =
    LazyLock::new(|| TransverseMercator::new_utm(35, false, Ellipsoid::GRS80));

/// Reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// Inverse flattening
    pub inv_f: f64,
}

impl Ellipsoid {
    pub const GRS80: Self = Self {
        a: 6_378_137.0,
        inv_f: 298.257_222_101,
    };

    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        inv_f: 298.257_223_563,
    };

    /// Look up by PROJ `+ellps=` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GRS80" => Some(Self::GRS80),
            "WGS84" => Some(Self::WGS84),
            _ => None,
        }
    }

    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_f
    }

    /// Third flattening `n = f / (2 - f)`
    pub fn third_flattening(&self) -> f64 {
        let f = self.flattening();
        f / (2.0 - f)
    }
}

/// A UTM (transverse Mercator) projection
#[derive(Debug, Clone, PartialEq)]
pub struct TransverseMercator {
    zone: u8,
    south: bool,
    ellipsoid: Ellipsoid,

    /// Central meridian in radians
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
    /// `k0 * A`, the rectifying radius scaled to the central meridian
    scaled_radius: f64,

    /// Conformal sphere -> ellipsoidal plane (Krüger α)
    alpha: [f64; 6],
    /// Ellipsoidal plane -> conformal sphere (Krüger β)
    beta: [f64; 6],
    geodetic_to_conformal: [f64; 6],
    conformal_to_geodetic: [f64; 6],
}

impl TransverseMercator {
    /// Create a UTM projection for `zone` (1-60)
    pub fn utm(zone: u8, south: bool, ellipsoid: Ellipsoid) -> Result<Self> {
        if !(1..=60).contains(&zone) {
            return Err(Error::InvalidProjection(format!("UTM zone {zone} out of range")));
        }

        Ok(Self::new_utm(zone, south, ellipsoid))
    }

    /// Parse a PROJ definition string
    ///
    /// Only the parameters needed to describe a UTM zone are understood:
    /// `+proj=utm`, `+zone`, `+south`, `+ellps` (GRS80 or WGS84),
    /// `+datum=WGS84`, `+units=m` and `+no_defs`. An explicit `+ellps` takes
    /// precedence over the ellipsoid implied by `+datum`.
    pub fn from_proj_definition(definition: &str) -> Result<Self> {
        let mut proj = None;
        let mut zone = None;
        let mut south = false;
        let mut ellps = None;
        let mut datum_ellps = None;

        for token in definition.split_whitespace() {
            let unsupported = || Error::InvalidProjection(token.to_string());

            let param = token.strip_prefix('+').ok_or_else(unsupported)?;
            let (key, value) = match param.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (param, None),
            };

            match (key, value) {
                ("proj", Some(value)) => proj = Some(value),
                ("zone", Some(value)) => {
                    zone = Some(value.parse::<u8>().map_err(|_| unsupported())?);
                }
                ("south", None) => south = true,
                ("ellps", Some(value)) => {
                    ellps = Some(Ellipsoid::from_name(value).ok_or_else(unsupported)?);
                }
                ("datum", Some("WGS84")) => datum_ellps = Some(Ellipsoid::WGS84),
                ("units", Some("m")) | ("no_defs", None) => {}
                _ => return Err(unsupported()),
            }
        }

        if proj != Some("utm") {
            return Err(Error::InvalidProjection(format!(
                "expected +proj=utm in {definition:?}"
            )));
        }

        let zone = zone.ok_or_else(|| {
            Error::InvalidProjection(format!("missing +zone in {definition:?}"))
        })?;
        let ellipsoid = ellps.or(datum_ellps).unwrap_or(Ellipsoid::GRS80);

        Self::utm(zone, south, ellipsoid)
    }

    fn new_utm(zone: u8, south: bool, ellipsoid: Ellipsoid) -> Self {
        let n = ellipsoid.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let rectifying_radius =
            ellipsoid.a / (1.0 + n) * (1.0 + n2 * (1.0 / 4.0 + n2 * (1.0 / 64.0 + n2 / 256.0)));

        let alpha = [
            n * (1.0 / 2.0
                + n * (-2.0 / 3.0
                    + n * (5.0 / 16.0
                        + n * (41.0 / 180.0 + n * (-127.0 / 288.0 + n * 7891.0 / 37800.0))))),
            n2 * (13.0 / 48.0
                + n * (-3.0 / 5.0
                    + n * (557.0 / 1440.0 + n * (281.0 / 630.0 + n * -1983433.0 / 1935360.0)))),
            n3 * (61.0 / 240.0
                + n * (-103.0 / 140.0 + n * (15061.0 / 26880.0 + n * 167603.0 / 181440.0))),
            n4 * (49561.0 / 161280.0 + n * (-179.0 / 168.0 + n * 6601661.0 / 7257600.0)),
            n5 * (34729.0 / 80640.0 + n * -3418889.0 / 1995840.0),
            n6 * (212378941.0 / 319334400.0),
        ];

        let beta = [
            n * (1.0 / 2.0
                + n * (-2.0 / 3.0
                    + n * (37.0 / 96.0
                        + n * (-1.0 / 360.0 + n * (-81.0 / 512.0 + n * 96199.0 / 604800.0))))),
            n2 * (1.0 / 48.0
                + n * (1.0 / 15.0
                    + n * (-437.0 / 1440.0 + n * (46.0 / 105.0 + n * -1118711.0 / 3870720.0)))),
            n3 * (17.0 / 480.0
                + n * (-37.0 / 840.0 + n * (-209.0 / 4480.0 + n * 5569.0 / 90720.0))),
            n4 * (4397.0 / 161280.0 + n * (-11.0 / 504.0 + n * -830251.0 / 7257600.0)),
            n5 * (4583.0 / 161280.0 + n * -108847.0 / 3991680.0),
            n6 * (20648693.0 / 638668800.0),
        ];

        let geodetic_to_conformal = [
            n * (-2.0
                + n * (2.0 / 3.0
                    + n * (4.0 / 3.0
                        + n * (-82.0 / 45.0 + n * (32.0 / 45.0 + n * 4642.0 / 4725.0))))),
            n2 * (5.0 / 3.0
                + n * (-16.0 / 15.0
                    + n * (-13.0 / 9.0 + n * (904.0 / 315.0 + n * -1522.0 / 945.0)))),
            n3 * (-26.0 / 15.0 + n * (34.0 / 21.0 + n * (8.0 / 5.0 + n * -12686.0 / 2835.0))),
            n4 * (1237.0 / 630.0 + n * (-12.0 / 5.0 + n * -24832.0 / 14175.0)),
            n5 * (-734.0 / 315.0 + n * 109598.0 / 31185.0),
            n6 * (444337.0 / 155925.0),
        ];

        let conformal_to_geodetic = [
            n * (2.0
                + n * (-2.0 / 3.0
                    + n * (-2.0
                        + n * (116.0 / 45.0 + n * (26.0 / 45.0 + n * -2854.0 / 675.0))))),
            n2 * (7.0 / 3.0
                + n * (-8.0 / 5.0
                    + n * (-227.0 / 45.0 + n * (2704.0 / 315.0 + n * 2323.0 / 945.0)))),
            n3 * (56.0 / 15.0
                + n * (-136.0 / 35.0 + n * (-1262.0 / 105.0 + n * 73814.0 / 2835.0))),
            n4 * (4279.0 / 630.0 + n * (-332.0 / 35.0 + n * -399572.0 / 14175.0)),
            n5 * (4174.0 / 315.0 + n * -144838.0 / 6237.0),
            n6 * (601676.0 / 22275.0),
        ];

        Self {
            zone,
            south,
            ellipsoid,
            lon0: (f64::from(zone) * 6.0 - 183.0).to_radians(),
            false_easting: UTM_FALSE_EASTING,
            false_northing: if south { UTM_FALSE_NORTHING_SOUTH } else { 0.0 },
            scaled_radius: UTM_SCALE_FACTOR * rectifying_radius,
            alpha,
            beta,
            geodetic_to_conformal,
            conformal_to_geodetic,
        }
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn is_south(&self) -> bool {
        self.south
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Central meridian in degrees
    pub fn central_meridian(&self) -> f64 {
        self.lon0.to_degrees()
    }

    /// Projected (easting, northing) -> geographic (lat, lng)
    pub fn inverse(&self, point: ProjectedPoint) -> Result<GeoPoint> {
        if !point.is_finite() {
            return Err(Error::InvalidCoordinate {
                x: point.easting,
                y: point.northing,
            });
        }

        let xi = (point.northing - self.false_northing) / self.scaled_radius;
        let eta = (point.easting - self.false_easting) / self.scaled_radius;

        // Ellipsoidal plane -> conformal sphere
        let mut xi_s = xi;
        let mut eta_s = eta;
        for (j, b) in self.beta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi_s -= b * (k * xi).sin() * (k * eta).cosh();
            eta_s -= b * (k * xi).cos() * (k * eta).sinh();
        }

        let chi = (xi_s.sin() / eta_s.cosh()).asin();
        let lat = chi + sin_series(&self.conformal_to_geodetic, chi);
        let lng = self.lon0 + eta_s.sinh().atan2(xi_s.cos());

        let result = GeoPoint::new(lat.to_degrees(), lng.to_degrees());
        if !result.is_finite() {
            return Err(Error::InvalidCoordinate {
                x: point.easting,
                y: point.northing,
            });
        }

        Ok(result)
    }

    /// Geographic (lat, lng) -> projected (easting, northing)
    pub fn forward(&self, point: GeoPoint) -> Result<ProjectedPoint> {
        let invalid = || Error::InvalidCoordinate {
            x: point.lng,
            y: point.lat,
        };

        if !point.is_valid() {
            return Err(invalid());
        }

        let lat = point.lat.to_radians();
        let dlng = point.lng.to_radians() - self.lon0;

        let chi = lat + sin_series(&self.geodetic_to_conformal, lat);
        let xi_s = chi.sin().atan2(chi.cos() * dlng.cos());
        let eta_s = (chi.cos() * dlng.sin()).atanh();

        // Conformal sphere -> ellipsoidal plane
        let mut xi = xi_s;
        let mut eta = eta_s;
        for (j, a) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi += a * (k * xi_s).sin() * (k * eta_s).cosh();
            eta += a * (k * xi_s).cos() * (k * eta_s).sinh();
        }

        let result = ProjectedPoint::new(
            self.false_easting + self.scaled_radius * eta,
            self.false_northing + self.scaled_radius * xi,
        );
        if !result.is_finite() {
            return Err(invalid());
        }

        Ok(result)
    }
}

/// `Σ c[j] · sin(2(j+1)·angle)`
fn sin_series(coefficients: &[f64; 6], angle: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(j, c)| c * (2.0 * (j + 1) as f64 * angle).sin())
        .sum()
}

/// The EPSG:3067 projection, shared across the process
pub fn etrs_tm35fin() -> &'static TransverseMercator {
    &ETRS_TM35FIN
}

/// Convert an EPSG:3067 point to EPSG:4326
pub fn to_wgs84(point: ProjectedPoint) -> Result<GeoPoint> {
    etrs_tm35fin().inverse(point)
}

/// Convert an EPSG:4326 point to EPSG:3067
pub fn to_etrs_tm35fin(point: GeoPoint) -> Result<ProjectedPoint> {
    etrs_tm35fin().forward(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use claims::assert_ok;
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn oulu_reference_point() {
        // Traffic light OULU175 (Raitotie-Pöllöntie) as delivered by the backend
        let point = to_wgs84(ProjectedPoint::new(429_616.0, 7_216_617.0)).unwrap();
        assert_abs_diff_eq!(point.lat, 65.065_760_768_928_14, epsilon = 1e-6);
        assert_abs_diff_eq!(point.lng, 25.503_654_160_943_015, epsilon = 1e-6);
    }

    #[test]
    fn central_meridian_reference() {
        // Meridian arc to 60°N on GRS80 is 6 654 072.819 m, scaled by k0
        let point = to_wgs84(ProjectedPoint::new(500_000.0, 6_651_411.190_239_697)).unwrap();
        assert_abs_diff_eq!(point.lat, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lng, 27.0, epsilon = 1e-12);
    }

    #[test]
    fn false_origin_maps_to_equator() {
        let point = to_wgs84(ProjectedPoint::new(500_000.0, 0.0)).unwrap();
        assert_abs_diff_eq!(point.lat, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.lng, 27.0, epsilon = 1e-12);
    }

    #[test]
    fn forward_reference_point() {
        let point = to_etrs_tm35fin(GeoPoint::new(65.0, 25.0)).unwrap();
        assert_abs_diff_eq!(point.easting, 405_698.987_608_49, epsilon = 1e-3);
        assert_abs_diff_eq!(point.northing, 7_209_946.445_952_07, epsilon = 1e-3);
    }

    #[test]
    fn forward_inverse_agree() {
        for (easting, northing) in [(300_000.0, 7_500_000.0), (385_000.0, 6_672_000.0)] {
            let original = ProjectedPoint::new(easting, northing);
            let geographic = to_wgs84(original).unwrap();
            let projected = to_etrs_tm35fin(geographic).unwrap();
            assert_abs_diff_eq!(projected.easting, easting, epsilon = 1e-6);
            assert_abs_diff_eq!(projected.northing, northing, epsilon = 1e-6);
        }
    }

    #[test]
    fn southern_hemisphere_false_northing() {
        let projection = TransverseMercator::utm(35, true, Ellipsoid::GRS80).unwrap();
        let point = projection.inverse(ProjectedPoint::new(500_000.0, 10_000_000.0)).unwrap();
        assert_abs_diff_eq!(point.lat, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.lng, 27.0, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let result = to_wgs84(ProjectedPoint::new(f64::NAN, 7_216_617.0));
        assert_compact_debug_snapshot!(result.unwrap_err(), @"InvalidCoordinate { x: NaN, y: 7216617.0 }");

        let result = to_etrs_tm35fin(GeoPoint::new(65.0, f64::INFINITY));
        assert_compact_debug_snapshot!(result.unwrap_err(), @"InvalidCoordinate { x: inf, y: 65.0 }");

        let result = to_etrs_tm35fin(GeoPoint::new(91.0, 25.0));
        assert_compact_debug_snapshot!(result.unwrap_err(), @"InvalidCoordinate { x: 25.0, y: 91.0 }");
    }

    #[test]
    fn epsg_3067_definition_matches_builtin() {
        let parsed = assert_ok!(TransverseMercator::from_proj_definition(EPSG_3067_DEFINITION));
        assert_eq!(&parsed, etrs_tm35fin());
        assert_eq!(parsed.zone(), 35);
        assert!(!parsed.is_south());
        assert_eq!(parsed.ellipsoid(), Ellipsoid::GRS80);
        assert_abs_diff_eq!(parsed.central_meridian(), 27.0, epsilon = 1e-12);
    }

    #[test]
    fn datum_implies_ellipsoid_without_ellps() {
        let parsed = TransverseMercator::from_proj_definition("+proj=utm +zone=34 +datum=WGS84").unwrap();
        assert_eq!(parsed.ellipsoid(), Ellipsoid::WGS84);
        assert_abs_diff_eq!(parsed.central_meridian(), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn unsupported_definitions() {
        let result = TransverseMercator::from_proj_definition("+proj=merc +ellps=GRS80");
        assert_compact_debug_snapshot!(result.unwrap_err(), @r#"InvalidProjection("expected +proj=utm in \"+proj=merc +ellps=GRS80\"")"#);

        let result = TransverseMercator::from_proj_definition("+proj=utm +zone=35 +ellps=intl");
        assert_compact_debug_snapshot!(result.unwrap_err(), @r#"InvalidProjection("+ellps=intl")"#);

        let result = TransverseMercator::from_proj_definition("+proj=utm +zone=61");
        assert_compact_debug_snapshot!(result.unwrap_err(), @r#"InvalidProjection("UTM zone 61 out of range")"#);

        let result = TransverseMercator::from_proj_definition("+proj=utm");
        assert_compact_debug_snapshot!(result.unwrap_err(), @r#"InvalidProjection("missing +zone in \"+proj=utm\"")"#);

        let result = TransverseMercator::from_proj_definition("proj=utm +zone=35");
        assert_compact_debug_snapshot!(result.unwrap_err(), @r#"InvalidProjection("proj=utm")"#);
    }
}
