//! Great-circle distance between coordinates.

use geo::Coord;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometres between two WGS84 coordinates using the
/// Haversine formula.
///
/// The result is symmetric and zero for identical points. Non-finite input
/// propagates into a non-finite result.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripweave_core::haversine_km;
///
/// let tokyo = Coord { x: 139.6503, y: 35.6762 };
/// let osaka = Coord { x: 135.5023, y: 34.6937 };
/// let km = haversine_km(tokyo, osaka);
/// assert!((km - 392.4).abs() < 1.0);
/// assert_eq!(haversine_km(tokyo, tokyo), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is inherently floating-point"
)]
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
