//! Serde adapters rendering [`geo::Coord`] as `{ "lat": .., "lng": .. }`.
//!
//! Coordinates are held as WGS84 with `x = longitude` and `y = latitude`,
//! while documents exchanged with callers use the named form.

use std::collections::BTreeMap;

use geo::Coord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

pub(crate) fn serialize<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    LatLng::from(*coord).serialize(serializer)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Coord<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    LatLng::deserialize(deserializer).map(Coord::from)
}

pub(crate) mod option {
    use super::{Coord, Deserialize, Deserializer, LatLng, Serialize, Serializer};

    pub(crate) fn serialize<S>(coord: &Option<Coord<f64>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        coord.map(LatLng::from).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Coord<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<LatLng>::deserialize(deserializer).map(|value| value.map(Coord::from))
    }
}

pub(crate) mod map {
    use super::{BTreeMap, Coord, Deserialize, Deserializer, LatLng, Serializer};

    pub(crate) fn serialize<S>(
        coords: &BTreeMap<String, Coord<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(coords.iter().map(|(key, coord)| (key, LatLng::from(*coord))))
    }

    pub(crate) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Coord<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, LatLng>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(key, value)| (key, Coord::from(value)))
            .collect())
    }
}
