//! Place lookup for a destination.
//!
//! The `PlaceSource` trait is the seam to whatever backs the place catalogue.
//! Planners never call it: callers fetch places first and hand the resolved
//! list to a [`Planner`](crate::Planner). When a lookup fails, callers pass an
//! empty list so the planner falls back to sample places.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{Category, CityAliases, Place};

/// Errors returned by [`PlaceSource::places`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceSourceError {
    /// The source knows nothing about the destination.
    #[error("no places are known for destination '{0}'")]
    UnknownDestination(String),
    /// The backing service or file could not be read.
    #[error("place source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to candidate places.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use tripweave_core::{Category, Place, PlaceSource, PlaceSourceError};
///
/// struct SingleCity(Vec<Place>);
///
/// impl PlaceSource for SingleCity {
///     fn places(
///         &self,
///         _destination: &str,
///         category: Option<Category>,
///     ) -> Result<Vec<Place>, PlaceSourceError> {
///         Ok(self
///             .0
///             .iter()
///             .filter(|place| category.is_none_or(|wanted| place.category == wanted))
///             .cloned()
///             .collect())
///     }
/// }
///
/// let park = Place::new("p", "Park", Category::Nature, Coord { x: 0.0, y: 0.0 });
/// let source = SingleCity(vec![park]);
/// assert!(source.places("any", Some(Category::Restaurant))?.is_empty());
/// # Ok::<(), PlaceSourceError>(())
/// ```
pub trait PlaceSource {
    /// Return places for `destination`, optionally restricted to `category`.
    ///
    /// # Errors
    /// Returns [`PlaceSourceError`] when the places cannot be retrieved.
    fn places(
        &self,
        destination: &str,
        category: Option<Category>,
    ) -> Result<Vec<Place>, PlaceSourceError>;

    /// Like [`PlaceSource::places`] but degrades to an empty list on failure.
    fn places_or_empty(&self, destination: &str, category: Option<Category>) -> Vec<Place> {
        self.places(destination, category).unwrap_or_else(|err| {
            log::warn!("place lookup for '{destination}' failed: {err}; continuing without places");
            Vec::new()
        })
    }
}

/// In-memory catalogue of places keyed by canonical destination.
///
/// Lookups apply [`CityAliases`] before matching, so `"도쿄"` and `"Tokyo"`
/// reach the same entry.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripweave_core::{Catalog, Category, CityAliases, Place, PlaceSource};
///
/// let mut catalog = Catalog::new(CityAliases::builtin());
/// catalog.insert("tokyo", vec![
///     Place::new("t1", "Senso-ji", Category::Attraction, Coord { x: 139.79, y: 35.71 }),
/// ]);
/// let found = catalog.places("도쿄", None)?;
/// assert_eq!(found.len(), 1);
/// # Ok::<(), tripweave_core::PlaceSourceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Synonyms applied before lookup.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: CityAliases,
    /// Places keyed by canonical destination.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cities: BTreeMap<String, Vec<Place>>,
}

impl Catalog {
    /// Construct an empty catalogue using `aliases` for lookups.
    #[must_use]
    pub const fn new(aliases: CityAliases) -> Self {
        Self {
            aliases,
            cities: BTreeMap::new(),
        }
    }

    /// Insert or replace the places for a destination.
    pub fn insert(&mut self, destination: &str, places: Vec<Place>) {
        let key = self.aliases.normalise(destination);
        self.cities.insert(key, places);
    }

    /// Decode a catalogue from a JSON reader.
    ///
    /// City keys in the document are normalised on load.
    ///
    /// # Errors
    /// Returns the `serde_json` error when the document is malformed.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        let raw: Self = serde_json::from_reader(reader)?;
        let mut catalog = Self::new(raw.aliases);
        for (city, places) in raw.cities {
            catalog.insert(&city, places);
        }
        Ok(catalog)
    }
}

impl PlaceSource for Catalog {
    fn places(
        &self,
        destination: &str,
        category: Option<Category>,
    ) -> Result<Vec<Place>, PlaceSourceError> {
        let key = self.aliases.normalise(destination);
        let places = self
            .cities
            .get(&key)
            .ok_or_else(|| PlaceSourceError::UnknownDestination(destination.to_owned()))?;
        Ok(places
            .iter()
            .filter(|place| category.is_none_or(|wanted| place.category == wanted))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        let mut catalog = Catalog::new(CityAliases::builtin());
        catalog.insert(
            "Jeju",
            vec![
                Place::new("j1", "Hallasan", Category::Nature, Coord { x: 126.53, y: 33.36 }),
                Place::new("j2", "Black Pork Street", Category::Restaurant, Coord { x: 126.52, y: 33.51 }),
            ],
        );
        catalog
    }

    #[rstest]
    fn filters_by_category(catalog: Catalog) {
        let found = catalog.places("제주", Some(Category::Restaurant)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found.first().map(|p| p.id.as_str()), Some("j2"));
    }

    #[rstest]
    fn unknown_destination_is_an_error(catalog: Catalog) {
        let err = catalog.places("Mars", None).unwrap_err();
        assert_eq!(err, PlaceSourceError::UnknownDestination("Mars".into()));
    }

    #[rstest]
    fn failures_degrade_to_empty(catalog: Catalog) {
        assert!(catalog.places_or_empty("Mars", None).is_empty());
        assert_eq!(catalog.places_or_empty("jeju", None).len(), 2);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn json_city_keys_are_normalised() {
        let json = r#"{
            "cities": {
                " Paris ": [
                    { "id": "p1", "name": "Louvre", "category": "attraction",
                      "position": { "lat": 48.86, "lng": 2.34 } }
                ]
            }
        }"#;
        let catalog = Catalog::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.places("paris", None).unwrap().len(), 1);
    }
}
