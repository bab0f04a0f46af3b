//! Candidate places and their categories.

use std::convert::Infallible;

use geo::Coord;

/// Broad kind of a candidate place.
///
/// Unrecognised category strings parse to [`Category::Other`], which scorers
/// and planners treat as neutral.
///
/// # Examples
/// ```
/// use tripweave_core::Category;
///
/// assert_eq!("restaurant".parse(), Ok(Category::Restaurant));
/// assert_eq!("karaoke".parse(), Ok(Category::Other));
/// assert_eq!(Category::Nature.to_string(), "nature");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Sightseeing landmarks, museums and towers.
    Attraction,
    /// Places to eat.
    Restaurant,
    /// Hands-on venues, shopping and entertainment.
    Experience,
    /// Parks, beaches and other natural sites.
    Nature,
    /// Anything else.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Restaurant => "restaurant",
            Self::Experience => "experience",
            Self::Nature => "nature",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "attraction" => Self::Attraction,
            "restaurant" => Self::Restaurant,
            "experience" => Self::Experience,
            "nature" => Self::Nature,
            _ => Self::Other,
        })
    }
}

/// A point of interest offered to the planner.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Missing
/// rating and review figures deserialise to zero.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripweave_core::{Category, Place};
///
/// let place = Place::new("t1", "Tokyo Tower", Category::Attraction, Coord { x: 139.74, y: 35.65 })
///     .with_rating(4.5, 2_000)
///     .with_address("4 Chome-2-8 Shibakoen");
///
/// assert_eq!(place.id, "t1");
/// assert_eq!(place.review_count, 2_000);
/// assert_eq!(place.note(), Some("4 Chome-2-8 Shibakoen"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Place {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Kind of place.
    pub category: Category,
    /// Average rating, typically `0.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub review_count: u32,
    /// Geospatial position.
    #[cfg_attr(feature = "serde", serde(rename = "position", with = "crate::coord"))]
    pub location: Coord<f64>,
    /// Street address.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub address: Option<String>,
    /// Free-form description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Opening hours as published by the venue.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub open_hours: Option<String>,
    /// Venue website.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub website: Option<String>,
    /// Reference to a representative image.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_url: Option<String>,
    /// Free-form descriptive tags.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub tags: Vec<String>,
}

impl Place {
    /// Construct a place with no rating, reviews or optional details.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rating: 0.0,
            review_count: 0,
            location,
            address: None,
            description: None,
            open_hours: None,
            website: None,
            image_url: None,
            tags: Vec::new(),
        }
    }

    /// Set the rating and review count while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Text shown alongside a scheduled visit: the description when present,
    /// otherwise the address.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .or(self.address.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("attraction", Category::Attraction)]
    #[case(" Restaurant ", Category::Restaurant)]
    #[case("EXPERIENCE", Category::Experience)]
    #[case("nature", Category::Nature)]
    #[case("nightlife", Category::Other)]
    #[case("", Category::Other)]
    fn parses_categories_leniently(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(raw.parse::<Category>(), Ok(expected));
    }

    #[test]
    fn note_prefers_description_over_address() {
        let place = Place::new("p", "Park", Category::Nature, Coord { x: 0.0, y: 0.0 })
            .with_address("1 Park Lane")
            .with_description("Cherry blossoms in spring");
        assert_eq!(place.note(), Some("Cherry blossoms in spring"));
    }

    #[test]
    fn blank_description_falls_back_to_address() {
        let place = Place::new("p", "Park", Category::Nature, Coord { x: 0.0, y: 0.0 })
            .with_address("1 Park Lane")
            .with_description("  ");
        assert_eq!(place.note(), Some("1 Park Lane"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_with_missing_numbers_and_unknown_category() {
        let json = r#"{
            "id": "x1",
            "name": "Arcade",
            "category": "gaming",
            "position": { "lat": 35.0, "lng": 139.0 }
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.category, Category::Other);
        assert_eq!(place.review_count, 0);
        assert!(place.rating.abs() < f64::EPSILON);
        assert_eq!(place.location, Coord { x: 139.0, y: 35.0 });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_camel_case_fields() {
        let json = r#"{
            "id": "r1",
            "name": "Sushi Dai",
            "category": "restaurant",
            "rating": 4.7,
            "reviewCount": 3200,
            "imageUrl": "sushi.jpg",
            "position": { "lat": 35.66, "lng": 139.77 }
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.review_count, 3200);
        assert_eq!(place.image_url.as_deref(), Some("sushi.jpg"));
    }
}
