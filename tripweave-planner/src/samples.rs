//! Placeholder places for runs that received no candidates.

use geo::Coord;
use tripweave_core::{Category, Place};

/// Three generic places around `anchor`: an attraction on the anchor, a
/// restaurant to the north-east and a nature spot to the south-east.
///
/// Identifiers are `{key}-sample-1` to `{key}-sample-3`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripweave_planner::sample_places;
///
/// let places = sample_places("paris", Coord { x: 2.3522, y: 48.8566 });
/// let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
/// assert_eq!(ids, ["paris-sample-1", "paris-sample-2", "paris-sample-3"]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "sample places are offset from the anchor in degrees"
)]
pub fn sample_places(key: &str, anchor: Coord<f64>) -> Vec<Place> {
    let sample = |index: u8,
                  name: &str,
                  category: Category,
                  rating: f64,
                  reviews: u32,
                  offset: Coord<f64>| {
        Place::new(
            format!("{key}-sample-{index}"),
            name,
            category,
            Coord {
                x: anchor.x + offset.x,
                y: anchor.y + offset.y,
            },
        )
        .with_rating(rating, reviews)
        .with_description(format!("Sample {category} near {key}"))
    };
    vec![
        sample(
            1,
            "City landmark",
            Category::Attraction,
            4.5,
            1000,
            Coord { x: 0.0, y: 0.0 },
        ),
        sample(
            2,
            "Local restaurant",
            Category::Restaurant,
            4.3,
            800,
            Coord { x: 0.01, y: 0.01 },
        ),
        sample(
            3,
            "City park",
            Category::Nature,
            4.6,
            1200,
            Coord { x: 0.02, y: -0.01 },
        ),
    ]
}
