//! Unit tests for tag boosts and the preference scorer.

use geo::Coord;
use rstest::{fixture, rstest};
use tripweave_core::{Category, Place, Scorer, TripPreferences};

use crate::{BoostError, CategoryWeights, PreferenceScorer, TagBoosts};

const EPSILON: f64 = 1e-9;

fn place(id: &str, category: Category, rating: f64, reviews: u32) -> Place {
    Place::new(id, id, category, Coord { x: 139.7, y: 35.7 }).with_rating(rating, reviews)
}

#[fixture]
fn scorer() -> PreferenceScorer {
    PreferenceScorer::default()
}

#[rstest]
#[case("culture", Category::Attraction, 1.5)]
#[case("history", Category::Attraction, 1.5)]
#[case("food", Category::Restaurant, 1.5)]
#[case("nature", Category::Nature, 1.5)]
#[case("shopping", Category::Experience, 1.2)]
#[case("nightlife", Category::Attraction, 1.0)]
fn builtin_tags_raise_one_category(
    #[case] tag: &str,
    #[case] category: Category,
    #[case] expected: f64,
) {
    let prefs = TripPreferences::new().with_tag(tag);
    let weights = CategoryWeights::from_preferences(&prefs, &TagBoosts::builtin());
    assert!((weights.multiplier(category) - expected).abs() < EPSILON);
}

#[rstest]
fn overlapping_tags_set_rather_than_compound() {
    let prefs = TripPreferences::new().with_tag("culture").with_tag("history");
    let weights = CategoryWeights::from_preferences(&prefs, &TagBoosts::builtin());
    assert!((weights.multiplier(Category::Attraction) - 1.5).abs() < EPSILON);
}

#[rstest]
fn tags_match_case_insensitively() {
    let prefs = TripPreferences::new().with_tag("FOOD");
    let weights = CategoryWeights::from_preferences(&prefs, &TagBoosts::builtin());
    assert!((weights.multiplier(Category::Restaurant) - 1.5).abs() < EPSILON);
}

#[rstest]
fn later_rules_win_for_the_same_category() {
    let boosts = TagBoosts::builtin()
        .with_boost("museums", Category::Attraction, 2.0)
        .unwrap_or_else(|err| panic!("valid boost: {err}"));
    let prefs = TripPreferences::new().with_tag("culture").with_tag("museums");
    let weights = CategoryWeights::from_preferences(&prefs, &boosts);
    assert!((weights.multiplier(Category::Attraction) - 2.0).abs() < EPSILON);
}

#[rstest]
fn unrecognised_category_is_weight_neutral() {
    let prefs = TripPreferences::new().with_tag("food");
    let weights = CategoryWeights::from_preferences(&prefs, &TagBoosts::builtin());
    assert!((weights.multiplier(Category::Other) - 1.0).abs() < EPSILON);
}

#[rstest]
#[case("", 1.5, BoostError::EmptyTag)]
#[case("food", -1.0, BoostError::InvalidMultiplier { tag: "food".into(), multiplier: -1.0 })]
fn rejects_invalid_boosts(#[case] tag: &str, #[case] multiplier: f64, #[case] expected: BoostError) {
    let err = TagBoosts::new()
        .with_boost(tag, Category::Restaurant, multiplier)
        .unwrap_err();
    assert_eq!(err, expected);
}

#[rstest]
fn negative_boosts_are_rejected_on_load() {
    let json = r#"[{ "tag": "food", "category": "restaurant", "multiplier": -3.0 }]"#;
    assert!(serde_json::from_str::<TagBoosts>(json).is_err());
}

#[rstest]
fn boost_tables_load_from_json() {
    let json = r#"[{ "tag": "Art", "category": "attraction", "multiplier": 1.8 }]"#;
    let boosts: TagBoosts =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("valid table: {err}"));
    let rule = boosts.iter().next().unwrap_or_else(|| panic!("one rule"));
    assert_eq!(rule.tag(), "art");
    assert_eq!(boosts.len(), 1);
}

#[rstest]
#[case(4.5, 1000, 4.5)]
#[case(4.3, 800, 3.44)]
#[case(5.0, 0, 0.0)]
#[case(-4.0, 100, -0.4)]
#[case(f64::NAN, 100, 0.0)]
fn weight_follows_formula(
    scorer: PreferenceScorer,
    #[case] rating: f64,
    #[case] reviews: u32,
    #[case] expected: f64,
) {
    let candidate = place("p", Category::Attraction, rating, reviews);
    let weight = scorer.weight(&candidate, &TripPreferences::new());
    assert!((weight - expected).abs() < EPSILON, "got {weight}");
}

#[rstest]
fn negative_ratings_rank_behind_unreviewed_places(scorer: PreferenceScorer) {
    let places = vec![
        place("panned", Category::Attraction, -2.0, 500),
        place("unknown", Category::Attraction, 4.0, 0),
        place("liked", Category::Attraction, 4.0, 500),
    ];
    let ranked = scorer.rank(places, &TripPreferences::new());
    let ids: Vec<&str> = ranked.iter().map(|s| s.place.id.as_str()).collect();
    assert_eq!(ids, ["liked", "unknown", "panned"]);
    let last = ranked.last().map_or(0.0, |s| s.weight);
    assert!((last + 1.0).abs() < EPSILON, "got {last}");
}

#[rstest]
fn rank_prefers_boosted_categories(scorer: PreferenceScorer) {
    let places = vec![
        place("temple", Category::Attraction, 4.5, 1000),
        place("ramen", Category::Restaurant, 4.0, 1000),
    ];
    let neutral = scorer.rank(places.clone(), &TripPreferences::new());
    let foodie = scorer.rank(places, &TripPreferences::new().with_tag("food"));

    let first = |ranked: &[tripweave_core::ScoredPlace]| {
        ranked.first().map(|s| s.place.id.clone()).unwrap_or_default()
    };
    assert_eq!(first(&neutral), "temple");
    assert_eq!(first(&foodie), "ramen");
}

#[rstest]
fn rank_matches_per_place_weights(scorer: PreferenceScorer) {
    let prefs = TripPreferences::new().with_tag("nature");
    let places = vec![
        place("a", Category::Nature, 4.6, 1200),
        place("b", Category::Attraction, 4.5, 1000),
        place("c", Category::Restaurant, 4.3, 800),
    ];
    let expected: Vec<f64> = places.iter().map(|p| scorer.weight(p, &prefs)).collect();
    let ranked = scorer.rank(places, &prefs);
    let ids: Vec<&str> = ranked.iter().map(|s| s.place.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    for (scored, weight) in ranked.iter().zip(expected) {
        assert!((scored.weight - weight).abs() < EPSILON);
    }
}
