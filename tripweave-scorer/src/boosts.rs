//! Mapping from interest tags to category multipliers.
//!
//! A [`TagBoosts`] table is configuration: each entry says that a tag, when
//! present in the traveller's preferences, sets the multiplier of one
//! category. [`CategoryWeights::from_preferences`] folds the table over a
//! preference set into an immutable value, so nothing is mutated between
//! planning runs.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use tripweave_core::{Category, TripPreferences};

use crate::BoostError;

/// Multiplier applied to categories no tag raises.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// A single tag → category rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TagBoostDocument")]
pub struct TagBoost {
    tag: String,
    category: Category,
    multiplier: f64,
}

impl TagBoost {
    /// Validate and construct a rule.
    ///
    /// The tag is stored lower-cased.
    ///
    /// # Errors
    /// Returns [`BoostError::EmptyTag`] for a blank tag and
    /// [`BoostError::InvalidMultiplier`] for a negative or non-finite
    /// multiplier.
    pub fn new(tag: &str, category: Category, multiplier: f64) -> Result<Self, BoostError> {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            return Err(BoostError::EmptyTag);
        }
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(BoostError::InvalidMultiplier { tag, multiplier });
        }
        Ok(Self {
            tag,
            category,
            multiplier,
        })
    }

    /// Tag that triggers the rule.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Category whose multiplier is set.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Multiplier applied when the tag is present.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

#[derive(Deserialize)]
struct TagBoostDocument {
    tag: String,
    category: Category,
    multiplier: f64,
}

impl TryFrom<TagBoostDocument> for TagBoost {
    type Error = BoostError;

    fn try_from(value: TagBoostDocument) -> Result<Self, Self::Error> {
        Self::new(&value.tag, value.category, value.multiplier)
    }
}

/// Ordered list of [`TagBoost`] rules.
///
/// Rules are applied in order, so a later rule for the same category wins.
///
/// # Examples
/// ```
/// use tripweave_core::{Category, TripPreferences};
/// use tripweave_scorer::{CategoryWeights, TagBoosts};
///
/// let prefs = TripPreferences::new().with_tag("food");
/// let weights = CategoryWeights::from_preferences(&prefs, &TagBoosts::builtin());
/// assert_eq!(weights.multiplier(Category::Restaurant), 1.5);
/// assert_eq!(weights.multiplier(Category::Nature), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagBoosts {
    rules: Vec<TagBoost>,
}

impl TagBoosts {
    /// Empty table: every category stays neutral.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Culture and history favour attractions, food favours restaurants,
    /// nature favours nature spots, shopping favours experiences.
    #[must_use]
    pub fn builtin() -> Self {
        let rules = [
            ("culture", Category::Attraction, 1.5),
            ("history", Category::Attraction, 1.5),
            ("food", Category::Restaurant, 1.5),
            ("nature", Category::Nature, 1.5),
            ("shopping", Category::Experience, 1.2),
        ]
        .into_iter()
        .map(|(tag, category, multiplier)| TagBoost {
            tag: tag.to_owned(),
            category,
            multiplier,
        })
        .collect();
        Self { rules }
    }

    /// Append a validated rule.
    ///
    /// # Errors
    /// Propagates [`TagBoost::new`] validation failures.
    pub fn with_boost(
        mut self,
        tag: &str,
        category: Category,
        multiplier: f64,
    ) -> Result<Self, BoostError> {
        self.rules.push(TagBoost::new(tag, category, multiplier)?);
        Ok(self)
    }

    /// Iterate over the rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &TagBoost> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Report whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Per-category multipliers derived from one preference set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    attraction: f64,
    restaurant: f64,
    experience: f64,
    nature: f64,
}

impl CategoryWeights {
    /// All multipliers neutral.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            attraction: NEUTRAL_MULTIPLIER,
            restaurant: NEUTRAL_MULTIPLIER,
            experience: NEUTRAL_MULTIPLIER,
            nature: NEUTRAL_MULTIPLIER,
        }
    }

    /// Apply every rule whose tag appears in `preferences`.
    ///
    /// Rules set the multiplier rather than compounding it.
    #[must_use]
    pub fn from_preferences(preferences: &TripPreferences, boosts: &TagBoosts) -> Self {
        boosts
            .iter()
            .filter(|rule| preferences.has_tag(rule.tag()))
            .fold(Self::neutral(), |weights, rule| {
                log::trace!(
                    "tag '{}' sets {} multiplier to {}",
                    rule.tag(),
                    rule.category(),
                    rule.multiplier()
                );
                weights.with(rule.category(), rule.multiplier())
            })
    }

    /// Multiplier for `category`. Unrecognised categories stay neutral.
    #[must_use]
    pub const fn multiplier(&self, category: Category) -> f64 {
        match category {
            Category::Attraction => self.attraction,
            Category::Restaurant => self.restaurant,
            Category::Experience => self.experience,
            Category::Nature => self.nature,
            Category::Other => NEUTRAL_MULTIPLIER,
        }
    }

    const fn with(mut self, category: Category, multiplier: f64) -> Self {
        match category {
            Category::Attraction => self.attraction = multiplier,
            Category::Restaurant => self.restaurant = multiplier,
            Category::Experience => self.experience = multiplier,
            Category::Nature => self.nature = multiplier,
            Category::Other => {}
        }
        self
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::neutral()
    }
}
