//! Tunables for the planners.
//!
//! Every constant the scheduler relies on lives here so it can be adjusted
//! without touching the selection logic. `Default` reproduces the stock
//! behaviour.

use tripweave_core::{Budget, Category, Destinations, Place};

/// Travel-speed bands keyed by straight-line distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelSpeeds {
    /// Distances strictly above this use the long-haul speed.
    pub long_haul_above_km: f64,
    /// Long-haul speed in km/h.
    pub long_haul_kmh: f64,
    /// Distances strictly above this (and not long-haul) use the short-hop speed.
    pub short_hop_above_km: f64,
    /// Short-hop speed in km/h.
    pub short_hop_kmh: f64,
    /// Walking speed in km/h.
    pub walking_kmh: f64,
}

impl Default for TravelSpeeds {
    fn default() -> Self {
        Self {
            long_haul_above_km: 10.0,
            long_haul_kmh: 30.0,
            short_hop_above_km: 2.0,
            short_hop_kmh: 15.0,
            walking_kmh: 5.0,
        }
    }
}

/// Half-open hour range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    /// First hour inside the window.
    pub start: u16,
    /// First hour after the window.
    pub end: u16,
}

impl HourWindow {
    /// Construct a window.
    #[must_use]
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Report whether `hour` falls inside the window.
    #[must_use]
    pub const fn contains(self, hour: u16) -> bool {
        self.start <= hour && hour < self.end
    }
}

/// Hours during which restaurants are preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealWindows {
    windows: Vec<HourWindow>,
}

impl MealWindows {
    /// Construct from explicit windows.
    #[must_use]
    pub const fn new(windows: Vec<HourWindow>) -> Self {
        Self { windows }
    }

    /// Report whether `hour` is a meal hour.
    #[must_use]
    pub fn is_meal_hour(&self, hour: u16) -> bool {
        self.windows.iter().any(|window| window.contains(hour))
    }
}

impl Default for MealWindows {
    /// Breakfast 07–09, lunch 12–14, dinner 18–21.
    fn default() -> Self {
        Self::new(vec![
            HourWindow::new(7, 9),
            HourWindow::new(12, 14),
            HourWindow::new(18, 21),
        ])
    }
}

/// Minutes spent at a place, by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDurations {
    /// Meals.
    pub restaurant: u16,
    /// Sightseeing.
    pub attraction: u16,
    /// Outdoor spots.
    pub nature: u16,
    /// Hands-on activities.
    pub experience: u16,
    /// Anything else.
    pub other: u16,
}

impl ActivityDurations {
    /// Duration for `category`.
    #[must_use]
    pub const fn for_category(&self, category: Category) -> u16 {
        match category {
            Category::Restaurant => self.restaurant,
            Category::Attraction => self.attraction,
            Category::Nature => self.nature,
            Category::Experience => self.experience,
            Category::Other => self.other,
        }
    }
}

impl Default for ActivityDurations {
    fn default() -> Self {
        Self {
            restaurant: 90,
            attraction: 120,
            nature: 150,
            experience: 120,
            other: 60,
        }
    }
}

/// Estimated spend per place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    /// Meal on a low budget.
    pub restaurant_low: u32,
    /// Meal on a medium budget.
    pub restaurant_medium: u32,
    /// Meal on a high budget.
    pub restaurant_high: u32,
    /// Ordinary attraction admission.
    pub attraction: u32,
    /// Admission to a landmark attraction.
    pub landmark: u32,
    /// Name fragments marking an attraction as a landmark; matched
    /// case-insensitively.
    pub landmark_markers: Vec<String>,
}

impl CostTable {
    /// Cost of visiting `place` on `budget`; `None` when free.
    #[must_use]
    pub fn cost(&self, place: &Place, budget: Budget) -> Option<u32> {
        let cost = match place.category {
            Category::Restaurant => match budget {
                Budget::Low => self.restaurant_low,
                Budget::Medium => self.restaurant_medium,
                Budget::High => self.restaurant_high,
            },
            Category::Attraction if self.is_landmark(&place.name) => self.landmark,
            Category::Attraction => self.attraction,
            Category::Nature | Category::Experience | Category::Other => 0,
        };
        (cost > 0).then_some(cost)
    }

    fn is_landmark(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.landmark_markers
            .iter()
            .any(|marker| name.contains(&marker.to_lowercase()))
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            restaurant_low: 15_000,
            restaurant_medium: 25_000,
            restaurant_high: 50_000,
            attraction: 5_000,
            landmark: 15_000,
            landmark_markers: ["museum", "tower", "박물관", "타워"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Configuration shared by [`GreedyPlanner`](crate::GreedyPlanner) and
/// [`FixedSlotPlanner`](crate::FixedSlotPlanner).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannerConfig {
    /// Destination aliases, profiles and anchors.
    pub destinations: Destinations,
    /// Travel-speed bands.
    pub speeds: TravelSpeeds,
    /// Meal-preferring hours.
    pub meal_windows: MealWindows,
    /// Time spent per category.
    pub durations: ActivityDurations,
    /// Spend estimates.
    pub costs: CostTable,
}

impl PlannerConfig {
    /// Replace the destination tables.
    #[must_use]
    pub fn with_destinations(mut self, destinations: Destinations) -> Self {
        self.destinations = destinations;
        self
    }
}
