use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::Category;

// ---------------------------------------------------------------------------
// Filter parameters: category subset + Blue Ocean thresholds
// ---------------------------------------------------------------------------

/// Slider domain for the Blue Ocean protein floor (g/100g).
pub const PROTEIN_THRESHOLD_RANGE: RangeInclusive<i32> = 5..=30;
/// Slider domain for the Blue Ocean sugar ceiling (g/100g).
pub const SUGAR_THRESHOLD_RANGE: RangeInclusive<i32> = 2..=30;

/// Fixed reference thresholds for the headline metrics (not user-adjustable).
pub const REFERENCE_PROTEIN_FLOOR: f64 = 15.0;
pub const REFERENCE_SUGAR_CEILING: f64 = 10.0;

/// The user-adjustable control surface. Process-local, no persistence.
///
/// An empty `categories` set means "all categories selected" — deselecting
/// everything never hides the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub categories: BTreeSet<Category>,
    pub protein_threshold: i32,
    pub sugar_threshold: i32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            categories: Category::ALL.iter().copied().collect(),
            protein_threshold: 15,
            sugar_threshold: 10,
        }
    }
}

impl FilterParams {
    /// Whether a category passes the current selection, with the empty-set
    /// coercion applied.
    pub fn includes(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }

    /// Protein floor as grams.
    pub fn protein_floor(&self) -> f64 {
        f64::from(self.protein_threshold)
    }

    /// Sugar ceiling as grams.
    pub fn sugar_ceiling(&self) -> f64 {
        f64::from(self.sugar_threshold)
    }

    /// Clamp both thresholds into their slider domains.
    pub fn clamp_thresholds(&mut self) {
        self.protein_threshold = self
            .protein_threshold
            .clamp(*PROTEIN_THRESHOLD_RANGE.start(), *PROTEIN_THRESHOLD_RANGE.end());
        self.sugar_threshold = self
            .sugar_threshold
            .clamp(*SUGAR_THRESHOLD_RANGE.start(), *SUGAR_THRESHOLD_RANGE.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_means_all_categories() {
        let params = FilterParams {
            categories: BTreeSet::new(),
            ..FilterParams::default()
        };
        for cat in Category::ALL {
            assert!(params.includes(cat));
        }
    }

    #[test]
    fn partial_selection_filters() {
        let params = FilterParams {
            categories: [Category::NutsSeeds].into_iter().collect(),
            ..FilterParams::default()
        };
        assert!(params.includes(Category::NutsSeeds));
        assert!(!params.includes(Category::CandyConfectionery));
    }

    #[test]
    fn thresholds_clamp_to_domain() {
        let mut params = FilterParams {
            protein_threshold: 99,
            sugar_threshold: -3,
            ..FilterParams::default()
        };
        params.clamp_thresholds();
        assert_eq!(params.protein_threshold, 30);
        assert_eq!(params.sugar_threshold, 2);
    }
}
