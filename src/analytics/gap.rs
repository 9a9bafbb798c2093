use crate::data::filter::FilterParams;
use crate::data::model::Category;

use super::summary::CategorySummary;

// ---------------------------------------------------------------------------
// Reformulation gap: grams of change needed to meet the thresholds
// ---------------------------------------------------------------------------

/// One row of the reformulation-gap table. All gaps are raw grams per 100g;
/// no normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ReformulationGap {
    pub category: Category,
    pub avg_sugar: f64,
    pub avg_protein: f64,
    /// How far the category average exceeds the sugar ceiling.
    pub sugar_gap: f64,
    /// How far the category average falls short of the protein floor.
    pub protein_gap: f64,
    /// sugar_gap + protein_gap; zero means both targets are already met.
    pub difficulty: f64,
}

/// Compute the gap table from the per-category summary. Rows are sorted by
/// descending difficulty, category order breaking ties, so the hardest
/// reformulation targets come first.
pub fn reformulation_gaps(
    summary: &[CategorySummary],
    params: &FilterParams,
) -> Vec<ReformulationGap> {
    let mut rows: Vec<ReformulationGap> = summary
        .iter()
        .map(|s| {
            let sugar_gap = (s.avg_sugar - params.sugar_ceiling()).max(0.0);
            let protein_gap = (params.protein_floor() - s.avg_protein).max(0.0);
            ReformulationGap {
                category: s.category,
                avg_sugar: s.avg_sugar,
                avg_protein: s.avg_protein,
                sugar_gap,
                protein_gap,
                difficulty: sugar_gap + protein_gap,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.difficulty
            .total_cmp(&a.difficulty)
            .then(a.category.cmp(&b.category))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(category: Category, sugar: f64, protein: f64) -> CategorySummary {
        CategorySummary {
            category,
            product_count: 10,
            avg_sugar: sugar,
            avg_protein: protein,
        }
    }

    fn params(protein: i32, sugar: i32) -> FilterParams {
        FilterParams {
            protein_threshold: protein,
            sugar_threshold: sugar,
            ..FilterParams::default()
        }
    }

    #[test]
    fn gaps_match_worked_example() {
        // avg_sugar=25, avg_protein=10 against ceiling 10 / floor 15.
        let rows = reformulation_gaps(
            &[summary(Category::CookiesBiscuits, 25.0, 10.0)],
            &params(15, 10),
        );
        assert!((rows[0].sugar_gap - 15.0).abs() < 1e-12);
        assert!((rows[0].protein_gap - 5.0).abs() < 1e-12);
        assert!((rows[0].difficulty - 20.0).abs() < 1e-12);
    }

    #[test]
    fn met_targets_yield_zero_difficulty() {
        let rows = reformulation_gaps(
            &[summary(Category::ProteinBars, 8.0, 28.0)],
            &params(15, 10),
        );
        assert_eq!(rows[0].sugar_gap, 0.0);
        assert_eq!(rows[0].protein_gap, 0.0);
        assert_eq!(rows[0].difficulty, 0.0);
    }

    #[test]
    fn rows_sort_by_descending_difficulty() {
        let rows = reformulation_gaps(
            &[
                summary(Category::ProteinBars, 8.0, 28.0),
                summary(Category::CandyConfectionery, 60.0, 2.0),
                summary(Category::NutsSeeds, 6.0, 17.0),
            ],
            &params(15, 10),
        );
        assert_eq!(rows[0].category, Category::CandyConfectionery);
        let difficulties: Vec<f64> = rows.iter().map(|r| r.difficulty).collect();
        let mut sorted = difficulties.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(difficulties, sorted);
    }

    #[test]
    fn ties_break_in_category_order() {
        let rows = reformulation_gaps(
            &[
                summary(Category::NutsSeeds, 8.0, 28.0),
                summary(Category::FruitVeg, 8.0, 28.0),
            ],
            &params(15, 10),
        );
        assert_eq!(rows[0].category, Category::FruitVeg);
        assert_eq!(rows[1].category, Category::NutsSeeds);
    }
}
