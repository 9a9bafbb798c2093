use crate::data::filter::FilterParams;
use crate::data::model::{Category, SnackDataset};

// ---------------------------------------------------------------------------
// Per-category summary: count + mean nutrients
// ---------------------------------------------------------------------------

/// One row of the per-category profile table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub product_count: usize,
    pub avg_sugar: f64,
    pub avg_protein: f64,
}

/// Group the full (untrimmed) table by category, restricted to the current
/// selection. Categories with no matching rows are omitted. Rows are sorted
/// by descending `avg_sugar`, category order breaking ties.
pub fn category_summary(dataset: &SnackDataset, params: &FilterParams) -> Vec<CategorySummary> {
    let mut counts = [0usize; Category::ALL.len()];
    let mut sugar_sums = [0.0f64; Category::ALL.len()];
    let mut protein_sums = [0.0f64; Category::ALL.len()];

    for p in &dataset.products {
        if !params.includes(p.category) {
            continue;
        }
        let i = p.category.index();
        counts[i] += 1;
        sugar_sums[i] += p.sugars_100g;
        protein_sums[i] += p.proteins_100g;
    }

    let mut rows: Vec<CategorySummary> = Category::ALL
        .iter()
        .copied()
        .filter(|c| counts[c.index()] > 0)
        .map(|category| {
            let i = category.index();
            let n = counts[i] as f64;
            CategorySummary {
                category,
                product_count: counts[i],
                avg_sugar: sugar_sums[i] / n,
                avg_protein: protein_sums[i] / n,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.avg_sugar
            .total_cmp(&a.avg_sugar)
            .then(a.category.cmp(&b.category))
    });
    rows
}
