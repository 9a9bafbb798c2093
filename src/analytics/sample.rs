use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::filter::FilterParams;
use crate::data::model::{Category, SnackDataset};

// ---------------------------------------------------------------------------
// Scatter sampling: per-category cap over the plot-safe table
// ---------------------------------------------------------------------------

/// Per-category cap on scatter points.
pub const MAX_POINTS_PER_CATEGORY: usize = 500;

/// Default seed for the dashboard's scatter sample.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Draw the scatter sample: the plot-safe rows of the selected categories,
/// reduced per category to at most [`MAX_POINTS_PER_CATEGORY`] rows.
///
/// The seed is an explicit parameter: the same dataset and seed always yield
/// the same sample, regardless of which categories are selected, because
/// each category draws from its own seed-derived RNG stream. Returned
/// indices point into `dataset.products`, grouped in category order and
/// ascending within each category.
pub fn scatter_sample(dataset: &SnackDataset, params: &FilterParams, seed: u64) -> Vec<usize> {
    let mut by_category: Vec<Vec<usize>> = vec![Vec::new(); Category::ALL.len()];
    for &i in dataset.plot_safe_indices() {
        let category = dataset.products[i].category;
        if params.includes(category) {
            by_category[category.index()].push(i);
        }
    }

    let mut out = Vec::new();
    for (cat_idx, pool) in by_category.iter().enumerate() {
        if pool.is_empty() {
            continue;
        }
        if pool.len() <= MAX_POINTS_PER_CATEGORY {
            out.extend_from_slice(pool);
            continue;
        }
        // One independent stream per category keeps the draw identical no
        // matter which other categories are selected.
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(cat_idx as u64));
        let mut picked: Vec<usize> =
            rand::seq::index::sample(&mut rng, pool.len(), MAX_POINTS_PER_CATEGORY)
                .iter()
                .map(|j| pool[j])
                .collect();
        picked.sort_unstable();
        out.extend(picked);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Product;

    fn dataset(counts: &[(Category, usize)]) -> SnackDataset {
        let mut products = Vec::new();
        for &(category, n) in counts {
            for k in 0..n {
                products.push(Product {
                    name: format!("{category} #{k}"),
                    category,
                    // Spread below any outlier cutoff so nothing gets trimmed.
                    sugars_100g: (k % 40) as f64,
                    proteins_100g: (k % 25) as f64,
                });
            }
        }
        SnackDataset::from_products(products)
    }

    #[test]
    fn sample_size_is_min_of_count_and_cap() {
        let ds = dataset(&[
            (Category::GeneralSnacks, 1200),
            (Category::NutsSeeds, 73),
        ]);
        let params = FilterParams::default();
        let sample = scatter_sample(&ds, &params, DEFAULT_SAMPLE_SEED);

        let general = sample
            .iter()
            .filter(|&&i| ds.products[i].category == Category::GeneralSnacks)
            .count();
        let nuts = sample
            .iter()
            .filter(|&&i| ds.products[i].category == Category::NutsSeeds)
            .count();
        assert_eq!(general, MAX_POINTS_PER_CATEGORY);
        assert_eq!(nuts, 73);
    }

    #[test]
    fn same_seed_same_sample() {
        let ds = dataset(&[(Category::ChipsSavory, 900)]);
        let params = FilterParams::default();
        let a = scatter_sample(&ds, &params, 7);
        let b = scatter_sample(&ds, &params, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_usually_differs() {
        let ds = dataset(&[(Category::ChipsSavory, 900)]);
        let params = FilterParams::default();
        let a = scatter_sample(&ds, &params, 1);
        let b = scatter_sample(&ds, &params, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn selection_does_not_perturb_other_categories() {
        let ds = dataset(&[
            (Category::ChipsSavory, 900),
            (Category::CandyConfectionery, 900),
        ]);
        let all = scatter_sample(&ds, &FilterParams::default(), DEFAULT_SAMPLE_SEED);
        let only_chips = scatter_sample(
            &ds,
            &FilterParams {
                categories: [Category::ChipsSavory].into_iter().collect(),
                ..FilterParams::default()
            },
            DEFAULT_SAMPLE_SEED,
        );

        let chips_from_all: Vec<usize> = all
            .iter()
            .copied()
            .filter(|&i| ds.products[i].category == Category::ChipsSavory)
            .collect();
        assert_eq!(chips_from_all, only_chips);
    }

    #[test]
    fn deselected_categories_are_absent() {
        let ds = dataset(&[
            (Category::ChipsSavory, 50),
            (Category::CandyConfectionery, 50),
        ]);
        let sample = scatter_sample(
            &ds,
            &FilterParams {
                categories: [Category::ChipsSavory].into_iter().collect(),
                ..FilterParams::default()
            },
            DEFAULT_SAMPLE_SEED,
        );
        assert!(sample
            .iter()
            .all(|&i| ds.products[i].category == Category::ChipsSavory));
    }
}
