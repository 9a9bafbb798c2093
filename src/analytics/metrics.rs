use crate::data::filter::{FilterParams, REFERENCE_PROTEIN_FLOOR, REFERENCE_SUGAR_CEILING};
use crate::data::model::{Product, SnackDataset};

// ---------------------------------------------------------------------------
// Blue Ocean / Sugar Trap classification and headline metrics
// ---------------------------------------------------------------------------

/// Sugar Trap cutoffs. Fixed constants, not user-adjustable.
pub const SUGAR_TRAP_SUGAR_FLOOR: f64 = 20.0;
pub const SUGAR_TRAP_PROTEIN_CEILING: f64 = 5.0;

/// A market-gap product: meets the protein floor and the sugar ceiling.
pub fn is_blue_ocean(p: &Product, protein_floor: f64, sugar_ceiling: f64) -> bool {
    p.proteins_100g >= protein_floor && p.sugars_100g <= sugar_ceiling
}

/// A commodity product: high sugar, negligible protein.
pub fn is_sugar_trap(p: &Product) -> bool {
    p.sugars_100g > SUGAR_TRAP_SUGAR_FLOOR && p.proteins_100g < SUGAR_TRAP_PROTEIN_CEILING
}

/// count / total as a percentage, 0 when the total is 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Headline numbers over the full table at the fixed reference thresholds.
/// Independent of every filter parameter, so computed once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineMetrics {
    pub total_products: usize,
    pub sugar_trap_count: usize,
    pub blue_ocean_count: usize,
    /// Share of the whole market in the Blue Ocean zone.
    pub blue_ocean_pct: f64,
}

pub fn headline_metrics(dataset: &SnackDataset) -> HeadlineMetrics {
    let total_products = dataset.len();
    let sugar_trap_count = dataset.products.iter().filter(|p| is_sugar_trap(p)).count();
    let blue_ocean_count = dataset
        .products
        .iter()
        .filter(|p| is_blue_ocean(p, REFERENCE_PROTEIN_FLOOR, REFERENCE_SUGAR_CEILING))
        .count();

    HeadlineMetrics {
        total_products,
        sugar_trap_count,
        blue_ocean_count,
        blue_ocean_pct: percentage(blue_ocean_count, total_products),
    }
}

/// Sidebar numbers over the category-filtered plot-safe table at the
/// user-adjustable thresholds. Recomputed on every parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionMetrics {
    pub products_shown: usize,
    pub blue_ocean_count: usize,
    pub blue_ocean_pct: f64,
}

pub fn selection_metrics(dataset: &SnackDataset, params: &FilterParams) -> SelectionMetrics {
    let mut products_shown = 0;
    let mut blue_ocean_count = 0;

    for &i in dataset.plot_safe_indices() {
        let p = &dataset.products[i];
        if !params.includes(p.category) {
            continue;
        }
        products_shown += 1;
        if is_blue_ocean(p, params.protein_floor(), params.sugar_ceiling()) {
            blue_ocean_count += 1;
        }
    }

    SelectionMetrics {
        products_shown,
        blue_ocean_count,
        blue_ocean_pct: percentage(blue_ocean_count, products_shown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Category;
    use std::collections::BTreeSet;

    fn product(category: Category, sugar: f64, protein: f64) -> Product {
        Product {
            name: String::from("p"),
            category,
            sugars_100g: sugar,
            proteins_100g: protein,
        }
    }

    #[test]
    fn blue_ocean_worked_example() {
        // Nuts & Seeds rows (2, 20) and (3, 18) with floor 15 / ceiling 10.
        let a = product(Category::NutsSeeds, 2.0, 20.0);
        let b = product(Category::NutsSeeds, 3.0, 18.0);
        assert!(is_blue_ocean(&a, 15.0, 10.0));
        assert!(is_blue_ocean(&b, 15.0, 10.0));
    }

    #[test]
    fn blue_ocean_boundaries_are_inclusive() {
        let edge = product(Category::ProteinBars, 10.0, 15.0);
        assert!(is_blue_ocean(&edge, 15.0, 10.0));
        let below = product(Category::ProteinBars, 10.1, 15.0);
        assert!(!is_blue_ocean(&below, 15.0, 10.0));
    }

    #[test]
    fn sugar_trap_boundaries_are_strict() {
        assert!(is_sugar_trap(&product(Category::CandyConfectionery, 20.1, 4.9)));
        assert!(!is_sugar_trap(&product(Category::CandyConfectionery, 20.0, 4.9)));
        assert!(!is_sugar_trap(&product(Category::CandyConfectionery, 20.1, 5.0)));
    }

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn blue_ocean_partitions_the_selection() {
        let ds = SnackDataset::from_products(vec![
            product(Category::NutsSeeds, 2.0, 20.0),
            product(Category::CandyConfectionery, 55.0, 2.0),
            product(Category::GeneralSnacks, 9.0, 3.0),
            product(Category::ProteinBars, 8.0, 30.0),
        ]);
        let params = FilterParams::default();
        let metrics = selection_metrics(&ds, &params);

        let failing = ds
            .plot_safe_indices()
            .iter()
            .map(|&i| &ds.products[i])
            .filter(|p| params.includes(p.category))
            .filter(|p| {
                p.proteins_100g < params.protein_floor()
                    || p.sugars_100g > params.sugar_ceiling()
            })
            .count();
        assert_eq!(metrics.blue_ocean_count + failing, metrics.products_shown);
    }

    #[test]
    fn sugar_trap_headline_ignores_filters() {
        let ds = SnackDataset::from_products(vec![
            product(Category::CandyConfectionery, 55.0, 2.0),
            product(Category::CookiesBiscuits, 40.0, 4.0),
            product(Category::NutsSeeds, 2.0, 20.0),
        ]);
        // Headline is a function of the dataset alone; any selection state
        // leaves it untouched.
        let full = headline_metrics(&ds);
        assert_eq!(full.sugar_trap_count, 2);
        let _narrow = FilterParams {
            categories: BTreeSet::from([Category::NutsSeeds]),
            ..FilterParams::default()
        };
        assert_eq!(headline_metrics(&ds).sugar_trap_count, 2);
    }

    #[test]
    fn empty_selection_metrics_are_zero() {
        let ds = SnackDataset::from_products(vec![product(Category::NutsSeeds, 2.0, 20.0)]);
        let params = FilterParams {
            categories: BTreeSet::from([Category::CandyConfectionery]),
            ..FilterParams::default()
        };
        let metrics = selection_metrics(&ds, &params);
        assert_eq!(metrics.products_shown, 0);
        assert_eq!(metrics.blue_ocean_count, 0);
        assert_eq!(metrics.blue_ocean_pct, 0.0);
    }
}
