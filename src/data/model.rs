use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category – the closed set of snack categories
// ---------------------------------------------------------------------------

/// Primary snack category. The dataset is curated to exactly these eight
/// labels; anything else is a load-time defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Candy & Confectionery")]
    CandyConfectionery,
    #[serde(rename = "Cookies & Biscuits")]
    CookiesBiscuits,
    #[serde(rename = "Chips & Savory Snacks")]
    ChipsSavory,
    #[serde(rename = "General Snacks")]
    GeneralSnacks,
    #[serde(rename = "Fruit & Veg Snacks")]
    FruitVeg,
    #[serde(rename = "Nuts & Seeds")]
    NutsSeeds,
    #[serde(rename = "Dairy & Yogurt Snacks")]
    DairyYogurt,
    #[serde(rename = "Protein & Fitness Bars")]
    ProteinBars,
}

impl Category {
    /// Every category, in declaration order. Declaration order doubles as the
    /// stable tie-break order for sorted views.
    pub const ALL: [Category; 8] = [
        Category::CandyConfectionery,
        Category::CookiesBiscuits,
        Category::ChipsSavory,
        Category::GeneralSnacks,
        Category::FruitVeg,
        Category::NutsSeeds,
        Category::DairyYogurt,
        Category::ProteinBars,
    ];

    /// The dataset label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::CandyConfectionery => "Candy & Confectionery",
            Category::CookiesBiscuits => "Cookies & Biscuits",
            Category::ChipsSavory => "Chips & Savory Snacks",
            Category::GeneralSnacks => "General Snacks",
            Category::FruitVeg => "Fruit & Veg Snacks",
            Category::NutsSeeds => "Nuts & Seeds",
            Category::DairyYogurt => "Dairy & Yogurt Snacks",
            Category::ProteinBars => "Protein & Fitness Bars",
        }
    }

    /// Parse a dataset label. `None` for anything outside the closed set.
    pub fn from_label(s: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == s)
    }

    /// Position in [`Category::ALL`], used to derive per-category RNG streams.
    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Product – one row of the source table
// ---------------------------------------------------------------------------

/// A single product (one row of the source table). Immutable after load.
#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,
    pub category: Category,
    /// Grams of sugar per 100g.
    pub sugars_100g: f64,
    /// Grams of protein per 100g.
    pub proteins_100g: f64,
}

// ---------------------------------------------------------------------------
// SnackDataset – the complete loaded dataset context
// ---------------------------------------------------------------------------

/// The full validated dataset plus everything derived once at load time:
/// the 99th-percentile nutrient cutoffs and the "plot-safe" row set (rows at
/// or below both cutoffs, used for scatter rendering only). Built once at
/// startup and passed by reference into every aggregation.
#[derive(Debug, Clone)]
pub struct SnackDataset {
    pub products: Vec<Product>,
    /// 99th percentile of `sugars_100g` over the full table.
    pub p99_sugar: f64,
    /// 99th percentile of `proteins_100g` over the full table.
    pub p99_protein: f64,
    /// Indices of products with sugar <= p99_sugar and protein <= p99_protein.
    plot_safe: Vec<usize>,
}

impl SnackDataset {
    /// Build the load-time derived state from validated products.
    pub fn from_products(products: Vec<Product>) -> Self {
        let sugars: Vec<f64> = products.iter().map(|p| p.sugars_100g).collect();
        let proteins: Vec<f64> = products.iter().map(|p| p.proteins_100g).collect();
        let p99_sugar = quantile(&sugars, 0.99);
        let p99_protein = quantile(&proteins, 0.99);

        let plot_safe = products
            .iter()
            .enumerate()
            .filter(|(_, p)| p.sugars_100g <= p99_sugar && p.proteins_100g <= p99_protein)
            .map(|(i, _)| i)
            .collect();

        SnackDataset {
            products,
            p99_sugar,
            p99_protein,
            plot_safe,
        }
    }

    /// Number of products in the full table.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Indices of the outlier-trimmed rows, computed once at load.
    pub fn plot_safe_indices(&self) -> &[usize] {
        &self.plot_safe
    }
}

/// Linear-interpolated quantile over unsorted data, `q` in [0, 1].
/// Matches the default interpolation of `pandas.Series.quantile`.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: Category, sugar: f64, protein: f64) -> Product {
        Product {
            name: format!("{category} {sugar}/{protein}"),
            category,
            sugars_100g: sugar,
            proteins_100g: protein,
        }
    }

    #[test]
    fn quantile_interpolates_like_pandas() {
        let vals = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&vals, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&vals, 0.0) - 1.0).abs() < 1e-12);
        assert!((quantile(&vals, 1.0) - 4.0).abs() < 1e-12);
        // pos = 0.99 * 3 = 2.97 → 3 + (4 - 3) * 0.97
        assert!((quantile(&vals, 0.99) - 3.97).abs() < 1e-12);
    }

    #[test]
    fn quantile_of_empty_is_zero() {
        assert_eq!(quantile(&[], 0.99), 0.0);
    }

    #[test]
    fn plot_safe_drops_rows_above_either_cutoff() {
        // 99 identical rows plus one extreme outlier on each axis: the
        // outliers sit above the 99th percentile and must be trimmed.
        let mut products: Vec<Product> = (0..99)
            .map(|_| product(Category::GeneralSnacks, 10.0, 5.0))
            .collect();
        products.push(product(Category::CandyConfectionery, 1000.0, 5.0));
        products.push(product(Category::ProteinBars, 10.0, 1000.0));

        let ds = SnackDataset::from_products(products);
        assert_eq!(ds.len(), 101);
        assert_eq!(ds.plot_safe_indices().len(), 99);
        for &i in ds.plot_safe_indices() {
            let p = &ds.products[i];
            assert!(p.sugars_100g <= ds.p99_sugar);
            assert!(p.proteins_100g <= ds.p99_protein);
        }
    }

    #[test]
    fn category_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
        assert_eq!(Category::from_label("Frozen Pizza"), None);
    }
}
