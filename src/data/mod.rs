/// Data layer: core types, loading, and filter parameters.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + strict validation → SnackDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SnackDataset  │  Vec<Product>, p99 cutoffs, plot-safe index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ FilterParams  │  category subset + thresholds → analytics
///   └──────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
