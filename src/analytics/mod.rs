/// Aggregation & scoring pipeline.
///
/// Five independent derived views, each a pure function of the immutable
/// [`SnackDataset`](crate::data::model::SnackDataset) context, the current
/// [`FilterParams`](crate::data::filter::FilterParams), and (for sampling)
/// an explicit seed:
///
/// * [`sample`]  – outlier-trimmed, per-category-capped scatter rows
/// * [`summary`] – per-category count / mean sugar / mean protein
/// * [`score`]   – relative opportunity score in [0, 100]
/// * [`sources`] – static protein-source reference table
/// * [`gap`]     – reformulation gap vs the threshold targets
///
/// [`metrics`] holds the Blue Ocean / Sugar Trap predicates and the
/// headline/sidebar counts built on them.

pub mod gap;
pub mod metrics;
pub mod sample;
pub mod score;
pub mod sources;
pub mod summary;
