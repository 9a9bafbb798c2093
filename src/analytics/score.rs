use crate::data::model::Category;

use super::summary::CategorySummary;

// ---------------------------------------------------------------------------
// Opportunity score: protein/sugar ratio weighted by log product volume,
// min-max normalized to [0, 100] over the current selection
// ---------------------------------------------------------------------------

/// Guard against a zero min-max span when every category scores the same.
const EPSILON: f64 = 1e-9;

/// Display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunityBand {
    High,
    Medium,
    Low,
}

impl OpportunityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            OpportunityBand::High
        } else if score >= 30.0 {
            OpportunityBand::Medium
        } else {
            OpportunityBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpportunityBand::High => "high opportunity",
            OpportunityBand::Medium => "medium",
            OpportunityBand::Low => "low",
        }
    }
}

/// One row of the opportunity ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityRow {
    pub category: Category,
    pub product_count: usize,
    /// avg_protein / (avg_sugar + 1); the +1 dampens near-zero-sugar categories.
    pub ratio: f64,
    /// ratio * ln(1 + product_count).
    pub raw: f64,
    /// Min-max normalized to [0, 100] over the current rows, one decimal.
    pub score: f64,
    pub band: OpportunityBand,
}

/// Score the given summary rows. The normalization is relative to the rows
/// passed in, so the scale shifts with every selection change. A degenerate
/// input (single row, or all rows with equal `raw`) collapses to 0.0 via the
/// epsilon guard. Rows are sorted by descending score, category order
/// breaking ties.
pub fn opportunity_scores(summary: &[CategorySummary]) -> Vec<OpportunityRow> {
    if summary.is_empty() {
        return Vec::new();
    }

    let raws: Vec<f64> = summary
        .iter()
        .map(|s| {
            let ratio = s.avg_protein / (s.avg_sugar + 1.0);
            ratio * (1.0 + s.product_count as f64).ln()
        })
        .collect();

    let min = raws.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raws.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut rows: Vec<OpportunityRow> = summary
        .iter()
        .zip(&raws)
        .map(|(s, &raw)| {
            let score = round1((raw - min) / (max - min + EPSILON) * 100.0);
            OpportunityRow {
                category: s.category,
                product_count: s.product_count,
                ratio: s.avg_protein / (s.avg_sugar + 1.0),
                raw,
                score,
                band: OpportunityBand::from_score(score),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.category.cmp(&b.category)));
    rows
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
