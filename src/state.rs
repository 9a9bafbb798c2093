use crate::analytics::gap::{reformulation_gaps, ReformulationGap};
use crate::analytics::metrics::{headline_metrics, selection_metrics, HeadlineMetrics, SelectionMetrics};
use crate::analytics::sample::{scatter_sample, DEFAULT_SAMPLE_SEED};
use crate::analytics::score::{opportunity_scores, OpportunityRow};
use crate::analytics::summary::{category_summary, CategorySummary};
use crate::data::filter::FilterParams;
use crate::data::model::{Category, SnackDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The central-panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Landscape,
    Profiles,
    Opportunity,
    Sources,
    Gap,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Landscape,
        Tab::Profiles,
        Tab::Opportunity,
        Tab::Sources,
        Tab::Gap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Landscape => "Market Landscape",
            Tab::Profiles => "Category Profiles",
            Tab::Opportunity => "Opportunity Score",
            Tab::Sources => "Protein Sources",
            Tab::Gap => "Reformulation Gap",
        }
    }
}

/// Everything recomputed when a filter parameter changes. No view depends
/// on another's output; all are derived straight from the dataset context.
#[derive(Debug, Clone)]
pub struct DerivedViews {
    /// Product indices for the scatter tab (plot-safe, sampled).
    pub scatter: Vec<usize>,
    pub summary: Vec<CategorySummary>,
    pub scores: Vec<OpportunityRow>,
    pub gaps: Vec<ReformulationGap>,
    pub selection: SelectionMetrics,
}

impl DerivedViews {
    fn compute(dataset: &SnackDataset, params: &FilterParams, seed: u64) -> Self {
        let summary = category_summary(dataset, params);
        DerivedViews {
            scatter: scatter_sample(dataset, params, seed),
            scores: opportunity_scores(&summary),
            gaps: reformulation_gaps(&summary, params),
            selection: selection_metrics(dataset, params),
            summary,
        }
    }
}

/// The full UI state. The dataset is loaded once at startup and never
/// mutated; everything derived is rebuilt in full on every parameter change.
pub struct AppState {
    pub dataset: SnackDataset,
    /// Fixed-threshold metrics over the full table; never changes after load.
    pub headline: HeadlineMetrics,
    pub params: FilterParams,
    pub views: DerivedViews,
    pub active_tab: Tab,
    pub sample_seed: u64,
}

impl AppState {
    pub fn new(dataset: SnackDataset) -> Self {
        let params = FilterParams::default();
        let sample_seed = DEFAULT_SAMPLE_SEED;
        let headline = headline_metrics(&dataset);
        let views = DerivedViews::compute(&dataset, &params, sample_seed);
        AppState {
            dataset,
            headline,
            params,
            views,
            active_tab: Tab::Landscape,
            sample_seed,
        }
    }

    /// Rebuild every derived view from the current parameters.
    pub fn recompute(&mut self) {
        self.params.clamp_thresholds();
        self.views = DerivedViews::compute(&self.dataset, &self.params, self.sample_seed);
    }

    /// Toggle one category in the selection.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.params.categories.remove(&category) {
            self.params.categories.insert(category);
        }
        self.recompute();
    }

    /// Select every category.
    pub fn select_all_categories(&mut self) {
        self.params.categories = Category::ALL.iter().copied().collect();
        self.recompute();
    }

    /// Clear the selection. An empty selection is coerced to "all
    /// categories" by the pipeline, so this shows everything too.
    pub fn select_no_categories(&mut self) {
        self.params.categories.clear();
        self.recompute();
    }
}
