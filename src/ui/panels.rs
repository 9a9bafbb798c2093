use eframe::egui::{RichText, ScrollArea, Slider, Ui};

use crate::color;
use crate::data::filter::{PROTEIN_THRESHOLD_RANGE, SUGAR_THRESHOLD_RANGE};
use crate::data::model::Category;
use crate::state::AppState;
use crate::ui::thousands;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("SugarScope");
        ui.separator();
        ui.label(format!(
            "{} products loaded, {} shown",
            thousands(state.dataset.len()),
            thousands(state.views.selection.products_shown)
        ));
        ui.separator();
        ui.label(format!(
            "outlier cutoffs: sugar ≤ {:.1}g, protein ≤ {:.1}g",
            state.dataset.p99_sugar, state.dataset.p99_protein
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filters + selection metrics
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Categories");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_categories();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_categories();
                }
            });

            let mut changed = false;
            for cat in Category::ALL {
                let mut checked = state.params.categories.contains(&cat);
                let text = RichText::new(cat.label()).color(color::category_color(cat));
                if ui.checkbox(&mut checked, text).changed() {
                    if checked {
                        state.params.categories.insert(cat);
                    } else {
                        state.params.categories.remove(&cat);
                    }
                    changed = true;
                }
            }
            if state.params.categories.is_empty() {
                ui.label(
                    RichText::new("Empty selection shows all categories").weak(),
                );
            }

            ui.separator();
            ui.strong("Blue Ocean thresholds");
            if ui
                .add(
                    Slider::new(&mut state.params.protein_threshold, PROTEIN_THRESHOLD_RANGE)
                        .text("Min protein (g)"),
                )
                .changed()
            {
                changed = true;
            }
            if ui
                .add(
                    Slider::new(&mut state.params.sugar_threshold, SUGAR_THRESHOLD_RANGE)
                        .text("Max sugar (g)"),
                )
                .changed()
            {
                changed = true;
            }

            if changed {
                state.recompute();
            }

            ui.separator();
            let sel = &state.views.selection;
            ui.label(format!("Products shown: {}", thousands(sel.products_shown)));
            ui.label(format!(
                "Blue Ocean: {} ({:.1}%)",
                thousands(sel.blue_ocean_count),
                sel.blue_ocean_pct
            ));
        });
}

// ---------------------------------------------------------------------------
// Hero metric strip
// ---------------------------------------------------------------------------

/// Render the four headline metrics above the tabs.
pub fn hero_metrics(ui: &mut Ui, state: &AppState) {
    let headline = &state.headline;
    ui.columns(4, |cols: &mut [Ui]| {
        metric(
            &mut cols[0],
            "Total Products",
            &thousands(headline.total_products),
            "Open Food Facts snack extract",
        );
        metric(
            &mut cols[1],
            "Sugar Trap Products",
            &thousands(headline.sugar_trap_count),
            ">20g sugar + <5g protein",
        );
        metric(
            &mut cols[2],
            "Blue Ocean Products",
            &thousands(headline.blue_ocean_count),
            "≥15g protein + ≤10g sugar",
        );
        metric(
            &mut cols[3],
            "Market Gap",
            &format!("{:.1}%", headline.blue_ocean_pct),
            "of market in Blue Ocean zone",
        );
    });
}

fn metric(ui: &mut Ui, title: &str, value: &str, caption: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(value).size(22.0));
        ui.label(RichText::new(caption).weak().small());
    });
}

// ---------------------------------------------------------------------------
// Tab selector
// ---------------------------------------------------------------------------

/// Render the tab strip and switch the active tab.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in crate::state::Tab::ALL {
            ui.selectable_value(&mut state.active_tab, tab, tab.label());
        }
    });
    ui.add_space(4.0);
}
