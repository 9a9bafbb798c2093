use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points, Polygon};

use crate::color;
use crate::data::model::Category;
use crate::state::{AppState, Tab};
use crate::ui::{panels, thousands};

// ---------------------------------------------------------------------------
// Central panel: hero metrics + tab dispatch
// ---------------------------------------------------------------------------

/// Render the central panel.
pub fn central(ui: &mut Ui, state: &mut AppState) {
    panels::hero_metrics(ui, state);
    ui.separator();
    panels::tab_strip(ui, state);
    ui.separator();

    match state.active_tab {
        Tab::Landscape => landscape(ui, state),
        Tab::Profiles => profiles(ui, state),
        Tab::Opportunity => opportunity(ui, state),
        Tab::Sources => sources(ui),
        Tab::Gap => gap(ui, state),
    }
}

// ---------------------------------------------------------------------------
// Tab 1: sugar vs protein scatter
// ---------------------------------------------------------------------------

fn landscape(ui: &mut Ui, state: &AppState) {
    ui.label("Sugar vs. Protein: Market Landscape");

    let ceiling = state.params.sugar_ceiling();
    let floor = state.params.protein_floor();
    let top = state.dataset.p99_protein.max(floor);

    Plot::new("landscape")
        .legend(Legend::default())
        .x_axis_label("Sugar (g/100g)")
        .y_axis_label("Protein (g/100g)")
        .show(ui, |plot_ui| {
            let zone = Polygon::new(PlotPoints::from(vec![
                [0.0, floor],
                [ceiling, floor],
                [ceiling, top],
                [0.0, top],
            ]))
            .fill_color(Color32::from_rgba_unmultiplied(0x58, 0xA6, 0xFF, 18))
            .stroke(Stroke::new(1.5, color::BLUE_OCEAN_ACCENT))
            .name("Blue Ocean zone");
            plot_ui.polygon(zone);

            for cat in Category::ALL {
                let points: Vec<[f64; 2]> = state
                    .views
                    .scatter
                    .iter()
                    .map(|&i| &state.dataset.products[i])
                    .filter(|p| p.category == cat)
                    .map(|p| [p.sugars_100g, p.proteins_100g])
                    .collect();
                if points.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(cat.label())
                        .color(color::category_color(cat))
                        .radius(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Tab 2: per-category average bars + summary table
// ---------------------------------------------------------------------------

fn profiles(ui: &mut Ui, state: &AppState) {
    ui.label("Average Sugar vs Protein by Category");
    let summary = &state.views.summary;

    Plot::new("profiles")
        .legend(Legend::default())
        .height(300.0)
        .y_axis_label("g/100g")
        .show(ui, |plot_ui| {
            let sugar_bars: Vec<Bar> = summary
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    Bar::new(i as f64 - 0.18, row.avg_sugar)
                        .width(0.32)
                        .name(row.category.label())
                })
                .collect();
            let protein_bars: Vec<Bar> = summary
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    Bar::new(i as f64 + 0.18, row.avg_protein)
                        .width(0.32)
                        .name(row.category.label())
                })
                .collect();
            plot_ui.bar_chart(
                BarChart::new(sugar_bars)
                    .color(Color32::from_rgb(0xE6, 0x39, 0x46))
                    .name("Avg Sugar"),
            );
            plot_ui.bar_chart(
                BarChart::new(protein_bars)
                    .color(Color32::from_rgb(0x58, 0xA6, 0xFF))
                    .name("Avg Protein"),
            );
        });

    ui.add_space(8.0);
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .columns(Column::remainder(), 3)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong("Products");
            });
            header.col(|ui| {
                ui.strong("Avg sugar (g)");
            });
            header.col(|ui| {
                ui.strong("Avg protein (g)");
            });
        })
        .body(|mut body| {
            for row in summary {
                body.row(18.0, |mut r| {
                    r.col(|ui| {
                        ui.label(
                            RichText::new(row.category.label())
                                .color(color::category_color(row.category)),
                        );
                    });
                    r.col(|ui| {
                        ui.label(thousands(row.product_count));
                    });
                    r.col(|ui| {
                        ui.label(format!("{:.1}", row.avg_sugar));
                    });
                    r.col(|ui| {
                        ui.label(format!("{:.1}", row.avg_protein));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Tab 3: opportunity ranking
// ---------------------------------------------------------------------------

fn opportunity(ui: &mut Ui, state: &AppState) {
    ui.label("Market Opportunity Score (relative to the current selection)");
    let rows = &state.views.scores;

    Plot::new("opportunity")
        .height(300.0)
        .x_axis_label("Opportunity Score")
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    // Best score on top.
                    Bar::new((rows.len() - 1 - i) as f64, row.score)
                        .name(row.category.label())
                        .fill(color::band_color(row.band))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });

    ui.add_space(8.0);
    for row in rows {
        ui.label(
            RichText::new(format!(
                "{:>5.1}  {}  ({}, {} products)",
                row.score,
                row.category.label(),
                row.band.label(),
                thousands(row.product_count)
            ))
            .color(color::band_color(row.band)),
        );
    }
}

// ---------------------------------------------------------------------------
// Tab 4: protein source reference table
// ---------------------------------------------------------------------------

fn sources(ui: &mut Ui) {
    ui.label("Top Protein Sources in Blue Ocean Products");
    let rows = crate::analytics::sources::protein_sources();

    Plot::new("sources")
        .height(300.0)
        .x_axis_label("Product Count")
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = rows
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    Bar::new(i as f64, f64::from(src.product_count))
                        .name(format!("{} ({})", src.name, src.kind.label()))
                        .fill(color::source_color(src.kind))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Tab 5: reformulation gap
// ---------------------------------------------------------------------------

fn gap(ui: &mut Ui, state: &AppState) {
    ui.label("Reformulation Gap Analysis");
    let gaps = &state.views.gaps;

    Plot::new("gap")
        .height(300.0)
        .y_axis_label("Difficulty (g)")
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = gaps
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    Bar::new(i as f64, row.difficulty)
                        .name(row.category.label())
                        .fill(color::category_color(row.category))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        });

    ui.add_space(8.0);
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .columns(Column::remainder(), 3)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong("Sugar gap (g)");
            });
            header.col(|ui| {
                ui.strong("Protein gap (g)");
            });
            header.col(|ui| {
                ui.strong("Difficulty");
            });
        })
        .body(|mut body| {
            for row in gaps {
                body.row(18.0, |mut r| {
                    r.col(|ui| {
                        ui.label(
                            RichText::new(row.category.label())
                                .color(color::category_color(row.category)),
                        );
                    });
                    r.col(|ui| {
                        ui.label(format!("{:.1}", row.sugar_gap));
                    });
                    r.col(|ui| {
                        ui.label(format!("{:.1}", row.protein_gap));
                    });
                    r.col(|ui| {
                        ui.label(format!("{:.1}", row.difficulty));
                    });
                });
            }
        });
}
