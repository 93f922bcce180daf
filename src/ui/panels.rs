use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::filter::CategoryFilter;
use crate::data::model::Category;
use crate::export::{self, ExportError};
use crate::prefs::{self, Prefs};
use crate::state::{AppState, StatusMessage};
use crate::ui::{charts, table};
use crate::view;

/// Suggested file name for the CSV export dialog.
pub const CSV_FILE_NAME: &str = "classpulse_students_dataset.csv";
/// Suggested file name for the PDF report dialog.
pub const PDF_FILE_NAME: &str = "classpulse_performance_report.pdf";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("ClassPulse").strong());
        ui.separator();

        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export CSV…").clicked() {
                export_csv(state);
                ui.close_menu();
            }
            if ui.button("Export PDF report…").clicked() {
                export_pdf(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} students, {} visible",
            state.roster.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui.selectable_label(state.dark_mode, "Dark mode").clicked() {
            toggle_theme(ui.ctx(), state);
        }

        if let Some(msg) = &state.status_message {
            let tint = if msg.is_error {
                Color32::RED
            } else {
                ui.visuals().weak_text_color()
            };
            ui.label(RichText::new(&msg.text).color(tint));
        }
    });
}

/// Switch the whole UI between light and dark visuals.
pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    ctx.set_visuals(if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

fn toggle_theme(ctx: &egui::Context, state: &mut AppState) {
    state.dark_mode = !state.dark_mode;
    apply_theme(ctx, state.dark_mode);
    // Persist on every toggle so a crash never loses the choice.
    if let Err(e) = prefs::store(&Prefs::from_dark_mode(state.dark_mode)) {
        log::error!("Failed to persist theme preference: {e:#}");
        state.status_message = Some(StatusMessage::error("Could not save theme preference"));
    } else {
        log::info!(
            "Theme switched to {}",
            if state.dark_mode { "dark" } else { "light" }
        );
    }
}

// ---------------------------------------------------------------------------
// Left side panel – filters and study tips
// ---------------------------------------------------------------------------

/// Render the left panel: search, category selector, rows-per-page, and the
/// generated tip cards.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filters");
    ui.separator();

    ui.strong("Search");
    let search = ui.add(
        egui::TextEdit::singleline(&mut state.criteria.query).hint_text("Student name"),
    );
    if search.changed() {
        state.refilter();
    }
    ui.add_space(6.0);

    ui.strong("Category");
    let current = state.criteria.category;
    egui::ComboBox::from_id_salt("category_filter")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in CategoryFilter::OPTIONS {
                if ui.selectable_label(current == option, option.label()).clicked() {
                    state.criteria.category = option;
                    state.refilter();
                }
            }
        });
    ui.add_space(6.0);

    ui.strong("Rows per page");
    // Shown for parity with the web dashboard; pagination is not wired up.
    egui::ComboBox::from_id_salt("rows_per_page")
        .selected_text(state.rows_per_page.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for count in [5usize, 10, 20] {
                if ui
                    .selectable_label(state.rows_per_page == count, count.to_string())
                    .clicked()
                {
                    state.rows_per_page = count;
                }
            }
        });

    ui.separator();

    if ui.button("Generate study tips").clicked() {
        state.generate_suggestions();
        log::info!("Generated study tips for {} students", state.roster.len());
        state.status_message = Some(StatusMessage::info("Study tips generated"));
    }

    if let Some(suggestions) = &state.suggestions {
        ui.add_space(6.0);
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                for suggestion in suggestions {
                    ui.group(|ui: &mut Ui| {
                        ui.strong(&suggestion.name);
                        for tip in &suggestion.tips {
                            ui.label(format!("• {tip}"));
                        }
                        ui.label(
                            RichText::new(format!(
                                "Avg {}% ({})",
                                suggestion.average,
                                suggestion.category.label()
                            ))
                            .small()
                            .color(color::category_color(suggestion.category)),
                        );
                    });
                    ui.add_space(4.0);
                }
            });
    }
}

// ---------------------------------------------------------------------------
// Central panel – KPI cards, chart grid, roster table
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            kpi_cards(ui, state);
            ui.add_space(8.0);

            let performance = view::performance_chart(&state.roster, &state.visible_indices);
            let shares = view::subject_share_chart(&state.roster, &state.visible_indices);
            let radial = view::radial_chart(&state.roster, &state.visible_indices);
            let trend = view::trend_chart(&state.trend);

            ui.columns(2, |columns: &mut [Ui]| {
                columns[0].group(|ui: &mut Ui| {
                    ui.strong("Subject scores");
                    charts::performance_plot(ui, &performance);
                });
                columns[1].group(|ui: &mut Ui| {
                    ui.strong("Subject averages");
                    charts::subject_share_pie(ui, &shares);
                });
            });
            ui.columns(2, |columns: &mut [Ui]| {
                columns[0].group(|ui: &mut Ui| {
                    ui.strong("Weekly trend");
                    charts::trend_plot(ui, &trend);
                });
                columns[1].group(|ui: &mut Ui| {
                    ui.strong("Top performer");
                    charts::radial_plot(ui, radial.as_ref());
                });
            });

            ui.add_space(8.0);
            let rows = view::table_rows(&state.roster, &state.visible_indices);
            table::roster_table(ui, &rows);
        });
}

fn kpi_cards(ui: &mut Ui, state: &AppState) {
    let summary = view::kpis(&state.roster);
    let neutral = ui.visuals().strong_text_color();
    let risk_tint = if summary.risk_count > 0 {
        color::category_color(Category::Poor)
    } else {
        color::category_color(Category::Excellent)
    };
    ui.columns(3, |columns: &mut [Ui]| {
        kpi_card(&mut columns[0], "Students", summary.total.to_string(), neutral);
        kpi_card(
            &mut columns[1],
            "Overall average",
            format!("{}%", summary.overall_average),
            color::score_color(summary.overall_average as f64),
        );
        kpi_card(
            &mut columns[2],
            "At risk (avg < 50)",
            summary.risk_count.to_string(),
            risk_tint,
        );
    });
}

fn kpi_card(ui: &mut Ui, title: &str, value: String, accent: Color32) {
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.weak(title);
            ui.label(RichText::new(value).size(24.0).strong().color(accent));
        });
    });
}

// ---------------------------------------------------------------------------
// Export actions
// ---------------------------------------------------------------------------

fn export_csv(state: &mut AppState) {
    let result = export::csv::render_csv(state.roster.records()).and_then(|text| {
        export::save_with_dialog(
            "Export roster CSV",
            CSV_FILE_NAME,
            "CSV",
            &["csv"],
            text.as_bytes(),
        )
    });
    finish_export(state, "CSV", result);
}

fn export_pdf(state: &mut AppState) {
    let result = export::pdf::render_report(&state.roster).and_then(|bytes| {
        export::save_with_dialog(
            "Export PDF report",
            PDF_FILE_NAME,
            "PDF",
            &["pdf"],
            &bytes,
        )
    });
    finish_export(state, "PDF report", result);
}

fn finish_export(
    state: &mut AppState,
    what: &str,
    result: Result<Option<PathBuf>, ExportError>,
) {
    match result {
        Ok(Some(path)) => {
            log::info!("{what} exported to {}", path.display());
            state.status_message = Some(StatusMessage::info(format!(
                "{what} exported to {}",
                path.display()
            )));
        }
        // Dialog cancelled, keep whatever status was there.
        Ok(None) => {}
        Err(e) => {
            log::error!("{what} export failed: {e:#}");
            state.status_message =
                Some(StatusMessage::error(format!("{what} export failed: {e}")));
        }
    }
}
