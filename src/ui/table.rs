use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::view::TableRow;

// ---------------------------------------------------------------------------
// Roster table over the filtered view
// ---------------------------------------------------------------------------

/// Render the striped roster table. An empty view shows an explicit
/// empty-state line instead of a bare header.
pub fn roster_table(ui: &mut Ui, rows: &[TableRow]) {
    if rows.is_empty() {
        ui.add_space(8.0);
        ui.weak("No students match the current filter.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::remainder())
        .columns(Column::auto(), 4)
        .column(Column::auto())
        .header(20.0, |mut header| {
            for title in ["#", "Name", "Math", "Science", "English", "Avg", "Category"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(row.rank.to_string());
                    });
                    table_row.col(|ui| {
                        ui.label(&row.name);
                    });
                    table_row.col(|ui| {
                        ui.label(row.math.to_string());
                    });
                    table_row.col(|ui| {
                        ui.label(row.science.to_string());
                    });
                    table_row.col(|ui| {
                        ui.label(row.english.to_string());
                    });
                    table_row.col(|ui| {
                        ui.label(
                            RichText::new(row.average.to_string())
                                .color(color::score_color(row.average as f64))
                                .strong(),
                        );
                    });
                    table_row.col(|ui| {
                        ui.label(
                            RichText::new(row.category.label())
                                .color(color::category_color(row.category)),
                        );
                    });
                });
            }
        });
}
