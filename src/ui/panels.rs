use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::kind::PlotKind;
use crate::color;
use crate::data::model::CellValue;
use crate::state::{AppState, Interaction};

/// Label of the "nothing selected" entry in every dropdown.
const NONE_LABEL: &str = "None";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &AppState, events: &mut Vec<Interaction>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose data folder…").clicked() {
                if let Some(dir) = pick_data_dir(state) {
                    events.push(Interaction::ChangeDataDir(dir));
                }
                ui.close_menu();
            }
        });

        if ui.button("Refresh").clicked() {
            events.push(Interaction::Refresh);
        }

        ui.separator();

        ui.label(format!(
            "{}  ·  {} files",
            state.config.data_dir.display(),
            state.view.files.len()
        ));

        if let Some(table) = &state.view.table {
            ui.separator();
            ui.label(format!(
                "{} rows × {} columns",
                table.len(),
                table.column_names().len()
            ));
        }

        ui.separator();
        ui.weak(state.view.stage.hint());
    });
}

fn pick_data_dir(state: &AppState) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder()
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Styled title and subtitle.
pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new("📊 ").size(30.0).color(color::TITLE_RED));
            ui.label(RichText::new("Data Visual").size(30.0).strong().color(color::ORANGE));
            ui.label(RichText::new("izer").size(30.0).strong().color(color::BLUE));
        });
        ui.horizontal(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new("Explore, Analyze, and Visualize ").size(15.0).color(color::BLUE));
            ui.label(RichText::new("data like never before...").size(15.0).color(color::ORANGE));
        });
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// A dropdown over `options` plus a leading "None" entry. Returns the new
/// value when the user picks a different one.
fn optional_combo<T: Clone + PartialEq>(
    ui: &mut Ui,
    label: &str,
    current: &Option<T>,
    options: &[T],
    text: impl Fn(&T) -> String,
) -> Option<Option<T>> {
    let mut picked = None;
    let selected_text = current.as_ref().map(&text).unwrap_or_else(|| NONE_LABEL.to_string());

    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), NONE_LABEL).clicked() && current.is_some() {
                picked = Some(None);
            }
            for option in options {
                let is_current = current.as_ref() == Some(option);
                if ui.selectable_label(is_current, text(option)).clicked() && !is_current {
                    picked = Some(Some(option.clone()));
                }
            }
        });
    picked
}

/// File dropdown.
pub fn file_selector(ui: &mut Ui, state: &AppState, events: &mut Vec<Interaction>) {
    if let Some(file) = optional_combo(
        ui,
        "Select a File",
        &state.selection.file,
        &state.view.files,
        String::clone,
    ) {
        events.push(Interaction::SelectFile(file));
    }
}

/// X, Y and plot-kind dropdowns.
pub fn plot_selectors(ui: &mut Ui, state: &AppState, events: &mut Vec<Interaction>) {
    let columns = state.columns();

    if let Some(x) = optional_combo(ui, "Select the X-Axis", &state.selection.x, &columns, String::clone) {
        events.push(Interaction::SelectX(x));
    }
    if let Some(y) = optional_combo(ui, "Select the Y-Axis", &state.selection.y, &columns, String::clone) {
        events.push(Interaction::SelectY(y));
    }
    if let Some(kind) = optional_combo(
        ui,
        "Select a Plot",
        &state.selection.kind,
        &PlotKind::ALL,
        |k: &PlotKind| k.label().to_string(),
    ) {
        events.push(Interaction::SelectKind(kind));
    }
}

// ---------------------------------------------------------------------------
// Preview & messages
// ---------------------------------------------------------------------------

/// Preview rows under their column names, with a leading row-index column.
pub fn preview_table(ui: &mut Ui, columns: &[String], rows: &[Vec<CellValue>]) {
    ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .column(Column::auto())
                .columns(Column::auto().at_least(40.0), columns.len())
                .header(20.0, |mut header| {
                    header.col(|_ui| {});
                    for name in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for (i, row) in rows.iter().enumerate() {
                        body.row(18.0, |mut table_row| {
                            table_row.col(|ui: &mut Ui| {
                                ui.weak(i.to_string());
                            });
                            for cell in row {
                                table_row.col(|ui: &mut Ui| {
                                    ui.label(cell.to_string());
                                });
                            }
                        });
                    }
                });
        });
}

/// Inline error box.
pub fn error_message(ui: &mut Ui, message: &str) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(0x3d, 0x1f, 0x22))
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(message).color(Color32::from_rgb(0xff, 0x8a, 0x8a)));
        });
}
