use eframe::egui::{self, ScrollArea, Ui};

use crate::config::Config;
use crate::state::{AppState, Interaction};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DataVisualizerApp {
    pub state: AppState,
}

impl DataVisualizerApp {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for DataVisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Widgets only record what happened; the pipeline re-runs afterwards.
        let mut events = Vec::new();
        let state = &self.state;

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state, &mut events);
        });

        // ---- Central panel: selectors, preview, figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::header(ui);
                    panels::file_selector(ui, state, &mut events);

                    if let Some(table) = &state.view.table {
                        ui.add_space(8.0);
                        ui.columns(2, |cols| {
                            panels::preview_table(
                                &mut cols[0],
                                table.column_names(),
                                state.view.preview(state.config.preview_rows),
                            );
                            panels::plot_selectors(&mut cols[1], state, &mut events);
                        });

                        ui.add_space(8.0);
                        if ui.button("Generate Plot").clicked() {
                            events.push(Interaction::Generate);
                        }
                    }

                    if let Some(message) = state.view.error_message() {
                        ui.add_space(8.0);
                        panels::error_message(ui, &message);
                    }

                    if let Some(figure) = &state.view.figure {
                        ui.add_space(8.0);
                        plot::figure_view(ui, figure);
                    }
                });
        });

        for event in events {
            self.state.apply(event);
        }
    }
}
