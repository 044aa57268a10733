use std::path::PathBuf;

use crate::chart::kind::PlotKind;
use crate::config::Config;
use crate::session::{self, Selection, SessionView};

// ---------------------------------------------------------------------------
// User interactions
// ---------------------------------------------------------------------------

/// One widget event. Each re-runs the session pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    SelectFile(Option<String>),
    SelectX(Option<String>),
    SelectY(Option<String>),
    SelectKind(Option<PlotKind>),
    /// The Generate Plot button.
    Generate,
    Refresh,
    ChangeDataDir(PathBuf),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Current dropdown values.
    pub selection: Selection,

    /// Output of the latest run, shown until the next interaction.
    pub view: SessionView,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let selection = Selection::default();
        let view = session::run(&config, &selection, false);
        Self {
            config,
            selection,
            view,
        }
    }

    /// Apply one interaction and re-run the pipeline from scratch.
    pub fn apply(&mut self, interaction: Interaction) {
        let mut confirmed = false;
        match interaction {
            Interaction::SelectFile(file) => {
                if file != self.selection.file {
                    // New file, new columns.
                    self.selection.x = None;
                    self.selection.y = None;
                }
                self.selection.file = file;
            }
            Interaction::SelectX(x) => self.selection.x = x,
            Interaction::SelectY(y) => self.selection.y = y,
            Interaction::SelectKind(kind) => self.selection.kind = kind,
            Interaction::Generate => confirmed = true,
            Interaction::Refresh => {}
            Interaction::ChangeDataDir(dir) => {
                log::info!("Data folder set to {}", dir.display());
                self.config.data_dir = dir;
                self.selection = Selection::default();
            }
        }
        self.view = session::run(&self.config, &self.selection, confirmed);
    }

    /// Column names of the loaded table, empty when nothing is loaded.
    pub fn columns(&self) -> Vec<String> {
        self.view
            .table
            .as_ref()
            .map(|t| t.column_names().to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_files() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sales.csv"), "month,revenue\nJan,1\nFeb,2\n").unwrap();
        std::fs::write(dir.path().join("other.csv"), "k,v\na,1\n").unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        (dir, AppState::new(config))
    }

    #[test]
    fn figure_lasts_until_next_interaction() {
        let (_dir, mut state) = state_with_files();
        state.apply(Interaction::SelectFile(Some("sales.csv".into())));
        state.apply(Interaction::SelectX(Some("month".into())));
        state.apply(Interaction::SelectY(Some("revenue".into())));
        state.apply(Interaction::SelectKind(Some(PlotKind::Line)));
        assert!(state.view.figure.is_none());

        state.apply(Interaction::Generate);
        assert!(state.view.figure.is_some());

        state.apply(Interaction::Refresh);
        assert!(state.view.figure.is_none());
        assert_eq!(state.columns(), vec!["month".to_string(), "revenue".to_string()]);
    }

    #[test]
    fn changing_file_clears_axes() {
        let (_dir, mut state) = state_with_files();
        state.apply(Interaction::SelectFile(Some("sales.csv".into())));
        state.apply(Interaction::SelectX(Some("month".into())));
        state.apply(Interaction::SelectKind(Some(PlotKind::Count)));

        state.apply(Interaction::SelectFile(Some("other.csv".into())));
        assert_eq!(state.selection.x, None);
        assert_eq!(state.selection.kind, Some(PlotKind::Count));
        assert_eq!(state.columns(), vec!["k".to_string(), "v".to_string()]);
    }

    #[test]
    fn new_data_dir_resets_selection() {
        let (_dir, mut state) = state_with_files();
        state.apply(Interaction::SelectFile(Some("sales.csv".into())));

        let empty = tempfile::tempdir().unwrap();
        state.apply(Interaction::ChangeDataDir(empty.path().to_path_buf()));
        assert_eq!(state.selection, Selection::default());
        assert!(state.view.files.is_empty());
        assert!(state.view.table.is_none());
    }
}
