use crate::chart::figure::{build_figure, Figure, PlotRequest};
use crate::chart::kind::PlotKind;
use crate::config::Config;
use crate::data::lister::list_files;
use crate::data::loader::load_table;
use crate::data::model::{CellValue, Table};
use crate::error::SessionError;

// ---------------------------------------------------------------------------
// Session inputs and outputs
// ---------------------------------------------------------------------------

/// Everything the user has chosen so far. `None` is the "none" entry of the
/// matching dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub file: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub kind: Option<PlotKind>,
}

/// How far one run got through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NoFile,
    FileChosen,
    TableLoaded,
    /// At least one axis chosen, no plot kind yet.
    AxesChosen,
    PlotChosen,
    Rendered,
}

impl Stage {
    /// Next step for the user, shown in the status bar.
    pub fn hint(self) -> &'static str {
        match self {
            Stage::NoFile => "Select a file to begin",
            Stage::FileChosen => "The selected file could not be loaded",
            Stage::TableLoaded => "Choose the axes and a plot",
            Stage::AxesChosen => "Choose a plot",
            Stage::PlotChosen => "Press Generate Plot",
            Stage::Rendered => "Plot generated",
        }
    }
}

/// Result of one session run: what the UI shows until the next interaction.
#[derive(Debug)]
pub struct SessionView {
    pub files: Vec<String>,
    pub table: Option<Table>,
    pub figure: Option<Figure>,
    pub error: Option<SessionError>,
    pub stage: Stage,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            table: None,
            figure: None,
            error: None,
            stage: Stage::NoFile,
        }
    }
}

impl SessionView {
    fn fail(mut self, err: SessionError) -> Self {
        log::warn!("{} error: {err}", err.kind());
        self.error = Some(err);
        self
    }

    /// The first `rows` rows of the loaded table; empty when nothing loaded.
    pub fn preview(&self, rows: usize) -> &[Vec<CellValue>] {
        self.table.as_ref().map(|t| t.head(rows)).unwrap_or_default()
    }

    /// The inline message for the UI, if the run failed.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(SessionError::user_message)
    }
}

// ---------------------------------------------------------------------------
// The pipeline
// ---------------------------------------------------------------------------

/// Evaluate the whole pipeline from scratch for the current selection.
///
/// Lists the data folder, loads the selected file and, when `confirmed`,
/// builds the figure. Nothing is carried over from earlier runs, so equal
/// inputs give equal views.
pub fn run(config: &Config, selection: &Selection, confirmed: bool) -> SessionView {
    log::debug!("session run: {selection:?}, confirmed = {confirmed}");
    let mut view = SessionView::default();

    let files = match list_files(&config.data_dir, &config.extension) {
        Ok(files) => files,
        Err(e) => return view.fail(e.into()),
    };
    view.files = files;

    let Some(name) = selection.file.as_deref() else {
        return view;
    };
    view.stage = Stage::FileChosen;

    let table = match load_table(&config.data_dir, name) {
        Ok(table) => table,
        Err(e) => return view.fail(e.into()),
    };

    view.stage = match (&selection.kind, &selection.x, &selection.y) {
        (Some(_), _, _) => Stage::PlotChosen,
        (None, Some(_), _) | (None, _, Some(_)) => Stage::AxesChosen,
        (None, None, None) => Stage::TableLoaded,
    };

    let figure = match (confirmed, selection.kind) {
        (true, Some(kind)) => {
            let request = PlotRequest {
                kind,
                x: selection.x.clone(),
                y: selection.y.clone(),
            };
            Some(build_figure(&table, &request, config.figure))
        }
        (true, None) => {
            log::debug!("Generate pressed without a plot kind; nothing to render");
            None
        }
        (false, _) => None,
    };

    view.table = Some(table);
    match figure {
        Some(Ok(figure)) => {
            view.figure = Some(figure);
            view.stage = Stage::Rendered;
            view
        }
        Some(Err(e)) => view.fail(e.into()),
        None => view,
    }
}
