use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy shown to the user
// ---------------------------------------------------------------------------

/// The four kinds every session failure is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    EmptyData,
    InvalidAxis,
    Unexpected,
}

/// Listing the data folder or loading a file from it failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The data folder '{}' could not be read: {source}", .path.display())]
    Folder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The selected file '{name}' does not exist.")]
    NotFound { name: String },

    #[error("No columns to parse from file")]
    EmptyData,

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        expected: usize,
        found: usize,
        line: u64,
    },

    #[error("reading '{name}': {source}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },
}

/// Building a figure from the loaded table failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A required axis is unset or names a column the table does not have.
    #[error("invalid axis {0:?}")]
    InvalidAxis(Option<String>),

    #[error("column '{0}' is not numeric")]
    NotNumeric(String),
}

/// Any failure of one session run.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Load(LoadError::Folder { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                ErrorKind::NotFound
            }
            SessionError::Load(LoadError::NotFound { .. }) => ErrorKind::NotFound,
            SessionError::Load(LoadError::EmptyData) => ErrorKind::EmptyData,
            SessionError::Render(RenderError::InvalidAxis(_)) => ErrorKind::InvalidAxis,
            _ => ErrorKind::Unexpected,
        }
    }

    /// The single inline message shown for this failure.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::NotFound => format!("An error occurred: {self}"),
            ErrorKind::EmptyData => {
                "The selected CSV file is empty. Please choose another file.".to_string()
            }
            ErrorKind::InvalidAxis => "Please select valid X and Y axes.".to_string(),
            ErrorKind::Unexpected => format!("An unexpected error occurred: {self}"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::EmptyData => "empty data",
            ErrorKind::InvalidAxis => "invalid axis",
            ErrorKind::Unexpected => "unexpected",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_kind() {
        let err = SessionError::from(LoadError::NotFound {
            name: "gone.csv".into(),
        });
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.user_message(),
            "An error occurred: The selected file 'gone.csv' does not exist."
        );

        let err = SessionError::from(RenderError::InvalidAxis(Some("zzz".into())));
        assert_eq!(err.user_message(), "Please select valid X and Y axes.");

        let err = SessionError::from(RenderError::NotNumeric("name".into()));
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(
            err.user_message(),
            "An unexpected error occurred: column 'name' is not numeric"
        );
    }

    #[test]
    fn missing_folder_is_not_found_other_io_is_unexpected() {
        let missing = SessionError::from(LoadError::Folder {
            path: PathBuf::from("nowhere"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let denied = SessionError::from(LoadError::Folder {
            path: PathBuf::from("locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
        assert_eq!(denied.kind(), ErrorKind::Unexpected);
    }
}
