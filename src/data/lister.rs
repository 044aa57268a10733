use std::path::Path;

use crate::error::LoadError;

/// Names of the regular files in `dir` whose name ends with `extension`.
///
/// No recursion; order is whatever the directory enumeration yields.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<String>, LoadError> {
    let folder_err = |source| LoadError::Folder {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(folder_err)? {
        let entry = entry.map_err(folder_err)?;
        if !entry.path().is_file() {
            continue;
        }
        // Non-UTF-8 names cannot be shown in the dropdown.
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.ends_with(extension) {
            files.push(name);
        }
    }

    log::info!("Found {} '{extension}' files in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_matching_files_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.csv"), "x\n1\n").unwrap();
        std::fs::write(dir.path().join("b.txt"), "x\n1\n").unwrap();
        std::fs::write(dir.path().join("c.csv.bak"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.csv")).unwrap();
        std::fs::write(dir.path().join("nested.csv").join("inner.csv"), "").unwrap();

        let files = list_files(dir.path(), ".csv").unwrap();
        assert_eq!(files, vec!["a.csv".to_string()]);
    }

    #[test]
    fn folder_without_csv_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.md"), "# hi").unwrap();
        std::fs::write(dir.path().join("data.json"), "[]").unwrap();

        assert!(list_files(dir.path(), ".csv").unwrap().is_empty());
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_files(&dir.path().join("absent"), ".csv").unwrap_err();
        assert!(matches!(err, LoadError::Folder { .. }));
    }
}
