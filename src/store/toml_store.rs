use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::store::schema::StatisticsFile;

/// The statistics file on disk.
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is `Ok(None)`: no history yet.
    /// Any other read failure or a parse failure is an error, since
    /// carrying on would overwrite the file at exit.
    pub fn load(&self) -> Result<Option<StatisticsFile>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "statistics file not found");
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read statistics file {}", self.path.display())
                });
            }
        };

        let file: StatisticsFile = toml::from_str(&content).with_context(|| {
            format!("failed to parse statistics file {}", self.path.display())
        })?;
        tracing::info!(entries = file.len(), "statistics file loaded");
        Ok(Some(file))
    }

    /// Writes the snapshot through a temporary file so an interrupted save
    /// never truncates the previous one.
    pub fn save(&self, data: &StatisticsFile) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("toml.tmp");

        let content = toml::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)
            .with_context(|| format!("failed to create {}", tmp_path.display()))?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        tracing::info!(entries = data.len(), path = %self.path.display(), "statistics saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::PromptRecord;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, TomlStore) {
        let dir = TempDir::new().unwrap();
        let store = TomlStore::new(dir.path().join("statistics.toml"));
        (dir, store)
    }

    fn sample_file() -> StatisticsFile {
        let mut file = StatisticsFile::default();
        file.statistics.insert(
            "1sg+run".to_string(),
            PromptRecord {
                streak: 1,
                correct: 4,
                mistakes: 2,
                answer: "run".to_string(),
            },
        );
        file.statistics.insert(
            "3sg+be".to_string(),
            PromptRecord {
                streak: 0,
                correct: 0,
                mistakes: 1,
                answer: "is".to_string(),
            },
        );
        file
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let (_dir, store) = make_test_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = make_test_store();
        let file = sample_file();
        store.save(&file).unwrap();
        assert_eq!(store.load().unwrap(), Some(file));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (dir, store) = make_test_store();
        store.save(&sample_file()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(leftovers.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TomlStore::new(dir.path().join("nested").join("statistics.toml"));
        store.save(&sample_file()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let (_dir, store) = make_test_store();
        fs::write(store.path(), "this is = = not toml").unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("failed to parse statistics file"));
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        // A directory where the file should be cannot be read as a file.
        let (_dir, store) = make_test_store();
        fs::create_dir(store.path()).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_written_keys_are_quoted() {
        let (_dir, store) = make_test_store();
        store.save(&sample_file()).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"1sg+run\""));
        assert!(content.contains("Answer = \"run\""));
    }
}
