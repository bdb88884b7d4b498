pub mod table;

use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};
use thiserror::Error;

pub use table::VocabularyTable;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("cannot open vocabulary {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("vocabulary {} has no sheets", path.display())]
    NoSheets { path: PathBuf },
    #[error("cannot read sheet {sheet:?}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("vocabulary has {rows} row(s), at least 2 are required")]
    TooFewRows { rows: usize },
    #[error(
        "label {label:?} contains the reserved character '{}'",
        crate::engine::prompt::PROMPT_SEPARATOR
    )]
    ReservedSeparator { label: String },
}

/// Reads the first sheet of a workbook (xlsx, xls, xlsb or ods).
pub fn read_workbook(path: &Path) -> Result<VocabularyTable, VocabError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| VocabError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| VocabError::NoSheets {
            path: path.to_path_buf(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| VocabError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    // The range begins at the first used cell; pad so column indices match
    // the sheet.
    let first_column = range.start().map_or(0, |(_, column)| column as usize);
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|cells| {
            std::iter::repeat_n(String::new(), first_column)
                .chain(cells.iter().map(|cell| cell.to_string()))
                .collect()
        })
        .collect();
    tracing::info!(path = %path.display(), sheet = %sheet, rows = rows.len(), "read vocabulary");

    VocabularyTable::from_rows(rows)
}
