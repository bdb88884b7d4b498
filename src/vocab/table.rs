use crate::engine::prompt::PROMPT_SEPARATOR;
use crate::vocab::VocabError;

/// Conjugation data: clue labels, verbs, and a form matrix indexed by verb
/// then clue. Rows may be shorter than the clue list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyTable {
    clues: Vec<String>,
    verbs: Vec<String>,
    forms: Vec<Vec<String>>,
}

impl VocabularyTable {
    /// Builds a table from raw sheet rows.
    ///
    /// Row 0 is the header: its first two columns are ignored and the rest are
    /// clue labels. Every following row holds the verb in column 1 and the
    /// forms from column 2 on. Rows with an empty verb cell are skipped.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, VocabError> {
        if rows.len() < 2 {
            return Err(VocabError::TooFewRows { rows: rows.len() });
        }

        let mut rows = rows.into_iter();
        let header = rows.next().unwrap_or_default();
        let clues: Vec<String> = header.into_iter().skip(2).collect();
        for clue in &clues {
            check_label(clue)?;
        }

        let mut verbs = Vec::new();
        let mut forms = Vec::new();
        let mut skipped = 0usize;
        for row in rows {
            let mut cells = row.into_iter();
            let verb = cells.nth(1).unwrap_or_default();
            if verb.trim().is_empty() {
                skipped += 1;
                continue;
            }
            check_label(&verb)?;
            verbs.push(verb);
            forms.push(cells.collect());
        }
        if skipped > 0 {
            tracing::debug!(skipped, "skipped vocabulary rows without a verb");
        }

        Ok(Self {
            clues,
            verbs,
            forms,
        })
    }

    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    /// The cell for `verb_index` and `clue_index`, if the row reaches it.
    pub fn form(&self, verb_index: usize, clue_index: usize) -> Option<&str> {
        self.forms
            .get(verb_index)?
            .get(clue_index)
            .map(String::as_str)
    }
}

fn check_label(label: &str) -> Result<(), VocabError> {
    if label.contains(PROMPT_SEPARATOR) {
        return Err(VocabError::ReservedSeparator {
            label: label.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_from_rows_reads_header_and_forms() {
        let table = VocabularyTable::from_rows(vec![
            row(&["", "", "1sg", "3sg"]),
            row(&["", "run", "run", "runs"]),
            row(&["", "be", "am", "is"]),
        ])
        .unwrap();
        assert_eq!(table.clues(), ["1sg", "3sg"]);
        assert_eq!(table.verbs(), ["run", "be"]);
        assert_eq!(table.form(1, 1), Some("is"));
    }

    #[test]
    fn test_short_rows_have_no_trailing_forms() {
        let table = VocabularyTable::from_rows(vec![
            row(&["id", "verb", "1sg", "3sg"]),
            row(&["1", "run", "run"]),
        ])
        .unwrap();
        assert_eq!(table.form(0, 0), Some("run"));
        assert_eq!(table.form(0, 1), None);
        assert_eq!(table.form(5, 0), None);
    }

    #[test]
    fn test_too_few_rows_is_an_error() {
        let err = VocabularyTable::from_rows(vec![row(&["", "", "1sg"])]).unwrap_err();
        assert!(matches!(err, VocabError::TooFewRows { rows: 1 }));
        assert!(VocabularyTable::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_rows_without_verb_are_skipped() {
        let table = VocabularyTable::from_rows(vec![
            row(&["", "", "1sg"]),
            row(&["", "  ", "x"]),
            row(&[""]),
            row(&["", "go", "go"]),
        ])
        .unwrap();
        assert_eq!(table.verbs(), ["go"]);
        assert_eq!(table.form(0, 0), Some("go"));
    }

    #[test]
    fn test_separator_in_label_is_rejected() {
        let err = VocabularyTable::from_rows(vec![
            row(&["", "", "1sg+pl"]),
            row(&["", "run", "run"]),
        ])
        .unwrap_err();
        assert!(matches!(err, VocabError::ReservedSeparator { ref label } if label == "1sg+pl"));

        let err = VocabularyTable::from_rows(vec![
            row(&["", "", "1sg"]),
            row(&["", "run+off", "run off"]),
        ])
        .unwrap_err();
        assert!(matches!(err, VocabError::ReservedSeparator { .. }));
    }
}
