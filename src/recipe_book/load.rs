//! Bulk construction from a comma-separated row stream.
//!
//! Row format: `name,difficulty,description,mastered`, one row per line,
//! preceded by a header line that is discarded unread. The `mastered`
//! field is everything after the third comma; the literal `"1"` means
//! mastered, anything else means not.

use std::io::BufRead;
use std::num::ParseIntError;

use thiserror::Error;

use crate::recipe::Recipe;
use crate::recipe_book::RecipeBook;

/// A failure while consuming the row stream.
///
/// The load has no partial-success contract: the first hard failure
/// terminates it and the partially-built book is discarded with the error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read row stream")]
    Io(#[from] std::io::Error),

    #[error("row {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },

    #[error("row {line}: difficulty {value:?} is not an integer")]
    InvalidDifficulty {
        line: usize,
        value: String,
        source: ParseIntError,
    },
}

impl RecipeBook {
    /// Builds a book by consuming `reader` to the end, one recipe per row.
    ///
    /// The first line is a header and is always skipped, as are blank
    /// lines. A row naming a recipe that is already present is skipped
    /// whole without looking at its remaining fields: the first occurrence
    /// of a name wins. A short row or a non-numeric difficulty aborts the
    /// load with the corresponding [`LoadError`].
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the reader fails, [`LoadError::MissingField`]
    /// on a row with fewer than four fields, and
    /// [`LoadError::InvalidDifficulty`] when the difficulty field does not
    /// parse as an integer.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut book = Self::new();
        let mut lines = reader.lines();

        // Header. Its absence just means an empty stream.
        if let Some(header) = lines.next() {
            header?;
        }

        for (offset, line) in lines.enumerate() {
            // 1-based, counting the header.
            let line_no = offset + 2;
            let raw = line?;
            let row = raw.strip_suffix('\r').unwrap_or(&raw);
            if row.is_empty() {
                continue;
            }

            // The mastered field runs to the end of the line, so a comma
            // inside it survives; a comma inside the description does not.
            let mut fields = row.splitn(4, ',');
            let Some(name) = fields.next() else {
                continue;
            };
            if book.find(name).is_some() {
                continue;
            }

            let difficulty_raw = fields.next().ok_or(LoadError::MissingField {
                line: line_no,
                field: "difficulty",
            })?;
            let description = fields.next().ok_or(LoadError::MissingField {
                line: line_no,
                field: "description",
            })?;
            let mastered_raw = fields.next().ok_or(LoadError::MissingField {
                line: line_no,
                field: "mastered",
            })?;

            let difficulty = difficulty_raw.parse::<i32>().map_err(|source| {
                LoadError::InvalidDifficulty {
                    line: line_no,
                    value: difficulty_raw.to_owned(),
                    source,
                }
            })?;

            book.add(Recipe::new(name, difficulty, description, mastered_raw == "1"));
        }

        Ok(book)
    }
}
