//! Output rows keyed by column name

use crate::entity::SEPARATOR;
use std::collections::HashMap;

/// One output row; columns absent from the record serialize as empty cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(HashMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Set `column` to the `||`-joined values; an empty list leaves it unset
    pub fn set_joined<S: AsRef<str>>(&mut self, column: impl Into<String>, values: &[S]) {
        if values.is_empty() {
            return;
        }
        let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(SEPARATOR);
        self.0.insert(column.into(), joined);
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn remove(&mut self, column: &str) -> Option<String> {
        self.0.remove(column)
    }

    /// Cells in `header` order
    pub fn row<'a>(&'a self, header: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        header.iter().map(move |column| self.get(column).unwrap_or(""))
    }
}
