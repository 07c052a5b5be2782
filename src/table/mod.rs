pub mod write;

pub use write::{commit_all, stage_books, stage_books_per_year, StagedFile};

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::process::{build_records, BookRecord, DateOrder};
use crate::types::RawCard;

/// Cards ingested per BoB list year, counted before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearCounts(BTreeMap<String, usize>);

impl YearCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` cards fetched for `year`. Two lists with the same year are
    /// summed.
    pub fn add(&mut self, year: &str, count: usize) {
        *self.0.entry(year.to_string()).or_default() += count;
    }

    pub fn get(&self, year: &str) -> Option<usize> {
        self.0.get(year).copied()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rows ordered by year.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(y, n)| (y.as_str(), *n))
    }
}

/// Sort records by completion date, ascending.
///
/// The sort is stable, so records finished on the same day keep the order
/// they were ingested in. Records without a date go last.
pub fn sort_by_date(mut records: Vec<BookRecord>) -> Vec<BookRecord> {
    records.sort_by_key(|r| (r.date.is_none(), r.date));
    records
}

/// The two output tables of a run, fully built in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub books: Vec<BookRecord>,
    pub per_year: YearCounts,
}

impl Tables {
    /// Normalize and sort `cards`. Any card that fails aborts the whole run.
    pub fn assemble(cards: &[RawCard], per_year: YearCounts, order: DateOrder) -> Result<Self> {
        let books = sort_by_date(build_records(cards, order)?);
        Ok(Self { books, per_year })
    }

    /// Overwrite both files, or neither. Both tables are staged before
    /// either target is replaced.
    pub fn write(&self, books_path: impl AsRef<Path>, per_year_path: impl AsRef<Path>) -> Result<()> {
        info!(
            books = self.books.len(),
            ingested = self.per_year.total(),
            "Creating tables and saving locally"
        );
        let books = stage_books(books_path.as_ref(), &self.books)?;
        let per_year = stage_books_per_year(per_year_path.as_ref(), &self.per_year)?;
        commit_all(vec![books, per_year])?;
        info!(
            books = %books_path.as_ref().display(),
            per_year = %per_year_path.as_ref().display(),
            "wrote tables"
        );
        Ok(())
    }
}
