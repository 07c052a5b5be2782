use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use super::YearCounts;
use crate::process::BookRecord;

/// Separator used inside the `genres` cell.
pub const GENRE_SEPARATOR: &str = ";";

/// `books.csv` columns. The unnamed first column is the row index.
const BOOKS_HEADER: &[&str] = &["", "title", "author", "rating", "date", "genres"];
const YEARS_HEADER: &[&str] = &["", "total"];

#[derive(Serialize)]
struct BookRow<'a> {
    index: usize,
    title: &'a str,
    author: &'a str,
    rating: f64,
    date: String,
    genres: String,
}

impl<'a> BookRow<'a> {
    fn new(index: usize, rec: &'a BookRecord) -> Self {
        Self {
            index,
            title: &rec.title,
            author: &rec.author,
            rating: rec.rating,
            date: rec
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            genres: rec
                .genres
                .as_ref()
                .map(|g| g.join(GENRE_SEPARATOR))
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct YearRow<'a> {
    year: &'a str,
    total: usize,
}

/// A table written to a hidden sibling of its target, waiting to be renamed
/// into place. Dropping it without committing removes the temp file.
pub struct StagedFile {
    tmp: PathBuf,
    target: PathBuf,
}

impl StagedFile {
    /// Rename over the target. An existing target is first moved aside and
    /// its backup path returned, so the caller can restore it.
    fn commit(&self) -> Result<Option<PathBuf>> {
        let backup = if self.target.is_file() {
            let backup = hidden_sibling(&self.target, "bak")?;
            fs::rename(&self.target, &backup)
                .with_context(|| format!("renaming {:?} -> {:?}", self.target, backup))?;
            Some(backup)
        } else {
            None
        };

        if let Err(e) = fs::rename(&self.tmp, &self.target) {
            if let Some(b) = &backup {
                let _ = fs::rename(b, &self.target);
            }
            return Err(e).with_context(|| format!("renaming {:?} -> {:?}", self.tmp, self.target));
        }
        Ok(backup)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        // gone already once committed
        let _ = fs::remove_file(&self.tmp);
    }
}

/// Commit every staged file or none of them. If a rename fails, targets
/// already replaced are put back the way they were.
pub fn commit_all(files: Vec<StagedFile>) -> Result<()> {
    let mut done: Vec<(&Path, Option<PathBuf>)> = Vec::with_capacity(files.len());
    for f in &files {
        match f.commit() {
            Ok(backup) => done.push((&f.target, backup)),
            Err(e) => {
                for (target, backup) in done.into_iter().rev() {
                    match backup {
                        Some(b) => {
                            if let Err(re) = fs::rename(&b, target) {
                                warn!(target = %target.display(), error = %re, "failed to restore");
                            }
                        }
                        None => {
                            let _ = fs::remove_file(target);
                        }
                    }
                }
                return Err(e);
            }
        }
    }
    for (_, backup) in done {
        if let Some(b) = backup {
            let _ = fs::remove_file(b);
        }
    }
    Ok(())
}

/// `dir/name` → `dir/.name.<suffix>`
fn hidden_sibling(path: &Path, suffix: &str) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{:?} has no file name", path))?;
    Ok(path.with_file_name(format!(".{}.{}", file_name, suffix)))
}

/// Write `header` and `rows` to a temp file next to `path`.
fn stage_rows<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: impl IntoIterator<Item = T>,
) -> Result<StagedFile> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    let staged = StagedFile {
        tmp: hidden_sibling(path, "tmp")?,
        target: path.to_path_buf(),
    };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&staged.tmp)
        .with_context(|| format!("creating {:?}", staged.tmp))?;
    wtr.write_record(header)
        .with_context(|| format!("writing header to {:?}", staged.tmp))?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("writing row to {:?}", staged.tmp))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {:?}", staged.tmp))?;
    Ok(staged)
}

pub fn stage_books(path: impl AsRef<Path>, records: &[BookRecord]) -> Result<StagedFile> {
    stage_rows(
        path.as_ref(),
        BOOKS_HEADER,
        records.iter().enumerate().map(|(i, r)| BookRow::new(i, r)),
    )
}

pub fn stage_books_per_year(path: impl AsRef<Path>, counts: &YearCounts) -> Result<StagedFile> {
    stage_rows(
        path.as_ref(),
        YEARS_HEADER,
        counts.iter().map(|(year, total)| YearRow { year, total }),
    )
}
