use chrono::NaiveDate;

use super::date_parser::{parse_date, DateOrder};
use super::utils::genre_list;
use crate::Error;

/// What a card description contributes to a record. Date and genres are
/// parsed from the same text, so they are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Empty,
    Read {
        date: NaiveDate,
        genres: Vec<String>,
    },
}

impl Description {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Description::Empty => None,
            Description::Read { date, .. } => Some(*date),
        }
    }

    pub fn genres(&self) -> Option<&[String]> {
        match self {
            Description::Empty => None,
            Description::Read { genres, .. } => Some(genres),
        }
    }
}

/// Line 1 is the completion date, line 2 the comma-separated genres.
/// Anything after line 2 is ignored. A description holding only whitespace
/// counts as empty; a date line without a genre line yields no genres.
pub fn date_and_genres(description: &str, order: DateOrder) -> Result<Description, Error> {
    if description.trim().is_empty() {
        return Ok(Description::Empty);
    }

    let mut lines = description.lines();
    let date_line = lines.next().unwrap_or_default();
    let date = parse_date(date_line, order)
        .ok_or_else(|| Error::UnparseableDate(date_line.trim().to_string()))?;
    let genres = lines
        .next()
        .map(|line| genre_list(line.split(',')))
        .unwrap_or_default();

    Ok(Description::Read { date, genres })
}
