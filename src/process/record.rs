use chrono::NaiveDate;

use super::date_parser::DateOrder;
use super::description::date_and_genres;
use super::name::title_and_author;
use super::rating::aggregate_rating;
use crate::types::RawCard;
use crate::Error;

/// A card after parsing and typo correction.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub date: Option<NaiveDate>,
    pub genres: Option<Vec<String>>,
}

/// Build one record from one card. Pure; no state is shared between cards.
pub fn build_record(card: &RawCard, order: DateOrder) -> Result<BookRecord, Error> {
    let names = title_and_author(&card.name)?;
    let rating = aggregate_rating(card.label_names())?;
    let description = date_and_genres(&card.description, order)?;

    Ok(BookRecord {
        title: names.title,
        author: names.author,
        rating,
        date: description.date(),
        genres: description.genres().map(<[String]>::to_vec),
    })
}
