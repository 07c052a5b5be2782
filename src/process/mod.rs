// src/process/mod.rs

pub mod date_parser;
pub mod description;
pub mod name;
pub mod rating;
pub mod record;
pub mod typos;
pub mod utils;

pub use date_parser::{parse_date, DateOrder};
pub use record::{build_record, BookRecord};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::types::RawCard;

/// Normalize every card. Fails on the first card that does not parse; the
/// error carries that card's name and downcasts to [`crate::Error`].
#[instrument(level = "debug", skip_all, fields(cards = cards.len()))]
pub fn build_records(cards: &[RawCard], order: DateOrder) -> Result<Vec<BookRecord>> {
    cards
        .iter()
        .map(|card| -> Result<BookRecord> {
            let rec = build_record(card, order)
                .with_context(|| format!("normalizing card {:?}", card.name))?;
            debug!(title = %rec.title, author = %rec.author, rating = rec.rating, "built record");
            Ok(rec)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_build_records_keeps_input_order() -> Result<()> {
        let cards = vec![
            RawCard::new("B - Two", "2021-02-01\nx", &["Ok"]),
            RawCard::new("A - One", "2021-01-01\ny", &["Bad"]),
        ];
        let recs = build_records(&cards, DateOrder::default())?;
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "B");
        assert_eq!(recs[1].title, "A");
        Ok(())
    }

    #[test]
    fn test_first_failure_aborts_with_card_name() {
        let cards = vec![
            RawCard::new("A - One", "", &["Ok"]),
            RawCard::new("Broken", "", &["Ok"]),
            RawCard::new("C - Three", "", &[]),
        ];
        let err = build_records(&cards, DateOrder::default()).unwrap_err();
        assert!(err.to_string().contains("Broken"));
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::MalformedName("Broken".into()))
        );
    }
}
