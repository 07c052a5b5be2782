use anyhow::{Context, Result};
use futures::future::try_join_all;
use tracing::{info, instrument};

use super::BoardClient;
use crate::process::utils::year_from_name;
use crate::table::YearCounts;
use crate::types::{BoardList, RawCard};
use crate::Error;

/// Lists whose name starts with this (any case) hold one year of books.
pub const BOB_PREFIX: &str = "bob";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BobList {
    pub id: String,
    pub year: String,
}

/// Raw cards in list order plus the ingestion count per year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Harvest {
    pub cards: Vec<RawCard>,
    pub per_year: YearCounts,
}

impl Harvest {
    /// Record the cards fetched from one list. The year count is taken here,
    /// before any card is parsed.
    pub fn push(&mut self, year: &str, cards: Vec<RawCard>) {
        info!("Got {} books for {}", cards.len(), year);
        self.per_year.add(year, cards.len());
        self.cards.extend(cards);
    }
}

/// Keep the BoB lists, in board order, and pull the year out of each name.
pub fn select_bob_lists(lists: &[BoardList]) -> Result<Vec<BobList>, Error> {
    lists
        .iter()
        .filter(|l| l.name.to_lowercase().starts_with(BOB_PREFIX))
        .map(|l| {
            let year =
                year_from_name(&l.name).ok_or_else(|| Error::MalformedListName(l.name.clone()))?;
            Ok(BobList {
                id: l.id.clone(),
                year,
            })
        })
        .collect()
}

/// Fetch every BoB list's cards. Requests for the lists run concurrently;
/// results are collected in list order.
#[instrument(level = "info", skip(client))]
pub async fn harvest(client: &BoardClient, board_id: &str) -> Result<Harvest> {
    let lists = client
        .fetch_lists(board_id)
        .await
        .with_context(|| format!("fetching lists of board {}", board_id))?;
    let bob_lists = select_bob_lists(&lists)?;
    info!("Got {} Book of Books lists", bob_lists.len());

    let fetched = try_join_all(bob_lists.iter().map(|l| async move {
        client
            .fetch_cards(&l.id)
            .await
            .with_context(|| format!("fetching cards of list {} ({})", l.id, l.year))
    }))
    .await?;

    Ok(gather(&bob_lists, fetched))
}

/// Pair each list with its fetched cards. `fetched[i]` belongs to `lists[i]`.
pub fn gather(lists: &[BobList], fetched: Vec<Vec<RawCard>>) -> Harvest {
    let mut out = Harvest::default();
    for (list, cards) in lists.iter().zip(fetched) {
        out.push(&list.year, cards);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{build_records, DateOrder};

    fn list(id: &str, name: &str) -> BoardList {
        BoardList {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_select_bob_lists() {
        let lists = vec![
            list("1", "To Read"),
            list("2", "BoB 2019"),
            list("3", "bob 2020"),
            list("4", "Reading"),
            list("5", "BOB 2021 (so far)"),
        ];
        let selected = select_bob_lists(&lists).unwrap();
        assert_eq!(
            selected,
            vec![
                BobList { id: "2".into(), year: "2019".into() },
                BobList { id: "3".into(), year: "2020".into() },
                BobList { id: "5".into(), year: "2021".into() },
            ]
        );
    }

    #[test]
    fn test_bob_list_without_year() {
        let lists = vec![list("1", "BoB")];
        assert_eq!(
            select_bob_lists(&lists),
            Err(Error::MalformedListName("BoB".into()))
        );
    }

    #[test]
    fn test_gather_keeps_list_order() {
        let lists = select_bob_lists(&[
            list("9", "BoB 2021"),
            list("3", "Reading"),
            list("4", "BoB 2019"),
            list("7", "BoB 2020"),
        ])
        .unwrap();
        let fetched = vec![
            vec![RawCard::new("C1 - A", "", &["Ok"]), RawCard::new("C2 - A", "", &["Ok"])],
            vec![RawCard::new("A1 - B", "", &["Ok"])],
            vec![],
        ];
        let h = gather(&lists, fetched);

        let names: Vec<_> = h.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C1 - A", "C2 - A", "A1 - B"]);
        assert_eq!(h.per_year.get("2021"), Some(2));
        assert_eq!(h.per_year.get("2019"), Some(1));
        // an empty list still gets its year row
        assert_eq!(h.per_year.get("2020"), Some(0));
    }

    #[test]
    fn test_year_counts_are_ingestion_counts() {
        let mut h = Harvest::default();
        h.push(
            "2020",
            vec![
                RawCard::new("A - One", "2020-01-01\nx", &["Ok"]),
                RawCard::new("not a book name", "", &["Ok"]),
            ],
        );
        h.push("2021", vec![RawCard::new("B - Two", "", &["Good"])]);

        assert_eq!(h.cards.len(), 3);
        assert_eq!(h.per_year.get("2020"), Some(2));
        assert_eq!(h.per_year.get("2021"), Some(1));
        // the malformed card still counts, even though normalizing fails
        assert!(build_records(&h.cards, DateOrder::default()).is_err());
        assert_eq!(h.per_year.total(), 3);
    }
}
