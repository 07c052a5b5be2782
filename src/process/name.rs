use super::typos::{correct_author, correct_title};
use super::utils::clean_list;
use crate::Error;

/// Separator between title and author in a card name.
pub const NAME_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleAuthor {
    pub title: String,
    pub author: String,
}

/// Split `"<Title> - <Author>"` into its parts.
///
/// The author is the text after the *last* separator. Titles may contain the
/// separator themselves, so everything before it is rejoined with a bare `-`.
/// Both halves go through the typo tables.
pub fn title_and_author(card_name: &str) -> Result<TitleAuthor, Error> {
    let mut parts = clean_list(card_name.split(NAME_SEPARATOR));
    let author = parts.pop().unwrap_or_default();
    let title = parts.join("-");

    if title.is_empty() || author.is_empty() {
        return Err(Error::MalformedName(card_name.to_string()));
    }

    Ok(TitleAuthor {
        title: correct_title(&title),
        author: correct_author(&author),
    })
}
