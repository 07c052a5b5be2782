/// Trim surrounding whitespace from every fragment, keeping order.
pub fn clean_list<'a, I>(fragments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments.into_iter().map(|s| s.trim().to_string()).collect()
}

/// Clean, lowercase and sort genre fragments. Empty fragments (from `"a,,b"`
/// or a trailing comma) are dropped.
pub fn genre_list<'a, I>(fragments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut genres: Vec<String> = clean_list(fragments)
        .into_iter()
        .filter(|g| !g.is_empty())
        .map(|g| g.to_lowercase())
        .collect();
    genres.sort();
    genres
}

/// Year token of a BoB list name: the second whitespace-separated word,
/// e.g. `"BoB 2021"` → `"2021"`.
pub fn year_from_name(list_name: &str) -> Option<String> {
    list_name.split_whitespace().nth(1).map(str::to_string)
}
