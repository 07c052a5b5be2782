use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Known-bad author spellings seen on the board → canonical form.
static AUTHOR_TYPOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Jo Nesb√∏", "Jo Nesbo"),
        ("A.G Riddle", "A.G. Riddle"),
        ("HG Wells", "H.G. Wells"),
        ("H G Wells", "H.G. Wells"),
        ("Brooke Mcalary", "Brooke McAlary"),
    ])
});

static TITLE_TYPOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([(
        "The Subtle Art of Not Giving a F#ck",
        "The Subtle Art of Not Giving a F*ck",
    )])
});

fn lookup(table: &HashMap<&'static str, &'static str>, value: &str) -> String {
    table.get(value).copied().unwrap_or(value).to_string()
}

/// Exact, case-sensitive author correction.
pub fn correct_author(author: &str) -> String {
    lookup(&AUTHOR_TYPOS, author)
}

/// Exact, case-sensitive title correction.
pub fn correct_title(title: &str) -> String {
    lookup(&TITLE_TYPOS, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_authors_corrected() {
        assert_eq!(correct_author("HG Wells"), "H.G. Wells");
        assert_eq!(correct_author("H G Wells"), "H.G. Wells");
        assert_eq!(correct_author("Jo Nesb√∏"), "Jo Nesbo");
        assert_eq!(correct_author("Brooke Mcalary"), "Brooke McAlary");
    }

    #[test]
    fn test_unknown_values_pass_through() {
        assert_eq!(correct_author("Frank Herbert"), "Frank Herbert");
        assert_eq!(correct_title("Dune"), "Dune");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(correct_author("hg wells"), "hg wells");
        assert_eq!(correct_author(" HG Wells"), " HG Wells");
    }

    #[test]
    fn test_title_corrected() {
        assert_eq!(
            correct_title("The Subtle Art of Not Giving a F#ck"),
            "The Subtle Art of Not Giving a F*ck"
        );
    }

    #[test]
    fn test_correction_is_idempotent() {
        for (bad, _) in AUTHOR_TYPOS.iter() {
            let once = correct_author(bad);
            assert_eq!(correct_author(&once), once);
        }
        for (bad, _) in TITLE_TYPOS.iter() {
            let once = correct_title(bad);
            assert_eq!(correct_title(&once), once);
        }
    }
}
