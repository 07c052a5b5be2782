use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// How to read an all-numeric date where both leading fields could be a month.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateOrder {
    /// `05/01/2021` is May 1st.
    #[default]
    MonthFirst,
    /// `05/01/2021` is January 5th.
    DayFirst,
}

static TRAILING_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[ T]\d{1,2}(:\d{2}(:\d{2}(\.\d+)?)?\s*(am|pm)?|\s*(am|pm))$").unwrap()
});
static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").unwrap());
static LEADING_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|wed|thurs|thur|thu|fri|sat|sun)\b\.?\s*",
    )
    .unwrap()
});
// "01-May-2021", "1/May/2021": the separator sits between a digit and a letter
static DIGIT_THEN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d)[-/]([a-z])").unwrap());
static WORD_THEN_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([a-z])[-/](\d)").unwrap());
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4})([/\-.])(\d{1,2})([/\-.])(\d{1,4})$").unwrap());

/// Month-name layouts, tried after commas, ordinals and weekdays are stripped.
/// `%B` also accepts the abbreviated month when parsing. The `%y` forms come
/// last so a four-digit year always wins.
const NAMED_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%B %d %Y",
    "%Y %B %d",
    "%Y%m%d",
    "%d %B %y",
    "%B %d %y",
];

/// Parse a human-written calendar date. Any time-of-day suffix is dropped.
pub fn parse_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let s = raw.trim();
    let s = TRAILING_TIME.replace(s, "");
    let s = ORDINAL.replace_all(&s, "$1");
    let s = s.replace(',', " ");
    let s = LEADING_WEEKDAY.replace(s.trim_start(), "");
    let s = DIGIT_THEN_WORD.replace_all(&s, "$1 $2");
    let s = WORD_THEN_DIGIT.replace_all(&s, "$1 $2");
    let s = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = NUMERIC.captures(&s) {
        // mixed separators ("2021-05/01") are not a date
        if caps[2] != caps[4] {
            return None;
        }
        return parse_numeric(&caps[1], &caps[3], &caps[5], order);
    }

    // chrono lets a numeric field run into the next one and reads `%Y` from
    // a single digit, so "May 2021" would otherwise come back as 20 May 0021
    let tokens = s.split(' ').count();
    NAMED_FORMATS
        .iter()
        .filter(|fmt| fmt.split(' ').count() == tokens)
        .find_map(|fmt| {
            NaiveDate::parse_from_str(&s, fmt)
                .ok()
                .filter(|d| d.year() >= 1000)
        })
}

fn parse_numeric(first: &str, second: &str, third: &str, order: DateOrder) -> Option<NaiveDate> {
    // Year-first is never ambiguous
    if first.len() == 4 {
        return NaiveDate::from_ymd_opt(first.parse().ok()?, second.parse().ok()?, third.parse().ok()?);
    }
    if first.len() > 2 {
        return None;
    }

    let year = expand_year(third)?;
    let a: u32 = first.parse().ok()?;
    let b: u32 = second.parse().ok()?;
    let (month, day) = match order {
        DateOrder::MonthFirst => (a, b),
        DateOrder::DayFirst => (b, a),
    };
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, day, month))
}

/// Two-digit years follow the `%y` convention: 69-99 → 19xx, 00-68 → 20xx.
fn expand_year(s: &str) -> Option<i32> {
    let y: i32 = s.parse().ok()?;
    match s.len() {
        4 => Some(y),
        2 if y >= 69 => Some(1900 + y),
        2 => Some(2000 + y),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_forms() {
        let p = |s| parse_date(s, DateOrder::MonthFirst);
        assert_eq!(p("2021-05-01"), ymd(2021, 5, 1));
        assert_eq!(p("2021/5/1"), ymd(2021, 5, 1));
        assert_eq!(p("20210501"), ymd(2021, 5, 1));
        assert_eq!(p("2021-05-01T10:30:00"), ymd(2021, 5, 1));
        assert_eq!(p(" 2021-05-01 22:15 "), ymd(2021, 5, 1));
    }

    #[test]
    fn test_numeric_order() {
        assert_eq!(parse_date("05/01/2021", DateOrder::MonthFirst), ymd(2021, 5, 1));
        assert_eq!(parse_date("05/01/2021", DateOrder::DayFirst), ymd(2021, 1, 5));
        assert_eq!(parse_date("1.2.21", DateOrder::DayFirst), ymd(2021, 2, 1));
    }

    #[test]
    fn test_numeric_falls_back_to_other_order() {
        assert_eq!(parse_date("25/12/2020", DateOrder::MonthFirst), ymd(2020, 12, 25));
        assert_eq!(parse_date("12/25/2020", DateOrder::DayFirst), ymd(2020, 12, 25));
    }

    #[test]
    fn test_month_names() {
        let p = |s| parse_date(s, DateOrder::DayFirst);
        assert_eq!(p("1 May 2021"), ymd(2021, 5, 1));
        assert_eq!(p("1st May 2021"), ymd(2021, 5, 1));
        assert_eq!(p("May 1, 2021"), ymd(2021, 5, 1));
        assert_eq!(p("march 3rd 2019"), ymd(2019, 3, 3));
        assert_eq!(p("22 Sep 2020"), ymd(2020, 9, 22));
        assert_eq!(p("2020 September 22"), ymd(2020, 9, 22));
    }

    #[test]
    fn test_month_name_with_separators() {
        let p = |s| parse_date(s, DateOrder::MonthFirst);
        assert_eq!(p("01-May-2021"), ymd(2021, 5, 1));
        assert_eq!(p("1/May/2021"), ymd(2021, 5, 1));
        assert_eq!(p("1-May 2021"), ymd(2021, 5, 1));
    }

    #[test]
    fn test_month_name_with_two_digit_year() {
        let p = |s| parse_date(s, DateOrder::MonthFirst);
        assert_eq!(p("1 May 21"), ymd(2021, 5, 1));
        assert_eq!(p("May 1, 21"), ymd(2021, 5, 1));
        assert_eq!(p("3 Jan 99"), ymd(1999, 1, 3));
    }

    #[test]
    fn test_leading_weekday() {
        let p = |s| parse_date(s, DateOrder::MonthFirst);
        assert_eq!(p("Sat 1 May 2021"), ymd(2021, 5, 1));
        assert_eq!(p("Saturday, May 1, 2021"), ymd(2021, 5, 1));
        assert_eq!(p("Tue. 4th May 2021"), ymd(2021, 5, 4));
    }

    #[test]
    fn test_hour_only_time_suffix() {
        let p = |s| parse_date(s, DateOrder::MonthFirst);
        assert_eq!(p("1 May 2021 10am"), ymd(2021, 5, 1));
        assert_eq!(p("1 May 2021 7 PM"), ymd(2021, 5, 1));
        assert_eq!(p("2021-05-01 10:15pm"), ymd(2021, 5, 1));
    }

    #[test]
    fn test_rejects_garbage() {
        let p = |s| parse_date(s, DateOrder::MonthFirst);
        assert_eq!(p(""), None);
        assert_eq!(p("fiction, thriller"), None);
        assert_eq!(p("2021-13-01"), None);
        assert_eq!(p("31/31/2020"), None);
        assert_eq!(p("2021-05/01"), None);
        assert_eq!(p("May 2021"), None);
    }
}
