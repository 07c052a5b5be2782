use crate::Error;

/// The fixed rating vocabulary used as card labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rating {
    Bad,
    Ok,
    Good,
    Excellent,
}

impl Rating {
    pub fn weight(&self) -> u32 {
        match self {
            Rating::Bad => 1,
            Rating::Ok => 2,
            Rating::Good => 3,
            Rating::Excellent => 4,
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        match self {
            Rating::Bad => "Bad",
            Rating::Ok => "Ok",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        }
    }

    /// Exact label match; anything else is an [`Error::UnknownLabel`].
    pub fn from_label(label: &str) -> Result<Self, Error> {
        match label {
            "Bad" => Ok(Rating::Bad),
            "Ok" => Ok(Rating::Ok),
            "Good" => Ok(Rating::Good),
            "Excellent" => Ok(Rating::Excellent),
            other => Err(Error::UnknownLabel(other.to_string())),
        }
    }
}

/// Mean weight of the given labels, unrounded.
pub fn aggregate_rating<'a, I>(labels: I) -> Result<f64, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sum = 0u32;
    let mut count = 0u32;
    for label in labels {
        sum += Rating::from_label(label)?.weight();
        count += 1;
    }
    if count == 0 {
        return Err(Error::EmptyLabelSet);
    }
    Ok(f64::from(sum) / f64::from(count))
}
