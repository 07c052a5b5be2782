use std::fmt;

/// Everything that can stop a harvest before the tables are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required access parameter (`key`, `token`) was not supplied.
    MissingCredential(&'static str),
    /// Card name has no `Title - Author` structure.
    MalformedName(String),
    /// Rating label outside `Bad | Ok | Good | Excellent`.
    UnknownLabel(String),
    /// Card carries no rating labels at all.
    EmptyLabelSet,
    /// First description line is not a recognizable date.
    UnparseableDate(String),
    /// A BoB list name without a year token.
    MalformedListName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCredential(name) => write!(f, "missing credential: {}", name),
            Error::MalformedName(name) => {
                write!(f, "card name {:?} is not of the form \"Title - Author\"", name)
            }
            Error::UnknownLabel(label) => write!(f, "unknown rating label {:?}", label),
            Error::EmptyLabelSet => write!(f, "card has no rating labels"),
            Error::UnparseableDate(raw) => write!(f, "cannot parse {:?} as a date", raw),
            Error::MalformedListName(name) => {
                write!(f, "list name {:?} has no year after the prefix", name)
            }
        }
    }
}

impl std::error::Error for Error {}
