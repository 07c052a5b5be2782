use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::process::DateOrder;
use crate::Error;

pub const DEFAULT_BOARD_ID: &str = "5a8606d16fa75ce590950255";
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

pub const BOOKS_FILE: &str = "books.csv";
pub const BOOKS_PER_YEAR_FILE: &str = "books_per_year.csv";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    author,
    version,
    about = "Harvest the Book of Books board into books.csv and books_per_year.csv"
)]
pub struct Args {
    /// Board holding the BoB lists
    #[arg(long, default_value = DEFAULT_BOARD_ID)]
    pub board_id: String,
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
    #[arg(long, env = "TRELLO_KEY", hide_env_values = true)]
    pub key: Option<String>,
    #[arg(long, env = "TRELLO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Directory the two tables are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Read ambiguous numeric dates as day/month/year
    #[arg(long)]
    pub day_first: bool,
}

/// API access parameters, sent as query parameters on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"***")
            .field("token", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn query(&self) -> [(&str, &str); 2] {
        [("key", self.key.as_str()), ("token", self.token.as_str())]
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub board_id: String,
    pub api_url: Url,
    pub credentials: Credentials,
    pub out_dir: PathBuf,
    pub date_order: DateOrder,
}

impl Config {
    /// Validate `args`. Blank or absent credentials are
    /// [`Error::MissingCredential`].
    pub fn from_args(args: Args) -> Result<Self> {
        let key = non_blank(args.key).ok_or(Error::MissingCredential("TRELLO_KEY"))?;
        let token = non_blank(args.token).ok_or(Error::MissingCredential("TRELLO_TOKEN"))?;

        // Url::join drops the last path segment unless it ends in '/'
        let mut api = args.api_url.trim_end_matches('/').to_string();
        api.push('/');
        let api_url = Url::parse(&api).with_context(|| format!("parsing API URL {}", api))?;

        Ok(Self {
            board_id: args.board_id,
            api_url,
            credentials: Credentials { key, token },
            out_dir: args.out_dir,
            date_order: if args.day_first {
                DateOrder::DayFirst
            } else {
                DateOrder::MonthFirst
            },
        })
    }

    pub fn books_path(&self) -> PathBuf {
        self.out_dir.join(BOOKS_FILE)
    }

    pub fn books_per_year_path(&self) -> PathBuf {
        self.out_dir.join(BOOKS_PER_YEAR_FILE)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
