//! Harvest the Book of Books board into two flat tables: one row per book
//! read, and the number of cards per year.

pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod table;
pub mod types;

pub use error::Error;
