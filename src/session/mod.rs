//! Session export handling.
//!
//! A session export is a tab-separated text file containing two table
//! blocks: the full clip timeline and the grouped-region timeline. This
//! module locates the blocks and parses their `START TIME` / `END TIME`
//! columns into ordered interval lists.

mod export;
mod types;

pub use export::parse_session_export;
pub use types::{Interval, SessionTimelines};
