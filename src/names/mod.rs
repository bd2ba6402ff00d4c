//! User name formatting.
//!
//! - `formatting`: splitting a free-form full name into title, first name,
//!   last name and suffix, and building the display string and sort key
//! - `folding`: accent- and case-insensitive comparison forms

mod folding;
mod formatting;

pub use folding::{compare_sort_keys, fold_for_comparison};
pub use formatting::{NameMeta, ParsedName, format_name, is_title_token, parse_name};
