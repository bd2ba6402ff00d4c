//! Title- and suffix-aware formatting of free-form full names.
//!
//! This module provides:
//! - Splitting a raw full name into titles, first name, last name and suffix
//! - Building the `"Last Suffix, First (Titles)"` display string
//! - Deriving the lowercase last-name sort key

use std::fmt;

/// Display string and sort key derived from a raw full name.
///
/// The sort key is always the lowercased last-name segment embedded in the
/// display string, so the two fields are only built together by
/// [`format_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameMeta {
    display: String,
    sortable_last_name: String,
}

impl NameMeta {
    /// Human-formatted name, e.g. `"Howell Jr., Ervin (Dr.)"`
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Lowercase last name used to order a list of users. Not unique.
    pub fn sortable_last_name(&self) -> &str {
        &self.sortable_last_name
    }

    /// True for the canonical result of formatting an empty name
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

impl fmt::Display for NameMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// A full name split into its positional parts, borrowing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName<'a> {
    /// Leading tokens ending in a period, before the first name
    pub titles: Vec<&'a str>,
    pub first_name: &'a str,
    /// Zero or more tokens; joined with single spaces for display
    pub last_name: Vec<&'a str>,
    /// Final token when more than one token follows the first name
    pub suffix: Option<&'a str>,
}

impl ParsedName<'_> {
    /// Last-name segments joined by single spaces (may be empty)
    pub fn last_name(&self) -> String {
        self.last_name.join(" ")
    }
}

/// Returns true for tokens that read as an abbreviated honorific ("Dr.", "Mrs.")
pub fn is_title_token(token: &str) -> bool {
    token.ends_with('.')
}

/// Splits a raw full name into titles, first name, last name and suffix.
///
/// Whitespace is trimmed and internal runs are collapsed before splitting.
/// The first name is the first token that does not end in a period; when
/// every token ends in a period the first token is used. When two or more
/// tokens follow the first name the final one is taken as a suffix, by
/// position only.
///
/// # Returns
/// * `Some(ParsedName)` - For any input with at least one token
/// * `None` - For empty or whitespace-only input
///
/// # Examples
/// ```
/// use user_autocomplete::names::parse_name;
///
/// let parsed = parse_name("Dr. Ervin Howell Jr.").unwrap();
/// assert_eq!(parsed.titles, vec!["Dr."]);
/// assert_eq!(parsed.first_name, "Ervin");
/// assert_eq!(parsed.last_name, vec!["Howell"]);
/// assert_eq!(parsed.suffix, Some("Jr."));
///
/// assert!(parse_name("   ").is_none());
/// ```
pub fn parse_name(full_name: &str) -> Option<ParsedName<'_>> {
    let segments: Vec<&str> = full_name.split_whitespace().collect();

    let first_name_index = segments
        .iter()
        .position(|segment| !is_title_token(segment))
        .unwrap_or(0);

    let (titles, rest) = segments.split_at(first_name_index);
    let (first_name, remaining) = rest.split_first()?;

    let (last_name, suffix) = match remaining {
        [last_name @ .., suffix] if !last_name.is_empty() => (last_name, Some(*suffix)),
        _ => (remaining, None),
    };

    Some(ParsedName {
        titles: titles.to_vec(),
        first_name: *first_name,
        last_name: last_name.to_vec(),
        suffix,
    })
}

/// Formats a raw full name into its display string and sort key.
///
/// Empty or whitespace-only input yields an empty [`NameMeta`] rather than an
/// error. A single token becomes the first name with an empty last name, so
/// the display keeps its leading comma.
///
/// # Examples
/// ```
/// use user_autocomplete::names::format_name;
///
/// let meta = format_name("Mrs. Patricia Lebsack");
/// assert_eq!(meta.display(), "Lebsack, Patricia (Mrs.)");
/// assert_eq!(meta.sortable_last_name(), "lebsack");
///
/// let meta = format_name("Madonna");
/// assert_eq!(meta.display(), ", Madonna");
/// assert_eq!(meta.sortable_last_name(), "");
/// ```
pub fn format_name(full_name: &str) -> NameMeta {
    let Some(parsed) = parse_name(full_name) else {
        return NameMeta::default();
    };

    let last_name = parsed.last_name();

    let mut display = last_name.clone();
    if let Some(suffix) = parsed.suffix {
        display.push(' ');
        display.push_str(suffix);
    }
    display.push_str(", ");
    display.push_str(parsed.first_name);
    if !parsed.titles.is_empty() {
        display.push_str(" (");
        display.push_str(&parsed.titles.join(" "));
        display.push(')');
    }

    NameMeta {
        display,
        sortable_last_name: last_name.to_lowercase(),
    }
}
