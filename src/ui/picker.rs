//! Searchable selection over the formatted user list.
//!
//! The picker owns the sorted users and tracks three pieces of state: the
//! search query, the highlighted match (cursor) and the selected user.
//! Filtering is a substring match on the display label that ignores case and
//! accents.

use crate::data_fetcher::UserWithNameMeta;
use crate::names::fold_for_comparison;

/// Returns true if `label` contains `query`, ignoring case and accents. An empty query matches everything.
pub fn matches_query(label: &str, query: &str) -> bool {
    query.is_empty() || fold_for_comparison(label).contains(&fold_for_comparison(query))
}

#[derive(Debug, Clone)]
pub struct UserPicker {
    options: Vec<UserWithNameMeta>,
    query: String,
    /// Indices into `options` that match `query`, in option order
    matches: Vec<usize>,
    /// Position within `matches`
    highlighted: usize,
    /// Index into `options`
    selected: Option<usize>,
}

impl UserPicker {
    /// Creates a picker over `options`, which are shown in the given order
    pub fn new(options: Vec<UserWithNameMeta>) -> Self {
        let matches = (0..options.len()).collect();
        Self {
            options,
            query: String::new(),
            matches,
            highlighted: 0,
            selected: None,
        }
    }

    pub fn options(&self) -> &[UserWithNameMeta] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Users matching the current query, in display order
    pub fn matches(&self) -> impl Iterator<Item = &UserWithNameMeta> {
        self.matches.iter().map(|&i| &self.options[i])
    }

    /// Position of the highlighted option within [`matches`](Self::matches)
    pub fn highlighted_position(&self) -> Option<usize> {
        (!self.matches.is_empty()).then_some(self.highlighted)
    }

    pub fn highlighted(&self) -> Option<&UserWithNameMeta> {
        self.matches
            .get(self.highlighted)
            .map(|&i| &self.options[i])
    }

    pub fn selected(&self) -> Option<&UserWithNameMeta> {
        self.selected.map(|i| &self.options[i])
    }

    pub fn has_input(&self) -> bool {
        !self.query.is_empty() || self.selected.is_some()
    }

    /// Replaces the query and refilters; the highlight returns to the first match
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Removes the last character. Returns false if the query was already empty.
    pub fn pop_char(&mut self) -> bool {
        if self.query.pop().is_some() {
            self.refilter();
            true
        } else {
            false
        }
    }

    /// Clears both the query and the selection
    pub fn reset(&mut self) {
        self.selected = None;
        self.set_query(String::new());
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.highlighted + 1 < self.matches.len() {
            self.highlighted += 1;
        }
    }

    /// Selects the highlighted option, if any match the query
    pub fn select_highlighted(&mut self) -> Option<&UserWithNameMeta> {
        let index = *self.matches.get(self.highlighted)?;
        self.selected = Some(index);
        self.selected()
    }

    /// Selects the user with `id` regardless of the current query
    pub fn select_by_id(&mut self, id: u64) -> Option<&UserWithNameMeta> {
        let index = self.options.iter().position(|u| u.user.id == id)?;
        self.selected = Some(index);
        self.selected()
    }

    /// Slice of matches to draw so the highlight stays inside a window of `max_rows`.
    ///
    /// Returns the position of the first visible match and the visible users.
    pub fn visible_window(&self, max_rows: usize) -> (usize, Vec<&UserWithNameMeta>) {
        if max_rows == 0 || self.matches.is_empty() {
            return (0, Vec::new());
        }
        let start = (self.highlighted + 1).saturating_sub(max_rows);
        let visible = self
            .matches
            .iter()
            .skip(start)
            .take(max_rows)
            .map(|&i| &self.options[i])
            .collect();
        (start, visible)
    }

    fn refilter(&mut self) {
        self.matches = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, user)| matches_query(user.display(), &self.query))
            .map(|(i, _)| i)
            .collect();
        self.highlighted = 0;
        tracing::trace!("Query {:?} matches {} users", self.query, self.matches.len());
    }
}
