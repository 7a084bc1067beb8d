use crate::catalog::{CATALOG, LanguageEntry, default_language};


/// Catalog entries whose label contains `query`, ignoring case, in catalog order.
pub fn filter_languages<'a>(catalog: &'a [LanguageEntry], query: &str) -> Vec<&'a LanguageEntry> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.label.to_lowercase().contains(&query))
        .collect()
}

/// Filtered entries split into exact label matches and everything else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matches<'a> {
    pub exact: Vec<&'a LanguageEntry>,
    pub others: Vec<&'a LanguageEntry>,
}

impl<'a> Matches<'a> {
    /// Display order: exact matches first, then the rest.
    pub fn iter(&self) -> impl Iterator<Item = &'a LanguageEntry> + '_ {
        self.exact.iter().chain(self.others.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.others.is_empty()
    }

    pub fn into_ordered(self) -> Vec<&'a LanguageEntry> {
        let mut ordered = self.exact;
        ordered.extend(self.others);
        ordered
    }
}

pub fn order_matches<'a>(filtered: &[&'a LanguageEntry], query: &str) -> Matches<'a> {
    let query = query.to_lowercase();
    // Iterator::partition keeps relative order in both halves
    let (exact, others) = filtered
        .iter()
        .copied()
        .partition(|entry| entry.label.to_lowercase() == query);
    Matches { exact, others }
}

/// State behind the language combobox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorState {
    query: String,
    selected: &'static LanguageEntry,
    is_open: bool,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorState {
    pub fn new() -> Self {
        let selected = default_language();
        Self {
            query: selected.label.to_string(),
            selected,
            is_open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> &'static LanguageEntry {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Replaces the typed text. The current selection is left alone even if it no longer matches.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn select(&mut self, entry: &'static LanguageEntry) {
        self.query = entry.label.to_string();
        self.selected = entry;
        self.is_open = false;
    }

    pub fn filtered(&self) -> Vec<&'static LanguageEntry> {
        filter_languages(&CATALOG, &self.query)
    }

    pub fn ordered(&self) -> Matches<'static> {
        order_matches(&self.filtered(), &self.query)
    }

    pub fn greeting(&self) -> &'static str {
        self.selected.message
    }

    pub fn button_label(&self) -> &'static str {
        self.selected.button
    }
}
