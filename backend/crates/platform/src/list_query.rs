//! List Query Pipeline
//!
//! Search, sort and paginate an in-memory collection, then project each
//! surviving record into its public shape.
//!
//! The steps always run in this order: search, sort, paginate, project.
//! [`query`] never mutates its input, so identical inputs give identical
//! pages.

use std::borrow::Cow;
use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// ============================================================================
// Field access
// ============================================================================

/// Named, string-typed view over a record's searchable/sortable fields.
///
/// `FIELDS` is the allow-list. `field` maps an allowed name to the record's
/// value; unknown names return `None` and behave like an absent field.
pub trait FieldAccess {
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

// ============================================================================
// Query specification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive `asc` / `desc`
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// `field:order`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Parse `field:order`. Anything malformed yields `None` (no sorting).
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, order) = split_pair(raw)?;
        Some(Self::new(field, SortOrder::parse(order)?))
    }
}

/// `field:term`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    pub field: String,
    pub term: String,
}

impl SearchSpec {
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            term: term.into(),
        }
    }

    /// Parse `field:term`. A missing field or term yields `None` (no search).
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, term) = split_pair(raw)?;
        Some(Self::new(field, term))
    }
}

/// Only the first two `:`-separated segments count; both must be non-empty.
fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split(':');
    let first = parts.next().filter(|s| !s.is_empty())?;
    let second = parts.next().filter(|s| !s.is_empty())?;
    Some((first, second))
}

/// Raw list parameters as they arrive in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQueryParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

/// Validated list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based
    pub page_number: usize,
    /// `None` means the whole result set is one page
    pub page_size: Option<usize>,
    pub sort: Option<SortSpec>,
    pub search: Option<SearchSpec>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: None,
            sort: None,
            search: None,
        }
    }
}

impl ListQuery {
    /// Build a query from raw parameters.
    ///
    /// - `page_number` missing or not a positive integer → 1
    /// - `page_size` missing → `default_page_size`
    /// - `page_size` present but not a positive integer → no limit
    /// - malformed `sort` / `search` are dropped
    pub fn from_params(params: &ListQueryParams, default_page_size: Option<usize>) -> Self {
        let page_number = params
            .page_number
            .as_deref()
            .and_then(parse_positive)
            .unwrap_or(1);

        let page_size = match params.page_size.as_deref() {
            None => default_page_size,
            Some(raw) => parse_positive(raw),
        };

        Self {
            page_number,
            page_size,
            sort: params.sort.as_deref().and_then(SortSpec::parse),
            search: params.search.as_deref().and_then(SearchSpec::parse),
        }
    }

    pub fn page(mut self, page_number: usize, page_size: usize) -> Self {
        self.page_number = page_number;
        self.page_size = Some(page_size);
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(SortSpec::new(field, order));
        self
    }

    pub fn searching(mut self, field: impl Into<String>, term: impl Into<String>) -> Self {
        self.search = Some(SearchSpec::new(field, term));
        self
    }
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

// ============================================================================
// Result envelope
// ============================================================================

/// One page of results plus paging metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<V> {
    pub page_number: usize,
    pub page_size: usize,
    /// Items in `data`
    pub count: usize,
    pub total_pages: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub data: Vec<V>,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run the pipeline over `records`.
///
/// ```rust
/// use std::borrow::Cow;
/// use platform::list_query::{query, FieldAccess, ListQuery, SortOrder};
///
/// struct Tag(&'static str);
///
/// impl FieldAccess for Tag {
///     const FIELDS: &'static [&'static str] = &["name"];
///
///     fn field(&self, name: &str) -> Option<Cow<'_, str>> {
///         (name == "name").then(|| Cow::Borrowed(self.0))
///     }
/// }
///
/// let tags = [Tag("Bob"), Tag("alice")];
/// let spec = ListQuery::default().sorted_by("name", SortOrder::Asc);
/// let page = query(&tags, &spec, |tag| tag.0);
/// assert_eq!(page.data, vec!["alice", "Bob"]);
/// ```
pub fn query<T, V, F>(records: &[T], spec: &ListQuery, mut projector: F) -> Page<V>
where
    T: FieldAccess,
    F: FnMut(&T) -> V,
{
    let mut selected: Vec<&T> = records.iter().collect();

    if let Some(search) = &spec.search {
        let needle = search.term.to_lowercase();
        selected.retain(|record| {
            record
                .field(&search.field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        });
    }

    if let Some(sort) = &spec.sort {
        if T::FIELDS.contains(&sort.field.as_str()) {
            let key = |record: &&T| record.field(&sort.field).map(|v| CollationKey::new(&v));
            // sort_by_cached_key is stable
            match sort.order {
                SortOrder::Asc => selected.sort_by_cached_key(key),
                SortOrder::Desc => selected.sort_by_cached_key(|record| Reverse(key(record))),
            }
        }
    }

    let total_items = selected.len();
    let page_size = spec.page_size.unwrap_or(total_items);
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let start_index = spec.page_number.saturating_sub(1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(total_items);

    let data: Vec<V> = if start_index < end_index {
        selected[start_index..end_index]
            .iter()
            .map(|record| projector(record))
            .collect()
    } else {
        Vec::new()
    };

    Page {
        page_number: spec.page_number,
        page_size,
        count: data.len(),
        total_pages,
        has_previous_page: spec.page_number > 1,
        has_next_page: end_index < total_items,
        data,
    }
}

// ============================================================================
// Locale-aware comparison
// ============================================================================

/// Three-level collation key.
///
/// 1. base letters, case- and accent-folded
/// 2. accents
/// 3. case, lowercase before uppercase
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
}

impl CollationKey {
    fn new(value: &str) -> Self {
        let mut primary = String::with_capacity(value.len());
        let mut secondary = String::with_capacity(value.len());
        let mut tertiary = Vec::with_capacity(value.len());

        for ch in value.nfd() {
            secondary.extend(ch.to_lowercase());
            if is_combining_mark(ch) {
                continue;
            }
            primary.extend(ch.to_lowercase());
            tertiary.push(ch.is_uppercase());
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Compare two strings the way a human-facing sort would.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Contact {
        name: String,
        city: Option<String>,
        internal_note: String,
    }

    impl Contact {
        fn new(name: &str, city: Option<&str>) -> Self {
            Self {
                name: name.to_string(),
                city: city.map(str::to_string),
                internal_note: format!("note for {name}"),
            }
        }
    }

    impl FieldAccess for Contact {
        const FIELDS: &'static [&'static str] = &["name", "city"];

        fn field(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "name" => Some(Cow::Borrowed(&self.name)),
                "city" => self.city.as_deref().map(Cow::Borrowed),
                _ => None,
            }
        }
    }

    fn numbered(n: usize) -> Vec<Contact> {
        (0..n)
            .map(|i| Contact::new(&format!("contact-{i:02}"), None))
            .collect()
    }

    fn names(page: &Page<String>) -> Vec<&str> {
        page.data.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_second_page_of_ten() {
        let records = numbered(25);
        let spec = ListQuery::default().page(2, 10);

        let page = query(&records, &spec, |c| c.name.clone());

        assert_eq!(page.count, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
        let expected: Vec<String> = records[10..20].iter().map(|c| c.name.clone()).collect();
        assert_eq!(page.data, expected);
    }

    #[test]
    fn test_last_partial_page() {
        let records = numbered(25);
        let page = query(&records, &ListQuery::default().page(3, 10), |c| c.name.clone());

        assert_eq!(page.count, 5);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let records = numbered(5);
        let page = query(&records, &ListQuery::default().page(4, 2), |c| c.name.clone());

        assert!(page.data.is_empty());
        assert_eq!(page.count, 0);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_no_page_size_returns_everything() {
        let records = numbered(7);
        let page = query(&records, &ListQuery::default(), |c| c.name.clone());

        assert_eq!(page.page_size, 7);
        assert_eq!(page.count, 7);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<Contact> = Vec::new();
        let page = query(&records, &ListQuery::default(), |c| c.name.clone());

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.count, 0);
        assert!(page.data.is_empty());
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = vec![
            Contact::new("Alice", Some("Paris")),
            Contact::new("Bob", Some("Berlin")),
            Contact::new("Carol", Some("PARMA")),
        ];
        let spec = ListQuery::default().searching("city", "par");

        let page = query(&records, &spec, |c| c.name.clone());
        assert_eq!(names(&page), ["Alice", "Carol"]);
    }

    #[test]
    fn test_search_without_match() {
        let records = vec![Contact::new("Alice", None), Contact::new("Bob", None)];
        let spec = ListQuery::default().searching("name", "UNKNOWN");

        let page = query(&records, &spec, |c| c.name.clone());
        assert_eq!(page.total_pages, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_search_excludes_missing_and_unknown_fields() {
        let records = vec![
            Contact::new("Alice", Some("Oslo")),
            Contact::new("Bob", None),
        ];

        let page = query(&records, &ListQuery::default().searching("city", "o"), |c| {
            c.name.clone()
        });
        assert_eq!(names(&page), ["Alice"]);

        let page = query(
            &records,
            &ListQuery::default().searching("internal_note", "note"),
            |c| c.name.clone(),
        );
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_sort_is_locale_aware() {
        let records = vec![Contact::new("Bob", None), Contact::new("alice", None)];
        let spec = ListQuery::default().sorted_by("name", SortOrder::Asc);

        let page = query(&records, &spec, |c| c.name.clone());
        assert_eq!(names(&page), ["alice", "Bob"]);
    }

    #[test]
    fn test_sort_descending() {
        let records = vec![
            Contact::new("bravo", None),
            Contact::new("Charlie", None),
            Contact::new("alpha", None),
        ];
        let spec = ListQuery::default().sorted_by("name", SortOrder::Desc);

        let page = query(&records, &spec, |c| c.name.clone());
        assert_eq!(names(&page), ["Charlie", "bravo", "alpha"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![
            Contact::new("first", Some("Rome")),
            Contact::new("second", Some("Athens")),
            Contact::new("third", Some("Rome")),
            Contact::new("fourth", Some("Athens")),
        ];

        let asc = query(
            &records,
            &ListQuery::default().sorted_by("city", SortOrder::Asc),
            |c| c.name.clone(),
        );
        assert_eq!(names(&asc), ["second", "fourth", "first", "third"]);

        let desc = query(
            &records,
            &ListQuery::default().sorted_by("city", SortOrder::Desc),
            |c| c.name.clone(),
        );
        assert_eq!(names(&desc), ["first", "third", "second", "fourth"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_input_order() {
        let records = vec![Contact::new("b", None), Contact::new("a", None)];
        let spec = ListQuery::default().sorted_by("internal_note", SortOrder::Asc);

        let page = query(&records, &spec, |c| c.name.clone());
        assert_eq!(names(&page), ["b", "a"]);
    }

    #[test]
    fn test_search_then_sort_then_paginate() {
        let records = vec![
            Contact::new("Dora", Some("Lyon")),
            Contact::new("anna", Some("Lille")),
            Contact::new("Cleo", Some("Nice")),
            Contact::new("Bea", Some("Lens")),
        ];
        let spec = ListQuery::default()
            .searching("city", "l")
            .sorted_by("name", SortOrder::Asc)
            .page(1, 2);

        let page = query(&records, &spec, |c| c.name.clone());
        assert_eq!(names(&page), ["anna", "Bea"]);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next_page);
    }

    #[test]
    fn test_query_is_pure() {
        let records = vec![
            Contact::new("Bob", Some("Oslo")),
            Contact::new("alice", Some("Bergen")),
            Contact::new("Eve", Some("Oslo")),
        ];
        let snapshot = records.clone();
        let spec = ListQuery::default()
            .sorted_by("name", SortOrder::Desc)
            .page(1, 2);

        let first = query(&records, &spec, |c| c.name.clone());
        let second = query(&records, &spec, |c| c.name.clone());

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_projector_shapes_output() {
        let records = vec![Contact::new("Alice", Some("Oslo"))];
        let page = query(&records, &ListQuery::default(), |c| {
            serde_json::json!({ "name": c.name, "city": c.city })
        });

        let body = serde_json::to_value(&page).unwrap();
        assert_eq!(body["data"][0], serde_json::json!({"name": "Alice", "city": "Oslo"}));
        assert!(!body.to_string().contains("note for"));
        assert_eq!(body["page_number"], 1);
        assert_eq!(body["has_next_page"], false);
    }

    #[test]
    fn test_from_params_defaults() {
        let query = ListQuery::from_params(&ListQueryParams::default(), None);
        assert_eq!(query, ListQuery::default());

        let query = ListQuery::from_params(&ListQueryParams::default(), Some(10));
        assert_eq!(query.page_size, Some(10));
    }

    #[test]
    fn test_from_params_invalid_numbers() {
        let params = ListQueryParams {
            page_number: Some("zero".into()),
            page_size: Some("-3".into()),
            ..Default::default()
        };
        let query = ListQuery::from_params(&params, Some(10));

        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, None);

        let params = ListQueryParams {
            page_number: Some("0".into()),
            page_size: Some("0".into()),
            ..Default::default()
        };
        let query = ListQuery::from_params(&params, Some(10));
        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, None);
    }

    #[test]
    fn test_from_params_sort_and_search() {
        let params = ListQueryParams {
            page_number: Some("3".into()),
            page_size: Some("15".into()),
            sort: Some("name:DESC".into()),
            search: Some("email:example".into()),
        };
        let query = ListQuery::from_params(&params, None);

        assert_eq!(query.page_number, 3);
        assert_eq!(query.page_size, Some(15));
        assert_eq!(query.sort, Some(SortSpec::new("name", SortOrder::Desc)));
        assert_eq!(query.search, Some(SearchSpec::new("email", "example")));
    }

    #[test]
    fn test_malformed_sort_and_search_are_dropped() {
        assert_eq!(SortSpec::parse("name"), None);
        assert_eq!(SortSpec::parse("name:sideways"), None);
        assert_eq!(SortSpec::parse(":asc"), None);
        assert_eq!(SearchSpec::parse("name:"), None);
        assert_eq!(SearchSpec::parse(":bob"), None);
        assert_eq!(SearchSpec::parse("name:bob:extra"), Some(SearchSpec::new("name", "bob")));
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "rot"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}
