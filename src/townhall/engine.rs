//! # Event Filter Engine
//!
//! [`FilterEngine`] owns the list behind the events board and answers one
//! question: which items are on screen right now?
//!
//! ## State
//!
//! ```text
//!   source ──filter/search──▶ view ──page/page_size──▶ paginated()
//! ```
//!
//! - `source` is fixed at construction and never mutated.
//! - `view` is recomputed wholesale on every [`filter_by_category`] or
//!   [`search`] call, never patched incrementally.
//! - `page` is 1-based. Filtering and searching reset it to 1; only
//!   [`next_page`] and [`prev_page`] move it, and they never leave the range
//!   `1..=total` (or stay at 1 for an empty view).
//! - `page_size` is fixed at construction.
//!
//! ## Categories
//!
//! | Category   | Matches                                                       |
//! |------------|---------------------------------------------------------------|
//! | `all`      | every item, in source order                                   |
//! | `upcoming` | category `upcoming`, or an event dated at or after now        |
//! | `past`     | category `past`, or an event dated strictly before now        |
//! | a type     | items whose type is exactly that type                         |
//!
//! "Now" is read when the filter runs. Tests pin it with
//! [`FilterEngine::filter_by_category_at`].
//!
//! ## Search
//!
//! Search is a case-insensitive substring match over `title` and
//! `description` of the whole source, regardless of the active filter. The
//! empty string matches nothing; clearing a search means filtering again.
//!
//! [`filter_by_category`]: FilterEngine::filter_by_category
//! [`search`]: FilterEngine::search
//! [`next_page`]: FilterEngine::next_page
//! [`prev_page`]: FilterEngine::prev_page

use crate::model::{Item, ItemCategory, ItemType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Upcoming,
    Past,
    Type(ItemType),
}

impl Category {
    fn matches(&self, item: &Item, now: DateTime<Utc>) -> bool {
        match self {
            Category::All => true,
            Category::Upcoming => {
                item.category == ItemCategory::Upcoming
                    || (item.item_type == ItemType::Event && item.date >= now)
            }
            Category::Past => {
                item.category == ItemCategory::Past
                    || (item.item_type == ItemType::Event && item.date < now)
            }
            Category::Type(t) => item.item_type == *t,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("all"),
            Category::Upcoming => f.write_str("upcoming"),
            Category::Past => f.write_str("past"),
            Category::Type(t) => write!(f, "{}", t),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category '{0}' (expected all, upcoming, past, event, announcement or holiday)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    // Case-sensitive, like the type tags themselves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Category::All),
            "upcoming" => Ok(Category::Upcoming),
            "past" => Ok(Category::Past),
            "event" => Ok(Category::Type(ItemType::Event)),
            "announcement" => Ok(Category::Type(ItemType::Announcement)),
            "holiday" => Ok(Category::Type(ItemType::Holiday)),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Pagination summary for rendering page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone)]
pub struct FilterEngine {
    source: Vec<Item>,
    view: Vec<Item>,
    active_filter: Category,
    page: usize,
    page_size: NonZeroUsize,
}

impl FilterEngine {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_page_size(items, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(items: Vec<Item>, page_size: NonZeroUsize) -> Self {
        Self {
            view: items.clone(),
            source: items,
            active_filter: Category::All,
            page: 1,
            page_size,
        }
    }

    pub fn source(&self) -> &[Item] {
        &self.source
    }

    pub fn view(&self) -> &[Item] {
        &self.view
    }

    pub fn active_filter(&self) -> Category {
        self.active_filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn find(&self, id: u32) -> Option<&Item> {
        self.source.iter().find(|item| item.id == id)
    }

    /// Filters the source by `category` as of the current instant.
    pub fn filter_by_category(&mut self, category: Category) -> &[Item] {
        self.filter_by_category_at(category, Utc::now())
    }

    pub fn filter_by_category_at(&mut self, category: Category, now: DateTime<Utc>) -> &[Item] {
        self.view = self
            .source
            .iter()
            .filter(|item| category.matches(item, now))
            .cloned()
            .collect();
        self.active_filter = category;
        self.page = 1;
        log::debug!(
            "filter '{}' selected {} of {} items",
            category,
            self.view.len(),
            self.source.len()
        );
        &self.view
    }

    /// Searches titles and descriptions of the whole source.
    pub fn search(&mut self, term: &str) -> &[Item] {
        self.view = if term.is_empty() {
            Vec::new()
        } else {
            let needle = term.to_lowercase();
            self.source
                .iter()
                .filter(|item| {
                    item.title.to_lowercase().contains(&needle)
                        || item.description.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        };
        self.page = 1;
        log::debug!("search '{}' matched {} items", term, self.view.len());
        &self.view
    }

    /// The slice of the view on the current page. Empty past the last page.
    pub fn paginated(&self) -> &[Item] {
        let size = self.page_size.get();
        let start = (self.page - 1).saturating_mul(size);
        if start >= self.view.len() {
            return &[];
        }
        let end = (start + size).min(self.view.len());
        &self.view[start..end]
    }

    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn total_pages(&self) -> usize {
        self.view.len().div_ceil(self.page_size.get())
    }

    pub fn page_info(&self) -> PageInfo {
        let total = self.total_pages();
        PageInfo {
            current: self.page,
            total,
            has_next: self.page < total,
            has_prev: self.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn event(id: u32, title: &str, days: i64) -> Item {
        Item::new(
            id,
            title,
            format!("Details for {}", title),
            now() + Duration::days(days),
            ItemType::Event,
            ItemCategory::Upcoming,
        )
    }

    fn events(n: u32) -> Vec<Item> {
        (1..=n).map(|i| event(i, &format!("Event {}", i), 1)).collect()
    }

    fn mixed() -> Vec<Item> {
        let mut past_event = event(2, "Tree Planting", -3);
        past_event.category = ItemCategory::Past;
        let mut stale = event(3, "Old Fair", -10);
        // Filed as upcoming but already over.
        stale.category = ItemCategory::Upcoming;
        vec![
            event(1, "Bacoor City Festival", 7),
            past_event,
            stale,
            Item::new(
                4,
                "Road Closure Advisory",
                "Main Street will be closed",
                now(),
                ItemType::Announcement,
                ItemCategory::Announcement,
            ),
            Item::new(
                5,
                "All Saints' Day",
                "Offices closed",
                now() + Duration::days(13),
                ItemType::Holiday,
                ItemCategory::Holiday,
            ),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn starts_with_full_view_on_first_page() {
        let engine = FilterEngine::new(mixed());
        assert_eq!(engine.view().len(), 5);
        assert_eq!(engine.page(), 1);
        assert_eq!(engine.active_filter(), Category::All);
        assert_eq!(engine.page_size(), 6);
    }

    #[test]
    fn all_returns_source_in_order() {
        let mut engine = FilterEngine::new(mixed());
        let view = engine.filter_by_category_at(Category::All, now());
        assert_eq!(ids(view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn upcoming_uses_category_or_event_date() {
        let mut engine = FilterEngine::new(mixed());
        let view = engine.filter_by_category_at(Category::Upcoming, now());
        // Item 3 is filed as upcoming even though its date has passed.
        assert_eq!(ids(view), vec![1, 3]);
    }

    #[test]
    fn past_uses_category_or_event_date() {
        let mut engine = FilterEngine::new(mixed());
        let view = engine.filter_by_category_at(Category::Past, now());
        assert_eq!(ids(view), vec![2, 3]);
    }

    #[test]
    fn event_dated_now_is_upcoming_not_past() {
        let mut item = event(1, "Now", 0);
        item.category = ItemCategory::Announcement;
        let mut engine = FilterEngine::new(vec![item]);

        assert_eq!(engine.filter_by_category_at(Category::Upcoming, now()).len(), 1);
        assert!(engine.filter_by_category_at(Category::Past, now()).is_empty());
    }

    #[test]
    fn type_filter_matches_exactly() {
        let mut engine = FilterEngine::new(mixed());
        assert_eq!(
            ids(engine.filter_by_category_at(Category::Type(ItemType::Holiday), now())),
            vec![5]
        );
        assert_eq!(
            ids(engine.filter_by_category_at(Category::Type(ItemType::Event), now())),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn type_filter_with_no_matches_is_empty() {
        let mut engine = FilterEngine::new(events(3));
        let view = engine.filter_by_category_at(Category::Type(ItemType::Holiday), now());
        assert!(view.is_empty());
        assert_eq!(engine.page_info().total, 0);
    }

    #[test]
    fn upcoming_plus_past_bounded_by_source_when_exclusive() {
        let items = vec![
            Item::new(1, "a", "a", now() + Duration::days(1), ItemType::Event, ItemCategory::Announcement),
            Item::new(2, "b", "b", now() - Duration::days(1), ItemType::Event, ItemCategory::Announcement),
            Item::new(3, "c", "c", now(), ItemType::Holiday, ItemCategory::Holiday),
        ];
        let mut engine = FilterEngine::new(items);
        let up = engine.filter_by_category_at(Category::Upcoming, now()).len();
        let past = engine.filter_by_category_at(Category::Past, now()).len();
        assert_eq!(up, 1);
        assert_eq!(past, 1);
        assert!(up + past <= engine.source().len());
    }

    #[test]
    fn filtering_is_idempotent_and_resets_page() {
        let mut engine = FilterEngine::new(events(13));
        engine.next_page();
        let first = engine.filter_by_category_at(Category::Upcoming, now()).to_vec();
        assert_eq!(engine.page(), 1);
        engine.next_page();
        let second = engine.filter_by_category_at(Category::Upcoming, now()).to_vec();
        assert_eq!(engine.page(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn pagination_over_thirteen_items() {
        let mut engine = FilterEngine::new(events(13));
        assert_eq!(engine.page_info().total, 3);
        assert!(engine.next_page());
        assert!(engine.next_page());
        assert_eq!(engine.page(), 3);
        assert!(!engine.next_page());
        assert_eq!(engine.page(), 3);
        assert_eq!(engine.paginated().len(), 1);
        assert_eq!(engine.paginated()[0].id, 13);
    }

    #[test]
    fn nine_item_walkthrough() {
        let mut engine = FilterEngine::new(events(9));
        assert_eq!(engine.filter_by_category_at(Category::All, now()).len(), 9);
        assert_eq!(engine.page(), 1);
        assert_eq!(ids(engine.paginated()), vec![1, 2, 3, 4, 5, 6]);

        assert!(engine.next_page());
        assert_eq!(engine.page(), 2);
        assert_eq!(ids(engine.paginated()), vec![7, 8, 9]);

        assert!(!engine.next_page());
        assert_eq!(engine.page(), 2);
    }

    #[test]
    fn prev_page_stops_at_first() {
        let mut engine = FilterEngine::new(events(9));
        assert!(!engine.prev_page());
        engine.next_page();
        assert!(engine.prev_page());
        assert_eq!(engine.page(), 1);
        assert!(!engine.prev_page());
    }

    #[test]
    fn page_info_flags() {
        let mut engine = FilterEngine::new(events(7));
        assert_eq!(
            engine.page_info(),
            PageInfo {
                current: 1,
                total: 2,
                has_next: true,
                has_prev: false
            }
        );
        engine.next_page();
        assert_eq!(
            engine.page_info(),
            PageInfo {
                current: 2,
                total: 2,
                has_next: false,
                has_prev: true
            }
        );
    }

    #[test]
    fn empty_view_has_no_pages() {
        let mut engine = FilterEngine::new(Vec::new());
        let info = engine.page_info();
        assert_eq!(info.total, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
        assert!(!engine.next_page());
        assert!(engine.paginated().is_empty());
    }

    #[test]
    fn empty_search_matches_nothing() {
        let mut engine = FilterEngine::new(mixed());
        assert!(engine.search("").is_empty());
        assert_eq!(engine.filter_by_category_at(Category::All, now()).len(), 5);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut engine = FilterEngine::new(mixed());
        let view = engine.search("festival");
        assert_eq!(ids(view), vec![1]);
        assert_eq!(view[0].title, "Bacoor City Festival");
    }

    #[test]
    fn search_covers_description_but_not_full_description() {
        let mut item = event(1, "Drive", 1);
        item.full_description = Some("Gloves provided".into());
        let mut engine = FilterEngine::new(vec![item, event(2, "Gloves Giveaway", 1)]);

        assert_eq!(ids(engine.search("gloves")), vec![2]);
        assert_eq!(ids(engine.search("DETAILS FOR DRIVE")), vec![1]);
    }

    #[test]
    fn search_ignores_active_filter_and_keeps_it() {
        let mut engine = FilterEngine::new(mixed());
        engine.filter_by_category_at(Category::Type(ItemType::Holiday), now());
        let view = engine.search("road");
        assert_eq!(ids(view), vec![4]);
        assert_eq!(engine.active_filter(), Category::Type(ItemType::Holiday));
    }

    #[test]
    fn search_resets_page() {
        let mut engine = FilterEngine::new(events(13));
        engine.next_page();
        engine.search("event");
        assert_eq!(engine.page(), 1);
        assert_eq!(engine.view().len(), 13);
    }

    #[test]
    fn source_is_untouched_by_filtering() {
        let mut engine = FilterEngine::new(mixed());
        engine.filter_by_category_at(Category::Past, now());
        engine.search("zzz");
        assert_eq!(ids(engine.source()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn custom_page_size() {
        let mut engine = FilterEngine::with_page_size(events(5), NonZeroUsize::new(2).unwrap());
        assert_eq!(engine.page_info().total, 3);
        engine.next_page();
        engine.next_page();
        assert_eq!(ids(engine.paginated()), vec![5]);
    }

    #[test]
    fn parses_category_names() {
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert_eq!("past".parse::<Category>().unwrap(), Category::Past);
        assert_eq!(
            "announcement".parse::<Category>().unwrap(),
            Category::Type(ItemType::Announcement)
        );
        assert_eq!(
            "concert".parse::<Category>(),
            Err(UnknownCategory("concert".into()))
        );
        assert!("Upcoming".parse::<Category>().is_err());
    }

    #[test]
    fn category_display_round_trips() {
        for name in ["all", "upcoming", "past", "event", "announcement", "holiday"] {
            assert_eq!(name.parse::<Category>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn find_looks_in_source() {
        let mut engine = FilterEngine::new(mixed());
        engine.search("zzz");
        assert_eq!(engine.find(5).map(|i| i.title.as_str()), Some("All Saints' Day"));
        assert!(engine.find(99).is_none());
    }
}
