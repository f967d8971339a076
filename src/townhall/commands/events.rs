//! The events board.
//!
//! The item list is seeded from the catalog once per day and cached under
//! [`EVENTS_KEY`]; a cache from an earlier day (or one that no longer parses)
//! is replaced. Every call builds a fresh [`FilterEngine`] over that list.

use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::engine::{Category, FilterEngine, PageInfo};
use crate::error::{Result, TownhallError};
use crate::model::Item;
use crate::store::{load_json, save_json, BlobStore, EVENTS_KEY};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventCache {
    seeded_on: NaiveDate,
    items: Vec<Item>,
}

#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub filter: Option<Category>,
    pub search: Option<String>,
    /// 1-based. Zero is treated as the first page.
    pub page: usize,
}

/// One rendered page of the board.
#[derive(Debug, Clone, Serialize)]
pub struct EventPage {
    pub items: Vec<Item>,
    pub page_info: PageInfo,
    pub active_filter: String,
    pub search: Option<String>,
    pub total_matches: usize,
}

impl EventPage {
    pub fn from_engine(engine: &FilterEngine, search: Option<String>) -> Self {
        Self {
            items: engine.paginated().to_vec(),
            page_info: engine.page_info(),
            active_filter: engine.active_filter().to_string(),
            search,
            total_matches: engine.view().len(),
        }
    }
}

/// Loads the board for `today`, reseeding the cache when it is stale or unreadable.
pub fn load_source<S: BlobStore>(store: &mut S, today: NaiveDate) -> Result<Vec<Item>> {
    match load_json::<EventCache, _>(store, EVENTS_KEY) {
        Ok(Some(cache)) if cache.seeded_on == today => {
            log::debug!("using cached board from {}", cache.seeded_on);
            return Ok(cache.items);
        }
        Ok(Some(cache)) => {
            log::debug!("cached board from {} is stale", cache.seeded_on);
        }
        Ok(None) => {}
        Err(TownhallError::Serialization(e)) => {
            log::warn!("event cache is unreadable ({}), reseeding", e);
        }
        Err(e) => return Err(e),
    }

    let items = catalog::events(today);
    let cache = EventCache {
        seeded_on: today,
        items: items.clone(),
    };
    save_json(store, EVENTS_KEY, &cache)?;
    Ok(items)
}

pub fn engine<S: BlobStore>(
    store: &mut S,
    page_size: NonZeroUsize,
    now: DateTime<Utc>,
) -> Result<FilterEngine> {
    let source = load_source(store, now.date_naive())?;
    Ok(FilterEngine::with_page_size(source, page_size))
}

pub fn run<S: BlobStore>(
    store: &mut S,
    query: EventQuery,
    page_size: NonZeroUsize,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut engine = engine(store, page_size, now)?;

    engine.filter_by_category_at(query.filter.unwrap_or_default(), now);
    if let Some(term) = &query.search {
        engine.search(term);
    }

    let wanted = query.page.max(1);
    while engine.page() < wanted && engine.next_page() {}

    let mut result = CmdResult::default();
    if engine.view().is_empty() {
        result.add_message(CmdMessage::info(
            "No events found matching your search criteria.",
        ));
    } else if engine.page() < wanted {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the end; showing page {} of {}.",
            wanted,
            engine.page(),
            engine.page_info().total
        )));
    }

    Ok(result.with_events(EventPage::from_engine(&engine, query.search)))
}

pub fn detail<S: BlobStore>(store: &mut S, id: u32, now: DateTime<Utc>) -> Result<CmdResult> {
    let engine = FilterEngine::new(load_source(store, now.date_naive())?);
    let item = engine
        .find(id)
        .cloned()
        .ok_or_else(|| TownhallError::NotFound(format!("event {}", id)))?;
    Ok(CmdResult::default().with_event(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemType;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn six() -> NonZeroUsize {
        NonZeroUsize::new(6).unwrap()
    }

    fn titles(result: &CmdResult) -> Vec<String> {
        result
            .events
            .as_ref()
            .unwrap()
            .items
            .iter()
            .map(|i| i.title.clone())
            .collect()
    }

    #[test]
    fn seeds_cache_on_first_load() {
        let mut store = InMemoryStore::new();
        let items = load_source(&mut store, now().date_naive()).unwrap();
        assert_eq!(items.len(), 5);
        assert!(store.get(EVENTS_KEY).unwrap().is_some());
    }

    #[test]
    fn reuses_same_day_cache() {
        let mut store = InMemoryStore::new();
        let today = now().date_naive();
        let cache = EventCache {
            seeded_on: today,
            items: catalog::events(today).into_iter().take(2).collect(),
        };
        save_json(&mut store, EVENTS_KEY, &cache).unwrap();

        assert_eq!(load_source(&mut store, today).unwrap().len(), 2);
    }

    #[test]
    fn reseeds_stale_cache() {
        let mut store = InMemoryStore::new();
        let yesterday = now().date_naive().pred_opt().unwrap();
        let cache = EventCache {
            seeded_on: yesterday,
            items: Vec::new(),
        };
        save_json(&mut store, EVENTS_KEY, &cache).unwrap();

        let items = load_source(&mut store, now().date_naive()).unwrap();
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn reseeds_corrupt_cache() {
        let mut store = InMemoryStore::new();
        store
            .set(EVENTS_KEY, r#"{"seededOn":"2026-10-19","items":[{"id":1,"date":"soon"}]}"#)
            .unwrap();

        let items = load_source(&mut store, now().date_naive()).unwrap();
        assert_eq!(items.len(), 5);
        let raw = store.get(EVENTS_KEY).unwrap().unwrap();
        assert!(raw.contains("Bacoor City Festival"));
    }

    #[test]
    fn store_write_failure_propagates() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(load_source(&mut store, now().date_naive()).is_err());
    }

    #[test]
    fn default_query_lists_whole_board() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, EventQuery::default(), six(), now()).unwrap();
        let page = result.events.as_ref().unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.active_filter, "all");
        assert_eq!(page.page_info.total, 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filter_by_type() {
        let mut store = InMemoryStore::new();
        let query = EventQuery {
            filter: Some(Category::Type(ItemType::Holiday)),
            ..Default::default()
        };
        let result = run(&mut store, query, six(), now()).unwrap();
        assert_eq!(titles(&result), vec!["All Saints' Day"]);
    }

    #[test]
    fn upcoming_contains_the_three_events() {
        let mut store = InMemoryStore::new();
        let query = EventQuery {
            filter: Some(Category::Upcoming),
            ..Default::default()
        };
        let result = run(&mut store, query, six(), now()).unwrap();
        assert_eq!(
            titles(&result),
            vec![
                "Bacoor City Festival",
                "Public Consultation on City Budget",
                "Clean-up Drive"
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut store = InMemoryStore::new();
        let query = EventQuery {
            search: Some("FESTIVAL".into()),
            ..Default::default()
        };
        let result = run(&mut store, query, six(), now()).unwrap();
        assert_eq!(titles(&result), vec!["Bacoor City Festival"]);
        assert_eq!(result.events.unwrap().search.as_deref(), Some("FESTIVAL"));
    }

    #[test]
    fn empty_search_reports_no_events() {
        let mut store = InMemoryStore::new();
        let query = EventQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        let result = run(&mut store, query, six(), now()).unwrap();
        assert!(titles(&result).is_empty());
        assert_eq!(
            result.messages[0].content,
            "No events found matching your search criteria."
        );
    }

    #[test]
    fn pages_with_small_page_size() {
        let mut store = InMemoryStore::new();
        let query = EventQuery {
            page: 3,
            ..Default::default()
        };
        let result = run(&mut store, query, NonZeroUsize::new(2).unwrap(), now()).unwrap();
        let page = result.events.unwrap();
        assert_eq!(page.page_info.current, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "All Saints' Day");
        assert!(page.page_info.has_prev);
        assert!(!page.page_info.has_next);
    }

    #[test]
    fn page_past_end_clamps_with_warning() {
        let mut store = InMemoryStore::new();
        let query = EventQuery {
            page: 9,
            ..Default::default()
        };
        let result = run(&mut store, query, six(), now()).unwrap();
        assert_eq!(result.events.as_ref().unwrap().page_info.current, 1);
        assert!(result.messages[0].content.contains("Page 9 is past the end"));
    }

    #[test]
    fn detail_finds_event() {
        let mut store = InMemoryStore::new();
        let result = detail(&mut store, 3, now()).unwrap();
        let item = result.event.unwrap();
        assert_eq!(item.title, "Clean-up Drive");
        assert!(item.can_register());
    }

    #[test]
    fn detail_unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            detail(&mut store, 42, now()),
            Err(TownhallError::NotFound(_))
        ));
    }
}
