use crate::eventos::model::Event;
use chrono::Datelike;
use itertools::Itertools;
use std::ops::RangeInclusive;
use tracing::{trace, warn};

pub const DEFAULT_DURATION_RANGE: RangeInclusive<u32> = 1..=30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EventOrder {
    #[default]
    Date,
    Likes,
    /// Alphabetical by location
    Proximity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Timeframe {
    #[default]
    All,
    Weekend,
}

/// What the listing currently shows. Empty strings mean "no filter".
#[derive(Debug, Clone)]
pub struct EventQuery {
    pub search: String,
    pub location: String,
    pub event_type: String,
    pub timeframe: Timeframe,
    pub duration: RangeInclusive<u32>,
    pub free_only: bool,
    pub order: EventOrder,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            event_type: String::new(),
            timeframe: Timeframe::All,
            duration: DEFAULT_DURATION_RANGE,
            free_only: false,
            order: EventOrder::Date,
        }
    }
}

impl EventQuery {
    pub fn matches(&self, event: &Event) -> bool {
        let search = self.search.to_lowercase();

        let matches_search = search.is_empty()
            || [&event.title, &event.location, &event.event_type]
                .iter()
                .any(|field| field.to_lowercase().contains(&search));
        let matches_location = self.location.is_empty() || event.location == self.location;
        let matches_type = self.event_type.is_empty() || event.event_type == self.event_type;
        let matches_timeframe = match self.timeframe {
            Timeframe::All => true,
            Timeframe::Weekend => event.is_weekend,
        };

        matches_search
            && matches_location
            && matches_type
            && matches_timeframe
            && self.duration.contains(&event.duration)
            && (!self.free_only || event.is_free())
    }
}

/// The loaded collection. Only `likes` ever changes after loading.
#[derive(Debug, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Returns the new like count, `None` for an unknown id
    pub fn like(&mut self, id: &str) -> Option<u32> {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                event.likes = event.likes.saturating_add(1);
                trace!("Event {} now has {} likes", id, event.likes);
                Some(event.likes)
            }
            None => {
                warn!("Tried to like unknown event {}", id);
                None
            }
        }
    }

    pub fn query(&self, query: &EventQuery) -> Vec<&Event> {
        let filtered = self.events.iter().filter(|event| query.matches(event));

        match query.order {
            EventOrder::Date => filtered.sorted_by_key(|event| event.start_date).collect(),
            EventOrder::Likes => filtered
                .sorted_by(|a, b| b.likes.cmp(&a.likes))
                .collect(),
            EventOrder::Proximity => filtered
                .sorted_by(|a, b| a.location.cmp(&b.location))
                .collect(),
        }
    }

    /// Distinct locations, for the location filter
    pub fn locations(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(|event| event.location.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Distinct event types, for the type filter
    pub fn event_types(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(|event| event.event_type.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Events starting in `month` (1 to 12) of any year, for the globe timeline
    pub fn in_month(&self, month: u32, event_type: Option<&str>) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.start_date.month() == month)
            .filter(|event| event_type.map_or(true, |t| event.event_type == t))
            .collect()
    }
}
