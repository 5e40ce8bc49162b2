use super::coordinates::{CoordinateTable, ONLINE};
use super::dates::{duration_in_days, format_display, is_weekend, DateParser};
use super::dto::{first_of, ConferenceResponse, EventResponse, ResponseOrganizer, SourceRecord};
use super::model::{Event, FREE_PRICE, PRESENTIAL_FORMAT};
use chrono::NaiveDate;
use rand::Rng;
use std::ops::Range;

const DEFAULT_EVENT_TYPE: &str = "evento";
const DEFAULT_CONFERENCE_TYPE: &str = "conference";
const DEFAULT_CONFERENCE_TITLE: &str = "AI Conference";
const DEFAULT_ORGANIZER: &str = "AI Brasil";
const DEFAULT_CONFERENCE_ORGANIZER: &str = "AI Community";
const DEFAULT_COUNTRY: &str = "Brazil";
const DEFAULT_TAGS: [&str; 1] = ["AI"];
const DEFAULT_CONFERENCE_TAGS: [&str; 2] = ["AI", "Conference"];

const LIKES_RANGE: Range<u32> = 100..600;
const ATTENDEES_RANGE: Range<u32> = 200..1200;

const EVENT_IMAGES: [&str; 10] = [
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1591115765373-5207764f72e7?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?w=400&h=200&fit=crop",
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=400&h=200&fit=crop",
];

/// Maps raw records onto [`Event`].
///
/// Every field is resolved from an ordered list of candidates, the first one
/// present wins. `likes`, and `attendees` when the record has no figure, are
/// drawn from `rng` so a seeded generator gives reproducible events.
pub struct EventNormalizer<R: Rng> {
    dates: DateParser,
    coordinates: CoordinateTable,
    rng: R,
}

impl<R: Rng> EventNormalizer<R> {
    pub fn new(dates: DateParser, coordinates: CoordinateTable, rng: R) -> Self {
        Self {
            dates,
            coordinates,
            rng,
        }
    }

    pub fn dates(&self) -> &DateParser {
        &self.dates
    }

    /// `start` is the record's already parsed start date. `index` is the
    /// position of the event in the session, used for its id and image.
    pub fn normalize(&mut self, record: &SourceRecord, start: NaiveDate, index: usize) -> Event {
        let end = record.end_date().map(|end| self.dates.parse(end));
        let likes = self.rng.gen_range(LIKES_RANGE);

        let mut event = Event {
            id: record.shape().event_id(index),
            title: String::new(),
            event_type: String::new(),
            start_date: start,
            date: format_display(start),
            end_date: end.map(format_display),
            location: String::new(),
            image: EVENT_IMAGES[index % EVENT_IMAGES.len()].to_string(),
            description: String::new(),
            likes,
            attendees: 0,
            is_weekend: is_weekend(start),
            duration: duration_in_days(start, end),
            coordinates: self.coordinates.online(),
            organizer: String::new(),
            price: FREE_PRICE.to_string(),
            tags: Vec::new(),
            format: PRESENTIAL_FORMAT.to_string(),
            venue: String::new(),
            state: String::new(),
        };

        match record {
            SourceRecord::Conference(conference) => self.fill_conference(&mut event, conference),
            SourceRecord::Single { resource, event: response } => {
                self.fill_single(&mut event, resource, response)
            }
        }

        event
    }

    fn fill_single(&mut self, event: &mut Event, resource: &str, response: &EventResponse) {
        let location = response.location.as_ref();
        let city = location.and_then(|l| l.city.as_deref()).unwrap_or(ONLINE);
        let state = location.and_then(|l| l.state.as_deref());

        event.title = first_of([response.event_name.as_deref(), response.name.as_deref()])
            .map(str::to_string)
            .unwrap_or_else(|| title_from_resource(resource));
        event.event_type = first_of([
            response.event_type.as_deref(),
            response.generic_type.as_deref(),
        ])
        .unwrap_or(DEFAULT_EVENT_TYPE)
        .to_string();
        event.location = match state {
            Some(state) => format!("{}, {}", city, state),
            None => city.to_string(),
        };
        event.coordinates = self.coordinates.resolve(city);
        event.description = response.description.clone().unwrap_or_default();
        event.attendees = response
            .registration
            .as_ref()
            .and_then(|r| r.capacity)
            .unwrap_or_else(|| self.rng.gen_range(ATTENDEES_RANGE));
        event.organizer = first_organizer(&response.organizers)
            .unwrap_or(DEFAULT_ORGANIZER)
            .to_string();
        event.price = format_price(
            response
                .registration
                .as_ref()
                .and_then(|r| r.price.as_ref())
                .and_then(|p| p.regular.as_deref()),
        );
        event.tags = first_of([
            non_empty_list(&response.tags),
            non_empty_list(&response.focus_areas),
        ])
        .unwrap_or_else(|| owned(&DEFAULT_TAGS));
        event.format = response
            .format
            .as_deref()
            .unwrap_or(PRESENTIAL_FORMAT)
            .to_string();
        event.venue = location
            .and_then(|l| l.venue.clone())
            .unwrap_or_default();
        event.state = state.unwrap_or_default().to_string();
    }

    fn fill_conference(&mut self, event: &mut Event, conference: &ConferenceResponse) {
        let location = conference.location.as_ref();
        let city = location.and_then(|l| l.city.as_deref()).unwrap_or(ONLINE);
        let country = location
            .and_then(|l| l.country.as_deref())
            .unwrap_or(DEFAULT_COUNTRY);

        event.title = first_of([conference.name.as_deref(), conference.event_name.as_deref()])
            .unwrap_or(DEFAULT_CONFERENCE_TITLE)
            .to_string();
        event.event_type = conference
            .event_type
            .as_deref()
            .unwrap_or(DEFAULT_CONFERENCE_TYPE)
            .to_string();
        event.location = if country == DEFAULT_COUNTRY {
            city.to_string()
        } else {
            format!("{}, {}", city, country)
        };
        event.coordinates = self.coordinates.resolve(city);
        event.description = conference.description.clone().unwrap_or_default();
        event.attendees = conference
            .expected_attendees
            .unwrap_or_else(|| self.rng.gen_range(ATTENDEES_RANGE));
        event.organizer = first_organizer(&conference.organizers)
            .unwrap_or(DEFAULT_CONFERENCE_ORGANIZER)
            .to_string();
        event.price = format_price(first_of([
            conference
                .ticket_price_range
                .as_ref()
                .and_then(|p| p.regular.as_deref()),
            conference
                .registration
                .as_ref()
                .and_then(|r| r.price.as_ref())
                .and_then(|p| p.regular.as_deref()),
        ]));
        event.tags = first_of([
            non_empty_list(&conference.topics),
            non_empty_list(&conference.focus_areas),
        ])
        .unwrap_or_else(|| owned(&DEFAULT_CONFERENCE_TAGS));
        event.venue = location
            .and_then(|l| l.venue.clone())
            .unwrap_or_default();
    }
}

/// `ai_summit_bix_2025.json` becomes `ai summit bix 2025`
fn title_from_resource(resource: &str) -> String {
    resource
        .strip_suffix(".json")
        .unwrap_or(resource)
        .replace('_', " ")
}

fn format_price(regular: Option<&str>) -> String {
    match regular {
        Some(regular) => format!("R$ {}", regular),
        None => FREE_PRICE.to_string(),
    }
}

fn first_organizer(organizers: &Option<Vec<ResponseOrganizer>>) -> Option<&str> {
    organizers
        .as_ref()?
        .iter()
        .map(ResponseOrganizer::name)
        .find(|name| !name.trim().is_empty())
}

fn non_empty_list(values: &Option<Vec<String>>) -> Option<Vec<String>> {
    values.clone().filter(|values| !values.is_empty())
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
