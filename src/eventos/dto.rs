use super::model::SourceShape;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use tracing::warn;

pub const CONFERENCES_RESOURCE: &str = "conferences.json";
pub const CONFERENCES_KEY: &str = "ai_conferences_2025";

// Note: every field is lenient. A value with an unexpected type is treated
// as missing so that the fallback chains apply instead of failing the file.

/// A file describing a single event
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventResponse {
    #[serde(deserialize_with = "deserialize_str")]
    pub event_name: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub event_type: Option<String>,
    #[serde(rename = "type", deserialize_with = "deserialize_str")]
    pub generic_type: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub date: Option<ResponseDate>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub location: Option<ResponseLocation>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub registration: Option<ResponseRegistration>,
    #[serde(deserialize_with = "deserialize_list")]
    pub organizers: Option<Vec<ResponseOrganizer>>,
    #[serde(deserialize_with = "deserialize_list")]
    pub tags: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_list")]
    pub focus_areas: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_str")]
    pub format: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub description: Option<String>,
}

/// One record of the aggregated conferences file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConferenceResponse {
    #[serde(deserialize_with = "deserialize_str")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub event_name: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub dates: Option<ResponseDateRange>,
    #[serde(deserialize_with = "deserialize_str")]
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub location: Option<ResponseLocation>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub registration: Option<ResponseRegistration>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub ticket_price_range: Option<ResponsePrice>,
    #[serde(deserialize_with = "deserialize_u32")]
    pub expected_attendees: Option<u32>,
    #[serde(deserialize_with = "deserialize_list")]
    pub organizers: Option<Vec<ResponseOrganizer>>,
    #[serde(deserialize_with = "deserialize_list")]
    pub topics: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_list")]
    pub focus_areas: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_str")]
    pub description: Option<String>,
}

/// Either `"2025-09-01"` or `{"start": ..., "end": ...}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResponseDate {
    Single(String),
    Range(ResponseDateRange),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseDateRange {
    #[serde(deserialize_with = "deserialize_str")]
    pub start: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub end: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseLocation {
    #[serde(deserialize_with = "deserialize_str")]
    pub city: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub state: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub country: Option<String>,
    #[serde(deserialize_with = "deserialize_str")]
    pub venue: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseRegistration {
    #[serde(deserialize_with = "deserialize_u32")]
    pub capacity: Option<u32>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub price: Option<ResponsePrice>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePrice {
    #[serde(deserialize_with = "deserialize_price")]
    pub regular: Option<String>,
}

/// Organizers are listed either by name or as objects with a name
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResponseOrganizer {
    Name(String),
    Detailed { name: String },
}

impl ResponseOrganizer {
    pub fn name(&self) -> &str {
        match self {
            ResponseOrganizer::Name(name) => name.as_str(),
            ResponseOrganizer::Detailed { name } => name.as_str(),
        }
    }
}

impl ResponseDate {
    pub fn start(&self) -> Option<&str> {
        match self {
            ResponseDate::Single(date) => Some(date.as_str()),
            ResponseDate::Range(range) => range.start.as_deref(),
        }
    }

    pub fn end(&self) -> Option<&str> {
        match self {
            ResponseDate::Single(_) => None,
            ResponseDate::Range(range) => range.end.as_deref(),
        }
    }
}

/// A raw record paired with the resource it came from
#[derive(Debug)]
pub enum SourceRecord {
    Conference(ConferenceResponse),
    Single {
        resource: String,
        event: EventResponse,
    },
}

#[derive(Debug, Deserialize)]
struct ConferencesResponse {
    #[serde(rename = "ai_conferences_2025")]
    conferences: Vec<Value>,
}

impl SourceRecord {
    /// Splits a fetched resource into its records.
    ///
    /// Only the aggregated conferences file holding the conferences list is
    /// expanded; any other document is read as a single event.
    pub fn from_resource(resource: &str, document: Value) -> Result<Vec<Self>, serde_json::Error> {
        if resource == CONFERENCES_RESOURCE && document.get(CONFERENCES_KEY).is_some() {
            let response: ConferencesResponse = serde_json::from_value(document)?;

            return Ok(response
                .conferences
                .into_iter()
                .enumerate()
                .filter_map(|(position, conference)| {
                    match serde_json::from_value::<ConferenceResponse>(conference) {
                        Ok(conference) => Some(SourceRecord::Conference(conference)),
                        Err(err) => {
                            warn!("Skipping conference #{} of {}: {}", position, resource, err);
                            None
                        }
                    }
                })
                .collect());
        }

        if !document.is_object() {
            return Err(de::Error::custom(format!(
                "expected an event object, found {}",
                document
            )));
        }

        let event = serde_json::from_value(document)?;

        Ok(vec![SourceRecord::Single {
            resource: resource.to_string(),
            event,
        }])
    }

    pub fn shape(&self) -> SourceShape {
        match self {
            SourceRecord::Conference(_) => SourceShape::Conference,
            SourceRecord::Single { .. } => SourceShape::Single,
        }
    }

    /// Raw start date, empty when the record has none
    pub fn start_date(&self) -> &str {
        let start = match self {
            SourceRecord::Conference(conference) => first_of([
                conference.dates.as_ref().and_then(|dates| dates.start.as_deref()),
                conference.date.as_deref(),
            ]),
            SourceRecord::Single { event, .. } => {
                event.date.as_ref().and_then(ResponseDate::start)
            }
        };

        start.unwrap_or_default()
    }

    pub fn end_date(&self) -> Option<&str> {
        match self {
            SourceRecord::Conference(conference) => {
                conference.dates.as_ref().and_then(|dates| dates.end.as_deref())
            }
            SourceRecord::Single { event, .. } => event.date.as_ref().and_then(ResponseDate::end),
        }
    }
}

/// First candidate present, in the order given
pub fn first_of<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}

fn deserialize_lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;

    Ok(T::deserialize(value).ok())
}

/// A single value or a list. Elements that don't fit are dropped one by one,
/// the field is only missing when none fit.
fn deserialize_list<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = match SingleOrVec::<Value>::deserialize(d)? {
        SingleOrVec::Single(value) => vec![value],
        SingleOrVec::Vec(values) => values,
    };

    let items: Vec<T> = values
        .into_iter()
        .filter_map(|value| T::deserialize(value).ok())
        .collect();

    Ok(Some(items).filter(|items| !items.is_empty()))
}

fn deserialize_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A numeric zero means no price was given
fn deserialize_price<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Counts of zero are treated as missing
fn deserialize_u32<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count: Option<u32> = match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    Ok(count.filter(|&count| count > 0))
}
