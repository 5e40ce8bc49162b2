use super::coordinates::Coordinates;
use chrono::NaiveDate;
use serde::Serialize;

pub const FREE_PRICE: &str = "Gratuito";
pub const PRESENTIAL_FORMAT: &str = "presential";

/// An event as shown to the user, whatever shape its source file had
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub start_date: NaiveDate,
    /// Display form of `start_date`
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub location: String,
    pub image: String,
    pub description: String,
    pub likes: u32,
    pub attendees: u32,
    pub is_weekend: bool,
    pub duration: u32,
    pub coordinates: Coordinates,
    pub organizer: String,
    pub price: String,
    pub tags: Vec<String>,
    pub format: String,
    pub venue: String,
    pub state: String,
}

impl Event {
    pub fn is_free(&self) -> bool {
        self.price == FREE_PRICE
    }
}

/// How the source file was laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum SourceShape {
    /// One of the records listed inside the aggregated conferences file
    #[strum(serialize = "conf")]
    Conference,
    /// A file describing a single event
    #[strum(serialize = "event")]
    Single,
}

impl SourceShape {
    pub fn event_id(&self, index: usize) -> String {
        let prefix: &'static str = self.into();

        format!("{}-{}", prefix, index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn ids_should_be_prefixed_by_shape_and_start_at_one() {
        assert_eq!(SourceShape::Conference.event_id(0), "conf-1");
        assert_eq!(SourceShape::Single.event_id(4), "event-5");
    }
}
