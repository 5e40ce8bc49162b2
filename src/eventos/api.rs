use super::coordinates::CoordinateTable;
use super::dates::DateParser;
use super::dto::SourceRecord;
use super::model::Event;
use super::normalizer::EventNormalizer;
use super::resources::{DEFAULT_EVENT_FILES, TEMPLATE_RESOURCE};
use super::source::{EventSource, SourceError};
use chrono::NaiveDate;
use futures::future;
use rand::Rng;
use serde_json::Value;
use tracing::{debug, error, info, trace};

/// Events starting on or before this date are never shown
pub fn default_cutoff_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 8).unwrap_or(NaiveDate::MIN)
}

/// Builds the session's event collection from a fixed list of resources
pub struct EventLoader<S: EventSource> {
    source: S,
    resources: Vec<String>,
    cutoff: NaiveDate,
    dates: DateParser,
    coordinates: CoordinateTable,
}

impl<S: EventSource> EventLoader<S> {
    pub fn new(source: S, cutoff: NaiveDate) -> Self {
        Self {
            source,
            resources: DEFAULT_EVENT_FILES.iter().map(|r| r.to_string()).collect(),
            cutoff,
            dates: DateParser::today(),
            coordinates: CoordinateTable::default(),
        }
    }

    pub fn with_resources<I, R>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_parser(mut self, dates: DateParser) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_coordinates(mut self, coordinates: CoordinateTable) -> Self {
        self.coordinates = coordinates;
        self
    }

    /**
    Returns events in ascending start date order.

    A resource that cannot be fetched or parsed is logged and skipped, so the
    result is only ever smaller, never an error.
    */
    #[tracing::instrument(skip(self, rng), fields(cutoff = %self.cutoff, resources = self.resources.len()))]
    pub async fn load<R: Rng>(&self, rng: R) -> Vec<Event> {
        let resources: Vec<&str> = self
            .resources
            .iter()
            .map(String::as_str)
            .filter(|&resource| {
                if resource == TEMPLATE_RESOURCE {
                    debug!("Skipping template resource");
                    return false;
                }
                true
            })
            .collect();

        info!("Fetching {} resources", resources.len());

        let documents: Vec<Result<Value, SourceError>> =
            future::join_all(resources.iter().map(|resource| self.source.fetch(resource))).await;

        let mut normalizer = EventNormalizer::new(self.dates, self.coordinates, rng);
        let mut events = Vec::new();

        // Folded in resource order so that ids don't depend on fetch timing
        for (resource, document) in resources.into_iter().zip(documents) {
            let records = match document {
                Ok(document) => SourceRecord::from_resource(resource, document)
                    .map_err(SourceError::InvalidJson),
                Err(err) => Err(err),
            };

            let records = match records {
                Ok(records) => records,
                Err(err) => {
                    error!("Error loading {}: {}", resource, err);
                    continue;
                }
            };

            for record in records.iter() {
                let start = normalizer.dates().parse(record.start_date());

                if start <= self.cutoff {
                    trace!("Discarding event from {} starting at {}", resource, start);
                    continue;
                }

                events.push(normalizer.normalize(record, start, events.len()));
            }
        }

        events.sort_by_key(|event| event.start_date);

        info!("Loaded {} events", events.len());

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventos::coordinates::Coordinates;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned documents; anything else is a 404
    struct InMemorySource {
        documents: HashMap<&'static str, Value>,
        requested: Mutex<Vec<String>>,
    }

    impl InMemorySource {
        fn new(documents: Vec<(&'static str, Value)>) -> Self {
            Self {
                documents: documents.into_iter().collect(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EventSource for InMemorySource {
        async fn fetch(&self, resource: &str) -> Result<Value, SourceError> {
            self.requested.lock().unwrap().push(resource.to_string());

            self.documents
                .get(resource)
                .cloned()
                .ok_or_else(|| SourceError::UnexpectedStatus {
                    resource: resource.to_string(),
                    status: StatusCode::NOT_FOUND,
                })
        }
    }

    fn loader(documents: Vec<(&'static str, Value)>) -> EventLoader<InMemorySource> {
        let resources: Vec<&str> = documents.iter().map(|(name, _)| *name).collect();

        EventLoader::new(InMemorySource::new(documents), default_cutoff_date())
            .with_resources(resources)
            .with_date_parser(DateParser::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()))
    }

    #[test_log::test(tokio::test)]
    async fn should_only_keep_events_after_cutoff() {
        let loader = loader(vec![
            ("old.json", json!({ "name": "Old", "date": "2025-08-01" })),
            ("on_cutoff.json", json!({ "name": "On cutoff", "date": "2025-08-08" })),
            ("new.json", json!({ "name": "New", "date": "2025-08-09" })),
        ]);

        let events = loader.load(StdRng::seed_from_u64(1)).await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "New");
        assert_eq!(events[0].id, "event-1");
    }

    #[test_log::test(tokio::test)]
    async fn should_sort_by_start_date_regardless_of_resource_order() {
        let loader = loader(vec![
            ("c.json", json!({ "name": "C", "date": "2025-12-01" })),
            ("a.json", json!({ "name": "A", "date": "10 de setembro de 2025" })),
            ("b.json", json!({ "name": "B", "date": { "start": "2025-10-01" } })),
        ]);

        let events = loader.load(StdRng::seed_from_u64(1)).await;
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();

        assert_eq!(titles, vec!["A", "B", "C"]);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["event-2", "event-3", "event-1"]);
    }

    #[test_log::test(tokio::test)]
    async fn failing_resource_should_not_affect_the_others() {
        let mut loader = loader(vec![
            ("a.json", json!({ "date": "2025-09-01" })),
            ("b.json", json!({ "date": "2025-09-02" })),
            ("c.json", json!({ "date": "2025-09-03" })),
            ("broken.json", json!("not an event")),
        ]);
        loader.resources.push("missing.json".to_string());

        let events = loader.load(StdRng::seed_from_u64(1)).await;

        assert_eq!(events.len(), 3);
    }

    #[test_log::test(tokio::test)]
    async fn template_resource_should_never_be_fetched() {
        let loader = loader(vec![
            (TEMPLATE_RESOURCE, json!({ "name": "Template", "date": "2099-01-01" })),
            ("a.json", json!({ "date": "2025-09-01" })),
        ]);

        let events = loader.load(StdRng::seed_from_u64(1)).await;

        assert_eq!(events.len(), 1);
        assert_eq!(
            *loader.source.requested.lock().unwrap(),
            vec!["a.json".to_string()]
        );
    }

    #[test_log::test(tokio::test)]
    async fn aggregated_conferences_should_be_filtered_one_by_one() {
        let loader = loader(vec![
            ("x.json", json!({ "date": "2025-09-01" })),
            (
                "conferences.json",
                json!({
                    "ai_conferences_2025": [
                        { "name": "Past", "dates": { "start": "2025-07-13" } },
                        { "name": "ICML", "dates": { "start": "2025-11-13" } }
                    ]
                }),
            ),
        ]);

        let events = loader.load(StdRng::seed_from_u64(1)).await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].title, "ICML");
        assert_eq!(events[1].id, "conf-2");
    }

    #[test_log::test(tokio::test)]
    async fn ids_should_be_unique() {
        let loader = loader(vec![
            ("a.json", json!({ "date": "2025-09-01" })),
            ("b.json", json!({ "date": "2025-09-01" })),
            (
                "conferences.json",
                json!({ "ai_conferences_2025": [{ "date": "2025-09-01" }, { "date": "2025-09-01" }] }),
            ),
        ]);

        let events = loader.load(StdRng::seed_from_u64(1)).await;
        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();

        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 4);
    }

    #[test_log::test(tokio::test)]
    async fn same_seed_should_load_identical_collections() {
        let documents = || {
            vec![
                ("a.json", json!({ "date": "2025-09-01" })),
                ("b.json", json!({ "date": "2025-10-01", "registration": { "capacity": 30 } })),
            ]
        };

        let first = loader(documents()).load(StdRng::seed_from_u64(9)).await;
        let second = loader(documents()).load(StdRng::seed_from_u64(9)).await;

        assert_eq!(first, second);
    }

    #[test_log::test(tokio::test)]
    async fn should_resolve_coordinates_with_given_table() {
        static CITIES: [(&str, Coordinates); 1] = [("Lisboa", Coordinates::new(38.7223, -9.1393))];
        let online = Coordinates::new(0.0, 0.0);
        let loader = loader(vec![
            ("a.json", json!({ "date": "2025-09-01", "location": { "city": "Lisboa" } })),
            ("b.json", json!({ "date": "2025-09-02", "location": { "city": "São Paulo" } })),
        ])
        .with_coordinates(CoordinateTable::new(&CITIES, online));

        let events = loader.load(StdRng::seed_from_u64(1)).await;

        assert_eq!(events[0].coordinates, Coordinates::new(38.7223, -9.1393));
        assert_eq!(events[1].coordinates, online);
    }

    #[test_log::test(tokio::test)]
    async fn no_resources_should_give_empty_collection() {
        let loader = loader(vec![]);

        assert!(loader.load(StdRng::seed_from_u64(1)).await.is_empty());
    }
}
