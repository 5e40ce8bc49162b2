use crate::config::model::{Config, DebugConfig, SourceConfig};
use crate::eventos::api::default_cutoff_date;
use chrono::NaiveDate;
use std::env;
use std::str::FromStr;

const DEFAULT_EVENTS_SOURCE: &str = "public/events";

pub fn load_config() -> Config {
    let source = SourceConfig::parse(
        &env::var("EVENTS_SOURCE").unwrap_or_else(|_| DEFAULT_EVENTS_SOURCE.to_string()),
    );
    let cutoff_date = load_date_config("EVENTS_CUTOFF_DATE").unwrap_or_else(default_cutoff_date);
    let seed = load_number_config("EVENTS_SEED");

    let debug_event_limit = load_number_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        source,
        cutoff_date,
        seed,
    }
}

fn load_date_config(name: &str) -> Option<NaiveDate> {
    match env::var(name) {
        Ok(value) => Some(NaiveDate::parse_from_str(&value, "%Y-%m-%d").unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a date as YYYY-MM-DD.", name)
        })),
        Err(_) => None,
    }
}

fn load_number_config<T: FromStr>(name: &str) -> Option<T> {
    match env::var(name) {
        Ok(value) => {
            Some(value.parse().unwrap_or_else(|_| {
                panic!("Invalid config '{}'. Expected an integer number.", name)
            }))
        }
        Err(_) => None,
    }
}
