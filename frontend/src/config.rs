use shared::constants::{WHEEL_CONFIG_STORAGE_KEY, WHEEL_SEGMENTS_STORAGE_KEY};
use shared::shared_wheel_game::WheelConfig;
use web_sys::{window, Storage};

pub const DEFAULT_SEGMENTS: [&str; 6] = [
    "Prize 1", "Prize 2", "Prize 3", "Prize 4", "Prize 5", "Prize 6",
];

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn stored(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Wheel tunables, optionally overridden by a JSON document in local storage.
pub fn get_wheel_config() -> WheelConfig {
    parse_wheel_config(stored(WHEEL_CONFIG_STORAGE_KEY).as_deref())
}

/// Segment labels, optionally overridden by a JSON array in local storage.
///
/// An override that parses but is empty is passed through on purpose: the
/// engine rejects it and the page shows the configuration error.
pub fn get_segment_labels() -> Vec<String> {
    parse_segment_labels(stored(WHEEL_SEGMENTS_STORAGE_KEY).as_deref())
}

pub fn parse_wheel_config(json: Option<&str>) -> WheelConfig {
    match json.map(WheelConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("Ignoring stored wheel config: {}", e);
            WheelConfig::default()
        }
        None => WheelConfig::default(),
    }
}

pub fn parse_segment_labels(json: Option<&str>) -> Vec<String> {
    let parsed = json.and_then(|json| match serde_json::from_str::<Vec<String>>(json) {
        Ok(labels) => Some(labels),
        Err(e) => {
            log::warn!("Ignoring stored wheel segments: {}", e);
            None
        }
    });

    parsed.unwrap_or_else(|| DEFAULT_SEGMENTS.iter().map(|s| s.to_string()).collect())
}
