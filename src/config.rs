//! Site Configuration
//!
//! Timings and the clock's time-zone choices. Defaults match the published
//! site; a JSON override can be baked in at build time through the
//! `CONCEPTOS_CONFIG` environment variable.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Build-time JSON override, if any
const EMBEDDED_CONFIG: Option<&str> = option_env!("CONCEPTOS_CONFIG");

/// One entry of the clock's zone selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneOption {
    pub label: String,
    /// IANA identifier; `None` means the browser's local zone
    #[serde(default)]
    pub zone: Option<String>,
}

impl ZoneOption {
    fn new(label: &str, zone: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            zone: zone.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// How long the lifecycle page pretends to load
    pub loading_delay_ms: u32,
    /// Clock refresh period on the hooks page
    pub clock_tick_ms: u32,
    pub zones: Vec<ZoneOption>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 4000,
            clock_tick_ms: 1000,
            zones: vec![
                ZoneOption::new("Local", None),
                ZoneOption::new("UTC", Some("UTC")),
                ZoneOption::new("New York (EST)", Some("America/New_York")),
                ZoneOption::new("Tokyo (JST)", Some("Asia/Tokyo")),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration embedded at build time, or the defaults
    pub fn load() -> Self {
        match EMBEDDED_CONFIG {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.loading_delay_ms, 4000);
        assert_eq!(config.clock_tick_ms, 1000);
        assert_eq!(config.zones.len(), 4);
        assert_eq!(config.zones[0].zone, None);
        assert_eq!(config.zones[3].zone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "loading_delay_ms": 250 }"#).unwrap();
        assert_eq!(config.loading_delay_ms, 250);
        assert_eq!(config.clock_tick_ms, 1000);
        assert_eq!(config.zones, SiteConfig::default().zones);
    }

    #[test]
    fn test_zone_override() {
        let config = SiteConfig::from_json(
            r#"{ "zones": [ { "label": "Local" }, { "label": "Madrid", "zone": "Europe/Madrid" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.zones.len(), 2);
        assert_eq!(config.zones[0].zone, None);
        assert_eq!(config.zones[1].zone.as_deref(), Some("Europe/Madrid"));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
