//! Event metadata: producing product, loggers and declared profiles.

use serde::{Deserialize, Serialize};

use crate::OCSF_VERSION;
use crate::objects::Device;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub uid: String,
    pub version: String,
}

/// The product that reported the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
    /// Two letter ISO 639-1 language code, e.g. `en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpe_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub vendor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, vendor_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor_name: vendor_name.into(),
            ..Default::default()
        }
    }
}

/// A schema extension used by the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaExtension {
    pub name: String,
    pub uid: String,
    pub version: String,
}

/// A logger that handled the event between the source and the consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub log_name: String,
    pub log_provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_time: Option<i64>,
    pub name: String,
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmit_time: Option<i64>,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn default_version() -> String {
    OCSF_VERSION.to_string()
}

/// Metadata associated with every event.
///
/// `profiles` lists the OCSF profiles the producer claims the event
/// satisfies; [`validate_profiles`](crate::profiles::validate_profiles) reads
/// it when no explicit profile list is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loggers: Option<Vec<Logger>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<i64>,
    /// The original event time as reported by the source, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_time: Option<i64>,
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<SchemaExtension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_uid: Option<String>,
    /// OCSF schema version the event conforms to.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Metadata {
    /// Metadata for `product` at the crate's OCSF version.
    pub fn new(product: Product) -> Self {
        Self {
            correlation_uid: None,
            event_code: None,
            uid: None,
            labels: None,
            log_level: None,
            log_name: None,
            log_provider: None,
            log_version: None,
            logged_time: None,
            loggers: None,
            modified_time: None,
            original_time: None,
            processed_time: None,
            product,
            profiles: None,
            extensions: None,
            sequence: None,
            tenant_uid: None,
            version: default_version(),
        }
    }

    /// Declare the profiles this event claims to satisfy.
    pub fn with_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profiles = Some(profiles.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_to_crate_ocsf_version() {
        let json = r#"{"product": {"name": "Prowler", "vendor_name": "Prowler"}}"#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.version, OCSF_VERSION);
        assert!(metadata.profiles.is_none());
    }

    #[test]
    fn with_profiles_sets_declared_list() {
        let metadata = Metadata::new(Product::new("Test", "Test")).with_profiles(["cloud", "datetime"]);
        assert_eq!(
            metadata.profiles,
            Some(vec!["cloud".to_string(), "datetime".to_string()])
        );
    }
}
