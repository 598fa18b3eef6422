//! Observables, reputation scores and enrichments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::macros::ocsf_enum;

ocsf_enum! {
    #[derive(Default)]
    pub enum ReputationScoreId {
        #[default]
        Unknown = 0 => "Unknown",
        VerySafe = 1 => "Very Safe",
        Safe = 2 => "Safe",
        ProbablySafe = 3 => "Probably Safe",
        LeansSafe = 4 => "Leans Safe",
        MayNotBeSafe = 5 => "May not be Safe",
        ExerciseCaution = 6 => "Exercise Caution",
        SuspiciousRisky = 7 => "Suspicious/Risky",
        PossiblyMalicious = 8 => "Possibly Malicious",
        ProbablyMalicious = 9 => "Probably Malicious",
        Malicious = 10 => "Malicious",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The observable value type.
    #[derive(Default)]
    pub enum ObservableTypeId {
        #[default]
        Unknown = 0 => "Unknown",
        Hostname = 1 => "Hostname",
        IpAddress = 2 => "IP Address",
        MacAddress = 3 => "MAC Address",
        UserName = 4 => "User Name",
        EmailAddress = 5 => "Email Address",
        UrlString = 6 => "URL String",
        FileName = 7 => "File Name",
        Hash = 8 => "Hash",
        ProcessName = 9 => "Process Name",
        ResourceUid = 10 => "Resource UID",
        Endpoint = 20 => "Endpoint",
        User = 21 => "User",
        Email = 22 => "Email",
        UniformResourceLocator = 23 => "Uniform Resource Locator",
        File = 24 => "File",
        Process = 25 => "Process",
        GeoLocation = 26 => "Geo Location",
        Container = 27 => "Container",
        RegistryKey = 28 => "Registry Key",
        RegistryValue = 29 => "Registry Value",
        Fingerprint = 30 => "Fingerprint",
        Other = 99 => "Other",
    }
}

/// Original and normalized reputation scores for an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    /// The score as reported by the source.
    pub base_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    pub score_id: ReputationScoreId,
}

/// A pivot element pointing at an attribute of the event, e.g. `file.name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observable {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<Reputation>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub type_id: ObservableTypeId,
    /// Unset when `name` refers to an object rather than a scalar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Observable {
    pub fn new(name: impl Into<String>, type_id: ObservableTypeId) -> Self {
        Self {
            name: name.into(),
            r#type: Some(type_id.caption().to_string()),
            type_id,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Additional context attached to one attribute of the event, such as
/// geolocation data for an IP address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    pub data: Map<String, Value>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn observable_with_reputation() {
        let observable = Observable {
            reputation: Some(Reputation {
                base_score: 87.5,
                provider: Some("VirusTotal".to_string()),
                score_id: ReputationScoreId::ProbablyMalicious,
                ..Default::default()
            }),
            ..Observable::new("src_endpoint.ip", ObservableTypeId::IpAddress).with_value("203.0.113.7")
        };
        let json = serde_json::to_value(&observable).unwrap();
        assert_eq!(json["type"], "IP Address");
        assert_eq!(json["type_id"], 2);
        assert_eq!(json["reputation"]["score_id"], 9);
        assert!(json["reputation"].get("score").is_none());
    }

    #[test]
    fn enrichment_data_is_free_form() {
        let enrichment: Enrichment = serde_json::from_value(json!({
            "data": {"country": "NL", "asn": 1136},
            "name": "src_endpoint.ip",
            "value": "203.0.113.7"
        }))
        .unwrap();
        assert_eq!(enrichment.data["asn"], 1136);
        assert!(enrichment.provider.is_none());
    }

    #[test]
    fn observable_type_gap_rejected() {
        assert!(ObservableTypeId::try_from(11).is_err());
        assert_eq!(ObservableTypeId::try_from(30), Ok(ObservableTypeId::Fingerprint));
    }
}
