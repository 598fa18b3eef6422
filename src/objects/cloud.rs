//! Cloud environment and API call objects.
//!
//! These are the attributes contributed by the OCSF `cloud` profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::objects::{Account, Container, Group, Organization};

/// Information about a cloud account such as AWS Account ID, regions, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,

    /// The availability zone in the cloud region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Organization>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_uid: Option<String>,

    /// The unique name of the cloud services provider, such as AWS, MS Azure, GCP.
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Cloud {
    /// A cloud context with only the provider set.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// The service an API call belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub name: String,
    pub uid: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestElements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<Container>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
    pub uid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseElements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<Container>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

/// Details of an API interaction: request, response, operation and service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Api {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestElements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseElements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,

    /// The verb or operation of the request, e.g. `GET` or `CreateBucket`.
    pub operation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
