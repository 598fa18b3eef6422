//! The attributes every OCSF event carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::events::{SeverityId, StatusId};
use crate::objects::{Enrichment, Metadata, Observable};
use crate::profiles::ProfileTarget;

/// Bounds of `timezone_offset`, in minutes from UTC.
const TIMEZONE_OFFSET_RANGE: std::ops::RangeInclusive<i64> = -1080..=1080;

/// The generic OCSF event. Finding classes flatten it into their own JSON
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observables: Option<Vec<Observable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<String>,
    /// Size of `raw_data` in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub severity_id: SeverityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<StatusId>,
    /// Event time, milliseconds since the Unix epoch.
    pub time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_dt: Option<DateTime<Utc>>,
    /// Minutes from UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<i64>,
    /// Source attributes that were not mapped into the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmapped: Option<Value>,
}

impl BaseEvent {
    pub fn new(metadata: Metadata, severity_id: SeverityId, time: i64) -> Self {
        Self {
            enrichments: None,
            message: None,
            metadata,
            observables: None,
            raw_data: None,
            raw_data_size: None,
            severity: None,
            severity_id,
            status: None,
            status_code: None,
            status_detail: None,
            status_id: None,
            time,
            time_dt: None,
            timezone_offset: None,
            unmapped: None,
        }
    }

    /// Set `time` and `time_dt` from the same instant.
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.time = time.timestamp_millis();
        self.time_dt = Some(time);
        self
    }

    /// Check the range constraints on the base attributes.
    pub fn check_constraints(&self) -> Result<()> {
        if let Some(offset) = self.timezone_offset {
            if !TIMEZONE_OFFSET_RANGE.contains(&offset) {
                return Err(Error::constraint(
                    "timezone_offset",
                    format!("{offset} is outside -1080..=1080 minutes"),
                ));
            }
        }
        if let Some(size) = self.raw_data_size {
            if size < 0 {
                return Err(Error::constraint(
                    "raw_data_size",
                    format!("{size} is negative"),
                ));
            }
        }
        Ok(())
    }
}

impl ProfileTarget for BaseEvent {
    fn has_field(&self, field: &str) -> bool {
        match field {
            "metadata" | "severity_id" | "time" => true,
            "enrichments" => self.enrichments.is_some(),
            "message" => self.message.is_some(),
            "observables" => self.observables.is_some(),
            "raw_data" => self.raw_data.is_some(),
            "raw_data_size" => self.raw_data_size.is_some(),
            "severity" => self.severity.is_some(),
            "status" => self.status.is_some(),
            "status_code" => self.status_code.is_some(),
            "status_detail" => self.status_detail.is_some(),
            "status_id" => self.status_id.is_some(),
            "time_dt" => self.time_dt.is_some(),
            "timezone_offset" => self.timezone_offset.is_some(),
            "unmapped" => self.unmapped.is_some(),
            _ => false,
        }
    }

    fn declared_profiles(&self) -> Vec<String> {
        self.metadata.profiles.clone().unwrap_or_default()
    }
}
