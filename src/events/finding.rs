//! Attributes shared by every class in the Findings category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::events::{ActivityId, BaseEvent, CategoryUid, ClassUid, ConfidenceId, SeverityId};
use crate::objects::{Api, Cloud, FindingInformation, Metadata};
use crate::profiles::ProfileTarget;

/// Check that an optional percentage-style score is within `0..=100`.
pub(crate) fn check_score(field: &str, score: Option<i64>) -> Result<()> {
    match score {
        Some(s) if !(0..=100).contains(&s) => Err(Error::constraint(
            field,
            format!("{s} is outside 0..=100"),
        )),
        _ => Ok(()),
    }
}

/// A finding: the generic event of the Findings category.
///
/// `cloud` and `api` belong to the `cloud` profile; `start_time_dt` and
/// `end_time_dt` to the `datetime` profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(flatten)]
    pub base: BaseEvent,
    pub activity_id: ActivityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Api>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub category_uid: CategoryUid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub class_uid: ClassUid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_id: Option<ConfidenceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_dt: Option<DateTime<Utc>>,
    pub finding_info: FindingInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_dt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl Finding {
    /// A finding of `class_uid` with the category and class attributes filled.
    pub fn new(
        class_uid: ClassUid,
        activity_id: ActivityId,
        finding_info: FindingInformation,
        metadata: Metadata,
        severity_id: SeverityId,
        time: i64,
    ) -> Self {
        Self {
            base: BaseEvent::new(metadata, severity_id, time),
            activity_id,
            activity_name: None,
            api: None,
            category_name: Some(CategoryUid::Findings.caption().to_string()),
            category_uid: CategoryUid::Findings,
            class_name: Some(class_uid.caption().to_string()),
            class_uid,
            cloud: None,
            comment: None,
            confidence: None,
            confidence_id: None,
            confidence_score: None,
            end_time: None,
            end_time_dt: None,
            finding_info,
            start_time: None,
            start_time_dt: None,
            type_name: None,
        }
    }

    pub fn check_constraints(&self) -> Result<()> {
        self.base.check_constraints()?;
        check_score("confidence_score", self.confidence_score)
    }
}

impl ProfileTarget for Finding {
    fn has_field(&self, field: &str) -> bool {
        match field {
            "activity_id" | "category_uid" | "class_uid" | "finding_info" => true,
            "activity_name" => self.activity_name.is_some(),
            "api" => self.api.is_some(),
            "category_name" => self.category_name.is_some(),
            "class_name" => self.class_name.is_some(),
            "cloud" => self.cloud.is_some(),
            "comment" => self.comment.is_some(),
            "confidence" => self.confidence.is_some(),
            "confidence_id" => self.confidence_id.is_some(),
            "confidence_score" => self.confidence_score.is_some(),
            "end_time" => self.end_time.is_some(),
            "end_time_dt" => self.end_time_dt.is_some(),
            "start_time" => self.start_time.is_some(),
            "start_time_dt" => self.start_time_dt.is_some(),
            "type_name" => self.type_name.is_some(),
            _ => self.base.has_field(field),
        }
    }

    fn declared_profiles(&self) -> Vec<String> {
        self.base.declared_profiles()
    }
}
