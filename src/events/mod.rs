//! OCSF finding events.
//!
//! Each class flattens its parent into the same JSON object: a
//! [`DetectionFinding`] holds a [`Finding`], which holds a [`BaseEvent`], and
//! all three serialize as one flat OCSF document.

mod application_security_posture_finding;
mod base_event;
mod compliance_finding;
mod detection_finding;
mod enums;
mod finding;

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

pub use application_security_posture_finding::ApplicationSecurityPostureFinding;
pub use base_event::BaseEvent;
pub use compliance_finding::ComplianceFinding;
pub use detection_finding::DetectionFinding;
pub use enums::{
    ActionId, ActivityId, ApplicationSecurityPostureFindingTypeId, CategoryUid, ClassUid,
    ComplianceFindingTypeId, ConfidenceId, DetectionFindingTypeId, DispositionId, ImpactId,
    PriorityId, RiskLevelId, SeverityId, StatusId, VerdictId,
};
pub use finding::Finding;

use crate::error::{Error, Result};
use crate::profiles::ProfileTarget;

macro_rules! json_helpers {
    ($($event:ty),+ $(,)?) => {
        $(
            impl $event {
                /// Parse a JSON document and check its range constraints.
                pub fn from_json(json: &str) -> Result<Self> {
                    let event: Self = serde_json::from_str(json)?;
                    event.check_constraints()?;
                    Ok(event)
                }

                /// Compact OCSF JSON with unset attributes omitted.
                pub fn to_json(&self) -> Result<String> {
                    Ok(serde_json::to_string(self)?)
                }

                pub fn to_json_pretty(&self) -> Result<String> {
                    Ok(serde_json::to_string_pretty(self)?)
                }
            }
        )+
    };
}

json_helpers!(
    BaseEvent,
    Finding,
    DetectionFinding,
    ComplianceFinding,
    ApplicationSecurityPostureFinding,
);

/// A finding of any class this crate models, selected by `class_uid`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyFinding {
    Compliance(ComplianceFinding),
    Detection(DetectionFinding),
    ApplicationSecurityPosture(ApplicationSecurityPostureFinding),
}

impl AnyFinding {
    /// Deserialize `value` into the class named by its `class_uid` and check
    /// its range constraints.
    pub fn from_value(value: Value) -> Result<Self> {
        let class_uid = value.get("class_uid").and_then(Value::as_i64).unwrap_or(0);
        let finding = match ClassUid::try_from(class_uid).map_err(Error::UnknownClass)? {
            ClassUid::ComplianceFinding => AnyFinding::Compliance(serde_json::from_value(value)?),
            ClassUid::DetectionFinding => AnyFinding::Detection(serde_json::from_value(value)?),
            ClassUid::ApplicationSecurityPostureFinding => {
                AnyFinding::ApplicationSecurityPosture(serde_json::from_value(value)?)
            }
        };
        finding.check_constraints()?;
        tracing::debug!(class_uid, "parsed finding");
        Ok(finding)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn class_uid(&self) -> ClassUid {
        self.finding().class_uid
    }

    /// The category-level attributes shared by every class.
    pub fn finding(&self) -> &Finding {
        match self {
            AnyFinding::Compliance(f) => &f.finding,
            AnyFinding::Detection(f) => &f.finding,
            AnyFinding::ApplicationSecurityPosture(f) => &f.finding,
        }
    }

    pub fn check_constraints(&self) -> Result<()> {
        match self {
            AnyFinding::Compliance(f) => f.check_constraints(),
            AnyFinding::Detection(f) => f.check_constraints(),
            AnyFinding::ApplicationSecurityPosture(f) => f.check_constraints(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ProfileTarget for AnyFinding {
    fn has_field(&self, field: &str) -> bool {
        match self {
            AnyFinding::Compliance(f) => f.has_field(field),
            AnyFinding::Detection(f) => f.has_field(field),
            AnyFinding::ApplicationSecurityPosture(f) => f.has_field(field),
        }
    }

    fn declared_profiles(&self) -> Vec<String> {
        self.finding().declared_profiles()
    }
}

/// Read a finding document from `path`.
pub fn load_finding(path: &Path) -> Result<AnyFinding> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded finding document");
    AnyFinding::from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{FindingInformation, Metadata, Product};

    fn detection_json() -> String {
        DetectionFinding::new(
            ActivityId::Create,
            FindingInformation::new("Port scan", "det-7"),
            Metadata::new(Product::new("Suricata", "OISF")),
            SeverityId::Low,
            1_700_000_000_000,
        )
        .to_json()
        .unwrap()
    }

    #[test]
    fn any_finding_dispatches_on_class_uid() {
        let finding = AnyFinding::from_json(&detection_json()).unwrap();
        assert!(matches!(finding, AnyFinding::Detection(_)));
        assert_eq!(finding.class_uid(), ClassUid::DetectionFinding);
    }

    #[test]
    fn unknown_class_rejected() {
        let err = AnyFinding::from_json(r#"{"class_uid": 1001}"#).unwrap_err();
        assert!(matches!(err, Error::UnknownClass(1001)));
        let err = AnyFinding::from_json(r#"{"message": "no class"}"#).unwrap_err();
        assert!(matches!(err, Error::UnknownClass(0)));
    }

    #[test]
    fn from_json_applies_constraints() {
        let mut value: Value = serde_json::from_str(&detection_json()).unwrap();
        value["risk_score"] = Value::from(101);
        let err = DetectionFinding::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Constraint { .. }));
        let err = AnyFinding::from_value(value).unwrap_err();
        assert!(matches!(err, Error::Constraint { .. }));
    }

    #[test]
    fn to_json_round_trip_preserves_structure() {
        let json = detection_json();
        let parsed = DetectionFinding::from_json(&json).unwrap();
        assert_eq!(parsed.to_json().unwrap(), json);
    }
}
