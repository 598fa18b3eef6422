//! Compliance Finding (class 2003): results of evaluating resources against
//! a compliance standard.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::{ActivityId, ClassUid, ComplianceFindingTypeId, Finding, SeverityId};
use crate::objects::{
    Compliance, EvidenceArtifacts, FindingInformation, Metadata, Remediation, ResourceDetails,
};
use crate::profiles::ProfileTarget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    #[serde(flatten)]
    pub finding: Finding,
    pub compliance: Compliance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidences: Option<Vec<EvidenceArtifacts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceDetails>>,
    pub type_uid: ComplianceFindingTypeId,
}

impl ComplianceFinding {
    pub fn new(
        activity_id: ActivityId,
        compliance: Compliance,
        finding_info: FindingInformation,
        metadata: Metadata,
        severity_id: SeverityId,
        time: i64,
    ) -> Self {
        let type_uid = ComplianceFindingTypeId::from_activity(activity_id);
        let mut finding = Finding::new(
            ClassUid::ComplianceFinding,
            activity_id,
            finding_info,
            metadata,
            severity_id,
            time,
        );
        finding.type_name = Some(type_uid.caption().to_string());
        Self {
            finding,
            compliance,
            evidences: None,
            remediation: None,
            resources: None,
            type_uid,
        }
    }

    pub fn check_constraints(&self) -> Result<()> {
        self.finding.check_constraints()
    }
}

impl ProfileTarget for ComplianceFinding {
    fn has_field(&self, field: &str) -> bool {
        match field {
            "compliance" | "type_uid" => true,
            "evidences" => self.evidences.is_some(),
            "remediation" => self.remediation.is_some(),
            "resources" => self.resources.is_some(),
            _ => self.finding.has_field(field),
        }
    }

    fn declared_profiles(&self) -> Vec<String> {
        self.finding.declared_profiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Check, ComplianceStatusId, Product};

    #[test]
    fn compliance_is_required_on_the_wire() {
        let finding = ComplianceFinding::new(
            ActivityId::Create,
            Compliance {
                standards: Some(vec!["CIS-1.5".to_string()]),
                status_id: Some(ComplianceStatusId::Fail),
                checks: Some(vec![Check {
                    uid: Some("1.1.1".to_string()),
                    ..Default::default()
                }]),
                ..Default::default()
            },
            FindingInformation::new("Root account has MFA disabled", "cf-1"),
            Metadata::new(Product::new("Prowler", "Prowler")),
            SeverityId::Critical,
            0,
        );
        let mut json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type_uid"], 200301);
        assert_eq!(json["class_name"], "Compliance Finding");
        assert_eq!(json["compliance"]["status_id"], 3);

        json.as_object_mut().unwrap().remove("compliance");
        let err = serde_json::from_value::<ComplianceFinding>(json).unwrap_err();
        assert!(err.to_string().contains("compliance"));
    }
}
