//! Application Security Posture Finding (class 2007): vulnerabilities and
//! misconfigurations found in applications and their dependencies.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::{
    ActivityId, ApplicationSecurityPostureFindingTypeId, ClassUid, Finding, SeverityId,
};
use crate::objects::{
    Compliance, FindingInformation, Metadata, Remediation, ResourceDetails, VulnerabilityDetails,
};
use crate::profiles::ProfileTarget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSecurityPostureFinding {
    #[serde(flatten)]
    pub finding: Finding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<Compliance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceDetails>>,
    pub type_uid: ApplicationSecurityPostureFindingTypeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<Vec<VulnerabilityDetails>>,
}

impl ApplicationSecurityPostureFinding {
    pub fn new(
        activity_id: ActivityId,
        finding_info: FindingInformation,
        metadata: Metadata,
        severity_id: SeverityId,
        time: i64,
    ) -> Self {
        let type_uid = ApplicationSecurityPostureFindingTypeId::from_activity(activity_id);
        let mut finding = Finding::new(
            ClassUid::ApplicationSecurityPostureFinding,
            activity_id,
            finding_info,
            metadata,
            severity_id,
            time,
        );
        finding.type_name = Some(type_uid.caption().to_string());
        Self {
            finding,
            compliance: None,
            remediation: None,
            resources: None,
            type_uid,
            vulnerabilities: None,
        }
    }

    pub fn check_constraints(&self) -> Result<()> {
        self.finding.check_constraints()
    }
}

impl ProfileTarget for ApplicationSecurityPostureFinding {
    fn has_field(&self, field: &str) -> bool {
        match field {
            "type_uid" => true,
            "compliance" => self.compliance.is_some(),
            "remediation" => self.remediation.is_some(),
            "resources" => self.resources.is_some(),
            "vulnerabilities" => self.vulnerabilities.is_some(),
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
    use crate::objects::{AffectedSoftwarePackage, Cve, Product};

    #[test]
    fn vulnerable_dependency() {
        let mut finding = ApplicationSecurityPostureFinding::new(
            ActivityId::Update,
            FindingInformation::new("lodash prototype pollution", "aspf-1"),
            Metadata::new(Product::new("Snyk", "Snyk")),
            SeverityId::High,
            0,
        );
        finding.vulnerabilities = Some(vec![VulnerabilityDetails {
            cve: Some(Cve::new("CVE-2020-8203")),
            affected_packages: Some(vec![AffectedSoftwarePackage {
                name: "lodash".to_string(),
                version: "4.17.15".to_string(),
                fixed_in_version: Some("4.17.19".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }]);

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type_uid"], 200702);
        assert_eq!(json["class_uid"], 2007);
        assert_eq!(
            json["vulnerabilities"][0]["affected_packages"][0]["fixed_in_version"],
            "4.17.19"
        );
        assert!(json.get("compliance").is_none());
        assert!(finding.has_field("vulnerabilities"));
        assert!(!finding.has_field("remediation"));
    }
}
