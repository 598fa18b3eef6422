//! Vulnerability objects: CVE/CWE references, scores, affected packages and
//! remediation guidance.

use serde::{Deserialize, Serialize};

use crate::macros::ocsf_enum;
use crate::objects::{Fingerprint, OperatingSystem, Product, Url};

ocsf_enum! {
    pub enum SoftwarePackageTypeId {
        Unknown = 0 => "Unknown",
        Application = 1 => "Application",
        OperatingSystem = 2 => "Operating System",
        Other = 99 => "Other",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: String,
}

/// Common Vulnerability Scoring System details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvssScore {
    pub base_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Metric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// CVSS version, e.g. `3.1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Exploit Prediction Scoring System details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Epss {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    /// Probability of exploitation, kept as the decimal string the feed reports.
    pub score: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Common Weakness Enumeration reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cwe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<Url>,
    pub uid: String,
}

/// Common Vulnerabilities and Exposures details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cve {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss: Option<Vec<CvssScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epss: Option<Epss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_cwes: Option<Vec<Cwe>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The CVE identifier, e.g. `CVE-2021-44228`.
    pub uid: String,
}

impl Cve {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }
}

/// A knowledge base article, e.g. a vendor patch bulletin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KbArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time_dt: Option<chrono::DateTime<chrono::Utc>>,
    pub os: OperatingSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulletin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superseded: Option<bool>,
    pub title: String,
    pub uid: String,
}

/// Recommended remediation steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Remediation {
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_article_list: Option<Vec<KbArticle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
}

impl Remediation {
    pub fn new(desc: impl Into<String>) -> Self {
        Self {
            desc: desc.into(),
            ..Default::default()
        }
    }
}

/// A software package identified as affected by a vulnerability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectedSoftwarePackage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpe_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_in_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Fingerprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Package URL, e.g. `pkg:npm/lodash@4.17.20`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<SoftwarePackageTypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    pub version: String,
}

/// A vulnerability reported against a resource or package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_packages: Option<Vec<AffectedSoftwarePackage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve: Option<Cve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe: Option<Cwe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_time_dt: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exploit_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fix_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_article_list: Option<Vec<KbArticle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_time_dt: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_vulnerabilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log4shell_cve_parses() {
        let json = r#"{
            "uid": "CVE-2021-44228",
            "desc": "Apache Log4j2 JNDI Remote Code Execution",
            "cvss": [{
                "base_score": 10.0,
                "version": "3.1",
                "vector_string": "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H",
                "metrics": [{"name": "privilegesRequired", "value": "NONE"}]
            }],
            "epss": {"score": "0.975620000", "percentile": 0.99998}
        }"#;
        let cve: Cve = serde_json::from_str(json).unwrap();
        let cvss = &cve.cvss.as_ref().unwrap()[0];
        assert_eq!(cvss.base_score, 10.0);
        assert_eq!(cvss.metrics.as_ref().unwrap()[0].value, "NONE");
        let epss = cve.epss.unwrap();
        assert_eq!(epss.score, "0.975620000");
        assert_eq!(epss.percentile, Some(0.99998));
    }

    #[test]
    fn affected_package_requires_name_and_version() {
        let err =
            serde_json::from_str::<AffectedSoftwarePackage>(r#"{"name": "log4j-core"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `version`"));
    }

    #[test]
    fn empty_vulnerability_serializes_to_empty_object() {
        let json = serde_json::to_string(&VulnerabilityDetails::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
