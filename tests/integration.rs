//! End-to-end tests for ocsf-models.
//!
//! These build complete findings the way a producer would, serialize them,
//! read them back from disk and run the profile validator over both the
//! typed events and their raw JSON.

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use ocsf_models::error::Error;
use ocsf_models::events::{
    ActivityId, AnyFinding, ApplicationSecurityPostureFinding, ComplianceFinding, ConfidenceId,
    DetectionFinding, DispositionId, ImpactId, RiskLevelId, SeverityId, StatusId, VerdictId,
    load_finding,
};
use ocsf_models::objects::{
    AffectedSoftwarePackage, Api, Assessment, Check, Cloud, Compliance, ComplianceStatusId, Cve,
    CvssScore, EvidenceArtifacts, Feature, FindingInformation, KillChainPhase, KillChainPhaseId,
    Malware, MalwareClassificationId, Metadata, MitreAttack, Product, Remediation,
    ResourceDetails, Tactic, Technique, Url, VulnerabilityDetails,
};
use ocsf_models::profiles::{ProfileTarget, ProfileValidationError, validate_profiles};
use ocsf_models::OCSF_VERSION;

fn product() -> Product {
    Product {
        feature: Some(Feature {
            name: "Name".to_string(),
            uid: "123".to_string(),
            version: "Version".to_string(),
        }),
        lang: Some("en".to_string()),
        uid: Some("123".to_string()),
        version: Some("Version".to_string()),
        ..Product::new("Name", "Vendor Name")
    }
}

/// A detection finding with most attribute groups populated.
fn detection_finding() -> DetectionFinding {
    let created = Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap();
    let info = FindingInformation {
        created_time: Some(created.timestamp_millis()),
        created_time_dt: Some(created),
        desc: Some("An S3 bucket allows public read access".to_string()),
        kill_chain: Some(vec![KillChainPhase::from(KillChainPhaseId::Exploitation)]),
        attacks: Some(vec![MitreAttack {
            tactic: Some(Tactic {
                name: Some("Collection".to_string()),
                uid: Some("TA0009".to_string()),
                ..Default::default()
            }),
            technique: Some(Technique {
                name: "Data from Cloud Storage".to_string(),
                uid: "T1530".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }]),
        ..FindingInformation::new("Public S3 bucket", "finding-123")
    };

    let metadata = Metadata::new(product()).with_profiles(["cloud", "datetime"]);
    let mut finding =
        DetectionFinding::new(ActivityId::Create, info, metadata, SeverityId::High, 0);
    finding.finding.base = finding.finding.base.at(created);

    finding.finding.cloud = Some(Cloud::new("AWS").with_region("us-east-1"));
    finding.finding.api = Some(Api {
        operation: "GetBucketAcl".to_string(),
        ..Default::default()
    });
    finding.finding.confidence_id = Some(ConfidenceId::High);
    finding.finding.confidence_score = Some(90);
    finding.finding.base.status_id = Some(StatusId::New);
    finding.disposition_id = Some(DispositionId::Allowed);
    finding.impact_id = Some(ImpactId::High);
    finding.impact_score = Some(75);
    finding.risk_level_id = Some(RiskLevelId::High);
    finding.risk_score = Some(80);
    finding.verdict_id = Some(VerdictId::TruePositive);
    finding.is_alert = Some(true);
    finding.evidences = Some(vec![EvidenceArtifacts {
        name: Some("bucket-acl".to_string()),
        url: Some(Url::new("https://s3.amazonaws.com/example-bucket")),
        ..Default::default()
    }]);
    finding.malware = Some(vec![
        Malware::new(vec![MalwareClassificationId::Ransomware]).with_name("WannaCry"),
    ]);
    finding.resources = Some(vec![ResourceDetails {
        name: Some("example-bucket".to_string()),
        region: Some("us-east-1".to_string()),
        r#type: Some("AWS::S3::Bucket".to_string()),
        ..Default::default()
    }]);
    finding.remediation = Some(Remediation::new("Block public access on the bucket"));
    finding
}

fn compliance_finding() -> ComplianceFinding {
    let compliance = Compliance {
        assessments: Some(vec![Assessment {
            category: Some("Access Control".to_string()),
            name: Some("github authn configuration".to_string()),
            uid: Some("123".to_string()),
            meets_criteria: Some(true),
            ..Default::default()
        }]),
        category: Some("Supply Chain Risk Assessment".to_string()),
        checks: Some(vec![Check {
            uid: Some("OSPS-AC-01.01".to_string()),
            version: Some("2025-02-25".to_string()),
            severity_id: Some(SeverityId::Critical),
            standards: Some(vec![
                "Open Source Project Security Baseline v2025-02-25".to_string(),
            ]),
            status: Some("Pass".to_string()),
            status_id: Some(ComplianceStatusId::Pass),
            ..Default::default()
        }]),
        control: Some("OSPS-AC-01".to_string()),
        standards: Some(vec!["OSPS Baseline".to_string()]),
        status_id: Some(ComplianceStatusId::Pass),
        ..Default::default()
    };

    let mut finding = ComplianceFinding::new(
        ActivityId::Create,
        compliance,
        FindingInformation::new("MFA is enforced", "osps-ac-01"),
        Metadata::new(product()).with_profiles(["datetime"]),
        SeverityId::Informational,
        1_740_000_000_000,
    );
    finding.resources = Some(vec![ResourceDetails {
        hostname: Some("github.com".to_string()),
        name: Some("example/repo".to_string()),
        ..Default::default()
    }]);
    finding
}

fn aspf_finding() -> ApplicationSecurityPostureFinding {
    let mut finding = ApplicationSecurityPostureFinding::new(
        ActivityId::Create,
        FindingInformation::new("Log4Shell in dependency tree", "aspf-42"),
        Metadata::new(product()),
        SeverityId::Critical,
        1_740_000_000_000,
    );
    finding.vulnerabilities = Some(vec![VulnerabilityDetails {
        cve: Some(Cve {
            cvss: Some(vec![CvssScore {
                base_score: 10.0,
                version: Some("3.1".to_string()),
                ..Default::default()
            }]),
            ..Cve::new("CVE-2021-44228")
        }),
        affected_packages: Some(vec![AffectedSoftwarePackage {
            name: "log4j-core".to_string(),
            version: "2.14.1".to_string(),
            fixed_in_version: Some("2.17.1".to_string()),
            purl: Some("pkg:maven/org.apache.logging.log4j/log4j-core@2.14.1".to_string()),
            ..Default::default()
        }]),
        is_exploit_available: Some(true),
        ..Default::default()
    }]);
    finding
}

#[test]
fn detection_finding_serializes_flat_ocsf_json() {
    let json: Value = serde_json::from_str(&detection_finding().to_json().unwrap()).unwrap();

    assert_eq!(json["category_uid"], 2);
    assert_eq!(json["category_name"], "Findings");
    assert_eq!(json["class_uid"], 2004);
    assert_eq!(json["class_name"], "Detection Finding");
    assert_eq!(json["type_uid"], 200401);
    assert_eq!(json["type_name"], "Detection Finding: Create");
    assert_eq!(json["activity_id"], 1);
    assert_eq!(json["severity_id"], 4);
    assert_eq!(json["time_dt"], "2024-03-14T09:26:53Z");
    assert_eq!(json["metadata"]["version"], OCSF_VERSION);
    assert_eq!(json["metadata"]["profiles"], json!(["cloud", "datetime"]));
    assert_eq!(json["cloud"]["provider"], "AWS");
    assert_eq!(json["malware"][0]["classification_ids"], json!([10]));
    assert_eq!(json["finding_info"]["kill_chain"][0]["phase_id"], 4);
    assert_eq!(json["finding_info"]["attacks"][0]["technique"]["uid"], "T1530");

    // Composition does not leak into the wire format.
    assert!(json.get("finding").is_none());
    assert!(json.get("base").is_none());

    // Unset attributes are omitted rather than null.
    assert!(json.get("message").is_none());
    assert!(json.get("actor").is_none());
    assert!(json.get("end_time_dt").is_none());
    assert!(json.as_object().unwrap().values().all(|v| !v.is_null()));
}

#[test]
fn detection_finding_round_trips() {
    let finding = detection_finding();
    let parsed = DetectionFinding::from_json(&finding.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, finding);
}

#[test]
fn compliance_finding_shape() {
    let json: Value = serde_json::from_str(&compliance_finding().to_json().unwrap()).unwrap();
    assert_eq!(json["class_uid"], 2003);
    assert_eq!(json["type_uid"], 200301);
    assert_eq!(json["compliance"]["checks"][0]["status_id"], 1);
    assert_eq!(json["compliance"]["checks"][0]["severity_id"], 5);
    assert_eq!(json["resources"][0]["hostname"], "github.com");
    assert!(json.get("evidences").is_none());
}

#[test]
fn aspf_finding_shape() {
    let json: Value = serde_json::from_str(&aspf_finding().to_json().unwrap()).unwrap();
    assert_eq!(json["class_uid"], 2007);
    assert_eq!(json["class_name"], "Application Security Posture Finding");
    assert_eq!(json["type_uid"], 200701);
    let vuln = &json["vulnerabilities"][0];
    assert_eq!(vuln["cve"]["uid"], "CVE-2021-44228");
    assert_eq!(vuln["cve"]["cvss"][0]["base_score"], 10.0);
    assert_eq!(vuln["affected_packages"][0]["fixed_in_version"], "2.17.1");
}

#[test]
fn out_of_range_scores_rejected_on_load() {
    let mut json: Value = serde_json::from_str(&detection_finding().to_json().unwrap()).unwrap();
    json["impact_score"] = json!(101);
    let err = DetectionFinding::from_json(&json.to_string()).unwrap_err();
    match err {
        Error::Constraint { field, .. } => assert_eq!(field, "impact_score"),
        other => panic!("expected constraint error, got {other:?}"),
    }

    let mut json: Value = serde_json::from_str(&compliance_finding().to_json().unwrap()).unwrap();
    json["timezone_offset"] = json!(-1081);
    assert!(ComplianceFinding::from_json(&json.to_string()).is_err());
    json["timezone_offset"] = json!(-1080);
    assert!(ComplianceFinding::from_json(&json.to_string()).is_ok());
}

#[test]
fn unknown_enum_id_rejected_on_load() {
    let mut json: Value = serde_json::from_str(&detection_finding().to_json().unwrap()).unwrap();
    json["severity_id"] = json!(7);
    let err = DetectionFinding::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn declared_profiles_validate() {
    let finding = detection_finding();
    assert!(validate_profiles(&finding, None, true).unwrap().is_empty());

    let mut missing_cloud = finding.clone();
    missing_cloud.finding.cloud = None;
    let err = validate_profiles(&missing_cloud, None, true).unwrap_err();
    let Error::ProfileValidation(errors) = err else {
        panic!("expected ProfileValidation");
    };
    assert_eq!(
        errors.errors(),
        &[ProfileValidationError::new("cloud", "cloud")]
    );

    let errors = validate_profiles(&missing_cloud, None, false).unwrap();
    assert_eq!(errors.len(), 1);
}

#[test]
fn explicit_profiles_override_metadata() {
    let mut finding = detection_finding();
    finding.finding.cloud = None;
    assert!(
        validate_profiles(&finding, Some(&["datetime"][..]), true)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn unsupported_profile_is_fatal_even_when_collecting() {
    let finding = compliance_finding();
    let err = validate_profiles(&finding, Some(&["datetime", "container"][..]), false).unwrap_err();
    assert!(matches!(err, Error::UnsupportedProfile(ref p) if p == "container"));
}

#[test]
fn unknown_profile_alongside_cloud() {
    let finding = aspf_finding();
    let errors =
        validate_profiles(&finding, Some(&["cloud", "unknown_profile"][..]), false).unwrap();
    assert_eq!(errors, vec![ProfileValidationError::new("cloud", "cloud")]);
}

#[test]
fn raw_json_and_typed_event_agree() {
    let mut finding = detection_finding();
    finding.finding.cloud = None;
    let raw: Value = serde_json::from_str(&finding.to_json().unwrap()).unwrap();

    assert_eq!(raw.declared_profiles(), finding.declared_profiles());
    for field in ["cloud", "api", "time_dt", "start_time_dt", "risk_score", "is_alert"] {
        assert_eq!(raw.has_field(field), finding.has_field(field), "{field}");
    }
    assert_eq!(
        validate_profiles(&raw, None, false).unwrap(),
        validate_profiles(&finding, None, false).unwrap()
    );
}

#[test]
fn load_finding_from_disk() {
    let dir = tempdir();
    let path = dir.join("detection.json");
    std::fs::write(&path, detection_finding().to_json_pretty().unwrap()).unwrap();

    let loaded = load_finding(&path).unwrap();
    let AnyFinding::Detection(detection) = &loaded else {
        panic!("expected a detection finding");
    };
    assert_eq!(detection, &detection_finding());
    assert!(validate_profiles(&loaded, None, true).unwrap().is_empty());

    let path = dir.join("compliance.json");
    std::fs::write(&path, compliance_finding().to_json().unwrap()).unwrap();
    assert!(matches!(
        load_finding(&path).unwrap(),
        AnyFinding::Compliance(_)
    ));
}

#[test]
fn load_finding_errors() {
    let dir = tempdir();

    let err = load_finding(&dir.join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("missing.json"));

    let path = dir.join("network.json");
    std::fs::write(&path, r#"{"class_uid": 4001}"#).unwrap();
    assert!(matches!(load_finding(&path), Err(Error::UnknownClass(4001))));

    let path = dir.join("garbage.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(load_finding(&path), Err(Error::Json(_))));
}

#[test]
fn metadata_defaults_version_when_absent() {
    let mut json: Value = serde_json::from_str(&aspf_finding().to_json().unwrap()).unwrap();
    json["metadata"].as_object_mut().unwrap().remove("version");
    let parsed = ApplicationSecurityPostureFinding::from_json(&json.to_string()).unwrap();
    assert_eq!(parsed.finding.base.metadata.version, OCSF_VERSION);
}

fn tempdir() -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "ocsf-models-test-{}-{}",
        std::process::id(),
        id
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
