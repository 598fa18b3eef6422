//! Typed models for the Open Cybersecurity Schema Framework.
//!
//! `ocsf-models` provides Rust types for the [OCSF](https://schema.ocsf.io/)
//! Findings category (Compliance, Detection and Application Security Posture
//! findings), the objects they are built from, and a validator for OCSF
//! profiles.
//!
//! # Features
//!
//! - Events and objects serialize to OCSF JSON, omitting unset attributes
//! - Integer enumerations serialize as their OCSF id and reject unknown ids
//! - Range constraints (scores, timezone offset) checked on load
//! - Profile validation against `metadata.profiles` or an explicit list,
//!   for typed events and raw JSON alike
//!
//! # Usage
//!
//! ```
//! use ocsf_models::events::{ActivityId, DetectionFinding, SeverityId};
//! use ocsf_models::objects::{Cloud, FindingInformation, Metadata, Product};
//! use ocsf_models::profiles::validate_profiles;
//!
//! let metadata = Metadata::new(Product::new("Prowler", "Prowler")).with_profiles(["cloud"]);
//! let mut finding = DetectionFinding::new(
//!     ActivityId::Create,
//!     FindingInformation::new("Public S3 bucket", "finding-1"),
//!     metadata,
//!     SeverityId::High,
//!     1_714_566_600_000,
//! );
//!
//! // The cloud profile requires `cloud`.
//! assert_eq!(validate_profiles(&finding, None, false)?.len(), 1);
//!
//! finding.finding.cloud = Some(Cloud::new("AWS").with_region("eu-west-1"));
//! assert!(validate_profiles(&finding, None, true)?.is_empty());
//!
//! let json = finding.to_json()?;
//! assert!(json.contains(r#""class_uid":2004"#));
//! # Ok::<(), ocsf_models::error::Error>(())
//! ```

pub mod error;
pub mod events;
mod macros;
pub mod objects;
pub mod profiles;

/// The OCSF schema version these models follow.
pub const OCSF_VERSION: &str = "1.7.0";
