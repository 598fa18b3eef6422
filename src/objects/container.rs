//! Container, image and fingerprint objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::macros::ocsf_enum;

ocsf_enum! {
    /// The hash algorithm used to create a fingerprint.
    #[derive(Default)]
    pub enum FingerprintAlgorithmId {
        #[default]
        Unknown = 0 => "Unknown",
        Md5 = 1 => "MD5",
        Sha1 = 2 => "SHA-1",
        Sha256 = 3 => "SHA-256",
        Sha512 = 4 => "SHA-512",
        Ctph = 5 => "CTPH",
        Tlsh = 6 => "TLSH",
        QuickXorHash = 7 => "quickXorHash",
        Other = 99 => "Other",
    }
}

/// A digital fingerprint (hash) of a file, package or image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// The hash algorithm name, normalized to the caption of `algorithm_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    pub algorithm_id: FingerprintAlgorithmId,
    /// The digital fingerprint value.
    pub value: String,
}

impl Fingerprint {
    /// A fingerprint with `algorithm` set to the caption of `algorithm_id`.
    pub fn new(algorithm_id: FingerprintAlgorithmId, value: impl Into<String>) -> Self {
        Self {
            algorithm: Some(algorithm_id.caption().to_string()),
            algorithm_id,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub uid: String,
}

/// An instance of a container: a prepackaged, portable system image run in
/// isolation by a container runtime such as containerd.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// The commit or SHA256 hash of the container image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Fingerprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// The image tag, e.g. `1.11-alpine`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_driver: Option<String>,
    /// The orchestrator managing the container, e.g. ECS, EKS, K8s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestrator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Image size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    pub uid: String,
}
