//! Finding details: analytics, kill chain phases, MITRE ATT&CK mappings and
//! related events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::macros::ocsf_enum;
use crate::objects::Observable;

ocsf_enum! {
    /// Cyber Kill Chain phase.
    #[derive(Default)]
    pub enum KillChainPhaseId {
        #[default]
        Unknown = 0 => "Unknown",
        Reconnaissance = 1 => "Reconnaissance",
        Weaponization = 2 => "Weaponization",
        Delivery = 3 => "Delivery",
        Exploitation = 4 => "Exploitation",
        Installation = 5 => "Installation",
        CommandAndControl = 6 => "Command & Control",
        ActionsOnObjectives = 7 => "Actions on Objectives",
        Other = 99 => "Other",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KillChainPhase {
    pub phase: String,
    pub phase_id: KillChainPhaseId,
}

impl From<KillChainPhaseId> for KillChainPhase {
    fn from(phase_id: KillChainPhaseId) -> Self {
        Self {
            phase: phase_id.caption().to_string(),
            phase_id,
        }
    }
}

/// The analytic technique that led to a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// OCSF analytic type, e.g. 1 Rule, 2 Behavioral, 3 Statistical.
    pub type_id: i64,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tactic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    pub uid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubTechnique {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// A MITRE ATT&CK tactic/technique/sub-technique mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitreAttack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_technique: Option<SubTechnique>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactic: Option<Tactic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<Technique>,
    /// ATT&CK matrix version, e.g. `14.1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Another event or finding that contributed to this one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attacks: Option<Vec<MitreAttack>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_chain: Option<Vec<KillChainPhase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observables: Option<Vec<Observable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_uid: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_uid: Option<i64>,
    pub uid: String,
}

/// Metadata about the finding itself: title, unique id, timeline and the
/// analytics and attack techniques behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytic: Option<Analytic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attacks: Option<Vec<MitreAttack>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time_dt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_time_dt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_chain: Option<Vec<KillChainPhase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_time_dt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time_dt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_analytics: Option<Vec<Analytic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_events: Option<Vec<RelatedEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    pub uid: String,
}

impl FindingInformation {
    pub fn new(title: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }
}
