//! Actors, authorizations, malware, tickets and firewall rules referenced by
//! detection findings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::SeverityId;
use crate::macros::ocsf_enum;
use crate::objects::{Cve, Policy, User};

/// The outcome of an authorization decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationResult {
    /// e.g. `allowed` or `denied`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

/// The user, application, service or process that performed an activity.
///
/// `idp`, `process` and `session` are carried as raw JSON; their OCSF
/// objects are not modeled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<Vec<AuthorizationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

ocsf_enum! {
    pub enum MalwareClassificationId {
        Unknown = 0 => "Unknown",
        Adware = 1 => "Adware",
        Backdoor = 2 => "Backdoor",
        Bot = 3 => "Bot",
        Bootkit = 4 => "Bootkit",
        Ddos = 5 => "DDOS",
        Downloader = 6 => "Downloader",
        Dropper = 7 => "Dropper",
        ExploitKit = 8 => "Exploit-Kit",
        Keylogger = 9 => "Keylogger",
        Ransomware = 10 => "Ransomware",
        RemoteAccessTrojan = 11 => "Remote-Access-Trojan",
        ResourceExploitation = 13 => "Resource-Exploitation",
        RogueSecuritySoftware = 14 => "Rogue-Security-Software",
        Rootkit = 15 => "Rootkit",
        ScreenCapture = 16 => "Screen-Capture",
        Spyware = 17 => "Spyware",
        Trojan = 18 => "Trojan",
        Virus = 19 => "Virus",
        Webshell = 20 => "Webshell",
        Wiper = 21 => "Wiper",
        Worm = 22 => "Worm",
        Other = 99 => "Other",
    }
}

/// Malware identified in a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Malware {
    pub classification_ids: Vec<MalwareClassificationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cves: Option<Vec<Cve>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_id: Option<SeverityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl Malware {
    pub fn new(classification_ids: Vec<MalwareClassificationId>) -> Self {
        Self {
            classification_ids,
            classifications: None,
            cves: None,
            name: None,
            path: None,
            provider: None,
            severity: None,
            severity_id: None,
            uid: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

ocsf_enum! {
    pub enum TicketStatusId {
        Unknown = 0 => "Unknown",
        New = 1 => "New",
        InProgress = 2 => "In Progress",
        OnHold = 3 => "On Hold",
        Resolved = 4 => "Resolved",
        Closed = 5 => "Closed",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    pub enum TicketTypeId {
        Unknown = 0 => "Unknown",
        Internal = 1 => "Internal",
        External = 2 => "External",
        Other = 99 => "Other",
    }
}

/// A ticket in an IT service management system such as Jira or ServiceNow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<TicketStatusId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<TicketTypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// A firewall rule that matched the activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
