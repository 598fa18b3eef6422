//! Detection Finding (class 2004): detections or alerts raised by security
//! products.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::finding::check_score;
use crate::events::{
    ActionId, ActivityId, ClassUid, DetectionFindingTypeId, DispositionId, Finding, ImpactId,
    PriorityId, RiskLevelId, SeverityId, VerdictId,
};
use crate::objects::{
    Actor, AuthorizationResult, Container, EvidenceArtifacts, FindingInformation, FirewallRule,
    Malware, Metadata, Remediation, ResourceDetails, Ticket, VulnerabilityDetails,
};
use crate::profiles::ProfileTarget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionFinding {
    #[serde(flatten)]
    pub finding: Finding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<ActionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<Vec<AuthorizationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition_id: Option<DispositionId>,
    /// Milliseconds between `start_time` and `end_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidences: Option<Vec<EvidenceArtifacts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_rule: Option<FirewallRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_id: Option<ImpactId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suspected_breach: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malware: Option<Vec<Malware>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_pid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<PriorityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level_id: Option<RiskLevelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,
    pub type_uid: DetectionFindingTypeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict_id: Option<VerdictId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<Vec<VulnerabilityDetails>>,
}

impl DetectionFinding {
    /// A detection finding; `type_uid` and `type_name` follow `activity_id`.
    pub fn new(
        activity_id: ActivityId,
        finding_info: FindingInformation,
        metadata: Metadata,
        severity_id: SeverityId,
        time: i64,
    ) -> Self {
        let type_uid = DetectionFindingTypeId::from_activity(activity_id);
        let mut finding = Finding::new(
            ClassUid::DetectionFinding,
            activity_id,
            finding_info,
            metadata,
            severity_id,
            time,
        );
        finding.type_name = Some(type_uid.caption().to_string());
        Self {
            finding,
            action: None,
            action_id: None,
            actor: None,
            authorizations: None,
            container: None,
            count: None,
            disposition: None,
            disposition_id: None,
            duration: None,
            evidences: None,
            firewall_rule: None,
            impact: None,
            impact_id: None,
            impact_score: None,
            is_alert: None,
            is_suspected_breach: None,
            malware: None,
            namespace_pid: None,
            priority: None,
            priority_id: None,
            remediation: None,
            resources: None,
            risk_details: None,
            risk_level: None,
            risk_level_id: None,
            risk_score: None,
            src_url: None,
            tickets: None,
            type_uid,
            verdict: None,
            verdict_id: None,
            vulnerabilities: None,
        }
    }

    pub fn check_constraints(&self) -> Result<()> {
        self.finding.check_constraints()?;
        check_score("impact_score", self.impact_score)?;
        check_score("risk_score", self.risk_score)
    }
}

impl ProfileTarget for DetectionFinding {
    fn has_field(&self, field: &str) -> bool {
        match field {
            "type_uid" => true,
            "action" => self.action.is_some(),
            "action_id" => self.action_id.is_some(),
            "actor" => self.actor.is_some(),
            "authorizations" => self.authorizations.is_some(),
            "container" => self.container.is_some(),
            "count" => self.count.is_some(),
            "disposition" => self.disposition.is_some(),
            "disposition_id" => self.disposition_id.is_some(),
            "duration" => self.duration.is_some(),
            "evidences" => self.evidences.is_some(),
            "firewall_rule" => self.firewall_rule.is_some(),
            "impact" => self.impact.is_some(),
            "impact_id" => self.impact_id.is_some(),
            "impact_score" => self.impact_score.is_some(),
            "is_alert" => self.is_alert.is_some(),
            "is_suspected_breach" => self.is_suspected_breach.is_some(),
            "malware" => self.malware.is_some(),
            "namespace_pid" => self.namespace_pid.is_some(),
            "priority" => self.priority.is_some(),
            "priority_id" => self.priority_id.is_some(),
            "remediation" => self.remediation.is_some(),
            "resources" => self.resources.is_some(),
            "risk_details" => self.risk_details.is_some(),
            "risk_level" => self.risk_level.is_some(),
            "risk_level_id" => self.risk_level_id.is_some(),
            "risk_score" => self.risk_score.is_some(),
            "src_url" => self.src_url.is_some(),
            "tickets" => self.tickets.is_some(),
            "verdict" => self.verdict.is_some(),
            "verdict_id" => self.verdict_id.is_some(),
            "vulnerabilities" => self.vulnerabilities.is_some(),
            _ => self.finding.has_field(field),
        }
    }

    fn declared_profiles(&self) -> Vec<String> {
        self.finding.declared_profiles()
    }
}
