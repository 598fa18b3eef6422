//! OCSF objects: the nested structures that events are assembled from.

mod account;
mod actor;
mod cloud;
mod compliance;
mod container;
mod device;
mod evidence;
mod finding_info;
mod metadata;
mod observable;
mod vulnerability;

pub use account::{Account, AccountTypeId, Group, LdapPerson, Organization, User};
pub use actor::{
    Actor, AuthorizationResult, FirewallRule, Malware, MalwareClassificationId, Ticket,
    TicketStatusId, TicketTypeId,
};
pub use cloud::{Api, Cloud, RequestElements, ResponseElements, Service};
pub use compliance::{Assessment, Check, Compliance, ComplianceStatusId, Policy};
pub use container::{Container, Fingerprint, FingerprintAlgorithmId, Image};
pub use device::{
    Device, DeviceHardwareInfo, DeviceTypeId, GeoLocation, NetworkInterface,
    NetworkInterfaceTypeId, OperatingSystem, OperatingSystemTypeId,
};
pub use evidence::{DnsOpcodeId, DnsQuery, EvidenceArtifacts, ResourceDetails, Url};
pub use finding_info::{
    Analytic, FindingInformation, KillChainPhase, KillChainPhaseId, MitreAttack, RelatedEvent,
    SubTechnique, Tactic, Technique,
};
pub use metadata::{Feature, Logger, Metadata, Product, SchemaExtension};
pub use observable::{Enrichment, Observable, ObservableTypeId, Reputation, ReputationScoreId};
pub use vulnerability::{
    AffectedSoftwarePackage, Cve, CvssScore, Cwe, Epss, KbArticle, Metric, Remediation,
    SoftwarePackageTypeId, VulnerabilityDetails,
};
