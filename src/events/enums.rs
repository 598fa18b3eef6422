//! Enumerations shared by the finding event classes.

use crate::macros::ocsf_enum;

ocsf_enum! {
    /// The normalized identifier of the event/finding severity.
    ///
    /// Smaller values represent lower impact events, larger values higher
    /// impact events.
    #[derive(Default)]
    pub enum SeverityId {
        #[default]
        Unknown = 0 => "Unknown",
        Informational = 1 => "Informational",
        Low = 2 => "Low",
        Medium = 3 => "Medium",
        High = 4 => "High",
        Critical = 5 => "Critical",
        Fatal = 6 => "Fatal",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The normalized status identifier of the finding.
    #[derive(Default)]
    pub enum StatusId {
        #[default]
        Unknown = 0 => "Unknown",
        New = 1 => "New",
        InProgress = 2 => "In Progress",
        Suppressed = 3 => "Suppressed",
        Resolved = 4 => "Resolved",
        Archived = 5 => "Archived",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The normalized identifier of the finding activity.
    #[derive(Default)]
    pub enum ActivityId {
        #[default]
        Unknown = 0 => "Unknown",
        Create = 1 => "Create",
        Update = 2 => "Update",
        Close = 3 => "Close",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The action taken by a control or other policy-based system.
    pub enum ActionId {
        Unknown = 0 => "Unknown",
        Allowed = 1 => "Allowed",
        Denied = 2 => "Denied",
        Observed = 3 => "Observed",
        Modified = 4 => "Modified",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The normalized confidence of the finding's correctness.
    pub enum ConfidenceId {
        Unknown = 0 => "Unknown",
        Low = 1 => "Low",
        Medium = 2 => "Medium",
        High = 3 => "High",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The outcome of a detection or enforcement decision.
    pub enum DispositionId {
        Unknown = 0 => "Unknown",
        Allowed = 1 => "Allowed",
        Blocked = 2 => "Blocked",
        Quarantined = 3 => "Quarantined",
        Isolated = 4 => "Isolated",
        Deleted = 5 => "Deleted",
        Dropped = 6 => "Dropped",
        CustomAction = 7 => "Custom Action",
        Approved = 8 => "Approved",
        Restored = 9 => "Restored",
        Exonerated = 10 => "Exonerated",
        Corrected = 11 => "Corrected",
        PartiallyCorrected = 12 => "Partially Corrected",
        Uncorrected = 13 => "Uncorrected",
        Delayed = 14 => "Delayed",
        Detected = 15 => "Detected",
        NoAction = 16 => "No Action",
        Logged = 17 => "Logged",
        Tagged = 18 => "Tagged",
        Alert = 19 => "Alert",
        Count = 20 => "Count",
        Reset = 21 => "Reset",
        CaptchaRequired = 22 => "Captcha",
        ChallengeRan = 23 => "Challenge",
        AccessRevoked = 24 => "Access Revoked",
        Rejected = 25 => "Rejected",
        Unauthorized = 26 => "Unauthorized",
        Error = 27 => "Error",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The normalized impact of the finding.
    pub enum ImpactId {
        Unknown = 0 => "Unknown",
        Low = 1 => "Low",
        Medium = 2 => "Medium",
        High = 3 => "High",
        Critical = 4 => "Critical",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The normalized priority assigned to the finding.
    pub enum PriorityId {
        Unknown = 0 => "Unknown",
        Low = 1 => "Low",
        Medium = 2 => "Medium",
        High = 3 => "High",
        Critical = 4 => "Critical",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// The normalized risk level.
    pub enum RiskLevelId {
        Info = 0 => "Info",
        Low = 1 => "Low",
        Medium = 2 => "Medium",
        High = 3 => "High",
        Critical = 4 => "Critical",
    }
}

ocsf_enum! {
    /// The normalized verdict of a finding or evidence.
    pub enum VerdictId {
        Unknown = 0 => "Unknown",
        FalsePositive = 1 => "False Positive",
        TruePositive = 2 => "True Positive",
        Disregard = 3 => "Disregard",
        Suspicious = 4 => "Suspicious",
        Benign = 5 => "Benign",
        Test = 6 => "Test",
        InsufficientData = 7 => "Insufficient Data",
        SecurityRisk = 8 => "Security Risk",
        ManagedExternally = 9 => "Managed Externally",
        Duplicate = 10 => "Duplicate",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// OCSF event categories modeled by this crate.
    pub enum CategoryUid {
        Findings = 2 => "Findings",
    }
}

ocsf_enum! {
    /// OCSF event classes modeled by this crate.
    pub enum ClassUid {
        ComplianceFinding = 2003 => "Compliance Finding",
        DetectionFinding = 2004 => "Detection Finding",
        ApplicationSecurityPostureFinding = 2007 => "Application Security Posture Finding",
    }
}

ocsf_enum! {
    /// `type_uid` of a Compliance Finding: `class_uid * 100 + activity_id`.
    pub enum ComplianceFindingTypeId {
        Unknown = 200300 => "Compliance Finding: Unknown",
        Create = 200301 => "Compliance Finding: Create",
        Update = 200302 => "Compliance Finding: Update",
        Close = 200303 => "Compliance Finding: Close",
        Other = 200399 => "Compliance Finding: Other",
    }
}

ocsf_enum! {
    /// `type_uid` of a Detection Finding: `class_uid * 100 + activity_id`.
    pub enum DetectionFindingTypeId {
        Unknown = 200400 => "Detection Finding: Unknown",
        Create = 200401 => "Detection Finding: Create",
        Update = 200402 => "Detection Finding: Update",
        Close = 200403 => "Detection Finding: Close",
        Other = 200499 => "Detection Finding: Other",
    }
}

ocsf_enum! {
    /// `type_uid` of an Application Security Posture Finding.
    pub enum ApplicationSecurityPostureFindingTypeId {
        Unknown = 200700 => "Application Security Posture Finding: Unknown",
        Create = 200701 => "Application Security Posture Finding: Create",
        Update = 200702 => "Application Security Posture Finding: Update",
        Close = 200703 => "Application Security Posture Finding: Close",
        Other = 200799 => "Application Security Posture Finding: Other",
    }
}

macro_rules! type_uid_from_activity {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// The `type_uid` for a finding of this class with the given activity.
                pub const fn from_activity(activity: ActivityId) -> Self {
                    match activity {
                        ActivityId::Unknown => $name::Unknown,
                        ActivityId::Create => $name::Create,
                        ActivityId::Update => $name::Update,
                        ActivityId::Close => $name::Close,
                        ActivityId::Other => $name::Other,
                    }
                }
            }
        )+
    };
}

type_uid_from_activity!(
    ComplianceFindingTypeId,
    DetectionFindingTypeId,
    ApplicationSecurityPostureFindingTypeId,
);
