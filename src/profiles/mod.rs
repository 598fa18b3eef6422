//! OCSF profiles and the rules used to validate them.
//!
//! A profile is a named overlay that adds attribute requirements to an
//! event. [`PROFILE_REQUIREMENTS`] is the only place those requirements are
//! declared; adding a profile means adding a row there.

mod validators;

pub use validators::{
    ProfileTarget, ProfileValidationError, ProfileValidationErrors, validate_profiles,
    validate_single_profile,
};

/// The attribute requirements of one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRequirements {
    pub name: &'static str,
    /// Checked by the validator, in this order.
    pub required: &'static [&'static str],
    /// Informational only.
    pub optional: &'static [&'static str],
}

/// Requirements of every profile the validator implements.
pub static PROFILE_REQUIREMENTS: &[ProfileRequirements] = &[
    ProfileRequirements {
        name: "cloud",
        required: &["cloud"],
        optional: &["api"],
    },
    // No required attributes; the profile only adds the *_dt variants.
    ProfileRequirements {
        name: "datetime",
        required: &[],
        optional: &["time_dt", "start_time_dt", "end_time_dt"],
    },
];

/// Profiles defined by OCSF that the validator does not support yet.
pub static NOT_IMPLEMENTED_PROFILES: &[&str] =
    &["security_control", "host", "osint", "container", "incident"];

/// Look up the requirements of `profile`, if it is implemented.
pub fn requirements(profile: &str) -> Option<&'static ProfileRequirements> {
    PROFILE_REQUIREMENTS.iter().find(|r| r.name == profile)
}

pub fn is_not_implemented(profile: &str) -> bool {
    NOT_IMPLEMENTED_PROFILES.contains(&profile)
}

/// The profiles with validation support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OcsfProfile {
    Cloud,
    Datetime,
}

impl OcsfProfile {
    pub const ALL: &'static [OcsfProfile] = &[OcsfProfile::Cloud, OcsfProfile::Datetime];

    pub const fn as_str(self) -> &'static str {
        match self {
            OcsfProfile::Cloud => "cloud",
            OcsfProfile::Datetime => "datetime",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }

    pub fn requirements(self) -> Option<&'static ProfileRequirements> {
        requirements(self.as_str())
    }
}

impl std::fmt::Display for OcsfProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_variant_has_a_table_row() {
        for profile in OcsfProfile::ALL {
            assert!(profile.requirements().is_some(), "{profile} missing");
        }
    }

    #[test]
    fn implemented_and_unsupported_sets_are_disjoint() {
        for row in PROFILE_REQUIREMENTS {
            assert!(!is_not_implemented(row.name));
        }
    }

    #[test]
    fn cloud_requirements() {
        let cloud = requirements("cloud").unwrap();
        assert_eq!(cloud.required, &["cloud"]);
        assert_eq!(cloud.optional, &["api"]);
        assert!(requirements("datetime").unwrap().required.is_empty());
        assert!(requirements("made_up_profile").is_none());
    }

    #[test]
    fn profile_names() {
        assert_eq!(OcsfProfile::from_name("datetime"), Some(OcsfProfile::Datetime));
        assert_eq!(OcsfProfile::from_name("host"), None);
        assert_eq!(OcsfProfile::Cloud.to_string(), "cloud");
    }
}
