//! Profile validation over anything that can report attribute presence.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::profiles::{is_not_implemented, requirements};

/// Read access to an event's attributes by OCSF name.
pub trait ProfileTarget {
    /// Whether the attribute `field` holds a value.
    ///
    /// Only true absence counts as missing: an empty list, `0` or `false`
    /// are present.
    fn has_field(&self, field: &str) -> bool;

    /// The profiles named in `metadata.profiles`, empty when unset.
    fn declared_profiles(&self) -> Vec<String>;
}

/// Raw JSON documents: an attribute is present when its key exists and is
/// not `null`.
impl ProfileTarget for Value {
    fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_null())
    }

    fn declared_profiles(&self) -> Vec<String> {
        self.pointer("/metadata/profiles")
            .and_then(Value::as_array)
            .map(|profiles| {
                profiles
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<T: ProfileTarget + ?Sized> ProfileTarget for &T {
    fn has_field(&self, field: &str) -> bool {
        (**self).has_field(field)
    }

    fn declared_profiles(&self) -> Vec<String> {
        (**self).declared_profiles()
    }
}

/// A profile requirement the event does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{profile}] {field}: {message}")]
pub struct ProfileValidationError {
    pub profile: String,
    pub field: String,
    pub message: String,
}

impl ProfileValidationError {
    /// A "required" error for `field` of `profile`.
    pub fn new(profile: impl Into<String>, field: impl Into<String>) -> Self {
        Self::with_message(profile, field, "required")
    }

    pub fn with_message(
        profile: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            profile: profile.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every error collected by one [`validate_profiles`] call.
///
/// Displays as the first error followed by the number of others, so the
/// count survives when only the message is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileValidationErrors(Vec<ProfileValidationError>);

impl ProfileValidationErrors {
    pub fn errors(&self) -> &[ProfileValidationError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<ProfileValidationError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProfileValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_first() {
            None => f.write_str("profile validation failed"),
            Some((first, [])) => write!(f, "{first}"),
            Some((first, rest)) => write!(f, "{first} (and {} more errors)", rest.len()),
        }
    }
}

impl std::error::Error for ProfileValidationErrors {}

impl IntoIterator for ProfileValidationErrors {
    type Item = ProfileValidationError;
    type IntoIter = std::vec::IntoIter<ProfileValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Check `event` against one profile.
///
/// Unsupported profiles fail with [`Error::UnsupportedProfile`]. Profiles
/// that are neither implemented nor known to be unsupported are accepted
/// without checks.
pub fn validate_single_profile<T: ProfileTarget + ?Sized>(
    event: &T,
    profile: &str,
) -> Result<Vec<ProfileValidationError>> {
    if is_not_implemented(profile) {
        return Err(Error::UnsupportedProfile(profile.to_string()));
    }

    let Some(reqs) = requirements(profile) else {
        tracing::debug!(profile, "unknown profile, nothing to check");
        return Ok(Vec::new());
    };

    let errors: Vec<_> = reqs
        .required
        .iter()
        .filter(|field| !event.has_field(field))
        .map(|field| ProfileValidationError::new(profile, *field))
        .collect();
    tracing::debug!(profile, missing = errors.len(), "validated profile");
    Ok(errors)
}

/// Validate `event` against `profiles`, or against its declared
/// `metadata.profiles` when `profiles` is `None`.
///
/// Errors from all profiles are collected in order. With `raise_on_error`
/// a non-empty collection is returned as [`Error::ProfileValidation`];
/// otherwise it is returned as `Ok`. An unsupported profile stops the call
/// with [`Error::UnsupportedProfile`] in either mode.
pub fn validate_profiles<T: ProfileTarget + ?Sized>(
    event: &T,
    profiles: Option<&[&str]>,
    raise_on_error: bool,
) -> Result<Vec<ProfileValidationError>> {
    let declared;
    let profiles: Vec<&str> = match profiles {
        Some(explicit) => explicit.to_vec(),
        None => {
            declared = event.declared_profiles();
            declared.iter().map(String::as_str).collect()
        }
    };

    let mut errors = Vec::new();
    for profile in profiles {
        errors.extend(validate_single_profile(event, profile)?);
    }

    if raise_on_error && !errors.is_empty() {
        return Err(ProfileValidationErrors(errors).into());
    }
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A minimal event: only the attributes the profiles look at.
    #[derive(Default)]
    struct Event {
        cloud: Option<Vec<String>>,
        profiles: Option<Vec<String>>,
    }

    impl ProfileTarget for Event {
        fn has_field(&self, field: &str) -> bool {
            match field {
                "cloud" => self.cloud.is_some(),
                _ => false,
            }
        }

        fn declared_profiles(&self) -> Vec<String> {
            self.profiles.clone().unwrap_or_default()
        }
    }

    fn declaring(profiles: &[&str]) -> Event {
        Event {
            profiles: Some(profiles.iter().map(|p| p.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn missing_cloud_yields_one_error() {
        let errors = validate_single_profile(&Event::default(), "cloud").unwrap();
        assert_eq!(errors, vec![ProfileValidationError::new("cloud", "cloud")]);
        assert_eq!(errors[0].to_string(), "[cloud] cloud: required");
    }

    #[test]
    fn empty_value_counts_as_present() {
        let event = Event {
            cloud: Some(Vec::new()),
            ..Default::default()
        };
        assert!(validate_single_profile(&event, "cloud").unwrap().is_empty());
    }

    #[test]
    fn datetime_never_fails() {
        assert!(validate_single_profile(&Event::default(), "datetime").unwrap().is_empty());
    }

    #[test]
    fn unsupported_profiles_are_fatal() {
        for profile in ["security_control", "host", "osint", "container", "incident"] {
            for raise_on_error in [true, false] {
                let err = validate_profiles(&Event::default(), Some(&[profile][..]), raise_on_error)
                    .unwrap_err();
                assert!(
                    matches!(err, Error::UnsupportedProfile(ref name) if name == profile),
                    "{profile}: {err}"
                );
            }
        }
    }

    #[test]
    fn unsupported_profile_aborts_before_later_profiles() {
        let err = validate_profiles(&Event::default(), Some(&["cloud", "host", "cloud"][..]), false)
            .unwrap_err();
        assert_eq!(err.to_string(), "profile 'host' is not yet supported");
    }

    #[test]
    fn unknown_profile_is_ignored() {
        let errors = validate_profiles(&Event::default(), Some(&["made_up_profile"][..]), true).unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn declared_profiles_are_used_by_default() {
        let event = declaring(&["cloud"]);

        let err = validate_profiles(&event, None, true).unwrap_err();
        let Error::ProfileValidation(errors) = err else {
            panic!("expected ProfileValidation, got {err:?}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "cloud");

        let errors = validate_profiles(&event, None, false).unwrap();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn no_declared_profiles_is_valid() {
        assert!(validate_profiles(&Event::default(), None, true).unwrap().is_empty());
    }

    #[test]
    fn explicit_profiles_override_declared() {
        let event = declaring(&["cloud"]);
        assert!(validate_profiles(&event, Some(&["datetime"][..]), true).unwrap().is_empty());
    }

    #[test]
    fn unknown_profile_contributes_nothing() {
        let errors =
            validate_profiles(&Event::default(), Some(&["cloud", "unknown_profile"][..]), false)
                .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].profile, "cloud");
    }

    #[test]
    fn aggregate_keeps_every_error_and_reports_count() {
        let err = validate_profiles(&Event::default(), Some(&["cloud", "cloud", "cloud"][..]), true)
            .unwrap_err();
        assert_eq!(err.to_string(), "[cloud] cloud: required (and 2 more errors)");
        let Error::ProfileValidation(errors) = err else {
            panic!("expected ProfileValidation");
        };
        assert_eq!(errors.into_errors().len(), 3);
    }

    #[test]
    fn single_error_display_has_no_suffix() {
        let err = validate_profiles(&Event::default(), Some(&["cloud"][..]), true).unwrap_err();
        assert_eq!(err.to_string(), "[cloud] cloud: required");
    }

    #[test]
    fn custom_message() {
        let e = ProfileValidationError::with_message("cloud", "cloud.provider", "must not be empty");
        assert_eq!(e.to_string(), "[cloud] cloud.provider: must not be empty");
    }

    #[test]
    fn json_documents_validate() {
        let doc = json!({
            "metadata": {"profiles": ["cloud", "datetime"]},
            "cloud": null
        });
        assert_eq!(doc.declared_profiles(), vec!["cloud", "datetime"]);
        let errors = validate_profiles(&doc, None, false).unwrap();
        assert_eq!(errors, vec![ProfileValidationError::new("cloud", "cloud")]);

        let doc = json!({"cloud": {"provider": "AWS"}});
        assert!(validate_profiles(&doc, Some(&["cloud"][..]), true).unwrap().is_empty());
        assert!(json!({}).declared_profiles().is_empty());
    }
}
