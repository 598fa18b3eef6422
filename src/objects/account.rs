//! Identity objects: accounts, users, groups, organizations and LDAP people.

use serde::{Deserialize, Serialize};

use crate::macros::ocsf_enum;
use crate::objects::GeoLocation;

ocsf_enum! {
    /// The normalized account type identifier.
    #[derive(Default)]
    pub enum AccountTypeId {
        #[default]
        Unknown = 0 => "Unknown",
        LdapAccount = 1 => "LDAP Account",
        WindowsAccount = 2 => "Windows Account",
        AwsIamUser = 3 => "AWS IAM User",
        AwsIamRole = 4 => "AWS IAM Role",
        GcpAccount = 5 => "GCP Account",
        AzureAdAccount = 6 => "Azure AD Account",
        MacOsAccount = 7 => "Mac OS Account",
        AppleAccount = 8 => "Apple Account",
        LinuxAccount = 9 => "Linux Account",
        AwsAccount = 10 => "AWS Account",
        Other = 99 => "Other",
    }
}

/// Details about the account that initiated or performed an activity, e.g.
/// an AWS account or a GCP project account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The name of the account (e.g. GCP Account Name).
    pub name: String,

    /// The account type, normalized to the caption of `type_id`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    pub type_id: AccountTypeId,

    /// The unique identifier of the account (e.g. AWS Account ID).
    pub uid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// A group of users or resources, e.g. an Active Directory group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Organization and org unit relevant to the event or object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ou_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ou_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Additional LDAP attributes describing a person.
///
/// `manager` is not modeled: it would make `User` and `LdapPerson` mutually
/// recursive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LdapPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_cn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

/// A user account or person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub account: Account,

    /// An alternate identifier, e.g. a Windows SID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid_alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_person: Option<LdapPerson>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Organization>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// OCSF user type: 0 Unknown, 1 User, 2 Admin, 3 System, 99 Other.
    pub type_id: i64,

    pub uid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_uid: Option<String>,
}
