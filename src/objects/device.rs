//! Devices and the objects that describe them: operating system, hardware,
//! network interfaces and geolocation.

use serde::{Deserialize, Serialize};

use crate::events::RiskLevelId;
use crate::macros::ocsf_enum;
use crate::objects::{Group, Image, Organization};

ocsf_enum! {
    /// The device type.
    #[derive(Default)]
    pub enum DeviceTypeId {
        #[default]
        Unknown = 0 => "Unknown",
        Server = 1 => "Server",
        Desktop = 2 => "Desktop",
        Laptop = 3 => "Laptop",
        Tablet = 4 => "Tablet",
        Mobile = 5 => "Mobile",
        Virtual = 6 => "Virtual",
        Iot = 7 => "IOT",
        Browser = 8 => "Browser",
        Firewall = 9 => "Firewall",
        Switch = 10 => "Switch",
        Hub = 11 => "Hub",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    #[derive(Default)]
    pub enum NetworkInterfaceTypeId {
        #[default]
        Unknown = 0 => "Unknown",
        Wired = 1 => "Wired",
        Wireless = 2 => "Wireless",
        Mobile = 3 => "Mobile",
        Tunnel = 4 => "Tunnel",
        Other = 99 => "Other",
    }
}

ocsf_enum! {
    /// Operating system family. Ids are grouped by hundreds per vendor.
    #[derive(Default)]
    pub enum OperatingSystemTypeId {
        #[default]
        Unknown = 0 => "Unknown",
        Other = 99 => "Other",
        Windows = 100 => "Windows",
        WindowsMobile = 101 => "Windows Mobile",
        Linux = 200 => "Linux",
        Android = 201 => "Android",
        MacOs = 300 => "macOS",
        Ios = 301 => "iOS",
        IpadOs = 302 => "iPadOS",
        Solaris = 400 => "Solaris",
        Aix = 401 => "AIX",
        HpUx = 402 => "HP-UX",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    /// `[longitude, latitude]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_on_premises: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_bits: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_ver: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpe_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub type_id: OperatingSystemTypeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceHardwareInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bios_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bios_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bios_ver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_bits: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard_info: Option<String>,
    /// Clock speed in MHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_type: Option<String>,
    /// Total RAM in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub hostname: String,
    pub ip: String,
    pub mac: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_prefix: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub type_id: NetworkInterfaceTypeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// An addressable device, computer system or host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_compliant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hw_info: Option<DeviceHardwareInfo>,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei: Option<String>,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterface>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<OperatingSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level_id: Option<RiskLevelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trusted: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub type_id: DeviceTypeId,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_uid: Option<String>,
}
