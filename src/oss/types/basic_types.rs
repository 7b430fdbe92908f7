// Rust SDK for Alibaba Cloud-compatible Object Storage Service (OSS)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared data types used across request builders and responses.

use crate::oss::error::ValidationErr;
use crate::oss::utils::{
    UtcTime, from_iso8601utc, get_default_text, get_option_text, get_text, write_xml_tag,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Bucket or object owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

impl Owner {
    pub(crate) fn from_xml(element: &Element) -> Owner {
        Owner {
            id: get_default_text(element, "ID"),
            display_name: get_default_text(element, "DisplayName"),
        }
    }
}

/// Bucket entry of a [ListBuckets](crate::oss::builders::ListBuckets) response.
#[derive(Clone, Debug)]
pub struct Bucket {
    pub name: String,
    pub creation_date: Option<UtcTime>,
    pub location: String,
    pub extranet_endpoint: String,
    pub intranet_endpoint: String,
    pub storage_class: Option<StorageClass>,
    pub region: Option<String>,
}

impl Bucket {
    pub(crate) fn from_xml(element: &Element) -> Result<Bucket, ValidationErr> {
        let creation_date = match get_option_text(element, "CreationDate") {
            Some(v) => Some(from_iso8601utc(&v)?),
            None => None,
        };
        let storage_class = get_option_text(element, "StorageClass")
            .map(|v| v.parse::<StorageClass>())
            .transpose()?;
        Ok(Bucket {
            name: get_text(element, "Name")?,
            creation_date,
            location: get_default_text(element, "Location"),
            extranet_endpoint: get_default_text(element, "ExtranetEndpoint"),
            intranet_endpoint: get_default_text(element, "IntranetEndpoint"),
            storage_class,
            region: get_option_text(element, "Region"),
        })
    }
}

/// Object entry of a [ListObjects](crate::oss::builders::ListObjects) response.
#[derive(Clone, Debug, Default)]
pub struct ListEntry {
    pub key: String,
    pub last_modified: Option<UtcTime>,
    pub etag: Option<String>,
    pub size: Option<u64>,
    pub storage_class: Option<String>,
    pub owner: Option<Owner>,
}

/// A completed part of a multipart upload; also the unit recorded in upload
/// checkpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub number: u16,
    pub etag: String,
}

/// Part entry of a [ListParts](crate::oss::builders::ListParts) response.
#[derive(Clone, Debug)]
pub struct PartInfo {
    pub number: u16,
    pub etag: String,
    pub size: u64,
    pub last_modified: Option<UtcTime>,
}

/// Upload entry of a
/// [ListMultipartUploads](crate::oss::builders::ListMultipartUploads) response.
#[derive(Clone, Debug)]
pub struct MultipartUpload {
    pub key: String,
    pub upload_id: String,
    pub initiated: Option<UtcTime>,
}

/// Storage class of a bucket or object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageClass {
    #[default]
    Standard,
    InfrequentAccess,
    Archive,
    ColdArchive,
    DeepColdArchive,
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageClass::Standard => write!(f, "Standard"),
            StorageClass::InfrequentAccess => write!(f, "IA"),
            StorageClass::Archive => write!(f, "Archive"),
            StorageClass::ColdArchive => write!(f, "ColdArchive"),
            StorageClass::DeepColdArchive => write!(f, "DeepColdArchive"),
        }
    }
}

impl FromStr for StorageClass {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        match s {
            "Standard" => Ok(StorageClass::Standard),
            "IA" => Ok(StorageClass::InfrequentAccess),
            "Archive" => Ok(StorageClass::Archive),
            "ColdArchive" => Ok(StorageClass::ColdArchive),
            "DeepColdArchive" => Ok(StorageClass::DeepColdArchive),
            v => Err(ValidationErr::XmlError(format!(
                "unknown storage class {v}"
            ))),
        }
    }
}

/// Canned access control list for buckets and objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acl {
    /// Object-only value: fall back to the bucket ACL.
    Default,
    Private,
    PublicRead,
    PublicReadWrite,
}

impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acl::Default => write!(f, "default"),
            Acl::Private => write!(f, "private"),
            Acl::PublicRead => write!(f, "public-read"),
            Acl::PublicReadWrite => write!(f, "public-read-write"),
        }
    }
}

/// Directive controlling metadata handling of a copy operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataDirective {
    Copy,
    Replace,
}

impl fmt::Display for MetadataDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataDirective::Copy => write!(f, "COPY"),
            MetadataDirective::Replace => write!(f, "REPLACE"),
        }
    }
}

/// State of a bucket WORM (write-once-read-many) policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WormState {
    InProgress,
    Locked,
}

impl FromStr for WormState {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        match s {
            "InProgress" => Ok(WormState::InProgress),
            "Locked" => Ok(WormState::Locked),
            v => Err(ValidationErr::XmlError(format!("unknown WORM state {v}"))),
        }
    }
}

impl fmt::Display for WormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WormState::InProgress => write!(f, "InProgress"),
            WormState::Locked => write!(f, "Locked"),
        }
    }
}

/// Key (and optional version) selected for batch deletion.
#[derive(Clone, Debug)]
pub struct ObjectToDelete {
    pub key: String,
    pub version_id: Option<String>,
}

impl From<&str> for ObjectToDelete {
    fn from(key: &str) -> Self {
        ObjectToDelete {
            key: key.to_string(),
            version_id: None,
        }
    }
}

impl From<(&str, &str)> for ObjectToDelete {
    fn from((key, version_id): (&str, &str)) -> Self {
        ObjectToDelete {
            key: key.to_string(),
            version_id: Some(version_id.to_string()),
        }
    }
}

/// Entry of a [DeleteObjects](crate::oss::builders::DeleteObjects) response.
#[derive(Clone, Debug)]
pub struct DeletedObject {
    pub key: String,
    pub version_id: Option<String>,
    pub delete_marker: bool,
    pub delete_marker_version_id: Option<String>,
}

/// Referer access rules of a bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefererConfig {
    pub allow_empty_referer: bool,
    pub allow_truncate_query_string: Option<bool>,
    pub referer_list: Vec<String>,
    pub referer_blacklist: Vec<String>,
}

impl RefererConfig {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<RefererConfiguration>");
        write_xml_tag(
            &mut data,
            "AllowEmptyReferer",
            &self.allow_empty_referer.to_string(),
        );
        if let Some(v) = self.allow_truncate_query_string {
            write_xml_tag(&mut data, "AllowTruncateQueryString", &v.to_string());
        }
        data.push_str("<RefererList>");
        for referer in &self.referer_list {
            write_xml_tag(&mut data, "Referer", referer);
        }
        data.push_str("</RefererList>");
        if !self.referer_blacklist.is_empty() {
            data.push_str("<RefererBlacklist>");
            for referer in &self.referer_blacklist {
                write_xml_tag(&mut data, "Referer", referer);
            }
            data.push_str("</RefererBlacklist>");
        }
        data.push_str("</RefererConfiguration>");
        data
    }

    pub fn from_xml(root: &mut Element) -> Result<RefererConfig, ValidationErr> {
        let allow_empty_referer = get_default_text(root, "AllowEmptyReferer") == "true";
        let allow_truncate_query_string = get_option_text(root, "AllowTruncateQueryString")
            .map(|v| v.parse())
            .transpose()?;

        let mut referer_list = Vec::new();
        if let Some(list) = root.get_mut_child("RefererList") {
            while let Some(v) = list.take_child("Referer") {
                referer_list.push(v.get_text().unwrap_or_default().to_string());
            }
        }

        let mut referer_blacklist = Vec::new();
        if let Some(list) = root.get_mut_child("RefererBlacklist") {
            while let Some(v) = list.take_child("Referer") {
                referer_blacklist.push(v.get_text().unwrap_or_default().to_string());
            }
        }

        Ok(RefererConfig {
            allow_empty_referer,
            allow_truncate_query_string,
            referer_list,
            referer_blacklist,
        })
    }
}

/// Access log delivery target of a bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggingEnabled {
    pub target_bucket: String,
    pub target_prefix: String,
}

impl LoggingEnabled {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<BucketLoggingStatus><LoggingEnabled>");
        write_xml_tag(&mut data, "TargetBucket", &self.target_bucket);
        write_xml_tag(&mut data, "TargetPrefix", &self.target_prefix);
        data.push_str("</LoggingEnabled></BucketLoggingStatus>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<Option<LoggingEnabled>, ValidationErr> {
        match root.get_child("LoggingEnabled") {
            Some(v) => Ok(Some(LoggingEnabled {
                target_bucket: get_text(v, "TargetBucket")?,
                target_prefix: get_default_text(v, "TargetPrefix"),
            })),
            None => Ok(None),
        }
    }
}

/// Default server-side encryption rule of a bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SseRule {
    /// `KMS`, `AES256` or `SM4`.
    pub sse_algorithm: String,
    pub kms_master_key_id: Option<String>,
    pub kms_data_encryption: Option<String>,
}

impl SseRule {
    pub fn to_xml(&self) -> String {
        let mut data =
            String::from("<ServerSideEncryptionRule><ApplyServerSideEncryptionByDefault>");
        write_xml_tag(&mut data, "SSEAlgorithm", &self.sse_algorithm);
        if let Some(v) = &self.kms_master_key_id {
            write_xml_tag(&mut data, "KMSMasterKeyID", v);
        }
        if let Some(v) = &self.kms_data_encryption {
            write_xml_tag(&mut data, "KMSDataEncryption", v);
        }
        data.push_str("</ApplyServerSideEncryptionByDefault></ServerSideEncryptionRule>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<SseRule, ValidationErr> {
        let by_default = root
            .get_child("ApplyServerSideEncryptionByDefault")
            .ok_or(ValidationErr::XmlError(String::from(
                "<ApplyServerSideEncryptionByDefault> tag not found",
            )))?;
        Ok(SseRule {
            sse_algorithm: get_text(by_default, "SSEAlgorithm")?,
            kms_master_key_id: get_option_text(by_default, "KMSMasterKeyID"),
            kms_data_encryption: get_option_text(by_default, "KMSDataEncryption"),
        })
    }
}

/// Network origin restriction of an access point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NetworkOrigin {
    #[default]
    Internet,
    Vpc,
}

impl fmt::Display for NetworkOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkOrigin::Internet => write!(f, "internet"),
            NetworkOrigin::Vpc => write!(f, "vpc"),
        }
    }
}

impl FromStr for NetworkOrigin {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        match s {
            "internet" => Ok(NetworkOrigin::Internet),
            "vpc" => Ok(NetworkOrigin::Vpc),
            v => Err(ValidationErr::XmlError(format!(
                "unknown network origin {v}"
            ))),
        }
    }
}

/// VPC restriction of an access point with `vpc` network origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VpcConfiguration {
    pub vpc_id: String,
}

/// Access point entry of a
/// [ListAccessPoints](crate::oss::builders::ListAccessPoints) response.
#[derive(Clone, Debug)]
pub struct AccessPointSummary {
    pub access_point_name: String,
    pub bucket: String,
    pub network_origin: NetworkOrigin,
    pub vpc_id: Option<String>,
    pub alias: Option<String>,
    pub status: String,
}

impl AccessPointSummary {
    pub(crate) fn from_xml(element: &Element) -> Result<AccessPointSummary, ValidationErr> {
        let vpc_id = element
            .get_child("Vpc")
            .and_then(|v| get_option_text(v, "VpcId"));
        Ok(AccessPointSummary {
            access_point_name: get_text(element, "AccessPointName")?,
            bucket: get_default_text(element, "Bucket"),
            network_origin: get_default_text(element, "NetworkOrigin")
                .parse()
                .unwrap_or_default(),
            vpc_id,
            alias: get_option_text(element, "Alias"),
            status: get_default_text(element, "Status"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Buf;

    #[test]
    fn test_referer_config_xml_roundtrip() {
        let config = RefererConfig {
            allow_empty_referer: false,
            allow_truncate_query_string: Some(true),
            referer_list: vec![
                "http://www.example.com".to_string(),
                "https://*.example.net".to_string(),
            ],
            referer_blacklist: vec!["http://bad.example.org".to_string()],
        };
        let xml = config.to_xml();
        let mut root = Element::parse(bytes::Bytes::from(xml).reader()).unwrap();
        let parsed = RefererConfig::from_xml(&mut root).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_logging_enabled_xml() {
        let config = LoggingEnabled {
            target_bucket: "log-bucket".to_string(),
            target_prefix: "access/".to_string(),
        };
        let xml = config.to_xml();
        assert_eq!(
            xml,
            "<BucketLoggingStatus><LoggingEnabled><TargetBucket>log-bucket</TargetBucket><TargetPrefix>access/</TargetPrefix></LoggingEnabled></BucketLoggingStatus>"
        );
        let root = Element::parse(bytes::Bytes::from(xml).reader()).unwrap();
        let parsed = LoggingEnabled::from_xml(&root).unwrap().unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_sse_rule_xml_roundtrip() {
        let rule = SseRule {
            sse_algorithm: "KMS".to_string(),
            kms_master_key_id: Some("9468da86-3509-4f8d-a61e-6eab1eac****".to_string()),
            kms_data_encryption: Some("SM4".to_string()),
        };
        let xml = rule.to_xml();
        let root = Element::parse(bytes::Bytes::from(xml).reader()).unwrap();
        assert_eq!(SseRule::from_xml(&root).unwrap(), rule);
    }

    #[test]
    fn test_storage_class_roundtrip() {
        for sc in [
            StorageClass::Standard,
            StorageClass::InfrequentAccess,
            StorageClass::Archive,
            StorageClass::ColdArchive,
            StorageClass::DeepColdArchive,
        ] {
            assert_eq!(sc.to_string().parse::<StorageClass>().unwrap(), sc);
        }
        assert!("Hot".parse::<StorageClass>().is_err());
    }
}
