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

use crate::oss::error::ValidationErr;
use crate::oss::utils::{get_default_text, get_option_text, get_text, write_xml_tag};
use xmltree::Element;

#[derive(PartialEq, Clone, Debug, Default)]
/// Inventory task configuration of a bucket
pub struct InventoryConfig {
    pub id: String,
    pub enabled: bool,
    /// `All` or `Current`.
    pub included_object_versions: String,
    pub prefix: Option<String>,
    /// `Daily` or `Weekly`.
    pub frequency: String,
    pub destination: InventoryDestination,
    pub optional_fields: Vec<String>,
}

#[derive(PartialEq, Clone, Debug, Default)]
pub struct InventoryDestination {
    /// `CSV` is the only format the service currently emits.
    pub format: String,
    pub account_id: String,
    pub role_arn: String,
    pub bucket: String,
    pub prefix: Option<String>,
}

impl InventoryConfig {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<InventoryConfiguration>");
        write_xml_tag(&mut data, "Id", &self.id);
        write_xml_tag(&mut data, "IsEnabled", &self.enabled.to_string());

        if let Some(prefix) = &self.prefix {
            data.push_str("<Filter>");
            write_xml_tag(&mut data, "Prefix", prefix);
            data.push_str("</Filter>");
        }

        data.push_str("<Destination><OSSBucketDestination>");
        write_xml_tag(&mut data, "Format", &self.destination.format);
        write_xml_tag(&mut data, "AccountId", &self.destination.account_id);
        write_xml_tag(&mut data, "RoleArn", &self.destination.role_arn);
        write_xml_tag(
            &mut data,
            "Bucket",
            &format!("acs:oss:::{}", self.destination.bucket),
        );
        if let Some(prefix) = &self.destination.prefix {
            write_xml_tag(&mut data, "Prefix", prefix);
        }
        data.push_str("</OSSBucketDestination></Destination>");

        data.push_str("<Schedule>");
        write_xml_tag(&mut data, "Frequency", &self.frequency);
        data.push_str("</Schedule>");

        write_xml_tag(
            &mut data,
            "IncludedObjectVersions",
            &self.included_object_versions,
        );

        if !self.optional_fields.is_empty() {
            data.push_str("<OptionalFields>");
            for field in &self.optional_fields {
                write_xml_tag(&mut data, "Field", field);
            }
            data.push_str("</OptionalFields>");
        }

        data.push_str("</InventoryConfiguration>");
        data
    }

    pub fn from_xml(root: &Element) -> Result<InventoryConfig, ValidationErr> {
        let prefix = root
            .get_child("Filter")
            .and_then(|v| get_option_text(v, "Prefix"));

        let destination = root
            .get_child("Destination")
            .and_then(|v| v.get_child("OSSBucketDestination"))
            .ok_or(ValidationErr::XmlError(String::from(
                "<OSSBucketDestination> tag not found",
            )))?;
        let bucket = get_text(destination, "Bucket")?;
        let destination = InventoryDestination {
            format: get_default_text(destination, "Format"),
            account_id: get_default_text(destination, "AccountId"),
            role_arn: get_default_text(destination, "RoleArn"),
            bucket: bucket
                .strip_prefix("acs:oss:::")
                .map(|v| v.to_string())
                .unwrap_or(bucket),
            prefix: get_option_text(destination, "Prefix"),
        };

        let frequency = root
            .get_child("Schedule")
            .map(|v| get_default_text(v, "Frequency"))
            .unwrap_or_default();

        let mut optional_fields = Vec::new();
        if let Some(fields) = root.get_child("OptionalFields") {
            for field in fields.children.iter().filter_map(|c| c.as_element()) {
                if field.name == "Field" {
                    optional_fields.push(field.get_text().unwrap_or_default().to_string());
                }
            }
        }

        Ok(InventoryConfig {
            id: get_text(root, "Id")?,
            enabled: get_default_text(root, "IsEnabled") == "true",
            included_object_versions: get_default_text(root, "IncludedObjectVersions"),
            prefix,
            frequency,
            destination,
            optional_fields,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.id.is_empty() {
            return Err(ValidationErr::InvalidInventoryConfig(String::from(
                "inventory id cannot be empty",
            )));
        }
        if self.destination.bucket.is_empty() {
            return Err(ValidationErr::InvalidInventoryConfig(String::from(
                "destination bucket cannot be empty",
            )));
        }
        if self.frequency != "Daily" && self.frequency != "Weekly" {
            return Err(ValidationErr::InvalidInventoryConfig(format!(
                "unsupported schedule frequency {}",
                self.frequency
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Buf, Bytes};

    fn example_config() -> InventoryConfig {
        InventoryConfig {
            id: String::from("report1"),
            enabled: true,
            included_object_versions: String::from("All"),
            prefix: Some(String::from("prefix/")),
            frequency: String::from("Daily"),
            destination: InventoryDestination {
                format: String::from("CSV"),
                account_id: String::from("1000000000000000"),
                role_arn: String::from("acs:ram::1000000000000000:role/AliyunOSSRole"),
                bucket: String::from("dest-bucket"),
                prefix: Some(String::from("inventory/")),
            },
            optional_fields: vec![String::from("Size"), String::from("ETag")],
        }
    }

    #[test]
    fn test_inventory_xml_roundtrip() {
        let config = example_config();
        config.validate().unwrap();
        let xml = config.to_xml();
        assert!(xml.contains("<Bucket>acs:oss:::dest-bucket</Bucket>"));
        let root = Element::parse(Bytes::from(xml).reader()).unwrap();
        assert_eq!(InventoryConfig::from_xml(&root).unwrap(), config);
    }

    #[test]
    fn test_invalid_frequency_is_rejected() {
        let mut config = example_config();
        config.frequency = String::from("Hourly");
        assert!(config.validate().is_err());
    }
}
