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
/// Lifecycle configuration of a bucket
pub struct LifecycleConfig {
    pub rules: Vec<LifecycleRule>,
}

impl LifecycleConfig {
    pub fn from_xml(root: &mut Element) -> Result<LifecycleConfig, ValidationErr> {
        let mut config = LifecycleConfig { rules: Vec::new() };

        while let Some(rule) = root.take_child("Rule") {
            config.rules.push(LifecycleRule::from_xml(&rule)?);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        for rule in &self.rules {
            rule.validate()?;
        }

        Ok(())
    }

    pub fn empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<LifecycleConfiguration>");

        for rule in &self.rules {
            data.push_str("<Rule>");

            if !rule.id.is_empty() {
                write_xml_tag(&mut data, "ID", &rule.id);
            }

            write_xml_tag(&mut data, "Prefix", &rule.prefix);

            data.push_str("<Status>");
            if rule.status {
                data.push_str("Enabled");
            } else {
                data.push_str("Disabled");
            }
            data.push_str("</Status>");

            for (key, value) in &rule.tags {
                data.push_str("<Tag>");
                write_xml_tag(&mut data, "Key", key);
                write_xml_tag(&mut data, "Value", value);
                data.push_str("</Tag>");
            }

            let has_expiration = rule.expiration_days.is_some()
                || rule.expiration_created_before_date.is_some()
                || rule.expiration_expired_object_delete_marker.is_some();

            if has_expiration {
                data.push_str("<Expiration>");
                if let Some(days) = rule.expiration_days {
                    write_xml_tag(&mut data, "Days", &days.to_string());
                }
                if let Some(date) = &rule.expiration_created_before_date {
                    write_xml_tag(&mut data, "CreatedBeforeDate", date);
                }
                if rule.expiration_expired_object_delete_marker == Some(true) {
                    data.push_str("<ExpiredObjectDeleteMarker>true</ExpiredObjectDeleteMarker>");
                }
                data.push_str("</Expiration>");
            }

            let has_transition =
                rule.transition_days.is_some() || rule.transition_created_before_date.is_some();

            if has_transition {
                data.push_str("<Transition>");
                if let Some(days) = rule.transition_days {
                    write_xml_tag(&mut data, "Days", &days.to_string());
                }
                if let Some(date) = &rule.transition_created_before_date {
                    write_xml_tag(&mut data, "CreatedBeforeDate", date);
                }
                if let Some(storage_class) = &rule.transition_storage_class {
                    write_xml_tag(&mut data, "StorageClass", storage_class);
                }
                if let Some(is_access_time) = rule.transition_is_access_time {
                    write_xml_tag(&mut data, "IsAccessTime", &is_access_time.to_string());
                }
                data.push_str("</Transition>");
            }

            if let Some(days) = rule.abort_multipart_upload_days {
                data.push_str("<AbortMultipartUpload>");
                write_xml_tag(&mut data, "Days", &days.to_string());
                data.push_str("</AbortMultipartUpload>");
            }

            data.push_str("</Rule>");
        }

        data.push_str("</LifecycleConfiguration>");
        data
    }
}

#[derive(PartialEq, Clone, Debug, Default)]
pub struct LifecycleRule {
    pub id: String,
    pub prefix: String,
    pub status: bool,
    pub tags: Vec<(String, String)>,

    // Expiration
    pub expiration_days: Option<u32>,
    pub expiration_created_before_date: Option<String>,
    pub expiration_expired_object_delete_marker: Option<bool>,

    // Transition
    pub transition_days: Option<u32>,
    pub transition_created_before_date: Option<String>,
    pub transition_storage_class: Option<String>,
    pub transition_is_access_time: Option<bool>,

    // AbortMultipartUpload
    pub abort_multipart_upload_days: Option<u32>,
}

impl LifecycleRule {
    pub fn from_xml(rule: &Element) -> Result<LifecycleRule, ValidationErr> {
        let mut parsed = LifecycleRule {
            id: get_default_text(rule, "ID"),
            prefix: get_default_text(rule, "Prefix"),
            status: get_text(rule, "Status")? == "Enabled",
            ..Default::default()
        };

        for tag in rule.children.iter().filter_map(|c| c.as_element()) {
            if tag.name == "Tag" {
                parsed
                    .tags
                    .push((get_text(tag, "Key")?, get_default_text(tag, "Value")));
            }
        }

        if let Some(expiration) = rule.get_child("Expiration") {
            parsed.expiration_days = get_option_text(expiration, "Days")
                .map(|v| v.parse())
                .transpose()?;
            parsed.expiration_created_before_date =
                get_option_text(expiration, "CreatedBeforeDate");
            parsed.expiration_expired_object_delete_marker =
                get_option_text(expiration, "ExpiredObjectDeleteMarker")
                    .map(|v| v.parse())
                    .transpose()?;
        }

        if let Some(transition) = rule.get_child("Transition") {
            parsed.transition_days = get_option_text(transition, "Days")
                .map(|v| v.parse())
                .transpose()?;
            parsed.transition_created_before_date =
                get_option_text(transition, "CreatedBeforeDate");
            parsed.transition_storage_class = get_option_text(transition, "StorageClass");
            parsed.transition_is_access_time = get_option_text(transition, "IsAccessTime")
                .map(|v| v.parse())
                .transpose()?;
        }

        if let Some(abort) = rule.get_child("AbortMultipartUpload") {
            parsed.abort_multipart_upload_days = get_option_text(abort, "Days")
                .map(|v| v.parse())
                .transpose()?;
        }

        Ok(parsed)
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.id.len() > 255 {
            return Err(ValidationErr::InvalidLifecycleRuleId);
        }

        let has_action = self.expiration_days.is_some()
            || self.expiration_created_before_date.is_some()
            || self.expiration_expired_object_delete_marker.is_some()
            || self.transition_days.is_some()
            || self.transition_created_before_date.is_some()
            || self.transition_storage_class.is_some()
            || self.abort_multipart_upload_days.is_some();
        if !has_action {
            return Err(ValidationErr::MissingLifecycleAction);
        }

        if self.expiration_days.is_some() && self.expiration_created_before_date.is_some() {
            return Err(ValidationErr::InvalidDateAndDays(String::from("expiration")));
        }

        if self.transition_days.is_some() && self.transition_created_before_date.is_some() {
            return Err(ValidationErr::InvalidDateAndDays(String::from("transition")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Buf, Bytes};

    fn example_config() -> LifecycleConfig {
        LifecycleConfig {
            rules: vec![
                LifecycleRule {
                    id: String::from("expire-logs"),
                    prefix: String::from("logs/"),
                    status: true,
                    expiration_days: Some(365),
                    ..Default::default()
                },
                LifecycleRule {
                    id: String::from("tiering"),
                    prefix: String::from("archive/"),
                    status: true,
                    tags: vec![(String::from("team"), String::from("infra"))],
                    transition_days: Some(30),
                    transition_storage_class: Some(String::from("IA")),
                    abort_multipart_upload_days: Some(7),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_lifecycle_xml_roundtrip() {
        let config = example_config();
        config.validate().unwrap();
        let xml = config.to_xml();
        let mut root = Element::parse(Bytes::from(xml).reader()).unwrap();
        let parsed = LifecycleConfig::from_xml(&mut root).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_lifecycle_serialization() {
        let config = LifecycleConfig {
            rules: vec![LifecycleRule {
                id: String::from("rule1"),
                prefix: String::from("logs/"),
                status: true,
                expiration_days: Some(90),
                ..Default::default()
            }],
        };
        assert_eq!(
            config.to_xml(),
            "<LifecycleConfiguration><Rule><ID>rule1</ID><Prefix>logs/</Prefix>\
             <Status>Enabled</Status><Expiration><Days>90</Days></Expiration></Rule>\
             </LifecycleConfiguration>"
        );
    }

    #[test]
    fn test_rule_without_action_is_rejected() {
        let rule = LifecycleRule {
            id: String::from("noop"),
            prefix: String::from("tmp/"),
            status: true,
            ..Default::default()
        };
        assert!(matches!(
            rule.validate(),
            Err(ValidationErr::MissingLifecycleAction)
        ));
    }

    #[test]
    fn test_days_and_date_are_exclusive() {
        let rule = LifecycleRule {
            prefix: String::from("tmp/"),
            status: true,
            expiration_days: Some(30),
            expiration_created_before_date: Some(String::from("2024-01-01T00:00:00.000Z")),
            ..Default::default()
        };
        assert!(matches!(
            rule.validate(),
            Err(ValidationErr::InvalidDateAndDays(_))
        ));
    }
}
