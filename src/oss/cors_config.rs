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
use crate::oss::utils::{get_option_text, write_xml_tag};
use xmltree::Element;

#[derive(PartialEq, Clone, Debug, Default)]
/// Cross-origin resource sharing configuration of a bucket
pub struct CorsConfig {
    pub rules: Vec<CorsRule>,
    /// Whether the `Vary: Origin` header is returned.
    pub response_vary: Option<bool>,
}

#[derive(PartialEq, Clone, Debug, Default)]
pub struct CorsRule {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age_seconds: Option<u32>,
}

impl CorsConfig {
    pub fn to_xml(&self) -> String {
        let mut data = String::from("<CORSConfiguration>");
        for rule in &self.rules {
            data.push_str("<CORSRule>");
            for origin in &rule.allowed_origins {
                write_xml_tag(&mut data, "AllowedOrigin", origin);
            }
            for method in &rule.allowed_methods {
                write_xml_tag(&mut data, "AllowedMethod", method);
            }
            for header in &rule.allowed_headers {
                write_xml_tag(&mut data, "AllowedHeader", header);
            }
            for header in &rule.expose_headers {
                write_xml_tag(&mut data, "ExposeHeader", header);
            }
            if let Some(v) = rule.max_age_seconds {
                write_xml_tag(&mut data, "MaxAgeSeconds", &v.to_string());
            }
            data.push_str("</CORSRule>");
        }
        if let Some(v) = self.response_vary {
            write_xml_tag(&mut data, "ResponseVary", &v.to_string());
        }
        data.push_str("</CORSConfiguration>");
        data
    }

    pub fn from_xml(root: &mut Element) -> Result<CorsConfig, ValidationErr> {
        let mut config = CorsConfig::default();

        while let Some(mut rule_elem) = root.take_child("CORSRule") {
            let mut rule = CorsRule::default();
            while let Some(v) = rule_elem.take_child("AllowedOrigin") {
                rule.allowed_origins
                    .push(v.get_text().unwrap_or_default().to_string());
            }
            while let Some(v) = rule_elem.take_child("AllowedMethod") {
                rule.allowed_methods
                    .push(v.get_text().unwrap_or_default().to_string());
            }
            while let Some(v) = rule_elem.take_child("AllowedHeader") {
                rule.allowed_headers
                    .push(v.get_text().unwrap_or_default().to_string());
            }
            while let Some(v) = rule_elem.take_child("ExposeHeader") {
                rule.expose_headers
                    .push(v.get_text().unwrap_or_default().to_string());
            }
            rule.max_age_seconds = get_option_text(&rule_elem, "MaxAgeSeconds")
                .map(|v| v.parse())
                .transpose()?;
            config.rules.push(rule);
        }

        config.response_vary = get_option_text(root, "ResponseVary")
            .map(|v| v.parse())
            .transpose()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        for rule in &self.rules {
            if rule.allowed_origins.is_empty() || rule.allowed_methods.is_empty() {
                return Err(ValidationErr::InvalidCorsRule);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Buf, Bytes};

    #[test]
    fn test_cors_xml_roundtrip() {
        let config = CorsConfig {
            rules: vec![CorsRule {
                allowed_origins: vec![String::from("https://www.example.com")],
                allowed_methods: vec![String::from("GET"), String::from("PUT")],
                allowed_headers: vec![String::from("*")],
                expose_headers: vec![String::from("x-oss-request-id")],
                max_age_seconds: Some(3600),
            }],
            response_vary: Some(false),
        };
        config.validate().unwrap();
        let xml = config.to_xml();
        let mut root = Element::parse(Bytes::from(xml).reader()).unwrap();
        assert_eq!(CorsConfig::from_xml(&mut root).unwrap(), config);
    }

    #[test]
    fn test_rule_requires_origin_and_method() {
        let config = CorsConfig {
            rules: vec![CorsRule {
                allowed_origins: vec![String::from("*")],
                ..Default::default()
            }],
            response_vary: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationErr::InvalidCorsRule)
        ));
    }
}
