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
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::utils::{match_hostname, urlencode_object_key};
use hyper::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // oss-cn-hangzhou.aliyuncs.com, oss-cn-hangzhou-internal.aliyuncs.com,
    // oss-us-west-1.aliyuncs.com, ...
    static ref OSS_ENDPOINT_REGEX: Regex =
        Regex::new(r"^oss-([a-z]+-[a-z0-9-]+?)(-internal)?\.aliyuncs\.com$").unwrap();
    static ref OSS_ACCELERATE_REGEX: Regex =
        Regex::new(r"^oss-accelerate(-overseas)?\.aliyuncs\.com$").unwrap();
    static ref IPV4_REGEX: Regex = Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$"
    )
    .unwrap();
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            f.write_str(&format!("{}:{}", self.host, self.port))?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Checks whether the host is a first-party OSS endpoint.
pub fn match_oss_endpoint(value: &str) -> bool {
    let host = value.to_lowercase();
    OSS_ENDPOINT_REGEX.is_match(&host) || OSS_ACCELERATE_REGEX.is_match(&host)
}

/// Extracts the region id from an OSS endpoint host, when it encodes one.
///
/// `oss-cn-hangzhou.aliyuncs.com` and `oss-cn-hangzhou-internal.aliyuncs.com`
/// both yield `cn-hangzhou`; accelerate endpoints and custom domains yield
/// nothing.
pub fn region_from_endpoint(value: &str) -> Option<String> {
    let host = value.to_lowercase();
    OSS_ENDPOINT_REGEX
        .captures(&host)
        .map(|caps| caps[1].to_string())
}

#[derive(Clone, Debug)]
/// Represents Base URL of an OSS endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Region the endpoint belongs to; derived from first-party endpoint
    /// hosts, empty for custom domains until configured explicitly.
    pub region: String,
    /// Whether the bucket is addressed as a subdomain of the endpoint.
    /// First-party endpoints and custom domains use virtual-hosted style;
    /// IP endpoints fall back to path style.
    pub virtual_style: bool,
    oss_endpoint: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "oss-cn-hangzhou.aliyuncs.com".to_string(),
            port: 0,
            region: "cn-hangzhou".to_string(),
            virtual_style: true,
            oss_endpoint: true,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Enables use of [`str::parse`] method to create a [`BaseUrl`].
    ///
    /// # Examples
    ///
    /// ```
    /// use oss::oss::http::BaseUrl;
    /// use std::str::FromStr;
    ///
    /// // Get base URL from a region endpoint
    /// let base_url = "oss-cn-hangzhou.aliyuncs.com".parse::<BaseUrl>().unwrap();
    /// let base_url = BaseUrl::from_str("oss-cn-hangzhou.aliyuncs.com").unwrap();
    /// assert_eq!(base_url.region, "cn-hangzhou");
    /// // Get base URL from host:port
    /// let base_url: BaseUrl = "http://192.168.124.63:9000".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let host = match url.host() {
            Some(h) => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let is_ip = IPV4_REGEX.is_match(host);
        if !is_ip && !match_hostname(host) {
            return Err(ValidationErr::InvalidBaseUrl(format!(
                "invalid hostname {host}"
            )));
        }

        let oss_endpoint = match_oss_endpoint(host);
        let region = region_from_endpoint(host).unwrap_or_default();

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            region,
            virtual_style: !is_ip,
            oss_endpoint,
        })
    }
}

impl BaseUrl {
    /// Checks base URL is a first-party OSS endpoint
    pub fn is_oss_endpoint(&self) -> bool {
        self.oss_endpoint
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds URL from base URL for given parameters of an operation
    pub fn build_url(
        &self,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        let bucket: &str = match bucket_name {
            None => return Ok(url),
            Some(v) => v,
        };

        if object_name.is_none() && bucket.is_empty() {
            return Err(ValidationErr::UrlBuildError(
                "bucket name must be provided for bucket operations".into(),
            ));
        }

        let mut path = String::new();
        if self.virtual_style {
            url.host = format!("{}.{}", bucket, url.host);
        } else {
            path.push('/');
            path.push_str(bucket);
        }

        if let Some(v) = object_name {
            path.push('/');
            path.push_str(&urlencode_object_key(v));
        }

        if path.is_empty() {
            path.push('/');
        }
        url.path = path;

        Ok(url)
    }
}
