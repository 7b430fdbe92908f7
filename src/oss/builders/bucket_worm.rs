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

//! Builders for the bucket WORM (write-once-read-many) retention policy APIs.
//!
//! A policy starts `InProgress` via `InitiateBucketWorm`, can be dropped with
//! `AbortBucketWorm` while in progress, becomes immutable with
//! `CompleteBucketWorm`, and a locked policy can only grow its retention
//! period via `ExtendBucketWorm`.

use crate::oss::client::OssClient;
use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    AbortBucketWormResponse, CompleteBucketWormResponse, ExtendBucketWormResponse,
    GetBucketWormResponse, InitiateBucketWormResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::CONTENT_TYPE;
use crate::oss::types::{OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, write_xml_tag};
use bytes::Bytes;
use hyper::http::Method;

const MAX_WORM_RETENTION_DAYS: u32 = 25550; // 70 years

fn check_retention_days(days: u32) -> Result<(), ValidationErr> {
    if days == 0 || days > MAX_WORM_RETENTION_DAYS {
        return Err(ValidationErr::InvalidWormRetention);
    }
    Ok(())
}

/// Argument builder for the `InitiateBucketWorm` API.
///
/// The created policy stays `InProgress` for 24 hours; the returned WORM id
/// identifies it in the complete/extend/abort calls.
#[derive(Clone, Debug)]
pub struct InitiateBucketWorm {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    retention_period_days: u32,
}

impl InitiateBucketWorm {
    pub fn new(client: OssClient, bucket: &str, retention_period_days: u32) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            retention_period_days,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for InitiateBucketWorm {
    type OssResponse = InitiateBucketWormResponse;
}

impl ToOssRequest for InitiateBucketWorm {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_retention_days(self.retention_period_days)?;

        let mut data = String::from("<InitiateWormConfiguration>");
        write_xml_tag(
            &mut data,
            "RetentionPeriodInDays",
            &self.retention_period_days.to_string(),
        );
        data.push_str("</InitiateWormConfiguration>");

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, "application/xml");

        Ok(OssRequest::new(self.client, Method::POST)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "worm"))
            .headers(headers)
            .body(Some(SegmentedBytes::from(Bytes::from(data)))))
    }
}

/// Argument builder for the `AbortBucketWorm` API.
///
/// Only an unlocked (`InProgress`) policy can be aborted.
#[derive(Clone, Debug)]
pub struct AbortBucketWorm {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl AbortBucketWorm {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for AbortBucketWorm {
    type OssResponse = AbortBucketWormResponse;
}

impl ToOssRequest for AbortBucketWorm {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "worm"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `CompleteBucketWorm` API, locking a policy.
#[derive(Clone, Debug)]
pub struct CompleteBucketWorm {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    worm_id: String,
}

impl CompleteBucketWorm {
    pub fn new(client: OssClient, bucket: &str, worm_id: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            worm_id: worm_id.to_string(),
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for CompleteBucketWorm {
    type OssResponse = CompleteBucketWormResponse;
}

impl ToOssRequest for CompleteBucketWorm {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if self.worm_id.is_empty() {
            return Err(ValidationErr::XmlError(String::from(
                "WORM id cannot be empty",
            )));
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("wormId", self.worm_id);

        Ok(OssRequest::new(self.client, Method::POST)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `ExtendBucketWorm` API.
#[derive(Clone, Debug)]
pub struct ExtendBucketWorm {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    worm_id: String,
    retention_period_days: u32,
}

impl ExtendBucketWorm {
    pub fn new(
        client: OssClient,
        bucket: &str,
        worm_id: &str,
        retention_period_days: u32,
    ) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            worm_id: worm_id.to_string(),
            retention_period_days,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for ExtendBucketWorm {
    type OssResponse = ExtendBucketWormResponse;
}

impl ToOssRequest for ExtendBucketWorm {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_retention_days(self.retention_period_days)?;
        if self.worm_id.is_empty() {
            return Err(ValidationErr::XmlError(String::from(
                "WORM id cannot be empty",
            )));
        }

        let mut data = String::from("<ExtendWormConfiguration>");
        write_xml_tag(
            &mut data,
            "RetentionPeriodInDays",
            &self.retention_period_days.to_string(),
        );
        data.push_str("</ExtendWormConfiguration>");

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("wormExtend", "");
        query_params.add("wormId", self.worm_id);

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, "application/xml");

        Ok(OssRequest::new(self.client, Method::POST)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(headers)
            .body(Some(SegmentedBytes::from(Bytes::from(data)))))
    }
}

/// Argument builder for the `GetBucketWorm` API.
#[derive(Clone, Debug)]
pub struct GetBucketWorm {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl GetBucketWorm {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for GetBucketWorm {
    type OssResponse = GetBucketWormResponse;
}

impl ToOssRequest for GetBucketWorm {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "worm"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::creds::StaticProvider;
    use crate::oss::http::BaseUrl;

    fn test_client() -> OssClient {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        OssClient::new::<StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn test_initiate_worm_body() {
        let req = InitiateBucketWorm::new(test_client(), "examplebucket", 30)
            .to_oss_request()
            .unwrap();
        assert!(req.query_params.contains_key("worm"));
    }

    #[test]
    fn test_initiate_worm_rejects_zero_days() {
        assert!(
            InitiateBucketWorm::new(test_client(), "examplebucket", 0)
                .to_oss_request()
                .is_err()
        );
    }

    #[test]
    fn test_extend_worm_marshal() {
        let req = ExtendBucketWorm::new(test_client(), "examplebucket", "worm-id-1", 60)
            .to_oss_request()
            .unwrap();
        assert!(req.query_params.contains_key("wormExtend"));
        assert_eq!(
            req.query_params.get("wormId").map(String::as_str),
            Some("worm-id-1")
        );
    }

    #[test]
    fn test_complete_worm_requires_id() {
        assert!(
            CompleteBucketWorm::new(test_client(), "examplebucket", "")
                .to_oss_request()
                .is_err()
        );
    }
}
