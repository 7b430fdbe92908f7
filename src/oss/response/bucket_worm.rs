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

use crate::impl_basic_bucket_response;
use crate::oss::client::take_request_id;
use crate::oss::error::Error;
use crate::oss::types::header_constants::X_OSS_WORM_ID;
use crate::oss::types::{FromOssResponse, OssRequest, WormState};
use crate::oss::utils::{get_default_text, get_option_text, get_text, take_bucket};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [initiate_bucket_worm()](crate::oss::client::OssClient::initiate_bucket_worm)
/// API
#[derive(Clone, Debug)]
pub struct InitiateBucketWormResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    /// Id of the created policy, served in the `x-oss-worm-id` header.
    pub worm_id: String,
}

#[async_trait]
impl FromOssResponse for InitiateBucketWormResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let worm_id = headers
            .get(X_OSS_WORM_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            worm_id,
        })
    }
}

/// Response of
/// [abort_bucket_worm()](crate::oss::client::OssClient::abort_bucket_worm)
/// API
#[derive(Clone, Debug)]
pub struct AbortBucketWormResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

/// Response of
/// [complete_bucket_worm()](crate::oss::client::OssClient::complete_bucket_worm)
/// API
#[derive(Clone, Debug)]
pub struct CompleteBucketWormResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

/// Response of
/// [extend_bucket_worm()](crate::oss::client::OssClient::extend_bucket_worm)
/// API
#[derive(Clone, Debug)]
pub struct ExtendBucketWormResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

impl_basic_bucket_response!(
    AbortBucketWormResponse,
    CompleteBucketWormResponse,
    ExtendBucketWormResponse,
);

/// Response of
/// [get_bucket_worm()](crate::oss::client::OssClient::get_bucket_worm) API
#[derive(Clone, Debug)]
pub struct GetBucketWormResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub worm_id: String,
    pub state: WormState,
    pub retention_period_days: u32,
    pub creation_date: Option<String>,
}

#[async_trait]
impl FromOssResponse for GetBucketWormResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let root = Element::parse(body.reader())?;

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            worm_id: get_text(&root, "WormId")?,
            state: get_default_text(&root, "State").parse()?,
            retention_period_days: get_text(&root, "RetentionPeriodInDays")?.parse()?,
            creation_date: get_option_text(&root, "CreationDate"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_worm_configuration() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<WormConfiguration>
  <WormId>1666E2CFB2B3418****</WormId>
  <State>Locked</State>
  <RetentionPeriodInDays>1</RetentionPeriodInDays>
  <CreationDate>2020-10-15T15:50:32.000Z</CreationDate>
</WormConfiguration>"#;
        let root = Element::parse(bytes::Bytes::from(body).reader()).unwrap();
        assert_eq!(get_text(&root, "WormId").unwrap(), "1666E2CFB2B3418****");
        assert_eq!(
            get_default_text(&root, "State").parse::<WormState>().unwrap(),
            WormState::Locked
        );
        assert_eq!(
            get_text(&root, "RetentionPeriodInDays")
                .unwrap()
                .parse::<u32>()
                .unwrap(),
            1
        );
    }
}
