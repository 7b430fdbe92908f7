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
use crate::oss::inventory_config::InventoryConfig;
use crate::oss::types::{FromOssResponse, OssRequest};
use crate::oss::utils::{get_default_text, get_option_text, take_bucket};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [put_bucket_inventory()](crate::oss::client::OssClient::put_bucket_inventory)
/// API
#[derive(Clone, Debug)]
pub struct PutBucketInventoryResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

/// Response of
/// [delete_bucket_inventory()](crate::oss::client::OssClient::delete_bucket_inventory)
/// API
#[derive(Clone, Debug)]
pub struct DeleteBucketInventoryResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

impl_basic_bucket_response!(PutBucketInventoryResponse, DeleteBucketInventoryResponse);

/// Response of
/// [get_bucket_inventory()](crate::oss::client::OssClient::get_bucket_inventory)
/// API
#[derive(Clone, Debug)]
pub struct GetBucketInventoryResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub config: InventoryConfig,
}

#[async_trait]
impl FromOssResponse for GetBucketInventoryResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let config: InventoryConfig = {
            let body = resp.bytes().await?;
            let root = Element::parse(body.reader())?;
            InventoryConfig::from_xml(&root)?
        };
        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            config,
        })
    }
}

/// Response of
/// [list_bucket_inventory()](crate::oss::client::OssClient::list_bucket_inventory)
/// API
#[derive(Clone, Debug)]
pub struct ListBucketInventoryResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub configs: Vec<InventoryConfig>,
    pub is_truncated: bool,
    pub next_continuation_token: Option<String>,
}

#[async_trait]
impl FromOssResponse for ListBucketInventoryResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let mut configs: Vec<InventoryConfig> = Vec::new();
        while let Some(config) = root.take_child("InventoryConfiguration") {
            configs.push(InventoryConfig::from_xml(&config)?);
        }

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            configs,
            is_truncated: get_default_text(&root, "IsTruncated") == "true",
            next_continuation_token: get_option_text(&root, "NextContinuationToken")
                .filter(|v| !v.is_empty()),
        })
    }
}
