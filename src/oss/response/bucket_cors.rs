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
use crate::oss::cors_config::CorsConfig;
use crate::oss::error::Error;
use crate::oss::types::{FromOssResponse, OssRequest};
use crate::oss::utils::take_bucket;
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [put_bucket_cors()](crate::oss::client::OssClient::put_bucket_cors) API
#[derive(Clone, Debug)]
pub struct PutBucketCorsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

/// Response of
/// [delete_bucket_cors()](crate::oss::client::OssClient::delete_bucket_cors)
/// API
#[derive(Clone, Debug)]
pub struct DeleteBucketCorsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

impl_basic_bucket_response!(PutBucketCorsResponse, DeleteBucketCorsResponse);

/// Response of
/// [get_bucket_cors()](crate::oss::client::OssClient::get_bucket_cors) API
#[derive(Clone, Debug)]
pub struct GetBucketCorsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub config: CorsConfig,
}

#[async_trait]
impl FromOssResponse for GetBucketCorsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let config: CorsConfig = {
            let body = resp.bytes().await?;
            let mut root = Element::parse(body.reader())?;
            CorsConfig::from_xml(&mut root)?
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
