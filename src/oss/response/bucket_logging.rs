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
use crate::oss::types::{FromOssResponse, LoggingEnabled, OssRequest};
use crate::oss::utils::take_bucket;
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [put_bucket_logging()](crate::oss::client::OssClient::put_bucket_logging)
/// API
#[derive(Clone, Debug)]
pub struct PutBucketLoggingResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

/// Response of
/// [delete_bucket_logging()](crate::oss::client::OssClient::delete_bucket_logging)
/// API
#[derive(Clone, Debug)]
pub struct DeleteBucketLoggingResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

impl_basic_bucket_response!(PutBucketLoggingResponse, DeleteBucketLoggingResponse);

/// Response of
/// [get_bucket_logging()](crate::oss::client::OssClient::get_bucket_logging)
/// API
#[derive(Clone, Debug)]
pub struct GetBucketLoggingResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    /// Absent when access logging is off.
    pub config: Option<LoggingEnabled>,
}

#[async_trait]
impl FromOssResponse for GetBucketLoggingResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let config: Option<LoggingEnabled> = {
            let body = resp.bytes().await?;
            let root = Element::parse(body.reader())?;
            LoggingEnabled::from_xml(&root)?
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
