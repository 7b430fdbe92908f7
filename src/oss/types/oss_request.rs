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

//! OssRequest struct and implementation for executing HTTP requests.

use crate::oss::client::OssClient;
use crate::oss::error::Error;
use crate::oss::multimap_ext::Multimap;
use crate::oss::segmented_bytes::SegmentedBytes;
use hyper::http::Method;

/// Generic request envelope shared by all per-operation builders.
///
/// Builders produce this via
/// [`ToOssRequest`](crate::oss::types::ToOssRequest); responses consume it via
/// [`FromOssResponse`](crate::oss::types::FromOssResponse).
#[derive(Clone, Debug)]
pub struct OssRequest {
    pub(crate) client: OssClient,
    method: Method,
    region: Option<String>,
    pub(crate) bucket: Option<String>,
    pub(crate) object: Option<String>,
    pub(crate) query_params: Multimap,
    headers: Multimap,
    body: Option<SegmentedBytes>,

    /// region computed by [`OssRequest::execute`]
    pub(crate) inner_region: String,
}

impl OssRequest {
    pub fn new(client: OssClient, method: Method) -> Self {
        Self {
            client,
            method,
            region: None,
            bucket: None,
            object: None,
            query_params: Multimap::new(),
            headers: Multimap::new(),
            body: None,
            inner_region: String::new(),
        }
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    pub fn object(mut self, object: Option<String>) -> Self {
        self.object = object;
        self
    }

    pub fn query_params(mut self, query_params: Multimap) -> Self {
        self.query_params = query_params;
        self
    }

    pub fn headers(mut self, headers: Multimap) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: Option<SegmentedBytes>) -> Self {
        self.body = body;
        self
    }

    async fn compute_inner_region(&self) -> Result<String, Error> {
        if let Some(region) = &self.region {
            if !region.is_empty() {
                return Ok(region.clone());
            }
        }
        match &self.bucket {
            Some(bucket) => self.client.get_region_cached(bucket).await,
            None => Ok(self.client.default_region()),
        }
    }

    /// Execute the request, returning the raw response. Only used by
    /// [`OssApi::send()`](crate::oss::types::OssApi::send).
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = self.compute_inner_region().await?;

        self.client
            .clone()
            .execute(
                self.method.clone(),
                &self.inner_region,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.object.as_deref(),
                self.body.clone(),
            )
            .await
    }
}
