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

use crate::oss::client::OssClient;
use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{GetBucketRefererResponse, PutBucketRefererResponse};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::oss::types::{OssApi, OssRequest, RefererConfig, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use hyper::http::Method;

/// Argument builder for the `PutBucketReferer` API, setting hotlink
/// protection rules.
///
/// An empty referer list with `allow_empty_referer` set to true clears the
/// protection.
#[derive(Clone, Debug)]
pub struct PutBucketReferer {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    config: RefererConfig,
}

impl PutBucketReferer {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            config: RefererConfig::default(),
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

    pub fn referer_config(mut self, config: RefererConfig) -> Self {
        self.config = config;
        self
    }
}

impl OssApi for PutBucketReferer {
    type OssResponse = PutBucketRefererResponse;
}

impl ToOssRequest for PutBucketReferer {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        let bytes: Bytes = self.config.to_xml().into();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        headers.add(CONTENT_TYPE, "application/xml");

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "referer"))
            .headers(headers)
            .body(Some(SegmentedBytes::from(bytes))))
    }
}

/// Argument builder for the `GetBucketReferer` API.
#[derive(Clone, Debug)]
pub struct GetBucketReferer {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl GetBucketReferer {
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

impl OssApi for GetBucketReferer {
    type OssResponse = GetBucketRefererResponse;
}

impl ToOssRequest for GetBucketReferer {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "referer"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}
