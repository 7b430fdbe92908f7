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
use crate::oss::response::{
    DeleteBucketLoggingResponse, GetBucketLoggingResponse, PutBucketLoggingResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::oss::types::{LoggingEnabled, OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use hyper::http::Method;

/// Argument builder for the `PutBucketLogging` API, pointing access logs of
/// a bucket at a target bucket/prefix.
#[derive(Clone, Debug)]
pub struct PutBucketLogging {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    config: LoggingEnabled,
}

impl PutBucketLogging {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            config: LoggingEnabled::default(),
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

    pub fn logging_config(mut self, config: LoggingEnabled) -> Self {
        self.config = config;
        self
    }
}

impl OssApi for PutBucketLogging {
    type OssResponse = PutBucketLoggingResponse;
}

impl ToOssRequest for PutBucketLogging {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_bucket_name(&self.config.target_bucket)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        let bytes: Bytes = self.config.to_xml().into();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        headers.add(CONTENT_TYPE, "application/xml");

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "logging"))
            .headers(headers)
            .body(Some(SegmentedBytes::from(bytes))))
    }
}

/// Argument builder for the `GetBucketLogging` API.
#[derive(Clone, Debug)]
pub struct GetBucketLogging {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl GetBucketLogging {
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

impl OssApi for GetBucketLogging {
    type OssResponse = GetBucketLoggingResponse;
}

impl ToOssRequest for GetBucketLogging {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "logging"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteBucketLogging` API, turning access
/// logging off.
#[derive(Clone, Debug)]
pub struct DeleteBucketLogging {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl DeleteBucketLogging {
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

impl OssApi for DeleteBucketLogging {
    type OssResponse = DeleteBucketLoggingResponse;
}

impl ToOssRequest for DeleteBucketLogging {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "logging"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}
