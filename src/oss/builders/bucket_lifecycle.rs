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
use crate::oss::lifecycle_config::LifecycleConfig;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    DeleteBucketLifecycleResponse, GetBucketLifecycleResponse, PutBucketLifecycleResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::oss::types::{OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use hyper::http::Method;

/// Argument builder for the `PutBucketLifecycle` API.
#[derive(Clone, Debug)]
pub struct PutBucketLifecycle {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    config: LifecycleConfig,
}

impl PutBucketLifecycle {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            config: LifecycleConfig::default(),
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

    pub fn life_cycle_config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }
}

impl OssApi for PutBucketLifecycle {
    type OssResponse = PutBucketLifecycleResponse;
}

impl ToOssRequest for PutBucketLifecycle {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        self.config.validate()?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        let bytes: Bytes = self.config.to_xml().into();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        headers.add(CONTENT_TYPE, "application/xml");
        let body: Option<SegmentedBytes> = Some(SegmentedBytes::from(bytes));

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "lifecycle"))
            .headers(headers)
            .body(body))
    }
}

/// Argument builder for the `GetBucketLifecycle` API.
///
/// The service answers `NoSuchLifecycle` when no configuration is set.
#[derive(Clone, Debug)]
pub struct GetBucketLifecycle {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl GetBucketLifecycle {
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

impl OssApi for GetBucketLifecycle {
    type OssResponse = GetBucketLifecycleResponse;
}

impl ToOssRequest for GetBucketLifecycle {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "lifecycle"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteBucketLifecycle` API.
#[derive(Clone, Debug)]
pub struct DeleteBucketLifecycle {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl DeleteBucketLifecycle {
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

impl OssApi for DeleteBucketLifecycle {
    type OssResponse = DeleteBucketLifecycleResponse;
}

impl ToOssRequest for DeleteBucketLifecycle {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "lifecycle"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::creds::StaticProvider;
    use crate::oss::http::BaseUrl;
    use crate::oss::lifecycle_config::LifecycleRule;

    fn test_client() -> OssClient {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        OssClient::new::<StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn test_put_bucket_lifecycle_marshal() {
        let config = LifecycleConfig {
            rules: vec![LifecycleRule {
                id: String::from("rule1"),
                prefix: String::from("logs/"),
                status: true,
                expiration_days: Some(365),
                ..Default::default()
            }],
        };
        let req = PutBucketLifecycle::new(test_client(), "examplebucket")
            .life_cycle_config(config)
            .to_oss_request()
            .unwrap();
        assert!(req.query_params.contains_key("lifecycle"));
    }

    #[test]
    fn test_put_bucket_lifecycle_validates_rules() {
        let config = LifecycleConfig {
            rules: vec![LifecycleRule {
                id: String::from("broken"),
                status: true,
                ..Default::default()
            }],
        };
        assert!(
            PutBucketLifecycle::new(test_client(), "examplebucket")
                .life_cycle_config(config)
                .to_oss_request()
                .is_err()
        );
    }
}
