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
use crate::oss::cors_config::CorsConfig;
use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    DeleteBucketCorsResponse, GetBucketCorsResponse, PutBucketCorsResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::oss::types::{OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use hyper::http::Method;

/// Argument builder for the `PutBucketCors` API.
#[derive(Clone, Debug)]
pub struct PutBucketCors {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    config: CorsConfig,
}

impl PutBucketCors {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            config: CorsConfig::default(),
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

    pub fn cors_config(mut self, config: CorsConfig) -> Self {
        self.config = config;
        self
    }
}

impl OssApi for PutBucketCors {
    type OssResponse = PutBucketCorsResponse;
}

impl ToOssRequest for PutBucketCors {
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
            .query_params(insert(self.extra_query_params, "cors"))
            .headers(headers)
            .body(body))
    }
}

/// Argument builder for the `GetBucketCors` API.
///
/// The service answers `NoSuchCORSConfiguration` when the bucket carries no
/// CORS rules.
#[derive(Clone, Debug)]
pub struct GetBucketCors {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl GetBucketCors {
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

impl OssApi for GetBucketCors {
    type OssResponse = GetBucketCorsResponse;
}

impl ToOssRequest for GetBucketCors {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "cors"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteBucketCors` API.
#[derive(Clone, Debug)]
pub struct DeleteBucketCors {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl DeleteBucketCors {
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

impl OssApi for DeleteBucketCors {
    type OssResponse = DeleteBucketCorsResponse;
}

impl ToOssRequest for DeleteBucketCors {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "cors"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::cors_config::CorsRule;
    use crate::oss::creds::StaticProvider;
    use crate::oss::http::BaseUrl;

    fn test_client() -> OssClient {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        OssClient::new::<StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn test_put_bucket_cors_marshal() {
        let config = CorsConfig {
            rules: vec![CorsRule {
                allowed_origins: vec![String::from("*")],
                allowed_methods: vec![String::from("GET")],
                ..Default::default()
            }],
            response_vary: None,
        };
        let req = PutBucketCors::new(test_client(), "examplebucket")
            .cors_config(config)
            .to_oss_request()
            .unwrap();
        assert!(req.query_params.contains_key("cors"));
    }

    #[test]
    fn test_put_bucket_cors_rejects_empty_rule() {
        let config = CorsConfig {
            rules: vec![CorsRule::default()],
            response_vary: None,
        };
        assert!(
            PutBucketCors::new(test_client(), "examplebucket")
                .cors_config(config)
                .to_oss_request()
                .is_err()
        );
    }
}
