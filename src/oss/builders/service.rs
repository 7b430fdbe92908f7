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
use crate::oss::response::ListBucketsResponse;
use crate::oss::types::{OssApi, OssRequest, ToOssRequest};
use hyper::http::Method;

/// Argument builder for the service-level `ListBuckets` (`GetService`) API.
///
/// Lists the buckets owned by the requester, optionally filtered by prefix
/// and paged with marker/max-keys.
#[derive(Clone, Debug)]
pub struct ListBuckets {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    prefix: Option<String>,
    marker: Option<String>,
    max_keys: Option<u16>,
}

impl ListBuckets {
    pub fn new(client: OssClient) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            prefix: None,
            marker: None,
            max_keys: None,
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

    /// Only buckets whose name begins with the prefix are listed.
    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Listing starts after this bucket name.
    pub fn marker(mut self, marker: Option<String>) -> Self {
        self.marker = marker;
        self
    }

    /// Limit of returned buckets, 1-1000.
    pub fn max_keys(mut self, max_keys: Option<u16>) -> Self {
        self.max_keys = max_keys;
        self
    }
}

impl OssApi for ListBuckets {
    type OssResponse = ListBucketsResponse;
}

impl ToOssRequest for ListBuckets {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        let mut query_params = self.extra_query_params.unwrap_or_default();
        if let Some(v) = self.prefix {
            query_params.add("prefix", v);
        }
        if let Some(v) = self.marker {
            query_params.add("marker", v);
        }
        if let Some(v) = self.max_keys {
            query_params.add("max-keys", v.to_string());
        }

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::http::BaseUrl;

    #[test]
    fn test_list_buckets_query_params() {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        let client = OssClient::new::<crate::oss::creds::StaticProvider>(base_url, None).unwrap();

        let req = ListBuckets::new(client)
            .prefix(Some("my-".to_string()))
            .max_keys(Some(50))
            .to_oss_request()
            .unwrap();
        assert_eq!(req.bucket, None);
        assert_eq!(
            req.query_params.get("prefix").map(String::as_str),
            Some("my-")
        );
        assert_eq!(
            req.query_params.get("max-keys").map(String::as_str),
            Some("50")
        );
    }
}
