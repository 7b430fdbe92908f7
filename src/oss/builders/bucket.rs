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
    BucketExistsResponse, DeleteBucketResponse, GetBucketLocationResponse, ListObjectsResponse,
    PutBucketResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::X_OSS_ACL;
use crate::oss::types::{Acl, OssApi, OssRequest, StorageClass, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, write_xml_tag};
use bytes::Bytes;
use hyper::http::Method;

/// Argument builder for the `PutBucket` API, creating a new bucket.
#[derive(Clone, Debug)]
pub struct PutBucket {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    acl: Option<Acl>,
    storage_class: Option<StorageClass>,
}

impl PutBucket {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            acl: None,
            storage_class: None,
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

    pub fn acl(mut self, acl: Option<Acl>) -> Self {
        self.acl = acl;
        self
    }

    pub fn storage_class(mut self, storage_class: Option<StorageClass>) -> Self {
        self.storage_class = storage_class;
        self
    }
}

impl OssApi for PutBucket {
    type OssResponse = PutBucketResponse;
}

impl ToOssRequest for PutBucket {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if let Some(v) = self.acl {
            headers.add(X_OSS_ACL, v.to_string());
        }

        let body = self.storage_class.map(|v| {
            let mut data = String::from("<CreateBucketConfiguration>");
            write_xml_tag(&mut data, "StorageClass", &v.to_string());
            data.push_str("</CreateBucketConfiguration>");
            SegmentedBytes::from(Bytes::from(data))
        });

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(body))
    }
}

/// Argument builder for the `DeleteBucket` API.
///
/// The bucket must be empty; the service answers `BucketNotEmpty` otherwise.
#[derive(Clone, Debug)]
pub struct DeleteBucket {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl DeleteBucket {
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

impl OssApi for DeleteBucket {
    type OssResponse = DeleteBucketResponse;
}

impl ToOssRequest for DeleteBucket {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder checking bucket existence with a HEAD request.
#[derive(Clone, Debug)]
pub struct BucketExists {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl BucketExists {
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

impl OssApi for BucketExists {
    type OssResponse = BucketExistsResponse;
}

impl ToOssRequest for BucketExists {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::HEAD)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `GetBucketLocation` API.
#[derive(Clone, Debug)]
pub struct GetBucketLocation {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
}

impl GetBucketLocation {
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

impl OssApi for GetBucketLocation {
    type OssResponse = GetBucketLocationResponse;
}

impl ToOssRequest for GetBucketLocation {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "location"))
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `ListObjectsV2` API.
#[derive(Clone, Debug)]
pub struct ListObjects {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    prefix: Option<String>,
    delimiter: Option<String>,
    continuation_token: Option<String>,
    start_after: Option<String>,
    max_keys: Option<u16>,
    fetch_owner: bool,
    /// URL-encode keys in the response; decoded transparently while parsing.
    encoding_type: Option<String>,
}

impl ListObjects {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            prefix: None,
            delimiter: None,
            continuation_token: None,
            start_after: None,
            max_keys: None,
            fetch_owner: false,
            encoding_type: None,
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

    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Groups keys sharing the same prefix up to the delimiter into common
    /// prefixes; `/` lists the bucket like a directory tree.
    pub fn delimiter(mut self, delimiter: Option<String>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn continuation_token(mut self, continuation_token: Option<String>) -> Self {
        self.continuation_token = continuation_token;
        self
    }

    pub fn start_after(mut self, start_after: Option<String>) -> Self {
        self.start_after = start_after;
        self
    }

    pub fn max_keys(mut self, max_keys: Option<u16>) -> Self {
        self.max_keys = max_keys;
        self
    }

    pub fn fetch_owner(mut self, fetch_owner: bool) -> Self {
        self.fetch_owner = fetch_owner;
        self
    }

    pub fn encoding_type(mut self, encoding_type: Option<String>) -> Self {
        self.encoding_type = encoding_type;
        self
    }
}

impl OssApi for ListObjects {
    type OssResponse = ListObjectsResponse;
}

impl ToOssRequest for ListObjects {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("list-type", "2");
        query_params.add("delimiter", self.delimiter.unwrap_or_default());
        query_params.add(
            "max-keys",
            self.max_keys.unwrap_or(1000).to_string(),
        );
        query_params.add("prefix", self.prefix.unwrap_or_default());
        if let Some(v) = self.continuation_token {
            query_params.add("continuation-token", v);
        }
        if let Some(v) = self.start_after {
            query_params.add("start-after", v);
        }
        if self.fetch_owner {
            query_params.add("fetch-owner", "true");
        }
        if let Some(v) = self.encoding_type {
            query_params.add("encoding-type", v);
        }

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::creds::StaticProvider;
    use crate::oss::http::BaseUrl;

    fn test_client() -> OssClient {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        OssClient::new::<StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn test_put_bucket_marshal() {
        let req = PutBucket::new(test_client(), "examplebucket")
            .acl(Some(Acl::PublicRead))
            .storage_class(Some(StorageClass::InfrequentAccess))
            .to_oss_request()
            .unwrap();
        assert_eq!(req.bucket.as_deref(), Some("examplebucket"));
    }

    #[test]
    fn test_put_bucket_rejects_invalid_name() {
        assert!(
            PutBucket::new(test_client(), "Bad_Name")
                .to_oss_request()
                .is_err()
        );
    }

    #[test]
    fn test_list_objects_marshal() {
        let req = ListObjects::new(test_client(), "examplebucket")
            .prefix(Some("photos/".to_string()))
            .delimiter(Some("/".to_string()))
            .continuation_token(Some("token".to_string()))
            .to_oss_request()
            .unwrap();
        assert_eq!(
            req.query_params.get("list-type").map(String::as_str),
            Some("2")
        );
        assert_eq!(
            req.query_params.get("prefix").map(String::as_str),
            Some("photos/")
        );
        assert_eq!(
            req.query_params.get("continuation-token").map(String::as_str),
            Some("token")
        );
    }

    #[test]
    fn test_get_bucket_location_adds_subresource() {
        let req = GetBucketLocation::new(test_client(), "examplebucket")
            .to_oss_request()
            .unwrap();
        assert!(req.query_params.contains_key("location"));
    }
}
