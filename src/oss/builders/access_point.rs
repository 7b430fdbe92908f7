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

//! Builders for the bucket access point APIs.
//!
//! Access points are named entry points bound to a bucket; each can restrict
//! traffic to the internet or a single VPC. They are addressed in requests
//! via the `x-oss-access-point-name` header, not the URL.

use crate::oss::client::OssClient;
use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    CreateAccessPointResponse, DeleteAccessPointResponse, GetAccessPointResponse,
    ListAccessPointsResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE, X_OSS_ACCESS_POINT_NAME};
use crate::oss::types::{NetworkOrigin, OssApi, OssRequest, ToOssRequest, VpcConfiguration};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash, write_xml_tag};
use bytes::Bytes;
use hyper::http::Method;

fn check_access_point_name(name: &str) -> Result<(), ValidationErr> {
    if name.is_empty() || name.len() > 63 {
        return Err(ValidationErr::InvalidAccessPointName(String::from(
            "access point name must be 3-63 characters",
        )));
    }
    Ok(())
}

/// Argument builder for the `CreateAccessPoint` API.
#[derive(Clone, Debug)]
pub struct CreateAccessPoint {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    access_point_name: String,
    network_origin: NetworkOrigin,
    vpc: Option<VpcConfiguration>,
}

impl CreateAccessPoint {
    pub fn new(client: OssClient, bucket: &str, access_point_name: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            access_point_name: access_point_name.to_string(),
            network_origin: NetworkOrigin::Internet,
            vpc: None,
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

    pub fn network_origin(mut self, network_origin: NetworkOrigin) -> Self {
        self.network_origin = network_origin;
        self
    }

    /// Required when the network origin is `vpc`.
    pub fn vpc(mut self, vpc: Option<VpcConfiguration>) -> Self {
        self.vpc = vpc;
        self
    }
}

impl OssApi for CreateAccessPoint {
    type OssResponse = CreateAccessPointResponse;
}

impl ToOssRequest for CreateAccessPoint {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_access_point_name(&self.access_point_name)?;
        if self.network_origin == NetworkOrigin::Vpc && self.vpc.is_none() {
            return Err(ValidationErr::InvalidAccessPointName(String::from(
                "vpc configuration is required for vpc network origin",
            )));
        }

        let mut data = String::from("<CreateAccessPointConfiguration>");
        write_xml_tag(&mut data, "AccessPointName", &self.access_point_name);
        write_xml_tag(&mut data, "NetworkOrigin", &self.network_origin.to_string());
        if let Some(vpc) = &self.vpc {
            data.push_str("<VpcConfiguration>");
            write_xml_tag(&mut data, "VpcId", &vpc.vpc_id);
            data.push_str("</VpcConfiguration>");
        }
        data.push_str("</CreateAccessPointConfiguration>");

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        let bytes: Bytes = data.into();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        headers.add(CONTENT_TYPE, "application/xml");

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "accessPoint"))
            .headers(headers)
            .body(Some(SegmentedBytes::from(bytes))))
    }
}

/// Argument builder for the `GetAccessPoint` API.
#[derive(Clone, Debug)]
pub struct GetAccessPoint {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    access_point_name: String,
}

impl GetAccessPoint {
    pub fn new(client: OssClient, bucket: &str, access_point_name: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            access_point_name: access_point_name.to_string(),
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

impl OssApi for GetAccessPoint {
    type OssResponse = GetAccessPointResponse;
}

impl ToOssRequest for GetAccessPoint {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_access_point_name(&self.access_point_name)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(X_OSS_ACCESS_POINT_NAME, self.access_point_name);

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "accessPoint"))
            .headers(headers))
    }
}

/// Argument builder for the `ListAccessPoints` API.
#[derive(Clone, Debug)]
pub struct ListAccessPoints {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: Option<String>,
    max_keys: Option<u16>,
    continuation_token: Option<String>,
}

impl ListAccessPoints {
    /// Without a bucket, lists the access points of every bucket in the
    /// region.
    pub fn new(client: OssClient, bucket: Option<String>) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket,
            max_keys: None,
            continuation_token: None,
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

    pub fn max_keys(mut self, max_keys: Option<u16>) -> Self {
        self.max_keys = max_keys;
        self
    }

    pub fn continuation_token(mut self, continuation_token: Option<String>) -> Self {
        self.continuation_token = continuation_token;
        self
    }
}

impl OssApi for ListAccessPoints {
    type OssResponse = ListAccessPointsResponse;
}

impl ToOssRequest for ListAccessPoints {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        if let Some(bucket) = &self.bucket {
            check_bucket_name(bucket)?;
        }

        let mut query_params = insert(self.extra_query_params, "accessPoint");
        if let Some(v) = self.max_keys {
            query_params.add("max-keys", v.to_string());
        }
        if let Some(v) = self.continuation_token {
            query_params.add("continuation-token", v);
        }

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteAccessPoint` API.
#[derive(Clone, Debug)]
pub struct DeleteAccessPoint {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    access_point_name: String,
}

impl DeleteAccessPoint {
    pub fn new(client: OssClient, bucket: &str, access_point_name: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            access_point_name: access_point_name.to_string(),
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

impl OssApi for DeleteAccessPoint {
    type OssResponse = DeleteAccessPointResponse;
}

impl ToOssRequest for DeleteAccessPoint {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_access_point_name(&self.access_point_name)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(X_OSS_ACCESS_POINT_NAME, self.access_point_name);

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(insert(self.extra_query_params, "accessPoint"))
            .headers(headers))
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
    fn test_create_access_point_requires_vpc_config() {
        assert!(
            CreateAccessPoint::new(test_client(), "examplebucket", "ap-1")
                .network_origin(NetworkOrigin::Vpc)
                .to_oss_request()
                .is_err()
        );
    }

    #[test]
    fn test_get_access_point_uses_header() {
        let req = GetAccessPoint::new(test_client(), "examplebucket", "ap-1")
            .to_oss_request()
            .unwrap();
        assert!(req.query_params.contains_key("accessPoint"));
    }
}
