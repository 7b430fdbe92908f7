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
use crate::oss::types::{AccessPointSummary, FromOssResponse, NetworkOrigin, OssRequest};
use crate::oss::utils::{get_default_text, get_option_text, get_text, take_bucket};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [create_access_point()](crate::oss::client::OssClient::create_access_point)
/// API
#[derive(Clone, Debug)]
pub struct CreateAccessPointResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub access_point_arn: String,
    pub alias: String,
}

#[async_trait]
impl FromOssResponse for CreateAccessPointResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let root = Element::parse(body.reader())?;

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            access_point_arn: get_default_text(&root, "AccessPointArn"),
            alias: get_default_text(&root, "Alias"),
        })
    }
}

/// Response of
/// [get_access_point()](crate::oss::client::OssClient::get_access_point) API
#[derive(Clone, Debug)]
pub struct GetAccessPointResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub access_point_name: String,
    pub network_origin: NetworkOrigin,
    pub vpc_id: Option<String>,
    pub access_point_arn: String,
    pub alias: String,
    /// `enable` once the access point finished creating.
    pub status: String,
    pub public_endpoint: Option<String>,
    pub internal_endpoint: Option<String>,
    pub creation_date: Option<String>,
}

#[async_trait]
impl FromOssResponse for GetAccessPointResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let root = Element::parse(body.reader())?;

        let vpc_id = root
            .get_child("Vpc")
            .and_then(|v| get_option_text(v, "VpcId"));
        let (public_endpoint, internal_endpoint) = match root.get_child("Endpoints") {
            Some(v) => (
                get_option_text(v, "PublicEndpoint"),
                get_option_text(v, "InternalEndpoint"),
            ),
            None => (None, None),
        };

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            access_point_name: get_text(&root, "AccessPointName")?,
            network_origin: get_default_text(&root, "NetworkOrigin")
                .parse()
                .unwrap_or_default(),
            vpc_id,
            access_point_arn: get_default_text(&root, "AccessPointArn"),
            alias: get_default_text(&root, "Alias"),
            status: get_default_text(&root, "Status"),
            public_endpoint,
            internal_endpoint,
            creation_date: get_option_text(&root, "CreationDate"),
        })
    }
}

/// Response of
/// [list_access_points()](crate::oss::client::OssClient::list_access_points)
/// API
#[derive(Clone, Debug)]
pub struct ListAccessPointsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub access_points: Vec<AccessPointSummary>,
    pub max_keys: Option<u16>,
    pub is_truncated: bool,
    pub next_continuation_token: Option<String>,
}

#[async_trait]
impl FromOssResponse for ListAccessPointsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let mut access_points: Vec<AccessPointSummary> = Vec::new();
        if let Some(list) = root.get_mut_child("AccessPoints") {
            while let Some(ap) = list.take_child("AccessPoint") {
                access_points.push(AccessPointSummary::from_xml(&ap)?);
            }
        }

        let max_keys = match get_option_text(&root, "MaxKeys") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            access_points,
            max_keys,
            is_truncated: get_default_text(&root, "IsTruncated") == "true",
            next_continuation_token: get_option_text(&root, "NextContinuationToken")
                .filter(|v| !v.is_empty()),
        })
    }
}

/// Response of
/// [delete_access_point()](crate::oss::client::OssClient::delete_access_point)
/// API
#[derive(Clone, Debug)]
pub struct DeleteAccessPointResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

impl_basic_bucket_response!(DeleteAccessPointResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_access_point_entry() {
        let body = r#"<AccessPoint>
  <NetworkOrigin>vpc</NetworkOrigin>
  <Vpc><VpcId>vpc-t4nlw426y44rd3iq4****</VpcId></Vpc>
  <Bucket>examplebucket</Bucket>
  <AccessPointName>ap-01</AccessPointName>
  <Alias>ap-01-45ee7945007a2f0bcb595f63e2215c****-ossalias</Alias>
  <Status>enable</Status>
</AccessPoint>"#;
        let root = Element::parse(bytes::Bytes::from(body).reader()).unwrap();
        let summary = AccessPointSummary::from_xml(&root).unwrap();
        assert_eq!(summary.access_point_name, "ap-01");
        assert_eq!(summary.network_origin, NetworkOrigin::Vpc);
        assert_eq!(
            summary.vpc_id.as_deref(),
            Some("vpc-t4nlw426y44rd3iq4****")
        );
        assert_eq!(summary.status, "enable");
    }
}
