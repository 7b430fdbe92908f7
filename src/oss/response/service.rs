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

use crate::oss::client::take_request_id;
use crate::oss::error::Error;
use crate::oss::types::{Bucket, FromOssResponse, OssRequest, Owner};
use crate::oss::utils::{get_default_text, get_option_text};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of [list_buckets()](crate::oss::client::OssClient::list_buckets)
/// API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub owner: Owner,
    pub buckets: Vec<Bucket>,
    pub prefix: Option<String>,
    pub is_truncated: bool,
    pub next_marker: Option<String>,
}

#[async_trait]
impl FromOssResponse for ListBucketsResponse {
    async fn from_oss_response(
        _req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let owner = root
            .get_child("Owner")
            .map(Owner::from_xml)
            .unwrap_or_default();

        let mut buckets: Vec<Bucket> = Vec::new();
        if let Some(buckets_elem) = root.get_mut_child("Buckets") {
            while let Some(bucket) = buckets_elem.take_child("Bucket") {
                buckets.push(Bucket::from_xml(&bucket)?);
            }
        }

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            owner,
            buckets,
            prefix: get_option_text(&root, "Prefix").filter(|v| !v.is_empty()),
            is_truncated: get_default_text(&root, "IsTruncated") == "true",
            next_marker: get_option_text(&root, "NextMarker").filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::StorageClass;

    const LIST_BUCKETS_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult>
  <Owner>
    <ID>51264</ID>
    <DisplayName>51264</DisplayName>
  </Owner>
  <Buckets>
    <Bucket>
      <CreationDate>2014-02-17T18:12:43.000Z</CreationDate>
      <ExtranetEndpoint>oss-cn-shanghai.aliyuncs.com</ExtranetEndpoint>
      <IntranetEndpoint>oss-cn-shanghai-internal.aliyuncs.com</IntranetEndpoint>
      <Location>oss-cn-shanghai</Location>
      <Name>app-base-oss</Name>
      <Region>cn-shanghai</Region>
      <StorageClass>Standard</StorageClass>
    </Bucket>
    <Bucket>
      <CreationDate>2014-02-25T11:21:04.000Z</CreationDate>
      <ExtranetEndpoint>oss-cn-hangzhou.aliyuncs.com</ExtranetEndpoint>
      <IntranetEndpoint>oss-cn-hangzhou-internal.aliyuncs.com</IntranetEndpoint>
      <Location>oss-cn-hangzhou</Location>
      <Name>mybucket</Name>
      <Region>cn-hangzhou</Region>
      <StorageClass>IA</StorageClass>
    </Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

    #[test]
    fn test_parse_list_buckets_body() {
        let mut root =
            Element::parse(bytes::Bytes::from_static(LIST_BUCKETS_BODY.as_bytes()).reader())
                .unwrap();

        let owner = root
            .get_child("Owner")
            .map(Owner::from_xml)
            .unwrap_or_default();
        assert_eq!(owner.id, "51264");

        let mut buckets = Vec::new();
        let buckets_elem = root.get_mut_child("Buckets").unwrap();
        while let Some(bucket) = buckets_elem.take_child("Bucket") {
            buckets.push(Bucket::from_xml(&bucket).unwrap());
        }
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "app-base-oss");
        assert_eq!(buckets[0].location, "oss-cn-shanghai");
        assert_eq!(buckets[1].storage_class, Some(StorageClass::InfrequentAccess));
        assert!(buckets[1].creation_date.is_some());
    }
}
