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
use crate::oss::client::{parse_location_constraint, take_request_id};
use crate::oss::error::{Error, ValidationErr};
use crate::oss::oss_error_response::OssErrorCode;
use crate::oss::types::{FromOssResponse, ListEntry, OssRequest, Owner};
use crate::oss::utils::{
    from_iso8601utc, get_default_text, get_option_text, get_text, take_bucket, trim_quotes,
    urldecode,
};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of [put_bucket()](crate::oss::client::OssClient::put_bucket) API
#[derive(Clone, Debug)]
pub struct PutBucketResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

/// Response of [delete_bucket()](crate::oss::client::OssClient::delete_bucket)
/// API
#[derive(Clone, Debug)]
pub struct DeleteBucketResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
}

impl_basic_bucket_response!(PutBucketResponse, DeleteBucketResponse);

/// Response of [bucket_exists()](crate::oss::client::OssClient::bucket_exists)
/// API
#[derive(Clone, Debug)]
pub struct BucketExistsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub exists: bool,
}

#[async_trait]
impl FromOssResponse for BucketExistsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match resp {
            Ok(mut resp) => {
                let headers: HeaderMap = mem::take(resp.headers_mut());
                Ok(Self {
                    request_id: take_request_id(&headers),
                    headers,
                    region: req.inner_region,
                    bucket: take_bucket(req.bucket)?,
                    exists: true,
                })
            }
            Err(e) if e.is_code(OssErrorCode::NoSuchBucket) => Ok(Self {
                headers: HeaderMap::new(),
                request_id: String::new(),
                region: req.inner_region,
                bucket: take_bucket(req.bucket)?,
                exists: false,
            }),
            Err(e) => Err(e),
        }
    }
}

/// Response of
/// [get_bucket_location()](crate::oss::client::OssClient::get_bucket_location)
/// API
#[derive(Clone, Debug)]
pub struct GetBucketLocationResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub bucket: String,
    /// Raw location value, e.g. `oss-cn-hangzhou`.
    pub location: String,
}

impl GetBucketLocationResponse {
    /// Region id with the `oss-` location prefix removed.
    pub fn region(&self) -> &str {
        self.location.strip_prefix("oss-").unwrap_or(&self.location)
    }
}

#[async_trait]
impl FromOssResponse for GetBucketLocationResponse {
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
            bucket: take_bucket(req.bucket)?,
            location: parse_location_constraint(&root),
        })
    }
}

/// Response of [list_objects()](crate::oss::client::OssClient::list_objects)
/// API
#[derive(Clone, Debug)]
pub struct ListObjectsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<u16>,
    pub key_count: Option<u16>,
    pub is_truncated: bool,
    pub next_continuation_token: Option<String>,
    pub contents: Vec<ListEntry>,
    pub common_prefixes: Vec<String>,
}

fn url_decode_key(encoding_type: &Option<String>, key: String) -> Result<String, Error> {
    if encoding_type.as_deref() == Some("url") {
        return Ok(urldecode(&key)
            .map_err(ValidationErr::Utf8Error)?
            .to_string());
    }
    Ok(key)
}

#[async_trait]
impl FromOssResponse for ListObjectsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let encoding_type = get_option_text(&root, "EncodingType");

        let mut contents: Vec<ListEntry> = Vec::new();
        while let Some(content) = root.take_child("Contents") {
            let key = url_decode_key(&encoding_type, get_text(&content, "Key")?)?;
            let last_modified = match get_option_text(&content, "LastModified") {
                Some(v) => Some(from_iso8601utc(&v)?),
                None => None,
            };
            let size = match get_option_text(&content, "Size") {
                Some(v) if !v.is_empty() => Some(v.parse::<u64>()?),
                _ => None,
            };
            let owner = content.get_child("Owner").map(Owner::from_xml);
            contents.push(ListEntry {
                key,
                last_modified,
                etag: get_option_text(&content, "ETag").map(trim_quotes),
                size,
                storage_class: get_option_text(&content, "StorageClass"),
                owner,
            });
        }

        let mut common_prefixes: Vec<String> = Vec::new();
        while let Some(prefix) = root.take_child("CommonPrefixes") {
            common_prefixes.push(url_decode_key(
                &encoding_type,
                get_text(&prefix, "Prefix")?,
            )?);
        }

        let max_keys = match get_option_text(&root, "MaxKeys") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };
        let key_count = match get_option_text(&root, "KeyCount") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            prefix: get_option_text(&root, "Prefix").filter(|v| !v.is_empty()),
            delimiter: get_option_text(&root, "Delimiter").filter(|v| !v.is_empty()),
            max_keys,
            key_count,
            is_truncated: get_default_text(&root, "IsTruncated") == "true",
            next_continuation_token: get_option_text(&root, "NextContinuationToken")
                .filter(|v| !v.is_empty()),
            contents,
            common_prefixes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_OBJECTS_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult>
  <Name>examplebucket</Name>
  <Prefix>photos/</Prefix>
  <MaxKeys>100</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>CgJiYw--</NextContinuationToken>
  <KeyCount>3</KeyCount>
  <Contents>
    <Key>photos/2023/a.jpg</Key>
    <LastModified>2023-12-08T08:12:20.000Z</LastModified>
    <ETag>"5B3C1A2E053D763E1B002CC607C5A0FE"</ETag>
    <Size>344606</Size>
    <StorageClass>Standard</StorageClass>
  </Contents>
  <Contents>
    <Key>photos/2023/b.jpg</Key>
    <LastModified>2023-12-08T09:01:56.000Z</LastModified>
    <ETag>"9B2CF535F27731C974343645A3985328"</ETag>
    <Size>10240</Size>
    <StorageClass>IA</StorageClass>
  </Contents>
  <CommonPrefixes>
    <Prefix>photos/2024/</Prefix>
  </CommonPrefixes>
</ListBucketResult>"#;

    #[test]
    fn test_parse_list_objects_body() {
        let mut root =
            Element::parse(bytes::Bytes::from_static(LIST_OBJECTS_BODY.as_bytes()).reader())
                .unwrap();

        let mut contents = Vec::new();
        while let Some(content) = root.take_child("Contents") {
            contents.push(content);
        }
        assert_eq!(contents.len(), 2);
        assert_eq!(get_text(&contents[0], "Key").unwrap(), "photos/2023/a.jpg");
        assert_eq!(
            trim_quotes(get_text(&contents[1], "ETag").unwrap()),
            "9B2CF535F27731C974343645A3985328"
        );
        assert_eq!(get_default_text(&root, "IsTruncated"), "true");
        assert_eq!(
            get_default_text(&root, "NextContinuationToken"),
            "CgJiYw--"
        );
    }

    #[test]
    fn test_url_decode_key() {
        assert_eq!(
            url_decode_key(&Some(String::from("url")), String::from("a%2Fb%20c")).unwrap(),
            "a/b c"
        );
        assert_eq!(
            url_decode_key(&None, String::from("a%2Fb")).unwrap(),
            "a%2Fb"
        );
    }
}
