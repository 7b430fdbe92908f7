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
use crate::oss::error::{Error, ValidationErr};
use crate::oss::object_content::ObjectContent;
use crate::oss::types::header_constants::*;
use crate::oss::types::{DeletedObject, FromOssResponse, OssRequest};
use crate::oss::utils::{
    UtcTime, from_http_header_value, get_default_text, get_option_text, get_text, take_bucket,
    take_object, trim_quotes, urldecode,
};
use async_trait::async_trait;
use bytes::Buf;
use futures_util::TryStreamExt;
use http::HeaderMap;
use std::collections::HashMap;
use std::mem;
use xmltree::Element;

fn header_value(headers: &HeaderMap, key: &str) -> Option<String> {
    headers
        .get(key)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

fn parse_crc64(headers: &HeaderMap) -> Option<u64> {
    header_value(headers, X_OSS_HASH_CRC64ECMA).and_then(|v| v.parse::<u64>().ok())
}

/// Response of [put_object()](crate::oss::client::OssClient::put_object) API
#[derive(Clone, Debug)]
pub struct PutObjectResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub etag: String,
    pub version_id: Option<String>,
    /// CRC-64 of the stored content, from `x-oss-hash-crc64ecma`.
    pub crc64: Option<u64>,
}

#[async_trait]
impl FromOssResponse for PutObjectResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        Ok(Self {
            request_id: take_request_id(&headers),
            etag: header_value(&headers, ETAG)
                .map(trim_quotes)
                .unwrap_or_default(),
            version_id: header_value(&headers, X_OSS_VERSION_ID),
            crc64: parse_crc64(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
        })
    }
}

/// Response of [get_object()](crate::oss::client::OssClient::get_object) API
pub struct GetObjectResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub etag: String,
    pub version_id: Option<String>,
    /// Size of the returned content; for range reads this is the range
    /// length, not the full object size.
    pub object_size: u64,
    pub content: ObjectContent,
}

#[async_trait]
impl FromOssResponse for GetObjectResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let object_size = header_value(&headers, CONTENT_LENGTH)
            .and_then(|v| v.parse::<u64>().ok())
            .ok_or(Error::ContentLengthUnknown)?;

        let body_stream = resp.bytes_stream().map_err(std::io::Error::other);
        let content = ObjectContent::new_from_stream(body_stream, Some(object_size));

        Ok(Self {
            request_id: take_request_id(&headers),
            etag: header_value(&headers, ETAG)
                .map(trim_quotes)
                .unwrap_or_default(),
            version_id: header_value(&headers, X_OSS_VERSION_ID),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
            object_size,
            content,
        })
    }
}

/// Response of [stat_object()](crate::oss::client::OssClient::stat_object)
/// API
#[derive(Clone, Debug)]
pub struct StatObjectResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub size: u64,
    pub etag: String,
    pub last_modified: Option<UtcTime>,
    pub version_id: Option<String>,
    /// `Normal`, `Appendable` or `Multipart`.
    pub object_type: Option<String>,
    pub storage_class: Option<String>,
    pub crc64: Option<u64>,
    pub user_metadata: HashMap<String, String>,
}

#[async_trait]
impl FromOssResponse for StatObjectResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());

        let size = header_value(&headers, CONTENT_LENGTH)
            .and_then(|v| v.parse::<u64>().ok())
            .ok_or(Error::ContentLengthUnknown)?;
        let last_modified = match header_value(&headers, LAST_MODIFIED) {
            Some(v) => Some(from_http_header_value(&v)?),
            None => None,
        };

        let mut user_metadata: HashMap<String, String> = HashMap::new();
        for (key, value) in headers.iter() {
            if let Some(name) = key.as_str().strip_prefix(X_OSS_META_PREFIX) {
                if let Ok(v) = value.to_str() {
                    user_metadata.insert(name.to_string(), v.to_string());
                }
            }
        }

        Ok(Self {
            request_id: take_request_id(&headers),
            etag: header_value(&headers, ETAG)
                .map(trim_quotes)
                .unwrap_or_default(),
            version_id: header_value(&headers, X_OSS_VERSION_ID),
            object_type: header_value(&headers, X_OSS_OBJECT_TYPE),
            storage_class: header_value(&headers, X_OSS_STORAGE_CLASS),
            crc64: parse_crc64(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
            size,
            last_modified,
            user_metadata,
        })
    }
}

/// Response of
/// [delete_object()](crate::oss::client::OssClient::delete_object) API
#[derive(Clone, Debug)]
pub struct DeleteObjectResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub version_id: Option<String>,
    pub delete_marker: bool,
}

#[async_trait]
impl FromOssResponse for DeleteObjectResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        Ok(Self {
            request_id: take_request_id(&headers),
            version_id: header_value(&headers, X_OSS_VERSION_ID),
            delete_marker: header_value(&headers, X_OSS_DELETE_MARKER).as_deref() == Some("true"),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
        })
    }
}

/// Response of
/// [delete_objects()](crate::oss::client::OssClient::delete_objects) API
#[derive(Clone, Debug)]
pub struct DeleteObjectsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    /// Empty in quiet mode when every deletion succeeded.
    pub deleted: Vec<DeletedObject>,
}

#[async_trait]
impl FromOssResponse for DeleteObjectsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;

        let mut deleted: Vec<DeletedObject> = Vec::new();
        if !body.is_empty() {
            let mut root = Element::parse(body.reader())?;
            let encoding_type = get_option_text(&root, "EncodingType");
            while let Some(entry) = root.take_child("Deleted") {
                let mut key = get_text(&entry, "Key")?;
                if encoding_type.as_deref() == Some("url") {
                    key = urldecode(&key)
                        .map_err(ValidationErr::Utf8Error)?
                        .to_string();
                }
                deleted.push(DeletedObject {
                    key,
                    version_id: get_option_text(&entry, "VersionId"),
                    delete_marker: get_default_text(&entry, "DeleteMarker") == "true",
                    delete_marker_version_id: get_option_text(&entry, "DeleteMarkerVersionId"),
                });
            }
        }

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            deleted,
        })
    }
}

/// Response of [copy_object()](crate::oss::client::OssClient::copy_object)
/// API
#[derive(Clone, Debug)]
pub struct CopyObjectResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub etag: String,
    pub last_modified: Option<UtcTime>,
    pub version_id: Option<String>,
}

#[async_trait]
impl FromOssResponse for CopyObjectResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let root = Element::parse(body.reader())?;

        let last_modified = match get_option_text(&root, "LastModified") {
            Some(v) => Some(crate::oss::utils::from_iso8601utc(&v)?),
            None => None,
        };

        Ok(Self {
            request_id: take_request_id(&headers),
            etag: trim_quotes(get_default_text(&root, "ETag")),
            version_id: header_value(&headers, X_OSS_VERSION_ID),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
            last_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delete_result() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<DeleteResult>
  <EncodingType>url</EncodingType>
  <Deleted>
    <Key>multipart%2Fdata.bin</Key>
  </Deleted>
  <Deleted>
    <Key>test.jpg</Key>
    <DeleteMarker>true</DeleteMarker>
    <DeleteMarkerVersionId>CAEQMhiBgIDXiaaB0BYiIGQzYmRkZGUxMTM1ZDRjOTZhNjk4YjRjMTAyZjhl****</DeleteMarkerVersionId>
  </Deleted>
</DeleteResult>"#;
        let mut root = Element::parse(bytes::Bytes::from(body).reader()).unwrap();
        let encoding_type = get_option_text(&root, "EncodingType");
        assert_eq!(encoding_type.as_deref(), Some("url"));

        let first = root.take_child("Deleted").unwrap();
        let key = urldecode(&get_text(&first, "Key").unwrap())
            .unwrap()
            .to_string();
        assert_eq!(key, "multipart/data.bin");

        let second = root.take_child("Deleted").unwrap();
        assert_eq!(get_default_text(&second, "DeleteMarker"), "true");
    }
}
