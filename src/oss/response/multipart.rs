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

use crate::impl_basic_object_response;
use crate::oss::client::take_request_id;
use crate::oss::error::Error;
use crate::oss::types::header_constants::{ETAG, X_OSS_HASH_CRC64ECMA, X_OSS_VERSION_ID};
use crate::oss::types::{FromOssResponse, MultipartUpload, OssRequest, PartInfo};
use crate::oss::utils::{
    from_iso8601utc, get_default_text, get_option_text, get_text, take_bucket, take_object,
    trim_quotes,
};
use async_trait::async_trait;
use bytes::Buf;
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of
/// [create_multipart_upload()](crate::oss::client::OssClient::create_multipart_upload)
/// API
#[derive(Clone, Debug)]
pub struct CreateMultipartUploadResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub upload_id: String,
}

#[async_trait]
impl FromOssResponse for CreateMultipartUploadResponse {
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
            object: take_object(req.object)?,
            upload_id: get_text(&root, "UploadId")?,
        })
    }
}

/// Response of [upload_part()](crate::oss::client::OssClient::upload_part)
/// API
#[derive(Clone, Debug)]
pub struct UploadPartResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub etag: String,
    pub crc64: Option<u64>,
}

#[async_trait]
impl FromOssResponse for UploadPartResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let etag = headers
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|v| trim_quotes(v.to_string()))
            .unwrap_or_default();
        let crc64 = headers
            .get(X_OSS_HASH_CRC64ECMA)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
            etag,
            crc64,
        })
    }
}

/// Response of
/// [complete_multipart_upload()](crate::oss::client::OssClient::complete_multipart_upload)
/// API
#[derive(Clone, Debug)]
pub struct CompleteMultipartUploadResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub location: String,
    pub etag: String,
    pub version_id: Option<String>,
    pub crc64: Option<u64>,
}

#[async_trait]
impl FromOssResponse for CompleteMultipartUploadResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let root = Element::parse(body.reader())?;

        let version_id = headers
            .get(X_OSS_VERSION_ID)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let crc64 = headers
            .get(X_OSS_HASH_CRC64ECMA)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
            location: get_default_text(&root, "Location"),
            etag: trim_quotes(get_text(&root, "ETag")?),
            version_id,
            crc64,
        })
    }
}

/// Response of
/// [abort_multipart_upload()](crate::oss::client::OssClient::abort_multipart_upload)
/// API
#[derive(Clone, Debug)]
pub struct AbortMultipartUploadResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
}

impl_basic_object_response!(AbortMultipartUploadResponse);

/// Response of [list_parts()](crate::oss::client::OssClient::list_parts) API
#[derive(Clone, Debug)]
pub struct ListPartsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub object: String,
    pub upload_id: String,
    pub parts: Vec<PartInfo>,
    pub max_parts: Option<u16>,
    pub next_part_number_marker: Option<u16>,
    pub is_truncated: bool,
}

#[async_trait]
impl FromOssResponse for ListPartsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let mut parts: Vec<PartInfo> = Vec::new();
        while let Some(part) = root.take_child("Part") {
            let last_modified = match get_option_text(&part, "LastModified") {
                Some(v) => Some(from_iso8601utc(&v)?),
                None => None,
            };
            parts.push(PartInfo {
                number: get_text(&part, "PartNumber")?.parse()?,
                etag: trim_quotes(get_text(&part, "ETag")?),
                size: get_default_text(&part, "Size").parse().unwrap_or(0),
                last_modified,
            });
        }

        let max_parts = match get_option_text(&root, "MaxParts") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };
        let next_part_number_marker = match get_option_text(&root, "NextPartNumberMarker") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            object: take_object(req.object)?,
            upload_id: get_default_text(&root, "UploadId"),
            parts,
            max_parts,
            next_part_number_marker,
            is_truncated: get_default_text(&root, "IsTruncated") == "true",
        })
    }
}

/// Response of
/// [list_multipart_uploads()](crate::oss::client::OssClient::list_multipart_uploads)
/// API
#[derive(Clone, Debug)]
pub struct ListMultipartUploadsResponse {
    pub headers: HeaderMap,
    pub request_id: String,
    pub region: String,
    pub bucket: String,
    pub uploads: Vec<MultipartUpload>,
    pub key_marker: Option<String>,
    pub upload_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub max_uploads: Option<u16>,
    pub is_truncated: bool,
}

#[async_trait]
impl FromOssResponse for ListMultipartUploadsResponse {
    async fn from_oss_response(
        req: OssRequest,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let mut root = Element::parse(body.reader())?;

        let mut uploads: Vec<MultipartUpload> = Vec::new();
        while let Some(upload) = root.take_child("Upload") {
            let initiated = match get_option_text(&upload, "Initiated") {
                Some(v) => Some(from_iso8601utc(&v)?),
                None => None,
            };
            uploads.push(MultipartUpload {
                key: get_text(&upload, "Key")?,
                upload_id: get_text(&upload, "UploadId")?,
                initiated,
            });
        }

        let max_uploads = match get_option_text(&root, "MaxUploads") {
            Some(v) if !v.is_empty() => Some(v.parse::<u16>()?),
            _ => None,
        };

        Ok(Self {
            request_id: take_request_id(&headers),
            headers,
            region: req.inner_region,
            bucket: take_bucket(req.bucket)?,
            uploads,
            key_marker: get_option_text(&root, "KeyMarker").filter(|v| !v.is_empty()),
            upload_id_marker: get_option_text(&root, "UploadIdMarker").filter(|v| !v.is_empty()),
            next_key_marker: get_option_text(&root, "NextKeyMarker").filter(|v| !v.is_empty()),
            next_upload_id_marker: get_option_text(&root, "NextUploadIdMarker")
                .filter(|v| !v.is_empty()),
            max_uploads,
            is_truncated: get_default_text(&root, "IsTruncated") == "true",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initiate_multipart_result() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<InitiateMultipartUploadResult>
  <Bucket>examplebucket</Bucket>
  <Key>multipart.data</Key>
  <UploadId>0004B9894A22E5B1888A1E29F823****</UploadId>
</InitiateMultipartUploadResult>"#;
        let root = Element::parse(bytes::Bytes::from(body).reader()).unwrap();
        assert_eq!(
            get_text(&root, "UploadId").unwrap(),
            "0004B9894A22E5B1888A1E29F823****"
        );
    }

    #[test]
    fn test_parse_list_parts_result() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListPartsResult>
  <Bucket>examplebucket</Bucket>
  <Key>multipart.data</Key>
  <UploadId>0004B999EF5A239BB9138C6227D6****</UploadId>
  <NextPartNumberMarker>5</NextPartNumberMarker>
  <MaxParts>1000</MaxParts>
  <IsTruncated>false</IsTruncated>
  <Part>
    <PartNumber>1</PartNumber>
    <LastModified>2012-02-23T07:01:34.000Z</LastModified>
    <ETag>"3349DC700140D7F86A0784842780****"</ETag>
    <Size>6291456</Size>
  </Part>
  <Part>
    <PartNumber>5</PartNumber>
    <LastModified>2012-02-23T07:02:03.000Z</LastModified>
    <ETag>"7265F4D211B56873A381D321F586****"</ETag>
    <Size>1024</Size>
  </Part>
</ListPartsResult>"#;
        let mut root = Element::parse(bytes::Bytes::from(body).reader()).unwrap();
        let mut parts = Vec::new();
        while let Some(part) = root.take_child("Part") {
            parts.push(part);
        }
        assert_eq!(parts.len(), 2);
        assert_eq!(get_text(&parts[0], "PartNumber").unwrap(), "1");
        assert_eq!(
            trim_quotes(get_text(&parts[1], "ETag").unwrap()),
            "7265F4D211B56873A381D321F586****"
        );
        assert_eq!(get_default_text(&root, "NextPartNumberMarker"), "5");
    }
}
