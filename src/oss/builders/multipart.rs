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

//! Builders for the multipart upload APIs.

use crate::oss::client::OssClient;
use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    AbortMultipartUploadResponse, CompleteMultipartUploadResponse, CreateMultipartUploadResponse,
    ListMultipartUploadsResponse, ListPartsResponse, UploadPartResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::oss::types::{OssApi, OssRequest, Part, ToOssRequest};
use crate::oss::utils::{check_bucket_name, check_object_key, md5sum_hash, urlencode};
use bytes::BytesMut;
use hyper::http::Method;

/// Minimum allowed size (in bytes) for a multipart upload part (except the
/// last).
pub const MIN_PART_SIZE: u64 = 102_400; // 100 KiB

/// Maximum allowed size (in bytes) for a single multipart upload part.
pub const MAX_PART_SIZE: u64 = 5_368_709_120; // 5 GiB

/// Maximum number of parts allowed in a multipart upload.
pub const MAX_MULTIPART_COUNT: u16 = 10_000;

fn check_upload_id(upload_id: &str) -> Result<(), ValidationErr> {
    if upload_id.is_empty() {
        return Err(ValidationErr::InvalidUploadId(String::from(
            "upload ID cannot be empty",
        )));
    }
    Ok(())
}

fn check_part_number(part_number: u16) -> Result<(), ValidationErr> {
    if !(1..=MAX_MULTIPART_COUNT).contains(&part_number) {
        return Err(ValidationErr::InvalidPartNumber(format!(
            "part number must be between 1 and {MAX_MULTIPART_COUNT}"
        )));
    }
    Ok(())
}

/// Argument builder for the `InitiateMultipartUpload` API.
#[derive(Clone, Debug)]
pub struct CreateMultipartUpload {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
}

impl CreateMultipartUpload {
    pub fn new(client: OssClient, bucket: &str, object: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
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

impl OssApi for CreateMultipartUpload {
    type OssResponse = CreateMultipartUploadResponse;
}

impl ToOssRequest for CreateMultipartUpload {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.add(CONTENT_TYPE, "application/octet-stream");
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("uploads", "");

        Ok(OssRequest::new(self.client, Method::POST)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(headers))
    }
}

/// Argument builder for the `UploadPart` API.
#[derive(Clone, Debug)]
pub struct UploadPart {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
    upload_id: String,
    part_number: u16,
    data: SegmentedBytes,
}

impl UploadPart {
    pub fn new(
        client: OssClient,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_number: u16,
        data: SegmentedBytes,
    ) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            upload_id: upload_id.to_string(),
            part_number,
            data,
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

impl OssApi for UploadPart {
    type OssResponse = UploadPartResponse;
}

impl ToOssRequest for UploadPart {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;
        check_upload_id(&self.upload_id)?;
        check_part_number(self.part_number)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("partNumber", self.part_number.to_string());
        query_params.add("uploadId", self.upload_id);

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .body(Some(self.data)))
    }
}

/// Argument builder for the `CompleteMultipartUpload` API.
#[derive(Clone, Debug)]
pub struct CompleteMultipartUpload {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
    upload_id: String,
    parts: Vec<Part>,
}

impl CompleteMultipartUpload {
    pub fn new(
        client: OssClient,
        bucket: &str,
        object: &str,
        upload_id: &str,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            upload_id: upload_id.to_string(),
            parts,
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

impl OssApi for CompleteMultipartUpload {
    type OssResponse = CompleteMultipartUploadResponse;
}

impl ToOssRequest for CompleteMultipartUpload {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;
        check_upload_id(&self.upload_id)?;
        if self.parts.is_empty() {
            return Err(ValidationErr::EmptyParts);
        }

        // Size the buffer from the part count to avoid reallocations while
        // building the XML payload.
        let mut data = BytesMut::with_capacity(100 * self.parts.len() + 100);
        data.extend_from_slice(b"<CompleteMultipartUpload>");
        for part in self.parts.iter() {
            data.extend_from_slice(b"<Part><PartNumber>");
            data.extend_from_slice(part.number.to_string().as_bytes());
            data.extend_from_slice(b"</PartNumber><ETag>");
            data.extend_from_slice(part.etag.as_bytes());
            data.extend_from_slice(b"</ETag></Part>");
        }
        data.extend_from_slice(b"</CompleteMultipartUpload>");
        let data = data.freeze();

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, "application/xml");
        headers.add(CONTENT_MD5, md5sum_hash(data.as_ref()));

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("uploadId", self.upload_id);

        Ok(OssRequest::new(self.client, Method::POST)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(headers)
            .body(Some(SegmentedBytes::from(data))))
    }
}

/// Argument builder for the `AbortMultipartUpload` API.
#[derive(Clone, Debug)]
pub struct AbortMultipartUpload {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
    upload_id: String,
}

impl AbortMultipartUpload {
    pub fn new(client: OssClient, bucket: &str, object: &str, upload_id: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            upload_id: upload_id.to_string(),
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

impl OssApi for AbortMultipartUpload {
    type OssResponse = AbortMultipartUploadResponse;
}

impl ToOssRequest for AbortMultipartUpload {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;
        check_upload_id(&self.upload_id)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("uploadId", urlencode(&self.upload_id).to_string());

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `ListParts` API.
#[derive(Clone, Debug)]
pub struct ListParts {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
    upload_id: String,
    max_parts: Option<u16>,
    part_number_marker: Option<u16>,
}

impl ListParts {
    pub fn new(client: OssClient, bucket: &str, object: &str, upload_id: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            upload_id: upload_id.to_string(),
            max_parts: None,
            part_number_marker: None,
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

    pub fn max_parts(mut self, max_parts: Option<u16>) -> Self {
        self.max_parts = max_parts;
        self
    }

    /// Listing starts after this part number.
    pub fn part_number_marker(mut self, part_number_marker: Option<u16>) -> Self {
        self.part_number_marker = part_number_marker;
        self
    }
}

impl OssApi for ListParts {
    type OssResponse = ListPartsResponse;
}

impl ToOssRequest for ListParts {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;
        check_upload_id(&self.upload_id)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("uploadId", self.upload_id);
        if let Some(v) = self.max_parts {
            query_params.add("max-parts", v.to_string());
        }
        if let Some(v) = self.part_number_marker {
            query_params.add("part-number-marker", v.to_string());
        }

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `ListMultipartUploads` API, listing in-progress
/// uploads of a bucket.
#[derive(Clone, Debug)]
pub struct ListMultipartUploads {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    prefix: Option<String>,
    delimiter: Option<String>,
    key_marker: Option<String>,
    upload_id_marker: Option<String>,
    max_uploads: Option<u16>,
}

impl ListMultipartUploads {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            prefix: None,
            delimiter: None,
            key_marker: None,
            upload_id_marker: None,
            max_uploads: None,
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

    pub fn delimiter(mut self, delimiter: Option<String>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn key_marker(mut self, key_marker: Option<String>) -> Self {
        self.key_marker = key_marker;
        self
    }

    pub fn upload_id_marker(mut self, upload_id_marker: Option<String>) -> Self {
        self.upload_id_marker = upload_id_marker;
        self
    }

    pub fn max_uploads(mut self, max_uploads: Option<u16>) -> Self {
        self.max_uploads = max_uploads;
        self
    }
}

impl OssApi for ListMultipartUploads {
    type OssResponse = ListMultipartUploadsResponse;
}

impl ToOssRequest for ListMultipartUploads {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("uploads", "");
        if let Some(v) = self.prefix {
            query_params.add("prefix", v);
        }
        if let Some(v) = self.delimiter {
            query_params.add("delimiter", v);
        }
        if let Some(v) = self.key_marker {
            query_params.add("key-marker", v);
        }
        if let Some(v) = self.upload_id_marker {
            query_params.add("upload-id-marker", v);
        }
        if let Some(v) = self.max_uploads {
            query_params.add("max-uploads", v.to_string());
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
    use bytes::Bytes;

    fn test_client() -> OssClient {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        OssClient::new::<StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn test_upload_part_marshal() {
        let data = SegmentedBytes::from(Bytes::from_static(b"part data"));
        let req = UploadPart::new(test_client(), "examplebucket", "key", "uid-1", 3, data)
            .to_oss_request()
            .unwrap();
        assert_eq!(
            req.query_params.get("partNumber").map(String::as_str),
            Some("3")
        );
        assert_eq!(
            req.query_params.get("uploadId").map(String::as_str),
            Some("uid-1")
        );
    }

    #[test]
    fn test_upload_part_rejects_zero_part_number() {
        let data = SegmentedBytes::from(Bytes::from_static(b"x"));
        assert!(
            UploadPart::new(test_client(), "examplebucket", "key", "uid-1", 0, data)
                .to_oss_request()
                .is_err()
        );
    }

    #[test]
    fn test_complete_multipart_upload_body() {
        let parts = vec![
            Part {
                number: 1,
                etag: String::from("\"etag-1\""),
            },
            Part {
                number: 2,
                etag: String::from("\"etag-2\""),
            },
        ];
        let req = CompleteMultipartUpload::new(
            test_client(),
            "examplebucket",
            "key",
            "uid-1",
            parts,
        )
        .to_oss_request()
        .unwrap();
        assert_eq!(
            req.query_params.get("uploadId").map(String::as_str),
            Some("uid-1")
        );
    }

    #[test]
    fn test_complete_multipart_upload_rejects_empty_parts() {
        assert!(
            CompleteMultipartUpload::new(
                test_client(),
                "examplebucket",
                "key",
                "uid-1",
                Vec::new()
            )
            .to_oss_request()
            .is_err()
        );
    }
}
