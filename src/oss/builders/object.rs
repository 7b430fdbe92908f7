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
    CopyObjectResponse, DeleteObjectResponse, DeleteObjectsResponse, GetObjectResponse,
    PutObjectResponse, StatObjectResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::*;
use crate::oss::types::{Acl, MetadataDirective, ObjectToDelete, OssApi, OssRequest, StorageClass, ToOssRequest};
use crate::oss::utils::{
    UtcTime, check_bucket_name, check_object_key, md5sum_hash, to_http_header_value,
    urlencode_object_key, write_xml_tag,
};
use bytes::BytesMut;
use hyper::http::Method;

fn object_write_headers(
    extra_headers: Option<Multimap>,
    content_type: Option<String>,
    user_metadata: Option<Multimap>,
    acl: Option<Acl>,
    storage_class: Option<StorageClass>,
    forbid_overwrite: bool,
) -> Multimap {
    let mut map = extra_headers.unwrap_or_default();

    if let Some(v) = content_type {
        map.add(CONTENT_TYPE, v);
    }
    if let Some(v) = user_metadata {
        for (key, values) in v.iter_all() {
            for value in values {
                if key.starts_with(X_OSS_META_PREFIX) {
                    map.add(key.clone(), value.clone());
                } else {
                    map.add(format!("{X_OSS_META_PREFIX}{key}"), value.clone());
                }
            }
        }
    }
    if let Some(v) = acl {
        map.add(X_OSS_OBJECT_ACL, v.to_string());
    }
    if let Some(v) = storage_class {
        map.add(X_OSS_STORAGE_CLASS, v.to_string());
    }
    if forbid_overwrite {
        map.add(X_OSS_FORBID_OVERWRITE, "true");
    }

    map
}

/// Argument builder for the `PutObject` API. This is a lower-level API that
/// uploads a fully buffered body; for large files see
/// [`UploadFile`](crate::oss::transfer::UploadFile).
#[derive(Clone, Debug)]
pub struct PutObject {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,

    content_type: Option<String>,
    user_metadata: Option<Multimap>,
    acl: Option<Acl>,
    storage_class: Option<StorageClass>,
    forbid_overwrite: bool,
    data: SegmentedBytes,
}

impl PutObject {
    pub fn new(client: OssClient, bucket: &str, object: &str, data: SegmentedBytes) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            content_type: None,
            user_metadata: None,
            acl: None,
            storage_class: None,
            forbid_overwrite: false,
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

    pub fn content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    /// Keys are stored under the `x-oss-meta-` prefix; the prefix is added
    /// when missing.
    pub fn user_metadata(mut self, user_metadata: Option<Multimap>) -> Self {
        self.user_metadata = user_metadata;
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

    /// Fail with `FileAlreadyExists` instead of overwriting an existing key.
    pub fn forbid_overwrite(mut self, forbid_overwrite: bool) -> Self {
        self.forbid_overwrite = forbid_overwrite;
        self
    }
}

impl OssApi for PutObject {
    type OssResponse = PutObjectResponse;
}

impl ToOssRequest for PutObject {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        let headers = object_write_headers(
            self.extra_headers,
            self.content_type,
            self.user_metadata,
            self.acl,
            self.storage_class,
            self.forbid_overwrite,
        );

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(Some(self.data)))
    }
}

/// Argument builder for the `GetObject` API.
#[derive(Clone, Debug)]
pub struct GetObject {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,

    version_id: Option<String>,
    offset: Option<u64>,
    length: Option<u64>,
    match_etag: Option<String>,
    not_match_etag: Option<String>,
    modified_since: Option<UtcTime>,
    unmodified_since: Option<UtcTime>,
}

impl GetObject {
    pub fn new(client: OssClient, bucket: &str, object: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            version_id: None,
            offset: None,
            length: None,
            match_etag: None,
            not_match_etag: None,
            modified_since: None,
            unmodified_since: None,
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

    pub fn version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = version_id;
        self
    }

    /// Byte offset the read starts at.
    pub fn offset(mut self, offset: Option<u64>) -> Self {
        self.offset = offset;
        self
    }

    /// Number of bytes to read from the offset.
    pub fn length(mut self, length: Option<u64>) -> Self {
        self.length = length;
        self
    }

    pub fn match_etag(mut self, match_etag: Option<String>) -> Self {
        self.match_etag = match_etag;
        self
    }

    pub fn not_match_etag(mut self, not_match_etag: Option<String>) -> Self {
        self.not_match_etag = not_match_etag;
        self
    }

    pub fn modified_since(mut self, modified_since: Option<UtcTime>) -> Self {
        self.modified_since = modified_since;
        self
    }

    pub fn unmodified_since(mut self, unmodified_since: Option<UtcTime>) -> Self {
        self.unmodified_since = unmodified_since;
        self
    }

    fn range_value(&self) -> Option<String> {
        match (self.offset, self.length) {
            (None, None) => None,
            (offset, length) => {
                let offset = offset.unwrap_or(0);
                Some(match length {
                    Some(length) => format!("bytes={}-{}", offset, offset + length - 1),
                    None => format!("bytes={offset}-"),
                })
            }
        }
    }
}

impl OssApi for GetObject {
    type OssResponse = GetObjectResponse;
}

impl ToOssRequest for GetObject {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        let mut headers: Multimap = self.extra_headers.clone().unwrap_or_default();
        if let Some(v) = self.range_value() {
            headers.add(RANGE, v);
        }
        if let Some(v) = &self.match_etag {
            headers.add(IF_MATCH, v.clone());
        }
        if let Some(v) = &self.not_match_etag {
            headers.add(IF_NONE_MATCH, v.clone());
        }
        if let Some(v) = self.modified_since {
            headers.add(IF_MODIFIED_SINCE, to_http_header_value(v));
        }
        if let Some(v) = self.unmodified_since {
            headers.add(IF_UNMODIFIED_SINCE, to_http_header_value(v));
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add_version(self.version_id);

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(headers))
    }
}

/// Argument builder for the `HeadObject` API, returning object metadata
/// without the body.
#[derive(Clone, Debug)]
pub struct StatObject {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
    version_id: Option<String>,
}

impl StatObject {
    pub fn new(client: OssClient, bucket: &str, object: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            version_id: None,
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

    pub fn version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = version_id;
        self
    }
}

impl OssApi for StatObject {
    type OssResponse = StatObjectResponse;
}

impl ToOssRequest for StatObject {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add_version(self.version_id);

        Ok(OssRequest::new(self.client, Method::HEAD)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteObject` API.
#[derive(Clone, Debug)]
pub struct DeleteObject {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,
    version_id: Option<String>,
}

impl DeleteObject {
    pub fn new(client: OssClient, bucket: &str, object: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            version_id: None,
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

    pub fn version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = version_id;
        self
    }
}

impl OssApi for DeleteObject {
    type OssResponse = DeleteObjectResponse;
}

impl ToOssRequest for DeleteObject {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add_version(self.version_id);

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteMultipleObjects` API.
///
/// Deletes up to 1000 keys in one round-trip. Keys are sent URL-encoded
/// (`encoding-type=url`), so XML-unsafe key names survive the trip.
#[derive(Clone, Debug)]
pub struct DeleteObjects {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    objects: Vec<ObjectToDelete>,
    /// In quiet mode the service only reports failed deletions.
    quiet: bool,
}

impl DeleteObjects {
    pub fn new(client: OssClient, bucket: &str, objects: Vec<ObjectToDelete>) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            objects,
            quiet: false,
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

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl OssApi for DeleteObjects {
    type OssResponse = DeleteObjectsResponse;
}

impl ToOssRequest for DeleteObjects {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if self.objects.is_empty() {
            return Err(ValidationErr::EmptyDeleteObjects);
        }
        for object in &self.objects {
            check_object_key(&object.key)?;
        }

        let mut data = BytesMut::with_capacity(64 * self.objects.len() + 64);
        data.extend_from_slice(b"<Delete><Quiet>");
        data.extend_from_slice(self.quiet.to_string().as_bytes());
        data.extend_from_slice(b"</Quiet>");
        for object in &self.objects {
            data.extend_from_slice(b"<Object>");
            let mut key = String::new();
            write_xml_tag(&mut key, "Key", &urlencode_object_key(&object.key));
            data.extend_from_slice(key.as_bytes());
            if let Some(v) = &object.version_id {
                let mut version = String::new();
                write_xml_tag(&mut version, "VersionId", v);
                data.extend_from_slice(version.as_bytes());
            }
            data.extend_from_slice(b"</Object>");
        }
        data.extend_from_slice(b"</Delete>");
        let data = data.freeze();

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, "application/xml");
        headers.add(CONTENT_MD5, md5sum_hash(data.as_ref()));

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("delete", "");
        query_params.add("encoding-type", "url");

        Ok(OssRequest::new(self.client, Method::POST)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(headers)
            .body(Some(SegmentedBytes::from(data))))
    }
}

/// Argument builder for the `CopyObject` API.
///
/// The source must not exceed 1 GiB; larger objects go through
/// `UploadPartCopy`-style workflows.
#[derive(Clone, Debug)]
pub struct CopyObject {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    object: String,

    src_bucket: String,
    src_object: String,
    src_version_id: Option<String>,
    metadata_directive: Option<MetadataDirective>,
    user_metadata: Option<Multimap>,
    match_etag: Option<String>,
    not_match_etag: Option<String>,
    modified_since: Option<UtcTime>,
    unmodified_since: Option<UtcTime>,
    forbid_overwrite: bool,
}

impl CopyObject {
    pub fn new(
        client: OssClient,
        bucket: &str,
        object: &str,
        src_bucket: &str,
        src_object: &str,
    ) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            src_bucket: src_bucket.to_string(),
            src_object: src_object.to_string(),
            src_version_id: None,
            metadata_directive: None,
            user_metadata: None,
            match_etag: None,
            not_match_etag: None,
            modified_since: None,
            unmodified_since: None,
            forbid_overwrite: false,
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

    pub fn src_version_id(mut self, src_version_id: Option<String>) -> Self {
        self.src_version_id = src_version_id;
        self
    }

    /// `REPLACE` substitutes the source metadata with the metadata of this
    /// request; the default `COPY` keeps the source metadata.
    pub fn metadata_directive(mut self, metadata_directive: Option<MetadataDirective>) -> Self {
        self.metadata_directive = metadata_directive;
        self
    }

    pub fn user_metadata(mut self, user_metadata: Option<Multimap>) -> Self {
        self.user_metadata = user_metadata;
        self
    }

    pub fn match_etag(mut self, match_etag: Option<String>) -> Self {
        self.match_etag = match_etag;
        self
    }

    pub fn not_match_etag(mut self, not_match_etag: Option<String>) -> Self {
        self.not_match_etag = not_match_etag;
        self
    }

    pub fn modified_since(mut self, modified_since: Option<UtcTime>) -> Self {
        self.modified_since = modified_since;
        self
    }

    pub fn unmodified_since(mut self, unmodified_since: Option<UtcTime>) -> Self {
        self.unmodified_since = unmodified_since;
        self
    }

    pub fn forbid_overwrite(mut self, forbid_overwrite: bool) -> Self {
        self.forbid_overwrite = forbid_overwrite;
        self
    }
}

impl OssApi for CopyObject {
    type OssResponse = CopyObjectResponse;
}

impl ToOssRequest for CopyObject {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;
        check_bucket_name(&self.src_bucket)?;
        check_object_key(&self.src_object)?;

        let mut copy_source = format!(
            "/{}/{}",
            self.src_bucket,
            urlencode_object_key(&self.src_object)
        );
        if let Some(v) = &self.src_version_id {
            copy_source.push_str("?versionId=");
            copy_source.push_str(v);
        }

        let mut headers = object_write_headers(
            self.extra_headers,
            None,
            self.user_metadata,
            None,
            None,
            self.forbid_overwrite,
        );
        headers.add(X_OSS_COPY_SOURCE, copy_source);
        if let Some(v) = self.metadata_directive {
            headers.add(X_OSS_METADATA_DIRECTIVE, v.to_string());
        }
        if let Some(v) = &self.match_etag {
            headers.add(X_OSS_COPY_SOURCE_IF_MATCH, v.clone());
        }
        if let Some(v) = &self.not_match_etag {
            headers.add(X_OSS_COPY_SOURCE_IF_NONE_MATCH, v.clone());
        }
        if let Some(v) = self.modified_since {
            headers.add(X_OSS_COPY_SOURCE_IF_MODIFIED_SINCE, to_http_header_value(v));
        }
        if let Some(v) = self.unmodified_since {
            headers.add(
                X_OSS_COPY_SOURCE_IF_UNMODIFIED_SINCE,
                to_http_header_value(v),
            );
        }

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers))
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
    fn test_put_object_rejects_bad_key() {
        let data = SegmentedBytes::from(Bytes::from_static(b"hello"));
        assert!(
            PutObject::new(test_client(), "examplebucket", "/bad", data)
                .to_oss_request()
                .is_err()
        );
    }

    #[test]
    fn test_get_object_range_header() {
        let get = GetObject::new(test_client(), "examplebucket", "key")
            .offset(Some(100))
            .length(Some(50));
        assert_eq!(get.range_value().as_deref(), Some("bytes=100-149"));

        let get = GetObject::new(test_client(), "examplebucket", "key").offset(Some(100));
        assert_eq!(get.range_value().as_deref(), Some("bytes=100-"));

        let get = GetObject::new(test_client(), "examplebucket", "key");
        assert_eq!(get.range_value(), None);
    }

    #[test]
    fn test_delete_objects_body() {
        let req = DeleteObjects::new(
            test_client(),
            "examplebucket",
            vec![ObjectToDelete::from("a.txt"), ("b.txt", "v1").into()],
        )
        .quiet(true)
        .to_oss_request()
        .unwrap();
        assert!(req.query_params.contains_key("delete"));
        assert_eq!(
            req.query_params.get("encoding-type").map(String::as_str),
            Some("url")
        );
    }

    #[test]
    fn test_delete_objects_rejects_empty_list() {
        assert!(
            DeleteObjects::new(test_client(), "examplebucket", Vec::new())
                .to_oss_request()
                .is_err()
        );
    }

    #[test]
    fn test_copy_object_source_header() {
        let req = CopyObject::new(
            test_client(),
            "dst-bucket",
            "dst.txt",
            "src-bucket",
            "dir/src.txt",
        )
        .metadata_directive(Some(MetadataDirective::Replace))
        .to_oss_request()
        .unwrap();
        assert_eq!(req.object.as_deref(), Some("dst.txt"));
    }
}
