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

//! Header names used by the OSS wire protocol.

pub const AUTHORIZATION: &str = "Authorization";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const ETAG: &str = "ETag";
pub const HOST: &str = "Host";
pub const IF_MATCH: &str = "If-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const RANGE: &str = "Range";
pub const USER_AGENT: &str = "User-Agent";

pub const X_OSS_ACL: &str = "x-oss-acl";
pub const X_OSS_ACCESS_POINT_NAME: &str = "x-oss-access-point-name";
pub const X_OSS_CONTENT_SHA256: &str = "x-oss-content-sha256";
pub const X_OSS_COPY_SOURCE: &str = "x-oss-copy-source";
pub const X_OSS_COPY_SOURCE_IF_MATCH: &str = "x-oss-copy-source-if-match";
pub const X_OSS_COPY_SOURCE_IF_MODIFIED_SINCE: &str = "x-oss-copy-source-if-modified-since";
pub const X_OSS_COPY_SOURCE_IF_NONE_MATCH: &str = "x-oss-copy-source-if-none-match";
pub const X_OSS_COPY_SOURCE_IF_UNMODIFIED_SINCE: &str = "x-oss-copy-source-if-unmodified-since";
pub const X_OSS_DATE: &str = "x-oss-date";
pub const X_OSS_DELETE_MARKER: &str = "x-oss-delete-marker";
pub const X_OSS_FORBID_OVERWRITE: &str = "x-oss-forbid-overwrite";
pub const X_OSS_HASH_CRC64ECMA: &str = "x-oss-hash-crc64ecma";
pub const X_OSS_META_PREFIX: &str = "x-oss-meta-";
pub const X_OSS_METADATA_DIRECTIVE: &str = "x-oss-metadata-directive";
pub const X_OSS_OBJECT_ACL: &str = "x-oss-object-acl";
pub const X_OSS_OBJECT_TYPE: &str = "x-oss-object-type";
pub const X_OSS_REQUEST_ID: &str = "x-oss-request-id";
pub const X_OSS_SECURITY_TOKEN: &str = "x-oss-security-token";
pub const X_OSS_SERVER_SIDE_ENCRYPTION: &str = "x-oss-server-side-encryption";
pub const X_OSS_STORAGE_CLASS: &str = "x-oss-storage-class";
pub const X_OSS_VERSION_ID: &str = "x-oss-version-id";
pub const X_OSS_WORM_ID: &str = "x-oss-worm-id";
