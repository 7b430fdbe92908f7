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

//! Core OSS types and trait definitions

pub mod basic_types;
pub mod header_constants;
pub mod oss_request;
pub mod traits;

pub use basic_types::{
    AccessPointSummary, Acl, Bucket, DeletedObject, ListEntry, LoggingEnabled, MetadataDirective,
    MultipartUpload, NetworkOrigin, ObjectToDelete, Owner, Part, PartInfo, RefererConfig, SseRule,
    StorageClass, VpcConfiguration, WormState,
};
pub use header_constants::*;
pub use oss_request::OssRequest;
pub use traits::{FromOssResponse, OssApi, ToOssRequest};
