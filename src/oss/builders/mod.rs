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

//! Argument builders for OSS APIs.

mod access_point;
mod bucket;
mod bucket_cors;
mod bucket_encryption;
mod bucket_inventory;
mod bucket_lifecycle;
mod bucket_logging;
mod bucket_referer;
mod bucket_worm;
mod multipart;
mod object;
mod service;

pub use access_point::{CreateAccessPoint, DeleteAccessPoint, GetAccessPoint, ListAccessPoints};
pub use bucket::{BucketExists, DeleteBucket, GetBucketLocation, ListObjects, PutBucket};
pub use bucket_cors::{DeleteBucketCors, GetBucketCors, PutBucketCors};
pub use bucket_encryption::{DeleteBucketEncryption, GetBucketEncryption, PutBucketEncryption};
pub use bucket_inventory::{
    DeleteBucketInventory, GetBucketInventory, ListBucketInventory, PutBucketInventory,
};
pub use bucket_lifecycle::{DeleteBucketLifecycle, GetBucketLifecycle, PutBucketLifecycle};
pub use bucket_logging::{DeleteBucketLogging, GetBucketLogging, PutBucketLogging};
pub use bucket_referer::{GetBucketReferer, PutBucketReferer};
pub use bucket_worm::{
    AbortBucketWorm, CompleteBucketWorm, ExtendBucketWorm, GetBucketWorm, InitiateBucketWorm,
};
pub use multipart::{
    AbortMultipartUpload, CompleteMultipartUpload, CreateMultipartUpload, ListMultipartUploads,
    ListParts, MAX_MULTIPART_COUNT, MAX_PART_SIZE, MIN_PART_SIZE, UploadPart,
};
pub use object::{CopyObject, DeleteObject, DeleteObjects, GetObject, PutObject, StatObject};
pub use service::ListBuckets;
