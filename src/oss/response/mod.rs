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

//! Typed responses of OSS APIs.

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

pub use access_point::{
    CreateAccessPointResponse, DeleteAccessPointResponse, GetAccessPointResponse,
    ListAccessPointsResponse,
};
pub use bucket::{
    BucketExistsResponse, DeleteBucketResponse, GetBucketLocationResponse, ListObjectsResponse,
    PutBucketResponse,
};
pub use bucket_cors::{
    DeleteBucketCorsResponse, GetBucketCorsResponse, PutBucketCorsResponse,
};
pub use bucket_encryption::{
    DeleteBucketEncryptionResponse, GetBucketEncryptionResponse, PutBucketEncryptionResponse,
};
pub use bucket_inventory::{
    DeleteBucketInventoryResponse, GetBucketInventoryResponse, ListBucketInventoryResponse,
    PutBucketInventoryResponse,
};
pub use bucket_lifecycle::{
    DeleteBucketLifecycleResponse, GetBucketLifecycleResponse, PutBucketLifecycleResponse,
};
pub use bucket_logging::{
    DeleteBucketLoggingResponse, GetBucketLoggingResponse, PutBucketLoggingResponse,
};
pub use bucket_referer::{GetBucketRefererResponse, PutBucketRefererResponse};
pub use bucket_worm::{
    AbortBucketWormResponse, CompleteBucketWormResponse, ExtendBucketWormResponse,
    GetBucketWormResponse, InitiateBucketWormResponse,
};
pub use multipart::{
    AbortMultipartUploadResponse, CompleteMultipartUploadResponse, CreateMultipartUploadResponse,
    ListMultipartUploadsResponse, ListPartsResponse, UploadPartResponse,
};
pub use object::{
    CopyObjectResponse, DeleteObjectResponse, DeleteObjectsResponse, GetObjectResponse,
    PutObjectResponse, StatObjectResponse,
};
pub use service::ListBucketsResponse;

/// Implements [`FromOssResponse`](crate::oss::types::FromOssResponse) for
/// bucket-level responses that only carry headers back.
#[macro_export]
macro_rules! impl_basic_bucket_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::oss::types::FromOssResponse for $ty {
                async fn from_oss_response(
                    req: $crate::oss::types::OssRequest,
                    resp: Result<reqwest::Response, $crate::oss::error::Error>,
                ) -> Result<Self, $crate::oss::error::Error> {
                    let mut resp = resp?;
                    let headers = std::mem::take(resp.headers_mut());
                    Ok(Self {
                        request_id: $crate::oss::client::take_request_id(&headers),
                        headers,
                        region: req.inner_region,
                        bucket: $crate::oss::utils::take_bucket(req.bucket)?,
                    })
                }
            }
        )*
    };
}

/// Implements [`FromOssResponse`](crate::oss::types::FromOssResponse) for
/// object-level responses that only carry headers back.
#[macro_export]
macro_rules! impl_basic_object_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::oss::types::FromOssResponse for $ty {
                async fn from_oss_response(
                    req: $crate::oss::types::OssRequest,
                    resp: Result<reqwest::Response, $crate::oss::error::Error>,
                ) -> Result<Self, $crate::oss::error::Error> {
                    let mut resp = resp?;
                    let headers = std::mem::take(resp.headers_mut());
                    Ok(Self {
                        request_id: $crate::oss::client::take_request_id(&headers),
                        headers,
                        region: req.inner_region,
                        bucket: $crate::oss::utils::take_bucket(req.bucket)?,
                        object: $crate::oss::utils::take_object(req.object)?,
                    })
                }
            }
        )*
    };
}
