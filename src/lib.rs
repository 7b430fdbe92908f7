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

//! # OSS Rust SDK (`oss-rs`)
//!
//! This crate provides a strongly-typed, async-first interface to Alibaba Cloud
//! Object Storage Service (OSS) compatible APIs.
//!
//! Each supported operation has a corresponding request builder (e.g.
//! [`oss::builders::PutBucketLifecycle`], [`oss::builders::PutObject`],
//! [`oss::builders::UploadPart`]), which allows users to configure request
//! parameters using a fluent builder pattern.
//!
//! All request builders implement the [`oss::types::OssApi`] trait, which provides
//! the async [`send`](crate::oss::types::OssApi::send) method to execute the
//! request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use oss::oss::OssClient;
//! use oss::oss::creds::StaticProvider;
//! use oss::oss::http::BaseUrl;
//! use oss::oss::types::OssApi;
//! use oss::oss::response::ListBucketsResponse;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
//!     let provider = StaticProvider::new("access-key", "secret-key", None);
//!     let client = OssClient::new(base_url, Some(provider)).unwrap();
//!
//!     let resp: ListBucketsResponse = client
//!         .list_buckets()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     for bucket in resp.buckets {
//!         println!("{}", bucket.name);
//!     }
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`oss::client::OssClient`] returns a builder struct
//! - Builders implement [`oss::types::ToOssRequest`] for request conversion and
//!   [`oss::types::OssApi`] for execution
//! - Responses implement [`oss::types::FromOssResponse`] for consistent decoding
//! - Resumable file transfers persist checkpoint state on disk and validate it
//!   before resuming (see [`oss::checkpoint`])

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod oss;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
