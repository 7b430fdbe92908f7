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

//! Implementation of the Object Storage Service (OSS) client

pub mod builders;
pub mod checkpoint;
pub mod client;
pub mod cors_config;
pub mod creds;
pub mod error;
pub mod http;
pub mod inventory_config;
pub mod lifecycle_config;
pub mod multimap_ext;
mod object_content;
pub mod oss_error_response;
pub mod response;
pub mod segmented_bytes;
pub mod signer;
pub mod transfer;
pub mod types;
pub mod utils;

#[cfg(test)]
mod checkpoint_tests;
#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod signer_tests;

pub use client::{OssClient, OssClientBuilder};
pub use object_content::{ObjectContent, Size};
