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

use crate::oss::builders::{GetBucketReferer, PutBucketReferer};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`PutBucketReferer`] request builder.
    pub fn put_bucket_referer(&self, bucket: &str) -> PutBucketReferer {
        PutBucketReferer::new(self.clone(), bucket)
    }

    /// Creates a [`GetBucketReferer`] request builder.
    pub fn get_bucket_referer(&self, bucket: &str) -> GetBucketReferer {
        GetBucketReferer::new(self.clone(), bucket)
    }
}
