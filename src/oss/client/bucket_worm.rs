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

use crate::oss::builders::{
    AbortBucketWorm, CompleteBucketWorm, ExtendBucketWorm, GetBucketWorm, InitiateBucketWorm,
};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates an [`InitiateBucketWorm`] request builder.
    ///
    /// The returned WORM id identifies the policy in the complete, extend
    /// and abort calls.
    pub fn initiate_bucket_worm(
        &self,
        bucket: &str,
        retention_period_days: u32,
    ) -> InitiateBucketWorm {
        InitiateBucketWorm::new(self.clone(), bucket, retention_period_days)
    }

    /// Creates an [`AbortBucketWorm`] request builder.
    pub fn abort_bucket_worm(&self, bucket: &str) -> AbortBucketWorm {
        AbortBucketWorm::new(self.clone(), bucket)
    }

    /// Creates a [`CompleteBucketWorm`] request builder, locking the policy.
    pub fn complete_bucket_worm(&self, bucket: &str, worm_id: &str) -> CompleteBucketWorm {
        CompleteBucketWorm::new(self.clone(), bucket, worm_id)
    }

    /// Creates an [`ExtendBucketWorm`] request builder.
    pub fn extend_bucket_worm(
        &self,
        bucket: &str,
        worm_id: &str,
        retention_period_days: u32,
    ) -> ExtendBucketWorm {
        ExtendBucketWorm::new(self.clone(), bucket, worm_id, retention_period_days)
    }

    /// Creates a [`GetBucketWorm`] request builder.
    pub fn get_bucket_worm(&self, bucket: &str) -> GetBucketWorm {
        GetBucketWorm::new(self.clone(), bucket)
    }
}
