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

use crate::oss::builders::{DeleteBucketLogging, GetBucketLogging, PutBucketLogging};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`PutBucketLogging`] request builder.
    pub fn put_bucket_logging(&self, bucket: &str) -> PutBucketLogging {
        PutBucketLogging::new(self.clone(), bucket)
    }

    /// Creates a [`GetBucketLogging`] request builder.
    pub fn get_bucket_logging(&self, bucket: &str) -> GetBucketLogging {
        GetBucketLogging::new(self.clone(), bucket)
    }

    /// Creates a [`DeleteBucketLogging`] request builder.
    pub fn delete_bucket_logging(&self, bucket: &str) -> DeleteBucketLogging {
        DeleteBucketLogging::new(self.clone(), bucket)
    }
}
