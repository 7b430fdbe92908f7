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

use crate::oss::builders::{DeleteBucketLifecycle, GetBucketLifecycle, PutBucketLifecycle};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`PutBucketLifecycle`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss::oss::OssClient;
    /// use oss::oss::creds::StaticProvider;
    /// use oss::oss::http::BaseUrl;
    /// use oss::oss::lifecycle_config::{LifecycleConfig, LifecycleRule};
    /// use oss::oss::types::OssApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let provider = StaticProvider::new("access-key", "secret-key", None);
    ///     let client = OssClient::new(base_url, Some(provider)).unwrap();
    ///
    ///     let config = LifecycleConfig {
    ///         rules: vec![LifecycleRule {
    ///             id: "expire-logs".to_string(),
    ///             prefix: "logs/".to_string(),
    ///             status: true,
    ///             expiration_days: Some(365),
    ///             ..Default::default()
    ///         }],
    ///     };
    ///     client
    ///         .put_bucket_lifecycle("examplebucket")
    ///         .life_cycle_config(config)
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_lifecycle(&self, bucket: &str) -> PutBucketLifecycle {
        PutBucketLifecycle::new(self.clone(), bucket)
    }

    /// Creates a [`GetBucketLifecycle`] request builder.
    pub fn get_bucket_lifecycle(&self, bucket: &str) -> GetBucketLifecycle {
        GetBucketLifecycle::new(self.clone(), bucket)
    }

    /// Creates a [`DeleteBucketLifecycle`] request builder.
    pub fn delete_bucket_lifecycle(&self, bucket: &str) -> DeleteBucketLifecycle {
        DeleteBucketLifecycle::new(self.clone(), bucket)
    }
}
