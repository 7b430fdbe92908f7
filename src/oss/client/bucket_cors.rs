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

use crate::oss::builders::{DeleteBucketCors, GetBucketCors, PutBucketCors};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`PutBucketCors`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss::oss::OssClient;
    /// use oss::oss::cors_config::{CorsConfig, CorsRule};
    /// use oss::oss::creds::StaticProvider;
    /// use oss::oss::http::BaseUrl;
    /// use oss::oss::types::OssApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let provider = StaticProvider::new("access-key", "secret-key", None);
    ///     let client = OssClient::new(base_url, Some(provider)).unwrap();
    ///
    ///     let config = CorsConfig {
    ///         rules: vec![CorsRule {
    ///             allowed_origins: vec!["*".to_string()],
    ///             allowed_methods: vec!["GET".to_string()],
    ///             ..Default::default()
    ///         }],
    ///         response_vary: None,
    ///     };
    ///     client
    ///         .put_bucket_cors("examplebucket")
    ///         .cors_config(config)
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_cors(&self, bucket: &str) -> PutBucketCors {
        PutBucketCors::new(self.clone(), bucket)
    }

    /// Creates a [`GetBucketCors`] request builder.
    pub fn get_bucket_cors(&self, bucket: &str) -> GetBucketCors {
        GetBucketCors::new(self.clone(), bucket)
    }

    /// Creates a [`DeleteBucketCors`] request builder.
    pub fn delete_bucket_cors(&self, bucket: &str) -> DeleteBucketCors {
        DeleteBucketCors::new(self.clone(), bucket)
    }
}
