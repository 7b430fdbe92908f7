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

use crate::oss::builders::ListBuckets;
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`ListBuckets`] request builder.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::oss::types::OssApi::send),
    /// which returns a [`ListBucketsResponse`](crate::oss::response::ListBucketsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss::oss::OssClient;
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
    ///     let resp = client.list_buckets().send().await.unwrap();
    ///     for bucket in resp.buckets {
    ///         println!("{}", bucket.name);
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBuckets {
        ListBuckets::new(self.clone())
    }
}
