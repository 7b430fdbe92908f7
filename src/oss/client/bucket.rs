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
    BucketExists, DeleteBucket, GetBucketLocation, ListObjects, PutBucket,
};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`PutBucket`] request builder to create a bucket.
    pub fn put_bucket(&self, bucket: &str) -> PutBucket {
        PutBucket::new(self.clone(), bucket)
    }

    /// Creates a [`DeleteBucket`] request builder.
    pub fn delete_bucket(&self, bucket: &str) -> DeleteBucket {
        DeleteBucket::new(self.clone(), bucket)
    }

    /// Creates a [`BucketExists`] request builder.
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
    ///     let resp = client.bucket_exists("examplebucket").send().await.unwrap();
    ///     println!("bucket exists: {}", resp.exists);
    /// }
    /// ```
    pub fn bucket_exists(&self, bucket: &str) -> BucketExists {
        BucketExists::new(self.clone(), bucket)
    }

    /// Creates a [`GetBucketLocation`] request builder.
    pub fn get_bucket_location(&self, bucket: &str) -> GetBucketLocation {
        GetBucketLocation::new(self.clone(), bucket)
    }

    /// Creates a [`ListObjects`] request builder (V2 listing).
    pub fn list_objects(&self, bucket: &str) -> ListObjects {
        ListObjects::new(self.clone(), bucket)
    }
}
