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
    CopyObject, DeleteObject, DeleteObjects, GetObject, PutObject, StatObject,
};
use crate::oss::client::OssClient;
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::ObjectToDelete;

impl OssClient {
    /// Creates a [`PutObject`] request builder uploading a buffered body.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss::oss::OssClient;
    /// use oss::oss::creds::StaticProvider;
    /// use oss::oss::http::BaseUrl;
    /// use oss::oss::segmented_bytes::SegmentedBytes;
    /// use oss::oss::types::OssApi;
    /// use bytes::Bytes;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let provider = StaticProvider::new("access-key", "secret-key", None);
    ///     let client = OssClient::new(base_url, Some(provider)).unwrap();
    ///
    ///     let data = SegmentedBytes::from(Bytes::from_static(b"hello world"));
    ///     let resp = client
    ///         .put_object("examplebucket", "hello.txt", data)
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("etag: {}", resp.etag);
    /// }
    /// ```
    pub fn put_object(&self, bucket: &str, object: &str, data: SegmentedBytes) -> PutObject {
        PutObject::new(self.clone(), bucket, object, data)
    }

    /// Creates a [`GetObject`] request builder.
    pub fn get_object(&self, bucket: &str, object: &str) -> GetObject {
        GetObject::new(self.clone(), bucket, object)
    }

    /// Creates a [`StatObject`] request builder (HEAD).
    pub fn stat_object(&self, bucket: &str, object: &str) -> StatObject {
        StatObject::new(self.clone(), bucket, object)
    }

    /// Creates a [`DeleteObject`] request builder.
    pub fn delete_object(&self, bucket: &str, object: &str) -> DeleteObject {
        DeleteObject::new(self.clone(), bucket, object)
    }

    /// Creates a [`DeleteObjects`] request builder deleting up to 1000 keys
    /// in one request.
    pub fn delete_objects(&self, bucket: &str, objects: Vec<ObjectToDelete>) -> DeleteObjects {
        DeleteObjects::new(self.clone(), bucket, objects)
    }

    /// Creates a [`CopyObject`] request builder.
    pub fn copy_object(
        &self,
        bucket: &str,
        object: &str,
        src_bucket: &str,
        src_object: &str,
    ) -> CopyObject {
        CopyObject::new(self.clone(), bucket, object, src_bucket, src_object)
    }
}
