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

use crate::oss::client::OssClient;
use crate::oss::transfer::{DownloadFile, UploadFile};
use std::path::Path;

impl OssClient {
    /// Creates an [`UploadFile`] helper that uploads a local file,
    /// switching to a checkpointed multipart upload for large content.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss::oss::OssClient;
    /// use oss::oss::creds::StaticProvider;
    /// use oss::oss::http::BaseUrl;
    /// use std::path::Path;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let provider = StaticProvider::new("access-key", "secret-key", None);
    ///     let client = OssClient::new(base_url, Some(provider)).unwrap();
    ///
    ///     let resp = client
    ///         .upload_file("examplebucket", "backups/big.tar", Path::new("/data/big.tar"))
    ///         .checkpoint_dir(Some("/var/tmp/oss-cp".into()))
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("uploaded, etag {}", resp.etag);
    /// }
    /// ```
    pub fn upload_file(&self, bucket: &str, object: &str, file_path: &Path) -> UploadFile {
        UploadFile::new(self.clone(), bucket, object, file_path)
    }

    /// Creates a [`DownloadFile`] helper that fetches an object through
    /// parallel range reads into a local file.
    pub fn download_file(&self, bucket: &str, object: &str, file_path: &Path) -> DownloadFile {
        DownloadFile::new(self.clone(), bucket, object, file_path)
    }
}
