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
    AbortMultipartUpload, CompleteMultipartUpload, CreateMultipartUpload, ListMultipartUploads,
    ListParts, UploadPart,
};
use crate::oss::client::OssClient;
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::Part;

impl OssClient {
    /// Creates a [`CreateMultipartUpload`] request builder.
    pub fn create_multipart_upload(&self, bucket: &str, object: &str) -> CreateMultipartUpload {
        CreateMultipartUpload::new(self.clone(), bucket, object)
    }

    /// Creates an [`UploadPart`] request builder.
    pub fn upload_part(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_number: u16,
        data: SegmentedBytes,
    ) -> UploadPart {
        UploadPart::new(self.clone(), bucket, object, upload_id, part_number, data)
    }

    /// Creates a [`CompleteMultipartUpload`] request builder.
    pub fn complete_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        parts: Vec<Part>,
    ) -> CompleteMultipartUpload {
        CompleteMultipartUpload::new(self.clone(), bucket, object, upload_id, parts)
    }

    /// Creates an [`AbortMultipartUpload`] request builder.
    pub fn abort_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
    ) -> AbortMultipartUpload {
        AbortMultipartUpload::new(self.clone(), bucket, object, upload_id)
    }

    /// Creates a [`ListParts`] request builder.
    pub fn list_parts(&self, bucket: &str, object: &str, upload_id: &str) -> ListParts {
        ListParts::new(self.clone(), bucket, object, upload_id)
    }

    /// Creates a [`ListMultipartUploads`] request builder.
    pub fn list_multipart_uploads(&self, bucket: &str) -> ListMultipartUploads {
        ListMultipartUploads::new(self.clone(), bucket)
    }
}
