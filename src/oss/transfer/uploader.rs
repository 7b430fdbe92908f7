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

use crate::oss::builders::{AbortMultipartUpload, CreateMultipartUpload, UploadPart};
use crate::oss::checkpoint::{FileStat, UploadCheckpoint};
use crate::oss::client::OssClient;
use crate::oss::error::{Error, ValidationErr};
use crate::oss::multimap_ext::Multimap;
use crate::oss::object_content::ObjectContent;
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::transfer::{DEFAULT_PARALLEL, calc_part_info, part_len};
use crate::oss::types::{Acl, OssApi, Part, StorageClass};
use crate::oss::utils::{check_bucket_name, check_object_key};
use async_std::io::{ReadExt, SeekExt};
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};

/// Response of [upload_file()](crate::oss::client::OssClient::upload_file).
#[derive(Clone, Debug)]
pub struct UploadFileResponse {
    pub bucket: String,
    pub object: String,
    pub etag: String,
    pub version_id: Option<String>,
    pub crc64: Option<u64>,
}

/// Uploads a local file, transparently switching to a checkpointed
/// multipart upload for content larger than one part.
///
/// With a checkpoint directory configured, progress persists across process
/// restarts: a rerun of the same transfer validates the stored state and
/// re-uploads only the missing parts. Without one, a failed multipart
/// upload is aborted on the service before the error is returned.
pub struct UploadFile {
    client: OssClient,

    region: Option<String>,
    bucket: String,
    object: String,
    file_path: PathBuf,

    part_size: Option<u64>,
    parallel: usize,
    checkpoint_dir: Option<PathBuf>,
    content_type: Option<String>,
    user_metadata: Option<Multimap>,
    acl: Option<Acl>,
    storage_class: Option<StorageClass>,
}

impl UploadFile {
    pub fn new(client: OssClient, bucket: &str, object: &str, file_path: &Path) -> Self {
        Self {
            client,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            file_path: file_path.to_path_buf(),
            part_size: None,
            parallel: DEFAULT_PARALLEL,
            checkpoint_dir: None,
            content_type: None,
            user_metadata: None,
            acl: None,
            storage_class: None,
        }
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn part_size(mut self, part_size: Option<u64>) -> Self {
        self.part_size = part_size;
        self
    }

    /// Number of parts uploaded concurrently.
    pub fn parallel(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    /// Directory holding the checkpoint file; enables resumption.
    pub fn checkpoint_dir(mut self, checkpoint_dir: Option<PathBuf>) -> Self {
        self.checkpoint_dir = checkpoint_dir;
        self
    }

    pub fn content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn user_metadata(mut self, user_metadata: Option<Multimap>) -> Self {
        self.user_metadata = user_metadata;
        self
    }

    pub fn acl(mut self, acl: Option<Acl>) -> Self {
        self.acl = acl;
        self
    }

    pub fn storage_class(mut self, storage_class: Option<StorageClass>) -> Self {
        self.storage_class = storage_class;
        self
    }

    pub async fn send(self) -> Result<UploadFileResponse, Error> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        let file_stat = FileStat::from_path(&self.file_path)?;
        let (part_size, part_count) = calc_part_info(file_stat.size, self.part_size)?;

        if part_count == 1 {
            return self.send_single_put().await;
        }
        self.send_multipart(file_stat, part_size, part_count).await
    }

    async fn send_single_put(self) -> Result<UploadFileResponse, Error> {
        let data: SegmentedBytes = ObjectContent::from(self.file_path.as_path())
            .to_segmented_bytes()
            .await?;
        let resp = crate::oss::builders::PutObject::new(
            self.client.clone(),
            &self.bucket,
            &self.object,
            data,
        )
        .region(self.region.clone())
        .content_type(self.content_type.clone())
        .user_metadata(self.user_metadata.clone())
        .acl(self.acl)
        .storage_class(self.storage_class)
        .send()
        .await?;

        Ok(UploadFileResponse {
            bucket: resp.bucket,
            object: resp.object,
            etag: resp.etag,
            version_id: resp.version_id,
            crc64: resp.crc64,
        })
    }

    async fn send_multipart(
        self,
        file_stat: FileStat,
        part_size: u64,
        part_count: u16,
    ) -> Result<UploadFileResponse, Error> {
        let checkpoint_path = self
            .checkpoint_dir
            .as_ref()
            .map(|dir| UploadCheckpoint::path(dir, &self.bucket, &self.object, &self.file_path));

        let resumed = checkpoint_path.as_ref().and_then(|path| {
            UploadCheckpoint::load(path).filter(|cp| cp.is_valid(&file_stat, part_size))
        });

        let mut checkpoint = match resumed {
            Some(cp) => {
                log::debug!(
                    "resuming upload of {} from checkpoint; {} of {part_count} parts done, upload_id {}",
                    self.file_path.display(),
                    cp.parts.len(),
                    cp.upload_id
                );
                cp
            }
            None => {
                let create_resp = CreateMultipartUpload::new(
                    self.client.clone(),
                    &self.bucket,
                    &self.object,
                )
                .region(self.region.clone())
                .extra_headers(Some(self.multipart_headers()?))
                .send()
                .await?;

                let mut cp = UploadCheckpoint::new(
                    &self.bucket,
                    &self.object,
                    &self.file_path,
                    file_stat,
                    part_size,
                    &create_resp.upload_id,
                );
                if let Some(path) = &checkpoint_path {
                    cp.dump(path)?;
                }
                cp
            }
        };

        let upload_id = checkpoint.upload_id.clone();
        let object_size = checkpoint.file_stat.size;

        let pending: Vec<u16> = (1..=part_count)
            .filter(|n| !checkpoint.is_part_completed(*n))
            .collect();

        let uploads = pending.into_iter().map(|number| {
            let client = self.client.clone();
            let region = self.region.clone();
            let bucket = self.bucket.clone();
            let object = self.object.clone();
            let upload_id = upload_id.clone();
            let file_path = self.file_path.clone();
            let offset = (number as u64 - 1) * part_size;
            let len = part_len(number, object_size, part_size);
            async move {
                let data = read_file_range(&file_path, offset, len as usize).await?;
                let resp = UploadPart::new(client, &bucket, &object, &upload_id, number, data)
                    .region(region)
                    .send()
                    .await?;
                Ok::<Part, Error>(Part {
                    number,
                    etag: resp.etag,
                })
            }
        });

        let mut in_flight = stream::iter(uploads).buffer_unordered(self.parallel);
        while let Some(result) = in_flight.next().await {
            match result {
                Ok(part) => {
                    checkpoint.complete_part(part);
                    if let Some(path) = &checkpoint_path {
                        checkpoint.dump(path)?;
                    }
                }
                Err(e) => {
                    drop(in_flight);
                    return Err(self.fail_multipart(&upload_id, checkpoint_path.is_some(), e).await);
                }
            }
        }
        drop(in_flight);

        let resp = crate::oss::builders::CompleteMultipartUpload::new(
            self.client.clone(),
            &self.bucket,
            &self.object,
            &upload_id,
            checkpoint.parts.clone(),
        )
        .region(self.region.clone())
        .send()
        .await?;

        if let Some(path) = &checkpoint_path {
            UploadCheckpoint::remove(path);
        }

        Ok(UploadFileResponse {
            bucket: resp.bucket,
            object: resp.object,
            etag: resp.etag,
            version_id: resp.version_id,
            crc64: resp.crc64,
        })
    }

    fn multipart_headers(&self) -> Result<Multimap, ValidationErr> {
        use crate::oss::multimap_ext::MultimapExt;
        use crate::oss::types::header_constants::*;

        let mut headers = Multimap::new();
        if let Some(v) = &self.content_type {
            headers.add(CONTENT_TYPE, v.clone());
        }
        if let Some(v) = &self.user_metadata {
            for (key, values) in v.iter_all() {
                for value in values {
                    if key.starts_with(X_OSS_META_PREFIX) {
                        headers.add(key.clone(), value.clone());
                    } else {
                        headers.add(format!("{X_OSS_META_PREFIX}{key}"), value.clone());
                    }
                }
            }
        }
        if let Some(v) = self.acl {
            headers.add(X_OSS_OBJECT_ACL, v.to_string());
        }
        if let Some(v) = self.storage_class {
            headers.add(X_OSS_STORAGE_CLASS, v.to_string());
        }
        Ok(headers)
    }

    /// Failure handling: with a checkpoint the upload id stays alive for a
    /// later resume; without one the upload is aborted on the service.
    async fn fail_multipart(&self, upload_id: &str, keeps_checkpoint: bool, err: Error) -> Error {
        if keeps_checkpoint {
            log::debug!(
                "upload of {} failed; checkpoint kept for resume: {err}",
                self.file_path.display()
            );
            return err;
        }
        let abort = AbortMultipartUpload::new(
            self.client.clone(),
            &self.bucket,
            &self.object,
            upload_id,
        )
        .region(self.region.clone())
        .send()
        .await;
        if let Err(abort_err) = abort {
            log::warn!("failed to abort multipart upload {upload_id}: {abort_err}");
        }
        err
    }
}

/// Reads `len` bytes of the file starting at `offset`.
async fn read_file_range(
    file_path: &Path,
    offset: u64,
    len: usize,
) -> Result<SegmentedBytes, Error> {
    let mut file = async_std::fs::File::open(file_path).await?;
    file.seek(SeekFrom::Start(offset)).await?;

    let mut sb = SegmentedBytes::new();
    let mut remaining = len;
    let mut buf = vec![0u8; remaining.min(256 * 1024)];
    while remaining > 0 {
        let want = buf.len().min(remaining);
        let n = file.read(&mut buf[..want]).await?;
        if n == 0 {
            break;
        }
        sb.append(Bytes::copy_from_slice(&buf[..n]));
        remaining -= n;
    }
    Ok(sb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_file_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, (0u8..=255).collect::<Vec<u8>>()).unwrap();

        let sb = read_file_range(&path, 10, 5).await.unwrap();
        assert_eq!(sb.to_bytes().as_ref(), &[10, 11, 12, 13, 14]);

        // Reading past the end yields the available tail.
        let sb = read_file_range(&path, 250, 20).await.unwrap();
        assert_eq!(sb.len(), 6);
    }
}
