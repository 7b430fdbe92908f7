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

use crate::oss::builders::{GetObject, StatObject};
use crate::oss::checkpoint::{DownloadCheckpoint, ObjectStat};
use crate::oss::client::OssClient;
use crate::oss::error::Error;
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::transfer::{DEFAULT_PARALLEL, calc_part_info, part_len};
use crate::oss::types::OssApi;
use crate::oss::utils::{Crc64, check_bucket_name, check_object_key};
use futures_util::StreamExt;
use futures_util::stream;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Response of
/// [download_file()](crate::oss::client::OssClient::download_file).
#[derive(Clone, Debug)]
pub struct DownloadFileResponse {
    pub bucket: String,
    pub object: String,
    pub object_size: u64,
    pub etag: String,
    pub crc64: Option<u64>,
    pub file_path: PathBuf,
}

/// Downloads an object to a local file through parallel range reads.
///
/// Ranges land at their offsets in a `.temp` sibling of the target path,
/// which is renamed into place once every part arrived and, when the
/// service provided a CRC-64, the content verified against it. With a
/// checkpoint directory configured, completed ranges survive process
/// restarts and a rerun fetches only what is missing, as long as the remote
/// object is unchanged (size, ETag and mtime are compared).
pub struct DownloadFile {
    client: OssClient,

    region: Option<String>,
    bucket: String,
    object: String,
    version_id: Option<String>,
    file_path: PathBuf,

    part_size: Option<u64>,
    parallel: usize,
    checkpoint_dir: Option<PathBuf>,
    overwrite: bool,
    verify_crc64: bool,
}

impl DownloadFile {
    pub fn new(client: OssClient, bucket: &str, object: &str, file_path: &Path) -> Self {
        Self {
            client,
            region: None,
            bucket: bucket.to_string(),
            object: object.to_string(),
            version_id: None,
            file_path: file_path.to_path_buf(),
            part_size: None,
            parallel: DEFAULT_PARALLEL,
            checkpoint_dir: None,
            overwrite: false,
            verify_crc64: true,
        }
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = version_id;
        self
    }

    pub fn part_size(mut self, part_size: Option<u64>) -> Self {
        self.part_size = part_size;
        self
    }

    /// Number of ranges fetched concurrently.
    pub fn parallel(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    /// Directory holding the checkpoint file; enables resumption.
    pub fn checkpoint_dir(mut self, checkpoint_dir: Option<PathBuf>) -> Self {
        self.checkpoint_dir = checkpoint_dir;
        self
    }

    /// Replace an existing target file instead of failing.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Verify the downloaded content against `x-oss-hash-crc64ecma`.
    pub fn verify_crc64(mut self, verify_crc64: bool) -> Self {
        self.verify_crc64 = verify_crc64;
        self
    }

    pub async fn send(self) -> Result<DownloadFileResponse, Error> {
        check_bucket_name(&self.bucket)?;
        check_object_key(&self.object)?;

        if !self.overwrite && self.file_path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", self.file_path.display()),
            )
            .into());
        }

        let stat = StatObject::new(self.client.clone(), &self.bucket, &self.object)
            .region(self.region.clone())
            .version_id(self.version_id.clone())
            .send()
            .await?;
        let object_stat = ObjectStat {
            size: stat.size,
            etag: stat.etag.clone(),
            last_modified: stat.last_modified.map(|t| t.timestamp()).unwrap_or(0),
        };
        let expected_crc64 = stat.crc64;

        if object_stat.size == 0 {
            let temp_path = self.temp_path();
            fs::write(&temp_path, b"")?;
            fs::rename(&temp_path, &self.file_path)?;
            return Ok(DownloadFileResponse {
                bucket: self.bucket,
                object: self.object,
                object_size: 0,
                etag: object_stat.etag,
                crc64: expected_crc64,
                file_path: self.file_path,
            });
        }

        let (part_size, part_count) = calc_part_info(object_stat.size, self.part_size)?;

        let checkpoint_path = self.checkpoint_dir.as_ref().map(|dir| {
            DownloadCheckpoint::path(
                dir,
                &self.bucket,
                &self.object,
                self.version_id.as_deref(),
                &self.file_path,
            )
        });

        let resumed = checkpoint_path.as_ref().and_then(|path| {
            DownloadCheckpoint::load(path).filter(|cp| cp.is_valid(&object_stat, part_size))
        });
        let mut checkpoint = match resumed {
            Some(cp) => {
                log::debug!(
                    "resuming download of {} from checkpoint; {} of {part_count} parts done",
                    self.object,
                    cp.parts.len()
                );
                cp
            }
            None => DownloadCheckpoint::new(
                &self.bucket,
                &self.object,
                self.version_id.as_deref(),
                &self.file_path,
                object_stat.clone(),
                part_size,
            ),
        };

        let temp_path = self.temp_path();
        let mut temp_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&temp_path)?;
        temp_file.set_len(object_stat.size)?;

        let pending: Vec<u16> = (1..=part_count)
            .filter(|n| !checkpoint.is_part_completed(*n))
            .collect();

        let object_size = object_stat.size;
        let downloads = pending.into_iter().map(|number| {
            let client = self.client.clone();
            let region = self.region.clone();
            let bucket = self.bucket.clone();
            let object = self.object.clone();
            let version_id = self.version_id.clone();
            let offset = (number as u64 - 1) * part_size;
            let len = part_len(number, object_size, part_size);
            async move {
                let resp = GetObject::new(client, &bucket, &object)
                    .region(region)
                    .version_id(version_id)
                    .offset(Some(offset))
                    .length(Some(len))
                    .send()
                    .await?;
                let data = resp.content.to_segmented_bytes().await?;
                Ok::<(u16, u64, SegmentedBytes), Error>((number, offset, data))
            }
        });

        let mut in_flight = stream::iter(downloads).buffer_unordered(self.parallel);
        while let Some(result) = in_flight.next().await {
            let (number, offset, data) = result?;
            temp_file.seek(SeekFrom::Start(offset))?;
            for chunk in data.iter() {
                temp_file.write_all(&chunk)?;
            }
            checkpoint.complete_part(number);
            if let Some(path) = &checkpoint_path {
                checkpoint.dump(path)?;
            }
        }
        drop(in_flight);

        temp_file.sync_all()?;
        drop(temp_file);

        if self.verify_crc64 {
            if let Some(expected) = expected_crc64 {
                let actual = file_crc64(&temp_path)?;
                if actual != expected {
                    return Err(Error::ChecksumMismatch(
                        self.object.clone(),
                        expected,
                        actual,
                    ));
                }
            }
        }

        fs::rename(&temp_path, &self.file_path)?;
        if let Some(path) = &checkpoint_path {
            DownloadCheckpoint::remove(path);
        }

        Ok(DownloadFileResponse {
            bucket: self.bucket,
            object: self.object,
            object_size: object_stat.size,
            etag: object_stat.etag,
            crc64: expected_crc64,
            file_path: self.file_path,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|v| v.to_os_string())
            .unwrap_or_default();
        name.push(".temp");
        self.file_path.with_file_name(name)
    }
}

/// Computes CRC-64/XZ of a file by streaming reads.
fn file_crc64(path: &Path) -> Result<u64, Error> {
    let mut file = fs::File::open(path)?;
    let mut digest = Crc64::new();
    let mut buf = vec![0u8; 256 * 1024];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        digest.update(&buf[..n]);
    }
    Ok(digest.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::utils::crc64;

    #[test]
    fn test_file_crc64_matches_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let data: Vec<u8> = (0..100_000u32).map(|v| v as u8).collect();
        std::fs::write(&path, &data).unwrap();
        assert_eq!(file_crc64(&path).unwrap(), crc64(&data));
    }

    #[test]
    fn test_temp_path_keeps_directory() {
        let base_url: crate::oss::http::BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        let client =
            OssClient::new::<crate::oss::creds::StaticProvider>(base_url, None).unwrap();
        let download = DownloadFile::new(
            client,
            "examplebucket",
            "key",
            Path::new("/tmp/downloads/data.bin"),
        );
        assert_eq!(
            download.temp_path(),
            PathBuf::from("/tmp/downloads/data.bin.temp")
        );
    }
}
