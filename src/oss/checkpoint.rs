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

//! On-disk checkpoint state for resumable transfers.
//!
//! A checkpoint records the progress of a multipart upload or download as a
//! JSON file. Before a transfer resumes from one, the record must pass three
//! checks: the magic marker matches, the self-MD5 over the serialized record
//! matches, and the source fingerprint (file stat for uploads, object stat
//! for downloads) still describes the data being transferred. A record
//! failing any check is discarded and the transfer restarts clean.

use crate::oss::error::Error;
use crate::oss::types::Part;
use crate::oss::utils::md5sum_hex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const UPLOAD_CHECKPOINT_MAGIC: &str = "9F4BE5EE-E76D-42BD-8B86-65D3A5F2CB5A";
const DOWNLOAD_CHECKPOINT_MAGIC: &str = "6A9CDE03-15D7-4B4D-98CD-1E9A3BBE58A2";

/// Fingerprint of a local source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub size: u64,
    /// Modification time in seconds since the Unix epoch.
    pub last_modified: i64,
}

impl FileStat {
    pub fn from_metadata(meta: &fs::Metadata) -> FileStat {
        let last_modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        FileStat {
            size: meta.len(),
            last_modified,
        }
    }

    pub fn from_path(path: &Path) -> std::io::Result<FileStat> {
        Ok(FileStat::from_metadata(&fs::metadata(path)?))
    }
}

/// Fingerprint of a remote object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStat {
    pub size: u64,
    pub etag: String,
    /// Last-modified time in seconds since the Unix epoch.
    pub last_modified: i64,
}

fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)
}

/// Resumable multipart upload state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadCheckpoint {
    magic: String,
    md5: String,
    pub bucket: String,
    pub object: String,
    pub file_path: String,
    pub file_stat: FileStat,
    pub part_size: u64,
    pub upload_id: String,
    /// Completed parts, kept sorted by part number.
    pub parts: Vec<Part>,
}

impl UploadCheckpoint {
    pub fn new(
        bucket: &str,
        object: &str,
        file_path: &Path,
        file_stat: FileStat,
        part_size: u64,
        upload_id: &str,
    ) -> Self {
        Self {
            magic: UPLOAD_CHECKPOINT_MAGIC.to_string(),
            md5: String::new(),
            bucket: bucket.to_string(),
            object: object.to_string(),
            file_path: file_path.display().to_string(),
            file_stat,
            part_size,
            upload_id: upload_id.to_string(),
            parts: Vec::new(),
        }
    }

    /// Path of the checkpoint file for the given transfer coordinates.
    pub fn path(dir: &Path, bucket: &str, object: &str, file_path: &Path) -> PathBuf {
        let coordinates = format!("{}/{}:{}", bucket, object, file_path.display());
        dir.join(format!("{}.ucp", md5sum_hex(coordinates.as_bytes())))
    }

    /// Loads a checkpoint record; a missing or unparseable file yields None.
    pub fn load(path: &Path) -> Option<UploadCheckpoint> {
        let data = fs::read(path).ok()?;
        serde_json::from_slice(&data).ok()
    }

    /// Whether this record may seed a resumed transfer.
    pub fn is_valid(&self, file_stat: &FileStat, part_size: u64) -> bool {
        self.magic == UPLOAD_CHECKPOINT_MAGIC
            && self.md5 == self.content_md5()
            && self.file_stat == *file_stat
            && self.part_size == part_size
            && !self.upload_id.is_empty()
    }

    fn content_md5(&self) -> String {
        let mut record = self.clone();
        record.md5 = String::new();
        md5sum_hex(&serde_json::to_vec(&record).unwrap_or_default())
    }

    pub fn complete_part(&mut self, part: Part) {
        match self.parts.binary_search_by(|p| p.number.cmp(&part.number)) {
            Ok(i) => self.parts[i] = part,
            Err(i) => self.parts.insert(i, part),
        }
    }

    pub fn is_part_completed(&self, number: u16) -> bool {
        self.parts
            .binary_search_by(|p| p.number.cmp(&number))
            .is_ok()
    }

    /// Persists the record, refreshing the self-MD5.
    pub fn dump(&mut self, path: &Path) -> Result<(), Error> {
        self.md5 = self.content_md5();
        let data = serde_json::to_vec(self)?;
        write_atomically(path, &data)?;
        Ok(())
    }

    pub fn remove(path: &Path) {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to remove upload checkpoint {}: {e}", path.display());
            }
        }
    }
}

/// Resumable multipart download state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadCheckpoint {
    magic: String,
    md5: String,
    pub bucket: String,
    pub object: String,
    pub version_id: Option<String>,
    pub file_path: String,
    pub object_stat: ObjectStat,
    pub part_size: u64,
    /// Numbers of the completed parts, kept sorted.
    pub parts: Vec<u16>,
}

impl DownloadCheckpoint {
    pub fn new(
        bucket: &str,
        object: &str,
        version_id: Option<&str>,
        file_path: &Path,
        object_stat: ObjectStat,
        part_size: u64,
    ) -> Self {
        Self {
            magic: DOWNLOAD_CHECKPOINT_MAGIC.to_string(),
            md5: String::new(),
            bucket: bucket.to_string(),
            object: object.to_string(),
            version_id: version_id.map(|v| v.to_string()),
            file_path: file_path.display().to_string(),
            object_stat,
            part_size,
            parts: Vec::new(),
        }
    }

    /// Path of the checkpoint file for the given transfer coordinates.
    pub fn path(
        dir: &Path,
        bucket: &str,
        object: &str,
        version_id: Option<&str>,
        file_path: &Path,
    ) -> PathBuf {
        let coordinates = format!(
            "{}/{}:{}:{}",
            bucket,
            object,
            version_id.unwrap_or_default(),
            file_path.display()
        );
        dir.join(format!("{}.dcp", md5sum_hex(coordinates.as_bytes())))
    }

    /// Loads a checkpoint record; a missing or unparseable file yields None.
    pub fn load(path: &Path) -> Option<DownloadCheckpoint> {
        let data = fs::read(path).ok()?;
        serde_json::from_slice(&data).ok()
    }

    /// Whether this record may seed a resumed transfer.
    pub fn is_valid(&self, object_stat: &ObjectStat, part_size: u64) -> bool {
        self.magic == DOWNLOAD_CHECKPOINT_MAGIC
            && self.md5 == self.content_md5()
            && self.object_stat == *object_stat
            && self.part_size == part_size
    }

    fn content_md5(&self) -> String {
        let mut record = self.clone();
        record.md5 = String::new();
        md5sum_hex(&serde_json::to_vec(&record).unwrap_or_default())
    }

    pub fn complete_part(&mut self, number: u16) {
        if let Err(i) = self.parts.binary_search(&number) {
            self.parts.insert(i, number);
        }
    }

    pub fn is_part_completed(&self, number: u16) -> bool {
        self.parts.binary_search(&number).is_ok()
    }

    /// Persists the record, refreshing the self-MD5.
    pub fn dump(&mut self, path: &Path) -> Result<(), Error> {
        self.md5 = self.content_md5();
        let data = serde_json::to_vec(self)?;
        write_atomically(path, &data)?;
        Ok(())
    }

    pub fn remove(path: &Path) {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "failed to remove download checkpoint {}: {e}",
                    path.display()
                );
            }
        }
    }
}
