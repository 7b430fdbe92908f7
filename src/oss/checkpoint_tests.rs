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

//! Tests for the resumable-transfer checkpoint records.

use super::checkpoint::{DownloadCheckpoint, FileStat, ObjectStat, UploadCheckpoint};
use super::types::Part;
use rand::RngCore;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source_file(dir: &Path, len: usize) -> std::path::PathBuf {
    let path = dir.join("source.bin");
    let mut data = vec![0u8; len];
    SmallRng::seed_from_u64(42).fill_bytes(&mut data);
    fs::write(&path, data).unwrap();
    path
}

fn upload_checkpoint(dir: &Path) -> (UploadCheckpoint, std::path::PathBuf, FileStat) {
    let source = write_source_file(dir, 4096);
    let file_stat = FileStat::from_path(&source).unwrap();
    let cp = UploadCheckpoint::new(
        "examplebucket",
        "backups/source.bin",
        &source,
        file_stat.clone(),
        1024,
        "0004B9894A22E5B1888A1E29F823****",
    );
    let cp_path = UploadCheckpoint::path(dir, "examplebucket", "backups/source.bin", &source);
    (cp, cp_path, file_stat)
}

// ===========================
// Upload checkpoint
// ===========================

#[test]
fn test_upload_checkpoint_roundtrip() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path, file_stat) = upload_checkpoint(dir.path());

    cp.complete_part(Part {
        number: 2,
        etag: String::from("etag-2"),
    });
    cp.complete_part(Part {
        number: 1,
        etag: String::from("etag-1"),
    });
    cp.dump(&cp_path).unwrap();

    let loaded = UploadCheckpoint::load(&cp_path).unwrap();
    assert!(loaded.is_valid(&file_stat, 1024));
    assert_eq!(loaded.upload_id, "0004B9894A22E5B1888A1E29F823****");
    // Parts come back sorted regardless of completion order.
    assert_eq!(loaded.parts.len(), 2);
    assert_eq!(loaded.parts[0].number, 1);
    assert_eq!(loaded.parts[1].number, 2);
    assert!(loaded.is_part_completed(1));
    assert!(!loaded.is_part_completed(3));
}

#[test]
fn test_upload_checkpoint_missing_file_yields_none() {
    let dir = TempDir::new().unwrap();
    assert!(UploadCheckpoint::load(&dir.path().join("missing.ucp")).is_none());
}

#[test]
fn test_upload_checkpoint_tamper_detection() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path, file_stat) = upload_checkpoint(dir.path());
    cp.complete_part(Part {
        number: 1,
        etag: String::from("etag-1"),
    });
    cp.dump(&cp_path).unwrap();

    // Flip a recorded etag directly in the JSON.
    let tampered = fs::read_to_string(&cp_path)
        .unwrap()
        .replace("etag-1", "etag-X");
    fs::write(&cp_path, tampered).unwrap();

    let loaded = UploadCheckpoint::load(&cp_path).unwrap();
    assert!(!loaded.is_valid(&file_stat, 1024));
}

#[test]
fn test_upload_checkpoint_rejects_changed_source_file() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path, _) = upload_checkpoint(dir.path());
    cp.dump(&cp_path).unwrap();

    // A different size is a different file, even at the same path.
    let changed = FileStat {
        size: 8192,
        last_modified: cp.file_stat.last_modified,
    };
    let loaded = UploadCheckpoint::load(&cp_path).unwrap();
    assert!(!loaded.is_valid(&changed, 1024));

    let touched = FileStat {
        size: cp.file_stat.size,
        last_modified: cp.file_stat.last_modified + 60,
    };
    assert!(!loaded.is_valid(&touched, 1024));
}

#[test]
fn test_upload_checkpoint_rejects_changed_part_size() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path, file_stat) = upload_checkpoint(dir.path());
    cp.dump(&cp_path).unwrap();

    let loaded = UploadCheckpoint::load(&cp_path).unwrap();
    assert!(loaded.is_valid(&file_stat, 1024));
    assert!(!loaded.is_valid(&file_stat, 2048));
}

#[test]
fn test_upload_checkpoint_garbage_file_yields_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.ucp");
    fs::write(&path, b"not json at all").unwrap();
    assert!(UploadCheckpoint::load(&path).is_none());
}

#[test]
fn test_upload_checkpoint_path_is_stable_and_distinct() {
    let dir = TempDir::new().unwrap();
    let p1 = UploadCheckpoint::path(dir.path(), "bucket", "a", Path::new("/tmp/f1"));
    let p2 = UploadCheckpoint::path(dir.path(), "bucket", "a", Path::new("/tmp/f1"));
    let p3 = UploadCheckpoint::path(dir.path(), "bucket", "b", Path::new("/tmp/f1"));
    assert_eq!(p1, p2);
    assert_ne!(p1, p3);
    assert!(p1.extension().is_some_and(|v| v == "ucp"));
}

#[test]
fn test_upload_checkpoint_complete_part_replaces_duplicate() {
    let dir = TempDir::new().unwrap();
    let (mut cp, _, _) = upload_checkpoint(dir.path());
    cp.complete_part(Part {
        number: 1,
        etag: String::from("old"),
    });
    cp.complete_part(Part {
        number: 1,
        etag: String::from("new"),
    });
    assert_eq!(cp.parts.len(), 1);
    assert_eq!(cp.parts[0].etag, "new");
}

#[test]
fn test_upload_checkpoint_remove() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path, _) = upload_checkpoint(dir.path());
    cp.dump(&cp_path).unwrap();
    assert!(cp_path.exists());
    UploadCheckpoint::remove(&cp_path);
    assert!(!cp_path.exists());
    // Removing twice is not an error.
    UploadCheckpoint::remove(&cp_path);
}

// ===========================
// Download checkpoint
// ===========================

fn object_stat() -> ObjectStat {
    ObjectStat {
        size: 1 << 20,
        etag: String::from("5B3C1A2E053D763E1B002CC607C5A0FE"),
        last_modified: 1_701_600_000,
    }
}

fn download_checkpoint(dir: &Path) -> (DownloadCheckpoint, std::path::PathBuf) {
    let dest = dir.join("dest.bin");
    let cp = DownloadCheckpoint::new(
        "examplebucket",
        "backups/dest.bin",
        None,
        &dest,
        object_stat(),
        256 * 1024,
    );
    let cp_path = DownloadCheckpoint::path(dir, "examplebucket", "backups/dest.bin", None, &dest);
    (cp, cp_path)
}

#[test]
fn test_download_checkpoint_roundtrip() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path) = download_checkpoint(dir.path());

    cp.complete_part(3);
    cp.complete_part(1);
    cp.complete_part(3);
    cp.dump(&cp_path).unwrap();

    let loaded = DownloadCheckpoint::load(&cp_path).unwrap();
    assert!(loaded.is_valid(&object_stat(), 256 * 1024));
    assert_eq!(loaded.parts, vec![1, 3]);
    assert!(loaded.is_part_completed(3));
    assert!(!loaded.is_part_completed(2));
}

#[test]
fn test_download_checkpoint_rejects_changed_object() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path) = download_checkpoint(dir.path());
    cp.dump(&cp_path).unwrap();
    let loaded = DownloadCheckpoint::load(&cp_path).unwrap();

    let mut changed = object_stat();
    changed.etag = String::from("0F6BB1B040E2BCD6B2B7EA4C75F02C2F");
    assert!(!loaded.is_valid(&changed, 256 * 1024));

    let mut resized = object_stat();
    resized.size += 1;
    assert!(!loaded.is_valid(&resized, 256 * 1024));
}

#[test]
fn test_download_checkpoint_tamper_detection() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path) = download_checkpoint(dir.path());
    cp.complete_part(1);
    cp.dump(&cp_path).unwrap();

    let tampered = fs::read_to_string(&cp_path)
        .unwrap()
        .replace("\"parts\":[1]", "\"parts\":[1,2]");
    fs::write(&cp_path, tampered).unwrap();

    let loaded = DownloadCheckpoint::load(&cp_path).unwrap();
    assert!(!loaded.is_valid(&object_stat(), 256 * 1024));
}

#[test]
fn test_download_checkpoint_version_distinguishes_path() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("dest.bin");
    let p1 = DownloadCheckpoint::path(dir.path(), "bucket", "key", None, &dest);
    let p2 = DownloadCheckpoint::path(dir.path(), "bucket", "key", Some("v1"), &dest);
    assert_ne!(p1, p2);
    assert!(p1.extension().is_some_and(|v| v == "dcp"));
}

#[test]
fn test_checkpoint_dump_is_atomic() {
    let dir = TempDir::new().unwrap();
    let (mut cp, cp_path) = download_checkpoint(dir.path());
    cp.dump(&cp_path).unwrap();
    cp.complete_part(1);
    cp.dump(&cp_path).unwrap();

    // No temp file is left behind after a dump.
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|v| v == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
