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

//! Resumable file transfer helpers built on the multipart APIs.
//!
//! [`UploadFile`] and [`DownloadFile`] split a file into parts, move the
//! parts through a bounded pool of concurrent requests, and optionally
//! persist checkpoint state so an interrupted transfer picks up where it
//! left off (see [`checkpoint`](crate::oss::checkpoint)).

mod downloader;
mod uploader;

pub use downloader::{DownloadFile, DownloadFileResponse};
pub use uploader::{UploadFile, UploadFileResponse};

use crate::oss::builders::{MAX_MULTIPART_COUNT, MAX_PART_SIZE, MIN_PART_SIZE};
use crate::oss::error::ValidationErr;

/// Part size used when the caller does not pick one.
pub const DEFAULT_PART_SIZE: u64 = 6 * 1024 * 1024; // 6 MiB

/// Number of parts moved concurrently when the caller does not pick one.
pub const DEFAULT_PARALLEL: usize = 3;

/// Returns the part size and part count to transfer an object of the given
/// size.
///
/// A caller-provided part size is validated against the service bounds; a
/// derived one starts from [`DEFAULT_PART_SIZE`] and grows until the count
/// fits under the 10_000-part cap.
pub(crate) fn calc_part_info(
    object_size: u64,
    part_size: Option<u64>,
) -> Result<(u64, u16), ValidationErr> {
    if let Some(v) = part_size {
        if v < MIN_PART_SIZE {
            return Err(ValidationErr::InvalidMinPartSize(v));
        }
        if v > MAX_PART_SIZE {
            return Err(ValidationErr::InvalidMaxPartSize(v));
        }
    }

    let psize = match part_size {
        Some(v) => v,
        None => {
            let mut psize = DEFAULT_PART_SIZE;
            while psize.saturating_mul(MAX_MULTIPART_COUNT as u64) < object_size {
                psize *= 2;
            }
            if psize > MAX_PART_SIZE {
                return Err(ValidationErr::InvalidMaxPartSize(psize));
            }
            psize
        }
    };

    let count = if object_size == 0 {
        1
    } else {
        object_size.div_ceil(psize)
    };
    if count > MAX_MULTIPART_COUNT as u64 {
        return Err(ValidationErr::InvalidPartCount {
            object_size,
            part_size: psize,
            count: MAX_MULTIPART_COUNT,
        });
    }

    Ok((psize, count as u16))
}

/// Byte length of the given part (1-based); the last part may be short.
pub(crate) fn part_len(number: u16, object_size: u64, part_size: u64) -> u64 {
    let offset = (number as u64 - 1) * part_size;
    part_size.min(object_size - offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_part_info_small_object() {
        let (psize, count) = calc_part_info(1024, None).unwrap();
        assert_eq!(psize, DEFAULT_PART_SIZE);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_calc_part_info_exact_multiple() {
        let (psize, count) = calc_part_info(DEFAULT_PART_SIZE * 4, None).unwrap();
        assert_eq!(psize, DEFAULT_PART_SIZE);
        assert_eq!(count, 4);
    }

    #[test]
    fn test_calc_part_info_grows_part_size() {
        // 10_000 default-sized parts cannot hold this object.
        let object_size = DEFAULT_PART_SIZE * (MAX_MULTIPART_COUNT as u64) + 1;
        let (psize, count) = calc_part_info(object_size, None).unwrap();
        assert!(psize > DEFAULT_PART_SIZE);
        assert!(count <= MAX_MULTIPART_COUNT);
    }

    #[test]
    fn test_calc_part_info_rejects_bad_part_sizes() {
        assert!(calc_part_info(1024, Some(MIN_PART_SIZE - 1)).is_err());
        assert!(calc_part_info(1024, Some(MAX_PART_SIZE + 1)).is_err());
        assert!(calc_part_info(MIN_PART_SIZE * 20_000, Some(MIN_PART_SIZE)).is_err());
    }

    #[test]
    fn test_part_len_last_part_short() {
        assert_eq!(part_len(1, 10, 6), 6);
        assert_eq!(part_len(2, 10, 6), 4);
        assert_eq!(part_len(1, 6, 6), 6);
    }

    quickcheck! {
        /// Parts always cover the object exactly and respect the cap.
        fn prop_parts_cover_object(size: u64) -> bool {
            let size = size % (1 << 40);
            let Ok((psize, count)) = calc_part_info(size, None) else {
                return false;
            };
            if size == 0 {
                return count == 1;
            }
            let covered: u64 = (1..=count).map(|n| part_len(n, size, psize)).sum();
            count >= 1 && count <= MAX_MULTIPART_COUNT && covered == size
        }
    }
}
