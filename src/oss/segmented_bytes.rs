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

use bytes::{Bytes, BytesMut};

/// An aggregated collection of `Bytes` objects, used as request body.
///
/// Keeps the individually produced chunks instead of concatenating them, so
/// bodies assembled from a stream never get copied into one big buffer.
#[derive(Debug, Clone, Default)]
pub struct SegmentedBytes {
    segments: Vec<Bytes>,
    total_size: usize,
}

impl SegmentedBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.total_size
    }

    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    pub fn append(&mut self, bytes: Bytes) {
        self.total_size += bytes.len();
        self.segments.push(bytes);
    }

    /// Iterate over the chunks; cloning `Bytes` is a cheap refcount bump.
    pub fn iter(&self) -> impl Iterator<Item = Bytes> + '_ {
        self.segments.iter().cloned()
    }

    /// Copy all the content into a single [Bytes] object.
    ///
    /// This function copies; intended for small bodies and tests.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.total_size);
        for bytes in &self.segments {
            buf.extend_from_slice(bytes);
        }
        buf.freeze()
    }
}

impl IntoIterator for SegmentedBytes {
    type Item = Bytes;
    type IntoIter = std::vec::IntoIter<Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl From<Bytes> for SegmentedBytes {
    fn from(bytes: Bytes) -> Self {
        let total_size = bytes.len();
        Self {
            segments: vec![bytes],
            total_size,
        }
    }
}

impl From<String> for SegmentedBytes {
    fn from(s: String) -> Self {
        SegmentedBytes::from(Bytes::from(s.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_tracks_size() {
        let mut sb = SegmentedBytes::new();
        assert!(sb.is_empty());
        sb.append(Bytes::from_static(b"hello "));
        sb.append(Bytes::from_static(b"world"));
        assert_eq!(sb.len(), 11);
        assert_eq!(sb.to_bytes().as_ref(), b"hello world");
    }

    #[test]
    fn test_iter_preserves_chunk_boundaries() {
        let mut sb = SegmentedBytes::new();
        sb.append(Bytes::from_static(b"ab"));
        sb.append(Bytes::from_static(b"cd"));
        let chunks: Vec<Bytes> = sb.iter().collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].as_ref(), b"ab");
    }
}
