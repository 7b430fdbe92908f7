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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Datelike, NaiveDateTime, ParseError, Utc};
use crc_fast::{CrcAlgorithm, Digest as CrcDigest};
use lazy_static::lazy_static;
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
pub use urlencoding::decode as urldecode;
pub use urlencoding::encode as urlencode;
use xmltree::Element;

use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::Multimap;
use crate::oss::segmented_bytes::SegmentedBytes;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA-256 of the empty string, used when signing requests without a body.
pub const EMPTY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Payload marker for streaming bodies whose hash is not computed up front.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Merges two multimaps.
pub fn merge(m1: &mut Multimap, m2: &Multimap) {
    for (key, values) in m2.iter_all() {
        for value in values {
            m1.insert(key.to_string(), value.to_string());
        }
    }
}

/// Inserts a valueless sub-resource key into optionally given query parameters.
pub fn insert(query_params: Option<Multimap>, key: &str) -> Multimap {
    let mut map = query_params.unwrap_or_default();
    map.insert(key.to_string(), String::new());
    map
}

/// Computes CRC-64/XZ (the `x-oss-hash-crc64ecma` checksum) of given data.
pub fn crc64(data: &[u8]) -> u64 {
    let mut digest = CrcDigest::new(CrcAlgorithm::Crc64Xz);
    digest.update(data);
    digest.finalize()
}

/// Incremental CRC-64/XZ hasher for streaming verification.
pub struct Crc64 {
    digest: CrcDigest,
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc64 {
    pub fn new() -> Self {
        Self {
            digest: CrcDigest::new(CrcAlgorithm::Crc64Xz),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    pub fn finalize(self) -> u64 {
        self.digest.finalize()
    }
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn sha256_hash_sb(sb: &SegmentedBytes) -> String {
    let mut hasher = Sha256::new();
    for data in sb.iter() {
        hasher.update(data);
    }
    format!("{:x}", hasher.finalize())
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

pub fn md5sum_hash_sb(sb: &SegmentedBytes) -> String {
    let mut hasher = md5::Context::new();
    for data in sb.iter() {
        hasher.consume(data);
    }
    b64encode(hasher.compute().as_slice())
}

/// Gets hex encoded MD5 hash of given data; used for checkpoint naming and
/// self-validation where base64 padding characters are unwanted.
pub fn md5sum_hex(data: &[u8]) -> String {
    format!("{:x}", md5compute(data))
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets `x-oss-date` value of given time
pub fn to_oss_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Gets HTTP header value of given time
pub fn to_http_header_value(time: UtcTime) -> String {
    format!(
        "{}, {} {} {} GMT",
        time.weekday(),
        time.day(),
        match time.month() {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => "",
        },
        time.format("%Y %H:%M:%S")
    )
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S.%3fZ") {
            Ok(d) => d,
            _ => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")?,
        },
        Utc,
    ))
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT")?,
        Utc,
    ))
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

pub mod oss_date_format {
    use super::{UtcTime, from_iso8601utc, to_iso8601utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &UtcTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_iso8601utc(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<UtcTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        from_iso8601utc(&s).map_err(serde::de::Error::custom)
    }
}

/// Checks if given hostname is valid or not
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    for token in value.split('.') {
        if token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
        {
            return false;
        }
    }

    true
}

/// Validates given bucket name.
///
/// OSS bucket names are 3-63 characters of lowercase letters, digits and
/// hyphens, and must start and end with a letter or digit.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(String::from(
            "bucket name cannot be empty",
        )));
    }

    if bucket_name.len() < 3 {
        return Err(ValidationErr::InvalidBucketName(String::from(
            "bucket name cannot be less than 3 characters",
        )));
    }

    if bucket_name.len() > 63 {
        return Err(ValidationErr::InvalidBucketName(String::from(
            "bucket name cannot be greater than 63 characters",
        )));
    }

    lazy_static! {
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(String::from(
            "bucket name must contain only lowercase letters, digits and hyphens, and must not start or end with a hyphen",
        )));
    }

    Ok(())
}

/// Validates given object key.
///
/// Keys are 1-1023 bytes of UTF-8 and must not start with `/` or `\`.
pub fn check_object_key(object_key: &str) -> Result<(), ValidationErr> {
    if object_key.is_empty() {
        return Err(ValidationErr::InvalidObjectKey(String::from(
            "object key cannot be empty",
        )));
    }

    if object_key.len() > 1023 {
        return Err(ValidationErr::InvalidObjectKey(String::from(
            "object key cannot be greater than 1023 bytes",
        )));
    }

    if object_key.starts_with('/') || object_key.starts_with('\\') {
        return Err(ValidationErr::InvalidObjectKey(String::from(
            "object key cannot start with '/' or '\\'",
        )));
    }

    Ok(())
}

/// Gets text value of given XML element for given tag.
pub fn get_text(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::XmlError(format!("<{tag}> tag not found")))?
        .get_text()
        .ok_or(ValidationErr::XmlError(format!(
            "text of <{tag}> tag not found"
        )))?
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_option_text(element: &Element, tag: &str) -> Option<String> {
    if let Some(v) = element.get_child(tag) {
        return Some(v.get_text().unwrap_or_default().to_string());
    }

    None
}

/// Gets default text value of given XML element for given tag.
pub fn get_default_text(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}

/// Trims leading and trailing double quotes, as served in `ETag` values.
pub fn trim_quotes(value: String) -> String {
    value.trim_matches('"').to_string()
}

/// Takes the bucket name out of an executed request.
pub fn take_bucket(bucket: Option<String>) -> Result<String, ValidationErr> {
    bucket.ok_or(ValidationErr::InvalidBucketName(String::from(
        "no bucket name provided",
    )))
}

/// Takes the object key out of an executed request.
pub fn take_object(object: Option<String>) -> Result<String, ValidationErr> {
    object.ok_or(ValidationErr::InvalidObjectKey(String::from(
        "no object key provided",
    )))
}

/// Writes `<tag>text</tag>` into the given XML string, escaping the text.
pub fn write_xml_tag(xml: &mut String, tag: &str, text: &str) {
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    for ch in text.chars() {
        match ch {
            '&' => xml.push_str("&amp;"),
            '<' => xml.push_str("&lt;"),
            '>' => xml.push_str("&gt;"),
            _ => xml.push(ch),
        }
    }
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("examplebucket").is_ok());
        assert!(check_bucket_name("example-bucket-1").is_ok());
        assert!(check_bucket_name("").is_err());
        assert!(check_bucket_name("ab").is_err());
        assert!(check_bucket_name("UpperCase").is_err());
        assert!(check_bucket_name("-leading-hyphen").is_err());
        assert!(check_bucket_name("trailing-hyphen-").is_err());
        assert!(check_bucket_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_check_object_key() {
        assert!(check_object_key("a").is_ok());
        assert!(check_object_key("dir/sub/key.txt").is_ok());
        assert!(check_object_key("").is_err());
        assert!(check_object_key("/leading-slash").is_err());
        assert!(check_object_key("\\leading-backslash").is_err());
        assert!(check_object_key(&"k".repeat(1024)).is_err());
    }

    #[test]
    fn test_date_roundtrip() {
        let now = utc_now();
        let s = to_iso8601utc(now);
        let parsed = from_iso8601utc(&s).unwrap();
        assert_eq!(to_iso8601utc(parsed), s);
    }

    #[test]
    fn test_write_xml_tag_escapes() {
        let mut xml = String::new();
        write_xml_tag(&mut xml, "Key", "a&b<c>d");
        assert_eq!(xml, "<Key>a&amp;b&lt;c&gt;d</Key>");
    }

    #[test]
    fn test_crc64_incremental_matches_oneshot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let mut digest = Crc64::new();
        digest.update(&data[..10]);
        digest.update(&data[10..]);
        assert_eq!(digest.finalize(), crc64(data));
    }
}
