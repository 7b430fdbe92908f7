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

//! Tests for the V4 signing implementation.
//!
//! These exercise the security-critical signing logic through its public
//! API only, asserting the documented shape of the derived values rather
//! than coupling to internals.

use super::multimap_ext::{Multimap, MultimapExt};
use super::signer::{get_scope, get_signing_key, get_string_to_sign, sign_v4_oss};
use super::types::header_constants::{HOST, X_OSS_CONTENT_SHA256, X_OSS_DATE};
use super::utils::EMPTY_SHA256;
use chrono::{TimeZone, Utc};
use hyper::http::Method;

fn get_test_date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 12, 3, 12, 12, 12).unwrap()
}

fn signed_headers() -> Multimap {
    let mut headers = Multimap::new();
    headers.add(HOST, "examplebucket.oss-cn-hangzhou.aliyuncs.com");
    headers.add(X_OSS_CONTENT_SHA256, EMPTY_SHA256);
    headers.add(X_OSS_DATE, "20231203T121212Z");
    headers
}

#[test]
fn test_scope_format() {
    assert_eq!(
        get_scope(get_test_date(), "cn-hangzhou"),
        "20231203/cn-hangzhou/oss/aliyun_v4_request"
    );
}

#[test]
fn test_string_to_sign_shape() {
    let scope = get_scope(get_test_date(), "cn-hangzhou");
    let sts = get_string_to_sign(get_test_date(), &scope, "abc123");
    let lines: Vec<&str> = sts.split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "OSS4-HMAC-SHA256");
    assert_eq!(lines[1], "20231203T121212Z");
    assert_eq!(lines[2], "20231203/cn-hangzhou/oss/aliyun_v4_request");
    assert_eq!(lines[3], "abc123");
}

#[test]
fn test_signing_key_is_deterministic() {
    let key1 = get_signing_key("secret", get_test_date(), "cn-hangzhou");
    let key2 = get_signing_key("secret", get_test_date(), "cn-hangzhou");
    assert_eq!(key1, key2);
    assert_eq!(key1.len(), 32);

    // Any input change must change the derived key.
    assert_ne!(key1, get_signing_key("other", get_test_date(), "cn-hangzhou"));
    assert_ne!(key1, get_signing_key("secret", get_test_date(), "cn-shanghai"));
}

#[test]
fn test_sign_v4_oss_adds_authorization_header() {
    let mut headers = signed_headers();
    sign_v4_oss(
        &Method::GET,
        "/examplebucket/key",
        "cn-hangzhou",
        &mut headers,
        &Multimap::new(),
        "access-key",
        "secret-key",
        EMPTY_SHA256,
        get_test_date(),
    );

    let authorization = headers.get("Authorization").unwrap();
    assert!(authorization.starts_with(
        "OSS4-HMAC-SHA256 Credential=access-key/20231203/cn-hangzhou/oss/aliyun_v4_request, Signature="
    ));
    let signature = authorization.rsplit('=').next().unwrap();
    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_sign_v4_oss_is_deterministic() {
    let mut headers1 = signed_headers();
    let mut headers2 = signed_headers();
    let query = Multimap::new();
    for headers in [&mut headers1, &mut headers2] {
        sign_v4_oss(
            &Method::PUT,
            "/examplebucket/key",
            "cn-hangzhou",
            headers,
            &query,
            "access-key",
            "secret-key",
            EMPTY_SHA256,
            get_test_date(),
        );
    }
    assert_eq!(
        headers1.get("Authorization").unwrap(),
        headers2.get("Authorization").unwrap()
    );
}

#[test]
fn test_sign_v4_oss_depends_on_request_shape() {
    let query = Multimap::new();
    let mut sigs = Vec::new();
    for (method, uri) in [
        (Method::GET, "/examplebucket/key"),
        (Method::PUT, "/examplebucket/key"),
        (Method::GET, "/examplebucket/other"),
    ] {
        let mut headers = signed_headers();
        sign_v4_oss(
            &method,
            uri,
            "cn-hangzhou",
            &mut headers,
            &query,
            "access-key",
            "secret-key",
            EMPTY_SHA256,
            get_test_date(),
        );
        sigs.push(headers.get("Authorization").unwrap().clone());
    }
    assert_ne!(sigs[0], sigs[1]);
    assert_ne!(sigs[0], sigs[2]);
}

#[test]
fn test_sign_v4_oss_includes_query_params() {
    let mut headers1 = signed_headers();
    let mut headers2 = signed_headers();
    let mut query = Multimap::new();
    sign_v4_oss(
        &Method::GET,
        "/examplebucket/",
        "cn-hangzhou",
        &mut headers1,
        &query,
        "access-key",
        "secret-key",
        EMPTY_SHA256,
        get_test_date(),
    );
    query.add("lifecycle", "");
    sign_v4_oss(
        &Method::GET,
        "/examplebucket/",
        "cn-hangzhou",
        &mut headers2,
        &query,
        "access-key",
        "secret-key",
        EMPTY_SHA256,
        get_test_date(),
    );
    assert_ne!(
        headers1.get("Authorization").unwrap(),
        headers2.get("Authorization").unwrap()
    );
}
