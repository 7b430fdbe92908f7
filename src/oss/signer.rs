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

//! Signature V4 for the OSS API
//!
//! The signing key is derived through the HMAC-SHA256 chain
//! `"aliyun_v4" + secret -> date -> region -> "oss" -> "aliyun_v4_request"`,
//! and the string-to-sign carries the `OSS4-HMAC-SHA256` algorithm marker.

use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::utils::{UtcTime, sha256_hash, to_oss_date, to_signer_date};
use hex::encode as hexencode;
use hmac::{Hmac, Mac};
use hyper::http::Method;
use sha2::Sha256;

const SIGN_ALGORITHM: &str = "OSS4-HMAC-SHA256";
const SIGN_PRODUCT: &str = "oss";
const SIGN_REQUEST: &str = "aliyun_v4_request";
const SIGN_KEY_PREFIX: &str = "aliyun_v4";

/// Returns HMAC hash for given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns hex encoded HMAC hash for given key and data
pub fn hmac_hash_hex(key: &[u8], data: &[u8]) -> String {
    hexencode(hmac_hash(key, data))
}

/// Returns scope value of given date and region
pub fn get_scope(date: UtcTime, region: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        to_signer_date(date),
        region,
        SIGN_PRODUCT,
        SIGN_REQUEST
    )
}

/// Returns hex encoded SHA256 hash of canonical request
pub fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    additional_headers: &str,
    content_sha256: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n\n' +
    //   AdditionalHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    let canonical_request = format!(
        "{method}\n{uri}\n{query_string}\n{headers}\n\n{additional_headers}\n{content_sha256}"
    );
    sha256_hash(canonical_request.as_bytes())
}

/// Returns string-to-sign value of given date, scope and canonical request hash
pub fn get_string_to_sign(date: UtcTime, scope: &str, canonical_request_hash: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        SIGN_ALGORITHM,
        to_oss_date(date),
        scope,
        canonical_request_hash
    )
}

/// Returns signing key of given secret key, date and region
pub fn get_signing_key(secret_key: &str, date: UtcTime, region: &str) -> Vec<u8> {
    let mut key: Vec<u8> = SIGN_KEY_PREFIX.as_bytes().to_vec();
    key.extend(secret_key.as_bytes());

    let date_key = hmac_hash(key.as_slice(), to_signer_date(date).as_bytes());
    let date_region_key = hmac_hash(date_key.as_slice(), region.as_bytes());
    let date_region_service_key = hmac_hash(date_region_key.as_slice(), SIGN_PRODUCT.as_bytes());
    hmac_hash(date_region_service_key.as_slice(), SIGN_REQUEST.as_bytes())
}

/// Returns signature value for given signing key and string-to-sign
pub fn get_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hmac_hash_hex(signing_key, string_to_sign)
}

/// Returns authorization value for given access key, scope and signature
pub fn get_authorization(access_key: &str, scope: &str, signature: &str) -> String {
    format!("{SIGN_ALGORITHM} Credential={access_key}/{scope}, Signature={signature}")
}

/// Signs the request and inserts the `Authorization` header.
pub fn sign_v4_oss(
    method: &Method,
    uri: &str,
    region: &str,
    headers: &mut Multimap,
    query_params: &Multimap,
    access_key: &str,
    secret_key: &str,
    content_sha256: &str,
    date: UtcTime,
) {
    let scope = get_scope(date, region);
    let (_signed_headers, canonical_headers) = headers.get_canonical_headers();
    let canonical_query_string = query_params.get_canonical_query_string();
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &canonical_query_string,
        &canonical_headers,
        "",
        content_sha256,
    );
    let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(secret_key, date, region);
    let signature = get_signature(signing_key.as_slice(), string_to_sign.as_bytes());
    let authorization = get_authorization(access_key, &scope, &signature);

    headers.insert("Authorization".to_string(), authorization);
}
