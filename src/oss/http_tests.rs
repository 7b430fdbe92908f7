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

use super::http::{BaseUrl, Url, match_oss_endpoint, region_from_endpoint};
use super::multimap_ext::{Multimap, MultimapExt};

// ===========================
// Url Tests
// ===========================

#[test]
fn test_url_default() {
    let url = Url::default();
    assert!(url.https);
    assert!(url.host.is_empty());
    assert_eq!(url.port, 0);
    assert!(url.path.is_empty());
    assert!(url.query.is_empty());
}

#[test]
fn test_url_host_header_value_with_port() {
    let url = Url {
        https: false,
        host: "example.com".to_string(),
        port: 9000,
        path: "/".to_string(),
        query: Multimap::new(),
    };
    assert_eq!(url.host_header_value(), "example.com:9000");
}

#[test]
fn test_url_display() {
    let mut query = Multimap::new();
    query.add("uploads", "");
    let url = Url {
        https: true,
        host: "examplebucket.oss-cn-hangzhou.aliyuncs.com".to_string(),
        port: 0,
        path: "/key".to_string(),
        query,
    };
    assert_eq!(
        url.to_string(),
        "https://examplebucket.oss-cn-hangzhou.aliyuncs.com/key?uploads="
    );
}

// ===========================
// Endpoint matching
// ===========================

#[test]
fn test_match_oss_endpoint() {
    assert!(match_oss_endpoint("oss-cn-hangzhou.aliyuncs.com"));
    assert!(match_oss_endpoint("oss-cn-hangzhou-internal.aliyuncs.com"));
    assert!(match_oss_endpoint("oss-us-west-1.aliyuncs.com"));
    assert!(match_oss_endpoint("oss-accelerate.aliyuncs.com"));
    assert!(!match_oss_endpoint("example.com"));
    assert!(!match_oss_endpoint("oss.example.com"));
}

#[test]
fn test_region_from_endpoint() {
    assert_eq!(
        region_from_endpoint("oss-cn-hangzhou.aliyuncs.com").as_deref(),
        Some("cn-hangzhou")
    );
    assert_eq!(
        region_from_endpoint("oss-cn-hangzhou-internal.aliyuncs.com").as_deref(),
        Some("cn-hangzhou")
    );
    assert_eq!(
        region_from_endpoint("oss-us-west-1.aliyuncs.com").as_deref(),
        Some("us-west-1")
    );
    assert_eq!(region_from_endpoint("oss-accelerate.aliyuncs.com"), None);
    assert_eq!(region_from_endpoint("cdn.example.com"), None);
}

// ===========================
// BaseUrl Tests
// ===========================

#[test]
fn test_base_url_from_region_endpoint() {
    let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    assert!(base_url.https);
    assert_eq!(base_url.region, "cn-hangzhou");
    assert!(base_url.virtual_style);
    assert!(base_url.is_oss_endpoint());
}

#[test]
fn test_base_url_from_http_scheme() {
    let base_url: BaseUrl = "http://oss-cn-shanghai.aliyuncs.com".parse().unwrap();
    assert!(!base_url.https);
    assert_eq!(base_url.region, "cn-shanghai");
}

#[test]
fn test_base_url_from_ip_uses_path_style() {
    let base_url: BaseUrl = "http://192.168.124.63:9000".parse().unwrap();
    assert!(!base_url.virtual_style);
    assert!(!base_url.is_oss_endpoint());
    assert!(base_url.region.is_empty());

    let url = base_url
        .build_url(&Multimap::new(), Some("examplebucket"), Some("key"))
        .unwrap();
    assert_eq!(url.host, "192.168.124.63");
    assert_eq!(url.port, 9000);
    assert_eq!(url.path, "/examplebucket/key");
}

#[test]
fn test_base_url_custom_domain_is_virtual_style() {
    let base_url: BaseUrl = "cdn.example.com".parse().unwrap();
    assert!(base_url.virtual_style);
    assert!(!base_url.is_oss_endpoint());
}

#[test]
fn test_base_url_rejects_bad_inputs() {
    assert!("ftp://oss-cn-hangzhou.aliyuncs.com".parse::<BaseUrl>().is_err());
    assert!(
        "https://oss-cn-hangzhou.aliyuncs.com/path"
            .parse::<BaseUrl>()
            .is_err()
    );
    assert!(
        "https://oss-cn-hangzhou.aliyuncs.com?query=1"
            .parse::<BaseUrl>()
            .is_err()
    );
}

#[test]
fn test_build_url_virtual_style() {
    let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    let url = base_url
        .build_url(&Multimap::new(), Some("examplebucket"), Some("dir/key.txt"))
        .unwrap();
    assert_eq!(url.host, "examplebucket.oss-cn-hangzhou.aliyuncs.com");
    assert_eq!(url.path, "/dir/key.txt");
}

#[test]
fn test_build_url_service_level() {
    let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    let url = base_url.build_url(&Multimap::new(), None, None).unwrap();
    assert_eq!(url.host, "oss-cn-hangzhou.aliyuncs.com");
    assert_eq!(url.path, "/");
}

#[test]
fn test_build_url_encodes_object_key() {
    let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    let url = base_url
        .build_url(&Multimap::new(), Some("examplebucket"), Some("a b+c.txt"))
        .unwrap();
    assert_eq!(url.path, "/a%20b%2Bc.txt");
}

#[test]
fn test_build_url_bucket_only() {
    let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    let mut query = Multimap::new();
    query.add("lifecycle", "");
    let url = base_url
        .build_url(&query, Some("examplebucket"), None)
        .unwrap();
    assert_eq!(url.host, "examplebucket.oss-cn-hangzhou.aliyuncs.com");
    assert_eq!(url.path, "/");
    assert!(url.to_string().contains("lifecycle"));
}
