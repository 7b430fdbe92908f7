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

//! OSS client to perform bucket and object operations.

use bytes::{Buf, Bytes};
use dashmap::DashMap;
use futures_util::stream;
pub use hyper::http::Method;
pub use reqwest::Response;
use std::sync::Arc;

use crate::oss::creds::Provider;
use crate::oss::error::Error;
use crate::oss::http::{BaseUrl, Url};
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::oss_error_response::{OssErrorCode, OssErrorResponse};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::signer::sign_v4_oss;
use crate::oss::types::header_constants::*;
use crate::oss::utils::{
    EMPTY_SHA256, get_default_text, md5sum_hash_sb, sha256_hash_sb, to_oss_date,
    urlencode_object_key, utc_now,
};
use xmltree::Element;

mod access_point;
mod bucket;
mod bucket_cors;
mod bucket_encryption;
mod bucket_inventory;
mod bucket_lifecycle;
mod bucket_logging;
mod bucket_referer;
mod bucket_worm;
mod multipart;
mod object;
mod service;
mod transfer;

/// The region assumed when neither the endpoint nor the caller supplies one.
pub const DEFAULT_REGION: &str = "cn-hangzhou";

/// Configuration for the HTTP connection pool.
///
/// These settings allow tuning the client for different workloads:
/// - **High-throughput**: Increase `max_idle_per_host` and `idle_timeout`
/// - **Low-latency**: Enable `tcp_nodelay` (default)
/// - **Resource-constrained**: Reduce `max_idle_per_host` and `idle_timeout`
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host.
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool.
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval.
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm).
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Cache of bucket name to region, fed by `GetBucketLocation` lookups.
    pub(crate) region_map: DashMap<String, String>,
}

/// Client Builder manufactures an [`OssClient`] using given parameters.
#[derive(Debug)]
pub struct OssClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
}

impl OssClientBuilder {
    /// Creates a builder given a base URL for the OSS service or a compatible
    /// object storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Set the credential provider. Without one, requests are anonymous.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This
    /// will show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<OssClient, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        let mut user_agent = String::from("oss-rs/")
            + env!("CARGO_PKG_VERSION")
            + " ("
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ")";
        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        Ok(OssClient {
            http_client: builder.build()?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
                region_map: Default::default(),
            }),
        })
    }
}

/// Object Storage Service client to perform bucket and object operations.
///
/// If a credential provider is passed, all operation requests are signed
/// using V4 signatures; else they are performed anonymously.
#[derive(Clone, Debug)]
pub struct OssClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl OssClient {
    /// Returns a client for the given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use oss::oss::OssClient;
    /// use oss::oss::creds::StaticProvider;
    /// use oss::oss::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    /// let provider = StaticProvider::new("access-key", "secret-key", None);
    /// let client = OssClient::new(base_url, Some(provider)).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
    ) -> Result<Self, Error> {
        OssClientBuilder::new(base_url).provider(provider).build()
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Returns whether this client talks to a first-party OSS endpoint.
    pub fn is_oss_endpoint(&self) -> bool {
        self.shared.base_url.is_oss_endpoint()
    }

    pub(crate) fn default_region(&self) -> String {
        if self.shared.base_url.region.is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            self.shared.base_url.region.clone()
        }
    }

    /// Resolves the region to sign requests for the given bucket.
    ///
    /// Endpoint-derived regions win; otherwise the per-bucket cache is
    /// consulted and, on a miss, filled with a `GetBucketLocation` lookup.
    pub(crate) async fn get_region_cached(&self, bucket: &str) -> Result<String, Error> {
        if !self.shared.base_url.region.is_empty() {
            return Ok(self.shared.base_url.region.clone());
        }

        if bucket.is_empty() || self.shared.provider.is_none() {
            return Ok(DEFAULT_REGION.to_string());
        }

        if let Some(v) = self.shared.region_map.get(bucket) {
            return Ok((*v).to_string());
        }

        let mut headers = Multimap::new();
        let mut query_params = Multimap::new();
        query_params.add("location", "");

        let resp = self
            .clone()
            .execute(
                Method::GET,
                DEFAULT_REGION,
                &mut headers,
                &query_params,
                Some(bucket),
                None,
                None,
            )
            .await?;
        let body = resp.bytes().await?;
        let root = Element::parse(body.reader())?;

        // <LocationConstraint>oss-cn-hangzhou</LocationConstraint>
        let location = parse_location_constraint(&root);
        let region = location
            .strip_prefix("oss-")
            .map(|v| v.to_string())
            .unwrap_or(location);
        let region = if region.is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            region
        };

        log::debug!("resolved region {region} for bucket {bucket}");
        self.shared
            .region_map
            .insert(bucket.to_string(), region.clone());
        Ok(region)
    }

    /// Remove a bucket-region pair from the region cache if it exists.
    pub(crate) fn remove_bucket_region(&self, bucket: &str) {
        self.shared.region_map.remove(bucket);
    }

    fn build_headers(
        &self,
        headers: &mut Multimap,
        query_params: &Multimap,
        region: &str,
        url: &Url,
        sign_uri: &str,
        method: &Method,
        body: Option<&SegmentedBytes>,
    ) {
        headers.add(HOST, url.host_header_value());

        let mut content_sha256 = String::new();
        if *method == Method::PUT || *method == Method::POST {
            let len = body.map_or(0, |b| b.len());
            headers.add(CONTENT_LENGTH, len.to_string());
            if !headers.contains_key(CONTENT_TYPE) {
                headers.add(CONTENT_TYPE, "application/octet-stream");
            }
            if self.shared.provider.is_some() {
                content_sha256 = body.map_or(EMPTY_SHA256.to_string(), sha256_hash_sb);
            } else if !headers.contains_key(CONTENT_MD5) {
                if let Some(b) = body {
                    headers.add(CONTENT_MD5, md5sum_hash_sb(b));
                }
            }
        } else if self.shared.provider.is_some() {
            content_sha256 = EMPTY_SHA256.to_string();
        }
        if !content_sha256.is_empty() {
            headers.add(X_OSS_CONTENT_SHA256, content_sha256.clone());
        }

        let date = utc_now();
        headers.add(X_OSS_DATE, to_oss_date(date));

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            if let Some(token) = creds.security_token {
                headers.add(X_OSS_SECURITY_TOKEN, token);
            }
            sign_v4_oss(
                method,
                sign_uri,
                region,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                &content_sha256,
                date,
            );
        }
    }

    async fn get_error_response(
        &self,
        resp: reqwest::Response,
        method: &Method,
        resource: &str,
        bucket: Option<&str>,
        object: Option<&str>,
    ) -> Error {
        let status_code = resp.status().as_u16();
        let header_map = resp.headers().clone();
        let body = match resp.bytes().await {
            Ok(v) => v,
            Err(e) => return e.into(),
        };

        if !body.is_empty() {
            let content_type = header_map
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if content_type.to_lowercase().contains("application/xml") {
                return match OssErrorResponse::new_from_body(body, header_map, status_code) {
                    Ok(v) => v.into(),
                    Err(e) => e,
                };
            }
            return Error::InvalidResponse(status_code, content_type);
        }

        let code = match status_code {
            400 => OssErrorCode::BadRequest,
            403 => OssErrorCode::AccessDenied,
            404 => match object {
                Some(_) => OssErrorCode::NoSuchKey,
                _ => match bucket {
                    Some(_) => OssErrorCode::NoSuchBucket,
                    _ => OssErrorCode::ResourceNotFound,
                },
            },
            405 | 501 => OssErrorCode::MethodNotAllowed,
            409 => OssErrorCode::ResourceConflict,
            412 => OssErrorCode::PreconditionFailed,
            _ => return Error::InvalidResponse(status_code, String::new()),
        };

        let request_id = header_map
            .get(X_OSS_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        log::debug!(
            "{method} {resource} failed without error body; mapped status {status_code} to {code}"
        );

        OssErrorResponse::new(
            header_map,
            status_code,
            code,
            None,
            resource.to_string(),
            request_id,
            String::new(),
        )
        .into()
    }

    pub(crate) async fn execute(
        self,
        method: Method,
        region: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket: Option<&str>,
        object: Option<&str>,
        body: Option<SegmentedBytes>,
    ) -> Result<reqwest::Response, Error> {
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket, object)?;

        // The canonical URI always carries the bucket, even when the bucket
        // is addressed through the virtual-hosted subdomain.
        let sign_uri = match (bucket, object) {
            (Some(b), Some(o)) => format!("/{}/{}", b, urlencode_object_key(o)),
            (Some(b), None) => format!("/{b}/"),
            _ => String::from("/"),
        };

        self.build_headers(
            headers,
            query_params,
            region,
            &url,
            &sign_uri,
            &method,
            body.as_ref(),
        );

        let mut req = self.http_client.request(method.clone(), url.to_string());

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key.as_str(), value.as_str());
            }
        }

        if method == Method::PUT || method == Method::POST {
            if let Some(body) = body {
                let stream = stream::iter(body.into_iter().map(Ok::<Bytes, std::io::Error>));
                req = req.body(reqwest::Body::wrap_stream(stream));
            }
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let err = self
            .get_error_response(resp, &method, &url.path, bucket, object)
            .await;

        if let Error::Service(ref resp) = err {
            if *resp.code() == OssErrorCode::NoSuchBucket {
                if let Some(v) = bucket {
                    self.remove_bucket_region(v);
                }
            }
        }

        Err(err)
    }
}

/// Extracts the `x-oss-request-id` value from response headers.
pub(crate) fn take_request_id(headers: &http::HeaderMap) -> String {
    headers
        .get(X_OSS_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Parses `<LocationConstraint>` bodies shared by region lookups.
pub(crate) fn parse_location_constraint(root: &Element) -> String {
    if root.name == "LocationConstraint" {
        root.get_text().unwrap_or_default().to_string()
    } else {
        get_default_text(root, "LocationConstraint")
    }
}
