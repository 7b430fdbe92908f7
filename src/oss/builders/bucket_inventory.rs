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

use crate::oss::client::OssClient;
use crate::oss::error::ValidationErr;
use crate::oss::inventory_config::InventoryConfig;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::{
    DeleteBucketInventoryResponse, GetBucketInventoryResponse, ListBucketInventoryResponse,
    PutBucketInventoryResponse,
};
use crate::oss::segmented_bytes::SegmentedBytes;
use crate::oss::types::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::oss::types::{OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use hyper::http::Method;

/// Argument builder for the `PutBucketInventory` API.
#[derive(Clone, Debug)]
pub struct PutBucketInventory {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,

    config: InventoryConfig,
}

impl PutBucketInventory {
    pub fn new(client: OssClient, bucket: &str, config: InventoryConfig) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            config,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for PutBucketInventory {
    type OssResponse = PutBucketInventoryResponse;
}

impl ToOssRequest for PutBucketInventory {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        self.config.validate()?;

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("inventory", "");
        query_params.add("inventoryId", self.config.id.clone());

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        let bytes: Bytes = self.config.to_xml().into();
        headers.add(CONTENT_MD5, md5sum_hash(&bytes));
        headers.add(CONTENT_TYPE, "application/xml");

        Ok(OssRequest::new(self.client, Method::PUT)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(headers)
            .body(Some(SegmentedBytes::from(bytes))))
    }
}

/// Argument builder for the `GetBucketInventory` API.
#[derive(Clone, Debug)]
pub struct GetBucketInventory {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    inventory_id: String,
}

impl GetBucketInventory {
    pub fn new(client: OssClient, bucket: &str, inventory_id: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            inventory_id: inventory_id.to_string(),
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for GetBucketInventory {
    type OssResponse = GetBucketInventoryResponse;
}

impl ToOssRequest for GetBucketInventory {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if self.inventory_id.is_empty() {
            return Err(ValidationErr::InvalidInventoryConfig(String::from(
                "inventory id cannot be empty",
            )));
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("inventory", "");
        query_params.add("inventoryId", self.inventory_id);

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `ListBucketInventory` API.
///
/// The service returns at most 100 configurations per page; follow
/// `next_continuation_token` to fetch the rest.
#[derive(Clone, Debug)]
pub struct ListBucketInventory {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    continuation_token: Option<String>,
}

impl ListBucketInventory {
    pub fn new(client: OssClient, bucket: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            continuation_token: None,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn continuation_token(mut self, continuation_token: Option<String>) -> Self {
        self.continuation_token = continuation_token;
        self
    }
}

impl OssApi for ListBucketInventory {
    type OssResponse = ListBucketInventoryResponse;
}

impl ToOssRequest for ListBucketInventory {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut query_params = insert(self.extra_query_params, "inventory");
        if let Some(v) = self.continuation_token {
            query_params.add("continuation-token", v);
        }

        Ok(OssRequest::new(self.client, Method::GET)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}

/// Argument builder for the `DeleteBucketInventory` API.
#[derive(Clone, Debug)]
pub struct DeleteBucketInventory {
    client: OssClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    region: Option<String>,
    bucket: String,
    inventory_id: String,
}

impl DeleteBucketInventory {
    pub fn new(client: OssClient, bucket: &str, inventory_id: &str) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
            region: None,
            bucket: bucket.to_string(),
            inventory_id: inventory_id.to_string(),
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

impl OssApi for DeleteBucketInventory {
    type OssResponse = DeleteBucketInventoryResponse;
}

impl ToOssRequest for DeleteBucketInventory {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if self.inventory_id.is_empty() {
            return Err(ValidationErr::InvalidInventoryConfig(String::from(
                "inventory id cannot be empty",
            )));
        }

        let mut query_params = self.extra_query_params.unwrap_or_default();
        query_params.add("inventory", "");
        query_params.add("inventoryId", self.inventory_id);

        Ok(OssRequest::new(self.client, Method::DELETE)
            .region(self.region)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default()))
    }
}
