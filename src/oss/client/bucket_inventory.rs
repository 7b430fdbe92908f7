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

use crate::oss::builders::{
    DeleteBucketInventory, GetBucketInventory, ListBucketInventory, PutBucketInventory,
};
use crate::oss::client::OssClient;
use crate::oss::inventory_config::InventoryConfig;

impl OssClient {
    /// Creates a [`PutBucketInventory`] request builder.
    pub fn put_bucket_inventory(&self, bucket: &str, config: InventoryConfig) -> PutBucketInventory {
        PutBucketInventory::new(self.clone(), bucket, config)
    }

    /// Creates a [`GetBucketInventory`] request builder.
    pub fn get_bucket_inventory(&self, bucket: &str, inventory_id: &str) -> GetBucketInventory {
        GetBucketInventory::new(self.clone(), bucket, inventory_id)
    }

    /// Creates a [`ListBucketInventory`] request builder.
    pub fn list_bucket_inventory(&self, bucket: &str) -> ListBucketInventory {
        ListBucketInventory::new(self.clone(), bucket)
    }

    /// Creates a [`DeleteBucketInventory`] request builder.
    pub fn delete_bucket_inventory(
        &self,
        bucket: &str,
        inventory_id: &str,
    ) -> DeleteBucketInventory {
        DeleteBucketInventory::new(self.clone(), bucket, inventory_id)
    }
}
