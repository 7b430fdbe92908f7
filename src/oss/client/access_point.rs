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
    CreateAccessPoint, DeleteAccessPoint, GetAccessPoint, ListAccessPoints,
};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`CreateAccessPoint`] request builder.
    pub fn create_access_point(&self, bucket: &str, access_point_name: &str) -> CreateAccessPoint {
        CreateAccessPoint::new(self.clone(), bucket, access_point_name)
    }

    /// Creates a [`GetAccessPoint`] request builder.
    pub fn get_access_point(&self, bucket: &str, access_point_name: &str) -> GetAccessPoint {
        GetAccessPoint::new(self.clone(), bucket, access_point_name)
    }

    /// Creates a [`ListAccessPoints`] request builder; without a bucket it
    /// lists the access points of every bucket in the region.
    pub fn list_access_points(&self, bucket: Option<String>) -> ListAccessPoints {
        ListAccessPoints::new(self.clone(), bucket)
    }

    /// Creates a [`DeleteAccessPoint`] request builder.
    pub fn delete_access_point(&self, bucket: &str, access_point_name: &str) -> DeleteAccessPoint {
        DeleteAccessPoint::new(self.clone(), bucket, access_point_name)
    }
}
