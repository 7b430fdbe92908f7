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

//! Core traits for OSS request and response handling.

use super::oss_request::OssRequest;
use crate::oss::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete HTTP request.
///
/// Implemented by all request builders: it validates the builder's fields and
/// produces the generic [`OssRequest`] envelope that carries method, bucket,
/// object, query parameters, headers and body over the wire.
pub trait ToOssRequest: Sized {
    /// Consumes this request builder and returns an [`OssRequest`].
    ///
    /// Validation failures surface here, before any network I/O happens.
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr>;
}

/// Trait for converting HTTP responses into strongly typed response objects.
///
/// Implemented by all response types: it decodes status, headers and the XML
/// body of the raw reply into typed fields, and propagates service errors.
#[async_trait]
pub trait FromOssResponse: Sized {
    async fn from_oss_response(
        req: OssRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all API request builders.
///
/// Couples a builder with its response type and provides the async
/// [`send`](OssApi::send) pipeline: marshal the builder into an
/// [`OssRequest`], execute it, and decode the typed response.
#[async_trait]
pub trait OssApi: ToOssRequest {
    /// The response type associated with this request builder.
    type OssResponse: FromOssResponse;

    async fn send(self) -> Result<Self::OssResponse, Error> {
        let mut req: OssRequest = self.to_oss_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::OssResponse::from_oss_response(req, resp).await
    }
}
