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

//! Error definitions for OSS operations

use crate::oss::oss_error_response::{OssErrorCode, OssErrorResponse};
use thiserror::Error;

/// Errors raised while building a request, before any network I/O happens.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object key: {0}")]
    InvalidObjectKey(String),

    #[error("invalid upload ID: {0}")]
    InvalidUploadId(String),

    #[error("invalid part number: {0}")]
    InvalidPartNumber(String),

    #[error("parts cannot be empty")]
    EmptyParts,

    #[error("part size {0} is not supported; minimum allowed 100 KiB")]
    InvalidMinPartSize(u64),

    #[error("part size {0} is not supported; maximum allowed 5 GiB")]
    InvalidMaxPartSize(u64),

    #[error("object size {object_size} and part size {part_size} make more than {count} parts for upload")]
    InvalidPartCount {
        object_size: u64,
        part_size: u64,
        count: u16,
    },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0}")]
    UrlBuildError(String),

    #[error("{0}")]
    XmlError(String),

    #[error("at least one of expiration, transition or abort-multipart-upload must be specified in a lifecycle rule")]
    MissingLifecycleAction,

    #[error("only one of days or created-before-date must be set for {0}")]
    InvalidDateAndDays(String),

    #[error("lifecycle rule ID must not exceed 255 characters")]
    InvalidLifecycleRuleId,

    #[error("a CORS rule must contain at least one allowed origin and one allowed method")]
    InvalidCorsRule,

    #[error("invalid inventory configuration: {0}")]
    InvalidInventoryConfig(String),

    #[error("invalid access point name: {0}")]
    InvalidAccessPointName(String),

    #[error("WORM retention period must be between 1 and 25550 days")]
    InvalidWormRetention,

    #[error("no objects provided for batch delete")]
    EmptyDeleteObjects,

    #[error(transparent)]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),

    #[error(transparent)]
    XmlParseError(#[from] xmltree::ParseError),

    #[error(transparent)]
    TimeParseError(#[from] chrono::ParseError),

    #[error(transparent)]
    IntParseError(#[from] std::num::ParseIntError),

    #[error(transparent)]
    BoolParseError(#[from] std::str::ParseBoolError),

    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    StrError(#[from] reqwest::header::ToStrError),
}

/// Errors returned by OSS operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built from the given arguments.
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    /// The service answered with an error response.
    #[error(transparent)]
    Service(Box<OssErrorResponse>),

    /// Transport-level failure while talking to the service.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Checkpoint records are persisted as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid response received; status code: {0}; content-type: {1}")]
    InvalidResponse(u16, String),

    #[error("{0} CRC-64 mismatch; expected: {1}, got: {2}")]
    ChecksumMismatch(String, u64, u64),

    #[error("content length is unknown")]
    ContentLengthUnknown,
}

impl Error {
    /// The service error code, when this error is a service error response.
    pub fn service_code(&self) -> Option<&OssErrorCode> {
        match self {
            Error::Service(resp) => Some(resp.code()),
            _ => None,
        }
    }

    /// Returns true if this error is a service error with the given code.
    pub fn is_code(&self, code: OssErrorCode) -> bool {
        self.service_code() == Some(&code)
    }
}

impl From<OssErrorResponse> for Error {
    fn from(err: OssErrorResponse) -> Self {
        Error::Service(Box::new(err))
    }
}

impl From<xmltree::ParseError> for Error {
    fn from(err: xmltree::ParseError) -> Self {
        Error::Validation(ValidationErr::XmlParseError(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationErr::TimeParseError(err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::Validation(ValidationErr::IntParseError(err))
    }
}

impl From<std::str::ParseBoolError> for Error {
    fn from(err: std::str::ParseBoolError) -> Self {
        Error::Validation(ValidationErr::BoolParseError(err))
    }
}

impl From<reqwest::header::ToStrError> for Error {
    fn from(err: reqwest::header::ToStrError) -> Self {
        Error::Validation(ValidationErr::StrError(err))
    }
}
