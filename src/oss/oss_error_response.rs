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

use crate::oss::error::Error;
use crate::oss::utils::{get_default_text, get_option_text};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by the service, as documented in the OSS error taxonomy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OssErrorCode {
    AccessDenied,
    BucketAlreadyExists,
    BucketNotEmpty,
    EntityTooLarge,
    EntityTooSmall,
    FilePartNotExist,
    FilePartStale,
    InvalidAccessKeyId,
    InvalidArgument,
    InvalidBucketName,
    InvalidDigest,
    InvalidObjectName,
    InvalidPart,
    InvalidPartOrder,
    InvalidTargetBucketForLogging,
    MalformedXML,
    MethodNotAllowed,
    MissingContentLength,
    NoSuchAccessPoint,
    NoSuchBucket,
    NoSuchCORSConfiguration,
    NoSuchInventory,
    NoSuchKey,
    NoSuchLifecycle,
    NoSuchServerSideEncryptionRule,
    NoSuchUpload,
    NoSuchWORMConfiguration,
    PositionNotEqualToLength,
    PreconditionFailed,
    RequestTimeTooSkewed,
    SignatureDoesNotMatch,
    WORMConfigurationLocked,

    // Synthesized for empty-body responses.
    BadRequest,
    ResourceNotFound,
    ResourceConflict,

    #[default]
    NoError,

    /// Catch-all for any code not explicitly defined above.
    OtherError(String),
}

#[allow(dead_code)]
const ALL_OSS_ERROR_CODE: &[OssErrorCode] = &[
    OssErrorCode::AccessDenied,
    OssErrorCode::BucketAlreadyExists,
    OssErrorCode::BucketNotEmpty,
    OssErrorCode::EntityTooLarge,
    OssErrorCode::EntityTooSmall,
    OssErrorCode::FilePartNotExist,
    OssErrorCode::FilePartStale,
    OssErrorCode::InvalidAccessKeyId,
    OssErrorCode::InvalidArgument,
    OssErrorCode::InvalidBucketName,
    OssErrorCode::InvalidDigest,
    OssErrorCode::InvalidObjectName,
    OssErrorCode::InvalidPart,
    OssErrorCode::InvalidPartOrder,
    OssErrorCode::InvalidTargetBucketForLogging,
    OssErrorCode::MalformedXML,
    OssErrorCode::MethodNotAllowed,
    OssErrorCode::MissingContentLength,
    OssErrorCode::NoSuchAccessPoint,
    OssErrorCode::NoSuchBucket,
    OssErrorCode::NoSuchCORSConfiguration,
    OssErrorCode::NoSuchInventory,
    OssErrorCode::NoSuchKey,
    OssErrorCode::NoSuchLifecycle,
    OssErrorCode::NoSuchServerSideEncryptionRule,
    OssErrorCode::NoSuchUpload,
    OssErrorCode::NoSuchWORMConfiguration,
    OssErrorCode::PositionNotEqualToLength,
    OssErrorCode::PreconditionFailed,
    OssErrorCode::RequestTimeTooSkewed,
    OssErrorCode::SignatureDoesNotMatch,
    OssErrorCode::WORMConfigurationLocked,
    OssErrorCode::BadRequest,
    OssErrorCode::ResourceNotFound,
    OssErrorCode::ResourceConflict,
    OssErrorCode::NoError,
];

impl FromStr for OssErrorCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "accessdenied" => Ok(OssErrorCode::AccessDenied),
            "bucketalreadyexists" => Ok(OssErrorCode::BucketAlreadyExists),
            "bucketnotempty" => Ok(OssErrorCode::BucketNotEmpty),
            "entitytoolarge" => Ok(OssErrorCode::EntityTooLarge),
            "entitytoosmall" => Ok(OssErrorCode::EntityTooSmall),
            "filepartnotexist" => Ok(OssErrorCode::FilePartNotExist),
            "filepartstale" => Ok(OssErrorCode::FilePartStale),
            "invalidaccesskeyid" => Ok(OssErrorCode::InvalidAccessKeyId),
            "invalidargument" => Ok(OssErrorCode::InvalidArgument),
            "invalidbucketname" => Ok(OssErrorCode::InvalidBucketName),
            "invaliddigest" => Ok(OssErrorCode::InvalidDigest),
            "invalidobjectname" => Ok(OssErrorCode::InvalidObjectName),
            "invalidpart" => Ok(OssErrorCode::InvalidPart),
            "invalidpartorder" => Ok(OssErrorCode::InvalidPartOrder),
            "invalidtargetbucketforlogging" => Ok(OssErrorCode::InvalidTargetBucketForLogging),
            "malformedxml" => Ok(OssErrorCode::MalformedXML),
            "methodnotallowed" => Ok(OssErrorCode::MethodNotAllowed),
            "missingcontentlength" => Ok(OssErrorCode::MissingContentLength),
            "nosuchaccesspoint" => Ok(OssErrorCode::NoSuchAccessPoint),
            "nosuchbucket" => Ok(OssErrorCode::NoSuchBucket),
            "nosuchcorsconfiguration" => Ok(OssErrorCode::NoSuchCORSConfiguration),
            "nosuchinventory" => Ok(OssErrorCode::NoSuchInventory),
            "nosuchkey" => Ok(OssErrorCode::NoSuchKey),
            "nosuchlifecycle" => Ok(OssErrorCode::NoSuchLifecycle),
            "nosuchserversideencryptionrule" => Ok(OssErrorCode::NoSuchServerSideEncryptionRule),
            "nosuchupload" => Ok(OssErrorCode::NoSuchUpload),
            "nosuchwormconfiguration" => Ok(OssErrorCode::NoSuchWORMConfiguration),
            "positionnotequaltolength" => Ok(OssErrorCode::PositionNotEqualToLength),
            "preconditionfailed" => Ok(OssErrorCode::PreconditionFailed),
            "requesttimetooskewed" => Ok(OssErrorCode::RequestTimeTooSkewed),
            "signaturedoesnotmatch" => Ok(OssErrorCode::SignatureDoesNotMatch),
            "wormconfigurationlocked" => Ok(OssErrorCode::WORMConfigurationLocked),
            "badrequest" => Ok(OssErrorCode::BadRequest),
            "resourcenotfound" => Ok(OssErrorCode::ResourceNotFound),
            "resourceconflict" => Ok(OssErrorCode::ResourceConflict),
            "noerror" => Ok(OssErrorCode::NoError),
            v => Ok(OssErrorCode::OtherError(v.to_owned())),
        }
    }
}

impl std::fmt::Display for OssErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OssErrorCode::AccessDenied => write!(f, "AccessDenied"),
            OssErrorCode::BucketAlreadyExists => write!(f, "BucketAlreadyExists"),
            OssErrorCode::BucketNotEmpty => write!(f, "BucketNotEmpty"),
            OssErrorCode::EntityTooLarge => write!(f, "EntityTooLarge"),
            OssErrorCode::EntityTooSmall => write!(f, "EntityTooSmall"),
            OssErrorCode::FilePartNotExist => write!(f, "FilePartNotExist"),
            OssErrorCode::FilePartStale => write!(f, "FilePartStale"),
            OssErrorCode::InvalidAccessKeyId => write!(f, "InvalidAccessKeyId"),
            OssErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
            OssErrorCode::InvalidBucketName => write!(f, "InvalidBucketName"),
            OssErrorCode::InvalidDigest => write!(f, "InvalidDigest"),
            OssErrorCode::InvalidObjectName => write!(f, "InvalidObjectName"),
            OssErrorCode::InvalidPart => write!(f, "InvalidPart"),
            OssErrorCode::InvalidPartOrder => write!(f, "InvalidPartOrder"),
            OssErrorCode::InvalidTargetBucketForLogging => {
                write!(f, "InvalidTargetBucketForLogging")
            }
            OssErrorCode::MalformedXML => write!(f, "MalformedXML"),
            OssErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            OssErrorCode::MissingContentLength => write!(f, "MissingContentLength"),
            OssErrorCode::NoSuchAccessPoint => write!(f, "NoSuchAccessPoint"),
            OssErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            OssErrorCode::NoSuchCORSConfiguration => write!(f, "NoSuchCORSConfiguration"),
            OssErrorCode::NoSuchInventory => write!(f, "NoSuchInventory"),
            OssErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            OssErrorCode::NoSuchLifecycle => write!(f, "NoSuchLifecycle"),
            OssErrorCode::NoSuchServerSideEncryptionRule => {
                write!(f, "NoSuchServerSideEncryptionRule")
            }
            OssErrorCode::NoSuchUpload => write!(f, "NoSuchUpload"),
            OssErrorCode::NoSuchWORMConfiguration => write!(f, "NoSuchWORMConfiguration"),
            OssErrorCode::PositionNotEqualToLength => write!(f, "PositionNotEqualToLength"),
            OssErrorCode::PreconditionFailed => write!(f, "PreconditionFailed"),
            OssErrorCode::RequestTimeTooSkewed => write!(f, "RequestTimeTooSkewed"),
            OssErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            OssErrorCode::WORMConfigurationLocked => write!(f, "WORMConfigurationLocked"),
            OssErrorCode::BadRequest => write!(f, "BadRequest"),
            OssErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            OssErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            OssErrorCode::NoError => write!(f, "NoError"),
            OssErrorCode::OtherError(msg) => write!(f, "{msg}"),
        }
    }
}

/// Typed error returned by all API operations, decoded from the `<Error>`
/// body when the service provides one.
#[derive(Clone, Debug, Default)]
pub struct OssErrorResponse {
    code: OssErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    status_code: u16,
    resource: String,
    request_id: String,
    host_id: String,
    /// Extended error code (`EC`), present on newer service deployments.
    ec: Option<String>,
}

impl OssErrorResponse {
    pub fn new(
        headers: HeaderMap,
        status_code: u16,
        code: OssErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
    ) -> Self {
        Self {
            headers,
            status_code,
            code,
            message,
            resource,
            request_id,
            host_id,
            ec: None,
        }
    }

    pub fn new_from_body(body: Bytes, headers: HeaderMap, status_code: u16) -> Result<Self, Error> {
        let root = Element::parse(body.reader())?;
        Ok(Self {
            code: OssErrorCode::from_str(&get_default_text(&root, "Code"))?,
            message: get_option_text(&root, "Message"),
            resource: get_default_text(&root, "Resource"),
            request_id: get_default_text(&root, "RequestId"),
            host_id: get_default_text(&root, "HostId"),
            ec: get_option_text(&root, "EC"),
            headers,
            status_code,
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Take ownership of the headers as returned by the server.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }

    pub fn code(&self) -> &OssErrorCode {
        &self.code
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn ec(&self) -> Option<&str> {
        self.ec.as_deref()
    }
}

impl std::fmt::Display for OssErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OSS operation failed; code: {}, status: {}, message: {:?}, resource: {}, request_id: {}, host_id: {}, ec: {:?}",
            self.code,
            self.status_code,
            self.message,
            self.resource,
            self.request_id,
            self.host_id,
            self.ec,
        )
    }
}

impl std::error::Error for OssErrorResponse {}

#[cfg(test)]
mod test_error_code {
    use super::*;

    /// All error codes survive a to-string / from-string round-trip.
    #[test]
    fn test_oss_error_code_roundtrip() {
        for code in ALL_OSS_ERROR_CODE {
            let str = code.to_string();
            let code_obs: OssErrorCode = str.parse().unwrap();
            assert_eq!(
                code_obs, *code,
                "failed OssErrorCode round-trip: code {code} -> str '{str}' -> code {code_obs}"
            );
        }
    }

    #[test]
    fn test_parse_error_body() {
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
              <Error>\
                <Code>NoSuchKey</Code>\
                <Message>The specified key does not exist.</Message>\
                <RequestId>5C3D9175B6FC201293AD4213</RequestId>\
                <HostId>test-bucket.oss-cn-hangzhou.aliyuncs.com</HostId>\
                <EC>0026-00000001</EC>\
              </Error>",
        );
        let resp = OssErrorResponse::new_from_body(body, HeaderMap::new(), 404).unwrap();
        assert_eq!(resp.code(), &OssErrorCode::NoSuchKey);
        assert_eq!(resp.request_id(), "5C3D9175B6FC201293AD4213");
        assert_eq!(resp.ec(), Some("0026-00000001"));
        assert_eq!(resp.status_code(), 404);
    }
}
