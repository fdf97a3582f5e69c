// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::UNSIGNED_PAYLOAD;
use bytes::Bytes;
use s3sign_core::hash::hex_sha256;

/// Request body together with its media type.
///
/// A payload without body is not the same as an empty body: the former is
/// signed as `UNSIGNED-PAYLOAD`, the latter as the hash of zero bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    body: Option<Bytes>,
    content_type: Option<String>,
}

impl Payload {
    /// Create a payload with body.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: Some(body.into()),
            content_type: None,
        }
    }

    /// Set the media type, e.g. `text/plain`.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Get the body if present.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Get the media type if present.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Length of the body, `None` if there is no body.
    pub fn content_length(&self) -> Option<usize> {
        self.body.as_ref().map(Bytes::len)
    }

    /// Value of `x-amz-content-sha256` for this payload.
    pub fn content_sha256(&self) -> String {
        match &self.body {
            Some(body) => hex_sha256(body),
            None => UNSIGNED_PAYLOAD.to_string(),
        }
    }
}

/// Value of `x-amz-content-sha256` for an optional payload.
pub(crate) fn payload_hash(payload: Option<&Payload>) -> String {
    payload.map_or_else(|| UNSIGNED_PAYLOAD.to_string(), Payload::content_sha256)
}
