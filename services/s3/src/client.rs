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

use crate::{Config, Credential, Payload, S3Path, SignedRequest, SignedRequestBuilder};
use bytes::Bytes;
use http::Method;
use s3sign_core::time::Clock;
use s3sign_core::{Error, Result};
use std::sync::Arc;

/// Client that builds signed requests for common s3 operations.
///
/// The client never sends anything, every operation returns a
/// [`SignedRequest`] for the caller's http stack.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    region: String,
    credential: Credential,
    clock: Option<Arc<dyn Clock>>,
}

impl Client {
    /// Create a new client.
    pub fn new(endpoint: impl Into<String>, region: impl Into<String>, credential: Credential) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: region.into(),
            credential,
            clock: None,
        }
    }

    /// Create a new client from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let credential = config
            .credential()
            .ok_or_else(|| Error::config_invalid("credential is required"))?;

        Ok(Self::new(
            config.endpoint.clone().unwrap_or_default(),
            config.region.clone().unwrap_or_default(),
            credential,
        ))
    }

    /// Use the given clock instead of system time.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// `GET /`
    pub fn list_buckets(&self) -> Result<SignedRequest> {
        self.request(Method::GET).path(S3Path::new()).build()
    }

    /// `GET /{bucket}`
    pub fn list_bucket(&self, bucket: &str) -> Result<SignedRequest> {
        self.request(Method::GET)
            .path(S3Path::new().bucket(bucket))
            .build()
    }

    /// `GET /{bucket}?versions=`
    pub fn list_object_versions(&self, bucket: &str) -> Result<SignedRequest> {
        self.request(Method::GET)
            .path(S3Path::new().bucket(bucket))
            .query("versions=")
            .build()
    }

    /// `PUT /{bucket}`
    pub fn put_bucket(&self, bucket: &str) -> Result<SignedRequest> {
        self.request(Method::PUT)
            .path(S3Path::new().bucket(bucket))
            .build()
    }

    /// `DELETE /{bucket}`
    pub fn delete_bucket(&self, bucket: &str) -> Result<SignedRequest> {
        self.request(Method::DELETE)
            .path(S3Path::new().bucket(bucket))
            .build()
    }

    /// `PUT /{bucket}/{key}` with body.
    ///
    /// The body is hashed into the signature, send exactly these bytes.
    pub fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: impl Into<Bytes>,
        content_type: Option<&str>,
    ) -> Result<SignedRequest> {
        let mut payload = Payload::new(body);
        if let Some(content_type) = content_type {
            payload = payload.with_content_type(content_type);
        }

        self.request(Method::PUT)
            .path(S3Path::new().bucket(bucket).key(key))
            .payload(payload)
            .build()
    }

    /// `GET /{bucket}/{key}`
    pub fn get_object(&self, bucket: &str, key: &str) -> Result<SignedRequest> {
        self.request(Method::GET)
            .path(S3Path::new().bucket(bucket).key(key))
            .build()
    }

    /// `DELETE /{bucket}/{key}`
    pub fn delete_object(&self, bucket: &str, key: &str) -> Result<SignedRequest> {
        self.request(Method::DELETE)
            .path(S3Path::new().bucket(bucket).key(key))
            .build()
    }

    fn request(&self, method: Method) -> SignedRequestBuilder {
        let builder = SignedRequest::builder()
            .endpoint(&self.endpoint)
            .region(&self.region)
            .credential(self.credential.clone())
            .method(method);

        match &self.clock {
            Some(clock) => builder.clock(clock.clone()),
            None => builder,
        }
    }
}
