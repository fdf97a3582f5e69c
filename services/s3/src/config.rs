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

use crate::Credential;
use s3sign_core::utils::Redact;
use s3sign_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for s3 services.
///
/// Can be deserialized from any serde format:
///
/// ```
/// use s3sign_s3::Config;
///
/// let cfg: Config = serde_json::from_str(
///     r#"{"endpoint": "http://127.0.0.1:9000", "region": "us-east-1"}"#,
/// ).unwrap();
/// assert_eq!(cfg.region.as_deref(), Some("us-east-1"));
/// assert!(cfg.access_key_id.is_none());
/// ```
#[derive(Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Endpoint with scheme and host, e.g. `https://s3.us-east-1.amazonaws.com`.
    pub endpoint: Option<String>,
    /// Signing region, e.g. `us-east-1`.
    pub region: Option<String>,
    /// Access key id.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
}

impl Config {
    /// Set endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set access key id and secret access key.
    pub fn with_credential(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Build credential from this config.
    ///
    /// Returns `None` if either part is missing or empty.
    pub fn credential(&self) -> Option<Credential> {
        let cred = Credential::new(
            self.access_key_id.clone()?,
            self.secret_access_key.clone()?,
        );
        cred.is_valid().then_some(cred)
    }

    /// Check that every field required for signing is present.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.as_deref().map_or(true, str::is_empty) {
            return Err(Error::config_invalid("endpoint is required"));
        }
        if self.region.as_deref().map_or(true, str::is_empty) {
            return Err(Error::config_invalid("region is required"));
        }
        if self.credential().is_none() {
            return Err(Error::config_invalid(
                "access_key_id and secret_access_key are required",
            ));
        }
        Ok(())
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}
