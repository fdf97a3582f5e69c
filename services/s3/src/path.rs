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

use crate::constants::S3_KEY_ENCODE_SET;
use percent_encoding::utf8_percent_encode;

/// Path-style location of a bucket or object.
///
/// ```
/// use s3sign_s3::S3Path;
///
/// let path = S3Path::new().bucket("receipts").key("scan (1).jpeg");
/// assert_eq!(path.canonical_uri(), "/receipts/scan%20%281%29.jpeg");
///
/// // The root path lists all buckets.
/// assert_eq!(S3Path::new().canonical_uri(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Path {
    bucket: Option<String>,
    key: Option<String>,
    encode_key: bool,
}

impl Default for S3Path {
    fn default() -> Self {
        Self {
            bucket: None,
            key: None,
            encode_key: true,
        }
    }
}

impl S3Path {
    /// Create the root path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bucket segment.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the object key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Whether the key should be percent-encoded, `true` by default.
    ///
    /// Pass `false` only when the key is already encoded.
    pub fn encode_key(mut self, encode_key: bool) -> Self {
        self.encode_key = encode_key;
        self
    }

    /// Build the canonical uri used by both the request line and the signature.
    pub fn canonical_uri(&self) -> String {
        canonicalize(self.bucket.as_deref(), self.key.as_deref(), self.encode_key)
    }
}

/// Canonicalize bucket and key into an absolute uri path.
///
/// The result always starts with `/`. A `/` is placed before the key unless
/// the key already starts with one. Keys are percent-encoded unless
/// `encode_key` is false, only `A-Z a-z 0-9 - . _ ~` and `/` are kept as is.
pub fn canonicalize(bucket: Option<&str>, key: Option<&str>, encode_key: bool) -> String {
    let bucket = bucket.filter(|v| !v.is_empty());
    let key = key.filter(|v| !v.is_empty());

    let mut s = String::with_capacity(
        2 + bucket.map_or(0, str::len) + key.map_or(0, |v| v.len() * 3),
    );

    match bucket {
        None => s.push('/'),
        Some(bucket) => {
            if !bucket.starts_with('/') {
                s.push('/');
            }
            s.push_str(bucket);
        }
    }

    let Some(key) = key else {
        return s;
    };

    if !key.starts_with('/') {
        s.push('/');
    }
    if encode_key {
        s.extend(utf8_percent_encode(key, &S3_KEY_ENCODE_SET));
    } else {
        s.push_str(key);
    }

    s
}
