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

use super::local_client;
use anyhow::Result;
use http::{Method, Request};
use pretty_assertions::assert_eq;
use s3sign_s3::{Credential, Payload, S3Path, SignedRequest, SystemClock};
use std::sync::Arc;

#[test]
fn test_to_http_request() -> Result<()> {
    let body = "Hello, World!";
    let signed = local_client().put_object("hello", "world.txt", body, Some("text/plain"))?;

    let req = signed.to_http_request(body);

    assert_eq!(req.method(), &Method::PUT);
    assert_eq!(req.uri(), signed.uri());
    assert_eq!(req.headers(), signed.headers());
    assert_eq!(*req.body(), body);
    assert!(req.headers()["authorization"].is_sensitive());
    Ok(())
}

#[test]
fn test_apply_overrides_existing_request() -> Result<()> {
    let signed = local_client().get_object("hello", "world.txt")?;

    let mut req = Request::new(());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "http://example.com/other".parse()?;
    req.headers_mut().insert("host", "example.com".parse()?);
    req.headers_mut().insert("range", "bytes=0-9".parse()?);

    let (mut parts, body) = req.into_parts();
    signed.apply(&mut parts);
    let req = Request::from_parts(parts, body);

    assert_eq!(req.method(), &Method::GET);
    assert_eq!(req.uri().to_string(), "http://127.0.0.1:9000/hello/world.txt");
    assert_eq!(req.headers()["host"], "127.0.0.1:9000");
    // Unsigned headers are left alone.
    assert_eq!(req.headers()["range"], "bytes=0-9");
    Ok(())
}

#[test]
fn test_sign_with_system_clock() -> Result<()> {
    let signed = SignedRequest::builder()
        .endpoint("https://s3.us-east-1.amazonaws.com")
        .region("us-east-1")
        .credential(Credential::new("access_key_id", "secret_access_key"))
        .method(Method::HEAD)
        .path(S3Path::new().bucket("hello").key("world"))
        .payload(Payload::default())
        .clock(Arc::new(SystemClock))
        .build()?;

    let date = signed.headers()["x-amz-date"].to_str()?;
    assert_eq!(date, signed.timestamp().full());
    assert!(signed.headers()["authorization"]
        .to_str()?
        .contains(&format!("/{}/us-east-1/s3/aws4_request,", signed.timestamp().datestamp())));
    Ok(())
}
