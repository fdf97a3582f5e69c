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

use super::{local_client, play_client};
use anyhow::Result;
use log::debug;
use pretty_assertions::assert_eq;

#[test]
fn test_put_object() -> Result<()> {
    let req = play_client("2023-10-01T12:34:56Z").put_object(
        "bucket",
        "hello.txt",
        "Hello World!",
        Some("text/plain"),
    )?;
    debug!("signed request: {req:?}");

    assert_eq!(req.uri().to_string(), "https://play.min.io/bucket/hello.txt");
    assert_eq!(
        req.canonical_request(),
        "PUT\n/bucket/hello.txt\n\ncontent-length:12\ncontent-type:text/plain\nhost:play.min.io\nx-amz-content-sha256:7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069\nx-amz-date:20231001T123456Z\n\ncontent-length;content-type;host;x-amz-content-sha256;x-amz-date\n7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069"
    );
    assert_eq!(
        req.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=Q3AM3UQ867SPQQA43P2F/20231001/us-east-1/s3/aws4_request,SignedHeaders=content-length;content-type;host;x-amz-content-sha256;x-amz-date,Signature=d879510cafca58461c3e269c799448916fd6c01e3f9a469572287386ffa27d47"
    );
    Ok(())
}

#[test]
fn test_list_buckets() -> Result<()> {
    let req = play_client("2023-10-01T12:34:56Z").list_buckets()?;

    assert_eq!(req.uri().to_string(), "https://play.min.io/");
    assert_eq!(req.headers()["host"], "play.min.io");
    assert_eq!(req.headers()["x-amz-content-sha256"], "UNSIGNED-PAYLOAD");
    assert_eq!(
        req.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=Q3AM3UQ867SPQQA43P2F/20231001/us-east-1/s3/aws4_request,SignedHeaders=host;x-amz-content-sha256;x-amz-date,Signature=cefc823f0898cff7c375948d1ea5ea3d7c39791fce076bd0e6d7ccdfe9bcf5ba"
    );
    Ok(())
}

#[test]
fn test_list_buckets_next_day() -> Result<()> {
    let req = play_client("2023-10-02T00:00:00Z").list_buckets()?;

    assert_eq!(req.headers()["x-amz-date"], "20231002T000000Z");
    assert_eq!(
        req.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=Q3AM3UQ867SPQQA43P2F/20231002/us-east-1/s3/aws4_request,SignedHeaders=host;x-amz-content-sha256;x-amz-date,Signature=d468928cfe9e84646dfa981d044a7648fa28cb39611c42b720318b81470ed95a"
    );
    Ok(())
}

#[test]
fn test_get_object_with_percent() -> Result<()> {
    let req = local_client().get_object("hello", "%a")?;

    assert_eq!(req.uri().to_string(), "http://127.0.0.1:9000/hello/%25a");
    assert_eq!(req.headers()["host"], "127.0.0.1:9000");
    assert_eq!(
        req.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=access_key_id/20220313/test/s3/aws4_request,SignedHeaders=host;x-amz-content-sha256;x-amz-date,Signature=e4344bf79be0425be66b7111b6e99aa1fc97fd0820db0b88c455d2a850a9b1c6"
    );
    Ok(())
}

#[test]
fn test_list_object_versions() -> Result<()> {
    let req = local_client().list_object_versions("hello")?;

    assert_eq!(req.uri().to_string(), "http://127.0.0.1:9000/hello?versions=");
    assert_eq!(
        req.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=access_key_id/20220313/test/s3/aws4_request,SignedHeaders=host;x-amz-content-sha256;x-amz-date,Signature=202d6c735107c0d481c2f3e40af812ec6ec76dcd90fd49a0fd87aeab1f10b72d"
    );
    Ok(())
}

#[test]
fn test_put_object_with_special_characters() -> Result<()> {
    let req = local_client().put_object("hello", "x (1).txt", "", None)?;

    assert_eq!(
        req.uri().to_string(),
        "http://127.0.0.1:9000/hello/x%20%281%29.txt"
    );
    assert_eq!(req.headers()["content-length"], "0");
    assert!(req.headers().get("content-type").is_none());
    assert_eq!(
        req.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=access_key_id/20220313/test/s3/aws4_request,SignedHeaders=content-length;host;x-amz-content-sha256;x-amz-date,Signature=0ae581f3848e3805f090be1bd38093f1698efe69475c6bf52f8a1d3375e7c647"
    );
    Ok(())
}

#[test]
fn test_sign_twice_is_identical() -> Result<()> {
    let l = local_client().put_object("hello", "world", "Hello, World!", None)?;
    let r = local_client().put_object("hello", "world", "Hello, World!", None)?;

    assert_eq!(l.uri(), r.uri());
    assert_eq!(l.headers(), r.headers());
    Ok(())
}
