//! AWS SigV4 signer for S3 and S3 compatible services.
//!
//! Builds fully signed requests with path-style addressing. Nothing is sent,
//! hand the [`SignedRequest`] to any `http` compatible client.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use s3sign_s3::{Client, Credential, FixedClock};
//!
//! # fn main() -> s3sign_s3::Result<()> {
//! let client = Client::new(
//!     "http://127.0.0.1:9000",
//!     "us-east-1",
//!     Credential::new("access_key_id", "secret_access_key"),
//! )
//! .with_clock(Arc::new(FixedClock::from_rfc3339("2022-03-13T07:20:04Z")?));
//!
//! let signed = client.put_object("hello", "world.txt", "Hello, World!", Some("text/plain"))?;
//! assert_eq!(signed.uri().to_string(), "http://127.0.0.1:9000/hello/world.txt");
//! assert_eq!(signed.headers()["x-amz-date"], "20220313T072004Z");
//!
//! let req = signed.to_http_request("Hello, World!");
//! assert!(req.headers().contains_key("authorization"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod path;
pub use path::canonicalize;
pub use path::S3Path;

mod payload;
pub use payload::Payload;

mod sign_request;
pub use sign_request::SignedRequest;
pub use sign_request::SignedRequestBuilder;

pub use s3sign_core::time::{Clock, FixedClock, SystemClock};
pub use s3sign_core::{Error, ErrorKind, Result};
