//! Core components for signing S3 requests.
//!
//! This crate provides the building blocks shared by the s3sign signers:
//!
//! - [`Error`] and [`ErrorKind`]: the error type returned by every fallible operation
//! - [`hash`]: SHA256 and HMAC-SHA256 helpers producing the lowercase hex digests
//!   required by AWS Signature Version 4
//! - [`time`]: UTC timestamps, the SigV4 date formats and the [`time::Clock`] trait
//!   used to inject the signing instant
//! - [`utils`]: general utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use s3sign_core::hash::hex_sha256;
//! use s3sign_core::time::{FixedClock, Clock, Timestamp};
//!
//! let clock = FixedClock::from_rfc3339("2013-05-24T00:00:00Z").unwrap();
//! let ts = Timestamp::new(clock.now());
//! assert_eq!(ts.full(), "20130524T000000Z");
//! assert_eq!(ts.datestamp(), "20130524");
//!
//! assert_eq!(
//!     hex_sha256(b""),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
