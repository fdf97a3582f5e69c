mod minio;
mod transport;

use std::sync::Arc;

use s3sign_s3::{Client, Credential, FixedClock};

/// Client for the public minio playground, signing at a fixed time.
pub fn play_client(time: &str) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::new(
        "https://play.min.io",
        "us-east-1",
        Credential::new(
            "Q3AM3UQ867SPQQA43P2F",
            "zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG",
        ),
    )
    .with_clock(Arc::new(
        FixedClock::from_rfc3339(time).expect("time must be valid"),
    ))
}

/// Client for a local minio server, signing at a fixed time.
pub fn local_client() -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::new(
        "http://127.0.0.1:9000",
        "test",
        Credential::new("access_key_id", "secret_access_key"),
    )
    .with_clock(Arc::new(
        FixedClock::from_rfc3339("2022-03-13T07:20:04Z").expect("time must be valid"),
    ))
}
