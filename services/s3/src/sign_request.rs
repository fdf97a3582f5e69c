use crate::constants::{
    AWS4_HMAC_SHA256, AWS4_REQUEST, S3_SERVICE, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE,
};
use crate::payload::payload_hash;
use crate::{Credential, Payload, S3Path};
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HOST};
use http::request::Parts;
use http::uri::{Authority, Scheme};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};
use log::debug;
use s3sign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use s3sign_core::time::{Clock, SystemClock, Timestamp};
use s3sign_core::{Error, Result};
use std::fmt::Write;
use std::str::FromStr;
use std::sync::Arc;

/// Builder for [`SignedRequest`].
///
/// `endpoint`, `region`, `credential` and `method` are required. The path
/// defaults to `/`, the query string to empty, the payload to
/// `UNSIGNED-PAYLOAD` and the clock to [`SystemClock`].
#[derive(Debug, Default, Clone)]
pub struct SignedRequestBuilder {
    endpoint: Option<String>,
    region: Option<String>,
    credential: Option<Credential>,
    method: Option<Method>,
    canonical_uri: Option<String>,
    canonical_query_string: String,
    payload: Option<Payload>,
    clock: Option<Arc<dyn Clock>>,
}

impl SignedRequestBuilder {
    /// Set the endpoint, e.g. `https://s3.us-east-1.amazonaws.com` or `http://127.0.0.1:9000`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the signing region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the credential.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set the http method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the request path from bucket and key.
    pub fn path(mut self, path: S3Path) -> Self {
        self.canonical_uri = Some(path.canonical_uri());
        self
    }

    /// Set an already canonicalized path.
    pub fn canonical_uri(mut self, canonical_uri: impl Into<String>) -> Self {
        self.canonical_uri = Some(canonical_uri.into());
        self
    }

    /// Set the canonical query string.
    ///
    /// The value must be percent-encoded with parameters sorted by name,
    /// it's used verbatim in both the signature and the request uri.
    pub fn query(mut self, canonical_query_string: impl Into<String>) -> Self {
        self.canonical_query_string = canonical_query_string.into();
        self
    }

    /// Set the payload.
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Set the clock that provides the signing time.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate all fields and sign the request.
    pub fn build(self) -> Result<SignedRequest> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::config_invalid("endpoint is required"))?;
        let region = self
            .region
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("region is required"))?;
        let credential = self.credential.filter(Credential::is_valid).ok_or_else(|| {
            Error::config_invalid("access key id and secret access key are required")
        })?;
        let method = self
            .method
            .ok_or_else(|| Error::config_invalid("method is required"))?;
        // The method on the wire must be the one that gets signed.
        let method = Method::from_bytes(method.as_str().to_ascii_uppercase().as_bytes())
            .map_err(|e| {
                Error::request_invalid(format!("method {method} is invalid")).with_source(e)
            })?;
        let (scheme, authority) = parse_endpoint(&endpoint)?;

        let canonical_uri = self.canonical_uri.unwrap_or_else(|| "/".to_string());
        if !canonical_uri.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "canonical uri {canonical_uri} must start with '/'"
            )));
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        SignedRequest::sign(SigningContext {
            scheme,
            authority,
            region,
            credential,
            method,
            canonical_uri,
            canonical_query_string: self.canonical_query_string,
            payload: self.payload,
            timestamp: Timestamp::new(clock.now()),
        })
    }
}

/// All inputs of one signing operation, validated.
struct SigningContext {
    scheme: Scheme,
    authority: Authority,
    region: String,
    credential: Credential,
    method: Method,
    canonical_uri: String,
    canonical_query_string: String,
    payload: Option<Payload>,
    timestamp: Timestamp,
}

/// Request signed with AWS SigV4 for S3.
///
/// The uri and headers are computed once by [`SignedRequestBuilder::build`]
/// and never change. Sign again by building a new request.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html)
#[derive(Debug, Clone)]
pub struct SignedRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    timestamp: Timestamp,
    canonical_request: String,
}

impl SignedRequest {
    /// Create a new builder.
    pub fn builder() -> SignedRequestBuilder {
        SignedRequestBuilder::default()
    }

    /// The http method to send.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The uri to send, already encoded.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// All headers to send, including `authorization`.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The signing time.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// The canonical request that has been signed.
    pub fn canonical_request(&self) -> &str {
        &self.canonical_request
    }

    /// Write method, uri and headers into request parts.
    ///
    /// Headers that already exist in `parts` with the same name are replaced.
    pub fn apply(&self, parts: &mut Parts) {
        parts.method = self.method.clone();
        parts.uri = self.uri.clone();
        for (name, value) in self.headers.iter() {
            parts.headers.insert(name.clone(), value.clone());
        }
    }

    /// Build an [`http::Request`] carrying this signature and the given body.
    ///
    /// The body must be the payload that has been signed, if any.
    pub fn to_http_request<T>(&self, body: T) -> http::Request<T> {
        let (mut parts, body) = http::Request::new(body).into_parts();
        self.apply(&mut parts);
        http::Request::from_parts(parts, body)
    }

    fn sign(ctx: SigningContext) -> Result<Self> {
        let uri = request_uri(&ctx)?;
        let payload_hash = payload_hash(ctx.payload.as_ref());

        let mut headers: Vec<(HeaderName, String)> = vec![
            (HOST, host_header_value(&ctx.scheme, &ctx.authority)),
            (
                HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
                payload_hash.clone(),
            ),
            (
                HeaderName::from_static(X_AMZ_DATE),
                ctx.timestamp.full().to_string(),
            ),
        ];
        if let Some(payload) = &ctx.payload {
            if let Some(length) = payload.content_length() {
                headers.push((CONTENT_LENGTH, length.to_string()));
            }
            if let Some(content_type) = payload.content_type() {
                headers.push((CONTENT_TYPE, content_type.trim().to_string()));
            }
        }
        // HeaderName is always lowercase.
        headers.sort_unstable_by(|(l, _), (r, _)| l.as_str().cmp(r.as_str()));
        let signed_headers = signed_headers(&headers);

        // build canonical request and string to sign.
        let creq = canonical_request_string(
            &ctx.method,
            &ctx.canonical_uri,
            &ctx.canonical_query_string,
            &headers,
            &payload_hash,
        )?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/s3/aws4_request"
        let scope = format!(
            "{}/{}/{}/{}",
            ctx.timestamp.datestamp(),
            ctx.region,
            S3_SERVICE,
            AWS4_REQUEST
        );
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&ctx.timestamp, &scope, &encoded_req)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &ctx.credential.secret_access_key,
            ctx.timestamp.datestamp(),
            &ctx.region,
            S3_SERVICE,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut header_map = HeaderMap::with_capacity(headers.len() + 1);
        for (name, value) in headers {
            header_map.insert(name, HeaderValue::from_str(&value)?);
        }
        let mut authorization = HeaderValue::from_str(&format!(
            "{} Credential={}/{},SignedHeaders={},Signature={}",
            AWS4_HMAC_SHA256, ctx.credential.access_key_id, scope, signed_headers, signature
        ))?;
        authorization.set_sensitive(true);
        header_map.insert(AUTHORIZATION, authorization);

        Ok(Self {
            method: ctx.method,
            uri,
            headers: header_map,
            timestamp: ctx.timestamp,
            canonical_request: creq,
        })
    }
}

/// Path and query are already encoded, they must reach the wire untouched.
///
/// `Uri` silently drops a fragment, so the parsed path and query are
/// compared with what will be signed.
fn request_uri(ctx: &SigningContext) -> Result<Uri> {
    let mut path_and_query = ctx.canonical_uri.clone();
    if !ctx.canonical_query_string.is_empty() {
        path_and_query.push('?');
        path_and_query.push_str(&ctx.canonical_query_string);
    }

    let uri = Uri::from_str(&format!(
        "{}://{}{}",
        ctx.scheme, ctx.authority, path_and_query
    ))?;
    if uri.path_and_query().map(|v| v.as_str()) != Some(path_and_query.as_str()) {
        return Err(Error::request_invalid(format!(
            "path and query {path_and_query} would not be sent as signed"
        )));
    }

    Ok(uri)
}

fn parse_endpoint(endpoint: &str) -> Result<(Scheme, Authority)> {
    let uri = Uri::from_str(endpoint).map_err(|e| {
        Error::config_invalid(format!("endpoint {endpoint} is invalid")).with_source(e)
    })?;
    let parts = uri.into_parts();

    let scheme = parts
        .scheme
        .ok_or_else(|| Error::config_invalid(format!("endpoint {endpoint} has no scheme")))?;
    let authority = parts
        .authority
        .ok_or_else(|| Error::config_invalid(format!("endpoint {endpoint} has no host")))?;
    if let Some(paq) = parts.path_and_query {
        if !matches!(paq.as_str(), "" | "/") {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint} must not contain path or query"
            )));
        }
    }

    Ok((scheme, authority))
}

/// Host with port, the port is omitted when it's the scheme's default.
fn host_header_value(scheme: &Scheme, authority: &Authority) -> String {
    match authority.port_u16() {
        Some(port) if !is_default_port(scheme, port) => format!("{}:{}", authority.host(), port),
        _ => authority.host().to_string(),
    }
}

fn is_default_port(scheme: &Scheme, port: u16) -> bool {
    (*scheme == Scheme::HTTP && port == 80) || (*scheme == Scheme::HTTPS && port == 443)
}

fn signed_headers(headers: &[(HeaderName, String)]) -> String {
    headers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

/// Headers must be sorted by name.
fn canonical_request_string(
    method: &Method,
    canonical_uri: &str,
    canonical_query_string: &str,
    headers: &[(HeaderName, String)],
    payload_hash: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", method.as_str())?;
    writeln!(f, "{canonical_uri}")?;
    writeln!(f, "{canonical_query_string}")?;
    for (name, value) in headers {
        writeln!(f, "{}:{}", name.as_str(), value)?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers(headers))?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}

// StringToSign:
//
// AWS4-HMAC-SHA256
// 20220313T072004Z
// 20220313/<region>/s3/aws4_request
// <hashed_canonical_request>
fn string_to_sign(timestamp: &Timestamp, scope: &str, encoded_req: &str) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{AWS4_HMAC_SHA256}")?;
    writeln!(f, "{}", timestamp.full())?;
    writeln!(f, "{scope}")?;
    write!(f, "{encoded_req}")?;
    Ok(f)
}

fn generate_signing_key(secret: &str, datestamp: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), datestamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}
