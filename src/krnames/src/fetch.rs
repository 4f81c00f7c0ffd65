//! Page fetching with bounded retry.
//!
//! [`Fetcher`] owns the retry loop and failure classification. The actual
//! HTTP round trip sits behind the [`Transport`] trait so the loop can be
//! driven by a scripted transport in tests; [`UreqTransport`] is the real one.

use std::io::Read;
use std::time::Duration;

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; rathena-kr-data/1.0)";
pub const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en;q=0.7";

/// Raw response from a transport. Error statuses are responses, not errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Network-level failure of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Timeout,
    /// Bad URL, DNS or connection failure
    Url(String),
    Other(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "timed out"),
            Self::Url(msg) => write!(f, "url error: {}", msg),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// A blocking HTTP GET
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Why a page could not be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    Http(u16),
    Timeout,
    UrlError,
    Error,
}

impl FetchFailure {
    fn from_transport(err: &TransportError) -> Self {
        match err {
            TransportError::Timeout => Self::Timeout,
            TransportError::Url(_) => Self::UrlError,
            TransportError::Other(_) => Self::Error,
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Http(code) => write!(f, "http_{}", code),
            Self::Timeout => write!(f, "timeout"),
            Self::UrlError => write!(f, "url_error"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome of fetching one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Ok(String),
    Failed(FetchFailure),
}

/// Retrying page fetcher
pub struct Fetcher<T> {
    transport: T,
    max_retries: u32,
    backoff_unit: Duration,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, max_retries: u32, backoff_unit: Duration) -> Self {
        Self {
            transport,
            max_retries,
            backoff_unit,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `url`, retrying transient failures up to `max_retries` attempts.
    ///
    /// A 404 stops immediately. Any other failure is retried after sleeping
    /// `backoff_unit * attempt`; once attempts run out the last failure is
    /// returned. Blocks for at most the transport timeout per attempt plus
    /// the cumulative backoff.
    pub fn fetch(&self, url: &str) -> FetchResult {
        let mut last = FetchFailure::Error;

        for attempt in 1..=self.max_retries {
            tracing::debug!("GET {} (attempt {}/{})", url, attempt, self.max_retries);

            last = match self.transport.get(url) {
                Ok(resp) if resp.status < 400 => {
                    return FetchResult::Ok(String::from_utf8_lossy(&resp.body).into_owned());
                }
                Ok(resp) if resp.status == 404 => {
                    return FetchResult::Failed(FetchFailure::NotFound);
                }
                Ok(resp) => FetchFailure::Http(resp.status),
                Err(e) => {
                    tracing::debug!("{}: {}", url, e);
                    FetchFailure::from_transport(&e)
                }
            };

            if attempt < self.max_retries {
                tracing::warn!("{}: {}, retrying", url, last);
                std::thread::sleep(self.backoff_unit * attempt);
            }
        }

        FetchResult::Failed(last)
    }
}

/// [`Transport`] backed by a `ureq` agent
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .agent
            .get(url)
            .set("Accept-Language", ACCEPT_LANGUAGE)
            .call();

        let resp = match response {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(t)) => return Err(classify_transport(&t)),
        };

        let status = resp.status();
        let mut body = Vec::new();
        resp.into_reader()
            .read_to_end(&mut body)
            .map_err(|e| io_error(&e))?;

        Ok(HttpResponse { status, body })
    }
}

fn classify_transport(t: &ureq::Transport) -> TransportError {
    use ureq::ErrorKind;

    match t.kind() {
        ErrorKind::InvalidUrl
        | ErrorKind::UnknownScheme
        | ErrorKind::Dns
        | ErrorKind::ConnectionFailed
        | ErrorKind::InvalidProxyUrl
        | ErrorKind::ProxyConnect => TransportError::Url(t.to_string()),
        ErrorKind::Io => {
            let source = std::error::Error::source(t);
            match source.and_then(|s| s.downcast_ref::<std::io::Error>()) {
                Some(e) => io_error(e),
                None => TransportError::Other(t.to_string()),
            }
        }
        _ => TransportError::Other(t.to_string()),
    }
}

fn io_error(e: &std::io::Error) -> TransportError {
    match e.kind() {
        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => TransportError::Timeout,
        _ => TransportError::Other(e.to_string()),
    }
}
