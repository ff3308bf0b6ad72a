//! 1secmail async client implementation.

use crate::{AttachmentStream, Error, Mail, Mailbox, Result};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;

const BASE_URL: &str = "https://www.1secmail.com/api/v1/";
const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Value of the `action` query parameter that selects the API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    GenRandomMailbox,
    GetDomainList,
    GetMessages,
    ReadMessage,
    Download,
}

impl Action {
    fn as_str(self) -> &'static str {
        match self {
            Action::GenRandomMailbox => "genRandomMailbox",
            Action::GetDomainList => "getDomainList",
            Action::GetMessages => "getMessages",
            Action::ReadMessage => "readMessage",
            Action::Download => "download",
        }
    }
}

type Query = Vec<(&'static str, String)>;

fn query(action: Action) -> Query {
    vec![("action", action.as_str().to_string())]
}

fn random_mailbox_query(count: i64) -> Query {
    let mut params = query(Action::GenRandomMailbox);
    // Non-positive counts fall back to the service default of one address.
    if count > 0 {
        params.push(("count", count.to_string()));
    }
    params
}

fn mailbox_query(action: Action, login: &str, domain: &str) -> Query {
    let mut params = query(action);
    params.push(("login", login.to_string()));
    params.push(("domain", domain.to_string()));
    params
}

fn message_query(action: Action, login: &str, domain: &str, id: u64) -> Query {
    let mut params = mailbox_query(action, login, domain);
    params.push(("id", id.to_string()));
    params
}

/// Async client for the 1secmail temporary email service.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a different endpoint, proxies, or a request timeout. The client holds no
/// mutable state, and cloning it shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client pointed at the public 1secmail API.
    ///
    /// # Examples
    /// ```no_run
    /// # use onesecmail_client::Client;
    /// # fn main() -> Result<(), onesecmail_client::Error> {
    /// let client = Client::new()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Wrap an already configured `reqwest::Client`.
    ///
    /// Useful when the caller wants to control timeouts, TLS roots, or
    /// connection pooling directly.
    pub fn with_http(http: reqwest::Client, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_url(base_url.as_ref())?,
            proxy: None,
        })
    }

    /// The endpoint every request is sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Request `count` randomly generated addresses.
    ///
    /// When `count` is zero or negative the parameter is left out and the
    /// service returns its default of a single address.
    ///
    /// # Examples
    /// ```no_run
    /// # use onesecmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), onesecmail_client::Error> {
    /// let client = Client::new()?;
    /// for address in client.gen_random_mailbox(3).await? {
    ///     println!("{address}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn gen_random_mailbox(&self, count: i64) -> Result<Vec<String>> {
        self.get_json(&random_mailbox_query(count)).await
    }

    /// List the domains the service generates addresses on.
    pub async fn get_domain_list(&self) -> Result<Vec<String>> {
        self.get_json(&query(Action::GetDomainList)).await
    }

    /// List the messages currently in a mailbox.
    ///
    /// Only header fields are populated; use [`Client::read_message`] for the
    /// bodies and attachment list.
    ///
    /// # Examples
    /// ```no_run
    /// # use onesecmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), onesecmail_client::Error> {
    /// let client = Client::new()?;
    /// for mail in client.get_messages("demo", "1secmail.com").await? {
    ///     println!("{}: {}", mail.from, mail.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_messages(&self, login: &str, domain: &str) -> Result<Vec<Mail>> {
        self.get_json(&mailbox_query(Action::GetMessages, login, domain))
            .await
    }

    /// Fetch a single message including its bodies.
    pub async fn read_message(&self, login: &str, domain: &str, id: u64) -> Result<Mail> {
        self.get_json(&message_query(Action::ReadMessage, login, domain, id))
            .await
    }

    /// Open a stream over the bytes of an attachment.
    ///
    /// The connection stays checked out until the returned stream is drained
    /// or dropped.
    ///
    /// # Examples
    /// ```no_run
    /// # use onesecmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), onesecmail_client::Error> {
    /// let client = Client::new()?;
    /// let stream = client
    ///     .download_attachment("demo", "1secmail.com", 639, "report.pdf")
    ///     .await?;
    /// let bytes = stream.bytes().await?;
    /// println!("{} bytes", bytes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_attachment(
        &self,
        login: &str,
        domain: &str,
        id: u64,
        file: &str,
    ) -> Result<AttachmentStream> {
        let mut params = message_query(Action::Download, login, domain, id);
        params.push(("file", file.to_string()));

        let response = self.send(&params).await?;
        Ok(AttachmentStream::new(response))
    }

    /// Bind a full address to this client.
    pub fn mailbox(&self, address: &str) -> Result<Mailbox> {
        Mailbox::new(self.clone(), address)
    }

    /// Generate `count` random mailboxes bound to this client.
    pub async fn generate_random_mailboxes(&self, count: i64) -> Result<Vec<Mailbox>> {
        self.gen_random_mailbox(count)
            .await?
            .iter()
            .map(|address| self.mailbox(address))
            .collect()
    }

    /// Generate a single random mailbox bound to this client.
    pub async fn generate_random_mailbox(&self) -> Result<Mailbox> {
        self.generate_random_mailboxes(1)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::EmptyResponse)
    }

    /// Send one GET request and reject anything but `200 OK`.
    async fn send(&self, params: &[(&'static str, String)]) -> Result<reqwest::Response> {
        let action = params.first().map(|(_, v)| v.as_str()).unwrap_or_default();
        tracing::trace!(url = %self.base_url, action, "sending request");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        tracing::trace!(action, %status, "received response");
        if status != StatusCode::OK {
            return Err(Error::Status(status));
        }
        Ok(response)
    }

    /// Common JSON request pattern.
    async fn get_json<T: DeserializeOwned>(&self, params: &[(&'static str, String)]) -> Result<T> {
        let body = self.send(params).await?.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

/// The process-wide client for the public 1secmail API.
///
/// Built on first use and shared afterwards; it is never reconfigured.
pub fn default_client() -> &'static Client {
    static DEFAULT: OnceLock<Client> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        ClientBuilder::new()
            .build()
            .expect("default client configuration is valid")
    })
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))
}

/// Builder for configuring a 1secmail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Public 1secmail endpoint
    /// - No proxy
    /// - No timeout
    /// - `danger_accept_invalid_certs = false`
    /// - `onesecmail-client/<version>` user agent
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            proxy: None,
            timeout: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Override the API endpoint URL.
    ///
    /// Useful for testing against a mock server or a self-hosted mirror.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Abort requests that take longer than `timeout` end to end.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// No request is made; this only validates the URLs and sets up the
    /// HTTP connection pool.
    ///
    /// # Examples
    /// ```no_run
    /// # use onesecmail_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), onesecmail_client::Error> {
    /// let client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let base_url = parse_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::InvalidUrl(format!("{proxy_url}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        Ok(Client {
            http: builder.build()?,
            base_url,
            proxy: self.proxy,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_count_is_sent() {
        assert_eq!(
            random_mailbox_query(3),
            vec![
                ("action", "genRandomMailbox".to_string()),
                ("count", "3".to_string()),
            ]
        );
    }

    #[test]
    fn non_positive_count_is_omitted() {
        for count in [0, -1, i64::MIN] {
            let params = random_mailbox_query(count);
            assert_eq!(params, vec![("action", "genRandomMailbox".to_string())]);
        }
    }

    #[test]
    fn message_query_orders_params() {
        let params = message_query(Action::ReadMessage, "demo", "1secmail.com", 42);
        let keys: Vec<_> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["action", "login", "domain", "id"]);
        assert_eq!(params[0].1, "readMessage");
        assert_eq!(params[3].1, "42");
    }

    #[test]
    fn builder_rejects_bad_base_url() {
        let err = Client::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn builder_keeps_proxy() {
        let client = Client::builder()
            .proxy("http://127.0.0.1:8080")
            .build()
            .unwrap();
        assert_eq!(client.proxy(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn default_client_is_shared() {
        let a = default_client();
        let b = default_client();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.base_url().as_str(), BASE_URL);
    }
}
