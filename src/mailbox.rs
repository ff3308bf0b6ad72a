//! Mailbox handle: a login/domain pair bound to a [`Client`].

use crate::client::default_client;
use crate::{AttachmentStream, Client, Error, Mail, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A disposable inbox on the 1secmail service.
///
/// The address is always `login@domain`; a `Mailbox` never changes after it
/// is built. Equality and hashing only consider the address.
#[derive(Debug, Clone)]
pub struct Mailbox {
    client: Client,
    login: String,
    domain: String,
}

impl Mailbox {
    /// Split a full address on `@` and bind it to `client`.
    ///
    /// Fails with [`Error::InvalidAddress`] unless the address has exactly one
    /// `@` with something on both sides.
    ///
    /// # Examples
    /// ```
    /// # use onesecmail_client::{Client, Mailbox};
    /// # fn main() -> Result<(), onesecmail_client::Error> {
    /// let mailbox = Mailbox::new(Client::new()?, "demo@1secmail.com")?;
    /// assert_eq!(mailbox.login(), "demo");
    /// assert_eq!(mailbox.domain(), "1secmail.com");
    /// assert!(Mailbox::new(Client::new()?, "demo").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(client: Client, address: &str) -> Result<Self> {
        let (login, domain) = split_address(address)?;
        Self::from_parts(client, login, domain)
    }

    /// Build a mailbox from an already split login and domain.
    ///
    /// Both parts must be non-empty and free of `@`, so that the joined
    /// address parses back to the same mailbox.
    pub fn from_parts(
        client: Client,
        login: impl Into<String>,
        domain: impl Into<String>,
    ) -> Result<Self> {
        let (login, domain) = (login.into(), domain.into());
        if !is_address_part(&login) || !is_address_part(&domain) {
            return Err(Error::InvalidAddress(format!("{login}@{domain}")));
        }
        Ok(Self {
            client,
            login,
            domain,
        })
    }

    /// Local part of the address.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Host part of the address.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The client requests are sent through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Full address, `login@domain`.
    pub fn address(&self) -> String {
        format!("{}@{}", self.login, self.domain)
    }

    /// List the messages currently in this mailbox.
    pub async fn get_messages(&self) -> Result<Vec<Mail>> {
        self.client.get_messages(&self.login, &self.domain).await
    }

    /// Fetch one message including its bodies.
    pub async fn read_message(&self, id: u64) -> Result<Mail> {
        self.client
            .read_message(&self.login, &self.domain, id)
            .await
    }

    /// Open a stream over an attachment of message `id`.
    pub async fn download_attachment(&self, id: u64, filename: &str) -> Result<AttachmentStream> {
        self.client
            .download_attachment(&self.login, &self.domain, id, filename)
            .await
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.login, self.domain)
    }
}

/// Parses an address bound to [`default_client`].
impl FromStr for Mailbox {
    type Err = Error;

    fn from_str(address: &str) -> Result<Self> {
        Mailbox::new(default_client().clone(), address)
    }
}

impl PartialEq for Mailbox {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login && self.domain == other.domain
    }
}

impl Eq for Mailbox {}

impl Hash for Mailbox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.login.hash(state);
        self.domain.hash(state);
    }
}

fn is_address_part(part: &str) -> bool {
    !part.is_empty() && !part.contains('@')
}

fn split_address(address: &str) -> Result<(&str, &str)> {
    match address.split_once('@') {
        Some((login, domain)) if is_address_part(login) && is_address_part(domain) => {
            Ok((login, domain))
        }
        _ => Err(Error::InvalidAddress(address.to_string())),
    }
}

/// Generate `count` random mailboxes through [`default_client`].
///
/// A non-positive `count` yields the service default of one mailbox.
pub async fn generate_random_mailboxes(count: i64) -> Result<Vec<Mailbox>> {
    default_client().generate_random_mailboxes(count).await
}

/// Generate one random mailbox through [`default_client`].
///
/// # Examples
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), onesecmail_client::Error> {
/// let mailbox = onesecmail_client::generate_random_mailbox().await?;
/// println!("send mail to {mailbox}");
/// # Ok(())
/// # }
/// ```
pub async fn generate_random_mailbox() -> Result<Mailbox> {
    default_client().generate_random_mailbox().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new().unwrap()
    }

    #[test]
    fn address_round_trips() {
        for address in ["local@host", "a1b2c3@1secmail.org", "x.y@wuuvo.com"] {
            let mailbox = Mailbox::new(client(), address).unwrap();
            assert_eq!(mailbox.address(), address);
            assert_eq!(mailbox.to_string(), address);
        }
    }

    #[test]
    fn splits_login_and_domain() {
        let mailbox = Mailbox::new(client(), "demo@1secmail.net").unwrap();
        assert_eq!(mailbox.login(), "demo");
        assert_eq!(mailbox.domain(), "1secmail.net");
    }

    #[test]
    fn rejects_wrong_number_of_separators() {
        for address in ["", "demo", "demo.1secmail.com", "a@b@c", "@@", "@host", "local@"] {
            let err = Mailbox::new(client(), address).unwrap_err();
            match err {
                Error::InvalidAddress(got) => assert_eq!(got, address),
                other => panic!("unexpected error for {address:?}: {other}"),
            }
        }
    }

    #[test]
    fn from_parts_rejects_parts_that_break_the_address() {
        for (login, domain) in [("a@b", ""), ("", "host"), ("local", ""), ("a@b", "c"), ("a", "b@c")] {
            let err = Mailbox::from_parts(client(), login, domain).unwrap_err();
            assert!(matches!(err, Error::InvalidAddress(_)), "{login:?} / {domain:?}");
        }
    }

    #[test]
    fn from_parts_address_parses_back() {
        let mailbox = Mailbox::from_parts(client(), "demo", "1secmail.com").unwrap();
        let parsed = Mailbox::new(client(), &mailbox.address()).unwrap();
        assert_eq!(parsed, mailbox);
    }

    #[test]
    fn from_str_uses_default_client() {
        let mailbox: Mailbox = "demo@1secmail.com".parse().unwrap();
        assert_eq!(mailbox.client().base_url(), default_client().base_url());
        assert!("nope".parse::<Mailbox>().is_err());
    }

    #[test]
    fn equality_ignores_client() {
        let a = Mailbox::from_parts(client(), "demo", "1secmail.com").unwrap();
        let b: Mailbox = "demo@1secmail.com".parse().unwrap();
        let c = Mailbox::from_parts(client(), "other", "1secmail.com").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
