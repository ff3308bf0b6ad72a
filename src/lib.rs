//! # 1secmail Client
//! Asynchronous wrapper around the 1secmail disposable email HTTP API, providing simple methods to generate inboxes, list and read their messages, and download attachments from Rust using [`Client`] and [`Mailbox`].
//!
//! ## Audience and uses
//! For Rust developers who need throwaway addresses in integration tests, demos, or automation scripts without running mail infrastructure: generate a [`Mailbox`], hand its address to the system under test, then poll for [`Mail`] and fetch any [`Attachment`] bytes.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Each operation is a single GET request with no retries; configure a timeout through [`ClientBuilder::timeout`] if you need one.
//!
//! ## Out of scope
//! Not a general-purpose mail client, SMTP sender, or durable mailbox. It only proxies the 1secmail service and inherits its availability and retention limits. There is no retry, rate limiting, or caching.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`], any status other than `200 OK` as [`Error::Status`], and undecodable bodies as [`Error::Json`]. Addresses without exactly one `@`, or with an empty login or domain, are rejected with [`Error::InvalidAddress`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests and response statuses are emitted as `tracing` trace-level events. No subscriber is installed by the library.
//!
//! ## Example
//! ```no_run
//! use onesecmail_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), onesecmail_client::Error> {
//!     let client = Client::new()?;
//!     let mailbox = client.generate_random_mailbox().await?;
//!     println!("Created: {}", mailbox.address());
//!
//!     for summary in mailbox.get_messages().await? {
//!         let mail = mailbox.read_message(summary.id).await?;
//!         println!("From: {}, Subject: {}", mail.from, mail.subject);
//!         for attachment in &mail.attachments {
//!             let bytes = mailbox
//!                 .download_attachment(mail.id, &attachment.filename)
//!                 .await?
//!                 .bytes()
//!                 .await?;
//!             println!("  {} ({} bytes)", attachment.filename, bytes.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod download;
mod error;
mod mailbox;
mod models;

pub use client::{default_client, Client, ClientBuilder};
pub use download::AttachmentStream;
pub use error::Error;
pub use mailbox::{generate_random_mailbox, generate_random_mailboxes, Mailbox};
pub use models::{Attachment, Mail};

/// Result type alias for 1secmail operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
