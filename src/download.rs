//! Streaming access to attachment bytes.

use crate::Result;
use reqwest::header::CONTENT_TYPE;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// An open attachment download.
///
/// Holds the HTTP response until the body is consumed. Dropping the stream at
/// any point releases the underlying connection.
#[derive(Debug)]
pub struct AttachmentStream {
    response: reqwest::Response,
}

impl AttachmentStream {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    /// `Content-Type` reported by the service, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Body length from `Content-Length`, if the service sent one.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Read the next chunk of the body. Returns `None` once it is exhausted.
    pub async fn chunk(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.response.chunk().await?.map(|chunk| chunk.to_vec()))
    }

    /// Collect the rest of the body into memory.
    pub async fn bytes(self) -> Result<Vec<u8>> {
        Ok(self.response.bytes().await?.to_vec())
    }

    /// Stream the rest of the body into `writer`, returning the number of
    /// bytes written.
    ///
    /// # Examples
    /// ```no_run
    /// # use onesecmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), onesecmail_client::Error> {
    /// let mailbox = Client::new()?.mailbox("demo@1secmail.com")?;
    /// let stream = mailbox.download_attachment(639, "report.pdf").await?;
    /// let mut file = tokio::fs::File::create("report.pdf").await?;
    /// stream.copy_to(&mut file).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn copy_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.response.chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }
}
