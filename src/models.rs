//! Public data models decoded from 1secmail responses.

use serde::{Deserialize, Serialize};

/// A message in a 1secmail inbox.
///
/// Inbox listings only carry the header fields; `body`, `text_body`,
/// `html_body` and `attachments` are filled in by
/// [`Client::read_message`](crate::Client::read_message).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mail {
    /// Message identifier, unique within the mailbox.
    pub id: u64,
    /// Sender address.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Receive date as formatted by the service (`YYYY-MM-DD HH:MM:SS`).
    pub date: String,
    /// Attachment metadata, in the order the service lists them.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Raw message body.
    #[serde(default)]
    pub body: String,
    /// Plaintext body.
    #[serde(default)]
    pub text_body: String,
    /// HTML body.
    #[serde(default)]
    pub html_body: String,
}

impl Mail {
    /// Look up an attachment by file name.
    pub fn attachment(&self, filename: &str) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.filename == filename)
    }
}

/// Attachment metadata. The bytes are fetched separately with
/// [`Mailbox::download_attachment`](crate::Mailbox::download_attachment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_entry_has_empty_body() {
        let json = r#"{"id":639,"from":"someone@example.com","subject":"Some subject","date":"2018-06-08 14:33:55"}"#;
        let mail: Mail = serde_json::from_str(json).unwrap();

        assert_eq!(mail.id, 639);
        assert_eq!(mail.from, "someone@example.com");
        assert!(mail.attachments.is_empty());
        assert!(mail.body.is_empty());
        assert!(mail.html_body.is_empty());
    }

    #[test]
    fn full_message_decodes_bodies_and_attachments() {
        let json = r#"{
            "id": 639,
            "from": "someone@example.com",
            "subject": "Some subject",
            "date": "2018-06-08 14:33:55",
            "attachments": [
                {"filename": "iometer.pdf", "contentType": "application/pdf", "size": 47412}
            ],
            "body": "Some message body\n\n",
            "textBody": "Some message body\n\n",
            "htmlBody": ""
        }"#;
        let mail: Mail = serde_json::from_str(json).unwrap();

        assert_eq!(mail.text_body, "Some message body\n\n");
        let attachment = mail.attachment("iometer.pdf").unwrap();
        assert_eq!(attachment.content_type, "application/pdf");
        assert_eq!(attachment.size, 47412);
        assert!(mail.attachment("missing.txt").is_none());
    }

    #[test]
    fn missing_id_is_rejected() {
        let json = r#"{"from":"a@b.c","subject":"s","date":"d"}"#;
        assert!(serde_json::from_str::<Mail>(json).is_err());
    }
}
