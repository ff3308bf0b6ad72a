//! Generate a mailbox and wait for the first message to arrive.

use onesecmail_client::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), onesecmail_client::Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?;

    println!("Domains: {}", client.get_domain_list().await?.join(", "));

    let mailbox = client.generate_random_mailbox().await?;
    println!("Send a message to {mailbox}");

    for _ in 0..12 {
        let messages = mailbox.get_messages().await?;
        if let Some(summary) = messages.first() {
            let mail = mailbox.read_message(summary.id).await?;
            println!("From: {}", mail.from);
            println!("Subject: {}", mail.subject);
            println!("{}", mail.text_body);
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    println!("Nothing arrived.");
    Ok(())
}
