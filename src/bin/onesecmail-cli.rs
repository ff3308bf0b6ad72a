//! CLI for generating and reading 1secmail inboxes

use anyhow::Context;
use clap::{Parser, Subcommand};
use onesecmail_client::{Client, Mail};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onesecmail-cli")]
#[command(about = "Interact with 1secmail disposable inboxes", arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// API endpoint
    #[arg(long, global = true, env = "ONESECMAIL_BASE_URL")]
    base_url: Option<String>,

    /// Proxy URL (optional)
    #[arg(long, global = true, env = "ONESECMAIL_PROXY")]
    proxy: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random mailbox addresses
    Generate {
        /// Number of addresses to generate
        #[arg(long, default_value = "1")]
        count: i64,
    },

    /// List the domains addresses can be generated on
    Domains,

    /// List messages in a mailbox
    List {
        /// Full mailbox address
        address: String,
    },

    /// Show a single message
    Read {
        /// Full mailbox address
        address: String,

        /// Message id
        id: u64,
    },

    /// Download an attachment
    Download {
        /// Full mailbox address
        address: String,

        /// Message id
        id: u64,

        /// Attachment file name
        file: String,

        /// Where to write the attachment (defaults to the file name)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut builder = Client::builder();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(proxy) = &args.proxy {
        builder = builder.proxy(proxy);
    }
    let client = builder.build()?;

    match &args.command {
        Command::Generate { count } => {
            let addresses = client.gen_random_mailbox(*count).await?;
            print_list(&args, &addresses)?;
        }
        Command::Domains => {
            let domains = client.get_domain_list().await?;
            print_list(&args, &domains)?;
        }
        Command::List { address } => {
            let mailbox = client.mailbox(address)?;
            let mails = mailbox.get_messages().await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&mails)?);
            } else if mails.is_empty() {
                println!("No messages in {mailbox}");
            } else {
                for mail in &mails {
                    println!("{:>10}  {}  {:<30}  {}", mail.id, mail.date, mail.from, mail.subject);
                }
            }
        }
        Command::Read { address, id } => {
            let mail = client.mailbox(address)?.read_message(*id).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&mail)?);
            } else {
                print_mail(&mail);
            }
        }
        Command::Download {
            address,
            id,
            file,
            output,
        } => {
            let path = output.clone().unwrap_or_else(|| PathBuf::from(file));
            let stream = client
                .mailbox(address)?
                .download_attachment(*id, file)
                .await?;
            let mut out = tokio::fs::File::create(&path)
                .await
                .with_context(|| format!("creating {}", path.display()))?;
            let written = stream.copy_to(&mut out).await?;
            println!("Wrote {written} bytes to {}", path.display());
        }
    }

    Ok(())
}

fn print_list(args: &Args, items: &[String]) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{item}");
        }
    }
    Ok(())
}

fn print_mail(mail: &Mail) {
    println!("Id:      {}", mail.id);
    println!("From:    {}", mail.from);
    println!("Subject: {}", mail.subject);
    println!("Date:    {}", mail.date);
    for attachment in &mail.attachments {
        println!(
            "Attachment: {} ({}, {} bytes)",
            attachment.filename, attachment.content_type, attachment.size
        );
    }
    println!();
    let body = if mail.text_body.is_empty() {
        &mail.body
    } else {
        &mail.text_body
    };
    println!("{body}");
}
