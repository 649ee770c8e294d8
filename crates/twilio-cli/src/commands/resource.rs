//! Generic create/update/delete/get/list subcommands, shared by every
//! resource group.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;
use futures_util::{TryStreamExt, pin_mut};
use twilio_rest::{Deleted, Params, Resource, ResourceService, Sid};

use crate::output;

#[derive(Args, Debug)]
pub struct ResourceCommand {
    #[command(subcommand)]
    pub action: ResourceAction,
}

#[derive(Args, Debug)]
pub struct ChatRolesCommand {
    /// Chat service SID the roles belong to
    #[arg(long)]
    pub service: String,

    #[command(subcommand)]
    pub action: ResourceAction,
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List records, one JSON object per line
    List(ListArgs),

    /// Fetch a single record
    Get {
        /// Record SID
        sid: String,
    },

    /// Create a record
    Create {
        /// Form parameter as KEY=VALUE (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Update a record
    Update {
        /// Record SID
        sid: String,

        /// Form parameter as KEY=VALUE (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Delete a record
    Delete {
        /// Record SID
        sid: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Query parameter as KEY=VALUE (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Follow next-page links until the last page
    #[arg(long)]
    pub all: bool,

    /// Resume from a next-page link printed by an earlier listing
    #[arg(long, conflicts_with = "params")]
    pub from: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

fn parse_sid(s: &str) -> Result<Sid> {
    Sid::new(s).with_context(|| format!("Invalid SID '{s}'"))
}

pub async fn run<R: Resource>(service: ResourceService<R>, action: ResourceAction) -> Result<()> {
    match action {
        ResourceAction::List(args) => list(service, args).await,
        ResourceAction::Get { sid } => {
            let record = service
                .get(&parse_sid(&sid)?)
                .await
                .context("Failed to get record")?;
            output::json_pretty(&record)
        }
        ResourceAction::Create { params } => {
            let record = service
                .create(&params.into_iter().collect())
                .await
                .context("Failed to create record")?;
            output::success(&format!("Created {}", record.sid()));
            output::json_pretty(&record)
        }
        ResourceAction::Update { sid, params } => {
            let record = service
                .update(&parse_sid(&sid)?, &params.into_iter().collect())
                .await
                .context("Failed to update record")?;
            output::success(&format!("Updated {}", record.sid()));
            output::json_pretty(&record)
        }
        ResourceAction::Delete { sid } => {
            match service
                .delete(&parse_sid(&sid)?)
                .await
                .context("Failed to delete record")?
            {
                Deleted::Removed => output::success(&format!("Deleted {sid}")),
                Deleted::Closed(record) => {
                    output::success(&format!("Closed {sid}"));
                    output::json_pretty(&record)?;
                }
            }
            Ok(())
        }
    }
}

async fn list<R: Resource>(service: ResourceService<R>, args: ListArgs) -> Result<()> {
    let print = |record: &R| {
        if args.pretty {
            output::json_pretty(record)
        } else {
            output::json(record)
        }
    };

    let mut pages = match args.from.as_deref() {
        Some("") => bail!("--from needs a non-empty next-page link"),
        Some(link) => service.page_iterator_from(link),
        None => service.page_iterator(args.params.iter().cloned().collect::<Params>()),
    };

    if args.all {
        let records = pages.into_stream();
        pin_mut!(records);

        let mut count = 0usize;
        while let Some(record) = records.try_next().await.context("Failed to list records")? {
            print(&record)?;
            count += 1;
        }
        if count == 0 {
            eprintln!("{}", "No records found.".dimmed());
        }
        return Ok(());
    }

    let page = pages.next().await.context("Failed to list records")?;
    if page.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
    }
    for record in &page.items {
        print(record)?;
    }

    if let Some(next) = page.next_page_uri() {
        eprintln!();
        output::note("Next page", next);
    }

    Ok(())
}
