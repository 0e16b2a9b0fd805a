//! KMRL Access - command line front end
//!
//! Evaluates access decisions against users and documents loaded from files

#![allow(missing_docs)]

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use kmrl_access::utils::logging::init_logging;
use kmrl_access::{
    AccessContext, AccessControl, Action, Category, Config, DataSources, DocumentStore,
    UserDirectory, UserRole, has_permission,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "kmrl-access", version, about = "KMRL document access control")]
struct Cli {
    /// Configuration file (YAML); falls back to KMRL_* environment variables
    #[arg(short, long, global = true, env = "KMRL_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a capability in the policy table
    Permission {
        #[arg(long)]
        role: UserRole,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        action: String,
    },
    /// Decide whether a user may act on a document
    Access {
        /// User id or name
        #[arg(long)]
        user: String,
        /// Document id
        #[arg(long)]
        document: String,
        #[arg(long, default_value = "view")]
        action: Action,
    },
    /// List documents visible to a user
    Visible {
        #[arg(long)]
        user: String,
    },
    /// List documents awaiting review that a user may approve
    Queue {
        #[arg(long)]
        user: String,
    },
    /// Show recent audit entries
    Audit {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env()?,
    };
    if cli.json_logs {
        config.access.logging.json = true;
    }

    init_logging(config.logging())?;
    // Loading ran before the subscriber existed
    match &cli.config {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("Configuration loaded from environment"),
    }
    debug!(?config, "Configuration resolved");

    if let Command::Permission {
        role,
        category,
        action,
    } = &cli.command
    {
        let allowed = has_permission(*role, *category, action);
        println!(
            "{}.{}.{}: {}",
            role,
            category,
            action,
            if allowed { "allowed" } else { "denied" }
        );
        return Ok(());
    }

    let sources = DataSources::load(config.data()).await?;
    let acl = AccessControl::from_config(&config, sources.users.clone());

    match cli.command {
        Command::Permission { .. } => {}
        Command::Access {
            user,
            document,
            action,
        } => {
            let user = sources
                .users
                .find_user(&user)
                .ok_or_else(|| anyhow!("unknown user: {}", user))?;
            let document = sources
                .documents
                .get(&document)
                .ok_or_else(|| anyhow!("unknown document: {}", document))?;

            let ctx = AccessContext::new(user).with_source("origin", "cli");
            let decision = acl.check(&ctx, action, &document);
            match decision.message() {
                None => println!("{} {}: allowed", action, document.id),
                Some(reason) => println!("{} {}: denied ({})", action, document.id, reason),
            }
        }
        Command::Visible { user } => {
            let user = sources
                .users
                .find_user(&user)
                .ok_or_else(|| anyhow!("unknown user: {}", user))?;
            for document in acl.visible_documents(&user, &*sources.documents) {
                println!("{}\t{}", document.id, document.status);
            }
        }
        Command::Queue { user } => {
            let user = sources
                .users
                .find_user(&user)
                .ok_or_else(|| anyhow!("unknown user: {}", user))?;
            for document in acl.approval_queue(&user, &*sources.documents) {
                println!("{}\t{}", document.id, document.status);
            }
        }
        Command::Audit { limit } => {
            for entry in acl.audit_log().recent(limit) {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    entry.timestamp.to_rfc3339(),
                    entry.user,
                    entry.role,
                    entry.action,
                    entry.message
                );
            }
        }
    }

    Ok(())
}
