//! Command-line companion for the MXroute alias gateway.
//!
//! Helps write the option string pasted into the password manager, previews
//! the aliases it produces, and manages forwarders directly on MXroute.
//!
//! # Usage
//!
//! ```bash
//! # Build an option string, prompting for anything missing
//! cargo run --bin aliasctl -- options --domain example.com --template "<slug>_<hex>"
//!
//! # Show the alias a given option string would produce right now
//! cargo run --bin aliasctl -- preview "domain=example.com,destination=me@example.com,target=github.com"
//!
//! # List forwarders of a domain
//! cargo run --bin aliasctl -- list example.com
//!
//! # Delete a forwarder
//! cargo run --bin aliasctl -- delete com-github-0262@example.com
//! ```
//!
//! # Environment Variables
//!
//! `list` and `delete` need `MXROUTE_SERVER`, `MXROUTE_USERNAME` and
//! `MXROUTE_API_KEY` (see the `config` module). `options` and `preview` work
//! offline.

use mxroute_alias_gateway::alias::options::{
    DEFAULT_ALIAS_SEPARATOR, DEFAULT_HEX_LENGTH, DEFAULT_SLUG_LENGTH, DEFAULT_SLUG_SEPARATOR,
    render_option_string,
};
use mxroute_alias_gateway::alias::{
    AliasStrategy, RandomTokens, SystemClock, build_alias, parse_option_string,
};
use mxroute_alias_gateway::application::services::AliasService;
use mxroute_alias_gateway::config::MxrouteConfig;
use mxroute_alias_gateway::infrastructure::MxrouteClient;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for the MXroute alias gateway.
#[derive(Parser)]
#[command(name = "aliasctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an option string for the password manager
    Options(OptionsArgs),

    /// Show the alias an option string produces, without creating it
    Preview {
        /// Comma-separated option string
        options: String,
    },

    /// List forwarders of a domain
    List {
        /// Mail domain, e.g. example.com
        domain: String,
    },

    /// Delete a forwarder
    Delete {
        /// Full alias address, e.g. com-github-0262@example.com
        email: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Args)]
struct OptionsArgs {
    /// Mail domain the alias is created on
    #[arg(long)]
    domain: Option<String>,

    /// Mailbox that receives forwarded mail
    #[arg(long)]
    destination: Option<String>,

    /// Site the alias is for
    #[arg(long)]
    target: Option<String>,

    /// Random alias template using `<slug>` and `<hex>`, e.g. `<slug>_<hex>`
    #[arg(long)]
    template: Option<String>,

    #[arg(long)]
    prefix: Option<String>,

    #[arg(long)]
    suffix: Option<String>,

    #[arg(long, default_value = DEFAULT_ALIAS_SEPARATOR)]
    alias_separator: String,

    #[arg(long, default_value = DEFAULT_SLUG_SEPARATOR)]
    slug_separator: String,

    #[arg(long, default_value_t = DEFAULT_SLUG_LENGTH)]
    slug_length: usize,

    #[arg(long, default_value_t = DEFAULT_HEX_LENGTH)]
    hex_length: usize,

    /// Fail instead of prompting for missing required values
    #[arg(long)]
    no_input: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Options(args) => build_options(args)?,
        Commands::Preview { options } => preview(&options)?,
        Commands::List { domain } => list_forwarders(&domain).await?,
        Commands::Delete { email, yes } => delete_forwarder(&email, yes).await?,
    }

    Ok(())
}

/// Builds a service talking to MXroute with credentials from the environment.
fn alias_service() -> Result<AliasService> {
    let config = MxrouteConfig::from_env()?;
    config.validate()?;

    let client = MxrouteClient::new(&config).context("Failed to build MXroute client")?;

    Ok(AliasService::new(
        Arc::new(client),
        Arc::new(SystemClock),
        Arc::new(RandomTokens),
    ))
}

/// Assembles an option string from flags and prompts.
///
/// The result is validated with the same parser the gateway uses before it
/// is printed, so anything this prints is accepted by `POST /add`.
fn build_options(args: OptionsArgs) -> Result<()> {
    println!("{}", "Alias options".bright_blue().bold());
    println!();

    let domain = required(args.domain, "Mail domain", args.no_input)?;
    let destination = required(args.destination, "Destination mailbox", args.no_input)?;
    let target = required(args.target, "Target site", args.no_input)?;

    let slug_length = args.slug_length.to_string();
    let hex_length = args.hex_length.to_string();

    let pairs = [
        ("domain", domain.as_str()),
        ("destination", destination.as_str()),
        ("target", target.as_str()),
        ("template", args.template.as_deref().unwrap_or_default()),
        ("prefix", args.prefix.as_deref().unwrap_or_default()),
        ("suffix", args.suffix.as_deref().unwrap_or_default()),
        ("alias_separator", args.alias_separator.as_str()),
        ("slug_separator", args.slug_separator.as_str()),
        ("slug_length", slug_length.as_str()),
        ("hex_length", hex_length.as_str()),
    ];

    if let Some((key, _)) = pairs.iter().find(|(_, value)| value.contains(',')) {
        anyhow::bail!("The '{key}' option must not contain ','");
    }

    let rendered = render_option_string(pairs);
    parse_option_string(&rendered)?;

    println!("{}", "Paste this into the forwarder's domain field:".bright_white());
    println!("  {}", rendered.bright_yellow().bold());
    println!();

    Ok(())
}

fn required(value: Option<String>, prompt: &str, no_input: bool) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ if no_input => anyhow::bail!("{prompt} is required"),
        _ => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Prints the alias an option string would produce now.
///
/// Template aliases are random, so the preview shows one possible result.
fn preview(raw_options: &str) -> Result<()> {
    let options = parse_option_string(raw_options)?;
    let alias = build_alias(&options, &SystemClock, &RandomTokens)?;

    println!("{}", "Alias preview".bright_blue().bold());
    println!();
    println!(
        "  Address:     {}",
        format!("{alias}@{}", options.domain).bright_yellow().bold()
    );
    println!("  Forwards to: {}", options.destination.cyan());
    if matches!(options.strategy, AliasStrategy::Template(_)) {
        println!();
        println!(
            "{}",
            "  Template aliases are random; each request yields a new one.".bright_black()
        );
    }
    println!();

    Ok(())
}

/// Lists the forwarders of `domain`.
///
/// # Output Format
///
/// ```text
/// Forwarders of example.com
///
///   com-github-0262@example.com  ->  me@example.com
///
///   Total: 1
/// ```
async fn list_forwarders(domain: &str) -> Result<()> {
    let service = alias_service()?;

    println!("{}", format!("Forwarders of {domain}").bright_blue().bold());
    println!();

    let list = service
        .list_forwarders(domain)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list forwarders: {}", e))?;

    let entries = list.forwarders.as_array().cloned().unwrap_or_default();

    if entries.is_empty() {
        println!("{}", "  No forwarders found".yellow());
        return Ok(());
    }

    for entry in &entries {
        let alias = entry
            .get("alias")
            .and_then(|value| value.as_str())
            .unwrap_or("?");
        let destinations = entry
            .get("destinations")
            .and_then(|value| value.as_array())
            .map(|values| {
                values
                    .iter()
                    .filter_map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        println!(
            "  {}  {}  {}",
            format!("{alias}@{domain}").cyan(),
            "->".bright_black(),
            destinations
        );
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a forwarder after confirmation.
async fn delete_forwarder(email: &str, skip_confirm: bool) -> Result<()> {
    let service = alias_service()?;

    println!("{}", "Delete forwarder".bright_blue().bold());
    println!();
    println!("  Address: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this forwarder?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_forwarder(email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete forwarder: {}", e))?;

    println!("{}", "Forwarder deleted".green().bold());
    println!();

    Ok(())
}
