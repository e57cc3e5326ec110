//! ACL inspection tool
//!
//! Loads an ACL configuration file and evaluates queries for an ad-hoc
//! subject built from `--role` / `--group` flags. Results go to stdout as
//! JSON; logs go to stderr.
//!
//! ```text
//! acl-inspect --config acl.toml --role role_user scopes
//! acl-inspect --config acl.toml --role role_user check-scope read:own write:own
//! acl-inspect --config acl.toml group-scopes admin
//! ```
//!
//! Exit codes: 0 when the check passes, 1 when it is denied, 2 on any error
//! (unreadable configuration, unknown role or group).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cretoai_acl::{AclConfig, AclService, AclSubject};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// CretoAI ACL inspection CLI
#[derive(Parser)]
#[command(name = "acl-inspect")]
#[command(about = "Evaluate role/group/scope queries against an ACL configuration")]
#[command(version)]
struct Cli {
    /// Path to configuration file (.toml or .json)
    #[arg(short, long, env = "CRETOAI_ACL_CONFIG")]
    config: PathBuf,

    /// Role assigned to the subject (repeatable)
    #[arg(short, long = "role")]
    roles: Vec<String>,

    /// Group assigned to the subject (repeatable)
    #[arg(short, long = "group")]
    groups: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run presence checks on the configuration
    Validate,

    /// List the scopes granted by the subject's roles
    Scopes,

    /// List the scopes of a group (defaults to the default group)
    GroupScopes {
        /// Group name
        group: Option<String>,
    },

    /// Check that every scope is granted
    CheckScope {
        /// Required scopes
        #[arg(required = true)]
        scopes: Vec<String>,
    },

    /// Check that every role is assigned
    CheckRole {
        /// Required roles
        #[arg(required = true)]
        roles: Vec<String>,
    },

    /// Check that every group is assigned
    CheckGroup {
        /// Required groups
        #[arg(required = true)]
        groups: Vec<String>,
    },
}

const EXIT_DENIED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},cretoai_acl={}", log_level, log_level).into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    debug!("acl-inspect v{}", cretoai_acl::VERSION);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:?}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AclConfig::load(&cli.config)
        .with_context(|| format!("Failed to load ACL configuration from {:?}", cli.config))?;
    info!("Loaded configuration from {:?}", cli.config);

    let mut subject = AclSubject::new("cli");
    if !cli.roles.is_empty() {
        subject = subject.with_roles(cli.roles);
    }
    if !cli.groups.is_empty() {
        subject = subject.with_groups(cli.groups);
    }
    debug!("Evaluating for subject {:?}", subject);

    match cli.command {
        Command::Validate => {
            config.validate().context("Configuration failed presence checks")?;
            print_json(&json!({ "valid": true }))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Scopes => {
            let acl = AclService::new(config);
            let scopes = acl.scopes_of_user(&subject)?;
            print_json(&json!({ "subject": subject, "scopes": scopes }))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::GroupScopes { group } => {
            let acl = AclService::new(config);
            let (group, scopes) = match group {
                Some(name) => {
                    let scopes = acl.scopes_of_group(&name)?;
                    (name, scopes)
                }
                None => {
                    let name = acl.resolve_default_group()?.name.clone();
                    (name, acl.default_group_scopes()?)
                }
            };
            print_json(&json!({ "group": group, "scopes": scopes }))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckScope { scopes } => {
            let acl = AclService::new(config);
            let allowed = acl.has_scopes(&subject, &scopes)?;
            report(json!({ "scopes": scopes }), allowed)
        }
        Command::CheckRole { roles } => {
            let acl = AclService::new(config);
            let allowed = acl.has_role(&subject, &roles);
            report(json!({ "roles": roles }), allowed)
        }
        Command::CheckGroup { groups } => {
            let acl = AclService::new(config);
            let allowed = acl.has_group(&subject, &groups);
            report(json!({ "groups": groups }), allowed)
        }
    }
}

fn report(mut query: serde_json::Value, allowed: bool) -> Result<ExitCode> {
    query["allowed"] = json!(allowed);
    print_json(&query)?;

    Ok(if allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DENIED)
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}
