//! clubctl - inspect ClubCentral permissions from the command line
//!
//! Lists the permission catalog, resolves effective permissions for an actor
//! and evaluates dashboard and action gates.

use clap::{Parser, Subcommand};
use clubcentral::auth::{self, ClubAction, DashboardSection};
use clubcentral::config::RbacConfig;
use clubcentral::utils::logging::init_tracing;
use clubcentral::{
    ActorDescriptor, Config, Permission, PermissionSet, PermissionSummary, Result, descriptors,
    has_all_permissions, has_any_permission, resolve,
};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Exit status for a check that was evaluated and refused
const EXIT_DENIED: u8 = 1;
/// Exit status for bad input or configuration
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "clubctl")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Inspect ClubCentral permissions and access gates", long_about = None)]
struct Cli {
    /// Configuration file (YAML). Defaults to environment variables.
    #[arg(short, long, global = true, env = "CLUBCENTRAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every permission with its label and description
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Resolve the effective permission set for an actor
    Resolve {
        /// The actor is the club president
        #[arg(long)]
        president: bool,
        /// Role name, e.g. "Vice-President"
        #[arg(long, default_value = "")]
        role: String,
        /// Custom role permission bag as a JSON object
        #[arg(long)]
        permissions: Option<String>,
    },
    /// Check permissions for an actor (exit status 1 when refused)
    Check {
        /// Actor descriptor as JSON ({"isPresident": .., "role": .., "permissions": {..}})
        #[arg(long)]
        actor: String,
        /// Permissions to check
        #[arg(required = true)]
        permissions: Vec<String>,
        /// Require every permission instead of any one
        #[arg(long)]
        all: bool,
    },
    /// List the dashboard sections an actor can see
    Sections {
        /// Actor descriptor as JSON
        #[arg(long)]
        actor: String,
    },
    /// Check whether an actor may perform a club action (exit status 1 when refused)
    Authorize {
        /// Actor descriptor as JSON
        #[arg(long)]
        actor: String,
        /// Action name, e.g. "approve_member"
        action: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    init_tracing(config.logging());

    match run(cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_DENIED),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
}

/// Run a command. `Ok(false)` means a check was evaluated and refused.
fn run(command: Command, config: &Config) -> Result<bool> {
    match command {
        Command::Catalog { json } => {
            if json {
                print_json(&serde_json::to_value(descriptors())?)?;
            } else {
                for descriptor in descriptors() {
                    println!(
                        "{:<22} {:<22} {}",
                        descriptor.id, descriptor.label, descriptor.description
                    );
                }
            }
            Ok(true)
        }
        Command::Resolve {
            president,
            role,
            permissions,
        } => {
            let custom = match permissions {
                Some(raw) => Some(PermissionSet::from_raw_with(
                    &serde_json::from_str(&raw)?,
                    config.rbac(),
                )?),
                None => None,
            };
            let effective = resolve(president, &role, custom);
            let summary = PermissionSummary::for_set(Some(&effective));
            print_json(&json!({
                "permissions": effective,
                "summary": summary,
            }))?;
            Ok(true)
        }
        Command::Check {
            actor,
            permissions,
            all,
        } => {
            let actor = parse_actor(&actor, config.rbac())?;
            let required = permissions
                .iter()
                .map(|name| name.parse::<Permission>())
                .collect::<Result<Vec<_>>>()?;
            let effective = actor.effective_permissions();

            let granted = if all {
                has_all_permissions(Some(&effective), &required)
            } else {
                has_any_permission(Some(&effective), &required)
            };
            debug!("Check {:?} (all: {}): {}", required, all, granted);
            println!("{}", if granted { "granted" } else { "denied" });
            Ok(granted)
        }
        Command::Sections { actor } => {
            let actor = parse_actor(&actor, config.rbac())?;
            let effective = actor.effective_permissions();
            let sections: Vec<Value> = auth::visible_sections(Some(&effective))
                .into_iter()
                .map(section_json)
                .collect();
            print_json(&Value::Array(sections))?;
            Ok(true)
        }
        Command::Authorize { actor, action } => {
            let actor = parse_actor(&actor, config.rbac())?;
            let action: ClubAction = action.parse()?;
            let decision = auth::check(&actor, action);
            print_json(&serde_json::to_value(&decision)?)?;
            Ok(decision.allowed)
        }
    }
}

fn parse_actor(raw: &str, config: &RbacConfig) -> Result<ActorDescriptor> {
    ActorDescriptor::from_value_with(serde_json::from_str(raw)?, config)
}

fn section_json(section: DashboardSection) -> Value {
    json!({
        "section": section,
        "label": section.label(),
        "path": section.path(),
    })
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
