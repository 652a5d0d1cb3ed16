use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands {
    pub mod list;
    pub mod runners;
    pub mod version;
}
mod client;
mod config;
mod error;
mod format;
mod pagination;
mod runner;
mod runner_group;
mod scope;

use client::GhClient;
use commands::list::list;
use commands::runners::runners;
use commands::version::{version, VERSION};
use config::{load_file_config, Config};
use scope::Scope;

const LONG_ABOUT: &str = "\
A command line tool for interacting with GitHub runner groups
and retrieving runner information in both Enterprise and Organization contexts.

This tool allows you to:
- List runner groups in enterprises or organizations
- List runners in specific runner groups with status information
- Format the output for further processing

Supports both GitHub.com and GitHub Enterprise Server.
Requests go through an authenticated `gh` CLI; run `gh auth login` first.";

#[derive(Parser, Debug)]
#[command(
    name = "gh-runner-group",
    version = VERSION,
    about = "A CLI tool for managing GitHub Actions runner groups",
    long_about = LONG_ABOUT
)]
struct Opt {
    /// Remove all ANSI control characters from the output (colors are kept
    /// when piped otherwise; NO_COLOR is honored too)
    #[arg(long = "plain", global = true)]
    plain: bool,

    /// Defaults file (default: $HOME/.gh-runner-group.yaml)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ScopeArgs {
    /// Enterprise name
    #[arg(short = 'e', long = "enterprise")]
    enterprise: Option<String>,

    /// Organization name
    #[arg(short = 'o', long = "org")]
    org: Option<String>,
}

impl ScopeArgs {
    fn scope(self) -> Scope {
        match (self.enterprise, self.org) {
            (Some(enterprise), _) => Scope::Enterprise(enterprise),
            (None, Some(org)) => Scope::Organization(org),
            (None, None) => unreachable!("clap requires --enterprise or --org"),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List runner groups in an enterprise or organization
    #[command(
        name = "list",
        after_help = "\
Examples:
  # For GitHub.com enterprise
  gh-runner-group list --enterprise myenterprise

  # For GitHub.com organization
  gh-runner-group list --org myorg

  # For GitHub Enterprise Server (using flag)
  gh-runner-group list --org myorg --hostname github.example.com

  # For GitHub Enterprise Server (using environment variable, handled by gh)
  GH_HOST=github.example.com gh-runner-group list --enterprise myenterprise"
    )]
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        /// GitHub hostname (e.g., github.example.com)
        #[arg(short = 'H', long = "hostname")]
        hostname: Option<String>,
    },

    /// List runners in a specific runner group
    #[command(
        name = "runners",
        after_help = "\
Examples:
  # For GitHub.com
  gh-runner-group runners 123 --enterprise myenterprise
  gh-runner-group runners 123 --org myorg

  # For GitHub Enterprise Server
  gh-runner-group runners 123 --org myorg --hostname github.example.com"
    )]
    Runners {
        /// Runner group ID
        #[arg(value_name = "RUNNER_GROUP_ID", allow_hyphen_values = true)]
        runner_group_id: String,

        #[command(flatten)]
        scope: ScopeArgs,

        /// GitHub hostname (e.g., github.example.com)
        #[arg(short = 'H', long = "hostname")]
        hostname: Option<String>,
    },

    /// Print the version number of gh-runner-group
    #[command(name = "version")]
    Version {},
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "gh_runner_group=warn",
        1 => "gh_runner_group=info",
        _ => "gh_runner_group=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn client_for(config: &Config) -> GhClient {
    match config.hostname.as_deref() {
        Some(hostname) => GhClient::new().with_hostname(hostname),
        None => GhClient::new(),
    }
}

// Only the commands that talk to GitHub read the defaults file.
fn load_config(path: Option<&Path>, hostname: Option<String>, plain: bool) -> Result<Config> {
    let config = Config::merge(load_file_config(path)?, hostname, plain);
    colored::control::set_override(config.use_color(env::var_os("NO_COLOR").as_deref()));
    Ok(config)
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    init_logging(opt.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match opt.cmd {
        Command::List { scope, hostname } => {
            let config = load_config(opt.config.as_deref(), hostname, opt.plain)?;
            list(&client_for(&config), &scope.scope(), &mut out)?;
        }
        Command::Runners {
            runner_group_id,
            scope,
            hostname,
        } => {
            let config = load_config(opt.config.as_deref(), hostname, opt.plain)?;
            runners(
                &client_for(&config),
                &scope.scope(),
                &runner_group_id,
                &mut out,
            )?;
        }
        Command::Version {} => {
            version(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
