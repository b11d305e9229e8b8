use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;
mod mcp;
mod utils;
mod vagrant;

use cmd::{ExecArgs, ListArgs};
use config::{DEFAULT_PROJECTS_DIR, DEFAULT_VAGRANT_BIN, PROJECTS_DIR_ENV, VAGRANT_BIN_ENV};

/// Vagrant MCP Server - exposes Vagrant VM lifecycle commands as MCP tools over stdio.
///
/// Command layout:
///   vagrant-mcp-server [serve]                      Run the MCP server (default)
///   vagrant-mcp-server list [--json]                Print the tool catalogue
///   vagrant-mcp-server exec <TOOL> [--param k=v]    Run one tool and print its report
///
/// Global flags / env:
///   -v / -vv              Increase verbosity (logs go to stderr)
///   -q / --quiet          Errors only
///   --projects-dir DIR    Working directory for every vagrant command (VAGRANT_PROJECTS_DIR)
///   --vagrant-bin PATH    vagrant executable (VAGRANT_BIN)
///
/// Examples:
///   vagrant-mcp-server list
///   vagrant-mcp-server exec status
///   vagrant-mcp-server exec ssh --param command="uname -a" --param machine_name=web
///   vagrant-mcp-server exec snapshot --param action=save --param snapshot_name=clean
#[derive(Parser, Debug)]
#[command(
    name = "vagrant-mcp-server",
    version,
    author,
    about = "MCP server exposing Vagrant VM management tools over stdio",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory holding the Vagrantfile; every command runs here
    #[arg(
        long = "projects-dir",
        env = PROJECTS_DIR_ENV,
        default_value = DEFAULT_PROJECTS_DIR,
        global = true,
        value_name = "DIR"
    )]
    projects_dir: String,

    /// vagrant executable to spawn
    #[arg(
        long = "vagrant-bin",
        env = VAGRANT_BIN_ENV,
        default_value = DEFAULT_VAGRANT_BIN,
        global = true,
        value_name = "PATH"
    )]
    vagrant_bin: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server on stdio (default)
    Serve,

    /// List the tools the server advertises
    List(ListArgs),

    /// Execute (invoke) a tool once and print its report
    Exec(ExecArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let config = config::Config::new(cli.projects_dir, cli.vagrant_bin);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => cmd::execute_serve(config),
        Commands::List(args) => cmd::execute_list(args),
        Commands::Exec(args) => cmd::execute_exec(args, config),
    }
}
