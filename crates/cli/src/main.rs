mod cmd;
mod host;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkaudit_core::config::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "linkaudit",
    version,
    about = "Find unreferenced files and empty folders in a markdown vault"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List folders that can be audited
    Folders(FoldersArgs),

    /// List files in a folder that no note links to or embeds
    Orphans(OrphansArgs),

    /// List folders with no files and no subfolders
    EmptyFolders(EmptyFoldersArgs),

    /// List every link and embed target indexed from the vault
    References(ReferencesArgs),

    /// Show or change persisted audit settings
    Settings(SettingsArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct FoldersArgs {
    /// Include intermediate folders that hold no files directly
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct OrphansArgs {
    /// Folder to audit, relative to the vault root (e.g. "Docs" or "Projects/2024")
    pub folder: Option<String>,

    /// Also list referenced files, overriding the stored setting for this run
    #[arg(long)]
    pub show_referenced: bool,

    /// Print "Checking file i of n..." to stderr while auditing
    #[arg(long)]
    pub progress: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct EmptyFoldersArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[arg(long)]
    pub json: bool,

    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ReferencesArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print current settings (default)
    Show,

    /// Persist whether referenced files are listed by `orphans`
    SetShowReferenced {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Commands report config errors themselves; logging just needs a best effort.
    let _log_guard = match ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref()) {
        Ok(rc) => match logging::init(&rc.logging) {
            Ok(guard) => {
                tracing::debug!(
                    profile = %rc.active_profile,
                    vault = %rc.vault_root.display(),
                    "resolved config"
                );
                guard
            }
            Err(e) => {
                eprintln!("Error opening log file: {}", e);
                std::process::exit(1);
            }
        },
        Err(_) => None,
    };

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Folders(args) => cmd::folders::run(config, profile, args),
        Commands::Orphans(args) => cmd::orphans::run(config, profile, args),
        Commands::EmptyFolders(args) => cmd::empty_folders::run(config, profile, args),
        Commands::References(args) => cmd::references::run(config, profile, args),
        Commands::Settings(args) => cmd::settings::run(config, profile, args),
    }
}
