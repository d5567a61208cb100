use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::duration::parse_duration;
use crate::config::flags::{self, FlagSource};
use crate::config::settings::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "realize", version, about = "Manage realize workspace settings")]
pub struct Cli {
    #[command(flatten)]
    pub flags: SettingsFlags,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_FILE,
        help = "Config file name inside the .realize folder"
    )]
    pub config_file: String,
    #[arg(
        long,
        global = true,
        help = "Directory holding the .realize folder (defaults to the current directory)"
    )]
    pub dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the config document from the current flags
    Init,
    /// Print the persisted settings
    Show,
    /// Print which config file would be read
    Path,
    /// Remove the .realize folder
    Clean,
}

#[derive(Debug, Clone, Args)]
pub struct SettingsFlags {
    #[arg(long, global = true, help = "Do not persist the config document")]
    pub no_config: bool,
    #[arg(long, global = true, default_value_t = 0, help = "Maximum number of watched files")]
    pub flimit: u64,
    #[arg(long, global = true, help = "Use the polling watcher")]
    pub legacy: bool,
    #[arg(
        long,
        global = true,
        default_value = "1.5s",
        value_parser = parse_duration,
        help = "Polling interval of the legacy watcher"
    )]
    pub legacy_delay: Duration,
    #[arg(long, global = true, help = "Disable the web panel")]
    pub no_server: bool,
    #[arg(long, global = true, help = "Open the web panel in a browser on start")]
    pub serv_open: bool,
    #[arg(long, global = true, default_value = "localhost", help = "Web panel host")]
    pub serv_host: String,
    #[arg(long, global = true, default_value_t = 5002, help = "Web panel port")]
    pub serv_port: i64,
}

impl FlagSource for SettingsFlags {
    fn bool(&self, name: &str) -> bool {
        match name {
            flags::NO_CONFIG => self.no_config,
            flags::LEGACY => self.legacy,
            flags::NO_SERVER => self.no_server,
            flags::SERVER_OPEN => self.serv_open,
            _ => false,
        }
    }

    fn uint64(&self, name: &str) -> u64 {
        match name {
            flags::FILE_LIMIT => self.flimit,
            _ => 0,
        }
    }

    fn int(&self, name: &str) -> i64 {
        match name {
            flags::SERVER_PORT => self.serv_port,
            _ => 0,
        }
    }

    fn string(&self, name: &str) -> String {
        match name {
            flags::SERVER_HOST => self.serv_host.clone(),
            _ => String::new(),
        }
    }

    fn duration(&self, name: &str) -> Duration {
        match name {
            flags::LEGACY_DELAY => self.legacy_delay,
            _ => Duration::ZERO,
        }
    }
}
