//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Find where Steam installed a game and whether it runs through Proton.
#[derive(Parser, Debug)]
#[command(name = "gamepath", author, version)]
pub struct Cli {
    /// Steam installation root (skips auto-detection)
    #[arg(long, global = true, env = "STEAM_DIR")]
    pub steam_dir: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/gamepath/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log resolution steps to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the Steam installation root
    Root,

    /// Print the primary steamapps directory
    Steamapps,

    /// Print every library steamapps directory, primary first
    Libraries,

    /// Print the path of an app's manifest
    Manifest {
        /// Steam app id
        app_id: String,
    },

    /// Print an app's install directory
    InstallDir {
        /// Steam app id
        app_id: String,
    },

    /// Print whether an app runs through Proton
    Proton {
        /// Steam app id
        app_id: String,
    },
}
