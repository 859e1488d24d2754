use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::domain::private_message::MessageSource;

#[derive(Debug, Parser)]
#[command(
    name = "discourse-pm",
    about = "PM users on Discourse via API",
    version,
    group(ArgGroup::new("body").required(true).args(["message", "file"]))
)]
pub struct Cli {
    /// Path to config file (default: ./config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the pm_all resume file (overrides `work_list_path` in config)
    #[arg(long, global = true)]
    pub work_list: Option<PathBuf>,

    /// Title of the PM
    #[arg(short, long)]
    pub title: String,

    /// Body of the PM
    #[arg(short, long)]
    pub message: Option<String>,

    /// Body of the PM, read from the provided file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// PM a single user
    #[command(name = "pm_single")]
    PmSingle {
        /// Username to PM
        #[arg(short, long)]
        username: String,
    },
    /// PM a comma-separated list of users
    #[command(name = "pm_multi")]
    PmMulti {
        /// List of usernames to PM
        #[arg(short, long, value_delimiter = ',', required = true)]
        usernames: Vec<String>,
    },
    /// PM every registered user (resumable)
    #[command(name = "pm_all")]
    PmAll,
    /// PM every moderator
    #[command(name = "pm_moderators")]
    PmModerators,
}

impl Cli {
    pub fn message_source(&self) -> MessageSource {
        match &self.file {
            Some(path) => MessageSource::File(path.clone()),
            None => MessageSource::Inline(self.message.clone().unwrap_or_default()),
        }
    }
}

/// Trims entries and drops blanks left by stray commas.
pub fn normalize_usernames(usernames: &[String]) -> Vec<String> {
    usernames
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
