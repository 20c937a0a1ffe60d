//! CLI 模块

pub mod serve;
pub mod tasks;

use clap::{Parser, Subcommand};

use crate::logging::LogTarget;
use crate::storage;
use crate::view::FilterMode;

#[derive(Parser)]
#[command(name = "taskmaster")]
#[command(version)]
#[command(about = "Task list client for a remote task API")]
pub struct Cli {
    /// Task API base URL (overrides config and TASKMASTER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive terminal UI (default)
    Tui,
    /// Print the task list
    List {
        /// Completion filter
        #[arg(short, long, value_enum)]
        filter: Option<FilterMode>,
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Add a task
    Add {
        /// Task title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Toggle a task's completion
    Toggle {
        /// Task id as shown by `list`
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task id as shown by `list`
        id: String,
    },
    /// Run the in-memory reference task API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = crate::api::DEFAULT_PORT)]
        port: u16,
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Route prefix for the task endpoints
        #[arg(long, default_value = crate::api::DEFAULT_PREFIX)]
        prefix: String,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    /// 日志输出位置与默认级别：TUI 占用终端，写入日志文件
    pub fn log_setup(&self) -> (LogTarget, &'static str) {
        match self {
            Commands::Tui => (LogTarget::File(storage::log_path()), "info"),
            Commands::Serve { .. } => (LogTarget::Stderr, "info"),
            _ => (LogTarget::Stderr, "warn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_joins_words() {
        let cli = Cli::parse_from(["taskmaster", "add", "Buy", "milk"]);
        match cli.command {
            Some(Commands::Add { title }) => assert_eq!(title.join(" "), "Buy milk"),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_list_filter_and_global_url() {
        let cli = Cli::parse_from([
            "taskmaster",
            "list",
            "--filter",
            "completed",
            "--api-url",
            "http://x/api",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://x/api"));
        match cli.command {
            Some(Commands::List { filter, search }) => {
                assert_eq!(filter, Some(FilterMode::Completed));
                assert!(search.is_empty());
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_log_setup_per_command() {
        assert_eq!(
            Commands::Tui.log_setup(),
            (LogTarget::File(storage::log_path()), "info")
        );

        let serve = Cli::parse_from(["taskmaster", "serve"]).command.unwrap();
        assert_eq!(serve.log_setup(), (LogTarget::Stderr, "info"));

        let list = Cli::parse_from(["taskmaster", "list"]).command.unwrap();
        assert_eq!(list.log_setup(), (LogTarget::Stderr, "warn"));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["taskmaster"]);
        assert!(cli.command.is_none());
    }
}
