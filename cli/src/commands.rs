//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for resolved presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, one array of preset records
    Json,
    /// Human-readable listing
    Text,
}

/// CLI arguments for agent-presets
#[derive(Parser, Debug)]
#[command(name = "agent-presets")]
#[command(author, version, about = "Resolve agent tool presets from presets.yaml")]
#[command(long_about = r#"
Resolves the capability presets declared in presets.yaml into flat,
deduplicated tool lists.

The preset file is read from:
  <project_root>/.claude/skills/agent-creation/presets.yaml

where project_root is (in priority order):
1. --project-root <path>
2. $PROJECT_ROOT
3. the parent of the current directory

Example:
  agent-presets list
  agent-presets list --dispatchable -o text
  agent-presets show dev
  agent-presets validate
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project root containing .claude/skills/agent-creation/presets.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "json")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve every preset
    List {
        /// Only presets marked dispatchable
        #[arg(long)]
        dispatchable: bool,
    },
    /// Resolve a single preset by id
    Show {
        /// Preset id
        id: String,
    },
    /// Report dangling group names, include cycles and empty presets
    Validate,
    /// Print the preset file location and exit
    Path,
}
