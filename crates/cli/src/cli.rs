use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{analyze_command, init_command, scaffold_command, stub_command};

/// Generate Kotlin stubs and JUnit 5 / MockK test scaffolds
#[derive(Parser)]
#[command(name = "stubsmith")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate test scaffolds for service classes
    Scaffold {
        /// Fully-qualified class names (defaults to `service_classes` from the config file)
        classes: Vec<String>,

        /// Source or descriptor roots, separated like PATH entries
        #[arg(long = "classpath")]
        classpath: Option<String>,

        /// Directory the scaffolds are written to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the scaffolds instead of writing them
        #[arg(short = 'd', long = "dry-run")]
        dry_run: bool,
    },
    /// Generate a Kotlin stub from a JSON stub description
    Stub {
        /// Path to the stub description (JSON)
        stub_json: String,

        /// Write the stub under this directory instead of printing it
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show what a scaffold for one class would be built from
    Analyze {
        /// Fully-qualified class name
        class: String,

        /// Source or descriptor roots, separated like PATH entries
        #[arg(long = "classpath")]
        classpath: Option<String>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a stubsmith configuration file
    Init {
        /// Custom working directory (defaults to current directory)
        #[arg(long = "cwd")]
        cwd: Option<String>,

        /// Force overwrite an existing configuration file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Scaffold {
                classes,
                classpath,
                output,
                dry_run,
            } => scaffold_command(&classes, classpath.as_deref(), output.as_deref(), dry_run),
            Commands::Stub { stub_json, output } => stub_command(&stub_json, output.as_deref()),
            Commands::Analyze {
                class,
                classpath,
                json,
            } => analyze_command(&class, classpath.as_deref(), json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scaffold_arguments() {
        let cli = Cli::try_parse_from([
            "stubsmith",
            "scaffold",
            "com.example.UserService",
            "com.example.OrderService",
            "--classpath",
            "src/main/java",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Scaffold {
                classes,
                classpath,
                output,
                dry_run,
            } => {
                assert_eq!(classes.len(), 2);
                assert_eq!(classpath.as_deref(), Some("src/main/java"));
                assert!(output.is_none());
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_analyze_requires_class() {
        assert!(Cli::try_parse_from(["stubsmith", "analyze"]).is_err());
    }
}
