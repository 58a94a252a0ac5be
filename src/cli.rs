use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{inspect, render, serve};
use trustboard::config::DEFAULT_BIND_ADDRESS;

#[derive(Parser)]
#[command(name = "trustboard")]
#[command(about = "Citizen trust dashboard: web server and static rendering tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Dataset location shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Path to the CSV dataset
    ///
    /// When the file does not exist the dashboard shows only the forecast rows.
    #[arg(
        short,
        long,
        env = "DATASET_PATH",
        default_value = compute::DEFAULT_DATASET_FILE
    )]
    pub dataset_path: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the dashboard and start the web server
    Serve {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,
    },
    /// Build the dashboard and write the page to an HTML file
    Render {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Build the dashboard and print the dataset and chart specifications as JSON
    Inspect {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                dataset,
                bind_address,
            } => {
                serve(&dataset.dataset_path, &bind_address).await?;
            }
            Commands::Render { dataset, output } => {
                render(&dataset.dataset_path, &output)?;
            }
            Commands::Inspect { dataset } => {
                inspect(&dataset.dataset_path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_requires_output() {
        assert!(Cli::try_parse_from(["trustboard", "render"]).is_err());
    }

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "trustboard",
            "serve",
            "--dataset-path",
            "data.csv",
            "--bind-address",
            "127.0.0.1:8080",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                dataset,
                bind_address,
            } => {
                assert_eq!(dataset.dataset_path, PathBuf::from("data.csv"));
                assert_eq!(bind_address, "127.0.0.1:8080");
            }
            _ => panic!("expected serve command"),
        }
    }
}
