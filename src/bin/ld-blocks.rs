//! ld-blocks - list, describe and invoke LaunchDarkly blocks from the command line

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use launchdarkly_blocks::core::registry::{BlockManifest, BlockRegistry};
use launchdarkly_blocks::{BlockCategory, BlockRuntime, Config};

#[derive(Parser)]
#[command(name = "ld-blocks", version, about = "LaunchDarkly REST API blocks")]
struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, global = true, env = "LAUNCHDARKLY_BLOCKS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available blocks
    List {
        /// Only show blocks in this category (e.g. feature_flags)
        #[arg(long)]
        category: Option<BlockCategory>,
        /// Only show blocks matching this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one block's manifest entry as JSON
    Describe { block_id: String },
    /// Print the manifest of every block as JSON
    Manifest,
    /// Invoke a block and print its output event as JSON
    Invoke {
        block_id: String,
        /// Inputs as a JSON object
        #[arg(long, default_value = "{}")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = BlockRegistry::with_catalogue().context("Failed to build block catalogue")?;

    match cli.command {
        Command::List { category, search } => {
            let blocks = match (&category, &search) {
                (_, Some(query)) => registry.search_blocks(query),
                (Some(category), None) => registry.get_blocks_by_category(*category),
                (None, None) => registry.get_all_blocks(),
            };
            for block in blocks {
                let meta = block.metadata();
                if category.map_or(true, |c| c == meta.category) {
                    println!("{:<40} {:<7} {}", meta.id, meta.method, meta.path);
                }
            }
        }
        Command::Describe { block_id } => {
            let block = registry.get_block(&block_id)?;
            let manifest = BlockManifest::from_block(block.as_ref());
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Manifest => {
            println!("{}", serde_json::to_string_pretty(&registry.manifest())?);
        }
        Command::Invoke { block_id, input } => {
            let inputs = match serde_json::from_str::<Value>(&input)
                .context("--input must be valid JSON")?
            {
                Value::Object(map) => map,
                _ => bail!("--input must be a JSON object"),
            };

            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            let runtime = BlockRuntime::new(registry, config.client()?);
            let event = runtime.invoke(&block_id, inputs).await?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ld-blocks").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_list_parses_category_and_search() {
        match parse(&["list", "--category", "feature-flags", "--search", "status"]).command {
            Command::List { category, search } => {
                assert_eq!(category, Some(BlockCategory::FeatureFlags));
                assert_eq!(search.as_deref(), Some("status"));
            }
            _ => panic!("expected list"),
        }

        match parse(&["list"]).command {
            Command::List { category, search } => {
                assert!(category.is_none());
                assert!(search.is_none());
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_list_rejects_unknown_category() {
        let args = ["ld-blocks", "list", "--category", "dashboards"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_describe_and_manifest() {
        match parse(&["describe", "get_webhook"]).command {
            Command::Describe { block_id } => assert_eq!(block_id, "get_webhook"),
            _ => panic!("expected describe"),
        }
        assert!(matches!(parse(&["manifest"]).command, Command::Manifest));
        assert!(Cli::try_parse_from(["ld-blocks", "describe"]).is_err());
    }

    #[test]
    fn test_invoke_input_and_global_config() {
        let cli = parse(&[
            "invoke",
            "get_project",
            "--input",
            r#"{"projectKey":"default"}"#,
            "--config",
            "/tmp/ld.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ld.toml")));
        match cli.command {
            Command::Invoke { block_id, input } => {
                assert_eq!(block_id, "get_project");
                assert_eq!(input, r#"{"projectKey":"default"}"#);
            }
            _ => panic!("expected invoke"),
        }

        match parse(&["invoke", "get_projects"]).command {
            Command::Invoke { input, .. } => assert_eq!(input, "{}"),
            _ => panic!("expected invoke"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
