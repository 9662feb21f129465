use std::path::PathBuf;

use clap::{Parser, Subcommand};

use periscope_core::models::{ApiVersion, CollectionRef};

#[derive(Debug, Parser)]
#[command(
    name = "periscope",
    version,
    about = "Inspect and manipulate the sync state of a remote-settings client"
)]
pub struct Cli {
    /// Directory holding the local cache and preferences.
    #[arg(long, global = true, default_value = ".periscope")]
    pub data_dir: PathBuf,

    /// TOML file overriding the built-in environment table.
    #[arg(long, global = true)]
    pub environments: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the reconciled sync status of every known collection.
    Status {
        /// Emit the raw snapshot as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Force a sync of one collection (`bucket/name`), or of all collections.
    Sync { collection: Option<String> },
    /// Wipe the local cache of one collection, or of all collections.
    Delete { collection: Option<String> },
    /// Switch to another environment, e.g. `stage` or `dev-preview`.
    Env {
        name: String,
        #[arg(long, default_value = "v1", value_parser = parse_api)]
        api: ApiVersion,
    },
    /// Enable or disable signature verification on all collections.
    Signatures {
        #[arg(value_parser = parse_on_off)]
        enabled: bool,
    },
}

fn parse_api(s: &str) -> Result<ApiVersion, String> {
    s.parse()
}

fn parse_on_off(s: &str) -> Result<bool, String> {
    match s {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("expected `on` or `off`, got `{other}`")),
    }
}

/// `bucket/name`, or a bare collection name in the `main` bucket.
pub fn parse_collection(s: &str) -> CollectionRef {
    match s.split_once('/') {
        Some((bucket, name)) => CollectionRef::new(bucket, name),
        None => CollectionRef::new("main", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_with_bucket_parses() {
        let c = parse_collection("security-state/intermediates");
        assert_eq!(c.bucket, "security-state");
        assert_eq!(c.collection, "intermediates");
    }

    #[test]
    fn bare_collection_defaults_to_main_bucket() {
        let c = parse_collection("search-config");
        assert_eq!(c.bucket, "main");
        assert_eq!(c.collection, "search-config");
    }

    #[test]
    fn on_off_parser_rejects_other_words() {
        assert_eq!(parse_on_off("on"), Ok(true));
        assert_eq!(parse_on_off("off"), Ok(false));
        assert!(parse_on_off("maybe").is_err());
    }
}
