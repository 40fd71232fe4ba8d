// japi CLI entry point
use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use japi_descriptor::DescriptorSet;
use japi_purifier::{Purifier, PurifyConfig};

/// Generate API-only Java sources from a type descriptor set.
#[derive(Parser, Debug)]
#[command(name = "japi", version)]
struct Cli {
    /// JSON file containing the type descriptor set.
    #[arg(long, value_name = "FILE")]
    descriptors: PathBuf,

    /// Directory the generated source tree is written under.
    #[arg(long, value_name = "DIR", default_value = "generated-sources/japi")]
    output: PathBuf,

    /// Package prefix eligible for emission; repeatable.
    #[arg(long = "base-package", value_name = "PREFIX")]
    base_packages: Vec<String>,

    /// Fully-qualified root interface name; repeatable, processed in order.
    #[arg(long = "root", value_name = "INTERFACE")]
    roots: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("generated-sources: {}", cli.output.display());
    info!("base-packages: {}", cli.base_packages.join(", "));

    let set = DescriptorSet::from_json_file(&cli.descriptors).with_context(|| {
        format!(
            "failed to load descriptor set from {}",
            cli.descriptors.display()
        )
    })?;

    let base_packages: BTreeSet<String> = cli.base_packages.into_iter().collect();
    let mut purifier = Purifier::new(&set, PurifyConfig::new(cli.output, base_packages));
    for root in &cli.roots {
        info!("purify interface: {root}");
        purifier
            .purify(root)
            .with_context(|| format!("failed to purify root interface '{root}'"))?;
    }

    info!("emitted {} source file(s)", purifier.emitted().len());
    Ok(())
}
