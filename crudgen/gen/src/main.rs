//! crudgen Code Generator
//!
//! Generates typed REST resource clients from the definitions in
//! `crudgen-definitions`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use crudgen_define::ResourceDefinition;
use crudgen_gen::config::GeneratorConfig;
use crudgen_gen::errors::GeneratorError;
use crudgen_gen::output::generate_all;
use crudgen_gen::paths::derive_paths;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// crudgen code generator - transforms resource definitions into typed clients
#[derive(Parser, Debug)]
#[command(name = "crudgen-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory generated files are written under
    #[arg(short, long, env = "CRUDGEN_BASEPATH", default_value = ".")]
    base_path: PathBuf,

    /// Only generate these packages (repeatable)
    #[arg(short, long)]
    package: Vec<String>,

    /// File name of each package's option module
    #[arg(long, default_value = "option.rs")]
    option_file: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// List resources and their derived paths, then exit
    #[arg(long)]
    list: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity level.
///
/// `RUST_LOG` takes precedence over `-v` when set.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,crudgen_gen=info".to_string(),
            2 => "info,crudgen_gen=debug".to_string(),
            _ => "debug,crudgen_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn select(
    resources: Vec<ResourceDefinition>,
    packages: &[String],
) -> Result<Vec<ResourceDefinition>, GeneratorError> {
    if packages.is_empty() {
        return Ok(resources);
    }

    let available: BTreeSet<&str> = resources.iter().map(|r| r.package.as_str()).collect();
    if let Some(unknown) = packages.iter().find(|p| !available.contains(p.as_str())) {
        return Err(GeneratorError::ConfigError(format!(
            "Unknown package: '{unknown}'. Available packages: {}",
            available.into_iter().collect::<Vec<_>>().join(", ")
        )));
    }

    Ok(resources
        .into_iter()
        .filter(|r| packages.contains(&r.package))
        .collect())
}

fn print_listing(resources: &[ResourceDefinition]) {
    for resource in resources {
        println!(
            "{} {}",
            resource.name.bold(),
            format!("({})", resource.package).dimmed()
        );
        match derive_paths(
            &resource.path_segments,
            resource.parent_type_name.as_deref(),
            None,
        ) {
            Some(paths) => {
                println!(
                    "  collection {} [{}]",
                    paths.collection_path.cyan(),
                    paths.collection_arg
                );
                println!("  resource   {}", paths.resource_path.to_string().cyan());
            }
            None => println!("  {}", "value type".dimmed()),
        }
        for (sub_type, field) in &resource.slice_sub_types {
            println!("  slice      {sub_type} [{field}]");
        }
    }
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let resources = select(crudgen_definitions::all_resources(), &cli.package)?;

    if cli.list {
        print_listing(&resources);
        return Ok(());
    }

    if cli.verbose > 0 {
        eprintln!("Generating {} resources", resources.len());
        eprintln!("Output directory: {}", cli.base_path.display());
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let config = GeneratorConfig::new()
        .base_path(cli.base_path)
        .option_file_name(cli.option_file)
        .dry_run(cli.dry_run);
    let report = generate_all(&resources, config)?;

    if !report.dry_run && cli.verbose > 0 {
        eprintln!(
            "{} {} files ({} bytes)",
            "Generated".green(),
            report.len(),
            report.total_bytes()
        );
    }

    Ok(())
}
