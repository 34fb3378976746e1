// SPDX-FileCopyrightText: 2025 Russ Fellows <russ.fellows@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use op_bench_core::{Framework, OpConfig, OpRecord, DEFAULT_UNKNOWN_DIM};
use op_bench_frameworks::Registry;
use tracing::info;

/// op-bench – cross-framework operator benchmark configuration driver
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an operator config file without building plans
    Validate {
        /// Path to an operator JSON (or YAML) config file
        #[arg(short, long)]
        config: std::path::PathBuf,

        /// Convert YAML input to JSON and print it
        #[arg(long)]
        to_json: bool,
    },
    /// Normalize one record and print the resolved config
    Inspect {
        /// Path to an operator JSON (or YAML) config file
        #[arg(short, long)]
        config: std::path::PathBuf,

        /// Which record in the file to resolve
        #[arg(long, default_value_t = 0)]
        config_id: usize,

        /// Substitute for symbolic (-1) dimensions
        #[arg(long, default_value_t = DEFAULT_UNKNOWN_DIM)]
        unknown_dim: i64,

        /// Pretty-print the resolved config as JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Build and print the per-framework benchmark graph plans
    Plan {
        /// Path to an operator JSON (or YAML) config file
        #[arg(short, long)]
        config: std::path::PathBuf,

        /// Which record in the file to resolve
        #[arg(long, default_value_t = 0)]
        config_id: usize,

        /// Substitute for symbolic (-1) dimensions
        #[arg(long, default_value_t = DEFAULT_UNKNOWN_DIM)]
        unknown_dim: i64,

        /// Restrict output to a single framework (paddle, pytorch, tensorflow)
        #[arg(long)]
        framework: Option<Framework>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "op_bench_core={},op_bench_frameworks={}",
            log_level, log_level
        ))
        .init();

    info!("op-bench v{} starting", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::Validate { config, to_json } => validate_config(&config, to_json),
        Commands::Inspect {
            config,
            config_id,
            unknown_dim,
            pretty,
        } => inspect_config(&config, config_id, unknown_dim, pretty),
        Commands::Plan {
            config,
            config_id,
            unknown_dim,
            framework,
        } => plan_config(&config, config_id, unknown_dim, framework),
    }
}

fn validate_config(config_path: &std::path::Path, to_json: bool) -> Result<()> {
    info!("Validating operator config: {:?}", config_path);

    if to_json {
        let text = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {:?}", config_path))?;
        let json_content = op_bench_core::config::yaml_to_json(&text)?;
        println!("{}", json_content);
        return Ok(());
    }

    let records = OpRecord::from_file(config_path)?;
    println!("✅ Config parsing: SUCCESS");
    println!("✅ Records: {}", records.len());

    for (config_id, record) in records.iter().enumerate() {
        println!(
            "  [{}] {}: logits {:?} ({}), label {:?} ({}), soft_label={}, backward={}",
            config_id,
            record.op,
            record.logits_shape,
            record.logits_dtype,
            record.label_shape,
            record.label_dtype,
            record.soft_label,
            record.backward
        );
    }

    println!("🎉 Operator config is valid and ready to run!");
    Ok(())
}

fn inspect_config(
    config_path: &std::path::Path,
    config_id: usize,
    unknown_dim: i64,
    pretty: bool,
) -> Result<()> {
    let config = OpConfig::from_file(config_path, config_id, unknown_dim)?;

    if pretty {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("=== Resolved operator config [{}] ===", config_id);
    println!("Operator: {}", config.name);
    println!("Logits: {:?} ({})", config.logits_shape, config.logits_dtype);
    println!("Label:  {:?} ({})", config.label_shape, config.label_dtype);
    println!("Axis: {}  Classes: {}", config.axis, config.num_classes);
    println!(
        "soft_label={}  ignore_index={}  backward={}",
        config.soft_label, config.ignore_index, config.backward
    );
    for spec in &config.feed_spec {
        println!("Feed {}: range [{}, {})", spec.name, spec.range[0], spec.range[1]);
    }
    println!("run_tf={}  run_torch={}", config.run_tf, config.run_torch);
    for mismatch in &config.disabled {
        println!("⚠️  {} disabled: {}", mismatch.framework, mismatch.reason);
    }

    Ok(())
}

fn plan_config(
    config_path: &std::path::Path,
    config_id: usize,
    unknown_dim: i64,
    framework: Option<Framework>,
) -> Result<()> {
    let config = OpConfig::from_file(config_path, config_id, unknown_dim)?;
    let registry = Registry::builtin();

    let plans = registry.plans_for(&config)?;
    let selected: Vec<_> = plans
        .into_iter()
        .filter(|plan| framework.map_or(true, |wanted| plan.framework == wanted))
        .collect();

    if selected.is_empty() {
        println!(
            "No enabled framework plans for record {} (narrowed: {})",
            config_id,
            config
                .disabled
                .iter()
                .map(|mismatch| mismatch.framework.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&selected)?);
    Ok(())
}
