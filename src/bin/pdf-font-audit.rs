//! PDF Font Audit CLI tool
//!
//! A command-line tool for listing the fonts in PDFs and tracking their licenses.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use glob::glob;
use tracing_subscriber::EnvFilter;

use pdf_font_audit::config::Config;
use pdf_font_audit::font::{analyze_pdf, classify, LicenseStatus};
use pdf_font_audit::registry::{FontRegistry, PendingQueue, VerdictStore};
use pdf_font_audit::report::{build_report, resolve_status, sort_for_display, StatusSource};

/// PDF Font Audit - Find the fonts in PDFs and check their licenses
#[derive(Parser)]
#[command(name = "pdf-font-audit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # List fonts and license status for every PDF in a folder
    pdf-font-audit scan \"handouts/*.pdf\"

    # Show the discovery trace as JSON
    pdf-font-audit scan --json --logs slides.pdf

    # Record a verdict after checking a license
    pdf-font-audit set \"NanumGothic\" free

    # Review fonts waiting for a verdict
    pdf-font-audit pending list")]
struct Cli {
    /// Registry file holding verdicts and pending fonts [env: FONT_AUDIT_REGISTRY]
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fonts used by PDF files along with their license status
    Scan {
        /// Input PDF files. Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Include the diagnostic log
        #[arg(long)]
        logs: bool,

        /// Do not add unknown fonts to the pending queue
        #[arg(long)]
        no_queue: bool,

        /// Base URL for auxiliary engine resources
        #[arg(long)]
        resource_url: Option<String>,

        /// Allow the engine to fetch resources over the network
        #[arg(long)]
        allow_network: bool,
    },

    /// Classify a font name against the built-in table of free fonts
    Classify {
        /// Font name (e.g. "Arial-BoldMT")
        name: String,
    },

    /// Show the license status of a font, preferring recorded verdicts
    Status {
        /// Font name
        name: String,
    },

    /// Record a license verdict for a font
    Set {
        /// Font name
        name: String,

        /// License status: free, commercial or unknown
        status: String,
    },

    /// List recorded verdicts, most recently updated first
    List {
        /// Only show fonts whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage fonts waiting for a verdict
    Pending {
        #[command(subcommand)]
        action: PendingAction,
    },
}

#[derive(Subcommand)]
enum PendingAction {
    /// List queued fonts, oldest first
    List,

    /// Remove a font from the queue
    Remove {
        /// Font name
        name: String,
    },

    /// Remove every font from the queue
    Clear,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::from_env();
    if let Some(path) = cli.registry {
        config.registry_path = path;
    }

    let result = match cli.command {
        Commands::Scan {
            inputs, json, logs, no_queue, resource_url, allow_network,
        } => {
            if resource_url.is_some() {
                config.load.auxiliary_resource_base_url = resource_url;
            }
            if allow_network {
                config.load.allow_network_fetch = true;
            }
            cmd_scan(&config, inputs, json, logs, !no_queue)
        }
        Commands::Classify { name } => cmd_classify(&name),
        Commands::Status { name } => cmd_status(&config, &name),
        Commands::Set { name, status } => cmd_set(&config, &name, &status),
        Commands::List { search } => cmd_list(&config, search.as_deref()),
        Commands::Pending { action } => cmd_pending(&config, action),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Log to stderr, honouring RUST_LOG when set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand glob patterns in input paths
fn expand_globs(patterns: Vec<String>) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = false;
            let entries = glob(&pattern)
                .map_err(|e| pdf_font_audit::Error::InvalidGlob(format!("{}: {}", pattern, e)))?;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => tracing::warn!("glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                return Err(pdf_font_audit::Error::NoFilesMatched(pattern).into());
            }
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}

fn open_registry(config: &Config) -> anyhow::Result<FontRegistry> {
    FontRegistry::open(&config.registry_path).with_context(|| {
        format!("Failed to open registry {}", config.registry_path.display())
    })
}

fn source_label(source: StatusSource) -> &'static str {
    match source {
        StatusSource::Registry => "verified by user",
        StatusSource::Static => "built-in list",
    }
}

/// Analyze PDFs and print their fonts
fn cmd_scan(
    config: &Config,
    inputs: Vec<String>,
    json: bool,
    show_logs: bool,
    enqueue_unknown: bool,
) -> anyhow::Result<()> {
    let inputs = expand_globs(inputs)?;

    // Validate inputs exist
    for path in &inputs {
        if !path.exists() {
            return Err(pdf_font_audit::Error::FileNotFound(path.clone()).into());
        }
    }

    let mut registry = open_registry(config)?;
    let mut json_results = Vec::new();

    for path in &inputs {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let analysis = analyze_pdf(&bytes, &config.load);
        let mut reports = build_report(&analysis.fonts, &mut registry, enqueue_unknown)?;

        if json {
            let logs = if show_logs {
                serde_json::to_value(&analysis.logs)?
            } else {
                serde_json::Value::Null
            };
            json_results.push(serde_json::json!({
                "file": path.display().to_string(),
                "fonts": reports,
                "logs": logs,
            }));
            continue;
        }

        println!("File: {}", path.display());

        if reports.is_empty() {
            let failed = analysis
                .logs
                .lines()
                .iter()
                .any(|l| l.starts_with("CRITICAL ERROR"));
            if failed {
                println!("  Analysis failed (run with --logs for details)");
            } else {
                println!("  No fonts found");
            }
        }

        sort_for_display(&mut reports);
        for report in &reports {
            println!(
                "  {:<40} {:<11} {:<14} embedded: {:<3}  [{}]",
                report.font.name,
                report.status.as_str(),
                report.font.declared_type,
                if report.font.embedded { "yes" } else { "no" },
                source_label(report.source),
            );
        }

        let queued = reports.iter().filter(|r| r.queued).count();
        if queued > 0 {
            println!("  {} font(s) added to the pending queue", queued);
        }

        if show_logs {
            println!("  Log:");
            for line in analysis.logs.lines() {
                println!("    {}", line);
            }
        }
        println!();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    }

    Ok(())
}

/// Classify a name with the built-in table only
fn cmd_classify(name: &str) -> anyhow::Result<()> {
    let info = classify(name);
    println!("Font: {}", name);
    println!("Status: {}", info.status);
    println!("{}", info.description);
    println!("Reference: {}", info.reference_url);
    Ok(())
}

/// Show the status of a font from the registry or the built-in table
fn cmd_status(config: &Config, name: &str) -> anyhow::Result<()> {
    let registry = open_registry(config)?;
    let (status, source) = resolve_status(&registry, name);

    println!("Font: {}", name);
    println!("Status: {} ({})", status, source_label(source));
    Ok(())
}

/// Record a verdict
fn cmd_set(config: &Config, name: &str, status: &str) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Font name must not be empty");
    }

    let status: LicenseStatus = status.parse()?;
    let mut registry = open_registry(config)?;
    registry.set_status(name, status)?;

    eprintln!("Recorded {} as {}", name, status);
    Ok(())
}

/// List recorded verdicts
fn cmd_list(config: &Config, search: Option<&str>) -> anyhow::Result<()> {
    let registry = open_registry(config)?;
    let verdicts = registry.verdicts(search);

    if verdicts.is_empty() {
        println!("No verdicts recorded");
        return Ok(());
    }

    for verdict in verdicts {
        println!(
            "{:<40} {:<11} {}",
            verdict.name,
            verdict.status.as_str(),
            verdict.updated_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    Ok(())
}

/// Manage the pending queue
fn cmd_pending(config: &Config, action: PendingAction) -> anyhow::Result<()> {
    let mut registry = open_registry(config)?;

    match action {
        PendingAction::List => {
            if registry.pending().is_empty() {
                println!("No fonts awaiting review");
            }
            for font in registry.pending() {
                println!("{:<40} queued {}", font.name, font.created_at.format("%Y-%m-%d %H:%M:%S"));
            }
        }
        PendingAction::Remove { name } => {
            if registry.remove_pending(&name)? {
                eprintln!("Removed {} from the pending queue", name);
            } else {
                bail!("{} is not in the pending queue", name);
            }
        }
        PendingAction::Clear => {
            let removed = registry.clear_pending()?;
            eprintln!("Cleared {} pending font(s)", removed);
        }
    }

    Ok(())
}
