//! flowpatch CLI entry point.
//!
//! Applies the curated onboarding patches to an app checkout, one by id or
//! the whole catalog, with optional dry-run diff and JSON reporting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flowpatch::application::patch::run_patch;
use flowpatch::domain::{FilePatch, FileReport};
use flowpatch::patches;

#[derive(Parser, Debug)]
#[command(name = "flowpatch")]
#[command(version)]
#[command(about = "Applies curated onboarding patches to the MyPlantScan sources", long_about = None)]
struct Args {
    /// App checkout root containing the app/ directory
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Show the resulting diff without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Emit the operation report as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pin the initial route default in app/_layout.tsx
    InitialRoute,

    /// Replace the onboarding card render block in app/onboarding/index.tsx
    OnboardingCard,

    /// Apply every patch in the catalog
    All,
}

fn selected_patches(command: Option<Commands>) -> Vec<&'static FilePatch> {
    match command {
        Some(Commands::InitialRoute) => vec![&patches::initial_route::INITIAL_ROUTE],
        Some(Commands::OnboardingCard) => vec![&patches::onboarding_card::ONBOARDING_CARD],
        Some(Commands::All) | None => patches::CATALOG.to_vec(),
    }
}

fn print_summary(report: &FileReport) {
    let status = if report.changed { "patched" } else { "no changes" };
    println!("{}: {} ({})", report.patch_id, report.file.display(), status);
    if let Some(diff) = &report.diff {
        print!("{diff}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut reports = Vec::new();
    for patch in selected_patches(args.command) {
        log::info!("{}: {}", patch.id, patch.summary);
        let report = run_patch(&args.root, patch, args.dry_run)?;
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_summary(report);
        }
    }

    Ok(())
}
