use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use update_changelog::cli::{run_update_workflow, UpdateWorkflowArgs};
use update_changelog::config;
use update_changelog::git::Git2Repository;
use update_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "update-changelog",
    about = "Update CHANGELOG.md from conventional commits since the last stable tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Project root (defaults to the git work tree)")]
    project_dir: Option<PathBuf>,

    #[arg(long, help = "Preview the new section without writing the changelog")]
    dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("update-changelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(args.debug);

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            return Ok(());
        }
    };

    let project_root = match args.project_dir {
        Some(dir) => dir,
        None => repo
            .workdir()
            .unwrap_or_else(|| Path::new(".").to_path_buf()),
    };

    // An explicitly broken config is the one failure that exits non-zero
    let config = match config::load_config(args.config.as_deref(), &project_root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = UpdateWorkflowArgs {
        project_root,
        date: update_changelog::cli::orchestration::current_date(),
        dry_run: args.dry_run,
    };

    if let Err(e) = run_update_workflow(&repo, &config, &workflow_args) {
        ui::display_error(&format!("{:#}", e));
        ui::display_status("No changes found or error occurred; changelog left untouched");
    }

    Ok(())
}
