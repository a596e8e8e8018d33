//! satmod-gui - Command Line Driver
//!
//! Opens a module on the headless host, runs popup actions against it and
//! prints the resulting UI events.

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::{Receiver, unbounded};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use satmod_gui::app::{AppContext, ModulePaths, Workspace};
use satmod_gui::eventing::{ModuleAction, UiEvent};
use satmod_gui::helpers::get_or_create_log_dir;
use satmod_gui::host::{CloneScript, HeadlessHost};
use satmod_gui::states::Preferences;

#[derive(Debug, Parser)]
#[command(name = "satmod-gui", version, about = "Drive satellite module popup actions")]
struct Cli {
    /// Module to open (file stem in the modules directory)
    module: String,

    /// Popup actions to run in order, e.g. toggle-dock sky-at-glance
    actions: Vec<ModuleAction>,

    /// Modules directory (defaults to the per-user one)
    #[arg(long)]
    modules_dir: Option<PathBuf>,

    /// Hardware configuration directory (defaults to the per-user one)
    #[arg(long)]
    hwconf_dir: Option<PathBuf>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,

    /// Answer to the delete confirmation
    #[arg(long)]
    confirm: bool,

    /// Name typed into the clone dialog; the dialog is cancelled without it
    #[arg(long)]
    clone_name: Option<String>,

    /// Leave the module open instead of closing (and saving) it on exit
    #[arg(long)]
    keep_open: bool,

    /// Store whether floating windows return to their saved position
    #[arg(long)]
    restore_position: Option<bool>,

    /// Store whether sky at a glance starts at real time
    #[arg(long)]
    real_time_predictions: Option<bool>,
}

/// Apply preference flags and persist them when any was given
fn update_preferences(prefs: &mut Preferences, cli: &Cli) {
    if cli.restore_position.is_none() && cli.real_time_predictions.is_none() {
        return;
    }
    if let Some(restore) = cli.restore_position {
        prefs.set_restore_module_window_position(restore);
    }
    if let Some(real_time) = cli.real_time_predictions {
        prefs.set_use_real_time_for_predictions(real_time);
    }
    match prefs.save() {
        Ok(()) => tracing::info!("Saved preferences"),
        Err(e) => tracing::error!(error = %e, "Failed to save preferences"),
    }
}

fn init_logging(log_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_dir, "satmod-gui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(LocalTime::new(Rfc3339))
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_timer(LocalTime::new(Rfc3339))
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    guard
}

fn print_events(rx: &Receiver<UiEvent>, json: bool) -> anyhow::Result<()> {
    for event in rx.try_iter() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!("event: {event:?}");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = get_or_create_log_dir().context("log directory")?;
    let _guard = init_logging(&log_dir);
    tracing::info!("Starting satmod-gui...");

    let mut prefs = Preferences::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Using default preferences");
        Preferences::new()
    });
    update_preferences(&mut prefs, &cli);

    let paths = match (cli.modules_dir, cli.hwconf_dir) {
        (Some(modules_dir), Some(hwconf_dir)) => ModulePaths {
            modules_dir,
            hwconf_dir,
        },
        (modules_dir, hwconf_dir) => {
            let user = ModulePaths::from_user_dirs().context("user directories")?;
            ModulePaths {
                modules_dir: modules_dir.unwrap_or(user.modules_dir),
                hwconf_dir: hwconf_dir.unwrap_or(user.hwconf_dir),
            }
        }
    };

    let mut host = HeadlessHost::default();
    host.push_confirm(cli.confirm);
    if let Some(name) = &cli.clone_name {
        host.push_clone_script(CloneScript::accept(name));
    }

    let (tx, rx) = unbounded();
    let mut workspace = Workspace::new(AppContext::new(host, prefs, paths, tx));
    workspace
        .open_module(&cli.module)
        .with_context(|| format!("opening module {}", cli.module))?;

    for action in cli.actions {
        let outcome = workspace.dispatch(&cli.module, action);
        print_events(&rx, cli.json)?;
        if cli.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{action}: {outcome:?}");
        }
    }

    match workspace.module(&cli.module) {
        Some(module) => println!("state: {}", module.state()),
        None => println!("state: closed"),
    }

    if !cli.keep_open {
        workspace.close_all();
    }
    print_events(&rx, cli.json)?;

    for error in &workspace.ctx.host.errors {
        eprintln!("{}: {}", error.title, error.message);
    }
    Ok(())
}
