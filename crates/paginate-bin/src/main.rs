//! `paginate` entrypoint.
//!
//! Builds a pagination controller from `paginate.toml` plus CLI overrides and
//! either replays a scripted list of actions (one plan printed per step) or
//! runs the interactive single-line pager.
use anyhow::{Result, bail};
use clap::Parser;
use core_config::{LabelsConfig, load_from};
use core_model::PaginationOptions;
use core_render::Labels;
use core_terminal::TerminalCapabilities;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod hooks;
mod interactive;
mod script;

use core_events::PageEvent;
use hooks::TraceHooks;

const LOG_FILE: &str = "paginate.log";

/// CLI arguments. Unset options fall back to the config file, then defaults.
#[derive(Parser, Debug)]
#[command(name = "paginate", version, about = "Page through a list of items")]
struct Args {
    /// Actions applied after the first render: `next`, `prev` or a page number.
    #[arg(value_parser = script::parse_action)]
    actions: Vec<PageEvent>,
    /// Optional configuration file path (overrides discovery of `paginate.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Total number of items.
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    #[arg(long = "per-page", allow_negative_numbers = true)]
    per_page: Option<i64>,
    /// 1-based page shown first.
    #[arg(long, allow_negative_numbers = true)]
    page: Option<i64>,
    /// 0-based item index; its page is shown first (wins over `--page`).
    #[arg(long, allow_negative_numbers = true)]
    item: Option<i64>,
    /// Width of the main page window.
    #[arg(long = "render-pages", allow_negative_numbers = true)]
    render_pages: Option<i64>,
    /// Shortcut buttons at each end of the list; 0 disables them.
    #[arg(long = "jump-buttons", allow_negative_numbers = true)]
    jump_buttons: Option<i64>,
    #[arg(long = "no-prev")]
    no_prev: bool,
    #[arg(long = "no-next")]
    no_next: bool,
    /// Print each plan as a JSON document instead of text.
    #[arg(long)]
    json: bool,
    /// Navigate with the keyboard instead of replaying actions.
    #[arg(long, short = 'i')]
    interactive: bool,
}

impl Args {
    /// Apply command line overrides on top of the file options.
    fn options(&self, file: &PaginationOptions) -> PaginationOptions {
        let mut opts = file.clone();
        if let Some(count) = self.count {
            opts.count = count;
        }
        if let Some(per_page) = self.per_page {
            opts.per_page = per_page;
        }
        if let Some(page) = self.page {
            opts.current_page = page;
        }
        if let Some(item) = self.item {
            opts.current = Some(item);
        }
        if let Some(render_pages) = self.render_pages {
            opts.render_pages = render_pages;
        }
        if let Some(jump_buttons) = self.jump_buttons {
            opts.jump_buttons = jump_buttons;
        }
        if self.no_prev {
            opts.prev_button = false;
        }
        if self.no_next {
            opts.next_button = false;
        }
        opts
    }
}

fn labels_from(cfg: &LabelsConfig) -> Labels {
    Labels {
        prev: cfg.prev.clone(),
        next: cfg.next.clone(),
        spacer: cfg.spacer.clone(),
    }
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; drop guard so the writer shuts down.
        Err(_err) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: Args) -> Result<()> {
    let config = load_from(args.config.clone())?;
    let options = args.options(config.pagination());
    let labels = labels_from(config.labels());
    info!(
        target: "runtime.startup",
        config_path = ?config.path,
        count = options.count,
        per_page = options.per_page,
        actions = args.actions.len(),
        interactive = args.interactive,
        "bootstrap_complete"
    );

    let mut paginator = core_actions::initialize(&options, TraceHooks)?;

    if args.interactive {
        if !args.actions.is_empty() {
            bail!("actions cannot be combined with --interactive");
        }
        let caps = TerminalCapabilities::detect();
        if !caps.supports_interactive() {
            bail!("--interactive needs a terminal on stdin and stdout");
        }
        return interactive::run(&mut paginator, labels);
    }

    let stdout = std::io::stdout().lock();
    if args.json {
        let mut renderer = core_render::JsonRenderer::new(stdout);
        script::run(&mut paginator, &args.actions, &mut renderer)
    } else {
        let mut renderer = core_render::TextRenderer::new(stdout, labels);
        script::run(&mut paginator, &args.actions, &mut renderer)
    }
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let result = run(Args::parse());
    if let Err(e) = &result {
        error!(target: "runtime", error = %e, "run_failed");
    }
    info!(target: "runtime", "shutdown");
    result
}
