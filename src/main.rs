#[macro_use]
extern crate rocket;

use clap::{Args, Parser, Subcommand};
use log::{error, info, warn};
use rocket::fs::FileServer;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod boot;
mod db;
mod dom;
mod error;
mod filter;
mod form;
mod loader;
mod models;
mod page;
mod render;
mod routes;
mod scroll_spy;
mod sections;
mod settings;
mod tasks;
mod theme;


use error::{Error, Result};
use loader::ConfigSource;
use models::preference::{PreferenceStore, Preferences};
use page::{BootState, Event, Page};
use routes::Preview;
use settings::{Settings, SETTINGS_FILE};
use theme::ThemeController;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render a single-page portfolio from a configuration document")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    settings: PathBuf,

    /// Configuration document (path or http(s) URL)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Page skeleton to render into (defaults to the built-in one)
    #[arg(long, global = true)]
    skeleton: Option<String>,

    /// Preferences database
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the page to an HTML file
    Render(RenderArgs),
    /// Serve a live preview of the page
    Serve {
        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<String>,
    },
    /// Persist the theme used on the next load
    Theme {
        name: String,
    },
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Output file
    #[arg(long, short)]
    out: Option<String>,

    /// Click a technology filter (repeatable)
    #[arg(long = "filter")]
    filters: Vec<String>,

    /// Scroll position to highlight navigation for
    #[arg(long)]
    scroll: Option<f64>,

    /// Section top offset as id=pixels (repeatable)
    #[arg(long = "offset", value_parser = parse_offset)]
    offsets: Vec<(String, f64)>,
}

fn parse_offset(raw: &str) -> std::result::Result<(String, f64), String> {
    let (id, top) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=offset, got `{}`", raw))?;
    let top = top
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid offset `{}`: {}", top, e))?;
    Ok((id.trim().to_string(), top))
}

fn open_store(settings: &Settings) -> Result<Arc<dyn PreferenceStore>> {
    let pool = db::init_pool(&settings.database)?;
    db::run_migrations(&pool)?;
    Ok(Arc::new(Preferences::new(pool)))
}

fn read_skeleton(settings: &Settings) -> Result<String> {
    match settings.skeleton {
        Some(ref path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(page::SKELETON.to_string()),
    }
}

fn open_page(settings: &Settings) -> Result<Page> {
    let theme = ThemeController::with_default(open_store(settings)?, &settings.default_theme);
    Page::from_skeleton(&read_skeleton(settings)?, theme)
}

async fn render(settings: &Settings, args: RenderArgs) -> Result<()> {
    let mut page = open_page(settings)?;

    let source = ConfigSource::parse(&settings.config);
    if page.boot(&source).await? == BootState::Rendered {
        if let Some(count) = page.config().map(|c| c.section_order.len()) {
            info!("Rendered {} sections from {}", count, source);
        }
        for tech in args.filters {
            page.dispatch(Event::FilterClick(tech))?;
        }
        if !page.active_filters().is_empty() {
            info!("Active filters: {}", page.active_filters().terms().join(", "));
        }
        if let Some(y) = args.scroll {
            if !page.scroll_spy_enabled() {
                warn!("No sections rendered; --scroll has no effect");
            }
            page.set_layout(args.offsets.into_iter().collect::<HashMap<_, _>>());
            page.dispatch(Event::Scroll { y })?;
        }
    }
    if !page.pending_tasks().is_empty() {
        warn!("Tasks still waiting for their anchors: {:?}", page.pending_tasks());
    }

    let output = args.out.unwrap_or_else(|| settings.output.clone());
    std::fs::write(&output, page.to_html())?;
    info!("Wrote {}", output);
    Ok(())
}

async fn serve(settings: &Settings, static_dir: Option<String>) -> Result<()> {
    let store = open_store(settings)?;
    let source = ConfigSource::parse(&settings.config);
    let config = match loader::load(&source).await {
        Ok(config) => Some(Arc::new(config)),
        Err(e) => {
            error!("Error loading config from {}: {}", source, e);
            None
        }
    };

    let preview = Preview {
        config,
        skeleton: read_skeleton(settings)?,
        store,
        default_theme: settings.default_theme.clone(),
    };
    let static_dir = static_dir.unwrap_or_else(|| settings.static_dir.clone());

    rocket::build()
        .manage(preview)
        .mount("/", routes::public::routes())
        .mount("/static", FileServer::from(static_dir))
        .launch()
        .await
        .map_err(|e| Error::Server(e.to_string()))?;
    Ok(())
}

fn set_theme(settings: &Settings, name: &str) -> Result<()> {
    let mut page = open_page(settings)?;
    page.init_theme()?;
    page.dispatch(Event::ChangeTheme(name.to_string()))?;
    Ok(())
}

#[rocket::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = match Settings::load(&cli.settings) {
        Ok(s) => s,
        Err(e) => {
            error!("{}: {}", cli.settings.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(config) = cli.config {
        settings.config = config;
    }
    if cli.skeleton.is_some() {
        settings.skeleton = cli.skeleton;
    }
    if let Some(database) = cli.database {
        settings.database = database;
    }

    boot::run(&settings);

    let result = match cli.command {
        Command::Render(args) => render(&settings, args).await,
        Command::Serve { static_dir } => serve(&settings, static_dir).await,
        Command::Theme { name } => set_theme(&settings, &name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
