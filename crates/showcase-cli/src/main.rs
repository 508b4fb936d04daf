use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use console::style;
use showcase::{
    Autoplay, ContactMessage, FileStore, Site, SiteConfig, SiteRenderer, TemplateRegistry, Theme,
    ThemeContext, ThemeController,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "showcase", version, about = "Build and preview a themed portfolio site")]
struct Cli {
    /// Site description (YAML). Defaults to the bundled sample site.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Theme preference file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into an output directory
    Build {
        #[arg(long, short, default_value = "public")]
        out: PathBuf,
        /// Directory of templates overriding the builtin ones
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Inspect or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Run the project carousel's autoplay in the terminal
    Preview {
        /// Number of autoplay steps to show before exiting
        #[arg(long, default_value_t = 8)]
        ticks: u32,
        /// Override the configured autoplay interval
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Print the mailto link for a message to the site owner
    Contact {
        #[arg(long, short, default_value = "")]
        subject: String,
        #[arg(long, short, default_value = "")]
        body: String,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the effective theme
    Show,
    /// Switch to the other theme and persist it
    Toggle,
    /// Persist a specific theme
    Set {
        #[arg(value_enum)]
        mode: Mode,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Light,
    Dark,
}

impl From<Mode> for Theme {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Light => Theme::Light,
            Mode::Dark => Theme::Dark,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Build { out, templates } => {
            let theme = install_theme(cli.store, &config)?;
            build(config, &out, templates.as_deref(), theme)
        }
        Command::Theme { action } => {
            let theme = install_theme(cli.store, &config)?;
            let shown = match action {
                ThemeAction::Show => theme.current(),
                ThemeAction::Toggle => theme.toggle(),
                ThemeAction::Set { mode } => {
                    theme.set(mode.into());
                    theme.current()
                }
            };
            println!("{}", style(shown).bold());
            Ok(())
        }
        Command::Preview { ticks, interval_ms } => preview(config, ticks, interval_ms).await,
        Command::Contact { subject, body } => {
            let uri = ContactMessage::new(subject, body)
                .mailto(&config.contact_email)
                .context("composing contact link")?;
            println!("{uri}");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("showcase={level},showcase_cli={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading site config {}", path.display())),
        None => SiteConfig::sample().context("loading bundled sample site"),
    }
}

fn store_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    directories::ProjectDirs::from("com", "showcase", "Showcase")
        .map(|dirs| dirs.config_dir().join("preferences.json"))
        .context("no home directory to keep preferences in; pass --store")
}

fn install_theme(store: Option<PathBuf>, config: &SiteConfig) -> Result<&'static ThemeContext> {
    let path = store_path(store)?;
    info!(store = %path.display(), "loading theme preference");
    let controller =
        ThemeController::with_key(Box::new(FileStore::new(path)), &config.theme.storage_key);
    ThemeContext::install(ThemeContext::new(controller)).context("installing theme context")
}

fn build(
    config: SiteConfig,
    out: &Path,
    templates: Option<&Path>,
    theme: &ThemeContext,
) -> Result<()> {
    let mut registry = TemplateRegistry::builtin();
    if let Some(dir) = templates {
        registry
            .add_dir(dir)
            .with_context(|| format!("loading templates from {}", dir.display()))?;
    }

    let site = Site::new(config, SiteRenderer::new(registry)).context("preparing site")?;
    let written = site
        .write_to(out, theme)
        .with_context(|| format!("writing site to {}", out.display()))?;

    println!(
        "{} {} files to {} ({} theme)",
        style("Built").green().bold(),
        written.len(),
        out.display(),
        theme.current()
    );
    Ok(())
}

async fn preview(config: SiteConfig, ticks: u32, interval_ms: Option<u64>) -> Result<()> {
    let interval = interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.carousel.interval());
    let site = Site::new(config, SiteRenderer::builtin()).context("preparing site")?;

    let carousel = site.carousel().clone();
    // Counts every tick, even when a single project leaves the cursor put.
    let mut steps = carousel.subscribe_steps();
    print_carousel(&site);

    let mut autoplay = Autoplay::new(carousel, interval);
    autoplay.start();
    for _ in 0..ticks {
        steps.changed().await.context("carousel closed")?;
        print_carousel(&site);
    }
    autoplay.stop();
    Ok(())
}

fn print_carousel(site: &Site) {
    let (cursor, title) = site
        .carousel()
        .with(|c| (c.cursor(), c.current().title.clone()));
    let dots: String = (0..site.config().projects.len())
        .map(|i| if i == cursor { '●' } else { '○' })
        .collect();
    println!("{}  {}", style(dots).cyan(), style(title).bold());
}
