//! nice-lattes CLI: inspect a Lattes curriculum and manage its visibility.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use nice_lattes::config::SiteConfig;
use nice_lattes::error::LattesResult;
use nice_lattes::extract::{Curriculum, SectionKey};
use nice_lattes::paths::LattesPaths;
use nice_lattes::visibility::VisibilityStore;

#[derive(Parser)]
#[command(name = "nice-lattes", version, about = "Lattes curriculum extraction")]
struct Cli {
    /// Site configuration file (TOML). Defaults to the XDG config location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the general profile as JSON.
    Profile,

    /// Print every section, hidden or not, as JSON.
    Sections,

    /// Print the records of one section (e.g. ARTIGOS-PUBLICADOS) as JSON.
    Category {
        /// Section key.
        key: String,
    },

    /// Print the sections the public page shows, after visibility filtering.
    Public,

    /// Inspect or change the visibility overlay.
    Visibility {
        #[command(subcommand)]
        action: VisibilityAction,
    },
}

#[derive(Subcommand)]
enum VisibilityAction {
    /// Print the current hide-sets.
    Show,
    /// Hide sections (by key) or records (by id).
    Hide {
        /// Section keys or record ids.
        #[arg(required = true)]
        keys: Vec<String>,
        /// Administrative PIN.
        #[arg(long)]
        pin: String,
    },
    /// Show previously hidden sections or records again.
    Unhide {
        /// Section keys or record ids.
        #[arg(required = true)]
        keys: Vec<String>,
        /// Administrative PIN.
        #[arg(long)]
        pin: String,
    },
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn site_config(path: Option<PathBuf>) -> LattesResult<SiteConfig> {
    let config = match path {
        Some(path) => SiteConfig::load(&path)?,
        None => SiteConfig::discover(&LattesPaths::resolve()?)?,
    };
    Ok(config)
}

fn require_pin(config: &SiteConfig, pin: &str) -> Result<()> {
    if !config.pin_matches(pin) {
        miette::bail!(
            help = "Use the admin_pin value from the site configuration.",
            "incorrect PIN"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = site_config(cli.config)?;
    let store = VisibilityStore::new(&config.visibility_file);

    match cli.command {
        Commands::Profile => {
            let cv = Curriculum::load(&config.cv_xml_file)?;
            print_json(&cv.profile())?;
        }

        Commands::Sections => {
            let cv = Curriculum::load(&config.cv_xml_file)?;
            print_json(&cv.sections())?;
        }

        Commands::Category { key } => {
            let section = SectionKey::from_key(&key)
                .ok_or_else(|| miette::miette!("unknown section key: \"{key}\""))?;
            let cv = Curriculum::load(&config.cv_xml_file)?;
            print_json(&cv.section(section).items)?;
        }

        Commands::Public => {
            let cv = Curriculum::load(&config.cv_xml_file)?;
            print_json(&cv.public_view(&store.load()))?;
        }

        Commands::Visibility { action } => match action {
            VisibilityAction::Show => print_json(&store.load())?,
            VisibilityAction::Hide { keys, pin } => {
                require_pin(&config, &pin)?;
                let mut visibility = store.load();
                for key in keys {
                    match SectionKey::from_key(&key) {
                        Some(section) => visibility.hide_section(section),
                        None => visibility.hide_item(key),
                    };
                }
                store.save(&visibility)?;
                print_json(&visibility)?;
            }
            VisibilityAction::Unhide { keys, pin } => {
                require_pin(&config, &pin)?;
                let mut visibility = store.load();
                for key in keys {
                    match SectionKey::from_key(&key) {
                        Some(section) => visibility.show_section(section),
                        None => visibility.show_item(&key),
                    };
                }
                store.save(&visibility)?;
                print_json(&visibility)?;
            }
        },
    }

    Ok(())
}
