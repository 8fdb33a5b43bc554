//! Anime Portal CLI application.

use anime_portal::interactions::{ContactForm, FormMessage};
use anime_portal::{
    parse_command, render, DetailsOutcome, JikanClient, Portal, RemoteFetcher, Session, UiEvent,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shared::{Config, Page, SitePaths};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output format for rendered pages
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the homepage
    Home,
    /// Render the details page for a query string such as `?id=5114`
    Details { query: String },
    /// Render search results
    Search { text: String },
    /// Render the current-season shows grid
    Shows,
    /// Render the top-rated movies grid
    Movies,
    /// Write every listing page into the output directory
    Build,
    /// Validate a contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Read UI events from stdin and print effects as JSON lines
    Session,
}

/// Written next to the pages by `build`
#[derive(Debug, Serialize)]
struct BuildManifest {
    site: String,
    generated_at: DateTime<Utc>,
    pages: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        config.log_level()
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "anime-portal".to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    info!(config_file = %args.config.display(), "Loaded configuration");

    // Initialize API client
    let client = JikanClient::new(&config.api.base_url, &config.api.user_agent)
        .context("Failed to create Jikan client")?;
    let portal = Portal::new(RemoteFetcher::new(client), &config);
    let site = &config.site.name;

    match args.command {
        Command::Home => {
            let view = portal.home().await;
            emit(args.format, &view, || render::document(site, &render::home(&view)))?;
        }
        Command::Details { query } => {
            let outcome = portal.details(&query).await;
            let title = match &outcome {
                DetailsOutcome::Loaded(view) => view.document_title.clone(),
                DetailsOutcome::Failed(_) => site.clone(),
            };
            emit(args.format, &outcome, || {
                render::document(&title, &render::details_outcome(&outcome))
            })?;
        }
        Command::Search { text } => match portal.search(&text).await {
            Some(results) => emit(args.format, &results, || {
                render::document(site, &render::search_results(&results))
            })?,
            None => warn!("Empty search, nothing requested"),
        },
        Command::Shows => {
            let cards = portal.shows().await;
            emit(args.format, &cards, || {
                render::document(site, &grid_page("Shows", &render::show_grid(&cards)))
            })?;
        }
        Command::Movies => {
            let cards = portal.movies().await;
            emit(args.format, &cards, || {
                render::document(site, &grid_page("Movies", &render::movie_grid(&cards)))
            })?;
        }
        Command::Build => {
            let paths = SitePaths::new(config.output_dir(), &config.site);
            paths
                .create_dirs()
                .context("Failed to create output directory")?;

            let home = portal.home().await;
            let shows = portal.shows().await;
            let movies = portal.movies().await;

            let pages = [
                (Page::Home, render::home(&home)),
                (Page::Shows, grid_page("Shows", &render::show_grid(&shows))),
                (Page::Movies, grid_page("Movies", &render::movie_grid(&movies))),
            ];

            let mut written = Vec::new();
            for (page, body) in pages {
                let path = paths.page_file(page);
                write_file(&path, &render::document(site, &body))?;
                info!(page = page.as_str(), path = %path.display(), "Page written");
                written.push(paths.file_name(page).to_string());
            }

            let manifest = BuildManifest {
                site: site.clone(),
                generated_at: Utc::now(),
                pages: written,
            };
            write_manifest(paths.root(), &manifest)?;
            info!(pages = manifest.pages.len(), "Build complete");
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                subject,
                message,
            };
            contact(&form, args.format)?;
        }
        Command::Session => run_session(portal, &config).await,
    }

    Ok(())
}

fn emit<T: Serialize>(format: Format, value: &T, html: impl FnOnce() -> String) -> Result<()> {
    match format {
        Format::Html => println!("{}", html()),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize view")?
        ),
    }
    Ok(())
}

fn grid_page(heading: &str, grid: &str) -> String {
    format!(
        "<section class=\"listing\">\n<h2>{}</h2>\n<div class=\"grid\">\n{}\n</div>\n</section>",
        render::escape(heading),
        grid
    )
}

fn contact(form: &ContactForm, format: Format) -> Result<()> {
    let result = form.validate();
    let message = match &result {
        Ok(()) => FormMessage::sent(),
        Err(e) => FormMessage::error(e),
    };

    match format {
        Format::Html => println!("{}", render::form_message(&message)),
        Format::Json => println!(
            "{}",
            serde_json::to_string(&message).context("Failed to serialize message")?
        ),
    }

    result.context("Contact form rejected")
}

async fn run_session(portal: Portal<JikanClient>, config: &Config) {
    let mut session = Session::new(portal, config);
    let tx = session.sender();
    session.start_autoplay();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    for event in parse_command(&line) {
                        if tx.send(event).await.is_err() {
                            return;
                        }
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    break;
                }
            }
        }
        let _ = tx.send(UiEvent::Quit).await;
    });

    let processed = session
        .run(|effect| match serde_json::to_string(effect) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(error = %e, "Failed to serialize effect"),
        })
        .await;
    info!(events = processed, "Session finished");
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn write_manifest(root: &Path, manifest: &BuildManifest) -> Result<()> {
    let content =
        serde_json::to_string_pretty(manifest).context("Failed to serialize build manifest")?;
    write_file(&root.join("build.json"), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["anime-portal", "--format", "json", "details", "?id=21"]).unwrap();
        assert_eq!(args.format, Format::Json);
        assert!(matches!(args.command, Command::Details { ref query } if query == "?id=21"));

        let args = Args::try_parse_from(["anime-portal", "contact", "--name", "Ann"]).unwrap();
        assert!(matches!(args.command, Command::Contact { ref email, .. } if email.is_empty()));
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = BuildManifest {
            site: "Anime Portal".to_string(),
            generated_at: Utc::now(),
            pages: vec!["index.html".to_string()],
        };

        write_manifest(temp_dir.path(), &manifest).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("build.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["site"], "Anime Portal");
        assert_eq!(value["pages"][0], "index.html");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_grid_page_heading() {
        let html = grid_page("Shows", "<div></div>");
        assert!(html.starts_with("<section class=\"listing\">\n<h2>Shows</h2>"));
    }
}
