//! `portfolio` CLI entry-point.
//!
//! Available sub-commands:
//! - `save`   — insert a new project.
//! - `search` — list projects whose title contains a fragment.
//! - `update` — replace every field of an existing project.
//! - `delete` — remove a project by id.
//!
//! Connection parameters come from the environment (or a `.env` file):
//! `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and optionally `MYSQL_URL`.

use clap::{Args, Parser, Subcommand};
use portfolio_db::{repository::projects, Database, DbConfig, NewProject};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portfolio", about = "Manage portfolio projects in the database", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert a new project and print its id.
    Save(SaveFields),
    /// List projects whose title contains TERM (all projects when omitted).
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Replace all fields of the project with ID.
    Update {
        id: i64,
        #[command(flatten)]
        fields: UpdateFields,
    },
    /// Delete the project with ID.
    Delete { id: i64 },
}

/// Fields for `save`; anything omitted is stored as NULL.
#[derive(Args)]
struct SaveFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    img_url: Option<String>,
    #[arg(long)]
    tech_used: Option<String>,
    #[arg(long)]
    github_url: Option<String>,
    #[arg(long)]
    live_demo_link: Option<String>,
}

impl From<SaveFields> for NewProject {
    fn from(f: SaveFields) -> Self {
        Self {
            title: f.title,
            description: f.description,
            img_url: f.img_url,
            tech_used: f.tech_used,
            github_url: f.github_url,
            live_demo_link: f.live_demo_link,
        }
    }
}

/// Fields for `update`; partial updates are not supported.
#[derive(Args)]
struct UpdateFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    img_url: String,
    #[arg(long)]
    tech_used: String,
    #[arg(long)]
    github_url: String,
    #[arg(long)]
    live_demo_link: String,
}

impl From<UpdateFields> for NewProject {
    fn from(f: UpdateFields) -> Self {
        Self {
            title: Some(f.title),
            description: Some(f.description),
            img_url: Some(f.img_url),
            tech_used: Some(f.tech_used),
            github_url: Some(f.github_url),
            live_demo_link: Some(f.live_demo_link),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from {}", path.display());
    }

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    debug!(?config, "Database configuration loaded");

    // Connect up front: a store that cannot be reached at startup is fatal.
    let db = Database::new(config.url);
    if let Err(e) = db.acquire().await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &db).await {
        report_failure(&e);
        std::process::exit(1);
    }
}

/// Log a propagated operation error. The subscriber already writes to stderr.
fn report_failure(e: &anyhow::Error) {
    error!("{e:#}");
}

async fn run(command: Command, db: &Database) -> anyhow::Result<()> {
    match command {
        Command::Save(fields) => print_json(&projects::save_project(db, &fields.into()).await),
        Command::Search { term } => print_json(&projects::get_projects(db, &term).await),
        Command::Update { id, fields } => {
            print_json(&projects::update_project(db, id, &fields.into()).await?)
        }
        Command::Delete { id } => print_json(&projects::delete_project(db, id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn operation_failure_is_logged_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            report_failure(&anyhow::anyhow!("no such table: projects"));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("no such table: projects").count(), 1);
    }

    #[test]
    fn search_term_defaults_to_empty() {
        let cli = Cli::try_parse_from(["portfolio", "search"]).unwrap();
        assert!(matches!(cli.command, Command::Search { term } if term.is_empty()));
    }

    #[test]
    fn save_accepts_partial_fields() {
        let cli = Cli::try_parse_from(["portfolio", "save", "--title", "Site"]).unwrap();
        let Command::Save(fields) = cli.command else {
            panic!("expected save");
        };
        let project: NewProject = fields.into();
        assert_eq!(project.title.as_deref(), Some("Site"));
        assert!(project.img_url.is_none());
    }

    #[test]
    fn update_requires_every_field() {
        assert!(Cli::try_parse_from(["portfolio", "update", "3", "--title", "Only"]).is_err());

        let cli = Cli::try_parse_from([
            "portfolio", "update", "3",
            "--title", "T", "--description", "D", "--img-url", "I",
            "--tech-used", "Rust", "--github-url", "G", "--live-demo-link", "L",
        ])
        .unwrap();
        let Command::Update { id, fields } = cli.command else {
            panic!("expected update");
        };
        assert_eq!(id, 3);
        assert_eq!(NewProject::from(fields).tech_used.as_deref(), Some("Rust"));
    }

    #[test]
    fn delete_takes_numeric_id() {
        assert!(Cli::try_parse_from(["portfolio", "delete", "abc"]).is_err());
        assert!(matches!(
            Cli::try_parse_from(["portfolio", "delete", "9"]).unwrap().command,
            Command::Delete { id: 9 }
        ));
    }
}
