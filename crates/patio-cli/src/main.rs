//! patio - command-line front-end for the parking management service.
//!
//! Sessions, vehicle entry/exit, and record lookups against the hosted
//! parking backend.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use patio_cli::input::{looks_like_email, SearchQuery};
use patio_client::{ApiClient, AuthApi, Config, FileTokenStore, SessionManager, VehicleApi};
use patio_core::format::format_date_time;
use patio_core::models::{RegisterRequest, VehicleRecord};
use patio_core::plate::Plate;

/// Manage parking sessions and register vehicle entry/exit.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Parking service URL (overrides PATIO_API_URL)
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and persist the session token
    Login {
        email: String,
        /// Password; falls back to the PATIO_PASSWORD environment variable
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account (does not log in)
    Register {
        name: String,
        email: String,
        /// Password; falls back to the PATIO_PASSWORD environment variable
        #[arg(long)]
        password: Option<String>,
    },
    /// Show who the stored session belongs to
    Whoami,
    /// Drop the stored session
    Logout,
    /// List vehicles currently inside the lot
    Vehicles,
    /// Register a vehicle entering the lot
    Entry { plate: String },
    /// Register a vehicle leaving the lot
    Exit { plate: String },
    /// Look up parking records by plate or record id
    Search { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patio_client=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(url) = cli.url {
        config.api_url = url;
    }

    let api = Arc::new(ApiClient::new(config.api_url.clone()));
    let store = Arc::new(FileTokenStore::new(config.token_path.clone()));
    let session = SessionManager::new(api.clone(), store);

    match cli.command {
        Command::Login { email, password } => {
            let password = resolve_password(password)?;
            let snapshot = session.login(&email, &password).await?;
            match snapshot.user {
                Some(user) => println!("Logged in as {} <{}>", user.name, user.email),
                None => println!("Logged in."),
            }
        }
        Command::Register { name, email, password } => {
            if !looks_like_email(&email) {
                bail!("{email:?} does not look like an email address");
            }
            let password = resolve_password(password)?;
            let request = RegisterRequest { name, email, password };
            let response = api.register(&request).await?;
            println!(
                "{}",
                response
                    .message
                    .unwrap_or_else(|| "Account created. Run `patio login` to sign in.".to_string())
            );
        }
        Command::Whoami => {
            if session.restore().await {
                match session.session().user {
                    Some(user) => println!("{} <{}>", user.name, user.email),
                    None => println!("Authenticated (profile unavailable)."),
                }
            } else {
                println!("Not logged in.");
            }
        }
        Command::Logout => {
            session.logout().await;
            println!("Logged out.");
        }
        Command::Vehicles => {
            ensure_session(&session, &api).await?;
            let vehicles = api.active().await?;
            if vehicles.is_empty() {
                println!("No active vehicles.");
            }
            for vehicle in &vehicles {
                println!(
                    "{}  entered {}",
                    vehicle.plate,
                    format_date_time(&vehicle.entry_date, Some(&vehicle.entry_time))
                );
            }
        }
        Command::Entry { plate } => {
            let plate = Plate::parse(&plate)?;
            ensure_session(&session, &api).await?;
            let receipt = api.entry(&plate).await?;
            println!(
                "{}",
                receipt
                    .message
                    .unwrap_or_else(|| format!("Entry registered for {}", plate))
            );
        }
        Command::Exit { plate } => {
            let plate = Plate::parse(&plate)?;
            ensure_session(&session, &api).await?;
            let receipt = api.exit(&plate).await?;
            println!(
                "{}",
                receipt
                    .message
                    .unwrap_or_else(|| format!("Exit registered for {}", plate))
            );
        }
        Command::Search { query } => {
            let query = SearchQuery::parse(&query)?;
            ensure_session(&session, &api).await?;
            match query {
                SearchQuery::Id(id) => print_record(&api.by_id(&id).await?),
                SearchQuery::Plate(plate) => {
                    let records = api.by_plate(&plate).await?;
                    if records.is_empty() {
                        println!("No records for {}.", plate);
                    }
                    for record in &records {
                        print_record(record);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Restore the stored session and hand its token to the HTTP client.
async fn ensure_session(session: &SessionManager, api: &ApiClient) -> Result<()> {
    if !session.restore().await {
        bail!("Not logged in. Run `patio login <email>` first.");
    }
    api.set_auth_token(session.token());
    Ok(())
}

fn resolve_password(flag: Option<String>) -> Result<String> {
    if let Some(password) = flag {
        return Ok(password);
    }
    std::env::var("PATIO_PASSWORD")
        .context("no password given: pass --password or set PATIO_PASSWORD")
}

fn print_record(record: &VehicleRecord) {
    let entry = format_date_time(&record.entry_date, Some(&record.entry_time));
    match (&record.exit_date, &record.exit_time) {
        (Some(date), time) => {
            let exit = format_date_time(date, time.as_deref());
            let paid = record
                .amount_paid
                .map(|amount| format!("R$ {:.2}", amount))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{}  entered {}  left {}  paid {}",
                record.plate, entry, exit, paid
            );
        }
        (None, _) => println!("{}  entered {}  still in the lot", record.plate, entry),
    }
}
