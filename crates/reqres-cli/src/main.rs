//! reqres - a terminal demo client for the ReqRes REST API.
//!
//! Logs in with the published demo credentials, stores the bearer token
//! in the OS keychain, and exercises the user CRUD endpoints with that
//! token attached.

mod app;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reqres_core::auth::{KeyringTokenStore, TokenStore};
use reqres_core::models::UserPage;

use app::App;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: reqres <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login    Log in with the ReqRes demo credentials");
    eprintln!("  users    List users (page 2)");
    eprintln!("  create   Create a demo user");
    eprintln!("  update   Update user 2");
    eprintln!("  delete   Delete user 2");
}

fn print_response(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the recorded failure from call state and exit non-zero.
fn report_failure(app: &App) -> ! {
    if let Some(ref failure) = app.call.failure {
        eprintln!("Error: {}", failure);
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("reqres demo client starting");

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(2);
    };

    let store: Arc<dyn TokenStore> = Arc::new(KeyringTokenStore);
    let mut app = App::new(store)?;

    match command.as_str() {
        "login" => {
            if app.login().await.is_err() {
                if let Some(ref message) = app.login_error {
                    eprintln!("Login error: {}", message);
                }
                std::process::exit(1);
            }
            if let Some(ref token) = app.token {
                println!("Logged in! Token: {}", token);
            }
        }
        "users" => match app.fetch_users().await {
            Ok(value) => {
                if let Ok(page) = serde_json::from_value::<UserPage>(value.clone()) {
                    println!("{} of {} users on page {}:", page.data.len(), page.total, page.page);
                    for user in &page.data {
                        println!("  {:3}  {}  <{}>", user.id, user.full_name(), user.email);
                    }
                    println!();
                }
                print_response(&value)?;
            }
            Err(_) => report_failure(&app),
        },
        "create" => match app.create_user().await {
            Ok(value) => print_response(&value)?,
            Err(_) => report_failure(&app),
        },
        "update" => match app.update_user().await {
            Ok(value) => print_response(&value)?,
            Err(_) => report_failure(&app),
        },
        "delete" => match app.delete_user().await {
            Ok(value) => {
                print_response(&value)?;
                println!("User deleted.");
            }
            Err(_) => report_failure(&app),
        },
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}
