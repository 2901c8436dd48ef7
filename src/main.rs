use anyhow::{bail, Context, Result};
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ovchipkaart_dashboard::app::DashboardApp;
use ovchipkaart_dashboard::config::Config;
use ovchipkaart_dashboard::errors::{ApiResponse, ValidationErrorMessageBag};
use ovchipkaart_dashboard::graphql::Upload;
use ovchipkaart_dashboard::metrics;
use ovchipkaart_dashboard::models::{
    AnalyzeRequest, CreateUserInput, ListOptions, LoginInput, StoreAnalyzeRequestInput,
    TravelHistorySource,
};
use ovchipkaart_dashboard::notifications::TracingNotifier;
use ovchipkaart_dashboard::session::FileTokenStore;
use ovchipkaart_dashboard::utils::locale_date;

/// Command-line client for the OV-chipkaart analysis dashboard
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Print the collected metrics before exiting
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account
    SignUp {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        re_captcha: String,
    },
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        remember_me: bool,
        #[arg(long, default_value = "")]
        re_captcha: String,
    },
    /// End the stored session
    Logout,
    /// Submit an analyze request from OV-chipkaart credentials or a travel history file
    #[command(group(ArgGroup::new("source").required(true).args(["username", "file"])))]
    Submit {
        #[arg(long)]
        number: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: String,
        #[arg(long, requires = "password")]
        username: Option<String>,
        #[arg(long, requires = "username")]
        password: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List the most recent analyze requests
    Requests,
    /// Poll the analyze requests until Ctrl+C
    Watch,
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

fn print_field_errors(errors: Option<&ValidationErrorMessageBag>) {
    let Some(errors) = errors else {
        return;
    };
    for (field, messages) in errors.iter() {
        if let Some(first) = messages.first() {
            println!("{}: {}", field, first.message);
        }
    }
}

fn print_requests(rows: &[AnalyzeRequest]) {
    if rows.is_empty() {
        println!("No analyze requests yet");
        return;
    }

    println!(
        "{:<24} {:<12} {:<12} {:<12} {}",
        "CARD", "CREATED", "START", "END", "STATUS"
    );
    for row in rows {
        println!(
            "{:<24} {:<12} {:<12} {:<12} {}",
            row.ov_chipkaart_number,
            row.created_at.as_deref().map(locale_date).unwrap_or_default(),
            locale_date(&row.start_date),
            locale_date(&row.end_date),
            row.status.label()
        );
    }

    let pending = rows.iter().filter(|row| row.status.is_pending()).count();
    if pending > 0 {
        println!("{} request(s) still in progress", pending);
    }
}

fn report<T>(response: &ApiResponse<T>) -> bool {
    print_field_errors(response.validation_errors());
    response.is_valid()
}

async fn run(app: &mut DashboardApp, command: Command, config: &Config) -> Result<bool> {
    let valid = match command {
        Command::SignUp {
            first_name,
            last_name,
            email,
            password,
            re_captcha,
        } => {
            let input = CreateUserInput {
                first_name,
                last_name,
                email,
                password,
                re_captcha,
            };
            report(&app.sign_up(&input).await)
        }
        Command::Login {
            email,
            password,
            remember_me,
            re_captcha,
        } => {
            let input = LoginInput {
                email,
                password,
                remember_me,
                re_captcha,
            };
            report(&app.login(&input).await?)
        }
        Command::Logout => report(&app.logout().await?),
        Command::Submit {
            number,
            start,
            end,
            username,
            password,
            file,
        } => {
            let source = match (file, username, password) {
                (Some(path), _, _) => TravelHistorySource::File(
                    Upload::from_path(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                ),
                (None, Some(username), Some(password)) => {
                    TravelHistorySource::Credentials { username, password }
                }
                _ => bail!("submit needs --file or both --username and --password"),
            };
            let input = StoreAnalyzeRequestInput {
                ov_chipkaart_number: number,
                start_date: start,
                end_date: end,
                source,
            };

            let valid = report(&app.submit_request(&input).await);
            if valid {
                print_requests(&app.state().request_rows);
            }
            valid
        }
        Command::Requests => {
            let response = app.refresh_recent_requests().await;
            if let Some(rows) = response.data() {
                print_requests(rows);
            }
            response.is_valid()
        }
        Command::Watch => {
            if !app.is_authenticated() {
                bail!("Not logged in; run `ov-dashboard login` first");
            }
            info!(
                "Watching analyze requests every {}s, press Ctrl+C to stop",
                config.dashboard.poll_interval_seconds
            );
            app.watch(config.dashboard.poll_interval(), shutdown_signal(), print_requests)
                .await;
            true
        }
    };

    Ok(valid)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ovchipkaart_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    metrics::registry::init_metrics();

    let config = Config::from_env().context("Failed to load configuration")?;

    let mut app = DashboardApp::connect(
        config.api.clone(),
        ListOptions::latest(config.dashboard.recent_requests_take),
        Arc::new(FileTokenStore::new(&config.session.token_file)),
        Arc::new(TracingNotifier),
    )
    .await
    .context("Failed to initialize dashboard client")?;

    let valid = run(&mut app, cli.command, &config).await?;

    if cli.metrics {
        print!("{}", metrics::encode_metrics()?);
    }

    if !valid {
        std::process::exit(1);
    }

    Ok(())
}
