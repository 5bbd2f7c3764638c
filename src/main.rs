use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use keel::api::{self, ApiConnection};
use keel::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use keel::dashboard::{DashboardPage, SubmitOutcome};
use keel::error::DashboardError;
use keel::models::{AppState, ChangeEvent, Project, Provider};
use keel::routes::build_router;
use keel::services::{NoopListFetch, TerminalNotifier};
use keel::tasks::spawn_session_sweeper;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let api = match ApiConnection::new(config::get_api_base_url(), config::get_api_token()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    AppState::with_session_limits(
        api,
        config::get_public_base_url(),
        config::get_max_sessions(),
        config::get_session_idle_timeout(),
    )
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(%addr, api = %state.api.api_base_url, "Starting Keel dashboard");
    spawn_session_sweeper(state.clone(), config::SESSION_SWEEP_INTERVAL);
    let app = build_router(state);
    println!(
        "{} {}",
        yansi::Paint::new("Dashboard running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Stop the process using this port, or pass a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", yansi::Paint::new("Add a project to get started!").dim());
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Repository", "Provider"]);
    for p in projects {
        table.add_row(vec![p.id.to_string(), p.display_name(), p.display_repository(), p.display_provider()]);
    }
    println!("\n{table}\n");
}

fn print_providers(providers: &[Provider], show_access: bool) {
    if providers.is_empty() {
        println!("{}", yansi::Paint::new("No providers with deploy access").dim());
        return;
    }
    let mut table = new_table();
    if show_access {
        table.set_header(vec!["ID", "Name", "Deploy access"]);
    } else {
        table.set_header(vec!["ID", "Name"]);
    }
    for p in providers {
        let mut row = vec![p.id.to_string(), p.display_name()];
        if show_access {
            row.push(if p.has_deploy_access() { "yes".into() } else { "no".into() });
        }
        table.add_row(row);
    }
    println!("\n{table}\n");
}

fn fail(message: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", yansi::Paint::new(message).red(), e);
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "keel",
    author,
    version,
    about = "Keel project dashboard",
    long_about = r#"Keel: the project dashboard of the deployment console.

Serves the dashboard (project list plus the "Add Project" form) and exposes the same operations on the command line. Point it at the deployment backend with API_BASE_URL / API_TOKEN, either as environment variables or through an `.env` file.

Examples:
  1) Serve the dashboard:
      keel serve --host 127.0.0.1 --port 8080
  2) Create a project from the terminal:
      keel projects create --name web --provider-id 1 --repository acme/web
"#,
    after_help = "Use `keel <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and backend connectivity
    #[command(long_about = "Check that API_BASE_URL is set and that the backend answers the account providers query with the configured token.")]
    CheckConfig,
    /// Print the project list and the granted providers
    Dashboard,
    /// Manage projects via the configured backend
    Projects {
        #[command(subcommand)]
        sub: ProjectCommands,
    },
    /// Inspect source-control providers
    Providers {
        #[command(subcommand)]
        sub: ProviderCommands,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// List projects
    List,
    /// Create a project
    #[command(long_about = "Create a project the same way the dashboard's Add Project form does. Validation errors from the backend are printed one per invalid field.")]
    Create {
        #[arg(long)]
        name: Option<String>,
        /// ID of a provider with deploy access (see `keel providers list`)
        #[arg(long)]
        provider_id: Option<String>,
        /// Repository identifier, e.g. user/repository
        #[arg(long)]
        repository: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProviderCommands {
    /// List providers (only those with deploy access unless --all)
    List {
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        api::set_silent(true);
    }

    let state = build_state_from_env(cli.env_file.as_deref());

    let Some(command) = cli.command else {
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig => {
            if std::env::var("API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                eprintln!(
                    "{} {}",
                    yansi::Paint::new("API_BASE_URL is not configured; falling back to").yellow(),
                    state.api.api_base_url
                );
            }
            if state.api.api_token.is_empty() {
                eprintln!("{}", yansi::Paint::new("API_TOKEN is not configured").yellow());
            }
            match api::load_account_providers(&state.api).await {
                Ok(providers) => {
                    println!(
                        "{} ({} providers returned)",
                        yansi::Paint::new("Configuration looks valid").green(),
                        providers.len()
                    );
                }
                Err(e) => fail("Configuration appears invalid", e),
            }
        }
        Commands::Dashboard => {
            let (projects, providers) = futures_util::future::join(
                api::load_projects(&state.api),
                api::load_account_providers(&state.api),
            )
            .await;
            match projects {
                Ok(projects) => print_projects(&projects),
                Err(e) => fail("Failed to load projects", e),
            }
            match providers {
                Ok(providers) => print_providers(&keel::models::granted_providers(providers), false),
                Err(e) => fail("Failed to load providers", e),
            }
        }
        Commands::Projects { sub } => match sub {
            ProjectCommands::List => match api::load_projects(&state.api).await {
                Ok(projects) => print_projects(&projects),
                Err(e) => fail("Failed to load projects", e),
            },
            ProjectCommands::Create { name, provider_id, repository } => {
                let mut page = DashboardPage::mount(&NoopListFetch, &state.api).await;
                if let Some(pid) = provider_id.as_deref() {
                    if !page.granted_providers().iter().any(|p| p.id.to_string() == pid) {
                        eprintln!(
                            "{} {}",
                            yansi::Paint::new("Warning: no provider with deploy access has id").yellow(),
                            pid
                        );
                    }
                }
                let fields = [("name", name), ("provider_id", provider_id), ("repository", repository)];
                for (field, value) in fields {
                    if let Some(value) = value {
                        page.handle_input_change(&ChangeEvent::text(field, value));
                    }
                }
                match page.submit(&state.api, &TerminalNotifier).await {
                    Ok(SubmitOutcome::Created(project)) => print_projects(std::slice::from_ref(&project)),
                    Ok(SubmitOutcome::Rejected(errors)) => {
                        for message in errors.iter() {
                            eprintln!("{} {}", yansi::Paint::new("✗").red().bold(), message);
                        }
                        process::exit(1);
                    }
                    Err(e @ DashboardError::MalformedValidationPayload(_)) => fail("Backend sent an unexpected error body", e),
                    Err(e) => fail("Failed to create project", e),
                }
            }
        },
        Commands::Providers { sub } => match sub {
            ProviderCommands::List { all } => match api::load_account_providers(&state.api).await {
                Ok(providers) if all => print_providers(&providers, true),
                Ok(providers) => print_providers(&keel::models::granted_providers(providers), false),
                Err(e) => fail("Failed to load providers", e),
            },
        },
    }
}
