use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use user_info_server::config::AppConfig;
use user_info_server::startup;

#[derive(Parser, Debug)]
#[command(name = "user-info-server")]
#[command(about = "HTTP CRUD service over the user_info table")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Recreate the table, insert three users and print every row
    Demo,
}

fn load_config(args: &Args) -> Result<AppConfig, String> {
    let mut app_config =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            warn!("No config.yaml found, using in-memory SQLite on 127.0.0.1:3000");
            AppConfig::default_config()
        } else {
            AppConfig::load_from_file(&args.config)
                .map_err(|e| format!("Failed to load configuration: {}", e))?
        };

    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = &args.host {
        app_config.server.host = host.clone();
    }

    Ok(app_config)
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let app_config = load_config(&args)?;
    let backend = startup::setup_backend(&app_config).await?;

    if let Some(Command::Demo) = args.command {
        let users = startup::run_demo(backend.as_ref()).await?;
        for user in &users {
            println!(
                "Id {}, login {}, created on {}",
                user.id, user.login, user.creation_date
            );
        }
        backend.cleanup().await?;
        return Ok(());
    }

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        warn!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));

    let app = startup::build_router(backend.clone());

    info!("User info server listening on {}", addr);
    info!("  GET    /users/list");
    info!("  GET    /users/{{id}}");
    info!("  POST   /users");
    info!("  PUT    /users");
    info!("  DELETE /users/{{id}}");
    info!("  GET    /api-docs/openapi.json");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    backend.cleanup().await?;
    info!("Connection pool closed");

    Ok(())
}
