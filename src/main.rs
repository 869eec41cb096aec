use crate::cli::{Commands, Fahrlink};
use crate::server::{infra, state};
use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod booking;
mod cli;
mod datetime;
mod handlers;
mod hash;
mod journey;
mod recon;
mod routes;
mod server;
mod station;
mod vendo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Fahrlink::try_parse()?;
    match args.command {
        Commands::Serve {
            shared_options,
            port,
        } => {
            let app_state = state::build_state(shared_options.api_url, shared_options.timeout_ms)?;
            let app = routes::create_router(app_state);

            let addr = format!("0.0.0.0:{}", port);
            let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
            info!("Listening on {addr}");

            axum::serve(listener, app)
                .with_graceful_shutdown(infra::shutdown_signal())
                .await?;

            info!("Terminating");
        }
        Commands::Lookup { shared_options, url } => {
            let app_state = state::build_state(shared_options.api_url, shared_options.timeout_ms)?;
            let details = journey::resolve_journey(&app_state, &url).await?;
            println!("{}", details.summary());
        }
    }
    Ok(())
}
