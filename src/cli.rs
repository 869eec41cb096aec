// CLI argument definitions
use clap::{Parser, Subcommand};

#[derive(Parser)]
pub struct SharedOptions {
    /// Base URL of the booking service API
    #[arg(short = 'u', long = "api-url", default_value = crate::booking::BOOKING_API_URL)]
    pub api_url: String,
    /// Overall timeout for outbound booking-service requests, in milliseconds
    #[arg(long = "timeout-ms", default_value = "15000")]
    pub timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a long-lived http server that resolves journey links on request
    Serve {
        #[command(flatten)]
        shared_options: SharedOptions,
        /// Host the API on this particular port
        #[arg(short = 'p', long = "port", default_value = "4600")]
        port: u16,
    },
    /// Resolve a single deep-link or booking-reference URL and print the summary
    Lookup {
        #[command(flatten)]
        shared_options: SharedOptions,
        /// The URL to resolve
        url: String,
    },
}

#[derive(Parser)]
#[command(name = "fahrlink")]
#[command(about = "Resolve rail deep links and booking references into journey details")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Fahrlink {
    #[command(subcommand)]
    pub command: Commands,
}
