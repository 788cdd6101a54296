//! Command-line client for the Crawlic API.
//!
//! Usage:
//!   crawlic endpoints
//!   crawlic register --name <name> --email <email>
//!   crawlic test --endpoint page-content --url https://example.com --api-key <key>
//!   crawlic test ... -o result.json
//!
//! The response of `test` is printed as indented JSON to stdout (or the
//! output file); its status label goes to stderr.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use crawlic::native::{HttpTransport, write_report};
use crawlic::{ClientConfig, DEFAULT_BASE_URL, Endpoint, RegistrationNotice, Session};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "crawlic")]
#[command(about = "Call the Crawlic web scraping API from the terminal", long_about = None)]
struct Cli {
    #[arg(
        long,
        env = "CRAWLIC_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true,
        help = "API base URL"
    )]
    base_url: String,

    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        global = true,
        help = "Request timeout in seconds (0 disables it)"
    )]
    timeout: u64,

    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "warn",
        global = true,
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the scraping endpoints
    Endpoints,

    /// Register and obtain an API key
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Call one scraping endpoint and show its response
    Test {
        #[arg(long, default_value = "page-content", help = "Endpoint id")]
        endpoint: Endpoint,

        #[arg(long, default_value = crawlic::session::DEFAULT_TARGET_URL)]
        url: String,

        #[arg(long, env = "CRAWLIC_API_KEY", default_value = "", hide_env_values = true)]
        api_key: String,

        #[arg(short = 'o', long, help = "Write the response here instead of stdout")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let timeout = (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout));
    let config = ClientConfig::new(cli.base_url).with_timeout(timeout);

    let transport = HttpTransport::new(&config).unwrap_or_else(|e| {
        log::error!("Error creating HTTP client: {}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Endpoints => {
            for endpoint in Endpoint::ALL {
                println!(
                    "{:<20} {:<14} {}",
                    endpoint.id(),
                    endpoint.name(),
                    endpoint.description()
                );
            }
        }
        Commands::Register { name, email } => {
            let mut session = Session::new();
            session.name = name;
            session.email = email;
            log::info!("Registering at {}...", config.register_url());

            let notice = session
                .run_registration(&config, &transport)
                .await
                .unwrap_or_else(|e| {
                    log::error!("{}", e);
                    process::exit(1);
                });

            match notice {
                RegistrationNotice::KeyIssued(key) => println!("{}", key),
                other => {
                    log::error!(
                        "{}",
                        other
                            .message()
                            .unwrap_or_else(|| "Registration returned no API key".to_string())
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Test {
            endpoint,
            url,
            api_key,
            output,
        } => {
            let mut session = Session::new();
            session.api_key = api_key;
            session.target_url = url;
            session.select_endpoint(endpoint);
            log::info!("Calling {}...", config.endpoint_url(endpoint));

            let result = session
                .run_test(&config, &transport)
                .await
                .unwrap_or_else(|e| {
                    log::error!("{}", e);
                    process::exit(1);
                });

            eprintln!("{}", result.status().label());
            if let Err(e) = write_report(output.as_deref(), &result.pretty()) {
                log::error!("Error writing output: {}", e);
                process::exit(1);
            }
            if !result.is_success() {
                process::exit(1);
            }
        }
    }
}
