use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use mortcalc::application::calculator::MortgageCalculator;
use mortcalc::config::{DEFAULT_BIND_ADDR, DEFAULT_RATE_FEED_URL, DEFAULT_RATE_SERIES, RateFeedConfig};
use mortcalc::domain::loan::LoanRequest;
use mortcalc::infrastructure::rate_source;
use mortcalc::interfaces::csv::loan_reader::LoanReader;
use mortcalc::interfaces::csv::repayment_writer::RepaymentWriter;
use mortcalc::interfaces::http;
use mortcalc::interfaces::presentation::FormattedRepayment;
use std::fs::File;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Rate feed (URL or file path) consulted when no interest rate is given
    #[arg(long, global = true, env = "MORTCALC_RATE_FEED", default_value = DEFAULT_RATE_FEED_URL)]
    rate_feed: String,

    /// Column of the rate feed holding the rate
    #[arg(long, global = true, env = "MORTCALC_RATE_SERIES", default_value = DEFAULT_RATE_SERIES)]
    rate_series: String,

    /// Never consult the rate feed; missing rates fall back to 4.25
    #[arg(long, global = true)]
    no_rate_feed: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate repayments for one loan and print them as JSON
    Calculate {
        /// Property price
        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Deposit paid up front
        #[arg(long, allow_negative_numbers = true)]
        deposit: f64,

        /// Annual interest rate in percent. Defaults to the rate feed
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,

        /// Loan term in years
        #[arg(long, allow_negative_numbers = true)]
        term: f64,
    },

    /// Calculate repayments for every loan in a CSV file
    Batch {
        /// Input CSV with property_price, deposit, interest_rate, term_years
        input: PathBuf,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "MORTCALC_BIND", default_value = DEFAULT_BIND_ADDR)]
        bind: SocketAddr,
    },
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    });

    let feed = if cli.no_rate_feed {
        RateFeedConfig::Disabled
    } else {
        RateFeedConfig::from_location(&cli.rate_feed, &cli.rate_series)
    };
    let calculator = Arc::new(MortgageCalculator::new(rate_source(&feed).into_diagnostic()?));

    match cli.command {
        Command::Calculate {
            price,
            deposit,
            rate,
            term,
        } => {
            let loan = calculator
                .resolve(LoanRequest {
                    property_price: price,
                    deposit,
                    interest_rate: rate,
                    term_years: term,
                })
                .await;
            let result = calculator.calculate(&loan);

            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &FormattedRepayment::from(&result))
                .into_diagnostic()?;
            writeln!(stdout).into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = LoanReader::new(file);
            let mut writer = RepaymentWriter::new(io::stdout());

            // Fetched at most once, and only if some row has no rate.
            let mut default_rate = None;

            for loan_result in reader.loans() {
                match loan_result {
                    Ok(request) => {
                        let rate = match (request.interest_rate, default_rate) {
                            (Some(rate), _) => rate,
                            (None, Some(rate)) => rate,
                            (None, None) => {
                                let rate = calculator.default_interest_rate().await;
                                default_rate = Some(rate);
                                rate
                            }
                        };
                        let loan = request.with_rate(rate);
                        let result = calculator.calculate(&loan);
                        if let Err(e) = writer.write(&loan, &result) {
                            eprintln!("Error writing repayment: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error reading loan: {}", e);
                    }
                }
            }

            writer.flush().into_diagnostic()?;
        }
        Command::Serve { bind } => {
            let listener = TcpListener::bind(bind).await.into_diagnostic()?;
            http::serve(listener, calculator).await.into_diagnostic()?;
        }
    }

    Ok(())
}
