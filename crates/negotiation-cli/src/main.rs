use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use negotiation_cli::logging::init_logging;
use negotiation_cli::{format_events, run_chat, FormatOptions};
use negotiation_core::Scenario;
use negotiation_llm::{
    ChatOutcome, EchoGenerator, HttpGenerator, NegotiationSession, Settings, TextGenerator,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser, Debug)]
#[command(name = "negotiate")]
#[command(about = "Marketplace negotiation prompt tools")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format recorded dialogues (JSON Lines) into training prompts
    FormatEvents {
        /// Input file, one dialogue record per line
        #[arg(long)]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Use raw action text instead of the price-annotated utterance
        #[arg(long)]
        no_price: bool,

        /// Skip records that fail to parse or format
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Chat with the simulated seller over stdin
    Chat {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Generation endpoint base URL (overrides config)
        #[arg(long, env = "GENERATION_ENDPOINT")]
        endpoint: Option<String>,

        /// Answer with the echo generator instead of a model
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Command::FormatEvents {
            input,
            output,
            no_price,
            skip_invalid,
        } => {
            let reader = BufReader::new(
                File::open(&input).with_context(|| format!("Failed to open {}", input.display()))?,
            );
            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            let options = FormatOptions {
                use_price: !no_price,
                skip_invalid,
            };
            format_events(reader, writer, options)?;
        }
        Command::Chat {
            title,
            description,
            endpoint,
            offline,
        } => {
            let mut settings = Settings::new();
            if endpoint.is_some() {
                settings.endpoint = endpoint;
            }
            settings.offline |= offline;
            settings.generation.validate()?;

            let generator: Arc<dyn TextGenerator> = match (&settings.endpoint, settings.offline) {
                (Some(url), false) => {
                    let client = reqwest::Client::builder()
                        .timeout(REQUEST_TIMEOUT)
                        .build()
                        .context("Failed to build HTTP client")?;
                    let mut http = HttpGenerator::new(url.as_str()).with_client(client);
                    if let Some(key) = &settings.api_key {
                        http = http.with_api_key(key.as_str());
                    }
                    log::info!("Generation endpoint: {}", http.base_url());
                    Arc::new(http)
                }
                _ => {
                    log::info!("No generation endpoint configured; using echo generator");
                    Arc::new(EchoGenerator::new())
                }
            };
            log::info!("Chatting about '{}' via {}", title, generator.name());

            let mut session = NegotiationSession::new(Scenario::new(title, description));
            let stdin = io::stdin();
            let outcome = run_chat(
                &mut session,
                generator.as_ref(),
                &settings.generation,
                stdin.lock(),
                io::stdout(),
            )
            .await?;

            if let Some(ChatOutcome::Ended { discard: true }) = outcome {
                log::info!("Chat too short to keep; transcript discarded");
            } else {
                println!("{}", session.transcript.content().trim_end());
            }
        }
    }

    Ok(())
}
