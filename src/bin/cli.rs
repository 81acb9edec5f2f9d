//! Forza CLI
//!
//! Command-line client for a running Forza server:
//! - Chat with the assistant (one-shot or interactive)
//! - Explain a source file
//! - Browse the sample market table
//! - Generate a default config file

use clap::{Parser, Subcommand};
use forza::assistant::{ChatMessage, CoinSnapshot};
use forza::market::{format_change, format_usd};
use serde::de::DeserializeOwned;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forza-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Forza AI assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a chat message; starts an interactive session when none is given
    Chat {
        /// Message text
        message: Option<String>,
    },

    /// Explain a source file
    Explain {
        /// Path to the file
        file: PathBuf,
        /// Language value or label (default: javascript)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show the market table
    Market {
        /// Filter by name or symbol
        #[arg(short, long)]
        query: Option<String>,
    },

    /// List languages the explainer accepts
    Languages,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.api_url.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Chat { message: Some(text) } => {
            let reply = send_chat(&client, &base, &text, &[]).await?;
            print_reply(&reply);
        }

        Commands::Chat { message: None } => {
            chat_session(&client, &base).await?;
        }

        Commands::Explain { file, language } => {
            let code = std::fs::read_to_string(&file)
                .map_err(|e| anyhow::anyhow!("Cannot read {:?}: {}", file, e))?;

            let body = serde_json::json!({ "code": code, "language": language });
            let response = client
                .post(format!("{}/api/v1/explain", base))
                .json(&body)
                .send()
                .await?;
            let data: serde_json::Value = read_json(response).await?;

            println!(
                "Explanation ({}):",
                data["language"].as_str().unwrap_or("unknown")
            );
            println!();
            println!("{}", data["explanation"].as_str().unwrap_or_default());
        }

        Commands::Market { query } => {
            let mut request = client.get(format!("{}/api/v1/market", base));
            if let Some(q) = &query {
                request = request.query(&[("q", q)]);
            }
            let data: serde_json::Value = read_json(request.send().await?).await?;
            let assets = data["assets"].as_array().cloned().unwrap_or_default();

            if assets.is_empty() {
                println!("No cryptocurrencies match your search.");
                return Ok(());
            }

            println!(
                "{:<3} {:<22} {:>14} {:>10} {:>12} {:>12}",
                "#", "Name", "Price", "24h Change", "Market Cap", "Volume (24h)"
            );
            println!("{}", "-".repeat(78));

            for (i, asset) in assets.iter().enumerate() {
                let change = asset["change"].as_f64().unwrap_or_default();
                let arrow = if change > 0.0 { "+" } else { "-" };
                println!(
                    "{:<3} {:<22} {:>14} {:>10} {:>12} {:>12}",
                    i + 1,
                    format!(
                        "{} ({})",
                        asset["name"].as_str().unwrap_or_default(),
                        asset["symbol"].as_str().unwrap_or_default()
                    ),
                    format_usd(asset["price"].as_f64().unwrap_or_default()),
                    format!("{}{}", arrow, format_change(change)),
                    format_usd(asset["market_cap"].as_f64().unwrap_or_default()),
                    format_usd(asset["volume"].as_f64().unwrap_or_default()),
                );
            }
        }

        Commands::Languages => {
            let response = client.get(format!("{}/api/v1/languages", base)).send().await?;
            let data: serde_json::Value = read_json(response).await?;

            println!("{:<12} {}", "Value", "Label");
            println!("{}", "-".repeat(24));
            for lang in data["languages"].as_array().into_iter().flatten() {
                println!(
                    "{:<12} {}",
                    lang["value"].as_str().unwrap_or_default(),
                    lang["label"].as_str().unwrap_or_default()
                );
            }
        }

        Commands::Config { output } => {
            let config = forza::config::generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &config)?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", config);
            }
        }
    }

    Ok(())
}

/// Read a REPL until EOF or `/quit`, keeping the conversation history
async fn chat_session(client: &reqwest::Client, base: &str) -> anyhow::Result<()> {
    let mut history = vec![ChatMessage::welcome()];
    print_reply(&history[0]);
    println!("(type /quit to leave)");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "/quit" {
            break;
        }

        let reply = send_chat(client, base, text, &history).await?;
        print_reply(&reply);

        history.push(ChatMessage::user(text));
        history.push(reply);
    }

    Ok(())
}

async fn send_chat(
    client: &reqwest::Client,
    base: &str,
    text: &str,
    history: &[ChatMessage],
) -> anyhow::Result<ChatMessage> {
    #[derive(serde::Deserialize)]
    struct ChatResponse {
        message: ChatMessage,
    }

    let body = serde_json::json!({ "message": text, "history": history });
    let response = client
        .post(format!("{}/api/v1/chat", base))
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Cannot connect to Forza at {}: {}\n\nMake sure the server is running:\n  cargo run --bin forza",
                base,
                e
            )
        })?;

    let data: ChatResponse = read_json(response).await?;
    Ok(data.message)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> anyhow::Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string());
        anyhow::bail!("Request failed ({}): {}", status, message);
    }
    Ok(response.json().await?)
}

fn print_reply(message: &ChatMessage) {
    println!("[{}] Forza AI: {}", message.time_label(), message.content);
    if let Some(coin) = &message.coin {
        print_coin(coin);
    }
}

fn print_coin(coin: &CoinSnapshot) {
    println!();
    println!(
        "  {} ({})  ${:.2}  {}",
        coin.name,
        coin.symbol,
        coin.price,
        coin.change_label()
    );

    let ind = &coin.indicators;
    println!("  RSI: {}   MACD: {:.2}   Volume: {:.0}", ind.rsi, ind.macd, ind.volume);
    println!("  MA50: ${:.2}   MA200: ${:.2}   Signal: {}", ind.ma50, ind.ma200, ind.signal);
    println!();
    println!("  {}", coin.kind.footnote());
}
