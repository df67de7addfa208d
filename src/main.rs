// @file: src/main.rs
// @description: Probe that checks a running proxy by listing USDT pairs and fetching their spot book tickers.
// @author: LAS.

use kaivest_binance::utils::config::AppConfig;
use kaivest_binance::{join_symbols, MarketDataProxy, QueryClient, QueryError};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    // #1. Environment & Config
    dotenv::dotenv().ok();

    let config: AppConfig = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    // #2. Run the probe
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Probe failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), QueryError> {
    info!(">>> Probing proxy at {} <<<", config.proxy_base_url);

    let client: QueryClient = QueryClient::with_settings(&config.proxy_base_url, config.client_settings())?;

    // #1. Enumerate tradable pairs
    let pairs: Vec<String> = client.fetch_pairs_with_usdt()?;
    info!("Proxy lists {} USDT pairs", pairs.len());

    if pairs.is_empty() {
        info!("No pairs to query, done.");
        return Ok(());
    }

    // #2. Book tickers for the first batch
    let batch: &[String] = &pairs[..pairs.len().min(config.probe_symbol_limit)];
    let tickers = client.fetch_spot_book_ticker(&join_symbols(batch))?;
    info!("Received {} spot book tickers for {} symbols", tickers.len(), batch.len());

    if let Some(t) = tickers.first() {
        info!("Sample: {} bid {} x {} / ask {} x {}", t.symbol, t.bid_price, t.bid_qty, t.ask_price, t.ask_qty);
    }

    Ok(())
}
