// @file: src/core/interfaces.rs
// @description: Trait naming the market-data queries the proxy answers.
// @author: LAS.

use crate::core::errors::QueryError;
use crate::core::models::{
    BookTicker, CoinInfo, ExchangeInfo, FundingPremium, FuturesCandle, OpenInterestStat,
    SpotCandle, SpotTicker,
};

//
// TRAIT DEFINITIONS
//

/// Read-only market-data queries. `QueryClient` is the HTTP implementation;
/// downstream code can hold a `&dyn MarketDataProxy` and swap in a fake.
pub trait MarketDataProxy: Send + Sync {
    // #1. Futures market
    /// `end_ts <= 0` lets the upstream pick the window end.
    fn fetch_future_candles(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
        end_ts: i64,
    ) -> Result<Vec<FuturesCandle>, QueryError>;

    fn fetch_funding_premium(&self) -> Result<FundingPremium, QueryError>;

    fn fetch_open_interest_stats(
        &self,
        pair: &str,
        period: &str,
        limit: u32,
    ) -> Result<Vec<OpenInterestStat>, QueryError>;

    fn fetch_exchange_info(&self) -> Result<ExchangeInfo, QueryError>;

    fn fetch_futures_book_ticker(&self, symbol: &str) -> Result<Vec<BookTicker>, QueryError>;

    // #2. Spot market
    /// `start_ts <= 0` lets the upstream pick the window start.
    fn fetch_spot_candles(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
        start_ts: i64,
    ) -> Result<Vec<SpotCandle>, QueryError>;

    fn fetch_all_coin_info(&self) -> Result<Vec<CoinInfo>, QueryError>;

    /// `symbols` is a comma-joined list, see [`crate::join_symbols`].
    fn fetch_spot_book_ticker(&self, symbols: &str) -> Result<Vec<SpotTicker>, QueryError>;

    fn fetch_pairs_with_usdt(&self) -> Result<Vec<String>, QueryError>;
}
