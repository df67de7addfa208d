// @file: src/connectors/kaivest.rs
// @description: Blocking HTTP client that relays market-data queries to the Binance proxy.
// @author: LAS.

use std::time::Duration;

use log::{debug, trace};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::errors::QueryError;
use crate::core::interfaces::MarketDataProxy;
use crate::core::models::{
    BookTicker, CoinInfo, ExchangeInfo, FundingPremium, FuturesCandle, OpenInterestStat,
    SpotCandle, SpotTicker,
};

//
// CONSTANTS
//

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// Status bodies are echoed into errors; keep them short.
const MAX_ERROR_BODY_CHARS: usize = 512;

//
// TYPE DEFINITIONS
//

/// Transport timeouts applied when the client is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    /// Deadline for the whole round trip.
    pub request_timeout: Duration,
    /// How long a pooled connection may sit idle.
    pub idle_timeout: Duration,
    /// Bound on the TCP/TLS connect phase only. A server that accepts and then
    /// stalls before sending headers is cut off by `request_timeout`.
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Upstream routes, one per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    FutureKline,
    FuturePremium,
    FutureOpenInterestStats,
    FutureExchangeInfo,
    FutureBookTicker,
    SpotKline,
    SpotAllCoinInfo,
    SpotBookTicker,
    SpotPairsWithUsdt,
}

impl Route {
    pub(crate) fn path(self) -> &'static str {
        match self {
            Route::FutureKline => "/binance/future/kline",
            Route::FuturePremium => "/binance/future/premium",
            Route::FutureOpenInterestStats => "/binance/future/oi-stats",
            Route::FutureExchangeInfo => "/binance/future/exchange-info",
            // The deployed proxy serves futures book tickers from the oi-stats route.
            // Do not point this elsewhere until the proxy exposes a dedicated route.
            Route::FutureBookTicker => "/binance/future/oi-stats",
            Route::SpotKline => "/binance/spot/kline",
            Route::SpotAllCoinInfo => "/binance/spot/all-coin-info",
            Route::SpotBookTicker => "/binance/spot/book-ticker",
            Route::SpotPairsWithUsdt => "/binance/spot/spot-pair-with-usdt",
        }
    }
}

type QueryParams = Vec<(&'static str, String)>;

/// Client for the Binance proxy.
///
/// Holds no per-call state. Cloning is cheap and clones share one connection pool,
/// so a single client can serve many threads.
#[derive(Debug, Clone)]
pub struct QueryClient {
    base_url: Url,
    client: Client,
}

impl QueryClient {
    //
    // CONSTRUCTION
    //

    pub fn new(addr: &str) -> Result<Self, QueryError> {
        Self::with_settings(addr, ClientSettings::default())
    }

    pub fn with_settings(addr: &str, settings: ClientSettings) -> Result<Self, QueryError> {
        // #1. Validate the address before touching the network
        let base_url: Url = Url::parse(addr).map_err(|source| QueryError::InvalidBaseUrl {
            addr: addr.to_string(),
            source,
        })?;

        if base_url.cannot_be_a_base() {
            return Err(QueryError::InvalidBaseUrl {
                addr: addr.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        // Routes are appended to the path, so a query or fragment would swallow them.
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(QueryError::UnsupportedBaseUrl {
                addr: addr.to_string(),
                reason: "query strings and fragments are not allowed",
            });
        }

        // #2. Build the transport
        let client: Client = Client::builder()
            .timeout(settings.request_timeout)
            .pool_idle_timeout(settings.idle_timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(QueryError::Client)?;

        debug!("Proxy client ready for {}", base_url);

        Ok(QueryClient { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    //
    // INTERNAL HELPERS
    //

    /// Appends the route to the base address and encodes the parameters, sorted by key.
    pub(crate) fn endpoint(&self, route: Route, mut params: QueryParams) -> Result<Url, QueryError> {
        let joined: String = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), route.path());

        let mut url: Url = Url::parse(&joined).map_err(|source| QueryError::InvalidEndpoint {
            endpoint: joined.clone(),
            source,
        })?;

        if !params.is_empty() {
            params.sort_by(|a, b| a.0.cmp(b.0));
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, route: Route, params: QueryParams) -> Result<T, QueryError> {
        // #1. Build URL
        let url: Url = self.endpoint(route, params)?;
        debug!("GET {}", url);

        // #2. Execute Request
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let body: String = response.text()?;
        trace!("{} from {} ({} bytes)", status, url, body.len());

        if !status.is_success() {
            return Err(QueryError::Status {
                status,
                url: url.to_string(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        // #3. Decode into the destination shape
        serde_json::from_str(&body).map_err(|source| QueryError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // A bare `null` root is how the proxy sends an empty list.
    fn get_list<T: DeserializeOwned>(&self, route: Route, params: QueryParams) -> Result<Vec<T>, QueryError> {
        let items: Option<Vec<T>> = self.get_json(route, params)?;
        Ok(items.unwrap_or_default())
    }
}

fn window_params(pair: &str, interval: &str, limit: u32) -> QueryParams {
    vec![
        ("pair", pair.to_string()),
        ("interval", interval.to_string()),
        ("limit", limit.to_string()),
    ]
}

// Non-positive timestamps are left out so the upstream applies its default.
fn push_timestamp(params: &mut QueryParams, key: &'static str, ts: i64) {
    if ts > 0 {
        params.push((key, ts.to_string()));
    }
}

/// Joins symbols into the comma-separated list `fetch_spot_book_ticker` expects.
pub fn join_symbols<S: AsRef<str>>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}

//
// PUBLIC INTERFACE
//

impl MarketDataProxy for QueryClient {
    fn fetch_future_candles(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
        end_ts: i64,
    ) -> Result<Vec<FuturesCandle>, QueryError> {
        let mut params: QueryParams = window_params(pair, interval, limit);
        push_timestamp(&mut params, "end_ts", end_ts);
        self.get_list(Route::FutureKline, params)
    }

    fn fetch_funding_premium(&self) -> Result<FundingPremium, QueryError> {
        self.get_json(Route::FuturePremium, Vec::new())
    }

    fn fetch_open_interest_stats(
        &self,
        pair: &str,
        period: &str,
        limit: u32,
    ) -> Result<Vec<OpenInterestStat>, QueryError> {
        let params: QueryParams = vec![
            ("pair", pair.to_string()),
            ("period", period.to_string()),
            ("limit", limit.to_string()),
        ];
        self.get_list(Route::FutureOpenInterestStats, params)
    }

    fn fetch_exchange_info(&self) -> Result<ExchangeInfo, QueryError> {
        self.get_json(Route::FutureExchangeInfo, Vec::new())
    }

    fn fetch_futures_book_ticker(&self, symbol: &str) -> Result<Vec<BookTicker>, QueryError> {
        self.get_list(Route::FutureBookTicker, vec![("symbol", symbol.to_string())])
    }

    fn fetch_spot_candles(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
        start_ts: i64,
    ) -> Result<Vec<SpotCandle>, QueryError> {
        let mut params: QueryParams = window_params(pair, interval, limit);
        push_timestamp(&mut params, "start_ts", start_ts);
        self.get_list(Route::SpotKline, params)
    }

    fn fetch_all_coin_info(&self) -> Result<Vec<CoinInfo>, QueryError> {
        self.get_list(Route::SpotAllCoinInfo, Vec::new())
    }

    fn fetch_spot_book_ticker(&self, symbols: &str) -> Result<Vec<SpotTicker>, QueryError> {
        self.get_list(Route::SpotBookTicker, vec![("symbols", symbols.to_string())])
    }

    fn fetch_pairs_with_usdt(&self) -> Result<Vec<String>, QueryError> {
        self.get_list(Route::SpotPairsWithUsdt, Vec::new())
    }
}
