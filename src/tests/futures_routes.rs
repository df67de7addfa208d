// @file: src/tests/futures_routes.rs
// @description: Futures queries against the stub proxy: paths, query strings and decoded values.
// @author: LAS.

use super::{client_for, JSON};
use crate::MarketDataProxy;
use mockito::{Matcher, Server};

const FUTURES_CANDLE: &str = r#"[{
    "openTime": 1700000000000, "open": "37000.10", "high": "37100.00",
    "low": "36950.50", "close": "37050.00", "volume": "1234.567",
    "closeTime": 1700000059999, "quoteAssetVolume": "45678901.23",
    "tradeNum": 9876, "takerBuyBaseAssetVolume": "600.100",
    "takerBuyQuoteAssetVolume": "22222222.22"
}]"#;

//
// CANDLES
//

#[test]
fn future_candles_send_end_ts_when_positive() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/binance/future/kline")
        .match_query(Matcher::Exact("end_ts=1700000060000&interval=1m&limit=1&pair=BTCUSDT".into()))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(FUTURES_CANDLE)
        .create();

    let candles = client_for(&server)
        .fetch_future_candles("BTCUSDT", "1m", 1, 1_700_000_060_000)
        .unwrap();

    mock.assert();
    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].high, "37100.00");
    assert_eq!(candles[0].volume, "1234.567");
    assert_eq!(candles[0].close_time, 1_700_000_059_999);
}

#[test]
fn future_candles_omit_end_ts_when_zero() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/binance/future/kline")
        .match_query(Matcher::Exact("interval=4h&limit=200&pair=ETHUSDT".into()))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body("[]")
        .create();

    let candles = client_for(&server)
        .fetch_future_candles("ETHUSDT", "4h", 200, 0)
        .unwrap();

    mock.assert();
    assert!(candles.is_empty());
}

//
// FUNDING & OPEN INTEREST
//

#[test]
fn funding_premium_keeps_rates_verbatim() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/binance/future/premium")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"{"premium":{"BTCUSDT":"0.0001","DOGEUSDT":"-0.00037500"}}"#)
        .create();

    let premium = client_for(&server).fetch_funding_premium().unwrap();

    mock.assert();
    assert_eq!(premium.premium.len(), 2);
    assert_eq!(premium.rate_for("BTCUSDT"), Some("0.0001"));
    assert_eq!(premium.rate_for("DOGEUSDT"), Some("-0.00037500"));
}

#[test]
fn open_interest_stats_send_pair_period_limit() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/binance/future/oi-stats")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pair".into(), "BTCUSDT".into()),
            Matcher::UrlEncoded("period".into(), "5m".into()),
            Matcher::UrlEncoded("limit".into(), "30".into()),
        ]))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(
            r#"[{"symbol":"BTCUSDT","sumOpenInterest":"20403.63700000",
                 "sumOpenInterestValue":"150570784.07809979","timestamp":1583127900000}]"#,
        )
        .create();

    let stats = client_for(&server)
        .fetch_open_interest_stats("BTCUSDT", "5m", 30)
        .unwrap();

    mock.assert();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].sum_open_interest, "20403.63700000");
    assert_eq!(stats[0].sum_open_interest_value, "150570784.07809979");
    assert_eq!(stats[0].timestamp, 1_583_127_900_000);
}

//
// METADATA & TICKERS
//

#[test]
fn exchange_info_decodes_object_root() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/binance/future/exchange-info")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(
            r#"{"timezone":"UTC","serverTime":1700000000000,"rateLimits":[],
                "symbols":[{"symbol":"BTCUSDT","status":"TRADING","baseAsset":"BTC","quoteAsset":"USDT",
                            "maintMarginPercent":"2.5000","triggerProtect":"0.0500"}]}"#,
        )
        .create();

    let info = client_for(&server).fetch_exchange_info().unwrap();

    mock.assert();
    assert_eq!(info.server_time, 1_700_000_000_000);
    let btc = info.symbol("BTCUSDT").unwrap();
    assert_eq!(btc.maint_margin_percent, "2.5000");
    assert_eq!(btc.trigger_protect, "0.0500");
}

#[test]
fn futures_book_ticker_goes_to_oi_stats_route() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/binance/future/oi-stats")
        .match_query(Matcher::Exact("symbol=BTCUSDT".into()))
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(
            r#"[{"symbol":"BTCUSDT","bidPrice":"37000.10","bidQty":"3.200",
                 "askPrice":"37000.20","askQty":"0.015","time":1700000000123}]"#,
        )
        .create();

    let tickers = client_for(&server).fetch_futures_book_ticker("BTCUSDT").unwrap();

    mock.assert();
    assert_eq!(tickers.len(), 1);
    assert_eq!(tickers[0].bid_qty, "3.200");
    assert_eq!(tickers[0].ask_price, "37000.20");
    assert_eq!(tickers[0].time, Some(1_700_000_000_123));
}

#[test]
fn null_premium_map_decodes_as_empty() {
    let mut server = Server::new();
    server
        .mock("GET", "/binance/future/premium")
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body(r#"{"premium":null}"#)
        .create();

    let premium = client_for(&server).fetch_funding_premium().unwrap();

    assert!(premium.premium.is_empty());
    assert_eq!(premium.rate_for("BTCUSDT"), None);
}

#[test]
fn null_candle_root_decodes_as_empty() {
    let mut server = Server::new();
    server
        .mock("GET", "/binance/future/kline")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", JSON)
        .with_body("null")
        .create();

    let candles = client_for(&server)
        .fetch_future_candles("BTCUSDT", "1m", 10, 0)
        .unwrap();

    assert!(candles.is_empty());
}
