// @file: src/core/models.rs
// @description: Response records returned by the Binance proxy. Prices, quantities and fees stay decimal strings.
// @author: LAS.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};


//
// DECODE HELPERS
//

// The proxy marshals empty slices and maps as `null`; read those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}


//
// CANDLES
//

/// One futures kline bar as relayed by the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesCandle {
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub close_time: i64,
    pub quote_asset_volume: String,
    pub trade_num: i64,
    pub taker_buy_base_asset_volume: String,
    pub taker_buy_quote_asset_volume: String,
}

/// One spot kline bar. The volume breakdown is only present when the proxy forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotCandle {
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub close_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_asset_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_num: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taker_buy_base_asset_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taker_buy_quote_asset_volume: Option<String>,
}


//
// FUNDING & OPEN INTEREST
//

/// Funding premium snapshot keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingPremium {
    #[serde(deserialize_with = "null_as_default")]
    pub premium: HashMap<String, String>,
}

impl FundingPremium {
    pub fn rate_for(&self, symbol: &str) -> Option<&str> {
        self.premium.get(symbol).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInterestStat {
    pub symbol: String,
    pub sum_open_interest: String,
    pub sum_open_interest_value: String,
    pub timestamp: i64,
}


//
// EXCHANGE INFO
//

/// Futures exchange rules and symbol definitions.
///
/// Sections Binance added over time (`assets`, `exchangeFilters`) default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(default)]
    pub timezone: String,
    pub server_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate_limits: Vec<RateLimit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exchange_filters: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<AssetInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub symbols: Vec<SymbolInfo>,
}

impl ExchangeInfo {
    pub fn symbol(&self, name: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|s| s.symbol == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    pub rate_limit_type: String,
    pub interval: String,
    pub interval_num: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub asset: String,
    #[serde(default)]
    pub margin_available: bool,
    #[serde(default)]
    pub auto_asset_exchange: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub pair: String,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub delivery_date: i64,
    #[serde(default)]
    pub onboard_date: i64,
    pub status: String,
    #[serde(default)]
    pub maint_margin_percent: String,
    #[serde(default)]
    pub required_margin_percent: String,
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(default)]
    pub margin_asset: String,
    #[serde(default)]
    pub price_precision: i32,
    #[serde(default)]
    pub quantity_precision: i32,
    #[serde(default)]
    pub base_asset_precision: i32,
    #[serde(default)]
    pub quote_precision: i32,
    #[serde(default)]
    pub underlying_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub underlying_sub_type: Vec<String>,
    #[serde(default)]
    pub settle_plan: i64,
    #[serde(default)]
    pub trigger_protect: String,
    // Binance sends this key capitalised.
    #[serde(default, alias = "OrderType", deserialize_with = "null_as_default")]
    pub order_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_in_force: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Vec<BTreeMap<String, Value>>,
    #[serde(default)]
    pub liquidation_fee: String,
    #[serde(default)]
    pub market_take_bound: String,
}

impl SymbolInfo {
    /// Looks up a filter by its `filterType`, e.g. `PRICE_FILTER`.
    pub fn filter(&self, filter_type: &str) -> Option<&BTreeMap<String, Value>> {
        self.filters
            .iter()
            .find(|f| f.get("filterType").and_then(Value::as_str) == Some(filter_type))
    }
}


//
// TICKERS
//

/// Futures best bid/ask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Spot best bid/ask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotTicker {
    pub symbol: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
}


//
// WALLET METADATA
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinInfo {
    pub coin: String,
    #[serde(default)]
    pub name: String,
    pub free: String,
    pub locked: String,
    pub freeze: String,
    pub withdrawing: String,
    #[serde(default)]
    pub ipoable: String,
    #[serde(default)]
    pub ipoing: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub trading: bool,
    #[serde(default)]
    pub is_legal_money: bool,
    #[serde(default)]
    pub deposit_all_enable: bool,
    #[serde(default)]
    pub withdraw_all_enable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_list: Vec<Network>,
}

impl CoinInfo {
    pub fn default_network(&self) -> Option<&Network> {
        self.network_list.iter().find(|n| n.is_default)
    }
}

/// One deposit/withdrawal network of a coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub network: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub coin: String,
    #[serde(default)]
    pub address_regex: String,
    #[serde(default)]
    pub memo_regex: String,
    #[serde(default)]
    pub deposit_enable: bool,
    #[serde(default)]
    pub withdraw_enable: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub reset_address_status: bool,
    // true when the network needs a memo
    #[serde(default)]
    pub same_address: bool,
    #[serde(default)]
    pub min_confirm: u32,
    #[serde(default)]
    pub un_lock_confirm: u32,
    pub withdraw_fee: String,
    pub withdraw_min: String,
    pub withdraw_max: String,
    #[serde(default)]
    pub withdraw_integer_multiple: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub special_tips: String,
    // Only sent while deposits are closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_desc: Option<String>,
    // Only sent while withdrawals are closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdraw_desc: Option<String>,
}
