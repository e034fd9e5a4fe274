use crate::core::errors::ExchangeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator of the canonical `BASE-QUOTE` notation
pub const CANONICAL_DELIMITER: char = '-';

/// The two spellings the exchange accepts for a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireForm {
    /// Query parameters: `BTC_TRY`
    Delimited,
    /// Order bodies: `BTCTRY`
    Compact,
}

impl WireForm {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Delimited => "_",
            Self::Compact => "",
        }
    }
}

/// Type-safe pair representation with validation
///
/// The library accepts pairs as `"BTC-TRY"`. The exchange wants `"BTC_TRY"`
/// in query strings and `"BTCTRY"` in order bodies. Every constructor,
/// deserialization included, goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    base: String,
    quote: String,
}

impl Symbol {
    /// Create a new symbol with validation
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Result<Self, ExchangeError> {
        let base = base.into();
        let quote = quote.into();
        validate_ticker(&base, "base")?;
        validate_ticker(&quote, "quote")?;
        Ok(Self { base, quote })
    }

    /// Parse the canonical `BASE-QUOTE` form
    pub fn parse(pair: &str) -> Result<Self, ExchangeError> {
        let mut parts = pair.split(CANONICAL_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) => Self::new(base, quote).map_err(|e| match e {
                ExchangeError::InvalidSymbol(reason) => {
                    ExchangeError::InvalidSymbol(format!("'{}': {}", pair, reason))
                }
                other => other,
            }),
            (_, None, _) => Err(ExchangeError::InvalidSymbol(format!(
                "'{}': expected BASE-QUOTE",
                pair
            ))),
            _ => Err(ExchangeError::InvalidSymbol(format!(
                "'{}': more than one '{}'",
                pair, CANONICAL_DELIMITER
            ))),
        }
    }

    /// Recover a pair from its compact wire form when the base length is known
    pub fn from_compact(compact: &str, base_len: usize) -> Result<Self, ExchangeError> {
        if !compact.is_char_boundary(base_len) {
            return Err(ExchangeError::InvalidSymbol(format!(
                "'{}': cannot split at {}",
                compact, base_len
            )));
        }
        let (base, quote) = compact.split_at(base_len);
        Self::new(base, quote)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn wire_form(&self, form: WireForm) -> String {
        format!("{}{}{}", self.base, form.separator(), self.quote)
    }

    /// `BTC_TRY`
    pub fn delimited(&self) -> String {
        self.wire_form(WireForm::Delimited)
    }

    /// `BTCTRY`
    pub fn compact(&self) -> String {
        self.wire_form(WireForm::Compact)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, CANONICAL_DELIMITER, self.quote)
    }
}

impl FromStr for Symbol {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ExchangeError;

    fn try_from(pair: String) -> Result<Self, Self::Error> {
        Self::parse(&pair)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

fn validate_ticker(ticker: &str, side: &str) -> Result<(), ExchangeError> {
    if ticker.is_empty() {
        return Err(ExchangeError::InvalidSymbol(format!("{} asset is empty", side)));
    }
    if !ticker.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ExchangeError::InvalidSymbol(format!(
            "{} asset '{}' must be uppercase letters",
            side, ticker
        )));
    }
    Ok(())
}

/// Convert a canonical pair into one of its wire forms
pub fn to_wire_form(pair: &str, form: WireForm) -> Result<String, ExchangeError> {
    Symbol::parse(pair).map(|symbol| symbol.wire_form(form))
}

/// Type-safe price representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, "price").map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe quantity representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Quantity {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, "quantity").map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_decimal(s: &str, what: &str) -> Result<Decimal, ExchangeError> {
    s.trim()
        .parse()
        .map_err(|e| ExchangeError::InvalidParameters(format!("invalid {} '{}': {}", what, s, e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl FromStr for OrderSide {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(ExchangeError::InvalidParameters(format!(
                "unknown order side '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderMethod {
    Market,
    Limit,
    StopMarket,
    StopLimit,
}

impl OrderMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::StopMarket => "stopMarket",
            Self::StopLimit => "stopLimit",
        }
    }
}

impl fmt::Display for OrderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order submission body
///
/// Built fresh for every submission and serialized as the JSON body of
/// `POST /api/v1/order`. Only the constructors below can build one, so
/// `pairSymbol` is always the compact form of a validated [`Symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIntent {
    quantity: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_price: Option<Price>,
    order_method: OrderMethod,
    order_type: OrderSide,
    pair_symbol: String,
}

impl OrderIntent {
    fn base(symbol: &Symbol, side: OrderSide, method: OrderMethod, quantity: Quantity) -> Self {
        Self {
            quantity,
            price: None,
            stop_price: None,
            order_method: method,
            order_type: side,
            pair_symbol: symbol.compact(),
        }
    }

    pub fn market(symbol: &Symbol, side: OrderSide, quantity: Quantity) -> Self {
        Self::base(symbol, side, OrderMethod::Market, quantity)
    }

    pub fn limit(symbol: &Symbol, side: OrderSide, price: Price, quantity: Quantity) -> Self {
        Self {
            price: Some(price),
            ..Self::base(symbol, side, OrderMethod::Limit, quantity)
        }
    }

    pub fn stop_market(
        symbol: &Symbol,
        side: OrderSide,
        stop_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            stop_price: Some(stop_price),
            ..Self::base(symbol, side, OrderMethod::StopMarket, quantity)
        }
    }

    pub fn stop_limit(
        symbol: &Symbol,
        side: OrderSide,
        stop_price: Price,
        limit_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            price: Some(limit_price),
            stop_price: Some(stop_price),
            ..Self::base(symbol, side, OrderMethod::StopLimit, quantity)
        }
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn price(&self) -> Option<Price> {
        self.price
    }

    pub fn stop_price(&self) -> Option<Price> {
        self.stop_price
    }

    pub fn order_method(&self) -> OrderMethod {
        self.order_method
    }

    pub fn order_type(&self) -> OrderSide {
        self.order_type
    }

    /// Compact wire form, e.g. `BTCTRY`
    pub fn pair_symbol(&self) -> &str {
        &self.pair_symbol
    }
}
