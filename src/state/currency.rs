//! Currency converter state

use super::debounce::DebouncedChannel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Shown instead of a conversion when the amount is not a number
pub const INVALID_AMOUNT_MESSAGE: &str = "Not a valid number";

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Krw,
    Usd,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Krw, Currency::Usd, Currency::Jpy];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Krw => "KRW",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Krw => "South Korean Won",
            Currency::Usd => "US Dollar",
            Currency::Jpy => "Japanese Yen",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Krw => "₩",
            Currency::Usd => "$",
            Currency::Jpy => "¥",
        }
    }

    /// Next currency in `ALL`, wrapping around
    pub fn next(&self) -> Currency {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Source of exchange rates, expressed as units per one KRW
#[cfg_attr(test, mockall::automock)]
pub trait RateTable: Send + Sync {
    fn rate(&self, currency: Currency) -> Option<f64>;
}

/// The built-in fixed rates
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRates;

impl RateTable for FixedRates {
    fn rate(&self, currency: Currency) -> Option<f64> {
        Some(match currency {
            Currency::Krw => 1.0,
            Currency::Usd => 1.0 / 1350.0,
            Currency::Jpy => 1.0 / 9.0,
        })
    }
}

/// Convert through KRW. Returns 0 when either rate is unknown.
pub fn convert(rates: &dyn RateTable, amount: f64, from: Currency, to: Currency) -> f64 {
    match (rates.rate(from), rates.rate(to)) {
        (Some(source), Some(target)) => amount / source * target,
        _ => 0.0,
    }
}

/// Render the conversion for display, e.g. `0.74 $`.
pub fn format_conversion(
    rates: &dyn RateTable,
    amount: &str,
    from: Currency,
    to: Currency,
) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) => format!("{:.2} {}", convert(rates, value, from, to), to.symbol()),
        Err(_) => INVALID_AMOUNT_MESSAGE.to_string(),
    }
}

/// Inputs of one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: String,
    pub source: Currency,
    pub target: Currency,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            amount: "1000".to_string(),
            source: Currency::Krw,
            target: Currency::Usd,
        }
    }
}

/// Converter whose output follows its inputs after a quiet period.
///
/// The initial request is converted once the first quiet period elapses.
pub struct CurrencyConverter {
    request: watch::Sender<ConversionRequest>,
    output: DebouncedChannel<String>,
}

impl CurrencyConverter {
    pub fn new(quiet: Duration) -> Self {
        Self::with_rates(quiet, Arc::new(FixedRates))
    }

    pub fn with_rates(quiet: Duration, rates: Arc<dyn RateTable>) -> Self {
        let (request, request_rx) = watch::channel(ConversionRequest::default());
        let output = DebouncedChannel::spawn_primed(
            "converter",
            request_rx,
            quiet,
            String::new(),
            move |req: &ConversionRequest| {
                Some(format_conversion(
                    rates.as_ref(),
                    &req.amount,
                    req.source,
                    req.target,
                ))
            },
        );
        Self { request, output }
    }

    pub fn request(&self) -> ConversionRequest {
        self.request.borrow().clone()
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        let amount = amount.into();
        self.request.send_modify(|req| req.amount = amount);
    }

    pub fn set_source(&self, currency: Currency) {
        self.request.send_modify(|req| req.source = currency);
    }

    pub fn set_target(&self, currency: Currency) {
        self.request.send_modify(|req| req.target = currency);
    }

    /// Swap source and target currencies
    pub fn swap(&self) {
        self.request
            .send_modify(|req| std::mem::swap(&mut req.source, &mut req.target));
    }

    /// Latest converted text; empty until the first conversion settles
    pub fn converted(&self) -> String {
        self.output.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.output.subscribe()
    }
}
