use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One OHLCV record for a single trading day
///
/// Bars are produced by the Kibot history parser with timestamps at UTC
/// midnight of the quoted day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bar {
    /// Day timestamp (UTC midnight)
    pub timestamp: DateTime<Utc>,

    /// Opening rate for the day
    #[schema(value_type = String, example = "1.0835")]
    pub open: Decimal,

    /// Highest rate for the day
    #[schema(value_type = String, example = "1.0891")]
    pub high: Decimal,

    /// Lowest rate for the day
    #[schema(value_type = String, example = "1.0802")]
    pub low: Decimal,

    /// Closing rate for the day
    #[schema(value_type = String, example = "1.0874")]
    pub close: Decimal,

    /// Volume traded for the day
    #[schema(value_type = String, example = "98210")]
    pub volume: Decimal,
}

impl Bar {
    /// Calculate bar range (high - low)
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Check if bar is bullish (close > open)
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Daily time series for one symbol
///
/// Bars are kept in the order the upstream returned them; no dedup and no
/// ordering checks are applied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailySeries {
    /// Currency pair the series belongs to (e.g., "EURUSD")
    pub symbol: String,

    /// Bars in upstream file order
    pub bars: Vec<Bar>,
}

impl DailySeries {
    /// Create an empty series for a symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Append a bar in file order
    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar in file order, if any
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn create_test_bar(open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap(),
            open,
            high,
            low,
            close,
            volume: dec!(105000),
        }
    }

    #[test]
    fn test_bar_range() {
        let bar = create_test_bar(dec!(1.1000), dec!(1.1010), dec!(1.0990), dec!(1.1005));
        assert_eq!(bar.range(), dec!(0.0020));
    }

    #[test]
    fn test_bullish_bar() {
        let bar = create_test_bar(dec!(1.1000), dec!(1.1010), dec!(1.0995), dec!(1.1008));
        assert!(bar.is_bullish());
    }

    #[test]
    fn test_series_append_order() {
        let mut series = DailySeries::new("EURUSD");
        assert!(series.is_empty());

        series.push(create_test_bar(dec!(1.10), dec!(1.11), dec!(1.09), dec!(1.105)));
        series.push(create_test_bar(dec!(1.105), dec!(1.12), dec!(1.10), dec!(1.11)));

        assert_eq!(series.len(), 2);
        assert_eq!(series.symbol, "EURUSD");
        assert_eq!(series.last().unwrap().close, dec!(1.11));
    }
}
