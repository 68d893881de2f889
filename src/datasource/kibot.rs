use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Bar, DailySeries};

/// Kibot HTTP API base URL
const DEFAULT_BASE_URL: &str = "http://api.kibot.com/";

/// Date format the Kibot API expects (MM/DD/YYYY)
const KIBOT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Trailing window covered by a daily fetch: 365 days in seconds
const HISTORY_WINDOW_SECS: i64 = 31_536_000;

/// Client for the Kibot historical data API
///
/// Fetches daily forex bars over the free guest tier and parses the CSV
/// response into a [`DailySeries`].
pub struct KibotClient {
    client: Client,
    base_url: String,
}

impl KibotClient {
    /// Create a client against the public Kibot endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the daily series for the last 365 days
    ///
    /// An unreachable or rejecting upstream and an unparseable body are
    /// indistinguishable to the caller: both yield `None` ("no data
    /// available"), never an error.
    pub async fn fetch_daily_series(&self, symbol: &str) -> Option<DailySeries> {
        let end = Utc::now();
        let start = end - Duration::seconds(HISTORY_WINDOW_SECS);

        let query = self.build_query(symbol, start, end);

        let body = match self.client.get(&query).send().await {
            Ok(response) if response.status().is_success() => response.text().await.ok(),
            Ok(response) => {
                tracing::error!(
                    "bad external api request: Kibot returned {}",
                    response.status()
                );
                None
            }
            Err(e) => {
                tracing::error!("bad external api request: {}", e);
                None
            }
        };

        build_daily_series(body.as_deref(), symbol)
    }

    /// Build the history query URL for a symbol and date range
    fn build_query(&self, symbol: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!(
            "{}?action=history&user=guest&password=guest&type=forex&symbol={}&interval=daily&startdate={}&enddate={}",
            self.base_url,
            symbol,
            start.format(KIBOT_DATE_FORMAT),
            end.format(KIBOT_DATE_FORMAT),
        )
    }
}

impl Default for KibotClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a raw Kibot response body to a daily series
///
/// An absent body (upstream rejected the call) or any malformed line yields
/// no series rather than a partial one.
fn build_daily_series(body: Option<&str>, symbol: &str) -> Option<DailySeries> {
    let body = body?;

    let mut series = DailySeries::new(symbol);

    for line in body.lines() {
        match parse_bar(line) {
            Some(bar) => series.push(bar),
            None => {
                tracing::error!("could not map response");
                return None;
            }
        }
    }

    Some(series)
}

/// Parse one `date,open,high,low,close,volume` CSV line
///
/// Extra trailing fields are ignored; fewer than six fields, a bad date, or
/// a bad number all count as malformed.
fn parse_bar(line: &str) -> Option<Bar> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return None;
    }

    let date = NaiveDate::parse_from_str(fields[0], KIBOT_DATE_FORMAT).ok()?;
    let timestamp = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);

    Some(Bar {
        timestamp,
        open: Decimal::from_str(fields[1]).ok()?,
        high: Decimal::from_str(fields[2]).ok()?,
        low: Decimal::from_str(fields[3]).ok()?,
        close: Decimal::from_str(fields[4]).ok()?,
        volume: Decimal::from_str(fields[5]).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_series_well_formed_body() {
        let body = "04/01/2025,1.0790,1.0835,1.0781,1.0822,91500\n\
                    04/02/2025,1.0822,1.0871,1.0810,1.0868,88200\n\
                    04/03/2025,1.0868,1.0902,1.0845,1.0851,94100";

        let series = build_daily_series(Some(body), "EURUSD").unwrap();

        assert_eq!(series.symbol, "EURUSD");
        assert_eq!(series.len(), 3);

        let first = &series.bars[0];
        assert_eq!(
            first.timestamp,
            Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(first.open, dec!(1.0790));
        assert_eq!(first.high, dec!(1.0835));
        assert_eq!(first.low, dec!(1.0781));
        assert_eq!(first.close, dec!(1.0822));
        assert_eq!(first.volume, dec!(91500));

        // bars keep upstream file order
        assert_eq!(series.last().unwrap().close, dec!(1.0851));
    }

    #[test]
    fn test_absent_body_yields_no_series() {
        assert!(build_daily_series(None, "EURUSD").is_none());
    }

    #[test]
    fn test_error_page_body_yields_no_series() {
        // Kibot reports errors as plain text in a 200 body
        assert!(build_daily_series(Some("405 Data Not Found."), "EURUSD").is_none());
    }

    #[test]
    fn test_malformed_line_abandons_parse() {
        let body = "04/01/2025,1.0790,1.0835,1.0781,1.0822,91500\n\
                    04/02/2025,1.0822,not-a-number,1.0810,1.0868,88200";

        assert!(build_daily_series(Some(body), "EURUSD").is_none());
    }

    #[test]
    fn test_short_line_is_malformed() {
        assert!(parse_bar("04/01/2025,1.0790,1.0835").is_none());
    }

    #[test]
    fn test_bad_date_is_malformed() {
        assert!(parse_bar("2025-04-01,1.0790,1.0835,1.0781,1.0822,91500").is_none());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let bar = parse_bar("04/01/2025,1.0790,1.0835,1.0781,1.0822,91500,extra").unwrap();
        assert_eq!(bar.volume, dec!(91500));
    }

    #[test]
    fn test_empty_body_yields_empty_series() {
        let series = build_daily_series(Some(""), "EURUSD").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_build_query_parameters() {
        let client = KibotClient::with_base_url("http://api.kibot.com/");
        let start = Utc.with_ymd_and_hms(2024, 4, 5, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 4, 5, 12, 0, 0).unwrap();

        let query = client.build_query("EURUSD", start, end);

        assert!(query.starts_with("http://api.kibot.com/?action=history"));
        assert!(query.contains("&user=guest"));
        assert!(query.contains("&password=guest"));
        assert!(query.contains("&type=forex"));
        assert!(query.contains("&symbol=EURUSD"));
        assert!(query.contains("&interval=daily"));
        assert!(query.contains("&startdate=04/05/2024"));
        assert!(query.contains("&enddate=04/05/2025"));
    }
}
