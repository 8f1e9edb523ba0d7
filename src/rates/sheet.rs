use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the CNB rate sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRow {
    pub country: String,
    pub currency_name: String,
    /// Number of currency units the rate is quoted for (e.g. 100 for JPY).
    pub unit_amount: String,
    pub currency_code: String,
    pub rate: String,
}

impl RateRow {
    /// CZK per one unit of the currency, or `None` if the numbers don't parse
    /// or the division is undefined (zero or overflowing unit amount).
    pub fn rate_per_unit(&self) -> Option<Decimal> {
        let rate = parse_czech_decimal(&self.rate)?;
        let amount = parse_czech_decimal(&self.unit_amount)?;
        rate.checked_div(amount)
    }
}

/// Parsed daily rate sheet.
///
/// ```text
/// 18.10.2024 #203
/// země|měna|množství|kód|kurz
/// EMU|euro|1|EUR|25,100
/// Japonsko|jen|100|JPY|15,512
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSheet {
    /// Publication date from the first header line, if it parses.
    pub published_on: Option<NaiveDate>,
    pub rows: Vec<RateRow>,
}

impl RateSheet {
    /// Parse a sheet. The first two lines are headers; data lines with fewer
    /// than five `|`-separated fields are skipped.
    pub fn parse(body: &str) -> Self {
        let mut lines = body.lines();
        let published_on = lines.next().and_then(parse_header_date);
        lines.next();

        let rows = lines
            .filter_map(|line| {
                let mut fields = line.split('|');
                Some(RateRow {
                    country: fields.next()?.to_string(),
                    currency_name: fields.next()?.to_string(),
                    unit_amount: fields.next()?.to_string(),
                    currency_code: fields.next()?.to_string(),
                    rate: fields.next()?.to_string(),
                })
            })
            .collect();

        Self { published_on, rows }
    }

    /// First row quoting `currency_code`.
    pub fn find(&self, currency_code: &str) -> Option<&RateRow> {
        self.rows.iter().find(|row| row.currency_code == currency_code)
    }

    /// CZK per one unit of `currency_code`.
    pub fn rate_for(&self, currency_code: &str) -> Option<Decimal> {
        self.find(currency_code).and_then(RateRow::rate_per_unit)
    }
}

/// Parse a number written with a decimal comma ("25,100").
pub fn parse_czech_decimal(s: &str) -> Option<Decimal> {
    s.trim().replace(',', ".").parse().ok()
}

fn parse_header_date(line: &str) -> Option<NaiveDate> {
    let date = line.split_whitespace().next()?;
    NaiveDate::parse_from_str(date, "%d.%m.%Y").ok()
}
