use chrono::{Datelike, NaiveDate};

use super::error::FaktorioError;

/// Yearly invoice number sequence.
///
/// Numbers look like `{prefix}{year}{counter}`, e.g. "2024001", "2024002",
/// or "FV2024001" with a prefix. The counter restarts every year.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    next: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// First sequence of the year, starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next: 1,
            zero_pad: 3,
        }
    }

    /// Resume after the last issued number.
    ///
    /// If `last` belongs to an earlier year than `year`, the counter restarts
    /// at 1. `last` must carry the same prefix and padding.
    pub fn continue_from(
        last: &str,
        prefix: impl Into<String>,
        year: i32,
    ) -> Result<Self, FaktorioError> {
        let prefix = prefix.into();
        let rest = last.strip_prefix(prefix.as_str()).ok_or_else(|| {
            FaktorioError::Numbering(format!("'{last}' does not start with prefix '{prefix}'"))
        })?;

        if rest.len() < 5 || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FaktorioError::Numbering(format!(
                "'{last}' is not a {{prefix}}{{year}}{{counter}} number"
            )));
        }

        let (year_part, counter_part) = rest.split_at(4);
        let last_year: i32 = year_part
            .parse()
            .map_err(|_| FaktorioError::Numbering(format!("invalid year in '{last}'")))?;
        let last_counter: u64 = counter_part
            .parse()
            .map_err(|_| FaktorioError::Numbering(format!("invalid counter in '{last}'")))?;

        if last_year > year {
            return Err(FaktorioError::Numbering(format!(
                "last number '{last}' is from {last_year}, after {year}"
            )));
        }

        let next = if last_year == year {
            last_counter.checked_add(1).ok_or_else(|| {
                FaktorioError::Numbering(format!("counter of '{last}' cannot be continued"))
            })?
        } else {
            1
        };
        Ok(Self {
            prefix,
            year,
            next,
            zero_pad: counter_part.len(),
        })
    }

    /// Set zero-padding width of the counter (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Issue the next number.
    pub fn next_number(&mut self) -> String {
        let number = self.peek();
        self.next = self.next.saturating_add(1);
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{}{:0>width$}",
            self.prefix,
            self.year,
            self.next,
            width = self.zero_pad
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Switch to the year of `date` if it is later, restarting the counter.
    /// Returns true if the year changed.
    pub fn roll_over(&mut self, date: NaiveDate) -> bool {
        if date.year() > self.year {
            self.year = date.year();
            self.next = 1;
            true
        } else {
            false
        }
    }
}
