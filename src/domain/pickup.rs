use chrono::{Days, Local, NaiveDate};

use crate::error::PickupError;

/// Number of pickup days offered, starting with today.
pub const PICKUP_OPTION_COUNT: usize = 4;

/// Label format for a pickup day, e.g. `Sat Oct 17`.
const LABEL_FORMAT: &str = "%a %b %-d";

/// The pickup days offered for one order session.
///
/// Generated once when the session starts; the first entry is always the
/// day of creation, so "today" stays fixed even if the clock rolls over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupOptions {
    dates: Vec<NaiveDate>,
    labels: Vec<String>,
}

impl PickupOptions {
    /// Options starting from the local calendar date.
    pub fn today() -> Result<Self, PickupError> {
        Self::starting_on(Local::now().date_naive())
    }

    /// Options for `PICKUP_OPTION_COUNT` consecutive days beginning at `first`.
    ///
    /// Fails when the calendar runs out before the last day.
    pub fn starting_on(first: NaiveDate) -> Result<Self, PickupError> {
        let dates = (0..PICKUP_OPTION_COUNT as u64)
            .map(|offset| {
                first
                    .checked_add_days(Days::new(offset))
                    .ok_or(PickupError::OutOfRange(first))
            })
            .collect::<Result<Vec<NaiveDate>, PickupError>>()?;
        let labels = dates
            .iter()
            .map(|date| date.format(LABEL_FORMAT).to_string())
            .collect();
        Ok(Self { dates, labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Label of the same-day option.
    pub fn same_day(&self) -> &str {
        &self.labels[0]
    }

    pub fn is_same_day(&self, label: &str) -> bool {
        self.same_day() == label
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
