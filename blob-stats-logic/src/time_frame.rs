//! Symbolic time frames accepted by the stats endpoints and their
//! resolution into concrete calendar-date ranges.

use crate::error::ParseError;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeFrame {
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,
    #[strum(serialize = "7d")]
    #[serde(rename = "7d")]
    SevenDays,
    #[strum(serialize = "15d")]
    #[serde(rename = "15d")]
    FifteenDays,
    #[strum(serialize = "30d")]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[strum(serialize = "180d")]
    #[serde(rename = "180d")]
    HundredEightyDays,
    #[strum(serialize = "360d")]
    #[serde(rename = "360d")]
    ThreeHundredSixtyDays,
    #[strum(serialize = "All")]
    #[serde(rename = "All")]
    All,
}

/// Inclusive range of calendar days. `from <= to` always holds
/// for intervals produced by [`TimeFrame::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TimeFrame {
    /// Number of calendar days covered, `None` for [`TimeFrame::All`].
    pub fn days(&self) -> Option<u64> {
        match self {
            TimeFrame::OneDay => Some(1),
            TimeFrame::SevenDays => Some(7),
            TimeFrame::FifteenDays => Some(15),
            TimeFrame::ThirtyDays => Some(30),
            TimeFrame::HundredEightyDays => Some(180),
            TimeFrame::ThreeHundredSixtyDays => Some(360),
            TimeFrame::All => None,
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> TimeInterval {
        let epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();
        let from = match self.days() {
            Some(days) => today
                .checked_sub_days(Days::new(days - 1))
                .unwrap_or(epoch)
                .max(epoch),
            None => epoch,
        };
        let from = from.min(today);
        TimeInterval { from, to: today }
    }

    pub fn resolve_now(&self) -> TimeInterval {
        self.resolve(Utc::now().date_naive())
    }
}

/// Parses the optional `timeframe` request parameter,
/// falling back to `default` when it is missing or blank.
pub fn parse_time_frame(raw: Option<&str>, default: TimeFrame) -> Result<TimeFrame, ParseError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(default),
        Some(raw) => TimeFrame::from_str(raw).map_err(|_| ParseError::TimeFrame(raw.to_string())),
    }
}
