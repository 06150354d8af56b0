use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::{CoreError, CoreResult, Flight};

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>, // Absent means route-only search
}

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeQuery {
    pub fn validate(&self) -> CoreResult<()> {
        if self.start > self.end {
            return Err(CoreError::InvalidQuery(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min: f64,
    pub max: f64,
}

impl PriceRangeQuery {
    pub fn validate(&self) -> CoreResult<()> {
        if self.min.is_nan() || self.max.is_nan() {
            return Err(CoreError::InvalidQuery("price bounds must be numbers".to_string()));
        }
        if self.min > self.max {
            return Err(CoreError::InvalidQuery(format!(
                "min price {} is above max price {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub hours: Option<u32>,
}

/// Half-open departure window `[start, end)` on local wall-clock time.
///
/// Built on full timestamps, so a margin that runs past midnight carries
/// into departures on the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DepartureWindow {
    pub fn upcoming(date: NaiveDate, time: NaiveTime, margin_hours: u32) -> Self {
        let start = date.and_time(time);
        let end = start
            .checked_add_signed(Duration::hours(i64::from(margin_hours)))
            .unwrap_or(NaiveDateTime::MAX);
        Self { start, end }
    }

    pub fn contains(&self, flight: &Flight) -> bool {
        let departure = flight.departure();
        departure >= self.start && departure < self.end
    }
}
