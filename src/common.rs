//! Common types and utilities shared across queries, handlers and the GraphQL schema
use async_graphql::SimpleObject;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::errors::ServiceError;

/// Largest page a dashboard endpoint will return.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination metadata attached to every dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct PaginationMeta {
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 20)]
    pub size: u64,
    #[schema(example = 42)]
    pub total_items: u64,
    /// `ceil(total_items / size)`, never less than 1
    #[schema(example = 3)]
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u64, size: u64, total_items: u64) -> Self {
        let total_pages = if size == 0 {
            1
        } else {
            total_items.div_ceil(size).max(1)
        };
        Self {
            page,
            size,
            total_items,
            total_pages,
        }
    }
}

/// Rejects pages below 1 and sizes outside `1..=MAX_PAGE_SIZE`.
pub fn validate_page(page: u64, size: u64) -> Result<(), ServiceError> {
    if page < 1 {
        return Err(ServiceError::ValidationError(
            "page must be greater than or equal to 1".to_string(),
        ));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(ServiceError::ValidationError(format!(
            "size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// Slices an already ordered, fully materialized row set down to one page.
/// Pages past the end yield an empty vector.
pub fn page_window<T>(rows: Vec<T>, page: u64, size: u64) -> Vec<T> {
    let offset = page.saturating_sub(1).saturating_mul(size);
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    rows.into_iter().skip(offset).take(size).collect()
}

/// Which end of a date range a bare `YYYY-MM-DD` value should snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a date filter leniently.
///
/// Accepts RFC 3339, naive ISO datetimes and bare dates. A bare date covers
/// the whole day: start of day for [`DateBound::Start`], last instant of the
/// day for [`DateBound::End`]. Anything unparseable is logged and dropped so
/// the caller simply skips that bound.
pub fn parse_date_filter(raw: Option<&str>, bound: DateBound) -> Option<NaiveDateTime> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty())?;

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let time = match bound {
            DateBound::Start => NaiveTime::from_hms_opt(0, 0, 0)?,
            DateBound::End => NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)?,
        };
        return Some(date.and_time(time));
    }

    warn!(value, ?bound, "Ignoring malformed date filter");
    None
}

/// Treats blank strings the same as an absent filter.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// ISO-8601 rendering used for aggregate timestamps.
pub(crate) fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 20, 1)]
    #[case(1, 20, 1)]
    #[case(20, 20, 1)]
    #[case(21, 20, 2)]
    #[case(100, 7, 15)]
    fn total_pages_has_floor_of_one(#[case] total: u64, #[case] size: u64, #[case] pages: u64) {
        assert_eq!(PaginationMeta::new(1, size, total).total_pages, pages);
    }

    #[test]
    fn page_window_slices_and_handles_overflow() {
        let rows: Vec<u32> = (1..=45).collect();
        assert_eq!(page_window(rows.clone(), 1, 20).len(), 20);
        assert_eq!(page_window(rows.clone(), 3, 20), (41..=45).collect::<Vec<_>>());
        assert!(page_window(rows, 4, 20).is_empty());
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 100, true)]
    #[case(0, 20, false)]
    #[case(1, 0, false)]
    #[case(1, 101, false)]
    fn page_bounds(#[case] page: u64, #[case] size: u64, #[case] ok: bool) {
        assert_eq!(validate_page(page, size).is_ok(), ok);
    }

    #[rstest]
    #[case("2025-03-01", DateBound::Start, "2025-03-01T00:00:00")]
    #[case("2025-03-01", DateBound::End, "2025-03-01T23:59:59.999999")]
    #[case("2025-03-01T08:30:00", DateBound::Start, "2025-03-01T08:30:00")]
    #[case("2025-03-01 08:30:00", DateBound::End, "2025-03-01T08:30:00")]
    #[case("2025-03-01T08:30:00Z", DateBound::Start, "2025-03-01T08:30:00")]
    #[case("2025-03-01T10:30:00+02:00", DateBound::Start, "2025-03-01T08:30:00")]
    fn parses_supported_date_shapes(
        #[case] raw: &str,
        #[case] bound: DateBound,
        #[case] expected: &str,
    ) {
        let parsed = parse_date_filter(Some(raw), bound).unwrap();
        assert_eq!(format_timestamp(parsed), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("yesterday"))]
    #[case(Some("2025-13-45"))]
    fn malformed_or_missing_dates_are_ignored(#[case] raw: Option<&str>) {
        assert!(parse_date_filter(raw, DateBound::Start).is_none());
    }
}
