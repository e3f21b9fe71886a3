//! Per-day view analytics.
//!
//! The platform reports raw view rows at day granularity; several rows may
//! land on the same day and must be summed. Charting downstream expects a
//! dense, date-ascending series with a zero-padding day on either side of
//! the observed range, so a single-point history still draws as a line.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw view row as returned by `GET /api/media/{id}/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    pub date: NaiveDate,
    pub views: u64,
}

/// One point of the aggregated series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyViews {
    pub date: NaiveDate,
    pub views: u64,
}

/// Column headings for the chart shape produced by [`chart_rows`].
pub const CHART_HEADER: [&str; 2] = ["Date", "Views"];

/// Sum raw view rows into a dense per-day series.
///
/// Counts are summed per distinct day. The output covers every day of the
/// inclusive range `[min - 1 day, max + 1 day]` in ascending order, with zero
/// for days that had no views. Empty input produces an empty series.
pub fn aggregate_views(events: &[ViewEvent]) -> Vec<DailyViews> {
    let mut summed_by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events {
        *summed_by_date.entry(event.date).or_insert(0) += event.views;
    }

    let (Some(&min_date), Some(&max_date)) =
        (summed_by_date.keys().next(), summed_by_date.keys().last())
    else {
        return Vec::new();
    };

    // Pad one day either side; at the calendar limits the range simply
    // starts/ends on the observed day instead.
    let start = min_date.pred_opt().unwrap_or(min_date);
    let end = max_date.succ_opt().unwrap_or(max_date);

    let mut series = Vec::new();
    let mut date = start;
    loop {
        series.push(DailyViews {
            date,
            views: summed_by_date.get(&date).copied().unwrap_or(0),
        });
        if date == end {
            break;
        }
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }
    series
}

/// The charting shape: a header row followed by one `[date, views]` row per
/// day of the padded series. Empty input yields the header row alone.
pub fn chart_rows(events: &[ViewEvent]) -> Vec<[String; 2]> {
    let mut rows = vec![[CHART_HEADER[0].to_string(), CHART_HEADER[1].to_string()]];
    for point in aggregate_views(events) {
        rows.push([point.date.format("%Y-%m-%d").to_string(), point.views.to_string()]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 3, d).unwrap()
    }

    fn event(d: u32, views: u64) -> ViewEvent {
        ViewEvent {
            date: day(d),
            views,
        }
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(aggregate_views(&[]).is_empty());
    }

    #[test]
    fn test_empty_input_chart_is_header_only() {
        let rows = chart_rows(&[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ["Date".to_string(), "Views".to_string()]);
    }

    #[test]
    fn test_duplicate_days_are_summed_and_gaps_filled() {
        // Days 5 and 7 observed; output must span 4..=8.
        let series = aggregate_views(&[event(5, 3), event(5, 4), event(7, 2)]);
        let expected: Vec<(u32, u64)> = vec![(4, 0), (5, 7), (6, 0), (7, 2), (8, 0)];
        assert_eq!(series.len(), expected.len());
        for (point, (d, views)) in series.iter().zip(expected) {
            assert_eq!(point.date, day(d));
            assert_eq!(point.views, views);
        }
    }

    #[test]
    fn test_single_point_is_padded_both_sides() {
        let series = aggregate_views(&[event(10, 9)]);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, day(9));
        assert_eq!(series[0].views, 0);
        assert_eq!(series[1].views, 9);
        assert_eq!(series[2].date, day(11));
        assert_eq!(series[2].views, 0);
    }

    #[test]
    fn test_output_is_contiguous_and_ascending() {
        let series = aggregate_views(&[event(20, 1), event(3, 2), event(12, 5), event(3, 1)]);
        assert_eq!(series.first().unwrap().date, day(2));
        assert_eq!(series.last().unwrap().date, day(21));
        for pair in series.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
        let total: u64 = series.iter().map(|p| p.views).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = aggregate_views(&[event(5, 3), event(7, 2)]);
        let backward = aggregate_views(&[event(7, 2), event(5, 3)]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_aggregation_crosses_month_boundary() {
        let jan31 = NaiveDate::from_ymd_opt(2018, 1, 31).unwrap();
        let feb1 = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap();
        let series = aggregate_views(&[
            ViewEvent {
                date: jan31,
                views: 4,
            },
            ViewEvent {
                date: feb1,
                views: 6,
            },
        ]);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2018, 1, 30).unwrap());
        assert_eq!(series[3].date, NaiveDate::from_ymd_opt(2018, 2, 2).unwrap());
    }

    #[test]
    fn test_chart_rows_format() {
        let rows = chart_rows(&[event(5, 7)]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], ["2018-03-04".to_string(), "0".to_string()]);
        assert_eq!(rows[2], ["2018-03-05".to_string(), "7".to_string()]);
    }
}
