//! Client-side filtering over a loaded challan collection.
//!
//! Filtering never re-fetches: it is a pure predicate over the last
//! successful load. Record dates arrive as display strings
//! (`DD/MM/YYYY`, optionally followed by a comma and a time, which is
//! ignored); a record whose date fails to parse never matches — it is
//! excluded, not an error.

use chrono::NaiveDate;

use crate::models::Challan;

/// Filter inputs as captured from the list page controls.
#[derive(Clone, Debug, PartialEq)]
pub struct ChallanFilter {
    pub from: Option<NaiveDate>,
    /// Inclusive through the end of the day.
    pub to: Option<NaiveDate>,
    /// "all", or a status matched case-insensitively.
    pub status: String,
}

impl Default for ChallanFilter {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            status: "all".to_string(),
        }
    }
}

/// Parse the display date carried on each record.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split(',').next()?.trim();
    NaiveDate::parse_from_str(date_part, "%d/%m/%Y").ok()
}

/// Parse an HTML date-input value (`YYYY-MM-DD`).
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Apply the filter to a collection.
pub fn apply(challans: &[Challan], filter: &ChallanFilter) -> Vec<Challan> {
    challans
        .iter()
        .filter(|c| matches(c, filter))
        .cloned()
        .collect()
}

fn matches(challan: &Challan, filter: &ChallanFilter) -> bool {
    let Some(date) = parse_record_date(&challan.date) else {
        return false;
    };
    if let Some(from) = filter.from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = filter.to {
        if date > to {
            return false;
        }
    }
    filter.status == "all" || challan.status.eq_ignore_ascii_case(&filter.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challan(date: &str, status: &str) -> Challan {
        Challan {
            date: date.to_string(),
            status: status.to_string(),
            ..Challan::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_includes_boundaries_and_drops_unparsable() {
        let challans = vec![
            challan("01/03/2024", "pending"),
            challan("15/03/2024,10:00", "delivered"),
            challan("N/A", "pending"),
        ];
        let filter = ChallanFilter {
            from: Some(date(2024, 3, 1)),
            to: Some(date(2024, 3, 15)),
            status: "all".to_string(),
        };
        let result = apply(&challans, &filter);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].date, "01/03/2024");
        assert_eq!(result[1].date, "15/03/2024,10:00");
    }

    #[test]
    fn unparsable_dates_never_match_even_unfiltered() {
        let challans = vec![challan("N/A", "pending"), challan("02/04/2024", "pending")];
        let result = apply(&challans, &ChallanFilter::default());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn status_matches_case_insensitively() {
        let challans = vec![
            challan("01/03/2024", "Delivered"),
            challan("02/03/2024", "pending"),
        ];
        let filter = ChallanFilter {
            status: "delivered".to_string(),
            ..ChallanFilter::default()
        };
        let result = apply(&challans, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, "Delivered");
    }

    #[test]
    fn from_excludes_earlier_records() {
        let challans = vec![
            challan("28/02/2024", "pending"),
            challan("01/03/2024", "pending"),
        ];
        let filter = ChallanFilter {
            from: Some(date(2024, 3, 1)),
            ..ChallanFilter::default()
        };
        assert_eq!(apply(&challans, &filter).len(), 1);
    }

    #[test]
    fn input_date_parses_html_format() {
        assert_eq!(parse_input_date("2024-03-15"), Some(date(2024, 3, 15)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15/03/2024"), None);
    }

    #[test]
    fn record_date_ignores_time_suffix() {
        assert_eq!(
            parse_record_date("15/03/2024,10:00"),
            Some(date(2024, 3, 15))
        );
        assert_eq!(parse_record_date("15/03/2024"), Some(date(2024, 3, 15)));
        assert_eq!(parse_record_date("2024-03-15"), None);
    }
}
