//! Filter/sort view derivation
//!
//! Pure functions over the store contents, recomputed whenever the store or
//! the criteria change. "Today" is always injected by the caller so tests
//! control the clock.

use chrono::NaiveDate;
use shared::{Reservation, ReservationStatus};

/// Date filter selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Tomorrow,
    Future,
}

/// Active filter and search criteria
#[derive(Debug, Clone, Default)]
pub struct ViewCriteria {
    pub date_filter: DateFilter,
    pub search: String,
}

/// Counters for the dashboard stat cards, over the unfiltered store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub today: usize,
    pub future: usize,
}

fn parse_date(record: &Reservation) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").ok()
}

fn matches_date(record: &Reservation, filter: DateFilter, today: NaiveDate) -> bool {
    if record.date.is_empty() {
        // No date at all: wildcard, passes every filter.
        return true;
    }
    let Some(date) = parse_date(record) else {
        // Present but unparseable: only the unfiltered view shows it.
        return filter == DateFilter::All;
    };
    match filter {
        DateFilter::All => true,
        DateFilter::Today => date == today,
        DateFilter::Tomorrow => date == today + chrono::Days::new(1),
        DateFilter::Future => date >= today,
    }
}

fn matches_search(record: &Reservation, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let name_match = record.name.to_lowercase().contains(needle);
    let phone_match = record.phone.to_lowercase().contains(needle);
    let email_match = record
        .email
        .as_deref()
        .map(|e| e.to_lowercase().contains(needle))
        .unwrap_or(false);
    name_match || phone_match || email_match
}

/// Derive the visible, ordered subset of the store.
///
/// The date filter and the search are combined with logical AND; a
/// whitespace-only search matches everything. The result is ordered
/// newest-first by timestamp; records without a timestamp never move,
/// they keep the slot the backend returned them in.
pub fn visible<'a>(
    records: &'a [Reservation],
    criteria: &ViewCriteria,
    today: NaiveDate,
) -> Vec<&'a Reservation> {
    let needle = criteria.search.trim().to_lowercase();
    let mut rows: Vec<&Reservation> = records
        .iter()
        .filter(|r| matches_date(r, criteria.date_filter, today) && matches_search(r, &needle))
        .collect();

    sort_newest_first(&mut rows);
    rows
}

/// Order the timestamped rows newest-first among themselves, leaving every
/// untimestamped row in its original slot. Comparing a missing timestamp as
/// equal to everything is not a total order, so the rows that do carry one
/// are pulled out, sorted, and written back into their slots instead.
fn sort_newest_first(rows: &mut [&Reservation]) {
    let slots: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.timestamp.is_some())
        .map(|(i, _)| i)
        .collect();

    let mut timestamped: Vec<&Reservation> = slots.iter().map(|&i| rows[i]).collect();
    timestamped.sort_by_key(|r| std::cmp::Reverse(r.timestamp));

    for (&slot, row) in slots.iter().zip(timestamped) {
        rows[slot] = row;
    }
}

/// Statistics over the unfiltered store, independent of the active criteria.
///
/// Unlike the date filter, a record without a parseable date counts only
/// toward the total.
pub fn stats(records: &[Reservation], today: NaiveDate) -> DashboardStats {
    let today_count = records
        .iter()
        .filter(|r| parse_date(r) == Some(today))
        .count();
    let future = records
        .iter()
        .filter(|r| parse_date(r).is_some_and(|d| d >= today))
        .count();
    DashboardStats {
        total: records.len(),
        today: today_count,
        future,
    }
}

/// Sum of billing amounts over `rows`; only arrived reservations contribute.
pub fn total_amount_dh(rows: &[&Reservation]) -> u32 {
    rows.iter().map(|r| r.amount_dh()).sum()
}

/// The arrived-only subset of a derived view, in view order.
pub fn arrived_only<'a>(rows: &[&'a Reservation]) -> Vec<&'a Reservation> {
    rows.iter()
        .filter(|r| r.status == ReservationStatus::Arrived)
        .copied()
        .collect()
}
