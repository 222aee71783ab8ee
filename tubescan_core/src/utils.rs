// src/utils.rs

use chrono::NaiveDate;
use std::future::Future;

/// One page of results from a paged upstream call.
///
/// `next` carries the opaque continuation cursor; `None` means the upstream
/// reported exhaustion (or the caller decided to stop early).
pub struct Page<T, C> {
    pub items: Vec<T>,
    pub next: Option<C>,
}

/// Drives a paged fetch until `limit` items are accumulated, the cursor runs
/// out, or `max_requests` pages have been fetched.
///
/// `fetch` receives the cursor from the previous page (`None` on the first
/// call) and the number of items still wanted. Upstream failures do not
/// propagate: the page loop stops at the failing call and the error is
/// returned alongside whatever was accumulated before it, so partial results
/// stay usable. The accumulated items are truncated to exactly `limit`.
pub async fn collect_paginated<T, C, E, F, Fut>(
    limit: usize,
    max_requests: usize,
    mut fetch: F,
) -> (Vec<T>, Option<E>)
where
    F: FnMut(Option<C>, usize) -> Fut,
    Fut: Future<Output = Result<Page<T, C>, E>>,
{
    let mut items: Vec<T> = Vec::new();
    let mut failure = None;

    if limit == 0 {
        return (items, failure);
    }

    let mut cursor: Option<C> = None;
    let mut requests = 0usize;

    while items.len() < limit && requests < max_requests {
        requests += 1;
        match fetch(cursor.take(), limit - items.len()).await {
            Ok(page) => {
                items.extend(page.items);
                match page.next {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    items.truncate(limit);
    (items, failure)
}

/// Inclusive start-of-day bound in RFC 3339, for `publishedAfter`.
pub fn start_of_day_utc(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

/// Inclusive end-of-day bound in RFC 3339, for `publishedBefore`.
pub fn end_of_day_utc(date: NaiveDate) -> String {
    format!("{}T23:59:59Z", date.format("%Y-%m-%d"))
}
