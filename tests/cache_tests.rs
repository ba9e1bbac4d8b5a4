use chrono::NaiveDate;
use pontolog::core::infer::AlternationPolicy;
use pontolog::db::cache::TtlCache;
use std::path::Path;
use std::thread;
use std::time::Duration;

mod common;
use common::{punch_line, service_with_ttl, setup_test_db, write_punch_file};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn fresh_entry_is_returned() {
    let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_secs(60));

    cache.put("k".to_string(), 42);
    assert_eq!(cache.get(&"k".to_string()), Some(42));
    assert_eq!(cache.get(&"missing".to_string()), None);
}

#[test]
fn expired_entry_is_evicted() {
    let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_millis(5));

    cache.put("k".to_string(), 42);
    thread::sleep(Duration::from_millis(20));
    assert_eq!(cache.get(&"k".to_string()), None);

    // a re-put starts a fresh TTL window
    cache.put("k".to_string(), 7);
    assert_eq!(cache.get(&"k".to_string()), Some(7));
}

#[test]
fn clear_drops_everything() {
    let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_secs(60));

    cache.put("a".to_string(), 1);
    cache.put("b".to_string(), 2);
    cache.clear();
    assert_eq!(cache.get(&"a".to_string()), None);
    assert_eq!(cache.get(&"b".to_string()), None);
}

#[test]
fn range_reads_stay_cached_inside_the_ttl_window() {
    let db = setup_test_db("cache_stale");
    let mut service = service_with_ttl(&db, 60);

    let first = write_punch_file(
        "cache_stale_a",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T16:00:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&first), "3", None, None, &AlternationPolicy)
        .expect("first import");

    let rows = service
        .compute_hours(None, None, d("2025-03-10"), d("2025-03-11"), false, false)
        .expect("report");
    assert_eq!(rows.len(), 1);

    // a second day lands inside the cached range; the same query keeps
    // answering from the cache until the TTL expires
    let second = write_punch_file(
        "cache_stale_b",
        &[
            punch_line("2025-03-11T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-11T16:00:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&second), "3", None, None, &AlternationPolicy)
        .expect("second import");

    let cached = service
        .compute_hours(None, None, d("2025-03-10"), d("2025-03-11"), false, false)
        .expect("report");
    assert_eq!(cached.len(), 1);
}

#[test]
fn zero_ttl_reads_through_on_every_call() {
    let db = setup_test_db("cache_zero_ttl");
    let mut service = service_with_ttl(&db, 0);

    let first = write_punch_file(
        "cache_zero_a",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T16:00:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&first), "3", None, None, &AlternationPolicy)
        .expect("first import");

    let rows = service
        .compute_hours(None, None, d("2025-03-10"), d("2025-03-11"), false, false)
        .expect("report");
    assert_eq!(rows.len(), 1);

    let second = write_punch_file(
        "cache_zero_b",
        &[
            punch_line("2025-03-11T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-11T16:00:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&second), "3", None, None, &AlternationPolicy)
        .expect("second import");

    let fresh = service
        .compute_hours(None, None, d("2025-03-10"), d("2025-03-11"), false, false)
        .expect("report");
    assert_eq!(fresh.len(), 2);
}
