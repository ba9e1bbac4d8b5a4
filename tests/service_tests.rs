use chrono::NaiveDate;
use pontolog::core::infer::AlternationPolicy;
use pontolog::db::queries::{load_punches_by_day, UpsertOutcome};
use pontolog::errors::AppError;
use pontolog::models::direction::Direction;
use std::path::Path;

mod common;
use common::{punch_line, service_for, setup_test_db, write_punch_file};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn import_labels_punches_by_alternation_and_persists_them() {
    let db = setup_test_db("svc_import");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_import",
        &[
            punch_line("2025-03-10T09:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T09:05:00-0300", "12345678901", ""),
            punch_line("2025-03-10T12:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T12:03:00-0300", "12345678901", ""),
        ],
    );

    let summary = service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");
    assert_eq!(summary.inserted, 4);
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.skipped_lines, 0);

    let punches = load_punches_by_day(&service.pool.conn, "12345678901", d("2025-03-10"))
        .expect("load punches");
    let directions: Vec<Direction> = punches.iter().map(|p| p.direction).collect();
    assert_eq!(
        directions,
        vec![
            Direction::Entrada,
            Direction::Saida,
            Direction::Entrada,
            Direction::Saida,
        ]
    );
}

#[test]
fn reimporting_the_same_file_updates_instead_of_duplicating() {
    let db = setup_test_db("svc_reimport");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_reimport",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T12:00:00-0300", "12345678901", ""),
        ],
    );

    service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("first import");
    let summary = service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("second import");

    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.updated, 2);

    let punches = load_punches_by_day(&service.pool.conn, "12345678901", d("2025-03-10"))
        .expect("load punches");
    assert_eq!(punches.len(), 2);
}

#[test]
fn import_skips_malformed_lines_and_keeps_the_rest() {
    let db = setup_test_db("svc_malformed");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_malformed",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("not-a-timestamp-at-all!!", "12345678901", ""),
            punch_line("2025-03-10T12:00:00-0300", "12345678901", ""),
        ],
    );

    let summary = service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped_lines, 1);
}

#[test]
fn import_honors_the_date_window() {
    let db = setup_test_db("svc_window");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_window",
        &[
            punch_line("2025-03-09T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-11T08:00:00-0300", "12345678901", ""),
        ],
    );

    let summary = service
        .import_file(
            Path::new(&file),
            "3",
            Some(d("2025-03-10")),
            Some(d("2025-03-10")),
            &AlternationPolicy,
        )
        .expect("import");

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.ignored_records, 2);
}

#[test]
fn classify_day_reads_back_what_import_wrote() {
    let db = setup_test_db("svc_classify");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_classify",
        &[
            punch_line("2025-03-10T08:02:00-0300", "12345678901", ""),
            punch_line("2025-03-10T12:01:00-0300", "12345678901", ""),
            punch_line("2025-03-10T13:03:00-0300", "12345678901", ""),
            punch_line("2025-03-10T18:05:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");

    let record = service
        .classify_day("12345678901", d("2025-03-10"))
        .expect("classify");
    assert_eq!(record.display(pontolog::models::slots::SlotKind::Entrada), "08:02:00");
    assert_eq!(record.display(pontolog::models::slots::SlotKind::Saida), "18:05:00");
}

#[test]
fn compute_hours_groups_and_sorts_by_name_then_date() {
    let db = setup_test_db("svc_hours");
    let mut service = service_for(&db);

    service
        .register_employee("12345678901", "Zelia Souza", "3")
        .expect("register");
    service
        .register_employee("98765432109", "Andre Lima", "3")
        .expect("register");

    let file = write_punch_file(
        "svc_hours",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T16:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T08:00:00-0300", "98765432109", ""),
            punch_line("2025-03-10T18:00:00-0300", "98765432109", ""),
        ],
    );
    service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");

    let rows = service
        .compute_hours(Some("3"), None, d("2025-03-10"), d("2025-03-10"), false, false)
        .expect("report");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Andre Lima");
    assert_eq!(rows[0].worked_hhmm(), "10:00");
    assert_eq!(rows[0].overtime_hhmm(), "02:00");
    assert_eq!(rows[1].name, "Zelia Souza");
    assert_eq!(rows[1].worked_hhmm(), "08:00");
    assert_eq!(rows[1].shortfall_hhmm(), "00:00");
}

#[test]
fn include_empty_produces_full_shortfall_rows() {
    let db = setup_test_db("svc_empty");
    let mut service = service_for(&db);

    service
        .register_employee("12345678901", "Zelia Souza", "3")
        .expect("register");

    // no punches at all in the range
    let rows = service
        .compute_hours(Some("3"), None, d("2025-03-10"), d("2025-03-11"), false, true)
        .expect("report");

    assert_eq!(rows.len(), 2);
    for r in &rows {
        assert_eq!(r.worked_hhmm(), "00:00");
        assert_eq!(r.shortfall_hhmm(), "08:00");
    }

    let filtered = service
        .compute_hours(Some("3"), None, d("2025-03-10"), d("2025-03-11"), false, false)
        .expect("report");
    assert!(filtered.is_empty());
}

#[test]
fn correction_appends_one_punch_and_one_audit_entry() {
    let db = setup_test_db("svc_correct");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_correct",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T12:00:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");

    let outcome = service
        .record_correction("12345678901", d("2025-03-10"), "retorno_almoco", "13:00:00", "tester")
        .expect("correction");
    assert_eq!(outcome, UpsertOutcome::Inserted);

    let punches = load_punches_by_day(&service.pool.conn, "12345678901", d("2025-03-10"))
        .expect("load punches");
    assert_eq!(punches.len(), 3);

    let corrected = punches
        .iter()
        .find(|p| p.time().to_string() == "13:00:00")
        .expect("corrected punch");
    assert_eq!(corrected.direction, Direction::Entrada);

    let audit = service.corrections(Some("12345678901")).expect("audit");
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].old_value, "00:00:00");
    assert_eq!(audit[0].new_value, "13:00:00");
    assert_eq!(audit[0].actor, "tester");
}

#[test]
fn resubmitting_a_correction_does_not_duplicate_the_punch() {
    let db = setup_test_db("svc_correct_twice");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_correct_twice",
        &[
            punch_line("2025-03-10T08:00:00-0300", "12345678901", ""),
            punch_line("2025-03-10T12:00:00-0300", "12345678901", ""),
        ],
    );
    service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");

    service
        .record_correction("12345678901", d("2025-03-10"), "retorno_almoco", "13:00:00", "tester")
        .expect("first correction");
    let outcome = service
        .record_correction("12345678901", d("2025-03-10"), "retorno_almoco", "13:00:00", "tester")
        .expect("second correction");
    assert_eq!(outcome, UpsertOutcome::Updated);

    let punches = load_punches_by_day(&service.pool.conn, "12345678901", d("2025-03-10"))
        .expect("load punches");
    assert_eq!(punches.len(), 3);
}

#[test]
fn malformed_correction_time_is_rejected_without_writing() {
    let db = setup_test_db("svc_correct_bad");
    let mut service = service_for(&db);

    let file = write_punch_file(
        "svc_correct_bad",
        &[punch_line("2025-03-10T08:00:00-0300", "12345678901", "")],
    );
    service
        .import_file(Path::new(&file), "3", None, None, &AlternationPolicy)
        .expect("import");

    let err = service
        .record_correction("12345678901", d("2025-03-10"), "saida", "25:99:00", "tester")
        .expect_err("must reject");
    assert!(matches!(err, AppError::Correction(_)));

    let punches = load_punches_by_day(&service.pool.conn, "12345678901", d("2025-03-10"))
        .expect("load punches");
    assert_eq!(punches.len(), 1);
    assert!(service.corrections(None).expect("audit").is_empty());
}

#[test]
fn correction_for_unknown_employee_is_rejected() {
    let db = setup_test_db("svc_correct_unknown");
    let mut service = service_for(&db);

    let err = service
        .record_correction("00000000000", d("2025-03-10"), "entrada", "08:00:00", "tester")
        .expect_err("must reject");
    assert!(matches!(err, AppError::Correction(_)));
}

#[test]
fn invalid_slot_name_is_rejected() {
    let db = setup_test_db("svc_bad_slot");
    let mut service = service_for(&db);

    let err = service
        .record_correction("12345678901", d("2025-03-10"), "almoco", "12:00:00", "tester")
        .expect_err("must reject");
    assert!(matches!(err, AppError::InvalidSlot(_)));
}
