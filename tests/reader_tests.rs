mod common;
use chrono::NaiveDateTime;
use common::{setup_workspace, write_input};
use rfidconv::core::reader::{ReadOutcome, parse_csv, parse_logged_at, read_records};
use rfidconv::errors::AppError;
use rfidconv::models::{RecordLayout, RecordMoment};

#[test]
fn test_read_missing_file_is_no_input() {
    let dir = setup_workspace("reader_missing");
    let outcome = read_records(&dir.join("absent.csv"), b';', RecordLayout::Combined)
        .expect("absent file is not an error");
    assert_eq!(outcome, ReadOutcome::NoInput);
}

#[test]
fn test_read_keeps_count_order_and_values() {
    let dir = setup_workspace("reader_order");
    let path = write_input(
        &dir,
        "in.csv",
        &[
            "10;ZZ9;05.05.2024;07:15:00",
            " 2 ;AA 1;06.05.2024;18:45:30",
            "10;ZZ9;05.05.2024;07:15:00",
        ],
    );

    let ReadOutcome::Rows(records) =
        read_records(&path, b';', RecordLayout::Combined).expect("read")
    else {
        panic!("expected rows");
    };

    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![10, 2, 10]
    );
    assert_eq!(records[1].rfid_number, "AA 1");
    assert_eq!(
        records[1].moment,
        RecordMoment::Combined {
            date_time: "2024-05-06 18:45:30".into()
        }
    );
}

#[test]
fn test_reformatted_moment_reparses_to_same_instant() {
    let content = b"id;rfid_number;date;time\n1;A;29.02.2024;23:59:59\n";
    let records = parse_csv(content, b';', RecordLayout::Split).expect("parse");

    let RecordMoment::Split { date, time } = &records[0].moment else {
        panic!("expected split layout");
    };
    let reparsed =
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
            .expect("reparse");
    assert_eq!(reparsed, records[0].logged_at);
    assert_eq!(Some(reparsed), parse_logged_at("29.02.2024", "23:59:59"));
}

#[test]
fn test_columns_in_any_order_and_extra_columns_ignored() {
    let content = b"time;note;date;rfid_number;id\n08:00:00;x;01.03.2024;AA001;1\n";
    let records = parse_csv(content, b';', RecordLayout::Combined).expect("parse");
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].rfid_number, "AA001");
}

#[test]
fn test_header_only_is_empty_rows() {
    let records = parse_csv(b"id;rfid_number;date;time\n", b';', RecordLayout::Combined)
        .expect("parse");
    assert!(records.is_empty());
}

#[test]
fn test_wrong_date_pattern_is_error() {
    let content = b"id;rfid_number;date;time\n1;AA001;2024-03-01;08:00:00\n";
    let err = parse_csv(content, b';', RecordLayout::Combined).unwrap_err();
    assert!(matches!(err, AppError::InvalidDateTime { line: 2, .. }));
}

#[test]
fn test_invalid_calendar_date_is_error() {
    let content = b"id;rfid_number;date;time\n1;AA001;31.02.2024;08:00:00\n";
    let err = parse_csv(content, b';', RecordLayout::Combined).unwrap_err();
    assert!(matches!(err, AppError::InvalidDateTime { .. }));
}

#[test]
fn test_non_numeric_id_is_error() {
    let content = b"id;rfid_number;date;time\nabc;AA001;01.03.2024;08:00:00\n";
    let err = parse_csv(content, b';', RecordLayout::Combined).unwrap_err();
    match err {
        AppError::InvalidId { value, line } => {
            assert_eq!(value, "abc");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_column_is_error() {
    let content = b"id;rfid;date;time\n1;AA001;01.03.2024;08:00:00\n";
    let err = parse_csv(content, b';', RecordLayout::Combined).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn { ref column, .. } if column == "rfid_number"));
}

#[test]
fn test_custom_delimiter() {
    let content = b"id,rfid_number,date,time\n4,DD4,10.10.2024,10:10:10\n";
    let records = parse_csv(content, b',', RecordLayout::Combined).expect("parse");
    assert_eq!(records[0].id, 4);
}

#[test]
fn test_leap_second_is_error() {
    let content = b"id;rfid_number;date;time\n1;A;01.03.2024;23:59:60\n";
    let err = parse_csv(content, b';', RecordLayout::Combined).unwrap_err();
    assert!(matches!(err, AppError::InvalidDateTime { line: 2, .. }));
    assert_eq!(parse_logged_at("01.03.2024", "23:59:60"), None);
    assert!(parse_logged_at("01.03.2024", "23:59:59").is_some());
}
