use simfin_names::model::DuplicateReport;
use simfin_names::report::{report_duplicates, write_report};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn no_duplicates_produce_no_output() {
    assert!(report_duplicates(&[]).is_empty());
    assert!(report_duplicates(&strings(&["CLOSE", "REVENUE"])).is_empty());
}

#[test]
fn duplicates_are_listed_under_a_count_header() {
    let lines = report_duplicates(&strings(&["CLOSE", "SHARE_PRICE", "CLOSE", "CLOSE"]));

    assert_eq!(lines, vec!["Duplicates: 2", "- CLOSE", "- CLOSE", ""]);
}

#[test]
fn write_report_emits_names_then_shortcuts() {
    let report = DuplicateReport {
        names: strings(&["Close"]),
        shortcuts: strings(&["SHARE_PRICE", "TICKER"]),
    };
    let mut buffer = Vec::new();

    write_report(&mut buffer, &report).expect("report written");

    assert_eq!(
        String::from_utf8(buffer).expect("utf-8 report"),
        "Duplicates: 1\n- Close\n\nDuplicates: 2\n- SHARE_PRICE\n- TICKER\n\n"
    );
}

#[test]
fn empty_report_writes_nothing() {
    let mut buffer = Vec::new();

    write_report(&mut buffer, &DuplicateReport::default()).expect("report written");

    assert!(buffer.is_empty());
    assert!(DuplicateReport::default().is_empty());
}
