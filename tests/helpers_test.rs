use chrono::{Duration, TimeZone, Utc};
use page_scaffold::{capitalize, format_date, parse_date, API_URL};

#[test]
fn test_format_date_across_a_year() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    for day in 0..366 {
        let date = start + Duration::days(day);
        let formatted = format_date(&date);
        assert_eq!(formatted.len(), 10);
        assert_eq!(parse_date(&formatted).unwrap().date_naive(), date.date_naive());
    }
}

#[test]
fn test_parse_then_format_cli_inputs() {
    assert_eq!(format_date(&parse_date("2024-02-29").unwrap()), "2024-02-29");
    assert_eq!(
        format_date(&parse_date("1999-12-31T22:00:00-03:00").unwrap()),
        "2000-01-01"
    );
    assert!(parse_date("31/12/1999").is_err());
}

#[test]
fn test_capitalize_words() {
    let titled: Vec<String> = "the quick brown fox".split(' ').map(capitalize).collect();
    assert_eq!(titled.join(" "), "The Quick Brown Fox");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_api_url_is_stable() {
    assert_eq!(API_URL, "https://api.example.com");
    assert!(url::Url::parse(API_URL).is_ok());
}
