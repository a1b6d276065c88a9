use super::*;

#[test]
fn test_on_line_keeps_one_line() {
    let span = LineSpan::on_line(3, 5, 9);
    assert_eq!(span.start, LineCol::new(3, 5));
    assert_eq!(span.end, LineCol::new(3, 9));
    assert_eq!(span.to_string(), "3:5-3:9");
}

#[test]
fn test_location_display_uses_start() {
    let loc = Location::new("src/main.rs", LineSpan::on_line(10, 7, 10));
    assert_eq!(loc.to_string(), "src/main.rs:10:7");
}
