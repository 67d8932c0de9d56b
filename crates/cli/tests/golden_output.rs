//! End-to-end checks of the printed report.

use std::process::Command;

use langley::{alpha, solve_with_defaults};

#[test]
fn prints_the_four_line_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_cli"))
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "stdout was {stdout:?}");

    assert_eq!(lines[0], "Total iterations = 52");
    let slope = parse_value(lines[1], "Slope of Line Segment BK = ");
    let error = parse_value(lines[2], "Angle BKL Error = ");
    let alpha_deg = parse_value(lines[3], "Alpha = ");

    assert!((slope - 0.8390996311954261).abs() < 1e-13);
    assert!((error + 6.513967143462196e-11).abs() < 1e-13);
    assert!((alpha_deg - 40.0000000006101).abs() < 1e-12);
}

#[test]
fn report_matches_in_process_solve() {
    let output = Command::new(env!("CARGO_BIN_EXE_cli"))
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report = solve_with_defaults();
    let expected = format!(
        "Total iterations = {}\nSlope of Line Segment BK = {:.20}\nAngle BKL Error = {:.20}\nAlpha = {:.20}\n",
        report.iterations,
        report.slope,
        report.error,
        alpha(report.slope)
    );
    assert_eq!(String::from_utf8(output.stdout).expect("utf8 stdout"), expected);
}

/// Strip the label, check the fixed-point shape (exactly 20 fractional
/// digits), and parse the value.
fn parse_value(line: &str, label: &str) -> f64 {
    let rest = line
        .strip_prefix(label)
        .unwrap_or_else(|| panic!("missing label in {line:?}"));
    let (_, frac) = rest.split_once('.').expect("decimal point");
    assert_eq!(frac.len(), 20, "fractional digits in {line:?}");
    assert!(frac.bytes().all(|b| b.is_ascii_digit()));
    rest.parse().expect("parses as f64")
}
