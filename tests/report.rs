use pump_lifetime_toolbox::degradation::{
    compute_interval_decline, compute_threshold_decline, IntervalDeclineInput,
    ThresholdDeclineInput,
};
use pump_lifetime_toolbox::report;

fn benign_threshold_input() -> ThresholdDeclineInput {
    ThresholdDeclineInput {
        years: 8,
        initial_value: 85.0,
        overhaul_drop_percent: 50.0,
        overhaul_threshold: 60.0,
        particle_concentration_pct: 0.0,
        ph: 7.0,
        chloride_ppm: 0.0,
        input_pressure_psig: 100.0,
        output_pressure_psig: 100.0,
        flow_rate_usgpm: 0.0,
    }
}

#[test]
fn summary_reports_decline_as_negative_change() {
    let res = compute_interval_decline(IntervalDeclineInput::default()).expect("interval calc");
    let summary = report::summarize(&res, 1500.0);
    assert!((summary.initial_value - 2800.0).abs() < 1e-9);
    assert!(summary.final_value < summary.initial_value);
    assert!(summary.percent_change < 0.0, "change={}", summary.percent_change);
    assert!(summary.replace_year.is_none());
}

#[test]
fn summary_carries_replacement_year() {
    let res = compute_threshold_decline(benign_threshold_input()).expect("threshold calc");
    let summary = report::summarize(&res, 50.0);
    assert_eq!(summary.replace_year, Some(5));
    assert_eq!(summary.failure_year, None);
    // 교체 판정 이후 값이 유지되므로 최종값은 마지막 기록값과 같다.
    assert!((summary.final_value - 61.965).abs() < 1e-9);
}

#[test]
fn flow_csv_layout() {
    let input = IntervalDeclineInput {
        years: 6,
        ..IntervalDeclineInput::default()
    };
    let res = compute_interval_decline(input).expect("interval calc");
    let csv = report::flow_rate_csv(&res);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Year,Flow Rate (usgpm),Overhaul Year");
    assert_eq!(lines[1], "1,2800.00,No");
    // 5년차는 오버홀 해
    assert!(lines[5].starts_with("5,"), "line={}", lines[5]);
    assert!(lines[5].ends_with(",Yes"), "line={}", lines[5]);
    assert!(lines[6].ends_with(",No"), "line={}", lines[6]);
}

#[test]
fn efficiency_csv_blanks_drop_after_replacement() {
    let res = compute_threshold_decline(benign_threshold_input()).expect("threshold calc");
    let csv = report::efficiency_csv(&res);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Year,Efficiency (%),Yearly Drop (%),Overhaul");
    assert_eq!(lines[1], "1,85.00,8.50,No");
    // 교체 판정(5년차) 이후 채워진 행은 하락량 칸이 빈다.
    assert!(lines[5].starts_with("5,61.9"), "line={}", lines[5]);
    assert!(lines[5].ends_with(",,No"), "line={}", lines[5]);
    assert_eq!(lines.len(), 9);
}
