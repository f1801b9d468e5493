use pump_lifetime_toolbox::degradation::{
    compute_interval_decline, interval_decline::IntervalDeclineInput, stressors,
};

#[test]
fn decay_rate_from_particles_and_ph() {
    // 10% * 0.005 + |7 - 8| * 0.01 = 0.06
    let rate = stressors::exponential_decay_rate(10.0, 8.0);
    assert!((rate - 0.06).abs() < 1e-12, "rate={rate}");
    // 중성수 + 입자 없음이면 감쇠 없음
    assert!(stressors::exponential_decay_rate(0.0, 7.0).abs() < 1e-12);
}

#[test]
fn default_run_shape() {
    let res = compute_interval_decline(IntervalDeclineInput::default()).expect("interval calc");
    assert_eq!(res.records.len(), 15);
    assert!(res.replace_year.is_none());
    for (i, r) in res.records.iter().enumerate() {
        assert_eq!(r.year, i as u32 + 1);
        assert!(r.drop_amount.is_none());
    }
    // 오버홀은 5년 주기(5, 10, 15년차)에만 표시된다.
    let overhaul_years: Vec<u32> = res
        .records
        .iter()
        .filter(|r| r.overhauled)
        .map(|r| r.year)
        .collect();
    assert_eq!(overhaul_years, vec![5, 10, 15]);
}

#[test]
fn first_year_records_initial_value() {
    let res = compute_interval_decline(IntervalDeclineInput::default()).expect("interval calc");
    assert!((res.records[0].value - 2800.0).abs() < 1e-9);
}

#[test]
fn decay_and_overhaul_compound_yearly() {
    // 기본값: 초기 2800, 감쇠율 0.06, 5년 주기, 회당 10% 하락.
    let res = compute_interval_decline(IntervalDeclineInput::default()).expect("interval calc");
    // 5년차는 오버홀 해지만 기록값은 오버홀 직전 값: 2800 * e^{-0.06 * 4}
    let year5 = 2800.0 * (-0.24f64).exp();
    assert!(
        (res.records[4].value - year5).abs() < 1e-6,
        "year5={} expected={year5}",
        res.records[4].value
    );
    // 6년차부터 오버홀 하락(x0.9)이 반영된다: 2800 * 0.9 * e^{-0.06 * 5}
    let year6 = 2800.0 * 0.9 * (-0.30f64).exp();
    assert!(
        (res.records[5].value - year6).abs() < 1e-6,
        "year6={} expected={year6}",
        res.records[5].value
    );
}

#[test]
fn no_stressors_means_step_decline_only() {
    let input = IntervalDeclineInput {
        years: 6,
        initial_value: 1000.0,
        overhaul_drop_percent: 10.0,
        overhaul_interval_years: 5,
        particle_concentration_pct: 0.0,
        ph: 7.0,
    };
    let res = compute_interval_decline(input).expect("interval calc");
    // 감쇠율 0이면 오버홀 전까지 값이 유지된다.
    for r in &res.records[0..5] {
        assert!((r.value - 1000.0).abs() < 1e-9, "year {} = {}", r.year, r.value);
    }
    assert!((res.records[5].value - 900.0).abs() < 1e-9);
}

#[test]
fn failure_year_scans_in_order() {
    let res = compute_interval_decline(IntervalDeclineInput::default()).expect("interval calc");
    // 단조 감소 수열이므로 높은 임계값일수록 이른 연차가 나온다.
    let early = res.failure_year(2700.0).expect("high threshold");
    let late = res.failure_year(1800.0).expect("low threshold");
    assert!(early < late, "early={early} late={late}");
    assert!(res.failure_year(0.0).is_none());
}

#[test]
fn identical_inputs_give_identical_results() {
    let input = IntervalDeclineInput::default();
    let a = compute_interval_decline(input).expect("interval calc");
    let b = compute_interval_decline(input).expect("interval calc");
    assert_eq!(a, b);
}

#[test]
fn rejects_out_of_range_inputs() {
    let base = IntervalDeclineInput::default();
    assert!(compute_interval_decline(IntervalDeclineInput { years: 0, ..base }).is_err());
    assert!(compute_interval_decline(IntervalDeclineInput {
        overhaul_interval_years: 0,
        ..base
    })
    .is_err());
    assert!(compute_interval_decline(IntervalDeclineInput {
        initial_value: -10.0,
        ..base
    })
    .is_err());
    assert!(compute_interval_decline(IntervalDeclineInput {
        overhaul_drop_percent: 120.0,
        ..base
    })
    .is_err());
    assert!(compute_interval_decline(IntervalDeclineInput { ph: 15.0, ..base }).is_err());
    assert!(compute_interval_decline(IntervalDeclineInput {
        particle_concentration_pct: -1.0,
        ..base
    })
    .is_err());
    assert!(compute_interval_decline(IntervalDeclineInput {
        initial_value: f64::NAN,
        ..base
    })
    .is_err());
}
