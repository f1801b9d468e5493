use pump_lifetime_toolbox::degradation::{
    compute_threshold_decline, predict_failure_year, stressors,
    threshold_decline::ThresholdDeclineInput, REPLACEMENT_FLOOR,
};

/// 스트레서가 전혀 없는 입력. 연간 저하율은 기준치 10%가 된다.
fn benign_fluid(years: u32, initial: f64, drop: f64, threshold: f64) -> ThresholdDeclineInput {
    ThresholdDeclineInput {
        years,
        initial_value: initial,
        overhaul_drop_percent: drop,
        overhaul_threshold: threshold,
        particle_concentration_pct: 0.0,
        ph: 7.0,
        chloride_ppm: 0.0,
        input_pressure_psig: 100.0,
        output_pressure_psig: 100.0,
        flow_rate_usgpm: 0.0,
    }
}

#[test]
fn decay_fraction_is_clamped_to_eleven_percent() {
    // 기본 운전 조건의 합산치는 0.42지만 상한 0.11에서 잘린다.
    let f = stressors::clamped_decay_fraction(10.0, 8.0, 50.0, 100.0, 80.0, 2000.0);
    assert!((f - 0.11).abs() < 1e-12, "fraction={f}");
    // 스트레서가 없으면 기준치 0.10 그대로.
    let base = stressors::clamped_decay_fraction(0.0, 7.0, 0.0, 100.0, 100.0, 0.0);
    assert!((base - 0.10).abs() < 1e-12, "fraction={base}");
}

#[test]
fn harsh_fluid_pins_yearly_loss_at_upper_bound() {
    // 가혹한 운전 조건에서도 연간 손실 비율은 상한 11%에 고정된다.
    let input = ThresholdDeclineInput {
        years: 10,
        initial_value: 85.0,
        overhaul_drop_percent: 5.0,
        overhaul_threshold: 60.0,
        particle_concentration_pct: 1.0,
        ph: 7.0,
        chloride_ppm: 1000.0,
        input_pressure_psig: 200.0,
        output_pressure_psig: 400.0,
        flow_rate_usgpm: 2000.0,
    };
    let res = compute_threshold_decline(input).expect("threshold calc");
    for r in &res.records {
        if let Some(drop) = r.drop_amount {
            let ratio = drop / r.value;
            assert!((ratio - 0.11).abs() < 1e-12, "year {} ratio={ratio}", r.year);
        }
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let input = ThresholdDeclineInput::default();
    let a = compute_threshold_decline(input).expect("threshold calc");
    let b = compute_threshold_decline(input).expect("threshold calc");
    assert_eq!(a, b);
}

#[test]
fn overhaul_resets_to_degraded_baseline() {
    // 초기 85%, 회당 10% 하락, 임계값 60%, 연간 저하율 10%.
    // 5년차에 55.77% <= 60% → 기준 효율 85 * 0.9 = 76.5%로 복구.
    let res = compute_threshold_decline(benign_fluid(8, 85.0, 10.0, 60.0))
        .expect("threshold calc");
    assert!(res.replace_year.is_none());
    let expected = [85.0, 76.5, 68.85, 61.965, 76.5, 68.85, 61.965, 68.85];
    for (r, want) in res.records.iter().zip(expected) {
        assert!(
            (r.value - want).abs() < 1e-9,
            "year {} = {} expected {want}",
            r.year,
            r.value
        );
    }
    let overhaul_years: Vec<u32> = res
        .records
        .iter()
        .filter(|r| r.overhauled)
        .map(|r| r.year)
        .collect();
    // 두 번째 오버홀은 낮아진 기준 76.5 * 0.9 = 68.85%로 복구한다.
    assert_eq!(overhaul_years, vec![5, 8]);
}

#[test]
fn yearly_drop_is_fraction_of_start_value() {
    let res = compute_threshold_decline(benign_fluid(3, 85.0, 10.0, 40.0))
        .expect("threshold calc");
    let drop1 = res.records[0].drop_amount.expect("drop recorded");
    assert!((drop1 - 8.5).abs() < 1e-9, "drop1={drop1}");
    let drop2 = res.records[1].drop_amount.expect("drop recorded");
    assert!((drop2 - 7.65).abs() < 1e-9, "drop2={drop2}");
}

#[test]
fn replacement_when_overhaul_cannot_recover() {
    // 회당 50% 하락이면 오버홀 후 기대 효율 85 * 0.5 = 42.5% < 교체 하한 50%.
    // 5년차에 임계값 도달 → 교체 판정, 이후 연차는 마지막 기록값으로 채운다.
    let res = compute_threshold_decline(benign_fluid(8, 85.0, 50.0, 60.0))
        .expect("threshold calc");
    assert_eq!(res.replace_year, Some(5));
    assert_eq!(res.records.len(), 8);
    let expected_head = [85.0, 76.5, 68.85, 61.965];
    for (r, want) in res.records.iter().zip(expected_head) {
        assert!((r.value - want).abs() < 1e-9, "year {} = {}", r.year, r.value);
    }
    for r in &res.records[4..] {
        assert!((r.value - 61.965).abs() < 1e-9, "pad year {} = {}", r.year, r.value);
        assert!(r.drop_amount.is_none());
        assert!(!r.overhauled);
    }
}

#[test]
fn immediate_replacement_pads_with_initial_value() {
    // 1년차부터 임계값 이하 + 회복 불가: 기록 없이 초기값으로만 채워진다.
    let res = compute_threshold_decline(benign_fluid(4, 52.0, 30.0, 55.0))
        .expect("threshold calc");
    assert!(52.0 * 0.7 < REPLACEMENT_FLOOR);
    assert_eq!(res.replace_year, Some(1));
    assert_eq!(res.records.len(), 4);
    for r in &res.records {
        assert!((r.value - 52.0).abs() < 1e-9);
        assert!(!r.overhauled);
    }
}

#[test]
fn failure_and_replacement_are_independent() {
    let res = compute_threshold_decline(benign_fluid(8, 85.0, 10.0, 60.0))
        .expect("threshold calc");
    // 62% 기준으로는 4년차(61.965%)가 첫 고장 연차다.
    assert_eq!(res.failure_year(62.0), Some(4));
    assert_eq!(res.failure_year(50.0), None);
    assert!(res.replace_year.is_none());
}

#[test]
fn failure_year_of_empty_sequence_is_none() {
    assert!(predict_failure_year(&[], 60.0).is_none());
    assert!(predict_failure_year(&[], 0.0).is_none());
}

#[test]
fn rejects_out_of_range_inputs() {
    let base = ThresholdDeclineInput::default();
    assert!(compute_threshold_decline(ThresholdDeclineInput { years: 0, ..base }).is_err());
    assert!(compute_threshold_decline(ThresholdDeclineInput {
        overhaul_threshold: -1.0,
        ..base
    })
    .is_err());
    assert!(compute_threshold_decline(ThresholdDeclineInput {
        chloride_ppm: f64::INFINITY,
        ..base
    })
    .is_err());
    assert!(compute_threshold_decline(ThresholdDeclineInput {
        input_pressure_psig: -5.0,
        ..base
    })
    .is_err());
    assert!(compute_threshold_decline(ThresholdDeclineInput {
        flow_rate_usgpm: -100.0,
        ..base
    })
    .is_err());
    assert!(compute_threshold_decline(ThresholdDeclineInput { ph: -0.5, ..base }).is_err());
}
