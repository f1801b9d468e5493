use serde::{Deserialize, Serialize};

use super::engine::{self, OverhaulPolicy, RunParams};
use super::stressors;
use super::{SimulationError, SimulationResult};

/// 주기 오버홀 기반 유량 저하 시뮬레이션 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalDeclineInput {
    /// 시뮬레이션 기간(년)
    pub years: u32,
    /// 초기 유량(usgpm)
    pub initial_value: f64,
    /// 오버홀 1회당 성능 하락(%)
    pub overhaul_drop_percent: f64,
    /// 오버홀 주기(년)
    pub overhaul_interval_years: u32,
    /// 모래 입자 농도(%)
    pub particle_concentration_pct: f64,
    /// 유체 평균 pH
    pub ph: f64,
}

impl Default for IntervalDeclineInput {
    fn default() -> Self {
        Self {
            years: 15,
            initial_value: 2800.0,
            overhaul_drop_percent: 10.0,
            overhaul_interval_years: 5,
            particle_concentration_pct: 10.0,
            ph: 8.0,
        }
    }
}

fn validate(input: &IntervalDeclineInput) -> Result<(), SimulationError> {
    if input.years == 0 {
        return Err(SimulationError::InvalidParameter(
            "시뮬레이션 기간은 1년 이상이어야 합니다",
        ));
    }
    if !(input.initial_value.is_finite() && input.initial_value > 0.0) {
        return Err(SimulationError::InvalidParameter(
            "초기 유량은 0보다 커야 합니다",
        ));
    }
    if !(0.0..=100.0).contains(&input.overhaul_drop_percent) {
        return Err(SimulationError::InvalidParameter(
            "오버홀 하락률은 0~100% 범위여야 합니다",
        ));
    }
    if input.overhaul_interval_years == 0 {
        return Err(SimulationError::InvalidParameter(
            "오버홀 주기는 1년 이상이어야 합니다",
        ));
    }
    if !(input.particle_concentration_pct.is_finite() && input.particle_concentration_pct >= 0.0) {
        return Err(SimulationError::InvalidParameter(
            "입자 농도는 0 이상이어야 합니다",
        ));
    }
    if !(0.0..=14.0).contains(&input.ph) {
        return Err(SimulationError::InvalidParameter(
            "pH는 0~14 범위여야 합니다",
        ));
    }
    Ok(())
}

/// 주기 오버홀 + 운전 조건 감쇠에 따른 유량 저하를 시뮬레이션한다.
///
/// 매년 연초 값을 기록한 뒤, 오버홀 해이면 `(1 - 하락률/100)`을 곱하고,
/// 이어서 무조건 `exp(-감쇠율)`을 곱한다. 기록 수는 항상 `years`와 같다.
pub fn compute_interval_decline(
    input: IntervalDeclineInput,
) -> Result<SimulationResult, SimulationError> {
    validate(&input)?;
    let decay_rate =
        stressors::exponential_decay_rate(input.particle_concentration_pct, input.ph);
    Ok(engine::run(
        RunParams {
            years: input.years,
            initial_value: input.initial_value,
            overhaul_drop_percent: input.overhaul_drop_percent,
        },
        OverhaulPolicy::FixedInterval {
            interval_years: input.overhaul_interval_years,
            decay_rate,
        },
    ))
}
