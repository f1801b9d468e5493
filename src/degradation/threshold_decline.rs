use serde::{Deserialize, Serialize};

use super::engine::{self, OverhaulPolicy, RunParams};
use super::stressors;
use super::{SimulationError, SimulationResult};

/// 임계값 오버홀 기반 효율 저하 시뮬레이션 입력.
///
/// 효율이 `overhaul_threshold` 이하로 떨어지면 오버홀이 발동한다.
/// 오버홀은 기준 효율을 BEP 비율 하락분만큼 깎은 값으로 되돌리며,
/// 그 값이 교체 하한선 미만이면 펌프는 교체 대상으로 판정된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdDeclineInput {
    /// 시뮬레이션 기간(년)
    pub years: u32,
    /// 초기 효율(%)
    pub initial_value: f64,
    /// 오버홀 1회당 BEP 비율 하락(%)
    pub overhaul_drop_percent: f64,
    /// 오버홀 발동 임계값(%)
    pub overhaul_threshold: f64,
    /// 모래 입자 농도(%)
    pub particle_concentration_pct: f64,
    /// 유체 평균 pH
    pub ph: f64,
    /// 염화물 농도(ppm)
    pub chloride_ppm: f64,
    /// 입구 압력(psig)
    pub input_pressure_psig: f64,
    /// 출구 압력(psig)
    pub output_pressure_psig: f64,
    /// 유량(usgpm) - 이 변형에서는 스트레서 입력이다
    pub flow_rate_usgpm: f64,
}

impl Default for ThresholdDeclineInput {
    fn default() -> Self {
        Self {
            years: 15,
            initial_value: 85.0,
            overhaul_drop_percent: 10.0,
            overhaul_threshold: 40.0,
            particle_concentration_pct: 10.0,
            ph: 8.0,
            chloride_ppm: 50.0,
            input_pressure_psig: 100.0,
            output_pressure_psig: 80.0,
            flow_rate_usgpm: 2000.0,
        }
    }
}

fn validate(input: &ThresholdDeclineInput) -> Result<(), SimulationError> {
    if input.years == 0 {
        return Err(SimulationError::InvalidParameter(
            "시뮬레이션 기간은 1년 이상이어야 합니다",
        ));
    }
    if !(input.initial_value.is_finite() && input.initial_value > 0.0) {
        return Err(SimulationError::InvalidParameter(
            "초기 효율은 0보다 커야 합니다",
        ));
    }
    if !(0.0..=100.0).contains(&input.overhaul_drop_percent) {
        return Err(SimulationError::InvalidParameter(
            "BEP 비율 하락은 0~100% 범위여야 합니다",
        ));
    }
    if !(input.overhaul_threshold.is_finite() && input.overhaul_threshold >= 0.0) {
        return Err(SimulationError::InvalidParameter(
            "오버홀 임계값은 0 이상이어야 합니다",
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
    if !(input.chloride_ppm.is_finite() && input.chloride_ppm >= 0.0) {
        return Err(SimulationError::InvalidParameter(
            "염화물 농도는 0 이상이어야 합니다",
        ));
    }
    if !(input.input_pressure_psig.is_finite() && input.input_pressure_psig >= 0.0) {
        return Err(SimulationError::InvalidParameter(
            "입구 압력은 0 이상이어야 합니다",
        ));
    }
    if !(input.output_pressure_psig.is_finite() && input.output_pressure_psig >= 0.0) {
        return Err(SimulationError::InvalidParameter(
            "출구 압력은 0 이상이어야 합니다",
        ));
    }
    if !(input.flow_rate_usgpm.is_finite() && input.flow_rate_usgpm >= 0.0) {
        return Err(SimulationError::InvalidParameter(
            "유량은 0 이상이어야 합니다",
        ));
    }
    Ok(())
}

/// 임계값 오버홀 + 교체 판정에 따른 효율 저하를 시뮬레이션한다.
///
/// 연간 저하율은 운전 조건으로부터 한 번 계산되어 9~11% 범위로 제한된다
/// ([`stressors::clamped_decay_fraction`]). 교체 판정으로 조기 종료되면
/// 마지막 기록값을 반복해 기록 수를 `years`에 맞춘다.
pub fn compute_threshold_decline(
    input: ThresholdDeclineInput,
) -> Result<SimulationResult, SimulationError> {
    validate(&input)?;
    let decay_fraction = stressors::clamped_decay_fraction(
        input.particle_concentration_pct,
        input.ph,
        input.chloride_ppm,
        input.input_pressure_psig,
        input.output_pressure_psig,
        input.flow_rate_usgpm,
    );
    Ok(engine::run(
        RunParams {
            years: input.years,
            initial_value: input.initial_value,
            overhaul_drop_percent: input.overhaul_drop_percent,
        },
        OverhaulPolicy::Threshold {
            threshold: input.overhaul_threshold,
            decay_fraction,
        },
    ))
}
