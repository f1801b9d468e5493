//! 유체 조건(스트레서)이 연간 성능 저하에 기여하는 계수.
//!
//! 계수는 물리 모델이 아니라 경험적 선형 결합이다. 단위 기준:
//! 입자 농도 %, 염화물 ppm, 압력 psi(g), 유량 usgpm.

/// 모래 입자 농도 1%당 저하 계수
pub const PARTICLE_COEFF: f64 = 0.005;
/// pH가 중성(7)에서 1 벗어날 때마다의 저하 계수
pub const PH_DEVIATION_COEFF: f64 = 0.01;
/// 염화물 1 ppm당 저하 계수
pub const CHLORIDE_COEFF: f64 = 0.001;
/// 입출구 차압 1 psi당 저하 계수
pub const PRESSURE_DIFF_COEFF: f64 = 0.0005;
/// 유량 1 usgpm당 저하 계수
pub const FLOW_COEFF: f64 = 0.0001;

/// 임계값 방식의 기본 연간 저하율(10%)
pub const BASE_DECAY_FRACTION: f64 = 0.10;
/// 연간 저하율 하한(9%)
pub const DECAY_FRACTION_MIN: f64 = 0.09;
/// 연간 저하율 상한(11%)
pub const DECAY_FRACTION_MAX: f64 = 0.11;

/// 주기 방식에 쓰이는 지수 감쇠율을 계산한다.
/// 매년 성능에 `exp(-rate)`가 곱해진다.
pub fn exponential_decay_rate(particle_concentration_pct: f64, ph: f64) -> f64 {
    particle_concentration_pct * PARTICLE_COEFF + (7.0 - ph).abs() * PH_DEVIATION_COEFF
}

/// 임계값 방식에 쓰이는 연간 저하율을 계산한다.
/// 조건이 아무리 가혹해도 결과는 9~11% 범위로 제한된다.
pub fn clamped_decay_fraction(
    particle_concentration_pct: f64,
    ph: f64,
    chloride_ppm: f64,
    input_pressure_psig: f64,
    output_pressure_psig: f64,
    flow_rate_usgpm: f64,
) -> f64 {
    let raw = BASE_DECAY_FRACTION
        + particle_concentration_pct * PARTICLE_COEFF
        + (7.0 - ph).abs() * PH_DEVIATION_COEFF
        + chloride_ppm * CHLORIDE_COEFF
        + (input_pressure_psig - output_pressure_psig).abs() * PRESSURE_DIFF_COEFF
        + flow_rate_usgpm * FLOW_COEFF;
    raw.clamp(DECAY_FRACTION_MIN, DECAY_FRACTION_MAX)
}
