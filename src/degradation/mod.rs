//! 펌프 성능(유량/효율) 저하 시뮬레이션 코어.
//!
//! 오버홀 발동 방식이 다른 두 변형을 제공한다:
//! - 주기 방식: 정해진 연 주기마다 오버홀 ([`interval_decline`])
//! - 임계값 방식: 성능이 임계값 이하로 떨어지면 오버홀, 회복 불가 시 교체 판정
//!   ([`threshold_decline`])
//!
//! 두 변형 모두 [`engine`]의 공통 연 단위 루프를 공유한다.

mod engine;
pub mod interval_decline;
pub mod stressors;
pub mod threshold_decline;

pub use interval_decline::{compute_interval_decline, IntervalDeclineInput};
pub use threshold_decline::{compute_threshold_decline, ThresholdDeclineInput};

/// 교체 판정 하한선. 오버홀 후 기대 성능이 이 값 미만이면
/// 오버홀 대신 펌프 교체 대상으로 본다.
pub const REPLACEMENT_FLOOR: f64 = 50.0;

/// 시뮬레이션 한 해의 기록.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyRecord {
    /// 연차(1부터 시작)
    pub year: u32,
    /// 해당 연차 시작 시점의 성능값(usgpm 또는 %)
    pub value: f64,
    /// 그 해에 깎인 절대량. 임계값 방식에서만 기록된다.
    pub drop_amount: Option<f64>,
    /// 그 해에 오버홀이 수행되었는지 여부
    pub overhauled: bool,
}

/// 시뮬레이션 결과. 기록 수는 항상 요청한 연 수와 같다.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// 연차 순서대로 정렬된 기록(index + 1 == year)
    pub records: Vec<YearlyRecord>,
    /// 오버홀로도 회복 불가 판정이 내려진 첫 연차. 임계값 방식에서만 설정된다.
    pub replace_year: Option<u32>,
}

impl SimulationResult {
    /// 성능값이 `threshold` 이하로 처음 떨어지는 연차를 반환한다.
    pub fn failure_year(&self, threshold: f64) -> Option<u32> {
        predict_failure_year(&self.records, threshold)
    }
}

/// 시뮬레이션 입력 검증 오류. 루프 진입 전에 검사된다.
#[derive(Debug)]
pub enum SimulationError {
    /// 허용 범위를 벗어난 입력
    InvalidParameter(&'static str),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidParameter(msg) => write!(f, "잘못된 입력: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// `value <= threshold`를 처음 만족하는 연차(1부터)를 반환한다.
/// 만족하는 기록이 없거나 기록이 비어 있으면 None.
pub fn predict_failure_year(records: &[YearlyRecord], threshold: f64) -> Option<u32> {
    records.iter().find(|r| r.value <= threshold).map(|r| r.year)
}
