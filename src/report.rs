//! 시뮬레이션 결과의 요약 지표와 CSV 내보내기.

use crate::degradation::SimulationResult;

/// 결과 요약 지표.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetrics {
    /// 1년차 시작 성능값
    pub initial_value: f64,
    /// 마지막 연차 성능값
    pub final_value: f64,
    /// 초기 대비 변화율(%). 감소하면 음수.
    pub percent_change: f64,
    /// 고장 임계값 이하로 처음 떨어지는 연차
    pub failure_year: Option<u32>,
    /// 교체 판정 연차(임계값 방식만)
    pub replace_year: Option<u32>,
}

/// 결과 시퀀스에서 요약 지표를 계산한다.
/// `failure_threshold`는 시뮬레이션에 쓰인 오버홀 임계값과 별개의 고장 기준이다.
pub fn summarize(result: &SimulationResult, failure_threshold: f64) -> SummaryMetrics {
    let initial_value = result.records.first().map_or(0.0, |r| r.value);
    let final_value = result.records.last().map_or(0.0, |r| r.value);
    let percent_change = if initial_value > 0.0 {
        (final_value - initial_value) / initial_value * 100.0
    } else {
        0.0
    };
    SummaryMetrics {
        initial_value,
        final_value,
        percent_change,
        failure_year: result.failure_year(failure_threshold),
        replace_year: result.replace_year,
    }
}

/// 주기 방식(유량) 결과를 CSV 문자열로 만든다. 값은 소수 둘째 자리까지.
pub fn flow_rate_csv(result: &SimulationResult) -> String {
    let mut out = String::from("Year,Flow Rate (usgpm),Overhaul Year\n");
    for r in &result.records {
        let flag = if r.overhauled { "Yes" } else { "No" };
        out.push_str(&format!("{},{:.2},{}\n", r.year, r.value, flag));
    }
    out
}

/// 임계값 방식(효율) 결과를 CSV 문자열로 만든다.
/// 교체 판정 이후 채워진 연차는 하락량 칸을 비워 둔다.
pub fn efficiency_csv(result: &SimulationResult) -> String {
    let mut out = String::from("Year,Efficiency (%),Yearly Drop (%),Overhaul\n");
    for r in &result.records {
        let drop = r
            .drop_amount
            .map_or(String::new(), |d| format!("{d:.2}"));
        let flag = if r.overhauled { "Yes" } else { "No" };
        out.push_str(&format!("{},{:.2},{},{}\n", r.year, r.value, drop, flag));
    }
    out
}
