//! 두 오버홀 정책이 공유하는 연 단위 시뮬레이션 루프.

use super::{SimulationResult, YearlyRecord, REPLACEMENT_FLOOR};

/// 오버홀 발동 정책. 트리거 조건과 리셋 산식만 다르고 루프 골격은 같다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum OverhaulPolicy {
    /// 고정 주기(연)마다 오버홀. 감쇠율은 매년 지수적으로 적용된다.
    FixedInterval { interval_years: u32, decay_rate: f64 },
    /// 성능이 임계값 이하로 떨어지면 오버홀. 오버홀 후 기대 성능이
    /// [`REPLACEMENT_FLOOR`] 미만이면 교체 판정으로 조기 종료한다.
    Threshold { threshold: f64, decay_fraction: f64 },
}

/// 정책과 무관한 공통 파라미터.
#[derive(Debug, Clone, Copy)]
pub(super) struct RunParams {
    pub years: u32,
    pub initial_value: f64,
    pub overhaul_drop_percent: f64,
}

/// 연 단위 루프를 수행한다. 입력 검증은 호출 측(compute_*) 책임이다.
pub(super) fn run(params: RunParams, policy: OverhaulPolicy) -> SimulationResult {
    let retain = 1.0 - params.overhaul_drop_percent / 100.0;
    let mut records: Vec<YearlyRecord> = Vec::with_capacity(params.years as usize);
    let mut current = params.initial_value;
    let mut baseline = params.initial_value;
    let mut replace_year = None;

    for year in 1..=params.years {
        match policy {
            OverhaulPolicy::FixedInterval {
                interval_years,
                decay_rate,
            } => {
                let overhauled = year % interval_years == 0;
                // 오버홀 해에도 기록되는 값은 오버홀 직전 값이다.
                // 오버홀·감쇠 효과는 다음 해 시작값에 반영된다.
                records.push(YearlyRecord {
                    year,
                    value: current,
                    drop_amount: None,
                    overhauled,
                });
                if overhauled {
                    current *= retain;
                }
                current *= (-decay_rate).exp();
            }
            OverhaulPolicy::Threshold {
                threshold,
                decay_fraction,
            } => {
                let mut overhauled = false;
                if current <= threshold {
                    let post_overhaul = baseline * retain;
                    if post_overhaul < REPLACEMENT_FLOOR {
                        // 오버홀로도 회복 불가. 이 해는 기록하지 않는다.
                        replace_year = Some(year);
                        break;
                    }
                    current = post_overhaul;
                    baseline = post_overhaul;
                    overhauled = true;
                }
                let drop_amount = current * decay_fraction;
                records.push(YearlyRecord {
                    year,
                    value: current,
                    drop_amount: Some(drop_amount),
                    overhauled,
                });
                current = (current - drop_amount).max(0.0);
            }
        }
    }

    // 교체 판정으로 조기 종료한 경우 마지막 기록값을 반복해 연 수를 채운다.
    // 1년차에 바로 교체 판정이 나면 기록이 없으므로 초기값으로 채운다.
    let pad_value = records.last().map_or(params.initial_value, |r| r.value);
    for year in (records.len() as u32 + 1)..=params.years {
        records.push(YearlyRecord {
            year,
            value: pad_value,
            drop_amount: None,
            overhauled: false,
        });
    }

    SimulationResult {
        records,
        replace_year,
    }
}
