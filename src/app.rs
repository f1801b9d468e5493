use crate::config::Config;
use crate::degradation::SimulationError;
use crate::i18n::{keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 시뮬레이션 입력 검증 오류
    Simulation(SimulationError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Simulation(e) => write!(f, "시뮬레이션 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<SimulationError> for AppError {
    fn from(value: SimulationError) -> Self {
        AppError::Simulation(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 시뮬레이션 입력 오류는 루프를 끊지 않고 메시지만 출력한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::FlowRateDecline => {
                report_simulation_error(tr, ui_cli::handle_flow_rate_decline(tr, config))?;
            }
            MenuChoice::EfficiencyDecline => {
                report_simulation_error(tr, ui_cli::handle_efficiency_decline(tr, config))?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 시뮬레이션 입력 오류만 사용자에게 보고하고 삼킨다. 그 외 오류는 전파한다.
fn report_simulation_error(tr: &Translator, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Err(AppError::Simulation(e)) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            Ok(())
        }
        other => other,
    }
}
