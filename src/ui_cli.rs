use std::fs;
use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::degradation::{
    compute_interval_decline, compute_threshold_decline, SimulationResult,
};
use crate::i18n::{keys, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FlowRateDecline,
    EfficiencyDecline,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_FLOW_DECLINE));
    println!("{}", tr.t(keys::MAIN_MENU_EFFICIENCY_DECLINE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FlowRateDecline),
            "2" => return Ok(MenuChoice::EfficiencyDecline),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 유량 저하(주기 오버홀) 메뉴를 처리한다.
pub fn handle_flow_rate_decline(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLOW_HEADING));
    let mut input = cfg.flow_defaults;
    input.years = read_u32(tr, tr.t(keys::PROMPT_YEARS))?;
    input.initial_value = read_f64(tr, tr.t(keys::PROMPT_INITIAL_FLOW))?;
    let failure_threshold = read_f64(tr, tr.t(keys::PROMPT_FLOW_FAILURE_THRESHOLD))?;
    input.overhaul_interval_years = read_u32(tr, tr.t(keys::PROMPT_OVERHAUL_INTERVAL))?;
    input.overhaul_drop_percent = read_f64(tr, tr.t(keys::PROMPT_OVERHAUL_DROP))?;
    input.particle_concentration_pct = read_f64(tr, tr.t(keys::PROMPT_PARTICLE))?;
    input.ph = read_f64(tr, tr.t(keys::PROMPT_PH))?;

    let result = compute_interval_decline(input)?;
    cfg.flow_defaults = input;

    print_flow_table(tr, &result);
    print_summary(tr, &result, failure_threshold, false);
    offer_csv_export(tr, &report::flow_rate_csv(&result))?;
    Ok(())
}

/// 효율 저하(임계값 오버홀) 메뉴를 처리한다.
pub fn handle_efficiency_decline(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EFFICIENCY_HEADING));
    let mut input = cfg.efficiency_defaults;
    input.years = read_u32(tr, tr.t(keys::PROMPT_YEARS))?;
    input.initial_value = read_f64(tr, tr.t(keys::PROMPT_INITIAL_EFFICIENCY))?;
    input.overhaul_drop_percent = read_f64(tr, tr.t(keys::PROMPT_BEP_DROP))?;
    input.overhaul_threshold = read_f64(tr, tr.t(keys::PROMPT_OVERHAUL_THRESHOLD))?;
    input.particle_concentration_pct = read_f64(tr, tr.t(keys::PROMPT_PARTICLE))?;
    input.ph = read_f64(tr, tr.t(keys::PROMPT_PH))?;
    input.chloride_ppm = read_f64(tr, tr.t(keys::PROMPT_CHLORIDE))?;
    input.input_pressure_psig = read_f64(tr, tr.t(keys::PROMPT_INPUT_PRESSURE))?;
    input.output_pressure_psig = read_f64(tr, tr.t(keys::PROMPT_OUTPUT_PRESSURE))?;
    input.flow_rate_usgpm = read_f64(tr, tr.t(keys::PROMPT_FLOW_STRESSOR))?;
    let failure_threshold =
        read_f64_or(tr, tr.t(keys::PROMPT_EFF_FAILURE_THRESHOLD), 50.0)?;

    let result = compute_threshold_decline(input)?;
    cfg.efficiency_defaults = input;

    print_efficiency_table(tr, &result);
    print_summary(tr, &result, failure_threshold, true);
    offer_csv_export(tr, &report::efficiency_csv(&result))?;
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "auto".to_string(),
        "2" => "ko".to_string(),
        "3" => "en-us".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn print_flow_table(tr: &Translator, result: &SimulationResult) {
    println!("{}", tr.t(keys::TABLE_HEADING));
    println!(
        "{:>4}  {:>12}  {}",
        tr.t(keys::TABLE_COL_YEAR),
        tr.t(keys::TABLE_COL_FLOW),
        tr.t(keys::TABLE_COL_OVERHAUL)
    );
    for r in &result.records {
        let flag = if r.overhauled {
            tr.t(keys::TABLE_YES)
        } else {
            tr.t(keys::TABLE_NO)
        };
        println!("{:>4}  {:>12.2}  {}", r.year, r.value, flag);
    }
}

fn print_efficiency_table(tr: &Translator, result: &SimulationResult) {
    println!("{}", tr.t(keys::TABLE_HEADING));
    println!(
        "{:>4}  {:>10}  {:>10}  {}",
        tr.t(keys::TABLE_COL_YEAR),
        tr.t(keys::TABLE_COL_EFFICIENCY),
        tr.t(keys::TABLE_COL_DROP),
        tr.t(keys::TABLE_COL_OVERHAUL)
    );
    for r in &result.records {
        let drop = r
            .drop_amount
            .map_or(String::from("-"), |d| format!("{d:.2}"));
        let flag = if r.overhauled {
            tr.t(keys::TABLE_YES)
        } else {
            tr.t(keys::TABLE_NO)
        };
        println!("{:>4}  {:>10.2}  {:>10}  {}", r.year, r.value, drop, flag);
    }
}

fn print_summary(
    tr: &Translator,
    result: &SimulationResult,
    failure_threshold: f64,
    show_replace: bool,
) {
    let summary = report::summarize(result, failure_threshold);
    println!("{}", tr.t(keys::SUMMARY_HEADING));
    println!("{} {:.2}", tr.t(keys::SUMMARY_INITIAL), summary.initial_value);
    println!("{} {:.2}", tr.t(keys::SUMMARY_FINAL), summary.final_value);
    println!("{} {:.2}%", tr.t(keys::SUMMARY_CHANGE), summary.percent_change);
    match summary.failure_year {
        Some(year) => println!("{} {year}", tr.t(keys::SUMMARY_FAILURE_YEAR)),
        None => println!("{}", tr.t(keys::SUMMARY_NO_FAILURE)),
    }
    if show_replace {
        match summary.replace_year {
            Some(year) => println!("{} {year}", tr.t(keys::SUMMARY_REPLACE_YEAR)),
            None => println!("{}", tr.t(keys::SUMMARY_NO_REPLACE)),
        }
    }
}

fn offer_csv_export(tr: &Translator, csv: &str) -> Result<(), AppError> {
    let path = read_line(tr.t(keys::PROMPT_CSV_PATH))?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }
    fs::write(path, csv).map_err(AppError::Io)?;
    println!("{} {path}", tr.t(keys::CSV_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 반환하는 f64 읽기.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_INTEGER)),
        }
    }
}
