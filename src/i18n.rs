use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FLOW_DECLINE: &str = "main_menu.flow_decline";
    pub const MAIN_MENU_EFFICIENCY_DECLINE: &str = "main_menu.efficiency_decline";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_INTEGER: &str = "error.invalid_integer";

    pub const FLOW_HEADING: &str = "flow_decline.heading";
    pub const EFFICIENCY_HEADING: &str = "efficiency_decline.heading";

    pub const PROMPT_YEARS: &str = "prompt.years";
    pub const PROMPT_INITIAL_FLOW: &str = "prompt.initial_flow";
    pub const PROMPT_FLOW_FAILURE_THRESHOLD: &str = "prompt.flow_failure_threshold";
    pub const PROMPT_OVERHAUL_INTERVAL: &str = "prompt.overhaul_interval";
    pub const PROMPT_OVERHAUL_DROP: &str = "prompt.overhaul_drop";
    pub const PROMPT_PARTICLE: &str = "prompt.particle_concentration";
    pub const PROMPT_PH: &str = "prompt.ph";

    pub const PROMPT_INITIAL_EFFICIENCY: &str = "prompt.initial_efficiency";
    pub const PROMPT_BEP_DROP: &str = "prompt.bep_drop";
    pub const PROMPT_OVERHAUL_THRESHOLD: &str = "prompt.overhaul_threshold";
    pub const PROMPT_CHLORIDE: &str = "prompt.chloride";
    pub const PROMPT_INPUT_PRESSURE: &str = "prompt.input_pressure";
    pub const PROMPT_OUTPUT_PRESSURE: &str = "prompt.output_pressure";
    pub const PROMPT_FLOW_STRESSOR: &str = "prompt.flow_stressor";
    pub const PROMPT_EFF_FAILURE_THRESHOLD: &str = "prompt.eff_failure_threshold";

    pub const TABLE_HEADING: &str = "result.table_heading";
    pub const TABLE_COL_YEAR: &str = "result.col_year";
    pub const TABLE_COL_FLOW: &str = "result.col_flow";
    pub const TABLE_COL_EFFICIENCY: &str = "result.col_efficiency";
    pub const TABLE_COL_DROP: &str = "result.col_drop";
    pub const TABLE_COL_OVERHAUL: &str = "result.col_overhaul";
    pub const TABLE_YES: &str = "result.yes";
    pub const TABLE_NO: &str = "result.no";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_INITIAL: &str = "summary.initial";
    pub const SUMMARY_FINAL: &str = "summary.final";
    pub const SUMMARY_CHANGE: &str = "summary.change";
    pub const SUMMARY_FAILURE_YEAR: &str = "summary.failure_year";
    pub const SUMMARY_NO_FAILURE: &str = "summary.no_failure";
    pub const SUMMARY_REPLACE_YEAR: &str = "summary.replace_year";
    pub const SUMMARY_NO_REPLACE: &str = "summary.no_replace";

    pub const PROMPT_CSV_PATH: &str = "csv.prompt_path";
    pub const CSV_SAVED: &str = "csv.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pump Lifetime Toolbox ===",
        MAIN_MENU_FLOW_DECLINE => "1) 유량 저하 (주기 오버홀)",
        MAIN_MENU_EFFICIENCY_DECLINE => "2) 효율 저하 (임계값 오버홀)",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_INVALID_INTEGER => "정수를 입력하세요.",
        FLOW_HEADING => "\n-- 유량 저하 시뮬레이션 (주기 오버홀) --",
        EFFICIENCY_HEADING => "\n-- 효율 저하 시뮬레이션 (임계값 오버홀) --",
        PROMPT_YEARS => "시뮬레이션 기간 [년]: ",
        PROMPT_INITIAL_FLOW => "초기 유량 [usgpm]: ",
        PROMPT_FLOW_FAILURE_THRESHOLD => "고장 판정 유량 임계값 [usgpm]: ",
        PROMPT_OVERHAUL_INTERVAL => "오버홀 주기 [년]: ",
        PROMPT_OVERHAUL_DROP => "오버홀 1회당 하락 [%]: ",
        PROMPT_PARTICLE => "모래 입자 농도 [%]: ",
        PROMPT_PH => "유체 평균 pH: ",
        PROMPT_INITIAL_EFFICIENCY => "초기 효율 [%]: ",
        PROMPT_BEP_DROP => "오버홀 후 BEP 비율 하락 [%]: ",
        PROMPT_OVERHAUL_THRESHOLD => "오버홀 발동 임계값 [%]: ",
        PROMPT_CHLORIDE => "염화물 농도 [ppm]: ",
        PROMPT_INPUT_PRESSURE => "입구 압력 [psig]: ",
        PROMPT_OUTPUT_PRESSURE => "출구 압력 [psig]: ",
        PROMPT_FLOW_STRESSOR => "유량 [usgpm]: ",
        PROMPT_EFF_FAILURE_THRESHOLD => "고장 판정 효율 임계값 [%] (엔터 시 50): ",
        TABLE_HEADING => "\n연차별 결과:",
        TABLE_COL_YEAR => "연차",
        TABLE_COL_FLOW => "유량(usgpm)",
        TABLE_COL_EFFICIENCY => "효율(%)",
        TABLE_COL_DROP => "연간 하락",
        TABLE_COL_OVERHAUL => "오버홀",
        TABLE_YES => "예",
        TABLE_NO => "아니오",
        SUMMARY_HEADING => "\n요약:",
        SUMMARY_INITIAL => "초기값:",
        SUMMARY_FINAL => "최종값:",
        SUMMARY_CHANGE => "변화율:",
        SUMMARY_FAILURE_YEAR => "예상 고장 연차:",
        SUMMARY_NO_FAILURE => "시뮬레이션 기간 내 고장 없음",
        SUMMARY_REPLACE_YEAR => "예상 교체 연차:",
        SUMMARY_NO_REPLACE => "시뮬레이션 기간 내 교체 불필요",
        PROMPT_CSV_PATH => "CSV 저장 경로 (건너뛰려면 엔터): ",
        CSV_SAVED => "CSV를 저장했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) auto  2) ko  3) en-us",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pump Lifetime Toolbox ===",
        MAIN_MENU_FLOW_DECLINE => "1) Flow-rate decline (interval overhaul)",
        MAIN_MENU_EFFICIENCY_DECLINE => "2) Efficiency decline (threshold overhaul)",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_INTEGER => "Please enter an integer.",
        FLOW_HEADING => "\n-- Flow-Rate Decline (interval overhaul) --",
        EFFICIENCY_HEADING => "\n-- Efficiency Decline (threshold overhaul) --",
        PROMPT_YEARS => "Simulation period [years]: ",
        PROMPT_INITIAL_FLOW => "Initial flow rate [usgpm]: ",
        PROMPT_FLOW_FAILURE_THRESHOLD => "Flow-rate failure threshold [usgpm]: ",
        PROMPT_OVERHAUL_INTERVAL => "Overhaul interval [years]: ",
        PROMPT_OVERHAUL_DROP => "Drop per overhaul [%]: ",
        PROMPT_PARTICLE => "Sand particle concentration [%]: ",
        PROMPT_PH => "Average fluid pH: ",
        PROMPT_INITIAL_EFFICIENCY => "Initial efficiency [%]: ",
        PROMPT_BEP_DROP => "BEP ratio drop after overhaul [%]: ",
        PROMPT_OVERHAUL_THRESHOLD => "Overhaul trigger threshold [%]: ",
        PROMPT_CHLORIDE => "Chloride concentration [ppm]: ",
        PROMPT_INPUT_PRESSURE => "Input pressure [psig]: ",
        PROMPT_OUTPUT_PRESSURE => "Output pressure [psig]: ",
        PROMPT_FLOW_STRESSOR => "Flow rate [usgpm]: ",
        PROMPT_EFF_FAILURE_THRESHOLD => "Efficiency failure threshold [%] (enter = 50): ",
        TABLE_HEADING => "\nYear-by-year results:",
        TABLE_COL_YEAR => "Year",
        TABLE_COL_FLOW => "Flow (usgpm)",
        TABLE_COL_EFFICIENCY => "Efficiency (%)",
        TABLE_COL_DROP => "Yearly drop",
        TABLE_COL_OVERHAUL => "Overhaul",
        TABLE_YES => "Yes",
        TABLE_NO => "No",
        SUMMARY_HEADING => "\nSummary:",
        SUMMARY_INITIAL => "Initial value:",
        SUMMARY_FINAL => "Final value:",
        SUMMARY_CHANGE => "Change:",
        SUMMARY_FAILURE_YEAR => "Predicted failure year:",
        SUMMARY_NO_FAILURE => "No failure within the simulation period",
        SUMMARY_REPLACE_YEAR => "Predicted replacement year:",
        SUMMARY_NO_REPLACE => "No replacement needed within the simulation period",
        PROMPT_CSV_PATH => "CSV output path (enter to skip): ",
        CSV_SAVED => "CSV saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) auto  2) ko  3) en-us",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
