#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use pump_lifetime_toolbox::{
    config,
    degradation::{
        compute_interval_decline, compute_threshold_decline, IntervalDeclineInput,
        SimulationResult, ThresholdDeclineInput, YearlyRecord,
    },
    i18n, report,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/ko-kr/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1080.0, 760.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Pump Lifetime Toolbox",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 내 폰트
/// 2) 시스템 폰트(Windows 맑은 고딕 계열, Linux Noto CJK)
/// 3) 모두 실패 시 Err를 반환하고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "malgunbd.ttf", "gulim.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let linux_candidates = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("CJK font not found; falling back to the default font.".into())
}

/// 차트 좌표 변환: (연차, 성능값) → 화면 좌표.
/// 연차는 1..=max_year, 값은 [y_min, y_max] 범위를 rect에 사상한다.
fn chart_pos(
    year: f64,
    value: f64,
    max_year: f64,
    y_min: f64,
    y_max: f64,
    rect: egui::Rect,
) -> egui::Pos2 {
    let x_frac = if max_year > 1.0 {
        (year - 1.0) / (max_year - 1.0)
    } else {
        0.5
    };
    let y_span = y_max - y_min;
    let y_frac = if y_span.abs() < f64::EPSILON {
        0.5
    } else {
        (value - y_min) / y_span
    };
    egui::pos2(
        rect.left() + rect.width() * x_frac as f32,
        rect.bottom() - rect.height() * y_frac as f32,
    )
}

/// 결과 시퀀스의 y축 표시 범위를 계산한다. 임계값 기준선도 범위에 포함한다.
fn chart_bounds(records: &[YearlyRecord], threshold: Option<f64>) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for r in records {
        y_min = y_min.min(r.value);
        y_max = y_max.max(r.value);
    }
    if let Some(t) = threshold {
        y_min = y_min.min(t);
        y_max = y_max.max(t);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((y_max - y_min) * 0.05).max(1.0);
    (y_min - pad, y_max + pad)
}

/// 저하 추이 라인 차트를 그린다. 임계값은 수평 점선, 오버홀 연차는 수직 점선.
fn draw_decline_chart(ui: &mut egui::Ui, records: &[YearlyRecord], threshold: Option<f64>) {
    const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(25, 118, 210);
    const THRESHOLD_COLOR: egui::Color32 = egui::Color32::from_rgb(211, 47, 47);
    const OVERHAUL_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 152, 0);

    if records.is_empty() {
        return;
    }
    let desired = egui::vec2(ui.available_width().max(360.0), 280.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect.shrink2(egui::vec2(48.0, 24.0));
    let max_year = f64::from(records.last().map_or(1, |r| r.year));
    let (y_min, y_max) = chart_bounds(records, threshold);

    let axis_stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    painter.line_segment([rect.left_top(), rect.left_bottom()], axis_stroke);
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], axis_stroke);

    // 오버홀 연차 수직 점선
    for r in records.iter().filter(|r| r.overhauled) {
        let top = chart_pos(f64::from(r.year), y_max, max_year, y_min, y_max, rect);
        let bottom = chart_pos(f64::from(r.year), y_min, max_year, y_min, y_max, rect);
        painter.extend(egui::Shape::dashed_line(
            &[top, bottom],
            egui::Stroke::new(1.0, OVERHAUL_COLOR),
            5.0,
            4.0,
        ));
    }

    // 임계값 수평 점선
    if let Some(t) = threshold {
        let left = chart_pos(1.0, t, max_year, y_min, y_max, rect);
        let right = chart_pos(max_year, t, max_year, y_min, y_max, rect);
        painter.extend(egui::Shape::dashed_line(
            &[left, right],
            egui::Stroke::new(1.5, THRESHOLD_COLOR),
            7.0,
            5.0,
        ));
    }

    // 추이 라인 + 연차 마커
    let points: Vec<egui::Pos2> = records
        .iter()
        .map(|r| chart_pos(f64::from(r.year), r.value, max_year, y_min, y_max, rect))
        .collect();
    painter.add(egui::Shape::line(
        points.clone(),
        egui::Stroke::new(2.0, LINE_COLOR),
    ));
    for p in &points {
        painter.circle_filled(*p, 3.0, LINE_COLOR);
    }

    // 축 라벨: 양 끝 연차와 y 범위
    let label_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(10.0);
    painter.text(
        rect.left_bottom() + egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        "1",
        font.clone(),
        label_color,
    );
    painter.text(
        rect.right_bottom() + egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        format!("{}", records.last().map_or(1, |r| r.year)),
        font.clone(),
        label_color,
    );
    painter.text(
        rect.left_top() + egui::vec2(-4.0, 0.0),
        egui::Align2::RIGHT_CENTER,
        format!("{y_max:.0}"),
        font.clone(),
        label_color,
    );
    painter.text(
        rect.left_bottom() + egui::vec2(-4.0, 0.0),
        egui::Align2::RIGHT_CENTER,
        format!("{y_min:.0}"),
        font,
        label_color,
    );
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    settings_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    apply_initial_view_size: bool,
    // 유량(주기 오버홀) 탭
    flow_input: IntervalDeclineInput,
    flow_failure_threshold: f64,
    flow_result: Option<SimulationResult>,
    flow_status: Option<String>,
    // 효율(임계값 오버홀) 탭
    eff_input: ThresholdDeclineInput,
    eff_failure_threshold: f64,
    eff_result: Option<SimulationResult>,
    eff_status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    FlowRate,
    Efficiency,
    Settings,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        Self {
            tr,
            lang_input,
            settings_status: None,
            tab: Tab::FlowRate,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            apply_initial_view_size: true,
            flow_input: config.flow_defaults,
            flow_failure_threshold: 1500.0,
            flow_result: None,
            flow_status: None,
            eff_input: config.efficiency_defaults,
            eff_failure_threshold: 50.0,
            eff_result: None,
            eff_status: None,
            config,
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::FlowRate, txt("gui.tab.flow", "Flow-Rate Decline")),
            (Tab::Efficiency, txt("gui.tab.efficiency", "Efficiency Decline")),
            (Tab::Settings, txt("gui.tab.settings", "Settings")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_flow_rate(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.flow.heading", "Flow-Rate Decline (interval overhaul)"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("flow_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.flow.years", "Simulation period (years)"));
                    ui.add(egui::Slider::new(&mut self.flow_input.years, 1..=30));
                    ui.end_row();
                    ui.label(txt("gui.flow.initial", "Initial flow rate (usgpm)"));
                    ui.add(
                        egui::DragValue::new(&mut self.flow_input.initial_value)
                            .speed(100.0)
                            .clamp_range(500.0..=5000.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.flow.failure_threshold", "Failure threshold (usgpm)"));
                    ui.add(
                        egui::DragValue::new(&mut self.flow_failure_threshold)
                            .speed(100.0)
                            .clamp_range(500.0..=3000.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.flow.interval", "Overhaul interval (years)"));
                    ui.add(egui::Slider::new(
                        &mut self.flow_input.overhaul_interval_years,
                        1..=10,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.flow.drop", "Drop per overhaul (%)"));
                    ui.add(egui::Slider::new(
                        &mut self.flow_input.overhaul_drop_percent,
                        1.0..=20.0,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.flow.particle", "Sand particle concentration (%)"));
                    ui.add(egui::Slider::new(
                        &mut self.flow_input.particle_concentration_pct,
                        0.0..=20.0,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.flow.ph", "Average pH"));
                    ui.add(egui::Slider::new(&mut self.flow_input.ph, 1.0..=14.0));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
            match compute_interval_decline(self.flow_input) {
                Ok(result) => {
                    self.flow_result = Some(result);
                    self.flow_status = None;
                }
                Err(e) => {
                    self.flow_result = None;
                    self.flow_status = Some(e.to_string());
                }
            }
        }
        if let Some(status) = &self.flow_status {
            ui.colored_label(ui.visuals().error_fg_color, status);
        }

        // 마지막 계산 결과는 탭 전환/리페인트 후에도 유지된다.
        if let Some(result) = self.flow_result.clone() {
            ui.add_space(8.0);
            ui.heading(txt("gui.common.chart_heading", "Decline Over Time"));
            draw_decline_chart(ui, &result.records, Some(self.flow_failure_threshold));

            self.summary_ui(ui, &result, self.flow_failure_threshold, false);
            Self::table_ui(ui, &txt, &result, false);

            ui.add_space(6.0);
            if ui.button(txt("gui.common.export_csv", "Download CSV")).clicked() {
                self.flow_status = export_csv_dialog(
                    &txt,
                    &report::flow_rate_csv(&result),
                    "pump_flow_rate_simulation.csv",
                );
            }
        }
    }

    fn ui_efficiency(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.eff.heading", "Efficiency Decline (threshold overhaul)"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("eff_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.flow.years", "Simulation period (years)"));
                    ui.add(egui::Slider::new(&mut self.eff_input.years, 1..=30));
                    ui.end_row();
                    ui.label(txt("gui.eff.initial", "Initial efficiency (%)"));
                    ui.add(egui::Slider::new(&mut self.eff_input.initial_value, 1.0..=100.0));
                    ui.end_row();
                    ui.label(txt("gui.eff.bep_drop", "BEP ratio drop (%)"));
                    ui.add(egui::Slider::new(
                        &mut self.eff_input.overhaul_drop_percent,
                        1.0..=20.0,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.eff.threshold", "Overhaul threshold (%)"));
                    ui.add(egui::Slider::new(
                        &mut self.eff_input.overhaul_threshold,
                        1.0..=100.0,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.flow.particle", "Sand particle concentration (%)"));
                    ui.add(egui::Slider::new(
                        &mut self.eff_input.particle_concentration_pct,
                        0.0..=20.0,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.flow.ph", "Average pH"));
                    ui.add(egui::Slider::new(&mut self.eff_input.ph, 1.0..=14.0));
                    ui.end_row();
                    ui.label(txt("gui.eff.chloride", "Chloride concentration (ppm)"));
                    ui.add(
                        egui::DragValue::new(&mut self.eff_input.chloride_ppm)
                            .speed(10.0)
                            .clamp_range(0.0..=5000.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.eff.p_in", "Input pressure (psig)"));
                    ui.add(
                        egui::DragValue::new(&mut self.eff_input.input_pressure_psig)
                            .speed(5.0)
                            .clamp_range(0.0..=1000.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.eff.p_out", "Output pressure (psig)"));
                    ui.add(
                        egui::DragValue::new(&mut self.eff_input.output_pressure_psig)
                            .speed(5.0)
                            .clamp_range(0.0..=1000.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.eff.flow", "Flow rate (usgpm)"));
                    ui.add(
                        egui::DragValue::new(&mut self.eff_input.flow_rate_usgpm)
                            .speed(50.0)
                            .clamp_range(0.0..=5000.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.eff.failure_threshold", "Failure threshold (%)"));
                    ui.add(egui::Slider::new(&mut self.eff_failure_threshold, 0.0..=100.0));
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
            match compute_threshold_decline(self.eff_input) {
                Ok(result) => {
                    self.eff_result = Some(result);
                    self.eff_status = None;
                }
                Err(e) => {
                    self.eff_result = None;
                    self.eff_status = Some(e.to_string());
                }
            }
        }
        if let Some(status) = &self.eff_status {
            ui.colored_label(ui.visuals().error_fg_color, status);
        }

        if let Some(result) = self.eff_result.clone() {
            ui.add_space(8.0);
            ui.heading(txt("gui.common.chart_heading", "Decline Over Time"));
            draw_decline_chart(ui, &result.records, Some(self.eff_input.overhaul_threshold));

            self.summary_ui(ui, &result, self.eff_failure_threshold, true);
            Self::table_ui(ui, &txt, &result, true);

            ui.add_space(6.0);
            if ui.button(txt("gui.common.export_csv", "Download CSV")).clicked() {
                self.eff_status = export_csv_dialog(
                    &txt,
                    &report::efficiency_csv(&result),
                    "pump_efficiency_simulation.csv",
                );
            }
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.settings.heading", "Settings"));
        ui.add_space(8.0);

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(txt("gui.settings.language", "Language (auto/ko/en-us)"));
                ui.text_edit_singleline(&mut self.lang_input);
                ui.end_row();
                ui.label(txt("gui.settings.alpha", "Window opacity"));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                ui.end_row();
            });

        ui.add_space(6.0);
        if ui.button(txt("gui.settings.apply", "Apply")).clicked() {
            self.config.language = self.lang_input.trim().to_string();
            self.config.window_alpha = self.window_alpha;
            let lang_code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
            self.tr = i18n::Translator::new_with_pack(
                &lang_code,
                self.config.language_pack_dir.as_deref(),
            );
            self.settings_status = match self.config.save() {
                Ok(()) => Some(txt("gui.settings.saved", "Settings saved.")),
                Err(e) => Some(e.to_string()),
            };
        }
        if ui
            .button(txt("gui.settings.save_defaults", "Save current inputs as defaults"))
            .clicked()
        {
            self.config.flow_defaults = self.flow_input;
            self.config.efficiency_defaults = self.eff_input;
            self.settings_status = match self.config.save() {
                Ok(()) => Some(txt("gui.settings.defaults_saved", "Defaults saved.")),
                Err(e) => Some(e.to_string()),
            };
        }
        if let Some(status) = &self.settings_status {
            ui.label(status);
        }
    }

    fn summary_ui(
        &self,
        ui: &mut egui::Ui,
        result: &SimulationResult,
        failure_threshold: f64,
        show_replace: bool,
    ) {
        let txt = |key: &str, default: &str| {
            self.tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        let summary = report::summarize(result, failure_threshold);
        ui.add_space(8.0);
        ui.heading(txt("gui.common.summary_heading", "Key Metrics"));
        egui::Grid::new("summary_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(txt("gui.summary.initial", "Initial value"));
                ui.strong(format!("{:.2}", summary.initial_value));
                ui.end_row();
                ui.label(txt("gui.summary.final", "Final value"));
                ui.strong(format!("{:.2}", summary.final_value));
                ui.end_row();
                ui.label(txt("gui.summary.change", "Change"));
                ui.strong(format!("{:.2}%", summary.percent_change));
                ui.end_row();
                ui.label(txt("gui.summary.failure", "Predicted failure year"));
                match summary.failure_year {
                    Some(year) => ui.strong(format!("{year}")),
                    None => ui.strong(txt("gui.summary.no_failure", "No failure detected")),
                };
                ui.end_row();
                if show_replace {
                    ui.label(txt("gui.summary.replace", "Predicted replacement year"));
                    match summary.replace_year {
                        Some(year) => ui.strong(format!("{year}")),
                        None => {
                            ui.strong(txt("gui.summary.no_replace", "No replacement needed"))
                        }
                    };
                    ui.end_row();
                }
            });
    }

    fn table_ui<F>(ui: &mut egui::Ui, txt: &F, result: &SimulationResult, show_drop: bool)
    where
        F: Fn(&str, &str) -> String,
    {
        ui.add_space(8.0);
        ui.heading(txt("gui.common.table_heading", "Year-by-Year Data"));
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .show(ui, |ui| {
                egui::Grid::new("result_table")
                    .num_columns(if show_drop { 4 } else { 3 })
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong(txt("gui.table.year", "Year"));
                        ui.strong(txt("gui.table.value", "Value"));
                        if show_drop {
                            ui.strong(txt("gui.table.drop", "Yearly drop"));
                        }
                        ui.strong(txt("gui.table.overhaul", "Overhaul"));
                        ui.end_row();
                        for r in &result.records {
                            ui.label(format!("{}", r.year));
                            ui.label(format!("{:.2}", r.value));
                            if show_drop {
                                let drop = r
                                    .drop_amount
                                    .map_or(String::from("-"), |d| format!("{d:.2}"));
                                ui.label(drop);
                            }
                            let flag = if r.overhauled {
                                txt("gui.table.yes", "Yes")
                            } else {
                                txt("gui.table.no", "No")
                            };
                            ui.label(flag);
                            ui.end_row();
                        }
                    });
            });
    }
}

/// CSV 저장 다이얼로그를 띄우고 결과 메시지를 반환한다. 취소하면 None.
fn export_csv_dialog<F>(txt: &F, csv: &str, default_name: &str) -> Option<String>
where
    F: Fn(&str, &str) -> String,
{
    let path = FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(default_name)
        .save_file()?;
    match fs::write(&path, csv) {
        Ok(()) => Some(format!("{}: {}", txt("gui.csv.saved", "CSV saved"), path.display())),
        Err(e) => Some(format!(
            "{}: {e}",
            txt("gui.csv.failed", "CSV export failed")
        )),
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target =
                    egui::vec2((screen.x * 0.60).max(1000.0), (screen.y * 0.60).max(700.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Pump Lifetime Toolbox"));
                ui.label(" | Desktop GUI");
            });
        });

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(190.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::FlowRate => self.ui_flow_rate(ui),
                Tab::Efficiency => self.ui_efficiency(ui),
                Tab::Settings => self.ui_settings(ui),
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_seeds_inputs_from_config() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.flow_input.years, 15);
        assert_eq!(app.eff_input.years, 15);
        assert!((app.flow_failure_threshold - 1500.0).abs() < f64::EPSILON);
        assert!((app.eff_failure_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(app.tab, Tab::FlowRate);
    }

    #[test]
    fn chart_pos_maps_corners() {
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 50.0));
        let first = chart_pos(1.0, 0.0, 10.0, 0.0, 100.0, rect);
        assert!((first.x - 0.0).abs() < 1e-4);
        assert!((first.y - 50.0).abs() < 1e-4);
        let last = chart_pos(10.0, 100.0, 10.0, 0.0, 100.0, rect);
        assert!((last.x - 100.0).abs() < 1e-4);
        assert!((last.y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn chart_bounds_includes_threshold() {
        let result = compute_interval_decline(IntervalDeclineInput::default()).unwrap();
        let (y_min, y_max) = chart_bounds(&result.records, Some(100.0));
        assert!(y_min < 100.0);
        assert!(y_max > 2800.0);
    }

    #[test]
    fn single_year_chart_is_centered() {
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 50.0));
        let p = chart_pos(1.0, 50.0, 1.0, 0.0, 100.0, rect);
        assert!((p.x - 50.0).abs() < 1e-4);
    }
}
