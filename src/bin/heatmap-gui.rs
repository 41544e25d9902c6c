/*!
 * Desktop viewer for the global temperature heatmap
 *
 * - Loads the temperature document on a background thread
 * - Paints the rendered scene (cells, axes, legend)
 * - Shows the hover tooltip for the cell under the pointer
 * - Exports the chart as SVG
 */

use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use temp_heatmap::api::{DEFAULT_SOURCE_URL, DataSource};
use temp_heatmap::palette::{self, Rgb8};
use temp_heatmap::render::surface::TICK_SIZE;
use temp_heatmap::render::{
    self, AxisOrient, ChartConfig, HeatmapChart, HoverTracker, Point, Scene, TextAnchor,
};
use temp_heatmap::tooltip::{TooltipBox, TooltipController};

const LOCALES: [&str; 7] = ["en", "de", "fr", "es", "it", "pt", "nl"];

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1260.0, 700.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Global Temperature Heatmap"),
        ..Default::default()
    };

    eframe::run_native(
        "Global Temperature Heatmap",
        options,
        Box::new(|_cc| Ok(Box::new(HeatmapApp::new()))),
    )
}

/// A chart on screen together with its interaction state.
struct Loaded {
    chart: HeatmapChart,
    scene: Scene,
    hover: HoverTracker,
    tooltip: TooltipController<TooltipBox>,
}

impl Loaded {
    fn new(chart: HeatmapChart) -> Result<Self, String> {
        let scene = chart.to_scene().map_err(|e| e.to_string())?;
        let tooltip = chart.tooltip_controller(TooltipBox::default());
        Ok(Self {
            chart,
            scene,
            hover: HoverTracker::new(),
            tooltip,
        })
    }
}

#[derive(Debug)]
enum LoadResult {
    Success(Box<HeatmapChart>),
    Error(String),
}

struct HeatmapApp {
    url: String,
    locale: String,
    export_dir: PathBuf,

    loaded: Option<Loaded>,

    is_loading: bool,
    status_message: String,
    error_message: String,

    receiver: Option<mpsc::Receiver<LoadResult>>,
}

impl HeatmapApp {
    fn new() -> Self {
        let mut app = Self::idle();
        app.start_load();
        app
    }

    fn idle() -> Self {
        let export_dir = dirs::picture_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            locale: "en".to_string(),
            export_dir,
            loaded: None,
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            receiver: None,
        }
    }

    fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            locale: self.locale.clone(),
            ..ChartConfig::default()
        }
    }

    fn start_load(&mut self) {
        if self.url.trim().is_empty() {
            self.error_message = "Please enter the URL of the temperature document".to_string();
            return;
        }

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = format!("Fetching {} ...", self.url.trim());

        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);

        let source = DataSource::Remote(self.url.trim().to_string());
        let config = self.chart_config();

        thread::spawn(move || {
            let result = source
                .load(None)
                .and_then(|dataset| HeatmapChart::new(dataset, palette::default_palette(), config));
            let msg = match result {
                Ok(chart) => LoadResult::Success(Box::new(chart)),
                Err(e) => {
                    log::error!("loading {} failed: {e}", source.describe());
                    LoadResult::Error(e.to_string())
                }
            };
            let _ = sender.send(msg);
        });
    }

    fn check_load_result(&mut self) {
        let Some(receiver) = &self.receiver else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                LoadResult::Error("loader stopped without a result".to_string())
            }
        };
        self.is_loading = false;
        self.receiver = None;

        match result {
            LoadResult::Success(chart) => self.install(*chart),
            LoadResult::Error(error) => {
                self.error_message = error;
                self.status_message.clear();
            }
        }
    }

    fn install(&mut self, chart: HeatmapChart) {
        let description = chart.description();
        match Loaded::new(chart) {
            Ok(loaded) => {
                self.loaded = Some(loaded);
                self.status_message = description;
                self.error_message.clear();
            }
            Err(e) => self.error_message = e,
        }
    }

    /// Rebuild the current chart with the selected locale, without refetching.
    fn relabel(&mut self) {
        let Some(current) = self.loaded.take() else {
            return;
        };
        let dataset = current.chart.dataset().clone();
        let colors = current.chart.scale().range().to_vec();
        match HeatmapChart::new(dataset, colors, self.chart_config()) {
            Ok(chart) => self.install(chart),
            Err(e) => {
                self.error_message = e.to_string();
                self.loaded = Some(current);
            }
        }
    }

    fn export_svg(&mut self) {
        let Some(loaded) = &self.loaded else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.export_dir)
            .set_file_name("heatmap.svg")
            .add_filter("SVG", &["svg"])
            .save_file()
        else {
            return;
        };
        match render::export_chart(&loaded.chart, &path, None) {
            Ok(()) => {
                self.status_message = format!("Wrote {}", path.display());
                if let Some(dir) = path.parent() {
                    self.export_dir = dir.to_path_buf();
                }
            }
            Err(e) => self.error_message = format!("Export failed: {e}"),
        }
    }
}

impl eframe::App for HeatmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_result();

        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Source:");
                ui.add(egui::TextEdit::singleline(&mut self.url).desired_width(520.0));
                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Reload"))
                    .clicked()
                {
                    self.start_load();
                }

                let mut locale_changed = false;
                egui::ComboBox::from_label("Locale")
                    .selected_text(self.locale.clone())
                    .show_ui(ui, |ui| {
                        for tag in LOCALES {
                            locale_changed |= ui
                                .selectable_value(&mut self.locale, tag.to_string(), tag)
                                .changed();
                        }
                    });
                if locale_changed {
                    self.relabel();
                }

                if ui
                    .add_enabled(self.loaded.is_some(), egui::Button::new("Export SVG..."))
                    .clicked()
                {
                    self.export_svg();
                }
            });

            ui.horizontal(|ui| {
                if self.is_loading {
                    ui.spinner();
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                } else if !self.status_message.is_empty() {
                    ui.label(&self.status_message);
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(loaded) = self.loaded.as_mut() else {
                return;
            };
            egui::ScrollArea::both().show(ui, |ui| {
                let size = egui::vec2(loaded.scene.width as f32, loaded.scene.height as f32);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                let origin = response.rect.min;

                painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);
                paint_scene(&painter, origin, &loaded.scene);

                let pointer = response
                    .hover_pos()
                    .map(|p| Point::new((p.x - origin.x) as f64, (p.y - origin.y) as f64));
                for event in loaded.scene.hover(&mut loaded.hover, pointer) {
                    loaded.tooltip.handle(&event, loaded.chart.dataset());
                }
                paint_tooltip(&painter, origin, loaded.tooltip.overlay());
            });
        });
    }
}

fn color32(c: Rgb8) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

fn to_pos(origin: egui::Pos2, x: f64, y: f64) -> egui::Pos2 {
    origin + egui::vec2(x as f32, y as f32)
}

fn to_rect(origin: egui::Pos2, r: &render::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_pos(origin, r.x, r.y),
        egui::vec2(r.width as f32, r.height as f32),
    )
}

fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &Scene) {
    let ink = egui::Color32::BLACK;
    let stroke = egui::Stroke::new(1.0, ink);
    let tick = TICK_SIZE as f32;

    for cell in &scene.cells {
        painter.rect_filled(to_rect(origin, &cell.rect), 0.0, color32(cell.fill));
    }
    for r in &scene.rects {
        painter.rect_filled(to_rect(origin, &r.rect), 0.0, color32(r.fill));
    }

    for axis in &scene.axes {
        let o = to_pos(origin, axis.origin.x, axis.origin.y);
        let len = axis.length as f32;
        match axis.orient {
            AxisOrient::Bottom => {
                painter.line_segment([o, o + egui::vec2(len, 0.0)], stroke);
                for t in &axis.ticks {
                    let at = o + egui::vec2(t.offset as f32, 0.0);
                    painter.line_segment([at, at + egui::vec2(0.0, tick)], stroke);
                    painter.text(
                        at + egui::vec2(0.0, tick + 2.0),
                        egui::Align2::CENTER_TOP,
                        &t.label,
                        egui::FontId::proportional(axis.font_px as f32),
                        ink,
                    );
                }
            }
            AxisOrient::Left => {
                painter.line_segment([o, o + egui::vec2(0.0, len)], stroke);
                for t in &axis.ticks {
                    let at = o + egui::vec2(0.0, t.offset as f32);
                    painter.line_segment([at - egui::vec2(tick, 0.0), at], stroke);
                    painter.text(
                        at - egui::vec2(tick + 3.0, 0.0),
                        egui::Align2::RIGHT_CENTER,
                        &t.label,
                        egui::FontId::proportional(axis.font_px as f32),
                        ink,
                    );
                }
            }
        }
    }

    for t in &scene.texts {
        let align = match t.anchor {
            TextAnchor::Start => egui::Align2::LEFT_BOTTOM,
            TextAnchor::Middle => egui::Align2::CENTER_BOTTOM,
            TextAnchor::End => egui::Align2::RIGHT_BOTTOM,
        };
        painter.text(
            to_pos(origin, t.position.x, t.position.y),
            align,
            &t.text,
            egui::FontId::proportional(t.font_px as f32),
            ink,
        );
    }
}

fn paint_tooltip(painter: &egui::Painter, origin: egui::Pos2, tip: &TooltipBox) {
    if !tip.visible {
        return;
    }
    let Some(at) = tip.position else {
        return;
    };
    let galley = painter.layout_no_wrap(
        tip.lines().join("\n"),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let pos = to_pos(origin, at.x, at.y);
    let bg = egui::Rect::from_min_size(pos, galley.size() + egui::vec2(12.0, 8.0));
    painter.rect_filled(bg, 4.0, egui::Color32::from_black_alpha(210));
    painter.galley(pos + egui::vec2(6.0, 4.0), galley, egui::Color32::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_loader_stops_loading() {
        let mut app = HeatmapApp::idle();
        let (sender, receiver) = mpsc::channel::<LoadResult>();
        app.receiver = Some(receiver);
        app.is_loading = true;

        app.check_load_result();
        assert!(app.is_loading);

        drop(sender);
        app.check_load_result();
        assert!(!app.is_loading);
        assert!(app.receiver.is_none());
        assert!(!app.error_message.is_empty());
    }

    #[test]
    fn load_error_is_shown() {
        let mut app = HeatmapApp::idle();
        let (sender, receiver) = mpsc::channel();
        app.receiver = Some(receiver);
        app.is_loading = true;
        sender
            .send(LoadResult::Error("HTTP 404".to_string()))
            .unwrap();

        app.check_load_result();
        assert!(!app.is_loading);
        assert_eq!(app.error_message, "HTTP 404");
    }
}
