//! Immediate-mode surface over a plotters drawing area, plus file export.
//!
//! Cell metadata and hover bindings have no representation in a static
//! image and are dropped here; use `Scene` when they matter.

use super::HeatmapChart;
use super::surface::{
    AxisOrient, AxisSpec, CellSpec, DrawingSurface, FillRect, Rect, TICK_SIZE, TextAnchor,
    TextSpec,
};
use crate::error::{HeatmapError, Result};
use crate::palette::Rgb8;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::OnceLock;

/// First font registered for bitmap text wins for the rest of the process.
static BITMAP_FONT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// `ab_glyph` doesn't discover OS fonts, so bitmap output needs a TrueType
/// file registered as the "sans-serif" family.
fn ensure_font_registered(path: &Path) -> Result<()> {
    BITMAP_FONT
        .get_or_init(|| {
            let bytes = std::fs::read(path)
                .map_err(|e| format!("reading font {}: {e}", path.display()))?;
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes)
                .map_err(|_| format!("invalid font {}", path.display()))
        })
        .clone()
        .map_err(HeatmapError::Render)
}

fn render_err<E: std::fmt::Debug>(e: E) -> HeatmapError {
    HeatmapError::Render(format!("{:?}", e))
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn rgb(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

pub struct PlottersSurface<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
}

impl<'a, DB: DrawingBackend> PlottersSurface<'a, DB> {
    pub fn new(area: &'a DrawingArea<DB, Shift>) -> Self {
        Self { area }
    }

    /// Snap both edges to whole pixels so neighbouring cells tile without seams.
    fn fill(&self, rect: Rect, color: Rgb8) -> Result<()> {
        let x0 = px(rect.x);
        let y0 = px(rect.y);
        let x1 = px(rect.x + rect.width);
        let y1 = px(rect.y + rect.height);
        self.area
            .draw(&Rectangle::new([(x0, y0), (x1, y1)], rgb(color).filled()))
            .map_err(render_err)
    }

    fn line(&self, from: (i32, i32), to: (i32, i32)) -> Result<()> {
        self.area
            .draw(&PathElement::new(vec![from, to], BLACK.stroke_width(1)))
            .map_err(render_err)
    }

    fn label(&self, text: &str, at: (i32, i32), font_px: u32, pos: Pos) -> Result<()> {
        let style = TextStyle::from((FontFamily::SansSerif, font_px)).pos(pos);
        self.area
            .draw(&Text::new(text.to_string(), at, style))
            .map_err(render_err)
    }
}

impl<DB: DrawingBackend> DrawingSurface for PlottersSurface<'_, DB> {
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<()> {
        let dim = self.area.dim_in_pixel();
        if dim != (width, height) {
            log::warn!(
                "drawing area is {}x{}, chart laid out for {}x{}",
                dim.0,
                dim.1,
                width,
                height
            );
        }
        self.area.fill(&WHITE).map_err(render_err)
    }

    fn draw_cell(&mut self, cell: &CellSpec) -> Result<()> {
        self.fill(cell.rect, cell.fill)
    }

    fn draw_rect(&mut self, rect: &FillRect) -> Result<()> {
        self.fill(rect.rect, rect.fill)
    }

    fn draw_axis(&mut self, axis: &AxisSpec) -> Result<()> {
        let (ox, oy) = (axis.origin.x, axis.origin.y);
        let tick = px(TICK_SIZE);
        let font_px = axis.font_px;
        match axis.orient {
            AxisOrient::Bottom => {
                let y = px(oy);
                self.line((px(ox), y), (px(ox + axis.length), y))?;
                for t in &axis.ticks {
                    let x = px(ox + t.offset);
                    self.line((x, y), (x, y + tick))?;
                    self.label(
                        &t.label,
                        (x, y + tick + 3),
                        font_px,
                        Pos::new(HPos::Center, VPos::Top),
                    )?;
                }
            }
            AxisOrient::Left => {
                let x = px(ox);
                self.line((x, px(oy)), (x, px(oy + axis.length)))?;
                for t in &axis.ticks {
                    let y = px(oy + t.offset);
                    self.line((x - tick, y), (x, y))?;
                    self.label(
                        &t.label,
                        (x - tick - 3, y),
                        font_px,
                        Pos::new(HPos::Right, VPos::Center),
                    )?;
                }
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &TextSpec) -> Result<()> {
        let h = match text.anchor {
            TextAnchor::Start => HPos::Left,
            TextAnchor::Middle => HPos::Center,
            TextAnchor::End => HPos::Right,
        };
        self.label(
            &text.text,
            (px(text.position.x), px(text.position.y)),
            text.font_px,
            Pos::new(h, VPos::Bottom),
        )
    }
}

/// Render `chart` to an image file. `.svg` writes vector output; any other
/// extension goes through the bitmap backend and needs `font` for text.
pub fn export_chart<P: AsRef<Path>>(
    chart: &HeatmapChart,
    out_path: P,
    font: Option<&Path>,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let size = (chart.config().width, chart.config().height);

    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if is_svg {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_onto(chart, &root)?;
    } else {
        let font = font.ok_or_else(|| {
            HeatmapError::Render(format!(
                "bitmap output {} needs a TrueType font (--font)",
                out_path.display()
            ))
        })?;
        ensure_font_registered(font)?;
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_onto(chart, &root)?;
    }
    log::info!("wrote chart to {}", out_path.display());
    Ok(())
}

fn draw_onto<DB: DrawingBackend>(chart: &HeatmapChart, root: &DrawingArea<DB, Shift>) -> Result<()> {
    let mut surface = PlottersSurface::new(root);
    chart.render(&mut surface)?;
    root.present().map_err(render_err)
}
