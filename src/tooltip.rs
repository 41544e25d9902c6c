//! Hover tooltip: a two-state controller (Hidden / Visible) driving an
//! abstract overlay.

use crate::format::{CELSIUS, format_fixed1, format_signed1, format_year, month_name};
use crate::models::{Dataset, TemperatureRecord};
use crate::render::surface::{HoverEvent, Point};
use serde::Serialize;

/// Placement of the overlay relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Decimal separator for temperatures.
    pub decimal_sep: char,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            offset_y: -30.0,
            decimal_sep: '.',
        }
    }
}

/// What the overlay shows for one reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub year: i32,
    pub month_name: String,
    pub temperature: f64,
    pub variance: f64,
}

impl TooltipContent {
    pub fn for_record(record: &TemperatureRecord, base_temperature: f64) -> Self {
        Self {
            year: record.year,
            month_name: month_name(record.month).unwrap_or_default(),
            temperature: record.temperature(base_temperature),
            variance: record.variance,
        }
    }

    /// `["1900 - January", "7.5℃", "-0.5℃"]`
    pub fn lines(&self, decimal_sep: char) -> Vec<String> {
        vec![
            format!("{} - {}", format_year(self.year), self.month_name),
            format!("{}{CELSIUS}", format_fixed1(self.temperature, decimal_sep)),
            format!("{}{CELSIUS}", format_signed1(self.variance, decimal_sep)),
        ]
    }

    pub fn to_text(&self, decimal_sep: char) -> String {
        self.lines(decimal_sep).join("\n")
    }

    pub fn to_html(&self, decimal_sep: char) -> String {
        self.lines(decimal_sep).join("<br>")
    }
}

/// Host-side overlay the controller drives.
pub trait TooltipOverlay {
    fn show(&mut self);
    fn hide(&mut self);
    fn set_position(&mut self, at: Point);
    fn set_content(&mut self, html: &str);
    fn set_data_year(&mut self, year: i32);
}

/// Retained overlay for hosts that paint the tooltip themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipBox {
    pub visible: bool,
    pub position: Option<Point>,
    pub html: String,
    pub data_year: Option<i32>,
}

impl TooltipBox {
    /// Content as plain lines (the `<br>` separators split out).
    pub fn lines(&self) -> Vec<&str> {
        self.html.split("<br>").collect()
    }
}

impl TooltipOverlay for TooltipBox {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_position(&mut self, at: Point) {
        self.position = Some(at);
    }

    fn set_content(&mut self, html: &str) {
        self.html = html.to_string();
    }

    fn set_data_year(&mut self, year: i32) {
        self.data_year = Some(year);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible { record: usize, anchor: Point },
}

pub struct TooltipController<O: TooltipOverlay> {
    overlay: O,
    config: TooltipConfig,
    base_temperature: f64,
    state: TooltipState,
}

impl<O: TooltipOverlay> TooltipController<O> {
    /// Starts Hidden; the overlay is hidden immediately.
    pub fn new(mut overlay: O, base_temperature: f64, config: TooltipConfig) -> Self {
        overlay.hide();
        Self {
            overlay,
            config,
            base_temperature,
            state: TooltipState::Hidden,
        }
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Pointer entered the cell of `record` (index `index` in its dataset).
    /// Entering while visible simply moves and refills the overlay.
    pub fn on_enter(&mut self, index: usize, record: &TemperatureRecord, pointer: Point) {
        let content = TooltipContent::for_record(record, self.base_temperature);
        let anchor = pointer.offset(self.config.offset_x, self.config.offset_y);
        self.overlay.set_position(anchor);
        self.overlay.set_data_year(record.year);
        self.overlay
            .set_content(&content.to_html(self.config.decimal_sep));
        self.overlay.show();
        self.state = TooltipState::Visible {
            record: index,
            anchor,
        };
    }

    /// Pointer left the cell of `index`. A leave for a cell other than the one
    /// shown is stale and ignored.
    pub fn on_leave(&mut self, index: usize) {
        match self.state {
            TooltipState::Visible { record, .. } if record == index => {
                self.overlay.hide();
                self.state = TooltipState::Hidden;
            }
            _ => {}
        }
    }

    /// Dispatch a hover event; unknown record ids are ignored.
    pub fn handle(&mut self, event: &HoverEvent, dataset: &Dataset) {
        match *event {
            HoverEvent::Enter { record, pointer } => {
                if let Some(r) = dataset.record(record) {
                    self.on_enter(record, r, pointer);
                }
            }
            HoverEvent::Leave { record } => self.on_leave(record),
        }
    }
}
