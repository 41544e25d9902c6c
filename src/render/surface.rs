//! The drawing-surface capability the chart renderer draws onto, and the
//! enter/leave hover contract for cells.

use crate::error::Result;
use crate::palette::Rgb8;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment so adjacent cells never both claim a point.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Inspectable attributes attached to a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellMeta {
    pub year: i32,
    pub month: u32,
    /// Absolute temperature of the cell's reading.
    pub temperature: f64,
}

/// One heatmap cell. `record` is the index of the reading in its dataset and
/// is the key every hover event for this cell carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellSpec {
    pub record: usize,
    pub rect: Rect,
    pub fill: Rgb8,
    pub meta: CellMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisOrient {
    /// Horizontal axis, labels below the line.
    Bottom,
    /// Vertical axis, labels left of the line.
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// Distance from the axis origin along the axis, in pixels.
    pub offset: f64,
    pub label: String,
}

/// A rendered ordinal or linear axis: the domain line, tick marks and labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub id: String,
    pub orient: AxisOrient,
    pub origin: Point,
    pub length: f64,
    /// Tick label size.
    pub font_px: u32,
    pub ticks: Vec<AxisTick>,
}

/// Outer tick length shared by all surfaces.
pub const TICK_SIZE: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpec {
    pub id: String,
    pub text: String,
    /// Baseline-left for `Start`, baseline-centre for `Middle`.
    pub position: Point,
    pub font_px: u32,
    pub anchor: TextAnchor,
}

/// A filled rectangle that carries no data (legend swatches).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillRect {
    pub class: String,
    pub rect: Rect,
    pub fill: Rgb8,
}

/// Something a chart can be drawn onto.
///
/// Surfaces that support interaction must report hover through `HoverEvent`s
/// keyed by `CellSpec::record`, strictly paired: every `Enter` for a cell is
/// followed by exactly one `Leave` for it before the next `Enter`.
pub trait DrawingSurface {
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<()>;
    fn draw_cell(&mut self, cell: &CellSpec) -> Result<()>;
    fn draw_rect(&mut self, rect: &FillRect) -> Result<()>;
    fn draw_axis(&mut self, axis: &AxisSpec) -> Result<()>;
    fn draw_text(&mut self, text: &TextSpec) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum HoverEvent {
    Enter { record: usize, pointer: Point },
    Leave { record: usize },
}

/// Turns a stream of "which cell is under the pointer" samples into paired
/// enter/leave events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record under the pointer as of the last update.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Feed the record hit at `pointer` (`None` for empty space or pointer gone).
    pub fn update(&mut self, hit: Option<usize>, pointer: Option<Point>) -> Vec<HoverEvent> {
        let hit = match pointer {
            Some(_) => hit,
            None => None,
        };
        if hit == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.current.take() {
            events.push(HoverEvent::Leave { record: prev });
        }
        if let (Some(record), Some(pointer)) = (hit, pointer) {
            events.push(HoverEvent::Enter { record, pointer });
            self.current = Some(record);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_pairs_enter_and_leave() {
        let mut t = HoverTracker::new();
        let p = Point::new(1.0, 1.0);
        assert_eq!(t.update(Some(3), Some(p)), vec![HoverEvent::Enter { record: 3, pointer: p }]);
        assert!(t.update(Some(3), Some(p)).is_empty());
        assert_eq!(
            t.update(Some(4), Some(p)),
            vec![
                HoverEvent::Leave { record: 3 },
                HoverEvent::Enter { record: 4, pointer: p }
            ]
        );
        assert_eq!(t.update(Some(4), None), vec![HoverEvent::Leave { record: 4 }]);
        assert_eq!(t.current(), None);
    }

    #[test]
    fn rect_containment_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }
}
