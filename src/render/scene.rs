//! Retained-mode surface: records everything drawn so it can be inspected,
//! hit-tested, serialized, or painted later by an interactive host.

use super::surface::{
    AxisSpec, CellSpec, DrawingSurface, FillRect, HoverEvent, HoverTracker, Point, TextSpec,
};
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellSpec>,
    pub rects: Vec<FillRect>,
    pub axes: Vec<AxisSpec>,
    pub texts: Vec<TextSpec>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topmost cell under `p`.
    pub fn cell_at(&self, p: Point) -> Option<&CellSpec> {
        self.cells.iter().rev().find(|c| c.rect.contains(p))
    }

    pub fn cell_for_record(&self, record: usize) -> Option<&CellSpec> {
        self.cells.iter().find(|c| c.record == record)
    }

    pub fn axis(&self, id: &str) -> Option<&AxisSpec> {
        self.axes.iter().find(|a| a.id == id)
    }

    pub fn text(&self, id: &str) -> Option<&TextSpec> {
        self.texts.iter().find(|t| t.id == id)
    }

    pub fn rects_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a FillRect> {
        self.rects.iter().filter(move |r| r.class == class)
    }

    /// Hit-test `pointer` (scene coordinates; `None` when it left the canvas)
    /// and advance `tracker`.
    pub fn hover(&self, tracker: &mut HoverTracker, pointer: Option<Point>) -> Vec<HoverEvent> {
        let hit = pointer.and_then(|p| self.cell_at(p)).map(|c| c.record);
        tracker.update(hit, pointer)
    }
}

impl DrawingSurface for Scene {
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn draw_cell(&mut self, cell: &CellSpec) -> Result<()> {
        self.cells.push(*cell);
        Ok(())
    }

    fn draw_rect(&mut self, rect: &FillRect) -> Result<()> {
        self.rects.push(rect.clone());
        Ok(())
    }

    fn draw_axis(&mut self, axis: &AxisSpec) -> Result<()> {
        self.axes.push(axis.clone());
        Ok(())
    }

    fn draw_text(&mut self, text: &TextSpec) -> Result<()> {
        self.texts.push(text.clone());
        Ok(())
    }
}
