use std::collections::HashMap;

use crate::coords::{Affine2, Rect};
use crate::image::Image;
use crate::path::Path;
use crate::scene3d::{GeometryBackend, GeometryDesc, GeometryHandle, SceneGraph};
use crate::surface::{FillStyle, ImageStyle, StrokeStyle, Surface, TextRun};

use super::DrawCmd;

/// A single recorded command with its paint-order index.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Retained-geometry traffic seen by a [`DrawList`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GeometryCounters {
    pub created: u64,
    pub released: u64,
    pub scenes_presented: u64,
}

/// Recorded draw stream for a frame, plus the retained 3D geometry it has been asked
/// to keep.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for reuse across frames
///
/// # Layers
///
/// `begin_layer` / `end_layer` are recorded in-stream and must be balanced.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    layer_depth: usize,

    geometry: HashMap<GeometryHandle, GeometryDesc>,
    next_geometry: u64,
    counters: GeometryCounters,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Retained geometry is kept; it belongs to the scene
    /// graph, not to one frame.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.layer_depth = 0;
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates commands in paint order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|i| &i.cmd)
    }

    /// Appends a command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { order, cmd });
    }

    /// Geometry created and not yet released.
    #[inline]
    pub fn live_geometry(&self) -> &HashMap<GeometryHandle, GeometryDesc> {
        &self.geometry
    }

    #[inline]
    pub fn geometry_counters(&self) -> GeometryCounters {
        self.counters
    }

    /// Per-kind command counts, sorted by kind.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for cmd in self.commands() {
            *counts.entry(cmd.kind()).or_default() += 1;
        }
        let mut out: Vec<_> = counts.into_iter().collect();
        out.sort_unstable();
        out
    }
}

impl GeometryBackend for DrawList {
    fn create_geometry(&mut self, desc: &GeometryDesc) -> GeometryHandle {
        self.next_geometry += 1;
        let handle = GeometryHandle(self.next_geometry);
        self.geometry.insert(handle, desc.clone());
        self.counters.created += 1;
        handle
    }

    fn release_geometry(&mut self, handle: GeometryHandle) {
        let removed = self.geometry.remove(&handle);
        debug_assert!(removed.is_some(), "release of unknown geometry {handle:?}");
        self.counters.released += 1;
    }
}

impl Surface for DrawList {
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn fill_path(&mut self, path: &Path, style: &FillStyle, transform: &Affine2) {
        self.push_fill(path.clone(), *style, *transform);
    }

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle, transform: &Affine2) {
        self.push_stroke(path.clone(), *style, *transform);
    }

    fn draw_image(&mut self, image: &Image, dest: Rect, style: &ImageStyle, transform: &Affine2) {
        self.push_image(image, dest, *style, *transform);
    }

    fn draw_text(&mut self, run: &TextRun, transform: &Affine2) {
        self.push_text(run.clone(), *transform);
    }

    fn begin_layer(&mut self) {
        self.layer_depth += 1;
        self.push(DrawCmd::BeginLayer);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `begin_layer`.
    fn end_layer(&mut self) {
        debug_assert!(self.layer_depth > 0, "end_layer called without matching begin_layer");
        self.layer_depth = self.layer_depth.saturating_sub(1);
        self.push(DrawCmd::EndLayer);
    }

    fn present_scene(&mut self, _scene: &SceneGraph) {
        self.counters.scenes_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgba;
    use crate::scene3d::{Material, Shape3d};
    use crate::style::BlendMode;

    fn fill() -> FillStyle {
        FillStyle { color: Rgba::white(), blend: BlendMode::Normal }
    }

    #[test]
    fn records_in_paint_order() {
        let mut list = DrawList::new();
        let path = Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        list.begin_layer();
        list.fill_path(&path, &fill(), &Affine2::IDENTITY);
        list.end_layer();

        let kinds: Vec<_> = list.commands().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["begin-layer", "fill", "end-layer"]);
        assert_eq!(list.items()[2].order, 2);
    }

    #[test]
    fn clear_keeps_geometry() {
        let mut list = DrawList::new();
        let mut scene = SceneGraph::new();
        scene.begin_frame();
        let h = scene.add_geometry(&mut list, Shape3d::Sphere { radius: 1.0 }, &Material::default());
        list.fill_path(&Path::new(), &fill(), &Affine2::IDENTITY);

        list.clear();
        assert!(list.is_empty());
        assert!(list.live_geometry().contains_key(&h));
    }

    #[test]
    fn geometry_counters_track_traffic() {
        let mut list = DrawList::new();
        let mut scene = SceneGraph::new();
        let desc = GeometryDesc {
            shape: Shape3d::Plane { width: 1.0, height: 1.0 },
            material: Material::default(),
            node: scene.root(),
        };
        let h = list.create_geometry(&desc);
        list.release_geometry(h);
        scene.teardown(&mut list);

        let c = list.geometry_counters();
        assert_eq!((c.created, c.released), (1, 1));
        assert!(list.live_geometry().is_empty());
    }

    #[test]
    fn summary_counts_kinds() {
        let mut list = DrawList::new();
        let path = Path::new();
        list.fill_path(&path, &fill(), &Affine2::IDENTITY);
        list.fill_path(&path, &fill(), &Affine2::IDENTITY);
        list.begin_layer();
        list.end_layer();
        assert_eq!(list.summary(), vec![("begin-layer", 1), ("end-layer", 1), ("fill", 2)]);
    }
}
