//! The semantic tree canvas.
//!
//! Receives tree notation from a finished draw, parses it, lays it out with
//! egui's font metrics and paints labels, leaves and edges inside a canvas
//! that scrolls both ways.

use crate::{state::AppState, GuiComponent, GuiResult};
use egui::{Align2, Color32, Context, FontId, Pos2, ScrollArea, Sense, Stroke, Ui, Vec2};
use semtree_core::tree::{parse, ParseError};
use semtree_core::{CanvasConfig, LayoutMetrics, Tree, TreeLayout};

pub struct TreeCanvasComponent {
    config: CanvasConfig,
    tree: Option<Tree>,
    layout: Option<TreeLayout>,
}

impl TreeCanvasComponent {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config, tree: None, layout: None }
    }

    pub fn clear(&mut self) {
        self.tree = None;
        self.layout = None;
    }

    pub fn has_tree(&self) -> bool {
        self.tree.is_some()
    }

    /// Replace the drawing with the tree in `notation`.
    ///
    /// The canvas is cleared first, so a parse failure leaves it empty.
    pub fn show_notation(&mut self, notation: &str) -> Result<(), ParseError> {
        self.clear();
        self.tree = Some(parse(notation)?);
        Ok(())
    }

    fn font(&self) -> FontId {
        FontId::proportional(self.config.font_size)
    }

    fn ensure_layout(&mut self, ui: &Ui) {
        if self.layout.is_some() {
            return;
        }
        let Some(tree) = &self.tree else {
            return;
        };
        let font = self.font();
        let metrics = LayoutMetrics::from(&self.config);
        let layout = TreeLayout::compute(tree, &metrics, |text| {
            ui.fonts(|fonts| fonts.layout_no_wrap(text.to_owned(), font.clone(), Color32::PLACEHOLDER).size().x)
        });
        log::debug!("laid out {} nodes", layout.nodes.len());
        self.layout = Some(layout);
    }

    fn paint(&self, ui: &mut Ui) {
        let min_size = Vec2::from(self.config.min_size);
        let Some(layout) = &self.layout else {
            ui.allocate_space(min_size);
            return;
        };

        let size = Vec2::from(layout.size) + Vec2::splat(self.config.node_gap);
        let (response, painter) = ui.allocate_painter(size.max(min_size), Sense::hover());
        let offset = response.rect.min.to_vec2();
        let at = |point: [f32; 2]| Pos2::from(point) + offset;

        let edge_stroke = Stroke::new(1.0, ui.visuals().weak_text_color());
        for &edge in &layout.edges {
            if let Some((from, to)) = layout.edge_points(edge) {
                painter.line_segment([at(from), at(to)], edge_stroke);
            }
        }

        let font = self.font();
        let label_color = ui.visuals().hyperlink_color;
        let leaf_color = ui.visuals().text_color();
        for node in &layout.nodes {
            let color = if node.is_leaf { leaf_color } else { label_color };
            painter.text(at(node.top_center()), Align2::CENTER_TOP, &node.text, font.clone(), color);
        }
    }
}

impl GuiComponent for TreeCanvasComponent {
    fn name(&self) -> &str {
        "tree_canvas"
    }

    fn render(&mut self, ui: &mut Ui, _ctx: &Context, _state: &mut AppState) -> GuiResult<()> {
        self.ensure_layout(ui);
        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| self.paint(ui));
        Ok(())
    }
}
