//! Tree layout for drawing.
//!
//! Subtrees are packed left to right with a fixed gap, each level sits a
//! fixed distance below its parent, and a parent is centered over its first
//! and last child. Text width comes from a caller-supplied measuring
//! function so the layout stays independent of any font machinery.

use crate::config::CanvasConfig;
use crate::tree::{Node, Tree};

/// Spacing used by [`TreeLayout::compute`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Top-left corner of the drawing
    pub origin: [f32; 2],
    pub level_height: f32,
    pub node_gap: f32,
    /// Height of one line of text
    pub line_height: f32,
    /// Horizontal padding on each side of a node's text
    pub padding: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::from(&CanvasConfig::default())
    }
}

impl From<&CanvasConfig> for LayoutMetrics {
    fn from(config: &CanvasConfig) -> Self {
        Self {
            origin: config.origin,
            level_height: config.level_height,
            node_gap: config.node_gap,
            line_height: config.font_size * 1.4,
            padding: 3.0,
        }
    }
}

/// A positioned label or leaf
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub text: String,
    pub is_leaf: bool,
    pub depth: usize,
    /// Top-left corner
    pub min: [f32; 2],
    pub size: [f32; 2],
}

impl LayoutNode {
    pub fn center_x(&self) -> f32 {
        self.min[0] + self.size[0] / 2.0
    }

    pub fn top_center(&self) -> [f32; 2] {
        [self.center_x(), self.min[1]]
    }

    pub fn bottom_center(&self) -> [f32; 2] {
        [self.center_x(), self.min[1] + self.size[1]]
    }

    pub fn max(&self) -> [f32; 2] {
        [self.min[0] + self.size[0], self.min[1] + self.size[1]]
    }
}

#[derive(Debug, Clone, Copy)]
enum Item<'a> {
    Tree(&'a Tree),
    Leaf(&'a str),
}

impl<'a> Item<'a> {
    fn of(node: &'a Node) -> Self {
        match node {
            Node::Tree(tree) => Self::Tree(tree),
            Node::Leaf(leaf) => Self::Leaf(leaf),
        }
    }

    fn text(self) -> &'a str {
        match self {
            Self::Tree(tree) => tree.label.as_str(),
            Self::Leaf(leaf) => leaf,
        }
    }

    fn children(self) -> &'a [Node] {
        match self {
            Self::Tree(tree) => &tree.children,
            Self::Leaf(_) => &[],
        }
    }
}

/// Positioned nodes of one tree, in pre-order, plus parent → child edges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    pub nodes: Vec<LayoutNode>,
    /// `(parent, child)` indices into `nodes`
    pub edges: Vec<(usize, usize)>,
    /// Bottom-right corner of the drawing, origin included
    pub size: [f32; 2],
}

struct Placer<'m, F> {
    metrics: &'m LayoutMetrics,
    measure: F,
    layout: TreeLayout,
}

impl<F: Fn(&str) -> f32> Placer<'_, F> {
    fn node_width(&self, text: &str) -> f32 {
        (self.measure)(text) + 2.0 * self.metrics.padding
    }

    fn children_width(&self, children: &[Node]) -> f32 {
        if children.is_empty() {
            return 0.0;
        }
        let gaps = self.metrics.node_gap * (children.len() - 1) as f32;
        children.iter().map(|child| self.subtree_width(Item::of(child))).sum::<f32>() + gaps
    }

    fn subtree_width(&self, item: Item<'_>) -> f32 {
        self.node_width(item.text()).max(self.children_width(item.children()))
    }

    /// Place `item` inside `[left, left + width)`; returns its node index
    fn place(&mut self, item: Item<'_>, depth: usize, left: f32, width: f32) -> usize {
        let index = self.layout.nodes.len();
        let own_width = self.node_width(item.text());
        let top = self.metrics.origin[1] + depth as f32 * self.metrics.level_height;
        self.layout.nodes.push(LayoutNode {
            text: item.text().to_string(),
            is_leaf: matches!(item, Item::Leaf(_)),
            depth,
            min: [left, top],
            size: [own_width, self.metrics.line_height],
        });

        let children = item.children();
        let mut cursor = left + (width - self.children_width(children)) / 2.0;
        let mut child_indices = Vec::with_capacity(children.len());
        for child in children {
            let child = Item::of(child);
            let child_width = self.subtree_width(child);
            child_indices.push(self.place(child, depth + 1, cursor, child_width));
            cursor += child_width + self.metrics.node_gap;
        }

        let center = match (child_indices.first(), child_indices.last()) {
            (Some(&first), Some(&last)) => {
                (self.layout.nodes[first].center_x() + self.layout.nodes[last].center_x()) / 2.0
            }
            _ => left + width / 2.0,
        };
        // stay inside the slot so a wide label cannot cover a neighbour
        let min_x = (center - own_width / 2.0).min(left + width - own_width).max(left);
        self.layout.nodes[index].min[0] = min_x;
        self.layout.edges.extend(child_indices.into_iter().map(|child| (index, child)));
        index
    }
}

impl TreeLayout {
    /// Lay out `tree`; `measure` returns the drawn width of a string
    pub fn compute<F>(tree: &Tree, metrics: &LayoutMetrics, measure: F) -> Self
    where
        F: Fn(&str) -> f32,
    {
        let mut placer = Placer { metrics, measure, layout: Self::default() };
        let root = Item::Tree(tree);
        let width = placer.subtree_width(root);
        placer.place(root, 0, metrics.origin[0], width);

        let mut layout = placer.layout;
        layout.size = layout.nodes.iter().fold(metrics.origin, |size, node| {
            let max = node.max();
            [size[0].max(max[0]), size[1].max(max[1])]
        });
        layout
    }

    /// Line endpoints for an edge: parent bottom-center to child top-center
    pub fn edge_points(&self, (parent, child): (usize, usize)) -> Option<([f32; 2], [f32; 2])> {
        let parent = self.nodes.get(parent)?;
        let child = self.nodes.get(child)?;
        Some((parent.bottom_center(), child.top_center()))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
