use crate::core::{math::Vector2, traits::Real};
use crate::sketch::Orientation;

/// Logical coordinate of a [Node] inside a [LaminateData]: layer index from
/// the bottom, ply index inside the layer, node index inside the ply.
///
/// Positions order lexicographically. They are stable logical indexes, not
/// pointers: node insertion renumbers the successor positions in the affected
/// ply and patches the back references of their linked nodes, so a stored
/// position never dangles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodePos {
    pub layer: usize,
    pub ply: usize,
    pub node: usize,
}

impl NodePos {
    pub fn new(layer: usize, ply: usize, node: usize) -> Self {
        NodePos { layer, ply, node }
    }
}

/// A ply vertex carrying its coordinates, its own position, and optional
/// links to the adjacent node in the layer above (`upper`) and below
/// (`lower`).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T = f64> {
    pub point: Vector2<T>,
    pub position: NodePos,
    pub upper: Option<NodePos>,
    pub lower: Option<NodePos>,
}

impl<T> Node<T>
where
    T: Real,
{
    pub fn new(point: Vector2<T>, position: NodePos) -> Self {
        Node {
            point,
            position,
            upper: None,
            lower: None,
        }
    }
}

/// A single horizontally-extending segment chain of a layer, tagged with its
/// fiber orientation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ply<T = f64> {
    nodes: Vec<Node<T>>,
    pub orientation: Orientation,
}

impl<T> Ply<T>
where
    T: Real,
{
    pub fn new(orientation: Orientation) -> Self {
        Ply {
            nodes: Vec::new(),
            orientation,
        }
    }

    pub fn with_capacity(orientation: Orientation, capacity: usize) -> Self {
        Ply {
            nodes: Vec::with_capacity(capacity),
            orientation,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, node: Node<T>) {
        self.nodes.push(node);
    }

    pub(crate) fn insert_node(&mut self, index: usize, node: Node<T>) {
        self.nodes.insert(index, node);
    }

    pub fn node(&self, index: usize) -> &Node<T> {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        &mut self.nodes[index]
    }

    /// First node of the ply. Panics if the ply is empty (a well formed ply
    /// always has at least two nodes).
    pub fn first_node(&self) -> &Node<T> {
        &self.nodes[0]
    }

    /// Last node of the ply. Panics if the ply is empty.
    pub fn last_node(&self) -> &Node<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }
}

/// Horizontal stratum composed of one or more plies ordered left to right by
/// leftmost x.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer<T = f64> {
    plies: Vec<Ply<T>>,
}

impl<T> Layer<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Layer { plies: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    pub fn add_ply(&mut self, ply: Ply<T>) {
        self.plies.push(ply);
    }

    pub fn ply(&self, index: usize) -> &Ply<T> {
        &self.plies[index]
    }

    pub(crate) fn ply_mut(&mut self, index: usize) -> &mut Ply<T> {
        &mut self.plies[index]
    }

    pub fn plies(&self) -> &[Ply<T>] {
        &self.plies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ply<T>> {
        self.plies.iter()
    }
}

/// The assembled laminate: an ordered stack of layers, bottom to top, whose
/// nodes are cross-linked by [NodePos] indexes.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaminateData<T = f64> {
    layers: Vec<Layer<T>>,
}

impl<T> LaminateData<T>
where
    T: Real,
{
    pub fn new() -> Self {
        LaminateData { layers: Vec::new() }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn reserve_layers(&mut self, additional: usize) {
        self.layers.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub(crate) fn add_layer(&mut self) {
        self.layers.push(Layer::new());
    }

    pub(crate) fn reverse_layer_order(&mut self) {
        self.layers.reverse();
    }

    pub fn layer(&self, index: usize) -> &Layer<T> {
        &self.layers[index]
    }

    pub(crate) fn layer_mut(&mut self, index: usize) -> &mut Layer<T> {
        &mut self.layers[index]
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    /// Look up a node by position. Panics when the position does not refer
    /// to a node, which for a well formed laminate only happens with a stale
    /// externally-stored position.
    pub fn node(&self, pos: NodePos) -> &Node<T> {
        self.layers[pos.layer].ply(pos.ply).node(pos.node)
    }

    pub(crate) fn node_mut(&mut self, pos: NodePos) -> &mut Node<T> {
        self.layers[pos.layer].ply_mut(pos.ply).node_mut(pos.node)
    }

    /// Iterate over every node of every ply, bottom layer first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.iter().flat_map(|ply| ply.iter()))
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node<T>> {
        self.layers
            .iter_mut()
            .flat_map(|layer| layer.plies.iter_mut().flat_map(|ply| ply.nodes.iter_mut()))
    }

    /// Insert `node` into the ply identified by `pos` at `pos.node`,
    /// renumbering the positions of the shifted successors and patching the
    /// back references of their cross-layer links. The inserted node takes
    /// `pos` as its position.
    pub(crate) fn insert_node(&mut self, pos: NodePos, mut node: Node<T>) {
        node.position = pos;
        self.layers[pos.layer]
            .ply_mut(pos.ply)
            .insert_node(pos.node, node);
        self.reindex_after_insert(pos);
    }

    fn reindex_after_insert(&mut self, pos: NodePos) {
        let ply_len = self.layer(pos.layer).ply(pos.ply).len();
        for index in pos.node + 1..ply_len {
            let shifted = NodePos::new(pos.layer, pos.ply, index);
            let (upper, lower) = {
                let node = self.node_mut(shifted);
                node.position.node += 1;
                (node.upper, node.lower)
            };
            if let Some(link) = lower {
                if let Some(back) = self.node_mut(link).upper.as_mut() {
                    back.node += 1;
                }
            }
            if let Some(link) = upper {
                if let Some(back) = self.node_mut(link).lower.as_mut() {
                    back.node += 1;
                }
            }
        }
    }

    /// Returns true if `pos` refers to the first node of its ply.
    pub fn is_first_ply_node(&self, pos: NodePos) -> bool {
        pos.node == 0
    }

    /// Returns true if `pos` refers to the last node of its ply.
    pub fn is_last_ply_node(&self, pos: NodePos) -> bool {
        pos.node + 1 == self.layer(pos.layer).ply(pos.ply).len()
    }

    /// Position of the bottom-left root node used to start column walks.
    ///
    /// Starting from the first node of the bottom layer, climbs `upper`
    /// links; whenever the climb lands mid-ply the walk restarts from that
    /// ply's first node and records it as the new root candidate.
    pub fn find_root_node(&self) -> NodePos {
        debug_assert!(!self.is_empty(), "laminate is empty");
        let mut result = NodePos::new(0, 0, 0);
        let mut current = result;
        while let Some(link) = self.node(current).upper {
            current = link;
            if current.node != 0 {
                current = self
                    .layer(current.layer)
                    .ply(current.ply)
                    .first_node()
                    .position;
                result = current;
            }
        }

        result
    }

    /// Follow `lower` links from `start` to the bottom of its column.
    pub fn trace_to_bottom(&self, start: NodePos) -> NodePos {
        let mut current = start;
        while let Some(link) = self.node(current).lower {
            current = link;
        }

        current
    }

    /// Follow `upper` links from `start` to the top of its column.
    pub fn trace_to_top(&self, start: NodePos) -> NodePos {
        let mut current = start;
        while let Some(link) = self.node(current).upper {
            current = link;
        }

        current
    }
}
