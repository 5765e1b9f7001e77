//! Vessel definitions: shape masks, the closed set of vessel kinds and placed
//! vessel instances with their per-cell damage.

use core::fmt;
use core::str::FromStr;

use crate::common::Coord;

/// Orientation of a vessel's mask when placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Mask as defined.
    Unrotated,
    /// Mask turned 90° clockwise; height and width swap.
    Rotated,
}

/// Rectangular occupancy pattern of a vessel. Cells inside the bounding box
/// may be empty, e.g. the Jet's cross shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Mask {
    /// Build a mask from rows of 0/1 values. Any non-zero value is occupied.
    /// Short rows are padded with empty cells up to the widest row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut cells = vec![false; height * width];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[r * width + c] = value != 0;
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (`row`, `col`) of the bounding box is part of the vessel.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of occupied cells.
    pub fn footprint(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// The mask turned 90° clockwise.
    pub fn rotated(&self) -> Self {
        let (height, width) = (self.width, self.height);
        let mut cells = vec![false; height * width];
        for r in 0..height {
            for c in 0..width {
                cells[r * width + c] = self.is_occupied(self.height - 1 - c, r);
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    /// The mask in the given orientation.
    pub fn oriented(&self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Unrotated => self.clone(),
            Orientation::Rotated => self.rotated(),
        }
    }

    /// Occupied `(row, col)` offsets in row-major order.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| occupied)
            .map(move |(i, _)| (i / width, i % width))
    }
}

/// The closed set of vessel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VesselKind {
    Submarine,
    Destroyer,
    Jet,
    General,
}

impl VesselKind {
    pub const ALL: [VesselKind; 4] = [
        VesselKind::Submarine,
        VesselKind::Destroyer,
        VesselKind::Jet,
        VesselKind::General,
    ];

    /// Kinds whose counts are configurable. The General is always placed once.
    pub const FLEET: [VesselKind; 3] = [VesselKind::Submarine, VesselKind::Destroyer, VesselKind::Jet];

    pub fn name(self) -> &'static str {
        match self {
            VesselKind::Submarine => "Submarine",
            VesselKind::Destroyer => "Destroyer",
            VesselKind::Jet => "Jet",
            VesselKind::General => "General",
        }
    }

    /// Two-letter tag used by the text renderer.
    pub fn abbrev(self) -> &'static str {
        match self {
            VesselKind::Submarine => "ss",
            VesselKind::Destroyer => "dd",
            VesselKind::Jet => "jt",
            VesselKind::General => "GN",
        }
    }

    /// Occupancy mask of this kind.
    pub fn mask(self) -> Mask {
        match self {
            VesselKind::Submarine => Mask::from_rows(&[&[1, 1, 1]]),
            VesselKind::Destroyer => Mask::from_rows(&[&[1, 1, 1, 1]]),
            VesselKind::Jet => Mask::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
            VesselKind::General => Mask::from_rows(&[&[1]]),
        }
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for VesselKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        VesselKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s) || kind.abbrev().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown vessel '{}'", s))
    }
}

/// Data-driven vessel record: what it looks like, where it may go and how
/// many copies each board carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselType {
    kind: VesselKind,
    mask: Mask,
    footprint: usize,
    layers: Vec<usize>,
    count: usize,
}

impl VesselType {
    pub fn new(kind: VesselKind, layers: Vec<usize>, count: usize) -> Self {
        let mask = kind.mask();
        let footprint = mask.footprint();
        Self {
            kind,
            mask,
            footprint,
            layers,
            count,
        }
    }

    /// Standard table: Submarines in the deep sea, Destroyers at sea level and
    /// a Jet in the air.
    pub fn standard(kind: VesselKind) -> Self {
        match kind {
            VesselKind::Submarine => Self::new(kind, vec![0], 2),
            VesselKind::Destroyer => Self::new(kind, vec![1], 2),
            VesselKind::Jet => Self::new(kind, vec![2], 1),
            VesselKind::General => Self::new(kind, crate::config::GENERAL_LAYERS.to_vec(), 1),
        }
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn footprint(&self) -> usize {
        self.footprint
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn permits_layer(&self, layer: usize) -> bool {
        self.layers.contains(&layer)
    }

    pub(crate) fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    pub(crate) fn set_layers(&mut self, layers: Vec<usize>) {
        self.layers = layers;
    }
}

/// Identifier of a placed vessel, unique within one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VesselId(pub u32);

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vessel placed on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselInstance {
    id: VesselId,
    kind: VesselKind,
    layer: usize,
    cells: Vec<(usize, usize)>,
    hits: Vec<bool>,
}

impl VesselInstance {
    pub(crate) fn new(id: VesselId, kind: VesselKind, layer: usize, cells: Vec<(usize, usize)>) -> Self {
        let hits = vec![false; cells.len()];
        Self {
            id,
            kind,
            layer,
            cells,
            hits,
        }
    }

    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Occupied `(row, col)` cells on [`layer`](Self::layer).
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Occupied cells as absolute board coordinates.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .map(move |&(row, col)| Coord::new(row, col, self.layer))
    }

    pub fn footprint(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.position(coord).is_some()
    }

    /// Whether the segment at `coord` has been hit.
    pub fn is_hit_at(&self, coord: Coord) -> bool {
        self.position(coord).map_or(false, |i| self.hits[i])
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&hit| hit).count()
    }

    /// Destroyed once every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hit_count() == self.footprint()
    }

    /// Record a hit at `coord`. Returns `true` only the first time a segment
    /// is hit; repeat hits and cells outside the vessel change nothing.
    pub(crate) fn register_hit(&mut self, coord: Coord) -> bool {
        match self.position(coord) {
            Some(i) if !self.hits[i] => {
                self.hits[i] = true;
                true
            }
            _ => false,
        }
    }

    fn position(&self, coord: Coord) -> Option<usize> {
        if coord.layer != self.layer {
            return None;
        }
        self.cells
            .iter()
            .position(|&(row, col)| row == coord.row && col == coord.col)
    }
}
