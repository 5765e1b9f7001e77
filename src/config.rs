//! Game configuration: board size, the vessel table and rule switches.
//!
//! A [`GameConfig`] is a plain value built fresh for every game. Nothing in
//! the crate keeps a shared default that could be mutated between games.

use crate::common::{ConfigError, Dimensions};
use crate::vessel::{VesselKind, VesselType};

pub const LAYER_COUNT: usize = 3;
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
/// Attempts allowed for each piece before generation gives up.
pub const PLACEMENT_ATTEMPTS: usize = 50;
/// Layers the General may be placed on.
pub const GENERAL_LAYERS: [usize; 2] = [0, 1];
/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 1000;
/// Largest accepted board, in cells across all layers.
pub const MAX_CELLS: usize = 1 << 22;
pub const LAYER_NAMES: [&str; LAYER_COUNT] = ["Deep Sea", "Sea Level", "Air"];

/// Title of a layer for display.
pub fn layer_name(layer: usize) -> String {
    match LAYER_NAMES.get(layer) {
        Some(name) => (*name).to_string(),
        None => format!("Layer {}", layer),
    }
}

/// Condition under which the shooter wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WinCondition {
    /// Destroying the opponent's General wins outright.
    #[default]
    GeneralDestroyed,
    /// Destroying the General, or every other opponent vessel, wins.
    GeneralOrFleet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    dimensions: Dimensions,
    fleet: Vec<VesselType>,
    general_layers: Vec<usize>,
    placement_attempts: usize,
    win_condition: WinCondition,
}

impl GameConfig {
    /// A `rows × cols` board with the standard three layers and vessel table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            dimensions: Dimensions::new(rows, cols, LAYER_COUNT),
            fleet: VesselKind::FLEET
                .iter()
                .map(|&kind| VesselType::standard(kind))
                .collect(),
            general_layers: GENERAL_LAYERS.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            win_condition: WinCondition::default(),
        }
    }

    /// Set how many pieces of `kind` each board carries. A kind missing
    /// from the fleet is added with its standard layers. The General is
    /// always placed exactly once, so its count is left alone.
    pub fn with_count(mut self, kind: VesselKind, count: usize) -> Self {
        if kind != VesselKind::General {
            self.entry_mut(kind).set_count(count);
        }
        self
    }

    /// Set the layers `kind` may be placed on.
    pub fn with_layers(mut self, kind: VesselKind, layers: Vec<usize>) -> Self {
        match kind {
            VesselKind::General => self.general_layers = layers,
            _ => self.entry_mut(kind).set_layers(layers),
        }
        self
    }

    /// Resize each layer to `rows × cols`, keeping the layer count.
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.dimensions.rows = rows;
        self.dimensions.cols = cols;
        self
    }

    pub fn with_general_layers(mut self, layers: Vec<usize>) -> Self {
        self.general_layers = layers;
        self
    }

    pub fn with_layer_count(mut self, layers: usize) -> Self {
        self.dimensions.layers = layers;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    pub fn with_win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = win_condition;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Non-flagship vessel types in placement order.
    pub fn fleet(&self) -> &[VesselType] {
        &self.fleet
    }

    pub fn vessel_type(&self, kind: VesselKind) -> Option<&VesselType> {
        self.fleet.iter().find(|t| t.kind() == kind)
    }

    /// Configured pieces of `kind`. The General is always 1.
    pub fn count(&self, kind: VesselKind) -> usize {
        match kind {
            VesselKind::General => 1,
            _ => self.vessel_type(kind).map_or(0, VesselType::count),
        }
    }

    pub fn general_layers(&self) -> &[usize] {
        &self.general_layers
    }

    /// Type record for the General on this board.
    pub fn general_type(&self) -> VesselType {
        VesselType::new(VesselKind::General, self.general_layers.clone(), 1)
    }

    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts
    }

    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    /// Check the configuration before any placement happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = self.dimensions;
        if dims.rows == 0 {
            return Err(ConfigError::NonPositiveDimension { axis: "rows", value: 0 });
        }
        if dims.cols == 0 {
            return Err(ConfigError::NonPositiveDimension { axis: "cols", value: 0 });
        }
        if dims.layers == 0 {
            return Err(ConfigError::NonPositiveDimension { axis: "layers", value: 0 });
        }
        match dims.checked_total_cells() {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::BoardTooLarge {
                    rows: dims.rows,
                    cols: dims.cols,
                    layers: dims.layers,
                    max: MAX_CELLS,
                })
            }
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        for vessel in &self.fleet {
            check_layers(vessel.kind(), vessel.layers(), dims.layers)?;
        }
        check_layers(VesselKind::General, &self.general_layers, dims.layers)
    }

    /// Fleet record for `kind`, one per kind, never the General.
    fn entry_mut(&mut self, kind: VesselKind) -> &mut VesselType {
        match self.fleet.iter().position(|t| t.kind() == kind) {
            Some(i) => &mut self.fleet[i],
            None => {
                self.fleet.push(VesselType::standard(kind));
                let last = self.fleet.len() - 1;
                &mut self.fleet[last]
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

fn check_layers(kind: VesselKind, layers: &[usize], available: usize) -> Result<(), ConfigError> {
    if layers.is_empty() {
        return Err(ConfigError::NoPermittedLayers(kind));
    }
    match layers.iter().find(|&&layer| layer >= available) {
        Some(&layer) => Err(ConfigError::LayerOutOfRange {
            kind,
            layer,
            layers: available,
        }),
        None => Ok(()),
    }
}
