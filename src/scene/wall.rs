//! Wall snapshot and blocking rules

use serde::{Deserialize, Serialize};

use crate::core::error::{CoverError, Result};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    #[default]
    None,
    Door,
    Secret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    #[default]
    Closed,
    Open,
    Locked,
}

/// Snapshot of a wall-like scene entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Wall {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub door: DoorKind,
    pub door_state: DoorState,
    /// Explicit "does not provide cover" override: when false the wall is
    /// transparent regardless of geometry.
    pub blocks_cover: bool,
}

impl Default for Wall {
    fn default() -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            door: DoorKind::None,
            door_state: DoorState::Closed,
            blocks_cover: true,
        }
    }
}

impl Wall {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            ..Self::default()
        }
    }

    pub fn door(x1: f64, y1: f64, x2: f64, y2: f64, state: DoorState) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            door: DoorKind::Door,
            door_state: state,
            ..Self::default()
        }
    }

    /// Does this wall currently block lines of effect? An open door never
    /// blocks; a locked or closed one does. Secret doors block like walls.
    pub fn blocks(&self) -> bool {
        if !self.blocks_cover {
            return false;
        }
        !(self.door != DoorKind::None && self.door_state == DoorState::Open)
    }

    /// Endpoints as a segment, rejecting malformed coordinates.
    pub fn segment(&self) -> Result<(Point, Point)> {
        let a = Point::new(self.x1, self.y1);
        let b = Point::new(self.x2, self.y2);
        if !a.is_finite() || !b.is_finite() {
            return Err(CoverError::MalformedGeometry(format!(
                "wall endpoints ({}, {}) -> ({}, {})",
                self.x1, self.y1, self.x2, self.y2
            )));
        }
        Ok((a, b))
    }
}
