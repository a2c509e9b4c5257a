//! Scene snapshot model: tokens, walls, and the adapters that turn host
//! documents into plain geometry.

pub mod adapter;
pub mod size;
pub mod token;
pub mod wall;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::TokenId;

pub use size::SizeCategory;
pub use token::{Condition, Token, TokenKind};
pub use wall::{DoorKind, DoorState, Wall};

/// In-memory snapshot of a scene at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// World units per grid square.
    pub grid_unit: f64,
    pub tokens: Vec<Token>,
    pub walls: Vec<Wall>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            grid_unit: 100.0,
            tokens: Vec::new(),
            walls: Vec::new(),
        }
    }
}

impl Scene {
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    pub fn token_by_name(&self, name: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.name == name)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_json_with_defaults() {
        let json = r#"{
            "grid_unit": 50.0,
            "tokens": [
                {"name": "fighter", "x": 0.0, "y": 0.0},
                {"name": "ogre", "x": 200.0, "y": 0.0, "size": "large", "width": 2.0, "height": 2.0}
            ],
            "walls": [
                {"x1": 100.0, "y1": -50.0, "x2": 100.0, "y2": 50.0}
            ]
        }"#;
        let scene = Scene::from_json_str(json).unwrap();
        assert_eq!(scene.grid_unit, 50.0);
        assert_eq!(scene.tokens.len(), 2);
        assert_eq!(scene.walls.len(), 1);
        assert!(scene.walls[0].blocks_cover);
        assert!(scene.token_by_name("ogre").is_some());
        assert_eq!(scene.token_by_name("ogre").unwrap().size, SizeCategory::Large);
    }

    #[test]
    fn test_token_lookup_by_id() {
        let scene = Scene {
            tokens: vec![Token::creature("a", 0.0, 0.0, 1.0, SizeCategory::Medium)],
            ..Scene::default()
        };
        let id = scene.tokens[0].id;
        assert!(scene.token(id).is_some());
        assert!(scene.token(TokenId::new()).is_none());
    }
}
