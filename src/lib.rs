//! Gridcover - tactical cover detection for 2D tabletop grids
//!
//! Computes how obstructed the line of effect between two scene tokens (or
//! between an area-effect origin and a token) is, under several pluggable
//! geometric strategies, returning one of four ordered cover levels.

pub mod core;
pub mod cover;
pub mod geometry;
pub mod scene;

pub use crate::core::{CoverThresholds, DetectionConfig, FilterToggles, IntersectionMode, TokenId};
pub use crate::cover::{Anchor, CoverDetector, CoverLevel, VisibilityProvider};
pub use crate::scene::{Scene, SizeCategory, Token, Wall};
