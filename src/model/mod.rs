//! Document model types.
//!
//! This module defines the intermediate representation that sits between
//! the layout collaborator and the serializers: page geometry, ragged cell
//! grids, and the typed reading-order element sequence.

mod document;
mod element;
mod grid;
mod region;

pub use document::{Document, ExtractionStats};
pub use element::Element;
pub use grid::{Cell, CellGrid};
pub use region::{BoundingBox, Region};
