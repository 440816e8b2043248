use super::element::{self, ElementData};
use nalgebra::Point3;

/// An atom of a small-molecule structure.
///
/// Atoms carry only what the structure file provides: the element symbol
/// (normalized capitalization), Cartesian coordinates in Angstroms and the
/// formal charge from the charge property block.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub position: Point3<f64>,
    pub formal_charge: i8,
}

impl Atom {
    pub fn new(symbol: &str, position: Point3<f64>) -> Self {
        Self {
            symbol: element::normalize_symbol(symbol),
            position,
            formal_charge: 0,
        }
    }

    pub fn is_element(&self, symbol: &str) -> bool {
        self.symbol == symbol
    }

    pub fn is_hydrogen(&self) -> bool {
        matches!(self.symbol.as_str(), "H" | "D" | "T")
    }

    pub fn element_data(&self) -> Option<&'static ElementData> {
        element::lookup(&self.symbol)
    }
}
