#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Maps the bond type code of an MDL molfile bond line. Query bond types (5-8) have no
    /// concrete order and map to `None`.
    pub fn from_mdl_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            4 => Some(Self::Aromatic),
            _ => None,
        }
    }
}

/// A bond between two atoms, referenced by their zero-based position in the molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(atom1: usize, atom2: usize, order: BondOrder) -> Self {
        Self {
            atom1,
            atom2,
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mdl_codes_map_to_concrete_orders() {
        assert_eq!(BondOrder::from_mdl_code(1), Some(BondOrder::Single));
        assert_eq!(BondOrder::from_mdl_code(2), Some(BondOrder::Double));
        assert_eq!(BondOrder::from_mdl_code(3), Some(BondOrder::Triple));
        assert_eq!(BondOrder::from_mdl_code(4), Some(BondOrder::Aromatic));
    }

    #[test]
    fn query_bond_codes_are_rejected() {
        assert_eq!(BondOrder::from_mdl_code(0), None);
        assert_eq!(BondOrder::from_mdl_code(8), None);
    }
}
