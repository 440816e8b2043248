use super::DescriptorError;
use crate::core::analysis::patterns;
use crate::core::analysis::shape::{self, ShapeDescriptors};
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;

/// Descriptors computable from the structure file alone.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralDescriptors {
    pub atom_count: usize,
    pub bond_count: usize,
    pub exact_mol_wt: f64,
    pub methyl_count: usize,
    pub amine_count: usize,
    pub hydroxy_count: usize,
    pub ring_count: usize,
    pub fraction_csp3: f64,
    pub shape: ShapeDescriptors,
}

impl StructuralDescriptors {
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownElement`] if an atom's mass is not known.
    pub fn compute(mol: &Molecule) -> Result<Self, DescriptorError> {
        let mut exact_mol_wt = 0.0;
        let mut masses = Vec::with_capacity(mol.atom_count());
        for (index, atom) in mol.atoms().iter().enumerate() {
            let data = atom
                .element_data()
                .ok_or_else(|| DescriptorError::UnknownElement {
                    symbol: atom.symbol.clone(),
                    index,
                })?;
            exact_mol_wt += data.monoisotopic_mass;
            masses.push(data.average_mass);
        }
        let positions: Vec<Point3<f64>> = mol.atoms().iter().map(|a| a.position).collect();

        Ok(Self {
            atom_count: mol.atom_count(),
            bond_count: mol.bond_count(),
            exact_mol_wt,
            methyl_count: patterns::methyl_count(mol),
            amine_count: patterns::amine_count(mol),
            hydroxy_count: patterns::hydroxy_count(mol),
            ring_count: patterns::ring_count(mol),
            fraction_csp3: patterns::fraction_csp3(mol),
            shape: shape::compute(&positions, &masses),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::topology::{Bond, BondOrder};

    fn water() -> Molecule {
        Molecule::new(
            "water",
            vec![
                Atom::new("O", Point3::new(0.0, 0.0, 0.0)),
                Atom::new("H", Point3::new(0.757, 0.586, 0.0)),
                Atom::new("H", Point3::new(-0.757, 0.586, 0.0)),
            ],
            vec![
                Bond::new(0, 1, BondOrder::Single),
                Bond::new(0, 2, BondOrder::Single),
            ],
        )
    }

    #[test]
    fn computes_counts_and_monoisotopic_mass() {
        let d = StructuralDescriptors::compute(&water()).unwrap();
        assert_eq!(d.atom_count, 3);
        assert_eq!(d.bond_count, 2);
        assert!((d.exact_mol_wt - 18.010_564_683_7).abs() < 1e-6);
        assert_eq!(d.hydroxy_count, 0);
        assert_eq!(d.ring_count, 0);
        assert_eq!(d.fraction_csp3, 0.0);
        assert!(d.shape.radius_of_gyration > 0.0);
    }

    #[test]
    fn deuterated_and_ionic_structures_are_described() {
        let heavy_water = Molecule::new(
            "heavy water",
            vec![
                Atom::new("O", Point3::new(0.0, 0.0, 0.0)),
                Atom::new("D", Point3::new(0.757, 0.586, 0.0)),
                Atom::new("D", Point3::new(-0.757, 0.586, 0.0)),
            ],
            vec![
                Bond::new(0, 1, BondOrder::Single),
                Bond::new(0, 2, BondOrder::Single),
            ],
        );
        let d = StructuralDescriptors::compute(&heavy_water).unwrap();
        assert!((d.exact_mol_wt - 20.023_118_176).abs() < 1e-6);

        let salt = Molecule::new(
            "sodium chloride",
            vec![
                Atom::new("Na", Point3::origin()),
                Atom::new("Cl", Point3::new(2.36, 0.0, 0.0)),
            ],
            Vec::new(),
        );
        let d = StructuralDescriptors::compute(&salt).unwrap();
        assert_eq!(d.atom_count, 2);
        assert_eq!(d.ring_count, 0);
    }

    #[test]
    fn unknown_element_is_an_error() {
        let mol = Molecule::new("x", vec![Atom::new("Xx", Point3::origin())], Vec::new());
        assert!(matches!(
            StructuralDescriptors::compute(&mol).unwrap_err(),
            DescriptorError::UnknownElement { index: 0, .. }
        ));
    }
}
