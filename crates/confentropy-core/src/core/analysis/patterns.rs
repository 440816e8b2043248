//! Functional-group and topology counts evaluated directly on the explicit-hydrogen graph.
//!
//! The structure files keep every hydrogen as an atom, so an atom's total hydrogen count is
//! the number of bonded hydrogen atoms and its connectivity is its degree.

use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;

/// Terminal methyl carbons: four connections, three of them hydrogens (`[CX4H3]`).
pub fn methyl_count(mol: &Molecule) -> usize {
    atoms_where(mol, |i| {
        mol.atoms()[i].is_element("C") && mol.degree(i) == 4 && mol.hydrogen_count(i) == 3
    })
}

/// Primary and secondary amines that are not amides (`[NX3;H2,H1;!$(NC=O)]`).
pub fn amine_count(mol: &Molecule) -> usize {
    atoms_where(mol, |i| {
        mol.atoms()[i].is_element("N")
            && mol.degree(i) == 3
            && matches!(mol.hydrogen_count(i), 1 | 2)
            && !mol
                .neighbors(i)
                .iter()
                .any(|&(n, _)| is_carbonyl_carbon(mol, n))
    })
}

/// Hydroxyl oxygens: two connections, exactly one hydrogen (`[OX2H]`).
pub fn hydroxy_count(mol: &Molecule) -> usize {
    atoms_where(mol, |i| {
        mol.atoms()[i].is_element("O") && mol.degree(i) == 2 && mol.hydrogen_count(i) == 1
    })
}

/// Number of independent rings (the cyclomatic number of the bond graph).
pub fn ring_count(mol: &Molecule) -> usize {
    (mol.bond_count() + mol.component_count()).saturating_sub(mol.atom_count())
}

/// Fraction of carbons that are sp3: four connections, all through single bonds.
pub fn fraction_csp3(mol: &Molecule) -> f64 {
    let carbons = atoms_where(mol, |i| mol.atoms()[i].is_element("C"));
    if carbons == 0 {
        return 0.0;
    }
    let sp3 = atoms_where(mol, |i| {
        mol.atoms()[i].is_element("C")
            && mol.degree(i) == 4
            && mol
                .neighbors(i)
                .iter()
                .all(|&(_, order)| order == BondOrder::Single)
    });
    sp3 as f64 / carbons as f64
}

fn is_carbonyl_carbon(mol: &Molecule, index: usize) -> bool {
    mol.atoms()[index].is_element("C")
        && mol
            .neighbors(index)
            .iter()
            .any(|&(n, order)| order == BondOrder::Double && mol.atoms()[n].is_element("O"))
}

fn atoms_where(mol: &Molecule, predicate: impl Fn(usize) -> bool) -> usize {
    (0..mol.atom_count()).filter(|&i| predicate(i)).count()
}
