use super::atom::Atom;
use super::topology::{Bond, BondOrder};

/// A small-molecule structure with explicit hydrogens and 3-D coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    adjacency: Vec<Vec<(usize, BondOrder)>>,
}

impl Molecule {
    /// Builds a molecule from atoms and bonds.
    ///
    /// Bonds must reference valid atom indices; the structure readers guarantee this.
    pub fn new(name: impl Into<String>, atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for bond in &bonds {
            adjacency[bond.atom1].push((bond.atom2, bond.order));
            adjacency[bond.atom2].push((bond.atom1, bond.order));
        }
        Self {
            name: name.into(),
            atoms,
            bonds,
            adjacency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Neighbors of an atom together with the order of the connecting bond.
    pub fn neighbors(&self, index: usize) -> &[(usize, BondOrder)] {
        self.adjacency.get(index).map_or(&[], Vec::as_slice)
    }

    /// Number of directly bonded atoms, hydrogens included.
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    pub fn hydrogen_count(&self, index: usize) -> usize {
        self.neighbors(index)
            .iter()
            .filter(|(n, _)| self.atoms[*n].is_hydrogen())
            .count()
    }

    /// Number of connected components of the bond graph.
    pub fn component_count(&self) -> usize {
        let mut seen = vec![false; self.atoms.len()];
        let mut components = 0;
        for start in 0..self.atoms.len() {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                for &(next, _) in self.neighbors(current) {
                    if !seen[next] {
                        seen[next] = true;
                        stack.push(next);
                    }
                }
            }
        }
        components
    }
}

/// A molecule as it is known to one pipeline invocation: its corpus key and its structure.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeIdentity {
    /// The base name shared by the molecule's structure file and logs.
    pub key: String,
    pub structure: Molecule,
}

impl MoleculeIdentity {
    pub fn new(key: impl Into<String>, structure: Molecule) -> Self {
        Self {
            key: key.into(),
            structure,
        }
    }
}
