use super::structure::StructuralDescriptors;
use super::{DescribedMolecule, DescriptorError, DescriptorProvider};
use crate::core::models::descriptors::MolecularDescriptors;
use crate::core::models::molecule::MoleculeIdentity;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// One row of a descriptor table, keyed by molecule base name.
///
/// Columns that can be derived from the structure file are optional; an empty cell is
/// filled from the structure.
#[derive(Debug, Clone, Deserialize)]
struct TableRow {
    name: String,
    #[serde(default)]
    canonical: String,
    atom_count: Option<usize>,
    bond_count: Option<usize>,
    exact_mol_wt: Option<f64>,
    num_rotatable_bonds: usize,
    methyl_count: Option<usize>,
    amine_count: Option<usize>,
    hydroxy_count: Option<usize>,
    num_h_donors: usize,
    num_h_acceptors: usize,
    ring_count: Option<usize>,
    num_aromatic_rings: usize,
    max_abs_partial_charge: f64,
    min_abs_partial_charge: f64,
    max_partial_charge: f64,
    min_partial_charge: f64,
    tpsa: f64,
    labute_asa: f64,
    mol_mr: f64,
    mol_log_p: f64,
    estate_vsa1: f64,
    estate_vsa2: f64,
    estate_vsa3: f64,
    estate_vsa4: f64,
    estate_vsa5: f64,
    hall_kier_alpha: f64,
    bertz_ct: f64,
    balaban_j: f64,
    ipc: f64,
    kappa1: f64,
    kappa2: f64,
    kappa3: f64,
    fraction_csp3: Option<f64>,
    asphericity: Option<f64>,
    eccentricity: Option<f64>,
    inertial_shape_factor: Option<f64>,
    radius_of_gyration: Option<f64>,
    spherocity_index: Option<f64>,
}

impl TableRow {
    fn is_complete(&self) -> bool {
        self.atom_count.is_some()
            && self.bond_count.is_some()
            && self.exact_mol_wt.is_some()
            && self.methyl_count.is_some()
            && self.amine_count.is_some()
            && self.hydroxy_count.is_some()
            && self.ring_count.is_some()
            && self.fraction_csp3.is_some()
            && self.asphericity.is_some()
            && self.eccentricity.is_some()
            && self.inertial_shape_factor.is_some()
            && self.radius_of_gyration.is_some()
            && self.spherocity_index.is_some()
    }

    fn merge(&self, structural: Option<&StructuralDescriptors>) -> MolecularDescriptors {
        // Only called with `None` when the row is complete, so every fallback is unused then.
        let count = |v: Option<usize>, f: fn(&StructuralDescriptors) -> usize| {
            v.or_else(|| structural.map(f)).unwrap_or_default()
        };
        let scalar = |v: Option<f64>, f: fn(&StructuralDescriptors) -> f64| {
            v.or_else(|| structural.map(f)).unwrap_or_default()
        };

        MolecularDescriptors {
            atom_count: count(self.atom_count, |s| s.atom_count),
            bond_count: count(self.bond_count, |s| s.bond_count),
            exact_mol_wt: scalar(self.exact_mol_wt, |s| s.exact_mol_wt),
            num_rotatable_bonds: self.num_rotatable_bonds,
            methyl_count: count(self.methyl_count, |s| s.methyl_count),
            amine_count: count(self.amine_count, |s| s.amine_count),
            hydroxy_count: count(self.hydroxy_count, |s| s.hydroxy_count),
            num_h_donors: self.num_h_donors,
            num_h_acceptors: self.num_h_acceptors,
            ring_count: count(self.ring_count, |s| s.ring_count),
            num_aromatic_rings: self.num_aromatic_rings,
            max_abs_partial_charge: self.max_abs_partial_charge,
            min_abs_partial_charge: self.min_abs_partial_charge,
            max_partial_charge: self.max_partial_charge,
            min_partial_charge: self.min_partial_charge,
            tpsa: self.tpsa,
            labute_asa: self.labute_asa,
            mol_mr: self.mol_mr,
            mol_log_p: self.mol_log_p,
            estate_vsa: [
                self.estate_vsa1,
                self.estate_vsa2,
                self.estate_vsa3,
                self.estate_vsa4,
                self.estate_vsa5,
            ],
            hall_kier_alpha: self.hall_kier_alpha,
            bertz_ct: self.bertz_ct,
            balaban_j: self.balaban_j,
            ipc: self.ipc,
            kappa: [self.kappa1, self.kappa2, self.kappa3],
            fraction_csp3: scalar(self.fraction_csp3, |s| s.fraction_csp3),
            asphericity: scalar(self.asphericity, |s| s.shape.asphericity),
            eccentricity: scalar(self.eccentricity, |s| s.shape.eccentricity),
            inertial_shape_factor: scalar(self.inertial_shape_factor, |s| {
                s.shape.inertial_shape_factor
            }),
            radius_of_gyration: scalar(self.radius_of_gyration, |s| s.shape.radius_of_gyration),
            spherocity_index: scalar(self.spherocity_index, |s| s.shape.spherocity_index),
        }
    }
}

/// Descriptors precomputed by an external toolkit and stored as a CSV table with a header
/// row. The `name` column holds the molecule base name, `canonical` its canonical
/// structure string, and the remaining columns use the descriptor column names.
#[derive(Debug, Clone, Default)]
pub struct TabulatedDescriptors {
    rows: HashMap<String, TableRow>,
}

impl TabulatedDescriptors {
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let reader = csv::Reader::from_path(path).map_err(|e| DescriptorError::Table {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_csv(reader, path)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DescriptorError> {
        Self::from_csv(csv::Reader::from_reader(reader), Path::new("<reader>"))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Self, DescriptorError> {
        let mut rows = HashMap::new();
        for result in reader.deserialize::<TableRow>() {
            let row = result.map_err(|e| DescriptorError::Table {
                path: path.to_path_buf(),
                source: e,
            })?;
            if rows.contains_key(&row.name) {
                return Err(DescriptorError::DuplicateEntry(row.name));
            }
            rows.insert(row.name.clone(), row);
        }
        debug!(entries = rows.len(), path = %path.display(), "Loaded descriptor table.");
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl DescriptorProvider for TabulatedDescriptors {
    fn describe(&self, identity: &MoleculeIdentity) -> Result<DescribedMolecule, DescriptorError> {
        let row = self
            .rows
            .get(&identity.key)
            .ok_or_else(|| DescriptorError::Canonicalization {
                key: identity.key.clone(),
                reason: "no descriptor table entry".to_string(),
            })?;
        let canonical = row.canonical.trim();
        if canonical.is_empty() {
            return Err(DescriptorError::Canonicalization {
                key: identity.key.clone(),
                reason: "empty canonical structure string".to_string(),
            });
        }

        let structural = if row.is_complete() {
            None
        } else {
            Some(StructuralDescriptors::compute(&identity.structure)?)
        };
        let descriptors = row.merge(structural.as_ref());

        if descriptors.atom_count != identity.structure.atom_count() {
            warn!(
                molecule = %identity.key,
                table = descriptors.atom_count,
                structure = identity.structure.atom_count(),
                "Descriptor table atom count disagrees with the structure file."
            );
        }

        Ok(DescribedMolecule {
            canonical: canonical.to_string(),
            descriptors,
        })
    }
}
