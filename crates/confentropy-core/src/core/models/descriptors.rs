use std::fmt;

/// Column names of the descriptor vector, in output order.
pub const DESCRIPTOR_NAMES: [&str; 37] = [
    "atom_count",
    "bond_count",
    "exact_mol_wt",
    "num_rotatable_bonds",
    "methyl_count",
    "amine_count",
    "hydroxy_count",
    "num_h_donors",
    "num_h_acceptors",
    "ring_count",
    "num_aromatic_rings",
    "max_abs_partial_charge",
    "min_abs_partial_charge",
    "max_partial_charge",
    "min_partial_charge",
    "tpsa",
    "labute_asa",
    "mol_mr",
    "mol_log_p",
    "estate_vsa1",
    "estate_vsa2",
    "estate_vsa3",
    "estate_vsa4",
    "estate_vsa5",
    "hall_kier_alpha",
    "bertz_ct",
    "balaban_j",
    "ipc",
    "kappa1",
    "kappa2",
    "kappa3",
    "fraction_csp3",
    "asphericity",
    "eccentricity",
    "inertial_shape_factor",
    "radius_of_gyration",
    "spherocity_index",
];

/// A single descriptor value; counts are kept integral so they serialize without a
/// fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorValue {
    Count(usize),
    Scalar(f64),
}

impl fmt::Display for DescriptorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Scalar(x) => f.write_str(&render_scalar(*x)),
        }
    }
}

/// Shortest round-trip rendering with a trailing ".0" on integral values, lowercase
/// `nan`/`inf`, and a signed exponent of at least two digits (`1e-05`, `2.5e+20`) so
/// rows match datasets produced by earlier runs.
fn render_scalar(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let debug = format!("{:?}", x);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}

/// Structural, topological, electronic and 3-D shape descriptors of one molecule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MolecularDescriptors {
    // Composition and connectivity
    pub atom_count: usize,
    pub bond_count: usize,
    pub exact_mol_wt: f64,
    pub num_rotatable_bonds: usize,
    pub methyl_count: usize,
    pub amine_count: usize,
    pub hydroxy_count: usize,
    pub num_h_donors: usize,
    pub num_h_acceptors: usize,
    pub ring_count: usize,
    pub num_aromatic_rings: usize,

    // Partial-charge extrema
    pub max_abs_partial_charge: f64,
    pub min_abs_partial_charge: f64,
    pub max_partial_charge: f64,
    pub min_partial_charge: f64,

    // Surface and property estimates
    pub tpsa: f64,
    pub labute_asa: f64,
    pub mol_mr: f64,
    pub mol_log_p: f64,
    pub estate_vsa: [f64; 5],

    // Topological indices
    pub hall_kier_alpha: f64,
    pub bertz_ct: f64,
    pub balaban_j: f64,
    pub ipc: f64,
    pub kappa: [f64; 3],
    pub fraction_csp3: f64,

    // 3-D shape
    pub asphericity: f64,
    pub eccentricity: f64,
    pub inertial_shape_factor: f64,
    pub radius_of_gyration: f64,
    pub spherocity_index: f64,
}

impl MolecularDescriptors {
    /// All descriptor values in the order of [`DESCRIPTOR_NAMES`].
    pub fn values(&self) -> Vec<DescriptorValue> {
        use DescriptorValue::{Count, Scalar};

        let mut values = vec![
            Count(self.atom_count),
            Count(self.bond_count),
            Scalar(self.exact_mol_wt),
            Count(self.num_rotatable_bonds),
            Count(self.methyl_count),
            Count(self.amine_count),
            Count(self.hydroxy_count),
            Count(self.num_h_donors),
            Count(self.num_h_acceptors),
            Count(self.ring_count),
            Count(self.num_aromatic_rings),
            Scalar(self.max_abs_partial_charge),
            Scalar(self.min_abs_partial_charge),
            Scalar(self.max_partial_charge),
            Scalar(self.min_partial_charge),
            Scalar(self.tpsa),
            Scalar(self.labute_asa),
            Scalar(self.mol_mr),
            Scalar(self.mol_log_p),
        ];
        values.extend(self.estate_vsa.iter().copied().map(Scalar));
        values.extend([
            Scalar(self.hall_kier_alpha),
            Scalar(self.bertz_ct),
            Scalar(self.balaban_j),
            Scalar(self.ipc),
        ]);
        values.extend(self.kappa.iter().copied().map(Scalar));
        values.extend([
            Scalar(self.fraction_csp3),
            Scalar(self.asphericity),
            Scalar(self.eccentricity),
            Scalar(self.inertial_shape_factor),
            Scalar(self.radius_of_gyration),
            Scalar(self.spherocity_index),
        ]);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_cover_every_named_column() {
        assert_eq!(
            MolecularDescriptors::default().values().len(),
            DESCRIPTOR_NAMES.len()
        );
    }

    #[test]
    fn values_follow_column_order() {
        let descriptors = MolecularDescriptors {
            atom_count: 6,
            exact_mol_wt: 32.026,
            estate_vsa: [1.0, 2.0, 3.0, 4.0, 5.0],
            kappa: [7.0, 8.0, 9.0],
            spherocity_index: 0.25,
            ..Default::default()
        };
        let values = descriptors.values();
        let at = |name: &str| values[DESCRIPTOR_NAMES.iter().position(|n| *n == name).unwrap()];

        assert_eq!(at("atom_count"), DescriptorValue::Count(6));
        assert_eq!(at("exact_mol_wt"), DescriptorValue::Scalar(32.026));
        assert_eq!(at("estate_vsa1"), DescriptorValue::Scalar(1.0));
        assert_eq!(at("estate_vsa5"), DescriptorValue::Scalar(5.0));
        assert_eq!(at("kappa3"), DescriptorValue::Scalar(9.0));
        assert_eq!(at("spherocity_index"), DescriptorValue::Scalar(0.25));
    }

    #[test]
    fn display_keeps_counts_integral_and_scalars_decimal() {
        assert_eq!(DescriptorValue::Count(3).to_string(), "3");
        assert_eq!(DescriptorValue::Scalar(0.0).to_string(), "0.0");
        assert_eq!(DescriptorValue::Scalar(12.34).to_string(), "12.34");
        assert_eq!(DescriptorValue::Scalar(-0.0001).to_string(), "-0.0001");
    }

    #[test]
    fn scalar_exponents_are_signed_and_two_digit() {
        assert_eq!(DescriptorValue::Scalar(1e-5).to_string(), "1e-05");
        assert_eq!(DescriptorValue::Scalar(-1.5e-7).to_string(), "-1.5e-07");
        assert_eq!(DescriptorValue::Scalar(1e16).to_string(), "1e+16");
        assert_eq!(DescriptorValue::Scalar(2.5e20).to_string(), "2.5e+20");
        assert_eq!(DescriptorValue::Scalar(1e-300).to_string(), "1e-300");
    }

    #[test]
    fn non_finite_scalars_are_lowercase() {
        assert_eq!(DescriptorValue::Scalar(f64::NAN).to_string(), "nan");
        assert_eq!(DescriptorValue::Scalar(f64::INFINITY).to_string(), "inf");
        assert_eq!(DescriptorValue::Scalar(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
