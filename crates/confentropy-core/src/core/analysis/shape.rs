use nalgebra::{Matrix3, Point3, Vector3};

/// Moments below this magnitude are treated as zero.
const DEGENERATE_LIMIT: f64 = 1e-12;

/// Shape descriptors derived from the principal moments of a 3-D conformation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeDescriptors {
    pub asphericity: f64,
    pub eccentricity: f64,
    pub inertial_shape_factor: f64,
    pub radius_of_gyration: f64,
    pub spherocity_index: f64,
}

/// Computes shape descriptors from atom positions and per-atom masses.
///
/// Inertia-based descriptors use the mass-weighted inertia tensor about the center of
/// mass; the spherocity index uses the unit-weight gyration tensor about the centroid.
/// Degenerate geometries (a single atom, all atoms coincident) give zeros rather than NaN.
pub fn compute(positions: &[Point3<f64>], masses: &[f64]) -> ShapeDescriptors {
    debug_assert_eq!(positions.len(), masses.len());
    let total_mass: f64 = masses.iter().sum();
    if positions.is_empty() || total_mass <= 0.0 {
        return ShapeDescriptors::default();
    }

    let center = weighted_center(positions, masses, total_mass);
    let [pm1, pm2, pm3] = sorted_eigenvalues(inertia_tensor(positions, masses, &center));

    let sum_sq = pm1 * pm1 + pm2 * pm2 + pm3 * pm3;
    let asphericity = ratio(
        0.5 * ((pm3 - pm2).powi(2) + (pm3 - pm1).powi(2) + (pm2 - pm1).powi(2)),
        sum_sq,
    );
    let eccentricity = ratio((pm3 * pm3 - pm1 * pm1).max(0.0).sqrt(), pm3);
    let inertial_shape_factor = ratio(pm2, pm1 * pm3);

    let second_moment: f64 = positions
        .iter()
        .zip(masses)
        .map(|(p, m)| m * (p - center).norm_squared())
        .sum();
    let radius_of_gyration = (second_moment / total_mass).sqrt();

    let unit = vec![1.0; positions.len()];
    let centroid = weighted_center(positions, &unit, positions.len() as f64);
    let [g1, g2, g3] = sorted_eigenvalues(gyration_tensor(positions, &centroid));
    let spherocity_index = ratio(3.0 * g1, g1 + g2 + g3);

    ShapeDescriptors {
        asphericity,
        eccentricity,
        inertial_shape_factor,
        radius_of_gyration,
        spherocity_index,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < DEGENERATE_LIMIT {
        0.0
    } else {
        numerator / denominator
    }
}

fn weighted_center(positions: &[Point3<f64>], weights: &[f64], total: f64) -> Point3<f64> {
    let sum = positions
        .iter()
        .zip(weights)
        .fold(Vector3::zeros(), |acc, (p, w)| acc + p.coords * *w);
    Point3::from(sum / total)
}

fn inertia_tensor(positions: &[Point3<f64>], masses: &[f64], center: &Point3<f64>) -> Matrix3<f64> {
    positions
        .iter()
        .zip(masses)
        .fold(Matrix3::zeros(), |acc, (p, m)| {
            let r = p - center;
            acc + (Matrix3::identity() * r.norm_squared() - r * r.transpose()) * *m
        })
}

fn gyration_tensor(positions: &[Point3<f64>], centroid: &Point3<f64>) -> Matrix3<f64> {
    let sum = positions.iter().fold(Matrix3::zeros(), |acc, p| {
        let r = p - centroid;
        acc + r * r.transpose()
    });
    sum / positions.len() as f64
}

fn sorted_eigenvalues(tensor: Matrix3<f64>) -> [f64; 3] {
    let eigen = tensor.symmetric_eigen();
    let mut values = [
        eigen.eigenvalues[0].max(0.0),
        eigen.eigenvalues[1].max(0.0),
        eigen.eigenvalues[2].max(0.0),
    ];
    values.sort_by(f64::total_cmp);
    values
}
