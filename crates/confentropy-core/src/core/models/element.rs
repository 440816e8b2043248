use phf::{Map, phf_map};

/// Static physical data for a chemical element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub atomic_number: u8,
    /// Standard atomic weight in g/mol.
    pub average_mass: f64,
    /// Mass of the most abundant isotope in g/mol.
    pub monoisotopic_mass: f64,
}

static ELEMENTS: Map<&'static str, ElementData> = phf_map! {
    "H" => ElementData { atomic_number: 1, average_mass: 1.008, monoisotopic_mass: 1.007_825_032_07 },
    "D" => ElementData { atomic_number: 1, average_mass: 2.014_101_778, monoisotopic_mass: 2.014_101_778 },
    "T" => ElementData { atomic_number: 1, average_mass: 3.016_049_281, monoisotopic_mass: 3.016_049_281 },
    "Li" => ElementData { atomic_number: 3, average_mass: 6.94, monoisotopic_mass: 7.016_003_437 },
    "B" => ElementData { atomic_number: 5, average_mass: 10.812, monoisotopic_mass: 11.009_305_4 },
    "C" => ElementData { atomic_number: 6, average_mass: 12.011, monoisotopic_mass: 12.0 },
    "N" => ElementData { atomic_number: 7, average_mass: 14.007, monoisotopic_mass: 14.003_074_004_8 },
    "O" => ElementData { atomic_number: 8, average_mass: 15.999, monoisotopic_mass: 15.994_914_619_56 },
    "F" => ElementData { atomic_number: 9, average_mass: 18.998, monoisotopic_mass: 18.998_403_22 },
    "Na" => ElementData { atomic_number: 11, average_mass: 22.990, monoisotopic_mass: 22.989_769_282 },
    "Mg" => ElementData { atomic_number: 12, average_mass: 24.305, monoisotopic_mass: 23.985_041_697 },
    "Si" => ElementData { atomic_number: 14, average_mass: 28.086, monoisotopic_mass: 27.976_926_532_5 },
    "P" => ElementData { atomic_number: 15, average_mass: 30.974, monoisotopic_mass: 30.973_761_63 },
    "S" => ElementData { atomic_number: 16, average_mass: 32.067, monoisotopic_mass: 31.972_071 },
    "Cl" => ElementData { atomic_number: 17, average_mass: 35.453, monoisotopic_mass: 34.968_852_68 },
    "K" => ElementData { atomic_number: 19, average_mass: 39.098, monoisotopic_mass: 38.963_706_486 },
    "Ca" => ElementData { atomic_number: 20, average_mass: 40.078, monoisotopic_mass: 39.962_590_863 },
    "Se" => ElementData { atomic_number: 34, average_mass: 78.971, monoisotopic_mass: 79.916_521_3 },
    "Br" => ElementData { atomic_number: 35, average_mass: 79.904, monoisotopic_mass: 78.918_337_1 },
    "I" => ElementData { atomic_number: 53, average_mass: 126.904, monoisotopic_mass: 126.904_473 },
};

/// Looks up element data by symbol, accepting any capitalization (`"CL"`, `"cl"`, `"Cl"`).
pub fn lookup(symbol: &str) -> Option<&'static ElementData> {
    ELEMENTS.get(normalize_symbol(symbol).as_str())
}

/// Normalizes an element symbol to its conventional capitalization.
pub fn normalize_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
