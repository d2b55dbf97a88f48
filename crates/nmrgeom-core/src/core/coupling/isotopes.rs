use phf::{Map, phf_map};

/// Gyromagnetic ratios in rad·s⁻¹·T⁻¹, keyed by mass number and element symbol.
#[rustfmt::skip]
static GYROMAGNETIC_RATIOS: Map<&'static str, f64> = phf_map! {
    "1H"   => 267522128.0,
    "2H"   => 41066279.1,
    "7Li"  => 103962000.0,
    "11B"  => 85847044.0,
    "13C"  => 67282840.0,
    "14N"  => 19337792.0,
    "15N"  => -27116000.0,
    "17O"  => -36280800.0,
    "19F"  => 251814800.0,
    "23Na" => 70808493.0,
    "27Al" => 69762715.0,
    "29Si" => -53190000.0,
    "31P"  => 108394000.0,
    "35Cl" => 26241980.0,
    "39K"  => 12500608.0,
};

pub fn gyromagnetic_ratio(isotope: &str) -> Option<f64> {
    GYROMAGNETIC_RATIOS.get(isotope).copied()
}

/// Names of all tabulated isotopes, in no particular order.
pub fn known_isotopes() -> impl Iterator<Item = &'static str> {
    GYROMAGNETIC_RATIOS.keys().copied()
}
