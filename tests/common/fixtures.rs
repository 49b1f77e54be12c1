//! Element data for integration tests
//!
//! `tests/data/elements.json` holds H and He. Heavier elements are built
//! programmatically: ground-state aufbau filling with unscreened hydrogenic
//! binding energies and the high-charge Lotz coefficients (4.5, 0, 0).

use csd_rs::atomic::{ChargeStateRecord, Element, ElementLibrary, ElementStructure, SubshellRecord};
use std::path::PathBuf;

/// Subshells in filling order with their capacities
const AUFBAU: [(&str, u32); 29] = [
    ("1s", 2), ("2s", 2), ("2p-", 2), ("2p+", 4), ("3s", 2), ("3p-", 2), ("3p+", 4),
    ("4s", 2), ("3d-", 4), ("3d+", 6), ("4p-", 2), ("4p+", 4), ("5s", 2), ("4d-", 4),
    ("4d+", 6), ("5p-", 2), ("5p+", 4), ("6s", 2), ("4f-", 6), ("4f+", 8), ("5d-", 4),
    ("5d+", 6), ("6p-", 2), ("6p+", 4), ("7s", 2), ("5f-", 6), ("5f+", 8), ("6d-", 4),
    ("6d+", 6),
];

const RYDBERG: f64 = 13.605693;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/elements.json")
}

pub fn fixture_library() -> ElementLibrary {
    ElementLibrary::from_path(fixture_path()).expect("fixture elements.json must load")
}

fn aufbau_record(nuclear_charge: usize, electrons: u32) -> ChargeStateRecord {
    let mut record = ChargeStateRecord::bare();
    let mut remaining = electrons;

    for (label, capacity) in AUFBAU {
        if remaining == 0 {
            break;
        }
        let population = remaining.min(capacity);
        remaining -= population;

        let n = f64::from(label.as_bytes()[0] - b'0');
        let binding_energy = RYDBERG * (nuclear_charge as f64).powi(2) / (n * n);
        record.insert(label, SubshellRecord { binding_energy, population, a: 4.5, b: 0.0, c: 0.0 });
    }
    record
}

/// Structure of `symbol` for all charge states, bare ion included
pub fn aufbau_structure(symbol: &str) -> ElementStructure {
    let element = Element::from_symbol(symbol).expect("known element");
    let z = element.atomic_number();
    let records = (0..z).map(|i| aufbau_record(z, (z - i) as u32)).collect();
    ElementStructure::new(element, records).expect("aufbau structure is consistent")
}
