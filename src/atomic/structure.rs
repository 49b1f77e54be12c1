//! Per-element electronic structure records
//!
//! An element's structure maps every charge state `0..=Z` to the set of
//! occupied (or tabulated) subshells, each carrying its binding energy,
//! population and Lotz fit coefficients.
//!
//! # Data format
//!
//! The JSON layout consumed by [`ElementLibrary`]:
//!
//! ```text
//! { "He": { "0": { "1s": { "E": 24.6, "p": 2, "a": 4.0, "b": 0.75, "c": 0.5 } },
//!           "1": { "1s": { "E": 54.4, "p": 1, "a": 4.0, "b": 0.6,  "c": 0.56 } } } }
//! ```
//!
//! The bare ion (charge state Z) has no subshells and may be omitted.
//! Everything is validated when loaded; cross-section code never sees a
//! malformed record.

use crate::atomic::elements::Element;
use crate::error::{CsdError, CsdResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// =================================================================================================
// Records
// =================================================================================================

/// One subshell of one charge state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubshellRecord {
    /// Binding energy (eV)
    #[serde(rename = "E")]
    pub binding_energy: f64,

    /// Number of electrons in the subshell
    #[serde(rename = "p")]
    pub population: u32,

    /// Lotz coefficient a
    pub a: f64,

    /// Lotz coefficient b
    pub b: f64,

    /// Lotz coefficient c
    pub c: f64,
}

/// Principal quantum number encoded as the leading digit of a subshell
/// label ("3d-" → 3)
pub fn principal_quantum_number(label: &str) -> Option<u8> {
    label
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .filter(|n| *n >= 1)
        .map(|n| n as u8)
}

/// Subshells of one charge state, keyed by label
///
/// Iteration order carries no physical meaning; every consumer sums over
/// all entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChargeStateRecord {
    subshells: BTreeMap<String, SubshellRecord>,
}

impl ChargeStateRecord {
    /// Record with no subshells (bare ion)
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn from_subshells<I, S>(subshells: I) -> Self
    where
        I: IntoIterator<Item = (S, SubshellRecord)>,
        S: Into<String>,
    {
        Self {
            subshells: subshells.into_iter().map(|(label, record)| (label.into(), record)).collect(),
        }
    }

    pub fn insert(&mut self, label: impl Into<String>, record: SubshellRecord) {
        self.subshells.insert(label.into(), record);
    }

    pub fn get(&self, label: &str) -> Option<&SubshellRecord> {
        self.subshells.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubshellRecord)> {
        self.subshells.iter().map(|(label, record)| (label.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.subshells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subshells.is_empty()
    }

    /// True when no electrons are bound
    pub fn is_bare(&self) -> bool {
        self.electron_count() == 0
    }

    /// Total number of bound electrons
    pub fn electron_count(&self) -> u32 {
        self.subshells.values().map(|s| s.population).sum()
    }

    fn validate(&self, element: &Element, charge_state: usize) -> CsdResult<()> {
        let symbol = element.symbol();

        for (label, record) in &self.subshells {
            if principal_quantum_number(label).is_none() {
                return Err(CsdError::data_at(
                    symbol,
                    charge_state,
                    format!("subshell label '{label}' has no principal quantum number"),
                ));
            }
            if !record.binding_energy.is_finite() || record.binding_energy < 0.0 {
                return Err(CsdError::data_at(
                    symbol,
                    charge_state,
                    format!("subshell {label} has invalid binding energy {}", record.binding_energy),
                ));
            }
            if !(record.a.is_finite() && record.b.is_finite() && record.c.is_finite()) {
                return Err(CsdError::data_at(
                    symbol,
                    charge_state,
                    format!("subshell {label} has non-finite Lotz coefficients"),
                ));
            }
        }

        let expected = element.atomic_number() - charge_state;
        let electrons = self.electron_count() as usize;
        if electrons != expected {
            return Err(CsdError::data_at(
                symbol,
                charge_state,
                format!("subshell populations sum to {electrons}, expected {expected}"),
            ));
        }

        Ok(())
    }
}

// =================================================================================================
// Element structure
// =================================================================================================

/// Validated electronic structure of one element for charge states `0..=Z`
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStructure {
    element: Element,
    records: Vec<ChargeStateRecord>,
}

impl ElementStructure {
    /// Build from records ordered by charge state
    ///
    /// `records` holds either `Z` entries (bare ion implied) or `Z + 1`
    /// entries whose last one is empty.
    pub fn new(element: Element, mut records: Vec<ChargeStateRecord>) -> CsdResult<Self> {
        let z = element.atomic_number();

        if records.len() == z {
            records.push(ChargeStateRecord::bare());
        }
        if records.len() != z + 1 {
            return Err(CsdError::data(
                element.symbol(),
                format!("expected {z} or {} charge-state records, found {}", z + 1, records.len()),
            ));
        }

        for (charge_state, record) in records.iter().enumerate() {
            record.validate(&element, charge_state)?;
        }

        Ok(Self { element, records })
    }

    /// Build from records keyed by charge state, as found in JSON
    pub fn from_keyed(element: Element, keyed: HashMap<String, ChargeStateRecord>) -> CsdResult<Self> {
        let mut indexed = BTreeMap::new();
        for (key, record) in keyed {
            let charge_state: usize = key.trim().parse().map_err(|_| {
                CsdError::data(element.symbol(), format!("charge-state key '{key}' is not an integer"))
            })?;
            indexed.insert(charge_state, record);
        }

        for (position, charge_state) in indexed.keys().enumerate() {
            if position != *charge_state {
                return Err(CsdError::data_at(
                    element.symbol(),
                    position,
                    "missing charge-state record",
                ));
            }
        }

        Self::new(element, indexed.into_values().collect())
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Nuclear charge Z
    pub fn nuclear_charge(&self) -> usize {
        self.element.atomic_number()
    }

    /// Record of charge state `charge_state`
    pub fn record(&self, charge_state: usize) -> CsdResult<&ChargeStateRecord> {
        self.records.get(charge_state).ok_or_else(|| {
            CsdError::data_at(
                self.element.symbol(),
                charge_state,
                format!("charge state exceeds nuclear charge {}", self.nuclear_charge()),
            )
        })
    }

    /// All records, index = charge state
    pub fn records(&self) -> &[ChargeStateRecord] {
        &self.records
    }

    /// Charge states 0..=Z
    pub fn charge_states(&self) -> Vec<usize> {
        (0..=self.nuclear_charge()).collect()
    }
}

// =================================================================================================
// Provider
// =================================================================================================

/// Source of element electronic-structure data
///
/// The backing store (file, database, generated table) is irrelevant to the
/// cross-section code, which only needs a validated [`ElementStructure`].
pub trait ElementDataProvider: Send + Sync {
    /// Structure of the element with chemical symbol `symbol`
    fn structure(&self, symbol: &str) -> CsdResult<&ElementStructure>;

    /// Symbols of all available elements
    fn symbols(&self) -> Vec<&str>;
}

/// In-memory element library, typically loaded from an `elements.json` file
#[derive(Debug, Clone, Default)]
pub struct ElementLibrary {
    elements: BTreeMap<String, ElementStructure>,
}

type RawLibrary = HashMap<String, HashMap<String, ChargeStateRecord>>;

impl ElementLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an element
    pub fn insert(&mut self, structure: ElementStructure) {
        self.elements.insert(structure.element().symbol().to_string(), structure);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn from_json_str(json: &str) -> CsdResult<Self> {
        let raw: RawLibrary = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> CsdResult<Self> {
        let raw: RawLibrary = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CsdResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawLibrary) -> CsdResult<Self> {
        let mut library = Self::new();
        for (symbol, keyed) in raw {
            let element = Element::from_symbol(&symbol)?;
            library.insert(ElementStructure::from_keyed(element, keyed)?);
        }
        log::info!("loaded electronic structure of {} elements", library.len());
        Ok(library)
    }
}

impl ElementDataProvider for ElementLibrary {
    fn structure(&self, symbol: &str) -> CsdResult<&ElementStructure> {
        self.elements
            .get(symbol)
            .ok_or_else(|| CsdError::data(symbol, "element not present in library"))
    }

    fn symbols(&self) -> Vec<&str> {
        self.elements.keys().map(String::as_str).collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
