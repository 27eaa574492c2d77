use std::sync::LazyLock;

use rustc_hash::FxHashMap;

mod table;

pub use table::ISOTOPES;

/// process-wide isotope table, built from [ISOTOPES] on first use. the table
/// is read-only after construction, so one instance can be shared freely
/// across threads
pub static TABLE: LazyLock<IsotopeTable> = LazyLock::new(IsotopeTable::new);

/// one row of the isotope table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isotope {
    pub symbol: &'static str,
    pub mass_number: u32,
    pub mass: f64,
}

/// atomic masses indexed by element symbol and mass number
pub struct IsotopeTable {
    masses: FxHashMap<&'static str, FxHashMap<u32, f64>>,
}

fn titlecase(s: &str) -> String {
    let mut cs = s.chars();
    match cs.next() {
        Some(c) => {
            c.to_uppercase().chain(cs.flat_map(char::to_lowercase)).collect()
        }
        None => String::new(),
    }
}

impl IsotopeTable {
    pub fn new() -> Self {
        let mut masses: FxHashMap<&'static str, FxHashMap<u32, f64>> =
            FxHashMap::default();
        for &(symbol, mass_number, mass) in ISOTOPES {
            masses.entry(symbol).or_default().insert(mass_number, mass);
        }
        Self { masses }
    }

    /// look up the atomic mass in amu of the isotope of `symbol` with
    /// `mass_number` nucleons. the symbol is tried as written and again
    /// titlecased, so `h`, `H`, and `AR`/`Ar` all behave the same
    pub fn lookup(&self, symbol: &str, mass_number: u32) -> Option<f64> {
        let get = |s: &str| {
            self.masses.get(s).and_then(|m| m.get(&mass_number)).copied()
        };
        get(symbol).or_else(|| get(&titlecase(symbol)))
    }

    /// return every isotope of `symbol` in the table, sorted by mass number
    pub fn isotopes_of(&self, symbol: &str) -> Vec<Isotope> {
        let entry = self
            .masses
            .get_key_value(symbol)
            .or_else(|| self.masses.get_key_value(titlecase(symbol).as_str()));
        let Some((&symbol, found)) = entry else {
            return Vec::new();
        };
        let mut ret: Vec<_> = found
            .iter()
            .map(|(&mass_number, &mass)| Isotope {
                symbol,
                mass_number,
                mass,
            })
            .collect();
        ret.sort_by_key(|i| i.mass_number);
        ret
    }
}

impl Default for IsotopeTable {
    fn default() -> Self {
        Self::new()
    }
}
