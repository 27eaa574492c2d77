use std::{io, ops::AddAssign, str::FromStr};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::Vec3;

/// one atom of a [crate::Molecule]: the element symbol as written in the
/// input and Cartesian coordinates in Å. the symbol is kept verbatim; which
/// isotope it refers to is decided later, per isotopologue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Atom {
    pub fn new(symbol: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            symbol: symbol.to_owned(),
            x,
            y,
            z,
        }
    }

    /// the coordinates of `self` as a vector
    pub fn coord(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Atom {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() < epsilon;
        self.symbol == other.symbol
            && close(self.x, other.x)
            && close(self.y, other.y)
            && close(self.z, other.z)
    }
}

impl AddAssign<Vec3> for Atom {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs[0];
        self.y += rhs[1];
        self.z += rhs[2];
    }
}

impl FromStr for Atom {
    type Err = io::Error;

    /// parse an Atom from a line like
    ///  `C 1.0 1.0 1.0`
    /// at least four whitespace-separated fields are required; anything after
    /// the fourth (inline comments and the like) is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(io::Error::other("too few fields in Atom"));
        }
        let coord: Vec<f64> = fields[1..4]
            .iter()
            .map(|f| f.parse())
            .collect::<Result<_, _>>()
            .map_err(|_| {
                io::Error::other("failed to parse coordinate field as f64")
            })?;
        Ok(Self::new(fields[0], coord[0], coord[1], coord[2]))
    }
}
