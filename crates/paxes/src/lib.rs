use approx::AbsDiffEq;
use na::SymmetricEigen;
use serde::{Deserialize, Serialize};
use std::fmt::Display;


pub mod atom;

use nalgebra as na;

pub use atom::Atom;

pub type Vec3 = na::Vector3<f64>;
pub type Mat3 = na::Matrix3<f64>;

/// constant for converting moments of inertia in amu·Å² to rotational
/// constants in MHz
pub const ROTCON_MHZ: f64 = 505379.0046;

/// build a [Molecule] from bare symbol and coordinate literals
#[macro_export]
macro_rules! molecule {
    ($($sym:ident $x:literal $y:literal $z:literal)+) => {
	$crate::Molecule::new(vec![
	    $($crate::Atom::new(stringify!($sym), $x, $y, $z),)*
	    ])
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// return the element symbols of the atoms, in order
    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(|a| a.symbol.as_str()).collect()
    }

    /// return one unique label per atom, the symbol with the atom's 1-based
    /// position appended: H O H gives H1, O2, H3
    pub fn labels(&self) -> Vec<String> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{}{}", a.symbol, i + 1))
            .collect()
    }

    /// compute the center of mass of `self` with one mass per atom, in the
    /// same order as the atoms
    pub fn com(&self, masses: &[f64]) -> Vec3 {
        assert_eq!(self.atoms.len(), masses.len());
        let mut sum = 0.0;
        let mut com = Vec3::zeros();
        for (atom, &w) in self.atoms.iter().zip(masses) {
            sum += w;
            com += w * atom.coord();
        }
        com / sum
    }

    /// compute the moment of inertia tensor about the current origin
    pub fn moi(&self, masses: &[f64]) -> Mat3 {
        assert_eq!(self.atoms.len(), masses.len());
        let mut ret = Mat3::zeros();
        for (atom, w) in self.atoms.iter().zip(masses) {
            let Atom { x, y, z, .. } = atom;
            // diagonal
            ret[(0, 0)] += w * (y * y + z * z);
            ret[(1, 1)] += w * (x * x + z * z);
            ret[(2, 2)] += w * (x * x + y * y);
            // off-diagonal
            ret[(1, 0)] -= w * x * y;
            ret[(2, 0)] -= w * x * z;
            ret[(2, 1)] -= w * y * z;
        }
        ret[(0, 1)] = ret[(1, 0)];
        ret[(0, 2)] = ret[(2, 0)];
        ret[(1, 2)] = ret[(2, 1)];
        ret
    }

    /// translate each of the atoms in `self` by `vec`
    pub fn translate(&mut self, vec: Vec3) -> &mut Self {
        for atom in self.atoms.iter_mut() {
            *atom += vec;
        }
        self
    }

    /// apply the transformation matrix `mat` to the atoms in `self` and
    /// return the new Molecule
    pub fn transform(&self, mat: Mat3) -> Self {
        let mut ret = Vec::with_capacity(self.atoms.len());
        for a in self.atoms.iter() {
            let v = mat * a.coord();
            ret.push(Atom {
                x: v[0],
                y: v[1],
                z: v[2],
                ..a.clone()
            });
        }
        Self::new(ret)
    }
}

/// a Molecule is AbsDiffEq if its atoms are, pairwise in order. atom order is
/// significant here, unlike in symmetry-detection codes
impl AbsDiffEq for Molecule {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.atoms.len() == other.atoms.len()
            && self
                .atoms
                .iter()
                .zip(&other.atoms)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

/// one atom per line as `symbol x y z`, like the coordinates section of an
/// input file
impl Display for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for atom in &self.atoms {
            writeln!(
                f,
                "{:<2} {:>13.8} {:>13.8} {:>13.8}",
                atom.symbol, atom.x, atom.y, atom.z
            )?;
        }
        Ok(())
    }
}

/// return the eigendecomposition of the symmetric matrix `mat`, with the
/// eigenvalues and corresponding eigenvector columns in ascending order
pub fn sorted_eigen(mat: Mat3) -> (Vec3, Mat3) {
    let SymmetricEigen {
        eigenvectors: vecs,
        eigenvalues: vals,
    } = SymmetricEigen::new(mat);
    let mut pairs: Vec<_> = vals.iter().enumerate().collect();
    pairs.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    let mut ret = Mat3::zeros();
    for (i, (p, _)) in pairs.iter().enumerate() {
        ret.set_column(i, &vecs.column(*p));
    }
    (Vec3::from_iterator(pairs.iter().map(|p| *p.1)), ret)
}
