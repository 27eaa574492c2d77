//! the per-isotopologue principal axis pipeline

use approx::relative_eq;
use log::{debug, warn};
use paxes::{Mat3, Molecule, ROTCON_MHZ, Vec3, sorted_eigen};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::PacError,
    load::{Input, Isotopologue},
};

/// tolerance for the principal axis diagonality check
pub(crate) const DIAG_EPS: f64 = 1e-8;

/// anything that can turn an element symbol and a mass number into an atomic
/// mass. the production implementation is [`isomass::IsotopeTable`]
pub trait MassResolver {
    /// the mass in amu of the isotope of `symbol` with `mass_number`
    /// nucleons, or None if the resolver does not know it
    fn mass(&self, symbol: &str, mass_number: u32) -> Option<f64>;
}

impl MassResolver for isomass::IsotopeTable {
    fn mass(&self, symbol: &str, mass_number: u32) -> Option<f64> {
        self.lookup(symbol, mass_number)
    }
}

impl<R: MassResolver + ?Sized> MassResolver for &R {
    fn mass(&self, symbol: &str, mass_number: u32) -> Option<f64> {
        (**self).mass(symbol, mass_number)
    }
}

/// the principal axis engine. the mass resolver is injected here so tests
/// can substitute their own table
pub struct Engine<R> {
    resolver: R,
}

impl<R: MassResolver> Engine<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// the atomic masses for one isotopologue, in atom order
    fn resolve(
        &self,
        molecule: &Molecule,
        iso: &Isotopologue,
    ) -> Result<Vec<f64>, PacError> {
        molecule
            .atoms
            .iter()
            .zip(&iso.mass_numbers)
            .map(|(atom, &mass_number)| {
                self.resolver.mass(&atom.symbol, mass_number).ok_or_else(
                    || PacError::MassNotFound {
                        symbol: atom.symbol.clone(),
                        mass_number,
                    },
                )
            })
            .collect()
    }

    /// compute the principal axes of every isotopologue in `input`. all of
    /// the masses are resolved up front, in table order, so the first
    /// missing isotope aborts the whole run; the numeric passes are
    /// independent of each other and run in parallel
    pub fn run(
        &self,
        input: &Input,
    ) -> Result<Vec<IsotopologueResult>, PacError> {
        let masses = input
            .isotopologues
            .entries()
            .iter()
            .map(|iso| self.resolve(&input.molecule, iso))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("running {} isotopologues", masses.len());
        Ok(input
            .isotopologues
            .entries()
            .par_iter()
            .zip(masses)
            .map(|(iso, masses)| {
                principal_axes(&input.molecule, input.dipole, &iso.name, masses)
            })
            .collect())
    }
}

/// everything computed for one isotopologue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsotopologueResult {
    /// the label from the isotopologues section
    pub name: String,
    /// resolved atomic masses in amu, one per atom
    pub masses: Vec<f64>,
    /// the geometry translated to the center of mass
    pub com_geom: Molecule,
    /// inertia tensor in the COM frame, amu Å²
    pub com_inertia: Mat3,
    /// principal moments of inertia, ascending
    pub eigenvalues: Vec3,
    /// principal axes, one column per eigenvalue
    pub eigenvectors: Mat3,
    /// the geometry projected onto the principal axes
    pub pa_geom: Molecule,
    /// inertia tensor recomputed in the principal axis frame
    pub pa_inertia: Mat3,
    /// rotational constants in MHz, A first
    pub rotcon: Vec3,
    /// absolute dipole components along the principal axes
    pub dipole: Vec3,
    /// whether `pa_inertia` actually came out diagonal
    pub diagonal: bool,
}

/// compute one isotopologue's principal axis frame from the shared geometry
/// and dipole and its resolved atomic masses
fn principal_axes(
    molecule: &Molecule,
    dipole: Vec3,
    name: &str,
    masses: Vec<f64>,
) -> IsotopologueResult {
    let mut com_geom = molecule.clone();
    let com = com_geom.com(&masses);
    com_geom.translate(-com);
    let com_inertia = com_geom.moi(&masses);
    let (eigenvalues, eigenvectors) = sorted_eigen(com_inertia);
    // the projection treats the coordinates as row vectors, so each atom
    // moves by the transpose of the eigenvector matrix
    let pa_geom = com_geom.transform(eigenvectors.transpose());
    let pa_inertia = pa_geom.moi(&masses);
    let diagonal = relative_eq!(
        pa_inertia,
        Mat3::from_diagonal(&eigenvalues),
        epsilon = DIAG_EPS,
        max_relative = DIAG_EPS
    );
    if !diagonal {
        warn!("{name}: inertia tensor is not diagonal in the principal axes");
    }
    let rotcon = eigenvalues.map(|e| ROTCON_MHZ / e);
    let pa_dipole = (eigenvectors.transpose() * dipole).abs();
    IsotopologueResult {
        name: name.to_owned(),
        masses,
        com_geom,
        com_inertia,
        eigenvalues,
        eigenvectors,
        pa_geom,
        pa_inertia,
        rotcon,
        dipole: pa_dipole,
        diagonal,
    }
}
