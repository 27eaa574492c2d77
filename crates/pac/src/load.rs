//! locating and decoding the sections of an input file
//!
//! a section starts at the first line whose beginning matches its keyword,
//! ignoring case, and runs to the next truly empty line. lines containing
//! only whitespace are part of the section, not terminators, so the only
//! way to end a section is with an empty line (or rather, with the byte
//! sequence `\n\n`)

use std::str::FromStr;

use log::debug;
use paxes::{Atom, Molecule, Vec3};
use rustc_hash::FxHashMap;

use crate::error::{PacError, Section};

/// everything decoded from one input file
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub molecule: Molecule,
    pub dipole: Vec3,
    pub isotopologues: IsotopologueTable,
}

/// one row of the isotopologue table: a label and one mass number per atom,
/// in the same order as the atoms in the coordinates section
#[derive(Debug, Clone, PartialEq)]
pub struct Isotopologue {
    pub name: String,
    pub mass_numbers: Vec<u32>,
}

/// the decoded isotopologue section. rows keep their input order, and no two
/// rows share a name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsotopologueTable(Vec<Isotopologue>);

impl IsotopologueTable {
    pub fn entries(&self) -> &[Isotopologue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|iso| iso.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Isotopologue> {
        self.0.iter().find(|iso| iso.name == name)
    }
}

/// parse a full input file. the sections may appear in any order, and text
/// outside of them is ignored
pub fn parse(text: &str) -> Result<Input, PacError> {
    let molecule = decode_coordinates(extract(text, Section::Coordinates)?)?;
    let dipole = decode_dipole(extract(text, Section::Dipole)?)?;
    let isotopologues = decode_isotopologues(
        extract(text, Section::Isotopologues)?,
        molecule.len(),
    )?;
    debug!(
        "parsed {} isotopologues for molecule:\n{}",
        isotopologues.len(),
        molecule
    );
    Ok(Input {
        molecule,
        dipole,
        isotopologues,
    })
}

/// return the body of `section`: the text between the first line starting
/// with its keyword and the first empty line after that. the body begins
/// with the remainder of the keyword line itself, which the decoders discard
pub(crate) fn extract(text: &str, section: Section) -> Result<&str, PacError> {
    let keyword = section.keyword();
    let mut offset = 0;
    let mut start = None;
    for line in text.split('\n') {
        if line
            .get(..keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
        {
            start = Some(offset + keyword.len());
            break;
        }
        offset += line.len() + 1;
    }
    let Some(start) = start else {
        return Err(PacError::SectionNotFound(section));
    };
    // an empty line is two adjacent newlines. the body always starts in the
    // middle of the keyword line, so the terminator cannot match before it
    let region = &text[start..];
    match region.find("\n\n") {
        Some(end) => Ok(&region[..end]),
        None => Err(PacError::SectionUnterminated(section)),
    }
}

/// the data rows of a section body: everything after the discarded keyword
/// line, minus whitespace-only lines
fn body_lines(body: &str) -> impl Iterator<Item = &str> {
    body.split('\n')
        .skip(1)
        .filter(|line| !line.trim().is_empty())
}

fn decode_coordinates(body: &str) -> Result<Molecule, PacError> {
    let mut atoms = Vec::new();
    for line in body_lines(body) {
        let atom = Atom::from_str(line).map_err(|e| {
            PacError::format(
                Section::Coordinates,
                format!("bad atom line `{line}`: {e}"),
            )
        })?;
        atoms.push(atom);
    }
    if atoms.is_empty() {
        return Err(PacError::format(
            Section::Coordinates,
            "expected at least one atom line",
        ));
    }
    Ok(Molecule::new(atoms))
}

/// only the line directly below the keyword line is consulted; anything
/// after it in the section is ignored
fn decode_dipole(body: &str) -> Result<Vec3, PacError> {
    let Some(line) = body.split('\n').nth(1) else {
        return Err(PacError::format(Section::Dipole, "missing dipole line"));
    };
    let fields: Vec<_> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(PacError::format(
            Section::Dipole,
            format!("expected three dipole components, got `{line}`"),
        ));
    }
    let mu: Vec<f64> = fields[..3]
        .iter()
        .map(|f| f.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| {
            PacError::format(
                Section::Dipole,
                format!("bad dipole component in `{line}`"),
            )
        })?;
    Ok(Vec3::new(mu[0], mu[1], mu[2]))
}

fn decode_isotopologues(
    body: &str,
    natoms: usize,
) -> Result<IsotopologueTable, PacError> {
    let mut entries = Vec::new();
    for line in body_lines(body) {
        let fields: Vec<_> = line.split_whitespace().collect();
        if fields.len() < natoms + 1 {
            return Err(PacError::format(
                Section::Isotopologues,
                format!(
                    "expected {natoms} mass numbers and a label, \
                     got `{line}`"
                ),
            ));
        }
        let mass_numbers: Vec<u32> = fields[..natoms]
            .iter()
            .map(|f| f.parse())
            .collect::<Result<_, _>>()
            .map_err(|_| {
                PacError::format(
                    Section::Isotopologues,
                    format!("bad mass number in `{line}`"),
                )
            })?;
        entries.push(Isotopologue {
            name: fields[natoms].to_owned(),
            mass_numbers,
        });
    }
    if entries.is_empty() {
        return Err(PacError::format(
            Section::Isotopologues,
            "expected at least one isotopologue line",
        ));
    }
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for iso in &entries {
        *counts.entry(iso.name.as_str()).or_default() += 1;
    }
    let mut dups = Vec::new();
    for iso in &entries {
        if counts[iso.name.as_str()] > 1 && !dups.contains(&iso.name) {
            dups.push(iso.name.clone());
        }
    }
    if !dups.is_empty() {
        return Err(PacError::DuplicateIsotopologues(dups));
    }
    Ok(IsotopologueTable(entries))
}
