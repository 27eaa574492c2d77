use std::{error::Error, fmt::Display};

/// the three recognized sections of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Coordinates,
    Dipole,
    Isotopologues,
}

impl Section {
    /// the keyword opening the section, matched case-insensitively at the
    /// start of a line
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Section::Coordinates => "coordinates",
            Section::Dipole => "dipole",
            Section::Isotopologues => "isotopologues",
        }
    }

    /// a sketch of the expected section layout, shown with every error
    /// concerning the section
    fn grammar(self) -> &'static str {
        match self {
            Section::Coordinates => {
                "there was an error reading the atomic coordinates.
the coordinates section should have the form:
    Coordinates        # comments
    Atom1 x1 y1 z1     # more comments
    ...
    AtomN xN yN zN
    (blank line)
where each Atom is an element symbol and x, y, and z are real numbers."
            }
            Section::Dipole => {
                "there was an error reading the dipole.
the dipole section should have the form:
    Dipole             # comments
    muX muY muZ        # more comments
    (blank line)
where muX, muY, and muZ are real numbers."
            }
            Section::Isotopologues => {
                "there was an error reading the isotopologue masses.
the isotopologues section should have the form:
    Isotopologues      # comments
    mass1 ... massN iso000
    mass1 ... massN iso001
    (blank line)
where each mass is an integer mass number, one per atom in the same order
as the Coordinates section, and iso### labels that isotopologue in the
output."
            }
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PacError {
    /// the section keyword never appears at the start of a line
    SectionNotFound(Section),
    /// the keyword was found, but no empty line follows to end the section
    SectionUnterminated(Section),
    /// a row of the section does not match the expected layout
    SectionFormat { section: Section, detail: String },
    /// two or more isotopologue rows share a label
    DuplicateIsotopologues(Vec<String>),
    /// the mass table has no entry for this symbol and mass number
    MassNotFound { symbol: String, mass_number: u32 },
}

impl PacError {
    pub(crate) fn format(section: Section, detail: impl Into<String>) -> Self {
        Self::SectionFormat {
            section,
            detail: detail.into(),
        }
    }
}

impl Display for PacError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PacError::SectionNotFound(s) => write!(
                f,
                "{}\n\tcould not find a line starting with \"{}\" \
                 (case insensitive)",
                s.grammar(),
                s.keyword()
            ),
            PacError::SectionUnterminated(s) => write!(
                f,
                "{}\n\tcould not find the end of the {s} section; make sure \
                 there is a blank line at the end of the section",
                s.grammar()
            ),
            PacError::SectionFormat { section, detail } => {
                write!(f, "{}", section.grammar())?;
                if !detail.is_empty() {
                    write!(f, "\n\t{detail}")?;
                }
                Ok(())
            }
            PacError::DuplicateIsotopologues(names) => write!(
                f,
                "{}\n\tthe isotopologues section contains duplicate labels: \
                 {names:?}",
                Section::Isotopologues.grammar()
            ),
            PacError::MassNotFound {
                symbol,
                mass_number,
            } => write!(
                f,
                "isotopic mass not found for {symbol} with mass number \
                 {mass_number}"
            ),
        }
    }
}

impl Error for PacError {}
