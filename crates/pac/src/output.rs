//! text, csv, and json renderings of the computed results
//!
//! the text report rounds to a configurable number of decimal places for
//! easy reading, while the csv and json reports keep full precision

use std::io::{self, Write};

use paxes::{Mat3, Molecule};

use crate::run::{DIAG_EPS, IsotopologueResult};

/// ruler drawn between isotopologue entries within a section
const ISO_RULE: &str = "==========";

/// everything needed to render the output files for one run
pub struct Report<'a> {
    /// the raw input file, echoed at the top of the text report
    pub raw_input: &'a str,
    /// the parsed geometry, for atom labels
    pub molecule: &'a Molecule,
    pub results: &'a [IsotopologueResult],
    /// decimal places in the text report
    pub decimals: usize,
}

impl Report<'_> {
    /// write the human-readable text report. `csv_name` is the name of the
    /// companion csv file mentioned in the preamble
    pub fn write_text(
        &self,
        mut w: impl Write,
        csv_name: &str,
    ) -> io::Result<()> {
        let d = self.decimals;
        writeln!(
            w,
            "The numbers in this output have been limited to {d} decimal \
             places."
        )?;
        writeln!(
            w,
            "The numbers in the corresponding {csv_name} file have not."
        )?;
        writeln!(w, "Rotational constants are in MHz.")?;
        writeln!(
            w,
            "Dipole moments are in the same units provided in the raw input."
        )?;

        writeln!(w, "\n{}", header("Raw Input"))?;
        writeln!(w, "{}", self.raw_input.trim())?;

        let columns: Vec<&str> =
            self.results.iter().map(|r| r.name.as_str()).collect();

        writeln!(w, "\n{}", header("Atomic Masses"))?;
        let mut rows: Vec<(String, Vec<f64>)> = self
            .molecule
            .symbols()
            .iter()
            .enumerate()
            .map(|(i, sym)| {
                (
                    sym.to_string(),
                    self.results.iter().map(|r| r.masses[i]).collect(),
                )
            })
            .collect();
        rows.push((
            "Total".to_owned(),
            self.results
                .iter()
                .map(|r| r.masses.iter().sum())
                .collect(),
        ));
        write_table(&mut w, "Atom", &columns, &rows, d, &["Total"])?;

        writeln!(w, "\n{}", header("COM Coordinates"))?;
        let labels = self.molecule.labels();
        for (i, res) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(w, "\n{ISO_RULE}")?;
            }
            writeln!(w, "{}", res.name)?;
            let rows: Vec<(String, Vec<f64>)> = res
                .com_geom
                .atoms
                .iter()
                .zip(&labels)
                .map(|(a, label)| (label.clone(), vec![a.x, a.y, a.z]))
                .collect();
            write_table(&mut w, "Atom", &["x", "y", "z"], &rows, d, &[])?;
        }

        writeln!(w, "\n{}", header("COM Inertia Matrix"))?;
        for (i, res) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(w, "\n{ISO_RULE}")?;
            }
            writeln!(w, "{}", res.name)?;
            write_matrix(
                &mut w,
                &["x", "y", "z"],
                &["x", "y", "z"],
                res.com_inertia,
                d,
            )?;
        }

        writeln!(w, "\n{}", header("Eigenvectors & Eigenvalues"))?;
        for (i, res) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(w, "\n{ISO_RULE}")?;
            }
            writeln!(w, "{}\n", res.name)?;
            writeln!(w, "Eigenvectors")?;
            write_matrix(
                &mut w,
                &["x", "y", "z"],
                &["1", "2", "3"],
                res.eigenvectors,
                d,
            )?;
            writeln!(w, "\nEigenvalues")?;
            let vals: Vec<String> = (0..3)
                .map(|j| format!("{:.d$}", res.eigenvalues[j]))
                .collect();
            writeln!(w, "{}", vals.join("   "))?;
        }

        writeln!(w, "\n{}", header("Principal Axes Inertia Matrix"))?;
        writeln!(w, "(All entries should be diagonal)\n")?;
        for (i, res) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(w, "\n{ISO_RULE}")?;
            }
            writeln!(w, "{}", res.name)?;
            write_matrix(
                &mut w,
                &["a", "b", "c"],
                &["a", "b", "c"],
                res.pa_inertia,
                d,
            )?;
            if !res.diagonal {
                writeln!(w, "WARNING: not diagonal to within {DIAG_EPS:e}")?;
            }
        }

        writeln!(w, "\n{}", header("Rotational Constants"))?;
        let rows: Vec<(String, Vec<f64>)> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, ax)| {
                (
                    ax.to_string(),
                    self.results.iter().map(|r| r.rotcon[i]).collect(),
                )
            })
            .collect();
        write_table(&mut w, "Axis", &columns, &rows, d, &[])?;

        writeln!(w, "\n{}", header("Dipole Components"))?;
        let rows: Vec<(String, Vec<f64>)> = ["mu_A", "mu_B", "mu_C"]
            .iter()
            .enumerate()
            .map(|(i, ax)| {
                (
                    ax.to_string(),
                    self.results.iter().map(|r| r.dipole[i]).collect(),
                )
            })
            .collect();
        write_table(&mut w, "Axis", &columns, &rows, d, &[])?;

        writeln!(w, "\n{}", header("Principal Axes Coordinates"))?;
        writeln!(
            w,
            "(Includes dipole moments and rotational constants, for easy \
             reference.)\n"
        )?;
        for (i, res) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(w, "\n{ISO_RULE}")?;
            }
            writeln!(w, "{}", res.name)?;
            let mut rows: Vec<(String, Vec<f64>)> = res
                .pa_geom
                .atoms
                .iter()
                .map(|a| (a.symbol.clone(), vec![a.x, a.y, a.z]))
                .collect();
            rows.push((
                "Dipole".to_owned(),
                res.dipole.iter().copied().collect(),
            ));
            rows.push((
                "Rot. Con.".to_owned(),
                res.rotcon.iter().copied().collect(),
            ));
            write_table(
                &mut w,
                "Atom",
                &["a", "b", "c"],
                &rows,
                d,
                &["Dipole"],
            )?;
        }
        writeln!(w)?;
        Ok(())
    }

    /// write the full-precision csv report
    pub fn write_csv(&self, mut w: impl Write) -> io::Result<()> {
        writeln!(w, "Rotational Constants")?;
        write!(w, "Axis")?;
        for r in self.results {
            write!(w, ",{}", r.name)?;
        }
        writeln!(w)?;
        for (i, ax) in ["A", "B", "C"].iter().enumerate() {
            write!(w, "{ax}")?;
            for r in self.results {
                write!(w, ",{}", r.rotcon[i])?;
            }
            writeln!(w)?;
        }

        writeln!(w, "\nDipole Components")?;
        write!(w, "Axis")?;
        for r in self.results {
            write!(w, ",{}", r.name)?;
        }
        writeln!(w)?;
        for (i, ax) in ["mu_A", "mu_B", "mu_C"].iter().enumerate() {
            write!(w, "{ax}")?;
            for r in self.results {
                write!(w, ",{}", r.dipole[i])?;
            }
            writeln!(w)?;
        }

        writeln!(w, "\nPrincipal Axes Coordinates")?;
        writeln!(w, "Isotopologue,Atom,a,b,c")?;
        let labels = self.molecule.labels();
        for r in self.results {
            for (atom, label) in r.pa_geom.atoms.iter().zip(&labels) {
                writeln!(
                    w,
                    "{},{},{},{},{}",
                    r.name, label, atom.x, atom.y, atom.z
                )?;
            }
        }

        writeln!(w, "\nAtomic Masses")?;
        write!(w, "Atom")?;
        for r in self.results {
            write!(w, ",{}", r.name)?;
        }
        writeln!(w)?;
        for (i, sym) in self.molecule.symbols().iter().enumerate() {
            write!(w, "{sym}")?;
            for r in self.results {
                write!(w, ",{}", r.masses[i])?;
            }
            writeln!(w)?;
        }
        write!(w, "Total")?;
        for r in self.results {
            write!(w, ",{}", r.masses.iter().sum::<f64>())?;
        }
        writeln!(w)?;
        Ok(())
    }

    /// serialize the results to pretty-printed json
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.results)
    }
}

/// a three-line bordered section header
fn header(title: &str) -> String {
    let border = format!("# {} #", "=".repeat(title.len() + 2));
    format!("{border}\n#  {title}  #\n{border}")
}

/// write one fixed-width table: a label column followed by one numeric
/// column per entry in `columns`. a rule of dashes is drawn before any row
/// whose label appears in `rules`
pub(crate) fn write_table(
    w: &mut impl Write,
    index: &str,
    columns: &[&str],
    rows: &[(String, Vec<f64>)],
    decimals: usize,
    rules: &[&str],
) -> io::Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|(_, vals)| {
            vals.iter().map(|v| format!("{v:.decimals$}")).collect()
        })
        .collect();
    let label_w = rows
        .iter()
        .map(|(label, _)| label.len())
        .chain([index.len()])
        .max()
        .unwrap_or(0);
    let num_w = cells
        .iter()
        .flatten()
        .map(String::len)
        .chain(columns.iter().map(|c| c.len()))
        .max()
        .unwrap_or(0);
    let total_w = label_w + columns.len() * (num_w + 2);
    write!(w, "{index:<label_w$}")?;
    for col in columns {
        write!(w, "  {col:>num_w$}")?;
    }
    writeln!(w)?;
    for ((label, _), row) in rows.iter().zip(&cells) {
        if rules.contains(&label.as_str()) {
            writeln!(w, "{}", "-".repeat(total_w))?;
        }
        write!(w, "{label:<label_w$}")?;
        for cell in row {
            write!(w, "  {cell:>num_w$}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn write_matrix(
    w: &mut impl Write,
    rows: &[&str; 3],
    columns: &[&str; 3],
    mat: Mat3,
    decimals: usize,
) -> io::Result<()> {
    let table: Vec<(String, Vec<f64>)> = rows
        .iter()
        .enumerate()
        .map(|(i, label)| {
            (label.to_string(), (0..3).map(|j| mat[(i, j)]).collect())
        })
        .collect();
    write_table(w, "Axis", columns, &table, decimals, &[])
}
