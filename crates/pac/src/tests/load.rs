//! parsing tests, mostly around section boundaries

use approx::assert_abs_diff_eq;
use paxes::Vec3;
use test_case::test_case;

use crate::{
    error::{PacError, Section},
    load::parse,
};

const COORDS: &str = "coordinates
H 0.0 0.0 0.0
H 1.0 -1.0 0.0

";

const DIPOLE: &str = "dipole
1.0 -1.0 0.0

";

const ISOS: &str = "isotopologues
1 1 iso000

";

fn good() -> String {
    format!("{COORDS}{DIPOLE}{ISOS}")
}

#[test]
fn good_input() {
    let input = parse(&good()).unwrap();
    assert_eq!(input.molecule.len(), 2);
    assert_eq!(input.molecule.symbols(), vec!["H", "H"]);
    assert_eq!(input.molecule.labels(), vec!["H1", "H2"]);
    assert_abs_diff_eq!(input.dipole, Vec3::new(1.0, -1.0, 0.0));
    assert_eq!(input.isotopologues.names(), vec!["iso000"]);
    assert_eq!(
        input.isotopologues.get("iso000").unwrap().mass_numbers,
        vec![1, 1]
    );
}

#[test_case(COORDS, DIPOLE, ISOS; "canonical")]
#[test_case(DIPOLE, ISOS, COORDS; "dipole first")]
#[test_case(ISOS, COORDS, DIPOLE; "isotopologues first")]
fn section_order(a: &str, b: &str, c: &str) {
    let input = parse(&format!("{a}{b}{c}")).unwrap();
    assert_eq!(input, parse(&good()).unwrap());
}

#[test_case("coordinates"; "lowercase")]
#[test_case("Coordinates"; "titlecase")]
#[test_case("COORDINATES with a comment"; "uppercase with comment")]
fn keyword_case(header: &str) {
    let text = format!(
        "{header}\nH 0.0 0.0 0.0\nH 1.0 -1.0 0.0\n\n{DIPOLE}{ISOS}"
    );
    assert_eq!(parse(&text).unwrap(), parse(&good()).unwrap());
}

#[test]
fn keyword_must_start_line() {
    let text = format!(
        "  coordinates\nH 0.0 0.0 0.0\nH 1.0 -1.0 0.0\n\n{DIPOLE}{ISOS}"
    );
    assert_eq!(
        parse(&text).unwrap_err(),
        PacError::SectionNotFound(Section::Coordinates)
    );
}

#[test]
fn first_section_wins() {
    let text = format!("{}coordinates again\nHe 0.0 0.0 0.0\n\n", good());
    let input = parse(&text).unwrap();
    assert_eq!(input.molecule.symbols(), vec!["H", "H"]);
}

#[test]
fn keyword_line_remainder_discarded() {
    // the rest of the keyword line is not an atom row
    let text = format!(
        "coordinates He 9.0 9.0 9.0\nH 0.0 0.0 0.0\nH 1.0 -1.0 0.0\n\n\
         {DIPOLE}{ISOS}"
    );
    assert_eq!(parse(&text).unwrap(), parse(&good()).unwrap());
}

#[test]
fn junk_between_sections() {
    let text = format!(
        "some notes on the calculation\n\n{COORDS}more notes\n\n{DIPOLE}\
         final notes\n\n{ISOS}"
    );
    assert_eq!(parse(&text).unwrap(), parse(&good()).unwrap());
}

#[test]
fn whitespace_line_does_not_terminate() {
    // the blank-looking line inside the section contains spaces, so both
    // atoms belong to it
    let text = format!(
        "coordinates\nH 0.0 0.0 0.0\n   \nH 1.0 -1.0 0.0\n\n{DIPOLE}{ISOS}"
    );
    assert_eq!(parse(&text).unwrap(), parse(&good()).unwrap());
}

#[test]
fn space_line_is_not_a_terminator() {
    let text = format!("{COORDS}{ISOS}dipole\n1.0 -1.0 0.0\n \n");
    assert_eq!(
        parse(&text).unwrap_err(),
        PacError::SectionUnterminated(Section::Dipole)
    );
}

#[test]
fn missing_blank_line_at_eof() {
    let text = format!("{COORDS}{DIPOLE}isotopologues\n1 1 iso000\n");
    assert_eq!(
        parse(&text).unwrap_err(),
        PacError::SectionUnterminated(Section::Isotopologues)
    );
}

#[test]
fn missing_section() {
    let text = format!("{COORDS}{DIPOLE}");
    assert_eq!(
        parse(&text).unwrap_err(),
        PacError::SectionNotFound(Section::Isotopologues)
    );
}

#[test]
fn duplicate_names() {
    let text = format!(
        "{COORDS}{DIPOLE}isotopologues\n1 1 iso000\n2 1 iso001\n1 1 iso000\n\n"
    );
    assert_eq!(
        parse(&text).unwrap_err(),
        PacError::DuplicateIsotopologues(vec!["iso000".to_owned()])
    );
}

#[test]
fn all_duplicates_reported() {
    let text = format!(
        "{COORDS}{DIPOLE}isotopologues\n1 1 a\n1 1 b\n2 1 a\n2 2 b\n1 2 c\n\n"
    );
    assert_eq!(
        parse(&text).unwrap_err(),
        PacError::DuplicateIsotopologues(vec!["a".to_owned(), "b".to_owned()])
    );
}

#[test_case("H A B C"; "non numeric coordinates")]
#[test_case("H 1.0 2.0"; "too few fields")]
fn bad_atom_line(line: &str) {
    let text = format!("coordinates\n{line}\n\n{DIPOLE}{ISOS}");
    assert!(matches!(
        parse(&text).unwrap_err(),
        PacError::SectionFormat {
            section: Section::Coordinates,
            ..
        }
    ));
}

#[test]
fn empty_coordinates() {
    let text = format!("coordinates\n\n{DIPOLE}{ISOS}");
    assert!(matches!(
        parse(&text).unwrap_err(),
        PacError::SectionFormat {
            section: Section::Coordinates,
            ..
        }
    ));
}

#[test_case("1.0 0.0"; "too few components")]
#[test_case("1.0 x 0.0"; "non numeric component")]
#[test_case(""; "empty section")]
fn bad_dipole_line(line: &str) {
    let text = format!("{COORDS}{ISOS}dipole\n{line}\n\n");
    assert!(matches!(
        parse(&text).unwrap_err(),
        PacError::SectionFormat {
            section: Section::Dipole,
            ..
        }
    ));
}

#[test]
fn dipole_reads_only_first_line() {
    let text = format!("{COORDS}{ISOS}dipole\n1.0 -1.0 0.0\n9.0 9.0 9.0\n\n");
    let input = parse(&text).unwrap();
    assert_abs_diff_eq!(input.dipole, Vec3::new(1.0, -1.0, 0.0));
}

#[test_case("1 iso000"; "too few mass numbers")]
#[test_case("1 1"; "missing label")]
#[test_case("1.5 1 iso000"; "fractional mass number")]
#[test_case("-1 1 iso000"; "negative mass number")]
#[test_case(""; "empty section")]
fn bad_isotopologue_line(line: &str) {
    let text = format!("{COORDS}{DIPOLE}isotopologues\n{line}\n\n");
    assert!(matches!(
        parse(&text).unwrap_err(),
        PacError::SectionFormat {
            section: Section::Isotopologues,
            ..
        }
    ));
}

#[test]
fn extra_tokens_ignored() {
    let text = "coordinates
H 0.0 0.0 0.0 frozen
H 1.0 -1.0 0.0 active

dipole
1.0 -1.0 0.0 b3lyp

isotopologues
1 1 iso000 parent species

";
    let input = parse(text).unwrap();
    assert_eq!(input, parse(&good()).unwrap());
}

#[test]
fn load_messy() {
    let text = std::fs::read_to_string("testfiles/messy.in").unwrap();
    let input = parse(&text).unwrap();
    assert_eq!(input.molecule.symbols(), vec!["H", "H"]);
    assert_abs_diff_eq!(input.dipole, Vec3::zeros());
    assert_eq!(input.isotopologues.names(), vec!["h2", "hd", "d2"]);
}

#[test]
fn load_formaldehyde() {
    let text = std::fs::read_to_string("testfiles/formaldehyde.in").unwrap();
    let input = parse(&text).unwrap();
    assert_eq!(input.molecule.symbols(), vec!["C", "O", "H", "H"]);
    assert_eq!(input.isotopologues.len(), 3);
    assert_eq!(
        input.isotopologues.get("hdco").unwrap().mass_numbers,
        vec![12, 16, 2, 1]
    );
}
