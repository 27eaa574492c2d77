//! tests for the principal axis pipeline itself

use approx::{assert_abs_diff_eq, assert_relative_eq};
use paxes::{Mat3, ROTCON_MHZ, Vec3};

use crate::{
    error::PacError,
    load::parse,
    run::{Engine, MassResolver},
};

const H2_DOC: &str = "coordinates
H 0.0 0.0 0.0
H 1.0 -1.0 0.0

dipole
1.0 -1.0 0.0

isotopologues
1 1 h2
2 1 hd

";

const WATER_DOC: &str = "coordinates
O 0.0000000 0.0000000 0.0000000
H 0.0000000 0.7570000 0.5870000
H 0.0000000 -0.7570000 0.5870000

dipole
0.0 0.0 -1.85

isotopologues
16 1 1 h2o
18 1 1 h218o
16 2 2 d2o

";

/// a resolver with no isotopes at all
struct Empty;

impl MassResolver for Empty {
    fn mass(&self, _: &str, _: u32) -> Option<f64> {
        None
    }
}

#[test]
fn missing_mass() {
    let input = parse(H2_DOC).unwrap();
    let err = Engine::new(Empty).run(&input).unwrap_err();
    assert_eq!(
        err,
        PacError::MassNotFound {
            symbol: "H".to_owned(),
            mass_number: 1
        }
    );
    assert!(err.to_string().contains("H with mass number 1"));
}

#[test]
fn h2_principal_axes() {
    let input = parse(H2_DOC).unwrap();
    let results = Engine::new(&*isomass::TABLE).run(&input).unwrap();
    assert_eq!(results.len(), 2);

    let h2 = &results[0];
    assert_eq!(h2.name, "h2");
    let m = isomass::TABLE.lookup("H", 1).unwrap();
    assert_eq!(h2.masses, vec![m, m]);
    // identical masses put the center of mass at the midpoint
    assert_abs_diff_eq!(
        h2.com_geom.atoms[0].coord(),
        Vec3::new(-0.5, 0.5, 0.0),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        h2.com_geom.atoms[1].coord(),
        Vec3::new(0.5, -0.5, 0.0),
        epsilon = 1e-12
    );
    // the moment along the molecular axis vanishes and the other two are
    // degenerate at 2 m d² with d² = 1/2
    assert_abs_diff_eq!(h2.eigenvalues[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h2.eigenvalues[1], m, epsilon = 1e-12);
    assert_abs_diff_eq!(h2.eigenvalues[2], m, epsilon = 1e-12);
    // the dipole lies along the molecular axis, so its projection is √2 on
    // a and zero on b and c no matter how the degenerate pair comes out
    assert_abs_diff_eq!(
        h2.dipole,
        Vec3::new(f64::sqrt(2.0), 0.0, 0.0),
        epsilon = 1e-12
    );
    assert!(h2.rotcon.iter().all(|b| !b.is_nan()));

    let hd = &results[1];
    assert_eq!(hd.name, "hd");
    let md = isomass::TABLE.lookup("H", 2).unwrap();
    // for a diatomic the nonzero moments are μ d²
    let mu = m * md / (m + md);
    assert_abs_diff_eq!(hd.eigenvalues[1], 2.0 * mu, epsilon = 1e-10);
    assert_abs_diff_eq!(hd.eigenvalues[2], 2.0 * mu, epsilon = 1e-10);
}

#[test]
fn single_atom_rotcon_is_infinite() {
    let input = parse(
        "coordinates\nNe 0.0 0.0 0.0\n\ndipole\n0.0 0.0 0.0\n\n\
         isotopologues\n20 ne20\n\n",
    )
    .unwrap();
    let results = Engine::new(&*isomass::TABLE).run(&input).unwrap();
    // a single atom has a zero inertia tensor; the division must survive it
    assert!(results[0].rotcon.iter().all(|b| b.is_infinite()));
}

#[test]
fn water_isotopologues() {
    let input = parse(WATER_DOC).unwrap();
    let results = Engine::new(&*isomass::TABLE).run(&input).unwrap();
    // results come back in table order
    let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["h2o", "h218o", "d2o"]);

    for res in &results {
        // the translated geometry is actually centered
        assert_abs_diff_eq!(
            res.com_geom.com(&res.masses),
            Vec3::zeros(),
            epsilon = 1e-12
        );
        // ascending principal moments
        assert!(res.eigenvalues[0] <= res.eigenvalues[1]);
        assert!(res.eigenvalues[1] <= res.eigenvalues[2]);
        // recomputing the tensor in the principal frame recovers the
        // eigenvalues on the diagonal
        assert!(res.diagonal, "{} tensor not diagonal", res.name);
        assert_relative_eq!(
            res.pa_inertia,
            Mat3::from_diagonal(&res.eigenvalues),
            epsilon = 1e-8,
            max_relative = 1e-8
        );
        // B_i I_i recovers the conversion constant
        for i in 0..3 {
            assert_relative_eq!(
                res.rotcon[i] * res.eigenvalues[i],
                ROTCON_MHZ,
                max_relative = 1e-12
            );
        }
        // projections are reported as magnitudes
        assert!(res.dipole.iter().all(|mu| *mu >= 0.0));
        // the eigenvector matrix takes the principal frame back to the
        // com frame
        let back = res.pa_geom.transform(res.eigenvectors);
        assert_abs_diff_eq!(back, res.com_geom.clone(), epsilon = 1e-10);
    }

    // heavier isotopologues spin slower
    for i in 0..3 {
        assert!(results[2].rotcon[i] < results[0].rotcon[i]);
    }
}
