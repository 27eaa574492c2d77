//! pac locates the principal axes of a molecule for a series of
//! isotopologues and reports the corresponding rotational constants, dipole
//! components, and coordinates

pub mod error;
pub mod load;
pub mod output;
pub mod run;


/// print a message to stderr and exit with status 1
#[macro_export]
macro_rules! die {
    ($($t:tt)*) => {{
        eprintln!($($t)*);
        std::process::exit(1)
    }};
}

/// call `rayon::ThreadPoolBuilder` to set `num_threads` to `n`. Discards the
/// error returned by `build_global` if the thread pool has already been
/// initialized
pub fn max_threads(n: usize) {
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build_global();
}
