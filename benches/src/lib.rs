//! Helpers shared by the benchmarks of this workspace.

/// Builds a benchmark name that is prefixed by the module path of the caller.
///
/// ```
/// # use benches::bench;
/// let name = bench!("zip");
/// assert!(name.ends_with("::zip"));
/// ```
#[macro_export]
macro_rules! bench {
    ($name:literal) => {
        concat!(module_path!(), "::", $name)
    };
}
