// src/config.rs
use std::path::PathBuf;

use crate::sort::{parse_sort_spec, SortSpec};

/// One file in the default batch, with the spec applied when no command-line
/// override is given.
#[derive(Debug, Clone)]
pub struct DefaultSort {
    pub path: PathBuf,
    pub spec: SortSpec,
}

/// Default sort configuration for all data files, in batch order.
///
/// Explicit data passed into `run`, not hidden module state, so tests can
/// inject their own mapping.
pub fn default_sorts() -> Vec<DefaultSort> {
    [
        ("data/students-phd.csv", "Finish:desc,Start:desc"),
        ("data/students-ms.csv", "Finish:desc"),
        ("data/postdocs.csv", "Start:desc,Finish:desc"),
        ("data/interns-grad.csv", "Year:desc"),
        ("data/interns-undergrad.csv", "Finish:desc"),
        ("data/grants.csv", "Start:desc,Finish:desc"),
        ("data/press.csv", "Year:desc"),
    ]
    .into_iter()
    .map(|(path, spec)| DefaultSort {
        path: PathBuf::from(path),
        spec: parse_sort_spec(spec),
    })
    .collect()
}
