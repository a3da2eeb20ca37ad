// src/run.rs
use anyhow::Result;

use crate::config::DefaultSort;
use crate::sort::{parse_sort_spec, sort_file};

const USAGE: &str = "\
cvsort — sort CV data files consistently before LaTeX build.

Usage:
    cvsort
or
    cvsort data/students-phd.csv Finish:desc,Start:desc
    cvsort data/press.csv Year:desc
";

/// Dispatch on argument count: no args runs the default batch, two args sort
/// one file with an inline spec, anything else prints usage.
///
/// `args` excludes the program name. A skipped file (missing or empty) never
/// aborts the batch; corrupt CSV or I/O failure propagates.
pub fn run(defaults: &[DefaultSort], args: &[String]) -> Result<()> {
    match args {
        [] => {
            for entry in defaults {
                sort_file(&entry.path, &entry.spec)?;
            }
            Ok(())
        }
        [path, spec_str] => {
            let spec = parse_sort_spec(spec_str);
            sort_file(path, &spec)?;
            Ok(())
        }
        _ => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
