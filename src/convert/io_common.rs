use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::convert::*;

/// Where the JSON document goes.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_args(input: &Path, out: &Option<String>) -> OutputTarget {
        match out.as_deref() {
            Some("stdout") => OutputTarget::Stdout,
            Some(p) if !p.is_empty() => OutputTarget::File(PathBuf::from(p)),
            _ => OutputTarget::File(default_output_path(input)),
        }
    }

    /// True when the JSON document goes to the standard output, which then
    /// cannot carry anything else.
    pub fn uses_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }
}

/// Absolute paths are kept, relative paths are taken from the current directory.
pub fn resolve_input_path(path: &str) -> ConvertResult<PathBuf> {
    let p = Path::new(path);
    if p.is_absolute() {
        return Ok(p.to_path_buf());
    }
    let cwd = env::current_dir().context(CurrentDirSnafu {})?;
    Ok(cwd.join(p))
}

/// The input path with `.json` appended: `responses.csv` -> `responses.csv.json`
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut s: OsString = input.as_os_str().to_owned();
    s.push(".json");
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_input_resolves_against_cwd() {
        let p = resolve_input_path("data/responses.csv").unwrap();
        assert!(p.is_absolute());
        assert_eq!(
            p,
            env::current_dir().unwrap().join("data").join("responses.csv")
        );
    }

    #[test]
    fn absolute_input_is_kept() {
        let abs = env::temp_dir().join("responses.csv");
        let p = resolve_input_path(&abs.display().to_string()).unwrap();
        assert_eq!(p, abs);
    }

    #[test]
    fn json_suffix_is_appended() {
        assert_eq!(
            default_output_path(Path::new("/tmp/responses.csv")),
            PathBuf::from("/tmp/responses.csv.json")
        );
    }

    #[test]
    fn output_target() {
        let input = Path::new("/tmp/responses.csv");
        assert_eq!(
            OutputTarget::from_args(input, &None),
            OutputTarget::File(PathBuf::from("/tmp/responses.csv.json"))
        );
        assert_eq!(
            OutputTarget::from_args(input, &Some("".to_string())),
            OutputTarget::File(PathBuf::from("/tmp/responses.csv.json"))
        );
        assert_eq!(
            OutputTarget::from_args(input, &Some("stdout".to_string())),
            OutputTarget::Stdout
        );
        assert_eq!(
            OutputTarget::from_args(input, &Some("out.json".to_string())),
            OutputTarget::File(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn only_stdout_target_uses_stdout() {
        assert!(OutputTarget::Stdout.uses_stdout());
        assert!(!OutputTarget::File(PathBuf::from("out.json")).uses_stdout());
    }
}
