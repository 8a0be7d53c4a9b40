// src/config.rs
use std::path::PathBuf;

use crate::error::{EnrichError, Result};

/// Name of the NACE label table inside the KBO directory.
pub const CODE_FILE: &str = "code.csv";
/// Name of the activity assignment table inside the KBO directory.
pub const ACTIVITY_FILE: &str = "activity.csv";

/// Paths for one run, taken from the positional command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub kbo_dir: PathBuf,
    pub output: PathBuf,
}

impl RunConfig {
    /// Build from the arguments *after* the program name.
    /// Anything past the third argument is ignored.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (Some(input), Some(kbo_dir), Some(output)) => Ok(Self {
                input: input.into(),
                kbo_dir: kbo_dir.into(),
                output: output.into(),
            }),
            _ => Err(EnrichError::Usage),
        }
    }

    pub fn code_path(&self) -> PathBuf {
        self.kbo_dir.join(CODE_FILE)
    }

    pub fn activity_path(&self) -> PathBuf {
        self.kbo_dir.join(ACTIVITY_FILE)
    }

    /// The output file lives next to the KBO tables unless it is absolute.
    pub fn output_path(&self) -> PathBuf {
        self.kbo_dir.join(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_args_three_positionals() {
        let cfg = RunConfig::from_args(args(&["in.xlsx", "kbo", "out.xlsx"])).unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.xlsx"));
        assert_eq!(cfg.code_path(), Path::new("kbo/code.csv"));
        assert_eq!(cfg.activity_path(), Path::new("kbo/activity.csv"));
        assert_eq!(cfg.output_path(), Path::new("kbo/out.xlsx"));
    }

    #[test]
    fn test_from_args_wrong_arity() {
        for a in [args(&[]), args(&["in.xlsx"]), args(&["in.xlsx", "kbo"])] {
            let err = RunConfig::from_args(a).unwrap_err();
            assert!(err.is_usage());
        }
    }

    #[test]
    fn test_extra_args_ignored() {
        let cfg = RunConfig::from_args(args(&["a", "b", "c", "d"])).unwrap();
        assert_eq!(cfg.output, PathBuf::from("c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_output_kept() {
        let cfg = RunConfig::from_args(args(&["a", "kbo", "/tmp/out.xlsx"])).unwrap();
        assert_eq!(cfg.output_path(), Path::new("/tmp/out.xlsx"));
    }
}
