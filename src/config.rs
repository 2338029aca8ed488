use std::path::PathBuf;

use clap::Parser;

/// Environment variable holding the log filter, e.g. `MAZECARVE_LOG=debug`.
pub const LOG_ENV_VAR: &str = "MAZECARVE_LOG";
pub const LOG_FILE_NAME: &str = "mazecarve.log";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mazecarve", version, about = "Generate and solve perfect mazes in the terminal")]
pub struct AppConfig {
    /// Seed for reproducible mazes; OS entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a single maze of this size and exit instead of opening the menu
    #[arg(long)]
    pub size: Option<usize>,

    /// With --size, print the solved maze as well
    #[arg(long, requires = "size")]
    pub solve: bool,

    /// Directory the log file is written to
    #[arg(long, default_value_os_t = std::env::temp_dir())]
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            size: None,
            solve: false,
            log_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_empty_command_line() {
        let parsed = AppConfig::try_parse_from(["mazecarve"]).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_one_shot_flags() {
        let parsed =
            AppConfig::try_parse_from(["mazecarve", "--seed", "7", "--size", "11", "--solve"])
                .unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.size, Some(11));
        assert!(parsed.solve);
    }

    #[test]
    fn test_solve_requires_size() {
        assert!(AppConfig::try_parse_from(["mazecarve", "--solve"]).is_err());
    }
}
