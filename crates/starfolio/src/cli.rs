//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "starfolio", version, about)]
pub struct Args {
    /// Read settings from this file instead of the platform config path.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the starfield so the same sky is drawn every run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter, e.g. `debug` or `starfolio=trace`. Overrides RUST_LOG.
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["starfolio"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn all_flags_parse() {
        let args = Args::try_parse_from([
            "starfolio",
            "--config",
            "/tmp/sf.toml",
            "--seed",
            "42",
            "--log-level",
            "debug",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sf.toml")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
    }

    #[test]
    fn seed_must_be_a_number() {
        assert!(Args::try_parse_from(["starfolio", "--seed", "north"]).is_err());
    }
}
