//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Resolve Civitai share/model page URLs into direct download URLs.
///
/// Reads URLs from positional arguments or stdin (one per line) and prints
/// one resolved URL per line on stdout. Non-Civitai URLs pass through
/// unchanged.
#[derive(Parser, Debug)]
#[command(name = "civitai-resolve")]
#[command(author, version, about)]
pub struct Args {
    /// Share or model page URLs to resolve (reads stdin when omitted)
    pub urls: Vec<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the INI config file holding the API token
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["civitai-resolve"]).unwrap();
        assert!(args.urls.is_empty());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_cli_positional_urls_collected_in_order() {
        let args = Args::try_parse_from([
            "civitai-resolve",
            "https://civitai.com/models/1",
            "https://civitai.com/models/2",
        ])
        .unwrap();
        assert_eq!(args.urls.len(), 2);
        assert_eq!(args.urls[0], "https://civitai.com/models/1");
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["civitai-resolve", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["civitai-resolve", "--quiet"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_config_flag_takes_path() {
        let args =
            Args::try_parse_from(["civitai-resolve", "--config", "/tmp/tokens.ini"]).unwrap();
        assert_eq!(args.config.unwrap(), PathBuf::from("/tmp/tokens.ini"));
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["civitai-resolve", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["civitai-resolve", "--invalid-flag"]);
        assert!(result.is_err());
    }
}
