use crate::cli::args::CliArgs;
use crate::filter;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.min_accessibility.as_deref() {
        filter::parse_min_accessibility(raw)
            .map_err(|e| format!("invalid --min-accessibility '{raw}': {e}"))?;
    }
    if let Some(raw) = args.teams.as_deref() {
        filter::parse_teams(raw).map_err(|e| format!("invalid --teams '{raw}': {e}"))?;
    }
    if let Some(raw) = args.output_format.as_deref() {
        if crate::output::OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text, json or html"
            ));
        }
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid timeout, expected positive integer".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["contentdash"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn accepts_well_formed_filters() {
        assert!(validate(&args(&["--min-accessibility", "80", "--teams", "false"])).is_ok());
        assert!(validate(&args(&["-m", "", "-t", ""])).is_ok());
    }

    #[test]
    fn rejects_malformed_threshold() {
        let err = validate(&args(&["--min-accessibility", "high"])).unwrap_err();
        assert!(err.contains("--min-accessibility"));
        assert!(validate(&args(&["--min-accessibility", "120"])).is_err());
    }

    #[test]
    fn rejects_unknown_teams_value() {
        assert!(validate(&args(&["--teams", "yes"])).is_err());
    }

    #[test]
    fn rejects_unknown_format_and_zero_timeout() {
        assert!(validate(&args(&["--output-format", "xml"])).is_err());
        assert!(validate(&args(&["--timeout", "0"])).is_err());
    }
}
