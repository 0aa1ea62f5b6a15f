/// Target list resolution for benchmark runs.
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// One host endpoint to be benchmarked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub address: String,
}

impl Target {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Build the ordered, deduplicated target list from the CLI inputs.
///
/// The explicit `--ip` address comes first, then file lines in file order.
/// Lines that are empty after trimming are skipped; duplicates keep their
/// first occurrence. Addresses are compared as exact trimmed strings, no
/// hostname normalization.
pub fn resolve_targets(ip: Option<&str>, file: Option<&Path>) -> Result<Vec<Target>, ConfigError> {
    if ip.is_none() && file.is_none() {
        return Err(ConfigError::NoTargets);
    }

    let mut targets: Vec<Target> = Vec::new();
    let mut push_unique = |address: &str| {
        let address = address.trim();
        if address.is_empty() {
            return;
        }
        if !targets.iter().any(|t| t.address == address) {
            targets.push(Target::new(address));
        }
    };

    if let Some(ip) = ip {
        push_unique(ip);
    }

    if let Some(path) = file {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::TargetFile {
            path: path.display().to_string(),
            source,
        })?;
        for line in contents.lines() {
            push_unique(line);
        }
    }

    if targets.is_empty() {
        return Err(ConfigError::NoTargets);
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn target_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn single_ip_resolves_to_one_target() {
        let targets = resolve_targets(Some("10.0.0.1"), None).unwrap();
        assert_eq!(targets, vec![Target::new("10.0.0.1")]);
    }

    #[test]
    fn ip_comes_before_file_entries_and_duplicates_keep_first_occurrence() {
        let file = target_file("1.1.1.1\n2.2.2.2\n");
        let targets = resolve_targets(Some("1.1.1.1"), Some(file.path())).unwrap();
        assert_eq!(
            targets,
            vec![Target::new("1.1.1.1"), Target::new("2.2.2.2")]
        );
    }

    #[test]
    fn blank_and_whitespace_lines_are_skipped() {
        let file = target_file("1.1.1.1\n\n   \n\t\n2.2.2.2\n");
        let targets = resolve_targets(None, Some(file.path())).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn file_order_is_preserved() {
        let file = target_file("9.9.9.9\n1.1.1.1\n5.5.5.5\n");
        let targets = resolve_targets(None, Some(file.path())).unwrap();
        let addresses: Vec<&str> = targets.iter().map(|t| t.address.as_str()).collect();
        assert_eq!(addresses, vec!["9.9.9.9", "1.1.1.1", "5.5.5.5"]);
    }

    #[test]
    fn addresses_are_trimmed_before_comparison() {
        let file = target_file("  1.1.1.1  \n1.1.1.1\n");
        let targets = resolve_targets(None, Some(file.path())).unwrap();
        assert_eq!(targets, vec![Target::new("1.1.1.1")]);
    }

    #[test]
    fn neither_input_is_a_config_error() {
        let err = resolve_targets(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::NoTargets));
    }

    #[test]
    fn empty_file_with_no_ip_is_a_config_error() {
        let file = target_file("\n\n");
        let err = resolve_targets(None, Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::NoTargets));
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let err = resolve_targets(None, Some(Path::new("/nonexistent/hosts.txt"))).unwrap_err();
        assert!(matches!(err, ConfigError::TargetFile { .. }));
    }
}
