//! Parsing of command-list and window-spec files.
//!
//! Both formats are line-oriented: blank lines and lines starting with `#`
//! are skipped. A grid file carries one command per line; a windows file
//! carries a window name, whitespace, then the command for that window.

use std::fs;
use std::path::Path;

use gridmux_tmux::{TmuxError, WindowSpec};

use crate::commands::{CliError, Result};

/// Read a grid command file.
///
/// # Errors
///
/// Fails when the file cannot be read or contains no commands.
pub fn read_commands(path: &Path) -> Result<Vec<String>> {
    let content = read(path)?;
    let commands = parse_commands(&content);
    if commands.is_empty() {
        return Err(TmuxError::EmptyCommandList.into());
    }
    Ok(commands)
}

/// Read a window-spec file of `name command` lines.
///
/// # Errors
///
/// Fails when the file cannot be read or contains no usable specs.
pub fn read_windows(path: &Path) -> Result<Vec<WindowSpec>> {
    let content = read(path)?;
    let specs = parse_windows(&content);
    if specs.is_empty() {
        return Err(TmuxError::EmptyWindowSpecs.into());
    }
    Ok(specs)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::SpecFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract one command per non-comment line.
pub fn parse_commands(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Extract `name command` pairs; lines without both parts are skipped.
pub fn parse_windows(content: &str) -> Vec<WindowSpec> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let (name, command) = line.split_once(char::is_whitespace)?;
            Some(WindowSpec::new(name, command.trim_start()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_commands_skips_blanks_and_comments() {
        let content = "echo hi\n\n# comment\n  echo bye  \n";
        assert_eq!(parse_commands(content), vec!["echo hi", "echo bye"]);
    }

    #[test]
    fn parse_windows_round_trip() {
        let content = "w1 echo hi\n\n# comment\nw2 echo bye\n";
        assert_eq!(
            parse_windows(content),
            vec![
                WindowSpec::new("w1", "echo hi"),
                WindowSpec::new("w2", "echo bye"),
            ]
        );
    }

    #[test]
    fn parse_windows_skips_nameless_lines() {
        let content = "lonely\nw1 top\n";
        assert_eq!(parse_windows(content), vec![WindowSpec::new("w1", "top")]);
    }

    #[test]
    fn parse_windows_splits_at_first_whitespace_run() {
        let content = "w1   echo   hi\n";
        assert_eq!(
            parse_windows(content),
            vec![WindowSpec::new("w1", "echo   hi")]
        );
    }

    #[test]
    fn read_commands_fails_on_comment_only_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# only a comment").unwrap();
        let err = read_commands(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Tmux(TmuxError::EmptyCommandList)));
    }

    #[test]
    fn read_commands_reports_missing_file() {
        let err = read_commands(Path::new("/nonexistent/gridmux-specs")).unwrap_err();
        assert!(matches!(err, CliError::SpecFile { .. }));
    }

    #[test]
    fn read_windows_parses_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "w1 echo hi\nw2 echo bye\n").unwrap();
        let specs = read_windows(file.path()).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0], WindowSpec::new("w1", "echo hi"));
    }
}
