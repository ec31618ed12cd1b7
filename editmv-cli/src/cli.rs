use clap::Parser;
use std::path::PathBuf;

/// Batch-rename the files in a directory by editing a plain-text listing
#[derive(Parser, Debug)]
#[command(name = "editmv")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Run as if started in <PATH> instead of the current working directory
    #[arg(short = 'C', long = "directory", value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Editor command for the texteditor command (overrides config, $VISUAL and $EDITOR)
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,

    /// Use <NAME> as the edit file instead of the timestamped default
    #[arg(long, value_name = "NAME")]
    pub edit_file: Option<String>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "editmv",
            "-C",
            "/tmp/somewhere",
            "--editor",
            "code --wait",
            "--edit-file",
            "names.txt",
            "--no-color",
        ]);
        assert_eq!(cli.directory.as_deref(), Some(Path::new("/tmp/somewhere")));
        assert_eq!(cli.editor.as_deref(), Some("code --wait"));
        assert_eq!(cli.edit_file.as_deref(), Some("names.txt"));
        assert!(cli.no_color);
    }

    #[test]
    fn test_parse_without_flags() {
        let cli = Cli::parse_from(["editmv"]);
        assert!(cli.directory.is_none());
        assert!(cli.editor.is_none());
        assert!(cli.edit_file.is_none());
    }
}
