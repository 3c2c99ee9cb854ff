use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "foldertree", bin_name = "foldertree", version = get_version())]
#[command(
    about = "Replay CREATE, LIST, MOVE and DELETE folder commands against an in-memory tree",
    long_about = None
)]
pub struct Cli {
    /// File with one command per line (`-` or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Run this command line instead of reading a file (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE", conflicts_with = "file")]
    pub commands: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Indent marker for LIST output, repeated per depth level
    #[arg(long, value_name = "STR")]
    pub indent: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print a consistency report of the tree after the run
    #[arg(long)]
    pub audit: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_inline_commands() {
        let cli = Cli::try_parse_from(["foldertree", "-c", "CREATE /a", "-c", "LIST", "--audit"])
            .unwrap();
        assert_eq!(cli.commands, vec!["CREATE /a", "LIST"]);
        assert!(cli.audit);
        assert!(cli.file.is_none());
    }

    #[test]
    fn file_and_inline_commands_conflict() {
        assert!(Cli::try_parse_from(["foldertree", "cmds.txt", "-c", "LIST"]).is_err());
    }
}
