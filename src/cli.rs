use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "foldersweep")]
#[command(about = "Browse, look up, and delete the subfolders of a directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Folder whose subfolders are managed in the TUI")]
    pub root: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchTarget {
    Store,
    Web,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the subfolders of ROOT")]
    List {
        root: String,
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
        #[arg(short, long)]
        out: Option<String>,
    },
    #[command(about = "Delete subfolders of ROOT and everything inside them")]
    Delete {
        root: String,
        #[arg(short, long = "name", required_unless_present = "all")]
        names: Vec<String>,
        #[arg(long, conflicts_with = "names")]
        all: bool,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
        #[arg(short, long)]
        out: Option<String>,
    },
    #[command(about = "Show store and web search links for a folder name")]
    Search {
        name: String,
        #[arg(long, value_enum)]
        open: Option<SearchTarget>,
    },
    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
    #[command(about = "View deletion history")]
    History {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum ConfigActions {
    #[command(about = "Show current configuration")]
    Show,
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(short, long)]
        key: String,
        #[arg(short, long)]
        value: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_delete_needs_names_or_all() {
        assert!(Cli::try_parse_from(["foldersweep", "delete", "/t"]).is_err());
        assert!(Cli::try_parse_from(["foldersweep", "delete", "/t", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["foldersweep", "delete", "/t", "--all", "-n", "a"]).is_err());

        let cli = Cli::try_parse_from(["foldersweep", "delete", "/t", "-n", "a", "-n", "b c", "--yes"])
            .expect("parse");
        match cli.command {
            Some(Commands::Delete { names, yes, all, .. }) => {
                assert_eq!(names, vec!["a".to_string(), "b c".to_string()]);
                assert!(yes);
                assert!(!all);
            }
            _ => panic!("expected delete"),
        }
    }

    #[test]
    fn test_search_open_target() {
        let cli = Cli::try_parse_from(["foldersweep", "search", "Half Life 2", "--open", "web"])
            .expect("parse");
        match cli.command {
            Some(Commands::Search { name, open }) => {
                assert_eq!(name, "Half Life 2");
                assert_eq!(open, Some(SearchTarget::Web));
            }
            _ => panic!("expected search"),
        }
    }
}
