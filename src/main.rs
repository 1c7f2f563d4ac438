mod cli;
mod config;
mod error;
mod history;
mod launcher;
mod logging;
mod manager;
mod output;
mod prompt;
mod safety;
mod search;
mod tui;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use cli::{Cli, Commands, ConfigActions, OutputFormat, SearchTarget};
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use history::{HistoryAction, HistoryLogger};
use launcher::{BrowserLauncher, SystemLauncher};
use manager::{DefaultRemover, FolderManager, ListingOutcome};
use output::{DeletionResult, ListingResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tui::App;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if cli.command.is_none() {
        logging::init_file();
    } else {
        logging::init_stderr();
    }

    let result = match Config::load() {
        Ok(config) => run(cli, config),
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    match cli.command {
        None => run_tui(config, cli.root.as_deref()),
        Some(Commands::List { root, format, out }) => {
            run_list(&root, &config, format, out.as_deref())
        }
        Some(Commands::Delete {
            root,
            names,
            all,
            yes,
            format,
            out,
        }) => run_delete(&root, &names, all, yes, &config, format, out.as_deref()),
        Some(Commands::Search { name, open }) => run_search(&name, open, &config),
        Some(Commands::Config { action }) => run_config(action, config),
        Some(Commands::History { limit }) => run_history(limit),
    }
}

fn build_manager(config: &Config) -> FolderManager {
    let mut remover = DefaultRemover::new();
    if config.delete.log_history {
        remover = remover.with_history(HistoryLogger::new());
    }
    FolderManager::with_remover(Box::new(remover))
}

fn write_output(json: &str, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

fn run_tui(config: Config, root: Option<&str>) -> Result<ExitCode> {
    let start_root = root
        .map(str::to_string)
        .or_else(|| config.general.default_root.clone());
    let manager = build_manager(&config);
    let mut app = App::new(config, manager, Box::new(SystemLauncher));
    if let Some(path) = start_root {
        app.open_root(Path::new(&path));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| ExitCode::SUCCESS)
}

fn run_list(root: &str, config: &Config, format: OutputFormat, out: Option<&str>) -> Result<ExitCode> {
    let mut manager = build_manager(config);
    let outcome = manager.select_root(root)?;
    let root_path = manager.root().unwrap_or(Path::new(root));

    match format {
        OutputFormat::Json => {
            let result = ListingResult::new(
                root_path,
                outcome,
                manager.entries(),
                |name| config.search.links(name),
            );
            write_output(&serde_json::to_string_pretty(&result)?, out)?;
        }
        OutputFormat::Human => {
            if outcome == ListingOutcome::NotADirectory {
                println!("{} is not a folder.", root);
                return Ok(ExitCode::SUCCESS);
            }
            println!("Selected: {}\n", root_path.display());
            if manager.entries().is_empty() {
                println!("No subfolders found in the selected directory.");
            } else {
                for entry in manager.entries() {
                    println!("  {}", entry.name);
                }
                println!("\n{} folder(s)", manager.entries().len());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_delete(
    root: &str,
    names: &[String],
    all: bool,
    yes: bool,
    config: &Config,
    format: OutputFormat,
    out: Option<&str>,
) -> Result<ExitCode> {
    let mut manager = build_manager(config);
    if manager.select_root(root)? == ListingOutcome::NotADirectory {
        eprintln!("{} is not a folder.", root);
        return Ok(ExitCode::from(1));
    }

    let listed: HashSet<&str> = manager.entries().iter().map(|e| e.name.as_str()).collect();
    let unknown: Vec<&String> = names.iter().filter(|n| !listed.contains(n.as_str())).collect();
    if !unknown.is_empty() {
        for name in unknown {
            eprintln!("Unknown folder: {}", name);
        }
        return Ok(ExitCode::from(1));
    }

    if all {
        manager.set_all_selected();
    } else {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let to_toggle: Vec<String> = manager
            .entries()
            .iter()
            .filter(|e| wanted.contains(e.name.as_str()))
            .map(|e| e.name.clone())
            .collect();
        for name in &to_toggle {
            manager.toggle(name);
        }
    }

    let selected = manager.selected_names();
    if selected.is_empty() {
        println!("No folders are selected for deletion.");
        return Ok(ExitCode::SUCCESS);
    }

    if !yes && config.delete.confirm_before_delete {
        let message = prompt::confirmation_message(&selected);
        let confirmed = prompt::confirm_on(&mut io::stdin().lock(), &mut io::stderr(), &message)?;
        if !confirmed {
            match format {
                OutputFormat::Json => {
                    let root_path = manager.root().unwrap_or(Path::new(root));
                    let result = DeletionResult::cancelled(root_path, manager.entries());
                    write_output(&serde_json::to_string_pretty(&result)?, out)?;
                }
                OutputFormat::Human => println!("Cancelled. Nothing was deleted."),
            }
            return Ok(ExitCode::SUCCESS);
        }
    }

    let start = Instant::now();
    let report = manager.delete_selected();

    match format {
        OutputFormat::Json => {
            let result = DeletionResult::new(
                manager.root().unwrap_or(Path::new(root)),
                &report,
                manager.entries(),
                start.elapsed().as_millis() as u64,
            );
            write_output(&serde_json::to_string_pretty(&result)?, out)?;
        }
        OutputFormat::Human => {
            println!(
                "Deleted {} of {} folder(s).",
                report.succeeded.len(),
                report.attempted()
            );
            if !report.failed.is_empty() {
                println!(
                    "\nFailed to delete {} folder(s) due to errors (e.g., permissions, file in use):",
                    report.failed.len()
                );
                for failure in &report.failed {
                    println!("- {}: {}", failure.name, failure.error);
                }
            }
            if let Some(e) = &report.refresh_error {
                eprintln!("\nError listing folders: {}", e);
            }
        }
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run_search(name: &str, open: Option<SearchTarget>, config: &Config) -> Result<ExitCode> {
    let links = config.search.links(name);

    println!("Search for '{}' on:", name);
    println!("  Store: {}", links.store_search_url);
    println!("  Web:   {}", links.web_search_url);

    let url = match open {
        Some(SearchTarget::Store) => links.store_search_url,
        Some(SearchTarget::Web) => links.web_search_url,
        None => return Ok(ExitCode::SUCCESS),
    };

    match SystemLauncher.open_url(&url) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::from(1))
        }
    }
}

fn run_config(action: ConfigActions, mut config: Config) -> Result<ExitCode> {
    match action {
        ConfigActions::Show => {
            println!("Current configuration ({}):", Config::config_path().display());
            println!(
                "  Default root: {}",
                config.general.default_root.as_deref().unwrap_or("(none)")
            );
            println!("  Store search: {}", config.search.store_template);
            println!("  Web search: {}", config.search.web_template);
            println!("  Log history: {}", config.delete.log_history);
            println!(
                "  Confirm before delete: {}",
                config.delete.confirm_before_delete
            );
        }
        ConfigActions::Set { key, value } => {
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {} to {}", key, value);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_history(limit: usize) -> Result<ExitCode> {
    let logger = HistoryLogger::new();
    let entries = logger.read_history(Some(limit))?;

    if entries.is_empty() {
        println!("No history found.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Last {} deletion attempt(s):\n", entries.len());

    for entry in entries {
        println!(
            "{} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.action,
            entry.path.display()
        );
        if entry.action == HistoryAction::Failed {
            if let Some(error) = &entry.error {
                println!("    Error: {}", error);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
