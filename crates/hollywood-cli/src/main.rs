use anyhow::Result;
use clap::{Parser, Subcommand};
use hollywood_core::report::{self, GraphStats};
use hollywood_core::{load_file, ActorNumbers, GraphParams, GraphStore};
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hollywood", version, about = "Six degrees of separation over an actor/movie graph", long_about = None)]
struct Cli {
    /// Records file, one `actor | movie | movie ...` line per actor
    #[arg(short, long, env = "HOLLYWOOD_FILE", default_value = "actors_movies/small.txt")]
    file: PathBuf,

    /// Slots allocated before the first insert (overrides HOLLYWOOD_INITIAL_CAPACITY)
    #[arg(long)]
    initial_capacity: Option<usize>,

    /// Load factor that triggers table growth (overrides HOLLYWOOD_LOAD_FACTOR)
    #[arg(long)]
    load_factor: Option<f64>,

    /// Start interactive shell
    #[arg(long)]
    repl: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertex and edge counts
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Print every slot of the table with its adjacency chain
    Dump,
    /// Compute actor numbers from a source actor
    Numbers {
        #[arg(long)]
        source: String,
        #[arg(long)]
        json: bool,
    },
    /// Start interactive shell
    Repl,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut params = GraphParams::from_env();
    if let Some(cap) = cli.initial_capacity {
        params.initial_capacity = cap;
    }
    if let Some(lf) = cli.load_factor {
        params.load_factor = lf;
    }

    let start = Instant::now();
    let graph = load_file(&cli.file, params)?;
    tracing::debug!(elapsed = ?start.elapsed(), file = %cli.file.display(), "graph ready");

    if cli.repl {
        return run_repl(&graph);
    }

    match cli.command {
        Some(Commands::Stats { json }) => {
            let stats = GraphStats::of(&graph);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        Some(Commands::Dump) => {
            print!("{}", report::dump(&graph));
        }
        Some(Commands::Numbers { source, json }) => {
            let numbers = graph.actor_numbers(&source);
            if json {
                println!("{}", numbers.to_json()?);
            } else {
                print_numbers(&numbers, &source);
            }
        }
        Some(Commands::Repl) => return run_repl(&graph),
        None => {
            println!("Built graph successfully!\n");
            print!("{}", report::dump(&graph));
            println!();
            print_stats(&GraphStats::of(&graph));
            print!("\nEnter a source actor: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            println!();
            let source = line.trim();
            print_numbers(&graph.actor_numbers(source), source);
        }
    }

    Ok(())
}

fn print_stats(stats: &GraphStats) {
    println!("Vertex size: {}", stats.vertices);
    println!("Edge size: {}", stats.edges);
    println!(
        "({} actors, {} movies, {} slots, load {:.2})",
        stats.actors, stats.movies, stats.capacity, stats.load
    );
}

fn print_numbers(numbers: &ActorNumbers, source: &str) {
    if numbers.is_missing() {
        println!("actor '{source}' not found");
        return;
    }
    println!("Actor Numbers\n*************");
    print!("{}", report::summary(numbers));
}

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Numbers(&'a str),
    Stats,
    Dump,
    Help,
    Quit,
    Empty,
}

fn parse_shell_line(line: &str) -> ShellCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };
    match cmd.to_ascii_lowercase().as_str() {
        "quit" | "exit" if rest.is_empty() => ShellCommand::Quit,
        "stats" if rest.is_empty() => ShellCommand::Stats,
        "dump" if rest.is_empty() => ShellCommand::Dump,
        "help" if rest.is_empty() => ShellCommand::Help,
        "numbers" if !rest.is_empty() => ShellCommand::Numbers(rest),
        _ => ShellCommand::Numbers(line),
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("hollywood").join("history"))
}

fn run_repl(graph: &GraphStore) -> Result<()> {
    let mut rl = DefaultEditor::new().ok();
    let history = history_path();
    if let (Some(editor), Some(path)) = (rl.as_mut(), history.as_ref()) {
        let _ = editor.load_history(path);
    }
    println!("Hollywood shell. Commands: numbers <actor>, stats, dump, help, quit. A bare line is read as an actor name.");
    loop {
        let prompt = "hollywood> ";
        let line = if let Some(ref mut editor) = rl {
            match editor.readline(prompt) {
                Ok(l) => {
                    let _ = editor.add_history_entry(l.as_str());
                    l
                }
                Err(_) => break,
            }
        } else {
            print!("{prompt}");
            io::stdout().flush()?;
            let mut buf = String::new();
            if io::stdin().read_line(&mut buf)? == 0 {
                break;
            }
            buf
        };
        match parse_shell_line(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Stats => print_stats(&GraphStats::of(graph)),
            ShellCommand::Dump => print!("{}", report::dump(graph)),
            ShellCommand::Help => {
                println!("numbers <actor>   actor numbers from <actor>");
                println!("stats             vertex and edge counts");
                println!("dump              table slots with adjacency chains");
                println!("quit              leave the shell");
            }
            ShellCommand::Numbers(source) => {
                let start = Instant::now();
                print_numbers(&graph.actor_numbers(source), source);
                println!("({:.2?})", start.elapsed());
            }
        }
    }
    if let (Some(editor), Some(path)) = (rl.as_mut(), history.as_ref()) {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Err(e) = editor.save_history(path) {
            tracing::warn!("history save failed: {e}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_keywords() {
        assert_eq!(parse_shell_line("  "), ShellCommand::Empty);
        assert_eq!(parse_shell_line("quit"), ShellCommand::Quit);
        assert_eq!(parse_shell_line("EXIT\n"), ShellCommand::Quit);
        assert_eq!(parse_shell_line("stats"), ShellCommand::Stats);
        assert_eq!(parse_shell_line("dump"), ShellCommand::Dump);
        assert_eq!(parse_shell_line("help"), ShellCommand::Help);
    }

    #[test]
    fn shell_actor_names() {
        assert_eq!(
            parse_shell_line("numbers Bergen, Candice"),
            ShellCommand::Numbers("Bergen, Candice")
        );
        assert_eq!(
            parse_shell_line("Bergen, Candice\n"),
            ShellCommand::Numbers("Bergen, Candice")
        );
        // a keyword followed by more words is an actor name
        assert_eq!(parse_shell_line("Dump Truck"), ShellCommand::Numbers("Dump Truck"));
        assert_eq!(parse_shell_line("numbers"), ShellCommand::Numbers("numbers"));
    }
}
