//! Wordgraph CLI: build a word graph from a text file and query it.
//!
//! Usage:
//!   wordgraph <FILE> [--config path] [-v]               (interactive menu)
//!   wordgraph <FILE> bridge <WORD1> <WORD2>
//!   wordgraph <FILE> path <FROM> <TO> [--all]
//!   wordgraph <FILE> generate <TEXT>...
//!   wordgraph <FILE> walk [--output path]
//!   wordgraph <FILE> stats

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use wordgraph::export::write_dot;
use wordgraph::{
    BridgeQuery, Chooser, NormalizationPolicy, PathQuery, RandomWalk, RngChooser, TextGenerator,
    WordGraph, WordGraphConfig, WordGraphResult,
};

#[derive(Parser)]
#[command(
    name = "wordgraph",
    version,
    about = "Directed word-adjacency graph explorer"
)]
struct Cli {
    /// Text file to build the graph from
    file: PathBuf,
    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for random choices
    #[arg(long)]
    seed: Option<u64>,
    /// How source text is normalized
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Where to write the DOT description
    #[arg(long)]
    dot: Option<PathBuf>,
    /// Render the DOT file with Graphviz
    #[arg(long)]
    render: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Lowercase only
    Lowercase,
    /// Lowercase and keep ASCII letters only
    LettersOnly,
}

impl From<PolicyArg> for NormalizationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Lowercase => NormalizationPolicy::Lowercase,
            PolicyArg::LettersOnly => NormalizationPolicy::LettersOnly,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive,
    /// Find bridge words between two words
    Bridge { word1: String, word2: String },
    /// Find the shortest path between two words
    Path {
        from: String,
        to: String,
        /// Return every shortest path instead of one
        #[arg(long)]
        all: bool,
    },
    /// Insert bridge words into new text
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Random traversal from a random word
    Walk {
        /// Write the traversal to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print graph statistics as JSON
    Stats,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> WordGraphResult<WordGraphConfig> {
    let mut config = match &cli.config {
        Some(path) => WordGraphConfig::load(path)?,
        None => WordGraphConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.walk.seed = Some(seed);
    }
    if let Some(policy) = cli.policy {
        config.tokenizer.policy = policy.into();
    }
    if let Some(dot) = &cli.dot {
        config.export.dot_path = dot.clone();
    }
    if cli.render {
        config.export.render = true;
    }
    if let Some(Commands::Walk { output: Some(output) }) = &cli.command {
        config.walk.output = Some(output.clone());
    }
    Ok(config)
}

/// Read the source file, joining its lines with single spaces
fn read_source(path: &Path) -> WordGraphResult<String> {
    let raw = std::fs::read_to_string(path)?;
    Ok(raw.lines().collect::<Vec<_>>().join(" "))
}

/// Write the DOT file and optionally render it. Failures are not fatal.
fn export_graph(graph: &WordGraph, config: &WordGraphConfig) {
    if let Err(e) = write_dot(graph, &config.export.dot_path) {
        warn!(error = %e, "could not write DOT file");
        return;
    }
    if config.export.render {
        if let Err(e) = config
            .renderer()
            .render(&config.export.dot_path, &config.export.image_path)
        {
            warn!(error = %e, "could not render graph image");
        }
    }
}

/// Lowercase and split a query line into words
fn query_words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

fn cmd_bridge(
    graph: &WordGraph,
    word1: &str,
    word2: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let result = BridgeQuery::between(word1.to_lowercase(), word2.to_lowercase()).execute(graph);
    writeln!(out, "{}", result)
}

fn cmd_path(
    graph: &WordGraph,
    from: &str,
    to: &str,
    all: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut query = PathQuery::between(from.to_lowercase(), to.to_lowercase());
    if all {
        query = query.all_shortest();
    }
    writeln!(out, "{}", query.execute(graph))
}

fn cmd_generate(
    graph: &WordGraph,
    text: &str,
    chooser: &mut impl Chooser,
    out: &mut impl Write,
) -> io::Result<()> {
    let generated = TextGenerator::new(graph).generate(text, chooser);
    writeln!(out, "New text: {}", generated)
}

fn cmd_walk(
    graph: &WordGraph,
    output: Option<&Path>,
    chooser: &mut impl Chooser,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(result) = RandomWalk::new().execute(graph, chooser) else {
        return writeln!(out, "The graph is empty, nothing to traverse.");
    };

    writeln!(out, "Starting node: {}", result.start)?;
    writeln!(out, "Graph traversal completed.")?;
    writeln!(out, "{}", result.trace_line())?;

    if let Some(path) = output {
        std::fs::write(path, format!("{}\n", result.trace.join(" ")))?;
        info!(path = %path.display(), "wrote traversal");
    }
    Ok(())
}

fn cmd_stats(graph: &WordGraph, out: &mut impl Write) -> WordGraphResult<()> {
    let stats = serde_json::json!({
        "vertices": graph.vertex_count(),
        "sources": graph.sources().count(),
        "edges": graph.edge_count(),
        "total_weight": graph.total_weight(),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    Ok(())
}

/// Menu loop. Returns when the user enters `q` or input ends.
fn run_interactive(
    graph: &WordGraph,
    config: &WordGraphConfig,
    chooser: &mut impl Chooser,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(out, "Choose an operation:")?;
        writeln!(out, "1. Shortest path between two words")?;
        writeln!(out, "2. Generate new text")?;
        writeln!(out, "3. Random traversal")?;
        writeln!(out, "4. Bridge words")?;
        writeln!(out, "q. Quit")?;
        write!(out, "Choice: ")?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        match choice {
            "1" | "4" => {
                write!(out, "Enter two words (e.g. word1 word2): ")?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(());
                };
                let words = query_words(&line);
                if words.len() != 2 {
                    writeln!(out, "Invalid input, expected two words.")?;
                    continue;
                }
                if choice == "1" {
                    cmd_path(graph, &words[0], &words[1], false, out)?;
                } else {
                    cmd_bridge(graph, &words[0], &words[1], out)?;
                }
            }
            "2" => {
                write!(out, "Enter new text: ")?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(());
                };
                cmd_generate(graph, &line, chooser, out)?;
            }
            "3" => {
                writeln!(out, "Starting graph traversal.")?;
                cmd_walk(graph, config.walk.output.as_deref(), chooser, out)?;
            }
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Next line without its terminator, or `None` at end of input
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn run(cli: Cli) -> WordGraphResult<()> {
    let config = load_config(&cli)?;
    let text = read_source(&cli.file)?;
    let graph = wordgraph::GraphBuilder::new()
        .tokenizer(config.tokenizer())
        .build_from_text(&text);
    info!(
        file = %cli.file.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    export_graph(&graph, &config);

    let mut chooser = RngChooser::from_seed_option(config.walk.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            run_interactive(&graph, &config, &mut chooser, &mut stdin.lock(), &mut out)?
        }
        Commands::Bridge { word1, word2 } => cmd_bridge(&graph, &word1, &word2, &mut out)?,
        Commands::Path { from, to, all } => cmd_path(&graph, &from, &to, all, &mut out)?,
        Commands::Generate { text } => {
            cmd_generate(&graph, &text.join(" "), &mut chooser, &mut out)?
        }
        Commands::Walk { .. } => {
            cmd_walk(&graph, config.walk.output.as_deref(), &mut chooser, &mut out)?
        }
        Commands::Stats => cmd_stats(&graph, &mut out)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgraph::ScriptedChooser;

    fn session(graph: &WordGraph, input: &str) -> String {
        let mut out = Vec::new();
        run_interactive(
            graph,
            &WordGraphConfig::default(),
            &mut ScriptedChooser::first(),
            &mut input.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_file_then_subcommand() {
        let cli = Cli::try_parse_from([
            "wordgraph", "input.txt", "--seed", "7", "path", "a", "b", "--all",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("input.txt"));
        assert_eq!(cli.seed, Some(7));
        assert!(matches!(cli.command, Some(Commands::Path { all: true, .. })));
    }

    #[test]
    fn walk_output_flag_overrides_config() {
        let cli =
            Cli::try_parse_from(["wordgraph", "input.txt", "walk", "--output", "trace.txt"])
                .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.walk.output, Some(PathBuf::from("trace.txt")));
    }

    #[test]
    fn menu_shortest_path() {
        let graph = WordGraph::from_text("the quick brown fox");
        let out = session(&graph, "1\nThe Brown\nq\n");
        assert!(out.contains("Shortest path from the to brown:\nthe -> quick -> brown"));
    }

    #[test]
    fn menu_rejects_wrong_word_count() {
        let graph = WordGraph::from_text("the quick brown fox");
        let out = session(&graph, "1\nthe\nQ\n");
        assert!(out.contains("Invalid input, expected two words."));
    }

    #[test]
    fn menu_generate_and_bridge() {
        let graph = WordGraph::from_text("the quick brown fox");
        let out = session(&graph, "2\nthe brown\n4\nthe brown\n");
        assert!(out.contains("New text: the quick brown"));
        assert!(out.contains("The bridge words from the to brown are: quick."));
    }

    #[test]
    fn menu_walk_and_invalid_choice() {
        let graph = WordGraph::from_text("the quick brown fox");
        let out = session(&graph, "3\n9\nq\n");
        assert!(out.contains("Starting node: brown"));
        assert!(out.contains("brown -> fox"));
        assert!(out.contains("Invalid choice."));
    }

    #[test]
    fn walk_writes_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.txt");
        let graph = WordGraph::from_text("a b c");
        let mut out = Vec::new();

        cmd_walk(&graph, Some(&path), &mut ScriptedChooser::first(), &mut out).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a b c\n");
    }

    #[test]
    fn stats_are_json() {
        let graph = WordGraph::from_text("to be or not to be");
        let mut out = Vec::new();
        cmd_stats(&graph, &mut out).unwrap();

        let stats: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(stats["vertices"], 4);
        assert_eq!(stats["edges"], 4);
        assert_eq!(stats["total_weight"], 5);
    }

    #[test]
    fn source_lines_are_joined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "end of\nline\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "end of line");
    }
}
