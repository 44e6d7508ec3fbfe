//! CLI entry point for nettree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use nettree::{
    JsonCollector, LocalNamespace, Location, OutputConfig, OutputStyle, Router,
    SnapshotNamespace, TextFormatter, TreeWalker, WalkerConfig, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nettree")]
#[command(about = "List the network:/// namespace (or any other location) as a tree")]
#[command(disable_version_flag = true)]
struct Args {
    /// Location to list: a URI or a local path
    #[arg(default_value = "network:///")]
    root: String,

    /// Show hidden entries
    #[arg(short = 'a', long = "all")]
    show_hidden: bool,

    /// Follow symbolic links and target URIs
    #[arg(short = 'l', long = "follow-symlinks")]
    follow_symlinks: bool,

    /// Print version information and exit
    #[arg(short = 'V', long = "version")]
    show_version: bool,

    /// Load a JSON namespace snapshot; its roots take precedence over local files
    #[arg(short = 'n', long = "namespace", value_name = "FILE")]
    namespace: Option<PathBuf>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Keep descending into locations already on the current branch
    #[arg(long = "no-cycle-guard")]
    no_cycle_guard: bool,

    /// Draw tree connector lines
    #[arg(long = "tree", conflicts_with = "json")]
    tree: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output in tree style: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let config = WalkerConfig {
        show_hidden: args.show_hidden,
        follow_symlinks: args.follow_symlinks,
        show_version: args.show_version,
        max_depth: args.level,
        cycle_guard: !args.no_cycle_guard,
    };

    if config.show_version {
        println!("nettree {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    nettree::logging::init(args.verbose);

    let mut router = Router::new();
    if let Some(ref path) = args.namespace {
        match SnapshotNamespace::load(path) {
            Ok(snapshot) => router = router.mount(snapshot),
            Err(e) => {
                eprintln!("nettree: cannot load namespace '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }
    let router = router.mount(LocalNamespace::new());

    let root = Location::from_arg(&args.root);
    let walker = TreeWalker::new(router, config);

    let result = if args.json {
        let mut collector = JsonCollector::new();
        walker
            .walk(&root, &mut collector)
            .and_then(|()| print_json(&collector.into_tree()))
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            style: if args.tree {
                OutputStyle::Tree
            } else {
                OutputStyle::Plain
            },
        };
        let mut formatter = TextFormatter::stdout(output_config);
        walker.walk(&root, &mut formatter)
    };

    if let Err(e) = result {
        eprintln!("nettree: error writing output: {}", e);
        process::exit(1);
    }
}
