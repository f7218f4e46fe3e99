use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use trove_query::cli::{self, CliError, CompileCommand, OutputMode};
use trove_query::{CompileOptions, DEFAULT_FALLBACK_FIELD};

#[derive(ClapParser)]
#[command(name = "trove")]
#[command(about = "Trove - compile collection search queries into filter expressions")]
#[command(version)]
struct Cli {
    /// Log lexer and parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a search query
    Compile {
        /// The search query (reads from stdin if not provided)
        query: Option<String>,

        /// Column searched by queries without an operator
        #[arg(long, default_value = DEFAULT_FALLBACK_FIELD)]
        fallback_field: String,

        /// Print the token stream instead of the filter
        #[arg(long, conflicts_with = "tree")]
        tokens: bool,

        /// Print the parsed tree instead of the filter
        #[arg(long)]
        tree: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the query syntax reference
    Syntax {
        /// Topic name (omit to list topics)
        topic: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compile {
            query,
            fallback_field,
            tokens,
            tree,
            pretty,
        } => run_compile(query, fallback_field, tokens, tree, pretty),
        Commands::Syntax { topic: None } => {
            print!("{}", cli::get_syntax_overview());
            Ok(())
        }
        Commands::Syntax { topic: Some(topic) } => cli::get_syntax_topic(&topic).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_compile(
    query: Option<String>,
    fallback_field: String,
    tokens: bool,
    tree: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let query = match query {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let mode = if tokens {
        OutputMode::Tokens
    } else if tree {
        OutputMode::Tree
    } else {
        OutputMode::Filter
    };

    let command = CompileCommand {
        query,
        options: CompileOptions { fallback_field },
        mode,
        pretty,
    };

    println!("{}", cli::execute_compile(&command)?);
    Ok(())
}
