use clap::{Parser as ClapParser, Subcommand};
use gq::cli::{self, CliError, RunOptions};
use std::io::{self, Read, Write};

#[derive(ClapParser)]
#[command(name = "gq")]
#[command(about = "gq - a jq-like tool to query and reshape JSON from the command line")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The query to execute, e.g. '.[] | {name: .user.name}'
    query: Option<String>,

    /// Print the syntax tree of the query before the results
    #[arg(short, long)]
    debug: bool,

    /// Print each result on a single line
    #[arg(short, long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the gq version
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) => {
            println!("{}", cli::version_line());
            Ok(())
        }
        None => run_query(
            &cli,
            atty::is(atty::Stream::Stdin),
            io::stdin().lock(),
            io::stdout().lock(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Runs the query against everything on `input`. An interactive stdin means
/// nothing was piped in.
fn run_query<R: Read, W: Write>(
    cli: &Cli,
    interactive: bool,
    mut input: R,
    out: W,
) -> Result<(), CliError> {
    if interactive {
        return Err(CliError::NoInput);
    }
    if cli.query.is_none() {
        return Err(CliError::NoProgram);
    }

    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;

    let options = RunOptions {
        query: cli.query.clone(),
        input: Some(buffer),
        debug: cli.debug,
        compact: cli.compact,
    };

    cli::execute(&options, out)
}
