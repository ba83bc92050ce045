use clap::Parser;
use std::path::PathBuf;
use vc::cli;

#[derive(Parser)]
#[command(name = "vc")]
#[command(about = "Front end for the VC language: scanning, parsing and semantic analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check a VC file: scope rules, type rules, tree decoration
    #[command(alias = "c")]
    Check {
        /// Input file to check
        input: PathBuf,
    },

    /// Generate lexer tokens from a VC file
    #[command(alias = "l")]
    Lex {
        /// Input file to generate tokens from
        input: PathBuf,

        /// Output JSON file name (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the decorated AST JSON from a VC file
    #[command(alias = "ast")]
    GenAst {
        /// Input file to generate AST from
        input: PathBuf,

        /// Output JSON file name (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            cli::check(input)?;
        }
        Commands::Lex { input, output } => {
            cli::lex(input, output)?;
        }
        Commands::GenAst { input, output } => {
            cli::gen_ast(input, output)?;
        }
        Commands::Version => {
            cli::version()?;
        }
    }

    Ok(())
}
