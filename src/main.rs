//! shorthand - CSS shorthand/longhand converter

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use shorthand::{
    Codec, Converter, ConverterConfig, DuplicatePolicy, Error, unparse_declaration_list,
};

#[derive(Parser)]
#[command(name = "shorthand")]
#[command(version, about = "CSS shorthand/longhand converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    shorthand expand 'margin: 1px 2px;'                 Expand to longhands
    echo 'border: 1px solid red' | shorthand expand     Read from stdin
    shorthand collapse padding 'padding-top: 1px; padding-right: 1px;
        padding-bottom: 1px; padding-left: 1px;'        Collapse to a shorthand")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Declaration parser
    #[arg(long, value_enum, default_value_t = CodecArg::Css, global = true)]
    codec: CodecArg,

    /// How repeated longhands are resolved
    #[arg(long, value_enum, default_value_t = DuplicatesArg::FirstWins, global = true)]
    duplicates: DuplicatesArg,

    /// Print declarations as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Expand a shorthand declaration into its longhands
    Expand {
        /// Declaration text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },
    /// Collapse longhand declarations into a shorthand
    Collapse {
        /// Shorthand property to build, e.g. `margin`
        #[arg(value_name = "SHORTHAND")]
        shorthand: String,

        /// Longhand declaration text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },
    /// List the shorthand properties that can be converted
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum CodecArg {
    Css,
    Lenient,
}

impl From<CodecArg> for Codec {
    fn from(arg: CodecArg) -> Self {
        match arg {
            CodecArg::Css => Codec::Css,
            CodecArg::Lenient => Codec::Lenient,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DuplicatesArg {
    FirstWins,
    LastWins,
    Reject,
}

impl From<DuplicatesArg> for DuplicatePolicy {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::FirstWins => DuplicatePolicy::FirstWins,
            DuplicatesArg::LastWins => DuplicatePolicy::LastWins,
            DuplicatesArg::Reject => DuplicatePolicy::Reject,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("reading input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Convert(#[from] Error),

    #[error("writing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input holds no declaration")]
    NoDeclaration,

    #[error("no shorthand provider for '{0}'")]
    Unsupported(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConverterConfig::default()
        .with_codec(cli.codec.into())
        .with_duplicates(cli.duplicates.into());
    let converter = Converter::with_config(config);

    let result = match &cli.command {
        Command::Expand { text } => expand(&converter, text.as_deref(), cli.json),
        Command::Collapse { shorthand, text } => {
            collapse(&converter, shorthand, text.as_deref(), cli.json)
        }
        Command::List => {
            for property in converter.registry().properties() {
                println!("{property}");
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(text: Option<&str>) -> Result<String, CliError> {
    match text {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => Ok(io::read_to_string(io::stdin())?),
    }
}

fn expand(converter: &Converter, text: Option<&str>, json: bool) -> Result<(), CliError> {
    let input = read_input(text)?;
    let decls = converter.parse(&input)?;
    let Some(decl) = decls.iter().next() else {
        return Err(CliError::NoDeclaration);
    };
    let longhands = converter
        .expand_declaration(decl)?
        .ok_or_else(|| CliError::Unsupported(decl.property.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&longhands)?);
    } else {
        print!("{}", unparse_declaration_list(&longhands));
    }
    Ok(())
}

fn collapse(
    converter: &Converter,
    shorthand: &str,
    text: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let input = read_input(text)?;
    let decls = converter.parse(&input)?;
    let decl = converter
        .collapse_declarations(shorthand, &decls)?
        .ok_or_else(|| CliError::Unsupported(shorthand.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decl)?);
    } else {
        println!("{decl}");
    }
    Ok(())
}
