use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use ruhuff::header::read_header;
use ruhuff::sniff::sniff_reader;
use ruhuff::Codebook;
use tracing::{debug, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

#[path = "ruhuff/progress.rs"]
mod progress;
use progress::ProgressMonitor;

/// Decode a stream of 0/1 characters into tokens, using the prefix code from a header file
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Header with one `TOKEN CODE` pair per line
    header: PathBuf,
    /// Code file with the encoded bits, whitespace is ignored
    code: PathBuf,
    /// Where to write the tokens [default: <CODE dir>/<HEADER stem>.tokens_decoded]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Written after every decoded token
    #[arg(short, long, default_value = "\n")]
    separator: String,
    /// Don't draw a progress bar
    #[arg(long)]
    no_progress: bool,
    /// Log more, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The step that failed, decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Usage = 1,
    Header = 2,
    CodeFile = 3,
    Build = 4,
    OpenCode = 5,
    CreateOutput = 6,
    Decode = 7,
}

impl Stage {
    fn exit_code(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Usage => write!(f, "Usage error"),
            Stage::Header => write!(f, "Header error"),
            Stage::CodeFile => write!(f, "Code file error"),
            Stage::Build => write!(f, "Build error"),
            Stage::OpenCode => write!(f, "Cannot open code file for reading"),
            Stage::CreateOutput => write!(f, "Cannot create output file"),
            Stage::Decode => write!(f, "Decode error"),
        }
    }
}

struct Failure {
    stage: Stage,
    report: eyre::Report,
}

trait AtStage<T> {
    fn at_stage(self, stage: Stage) -> Result<T, Failure>;
}

impl<T, E: Into<eyre::Report>> AtStage<T> for Result<T, E> {
    fn at_stage(self, stage: Stage) -> Result<T, Failure> {
        self.map_err(|e| Failure {
            stage,
            report: e.into(),
        })
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => Stage::Usage.exit_code(),
            };
        }
    };

    if let Err(e) = color_eyre::install() {
        eprintln!("failed to install error report handler: {e}");
    }
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure { stage, report }) => {
            eprintln!("{stage}: {report:?}");
            stage.exit_code()
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_filter(level),
        )
        .with(indicatif_layer)
        .init();
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let header = File::open(&cli.header)
        .wrap_err_with(|| format!("Cannot open header file: {}", cli.header.display()))
        .at_stage(Stage::Header)?;
    let pairs = read_header(BufReader::new(header))
        .wrap_err_with(|| format!("Invalid header: {}", cli.header.display()))
        .at_stage(Stage::Header)?;
    debug!("read {} codebook entries from {}", pairs.len(), cli.header.display());

    let code = File::open(&cli.code)
        .wrap_err_with(|| format!("Cannot open code file: {}", cli.code.display()))
        .at_stage(Stage::CodeFile)?;
    sniff_reader(BufReader::new(code))
        .wrap_err_with(|| format!("{} does not look like a code file", cli.code.display()))
        .at_stage(Stage::CodeFile)?;

    let codebook = Codebook::build(pairs).at_stage(Stage::Build)?;
    info!(
        "built codebook with {} tokens, longest code has {} bits",
        codebook.len(),
        codebook.max_code_len()
    );
    if !codebook.is_complete() {
        warn!("codebook is incomplete, some bit strings have no token");
    }

    let code = File::open(&cli.code)
        .wrap_err_with(|| cli.code.display().to_string())
        .at_stage(Stage::OpenCode)?;
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| decoded_output_path(&cli.header, &cli.code));
    let output = File::create(&output_path)
        .wrap_err_with(|| output_path.display().to_string())
        .at_stage(Stage::CreateOutput)?;

    let code_size = code.metadata().map(|m| m.len()).unwrap_or(0);
    let source: Box<dyn Read> = if cli.no_progress || code_size == 0 {
        Box::new(code)
    } else {
        Box::new(ProgressMonitor::new(code, code_size))
    };

    let tokens = codebook
        .decode_to_writer_with_separator(source, BufWriter::new(output), &cli.separator)
        .wrap_err_with(|| format!("Failed to decode {}", cli.code.display()))
        .at_stage(Stage::Decode)?;

    debug!("wrote {} tokens", tokens);
    info!("{}", console::style(decoded_message(&output_path)).bold());
    Ok(())
}

fn decoded_message(output: &Path) -> String {
    format!("Decoded -> {}", output.display())
}

/// `<directory of code>/<stem of header>.tokens_decoded`
fn decoded_output_path(header: &Path, code: &Path) -> PathBuf {
    let mut name = header.file_stem().unwrap_or_default().to_os_string();
    name.push(".tokens_decoded");
    code.with_file_name(name)
}
