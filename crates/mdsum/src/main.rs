//! mdsum - fix the header checksum of a Sega Megadrive/Genesis ROM
//!
//! Usage: mdsum [OPTIONS] <infile> [outfile]

use anyhow::Result;
use clap::Parser as ClapParser;
use clap::error::ErrorKind;
use env_logger::Env;
use log::{Level, info, warn};
use mdsum::{Invocation, Mode, PatchError, Report};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(name = "mdsum")]
#[command(author = "SMD-SDK Team")]
#[command(version)]
#[command(about = "Checksum patcher for Sega Megadrive/Genesis ROMs", long_about = None)]
struct Args {
    /// Input ROM file
    infile: Option<PathBuf>,

    /// Output file (defaults to overwriting the input)
    outfile: Option<PathBuf>,

    /// Extra arguments, ignored with a warning
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,

    /// Only verify the stored checksum, do not write anything
    #[arg(short, long)]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let prog = program_name();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // clap's rendering already ends with a newline
                eprint!("{prog}: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    init_logging(&prog, args.verbose);

    match run(&prog, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{prog}: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Basename of argv[0], used as the prefix of every diagnostic
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mdsum".to_string())
}

fn init_logging(prog: &str, verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let prog = prog.to_owned();
    env_logger::Builder::from_env(Env::default().filter_or("MDSUM_LOG", default_level))
        .format(move |buf, record| match record.level() {
            Level::Info => writeln!(buf, "{prog}: {}", record.args()),
            Level::Warn => writeln!(buf, "{prog}: warning: {}", record.args()),
            level => writeln!(
                buf,
                "{prog}: {}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        })
        .init();
}

fn usage(prog: &str) -> String {
    format!(
        "USAGE:\n\
         \t{prog} infile [outfile]\n\
         NOTES:\n\
         \tOutput file is optional. Passing only an input file will overwrite it."
    )
}

fn run(prog: &str, args: Args) -> Result<()> {
    let Some(infile) = args.infile else {
        println!("{}", usage(prog));
        return Err(PatchError::Usage.into());
    };

    if !args.ignored.is_empty() {
        let ignored: Vec<_> = args
            .ignored
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect();
        warn!("ignoring arguments: [{}]", ignored.join(" "));
    }

    let mut invocation = Invocation::new(infile);
    if let Some(outfile) = args.outfile {
        invocation = invocation.with_output(outfile);
    }
    if args.check {
        invocation = invocation.with_mode(Mode::Check);
    }

    match mdsum::run(&invocation)? {
        Report::Patched {
            checksum,
            bytes_written,
            destination,
        } => {
            info!(
                "applied checksum: 0x{:X} (was 0x{:X})",
                checksum.new, checksum.old
            );
            info!("wrote {} bytes to {}", bytes_written, destination.display());
        }
        Report::Verified { checksum } => {
            info!("checksum OK: 0x{checksum:X}");
        }
    }

    Ok(())
}
