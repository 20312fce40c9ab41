use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;

use shortcode::Event;

#[derive(Parser)]
#[command(name = "shortcode", about = "Scan text for shortcodes")]
struct Args {
    /// Input file, stdin if absent
    file: Option<PathBuf>,

    /// Treat NAME as an enclosing shortcode
    #[arg(short, long, value_name = "NAME")]
    enclosing: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Events)]
    format: Format,

    /// Exit with failure if any span could not be parsed
    #[arg(long)]
    deny_errors: bool,

    /// Log recovered errors (-v) or everything (-vv) to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One event per line
    Events,
    /// The input with every shortcode rewritten in canonical form
    Canonical,
}

fn run(args: &Args) -> std::io::Result<bool> {
    let mut src = String::new();
    match &args.file {
        Some(path) => File::open(path)?.read_to_string(&mut src)?,
        None => std::io::stdin().read_to_string(&mut src)?,
    };

    let classify = |name: &str| args.enclosing.iter().any(|e| e == name);
    let mut out = BufWriter::new(std::io::stdout().lock());
    let mut errors = 0;
    for (event, range) in shortcode::Parser::new(&src, classify).into_offset_iter() {
        if let Event::Error(..) = event {
            errors += 1;
        }
        match args.format {
            Format::Events => writeln!(out, "{}..{} {:?}", range.start, range.end, event)?,
            Format::Canonical => match event {
                Event::Text(text) | Event::Error(text, _) => out.write_all(text.as_bytes())?,
                Event::Shortcode(s) => write!(out, "{}", s)?,
            },
        }
    }
    out.flush()?;

    tracing::debug!(errors, "scan complete");
    Ok(errors == 0 || !args.deny_errors)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
