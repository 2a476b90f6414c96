use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;

mod console;

#[derive(Parser)]
#[command(name = "dayplan-cli", version, about = "Interactive day planner")]
struct Cli {
    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    // Keep the handle alive for the process lifetime.
    let _logger = flexi_logger::Logger::try_with_env_or_str(&cli.log_level)
        .and_then(|logger| logger.start());
    if let Err(e) = &_logger {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = match cli.script {
        Some(path) => match File::open(&path) {
            Ok(file) => console::run(&mut BufReader::new(file)),
            Err(e) => Err(io::Error::new(
                e.kind(),
                format!("cannot open script {}: {e}", path.display()),
            )),
        },
        None => {
            let stdin = io::stdin();
            let mut locked = stdin.lock();
            console::run(&mut locked)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
