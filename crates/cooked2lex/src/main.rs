use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cooked2lex::{Config, UsageError, program_name, report_failure, run, usage};

fn main() -> ExitCode {
    init_tracing();

    let arg0 = env::args().next();
    let cmd = program_name(arg0.as_deref());

    let config = match Config::load(env::args_os(), |key| env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            if let UsageError::UnknownOption(_) = err {
                eprintln!("{err}\n");
            }
            eprint!("{}", usage(&cmd));
            return ExitCode::FAILURE;
        }
    };

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing more can be reported if stderr itself is gone.
            let _ = report_failure(io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &Config) -> anyhow::Result<()> {
    let start = Instant::now();
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let stderr = io::stderr();

    let stats = run(config, stdin, stdout, stderr)?;
    info!(
        sentences = stats.sentences,
        words = stats.word_types,
        "lexicon written in {} ms",
        start.elapsed().as_millis()
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
