use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use downlevel::{CommandEngine, CompileReport, PassthroughEngine, TransformEngine};

use super::args::CliArgs;

fn init_logging(verbose: bool) {
    // Logs go to stderr: stdout may carry transformed code.
    let builder = tracing_subscriber::fmt().with_writer(std::io::stderr);
    let installed = if verbose {
        builder.with_max_level(tracing::Level::DEBUG).try_init()
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        builder.with_env_filter(filter).try_init()
    };
    if let Err(e) = installed {
        debug!("Keeping the existing log subscriber: {}", e);
    }
}

fn select_engine(args: &CliArgs) -> Box<dyn TransformEngine> {
    match &args.engine {
        Some(program) => {
            debug!("Using transform engine {:?} {:?}", program, args.engine_args);
            Box::new(CommandEngine::new(program).with_args(args.engine_args.iter().cloned()))
        }
        None => {
            debug!("No engine configured, passing code through unchanged");
            Box::new(PassthroughEngine)
        }
    }
}

pub fn run(args: CliArgs) -> downlevel::Result<CompileReport> {
    init_logging(args.log);

    let engine = select_engine(&args);
    let request = args.into_request()?;

    match &request.input {
        Some(input) => info!("Compiling {:?}", input),
        None => info!("Compiling standard input"),
    }
    if let Some(output) = &request.output {
        info!("Output: {:?}", output);
    }

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let report = downlevel::compile(&request, &engine, stdin, &mut stdout)?;

    info!(
        "Done: {} compiled, {} skipped",
        report.compiled, report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_setup_is_repeatable() {
        init_logging(true);
        init_logging(false);
    }

    #[test]
    fn engine_flag_selects_external_program() {
        use clap::Parser;

        let args = CliArgs::parse_from(["downlevel", "--engine", "/no/such/engine"]);
        let err = select_engine(&args)
            .transform("", &downlevel::Configuration::default())
            .unwrap_err();
        assert_eq!(err.code.as_deref(), Some("ENGINE_UNAVAILABLE"));
    }
}
