//! CLI entrypoint for Tribunal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tribunal_application::{
    DebateAgent, DebateLogger, DebateParams, EvidenceIndex, ModelAdapter, ReferenceVerifier,
    RunDebateUseCase,
};
use tribunal_domain::{AgentPair, OutputFormat, Question, Seat, TextSplitter};
use tribunal_infrastructure::{
    ConfigLoader, FileConfig, GeminiTransport, HttpUrlValidator, JsonlDebateLogger, LexicalIndex,
    OpenRouterTransport, WebDocumentLoader,
};
use tribunal_presentation::{
    Cli, ConsoleFormatter, MarkdownTranscript, OutputFormatter, ProgressReporter, SimpleProgress,
    write_fallback,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref());

    info!("Starting Tribunal");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    check_config(&config)?;

    if !config.output.color {
        ConsoleFormatter::disable_color();
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let topic = match cli.question.clone() {
        Some(q) => q,
        None => read_topic()?,
    };
    let Some(question) = Question::try_new(topic) else {
        println!("No topic provided.");
        return Ok(());
    };

    let mut params = config.debate.to_params();
    if let Some(rounds) = cli.rounds {
        params = params.with_rounds(rounds);
    }

    // === Dependency Injection ===
    let mut use_case = build_use_case(&config, params)?;
    if let Some(path) = &config.output.events_log {
        match JsonlDebateLogger::open(path) {
            Ok(logger) => {
                let logger: Arc<dyn DebateLogger> = Arc::new(logger);
                use_case = use_case.with_logger(logger);
            }
            Err(e) => warn!("Debate events will not be logged to {}: {}", path.display(), e),
        }
    }

    let panel = use_case.panel();
    if !cli.quiet && format == OutputFormat::Full {
        println!(
            "{}",
            ConsoleFormatter::intro(question.content(), &panel.proponent, &panel.opponent)
        );
    }

    let outcome = if cli.quiet {
        use_case.execute(&question).await
    } else if io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&question, &progress).await
    } else if format == OutputFormat::Json {
        // keep stdout parseable when progress bars cannot be drawn
        use_case.execute(&question).await
    } else {
        use_case.execute_with_progress(&question, &SimpleProgress).await
    };

    println!("{}", ConsoleFormatter.render(&outcome, format));

    let transcript = MarkdownTranscript::new(
        cli.transcript
            .clone()
            .unwrap_or_else(|| config.output.transcript.clone()),
        config.output.backup.clone(),
    );
    match transcript.save(&outcome) {
        Ok(path) => {
            if format != OutputFormat::Json {
                println!("\nFull debate transcript saved to '{}'", path.display());
            }
        }
        Err(e) => {
            error!("{}", e);
            write_fallback(&config.output.fallback, &outcome, &e)?;
            eprintln!(
                "Transcript could not be saved; fallback written to '{}'",
                config.output.fallback.display()
            );
        }
    }

    Ok(())
}

/// Console logging filtered by verbosity; a daily file log when `log_dir` is set.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let console = fmt::layer().with_target(false).with_writer(io::stderr);

    match log_dir {
        Some(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "tribunal.log"));
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        for issue in issues.iter().filter(|i| i.is_error()) {
            eprintln!("{}", issue);
        }
        bail!("configuration has {} error(s)", errors);
    }
    Ok(())
}

fn read_topic() -> Result<String> {
    println!("Enter the debate topic:");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the debate topic")?;
    Ok(line.trim().to_string())
}

fn build_use_case(config: &FileConfig, params: DebateParams) -> Result<RunDebateUseCase> {
    let gemini = config.providers.gemini_settings();
    let openrouter = config.providers.openrouter_settings();
    debug!(
        "{} API key present: {}",
        gemini.name,
        if gemini.api_key.is_some() { "yes" } else { "no" }
    );
    debug!(
        "{} API key present: {}",
        openrouter.name,
        if openrouter.api_key.is_some() { "yes" } else { "no" }
    );

    let proponent_timeout = gemini.timeout;
    let opponent_timeout = openrouter.timeout;
    let proponent_adapter = Arc::new(ModelAdapter::new(
        Arc::new(GeminiTransport::new(gemini)?),
        proponent_timeout,
    ));
    let opponent_adapter = Arc::new(ModelAdapter::new(
        Arc::new(OpenRouterTransport::new(openrouter)?),
        opponent_timeout,
    ));

    let agents = AgentPair::new(
        DebateAgent::new(
            Seat::Proponent,
            proponent_adapter.name(),
            proponent_adapter.clone(),
            params.memory_limit,
        ),
        DebateAgent::new(
            Seat::Opponent,
            opponent_adapter.name(),
            opponent_adapter.clone(),
            params.memory_limit,
        ),
    );

    let web = config.web.to_settings();
    let verifier = ReferenceVerifier::new(
        Arc::new(HttpUrlValidator::new(&web)?),
        config.authority.to_scorer(),
        params.max_references,
    );
    let evidence = EvidenceIndex::new(
        Arc::new(WebDocumentLoader::new(&web)?),
        Arc::new(LexicalIndex::new()),
        TextSplitter::new(params.chunk_size, params.chunk_overlap),
    );

    Ok(RunDebateUseCase::new(agents, verifier, evidence, params)?)
}
