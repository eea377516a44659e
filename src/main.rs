use clap::Parser;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{
    AsciiTableReporter, CliArgs, HeadHunterClient, Result, StatsEngine, SuperJobClient,
};

#[tokio::main]
async fn main() {
    // .env 不存在時忽略
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose, args.log_format);

    tracing::info!("Starting vacancy-stats");
    if args.verbose {
        tracing::debug!("Config file: {:?}, source: {:?}", args.config, args.source);
    }

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ vacancy-stats failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.category().exit_code());
    }
}

async fn run(args: &CliArgs) -> Result<()> {
    let config = args.load_config()?;
    config.validate()?;
    tracing::info!(
        "✅ Configuration loaded: {} languages, last {} days",
        config.languages.len(),
        config.days_ago
    );

    let today = chrono::Local::now().date_naive();
    let engine = StatsEngine::new(config.languages.clone());
    let reporter = AsciiTableReporter;

    if config.sources.includes_headhunter() {
        let headhunter = HeadHunterClient::from_config(&config, today)?;
        println!("{}", engine.report(&headhunter, &reporter).await?);
    }

    if config.sources.includes_superjob() {
        let superjob = SuperJobClient::from_config(&config)?;
        println!("{}", engine.report(&superjob, &reporter).await?);
    }

    Ok(())
}
