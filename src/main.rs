//! @ai:module:intent CLI for searching tweets and summarizing their sentiment
//! @ai:module:layer presentation

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tweet_sentiment::{
    analysis::{AnalysisClientTrait, EntityResult, SentimentResult},
    config::AppConfig,
    logging,
    pipeline::{RunOutcome, SentimentPipeline},
    prompt::Prompter,
    report::SentimentSummary,
    search::SearchClientTrait,
    MockAnalysisClient, MockSearchClient, RepustateClient, SearchParameters, TwitterClient,
};

#[derive(Parser)]
#[command(name = "tweet-sentiment")]
#[command(about = "Search tweets and summarize their sentiment and entities")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults to ./tweet-sentiment.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for tweets.txt, ErrorLog.txt, record.txt and summary.json
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Run against canned responses instead of the live APIs
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env();

    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }

    let today = chrono::Local::now().date_naive();
    let params = Prompter::new(io::stdin().lock(), io::stdout()).collect_parameters(today)?;

    let outcome = if cli.dry_run {
        tracing::info!("Running in dry-run mode");
        let (search, analysis) = dry_run_clients();
        run(search, analysis, &config, &params).await?
    } else {
        config.validate_credentials()?;
        let search = Arc::new(TwitterClient::new(&config.twitter)?);
        let analysis = Arc::new(RepustateClient::new(&config.repustate)?);
        run(search, analysis, &config, &params).await?
    };

    match outcome {
        RunOutcome::NoMatches => println!("There is no tweet match your search query"),
        RunOutcome::TooManyFailures { error_log, .. } => {
            println!("Error, check error log ({})", error_log.display())
        }
        RunOutcome::Completed(summary) => print_summary(&summary),
    }

    Ok(())
}

/// @ai:intent Run the pipeline over a pair of clients
/// @ai:effects network, fs:write
async fn run<S: SearchClientTrait, A: AnalysisClientTrait>(
    search: Arc<S>,
    analysis: Arc<A>,
    config: &AppConfig,
    params: &SearchParameters,
) -> Result<RunOutcome> {
    let pipeline = SentimentPipeline::new(search, analysis, config);
    pipeline.run(params).await
}

/// @ai:intent Build mock clients with a small canned conversation
/// @ai:effects pure
fn dry_run_clients() -> (Arc<MockSearchClient>, Arc<MockAnalysisClient>) {
    let canned = [
        ("Loving the new release, great work!", 0.9, vec!["Rust"]),
        ("The build broke again on Windows.", -0.6, vec!["Windows", "Rust"]),
        ("Conference talks are online now.", 0.0, vec!["RustConf"]),
    ];

    let tweets = canned.iter().map(|(text, _, _)| text.to_string()).collect();
    let analysis = canned
        .into_iter()
        .fold(MockAnalysisClient::new(), |client, (text, score, titles)| {
            client.with_response(text, SentimentResult::ok(score), EntityResult::ok(titles))
        });

    (Arc::new(MockSearchClient::new(tweets)), Arc::new(analysis))
}

/// @ai:intent Print summary to console
/// @ai:effects io
fn print_summary(summary: &SentimentSummary) {
    println!();
    println!("Tweet Sentiment Results: {}", summary.query);
    println!("========================");
    println!();
    println!("{:<26} {:>6}", "Tweets fetched:", summary.fetched);
    println!("{:<26} {:>6}", "Total tweets:", summary.scored);
    println!("{:<26} {:>6}", "Total positive:", summary.positive);
    println!("{:<26} {:>6}", "Total negative:", summary.negative);
    println!("{:<26} {:>6}", "Total unique entities:", summary.unique_entities());

    if summary.sentiment_failures > 0 || summary.entity_failures > 0 {
        println!(
            "{:<26} {:>6}",
            "Failed (sentiment):", summary.sentiment_failures
        );
        println!("{:<26} {:>6}", "Failed (entities):", summary.entity_failures);
    }

    println!();
    if summary.most_frequent.is_empty() {
        println!("Most frequent entity: none");
    } else {
        println!("Most frequent entity: {}", summary.most_frequent.join(", "));
    }
    println!();
}
