use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{sample, Dataset};
use rayon::prelude::*;
use recommender::{RecommendError, Recommendation, Recommender, RecommenderConfig};
use similarity::pearson;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// ubf-recs - User-based collaborative filtering recommendations
#[derive(Parser)]
#[command(name = "ubf-recs")]
#[command(about = "Item recommendations from similar users' ratings", long_about = None)]
struct Cli {
    /// Ratings file (`user::item::rating` lines, or `.json`). Uses the built-in song dataset if omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations for a user
    Recommend {
        /// User to get recommendations for
        #[arg(long)]
        user: String,

        /// Number of nearest neighbors (invalid values fall back to 1)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        k: i64,

        /// Result cap (invalid values fall back to 10)
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        m: i64,

        /// Truncate the list to m entries
        #[arg(long)]
        cap: bool,
    },

    /// Print recommendations for every user in the dataset
    All {
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        k: i64,

        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        m: i64,
    },

    /// Show every other user ranked by similarity
    Neighbors {
        #[arg(long)]
        user: String,
    },

    /// Show the correlation between two users
    Similarity {
        #[arg(long)]
        a: String,

        #[arg(long)]
        b: String,
    },

    /// Show a user's rating profile
    User {
        #[arg(long)]
        user: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Times to query every user in the dataset
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Number of nearest neighbors
        #[arg(long, default_value = "3", allow_hyphen_values = true)]
        k: i64,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Arc::new(load_dataset(cli.data.as_ref())?);
    let (users, items, ratings) = dataset.counts();
    info!(
        "Loaded {} users, {} items, {} ratings in {:?}",
        users,
        items,
        ratings,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { user, k, m, cap } => handle_recommend(dataset, &user, k, m, cap)?,
        Commands::All { k, m } => handle_all(dataset, k, m)?,
        Commands::Neighbors { user } => handle_neighbors(dataset, &user)?,
        Commands::Similarity { a, b } => handle_similarity(&dataset, &a, &b)?,
        Commands::User { user } => handle_user(&dataset, &user)?,
        Commands::Benchmark { iterations, k } => handle_benchmark(dataset, iterations, k)?,
    }

    Ok(())
}

fn load_dataset(path: Option<&PathBuf>) -> Result<Dataset> {
    match path {
        Some(path) => Dataset::load_from_file(path)
            .with_context(|| format!("Failed to load ratings from {}", path.display())),
        None => {
            info!("No data file given; using the built-in song dataset");
            Ok(sample::song_ratings())
        }
    }
}

/// Handle the 'recommend' command
fn handle_recommend(dataset: Arc<Dataset>, user: &str, k: i64, m: i64, cap: bool) -> Result<()> {
    let recommender = Recommender::new(dataset, RecommenderConfig::new(k, m));

    let recommendations = if cap {
        recommender.recommend_top(user)
    } else {
        recommender.recommend(user)
    }
    .with_context(|| format!("Failed to recommend for {}", user))?;

    println!(
        "{}",
        format!("Recommendations for {} (k = {}):", user, recommender.k())
            .bold()
            .blue()
    );
    print_recommendations(&recommendations);
    Ok(())
}

/// Handle the 'all' command
fn handle_all(dataset: Arc<Dataset>, k: i64, m: i64) -> Result<()> {
    let recommender = Recommender::new(dataset.clone(), RecommenderConfig::new(k, m));

    let header = format!("Pearson recommendations (k = {})", recommender.k());
    println!("{}", header.bold().blue());
    println!("{}", "-".repeat(header.len()));

    for user in dataset.users() {
        let recommendations = recommender
            .recommend(user)
            .with_context(|| format!("Failed to recommend for {}", user))?;
        let line = recommendations
            .iter()
            .map(|r| format!("({}, {})", r.item, r.score))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} : [{}]", user.green(), line);
    }
    Ok(())
}

/// Handle the 'neighbors' command
fn handle_neighbors(dataset: Arc<Dataset>, user: &str) -> Result<()> {
    let recommender = Recommender::with_defaults(dataset);
    let neighbors = recommender.rank_neighbors(user)?;

    println!("{}", format!("Users most similar to {}:", user).bold().blue());
    for (rank, entry) in neighbors.iter().enumerate() {
        let similarity = if entry.similarity.is_defined() {
            entry.similarity.to_string().normal()
        } else {
            entry.similarity.to_string().yellow()
        };
        println!("{}. {} - {}", (rank + 1).to_string().green(), entry.user, similarity);
    }
    Ok(())
}

/// Handle the 'similarity' command
fn handle_similarity(dataset: &Dataset, a: &str, b: &str) -> Result<()> {
    let profile_a = dataset
        .get_profile(a)
        .ok_or_else(|| anyhow!("User {} not found", a))?;
    let profile_b = dataset
        .get_profile(b)
        .ok_or_else(|| anyhow!("User {} not found", b))?;

    let correlation = pearson(profile_a, profile_b);
    let shared = profile_a.shared_items(profile_b).count();
    println!(
        "{} ~ {}: {} ({} shared items, score {})",
        a.bold(),
        b.bold(),
        correlation,
        shared,
        correlation.score()
    );
    Ok(())
}

/// Handle the 'user' command
fn handle_user(dataset: &Dataset, user: &str) -> Result<()> {
    let profile = dataset
        .get_profile(user)
        .ok_or_else(|| anyhow!("User {} not found", user))?;

    println!("{}", format!("User: {}", user).bold().blue());
    println!("{}Number of ratings: {}", "• ".cyan(), profile.len());
    println!(
        "{}Average rating: {:.2}",
        "• ".cyan(),
        profile.mean().unwrap_or(0.0)
    );

    let mut top_rated: Vec<_> = profile.iter().collect();
    top_rated.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    println!("Top rated items:");
    for (item, rating) in top_rated.iter().take(5) {
        println!("  - {} (Rating: {})", item, rating);
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(dataset: Arc<Dataset>, iterations: usize, k: i64) -> Result<()> {
    let users: Vec<String> = dataset.users().cloned().collect();
    if users.is_empty() || iterations == 0 {
        return Err(anyhow!("Benchmark needs a non-empty dataset and at least one iteration"));
    }

    let recommender = Arc::new(Recommender::new(dataset, RecommenderConfig::new(k, 10)));

    // Every user, `iterations` times over
    let targets: Vec<&str> = (0..iterations)
        .flat_map(|_| users.iter().map(String::as_str))
        .collect();
    info!(
        "Benchmarking {} queries ({} users x {} iterations, k = {})",
        targets.len(),
        users.len(),
        iterations,
        recommender.k()
    );

    // Run queries in parallel over the shared recommender
    let wall = Instant::now();
    let mut timings: Vec<Duration> = targets
        .par_iter()
        .map(|user| {
            let start = Instant::now();
            recommender.recommend(user)?;
            Ok(start.elapsed())
        })
        .collect::<Result<Vec<_>, RecommendError>>()?;
    let wall_time = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = targets.len() as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("{}", "No unseen items among the selected neighbors".yellow());
        return;
    }
    for (idx, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} - Score: {:.2}",
            (idx + 1).to_string().green(),
            rec.item,
            rec.score
        );
    }
}
