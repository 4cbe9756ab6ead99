use data_loader::Dataset;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/songs.dat"));

    println!("Loading ratings from {}...\n", path.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_file(&path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (users, items, ratings) = dataset.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users: {}", users);
    println!("Items: {}", items);
    println!("Ratings: {}", ratings);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
}
