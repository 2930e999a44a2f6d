//! This example shows:
//! - Creating a jokegen client
//! - Fetching a random joke
//! - Fetching a joke by category and by ID
//! - Fetching a batch of jokes

use jokegen::joke::Category;
use jokegen::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // This is just for seeing the logs, you may remove it if you wish.
    simple_logger::init_with_level(log::Level::Info)?;

    // Create a new jokegen client
    let client = Client::new();

    println!("Random joke:");
    println!("{}", client.fetch_random().await?.format());

    println!("Knock-knock joke:");
    println!("{}", client.fetch_by_type(Category::KnockKnock).await?.format());

    println!("Joke #1:");
    println!("{}", client.fetch_by_id(1).await?.format());

    println!("Five jokes:");
    for (i, joke) in client.fetch_batch(5).await?.iter().enumerate() {
        println!("Joke {}:\n{}", i + 1, joke.format());
    }

    Ok(())
}
