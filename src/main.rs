use std::sync::Arc;

use cinematch::{
    config::Config,
    services::{top_rated_for_user, Recommender},
    store::{create_redis_client, RedisStore},
};

/// Prints a user's top-rated movies and their personalized recommendations.
///
/// Usage: cinematch <user_id>
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let user_id = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: cinematch <user_id>"))?;

    let config = Config::from_env()?;
    let client = create_redis_client(&config.redis_url)?;
    let store = Arc::new(RedisStore::new(client));

    let recommender = Recommender::new(store.clone(), store.clone(), &config);

    let top_rated =
        top_rated_for_user(store.as_ref(), store.as_ref(), &user_id, config.recommendation_count)
            .await?;
    println!("Top rated by user {}:", user_id);
    for entry in &top_rated {
        println!("  {:.1}  {}", entry.rating, entry.title);
    }

    let recommendations = recommender
        .recommend(&user_id, config.recommendation_count)
        .await?;
    if recommendations.is_empty() {
        println!("No recommendations available");
    } else {
        println!("Recommended for user {}:", user_id);
        for title in &recommendations {
            println!("  {}", title);
        }
    }

    Ok(())
}
