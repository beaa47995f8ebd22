use dupes_client::{RemoteFetchError, RemoteSource};

#[tokio::main]
async fn main() -> Result<(), RemoteFetchError> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let source = RemoteSource::from_env();
    let values = source.fetch_values::<i64>().await?;

    println!("Fetched {} values from {}", values.len(), source.url());
    println!("{values:?}");

    Ok(())
}
