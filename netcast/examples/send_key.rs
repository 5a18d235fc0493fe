//! Key press and status query example

use netcast::{NetCastClient, Query, RemoteKey};

#[tokio::main]
async fn main() -> netcast::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let host = std::env::var("TV_HOST").unwrap_or_else(|_| "192.168.1.100".to_string());
    let pairing_key = std::env::var("TV_PAIRING_KEY").ok();

    let mut client = NetCastClient::new(host, pairing_key)?;

    if let Err(err) = client.connect().await {
        if err.is_access_token() {
            println!("Pairing key is displayed on the TV - set TV_PAIRING_KEY and run again.");
            return Ok(());
        }
        return Err(err);
    }

    println!("Connected!");

    client.send_command(RemoteKey::MuteToggle).await?;

    for fragment in client.query_data(Query::VolumeInfo).await? {
        println!("{fragment}");
    }

    client.close();
    Ok(())
}
