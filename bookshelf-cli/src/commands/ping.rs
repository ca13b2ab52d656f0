//! Store connectivity check

use anyhow::Result;
use clap::Parser;

use super::{connect_store, StoreArgs};

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Connect, ping, and release the store connection
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let books = connect_store(&args.store).await?;
    books.shutdown().await;
    println!("ok");
    Ok(())
}
