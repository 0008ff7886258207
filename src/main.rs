use contact_book::prelude::run_app;
use dotenv::dotenv;
use std::process::exit;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = run_app().await {
        eprintln!("Error: {e}");
        exit(1);
    }
}
