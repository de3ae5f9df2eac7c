//! Smoke test against a running server.
//!
//! ```sh
//! cargo run -p tester -- http://localhost:3001
//! ```

use clap::Parser;
use reqwest::Client;
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(default_value = "http://localhost:3001")]
    base_url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let client = Client::new();

    let dishes: Value = client
        .get(format!("{}/dishes", args.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    println!("Dishes: {}", dishes.as_array().map_or(0, Vec::len));

    let neighbors: Value = client
        .get(format!("{}/dishes/uthappizza/neighbors", args.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    println!("Neighbors of uthappizza: {neighbors}");

    let featured: Value = client
        .get(format!("{}/promotions/featured", args.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    println!("Featured promotion: {}", featured["name"]);

    let comment = json!({
        "author": "Smoke Tester",
        "comment": "Still delicious.",
        "rating": 5,
    });
    let updated: Value = client
        .post(format!("{}/dishes/uthappizza/comments", args.base_url))
        .json(&comment)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    println!(
        "Comments on uthappizza after posting: {}",
        updated["comments"].as_array().map_or(0, Vec::len)
    );

    let rejected = client
        .post(format!("{}/feedback", args.base_url))
        .json(&json!({ "firstname": "X" }))
        .send()
        .await
        .unwrap();
    println!("Empty feedback status: {}", rejected.status());
}
