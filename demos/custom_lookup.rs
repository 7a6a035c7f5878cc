//! Example reading from a source other than the process environment

use envtag::{Env, Record};
use std::collections::HashMap;

#[derive(Debug, Default, Record)]
struct Config {
    #[env("required")]
    pub api_key: String,

    #[env("default=30")]
    pub timeout_secs: i64,
}

fn main() -> anyhow::Result<()> {
    let vars = HashMap::from([("API_KEY".to_string(), "secret-key-123".to_string())]);

    let mut config = Config::default();
    Env::with_lookup(vars).process(&mut config)?;
    println!("From a map: timeout={}s", config.timeout_secs);

    // Any closure works too
    let lookup = envtag::from_fn(|key| match key {
        "API_KEY" => Some("from-closure".to_string()),
        "TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    });
    Env::with_lookup(lookup).process(&mut config)?;
    println!("From a closure: timeout={}s", config.timeout_secs);

    Ok(())
}
