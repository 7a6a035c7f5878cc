//! Example demonstrating prefixes

use envtag::{Env, Record};

#[derive(Debug, Default, Record)]
#[env(prefix = "MYAPP_")]
struct Config {
    // MYAPP_DATABASE_URL
    pub database_url: String,

    // MYAPP_HTTP_PORT
    #[env("key=http_port default=3000")]
    pub port: i32,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("STAGING_HTTP_PORT", "4000");

    // Struct-level prefix
    let config = Config::from_env()?;
    println!("With prefix 'MYAPP_': {config:?}");

    // Explicit prefix replaces the struct-level one
    let mut staging = Config::default();
    Env::with_prefix("staging_").process(&mut staging)?;
    println!("With prefix 'staging_': {staging:?}");

    Ok(())
}
