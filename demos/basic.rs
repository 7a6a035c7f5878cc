//! Basic usage example

use envtag::Record;

#[derive(Debug, Default, Record)]
struct Config {
    // Loaded from NAME, "svc" if unset
    #[env("default=svc")]
    pub name: String,

    // Loaded from PORT, error if unset
    #[env("required")]
    pub port: i32,

    // No annotation: loaded from DEBUG, false if unset
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("PORT", "8080");

    let mut config = Config::default();
    envtag::process(&mut config)?;

    println!("Configuration loaded:");
    println!("  Name: {}", config.name);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
