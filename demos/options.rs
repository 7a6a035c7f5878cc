//! Example demonstrating allow-lists

use envtag::Record;

#[derive(Debug, Default, Record)]
struct Config {
    #[env("key=log_level default=info options=debug,info,warn,error")]
    pub level: String,

    #[env("default=1 options=1,2,4,8")]
    pub shards: i32,
}

fn main() {
    std::env::set_var("LOG_LEVEL", "verbose");

    let mut config = Config::default();
    match envtag::process(&mut config) {
        Ok(()) => println!("Configuration loaded: {config:?}"),
        // LOG_LEVEL="verbose" not in allowed options: [debug info warn error]
        Err(e) => println!("Rejected: {e}"),
    }

    std::env::set_var("LOG_LEVEL", "warn");
    envtag::must_process(&mut config);
    println!("Configuration loaded: {config:?}");
}
