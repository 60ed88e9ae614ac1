use env_logger::Env;
use log::LevelFilter;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    lispy::cli::run();
}
