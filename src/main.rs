use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries reports and stats
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pacer_watch=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = pacer_watch::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
