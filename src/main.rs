use tracing_subscriber::EnvFilter;

pub mod tui;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they can be redirected away from the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tui::run()
}
