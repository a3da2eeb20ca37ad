use anyhow::Result;
use cvsort::{config::default_sorts, run::run};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&default_sorts(), &args)
}
