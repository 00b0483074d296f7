//! Example showing a progress bar over a simulated file copy.
//!
//! Run with `RUST_LOG=cmdbar=debug` to see the session lifecycle logged.

use cmdbar::SessionBuilder;
use color_eyre::Result;
use std::io::IsTerminal;
use std::thread::sleep;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let files: Vec<String> = (1..=40).map(|i| format!("file-{i:02}.bin")).collect();

    let mut progress = SessionBuilder::new().build();

    // Stay quiet when piped somewhere.
    if !std::io::stdout().is_terminal() {
        progress.set_idle(true);
    }

    progress.start("Copying files", files.len() as u64)?;
    for _file in &files {
        sleep(Duration::from_millis(50));
        progress.advance()?;
    }

    // Overshooting is tolerated once the run is over.
    progress.advance()?;

    let chunks = 1_000u64;
    progress.start("Verifying a rather long list of checksums", chunks)?;
    for chunk in 1..=chunks {
        if chunk % 100 == 0 {
            sleep(Duration::from_millis(20));
        }
        progress.advance_to(chunk)?;
    }

    Ok(())
}
