//! Prints the full xxHash vector transcript to stdout

use xxh_vectors::{Dispatcher, TwoxHash, generate};
use xxh_vectors_common::LoggingTransformer;

fn main() -> anyhow::Result<()> {
    LoggingTransformer::init();

    let dispatcher = Dispatcher::new(TwoxHash);
    let stdout = std::io::stdout();
    if let Err(e) = generate(&dispatcher, stdout.lock()) {
        LoggingTransformer::log_fatal("vector generation", &e);
        return Err(e.into());
    }
    Ok(())
}
