//! Tokenize a TinyLang source unit and print the tokens:
//! one per line, as `line:begin-end`, the kind, and the text, separated by tabs.
//!
//! ```ignore
//! <input.ty tinylang
//! ```
//!
//! Scanner logging goes to stderr, filtered by `RUST_LOG` (e.g. `RUST_LOG=tinylang=debug`
//! to see text that did not classify).

use std::io::Write;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::io::stdin().lock();
    let tokens = tinylang::tokenize_reader(input)?;

    let mut stdout = std::io::stdout().lock();
    for token in tokens {
        writeln!(stdout, "{}", token)?;
    }
    Ok(())
}
