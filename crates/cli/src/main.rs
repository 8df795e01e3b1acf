//! Doc-IN CLI - Translation catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Verify English and Arabic define the same keys (exit 1 on gaps)
//! docin-cli translations check
//!
//! # Look up one key the way the site renders it
//! docin-cli translations get ar nav.pricing
//!
//! # List every key of a language
//! docin-cli translations list en
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};

use docin_core::Language;

mod commands;

#[derive(Parser)]
#[command(name = "docin-cli")]
#[command(author, version, about = "Doc-IN CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the built-in translation catalog
    Translations {
        #[command(subcommand)]
        action: TranslationsAction,
    },
}

#[derive(Subcommand)]
enum TranslationsAction {
    /// Report keys missing from either language
    Check,
    /// Print the translation of one key
    Get {
        /// Language tag (`en` or `ar`)
        lang: Language,

        /// Message key, e.g. `nav.home`
        key: String,
    },
    /// Print every key defined for a language
    List {
        /// Language tag (`en` or `ar`)
        lang: Language,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, &mut std::io::stdout().lock()) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), commands::translations::TranslationsError> {
    let catalog = docin_site::i18n::Catalog::builtin();

    let result = match cli.command {
        Commands::Translations { action } => match action {
            TranslationsAction::Check => commands::translations::check(&catalog, out),
            TranslationsAction::Get { lang, key } => {
                commands::translations::get(catalog, lang, &key, out)
            }
            TranslationsAction::List { lang } => commands::translations::list(&catalog, lang, out),
        },
    };

    // A failed flush means stdout was truncated.
    let flushed = out.flush();
    result?;
    flushed?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::*;

    /// Accepts writes but fails when flushed.
    struct BrokenPipe(Vec<u8>);

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("docin-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_lists_keys() {
        let mut out = Vec::new();
        run(cli(&["translations", "list", "en"]), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line == "nav.pricing"));
    }

    #[test]
    fn test_run_reports_failed_flush() {
        let mut out = BrokenPipe(Vec::new());
        let err = run(cli(&["translations", "list", "en"]), &mut out).unwrap_err();

        assert!(matches!(
            err,
            commands::translations::TranslationsError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe
        ));
        assert!(!out.0.is_empty());
    }
}
