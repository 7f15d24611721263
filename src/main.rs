//! Look up a translation from a directory of locale documents.
//!
//! Usage:
//!   cargo run -- pages.home.title
//!   cargo run -- welcome --scope pages.home name=Ada
//!   cargo run -- pages.home.title --locale tr
//!   cargo run -- pages.home.title --switch tr
//!
//! Optional environment variables:
//! - I18N_LOCALES_DIR (defaults to demos/locales)
//! - I18N_DEFAULT_LOCALE (defaults to en)
//! - I18N_SEPARATOR (defaults to ".")
//! - I18N_DEBUG (defaults to false)

use anyhow::{bail, Context, Result};
use i18n_tree::{config::Config, I18n, TranslateOptions};
use tracing::info;

struct Args {
    path: String,
    switch: Option<String>,
    options: TranslateOptions,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut path = None;
    let mut switch = None;
    let mut options = TranslateOptions::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scope" => options = options.scope(args.next().context("--scope needs a value")?),
            "--locale" => {
                options = options.locale(args.next().context("--locale needs a value")?)
            }
            "--switch" => switch = Some(args.next().context("--switch needs a value")?),
            _ => match arg.split_once('=') {
                Some((name, value)) => options = options.var(name, value),
                None if path.is_none() => path = Some(arg.clone()),
                None => bail!("Unexpected argument: {}", arg),
            },
        }
    }

    Ok(Args {
        path: path.unwrap_or_default(),
        switch,
        options,
    })
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let directive = if config.debug {
        "i18n_tree=debug"
    } else {
        "i18n_tree=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    info!("Loading locales from {:?}", config.locales_dir);
    let i18n = I18n::new(config.registry_options()?).context("Failed to build locale registry")?;
    i18n.on_locale_change(|locale| info!("Locale changed to '{}'", locale));

    info!(
        "Loaded locales {:?}, current locale: {}",
        i18n.available_locales(),
        i18n.current_locale()
    );

    if let Some(locale) = &args.switch {
        i18n.change_locale(locale)?;
    }

    println!("{}", i18n.translate(&args.path, &args.options));
    Ok(())
}
