use clap::Parser;
use wasm_bindgen::prelude::*;

mod catalog;
mod game;
mod input;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force the seed of the first deal instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Language of the completion message
    #[arg(short, long, value_enum, default_value_t = utils::Lang::Zh)]
    lang: utils::Lang,
}

/// Options come from the URL hash, e.g. `#-vv&--seed=42&--lang=en`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = match parse_args(&location_hash) {
        Ok(args) => args,
        Err(err) => {
            // no verbosity was parsed, still surface why nothing rendered
            if console_log::init_with_level(log::Level::Error).is_ok() {
                log::error!("invalid options in {:?}: {}", location_hash, err);
            }
            return;
        }
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}, lang: {:?}", args.seed, args.lang);

    let catalog = match catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("{:#}", err);
            return;
        }
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started with {} faces", catalog.len());
    let props = game::GameProps {
        catalog,
        seed: args.seed,
        lang: args.lang,
    };
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_from_location_hash() {
        let args = parse_args("#-vv&--seed=42&--lang=en").unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.lang, utils::Lang::En);
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.lang, utils::Lang::Zh);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(parse_args("#--seed=x").is_err());
        assert!(parse_args("#--lang=fr").is_err());
        assert!(parse_args("#--bogus").is_err());
    }
}
