// SPDX-License-Identifier: MPL-2.0
use page_lens::app::{self, paths, Flags};

const HELP: &str = "\
page_lens [OPTIONS] [ASSET_ROOT]

ARGS:
  ASSET_ROOT            Directory or http(s) URL holding 001.svg, 002.svg, ...

OPTIONS:
  --lang <LOCALE>       Interface language (en-US, ar, fr)
  --pages <COUNT>       Number of pages in the document
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|e| {
        log::warn!("ignoring --lang: {e}");
        None
    });
    let total_pages: Option<u32> = args.opt_value_from_str("--pages").unwrap_or_else(|e| {
        log::warn!("ignoring --pages: {e}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|e| {
            log::warn!("ignoring --config-dir: {e}");
            None
        });
    paths::init_cli_overrides(config_dir);

    let asset_root = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        asset_root,
        total_pages,
    })
}
