// SPDX-License-Identifier: MPL-2.0
use iced_resize::app::{self, paths, Flags};
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_resize [OPTIONS] [FILE]

Options:
  --lang <id>          UI language (e.g. es, en-US)
  --endpoint <url>     Resize Service URL for this run
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let endpoint = read_option(&mut args, "--endpoint");
    let config_dir = read_option(&mut args, "--config-dir");
    let file_path = file_argument(args.finish());

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        endpoint,
        config_dir,
        file_path,
    })
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid command line option");
            None
        }
    }
}

/// Picks the FILE positional from what pico-args left over.
///
/// Unknown flags end up in the same list; they are logged and skipped.
fn file_argument(rest: Vec<OsString>) -> Option<String> {
    let mut file = None;
    for arg in rest {
        let Ok(arg) = arg.into_string() else {
            tracing::warn!("ignoring non UTF-8 command line argument");
            continue;
        };
        if arg.starts_with('-') {
            tracing::warn!(argument = %arg, "ignoring unknown command line option");
        } else if file.is_none() {
            file = Some(arg);
        } else {
            tracing::warn!(argument = %arg, "ignoring extra command line argument");
        }
    }
    file
}
