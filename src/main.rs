// SPDX-License-Identifier: MPL-2.0
use layer_picker::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!(
            "Usage: layer_picker [--lang <LOCALE>] [--config-dir <DIR>] [--items <FILE>]"
        );
        return Ok(());
    }

    // Malformed option values are treated as absent.
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        items: args.opt_value_from_str("--items").unwrap_or(None),
    };

    for extra in args.finish() {
        eprintln!("Ignoring unexpected argument: {}", extra.to_string_lossy());
    }

    app::run(flags)
}
