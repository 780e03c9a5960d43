// SPDX-License-Identifier: MPL-2.0
use bant_media::app::shell::{self, LaunchOptions};
use bant_media::logging;
use std::process::ExitCode;

const HELP: &str = "\
Bant Media

USAGE:
  bant_media [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --api-url <url>      Origin of the image service
  -h, --help           Print this help
";

fn parse_args() -> Result<Option<LaunchOptions>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let options = LaunchOptions {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_url: args.opt_value_from_str("--api-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }
    Ok(Some(options))
}

fn main() -> ExitCode {
    logging::init();

    let options = match parse_args() {
        Ok(Some(options)) => options,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match shell::launch(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "bant_media stopped");
            ExitCode::FAILURE
        }
    }
}
