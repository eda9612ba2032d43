// SPDX-License-Identifier: MPL-2.0
use top_alerter::app::{self, Flags};
use top_alerter::error::{Error, Result};
use top_alerter::ui::theming::ThemeMode;

const HELP: &str = "\
TopAlerter demo gallery

USAGE:
  top_alerter [OPTIONS]

OPTIONS:
  --theme <light|dark|system>  Theme to start with (default: saved setting)
  --config-dir <PATH>          Directory holding settings.toml
  --show <INDEX>               Open demo INDEX (0-16) at startup
  --log-level <LEVEL>          error, warn, info, debug or trace
  -h, --help                   Print this help
";

fn parse_args() -> Result<Option<(Flags, Option<log::LevelFilter>)>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let theme = args
        .opt_value_from_fn("--theme", |raw: &str| {
            ThemeMode::parse(raw).ok_or_else(|| format!("unknown theme '{raw}'"))
        })?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let show = args.opt_value_from_str("--show")?;
    let log_level = args.opt_value_from_str("--log-level")?;

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Args(format!("unexpected arguments: {rest:?}")));
    }

    Ok(Some((
        Flags {
            theme,
            config_dir,
            show,
        },
        log_level,
    )))
}

fn main() -> iced::Result {
    let (flags, log_level) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let mut logger = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env();
    if let Some(level) = log_level {
        logger = logger.with_level(level);
    }
    if let Err(err) = logger.init() {
        eprintln!("failed to initialize logger: {err}");
    }

    log::info!("starting TopAlerter {}", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
