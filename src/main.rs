//! Entry point for the **easel** sampler.
//!
//! Prints one line per frame of a transition: elapsed milliseconds, linear
//! progress and eased value.  Settings come from the config file and can be
//! overridden on the command line:
//!
//! ```text
//! easel [--config PATH] [--timing NAME] [--duration MS] [--fps N] [--from V] [--to V]
//! ```

use easel::config::{Config, ConfigError};
use easel::transition::Transition;
use log::{error, info};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Resolve the config directory (`$XDG_CONFIG_HOME/easel`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("easel")
}

/// Load the config from the default location, falling back to compiled-in
/// defaults when it is missing or unreadable.
fn load_config(path: PathBuf) -> Config {
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Load the config named on the command line, or the default one.
///
/// An explicitly named file must load; only the default file may be absent.
fn read_config(explicit: Option<PathBuf>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => {
            let cfg = Config::load(&path)?;
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        None => Ok(load_config(config_dir().join("config.json"))),
    }
}

//  Arguments 

#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value:?}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown argument: {0}")]
    Unknown(String),
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    timing: Option<String>,
    duration_ms: Option<u64>,
    frame_rate: Option<u32>,
    from: Option<f32>,
    to: Option<f32>,
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.into()))?;
    value.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.into(),
        value,
    })
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, ArgsError> {
    let mut args = Args::default();
    while let Some(flag) = argv.next() {
        match flag.as_str() {
            "--config" => args.config = Some(parse_value(&flag, argv.next())?),
            "--timing" => args.timing = Some(parse_value(&flag, argv.next())?),
            "--duration" => args.duration_ms = Some(parse_value(&flag, argv.next())?),
            "--fps" => args.frame_rate = Some(parse_value(&flag, argv.next())?),
            "--from" => args.from = Some(parse_value(&flag, argv.next())?),
            "--to" => args.to = Some(parse_value(&flag, argv.next())?),
            _ => return Err(ArgsError::Unknown(flag)),
        }
    }
    Ok(args)
}

//  Main 

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let config = match read_config(args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let sampler = &config.sampler;

    let name = args.timing.as_deref().unwrap_or(&sampler.timing);
    let timing = match config.resolve(name) {
        Ok(tf) => tf,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let duration = Duration::from_millis(args.duration_ms.unwrap_or(sampler.duration_ms));
    let fps = args.frame_rate.unwrap_or(sampler.frame_rate);
    let from = args.from.unwrap_or(sampler.from);
    let to = args.to.unwrap_or(sampler.to);

    info!(
        "sampling {} over {:?} at {} fps ({} -> {})",
        timing, duration, fps, from, to
    );

    let transition = Transition::new(timing, duration, from, to);
    for frame in transition.frames(fps) {
        println!(
            "{:>8.2} {:.4} {:.6}",
            frame.elapsed.as_secs_f64() * 1000.0,
            frame.progress,
            frame.value
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn explicit_config_must_exist() {
        let missing = std::env::temp_dir().join(format!("easel-missing-{}.json", std::process::id()));
        let err = read_config(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn explicit_config_must_parse() {
        let path = std::env::temp_dir().join(format!("easel-cli-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"sampler\": ").unwrap();
        let err = read_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));

        std::fs::write(&path, r#"{ "sampler": { "duration_ms": 900 } }"#).unwrap();
        let cfg = read_config(Some(path.clone())).unwrap();
        assert_eq!(cfg.sampler.duration_ms, 900);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn no_arguments_leaves_everything_unset() {
        let args = parse_args(argv(&[])).unwrap();
        assert!(args.config.is_none());
        assert!(args.timing.is_none());
        assert!(args.duration_ms.is_none());
        assert!(args.frame_rate.is_none());
        assert!(args.from.is_none());
        assert!(args.to.is_none());
    }

    #[test]
    fn parses_every_flag() {
        let args = parse_args(argv(&[
            "--config",
            "/etc/easel.json",
            "--timing",
            "cubic-bezier(0.2, 0.9, 0.3, 1)",
            "--duration",
            "450",
            "--fps",
            "120",
            "--from",
            "-2.5",
            "--to",
            "7",
        ]))
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/easel.json")));
        assert_eq!(args.timing.as_deref(), Some("cubic-bezier(0.2, 0.9, 0.3, 1)"));
        assert_eq!(args.duration_ms, Some(450));
        assert_eq!(args.frame_rate, Some(120));
        assert_eq!(args.from, Some(-2.5));
        assert_eq!(args.to, Some(7.0));
    }

    #[test]
    fn later_flags_override_earlier_ones() {
        let args = parse_args(argv(&["--fps", "30", "--fps", "24"])).unwrap();
        assert_eq!(args.frame_rate, Some(24));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse_args(argv(&["--timing", "linear", "--fps"])).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue(ref flag) if flag == "--fps"));
    }

    #[test]
    fn invalid_number_is_reported() {
        let err = parse_args(argv(&["--duration", "abc"])).unwrap_err();
        match err {
            ArgsError::InvalidValue { flag, value } => {
                assert_eq!(flag, "--duration");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(matches!(
            parse_args(argv(&["--duration", "-5"])),
            Err(ArgsError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_args(argv(&["--from", "one"])),
            Err(ArgsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn unknown_flag_is_reported() {
        let err = parse_args(argv(&["--fps", "60", "--speed", "2"])).unwrap_err();
        assert!(matches!(err, ArgsError::Unknown(ref flag) if flag == "--speed"));
        assert_eq!(err.to_string(), "unknown argument: --speed");
    }
}
