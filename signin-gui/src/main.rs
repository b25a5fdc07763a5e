#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size};
use tracing::error;

use signin_ui::{component::text, font, theme};

use signin_gui::{config::Config, dir::SigninDirectory, gui::GUI, logger::parse_log_level, VERSION};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(SigninDirectory),
    ConfigPath(PathBuf),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: signin [OPTIONS]

Options:
    --datadir <PATH>    Path of the signin data directory
    --config <PATH>     Path of the configuration file (default: <datadir>/signin.toml)
    -v, --version       Display signin version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "--datadir" {
            if let Some(a) = args.next() {
                res.push(Arg::DatadirPath(SigninDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--config" {
            if let Some(a) = args.next() {
                res.push(Arg::ConfigPath(PathBuf::from(a)));
            } else {
                return Err("missing arg to --config".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown option {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let (datadir, config_path) = match args.as_slice() {
        [] => (SigninDirectory::new_default()?, None),
        [Arg::DatadirPath(datadir)] => (datadir.clone(), None),
        [Arg::ConfigPath(path)] => (SigninDirectory::new_default()?, Some(path.clone())),
        [Arg::DatadirPath(datadir), Arg::ConfigPath(path)]
        | [Arg::ConfigPath(path), Arg::DatadirPath(datadir)] => {
            (datadir.clone(), Some(path.clone()))
        }
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    let config = Config::from_file(&config_path.unwrap_or_else(|| datadir.config_file()))?;
    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Signin".to_string()),
        antialiasing: true,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: config.window.width,
            height: config.window.height,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 700.0,
            height: 600.0,
        }),
        exit_on_close_request: false,
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((datadir, config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("signin --meth")).is_err());
        assert!(parse_args(args("signin --datadir")).is_err());
        assert!(parse_args(args("signin --config")).is_err());
        assert_eq!(Some(vec![]), parse_args(args("signin")).ok());
        assert_eq!(
            Some(vec![Arg::DatadirPath(SigninDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(args("signin --datadir hello")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ConfigPath(PathBuf::from("signin.toml")),
                Arg::DatadirPath(SigninDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(args("signin --config signin.toml --datadir hello")).ok()
        );
    }
}
