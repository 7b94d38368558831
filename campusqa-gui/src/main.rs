#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

use iced::Size;
use tracing::error;

use campusqa_ui::component::text;

use campusqa_gui::{
    config::{self, Config, ConfigError},
    dir::PortalDirectory,
    gui::GUI,
    logger::parse_log_level,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(PortalDirectory),
    CallbackUrl(String),
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
Usage: campusqa-gui [OPTIONS]

Options:
    --datadir <PATH>        Path of the campusqa datadir
    --callback-url <URL>    OAuth callback URL handed over by the browser
    -v, --version           Display campusqa-gui version
    -h, --help              Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(PortalDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--callback-url" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::CallbackUrl(a.clone()));
            } else {
                return Err("missing arg to --callback-url".into());
            }
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;

    let mut datadir: Option<PortalDirectory> = None;
    let mut callback_url: Option<String> = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(path) => datadir = Some(path),
            Arg::CallbackUrl(url) => callback_url = Some(url),
        }
    }
    let datadir = match datadir {
        Some(datadir) => datadir,
        None => PortalDirectory::new_default()?,
    };

    let config_path = datadir.path().join(config::DEFAULT_FILE_NAME);
    let config = match Config::from_file(&config_path) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => {
            return Err(format!("Failed to read configuration file: {}", e).into());
        }
    };

    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = iced::Settings {
        id: Some("CampusQA".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: campusqa_ui::font::REGULAR,
        ..iced::Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 1200.0,
            height: 800.0,
        },
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 1000.0,
            height: 650.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(GUI::theme)
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, datadir, log_level, callback_url)))
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

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["--datadir".into()]).is_err());
        assert!(parse_args(vec!["--callback-url".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(PortalDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "--datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(PortalDirectory::new(PathBuf::from("hello"))),
                Arg::CallbackUrl("campusqa://auth?token=abc".to_string()),
            ]),
            parse_args(
                "--datadir hello --callback-url campusqa://auth?token=abc"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::CallbackUrl("campusqa://auth".to_string()),
                Arg::DatadirPath(PortalDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(
                "--callback-url campusqa://auth --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
