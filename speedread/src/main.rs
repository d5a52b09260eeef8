use std::{
    env,
    fs::{self, File},
    io::{self, Read},
    process,
};

use env_logger::{Env, Target};
use log::{info, warn};
use pace_core::{config, Mode, Settings};
use ui::app::App;

const DEFAULT_TEXT: &str = "Speed reading trains the eye to take in words without \
    stopping on each one. Pick a pace, press space, and let the words come to you. \
    Press question mark at any time to see the controls.";

fn main() {
    init_logging();

    // Accept optional text path, `-` for stdin, or fall back to the sample
    let args: Vec<String> = env::args().collect();
    let text = match read_input(args.get(1).map(String::as_str)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            process::exit(1);
        }
    };

    let settings = apply_env_overrides(
        Settings::load(),
        env::var("SPEEDREAD_WPM").ok(),
        env::var("SPEEDREAD_MODE").ok(),
    );
    info!("starting at {} wpm in {} mode", settings.wpm, settings.mode);

    let app = App::new(settings).with_text(&text);
    if let Err(e) = app.run() {
        eprintln!("Terminal error: {e}");
        process::exit(1);
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    let file = config::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        File::create(path).ok()
    });
    match file {
        Some(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        // The terminal belongs to the ui; without a log file there is nowhere to write.
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn read_input(arg: Option<&str>) -> io::Result<String> {
    match arg {
        None => Ok(DEFAULT_TEXT.to_string()),
        Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn apply_env_overrides(
    mut settings: Settings,
    wpm: Option<String>,
    mode: Option<String>,
) -> Settings {
    if let Some(raw) = wpm {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => settings.wpm = value,
            _ => warn!("ignoring SPEEDREAD_WPM={raw}"),
        }
    }
    if let Some(raw) = mode {
        match raw.parse::<Mode>() {
            Ok(value) => settings.mode = value,
            Err(e) => warn!("ignoring SPEEDREAD_MODE: {e}"),
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_replace_loaded_values() {
        let settings = apply_env_overrides(
            Settings::default(),
            Some(" 450 ".into()),
            Some("Single".into()),
        );
        assert_eq!(settings.wpm, 450.0);
        assert_eq!(settings.mode, Mode::Single);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let settings = apply_env_overrides(
            Settings::default(),
            Some("fast".into()),
            Some("diagonal".into()),
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_argument_uses_sample_text() {
        let text = read_input(None).expect("sample");
        assert!(text.starts_with("Speed reading"));
    }
}
