use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::DeckLoader;
use tracing::Level;
use ui::{App, UiApp, build_app_context};

const DEFAULT_CONTENT: &str = "content.json";
const DEFAULT_TITLE: &str = "Slides";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidContent { raw: String },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidContent { raw } => write!(f, "invalid --content value: {raw:?}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    loader: Arc<DeckLoader>,
}

impl UiApp for DesktopApp {
    fn window_title(&self) -> String {
        self.title.clone()
    }

    fn deck_loader(&self) -> Arc<DeckLoader> {
        Arc::clone(&self.loader)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content <path|url>] [--title <text>] [--log <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content {DEFAULT_CONTENT}");
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!("  --log info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SLIDES_CONTENT, SLIDES_TITLE, SLIDES_LOG");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    content: String,
    title: String,
    log_level: Level,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut content = env("SLIDES_CONTENT").unwrap_or_else(|| DEFAULT_CONTENT.into());
        let mut title = env("SLIDES_TITLE").unwrap_or_else(|| DEFAULT_TITLE.into());
        let mut log_level = match env("SLIDES_LOG") {
            Some(raw) => parse_level(raw)?,
            None => Level::INFO,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => content = require_value(args, "--content")?,
                "--title" => title = require_value(args, "--title")?,
                "--log" => log_level = parse_level(require_value(args, "--log")?)?,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if content.trim().is_empty() {
            return Err(ArgsError::InvalidContent { raw: content });
        }

        Ok(Parsed::Run(Self {
            content: content.trim().to_string(),
            title,
            log_level,
        }))
    }
}

fn parse_level(raw: String) -> Result<Level, ArgsError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ArgsError::InvalidLogLevel { raw })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    dioxus::logger::init(args.log_level)?;
    tracing::info!(content = %args.content, "starting viewer");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        loader: Arc::new(DeckLoader::for_location(&args.content)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
