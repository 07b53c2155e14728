use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE_PATH: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE_PATH, Default::default()).is_ok() {
        return;
    }
    if let Err(e) = init_fallback() {
        eprintln!("Logger initialization failed: {}", e);
    }
}

/// console logging to stderr, used when no config file is around
fn init_fallback() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(appender)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )?;
    log4rs::init_config(config)?;
    Ok(())
}
