use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Initializes logging to standard error.
///
/// Standard output stays reserved for the confirmation line, so all log
/// records go to stderr. Called once at startup; the generator itself never
/// consults a config file or the environment.
///
/// # Errors
/// Returns an error if the config is rejected or a logger is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let encoder = PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}");
    let stderr = ConsoleAppender::builder()
        .encoder(Box::new(encoder))
        .target(Target::Stderr)
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
