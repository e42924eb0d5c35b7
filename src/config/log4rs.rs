use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Errors, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log::LevelFilter;

const PATTERN: &str = concat!(
"{T}#{X(worker)(-)}=>tickpool[",
env!("CARGO_PKG_VERSION"),
"]@{d(%Y-%m-%d %H:%M:%S)}=>{t}: {m}{n}"
);

/// A console logging config for programs embedding the pool.
/// Every line carries the thread name and, for workers, the worker index.
///
/// ```no_run
/// let config = tickpool::config::log4rs::config().unwrap();
/// log4rs::init_config(config).unwrap();
/// ```
pub fn config() -> Result<Config, Errors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let stdout = ConsoleAppender::builder()
        .target(Target::Stdout)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder()
            .appender("stderr")
            .additive(false)
            .build("app::error", LevelFilter::Error))
        .logger(Logger::builder()
            .appender("stdout")
            .additive(false)
            .build("tickpool", LevelFilter::Debug))
        .build(Root::builder()
            .appender("stdout")
            .build(LevelFilter::Info))
}
