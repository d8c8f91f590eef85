use std::time::Duration;

use env_logger::Env;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;

/// Route `log` output through a `MultiProgress` so it doesn't tear spinners.
pub fn init_logging() -> anyhow::Result<MultiProgress> {
    let env = Env::default().default_filter_or("info");
    let logger = env_logger::Builder::from_env(env).build();
    let level = logger.filter();
    let multi = MultiProgress::new();
    LogWrapper::new(multi.clone(), logger).try_init()?;
    log::set_max_level(level);
    Ok(multi)
}

pub fn spinner_style(name: &str) -> anyhow::Result<ProgressStyle> {
    Ok(ProgressStyle::with_template(&format!(
        "{{spinner:.green}} {{elapsed_precise}} {}: {{msg}}",
        name
    ))?)
}

/// Spinner shown while a blocking sink runs. Hidden when no `MultiProgress` is given.
pub fn spinner(multi: Option<&MultiProgress>, name: &str, msg: String) -> anyhow::Result<ProgressBar> {
    let bar = match multi {
        Some(multi) => multi.add(ProgressBar::new_spinner()),
        None => ProgressBar::hidden(),
    };
    bar.set_style(spinner_style(name)?);
    bar.set_message(msg);
    bar.enable_steady_tick(Duration::from_millis(120));
    Ok(bar)
}
