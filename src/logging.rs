use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level("wave_bomb", level)
        .with_utc_timestamps()
        .init()?;

    Ok(())
}
