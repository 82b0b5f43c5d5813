use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log};
use serde::Serialize;

use crate::EPOCH;
use crate::io::ext_repr::ExtJob;

pub mod cli;
pub mod ext_repr;
pub mod output;

pub fn read_job(path: &Path) -> Result<ExtJob> {
    let file = File::open(path).context(format!("could not open job file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context(format!("could not parse job file: {}", path.display()))
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .context(format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, output)
        .context(format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_svg(svg: &str, path: &Path) -> Result<()> {
    fs::write(path, svg).context(format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
