use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use sheet_nest::Nester;
use snest::config::SnestConfig;
use snest::io::cli::Cli;
use snest::io::output::{ExtSolution, SnestOutput};
use snest::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SnestConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed SnestConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {:?}",
            args.solution_folder
        ))?;
    }

    let job = io::read_job(args.input_file.as_path())?;
    let parts = job.parts(&config.machine);
    info!(
        "[MAIN] job {:?}: {} part types, {} units",
        job.name,
        parts.len(),
        parts.iter().map(|p| p.quantity).sum::<usize>()
    );

    let mut rng = match job.options.seed.or(config.prng_seed) {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let nester = Nester::new(config.machine, config.genetic).with_svg_options(config.svg_draw_options);
    let result = nester
        .nest_with_rng(&parts, &job.options, &mut rng)
        .context(format!("could not nest job {:?}", job.name))?;
    let cut_path = nester.cut_path(&result);

    info!(
        "[MAIN] {} sheet(s) of {}x{}, utilization {:.3}%, estimated cutting time {:.1}s",
        result.sheets_required,
        result.sheet.width,
        result.sheet.length,
        result.utilization,
        cut_path.estimated_time_seconds
    );

    {
        let output = SnestOutput {
            job,
            solution: ExtSolution::new(&result, &cut_path, EPOCH.elapsed().as_secs_f32()),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        io::write_svg(&result.layout_svg, Path::new(&svg_path))?;
    }

    Ok(())
}
