use std::path::PathBuf;

use clap::Parser;
use fin_loads::aero::sweep::airspeed_sweep;
use fin_loads::catalog;
use fin_loads::config::load_fins;
use fin_loads::constants::{DEFAULT_GUST_SPEED_M_S, SEA_LEVEL_DENSITY_KG_M3};
use fin_loads::export::sweep::{write_all, writer_for_path};
use fin_loads::units::{kilograms_per_cubic_metre, metres_per_second};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Tabulate fin gust loads across an airspeed range (CSV)"
)]
struct Cli {
    /// Fin catalog (YAML file, TOML file, or directory of catalog files)
    #[arg(long, default_value = "configs/fins")]
    config: PathBuf,

    /// Fin name from the catalog (case-insensitive, defaults to the first entry)
    #[arg(long)]
    fin: Option<String>,

    /// First airspeed in m/s
    #[arg(long)]
    from: f64,

    /// Last airspeed in m/s (inclusive)
    #[arg(long)]
    to: f64,

    /// Number of evenly spaced samples
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Lateral gust speed in m/s
    #[arg(long, default_value_t = DEFAULT_GUST_SPEED_M_S, allow_hyphen_values = true)]
    gust: f64,

    /// Air density in kg/m³
    #[arg(long, default_value_t = SEA_LEVEL_DENSITY_KG_M3)]
    density: f64,

    /// CSV output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fins = load_fins(&cli.config)?;
    let (name, model) = catalog::select_model(&fins, cli.fin.as_deref())?;

    let samples = airspeed_sweep(
        &model,
        metres_per_second(cli.from),
        metres_per_second(cli.to),
        cli.steps,
        metres_per_second(cli.gust),
        kilograms_per_cubic_metre(cli.density),
    )?;

    let mut writer = writer_for_path(&cli.output)?;
    write_all(writer.as_mut(), &name, &samples)?;

    // Keep stdout clean when the CSV itself goes there.
    if cli.output.as_os_str() != "-" {
        let peak = samples.iter().max_by(|a, b| {
            a.report
                .equivalent_tip_load_n
                .total_cmp(&b.report.equivalent_tip_load_n)
        });
        if let Some(peak) = peak {
            println!(
                "Wrote {} samples for {} to {} (peak tip load {:.3} N at {:.1} m/s)",
                samples.len(),
                name,
                cli.output.display(),
                peak.report.equivalent_tip_load_n,
                peak.airspeed_m_s
            );
        }
    }

    Ok(())
}
