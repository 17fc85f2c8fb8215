use clap::Parser;
use fin_loads::catalog;
use fin_loads::config::load_fins;
use fin_loads::render::render_planform;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a fin planform with its center of pressure to PNG"
)]
struct Cli {
    /// Fin catalog (YAML file, TOML file, or directory of catalog files)
    #[arg(long, default_value = "configs/fins")]
    config: PathBuf,
    /// Fin name from the catalog (defaults to the first entry)
    #[arg(long)]
    fin: Option<String>,
    #[arg(long, default_value = "artifacts/fin.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fins = load_fins(&cli.config)?;
    let (name, model) = catalog::select_model(&fins, cli.fin.as_deref())?;

    let outline = model.planform_outline();
    let (ycp, zcp) = outline.center_of_pressure;
    render_planform(
        &outline,
        &format!("{name} planform"),
        &cli.output,
        cli.width,
        cli.height,
    )?;

    println!(
        "Rendered {} to {} (CP at radial {:.4} m, longitudinal {:.4} m)",
        name,
        cli.output.display(),
        ycp,
        zcp
    );
    Ok(())
}
