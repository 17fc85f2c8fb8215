use std::path::PathBuf;

use clap::Parser;
use fin_loads::aero::FlightCondition;
use fin_loads::catalog;
use fin_loads::config::{load_fins, load_flight_conditions};
use fin_loads::export::report::{ConditionSummary, GeometrySummary, write_json};
use fin_loads::units::{kilograms_per_cubic_metre, metres_per_second};

#[derive(Parser)]
#[command(author, version, about = "Gust load report for a single rocket fin")]
struct Cli {
    /// Fin catalog (YAML file, TOML file, or directory of catalog files)
    #[arg(long, default_value = "configs/fins")]
    config: PathBuf,

    /// Fin name from the catalog (case-insensitive, defaults to the first entry)
    #[arg(long)]
    fin: Option<String>,

    /// Forward airspeed in m/s
    #[arg(long, required_unless_present = "condition")]
    airspeed: Option<f64>,

    /// Named flight condition from the conditions catalog
    #[arg(long, conflicts_with = "airspeed")]
    condition: Option<String>,

    /// Flight-condition catalog used with --condition
    #[arg(long, default_value = "configs/conditions.yaml")]
    conditions: PathBuf,

    /// Lateral gust speed in m/s (overrides the default or catalog value)
    #[arg(long, allow_hyphen_values = true)]
    gust: Option<f64>,

    /// Air density in kg/m³ (overrides the default or catalog value)
    #[arg(long)]
    density: Option<f64>,

    /// Optional JSON report path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fins = load_fins(&cli.config)?;
    let chosen = catalog::select(&fins, cli.fin.as_deref())?;
    let name = chosen.name.clone();
    let model = catalog::from_config(chosen)?;

    let mut condition = match (&cli.condition, cli.airspeed) {
        (Some(requested), _) => {
            let conditions = load_flight_conditions(&cli.conditions)?;
            catalog::condition_from_config(catalog::select_condition(&conditions, requested)?)
        }
        (None, Some(airspeed)) => FlightCondition::new(metres_per_second(airspeed)),
        (None, None) => anyhow::bail!("either --airspeed or --condition is required"),
    };
    if let Some(gust) = cli.gust {
        condition = condition.with_gust(metres_per_second(gust));
    }
    if let Some(rho) = cli.density {
        condition = condition.with_density(kilograms_per_cubic_metre(rho));
    }

    let geometry = GeometrySummary::from_model(&model);
    let summary = ConditionSummary::from(&condition);
    let loads = model.evaluate(&condition)?;

    println!("=== Fin Report: {} ===", name);
    if let Some(description) = &chosen.description {
        println!("{}", description);
    }
    println!(
        "Geometry        : c_r = {:.1} mm, c_t = {:.1} mm, b = {:.1} mm, r_t = {:.1} mm, sweep = {:.1} deg",
        geometry.root_chord_m * 1_000.0,
        geometry.tip_chord_m * 1_000.0,
        geometry.span_m * 1_000.0,
        geometry.tube_radius_m * 1_000.0,
        geometry.mid_chord_sweep_deg
    );
    println!(
        "Areas           : A_ref = {:.6} m², planform = {:.6} m², AR = {:.4}, K = {:.4}",
        geometry.reference_area_m2,
        geometry.planform_area_m2,
        geometry.aspect_ratio,
        geometry.body_interference_factor
    );
    println!(
        "Center of press.: y_cp = {:.2} mm from axis, x_cp = {:.2} mm aft of root LE",
        geometry.spanwise_cp_m * 1_000.0,
        geometry.chordwise_cp_m * 1_000.0
    );
    println!(
        "Condition       : V = {:.2} m/s, gust = {:.2} m/s, rho = {:.4} kg/m³",
        summary.airspeed_m_s, summary.gust_speed_m_s, summary.air_density_kg_m3
    );
    println!(
        "Flow            : Mach = {:.4}, q = {:.2} Pa, alpha = {:.4} rad, CN_alpha = {:.4}",
        loads.mach, loads.dynamic_pressure_pa, loads.angle_of_attack_rad, loads.cn_alpha
    );
    println!("Lift force      : {:.3} N", loads.lift_force_n);
    println!("Root moment     : {:.1} N·mm", loads.root_bending_moment_n_mm);
    println!("Tip load        : {:.3} N", loads.equivalent_tip_load_n);

    if let Some(path) = &cli.json {
        write_json(path, &name, &geometry, &summary, &loads)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
