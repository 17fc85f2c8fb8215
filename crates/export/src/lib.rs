//! Export helpers for CSV and JSON artifacts.

use std::fs;
use std::io;
use std::path::Path;

fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

pub mod sweep {
    use std::fs::File;
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use fin_aero::sweep::SweepSample;

    use crate::create_parent_dirs;

    const HEADER: &str = "fin,airspeed_m_s,mach,dynamic_pressure_pa,angle_of_attack_rad,cn_alpha,lift_force_n,root_bending_moment_n_mm,equivalent_tip_load_n";

    /// Open the sweep CSV destination. `-` streams to stdout so the table
    /// can be piped; anything else is a file whose directories are created.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        let sink: Box<dyn Write> = match path.to_str() {
            Some("-") => Box::new(io::stdout().lock()),
            _ => {
                create_parent_dirs(path)?;
                Box::new(File::create(path)?)
            }
        };
        Ok(Box::new(BufWriter::new(sink)))
    }

    /// Write the sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub fin: &'a str,
        pub sample: &'a SweepSample,
    }

    impl Record<'_> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let r = &self.sample.report;
            writeln!(
                writer,
                "{},{:.3},{:.6},{:.3},{:.6},{:.6},{:.6},{:.3},{:.6}",
                self.fin,
                self.sample.airspeed_m_s,
                r.mach,
                r.dynamic_pressure_pa,
                r.angle_of_attack_rad,
                r.cn_alpha,
                r.lift_force_n,
                r.root_bending_moment_n_mm,
                r.equivalent_tip_load_n,
            )
        }
    }

    /// Write a header followed by one row per sample.
    pub fn write_all(writer: &mut dyn Write, fin: &str, samples: &[SweepSample]) -> io::Result<()> {
        write_header(writer)?;
        for sample in samples {
            Record { fin, sample }.write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod report {
    use std::fs::File;
    use std::io;
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use fin_aero::{FinModel, LoadReport};
    use fin_core::units::{
        in_degrees, in_kilograms_per_cubic_metre, in_metres, in_metres_per_second,
        in_square_metres,
    };

    use crate::create_parent_dirs;

    /// Inputs echoed into the JSON report so it stands on its own.
    #[derive(Debug, Clone, Serialize)]
    pub struct GeometrySummary {
        pub root_chord_m: f64,
        pub tip_chord_m: f64,
        pub span_m: f64,
        pub tube_radius_m: f64,
        pub mid_chord_sweep_deg: f64,
        pub sonic_speed_m_s: f64,
        pub reference_area_m2: f64,
        pub planform_area_m2: f64,
        pub aspect_ratio: f64,
        pub body_interference_factor: f64,
        pub tip_sweep_length_m: f64,
        pub spanwise_cp_m: f64,
        pub chordwise_cp_m: f64,
    }

    impl GeometrySummary {
        pub fn from_model(model: &FinModel) -> Self {
            let cfg = model.config();
            Self {
                root_chord_m: in_metres(cfg.root_chord()),
                tip_chord_m: in_metres(cfg.tip_chord()),
                span_m: in_metres(cfg.span()),
                tube_radius_m: in_metres(cfg.tube_radius()),
                mid_chord_sweep_deg: in_degrees(cfg.mid_chord_sweep()),
                sonic_speed_m_s: in_metres_per_second(cfg.sonic_speed()),
                reference_area_m2: in_square_metres(model.reference_area()),
                planform_area_m2: in_square_metres(model.planform_area()),
                aspect_ratio: model.aspect_ratio(),
                body_interference_factor: model.body_interference_factor(),
                tip_sweep_length_m: in_metres(model.tip_sweep_length()),
                spanwise_cp_m: in_metres(model.spanwise_center_of_pressure()),
                chordwise_cp_m: in_metres(model.chordwise_center_of_pressure()),
            }
        }
    }

    /// Flight condition echoed into the report.
    #[derive(Debug, Clone, Serialize)]
    pub struct ConditionSummary {
        pub airspeed_m_s: f64,
        pub gust_speed_m_s: f64,
        pub air_density_kg_m3: f64,
    }

    impl From<&fin_aero::FlightCondition> for ConditionSummary {
        fn from(condition: &fin_aero::FlightCondition) -> Self {
            Self {
                airspeed_m_s: in_metres_per_second(condition.airspeed),
                gust_speed_m_s: in_metres_per_second(condition.gust_speed),
                air_density_kg_m3: in_kilograms_per_cubic_metre(condition.air_density),
            }
        }
    }

    #[derive(Serialize)]
    struct ReportSidecar<'a> {
        fin: &'a str,
        geometry: &'a GeometrySummary,
        condition: &'a ConditionSummary,
        loads: &'a LoadReport,
    }

    /// Write a pretty-printed JSON load report, creating parent directories.
    pub fn write_json(
        output: &Path,
        fin: &str,
        geometry: &GeometrySummary,
        condition: &ConditionSummary,
        loads: &LoadReport,
    ) -> io::Result<()> {
        create_parent_dirs(output)?;
        let sidecar = ReportSidecar {
            fin,
            geometry,
            condition,
            loads,
        };
        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fin_aero::sweep::airspeed_sweep;
    use fin_aero::{FinConfiguration, FinModel, FlightCondition};
    use fin_core::units::{kilograms_per_cubic_metre, metres, metres_per_second, radians};

    fn model() -> FinModel {
        FinModel::new(
            FinConfiguration::new(
                metres(0.2),
                metres(0.1),
                metres(0.12),
                metres(0.04),
                radians(0.0),
            )
            .expect("valid fin"),
        )
    }

    #[test]
    fn sweep_csv_has_header_and_rows() {
        let samples = airspeed_sweep(
            &model(),
            metres_per_second(50.0),
            metres_per_second(100.0),
            3,
            metres_per_second(9.0),
            kilograms_per_cubic_metre(1.225),
        )
        .expect("sweep");
        let mut buf: Vec<u8> = Vec::new();
        sweep::write_all(&mut buf, "Reference", &samples).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("fin,airspeed_m_s,mach"));
        assert!(lines[1].starts_with("Reference,50.000,"));
        assert_eq!(lines[1].split(',').count(), lines[0].split(',').count());
    }

    #[test]
    fn json_report_round_trips_through_serde() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/report.json");
        let m = model();
        let condition = FlightCondition::new(metres_per_second(50.0));
        let loads = m.evaluate(&condition).expect("loads");

        report::write_json(
            &path,
            "Reference",
            &report::GeometrySummary::from_model(&m),
            &(&condition).into(),
            &loads,
        )
        .expect("write json");

        let value: serde_json::Value =
            serde_json::from_reader(std::fs::File::open(&path).expect("open")).expect("json");
        assert_eq!(value["fin"], "Reference");
        assert_eq!(value["condition"]["gust_speed_m_s"], 9.0);
        assert_relative_eq!(
            value["loads"]["dynamic_pressure_pa"].as_f64().unwrap(),
            1531.25,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            value["geometry"]["aspect_ratio"].as_f64().unwrap(),
            m.aspect_ratio(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn sweep_writer_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out/deeper/sweep.csv");
        let samples = airspeed_sweep(
            &model(),
            metres_per_second(40.0),
            metres_per_second(60.0),
            2,
            metres_per_second(9.0),
            kilograms_per_cubic_metre(1.225),
        )
        .expect("sweep");
        {
            let mut writer = sweep::writer_for_path(&path).expect("writer");
            sweep::write_all(writer.as_mut(), "Reference", &samples).expect("write");
        }
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text.lines().count(), 3);
    }
}
