//! Scripted end-to-end demo: drives the full 14-point acquisition protocol
//! over a synthetic phantom and reports the measured implant volume.
use implant_analyzer::config::{load_config, RuntimeConfig};
use implant_analyzer::diagnostics::AnalysisReport;
use implant_analyzer::volume::io::{save_mask_slice_png, save_slice_png, write_json_file};
use implant_analyzer::volume::ScalarVolume;
use implant_analyzer::{
    AcquisitionParams, AnalysisOutput, IdleTask, SeedAcquisition, SessionHost,
};
use nalgebra::Point3;
use std::env;
use std::path::Path;
use std::sync::Arc;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Console host: prints what a GUI would do and queues idle tasks.
#[derive(Default)]
struct ConsoleHost {
    bounds: (f64, f64),
    idle: Vec<IdleTask>,
}

impl SessionHost for ConsoleHost {
    fn volume_bounds(&self) -> (f64, f64) {
        self.bounds
    }
    fn navigate_to(&mut self, depth_mm: f64) {
        println!("  [view] slice -> {depth_mm:.2} mm");
    }
    fn set_status_text(&mut self, text: &str) {
        if !text.is_empty() {
            println!("  [status] {text}");
        }
    }
    fn enter_placement_mode(&mut self) {
        println!("  [mode] placement armed");
    }
    fn exit_placement_mode(&mut self) {
        println!("  [mode] placement disarmed");
    }
    fn schedule_idle(&mut self, task: IdleTask) {
        self.idle.push(task);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => RuntimeConfig::default(),
    };

    let volume = Arc::new(implant_phantom());
    let mut host = ConsoleHost {
        bounds: volume.slice_bounds(),
        ..Default::default()
    };

    let mut machine = SeedAcquisition::new(AcquisitionParams::default());
    machine
        .start(&mut host, Arc::clone(&volume), config.locality)
        .map_err(|e| e.to_string())?;

    let mut output: Option<AnalysisOutput> = None;
    for point in protocol_points() {
        if let Some(outcome) = machine.on_point_placed(&mut host, point) {
            output = Some(outcome.map_err(|e| e.to_string())?);
        }
    }
    // Drain the idle queue the way a host event loop would.
    for task in std::mem::take(&mut host.idle) {
        machine.run_idle(&mut host, task);
    }

    let output = output.ok_or_else(|| "protocol did not complete".to_string())?;
    print_text_summary(&output);

    let report = AnalysisReport {
        measurement: output.measurement.clone(),
        timing: output.timing.clone(),
    };
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &volume, &output)?;
        println!("Debug artifacts written to {}", dir.display());
    }
    Ok(())
}

fn print_text_summary(output: &AnalysisOutput) {
    let m = &output.measurement;
    println!("Measurement summary");
    println!("  implant volume: {:.2} cc", m.volume_cc);
    println!("  foreground voxels: {}", m.foreground_voxels);
    println!("  latency_ms: {:.3}", m.latency_ms);
    println!("  engine_ms: {:.3}", output.segmentation.elapsed_ms);
    for stage in &output.timing.stages {
        println!("    {}: {:.3} ms", stage.label, stage.elapsed_ms);
    }
}

fn save_debug_artifacts(
    dir: &Path,
    volume: &ScalarVolume,
    output: &AnalysisOutput,
) -> Result<(), String> {
    // Axial slice through the implant centre, plus the matching mask slice.
    let z = volume.nz / 2;
    save_slice_png(volume, z, &dir.join(format!("volume_z{z}.png")))?;
    save_mask_slice_png(&output.segmentation.mask, z, &dir.join(format!("mask_z{z}.png")))?;
    Ok(())
}

/// Ellipsoid phantom shaped like the reference breast-implant data set:
/// semi-axes 44 × 32 × 59.8 mm (≈352.6 cc) centred at the canonical inside
/// click, bright against darker surroundings.
fn implant_phantom() -> ScalarVolume {
    let mut vol = ScalarVolume::new(
        100,
        60,
        117,
        [2.0, 2.0, 2.0],
        [0.0, -80.0, -100.45],
    );
    let center = Point3::new(90.54, -9.29, 16.15);
    let semi = [44.0, 32.0, 59.8];
    for z in 0..vol.nz {
        for y in 0..vol.ny {
            for x in 0..vol.nx {
                let d = vol.voxel_center(x, y, z) - center;
                let q = (d.x / semi[0]).powi(2) + (d.y / semi[1]).powi(2) + (d.z / semi[2]).powi(2);
                vol.set(x, y, z, if q <= 1.0 { 480.0 } else { 70.0 });
            }
        }
    }
    vol
}

/// The canonical 14-point acquisition sequence: one inside click, then 13
/// outside clicks over five slice strata.
fn protocol_points() -> Vec<Point3<f64>> {
    vec![
        Point3::new(90.54, -9.29, 16.15),
        Point3::new(103.62, 25.87, 16.15),
        Point3::new(152.69, 2.16, 16.15),
        Point3::new(86.45, -47.73, 16.15),
        Point3::new(16.94, 0.52, 16.15),
        Point3::new(70.09, 24.24, -77.13),
        Point3::new(83.18, -55.09, -42.15),
        Point3::new(155.96, -12.56, -42.15),
        Point3::new(71.73, 21.78, -42.15),
        Point3::new(83.99, 13.61, 74.45),
        Point3::new(132.24, -17.47, 74.45),
        Point3::new(43.92, -54.27, 74.45),
        Point3::new(79.09, -20.74, 109.43),
        Point3::new(81.54, -22.38, 109.43),
    ]
}
