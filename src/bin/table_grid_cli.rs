use std::env;
use std::path::Path;
use table_grid::config::table::load_config;
use table_grid::image::io::{load_grayscale_image, read_json_file, write_json_file};
use table_grid::{Line, TableGridDetector, TableReport};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: table_grid_cli <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mask = load_grayscale_image(&config.edge_mask)?;
    let lines: Vec<Line> = read_json_file(&config.lines)?;

    let mut detector = TableGridDetector::new(config.params.clone());
    let mut report = detector
        .process(mask.as_view(), &lines)
        .map_err(|e| format!("Reconstruction failed: {e}"))?;
    if !config.output.include_samples {
        report.trace.filter.samples.clear();
    }

    print_text_summary(&report);

    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &report)?;
            println!("\nJSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }
    Ok(())
}

fn print_text_summary(report: &TableReport) {
    let trace = &report.trace;
    println!("Reconstruction summary");
    println!(
        "  input: {}x{} raw_lines={} edge_threshold={}",
        trace.input.width, trace.input.height, trace.input.raw_lines, trace.input.edge_threshold
    );
    println!(
        "  classify: horizontal={} vertical={} dropped={}",
        trace.classify.counts.horizontal, trace.classify.counts.vertical, trace.classify.dropped
    );
    println!(
        "  filter: kept horizontal={} vertical={} (tries={} expectation={:.2})",
        trace.filter.kept.horizontal,
        trace.filter.kept.vertical,
        trace.filter.try_count,
        trace.filter.expectation
    );
    println!(
        "  cluster: horizontal={} vertical={} (delta_rho={:.1})",
        trace.cluster.counts.horizontal, trace.cluster.counts.vertical, trace.cluster.delta_rho
    );
    println!(
        "  grid: {} rows x {} cols, xs={:?} ys={:?}",
        report.layout.rows(),
        report.layout.cols(),
        report.layout.xs,
        report.layout.ys
    );
    let stages: Vec<String> = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "\nTimings (ms): {} total={:.3}",
        stages.join(" "),
        trace.timings.total_ms
    );
}
