use std::fs;
use std::path::PathBuf;

use storm_days::api::{DEFAULT_GRAPH_HEIGHT_PX, DayGraphConfig, render_to};
use storm_days::core::{DayGraphData, Viewport};
use storm_days::ingest::parse_storms_json;
use storm_days::render::{CairoRenderer, Renderer};
use storm_days::telemetry::init_default_tracing;

const DEFAULT_OUTPUT_PATH: &str = "day_graph.png";
const DEFAULT_WIDTH_PX: u32 = 960;

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    width: u32,
    height: u32,
    zoom: f64,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            DayGraphConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DayGraphConfig::new(Viewport::new(args.width, args.height)),
    };
    config.validate().map_err(|err| err.to_string())?;

    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!(
            "failed to read storms `{}`: {err}",
            args.input_path.display()
        )
    })?;
    let storms = parse_storms_json(&raw).map_err(|err| err.to_string())?;
    let storm_count = storms.len();
    let data = DayGraphData::full_year(storms, config.season);

    let frame = render_to(&data, config.viewport.rect(), args.zoom, &config)
        .map_err(|err| err.to_string())?;
    let width = i32::try_from(config.viewport.width)
        .map_err(|_| format!("width {} is too large", config.viewport.width))?;
    let height = i32::try_from(config.viewport.height)
        .map_err(|_| format!("height {} is too large", config.viewport.height))?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    renderer.render(&frame).map_err(|err| err.to_string())?;
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    println!(
        "rendered {storm_count} storms (busiest day: {}) to {}",
        data.max_count(),
        args.output_path.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH_PX;
    let mut height = DEFAULT_GRAPH_HEIGHT_PX;
    let mut zoom = 0.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => input_path = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--output" => output_path = PathBuf::from(next_value(&mut args, &arg)?),
            "--config" => config_path = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--width" => width = parse_value(&next_value(&mut args, &arg)?, &arg)?,
            "--height" => height = parse_value(&next_value(&mut args, &arg)?, &arg)?,
            "--zoom" => zoom = parse_value(&next_value(&mut args, &arg)?, &arg)?,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    Ok(CliArgs {
        input_path,
        output_path,
        config_path,
        width,
        height,
        zoom,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_value<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value `{value}` for {flag}"))
}

fn usage_message() -> &'static str {
    "usage: render_day_graph_png --input <storms.json> [--output <png>] \
     [--config <config.json>] [--width <px>] [--height <px>] [--zoom <0..1>]"
}
