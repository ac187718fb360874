use screen_grid::aspect::format_image_size;
use screen_grid::config::{load_config, BoundsToolConfig};
use screen_grid::diagnostics::{BoundsReport, TemplateReport};
use screen_grid::geometry::Rectangle;
use screen_grid::image::draw::draw_rectangle;
use screen_grid::image::io::{load_rgb_image, save_rgb_png, write_json_file};
use screen_grid::image::PixelBuffer;
use screen_grid::template::{TemplateMatcher, TemplateSet};
use screen_grid::BoundsDetector;
use serde::Serialize;
use std::env;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoundsDemoSummary {
    input: String,
    width: usize,
    height: usize,
    /// Final answer: template bounds when available, otherwise inner bounds.
    bounds: Option<Rectangle>,
    bounds_label: Option<String>,
    inner_bounds: BoundsReport,
    templates: Option<TemplateReport>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: BoundsToolConfig = load_config(Path::new(&config_path))?;

    let capture = load_rgb_image(&config.input).map_err(|e| e.to_string())?;
    let inner_bounds = BoundsDetector::new(config.bounds.clone()).detect_with_report(&capture);

    let templates = if config.templates.is_empty() {
        None
    } else {
        let set = TemplateSet::load(&config.templates).map_err(|e| e.to_string())?;
        Some(TemplateMatcher::from_set(set).find_rendered_image_borders_with_report(&capture))
    };

    let bounds = templates
        .as_ref()
        .and_then(|t| t.bounds)
        .or(inner_bounds.bounds);
    let summary = BoundsDemoSummary {
        input: config.input.display().to_string(),
        width: capture.width(),
        height: capture.height(),
        bounds,
        bounds_label: bounds.map(|b| format_image_size(b.width as u32, b.height as u32)),
        inner_bounds,
        templates,
    };

    write_json_file(&config.output.report_json, &summary).map_err(|e| e.to_string())?;
    println!("Saved report to {}", config.output.report_json.display());

    if let Some(path) = &config.output.annotated_image {
        let mut rgb = capture.to_rgb_image();
        if let Some(b) = &bounds {
            draw_rectangle(&mut rgb, b, image::Rgb([255, 0, 0]));
        }
        save_rgb_png(&PixelBuffer::from_rgb_image(&rgb), path).map_err(|e| e.to_string())?;
        println!("Saved annotated image to {}", path.display());
    }

    match &summary.bounds_label {
        Some(label) => println!("Picture: {label}"),
        None => println!("No picture found"),
    }
    Ok(())
}

fn usage() -> String {
    "Usage: bounds_demo <config.json>".to_string()
}
