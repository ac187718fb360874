use screen_grid::config::{load_config, GridRenderConfig};
use screen_grid::geometry::Line;
use screen_grid::grid::{render_path_data, GridRequest};
use screen_grid::image::draw::draw_lines;
use screen_grid::image::io::write_json_file;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: GridRenderConfig = load_config(Path::new(&config_path))?;
    if config.width == 0 || config.height == 0 {
        return Err(format!("Icon size must be positive, got {}x{}", config.width, config.height));
    }

    fs::create_dir_all(&config.output.icon_dir).map_err(|e| {
        format!(
            "Failed to create icon dir {}: {e}",
            config.output.icon_dir.display()
        )
    })?;

    let (w, h) = (f64::from(config.width), f64::from(config.height));
    let mut paths = BTreeMap::new();
    for grid in config.selected_grids() {
        let mut request = GridRequest::new(grid, w, h);
        request.rotation = config.rotation;
        request.flip_horizontal = config.flip_horizontal;
        request.flip_vertical = config.flip_vertical;

        let lines = request.lines().map_err(|e| e.to_string())?;
        let mut icon = image::RgbImage::from_pixel(config.width, config.height, image::Rgb(config.background));
        draw_lines(&mut icon, &lines, image::Rgb(config.line_color));

        let icon_path = config.output.icon_dir.join(format!("{grid:?}.png"));
        icon.save(&icon_path)
            .map_err(|e| format!("Failed to save {}: {e}", icon_path.display()))?;

        // Path data stays normalized so icons can be re-scaled by consumers.
        let unit: Vec<Line> = lines
            .iter()
            .map(|l| Line::from_coords(l.p1.x / w, l.p1.y / h, l.p2.x / w, l.p2.y / h))
            .collect();
        paths.insert(format!("{grid:?}"), render_path_data(&unit));
        println!("{:>30}: {} lines -> {}", format!("{grid:?}"), lines.len(), icon_path.display());
    }

    write_json_file(&config.output.paths_json, &paths).map_err(|e| e.to_string())?;
    println!("Saved path data for {} grids to {}", paths.len(), config.output.paths_json.display());
    Ok(())
}

fn usage() -> String {
    "Usage: grid_render <config.json>".to_string()
}
