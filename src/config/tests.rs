use super::*;
use crate::geometry::Rotation;
use crate::grid::GridType;
use std::path::PathBuf;

#[test]
fn bounds_tool_config_fills_defaults() {
    let cfg: BoundsToolConfig = serde_json::from_str(
        r#"{
            "input": "shot.png",
            "templates": { "top_left": ["a.png", "b.png"] },
            "output": { "report_json": "out/report.json" }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.input, PathBuf::from("shot.png"));
    assert_eq!(cfg.bounds, BoundsParams::default());
    assert_eq!(cfg.templates.top_left.len(), 2);
    assert!(cfg.templates.is_empty());
    assert!(cfg.output.annotated_image.is_none());
}

#[test]
fn grid_render_config_parses_grid_names() {
    let cfg: GridRenderConfig = serde_json::from_str(
        r#"{ "width": 32, "grids": ["Thirds", "GoldenSpiralZoomed"], "rotation": "R90" }"#,
    )
    .unwrap();
    assert_eq!(cfg.width, 32);
    assert_eq!(cfg.height, 64);
    assert_eq!(cfg.rotation, Rotation::R90);
    assert_eq!(cfg.selected_grids(), vec![GridType::Thirds, GridType::GoldenSpiralZoomed]);
}

#[test]
fn empty_grid_list_selects_every_construction() {
    let cfg = GridRenderConfig::default();
    let grids = cfg.selected_grids();
    assert_eq!(grids.len(), 19);
    assert!(!grids.contains(&GridType::None));
    assert!(!grids.contains(&GridType::Armature14Line));
}

#[test]
fn snap_params_defaults() {
    let p: SnapParams = serde_json::from_str("{}").unwrap();
    assert_eq!(p, SnapParams::default());
    assert_eq!(p.min_width, 150.0);
    assert_eq!(p.min_height, 50.0);
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = load_config::<GridRenderConfig>(std::path::Path::new("/nonexistent/cfg.json")).unwrap_err();
    assert!(err.contains("/nonexistent/cfg.json"), "{err}");
}
