use crate::geometry::Line;
use std::fmt::Write;

/// Vector path data (`M x,y L x,y` per line, 4 decimals) for icon authoring.
pub fn render_path_data(lines: &[Line]) -> String {
    let mut out = String::with_capacity(lines.len() * 40);
    for (i, l) in lines.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "M{:.4},{:.4}L{:.4},{:.4}",
            l.p1.x, l.p1.y, l.p2.x, l.p2.y
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_line_as_move_and_line_to() {
        let lines = [
            Line::from_coords(0.0, 0.5, 1.0, 0.5),
            Line::from_coords(1.0 / 3.0, 0.0, 1.0 / 3.0, 1.0),
        ];
        assert_eq!(
            render_path_data(&lines),
            "M0.0000,0.5000L1.0000,0.5000 M0.3333,0.0000L0.3333,1.0000"
        );
        assert_eq!(render_path_data(&[]), "");
    }
}
