use neon_stylize::{AsciiGrid, AsciiLayout};

/// Plain text, one line per grid row, newline-terminated
pub fn grid_to_text(grid: &AsciiGrid) -> String {
    let mut text = String::with_capacity(grid.row_count() * (grid.columns() + 1));
    for y in 0..grid.row_count() {
        text.push_str(&grid.row_text(y));
        text.push('\n');
    }
    text
}

/// Standalone HTML page with the grid in a colored `<pre>` block
///
/// Font size is the grid's cell size and the line height the compact 0.6 em
/// the grid is laid out for, so the block matches the source dimensions.
pub fn grid_to_html(grid: &AsciiGrid) -> String {
    let layout = AsciiLayout::for_grid(grid);
    let (width, height) = layout.canvas_size(grid);
    let color = grid
        .rows()
        .first()
        .and_then(|row| row.first())
        .map_or([255, 255, 255, 255], |cell| cell.color);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n");
    html.push_str(&format!(
        "<body style=\"margin:0;background:{}\">\n",
        css_rgba(grid.background())
    ));
    html.push_str(&format!(
        "<pre style=\"margin:0;width:{width}px;height:{height}px;color:{};\
         font-family:monospace;font-size:{}px;line-height:{};letter-spacing:0\">\n",
        css_rgba(color),
        layout.font_size,
        layout.line_height,
    ));
    for y in 0..grid.row_count() {
        html.push_str(&escape_html(&grid.row_text(y)));
        html.push('\n');
    }
    html.push_str("</pre>\n</body>\n</html>\n");
    html
}

fn css_rgba([r, g, b, a]: [u8; 4]) -> String {
    format!("rgba({r},{g},{b},{:.3})", a as f32 / 255.0)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_stylize::{defaults_for, transform, Bitmap, Style};

    fn dark_grid() -> AsciiGrid {
        let mut settings = defaults_for(Style::Ascii);
        settings.midtones = 50.0;
        transform(&Bitmap::filled(60, 40, [0, 0, 0, 255]), &settings)
            .unwrap()
            .into_ascii()
            .unwrap()
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(grid_to_text(&dark_grid()), "@@@\n@@@\n");
    }

    #[test]
    fn test_html_block() {
        let html = grid_to_html(&dark_grid());
        assert!(html.contains("background:rgba(0,0,0,1.000)"));
        assert!(html.contains("color:rgba(255,255,255,1.000)"));
        assert!(html.contains("font-size:20px"));
        assert!(html.contains("width:36px;height:24px"));
        assert!(html.contains("@@@\n@@@\n</pre>"));
        assert!(html.contains("<body style=\"margin:0;background:rgba(0,0,0,1.000)\">\n<pre style="));
        assert!(html.contains("letter-spacing:0\">\n@@@"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("a<b>&c"), "a&lt;b&gt;&amp;c");
    }

    #[test]
    fn test_empty_grid() {
        let grid = transform(&Bitmap::filled(5, 5, [0, 0, 0, 255]), &defaults_for(Style::Ascii))
            .unwrap()
            .into_ascii()
            .unwrap();
        assert_eq!(grid_to_text(&grid), "");
        assert!(grid_to_html(&grid).contains("<pre"));
    }
}
