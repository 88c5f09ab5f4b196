//! SVG rendering of floor-plan scenes

use crate::scene::Scene;

/// Spacing of the background grid, in pixels.
const GRID_STEP: f64 = 50.0;
const BORDER_WIDTH: f64 = 2.0;
const ROOM_STROKE: &str = "#8B6F47";
const CAPTION_HEIGHT: f64 = 24.0;

/// Render a scene as a standalone SVG document.
///
/// The caption sits in a strip above the padded canvas.
pub fn render_svg(scene: &Scene) -> String {
    let (canvas_w, canvas_h) = scene.canvas_size();
    let total_h = canvas_h + CAPTION_HEIGHT;
    let mut lines = Vec::new();

    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        fmt_num(canvas_w),
        fmt_num(total_h),
        fmt_num(canvas_w),
        fmt_num(total_h)
    ));
    lines.push(format!(
        r#"  <text x="{}" y="16" text-anchor="middle" font-family="sans-serif" font-size="14" font-weight="600" fill="{}">{}</text>"#,
        fmt_num(canvas_w / 2.0),
        ROOM_STROKE,
        escape(&scene.dimension_caption())
    ));
    lines.push(format!(r#"  <g transform="translate(0 {})">"#, fmt_num(CAPTION_HEIGHT)));
    lines.push(format!(
        r#"    <rect x="0" y="0" width="{}" height="{}" rx="8" fill="white" stroke="{}" stroke-width="4"/>"#,
        fmt_num(canvas_w),
        fmt_num(canvas_h),
        ROOM_STROKE
    ));
    push_grid(&mut lines, canvas_w, canvas_h);

    for item in &scene.items {
        let rect = scene.canvas_rect(item);
        let cx = rect.left + rect.width / 2.0;
        let cy = rect.top + rect.height / 2.0;
        lines.push(r#"    <g class="furniture">"#.to_string());
        lines.push(format!("      <title>{}</title>", escape(&item.tooltip())));
        lines.push(format!(
            r#"      <rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(rect.left),
            fmt_num(rect.top),
            fmt_num(rect.width),
            fmt_num(rect.height),
            item.appearance.fill,
            item.appearance.border().to_css_rgb(),
            fmt_num(BORDER_WIDTH)
        ));
        lines.push(format!(
            r#"      <text x="{}" y="{}" text-anchor="middle" font-size="20">{}</text>"#,
            fmt_num(cx),
            fmt_num(cy),
            escape(&item.appearance.icon)
        ));
        lines.push(format!(
            r#"      <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="11" font-weight="600" fill="white">{}</text>"#,
            fmt_num(cx),
            fmt_num(cy + 16.0),
            escape(&item.label)
        ));
        lines.push("    </g>".to_string());
    }

    lines.push("  </g>".to_string());
    lines.push("</svg>".to_string());

    let mut svg = lines.join("\n");
    svg.push('\n');
    svg
}

fn push_grid(lines: &mut Vec<String>, width: f64, height: f64) {
    lines.push(r#"    <g stroke="rgb(200, 200, 200)" stroke-opacity="0.25" stroke-width="1">"#.to_string());
    let mut x = GRID_STEP;
    while x < width {
        lines.push(format!(r#"      <line x1="{0}" y1="0" x2="{0}" y2="{1}"/>"#, fmt_num(x), fmt_num(height)));
        x += GRID_STEP;
    }
    let mut y = GRID_STEP;
    while y < height {
        lines.push(format!(r#"      <line x1="0" y1="{0}" x2="{1}" y2="{0}"/>"#, fmt_num(y), fmt_num(width)));
        y += GRID_STEP;
    }
    lines.push("    </g>".to_string());
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
