//! SVG rendering of polygons, one `<path>` per value.

use crate::geometry::Rectangle;
use crate::polygon::Polygon;
use std::io;

fn svg_lines<'p, V, I, S>(bounds: &Rectangle, polygons: I, style: S) -> Vec<String>
where
    I: IntoIterator<Item = (V, &'p Polygon)>,
    S: Fn(&V) -> String,
{
    let mut lines = vec![format!(
        r#"<svg width="{}" height="{}">"#,
        bounds.width(),
        bounds.height(),
    )];
    lines.extend(polygons.into_iter().map(|(value, polygon)| {
        format!(
            r#"<path d="{}" style="{}" />"#,
            polygon.to_svg_path_string(),
            style(&value),
        )
    }));
    lines.push(String::from("</svg>"));
    lines
}

/// Writes an SVG document sized after `bounds`, with one path per polygon in
/// iteration order. Lines are separated by `\n`, with no trailing newline.
pub fn write_svg<'p, W, V, I, S>(mut w: W, bounds: &Rectangle, polygons: I, style: S) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = (V, &'p Polygon)>,
    S: Fn(&V) -> String,
{
    for (i, line) in svg_lines(bounds, polygons, style).iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        write!(w, "{line}")?;
    }
    Ok(())
}

/// Same as [write_svg], into a string.
///
/// ```rust
/// use rectiles::Polygon;
/// use rectiles::Rectangle;
///
/// let bounds = Rectangle::new(0.0, 0.0, 1.0, 2.0);
/// let polygon = Polygon::from_rectangle(&bounds);
/// let svg = rectiles::svg::to_svg_string(&bounds, [(0, &polygon)], |_| "fill: red".to_string());
///
/// assert_eq!(
///     svg,
///     "<svg width=\"1\" height=\"2\">\n\
///      <path d=\"M0,0 0,2 1,2 1,0 0,0\" style=\"fill: red\" />\n\
///      </svg>",
/// );
/// ```
pub fn to_svg_string<'p, V, I, S>(bounds: &Rectangle, polygons: I, style: S) -> String
where
    I: IntoIterator<Item = (V, &'p Polygon)>,
    S: Fn(&V) -> String,
{
    svg_lines(bounds, polygons, style).join("\n")
}
