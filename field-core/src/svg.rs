use std::fmt;

use crate::{
    config::{Palette, Rgb},
    frame::{DrawCommand, Frame},
    mount::Surface,
};

/// Formats a [`Frame`] as a standalone SVG document.
///
/// Links go into one `<g>` layer and dots into another, after a single
/// background `<rect>`.
pub struct Svg<'a> {
    pub frame: &'a Frame,
    pub palette: &'a Palette,
}

struct Color(Rgb);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r},{g},{b})")
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.palette;
        let size = self.frame.commands.iter().find_map(|c| match c {
            DrawCommand::Background { size } => Some(*size),
            _ => None,
        });
        let (w, h) = size.map_or((0.0, 0.0), |s| (s.x, s.y));

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.2} {h:.2}" width="{w:.2}" height="{h:.2}">"#
        )?;
        if size.is_some() {
            writeln!(
                f,
                r#"  <rect x="0" y="0" width="{w:.2}" height="{h:.2}" fill="{}"/>"#,
                Color(p.background)
            )?;
        }

        writeln!(
            f,
            r#"  <g class="links" stroke="{}" stroke-width="{:.2}">"#,
            Color(p.link),
            p.link_width
        )?;
        for c in &self.frame.commands {
            if let DrawCommand::Line { from, to, opacity } = c {
                writeln!(
                    f,
                    r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-opacity="{:.2}"/>"#,
                    from.x, from.y, to.x, to.y, opacity
                )?;
            }
        }
        writeln!(f, "  </g>")?;

        writeln!(f, r#"  <g class="dots" fill="{}">"#, Color(p.dot))?;
        for c in &self.frame.commands {
            if let DrawCommand::Circle { center, radius } = c {
                writeln!(
                    f,
                    r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}"/>"#,
                    center.x, center.y, radius
                )?;
            }
        }
        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}

/// A surface that keeps the most recently presented frame as SVG text.
#[derive(Debug, Default)]
pub struct SvgSurface {
    pub palette: Palette,
    pub document: String,
    pub presented: u64,
}

impl SvgSurface {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }
}

impl Surface for SvgSurface {
    fn present(&mut self, frame: &Frame) {
        self.document = Svg {
            frame,
            palette: &self.palette,
        }
        .to_string();
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn sample_frame() -> Frame {
        Frame {
            commands: vec![
                DrawCommand::Background {
                    size: Vec2::new(200.0, 100.0),
                },
                DrawCommand::Line {
                    from: Vec2::new(10.0, 20.0),
                    to: Vec2::new(40.0, 20.0),
                    opacity: 0.75,
                },
                DrawCommand::Circle {
                    center: Vec2::new(10.0, 20.0),
                    radius: 2.2,
                },
            ],
        }
    }

    #[test]
    fn document_has_background_links_and_dots_layers() {
        let palette = Palette::default();
        let frame = sample_frame();

        let doc = Svg {
            frame: &frame,
            palette: &palette,
        }
        .to_string();

        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"viewBox="0 0 200.00 100.00""#));
        assert!(doc.contains(r#"<rect x="0" y="0" width="200.00" height="100.00" fill="rgb(11,16,32)"/>"#));
        assert!(doc.contains(
            r#"<line x1="10.00" y1="20.00" x2="40.00" y2="20.00" stroke-opacity="0.75"/>"#
        ));
        assert!(doc.contains(r#"<circle cx="10.00" cy="20.00" r="2.20"/>"#));
        assert!(doc.find(r#"class="links""#).unwrap() < doc.find(r#"class="dots""#).unwrap());
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn svg_surface_replaces_document_on_every_present() {
        let mut surface = SvgSurface::new(Palette::default());
        let frame = sample_frame();

        surface.present(&frame);
        surface.present(&Frame::default());

        assert_eq!(surface.presented, 2);
        assert!(!surface.document.contains("<circle"));
        assert!(!surface.document.contains("<rect"));
    }
}
