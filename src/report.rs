use std::fmt::Write;

use facelight_color::{FaceColor, VertexColors};
use facelight_geom::{Corner, Face, Rgb};
use facelight_lighting::FaceLighting;
use facelight_lighting::batch::CellLighting;

const CORNER_TAGS: [&str; 4] = ["TL", "BL", "BR", "TR"];

fn hex(c: Rgb) -> String {
    let [r, g, b] = c.to_rgb8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Human-readable block for one lit and colored face.
pub fn face_report(lit: &FaceLighting, color: &FaceColor) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "{:<6} brightness {} (sky {}, block {})",
        lit.face.name(),
        color.brightness,
        color.brightness.sky(),
        color.brightness.block()
    );
    if let Some(corners) = lit.corners {
        let _ = write!(s, "  ao    ");
        for c in Corner::ALL {
            let _ = write!(s, " {} {:.3}", CORNER_TAGS[c.index()], corners.ao_at(c));
        }
        let _ = writeln!(s);
        let _ = write!(s, "  light ");
        for c in Corner::ALL {
            let _ = write!(s, " {} {}", CORNER_TAGS[c.index()], corners.brightness_at(c));
        }
        let _ = writeln!(s);
    }
    match color.vertices {
        VertexColors::Corners(cs) => {
            let _ = write!(s, "  color ");
            for c in Corner::ALL {
                let _ = write!(s, " {} {}", CORNER_TAGS[c.index()], hex(cs[c.index()]));
            }
            let _ = writeln!(s);
        }
        VertexColors::Flat(c) => {
            let _ = writeln!(s, "  color  flat {}", hex(c));
        }
    }
    s
}

/// Mean corner AO per face across many cells.
pub fn region_summary(cells: &[CellLighting]) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{} cells", cells.len());
    for face in Face::ALL {
        let n = cells.len().max(1) as f32;
        let mean: f32 = cells
            .iter()
            .map(|c| c.face(face).ao().iter().sum::<f32>() / 4.0)
            .sum::<f32>()
            / n;
        let _ = writeln!(s, "  {:<6} mean ao {:.3}", face.name(), mean);
    }
    s
}
