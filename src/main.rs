use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use facelight_color::VoxelLighter;
use facelight_geom::{CellPos, Face};
use facelight_lighting::ClassicMixer;
use facelight_lighting::batch::light_cells_par;

mod report;
mod scene;

use scene::Scene;

#[derive(Parser, Debug)]
#[command(name = "facelight")]
#[command(about = "Light and color the faces of one voxel from a scene file", long_about = None)]
struct Args {
    /// Scene description (TOML)
    #[arg(long)]
    scene: PathBuf,

    /// Voxel to light as x,y,z; defaults to the scene's cell
    #[arg(long, value_parser = parse_cell, allow_hyphen_values = true)]
    cell: Option<CellPos>,

    /// Face to report: neg-y, pos-y, neg-z, pos-z, neg-x, pos-x or all
    #[arg(long, default_value = "all")]
    face: String,

    /// Force the red/cyan stereo filter on
    #[arg(long)]
    stereo: bool,

    /// Light every grid cell in parallel and print per-face AO means
    #[arg(long)]
    region: bool,
}

fn parse_cell(s: &str) -> Result<CellPos, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{s}'"));
    }
    let mut v = [0i32; 3];
    for (slot, p) in v.iter_mut().zip(&parts) {
        *slot = p.parse().map_err(|e| format!("bad coordinate '{p}': {e}"))?;
    }
    Ok(CellPos::new(v[0], v[1], v[2]))
}

fn parse_faces(s: &str) -> Result<Vec<Face>, String> {
    if s == "all" {
        return Ok(Face::ALL.to_vec());
    }
    s.split(',')
        .map(|name| Face::from_name(name.trim()).ok_or_else(|| format!("unknown face '{name}'")))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut scene = Scene::from_path(&args.scene)?;
    if let Some(cell) = args.cell {
        scene.cell = cell;
    }
    if args.stereo {
        scene.settings.stereo = true;
    }
    let faces = parse_faces(&args.face)?;
    log::info!(
        target: "events",
        "scene {}: block '{}' at {:?}, bounds {:?}",
        args.scene.display(),
        scene.block_name,
        scene.cell,
        scene.bounds
    );

    if args.region {
        let cells = scene.all_cells();
        log::info!(
            target: "events",
            "lighting {:?} cells from {:?}",
            scene.grid.dims(),
            scene.grid.origin()
        );
        let lit = light_cells_par(&scene.grid, &ClassicMixer, &scene.settings, &cells);
        print!("{}", report::region_summary(&lit));
        return Ok(());
    }

    let mut lighter =
        VoxelLighter::new(&scene.grid, &ClassicMixer, &scene.palette, &scene.settings);
    lighter.with_overrides(scene.overrides, |lighter| {
        for face in faces {
            let lit = lighter.light_face(face, scene.cell, scene.bounds);
            let color = lighter.color_face(&scene.request(face));
            print!("{}", report::face_report(&lit, &color));
        }
    });
    Ok(())
}
