use super::*;
use facelight_geom::{Axis, Corner};

const SKY: Brightness = Brightness::from_levels(15, 0);

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

// 5x5x5 grid centered on the origin, fully lit.
fn lit_grid() -> LightGrid {
    LightGrid::new(CellPos::new(-2, -2, -2), (5, 5, 5), 1.0, SKY)
}

fn light(grid: &LightGrid, face: Face, cell: CellPos, bounds: FractionalBounds) -> FaceLighting {
    compute_face_lighting(
        grid,
        &ClassicMixer,
        &LightingSettings::default(),
        face,
        cell,
        bounds,
    )
}

#[test]
fn mix_endpoints() {
    assert_eq!(mix(0.3, 0.9, 1.0), 0.3);
    assert_eq!(mix(0.3, 0.9, 0.0), 0.9);
    assert!(approx_eq(mix(0.0, 1.0, 0.25), 0.75, 1e-6));
}

#[test]
fn full_cube_uniform_light() {
    let grid = LightGrid::new(CellPos::new(-2, -2, -2), (5, 5, 5), 0.2, SKY);
    for face in Face::ALL {
        let fl = light(&grid, face, CellPos::ORIGIN, FractionalBounds::FULL);
        assert_eq!(fl.face, face);
        assert_eq!(fl.brightness, SKY);
        let corners = fl.corners.expect("ao enabled");
        for c in Corner::ALL {
            assert!(approx_eq(corners.ao_at(c), 0.2, 1e-6), "{face:?} {c:?}");
            assert_eq!(corners.brightness_at(c), SKY);
        }
    }
}

#[test]
fn ao_disabled_yields_flat_face() {
    let grid = lit_grid();
    let settings = LightingSettings {
        ambient_occlusion: false,
        ..LightingSettings::default()
    };
    let fl = compute_face_lighting(
        &grid,
        &ClassicMixer,
        &settings,
        Face::PosX,
        CellPos::ORIGIN,
        FractionalBounds::FULL,
    );
    assert!(fl.corners.is_none());
    assert_eq!(fl.brightness, SKY);
    assert_eq!(fl.ao(), [1.0; 4]);
}

#[test]
fn outer_cell_follows_inset() {
    let cell = CellPos::new(4, 5, 6);
    let full = FractionalBounds::FULL;
    for face in Face::ALL {
        assert_eq!(gather::outer_cell(face, cell, full), cell.step(face));
    }
    let slab = full.with_axis(Axis::Y, 0.0, 0.5).unwrap();
    assert_eq!(gather::outer_cell(Face::PosY, cell, slab), cell);
    assert_eq!(gather::outer_cell(Face::NegY, cell, slab), cell.step(Face::NegY));
    let raised = full.with_axis(Axis::Y, 0.25, 1.0).unwrap();
    assert_eq!(gather::outer_cell(Face::NegY, cell, raised), cell);
    assert_eq!(gather::outer_cell(Face::PosY, cell, raised), cell.step(Face::PosY));
}

#[test]
fn face_brightness_comes_from_outer_cell() {
    let mut grid = lit_grid();
    let above = Brightness::from_levels(7, 3);
    let own = Brightness::from_levels(2, 9);
    grid.set_brightness(CellPos::new(0, 1, 0), above);
    grid.set_brightness(CellPos::ORIGIN, own);

    let flush = light(&grid, Face::PosY, CellPos::ORIGIN, FractionalBounds::FULL);
    assert_eq!(flush.brightness, above);

    let slab = FractionalBounds::FULL.with_axis(Axis::Y, 0.0, 0.5).unwrap();
    let inset = light(&grid, Face::PosY, CellPos::ORIGIN, slab);
    assert_eq!(inset.brightness, own);
}

#[test]
fn box_filter_touches_only_its_corner() {
    let mut grid = lit_grid();
    // Diagonal of the (+X, +Z) quadrant above the voxel.
    grid.set_light(CellPos::new(1, 1, 1), 0.0);
    let fl = light(&grid, Face::PosY, CellPos::ORIGIN, FractionalBounds::FULL);
    let ao = fl.ao();
    assert!(approx_eq(ao[Corner::TopLeft.index()], 0.75, 1e-6));
    assert_eq!(ao[Corner::BottomLeft.index()], 1.0);
    assert_eq!(ao[Corner::BottomRight.index()], 1.0);
    assert_eq!(ao[Corner::TopRight.index()], 1.0);
}

#[test]
fn edge_neighbor_touches_two_corners() {
    let mut grid = lit_grid();
    grid.set_light(CellPos::new(1, 1, 0), 0.0);
    let ao = light(&grid, Face::PosY, CellPos::ORIGIN, FractionalBounds::FULL).ao();
    assert!(approx_eq(ao[Corner::TopLeft.index()], 0.75, 1e-6));
    assert!(approx_eq(ao[Corner::BottomLeft.index()], 0.75, 1e-6));
    assert_eq!(ao[Corner::BottomRight.index()], 1.0);
    assert_eq!(ao[Corner::TopRight.index()], 1.0);
}

// Darkened diagonal cell around the origin and the corner it must darken.
const DIAGONAL_CORNERS: [(Face, (i32, i32, i32), Corner); 24] = [
    (Face::NegY, (1, -1, 1), Corner::TopLeft),
    (Face::NegY, (1, -1, -1), Corner::BottomLeft),
    (Face::NegY, (-1, -1, -1), Corner::BottomRight),
    (Face::NegY, (-1, -1, 1), Corner::TopRight),
    (Face::PosY, (1, 1, 1), Corner::TopLeft),
    (Face::PosY, (1, 1, -1), Corner::BottomLeft),
    (Face::PosY, (-1, 1, -1), Corner::BottomRight),
    (Face::PosY, (-1, 1, 1), Corner::TopRight),
    (Face::NegZ, (1, 1, -1), Corner::TopLeft),
    (Face::NegZ, (1, -1, -1), Corner::BottomLeft),
    (Face::NegZ, (-1, -1, -1), Corner::BottomRight),
    (Face::NegZ, (-1, 1, -1), Corner::TopRight),
    (Face::PosZ, (-1, 1, 1), Corner::TopLeft),
    (Face::PosZ, (-1, -1, 1), Corner::BottomLeft),
    (Face::PosZ, (1, -1, 1), Corner::BottomRight),
    (Face::PosZ, (1, 1, 1), Corner::TopRight),
    (Face::NegX, (-1, 1, -1), Corner::TopLeft),
    (Face::NegX, (-1, -1, -1), Corner::BottomLeft),
    (Face::NegX, (-1, -1, 1), Corner::BottomRight),
    (Face::NegX, (-1, 1, 1), Corner::TopRight),
    (Face::PosX, (1, 1, 1), Corner::TopLeft),
    (Face::PosX, (1, -1, 1), Corner::BottomLeft),
    (Face::PosX, (1, -1, -1), Corner::BottomRight),
    (Face::PosX, (1, 1, -1), Corner::TopRight),
];

#[test]
fn diagonal_cells_darken_their_screen_corner() {
    for (face, diag, corner) in DIAGONAL_CORNERS {
        let mut grid = lit_grid();
        grid.set_light(CellPos::from(diag), 0.0);
        let ao = light(&grid, face, CellPos::ORIGIN, FractionalBounds::FULL).ao();
        for other in Corner::ALL {
            let expected = if other == corner { 0.75 } else { 1.0 };
            assert!(
                approx_eq(ao[other.index()], expected, 1e-6),
                "{face:?} with {diag:?} dark: expected {corner:?} darkened, got {ao:?}"
            );
        }
    }
}

#[test]
fn half_depth_x_face_remaps_corners() {
    let mut grid = lit_grid();
    grid.set_light(CellPos::new(1, 1, 1), 0.0);
    let front_half = FractionalBounds::FULL.with_axis(Axis::Z, 0.0, 0.5).unwrap();
    let ao = light(&grid, Face::PosX, CellPos::ORIGIN, front_half).ao();
    // TL sits at z = 0.5, halfway into the dark quadrant
    assert!(approx_eq(ao[Corner::TopLeft.index()], 0.875, 1e-6), "{ao:?}");
    assert!(approx_eq(ao[Corner::TopRight.index()], 1.0, 1e-6), "{ao:?}");
    assert!(approx_eq(ao[Corner::BottomLeft.index()], 1.0, 1e-6), "{ao:?}");
    assert!(approx_eq(ao[Corner::BottomRight.index()], 1.0, 1e-6), "{ao:?}");
}

#[test]
fn half_width_z_face_remaps_corners() {
    let mut grid = lit_grid();
    grid.set_light(CellPos::new(1, 1, -1), 0.0);
    let east_half = FractionalBounds::FULL.with_axis(Axis::X, 0.5, 1.0).unwrap();
    let ao = light(&grid, Face::NegZ, CellPos::ORIGIN, east_half).ao();
    // TL stays on the x = 1 edge; TR moves to x = 0.5
    assert!(approx_eq(ao[Corner::TopLeft.index()], 0.75, 1e-6), "{ao:?}");
    assert!(approx_eq(ao[Corner::TopRight.index()], 0.875, 1e-6), "{ao:?}");
    assert!(approx_eq(ao[Corner::BottomLeft.index()], 1.0, 1e-6), "{ao:?}");
    assert!(approx_eq(ao[Corner::BottomRight.index()], 1.0, 1e-6), "{ao:?}");
}

#[test]
fn flush_face_reads_adjacent_layer() {
    let mut grid = lit_grid();
    for x in -2..=2 {
        for z in -2..=2 {
            grid.set_light(CellPos::new(x, -1, z), 0.0);
        }
    }
    let ao = light(&grid, Face::NegY, CellPos::ORIGIN, FractionalBounds::FULL).ao();
    assert_eq!(ao, [0.0; 4]);
}

#[test]
fn inset_face_blends_toward_own_layer() {
    let mut grid = lit_grid();
    for x in -2..=2 {
        for z in -2..=2 {
            grid.set_light(CellPos::new(x, -1, z), 0.0);
        }
    }
    let raised = FractionalBounds::FULL.with_axis(Axis::Y, 0.5, 1.0).unwrap();
    assert_eq!(gather::wall_ratio(Face::NegY, raised), 0.5);
    let ao = light(&grid, Face::NegY, CellPos::ORIGIN, raised).ao();
    // own light 1.0 plus three neighbors halfway between 0.0 and 1.0
    for v in ao {
        assert!(approx_eq(v, 0.625, 1e-6), "{ao:?}");
    }
}

#[test]
fn narrow_shape_remaps_corners() {
    let mut grid = lit_grid();
    grid.set_light(CellPos::new(1, 1, 1), 0.0);
    let half_x = FractionalBounds::FULL.with_axis(Axis::X, 0.0, 0.5).unwrap();
    let fl = light(&grid, Face::PosY, CellPos::ORIGIN, half_x);
    let ao = fl.ao();
    // top-left now sits halfway between the darkened quadrant and its neighbor
    assert!(approx_eq(ao[Corner::TopLeft.index()], 0.875, 1e-6));
    assert_eq!(ao[Corner::TopRight.index()], 1.0);
    assert_eq!(ao[Corner::BottomLeft.index()], 1.0);
    assert_eq!(ao[Corner::BottomRight.index()], 1.0);
    let corners = fl.corners.unwrap();
    assert_eq!(corners.brightness, [SKY; 4]);
}

#[test]
fn quadrant_weights_are_exact_at_edges() {
    for (q, &(qb, qc)) in blend::QUADRANTS.iter().enumerate() {
        let u = if qb > 0 { 1.0 } else { 0.0 };
        let v = if qc > 0 { 1.0 } else { 0.0 };
        let w = blend::quadrant_weights(u, v);
        for (i, wi) in w.iter().enumerate() {
            assert_eq!(*wi, if i == q { 1.0 } else { 0.0 });
        }
    }
    let w = blend::quadrant_weights(0.3, 0.6);
    assert!(approx_eq(w.iter().sum::<f32>(), 1.0, 1e-6));
}

#[test]
fn classic_combine_substitutes_zero_neighbors() {
    let own = Brightness::from_parts(0x80, 0x40);
    let b = ClassicMixer.combine(Brightness::ZERO, Brightness::ZERO, Brightness::ZERO, own);
    assert_eq!(b, own);

    let bright = Brightness::from_parts(0xF0, 0x00);
    let b = ClassicMixer.combine(
        bright,
        bright,
        Brightness::ZERO,
        Brightness::from_parts(0x10, 0x00),
    );
    // (0xF0 + 0xF0 + 0x10 + 0x10) / 4
    assert_eq!(b.sky(), 0x80);
    assert_eq!(b.block(), 0);
}

#[test]
fn classic_mix_truncates_fields() {
    let a = Brightness::from_parts(200, 10);
    let b = Brightness::from_parts(101, 11);
    let m = ClassicMixer.mix([a, b, a, b], [0.25, 0.25, 0.25, 0.25]);
    assert_eq!(m.sky(), 150);
    assert_eq!(m.block(), 10);
    let one_hot = ClassicMixer.mix([a, b, a, b], [0.0, 1.0, 0.0, 0.0]);
    assert_eq!(one_hot, b);
}

#[test]
fn brightness_fields() {
    assert_eq!(Brightness::NORMAL.sky(), 0xFF);
    assert_eq!(Brightness::NORMAL.block(), 0xFF);
    assert_eq!(Brightness::MAX, Brightness::from_levels(15, 15));
    let avg = Brightness::average(
        Brightness::from_parts(0xF0, 0x11),
        Brightness::from_parts(0x10, 0x00),
    );
    assert_eq!(avg, Brightness::from_parts(0x80, 0x08));
    assert_eq!(format!("{}", Brightness::MAX), "0xf000f0");
}

#[test]
fn grid_falls_back_outside() {
    let grid = lit_grid().with_outside(0.5, Brightness::from_levels(3, 0));
    assert!(grid.contains(CellPos::new(2, 2, 2)));
    assert!(!grid.contains(CellPos::new(3, 0, 0)));
    assert_eq!(grid.sample_light(CellPos::new(0, -3, 0)), 0.5);
    assert_eq!(
        grid.sample_mixed_brightness(CellPos::new(100, 0, 0)),
        Brightness::from_levels(3, 0)
    );
    let mut g = lit_grid();
    assert!(!g.set_light(CellPos::new(-3, 0, 0), 0.1));
}

#[test]
fn grid_rejects_unaddressable_sizes() {
    assert_eq!(LightGrid::cell_count((4, 5, 6)), Some(120));
    assert_eq!(LightGrid::cell_count((usize::MAX, 2, 1)), None);
    assert!(matches!(
        LightGrid::try_new(CellPos::ORIGIN, (usize::MAX, 2, 2), 1.0, SKY),
        Err(GridSizeError::ExtentOverflow { axis: Axis::X, .. })
    ));
    assert!(matches!(
        LightGrid::try_new(CellPos::new(0, i32::MAX - 1, 0), (1, 4, 1), 1.0, SKY),
        Err(GridSizeError::ExtentOverflow { axis: Axis::Y, .. })
    ));
    let ok = LightGrid::try_new(CellPos::new(0, i32::MAX - 4, 0), (1, 4, 1), 1.0, SKY).unwrap();
    assert_eq!(ok.len(), 4);
}

#[test]
fn grid_cells_cover_the_box_once() {
    let grid = LightGrid::new(CellPos::new(-1, 2, 0), (2, 3, 4), 1.0, SKY);
    let cells: Vec<CellPos> = grid.cells().collect();
    assert_eq!(cells.len(), grid.len());
    assert_eq!(grid.dims(), (2, 3, 4));
    assert_eq!(cells[0], grid.origin());
    assert_eq!(cells[1], CellPos::new(0, 2, 0));
    assert_eq!(*cells.last().unwrap(), CellPos::new(0, 4, 3));
    assert!(cells.iter().all(|&c| grid.contains(c)));
}

#[test]
fn settings_from_toml() {
    let s = LightingSettings::from_toml_str("stereo = true\n").unwrap();
    assert!(s.stereo);
    assert!(s.ambient_occlusion);
    assert!(!s.raw_texture_override);
    assert!(LightingSettings::from_toml_str("stereo = 3").is_err());
    assert_eq!(LightingSettings::from_toml_str("").unwrap(), LightingSettings::default());
}

#[test]
fn batch_preserves_order() {
    let mut grid = lit_grid();
    grid.set_light(CellPos::new(1, 1, 1), 0.0);
    let cells = vec![
        (CellPos::ORIGIN, FractionalBounds::FULL),
        (CellPos::new(0, 0, 1), FractionalBounds::FULL),
        (CellPos::new(-1, 0, 0), FractionalBounds::FULL),
    ];
    let settings = LightingSettings::default();
    let out = batch::light_cells_par(&grid, &ClassicMixer, &settings, &cells);
    assert_eq!(out.len(), cells.len());
    for (lit, (cell, bounds)) in out.iter().zip(&cells) {
        assert_eq!(lit.cell, *cell);
        for face in Face::ALL {
            let expected =
                compute_face_lighting(&grid, &ClassicMixer, &settings, face, *cell, *bounds);
            assert_eq!(*lit.face(face), expected);
        }
    }

    let pool = batch::build_pool(2).unwrap();
    let pooled = batch::light_cells_in(&pool, &grid, &ClassicMixer, &settings, &cells);
    assert_eq!(pooled, out);
}
