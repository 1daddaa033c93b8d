use facelight_geom::{Axis, BoundsError, CellPos, Face, FractionalBounds, Rgb};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn full_bounds_span_every_axis() {
    let b = FractionalBounds::FULL;
    assert!(b.is_full());
    for a in Axis::ALL {
        assert_eq!(b.min(a), 0.0);
        assert_eq!(b.max(a), 1.0);
    }
    assert_eq!(FractionalBounds::default(), b);
}

#[test]
fn slab_bounds_are_partial_on_one_axis() {
    let slab = FractionalBounds::new([0.0, 0.0, 0.0], [1.0, 0.5, 1.0]).unwrap();
    assert!(!slab.is_full());
    assert!(slab.spans_full(Axis::X));
    assert!(!slab.spans_full(Axis::Y));
    assert!(slab.spans_full(Axis::Z));
}

#[test]
fn rejects_out_of_range() {
    let err = FractionalBounds::new([0.0, -0.1, 0.0], [1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, BoundsError::OutOfRange { axis: Axis::Y, .. }));

    let err = FractionalBounds::new([0.0, 0.0, 0.0], [1.0, 1.0, f32::NAN]).unwrap_err();
    assert!(matches!(err, BoundsError::OutOfRange { axis: Axis::Z, .. }));
}

#[test]
fn rejects_inverted() {
    let err = FractionalBounds::new([0.75, 0.0, 0.0], [0.25, 1.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        BoundsError::Inverted {
            axis: Axis::X,
            min: 0.75,
            max: 0.25
        }
    );
    assert!(err.to_string().contains("inverted"));
}

#[test]
fn degenerate_point_is_valid() {
    let p = FractionalBounds::new([0.5; 3], [0.5; 3]).unwrap();
    assert_eq!(p.min(Axis::X), p.max(Axis::X));
}

#[test]
fn cell_offsets() {
    let c = CellPos::new(3, -2, 7);
    assert_eq!(c.offset(Axis::Y, 5), CellPos::new(3, 3, 7));
    assert_eq!(c.step(Face::NegX), CellPos::new(2, -2, 7));
    assert_eq!(c.step(Face::PosZ).get(Axis::Z), 8);
    assert_eq!(CellPos::from((1, 2, 3)), CellPos::new(1, 2, 3));
}

#[test]
fn rgb_ops() {
    let a = Rgb::new(0.5, 1.0, 0.25);
    let b = Rgb::new(0.5, 0.5, 1.0);
    let m = a * b;
    assert!(approx_eq(m.r, 0.25, 1e-6));
    assert!(approx_eq(m.g, 0.5, 1e-6));
    assert!(approx_eq(m.b, 0.25, 1e-6));
    let s = a * 2.0;
    assert!(approx_eq(s.g, 2.0, 1e-6));
    assert_eq!(s.to_rgb8(), [255, 255, 128]);
}
