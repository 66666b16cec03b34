use super::*;
use crate::animation::ease::Ease;
use kurbo::PathEl;

fn curve(n: f64) -> Hypocycloid {
    Hypocycloid::new(Point::new(0.0, -0.8), n).unwrap()
}

#[test]
fn validate_rejects_degenerate_options() {
    let opts = SampleOpts {
        samples: 1,
        ..SampleOpts::default()
    };
    assert!(opts.validate().is_err());

    let opts = SampleOpts {
        threads: Some(0),
        parallel: true,
        ..SampleOpts::default()
    };
    assert!(opts.validate().is_err());
    assert!(SampleOpts::default().validate().is_ok());
}

#[test]
fn samples_include_both_endpoints() {
    let c = curve(5.0);
    let opts = SampleOpts {
        samples: 11,
        ..SampleOpts::default()
    };
    let pts = sample_points(&c, &opts, &Ease::reference()).unwrap();
    assert_eq!(pts.len(), 11);
    assert_eq!(pts[0], c.point(0.0, &Ease::reference()));
    assert_eq!(pts[10], c.point(1.0, &Ease::reference()));
}

#[test]
fn parallel_matches_sequential() {
    let c = curve(3.0);
    let seq = SampleOpts {
        samples: 257,
        parallel: false,
        threads: None,
    };
    let par = SampleOpts {
        parallel: true,
        threads: Some(3),
        ..seq.clone()
    };
    let ease = Ease::reference();
    assert_eq!(
        sample_points(&c, &seq, &ease).unwrap(),
        sample_points(&c, &par, &ease).unwrap()
    );
}

#[test]
fn trace_path_ends_at_progress_point() {
    let c = curve(4.0);
    let opts = SampleOpts {
        samples: 33,
        ..SampleOpts::default()
    };
    let ease = Ease::Linear;
    let path = trace_path(&c, 0.4, &opts, &ease).unwrap();
    let els = path.elements();
    assert_eq!(els.len(), 33);
    assert!(matches!(els[0], PathEl::MoveTo(p) if p == c.point(0.0, &ease)));
    assert!(matches!(els[32], PathEl::LineTo(p) if p == c.point(0.4, &ease)));
}

#[test]
fn trace_path_clamps_and_rejects_nan() {
    let c = curve(4.0);
    let opts = SampleOpts::default();
    let over = trace_path(&c, 2.0, &opts, &Ease::Linear).unwrap();
    let full = trace_path(&c, 1.0, &opts, &Ease::Linear).unwrap();
    assert_eq!(over.elements(), full.elements());
    assert!(trace_path(&c, f64::NAN, &opts, &Ease::Linear).is_err());
}

#[test]
fn polyline_and_svg_output() {
    assert!(polyline(&[]).elements().is_empty());
    let path = polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 2.0)]);
    let d = path_svg(&path);
    assert!(d.starts_with('M'));
    assert!(d.contains('L'));
}
