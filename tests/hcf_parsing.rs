use stylus::error::StylusError;
use stylus::geometry::{point_between, Point, PointDistance, Rectangle};
use stylus::han::Hcf;

const TEN: &str = "\
han:5341
stroke:(s1)0,50:100,50
stroke:(s2)50,0:50,100
stroke:(s3)10,90:c50,130:90,90
group:1,2
group:3
overlap:1,2,1
";

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("stylus_{}_{}", std::process::id(), name))
}

#[test]
fn test_minimal_stroke() {
    let hcf = Hcf::parse("stroke:(s1)0,0:10,0").unwrap();
    let stroke = &hcf.strokes[0];

    assert_eq!(
        stroke.forward,
        vec![PointDistance::new(0.0, 0.0, 0.0), PointDistance::new(10.0, 0.0, 1.0)]
    );
    assert_eq!(
        stroke.reverse,
        vec![PointDistance::new(10.0, 0.0, 0.0), PointDistance::new(0.0, 0.0, 1.0)]
    );
    assert_eq!(stroke.length, 10.0);
    assert_eq!(
        (stroke.bounds.top, stroke.bounds.left, stroke.bounds.bottom, stroke.bounds.right),
        (0.0, 0.0, 0.0, 10.0)
    );
}

#[test]
fn test_full_glyph() {
    let hcf = Hcf::parse(TEN).unwrap();

    assert_eq!(hcf.unicode, "5341");
    assert_eq!(hcf.strokes.len(), 3);
    assert_eq!(hcf.groups.len(), 2);
    assert_eq!(hcf.overlaps.len(), 1);

    assert_eq!(hcf.groups[0].strokes, vec![0, 1]);
    assert_eq!(hcf.groups[0].length, 200.0);
    assert_eq!(hcf.groups[0].center, Point::new(50.0, 50.0));
    assert_eq!(hcf.groups[0].bounds, Rectangle::new(100.0, 0.0, 0.0, 100.0));

    // The curve peaks at t = 1/2; only its steeper quarters bisect a third time
    let curve = &hcf.strokes[2];
    assert_eq!(curve.forward.len(), 7);
    assert_eq!(curve.forward[3].point(), Point::new(50.0, 110.0));
    assert_eq!(curve.bounds.top, 110.0);
    assert!(curve.length > 80.0);

    assert_eq!(hcf.bounds.top, 110.0);
    assert_eq!(hcf.bounds.bottom, 0.0);
    assert_eq!(hcf.minimum_stroke_length, curve.length);
    assert_eq!(hcf.length, 200.0 + curve.length);
}

#[test]
fn test_forward_and_reverse_mirror() {
    let hcf = Hcf::parse(TEN).unwrap();
    for stroke in &hcf.strokes {
        let n = stroke.forward.len();
        assert_eq!(stroke.reverse.len(), n);
        assert_eq!(stroke.forward[0].distance, 0.0);
        assert_eq!(stroke.forward[n - 1].distance, 1.0);
        for (f, r) in stroke.forward.iter().zip(stroke.reverse.iter().rev()) {
            assert_eq!(f.point(), r.point());
            assert!((f.distance + r.distance - 1.0).abs() < 1e-12);
        }
        for pair in stroke.forward.windows(2) {
            assert!(pair[1].distance >= pair[0].distance);
        }
    }

    let midway = point_between(&hcf.strokes[0].forward, 0.5).unwrap();
    assert_eq!(midway, Point::new(50.0, 50.0));
}

#[test]
fn test_control_point_errors() {
    for (text, line) in [
        ("stroke:(a)c0,0:10,0", 1),
        ("han:4E00\nstroke:(a)0,0:c5,5", 2),
        ("stroke:(a)0,0:c5,5:c6,6:10,0", 1),
    ] {
        match Hcf::parse(text) {
            Err(StylusError::Hcf { line: l, .. }) => assert_eq!(l, line, "{}", text),
            other => panic!("expected Hcf error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_load_from_file() {
    let path = temp_path("ten.hcf");
    std::fs::write(&path, TEN).unwrap();
    let hcf = Hcf::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(hcf, Hcf::parse(TEN).unwrap());

    match Hcf::load(temp_path("missing.hcf")) {
        Err(StylusError::HcfSource { path, .. }) => assert!(path.ends_with("missing.hcf")),
        other => panic!("expected HcfSource, got {:?}", other),
    }
}

#[test]
fn test_serializes_to_json() {
    let hcf = Hcf::parse(TEN).unwrap();
    let json = serde_json::to_value(&hcf).unwrap();
    assert_eq!(json["unicode"], "5341");
    assert_eq!(json["strokes"].as_array().unwrap().len(), 3);
    assert_eq!(json["overlaps"][0]["required"], true);
    assert_eq!(json["groups"][0]["strokes"][1], 1);
}
