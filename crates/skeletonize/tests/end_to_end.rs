mod common;

use common::{
    RecordingObserver, count_color, drawing, in_disk, in_dumbbell, in_plus, in_ring, in_y,
    init_logging, ink_mask,
};
use skeletonize::{
    BLACK, BLUE, Image, ImageCodec, LogObserver, NoopObserver, PipelineError, PngCodec, RED,
    SkeletonConfig, Skeletonizer, Stage, WHITE, count_components, thinned,
};

#[test]
fn plus_sign_is_annotated() {
    init_logging();
    let sk = Skeletonizer::default();
    let input = drawing(101, 101, in_plus(50, 10, 90));

    let out = sk.run(&input, &LogObserver).expect("pipeline runs");

    assert_eq!(out.annotated.dimensions(), (101, 101));
    assert_eq!(out.skeleton, ink_mask(101, 101, in_plus(50, 10, 90)));
    assert_eq!(out.features.branches, vec![(50, 50)]);
    assert_eq!(
        out.features.endpoints,
        vec![(50, 10), (10, 50), (90, 50), (50, 90)]
    );
    assert_eq!(out.thinning.passes, 0);
    assert_eq!(out.components, 1);

    assert_eq!(count_color(&out.annotated, BLUE), 29);
    assert_eq!(count_color(&out.annotated, RED), 4 * 29);
    assert_eq!(out.annotated.get(50, 30), Some(&BLACK));
    assert_eq!(out.annotated.get(0, 0), Some(&WHITE));
    assert_eq!(out.annotated.get(50, 50), Some(&BLUE));
    assert_eq!(out.annotated.get(90, 53), Some(&RED));
}

#[test]
fn plain_line_has_two_endpoints() {
    let sk = Skeletonizer::default();
    let input = drawing(40, 11, |x, y| y == 5 && (5..=34).contains(&x));

    let out = sk.run(&input, &NoopObserver).expect("pipeline runs");

    assert_eq!(out.features.endpoints, vec![(5, 5), (34, 5)]);
    assert!(out.features.branches.is_empty());
}

#[test]
fn y_junction_gets_one_branch() {
    let sk = Skeletonizer::default();
    let out = sk
        .run(&drawing(21, 21, in_y(10, 8, 6)), &NoopObserver)
        .expect("pipeline runs");

    // Closing fills the notch under the fork, so the junction sits one row up.
    assert_eq!(out.features.branches, vec![(10, 9)]);
    assert_eq!(out.features.endpoints, vec![(4, 4), (16, 4), (10, 18)]);
    assert_eq!(out.components, 1);
}

#[test]
fn thinning_preserves_topology() {
    let sk = Skeletonizer::default();

    let cases: Vec<(&str, usize, usize, Box<dyn Fn(usize, usize) -> bool>)> = vec![
        ("disk", 32, 32, Box::new(in_disk(16, 16, 8))),
        ("ring", 32, 32, Box::new(in_ring(16, 16, 10, 5))),
        ("dumbbell", 48, 24, Box::new(in_dumbbell(48, 24, 5, 22, 3))),
        (
            "two disks",
            40,
            20,
            Box::new(|x: usize, y: usize| in_disk(10, 10, 5)(x, y) || in_disk(29, 10, 5)(x, y)),
        ),
    ];

    for (name, w, h, ink) in cases {
        let before = count_components(&ink_mask(w, h, &ink));
        let out = sk.run(&drawing(w, h, &ink), &NoopObserver).expect(name);

        assert_eq!(out.components, before, "{name}");
        assert!(out.thinning.passes > 0, "{name}");

        let (again, report) = thinned(&out.skeleton);
        assert_eq!(report.passes, 0, "{name} is not a fixed point");
        assert_eq!(again, out.skeleton, "{name}");
    }
}

#[test]
fn closed_loop_has_no_markers() {
    let sk = Skeletonizer::default();
    let out = sk
        .run(&drawing(32, 32, in_ring(16, 16, 10, 5)), &NoopObserver)
        .expect("pipeline runs");

    assert!(out.features.is_empty());
    assert_eq!(count_color(&out.annotated, RED), 0);
    assert_eq!(count_color(&out.annotated, BLUE), 0);
    assert!(count_color(&out.annotated, BLACK) > 0);
}

#[test]
fn dumbbell_ends_are_marked() {
    let sk = Skeletonizer::default();
    let out = sk
        .run(&drawing(48, 24, in_dumbbell(48, 24, 5, 22, 3)), &NoopObserver)
        .expect("pipeline runs");

    assert_eq!(out.features.num_endpoints(), 2);
    assert_eq!(out.features.num_branches(), 0);
}

#[test]
fn stages_are_reported_in_order() {
    let sk = Skeletonizer::default();
    let observer = RecordingObserver::default();

    sk.run(&drawing(16, 16, in_disk(8, 8, 4)), &observer)
        .expect("pipeline runs");

    assert_eq!(
        observer.stages(),
        vec![
            Stage::Contrast,
            Stage::Grayscale,
            Stage::Binarize,
            Stage::Close,
            Stage::Thin,
            Stage::Classify,
            Stage::Render,
        ]
    );
    assert_eq!(*observer.thinning_reports.lock().expect("lock"), 1);
    assert!(observer.failures().is_empty());
}

#[test]
fn empty_image_fails_once_without_stages() {
    let sk = Skeletonizer::default();
    let observer = RecordingObserver::default();
    let empty = Image::from_vec(7, 0, Vec::new()).expect("valid empty image");

    let err = sk.run(&empty, &observer).unwrap_err();

    assert!(matches!(err, PipelineError::Dimension { width: 7, height: 0 }));
    assert_eq!(observer.failures(), vec![(Stage::Validate, 7, 0)]);
    assert!(observer.stages().is_empty());
}

#[test]
fn invalid_config_never_builds() {
    let cfg = SkeletonConfig {
        threshold_scale: -0.5,
        ..SkeletonConfig::default()
    };
    let err = Skeletonizer::new(cfg).unwrap_err();
    assert_eq!(err.stage(), Stage::Validate);
}

#[test]
fn config_reads_partial_json() {
    let cfg: SkeletonConfig =
        serde_json::from_str(r#"{ "marker_radius": 5, "luma": "bt601" }"#).expect("parses");
    assert_eq!(cfg.marker_radius, 5);
    assert_eq!(cfg.contrast, 1.5);
    assert_eq!(cfg.threshold_scale, 0.85);
    assert!(Skeletonizer::new(cfg).is_ok());
}

#[test]
fn png_bytes_in_png_bytes_out() {
    let sk = Skeletonizer::default();
    let input = drawing(101, 101, in_plus(50, 10, 90));
    let bytes = PngCodec.encode(&input).expect("encodes");

    let processed = sk
        .process_bytes(&bytes, &PngCodec, &NoopObserver)
        .expect("pipeline runs");

    assert_eq!(processed.content_type, "image/png");
    let decoded = PngCodec.decode(&processed.bytes).expect("output is a png");
    let direct = sk.run(&input, &NoopObserver).expect("pipeline runs");
    assert_eq!(decoded, direct.annotated);
}

#[test]
fn undecodable_bytes_report_decode_failure() {
    let sk = Skeletonizer::default();
    let observer = RecordingObserver::default();

    let err = sk
        .process_bytes(b"GIF89a but not really", &PngCodec, &observer)
        .unwrap_err();

    assert!(matches!(err, PipelineError::Decode(_)));
    assert_eq!(observer.failures(), vec![(Stage::Decode, 0, 0)]);
    assert!(observer.stages().is_empty());
}
