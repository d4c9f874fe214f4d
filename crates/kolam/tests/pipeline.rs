//! End-to-end pipeline tests: lattice → rulebook → PNG file.

use kolam::{
    generate_paths, generate_to_file, list_rule_names, Error, Lattice, LatticeError, RuleError,
    Style,
};

/// Helper to run the full pipeline into a temp directory and return the bytes.
fn generate_bytes(rows: u32, cols: u32, rule: &str, show_dots: bool) -> Vec<u8> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let dest = dir.path().join(format!("kolam_{rows}x{cols}_{rule}.png"));
    generate_to_file(rows, cols, 1.0, rule, &dest, show_dots, &Style::default())
        .unwrap_or_else(|e| panic!("pipeline failed for {rule} on {rows}x{cols}: {e}"));
    std::fs::read(&dest).expect("read output file")
}

#[test]
fn end_to_end_writes_a_png() {
    let bytes = generate_bytes(3, 3, "sikku_like", true);
    assert!(!bytes.is_empty());
    // PNG signature
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
}

#[test]
fn repeat_runs_are_byte_identical() {
    let a = generate_bytes(3, 3, "sikku_like", true);
    let b = generate_bytes(3, 3, "sikku_like", true);
    assert_eq!(a, b);
}

#[test]
fn every_registered_rule_renders() {
    for rule in list_rule_names() {
        let bytes = generate_bytes(4, 5, rule, true);
        assert!(!bytes.is_empty(), "{rule} produced an empty file");
    }
}

#[test]
fn rules_produce_distinct_images() {
    let a = generate_bytes(3, 3, "sikku_like", false);
    let b = generate_bytes(3, 3, "suzhi_weave", false);
    assert_ne!(a, b);
}

#[test]
fn single_dot_grid_renders_dots_only() {
    // 1x1 has zero edges: empty path set, but the dot marker still renders.
    let lat = Lattice::build(1, 1, 1.0).unwrap();
    let paths = generate_paths("sikku_like", &lat).unwrap();
    assert!(paths.is_empty());

    let bytes = generate_bytes(1, 1, "sikku_like", true);
    assert!(!bytes.is_empty());
}

#[test]
fn degenerate_line_grid_renders() {
    let bytes = generate_bytes(1, 5, "kambi_mirror", true);
    assert!(!bytes.is_empty());
}

#[test]
fn stage_errors_surface_unambiguously() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.png");
    let style = Style::default();

    let err = generate_to_file(0, 3, 1.0, "sikku_like", &dest, true, &style).unwrap_err();
    assert!(matches!(err, Error::Lattice(LatticeError::InvalidDimension { .. })));

    let err = generate_to_file(3, 3, -1.0, "sikku_like", &dest, true, &style).unwrap_err();
    assert!(matches!(err, Error::Lattice(LatticeError::InvalidSpacing { .. })));

    let err = generate_to_file(3, 3, 1.0, "nonexistent_rule", &dest, true, &style).unwrap_err();
    assert!(matches!(err, Error::Rule(RuleError::UnknownRule { .. })));

    // Failed stages leave no file behind.
    assert!(!dest.exists());
}

#[test]
fn empty_render_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.png");
    // 1x1 grid, dots disabled: nothing to draw.
    let err =
        generate_to_file(1, 1, 1.0, "sikku_like", &dest, false, &Style::default()).unwrap_err();
    assert!(matches!(err, Error::Render(kolam::RenderError::EmptyPathSet)));
}
