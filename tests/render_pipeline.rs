//! Render-pipeline tests against a recording mock renderer (no OpenSCAD
//! install required).

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tenor_maker::{MakeError, MakeResult, PartCatalog, RenderRequest, Renderer};

/// Records every invocation; optionally fails the nth one (1-based).
#[derive(Default)]
struct RecordingRenderer {
    calls: RefCell<Vec<(usize, PathBuf, PathBuf)>>,
    fail_on_call: Option<usize>,
}

impl RecordingRenderer {
    fn failing_on(call: usize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    fn calls(&self) -> Vec<(usize, PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render_part(&self, model: &Path, index: usize, output: &Path) -> MakeResult<()> {
        self.calls
            .borrow_mut()
            .push((index, model.to_path_buf(), output.to_path_buf()));
        if self.fail_on_call == Some(self.calls.borrow().len()) {
            return Err(MakeError::RenderFailed {
                output: output.to_path_buf(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[test]
fn test_single_part_renders_once_with_catalog_index() {
    let catalog = PartCatalog::tenor();
    for (expected_index, part) in catalog.individual_parts() {
        let renderer = RecordingRenderer::default();
        let req = RenderRequest::new("models/tenor.scad").with_part(part);
        let rendered = req.execute(&catalog, &renderer).unwrap();

        let calls = renderer.calls();
        assert_eq!(calls.len(), 1, "part {part} should render exactly once");
        let (index, model, output) = &calls[0];
        assert_eq!(*index, expected_index, "selector index for {part}");
        assert_eq!(model, Path::new("models/tenor.scad"));
        assert_eq!(output, &PathBuf::from(format!("tenor-{part}.stl")));
        assert_eq!(rendered, vec![output.clone()]);
    }
}

#[test]
fn test_part_all_renders_whole_model_at_index_zero() {
    let catalog = PartCatalog::tenor();
    let renderer = RecordingRenderer::default();
    let req = RenderRequest::new("tenor.scad").with_part("all");
    req.execute(&catalog, &renderer).unwrap();

    let calls = renderer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, 0);
    assert_eq!(calls[0].2, PathBuf::from("tenor-all.stl"));
}

#[test]
fn test_all_parts_mode_covers_every_index_except_zero() {
    let catalog = PartCatalog::tenor();
    let renderer = RecordingRenderer::default();
    let req = RenderRequest::new("tenor.scad");
    let rendered = req.execute(&catalog, &renderer).unwrap();

    let calls = renderer.calls();
    assert_eq!(calls.len(), catalog.len() - 1);
    let indices: Vec<usize> = calls.iter().map(|(i, _, _)| *i).collect();
    assert_eq!(indices, (1..catalog.len()).collect::<Vec<_>>());
    assert!(!indices.contains(&0), "index 0 is the whole-model pseudo-part");
    assert_eq!(rendered.len(), catalog.len() - 1);
}

#[test]
fn test_prefix_defaults_to_model_stem() {
    let catalog = PartCatalog::tenor();
    let renderer = RecordingRenderer::default();
    let req = RenderRequest::new("foo/bar.scad").with_part("bridge");
    req.execute(&catalog, &renderer).unwrap();

    assert_eq!(renderer.calls()[0].2, PathBuf::from("bar-bridge.stl"));
}

#[test]
fn test_explicit_prefix_overrides_model_stem() {
    let catalog = PartCatalog::tenor();
    let renderer = RecordingRenderer::default();
    let req = RenderRequest::new("foo/bar.scad")
        .with_prefix("custom")
        .with_part("bridge");
    req.execute(&catalog, &renderer).unwrap();

    assert_eq!(renderer.calls()[0].2, PathBuf::from("custom-bridge.stl"));
}

#[test]
fn test_unknown_part_fails_without_invoking_renderer() {
    let catalog = PartCatalog::tenor();
    let renderer = RecordingRenderer::default();
    let req = RenderRequest::new("tenor.scad").with_part("doesnotexist");
    let err = req.execute(&catalog, &renderer).unwrap_err();

    assert!(matches!(err, MakeError::InvalidPartName { .. }), "got {err}");
    assert!(renderer.calls().is_empty(), "no renders on invalid part");
}

#[test]
fn test_failure_abandons_remaining_parts() {
    let catalog = PartCatalog::tenor();
    let renderer = RecordingRenderer::failing_on(3);
    let req = RenderRequest::new("tenor.scad");
    let err = req.execute(&catalog, &renderer).unwrap_err();

    assert!(matches!(err, MakeError::RenderFailed { code: Some(1), .. }));
    // The failed call is issued; nothing after it is.
    assert_eq!(renderer.calls().len(), 3);
    assert_eq!(renderer.calls()[2].0, 3);
}
