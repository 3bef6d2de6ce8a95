//! The render pipeline: one renderer invocation per requested part.

use std::path::{Path, PathBuf};

use crate::catalog::PartCatalog;
use crate::error::{MakeError, MakeResult};
use crate::scad::Renderer;

/// One run of the tool, built from CLI arguments and consumed immediately.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    model: PathBuf,
    prefix: Option<String>,
    part: Option<String>,
}

impl RenderRequest {
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            prefix: None,
            part: None,
        }
    }

    /// Override the derived output prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Restrict the run to a single named part.
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.part = Some(part.into());
        self
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    /// Output filename prefix: the explicit one if given, otherwise the
    /// model's base filename with directory and extension stripped
    /// (`foo/bar.scad` -> `bar`).
    pub fn prefix(&self) -> String {
        match &self.prefix {
            Some(p) => p.clone(),
            None => self
                .model
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Output path for one part: `{prefix}-{part}.stl`.
    pub fn output_path(&self, part: &str) -> PathBuf {
        PathBuf::from(format!("{}-{}.stl", self.prefix(), part))
    }

    /// Run the request against a renderer backend.
    ///
    /// With a part selected, issues exactly one render. Otherwise walks
    /// the catalog's individual parts in selector order, one blocking
    /// render each, and stops at the first failure. Returns the paths
    /// that were rendered.
    pub fn execute<R: Renderer>(
        &self,
        catalog: &PartCatalog,
        renderer: &R,
    ) -> MakeResult<Vec<PathBuf>> {
        let selected: Vec<(usize, &str)> = match &self.part {
            Some(name) => {
                let index = catalog
                    .index_of(name)
                    .ok_or_else(|| MakeError::invalid_part(name, catalog.names()))?;
                vec![(index, name.as_str())]
            }
            None => catalog.individual_parts().collect(),
        };

        let mut rendered = Vec::with_capacity(selected.len());
        for (index, part) in selected {
            let output = self.output_path(part);
            println!("Generating {}", output.display());
            renderer.render_part(&self.model, index, &output)?;
            rendered.push(output);
        }
        Ok(rendered)
    }
}
