//! OpenSCAD renderer backend.
//!
//! The model file owns all geometry; this side only assembles the
//! argument vector and watches the exit status. The model is expected
//! to dispatch on `make_part` when `AUTO` is set, emitting exactly the
//! selected part.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{MakeError, MakeResult};

/// Default renderer executable name, resolved via PATH.
pub const DEFAULT_PROGRAM: &str = "openscad";

/// Trait for renderer backends.
///
/// The production backend spawns OpenSCAD; tests substitute a recording
/// mock so the render loop can be exercised without a CAD install.
pub trait Renderer {
    /// Render the part at `index` from `model` into `output`.
    ///
    /// Blocks until the render completes. A non-zero renderer exit is an
    /// error; the caller stops issuing further renders on the first one.
    fn render_part(&self, model: &Path, index: usize, output: &Path) -> MakeResult<()>;
}

/// Renderer backend that shells out to the OpenSCAD binary.
#[derive(Debug)]
pub struct OpenScad {
    program: PathBuf,
}

impl OpenScad {
    /// Resolve the renderer executable and build the backend.
    ///
    /// Fails up front with `RendererNotFound` so a missing install is
    /// reported before any render is attempted, not mid-run.
    pub fn locate(program: &str) -> MakeResult<Self> {
        let program = which::which(program).map_err(|_| MakeError::RendererNotFound {
            program: program.to_string(),
        })?;
        Ok(Self { program })
    }

    /// Build the backend from an explicit executable path, skipping PATH
    /// resolution.
    pub fn at(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolved path of the executable this backend will spawn.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Renderer for OpenScad {
    fn render_part(&self, model: &Path, index: usize, output: &Path) -> MakeResult<()> {
        // Argument order is fixed: AUTO flag, part selector, output, model.
        let status = Command::new(&self.program)
            .arg("-DAUTO=true")
            .arg(format!("-Dmake_part={index}"))
            .arg("-o")
            .arg(output)
            .arg(model)
            .status()
            .map_err(|source| MakeError::RendererLaunch {
                program: self.program.display().to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(MakeError::RenderFailed {
                output: output.to_path_buf(),
                code: status.code(),
            })
        }
    }
}
