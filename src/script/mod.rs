//! JSON scene scripts: a whole sculpting session as data
//!
//! ```json
//! {
//!   "dimensions": [10, 10, 10],
//!   "steps": [
//!     { "op": "set_color", "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 },
//!     { "op": "put_box", "x0": 0, "x1": 9, "y0": 0, "y1": 9, "z0": 0, "z1": 9 },
//!     { "op": "cut_sphere", "center": [5, 5, 5], "radius": 3 }
//!   ],
//!   "outputs": ["out.vect", "out.off"]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::export::ExportFormat;
use crate::voxel::{PaintReport, VoxelGrid};

/// One sculpting operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    SetColor { r: f32, g: f32, b: f32, a: f32 },
    PutVoxel { x: i32, y: i32, z: i32 },
    CutVoxel { x: i32, y: i32, z: i32 },
    PutBox { x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32 },
    CutBox { x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32 },
    PutSphere { center: [i32; 3], radius: i32 },
    CutSphere { center: [i32; 3], radius: i32 },
    PutEllipsoid { center: [i32; 3], radii: [i32; 3] },
    CutEllipsoid { center: [i32; 3], radii: [i32; 3] },
}

impl Step {
    /// Apply the step to a grid
    pub fn apply(&self, grid: &mut VoxelGrid) -> PaintReport {
        let single = |applied: bool| PaintReport {
            applied: applied as u64,
            clipped: !applied as u64,
        };
        match *self {
            Step::SetColor { r, g, b, a } => {
                grid.set_color(r, g, b, a);
                PaintReport::default()
            }
            Step::PutVoxel { x, y, z } => single(grid.put_voxel(x, y, z).is_applied()),
            Step::CutVoxel { x, y, z } => single(grid.cut_voxel(x, y, z).is_applied()),
            Step::PutBox { x0, x1, y0, y1, z0, z1 } => grid.put_box(x0, x1, y0, y1, z0, z1),
            Step::CutBox { x0, x1, y0, y1, z0, z1 } => grid.cut_box(x0, x1, y0, y1, z0, z1),
            Step::PutSphere { center: [x, y, z], radius } => grid.put_sphere(x, y, z, radius),
            Step::CutSphere { center: [x, y, z], radius } => grid.cut_sphere(x, y, z, radius),
            Step::PutEllipsoid { center: [x, y, z], radii: [rx, ry, rz] } => {
                grid.put_ellipsoid(x, y, z, rx, ry, rz)
            }
            Step::CutEllipsoid { center: [x, y, z], radii: [rx, ry, rz] } => {
                grid.cut_ellipsoid(x, y, z, rx, ry, rz)
            }
        }
    }
}

/// A complete sculpting session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SculptScript {
    /// Grid size as `[rows, columns, planes]`
    pub dimensions: [i32; 3],
    /// Operations, applied in order
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Export targets; the format follows the file extension
    #[serde(default)]
    pub outputs: Vec<PathBuf>,
}

impl SculptScript {
    /// Parse a script from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a script file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the export format of every output, rejecting unknown extensions
    pub fn output_formats(&self) -> Result<Vec<(PathBuf, ExportFormat)>> {
        self.outputs
            .iter()
            .map(|path| {
                ExportFormat::from_path(path)
                    .map(|format| (path.clone(), format))
                    .ok_or_else(|| {
                        Error::Script(format!(
                            "unsupported output extension: {} (expected .vect or .off)",
                            path.display()
                        ))
                    })
            })
            .collect()
    }

    /// Allocate the grid and apply every step
    pub fn build(&self) -> Result<(VoxelGrid, PaintReport)> {
        let [nx, ny, nz] = self.dimensions;
        let mut grid = VoxelGrid::new(nx, ny, nz)?;
        let mut total = PaintReport::default();
        for step in &self.steps {
            total += step.apply(&mut grid);
        }
        log::info!(
            "Applied {} steps: {} cells updated, {} clipped",
            self.steps.len(),
            total.applied,
            total.clipped
        );
        Ok((grid, total))
    }

    /// Build the grid and write every output
    pub fn run(&self) -> Result<VoxelGrid> {
        let outputs = self.output_formats()?;
        let (mut grid, _) = self.build()?;
        for (path, format) in outputs {
            grid.export(&path, format)?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCRIPT: &str = r#"{
        "dimensions": [5, 5, 5],
        "steps": [
            { "op": "set_color", "r": 1.0, "g": 0.5, "b": 0.0, "a": 1.0 },
            { "op": "put_box", "x0": 0, "x1": 4, "y0": 0, "y1": 4, "z0": 0, "z1": 4 },
            { "op": "cut_sphere", "center": [2, 2, 2], "radius": 1 },
            { "op": "put_voxel", "x": 9, "y": 0, "z": 0 }
        ]
    }"#;

    #[test]
    fn test_parse_steps() {
        let script = SculptScript::from_json_str(SCRIPT).unwrap();
        assert_eq!(script.dimensions, [5, 5, 5]);
        assert_eq!(script.steps.len(), 4);
        assert_eq!(script.steps[2], Step::CutSphere { center: [2, 2, 2], radius: 1 });
        assert!(script.outputs.is_empty());
    }

    #[test]
    fn test_build_applies_steps_in_order() {
        let script = SculptScript::from_json_str(SCRIPT).unwrap();
        let (grid, report) = script.build().unwrap();
        assert_eq!(grid.active_count(), 125 - 7);
        assert_eq!(report.applied, 125 + 7);
        assert_eq!(report.clipped, 1);
        assert_eq!(grid.color().g, 0.5);
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = SculptScript::from_json_str(r#"{ "dimensions": [1,1,1], "steps": [{ "op": "twist" }] }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unknown_output_extension() {
        let script = SculptScript {
            dimensions: [2, 2, 2],
            outputs: vec![PathBuf::from("mesh.stl")],
            ..Default::default()
        };
        assert!(matches!(script.run(), Err(Error::Script(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let script = SculptScript::from_json_str(SCRIPT).unwrap();
        let json = script.to_json_string().unwrap();
        assert_eq!(SculptScript::from_json_str(&json).unwrap(), script);
    }

    #[test]
    fn test_run_writes_outputs() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let vect = temp_dir.path().join("shell.vect");
        let off = temp_dir.path().join("shell.off");

        let mut script = SculptScript::from_json_str(SCRIPT).unwrap();
        script.outputs = vec![vect.clone(), off.clone()];
        let grid = script.run().expect("run failed");

        // 98 shell cells plus the 12 interior cells bordering the carved cavity
        assert_eq!(grid.active_count(), 110);
        assert!(fs::read_to_string(&vect).unwrap().starts_with("VECT\n110 110 110\n"));
        assert!(fs::read_to_string(&off).unwrap().starts_with("OFF\n880 660 0\n"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("scene.json");
        fs::write(&path, SCRIPT).unwrap();
        let script = SculptScript::load(&path).unwrap();
        assert_eq!(script.steps.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let err = SculptScript::load(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
