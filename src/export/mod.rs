//! Exporters for the sculpted grid
//!
//! Both formats run [`VoxelGrid::optimize`] before writing, so exporting
//! permanently removes interior voxels from the grid.

pub mod off;
pub mod vect;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::voxel::grid::VoxelGrid;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Colored point cloud
    Vect,
    /// Colored cube mesh
    Off,
}

impl ExportFormat {
    /// Pick a format from the file extension (`.vect` or `.off`, any case)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "vect" => Some(ExportFormat::Vect),
            "off" => Some(ExportFormat::Off),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Vect => "VECT",
            ExportFormat::Off => "OFF",
        }
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::Export {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

impl VoxelGrid {
    /// Optimize, then write VECT to `out`. Returns the number of points.
    pub fn write_vect_to<W: Write>(&mut self, out: W) -> Result<usize> {
        self.optimize()?;
        Ok(vect::encode(self, out)?)
    }

    /// Optimize, then write OFF to `out`. Returns the number of cubes.
    pub fn write_off_to<W: Write>(&mut self, out: W) -> Result<usize> {
        self.optimize()?;
        Ok(off::encode(self, out)?)
    }

    /// Export to a file in the given format.
    ///
    /// The file is created before the grid is optimized, so a path that
    /// cannot be opened leaves the grid untouched.
    pub fn export(&mut self, path: impl AsRef<Path>, format: ExportFormat) -> Result<usize> {
        let path = path.as_ref();
        let mut out = create(path)?;
        let count = match format {
            ExportFormat::Vect => self.write_vect_to(&mut out)?,
            ExportFormat::Off => self.write_off_to(&mut out)?,
        };
        out.flush()?;
        log::info!("Wrote {} {} voxels to {}", count, format.name(), path.display());
        Ok(count)
    }

    /// Export as VECT
    pub fn write_vect(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.export(path, ExportFormat::Vect)
    }

    /// Export as OFF
    pub fn write_off(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.export(path, ExportFormat::Off)
    }
}
