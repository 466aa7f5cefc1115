//! Chart export and optional PNG rasterization.
//!
//! The SVG is always written; a PNG copy is attempted by shelling out to
//! the first available external converter. Conversion failure is not an
//! error: the artifact falls back to SVG-only and the caller embeds
//! whatever exists.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ChartError;

/// External converters tried in order, with the argument shape each expects.
const CONVERTERS: &[(&str, ConverterArgs)] = &[
    ("rsvg-convert", ConverterArgs::RsvgConvert),
    ("inkscape", ConverterArgs::Inkscape),
];

#[derive(Clone, Copy)]
enum ConverterArgs {
    RsvgConvert,
    Inkscape,
}

/// Files produced for one chart.
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    /// Path of the written SVG file.
    pub svg_path: PathBuf,
    /// Path of the PNG copy, when a converter succeeded.
    pub png_path: Option<PathBuf>,
}

/// Write `svg` under `dir` as `<stem>.svg` and attempt a PNG copy.
pub fn export_chart(svg: &str, dir: &Path, stem: &str) -> Result<ChartArtifact, ChartError> {
    std::fs::create_dir_all(dir)?;
    let svg_path = dir.join(format!("{stem}.svg"));
    std::fs::write(&svg_path, svg)?;

    let png_path = dir.join(format!("{stem}.png"));
    let png_path = match rasterize(&svg_path, &png_path) {
        Ok(()) => Some(png_path),
        Err(reason) => {
            tracing::warn!(chart = stem, %reason, "PNG conversion failed, keeping SVG only");
            None
        }
    };

    Ok(ChartArtifact { svg_path, png_path })
}

/// Run the first available converter; errors are reported as strings since
/// the caller only logs them.
fn rasterize(svg_path: &Path, png_path: &Path) -> Result<(), String> {
    let mut last_error = "no converter available".to_string();
    for (program, args) in CONVERTERS {
        let mut cmd = Command::new(program);
        match args {
            ConverterArgs::RsvgConvert => {
                cmd.arg("--output").arg(png_path).arg(svg_path);
            }
            ConverterArgs::Inkscape => {
                cmd.arg(svg_path).arg("--export-type=png").arg(format!(
                    "--export-filename={}",
                    png_path.display()
                ));
            }
        }
        match cmd.output() {
            Ok(output) if output.status.success() => return Ok(()),
            Ok(output) => {
                last_error = format!(
                    "{program} exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Err(err) => {
                last_error = format!("{program} could not be spawned: {err}");
            }
        }
    }
    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_svg_even_without_converter() {
        let dir = std::env::temp_dir().join("palika-charts-test");
        let artifact = export_chart("<svg></svg>", &dir, "smoke").unwrap();
        assert!(artifact.svg_path.exists());
        let content = std::fs::read_to_string(&artifact.svg_path).unwrap();
        assert_eq!(content, "<svg></svg>");
        std::fs::remove_file(&artifact.svg_path).ok();
        if let Some(png) = artifact.png_path {
            std::fs::remove_file(png).ok();
        }
    }
}
