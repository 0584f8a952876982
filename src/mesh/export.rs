//! Wavefront OBJ export of tube segments.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::CylinderSegment;
use crate::error::TubeResult;

/// Write segments as a single OBJ document, one `o` group per segment.
///
/// Indices are rebased so each segment refers to its own vertices.
pub fn write_obj<'a, W, I>(writer: &mut W, segments: I) -> TubeResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CylinderSegment>,
{
    writeln!(writer, "# tubeway segment export")?;

    let mut base = 1usize;
    for (k, segment) in segments.into_iter().enumerate() {
        writeln!(writer, "o segment_{}", k)?;
        for v in &segment.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in &segment.normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for tri in segment.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize + base);
            writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
        base += segment.vertices.len();
    }

    Ok(())
}

/// Save segments to an OBJ file at `path`.
pub fn save_obj<'a, P, I>(path: P, segments: I) -> TubeResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a CylinderSegment>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, segments)?;
    writer.flush()?;
    Ok(())
}
