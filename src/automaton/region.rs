//! Box-shaped region extraction and import.
//!
//! Renderers use `extract_region` to resynchronise from full state (after a
//! randomize or clear) and `import_region` to stamp patterns. Buffers are laid
//! out in z,y,x order (z changes slowest, x changes fastest) in both
//! directions.

use crate::error::Result;
use crate::state::Lattice;

/// Half-open box `[min, max)` in lattice coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: (i16, i16, i16),
    pub max: (i16, i16, i16),
}

impl Bounds {
    pub fn new(min: (i16, i16, i16), max: (i16, i16, i16)) -> Self {
        Bounds { min, max }
    }

    /// The whole lattice.
    pub fn full(size: i16) -> Self {
        Bounds::new((0, 0, 0), (size, size, size))
    }

    /// Clamp to `[0, size)`. `None` when the clamped box is empty or inverted.
    pub fn clamp(self, size: i16) -> Option<Bounds> {
        let c = |v: i16| v.clamp(0, size);
        let min = (c(self.min.0), c(self.min.1), c(self.min.2));
        let max = (c(self.max.0), c(self.max.1), c(self.max.2));
        if min.0 >= max.0 || min.1 >= max.1 || min.2 >= max.2 {
            return None;
        }
        Some(Bounds { min, max })
    }

    pub fn volume(&self) -> usize {
        let extent = |lo: i16, hi: i16| (hi as i32 - lo as i32).max(0) as usize;
        extent(self.min.0, self.max.0)
            * extent(self.min.1, self.max.1)
            * extent(self.min.2, self.max.2)
    }

    fn for_each(&self, mut f: impl FnMut(i16, i16, i16)) {
        for z in self.min.2..self.max.2 {
            for y in self.min.1..self.max.1 {
                for x in self.min.0..self.max.0 {
                    f(x, y, z);
                }
            }
        }
    }
}

/// Copy a region of the current generation into `out_buf`.
///
/// Returns the number of bytes written; 0 when the clamped region is empty
/// or `out_buf` is too small to hold it.
pub fn extract_region(lattice: &Lattice, out_buf: &mut [u8], bounds: Bounds) -> Result<usize> {
    lattice.check_ready()?;

    let region = match bounds.clamp(lattice.size) {
        Some(region) => region,
        None => return Ok(0),
    };
    if out_buf.len() < region.volume() {
        return Ok(0);
    }

    let cells = lattice.cells();
    let mut offset = 0;
    region.for_each(|x, y, z| {
        out_buf[offset] = cells[lattice.index(x, y, z)];
        offset += 1;
    });

    Ok(offset)
}

/// Overwrite a region of the current generation from `in_buf`.
///
/// Any non-zero byte is a live cell. Returns the number of bytes read; 0
/// when the clamped region is empty or `in_buf` is too short.
pub fn import_region(lattice: &mut Lattice, in_buf: &[u8], bounds: Bounds) -> Result<usize> {
    lattice.check_ready()?;

    let region = match bounds.clamp(lattice.size) {
        Some(region) => region,
        None => return Ok(0),
    };
    if in_buf.len() < region.volume() {
        return Ok(0);
    }

    let size = lattice.size;
    let cells = lattice.cells_mut();
    let mut offset = 0;
    region.for_each(|x, y, z| {
        cells[super::index_of(size, x, y, z)] = (in_buf[offset] != 0) as u8;
        offset += 1;
    });

    Ok(offset)
}
