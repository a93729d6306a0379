//! Grid initialization and cell access helpers.

use crate::config::InitialFill;
use crate::error::{LatticeError, Result};
use crate::state::{Lattice, MAX_SIZE};

/// Allocate both buffers as `size`³ cells filled per `fill`.
pub fn create_grid(lattice: &mut Lattice, size: i16, fill: InitialFill) -> Result<()> {
    if size < 1 || size > MAX_SIZE {
        log::warn!("rejected lattice size {}", size);
        return Err(LatticeError::InvalidSize(size));
    }

    let n = size as usize;
    let volume = n * n * n;
    let value = fill.cell_value();

    lattice.size = size;
    lattice.buffers = [vec![value; volume], vec![value; volume]];
    lattice.front = 0;
    lattice.generation = 0;

    log::info!("initialized {}^3 lattice ({:?})", size, fill);
    Ok(())
}

/// Calculate the linear index for a 3D coordinate (x fastest, z slowest).
#[inline]
pub fn index_of(size: i16, x: i16, y: i16, z: i16) -> usize {
    let n = size as usize;
    z as usize * n * n + y as usize * n + x as usize
}

/// Inverse of `index_of`.
#[inline]
pub fn coords_of(size: i16, idx: usize) -> (i16, i16, i16) {
    let n = size as usize;
    let x = idx % n;
    let y = (idx / n) % n;
    let z = idx / (n * n);
    (x as i16, y as i16, z as i16)
}

/// Check if coordinates are within lattice bounds.
#[inline]
pub fn in_bounds(size: i16, x: i16, y: i16, z: i16) -> bool {
    x >= 0 && x < size && y >= 0 && y < size && z >= 0 && z < size
}

pub fn is_alive(lattice: &Lattice, x: i16, y: i16, z: i16) -> bool {
    if !lattice.is_initialized() || !in_bounds(lattice.size, x, y, z) {
        return false;
    }
    lattice.cells()[lattice.index(x, y, z)] != 0
}

/// Place or remove a single cell. Out-of-bounds coordinates are ignored.
pub fn set_cell(lattice: &mut Lattice, x: i16, y: i16, z: i16, alive: bool) {
    if !lattice.is_initialized() || !in_bounds(lattice.size, x, y, z) {
        return;
    }
    let idx = lattice.index(x, y, z);
    lattice.cells_mut()[idx] = alive as u8;
}

/// Flip a cell in the current buffer, bypassing the step pipeline.
///
/// Returns the new state, or `None` when the coordinate is outside the
/// lattice. Controller input routinely rounds to one past the edge, so that
/// case is a quiet no-op.
pub fn toggle_cell(lattice: &mut Lattice, x: i16, y: i16, z: i16) -> Option<bool> {
    if !lattice.is_initialized() || !in_bounds(lattice.size, x, y, z) {
        return None;
    }
    let idx = lattice.index(x, y, z);
    let cells = lattice.cells_mut();
    cells[idx] ^= 1;
    Some(cells[idx] != 0)
}

/// Kill every cell. Does not advance the generation.
pub fn clear(lattice: &mut Lattice) {
    lattice.cells_mut().fill(0);
}

pub fn population(lattice: &Lattice) -> usize {
    lattice.cells().iter().filter(|&&c| c != 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_grid() {
        let mut lattice = Lattice::empty();

        create_grid(&mut lattice, 8, InitialFill::Alive).unwrap();
        assert_eq!(lattice.size, 8);
        assert_eq!(lattice.cells().len(), 512);
        assert_eq!(lattice.generation, 0);
        assert!(lattice.cells().iter().all(|&c| c == 1));

        create_grid(&mut lattice, 4, InitialFill::Dead).unwrap();
        assert_eq!(lattice.cells().len(), 64);
        assert!(lattice.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_create_grid_rejects_bad_sizes() {
        let mut lattice = Lattice::empty();
        assert!(matches!(
            create_grid(&mut lattice, 0, InitialFill::Dead),
            Err(LatticeError::InvalidSize(0))
        ));
        assert!(matches!(
            create_grid(&mut lattice, -3, InitialFill::Dead),
            Err(LatticeError::InvalidSize(-3))
        ));
        assert!(create_grid(&mut lattice, MAX_SIZE + 1, InitialFill::Dead).is_err());
        assert!(!lattice.is_initialized());
    }

    #[test]
    fn test_index_of() {
        // First cell
        assert_eq!(index_of(4, 0, 0, 0), 0);
        // Last cell
        assert_eq!(index_of(4, 3, 3, 3), 63);
        // Various cells
        assert_eq!(index_of(4, 1, 0, 0), 1);
        assert_eq!(index_of(4, 0, 1, 0), 4);
        assert_eq!(index_of(4, 0, 0, 1), 16);
    }

    #[test]
    fn test_coords_of_inverts_index_of() {
        for idx in 0..125 {
            let (x, y, z) = coords_of(5, idx);
            assert_eq!(index_of(5, x, y, z), idx);
        }
        assert_eq!(coords_of(4, 16 + 4 + 1), (1, 1, 1));
    }

    #[test]
    fn test_in_bounds() {
        // Valid bounds
        assert!(in_bounds(4, 0, 0, 0));
        assert!(in_bounds(4, 3, 3, 3));
        assert!(in_bounds(4, 2, 2, 2));

        // Out of bounds
        assert!(!in_bounds(4, -1, 0, 0));
        assert!(!in_bounds(4, 4, 0, 0));
        assert!(!in_bounds(4, 0, -1, 0));
        assert!(!in_bounds(4, 0, 4, 0));
        assert!(!in_bounds(4, 0, 0, -1));
        assert!(!in_bounds(4, 0, 0, 4));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut lattice = Lattice::new(4, InitialFill::Dead).unwrap();
        assert_eq!(toggle_cell(&mut lattice, 1, 2, 3), Some(true));
        assert!(is_alive(&lattice, 1, 2, 3));
        assert_eq!(toggle_cell(&mut lattice, 1, 2, 3), Some(false));
        assert!(!is_alive(&lattice, 1, 2, 3));
        assert_eq!(population(&lattice), 0);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_noop() {
        let mut lattice = Lattice::new(4, InitialFill::Alive).unwrap();
        assert_eq!(toggle_cell(&mut lattice, 4, 0, 0), None);
        assert_eq!(toggle_cell(&mut lattice, 0, -1, 0), None);
        assert_eq!(toggle_cell(&mut lattice, 0, 0, i16::MAX), None);
        assert_eq!(lattice.size, 4);
        assert_eq!(lattice.cells().len(), 64);
        assert_eq!(population(&lattice), 64);
    }

    #[test]
    fn test_set_cell_and_clear() {
        let mut lattice = Lattice::new(4, InitialFill::Dead).unwrap();
        set_cell(&mut lattice, 0, 0, 0, true);
        set_cell(&mut lattice, 3, 3, 3, true);
        set_cell(&mut lattice, 4, 4, 4, true); // ignored
        assert_eq!(population(&lattice), 2);
        assert!(!is_alive(&lattice, 4, 4, 4));

        clear(&mut lattice);
        assert_eq!(population(&lattice), 0);
        assert_eq!(lattice.generation, 0);
    }
}
