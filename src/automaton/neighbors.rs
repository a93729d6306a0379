//! Moore-neighborhood counting under bounded or toroidal topology.

use super::grid::{in_bounds, index_of};

/// How neighbor coordinates outside `[0, N)` are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Out-of-grid neighbors are skipped.
    Bounded,
    /// Out-of-grid neighbors wrap around modulo N.
    Wrapped,
}

impl Topology {
    #[inline]
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Topology::Wrapped
        } else {
            Topology::Bounded
        }
    }

    /// Resolve a neighbor coordinate. `None` means the slot does not exist.
    #[inline]
    pub fn resolve(self, size: i16, x: i16, y: i16, z: i16) -> Option<(i16, i16, i16)> {
        match self {
            Topology::Bounded => in_bounds(size, x, y, z).then_some((x, y, z)),
            Topology::Wrapped => Some((
                x.rem_euclid(size),
                y.rem_euclid(size),
                z.rem_euclid(size),
            )),
        }
    }

    /// Number of neighbor slots that exist for a cell.
    pub fn slot_count(self, size: i16, x: i16, y: i16, z: i16) -> u8 {
        let mut slots = 0;
        for_each_offset(|dx, dy, dz| {
            if self.resolve(size, x + dx, y + dy, z + dz).is_some() {
                slots += 1;
            }
        });
        slots
    }
}

#[inline]
fn for_each_offset(mut f: impl FnMut(i16, i16, i16)) {
    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                f(dx, dy, dz);
            }
        }
    }
}

/// Count alive neighbors using Moore neighborhood (26 slots).
///
/// Slots are counted individually, so on a wrapped lattice smaller than 3
/// the same cell (the center included) can be seen through several slots.
pub fn count_neighbors(
    cells: &[u8],
    size: i16,
    x: i16,
    y: i16,
    z: i16,
    topology: Topology,
) -> u8 {
    // Interior cells never touch the boundary, so both topologies agree.
    if x > 0 && x < size - 1 && y > 0 && y < size - 1 && z > 0 && z < size - 1 {
        let mut count = 0;
        for_each_offset(|dx, dy, dz| {
            count += cells[index_of(size, x + dx, y + dy, z + dz)];
        });
        return count;
    }

    let mut count = 0;
    for_each_offset(|dx, dy, dz| {
        if let Some((nx, ny, nz)) = topology.resolve(size, x + dx, y + dy, z + dz) {
            count += cells[index_of(size, nx, ny, nz)];
        }
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitialFill;
    use crate::state::Lattice;

    fn cross_lattice() -> Lattice {
        let mut lattice = Lattice::new(8, InitialFill::Dead).unwrap();
        // Center + 4 neighbors in the xy plane
        lattice.set_cell(4, 4, 4, true);
        lattice.set_cell(3, 4, 4, true);
        lattice.set_cell(5, 4, 4, true);
        lattice.set_cell(4, 3, 4, true);
        lattice.set_cell(4, 5, 4, true);
        lattice
    }

    #[test]
    fn test_count_neighbors() {
        let lattice = cross_lattice();

        // Center should have 4 neighbors (left, right, front, back)
        assert_eq!(lattice.count_neighbors(4, 4, 4), 4);

        // Each arm sees the center and the two arms diagonal to it
        assert_eq!(lattice.count_neighbors(3, 4, 4), 3);
        assert_eq!(lattice.count_neighbors(5, 4, 4), 3);
        assert_eq!(lattice.count_neighbors(4, 3, 4), 3);
        assert_eq!(lattice.count_neighbors(4, 5, 4), 3);

        // Far cell should have 0 neighbors
        assert_eq!(lattice.count_neighbors(0, 0, 0), 0);
    }

    #[test]
    fn test_bounded_full_lattice() {
        let lattice = Lattice::new(4, InitialFill::Alive).unwrap();
        // Corner, edge, face, interior
        assert_eq!(lattice.count_neighbors(0, 0, 0), 7);
        assert_eq!(lattice.count_neighbors(1, 0, 0), 11);
        assert_eq!(lattice.count_neighbors(1, 1, 0), 17);
        assert_eq!(lattice.count_neighbors(1, 1, 1), 26);
    }

    #[test]
    fn test_wrapped_full_lattice() {
        let mut lattice = Lattice::new(4, InitialFill::Alive).unwrap();
        lattice.rule.wrap = true;
        for z in 0..4 {
            for y in 0..4 {
                for x in 0..4 {
                    assert_eq!(lattice.count_neighbors(x, y, z), 26);
                }
            }
        }
    }

    #[test]
    fn test_wrap_reaches_opposite_face() {
        let mut lattice = Lattice::new(5, InitialFill::Dead).unwrap();
        lattice.set_cell(4, 4, 4, true);

        assert_eq!(lattice.count_neighbors(0, 0, 0), 0);
        lattice.rule.wrap = true;
        assert_eq!(lattice.count_neighbors(0, 0, 0), 1);
        assert_eq!(lattice.count_neighbors(0, 4, 4), 1);
        assert_eq!(lattice.count_neighbors(2, 2, 2), 0);
    }

    #[test]
    fn test_slot_counts() {
        for size in [3i16, 4, 6] {
            for z in 0..size {
                for y in 0..size {
                    for x in 0..size {
                        let bounded = Topology::Bounded.slot_count(size, x, y, z);
                        let on_surface = [x, y, z].iter().any(|&c| c == 0 || c == size - 1);
                        assert!(bounded <= 26);
                        assert_eq!(bounded < 26, on_surface);
                        assert_eq!(Topology::Wrapped.slot_count(size, x, y, z), 26);
                    }
                }
            }
        }
    }

    #[test]
    fn test_counts_stay_in_range() {
        let mut lattice = Lattice::new(3, InitialFill::Alive).unwrap();
        for wrap in [false, true] {
            lattice.rule.wrap = wrap;
            for z in 0..3 {
                for y in 0..3 {
                    for x in 0..3 {
                        assert!(lattice.count_neighbors(x, y, z) <= 26);
                    }
                }
            }
        }
    }

    #[test]
    fn test_tiny_wrapped_lattice_counts_every_slot() {
        let mut lattice = Lattice::new(1, InitialFill::Alive).unwrap();
        lattice.rule.wrap = true;
        assert_eq!(lattice.count_neighbors(0, 0, 0), 26);
        lattice.rule.wrap = false;
        assert_eq!(lattice.count_neighbors(0, 0, 0), 0);
    }
}
