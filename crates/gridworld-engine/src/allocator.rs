//! Uniform placement of new entities on free grid cells.
//!
//! [`new_position`] is the only source of randomness in the environment.
//! It takes the random source as a parameter so callers decide how it is
//! seeded; the engine passes its own seeded `ChaCha8Rng`.

use gridworld_core::{GridError, Position};
use indexmap::IndexSet;
use rand::Rng;

/// Pick a uniformly random unoccupied cell on a `size × size` grid.
///
/// `occupied` may contain duplicates; they are coalesced before
/// exclusion. Candidates are enumerated column-major (`x` outer, `y`
/// inner) so a given RNG state always maps to the same cell.
///
/// # Errors
///
/// Returns [`GridError::GridFull`] if every cell is occupied.
pub fn new_position<R, I>(size: u32, occupied: I, rng: &mut R) -> Result<Position, GridError>
where
    R: Rng,
    I: IntoIterator<Item = Position>,
{
    let occupied: IndexSet<Position> = occupied.into_iter().collect();
    let candidates = free_cells(size, &occupied);
    if candidates.is_empty() {
        return Err(GridError::GridFull { size });
    }
    let index = rng.random_range(0..candidates.len());
    Ok(candidates[index])
}

/// All cells of a `size × size` grid not present in `occupied`.
pub fn free_cells(size: u32, occupied: &IndexSet<Position>) -> Vec<Position> {
    (0..size)
        .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
        .filter(|p| !occupied.contains(p))
        .collect()
}
