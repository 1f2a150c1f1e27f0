use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Cells in the contribution grid (12 columns x 7 rows).
pub const GRID_CELLS: usize = 84;
pub const MAX_LEVEL: u8 = 4;

/// Simulated contribution intensities.
///
/// Seeded so the server render and the hydrated client draw the same grid.
pub fn contribution_levels(seed: u64, cells: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..cells).map(|_| rng.gen_range(0..=MAX_LEVEL)).collect()
}

pub fn level_class(level: u8) -> &'static str {
    match level {
        0 => "bg-muted",
        1 => "bg-secondary/30",
        2 => "bg-secondary/50",
        3 => "bg-secondary/70",
        _ => "bg-secondary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_deterministic() {
        assert_eq!(contribution_levels(7, GRID_CELLS), contribution_levels(7, GRID_CELLS));
        assert_ne!(contribution_levels(7, GRID_CELLS), contribution_levels(8, GRID_CELLS));
    }

    #[test]
    fn test_levels_in_range() {
        let levels = contribution_levels(2025, GRID_CELLS);
        assert_eq!(levels.len(), GRID_CELLS);
        assert!(levels.iter().all(|l| *l <= MAX_LEVEL));
    }

    #[test]
    fn test_level_classes() {
        assert_eq!(level_class(0), "bg-muted");
        assert_eq!(level_class(4), "bg-secondary");
        assert_eq!(level_class(200), "bg-secondary");
    }
}
