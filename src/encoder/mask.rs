/// Mask pattern generation
use crate::models::{Grid, MaskPattern, Module};

/// Build the mask grid for `pattern` over the layout of `grid`.
///
/// Every non-function position becomes a Data module whose color is the
/// pattern's predicate; function positions stay Unfilled so the mask never
/// reaches them. Apply the result with [`Grid::apply_mask`].
pub fn generate_mask(pattern: MaskPattern, grid: &Grid) -> Grid {
    let mut mask = Grid::with_size(grid.size());
    for (x, y, module) in grid.iter() {
        if !module.is_function() {
            mask.set(
                x,
                y,
                Module::Data {
                    dark: pattern.is_masked(x, y),
                },
            );
        }
    }
    mask
}
