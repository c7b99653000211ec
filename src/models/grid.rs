use super::{BitMatrix, Version};

/// Function pattern a module belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// 7x7 corner finder
    Finder,
    /// Light border around a finder
    Separator,
    /// Alternating row 6 / column 6
    Timing,
    /// 5x5 alignment block
    Alignment,
    /// Either copy of the 15-bit format field
    FormatInfo,
    /// Either 3x6 version block (versions 7+)
    VersionInfo,
    /// The single always-dark module next to the bottom-left finder
    DarkModule,
}

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not assigned yet
    #[default]
    Unfilled,
    /// Part of a fixed pattern; never touched by placement or masking
    Function {
        /// Pattern the module belongs to
        kind: PatternKind,
        /// Module color
        dark: bool,
    },
    /// Carries one codeword bit
    Data {
        /// Module color
        dark: bool,
    },
    /// Padding after the last codeword bit (light before masking)
    Remainder {
        /// Module color
        dark: bool,
    },
}

impl Module {
    /// True for fixed-pattern modules
    pub fn is_function(&self) -> bool {
        matches!(self, Module::Function { .. })
    }

    /// Module color; Unfilled reads as light
    pub fn is_dark(&self) -> bool {
        match *self {
            Module::Unfilled => false,
            Module::Function { dark, .. } | Module::Data { dark } | Module::Remainder { dark } => {
                dark
            }
        }
    }
}

/// Square arena of modules, row-major with `size` as the stride.
///
/// Accessors panic on out-of-range coordinates: every caller derives its
/// coordinates from `size()`, so a miss is a bug rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    modules: Vec<Module>,
}

impl Grid {
    /// Create an all-unfilled grid for a version
    pub fn new(version: Version) -> Self {
        Self::with_size(version.size())
    }

    pub(crate) fn with_size(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unfilled; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "module ({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        y * self.size + x
    }

    /// Module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.modules[self.index(x, y)]
    }

    /// Overwrite the module at column `x`, row `y`
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        let idx = self.index(x, y);
        self.modules[idx] = module;
    }

    /// Mark a module as part of a function pattern
    pub fn set_function(&mut self, x: usize, y: usize, kind: PatternKind, dark: bool) {
        self.set(x, y, Module::Function { kind, dark });
    }

    /// Whether (x, y) belongs to a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_function()
    }

    /// Color at (x, y)
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// Iterate `(x, y, module)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Module)> + '_ {
        let size = self.size;
        self.modules
            .iter()
            .enumerate()
            .map(move |(i, &m)| (i % size, i / size, m))
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// Invert every Data/Remainder module whose mask cell is dark.
    ///
    /// Applying the same mask twice restores the original colors.
    pub fn apply_mask(&mut self, mask: &Grid) {
        assert_eq!(self.size, mask.size, "mask grid size mismatch");
        for (module, mask_module) in self.modules.iter_mut().zip(&mask.modules) {
            if !mask_module.is_dark() {
                continue;
            }
            match module {
                Module::Data { dark } | Module::Remainder { dark } => *dark = !*dark,
                Module::Unfilled | Module::Function { .. } => {}
            }
        }
    }

    /// Resolve module colors into a packed bit matrix
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.size, self.size);
        for (x, y, module) in self.iter() {
            if module.is_dark() {
                matrix.set(x, y, true);
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1() -> Version {
        Version::new(1).unwrap()
    }

    #[test]
    fn test_new_grid_is_unfilled() {
        let grid = Grid::new(v1());
        assert_eq!(grid.size(), 21);
        assert!(grid.iter().all(|(_, _, m)| m == Module::Unfilled));
        assert_eq!(grid.count_dark(), 0);
    }

    #[test]
    fn test_module_predicates() {
        let f = Module::Function {
            kind: PatternKind::Timing,
            dark: true,
        };
        assert!(f.is_function());
        assert!(f.is_dark());
        assert!(!Module::Data { dark: false }.is_function());
        assert!(Module::Remainder { dark: true }.is_dark());
        assert!(!Module::Unfilled.is_dark());
    }

    #[test]
    fn test_apply_mask_skips_function_modules() {
        let mut grid = Grid::new(v1());
        grid.set_function(0, 0, PatternKind::Finder, true);
        grid.set(1, 0, Module::Data { dark: false });
        grid.set(2, 0, Module::Remainder { dark: false });

        let mut mask = Grid::new(v1());
        for x in 0..3 {
            mask.set(x, 0, Module::Data { dark: true });
        }

        grid.apply_mask(&mask);
        assert!(grid.is_dark(0, 0));
        assert_eq!(grid.get(1, 0), Module::Data { dark: true });
        assert_eq!(grid.get(2, 0), Module::Remainder { dark: true });

        grid.apply_mask(&mask);
        assert_eq!(grid.get(1, 0), Module::Data { dark: false });
        assert_eq!(grid.get(2, 0), Module::Remainder { dark: false });
    }

    #[test]
    fn test_to_bit_matrix() {
        let mut grid = Grid::new(v1());
        grid.set(4, 7, Module::Data { dark: true });
        grid.set_function(6, 6, PatternKind::Timing, true);
        let matrix = grid.to_bit_matrix();
        assert!(matrix.get(4, 7));
        assert!(matrix.get(6, 6));
        assert_eq!(matrix.count_ones(), 2);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(v1());
        let _ = grid.get(21, 0);
    }
}
