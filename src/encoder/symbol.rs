/// Symbol construction - wires the encoder stages together
use rayon::prelude::*;

use crate::encoder::function_patterns::{draw_format_bits, draw_function_patterns};
use crate::encoder::mask::generate_mask;
use crate::encoder::penalty::{self, PenaltyReport};
use crate::encoder::placement;
use crate::error::QrError;
use crate::models::{ECLevel, Grid, MaskPattern, Module, QrSymbol, Version};

/// One masked candidate and its score
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    /// Mask applied to `grid`
    pub pattern: MaskPattern,
    /// Working copy with this pattern's format bits drawn and mask applied
    pub grid: Grid,
    /// Penalty score of `grid`
    pub report: PenaltyReport,
}

/// Step-wise construction of a single symbol.
///
/// Function patterns are drawn on creation; codewords are placed next, then
/// [`SymbolBuilder::finish`] picks (or applies a forced) mask.
#[derive(Debug, Clone)]
pub struct SymbolBuilder {
    version: Version,
    ec_level: ECLevel,
    grid: Grid,
}

impl SymbolBuilder {
    /// Allocate the grid and draw every function pattern
    pub fn new(version: u8, ec_level: ECLevel) -> Result<Self, QrError> {
        let version = Version::new(version)?;
        let mut grid = Grid::new(version);
        draw_function_patterns(&mut grid, version, ec_level);
        Ok(Self {
            version,
            ec_level,
            grid,
        })
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Current state of the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Positions codeword bits are written to, in order.
    ///
    /// Once codewords are placed, position `i` holds bit `7 - i % 8` of
    /// codeword `i / 8`, which is enough to replay placement step by step.
    pub fn scan_order(&self) -> Vec<(usize, usize)> {
        placement::scan_order(&self.grid)
    }

    /// Write the full interleaved codeword sequence into the data area
    pub fn place_codewords(&mut self, codewords: &[u8]) -> Result<(), QrError> {
        placement::place_codewords(&mut self.grid, codewords)
    }

    /// Apply `pattern` to a copy of the grid and score it
    pub fn evaluate_mask(&self, pattern: MaskPattern) -> MaskCandidate {
        let mut grid = self.grid.clone();
        draw_format_bits(&mut grid, self.ec_level, Some(pattern));
        grid.apply_mask(&generate_mask(pattern, &self.grid));
        let report = penalty::evaluate(&grid);
        MaskCandidate {
            pattern,
            grid,
            report,
        }
    }

    /// Evaluate all eight patterns, in pattern order
    pub fn evaluate_all(&self, parallel: bool) -> Vec<MaskCandidate> {
        if parallel {
            MaskPattern::ALL
                .par_iter()
                .map(|&pattern| self.evaluate_mask(pattern))
                .collect()
        } else {
            MaskPattern::ALL
                .iter()
                .map(|&pattern| self.evaluate_mask(pattern))
                .collect()
        }
    }

    /// Choose the mask and produce the finished symbol.
    ///
    /// With `forced` set that pattern is used regardless of its score; the
    /// reports for all eight candidates are returned either way.
    pub fn finish(self, forced: Option<MaskPattern>, parallel: bool) -> QrSymbol {
        assert!(
            self.grid.iter().all(|(_, _, m)| m != Module::Unfilled),
            "codewords must be placed before choosing a mask"
        );

        let mut candidates = self.evaluate_all(parallel);
        for candidate in &candidates {
            let r = &candidate.report;
            log::debug!(
                "mask {}: penalty {} (runs {}, blocks {}, finder-like {}, balance {})",
                candidate.pattern.index(),
                r.total(),
                r.run_penalty,
                r.block_penalty,
                r.finder_penalty,
                r.balance_penalty
            );
        }

        let chosen = forced.unwrap_or_else(|| select_best(&candidates));
        log::debug!(
            "version {} level {:?}: using mask {}{}",
            self.version.number(),
            self.ec_level,
            chosen.index(),
            if forced.is_some() { " (forced)" } else { "" }
        );

        let penalties: Vec<PenaltyReport> = candidates.iter().map(|c| c.report.clone()).collect();
        let winner = candidates.swap_remove(chosen.index() as usize);

        QrSymbol {
            version: self.version,
            error_correction: self.ec_level,
            mask_pattern: chosen,
            modules: winner.grid.to_bit_matrix(),
            penalties,
        }
    }
}

/// Lowest total penalty wins; ties go to the lowest pattern index.
///
/// `candidates` may come from parallel evaluation in any order.
pub fn select_best(candidates: &[MaskCandidate]) -> MaskPattern {
    candidates
        .iter()
        .min_by_key(|c| (c.report.total(), c.pattern))
        .map(|c| c.pattern)
        .unwrap_or(MaskPattern::Pattern0)
}
