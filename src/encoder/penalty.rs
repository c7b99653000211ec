//! Mask penalty scoring
//!
//! Four rules, lower totals are better:
//! 1. runs of five or more same-colored modules in a row or column,
//! 2. monochrome 2x2 blocks,
//! 3. 1:1:3:1:1 finder-like sequences with a light margin on one side,
//! 4. deviation of the dark proportion from 50%.

use crate::models::Grid;

const RUN_BASE: u32 = 3;
const BLOCK: u32 = 3;
const FINDER_LIKE: u32 = 40;
const BALANCE_STEP: u32 = 10;

/// Maximal run of at least five same-colored modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// Row index for horizontal runs, column index for vertical runs
    pub line: usize,
    /// First module of the run along the line
    pub start: usize,
    /// Run length in modules
    pub length: usize,
    /// Run color
    pub dark: bool,
}

/// Finder-like sequence detected along a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderLike {
    /// Row index for horizontal hits, column index for vertical hits
    pub line: usize,
    /// Position just past the light run that completed the sequence
    pub end: usize,
    /// Width of the narrowest run (the "1" of 1:1:3:1:1)
    pub unit: usize,
}

/// Diagnostics and sub-totals for one masked candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PenaltyReport {
    /// Rule 1 runs along rows
    pub horizontal_runs: Vec<RunSpan>,
    /// Rule 1 runs along columns
    pub vertical_runs: Vec<RunSpan>,
    /// Top-left corners of monochrome 2x2 windows
    pub blocks: Vec<(usize, usize)>,
    /// Rule 3 hits along rows
    pub horizontal_finder_like: Vec<FinderLike>,
    /// Rule 3 hits along columns
    pub vertical_finder_like: Vec<FinderLike>,
    /// Dark modules in the whole symbol
    pub dark_modules: usize,
    /// size * size
    pub total_modules: usize,
    /// Rule 1
    pub run_penalty: u32,
    /// Rule 2
    pub block_penalty: u32,
    /// Rule 3
    pub finder_penalty: u32,
    /// Rule 4
    pub balance_penalty: u32,
}

impl PenaltyReport {
    /// Sum of the four rule sub-totals
    pub fn total(&self) -> u32 {
        self.run_penalty + self.block_penalty + self.finder_penalty + self.balance_penalty
    }
}

/// Score a fully masked grid
pub fn evaluate(grid: &Grid) -> PenaltyReport {
    let size = grid.size();
    let mut report = PenaltyReport {
        total_modules: size * size,
        ..PenaltyReport::default()
    };

    for y in 0..size {
        scan_line(
            size,
            |x| grid.is_dark(x, y),
            y,
            &mut report.horizontal_runs,
            &mut report.horizontal_finder_like,
        );
    }
    for x in 0..size {
        scan_line(
            size,
            |y| grid.is_dark(x, y),
            x,
            &mut report.vertical_runs,
            &mut report.vertical_finder_like,
        );
    }

    report.run_penalty = report
        .horizontal_runs
        .iter()
        .chain(&report.vertical_runs)
        .map(|run| RUN_BASE + (run.length - 5) as u32)
        .sum();
    let finder_hits = report.horizontal_finder_like.len() + report.vertical_finder_like.len();
    report.finder_penalty = FINDER_LIKE * finder_hits as u32;

    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let color = grid.is_dark(x, y);
            if color == grid.is_dark(x + 1, y)
                && color == grid.is_dark(x, y + 1)
                && color == grid.is_dark(x + 1, y + 1)
            {
                report.blocks.push((x, y));
            }
        }
    }
    report.block_penalty = BLOCK * report.blocks.len() as u32;

    report.dark_modules = grid.count_dark();
    report.balance_penalty =
        BALANCE_STEP * balance_steps(report.dark_modules, report.total_modules) as u32;

    report
}

/// Smallest k >= 0 with |20*dark - 10*total| <= (k+1)*total
fn balance_steps(dark: usize, total: usize) -> usize {
    let deviation = (dark * 20).abs_diff(total * 10);
    deviation.div_ceil(total).saturating_sub(1)
}

/// Last seven run lengths along a line, oldest first
struct RunHistory([usize; 7]);

impl RunHistory {
    fn push(&mut self, run: usize) {
        self.0.rotate_left(1);
        self.0[6] = run;
    }

    /// Core 1:1:3:1:1 with at least 4 units of light on one side.
    /// Only meaningful right after a light run has been pushed.
    fn finder_like_unit(&self) -> Option<usize> {
        let h = &self.0;
        let n = h[1];
        let core = n > 0 && h[2] == n && h[4] == n && h[5] == n && h[3] == n * 3;
        (core && h[0].max(h[6]) >= n * 4).then_some(n)
    }
}

fn scan_line(
    len: usize,
    is_dark: impl Fn(usize) -> bool,
    line: usize,
    runs: &mut Vec<RunSpan>,
    finders: &mut Vec<FinderLike>,
) {
    let mut history = RunHistory([0; 7]);
    let mut color = false;
    let mut run = 0usize;

    let mut close_run = |end: usize, color: bool, run: usize, history: &mut RunHistory| {
        if run >= 5 {
            runs.push(RunSpan {
                line,
                start: end - run,
                length: run,
                dark: color,
            });
        }
        history.push(run);
    };

    for i in 0..len {
        let dark = is_dark(i);
        if dark == color {
            run += 1;
            continue;
        }
        close_run(i, color, run, &mut history);
        if let Some(unit) = history.finder_like_unit().filter(|_| !color) {
            finders.push(FinderLike { line, end: i, unit });
        }
        color = dark;
        run = 1;
    }

    close_run(len, color, run, &mut history);
    if color {
        // Zero-length light run so a trailing dark sequence can complete
        history.push(0);
    }
    if let Some(unit) = history.finder_like_unit() {
        finders.push(FinderLike { line, end: len, unit });
    }
}
