/// Codeword placement along the zigzag scan order
use crate::error::QrError;
use crate::models::{Grid, Module};

/// Canonical traversal of every non-function module as `(x, y)` pairs.
///
/// Two-column strips are walked from the right edge leftward, skipping the
/// vertical timing column, alternating upward and downward, right column first.
pub fn scan_order(grid: &Grid) -> Vec<(usize, usize)> {
    let size = grid.size();
    let mut order = Vec::with_capacity(size * size);

    let mut right = size as isize - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let r = right as usize;
        let upward = (r + 1) & 2 == 0;
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for x in [r, r - 1] {
                if !grid.is_function(x, y) {
                    order.push((x, y));
                }
            }
        }
        right -= 2;
    }

    order
}

/// Write `codewords` (MSB first) into the scan order as Data modules and
/// fill the leftover positions with light Remainder modules.
///
/// `codewords` must hold exactly one byte per 8 available modules.
pub fn place_codewords(grid: &mut Grid, codewords: &[u8]) -> Result<(), QrError> {
    let order = scan_order(grid);
    let expected = order.len() / 8;
    if codewords.len() != expected {
        return Err(QrError::CodewordCountMismatch {
            expected,
            actual: codewords.len(),
        });
    }

    let num_bits = codewords.len() * 8;
    for (i, &(x, y)) in order.iter().enumerate() {
        let module = if i < num_bits {
            let dark = (codewords[i >> 3] >> (7 - (i & 7))) & 1 == 1;
            Module::Data { dark }
        } else {
            Module::Remainder { dark: false }
        };
        grid.set(x, y, module);
    }

    log::trace!(
        "placed {} codeword bits and {} remainder bits",
        num_bits,
        order.len() - num_bits
    );
    Ok(())
}

/// Read Data modules back into bytes following the same scan order.
///
/// Remainder modules are skipped. The colors are read as-is, so a masked
/// grid must be unmasked first to recover the original codewords.
pub fn read_codewords(grid: &Grid) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut current = 0u8;
    let mut bit_count = 0;

    for (x, y) in scan_order(grid) {
        if let Module::Data { dark } = grid.get(x, y) {
            current = (current << 1) | dark as u8;
            bit_count += 1;
            if bit_count == 8 {
                bytes.push(current);
                current = 0;
                bit_count = 0;
            }
        }
    }

    bytes
}
