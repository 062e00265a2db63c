use ndarray::{Array2, ArrayView2};

/// Rectangular-window median filter used to despeckle fuzzy score grids.
pub struct MedianFilter;

impl MedianFilter {
    /// Filters `grid` with a `rays x gates` window.
    ///
    /// Windows are placed like a rank filter: offsets span
    /// `[-(s / 2), s - s / 2 - 1]` per axis, borders reflect
    /// (`d c b a | a b c d | d c b a`), and the rank `len / 2` order
    /// statistic is selected, which is the upper median for even window
    /// sizes. Window dimensions below 1 are treated as 1.
    pub fn apply(grid: ArrayView2<'_, f64>, rays: usize, gates: usize) -> Array2<f64> {
        let (rows, cols) = grid.dim();
        if rows == 0 || cols == 0 {
            return grid.to_owned();
        }

        let ray_span = rays.max(1) as isize;
        let gate_span = gates.max(1) as isize;
        let mut out = Array2::zeros((rows, cols));
        let mut window = Vec::with_capacity((ray_span * gate_span) as usize);

        for ray in 0..rows as isize {
            for gate in 0..cols as isize {
                window.clear();
                for dr in -(ray_span / 2)..=(ray_span - ray_span / 2 - 1) {
                    for dg in -(gate_span / 2)..=(gate_span - gate_span / 2 - 1) {
                        let r = reflect(ray + dr, rows);
                        let g = reflect(gate + dg, cols);
                        window.push(grid[[r, g]]);
                    }
                }
                window.sort_unstable_by(f64::total_cmp);
                out[[ray as usize, gate as usize]] = window[window.len() / 2];
            }
        }
        out
    }
}

/// Mirrors an out-of-range index back into `[0, len)`, repeating the edge
/// sample once.
fn reflect(index: isize, len: usize) -> usize {
    let len = len as isize;
    if len == 1 {
        return 0;
    }
    let period = 2 * len;
    let mut wrapped = index % period;
    if wrapped < 0 {
        wrapped += period;
    }
    if wrapped >= len {
        (period - 1 - wrapped) as usize
    } else {
        wrapped as usize
    }
}
