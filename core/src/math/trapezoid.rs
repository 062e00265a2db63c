use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Four-breakpoint trapezoidal membership function.
///
/// Membership is 0 below `a`, rises linearly to 1 at `b`, holds 1 through
/// `c`, falls linearly back to 0 at `d`. Degenerate edges (`a == b` or
/// `c == d`) behave as steps; the plateau value wins on the shared
/// breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidShape {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl TrapezoidShape {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Membership degree of a single value, always in `[0, 1]`.
    ///
    /// Non-finite values carry no evidence and map to exactly 0.
    pub fn membership(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return 0.0;
        }
        if x < self.a {
            0.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else if x <= self.c {
            1.0
        } else if x < self.d {
            (self.d - x) / (self.d - self.c)
        } else {
            0.0
        }
    }

    /// Elementwise membership over a whole field.
    pub fn evaluate(&self, data: ArrayView2<'_, f64>) -> Array2<f64> {
        data.mapv(|x| self.membership(x))
    }
}

impl From<[f64; 4]> for TrapezoidShape {
    fn from(points: [f64; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn ramps_plateau_and_tails() {
        let shape = TrapezoidShape::new(0.0, 2.0, 4.0, 8.0);
        assert_eq!(shape.membership(-1.0), 0.0);
        assert_eq!(shape.membership(0.0), 0.0);
        assert_eq!(shape.membership(1.0), 0.5);
        assert_eq!(shape.membership(2.0), 1.0);
        assert_eq!(shape.membership(3.0), 1.0);
        assert_eq!(shape.membership(4.0), 1.0);
        assert_eq!(shape.membership(6.0), 0.5);
        assert_eq!(shape.membership(8.0), 0.0);
        assert_eq!(shape.membership(9.0), 0.0);
    }

    #[test]
    fn degenerate_edges_behave_as_steps() {
        let rising = TrapezoidShape::new(5.0, 5.0, 10.0, 12.0);
        assert_eq!(rising.membership(4.999), 0.0);
        assert_eq!(rising.membership(5.0), 1.0);

        let falling = TrapezoidShape::new(0.0, 1.0, 10.0, 10.0);
        assert_eq!(falling.membership(10.0), 1.0);
        assert_eq!(falling.membership(10.001), 0.0);
    }

    #[test]
    fn non_finite_values_carry_no_evidence() {
        let shape = TrapezoidShape::new(-100.0, -100.0, 100.0, 100.0);
        assert_eq!(shape.membership(f64::NAN), 0.0);
        assert_eq!(shape.membership(f64::INFINITY), 0.0);
        assert_eq!(shape.membership(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn membership_stays_within_unit_interval() {
        let shape = TrapezoidShape::new(0.0, 2.0, 4.0, 8.0);
        let mut x = -20.0;
        while x < 20.0 {
            let y = shape.membership(x);
            assert!((0.0..=1.0).contains(&y), "membership({}) = {}", x, y);
            x += 0.25;
        }
    }

    #[test]
    fn evaluate_maps_the_whole_grid() {
        let shape = TrapezoidShape::new(0.0, 0.0, 10.0, 10.0);
        let data = array![[5.0, 20.0], [f64::NAN, -3.0]];
        let result = shape.evaluate(data.view());
        assert_eq!(result, array![[1.0, 0.0], [0.0, 0.0]]);
    }
}
