use crate::core::Accumulator;

macro_rules! succ {
    ($e:expr) => {
        assert!($e.is_ok());
    }
}

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

/// Accumulator tracking a weighted sum and the number of calls it received.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedSum {
    pub sum: f64,
    pub calls: u32,
}

impl WeightedSum {
    pub fn new(sum: f64, calls: u32) -> WeightedSum {
        WeightedSum { sum, calls }
    }
}

impl Accumulator for WeightedSum {
    type Weight = f64;

    fn call(&mut self) {
        self.sum += 1.0;
        self.calls += 1;
    }

    fn call_with(&mut self, weight: f64) {
        self.sum += weight;
        self.calls += 1;
    }

    fn merge(&mut self, other: &WeightedSum) {
        self.sum += other.sum;
        self.calls += other.calls;
    }

    fn scale(&mut self, factor: f64) {
        self.sum *= factor;
    }
}
