use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Which side of a binary market a price belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum Outcome {
    #[strum(serialize = "YES")]
    Yes,
    #[strum(serialize = "NO")]
    No,
}

/// One sample of a YES/NO price history.
/// `no_price` is always derived from `yes_price`, so the pair sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    timestamp_ms: i64,
    yes_price: f64,
    no_price: f64,
    volume: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, yes_price: f64, volume: f64) -> Self {
        debug_assert!(volume >= 0.0, "volume must be non-negative, got {}", volume);
        PricePoint {
            timestamp_ms,
            yes_price,
            no_price: 1.0 - yes_price,
            volume,
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub fn yes_price(&self) -> f64 {
        self.yes_price
    }

    pub fn no_price(&self) -> f64 {
        self.no_price
    }

    pub fn price(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Yes => self.yes_price,
            Outcome::No => self.no_price,
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_price_is_complement() {
        let p = PricePoint::new(0, 0.6234, 150_000.0);
        assert_eq!(p.price(Outcome::Yes), 0.6234);
        assert!((p.yes_price() + p.no_price() - 1.0).abs() < 1e-12);
        assert_eq!(p.price(Outcome::No), p.no_price());
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Yes.to_string(), "YES");
        assert_eq!(Outcome::No.to_string(), "NO");
    }
}
