use std::fmt;

/// Unique transaction identifier, derived from the creation time.
///
/// The value is the unix-millisecond clock reading at creation; managers bump
/// it forward when two transactions land in the same millisecond, so ids stay
/// strictly increasing per manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_the_raw_millisecond_value() {
        assert_eq!(TransactionId(1705312800000).to_string(), "1705312800000");
    }

    #[test]
    fn orders_by_creation_time() {
        assert!(TransactionId(2) > TransactionId(1));
    }
}
