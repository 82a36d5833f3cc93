//! Contiguous run of octet values.

/// An inclusive run `start..=end` of consecutive octet values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContiguousRun {
    pub start: u8,
    pub end: u8,
}

impl ContiguousRun {
    /// Create a run, swapping the bounds if given in reverse order.
    pub fn new(start: u8, end: u8) -> ContiguousRun {
        if start <= end {
            ContiguousRun { start, end }
        } else {
            ContiguousRun {
                start: end,
                end: start,
            }
        }
    }

    pub fn single(value: u8) -> ContiguousRun {
        ContiguousRun {
            start: value,
            end: value,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for ContiguousRun {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        assert_eq!(ContiguousRun::new(9, 3), ContiguousRun { start: 3, end: 9 });
        assert!(ContiguousRun::single(4).is_single());
        assert!(!ContiguousRun::new(0, 255).is_single());
    }

    #[test]
    fn test_display() {
        assert_eq!(ContiguousRun::single(7).to_string(), "7");
        assert_eq!(ContiguousRun::new(10, 20).to_string(), "10-20");
    }
}
