//! Numeric rules

crate::rule! {
    /// Validates that a value is at least `bound` (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Clone> { bound: T } for T => T;
    check(self, input) { *input >= self.bound }
    output(self, input) { input.clone() }
    message { "Too small" }
    fn min(bound: T);
}
