/// Result of advancing a sequence: either a yielded value to continue with,
/// or completion with a final return payload.
///
/// `Step` plays the role for sequences that `Option` plays for optional values
/// and `Result` for fallible operations. A step with `Step::Complete` is
/// terminal: a well-behaved sequence keeps reporting `Complete` on every
/// advance after the first one (idempotent termination).
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let continuing: Step<i32, &str> = Step::Yielded(42);
/// let finished: Step<i32, &str> = Step::Complete("finished");
///
/// assert_eq!(continuing.map_yielded(|v| v * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T, R = ()> {
    /// The sequence produced a value and can be advanced again.
    Yielded(T),
    /// The sequence terminated with a final payload.
    Complete(R),
}

impl<T, R> Step<T, R> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete("done");
    /// assert!(x.is_complete());
    /// ```
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<T>`, discarding the return payload if any.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    ///
    /// let y: Step<i32, &str> = Step::Complete("done");
    /// assert_eq!(y.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<T> {
        match self {
            Step::Yielded(v) => Some(v),
            Step::Complete(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding the yielded value if any.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete("done");
    /// assert_eq!(x.complete_value(), Some("done"));
    /// ```
    #[inline]
    pub fn complete_value(self) -> Option<R> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(r) => Some(r),
        }
    }

    /// Maps the yielded value, leaving a terminal step untouched.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(21);
    /// assert_eq!(x.map_yielded(|v| v * 2), Step::Yielded(42));
    /// ```
    #[inline]
    pub fn map_yielded<T2, F>(self, f: F) -> Step<T2, R>
    where
        F: FnOnce(T) -> T2,
    {
        match self {
            Step::Yielded(v) => Step::Yielded(f(v)),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Maps the return payload, leaving a yielded step untouched.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, i32> = Step::Complete(5);
    /// assert_eq!(x.map_complete(|r| r * 2), Step::Complete(10));
    /// ```
    #[inline]
    pub fn map_complete<R2, F>(self, f: F) -> Step<T, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Step::Yielded(v) => Step::Yielded(v),
            Step::Complete(r) => Step::Complete(f(r)),
        }
    }

    /// Maps both sides at once.
    #[inline]
    pub fn map<T2, R2, FT, FR>(self, ft: FT, fr: FR) -> Step<T2, R2>
    where
        FT: FnOnce(T) -> T2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Step::Yielded(v) => Step::Yielded(ft(v)),
            Step::Complete(r) => Step::Complete(fr(r)),
        }
    }

    /// Returns the yielded value or a default.
    #[inline]
    pub fn yielded_or(self, default: T) -> T {
        match self {
            Step::Yielded(v) => v,
            Step::Complete(_) => default,
        }
    }

    /// Returns the return payload or a default.
    #[inline]
    pub fn complete_or(self, default: R) -> R {
        match self {
            Step::Yielded(_) => default,
            Step::Complete(r) => r,
        }
    }

    /// Converts from `&Step<T, R>` to `Step<&T, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Step<&T, &R> {
        match self {
            Step::Yielded(v) => Step::Yielded(v),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Returns the yielded value, panicking on a terminal step.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.unwrap_yielded(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> T
    where
        R: std::fmt::Debug,
    {
        match self {
            Step::Yielded(v) => v,
            Step::Complete(r) => {
                panic!("called `Step::unwrap_yielded()` on a `Complete` value: {r:?}")
            }
        }
    }

    /// Returns the return payload, panicking on a yielded step.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete("done");
    /// assert_eq!(x.unwrap_complete(), "done");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_complete(self) -> R
    where
        T: std::fmt::Debug,
    {
        match self {
            Step::Yielded(v) => {
                panic!("called `Step::unwrap_complete()` on a `Yielded` value: {v:?}")
            }
            Step::Complete(r) => r,
        }
    }
}

impl<T, E, R> Step<Result<T, E>, R> {
    /// Transposes a step of a fallible value into a fallible step.
    ///
    /// `Yielded(Err(e))` becomes `Err(e)`, everything else is wrapped in `Ok`.
    #[inline]
    pub fn transpose(self) -> Result<Step<T, R>, E> {
        match self {
            Step::Yielded(Ok(v)) => Ok(Step::Yielded(v)),
            Step::Yielded(Err(e)) => Err(e),
            Step::Complete(r) => Ok(Step::Complete(r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let y: Step<i32, ()> = Step::Yielded(1);
        let c: Step<i32, ()> = Step::Complete(());
        assert!(y.is_yielded() && !y.is_complete());
        assert!(c.is_complete() && !c.is_yielded());
    }

    #[test]
    fn test_map_yielded_skips_complete() {
        let c: Step<i32, &str> = Step::Complete("end");
        assert_eq!(c.map_yielded(|v| v + 1), Step::Complete("end"));
    }

    #[test]
    fn test_map_complete_skips_yielded() {
        let y: Step<i32, i32> = Step::Yielded(3);
        assert_eq!(y.map_complete(|r| r + 1), Step::Yielded(3));
    }

    #[test]
    fn test_map_both_sides() {
        let y: Step<i32, i32> = Step::Yielded(2);
        let c: Step<i32, i32> = Step::Complete(10);
        assert_eq!(y.map(|v| v * 2, |r| r + 1), Step::Yielded(4));
        assert_eq!(c.map(|v| v * 2, |r| r + 1), Step::Complete(11));
    }

    #[test]
    fn test_transpose() {
        let ok: Step<Result<i32, &str>, ()> = Step::Yielded(Ok(5));
        let err: Step<Result<i32, &str>, ()> = Step::Yielded(Err("boom"));
        assert_eq!(ok.transpose(), Ok(Step::Yielded(5)));
        assert_eq!(err.transpose(), Err("boom"));
    }
}
