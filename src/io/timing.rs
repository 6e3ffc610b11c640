use std::time::{Duration, Instant};

/// Runs `f` and returns its value together with the wall-clock time it took
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// A value paired with the time it took to produce
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn measure<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let (value, elapsed) = timed(f);
        Timed { value, elapsed }
    }

    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }

    pub fn into_parts(self) -> (T, Duration) {
        (self.value, self.elapsed)
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Moves the error out so that `?` can be applied to a timed fallible call
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}
