use chrono::{DateTime, Utc};

/// Timestamp source injected into the services layer.
///
/// Session start and completion times come from here, so tests pin the clock
/// to a known instant instead of sampling wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    pinned: Option<DateTime<Utc>>,
}

impl Clock {
    /// A clock that reads the system time.
    #[must_use]
    pub fn system() -> Self {
        Self { pinned: None }
    }

    /// A clock pinned to `at`; every `now()` returns that instant.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self { pinned: Some(at) }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.pinned.unwrap_or_else(Utc::now)
    }
}

/// The instant fixed clocks in tests are pinned to (2025-05-23T11:33:20Z).
///
/// # Panics
///
/// Panics if the constant timestamp cannot be represented, which it can.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_748_000_000, 0).expect("constant timestamp is representable")
}

/// A clock pinned to [`fixed_now`].
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn fixed_clock_is_stable() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), fixed_now());
    }

    #[test]
    fn fixed_clocks_pin_arbitrary_instants() {
        let at = fixed_now() + Duration::minutes(5);
        assert_eq!(Clock::fixed(at).now(), at);
    }
}
