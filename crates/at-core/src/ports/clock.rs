pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// Current UTC calendar date.
    fn today(&self) -> chrono::NaiveDate {
        chrono::DateTime::from_timestamp_millis(self.now_ms())
            .unwrap_or_default()
            .date_naive()
    }
}

#[cfg(test)]
mockall::mock! {
    pub Clock {}

    impl ClockPort for Clock {
        fn now_ms(&self) -> i64;
    }
}
