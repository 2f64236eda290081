use log::info;

/// Logs the time spent in a named phase when it goes out of scope.
pub struct ScopedTimer {
    name: String,
    start: time::Tm,
    stop: Vec<(String, time::Tm)>,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: time::now_utc(),
            stop: Vec::new(),
        }
    }

    pub fn checkpoint(&mut self, name: &str) {
        self.stop.push((name.to_string(), time::now_utc()));
    }

    /// Logs and returns the milliseconds since the latest checkpoint, if any.
    pub fn elapsed_since_checkpoint(&mut self) -> Option<i64> {
        let (name, at) = self.stop.pop()?;
        let msec = (time::now_utc() - at).num_milliseconds();
        info!("\t[{}] : {} msec", name, msec);
        Some(msec)
    }

    pub fn elapsed(&self) -> i64 {
        let msec = (time::now_utc() - self.start).num_milliseconds();
        info!("\t[{}] : {} msec", self.name, msec);
        msec
    }
}

impl std::ops::Drop for ScopedTimer {
    fn drop(&mut self) {
        self.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoints_pop_in_reverse() {
        let mut timer = ScopedTimer::new("test");
        timer.checkpoint("first");
        timer.checkpoint("second");
        assert!(timer.elapsed_since_checkpoint().is_some());
        assert!(timer.elapsed_since_checkpoint().is_some());
        assert_eq!(timer.elapsed_since_checkpoint(), None);
        assert!(timer.elapsed() >= 0);
    }
}
