use std::time::{Duration, Instant};

/// Runs `f` and logs how long it took at info level.
pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &str, f: F) -> R {
    let begin = Instant::now();
    let res = f();
    log::info!(target: "scoped timer", "{}: {}", label, format_elapsed(begin.elapsed()));
    res
}

pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        let milli = elapsed.as_secs_f32() * 1000.0;
        format!("{milli:.3}ms")
    } else if elapsed < Duration::from_secs(60) {
        let s = elapsed.as_secs_f32();
        format!("{s:.3}s")
    } else {
        let secs = elapsed.as_secs();
        format!("{}m{}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_pick_a_unit() {
        assert_eq!(format_elapsed(Duration::from_millis(15)), "15.000ms");
        assert_eq!(format_elapsed(Duration::from_secs(2)), "2.000s");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1m30s");
    }
}
