use std::time::Duration;

/// Counters for one batch shading pass: how many fragments came in, how the
/// face-selection policy split them, and how long the pass took.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub fragments: usize,
    pub shaded: usize,
    pub discarded: usize,
    pub back_facing: usize,
    pub total: Duration,
}

impl PassStats {
    pub fn summary(&self) -> String {
        format!(
            "shade frag={} shaded={} discarded={} back={} total={:.2}ms",
            self.fragments,
            self.shaded,
            self.discarded,
            self.back_facing,
            self.total.as_secs_f32() * 1000.0,
        )
    }
}
