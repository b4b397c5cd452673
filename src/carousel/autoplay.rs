use tracing::debug;

/// Cancellable repeating timer. Dropping it is the cancellation.
#[derive(Debug, Clone, PartialEq)]
struct Interval {
    period: f32,
    elapsed: f32,
}

impl Interval {
    fn start(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Number of periods completed during `dt`.
    fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Timer-driven advancement to the next slide.
///
/// `enabled` is the user's choice (`play`/`pause`); hovering the carousel
/// only suspends the running timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    enabled: bool,
    delay: f32,
    slide_count: usize,
    timer: Option<Interval>,
}

impl Autoplay {
    pub fn new(enabled: bool, delay_ms: u64, slide_count: usize) -> Self {
        let mut autoplay = Self {
            enabled,
            delay: delay_ms.max(1) as f32 / 1000.0,
            slide_count,
            timer: None,
        };
        autoplay.restart();
        autoplay
    }

    fn can_run(&self) -> bool {
        self.enabled && self.slide_count > 1
    }

    fn restart(&mut self) {
        self.timer = self.can_run().then(|| Interval::start(self.delay));
    }

    pub fn play(&mut self) {
        self.enabled = true;
        self.restart();
        debug!(running = self.is_running(), "autoplay on");
    }

    pub fn pause(&mut self) {
        self.enabled = false;
        self.timer = None;
        debug!("autoplay off");
    }

    /// Pointer entered the carousel.
    pub fn suspend(&mut self) {
        self.timer = None;
    }

    /// Pointer left the carousel.
    pub fn resume(&mut self) {
        if self.timer.is_none() {
            self.restart();
        }
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    /// Advances the timer; returns how many `next` commands are due.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.timer.as_mut().map_or(0, |timer| timer.tick(dt))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}
