//! Re-runs the layout engine when anything it depends on changes.
//!
//! Input, device type, text direction, font size and fullscreen changes run a
//! pass immediately. Viewport resizes go through a [`ResizeThrottle`] so a
//! burst of resize events produces at most one pass per interval, plus one
//! trailing pass with the final size. Time is injected by the caller in
//! milliseconds.

use confer_core::{ConfigError, DeviceContext, DeviceType, LayoutConstants, LayoutInput};
use tracing::debug;

use crate::orchestrator::{LayoutEngine, OutputSink};
use crate::store::SessionStore;

/// Outcome of a throttled signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleAction {
    /// Handle the signal now
    Fire,
    /// Handle the signal once `at` is reached
    Deferred { at: f64 },
}

/// Leading- and trailing-edge throttle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeThrottle {
    interval_ms: f64,
    last_fired: Option<f64>,
    pending_at: Option<f64>,
}

impl ResizeThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_fired: None,
            pending_at: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms.max(0.0);
    }

    /// Register a signal at `now`.
    pub fn signal(&mut self, now: f64) -> ThrottleAction {
        match self.last_fired {
            Some(last) if now - last < self.interval_ms => {
                let at = last + self.interval_ms;
                self.pending_at = Some(at);
                ThrottleAction::Deferred { at }
            }
            _ => {
                self.last_fired = Some(now);
                self.pending_at = None;
                ThrottleAction::Fire
            }
        }
    }

    /// Whether a deferred signal is due at `now`. Consumes it when it is.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.pending_at {
            Some(at) if now >= at => {
                self.pending_at = None;
                self.last_fired = Some(now);
                true
            }
            _ => false,
        }
    }

    /// When the pending trailing signal is due, if there is one.
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending_at
    }
}

/// Why a pass was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerReason {
    Input,
    DeviceType,
    Direction,
    FontSize,
    Fullscreen,
    Resize,
    Constants,
    Refresh,
}

/// Holds the latest input and device snapshots and runs the engine on change.
#[derive(Debug)]
pub struct LayoutTrigger<S: SessionStore, O: OutputSink> {
    engine: LayoutEngine<S>,
    sink: O,
    input: LayoutInput,
    device: DeviceContext,
    throttle: ResizeThrottle,
}

impl<S: SessionStore, O: OutputSink> LayoutTrigger<S, O> {
    pub fn new(engine: LayoutEngine<S>, sink: O) -> Self {
        let throttle = ResizeThrottle::new(engine.constants().resize_throttle_ms);
        Self {
            engine,
            sink,
            input: LayoutInput::default(),
            device: DeviceContext::default(),
            throttle,
        }
    }

    pub fn engine(&self) -> &LayoutEngine<S> {
        &self.engine
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut O {
        &mut self.sink
    }

    pub fn input(&self) -> &LayoutInput {
        &self.input
    }

    pub fn device(&self) -> &DeviceContext {
        &self.device
    }

    pub fn throttle(&self) -> &ResizeThrottle {
        &self.throttle
    }

    /// Replace the input snapshot and run a pass.
    pub fn set_input(&mut self, input: LayoutInput) -> bool {
        self.input = input;
        self.run(TriggerReason::Input)
    }

    pub fn set_device_type(&mut self, device_type: Option<DeviceType>) -> bool {
        if self.device.device_type == device_type {
            return false;
        }
        self.device.device_type = device_type;
        self.run(TriggerReason::DeviceType)
    }

    pub fn set_direction(&mut self, is_rtl: bool) -> bool {
        if self.device.is_rtl == is_rtl {
            return false;
        }
        self.device.is_rtl = is_rtl;
        self.run(TriggerReason::Direction)
    }

    pub fn set_font_size(&mut self, font_size: f64) -> bool {
        if self.device.font_size == font_size {
            return false;
        }
        self.device.font_size = font_size;
        self.run(TriggerReason::FontSize)
    }

    pub fn set_fullscreen_element(&mut self, element_id: Option<String>) -> bool {
        if self.device.fullscreen_element_id == element_id {
            return false;
        }
        self.device.fullscreen_element_id = element_id;
        self.run(TriggerReason::Fullscreen)
    }

    /// Replace the constants and run a pass. Invalid constants are rejected
    /// without touching the current state.
    pub fn set_constants(&mut self, constants: LayoutConstants) -> Result<bool, ConfigError> {
        let interval = constants.resize_throttle_ms;
        self.engine.set_constants(constants)?;
        self.throttle.set_interval_ms(interval);
        Ok(self.run(TriggerReason::Constants))
    }

    /// Record a new viewport size. Runs a pass unless throttled; a throttled
    /// resize is picked up by a later [`tick`](Self::tick).
    pub fn resize(&mut self, width: f64, height: f64, now: f64) -> bool {
        self.device.viewport_width = width;
        self.device.viewport_height = height;
        match self.throttle.signal(now) {
            ThrottleAction::Fire => self.run(TriggerReason::Resize),
            ThrottleAction::Deferred { at } => {
                debug!(at, "resize throttled");
                false
            }
        }
    }

    /// Run the trailing resize pass once it is due.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.throttle.poll(now) {
            self.run(TriggerReason::Resize)
        } else {
            false
        }
    }

    /// Run a pass with the current snapshots.
    pub fn refresh(&mut self) -> bool {
        self.run(TriggerReason::Refresh)
    }

    fn run(&mut self, reason: TriggerReason) -> bool {
        let emitted = self.engine.run(&self.input, &self.device, &mut self.sink);
        debug!(?reason, emitted, "layout triggered");
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::CollectingSink;
    use crate::store::MemoryStore;
    use confer_core::{CameraDockPosition, RegionKey};

    fn trigger() -> LayoutTrigger<MemoryStore, CollectingSink> {
        LayoutTrigger::new(LayoutEngine::new(MemoryStore::new()), CollectingSink::new())
    }

    fn desktop_trigger() -> LayoutTrigger<MemoryStore, CollectingSink> {
        let mut trigger = trigger();
        trigger.resize(1920.0, 1080.0, 0.0);
        trigger.set_device_type(Some(DeviceType::Desktop));
        trigger
    }

    #[test]
    fn test_throttle_leading_edge() {
        let mut throttle = ResizeThrottle::new(50.0);
        assert_eq!(throttle.signal(0.0), ThrottleAction::Fire);
        assert_eq!(throttle.signal(10.0), ThrottleAction::Deferred { at: 50.0 });
        assert_eq!(throttle.signal(30.0), ThrottleAction::Deferred { at: 50.0 });
        assert_eq!(throttle.next_deadline(), Some(50.0));
    }

    #[test]
    fn test_throttle_trailing_edge() {
        let mut throttle = ResizeThrottle::new(50.0);
        throttle.signal(0.0);
        throttle.signal(20.0);
        assert!(!throttle.poll(49.0));
        assert!(throttle.poll(50.0));
        // Consumed
        assert!(!throttle.poll(60.0));
        assert_eq!(throttle.next_deadline(), None);
        // The trailing pass counts as a fire
        assert_eq!(throttle.signal(70.0), ThrottleAction::Deferred { at: 100.0 });
        assert_eq!(throttle.signal(100.0), ThrottleAction::Fire);
    }

    #[test]
    fn test_throttle_spaced_signals_fire() {
        let mut throttle = ResizeThrottle::new(50.0);
        assert_eq!(throttle.signal(0.0), ThrottleAction::Fire);
        assert_eq!(throttle.signal(50.0), ThrottleAction::Fire);
        assert_eq!(throttle.signal(200.0), ThrottleAction::Fire);
        assert!(!throttle.poll(300.0));
    }

    #[test]
    fn test_no_emission_until_device_known() {
        let mut trigger = trigger();
        let mut input = LayoutInput::default();
        input.camera_dock.num_cameras = 1;
        assert!(!trigger.set_input(input));
        assert!(!trigger.resize(1280.0, 720.0, 0.0));
        assert!(trigger.sink().batches.is_empty());

        assert!(trigger.set_device_type(Some(DeviceType::Desktop)));
        assert_eq!(trigger.sink().batches.len(), 1);
    }

    #[test]
    fn test_unchanged_values_do_not_run() {
        let mut trigger = desktop_trigger();
        let batches = trigger.sink().batches.len();
        assert!(!trigger.set_device_type(Some(DeviceType::Desktop)));
        assert!(!trigger.set_direction(false));
        assert!(!trigger.set_font_size(16.0));
        assert!(!trigger.set_fullscreen_element(None));
        assert_eq!(trigger.sink().batches.len(), batches);

        assert!(trigger.set_direction(true));
        assert!(trigger.set_font_size(20.0));
        assert!(trigger.set_fullscreen_element(Some("presentation".to_string())));
        assert_eq!(trigger.sink().batches.len(), batches + 3);
    }

    #[test]
    fn test_resize_burst_runs_leading_and_trailing_pass() {
        let mut trigger = desktop_trigger();
        let batches = trigger.sink().batches.len();

        assert!(trigger.resize(1600.0, 900.0, 100.0));
        assert!(!trigger.resize(1500.0, 850.0, 110.0));
        assert!(!trigger.resize(1400.0, 800.0, 120.0));
        assert!(!trigger.tick(140.0));
        assert!(trigger.tick(150.0));
        assert_eq!(trigger.sink().batches.len(), batches + 2);

        // The trailing pass sees the final size
        let last = trigger.sink().last().expect("emitted");
        let media = last
            .iter()
            .find(|update| update.key == RegionKey::MediaArea)
            .expect("media area emitted");
        let json = serde_json::to_value(media).expect("serializable");
        assert_eq!(json["value"]["width"], 1400.0);
    }

    #[test]
    fn test_font_size_changes_action_bar() {
        let mut trigger = desktop_trigger();
        trigger.set_font_size(28.0);
        let output = trigger
            .engine
            .compute(&trigger.input, &trigger.device)
            .expect("device is known");
        // 42 / 14 * 28 + 2 * 11
        assert!((output.action_bar.height - 106.0).abs() < 0.001);
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let mut trigger = desktop_trigger();
        let mut input = LayoutInput::default();
        input.camera_dock.position = CameraDockPosition::Bottom;
        trigger.set_input(input);

        let bad = LayoutConstants {
            sidebar_breakpoints: [1280.0, 768.0, 1920.0],
            ..LayoutConstants::default()
        };
        assert!(trigger.set_constants(bad).is_err());

        let slower = LayoutConstants {
            resize_throttle_ms: 100.0,
            ..LayoutConstants::default()
        };
        assert!(matches!(trigger.set_constants(slower), Ok(true)));
        assert_eq!(trigger.throttle().interval_ms(), 100.0);
    }
}
