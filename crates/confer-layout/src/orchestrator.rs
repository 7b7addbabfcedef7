//! Layout orchestrator.
//!
//! [`LayoutEngine`] runs every region calculator in dependency order for one
//! input snapshot, performs the session-store side effects and hands the full
//! set of regions to an [`OutputSink`] in a single call.

use confer_core::{
    Bounds, CameraDockPosition, ConfigError, ContentKind, DeviceContext, DeviceType,
    LayoutConstants, LayoutError, LayoutInput, RegionKey,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::primitives::max;
use crate::regions::camera_dock::{self, DockEnvironment, GestureTransition};
use crate::regions::drop_zones::{self, DropZones};
use crate::regions::{
    action_bar, captions, media_area, nav_bar, shared_content, sidebar, RegionContext,
};
use crate::store::{PersistedSize, SessionStore, WebcamSize};

/// Value emitted for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputPayload {
    Bounds(Bounds),
    DropZones(DropZones),
}

/// One keyed region update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputUpdate {
    pub key: RegionKey,
    #[serde(rename = "value")]
    pub payload: OutputPayload,
}

/// Receiver of a pass's updates. Called once per emitted pass with every
/// region, so consumers never observe a partially updated layout.
pub trait OutputSink {
    fn apply(&mut self, updates: &[OutputUpdate]);
}

/// Sink that keeps every batch it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub batches: Vec<Vec<OutputUpdate>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent batch.
    pub fn last(&self) -> Option<&[OutputUpdate]> {
        self.batches.last().map(Vec::as_slice)
    }
}

impl OutputSink for CollectingSink {
    fn apply(&mut self, updates: &[OutputUpdate]) {
        self.batches.push(updates.to_vec());
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn apply(&mut self, updates: &[OutputUpdate]) {
        (**self).apply(updates)
    }
}

/// Every region computed in one pass. All bounds are normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutput {
    pub media_area: Bounds,
    pub camera_dock: Bounds,
    pub presentation: Bounds,
    pub screen_share: Bounds,
    pub external_video: Bounds,
    pub generic_content: Bounds,
    pub shared_notes: Bounds,
    pub sidebar_navigation: Bounds,
    pub sidebar_content: Bounds,
    pub drop_zones: DropZones,
    pub action_bar: Bounds,
    pub nav_bar: Bounds,
    pub captions: Bounds,
    /// Dock position after device fallbacks
    pub camera_dock_position: CameraDockPosition,
    /// Size written to the session store in this pass, if any
    #[serde(skip)]
    pub persisted: Option<WebcamSize>,
}

impl LayoutOutput {
    /// Payload emitted under `key`.
    pub fn get(&self, key: RegionKey) -> OutputPayload {
        let bounds = match key {
            RegionKey::MediaArea => self.media_area,
            RegionKey::CameraDock => self.camera_dock,
            RegionKey::Presentation => self.presentation,
            RegionKey::ScreenShare => self.screen_share,
            RegionKey::ExternalVideo => self.external_video,
            RegionKey::GenericContent => self.generic_content,
            RegionKey::SharedNotes => self.shared_notes,
            RegionKey::SidebarNavigation => self.sidebar_navigation,
            RegionKey::SidebarContent => self.sidebar_content,
            RegionKey::DropZones => return OutputPayload::DropZones(self.drop_zones),
            RegionKey::ActionBar => self.action_bar,
            RegionKey::NavBar => self.nav_bar,
            RegionKey::Captions => self.captions,
        };
        OutputPayload::Bounds(bounds)
    }

    /// Bounds of a single-rectangle region; `None` for drop zones.
    pub fn bounds(&self, key: RegionKey) -> Option<Bounds> {
        match self.get(key) {
            OutputPayload::Bounds(bounds) => Some(bounds),
            OutputPayload::DropZones(_) => None,
        }
    }

    /// Bounds of a shared-content region.
    pub fn content(&self, kind: ContentKind) -> Bounds {
        match kind {
            ContentKind::Presentation => self.presentation,
            ContentKind::ScreenShare => self.screen_share,
            ContentKind::ExternalVideo => self.external_video,
            ContentKind::GenericContent => self.generic_content,
            ContentKind::SharedNotes => self.shared_notes,
        }
    }

    /// One update per region, in emission order.
    pub fn updates(&self) -> Vec<OutputUpdate> {
        RegionKey::ALL
            .iter()
            .map(|&key| OutputUpdate {
                key,
                payload: self.get(key),
            })
            .collect()
    }
}

fn normalize_zones(zones: DropZones) -> DropZones {
    DropZones {
        content_top: zones.content_top.normalized(),
        content_bottom: zones.content_bottom.normalized(),
        content_left: zones.content_left.normalized(),
        content_right: zones.content_right.normalized(),
        sidebar_content_bottom: zones.sidebar_content_bottom.normalized(),
    }
}

/// Sequences the region calculators and owns the session store.
#[derive(Debug)]
pub struct LayoutEngine<S: SessionStore> {
    constants: LayoutConstants,
    store: S,
    gesture_active: bool,
    seeded_device: Option<DeviceType>,
}

impl<S: SessionStore> LayoutEngine<S> {
    /// Create an engine with the default constants.
    pub fn new(store: S) -> Self {
        Self {
            constants: LayoutConstants::default(),
            store,
            gesture_active: false,
            seeded_device: None,
        }
    }

    /// Create an engine with validated custom constants.
    pub fn with_constants(constants: LayoutConstants, store: S) -> Result<Self, LayoutError> {
        constants.validate()?;
        Ok(Self {
            constants,
            ..Self::new(store)
        })
    }

    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    /// Replace the constants. Invalid constants leave the engine unchanged.
    pub fn set_constants(&mut self, constants: LayoutConstants) -> Result<(), ConfigError> {
        constants.validate()?;
        self.constants = constants;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Compute and emit one pass. Returns whether anything was emitted.
    pub fn run<O: OutputSink + ?Sized>(
        &mut self,
        input: &LayoutInput,
        device: &DeviceContext,
        sink: &mut O,
    ) -> bool {
        match self.compute(input, device) {
            Some(output) => {
                sink.apply(&output.updates());
                true
            }
            None => false,
        }
    }

    /// Compute every region. Returns `None` until the device type is known.
    pub fn compute(&mut self, input: &LayoutInput, device: &DeviceContext) -> Option<LayoutOutput> {
        let Some(device_type) = device.device_type else {
            debug!("device type unknown, skipping layout pass");
            return None;
        };
        self.seed_session(device_type);

        let ctx = RegionContext::new(input, device, &self.constants);
        let z = self.constants.z;

        let action_bar = action_bar::calculate(&ctx);
        let media = media_area::calculate(&ctx, action_bar.reserved_height);
        let nav_bar = nav_bar::calculate(&ctx, media.banner_height);
        let stage = media.rect.shrink_top(nav_bar.offset);
        let column = sidebar::content_column(&ctx, action_bar.reserved_height);
        let nav_width = sidebar::navigation_width(&ctx);

        let gesture_active = input.camera_dock.gesture_active();
        let transition = GestureTransition::between(self.gesture_active, gesture_active);
        self.gesture_active = gesture_active;

        let env = DockEnvironment {
            media,
            stage,
            column,
            action_bar_height: action_bar.reserved_height,
        };
        let dock = camera_dock::calculate(&ctx, &env, &mut self.store, transition);

        let shared = shared_content::calculate(&ctx, media.rect.height, stage, &dock.bounds, dock.position);
        let zones = drop_zones::calculate(&ctx, stage, &dock.bounds, nav_width, column);

        let dock_in_column = dock.bounds.display && dock.position == CameraDockPosition::SidebarBottom;
        let column_dock_height = if dock_in_column { dock.bounds.height } else { 0.0 };
        let sidebar_navigation =
            sidebar::navigation(&ctx, stage, action_bar.reserved_height, nav_width);
        let sidebar_content = sidebar::content(&ctx, stage, column, column_dock_height);
        let captions = captions::calculate(&ctx, stage, &dock, media.is_collapsed());

        let media_area = Bounds::rect(
            media.rect.top,
            media.rect.left,
            media.rect.width,
            max(media.rect.height, 0.0),
        )
        .with_z_index(z.base)
        .anchored_in(ctx.viewport_width());

        let output = LayoutOutput {
            media_area: media_area.normalized(),
            camera_dock: dock.bounds.normalized(),
            presentation: shared.get(ContentKind::Presentation).normalized(),
            screen_share: shared.get(ContentKind::ScreenShare).normalized(),
            external_video: shared.get(ContentKind::ExternalVideo).normalized(),
            generic_content: shared.get(ContentKind::GenericContent).normalized(),
            shared_notes: shared.get(ContentKind::SharedNotes).normalized(),
            sidebar_navigation: sidebar_navigation.normalized(),
            sidebar_content: sidebar_content.normalized(),
            drop_zones: normalize_zones(zones),
            action_bar: action_bar.bounds.normalized(),
            nav_bar: nav_bar.bounds.normalized(),
            captions: captions.normalized(),
            camera_dock_position: dock.position,
            persisted: dock.persisted,
        };

        if let Err(err) = PersistedSize::set_layout_ready(&mut self.store, true) {
            warn!(error = %err, "failed to mark layout ready");
        }
        debug!(
            ?device_type,
            regions = RegionKey::ALL.len(),
            ?transition,
            "layout pass"
        );
        Some(output)
    }

    /// Seed session defaults on the first known device type and whenever the
    /// device type changes.
    fn seed_session(&mut self, device_type: DeviceType) {
        if self.seeded_device == Some(device_type) {
            return;
        }
        let previous = self.seeded_device.replace(device_type);
        let persisted = PersistedSize::load(&self.store);
        let reload = previous.is_none() && persisted.has_loaded_once;

        if !reload {
            if let Err(err) = PersistedSize::store_webcam(&mut self.store, WebcamSize::default()) {
                warn!(error = %err, "failed to reset camera dock size");
            }
        }
        if let Err(err) = PersistedSize::mark_loaded_once(&mut self.store) {
            warn!(error = %err, "failed to mark session as loaded");
        }
        info!(?device_type, ?previous, kept_size = reload, "seeded layout session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, LAYOUT_READY_KEY, LOADED_ONCE_KEY, WEBCAM_SIZE_KEY};
    use proptest::prelude::*;

    fn desktop() -> DeviceContext {
        DeviceContext::new(DeviceType::Desktop, 1920.0, 1080.0)
    }

    fn with_cameras(position: CameraDockPosition, num_cameras: u32) -> LayoutInput {
        let mut input = LayoutInput::default();
        input.camera_dock.position = position;
        input.camera_dock.num_cameras = num_cameras;
        input
    }

    fn all_bounds(output: &LayoutOutput) -> Vec<Bounds> {
        let zones = output.drop_zones;
        let mut bounds: Vec<Bounds> = RegionKey::ALL
            .iter()
            .filter_map(|&key| output.bounds(key))
            .collect();
        bounds.extend([
            zones.content_top,
            zones.content_bottom,
            zones.content_left,
            zones.content_right,
            zones.sidebar_content_bottom,
        ]);
        bounds
    }

    #[test]
    fn test_unknown_device_skips_pass() {
        let mut engine = LayoutEngine::new(MemoryStore::new());
        let device = DeviceContext::default();
        let mut sink = CollectingSink::new();

        assert!(engine.compute(&LayoutInput::default(), &device).is_none());
        assert!(!engine.run(&LayoutInput::default(), &device, &mut sink));
        assert!(sink.batches.is_empty());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_desktop_top_dock_scenario() {
        let mut input = with_cameras(CameraDockPosition::Top, 2);
        input.presentation.is_open = true;
        input.presentation.slide_count = 5;
        let mut engine = LayoutEngine::new(MemoryStore::new());

        let output = engine.compute(&input, &desktop()).expect("device is known");
        let dock = output.camera_dock;
        assert!(dock.display);
        assert!((dock.top - 60.0).abs() < 0.001);
        assert!((dock.height - 202.0).abs() < 0.001);
        assert!((output.presentation.top - (dock.bottom() + 28.0)).abs() < 0.001);
        assert_eq!(output.presentation.z_index, 2);
        assert!((output.media_area.height - 1010.0).abs() < 0.001);
        assert!((output.action_bar.top - 1010.0).abs() < 0.001);
    }

    #[test]
    fn test_mobile_top_dock_scenario() {
        let mut input = with_cameras(CameraDockPosition::Top, 1);
        input.banner_bar.has_banner = true;
        let device = DeviceContext::new(DeviceType::Mobile, 375.0, 667.0);
        let mut engine = LayoutEngine::new(MemoryStore::new());

        let output = engine.compute(&input, &device).expect("device is known");
        assert!((output.camera_dock.height - 100.0).abs() < 0.001);
        assert_eq!(output.camera_dock.top, 0.0);
        assert!(!output.nav_bar.display);
        // No banner band on mobile: 667 - (70 + 40)
        assert_eq!(output.media_area.top, 0.0);
        assert!((output.media_area.height - 557.0).abs() < 0.001);
    }

    #[test]
    fn test_mobile_drag_raises_dock_and_zones() {
        let mut input = with_cameras(CameraDockPosition::Top, 2);
        input.camera_dock.is_dragging = true;
        let device = DeviceContext::new(DeviceType::Mobile, 375.0, 667.0);
        let mut engine = LayoutEngine::new(MemoryStore::new());

        let output = engine.compute(&input, &device).expect("device is known");
        assert_eq!(output.camera_dock.z_index, 99);
        assert!(output.drop_zones.content_top.display);
        for (_, zone) in output.drop_zones.targets() {
            if zone.display {
                assert_eq!(zone.z_index, 99);
            }
        }
    }

    #[test]
    fn test_mobile_hides_navigation_sidebar() {
        let mut input = LayoutInput::default();
        input.sidebar_navigation.is_open = true;
        let device = DeviceContext::new(DeviceType::Mobile, 375.0, 667.0);
        let mut engine = LayoutEngine::new(MemoryStore::new());

        let output = engine.compute(&input, &device).expect("device is known");
        assert!(!output.sidebar_navigation.display);
    }

    #[test]
    fn test_single_atomic_emission_in_key_order() {
        let mut engine = LayoutEngine::new(MemoryStore::new());
        let mut sink = CollectingSink::new();

        assert!(engine.run(&LayoutInput::default(), &desktop(), &mut sink));
        assert_eq!(sink.batches.len(), 1);
        let keys: Vec<RegionKey> = sink.batches[0].iter().map(|u| u.key).collect();
        assert_eq!(keys, RegionKey::ALL.to_vec());
    }

    #[test]
    fn test_session_seeding_and_ready_flag() {
        let mut engine = LayoutEngine::new(MemoryStore::new());
        engine.compute(&LayoutInput::default(), &desktop());

        let store = engine.store();
        assert_eq!(store.get(LOADED_ONCE_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(LAYOUT_READY_KEY).as_deref(), Some("true"));
        assert_eq!(PersistedSize::load(store).webcam, WebcamSize::default());
        assert!(store.get(WEBCAM_SIZE_KEY).is_some());
    }

    #[test]
    fn test_persistence_round_trip() {
        let device = desktop();
        let mut input = with_cameras(CameraDockPosition::Top, 2);
        let mut engine = LayoutEngine::new(MemoryStore::new());

        input.camera_dock.is_resizing = true;
        input.camera_dock.width = 640.0;
        input.camera_dock.height = 300.0;
        let output = engine.compute(&input, &device).expect("device is known");
        assert!(output.persisted.is_none());
        assert!((output.camera_dock.height - 300.0).abs() < 0.001);

        input.camera_dock.is_resizing = false;
        let output = engine.compute(&input, &device).expect("device is known");
        assert_eq!(output.persisted.map(|s| s.height), Some(300.0));
        assert!((PersistedSize::load(engine.store()).webcam.height - 300.0).abs() < 0.001);

        // A reload in the same session keeps the manual size
        let mut reloaded = LayoutEngine::new(engine.into_store());
        input.camera_dock.width = 0.0;
        input.camera_dock.height = 0.0;
        input.captions.has_captions = true;
        let output = reloaded.compute(&input, &device).expect("device is known");
        assert!((output.camera_dock.height - 300.0).abs() < 0.001);
        assert!((PersistedSize::load(reloaded.store()).webcam.width - 640.0).abs() < 0.001);
    }

    #[test]
    fn test_device_change_resets_manual_size() {
        let mut input = with_cameras(CameraDockPosition::Top, 2);
        let mut engine = LayoutEngine::new(MemoryStore::new());

        input.camera_dock.is_resizing = true;
        input.camera_dock.height = 300.0;
        engine.compute(&input, &desktop());
        input.camera_dock.is_resizing = false;
        engine.compute(&input, &desktop());

        input.camera_dock.height = 0.0;
        let tablet = DeviceContext::new(DeviceType::Tablet, 1920.0, 1080.0);
        let output = engine.compute(&input, &tablet).expect("device is known");
        assert_eq!(PersistedSize::load(engine.store()).webcam, WebcamSize::default());
        assert!((output.camera_dock.height - 202.0).abs() < 0.001);
    }

    #[test]
    fn test_tiny_viewport_clamps_media_area() {
        let mut input = with_cameras(CameraDockPosition::Top, 2);
        input.screen_share.has_screen_share = true;
        let device = DeviceContext::new(DeviceType::Desktop, 300.0, 50.0);
        let mut engine = LayoutEngine::new(MemoryStore::new());

        let output = engine.compute(&input, &device).expect("device is known");
        assert_eq!(output.media_area.height, 0.0);
        assert!(!output.camera_dock.display);
        assert!(!output.screen_share.display);
    }

    #[test]
    fn test_fullscreen_presentation_on_top() {
        let mut input = with_cameras(CameraDockPosition::Top, 2);
        input.presentation.is_open = true;
        let device = desktop().with_fullscreen("presentation");
        let mut engine = LayoutEngine::new(MemoryStore::new());

        let output = engine.compute(&input, &device).expect("device is known");
        assert_eq!(output.presentation.z_index, 99);
        assert!(output.presentation.z_index >= output.camera_dock.z_index);
    }

    #[test]
    fn test_rejects_invalid_constants() {
        let constants = LayoutConstants {
            drop_zone_size: -1.0,
            ..LayoutConstants::default()
        };
        assert!(matches!(
            LayoutEngine::with_constants(constants.clone(), MemoryStore::new()),
            Err(LayoutError::Config(ConfigError::InvalidConstant { name: "dropZoneSize", .. }))
        ));

        let mut engine = LayoutEngine::new(MemoryStore::new());
        assert!(engine.set_constants(constants).is_err());
        assert_eq!(engine.constants(), &LayoutConstants::default());
    }

    #[test]
    fn test_updates_serialize_with_wire_names() {
        let mut engine = LayoutEngine::new(MemoryStore::new());
        let output = engine
            .compute(&LayoutInput::default(), &desktop())
            .expect("device is known");
        let json = serde_json::to_value(output.updates()).expect("serializable");
        assert_eq!(json[0]["key"], "mediaArea");
        assert_eq!(json[9]["key"], "dropZones");
        assert!(json[9]["value"]["contentTop"].is_object());
        assert_eq!(json[10]["value"]["zIndex"], 1);
    }

    fn arb_device() -> impl Strategy<Value = DeviceContext> {
        (
            prop_oneof![
                Just(DeviceType::Mobile),
                Just(DeviceType::Tablet),
                Just(DeviceType::Desktop)
            ],
            0.0f64..4000.0,
            0.0f64..3000.0,
            any::<bool>(),
            8.0f64..32.0,
        )
            .prop_map(|(device_type, width, height, rtl, font)| {
                DeviceContext::new(device_type, width, height)
                    .with_rtl(rtl)
                    .with_font_size(font)
            })
    }

    fn arb_input() -> impl Strategy<Value = LayoutInput> {
        (
            prop_oneof![
                Just(CameraDockPosition::Top),
                Just(CameraDockPosition::Bottom),
                Just(CameraDockPosition::Left),
                Just(CameraDockPosition::Right),
                Just(CameraDockPosition::SidebarBottom)
            ],
            0u32..6,
            any::<(bool, bool, bool, bool)>(),
            any::<(bool, bool, bool, bool)>(),
            0.0f64..3000.0,
            0.0f64..3000.0,
        )
            .prop_map(
                |(position, num_cameras, (presentation, screen, nav, content), (drag, resize, banner, captions), w, h)| {
                    let mut input = LayoutInput::default();
                    input.camera_dock.position = position;
                    input.camera_dock.num_cameras = num_cameras;
                    input.camera_dock.is_dragging = drag;
                    input.camera_dock.is_resizing = resize;
                    input.camera_dock.width = w;
                    input.camera_dock.height = h;
                    input.presentation.is_open = presentation;
                    input.screen_share.has_screen_share = screen;
                    input.screen_share.width = w;
                    input.screen_share.height = h;
                    input.sidebar_navigation.is_open = nav;
                    input.sidebar_content.is_open = content;
                    input.banner_bar.has_banner = banner;
                    input.captions.has_captions = captions;
                    input
                },
            )
    }

    proptest! {
        #[test]
        fn prop_emitted_bounds_are_non_negative(input in arb_input(), device in arb_device()) {
            let mut engine = LayoutEngine::new(MemoryStore::new());
            let output = engine.compute(&input, &device).expect("device is known");
            for b in all_bounds(&output) {
                for v in [b.top, b.left, b.right, b.width, b.height, b.min_width, b.max_width, b.min_height, b.max_height] {
                    prop_assert!(v >= 0.0, "negative field in {:?}", b);
                }
                prop_assert!(b.z_index >= 0);
                if !b.display {
                    prop_assert_eq!(b, Bounds::hidden());
                }
            }
        }

        #[test]
        fn prop_output_is_deterministic(input in arb_input(), device in arb_device()) {
            let mut first = LayoutEngine::new(MemoryStore::new());
            let mut second = LayoutEngine::new(MemoryStore::new());
            prop_assert_eq!(first.compute(&input, &device), second.compute(&input, &device));
        }

        #[test]
        fn prop_camera_dock_height_within_limits(height in 0.0f64..5000.0) {
            let mut input = with_cameras(CameraDockPosition::Bottom, 3);
            input.camera_dock.is_resizing = true;
            input.camera_dock.height = height;
            let mut engine = LayoutEngine::new(MemoryStore::new());
            let dock = engine.compute(&input, &desktop()).expect("device is known").camera_dock;
            prop_assert!(dock.height >= dock.min_height - 1e-9);
            prop_assert!(dock.height <= dock.max_height + 1e-9);
        }

        #[test]
        fn prop_small_devices_never_occlude(height in 400.0f64..699.0, portrait in any::<bool>()) {
            let mut input = with_cameras(CameraDockPosition::Top, 2);
            input.screen_share.has_screen_share = true;
            input.screen_share.width = if portrait { 720.0 } else { 1280.0 };
            input.screen_share.height = if portrait { 1280.0 } else { 720.0 };
            let device = DeviceContext::new(DeviceType::Desktop, 1280.0, height);
            let mut engine = LayoutEngine::new(MemoryStore::new());
            let output = engine.compute(&input, &device).expect("device is known");
            let dock = output.camera_dock;
            if dock.display && output.screen_share.display {
                prop_assert!(output.screen_share.top >= dock.top + dock.height + 20.0 - 1e-9);
            }
        }
    }
}
