//! Layout geometry for the Confer conferencing client.
//!
//! This crate turns a snapshot of UI state (which panels are open, where the
//! camera dock sits, what is being shared) plus the device context into
//! pixel bounds for every region of the meeting screen.
//!
//! # Architecture
//!
//! 1. **Primitives**: NaN-propagating `min`/`max`, clamping, viewport readers
//! 2. **Region calculators**: one pure function per region, run in dependency order
//! 3. **Orchestrator**: sequences the calculators, owns the session store and
//!    emits every region in one batch
//! 4. **Trigger**: re-runs the orchestrator on change, throttling viewport resizes
//!
//! # Example
//!
//! ```
//! use confer_core::{DeviceContext, DeviceType, LayoutInput};
//! use confer_layout::{CollectingSink, LayoutEngine, MemoryStore};
//!
//! let mut engine = LayoutEngine::new(MemoryStore::new());
//! let device = DeviceContext::new(DeviceType::Desktop, 1920.0, 1080.0);
//! let mut sink = CollectingSink::new();
//! engine.run(&LayoutInput::default(), &device, &mut sink);
//! assert_eq!(sink.batches.len(), 1);
//!
//! for update in sink.last().unwrap_or_default() {
//!     println!("{}: {:?}", update.key, update.payload);
//! }
//! ```

pub mod primitives;
pub mod regions;
mod orchestrator;
mod store;
mod trigger;

pub use orchestrator::{
    CollectingSink, LayoutEngine, LayoutOutput, OutputPayload, OutputSink, OutputUpdate,
};
pub use regions::drop_zones::DropZones;
pub use store::{
    read_json, write_json, MemoryStore, PersistedSize, SessionStore, WebcamSize,
    LAYOUT_READY_KEY, LOADED_ONCE_KEY, WEBCAM_SIZE_KEY,
};
pub use trigger::{LayoutTrigger, ResizeThrottle, ThrottleAction, TriggerReason};
