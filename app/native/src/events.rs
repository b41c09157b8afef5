//! Centralized event definitions for shell frontend communication.
//!
//! All events published to the shell's window relay are defined here to
//! keep the Rust and TypeScript sides in sync. The relay itself is owned
//! by the shell; the engine only names the channels.
//!
//! ## Naming Convention
//!
//! All events follow the pattern: `snapdock://<module>/<event-name>`
//!
//! - `snapdock://` - Prefix identifying this as a Snapdock event
//! - `<module>` - The module that owns the event (e.g., `dock`, `layout`)
//! - `<event-name>` - Descriptive kebab-case name for the event

/// Docking preview events.
pub mod dock {
    /// Emitted on every drag tick whose preview changed.
    ///
    /// Payload: `DockingResult | null`
    pub const PREVIEW_CHANGED: &str = "snapdock://dock/preview-changed";

    /// Emitted when a drop commits a docking result.
    ///
    /// Payload: `{ windowId: String, result: DockingResult }`
    pub const COMMITTED: &str = "snapdock://dock/committed";
}

/// Layout persistence events.
pub mod layout {
    /// Emitted when the persisted window layouts change.
    ///
    /// Payload: `Vec<WindowLayout>`
    pub const WINDOWS_CHANGED: &str = "snapdock://layout/windows-changed";

    /// Emitted when the active layout id changes.
    ///
    /// Payload: `String` - the new active layout id.
    pub const ACTIVE_CHANGED: &str = "snapdock://layout/active-changed";
}

/// Native window docking events.
pub mod native {
    /// Emitted after a native window snaps to an edge.
    ///
    /// Payload: `{ windowId: u32, kind: EdgeDockKind }`
    pub const EDGE_DOCKED: &str = "snapdock://native/edge-docked";
}
