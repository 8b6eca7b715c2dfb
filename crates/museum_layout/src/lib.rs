#![forbid(unsafe_code)]
//! museum_layout: deterministic layout and selection logic for virtual museum viewers.
//!
//! Modules:
//! - layout: lattice layout strategies (square spiral)
//! - exhibit: catalog, arrangement on the exhibit plane, media URLs
//! - focus: camera poses for inspecting an exhibit
//! - selection: per-exhibit state machine, commands and sinks
//!
//! Rendering, input picking, animation and asset loading are left to the host.
pub mod error;
pub mod exhibit;
pub mod focus;
pub mod layout;
pub mod selection;

/// Convenient re-exports for common types. Import with `use museum_layout::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::exhibit::arrange::{
        arrange, arrange_spiral, fit_scale, ArrangeConfig, Arrangement, ExhibitPlacement,
    };
    pub use crate::exhibit::media::{MediaConfig, ModelDetail, StaticMapConfig};
    pub use crate::exhibit::{Catalog, Exhibit, ExhibitId, GeoPoint};
    pub use crate::focus::{CameraPose, FocusPose};
    pub use crate::layout::{
        generate, ring_at, ring_of, spiral_extent, spiral_positions, spiral_positions_with,
        try_spiral_positions, LayoutStrategy, Position, SpiralIter, SpiralLayout, Winding,
    };
    pub use crate::selection::{
        Command, CommandSink, CursorStyle, ExhibitState, FnSink, SelectionController,
        SelectionInput, VecSink,
    };
}
