//! Per-exhibit selection state driven by queued input.
//!
//! The host feeds pointer and completion input into a [`SelectionController`]
//! and performs the [`Command`]s it emits (highlighting, camera zooms, overlay
//! visibility, model swaps) on its own scene. No callbacks hold on to scene
//! state; everything the controller knows is owned by the controller.
use glam::Vec3;

use crate::exhibit::media::ModelDetail;
use crate::exhibit::ExhibitId;
use crate::focus::{CameraPose, FocusPose};

pub mod controller;
pub mod sink;

pub use controller::SelectionController;
pub use sink::{CommandSink, FnSink, VecSink};

/// Lifecycle of one exhibit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExhibitState {
    #[default]
    Idle,
    /// Under the pointer.
    Hovered,
    /// Camera travelling toward the exhibit.
    ZoomingIn,
    /// Inspected at its final detail.
    Zoomed,
    /// Inspected while the high-detail model loads.
    Upgrading,
    /// Camera travelling back to the overview.
    ZoomingOut,
}

impl ExhibitState {
    /// The camera is in flight for this exhibit.
    pub fn is_zooming(self) -> bool {
        matches!(self, ExhibitState::ZoomingIn | ExhibitState::ZoomingOut)
    }

    /// The exhibit is the one being inspected.
    pub fn is_inspected(self) -> bool {
        matches!(self, ExhibitState::Zoomed | ExhibitState::Upgrading)
    }
}

/// Input fed to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionInput {
    PointerOver(ExhibitId),
    PointerOut(ExhibitId),
    /// The exhibit was clicked while the camera had the given pose.
    Pressed { id: ExhibitId, camera: CameraPose },
    /// A zoom started for this exhibit has completed.
    ZoomFinished(ExhibitId),
    HighResReady(ExhibitId),
    HighResFailed(ExhibitId),
    /// Leave the inspected exhibit and return to the overview.
    Dismiss,
}

impl SelectionInput {
    /// Exhibit named by the input, if any.
    pub fn exhibit_id(&self) -> Option<&str> {
        match self {
            SelectionInput::PointerOver(id)
            | SelectionInput::PointerOut(id)
            | SelectionInput::Pressed { id, .. }
            | SelectionInput::ZoomFinished(id)
            | SelectionInput::HighResReady(id)
            | SelectionInput::HighResFailed(id) => Some(id.as_str()),
            SelectionInput::Dismiss => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Pointer,
}

/// Effect the host should apply.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Highlight { id: ExhibitId, on: bool },
    Cursor(CursorStyle),
    SetControlsEnabled(bool),
    /// Animate the camera to `pose`, then report [`SelectionInput::ZoomFinished`].
    ZoomIn { id: ExhibitId, pose: FocusPose },
    /// Animate the camera to `pose`, then report [`SelectionInput::ZoomFinished`].
    ZoomOut { id: ExhibitId, pose: FocusPose },
    SetOrbitTarget(Vec3),
    ShowOverlay { id: ExhibitId },
    HideOverlay { id: ExhibitId },
    /// Start loading a model; report [`SelectionInput::HighResReady`] or
    /// [`SelectionInput::HighResFailed`].
    RequestModel { id: ExhibitId, detail: ModelDetail },
    /// Replace the displayed model, keeping its transform.
    SwapModel { id: ExhibitId, detail: ModelDetail },
}
