//! Selection controller owning the state of every exhibit in an arrangement.
use std::collections::{HashMap, VecDeque};

use glam::Vec3;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::exhibit::arrange::Arrangement;
use crate::exhibit::media::ModelDetail;
use crate::exhibit::ExhibitId;
use crate::focus::{CameraPose, FocusPose};
use crate::selection::sink::CommandSink;
use crate::selection::{Command, CursorStyle, ExhibitState, SelectionInput};

#[derive(Debug, Clone)]
struct Slot {
    world: Vec3,
    state: ExhibitState,
    detail: ModelDetail,
    upgrade_pending: bool,
}

/// Drives the per-exhibit state machines from a FIFO of [`SelectionInput`]s.
///
/// At most one exhibit is selected. While its camera zoom is in flight the
/// orbit controls are disabled and pointer hover is ignored.
#[derive(Debug, Clone)]
pub struct SelectionController {
    slots: HashMap<ExhibitId, Slot>,
    queue: VecDeque<SelectionInput>,
    selected: Option<ExhibitId>,
    overview: FocusPose,
    focus_distance: f32,
}

impl SelectionController {
    /// Controller for every exhibit in `arrangement`, all idle at low detail.
    pub fn new(arrangement: &Arrangement) -> Self {
        let slots = arrangement
            .placements()
            .iter()
            .map(|p| {
                (
                    p.exhibit_id.clone(),
                    Slot {
                        world: p.world,
                        state: ExhibitState::Idle,
                        detail: ModelDetail::Low,
                        upgrade_pending: false,
                    },
                )
            })
            .collect();

        Self {
            slots,
            queue: VecDeque::new(),
            selected: None,
            overview: FocusPose::default(),
            focus_distance: FocusPose::DEFAULT_DISTANCE,
        }
    }

    /// Sets the pose used when leaving an exhibit.
    pub fn with_overview(mut self, overview: FocusPose) -> Self {
        self.overview = overview;
        self
    }

    /// Sets the camera distance used when inspecting an exhibit.
    pub fn with_focus_distance(mut self, distance: f32) -> Self {
        self.focus_distance = distance;
        self
    }

    pub fn state(&self, id: &str) -> Option<ExhibitState> {
        self.slots.get(id).map(|s| s.state)
    }

    pub fn detail(&self, id: &str) -> Option<ModelDetail> {
        self.slots.get(id).map(|s| s.detail)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the host's orbit controls should accept user input.
    pub fn controls_enabled(&self) -> bool {
        !self.zooming()
    }

    /// Number of queued, unprocessed inputs.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queues `input`. Inputs naming exhibits outside the arrangement are rejected.
    pub fn push(&mut self, input: SelectionInput) -> Result<()> {
        if let Some(id) = input.exhibit_id() {
            if !self.slots.contains_key(id) {
                return Err(Error::UnknownExhibit { id: id.to_owned() });
            }
        }
        self.queue.push_back(input);
        Ok(())
    }

    /// Processes queued inputs in order, returning how many were handled.
    pub fn process<S: CommandSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut handled = 0;
        while let Some(input) = self.queue.pop_front() {
            self.apply(input, sink);
            handled += 1;
        }
        handled
    }

    /// Queues `input` and processes the queue.
    pub fn dispatch<S: CommandSink + ?Sized>(
        &mut self,
        input: SelectionInput,
        sink: &mut S,
    ) -> Result<usize> {
        self.push(input)?;
        Ok(self.process(sink))
    }

    fn zooming(&self) -> bool {
        self.selected
            .as_deref()
            .and_then(|id| self.state(id))
            .is_some_and(ExhibitState::is_zooming)
    }

    fn set_state(&mut self, id: &str, state: ExhibitState) {
        if let Some(slot) = self.slots.get_mut(id) {
            debug!(exhibit = id, from = ?slot.state, to = ?state, "exhibit state");
            slot.state = state;
        }
    }

    fn apply<S: CommandSink + ?Sized>(&mut self, input: SelectionInput, sink: &mut S) {
        match input {
            SelectionInput::PointerOver(id) => self.pointer_over(id, sink),
            SelectionInput::PointerOut(id) => self.pointer_out(id, sink),
            SelectionInput::Pressed { id, camera } => self.pressed(id, camera, sink),
            SelectionInput::ZoomFinished(id) => self.zoom_finished(id, sink),
            SelectionInput::HighResReady(id) => self.high_res_ready(id, sink),
            SelectionInput::HighResFailed(id) => self.high_res_failed(id),
            SelectionInput::Dismiss => self.dismiss(sink),
        }
    }

    fn pointer_over<S: CommandSink + ?Sized>(&mut self, id: ExhibitId, sink: &mut S) {
        if self.zooming() || self.state(&id) != Some(ExhibitState::Idle) {
            trace!(exhibit = %id, "pointer over ignored");
            return;
        }
        self.set_state(&id, ExhibitState::Hovered);
        sink.send(Command::Cursor(CursorStyle::Pointer));
        sink.send(Command::Highlight { id, on: true });
    }

    fn pointer_out<S: CommandSink + ?Sized>(&mut self, id: ExhibitId, sink: &mut S) {
        if self.zooming() || self.state(&id) != Some(ExhibitState::Hovered) {
            trace!(exhibit = %id, "pointer out ignored");
            return;
        }
        self.set_state(&id, ExhibitState::Idle);
        sink.send(Command::Cursor(CursorStyle::Default));
        sink.send(Command::Highlight { id, on: false });
    }

    fn pressed<S: CommandSink + ?Sized>(&mut self, id: ExhibitId, camera: CameraPose, sink: &mut S) {
        if self.zooming() || self.selected.as_deref() == Some(id.as_str()) {
            trace!(exhibit = %id, "press ignored");
            return;
        }
        let Some(world) = self.slots.get(&id).map(|s| s.world) else {
            return;
        };

        // A press can land on one exhibit while another still holds the hover.
        let mut hovered: Vec<ExhibitId> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.state == ExhibitState::Hovered)
            .map(|(hovered_id, _)| hovered_id.clone())
            .collect();
        hovered.sort_unstable();
        for hovered_id in hovered {
            if hovered_id != id {
                self.set_state(&hovered_id, ExhibitState::Idle);
            }
            sink.send(Command::Highlight {
                id: hovered_id,
                on: false,
            });
        }
        sink.send(Command::Cursor(CursorStyle::Default));
        sink.send(Command::SetControlsEnabled(false));

        if let Some(previous) = self.selected.take() {
            self.set_state(&previous, ExhibitState::Idle);
            sink.send(Command::HideOverlay { id: previous });
        }

        let pose = FocusPose::toward_with_distance(world, &camera, self.focus_distance);
        self.set_state(&id, ExhibitState::ZoomingIn);
        self.selected = Some(id.clone());
        sink.send(Command::ZoomIn { id, pose });
    }

    fn zoom_finished<S: CommandSink + ?Sized>(&mut self, id: ExhibitId, sink: &mut S) {
        let Some(slot) = self.slots.get(&id) else {
            return;
        };
        let (state, world, detail, upgrade_pending) =
            (slot.state, slot.world, slot.detail, slot.upgrade_pending);

        match state {
            ExhibitState::ZoomingIn => {
                sink.send(Command::SetControlsEnabled(true));
                sink.send(Command::SetOrbitTarget(world));
                sink.send(Command::ShowOverlay { id: id.clone() });
                if detail == ModelDetail::High {
                    self.set_state(&id, ExhibitState::Zoomed);
                } else if upgrade_pending {
                    self.set_state(&id, ExhibitState::Upgrading);
                } else {
                    if let Some(slot) = self.slots.get_mut(&id) {
                        slot.upgrade_pending = true;
                    }
                    self.set_state(&id, ExhibitState::Upgrading);
                    sink.send(Command::RequestModel {
                        id,
                        detail: ModelDetail::High,
                    });
                }
            }
            ExhibitState::ZoomingOut => {
                self.set_state(&id, ExhibitState::Idle);
                self.selected = None;
                sink.send(Command::SetControlsEnabled(true));
                sink.send(Command::SetOrbitTarget(self.overview.orbit_target));
            }
            _ => trace!(exhibit = %id, ?state, "zoom finished ignored"),
        }
    }

    fn high_res_ready<S: CommandSink + ?Sized>(&mut self, id: ExhibitId, sink: &mut S) {
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        if !slot.upgrade_pending {
            trace!(exhibit = %id, "unrequested model ignored");
            return;
        }
        slot.upgrade_pending = false;
        slot.detail = ModelDetail::High;
        let upgrading = slot.state == ExhibitState::Upgrading;

        sink.send(Command::SwapModel {
            id: id.clone(),
            detail: ModelDetail::High,
        });
        if upgrading {
            self.set_state(&id, ExhibitState::Zoomed);
        }
    }

    fn high_res_failed(&mut self, id: ExhibitId) {
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        if !slot.upgrade_pending {
            trace!(exhibit = %id, "unrequested model failure ignored");
            return;
        }
        warn!(exhibit = %id, "high detail model failed to load; keeping low detail");
        slot.upgrade_pending = false;
        if slot.state == ExhibitState::Upgrading {
            self.set_state(&id, ExhibitState::Zoomed);
        }
    }

    fn dismiss<S: CommandSink + ?Sized>(&mut self, sink: &mut S) {
        let Some(id) = self.selected.clone() else {
            trace!("dismiss without selection ignored");
            return;
        };
        if !self.state(&id).is_some_and(ExhibitState::is_inspected) {
            trace!(exhibit = %id, "dismiss ignored while zooming");
            return;
        }
        self.set_state(&id, ExhibitState::ZoomingOut);
        sink.send(Command::HideOverlay { id: id.clone() });
        sink.send(Command::SetControlsEnabled(false));
        sink.send(Command::ZoomOut {
            id,
            pose: self.overview,
        });
    }
}
