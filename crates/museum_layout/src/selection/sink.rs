//! Where the selection controller delivers the [`Command`]s a host must carry out.
use crate::selection::Command;

/// Receives highlight, cursor, camera and model commands in emission order.
///
/// Implemented by whatever drives the scene. The controller only writes here and
/// never waits on the host.
pub trait CommandSink {
    fn send(&mut self, command: Command);
}

/// Drops every command, for hosts that only read controller state.
impl CommandSink for () {
    #[inline]
    fn send(&mut self, _command: Command) {}
}

/// Hands each command to a closure, e.g. to forward it to a render thread.
pub struct FnSink<F>
where
    F: FnMut(Command),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(Command),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> CommandSink for FnSink<F>
where
    F: FnMut(Command),
{
    #[inline]
    fn send(&mut self, command: Command) {
        (self.f)(command);
    }
}

/// Buffers commands until the host applies them once per frame.
#[derive(Debug, Default)]
pub struct VecSink {
    commands: Vec<Command>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn into_inner(self) -> Vec<Command> {
        self.commands
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Takes this frame's commands, leaving the buffer empty for the next one.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandSink for VecSink {
    #[inline]
    fn send(&mut self, command: Command) {
        self.commands.push(command);
    }
}
