use crate::{GuiError, GuiMessage, GuiResult};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Queue of user actions.
///
/// Components emit while they render; the app drains the queue once per
/// frame, after all components have drawn, so handlers never run while a
/// component holds a borrow of the state.
pub struct SignalBus {
    sender: Sender<GuiMessage>,
    receiver: Receiver<GuiMessage>,
}

impl SignalBus {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn emit(&self, message: GuiMessage) -> GuiResult<()> {
        let name = signal_name(&message);
        log::debug!("signal '{}'", name);
        self.sender
            .send(message)
            .map_err(|e| GuiError::State(format!("Failed to emit signal '{}': {}", name, e)))
    }

    /// Every message emitted since the last drain, in emission order
    pub fn drain(&self) -> Vec<GuiMessage> {
        self.receiver.try_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

pub fn signal_name(message: &GuiMessage) -> &'static str {
    match message {
        GuiMessage::OpenRequested => "open_requested",
        GuiMessage::SaveRequested => "save_requested",
        GuiMessage::DrawRequested => "draw_requested",
        GuiMessage::CancelRequested => "cancel_requested",
        GuiMessage::HelpRequested => "help_requested",
    }
}
