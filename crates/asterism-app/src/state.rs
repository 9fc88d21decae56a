//! State shared between the host's main thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use asterism_core::commands::PlayerCommand;
use asterism_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
///
/// The loop thread is the only writer of the snapshot; everyone else reads
/// the latest copy through the mutex.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl LoopHandle {
    /// Forward a player command. Fails once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> Result<(), mpsc::SendError<LoopCommand>> {
        self.command_tx.send(LoopCommand::Player(command))
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
    }

    /// Clone of the most recent snapshot, if a tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}
