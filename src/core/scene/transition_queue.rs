//=========================================================================
// Transition Queue
//=========================================================================
//
// Scenes queue stack changes here during their update; the scene manager
// applies them at the tick boundary, so the stack never changes while it
// is being iterated.
//
//=========================================================================

use super::{SceneKey, SceneTransition};

/// FIFO of pending scene transitions.
#[derive(Debug)]
pub struct TransitionQueue<S: SceneKey> {
    queue: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition for the next tick boundary.
    pub fn push(&mut self, transition: SceneTransition<S>) {
        if transition != SceneTransition::Empty {
            self.queue.push(transition);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all queued transitions, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
