//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys, so a scene keeps its state while it is off the stack.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Scene Transition ====================================================

/// Scene stack operation, queued by scenes and applied at tick boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a scene to the top of the stack.
    Push(K),

    /// Removes a specific scene from the stack.
    Remove(K),

    /// Replaces a scene in place with another one.
    Replace(K, K),

    /// Clears the stack.
    Clear,

    /// No transition.
    #[default]
    Empty,
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Typically implemented by a small application enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Owns every registered scene and the active stack.
///
/// Each tick the topmost opaque scene is updated, together with any
/// transparent scenes stacked above it (bottom to top).
pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: HashMap<S, Box<dyn Scene<S, A>>>,
    stack: Vec<S>,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no scenes and an empty stack.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under `key`.
    ///
    /// Scenes must be registered before being pushed. Registering a key
    /// twice replaces the earlier scene.
    ///
    /// ```rust
    /// # use disaster_drills::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Screen { Main }
    /// # impl SceneKey for Screen {}
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Walk { Up }
    /// # impl Action for Walk {}
    /// # struct MainScene;
    /// # impl Scene<Screen, Walk> for MainScene {
    /// #     fn update(&mut self, _ctx: &mut GlobalContext<Screen, Walk>) {}
    /// # }
    /// let mut manager = SceneManager::<Screen, Walk>::new();
    /// manager.register_scene(Screen::Main, MainScene);
    /// assert!(manager.is_registered(Screen::Main));
    /// ```
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and places it on the stack as the starting scene.
    ///
    /// Its `on_enter` runs when the engine calls [`start`](Self::start).
    pub fn register_default_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default", key);
            self.stack.push(key);
        }
    }

    /// Calls `on_enter` on every scene already on the stack.
    pub fn start(&mut self, context: &mut GlobalContext<S, A>) {
        if self.stack.is_empty() {
            warn!("Scene manager started with an empty stack");
            return;
        }

        for &key in &self.stack {
            debug!("Starting scene {:?}", key);
            match self.scenes.get_mut(&key) {
                Some(scene) => scene.on_enter(context),
                None => warn!("Initial scene {:?} not registered", key),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    /// Keys on the stack, bottom first.
    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    /// Topmost scene key, if any.
    pub fn top(&self) -> Option<S> {
        self.stack.last().copied()
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the active scenes.
    pub fn update(&mut self, context: &mut GlobalContext<S, A>) {
        for key in self.collect_active_scenes() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies queued transitions in FIFO order.
    ///
    /// Transitions queued from inside `on_enter`/`on_exit` are applied in
    /// the same call.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S, A>) {
        loop {
            let transitions = context.take_transitions();
            if transitions.is_empty() {
                break;
            }

            for transition in transitions {
                match transition {
                    SceneTransition::Push(key) => self.push_internal(key, context),
                    SceneTransition::Remove(key) => self.remove_internal(key, context),
                    SceneTransition::Replace(old_key, new_key) => {
                        self.replace_internal(old_key, new_key, context)
                    }
                    SceneTransition::Clear => self.clear_internal(context),
                    SceneTransition::Empty => {}
                }
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!("Attempted to push unregistered scene {:?}", key);
            return;
        };

        debug!("Pushing scene {:?}", key);
        self.stack.push(key);
        scene.on_enter(context);
    }

    fn remove_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        let Some(pos) = self.stack.iter().position(|&k| k == key) else {
            debug!("Scene {:?} not in stack, skipping removal", key);
            return;
        };

        debug!("Removing scene {:?} at position {}", key, pos);
        self.stack.remove(pos);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_exit(context);
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GlobalContext<S, A>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!("Scene {:?} not in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!("Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!("Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        debug!("Replacing scene {:?} with {:?}", old_key, new_key);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.on_exit(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.on_enter(context);
        }
    }

    fn clear_internal(&mut self, context: &mut GlobalContext<S, A>) {
        debug!("Clearing scene stack ({} scenes)", self.stack.len());

        // Top first, mirroring push order.
        for key in std::mem::take(&mut self.stack).into_iter().rev() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        for &key in self.stack.iter().rev() {
            active.push(key);

            let transparent = self
                .scenes
                .get(&key)
                .is_some_and(|scene| scene.is_transparent());
            if !transparent {
                break;
            }
        }

        active.reverse();
        active
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
