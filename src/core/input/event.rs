//=========================================================================
// Input Event Types
//
// Engine-side representation of keyboard and mouse input.
//
// The platform layer (winit) converts OS events into these types before
// they cross the thread boundary, so nothing past the platform module
// depends on winit.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held / pressed / released)
//         ↓
//    ActionMapper (drill and launcher actions)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Only the primary button is used by the drills (it doubles as the
/// on-screen restart button), but all three standard buttons are kept so
/// bindings can be remapped without touching the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// WASD movement keeps working on AZERTY layouts.
///
/// Coverage is limited to what the drills and the launcher bind, plus a
/// few common navigation keys. Anything else arrives as `Unidentified`
/// and is filtered by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Launcher menu ---------------------------------------------------

    Digit1,
    Digit2,
    Digit3,
    Digit4,

    //--- Movement / restart ----------------------------------------------

    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyR,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    //--- Special ---------------------------------------------------------

    Space,
    Enter,
    Escape,

    /// Fallback for keys the input layer does not map.
    Unidentified,
}

impl KeyCode {
    /// Menu digit keys in launcher order.
    pub const MENU_DIGITS: [KeyCode; 4] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ];
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Bindings match modifiers exactly for pressed actions: a binding on `R`
/// does not fire for `Ctrl+R`. Held-action queries ignore modifiers so
/// that holding Shift while walking does not stop the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };

    /// Returns `true` if no modifier is held.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Events compare by variant, key/button and modifier state. Cursor
/// motion is not forwarded: the drills only need button clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// The window lost keyboard focus. Releases never arrive for keys
    /// held at that moment, so everything counts as released.
    FocusLost,

    /// Unsupported event, ignored by the input system.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for press events (the ones that can trigger actions).
    pub fn is_press(&self) -> bool {
        matches!(self, Self::KeyDown { .. } | Self::MouseButtonDown { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
