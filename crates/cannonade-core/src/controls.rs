//! Key-code dispatch tables, one per side.
//!
//! This is the interface contract for input: a platform key code maps to
//! a zero-argument [`TurretAction`]. Actual keyboard wiring stays in the
//! embedding; the core only resolves codes to actions. Unrecognized
//! codes resolve to `None` and are ignored by callers, never an error.
//!
//! Two stock layouts are provided, matching the two-player scheme the
//! game shipped with: arrows + Enter for one player, WASD + Space for
//! the other.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Enter key code.
pub const KEY_ENTER: u32 = 13;
/// Space key code.
pub const KEY_SPACE: u32 = 32;
/// Left arrow key code.
pub const KEY_LEFT: u32 = 37;
/// Up arrow key code.
pub const KEY_UP: u32 = 38;
/// Right arrow key code.
pub const KEY_RIGHT: u32 = 39;
/// Down arrow key code.
pub const KEY_DOWN: u32 = 40;
/// `A` key code.
pub const KEY_A: u32 = 65;
/// `D` key code.
pub const KEY_D: u32 = 68;
/// `S` key code.
pub const KEY_S: u32 = 83;
/// `W` key code.
pub const KEY_W: u32 = 87;

/// A zero-argument mutation of one turret.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurretAction {
    /// Fire a shell at the current angle and power.
    Fire,
    /// Step the barrel toward vertical.
    AimUp,
    /// Step the barrel toward horizontal.
    AimDown,
    /// Step launch power up.
    PowerUp,
    /// Step launch power down.
    PowerDown,
}

/// Mapping from platform key codes to turret actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    bindings: BTreeMap<u32, TurretAction>,
}

impl KeyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow-key layout: Enter fires, Up/Down drive power, Left/Right aim.
    #[must_use]
    pub fn arrows() -> Self {
        let mut map = Self::new();
        map.bind(KEY_ENTER, TurretAction::Fire);
        map.bind(KEY_UP, TurretAction::PowerUp);
        map.bind(KEY_DOWN, TurretAction::PowerDown);
        map.bind(KEY_LEFT, TurretAction::AimUp);
        map.bind(KEY_RIGHT, TurretAction::AimDown);
        map
    }

    /// WASD layout: Space fires, W/S drive power, A/D aim.
    #[must_use]
    pub fn wasd() -> Self {
        let mut map = Self::new();
        map.bind(KEY_SPACE, TurretAction::Fire);
        map.bind(KEY_W, TurretAction::PowerUp);
        map.bind(KEY_S, TurretAction::PowerDown);
        map.bind(KEY_A, TurretAction::AimUp);
        map.bind(KEY_D, TurretAction::AimDown);
        map
    }

    /// Binds `code` to `action`, replacing any existing binding.
    pub fn bind(&mut self, code: u32, action: TurretAction) {
        self.bindings.insert(code, action);
    }

    /// Resolves a key code to its bound action, if any.
    #[must_use]
    pub fn action(&self, code: u32) -> Option<TurretAction> {
        self.bindings.get(&code).copied()
    }
}
