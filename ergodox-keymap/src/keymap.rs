use crate::action::KeyAction;
use crate::event::KeyEvent;

/// Active layers as a bitset, bit `n` set means layer `n` is on.
///
/// The base layer is always active and is not part of the bitset, so a state of `0` means only layer 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(pub u32);

impl LayerState {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn is_active(self, layer: u8) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// Index of the most significant active layer, 0 when no layer is set
    pub fn highest_layer(self) -> u8 {
        if self.0 == 0 { 0 } else { (31 - self.0.leading_zeros()) as u8 }
    }

    fn set(&mut self, layer: u8, active: bool) {
        if active {
            self.0 |= 1 << layer;
        } else {
            self.0 &= !(1 << layer);
        }
    }
}

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
/// Hardware key strokes are resolved by `(row, col, layer)`, layer 0 is the base layer and is always on.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: LayerState,
    /// The layer each held key was resolved on
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: LayerState::default(),
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    pub fn get_activated_layer(&self) -> u8 {
        self.layer_state.highest_layer()
    }

    /// Fetch the action in keymap, without layer cache. Positions outside the keymap read as `No`
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        if row >= ROW || col >= COL || layer_num >= NUM_LAYER {
            warn!("Keymap position out of range: ({}, {}) on layer {}", row, col, layer_num);
            return KeyAction::No;
        }
        self.layers[layer_num][row][col]
    }

    /// Fetch the action in keymap, with layer cache.
    ///
    /// A press scans from the highest active layer down to layer 0, skipping transparent keys.
    /// A release uses the layer the press was resolved on, even if that layer has been turned off since.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key event out of matrix: ({}, {})", key_event.row, key_event.col);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the base layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if layer_idx == 0 || self.layer_state.is_active(layer_idx as u8) {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }
                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);
                return action;
            }
        }

        KeyAction::No
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = 0;
        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state.set(layer_num, true);
        }
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state.set(layer_num, false);
        }
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            let active = self.layer_state.is_active(layer_num);
            self.layer_state.set(layer_num, !active);
        }
    }
}
