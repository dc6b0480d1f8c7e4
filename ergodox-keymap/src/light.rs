use embedded_hal::digital::{Error as _, OutputPin, PinState};

use crate::keymap::LayerState;
use crate::led_indicator::LedIndicator;

/// A GPIO driving a LED, aware of the LED's polarity
pub struct OutputController<P: OutputPin> {
    pin: P,
    /// Pin state when turning LED on
    on_state: PinState,
}

impl<P: OutputPin> OutputController<P> {
    pub fn new(pin: P, low_active: bool) -> Self {
        let on_state = if low_active { PinState::Low } else { PinState::High };
        Self { pin, on_state }
    }

    /// Turn LED on
    pub fn activate(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.on_state)
    }

    /// Turn LED off
    pub fn deactivate(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(!self.on_state)
    }

    pub fn set_active(&mut self, active: bool) -> Result<(), P::Error> {
        if active { self.activate() } else { self.deactivate() }
    }
}

/// The three status LEDs on the right half.
///
/// LED 1 shows layer 1, LED 2 shows layer 2 and LED 3 shows the lock keys.
pub struct StatusLeds<P: OutputPin> {
    layer1: OutputController<P>,
    layer2: OutputController<P>,
    lock: OutputController<P>,
}

impl<P: OutputPin> StatusLeds<P> {
    pub fn new(layer1_pin: P, layer2_pin: P, lock_pin: P, low_active: bool) -> Self {
        Self {
            layer1: OutputController::new(layer1_pin, low_active),
            layer2: OutputController::new(layer2_pin, low_active),
            lock: OutputController::new(lock_pin, low_active),
        }
    }

    /// Create the LEDs with the polarity from the build config
    pub fn with_default_polarity(layer1_pin: P, layer2_pin: P, lock_pin: P) -> Self {
        Self::new(layer1_pin, layer2_pin, lock_pin, crate::LED_LOW_ACTIVE)
    }

    /// Lock LED is on while any of Caps Lock, Num Lock or Scroll Lock is on
    pub fn on_led_indicator(&mut self, indicator: LedIndicator) {
        let on = indicator.any_lock();
        debug!("Lock LED: {}", on);
        Self::drive("lock", &mut self.lock, on);
    }

    /// Light the LED of the highest active layer, returns the state unchanged
    pub fn on_layer_state(&mut self, state: LayerState) -> LayerState {
        let layer = state.highest_layer();
        debug!("Layer LEDs for layer {}", layer);
        Self::drive("layer 1", &mut self.layer1, layer == 1);
        Self::drive("layer 2", &mut self.layer2, layer == 2);
        state
    }

    pub fn set_all(&mut self, on: bool) {
        Self::drive("layer 1", &mut self.layer1, on);
        Self::drive("layer 2", &mut self.layer2, on);
        Self::drive("lock", &mut self.lock, on);
    }

    /// Pin errors are logged and otherwise ignored
    fn drive(name: &str, led: &mut OutputController<P>, on: bool) {
        if let Err(e) = led.set_active(on) {
            error!("Failed to set {} LED: {:?}", name, e.kind());
        }
    }
}
