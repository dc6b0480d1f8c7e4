use embedded_hal::digital::OutputPin;

use crate::action::{Action, KeyAction};
use crate::event::KeyEvent;
use crate::host::KeyboardHost;
use crate::keymap::{KeyMap, LayerState};
use crate::keymaps::{COL, KeymapVariant, NUM_LAYER, ROW};
use crate::led_indicator::LedIndicator;
use crate::light::StatusLeds;
use crate::processor::{CustomKeyProcessor, ProcessResult};

/// An ErgoDox EZ running one of the keymap variants.
///
/// The runtime feeds key events and lock states in, resolved keys go out through the host.
pub struct ErgodoxKeyboard<'a, H: KeyboardHost, P: OutputPin> {
    keymap: KeyMap<'static, ROW, COL, NUM_LAYER>,
    processor: CustomKeyProcessor,
    leds: StatusLeds<P>,
    host: &'a mut H,
}

impl<'a, H: KeyboardHost, P: OutputPin> ErgodoxKeyboard<'a, H, P> {
    pub fn new(variant: KeymapVariant, host: &'a mut H, leds: StatusLeds<P>) -> Self {
        Self::with_processor(CustomKeyProcessor::new(variant), host, leds)
    }

    pub fn with_processor(processor: CustomKeyProcessor, host: &'a mut H, leds: StatusLeds<P>) -> Self {
        Self {
            keymap: KeyMap::new(processor.variant().get_keymap()),
            processor,
            leds,
            host,
        }
    }

    /// Called once after the matrix is set up
    pub fn matrix_init(&mut self) {
        info!("ErgoDox EZ keymap {} ready", self.processor.variant().name());
        self.leds.set_all(false);
    }

    pub fn process_key_event(&mut self, event: KeyEvent) {
        let key_action = self.keymap.get_action_with_layer_cache(event);
        debug!("Key event {:?} resolved to {:?}", event, key_action);
        let action = match key_action {
            KeyAction::Single(action) => action,
            KeyAction::No | KeyAction::Transparent => return,
        };

        if self.processor.process(&mut *self.host, action, event.pressed) == ProcessResult::Stop {
            return;
        }

        match action {
            Action::Key(key) => {
                if event.pressed {
                    self.host.press(key);
                } else {
                    self.host.release(key);
                }
            }
            Action::LayerOn(layer) => {
                if event.pressed {
                    self.keymap.activate_layer(layer);
                } else {
                    self.keymap.deactivate_layer(layer);
                }
                self.leds.on_layer_state(self.keymap.layer_state());
            }
            Action::Bootloader => {
                if event.pressed {
                    warn!("Jumping to bootloader");
                    self.host.jump_to_bootloader();
                }
            }
            Action::User(index) => {
                debug!("Unhandled custom keycode {}", index);
            }
            Action::No => {}
        }
    }

    /// Called when the host sends a new lock key state
    pub fn set_led_indicator(&mut self, indicator: LedIndicator) {
        self.leds.on_led_indicator(indicator);
    }

    pub fn layer_state(&self) -> LayerState {
        self.keymap.layer_state()
    }
}
