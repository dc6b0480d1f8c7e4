use bitfield_struct::bitfield;

/// Lock and indicator state the host reports back to the keyboard,
/// laid out as the HID keyboard output report (HID Device Class Definition 1.11, section 11.1).
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const NUM_LOCK: Self = Self::new().with_num_lock(true);
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
    pub const SCROLL_LOCK: Self = Self::new().with_scroll_lock(true);

    pub const fn new_from(num_lock: bool, caps_lock: bool, scroll_lock: bool) -> Self {
        Self::new()
            .with_num_lock(num_lock)
            .with_caps_lock(caps_lock)
            .with_scroll_lock(scroll_lock)
    }

    /// Any of Caps, Num or Scroll lock is on. Compose and Kana are not locks.
    pub fn any_lock(self) -> bool {
        self.caps_lock() || self.num_lock() || self.scroll_lock()
    }
}
