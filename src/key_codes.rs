use num_enum::{IntoPrimitive, TryFromPrimitive};

/// usb key codes (HID usage page 0x07)
///
/// Anything above RGui is free for user defined keys - those never
/// reach the report and are only meaningful to the handlers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive, Debug)]
#[repr(u32)]
pub enum KeyCode {
    /// 'no key' - also terminates key tables
    No = 0,
    ErrorRollOver,
    PostFail,
    ErrorUndefined,
    A, // 4
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M, // 0x10
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,   // 0x1D
    Kb1, // Keyboard 1 - 0x1E
    Kb2,
    Kb3, // 0x20
    Kb4,
    Kb5,
    Kb6,
    Kb7,
    Kb8,
    Kb9,
    Kb0,
    Enter, // 0x28
    Escape,
    BSpace,
    Tab,
    Space,
    Minus, // 0x2D
    Equal,
    LBracket,
    RBracket,  // 0x30
    BSlash,    // \ (and |)
    NonUsHash, // Non-US # and ~
    SColon,    // ; (and :)
    Quote,     // ' and "
    Grave,     // ` and ~
    Comma,     // , and <
    Dot,       // . and >
    Slash,     // / and ?
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7, // 0x40
    F8,
    F9,
    F10,
    F11,
    F12,
    PScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PgUp,
    Delete,
    End,
    PgDown,
    Right,
    Left, // 0x50
    Down,
    Up,
    LCtrl = 0xE0,
    LShift,
    LAlt,
    LGui,
    RCtrl,
    RShift,
    RAlt,
    RGui, // 0xE7
}

impl KeyCode {
    pub const fn to_u8(self) -> u8 {
        self as u32 as u8
    }
}

/// Trait for things that can be converted to a u32 keycode
/// ie. various integers and (usb) KeyCodes themselves
pub trait AcceptsKeycode {
    fn to_u32(&self) -> u32;
}
impl AcceptsKeycode for u32 {
    fn to_u32(&self) -> u32 {
        *self
    }
}
impl AcceptsKeycode for &u32 {
    fn to_u32(&self) -> u32 {
        **self
    }
}
impl AcceptsKeycode for i32 {
    fn to_u32(&self) -> u32 {
        (*self) as u32
    }
}
impl AcceptsKeycode for KeyCode {
    fn to_u32(&self) -> u32 {
        (*self).into()
    }
}

pub trait KeyCodeInfo {
    fn is_usb_keycode(self) -> bool;
    fn is_modifier(self) -> bool;
}

impl KeyCodeInfo for u32 {
    fn is_usb_keycode(self) -> bool {
        self <= KeyCode::RGui.to_u32()
    }
    fn is_modifier(self) -> bool {
        KeyCode::LCtrl.to_u32() <= self && self <= KeyCode::RGui.to_u32()
    }
}
