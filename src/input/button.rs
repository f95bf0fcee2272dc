//! Logical buttons and sticks
//!
//! This module defines the device-independent control vocabulary shared by
//! every input source. A source that lacks a physical counterpart for a
//! logical button simply reports it as inactive.
//!
//! # Standard layout indices
//!
//! Pad snapshots store their buttons in the standard-layout order used by
//! most hosts (0=A, 1=B, 2=X, 3=Y, 4=LB, 5=RB, 6=LT, 7=RT, 8=VIEW, 9=MENU,
//! 10=LS, 11=RS, 12=UP, 13=DOWN, 14=LEFT, 15=RIGHT, 16=HOME). [`Button::index`]
//! returns that position.

use std::fmt;

/// Number of logical buttons (and slots in a pad snapshot's button array).
pub const BUTTON_COUNT: usize = 17;

/// Device-independent logical button.
///
/// Closed set of 17 values covering a standard-layout controller. Keyboard
/// keys map onto the same vocabulary so the UI layer never has to care which
/// device produced an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    /// Left bumper
    Lb,
    /// Right bumper
    Rb,
    /// Left trigger (analog)
    Lt,
    /// Right trigger (analog)
    Rt,
    /// Left stick click
    Ls,
    /// Right stick click
    Rs,
    Up,
    Down,
    Left,
    Right,
    View,
    Menu,
    Home,
}

impl Button {
    /// All logical buttons, in standard-layout index order.
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::Lb,
        Button::Rb,
        Button::Lt,
        Button::Rt,
        Button::View,
        Button::Menu,
        Button::Ls,
        Button::Rs,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Home,
    ];

    /// Standard-layout button index for this logical button.
    pub fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::X => 2,
            Button::Y => 3,
            Button::Lb => 4,
            Button::Rb => 5,
            Button::Lt => 6,
            Button::Rt => 7,
            Button::View => 8,
            Button::Menu => 9,
            Button::Ls => 10,
            Button::Rs => 11,
            Button::Up => 12,
            Button::Down => 13,
            Button::Left => 14,
            Button::Right => 15,
            Button::Home => 16,
        }
    }

    /// Whether this button reports an analog value (triggers).
    pub fn is_analog(self) -> bool {
        matches!(self, Button::Lt | Button::Rt)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::Lb => "LB",
            Button::Rb => "RB",
            Button::Lt => "LT",
            Button::Rt => "RT",
            Button::Ls => "LS",
            Button::Rs => "RS",
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::Left => "LEFT",
            Button::Right => "RIGHT",
            Button::View => "VIEW",
            Button::Menu => "MENU",
            Button::Home => "HOME",
        };
        f.write_str(name)
    }
}

/// Analog stick selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stick {
    Left,
    Right,
}

impl Stick {
    /// Index of this stick's X axis in a pad snapshot's axis array.
    /// The Y axis is the following index.
    pub fn axis_base(self) -> usize {
        match self {
            Stick::Left => 0,
            Stick::Right => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_index_once() {
        let mut seen = [false; BUTTON_COUNT];
        for button in Button::ALL {
            let idx = button.index();
            assert!(!seen[idx], "index {} mapped twice", idx);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_standard_layout_positions() {
        assert_eq!(Button::A.index(), 0);
        assert_eq!(Button::Y.index(), 3);
        assert_eq!(Button::Lt.index(), 6);
        assert_eq!(Button::View.index(), 8);
        assert_eq!(Button::Ls.index(), 10);
        assert_eq!(Button::Up.index(), 12);
        assert_eq!(Button::Home.index(), 16);
    }

    #[test]
    fn test_only_triggers_are_analog() {
        for button in Button::ALL {
            let analog = matches!(button, Button::Lt | Button::Rt);
            assert_eq!(button.is_analog(), analog, "{}", button);
        }
    }

    #[test]
    fn test_stick_axis_bases() {
        assert_eq!(Stick::Left.axis_base(), 0);
        assert_eq!(Stick::Right.axis_base(), 2);
    }
}
