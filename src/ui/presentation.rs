//! Render rule derived from the counter values.
//!
//! Kept free of any widget types so the rule can be checked without a
//! terminal.

/// Current counts above this are shown in the alert style.
pub const ALERT_THRESHOLD: u64 = 15;

/// Style of the current-count line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStyle {
    Normal,
    Alert,
}

/// User-facing controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Increment,
    Decrement,
    Reset,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Increment, Control::Decrement, Control::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Increment => "+",
            Self::Decrement => "-",
            Self::Reset => "Reset",
        }
    }
}

pub fn count_style(current: u64) -> CountStyle {
    if current > ALERT_THRESHOLD {
        CountStyle::Alert
    } else {
        CountStyle::Normal
    }
}

/// Whether `control` is shown for the given current count.
///
/// Decrement disappears at zero; the others are always shown.
pub fn control_visible(control: Control, current: u64) -> bool {
    match control {
        Control::Decrement => current > 0,
        Control::Increment | Control::Reset => true,
    }
}

/// What the screen shows, rebuilt from counter notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterView {
    pub current: u64,
    pub total: u64,
}

impl CounterView {
    pub fn current_style(&self) -> CountStyle {
        count_style(self.current)
    }

    pub fn is_visible(&self, control: Control) -> bool {
        control_visible(control, self.current)
    }

    /// Controls currently on screen, in display order.
    pub fn visible_controls(&self) -> Vec<Control> {
        Control::ALL
            .into_iter()
            .filter(|control| self.is_visible(*control))
            .collect()
    }
}
