//! Application state definitions

use super::registration::Field;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Currency,
    Cart,
    Register,
}

impl View {
    pub const ALL: [View; 3] = [View::Currency, View::Cart, View::Register];

    pub fn label(&self) -> &'static str {
        match self {
            View::Currency => "Currency",
            View::Cart => "Cart",
            View::Register => "Register",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Currency => 0,
            View::Cart => 1,
            View::Register => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Focused control on the currency view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConverterFocus {
    #[default]
    Amount,
    Source,
    Target,
}

impl ConverterFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Amount => Self::Source,
            Self::Source => Self::Target,
            Self::Target => Self::Amount,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Amount => Self::Target,
            Self::Source => Self::Amount,
            Self::Target => Self::Source,
        }
    }
}

/// Focused control on the registration view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFocus {
    Field(Field),
    Submit,
}

impl Default for RegisterFocus {
    fn default() -> Self {
        RegisterFocus::Field(Field::Username)
    }
}

impl RegisterFocus {
    fn index(&self) -> usize {
        match self {
            RegisterFocus::Field(field) => Field::ALL
                .iter()
                .position(|f| f == field)
                .unwrap_or_default(),
            RegisterFocus::Submit => Field::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        Field::ALL
            .get(index)
            .map_or(RegisterFocus::Submit, |f| RegisterFocus::Field(*f))
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % (Field::ALL.len() + 1))
    }

    pub fn prev(&self) -> Self {
        let count = Field::ALL.len() + 1;
        Self::from_index((self.index() + count - 1) % count)
    }
}

/// Navigation and selection state shared by the views
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub converter_focus: ConverterFocus,
    pub register_focus: RegisterFocus,
    /// Selected row in the cart list
    pub selected_index: usize,
}

impl AppState {
    /// Move cart selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move cart selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep selection inside a list of `len` items
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_cycle() {
        assert_eq!(View::default(), View::Currency);
        assert_eq!(View::Currency.next(), View::Cart);
        assert_eq!(View::Register.next(), View::Currency);
        assert_eq!(View::Currency.prev(), View::Register);
    }

    #[test]
    fn test_register_focus_cycle() {
        let mut focus = RegisterFocus::default();
        let mut seen = vec![focus];
        for _ in 0..5 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                RegisterFocus::Field(Field::Username),
                RegisterFocus::Field(Field::Email),
                RegisterFocus::Field(Field::Password),
                RegisterFocus::Field(Field::PasswordConfirmation),
                RegisterFocus::Submit,
                RegisterFocus::Field(Field::Username),
            ]
        );
        assert_eq!(RegisterFocus::default().prev(), RegisterFocus::Submit);
    }

    #[test]
    fn test_converter_focus_cycle() {
        assert_eq!(ConverterFocus::Amount.next(), ConverterFocus::Source);
        assert_eq!(ConverterFocus::Amount.prev(), ConverterFocus::Target);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);

        state.move_selection_down(2);
        state.move_selection_down(2);
        assert_eq!(state.selected_index, 1);

        state.clamp_selection(0);
        assert_eq!(state.selected_index, 0);
    }
}
