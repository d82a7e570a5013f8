//! Application state and core logic

use crate::config::AppConfig;
use crate::state::{
    AppState, ConverterFocus, CurrencyConverter, Field, FormState, Outcome, RegisterFocus,
    ShoppingCart, View,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::watch;

/// Receivers for everything that changes in the background
struct Observers {
    validity: watch::Receiver<bool>,
    outcomes: Vec<watch::Receiver<Outcome>>,
    converted: watch::Receiver<String>,
}

impl Observers {
    fn new(form: &FormState, converter: &CurrencyConverter) -> Self {
        Self {
            validity: form.subscribe_validity(),
            outcomes: Field::ALL.iter().map(|f| form.subscribe(*f)).collect(),
            converted: converter.subscribe(),
        }
    }

    /// Whether anything was published since the last call
    fn take_changes(&mut self) -> bool {
        let mut changed = false;
        if self.validity.has_changed().unwrap_or(false) {
            self.validity.borrow_and_update();
            changed = true;
        }
        for rx in &mut self.outcomes {
            if rx.has_changed().unwrap_or(false) {
                rx.borrow_and_update();
                changed = true;
            }
        }
        if self.converted.has_changed().unwrap_or(false) {
            self.converted.borrow_and_update();
            changed = true;
        }
        changed
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub converter: CurrencyConverter,
    pub cart: ShoppingCart,
    pub form: FormState,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    observers: Observers,
    field_debounce: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance. Must run inside the tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let converter = CurrencyConverter::new(config.converter_debounce());
        let form = FormState::new(config.field_debounce());
        let observers = Observers::new(&form, &converter);
        Self {
            state: AppState::default(),
            converter,
            cart: ShoppingCart::default(),
            form,
            status_message: None,
            observers,
            field_debounce: config.field_debounce(),
            quit: false,
        }
    }

    /// Form validity as last published; gates the submit button.
    pub fn is_form_valid(&self) -> bool {
        *self.observers.validity.borrow()
    }

    /// True when background validation or conversion published since the
    /// last call, i.e. the screen is stale.
    pub fn take_background_changes(&mut self) -> bool {
        self.observers.take_changes()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press for the current view
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::F(1) => return self.navigate(View::Currency),
            KeyCode::F(2) => return self.navigate(View::Cart),
            KeyCode::F(3) => return self.navigate(View::Register),
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.navigate(self.state.current_view.next())
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.navigate(self.state.current_view.prev())
            }
            _ => {}
        }

        match self.state.current_view {
            View::Currency => self.handle_currency_key(key),
            View::Cart => self.handle_cart_key(key),
            View::Register => self.handle_register_key(key),
        }
    }

    pub fn navigate(&mut self, view: View) {
        self.state.current_view = view;
        self.status_message = None;
    }

    fn handle_currency_key(&mut self, key: KeyEvent) {
        let focus = self.state.converter_focus;
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.converter_focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.converter_focus = focus.prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.converter.swap()
            }
            KeyCode::Char(c) if focus == ConverterFocus::Amount => {
                let mut amount = self.converter.request().amount;
                amount.push(c);
                self.converter.set_amount(amount);
            }
            KeyCode::Backspace if focus == ConverterFocus::Amount => {
                let mut amount = self.converter.request().amount;
                amount.pop();
                self.converter.set_amount(amount);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => {
                let request = self.converter.request();
                match focus {
                    ConverterFocus::Source => self.converter.set_source(request.source.next()),
                    ConverterFocus::Target => self.converter.set_target(request.target.next()),
                    ConverterFocus::Amount => {}
                }
            }
            _ => {}
        }
    }

    fn handle_cart_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => {
                self.cart.add_sample_item();
                self.state.selected_index = self.cart.items().len().saturating_sub(1);
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item) = self.cart.items().get(self.state.selected_index) {
                    self.status_message = Some(format!("Removed {}", item.name));
                    self.cart.remove_items(&[self.state.selected_index]);
                    self.state.clamp_selection(self.cart.items().len());
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.cart.items().len())
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        let focus = self.state.register_focus;
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.register_focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.register_focus = focus.prev(),
            KeyCode::Enter if focus == RegisterFocus::Submit => self.submit_registration(),
            KeyCode::Enter => self.state.register_focus = focus.next(),
            KeyCode::Char(c) => {
                if let RegisterFocus::Field(field) = focus {
                    let mut value = self.form.value(field);
                    value.push(c);
                    self.form.set(field, value);
                }
            }
            KeyCode::Backspace => {
                if let RegisterFocus::Field(field) = focus {
                    let mut value = self.form.value(field);
                    value.pop();
                    self.form.set(field, value);
                }
            }
            _ => {}
        }
    }

    /// Submit is only accepted while the form is valid; a new session starts afterwards.
    fn submit_registration(&mut self) {
        if !self.form.is_form_valid() {
            self.status_message = Some("Fix the highlighted fields first".to_string());
            return;
        }

        let username = self.form.value(Field::Username);
        tracing::info!(%username, "registration submitted");
        self.status_message = Some(format!("Welcome, {username}!"));
        self.form = FormState::new(self.field_debounce);
        self.observers = Observers::new(&self.form, &self.converter);
        self.state.register_focus = RegisterFocus::default();
    }
}
