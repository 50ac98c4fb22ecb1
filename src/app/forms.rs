//! Sign-in and sign-up form state.

use crate::models::RegisterRequest;

/// A single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    /// Render as bullets (PIN)
    pub masked: bool,
    /// Digits only (phone number, PIN)
    pub numeric: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.numeric && !(c.is_ascii_digit() || (c == '+' && self.value.is_empty())) {
            return;
        }
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Text to draw.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Cycles focus through a fixed list of fields.
pub trait Form {
    fn fields(&self) -> Vec<&TextField>;
    fn field_mut(&mut self, index: usize) -> Option<&mut TextField>;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);

    fn next_field(&mut self) {
        let count = self.fields().len();
        self.set_focus((self.focus() + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.fields().len();
        self.set_focus((self.focus() + count - 1) % count);
    }

    fn insert_char(&mut self, c: char) {
        let focus = self.focus();
        if let Some(field) = self.field_mut(focus) {
            field.insert_char(c);
        }
    }

    fn backspace(&mut self) {
        let focus = self.focus();
        if let Some(field) = self.field_mut(focus) {
            field.backspace();
        }
    }
}

/// Phone number and PIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    pub phone_number: TextField,
    pub pin: TextField,
    focus: usize,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self {
            phone_number: TextField::new("Phone Number").numeric(),
            pin: TextField::new("PIN").numeric().masked(),
            focus: 0,
        }
    }
}

impl Form for SignInForm {
    fn fields(&self) -> Vec<&TextField> {
        vec![&self.phone_number, &self.pin]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        match index {
            0 => Some(&mut self.phone_number),
            1 => Some(&mut self.pin),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }
}

/// All registration fields, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    fields: [TextField; 8],
    focus: usize,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            fields: [
                TextField::new("First Name"),
                TextField::new("Last Name"),
                TextField::new("Phone Number").numeric(),
                TextField::new("PIN").numeric().masked(),
                TextField::new("Gender"),
                TextField::new("Email"),
                TextField::new("County"),
                TextField::new("Sub-County"),
            ],
            focus: 0,
        }
    }
}

impl SignUpForm {
    pub fn to_request(&self) -> RegisterRequest {
        let value = |i: usize| self.fields[i].value.trim().to_string();
        RegisterRequest {
            first_name: value(0),
            last_name: value(1),
            phone_number: value(2),
            pin: value(3),
            gender: value(4),
            email: value(5),
            county: value(6),
            sub_county: value(7),
        }
    }
}

impl Form for SignUpForm {
    fn fields(&self) -> Vec<&TextField> {
        self.fields.iter().collect()
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        self.fields.get_mut(index)
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }
}
