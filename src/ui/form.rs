//! Single-line text input bound to controller state.

/// Text typed by the user. The cursor is always at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn push(&mut self, ch: char) {
        if !ch.is_control() {
            self.value.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_backspace() {
        let mut field = TextField::default();
        field.push('a');
        field.push('ß');
        field.push('\n');
        assert_eq!(field.value(), "aß");
        field.backspace();
        assert_eq!(field.value(), "a");
        field.clear();
        assert!(field.is_blank());
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut field = TextField::new("");
        field.backspace();
        assert_eq!(field.value(), "");
    }
}
