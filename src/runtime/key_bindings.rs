use crate::runtime::intent::Intent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Intent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Intent> {
        self.bindings.get(&KeyBinding::from_event(event)).cloned()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Tab), Intent::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Down), Intent::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Up), Intent::PrevFocus);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Intent::PrevFocus,
        );
        self.bind(KeyBinding::key(KeyCode::BackTab), Intent::PrevFocus);
        self.bind(KeyBinding::key(KeyCode::Enter), Intent::Activate);
    }
}

#[cfg(test)]
mod tests {
    use super::KeyBindings;
    use crate::runtime::intent::Intent;
    use crate::terminal::{KeyCode, KeyEvent};

    #[test]
    fn defaults_cover_navigation_and_exit() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(KeyEvent::ctrl(KeyCode::Char('c'))),
            Some(Intent::Exit)
        );
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Tab)),
            Some(Intent::NextFocus)
        );
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Enter)),
            Some(Intent::Activate)
        );
    }

    #[test]
    fn printable_keys_are_unbound() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Char('a'))), None);
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Char(' '))), None);
    }
}
