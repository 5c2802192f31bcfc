use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Exit,
    Activate,
    NextFocus,
    PrevFocus,
    InputKey(KeyEvent),
    Tick,
}
