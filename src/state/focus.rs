#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Password,
    Accept,
    Submit,
}

const ORDER: [FocusTarget; 3] = [FocusTarget::Password, FocusTarget::Accept, FocusTarget::Submit];

#[derive(Debug, Clone, Copy, Default)]
pub struct FocusState {
    index: usize,
}

impl FocusState {
    pub fn current(&self) -> FocusTarget {
        ORDER[self.index]
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == target
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % ORDER.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + ORDER.len() - 1) % ORDER.len();
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusState, FocusTarget};

    #[test]
    fn cycles_in_both_directions() {
        let mut focus = FocusState::default();
        assert_eq!(focus.current(), FocusTarget::Password);
        focus.next();
        focus.next();
        assert_eq!(focus.current(), FocusTarget::Submit);
        focus.next();
        assert_eq!(focus.current(), FocusTarget::Password);
        focus.prev();
        assert_eq!(focus.current(), FocusTarget::Submit);
    }
}
