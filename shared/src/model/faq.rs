//! Single-open accordion state for the FAQ list

/// At most one entry is expanded at any time.
///
/// Clicking an expanded entry collapses it; clicking a collapsed entry
/// collapses everything else and expands it. Repeated clicks on the same
/// entry just toggle between those two states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = AccordionState::default();
        state.toggle(2);
        assert!(state.is_open(2));
        state.toggle(2);
        assert_eq!(state.open_entry(), None);
    }

    #[test]
    fn test_opening_another_entry_closes_the_first() {
        let mut state = AccordionState::default();
        state.toggle(0);
        state.toggle(3);
        assert!(!state.is_open(0));
        assert!(state.is_open(3));
    }

    #[test]
    fn test_at_most_one_open_after_any_click_sequence() {
        let mut state = AccordionState::default();
        let clicks = [0, 1, 1, 2, 0, 0, 4, 3, 3, 3, 2];
        for &i in &clicks {
            state.toggle(i);
            let open_count = (0..6).filter(|&j| state.is_open(j)).count();
            assert!(open_count <= 1);
        }
    }
}
