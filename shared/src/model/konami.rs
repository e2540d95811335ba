//! Bounded key-sequence detector for the hidden easter egg

/// Up, Up, Down, Down, Left, Right, Left, Right, B, A, as `keyCode`s.
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Keeps the last `target.len()` keycodes and reports exact matches.
///
/// Matching consumes nothing: completing the sequence again immediately
/// (sharing the already-buffered tail) fires again.
#[derive(Clone, Debug)]
pub struct SequenceDetector {
    target: Vec<u32>,
    recent: Vec<u32>,
}

impl SequenceDetector {
    pub fn new(target: Vec<u32>) -> Self {
        Self {
            recent: Vec::with_capacity(target.len()),
            target,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI_SEQUENCE.to_vec())
    }

    /// Append a keycode, trim the window to the target length, and report
    /// whether the window now equals the target exactly.
    pub fn push(&mut self, code: u32) -> bool {
        self.recent.push(code);
        if self.recent.len() > self.target.len() {
            self.recent.remove(0);
        }
        self.recent == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sequence_fires() {
        let mut detector = SequenceDetector::konami();
        let mut fired = false;
        for &code in &KONAMI_SEQUENCE {
            fired = detector.push(code);
        }
        assert!(fired);
    }

    #[test]
    fn test_one_wrong_position_does_not_fire() {
        // Flip each position in turn; none of the variants may fire.
        for wrong_at in 0..KONAMI_SEQUENCE.len() {
            let mut detector = SequenceDetector::konami();
            let mut fired = false;
            for (i, &code) in KONAMI_SEQUENCE.iter().enumerate() {
                let code = if i == wrong_at { 13 } else { code };
                fired = detector.push(code) || fired;
            }
            assert!(!fired, "variant with position {wrong_at} flipped fired");
        }
    }

    #[test]
    fn test_fires_after_leading_noise() {
        let mut detector = SequenceDetector::konami();
        for code in [72, 69, 76, 76, 79] {
            assert!(!detector.push(code));
        }
        let mut fired = false;
        for &code in &KONAMI_SEQUENCE {
            fired = detector.push(code);
        }
        assert!(fired);
    }

    #[test]
    fn test_recompletion_fires_again() {
        let mut detector = SequenceDetector::konami();
        for &code in &KONAMI_SEQUENCE {
            detector.push(code);
        }
        // Typing the full sequence a second time must fire a second time.
        let mut fired = false;
        for &code in &KONAMI_SEQUENCE {
            fired = detector.push(code);
        }
        assert!(fired);
    }

    #[test]
    fn test_no_fire_while_window_short() {
        let mut detector = SequenceDetector::new(vec![1, 2, 3]);
        assert!(!detector.push(1));
        assert!(!detector.push(2));
        assert!(detector.push(3));
    }
}
