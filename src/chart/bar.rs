//! Fixed-width labelled data points.

/// Number of columns every bar label occupies.
pub const LABEL_WIDTH: usize = 5;

/// A single labelled count. The label is normalized to exactly
/// [`LABEL_WIDTH`] characters on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    label: String,
    count: u64,
}

impl Bar {
    /// Build a bar from any label.
    ///
    /// Labels longer than [`LABEL_WIDTH`] are cut to their first five characters.
    /// Shorter labels are centred with spaces; an odd leftover column goes on the right.
    pub fn new(label: &str, count: u64) -> Self {
        let len = label.chars().count();
        let label = if len > LABEL_WIDTH {
            label.chars().take(LABEL_WIDTH).collect()
        } else {
            let (left, right) = padding(len);
            format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
        };
        Self { label, count }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

fn padding(len: usize) -> (usize, usize) {
    let total = LABEL_WIDTH - len;
    let left = total / 2;
    (left, total - left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_splits_odd_space_to_the_right() {
        assert_eq!(padding(0), (2, 3));
        assert_eq!(padding(1), (2, 2));
        assert_eq!(padding(2), (1, 2));
        assert_eq!(padding(4), (0, 1));
        assert_eq!(padding(5), (0, 0));
    }

    #[test]
    fn multibyte_labels_are_cut_on_char_boundaries() {
        let bar = Bar::new("äöüßéè", 1);
        assert_eq!(bar.label(), "äöüßé");
        assert_eq!(bar.label().chars().count(), LABEL_WIDTH);
    }
}
