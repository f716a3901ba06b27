/// Back/forward list of visited folder paths.
///
/// Each entry is the path that was current when the user navigated away
/// from it. The cursor points at the entry `go back` would load next;
/// `None` means there is nothing to go back to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl PathHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Record `path` as left behind, discarding any forward entries.
    pub fn record(&mut self, path: impl Into<String>) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(path.into());
        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        match self.cursor {
            Some(c) => c + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    /// Path under the cursor, then move the cursor back one step.
    pub fn step_back(&mut self) -> Option<String> {
        let cursor = self.cursor?;
        let path = self.entries[cursor].clone();
        self.cursor = cursor.checked_sub(1);
        Some(path)
    }

    /// Move the cursor forward one step, then return the path under it.
    pub fn step_forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        self.cursor = Some(next);
        Some(self.entries[next].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_advances_cursor() {
        let mut history = PathHistory::new();
        history.record("a");
        assert_eq!(history.entries(), ["a".to_string()]);
        assert_eq!(history.cursor(), Some(0));

        history.record("b");
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_step_back_stops_at_start() {
        let mut history = PathHistory::new();
        history.record("a");

        assert_eq!(history.step_back(), Some("a".to_string()));
        assert_eq!(history.cursor(), None);
        assert_eq!(history.step_back(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_step_forward_stops_at_end() {
        let mut history = PathHistory::new();
        history.record("a");
        history.record("b");
        history.step_back();
        history.step_back();

        assert_eq!(history.step_forward(), Some("a".to_string()));
        assert_eq!(history.step_forward(), Some("b".to_string()));
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_record_after_back_truncates_forward_entries() {
        let mut history = PathHistory::new();
        history.record("a");
        history.record("b");
        history.record("c");
        history.step_back();
        history.step_back();

        history.record("x");
        assert_eq!(history.entries(), ["a".to_string(), "x".to_string()]);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_record_from_before_start_replaces_everything() {
        let mut history = PathHistory::new();
        history.record("a");
        history.step_back();

        history.record("z");
        assert_eq!(history.entries(), ["z".to_string()]);
        assert_eq!(history.cursor(), Some(0));
    }
}
