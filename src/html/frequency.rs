use std::collections::HashMap;

/// Occurrence counts that remember first-seen order, so ranking ties are
/// broken the same way on every run.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Highest counts first, first-seen order among equals, at most `limit`.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        for key in ["span", "div", "p", "div", "p", "a"] {
            table.increment(key);
        }

        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.most_common(Some(3)),
            vec![
                ("div".to_string(), 2),
                ("p".to_string(), 2),
                ("span".to_string(), 1)
            ]
        );
        assert_eq!(table.get("missing"), 0);
    }
}
