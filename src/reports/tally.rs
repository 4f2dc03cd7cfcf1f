use std::collections::HashMap;
use std::hash::Hash;

/// Counts per key, remembering the order keys were first seen.
///
/// Ranking is stable: when several keys share the highest count, the one seen first
/// wins.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K, amount: u64) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, amount));
            }
        }
    }

    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// The key with the highest count; ties go to the earliest key.
    pub fn top(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, count) in &self.entries {
            match best {
                Some((_, top)) if *count <= top => {}
                _ => best = Some((key, *count)),
            }
        }
        best
    }

    pub fn get(&self, key: &K) -> u64 {
        self.index.get(key).map_or(0, |&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_wins_ties() {
        let mut tally = Tally::new();
        tally.add("Pizza", 2);
        tally.add("Salad", 2);
        assert_eq!(tally.top(), Some((&"Pizza", 2)));

        tally.increment("Salad");
        assert_eq!(tally.top(), Some((&"Salad", 3)));
    }

    #[test]
    fn test_iteration_keeps_first_seen_order() {
        let mut tally = Tally::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            tally.increment(key);
        }
        let seen: Vec<(&str, u64)> = tally.iter().map(|(k, c)| (*k, c)).collect();
        assert_eq!(seen, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(tally.get(&"z"), 0);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn test_empty_tally_has_no_top() {
        let tally: Tally<u32> = Tally::new();
        assert!(tally.top().is_none());
        assert!(tally.is_empty());
    }
}
