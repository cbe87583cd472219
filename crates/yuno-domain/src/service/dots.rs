//! Navigation dot indicator
//!
//! One dot per visible card. The row is rebuilt only when the visible count
//! changes; otherwise only the current marker moves.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "sync", rename_all = "snake_case")]
pub enum DotSync {
    Rebuilt { count: usize },
    Moved { from: Option<usize>, to: Option<usize> },
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct DotIndicator {
    count: usize,
    current: Option<usize>,
    rebuilds: usize,
}

impl DotIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, visible_count: usize, active: Option<usize>) -> DotSync {
        let active = active.filter(|&i| i < visible_count);
        if visible_count != self.count || self.rebuilds == 0 {
            self.count = visible_count;
            self.current = active;
            self.rebuilds += 1;
            return DotSync::Rebuilt {
                count: visible_count,
            };
        }
        if self.current != active {
            let from = self.current;
            self.current = active;
            return DotSync::Moved { from, to: active };
        }
        DotSync::Unchanged
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// How many times the dot row has been torn down and rebuilt
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    /// One flag per dot, `true` for the current one
    pub fn dots(&self) -> Vec<bool> {
        (0..self.count).map(|i| Some(i) == self.current).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sync_builds() {
        let mut dots = DotIndicator::new();
        assert_eq!(dots.sync(3, Some(0)), DotSync::Rebuilt { count: 3 });
        assert_eq!(dots.dots(), vec![true, false, false]);
    }

    #[test]
    fn test_navigation_moves_marker_without_rebuild() {
        let mut dots = DotIndicator::new();
        dots.sync(3, Some(0));
        assert_eq!(
            dots.sync(3, Some(2)),
            DotSync::Moved {
                from: Some(0),
                to: Some(2)
            }
        );
        assert_eq!(dots.sync(3, Some(2)), DotSync::Unchanged);
        assert_eq!(dots.rebuild_count(), 1);
        assert_eq!(dots.dots(), vec![false, false, true]);
    }

    #[test]
    fn test_count_change_rebuilds() {
        let mut dots = DotIndicator::new();
        dots.sync(4, Some(1));
        dots.sync(2, Some(0));
        assert_eq!(dots.rebuild_count(), 2);
        assert_eq!(dots.dots(), vec![true, false]);
        dots.sync(0, None);
        assert!(dots.dots().is_empty());
        assert_eq!(dots.current(), None);
    }
}
