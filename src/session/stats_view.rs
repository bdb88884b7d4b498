use crate::engine::prompt::Prompt;
use crate::engine::stats::StatisticsStore;

/// Rows kept visible below/above the selection while the list can scroll.
const KEEP_ON_SCREEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Vocabulary order.
    Catalog,
    /// Most likely to be drawn first, then most mistakes.
    Weakest,
}

/// Scroll state of the statistics list: which prompt is at the top of the
/// window and which window row is selected.
#[derive(Clone, Debug)]
pub struct StatsView {
    prompts: Vec<Prompt>,
    first_shown: usize,
    selected_row: usize,
    sort: SortOrder,
}

impl StatsView {
    pub fn new(store: &StatisticsStore) -> Self {
        Self {
            prompts: store.prompts().to_vec(),
            first_shown: 0,
            selected_row: 0,
            sort: SortOrder::Catalog,
        }
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn first_shown(&self) -> usize {
        self.first_shown
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Index into [`StatsView::prompts`] of the highlighted entry.
    pub fn selected_index(&self) -> usize {
        self.first_shown + self.selected_row
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Prompts inside a window of `rows` rows, with their list index.
    pub fn visible(&self, rows: usize) -> impl Iterator<Item = (usize, &Prompt)> + '_ {
        self.prompts
            .iter()
            .enumerate()
            .skip(self.first_shown)
            .take(rows)
    }

    pub fn scroll_down(&mut self, rows: usize) {
        if rows == 0 || self.selected_index() + 1 >= self.prompts.len() {
            return;
        }
        if self.selected_row + KEEP_ON_SCREEN + 1 < rows {
            self.selected_row += 1;
        } else if self.first_shown + rows < self.prompts.len() {
            self.first_shown += 1;
        } else if self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        if self.selected_row > KEEP_ON_SCREEN {
            self.selected_row -= 1;
        } else if self.first_shown > 0 {
            self.first_shown -= 1;
        } else if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    /// Shifts the window so the selection stays inside `rows` rows after the
    /// list area shrank.
    pub fn fit(&mut self, rows: usize) {
        if rows == 0 || self.selected_row < rows {
            return;
        }
        let shift = self.selected_row + 1 - rows;
        self.first_shown += shift;
        self.selected_row -= shift;
    }

    /// Switches between catalog and weakest-first order and jumps to the top.
    pub fn toggle_sort(&mut self, store: &StatisticsStore) {
        self.sort = match self.sort {
            SortOrder::Catalog => SortOrder::Weakest,
            SortOrder::Weakest => SortOrder::Catalog,
        };
        self.prompts = store.prompts().to_vec();
        if self.sort == SortOrder::Weakest {
            // Stable sort keeps catalog order among equals.
            self.prompts.sort_by(|a, b| {
                let (sa, sb) = (store.get(a).unwrap_or_default(), store.get(b).unwrap_or_default());
                sb.weight()
                    .total_cmp(&sa.weight())
                    .then_with(|| sb.mistakes.cmp(&sa.mistakes))
            });
        }
        self.first_shown = 0;
        self.selected_row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::stats::PromptStats;

    fn store_of(n: usize) -> StatisticsStore {
        let mut store = StatisticsStore::new();
        for i in 0..n {
            store.insert(Prompt::new(format!("c{i}"), "v"), format!("a{i}"));
        }
        store
    }

    #[test]
    fn test_selection_moves_before_window_scrolls() {
        let mut view = StatsView::new(&store_of(20));
        for _ in 0..5 {
            view.scroll_down(8);
        }
        assert_eq!(view.selected_row(), 5);
        assert_eq!(view.first_shown(), 0);

        // Keeps two rows below the selection visible from here on.
        view.scroll_down(8);
        assert_eq!(view.selected_row(), 5);
        assert_eq!(view.first_shown(), 1);
    }

    #[test]
    fn test_window_stops_at_end_then_selection_reaches_last_row() {
        let mut view = StatsView::new(&store_of(10));
        for _ in 0..50 {
            view.scroll_down(8);
        }
        assert_eq!(view.first_shown(), 2);
        assert_eq!(view.selected_row(), 7);
        assert_eq!(view.selected_index(), 9);
    }

    #[test]
    fn test_short_list_never_selects_past_end() {
        let mut view = StatsView::new(&store_of(3));
        for _ in 0..10 {
            view.scroll_down(8);
        }
        assert_eq!(view.selected_index(), 2);
        assert_eq!(view.first_shown(), 0);
    }

    #[test]
    fn test_scroll_up_mirrors_scroll_down() {
        let mut view = StatsView::new(&store_of(20));
        for _ in 0..12 {
            view.scroll_down(8);
        }
        let bottom = view.selected_index();
        view.scroll_up();
        assert_eq!(view.selected_index(), bottom - 1);

        for _ in 0..50 {
            view.scroll_up();
        }
        assert_eq!(view.first_shown(), 0);
        assert_eq!(view.selected_row(), 0);
    }

    #[test]
    fn test_visible_window() {
        let mut view = StatsView::new(&store_of(10));
        for _ in 0..7 {
            view.scroll_down(4);
        }
        let shown: Vec<usize> = view.visible(4).map(|(i, _)| i).collect();
        assert_eq!(shown.len(), 4);
        assert!(shown.contains(&view.selected_index()));
    }

    #[test]
    fn test_fit_keeps_selection_after_shrink() {
        let mut view = StatsView::new(&store_of(20));
        for _ in 0..5 {
            view.scroll_down(8);
        }
        assert_eq!(view.selected_row(), 5);

        view.fit(4);
        assert_eq!(view.selected_index(), 5);
        assert_eq!(view.selected_row(), 3);
        assert_eq!(view.first_shown(), 2);
        assert!(view.visible(4).any(|(i, _)| i == view.selected_index()));

        // Growing back leaves the window alone.
        view.fit(8);
        assert_eq!(view.first_shown(), 2);
        assert_eq!(view.selected_row(), 3);
    }

    #[test]
    fn test_weakest_order_puts_low_streak_first() {
        let mut store = store_of(3);
        store.update_stats(&Prompt::new("c0", "v"), PromptStats::new(4, 4, 0));
        store.update_stats(&Prompt::new("c2", "v"), PromptStats::new(0, 1, 3));
        let mut view = StatsView::new(&store);
        view.scroll_down(8);
        view.toggle_sort(&store);

        assert_eq!(view.sort(), SortOrder::Weakest);
        assert_eq!(view.selected_index(), 0);
        let clues: Vec<&str> = view.prompts().iter().map(Prompt::clue).collect();
        assert_eq!(clues, ["c2", "c1", "c0"]);

        view.toggle_sort(&store);
        let clues: Vec<&str> = view.prompts().iter().map(Prompt::clue).collect();
        assert_eq!(clues, ["c0", "c1", "c2"]);
    }
}
