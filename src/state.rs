#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// A page that fits in the viewport has nothing to scroll and reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / scrollable).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub dark_mode: bool,
    pub scroll_progress: f64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll_progress = metrics.progress();
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            document_height: 5000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_defaults() {
        let state = UiState::new();
        assert!(!state.menu_open);
        assert!(!state.dark_mode);
        assert_eq!(state.scroll_progress, 0.0);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_menu_toggle_pairs_restore() {
        let mut state = UiState::new();
        for _ in 0..3 {
            let before = state.menu_open;
            state.toggle_menu();
            assert_ne!(state.menu_open, before);
            state.toggle_menu();
            assert_eq!(state.menu_open, before);
        }

        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_theme_toggle_is_a_flip() {
        let mut state = UiState::new();
        state.toggle_theme();
        assert!(state.dark_mode);
        assert_eq!(state.theme().class(), "dark");
        state.toggle_theme();
        assert!(!state.dark_mode);
        assert_eq!(state.theme().class(), "light");
    }

    #[test]
    fn test_menu_and_theme_are_independent() {
        let mut state = UiState::new();
        state.toggle_menu();
        state.toggle_theme();
        state.close_menu();
        assert!(state.dark_mode);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_progress_monotonic_and_bounded() {
        let mut last = 0.0;
        for step in 0..=40 {
            let p = metrics(step as f64 * 100.0).progress();
            assert!(p >= last, "progress went backwards at step {step}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert_eq!(metrics(4000.0).progress(), 1.0);
        assert_eq!(metrics(2000.0).progress(), 0.5);
    }

    #[test]
    fn test_scroll_progress_edge_cases() {
        // overscroll on either end
        assert_eq!(metrics(-50.0).progress(), 0.0);
        assert_eq!(metrics(4200.0).progress(), 1.0);

        let short_page = ScrollMetrics {
            offset: 0.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(short_page.progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);

        let mut state = UiState::new();
        state.set_scroll(metrics(1000.0));
        assert_eq!(state.scroll_progress, 0.25);
    }
}
