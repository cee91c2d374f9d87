use ratatui::layout::Rect;

/// Outcome of offering a mouse click to a dropdown instance.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent<T> {
    /// An option row was clicked; the dropdown closed and committed this value.
    Committed(T),
    /// The trigger was clicked; open state flipped.
    Toggled,
    /// The click landed outside an open menu; it closed with no value change.
    Dismissed,
    /// The click landed on the open menu's chrome; swallowed, no change.
    Inside,
}

/// Two-state (closed/open) picker committing a single selected option on
/// close-via-selection. Instances are fully independent; each records its own
/// trigger and menu rectangles at draw time and dismisses itself on a click
/// outside both.
pub struct Dropdown<T> {
    options: Vec<(String, T)>,
    selected: usize,
    highlighted: usize,
    open: bool,
    trigger_area: Option<Rect>,
    menu_area: Option<Rect>,
}

impl<T: Clone> Dropdown<T> {
    pub fn new(options: Vec<(String, T)>) -> Self {
        Self {
            options,
            selected: 0,
            highlighted: 0,
            open: false,
            trigger_area: None,
            menu_area: None,
        }
    }

    /// Swaps the option list in place, used by menus whose entries are
    /// derived from live data. Selection resets to the first entry.
    pub fn replace_options(&mut self, options: Vec<(String, T)>) {
        self.options = options;
        self.selected = 0;
        self.highlighted = 0;
    }

    /// Back to the first option, closed. Used when filters are cleared.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.highlighted = 0;
        self.close();
    }

    pub fn options(&self) -> &[(String, T)] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn value(&self) -> Option<&T> {
        self.options.get(self.selected).map(|(_, v)| v)
    }

    pub fn label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|(l, _)| l.as_str())
            .unwrap_or("-")
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.highlighted = self.selected;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.menu_area = None;
    }

    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = if self.highlighted == 0 {
                self.options.len() - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    /// Commits the highlighted option: closes the menu, records the
    /// selection, and hands the value back exactly once.
    pub fn commit_highlighted(&mut self) -> Option<T> {
        self.commit(self.highlighted)
    }

    fn commit(&mut self, index: usize) -> Option<T> {
        let value = self.options.get(index).map(|(_, v)| v.clone())?;
        self.selected = index;
        self.highlighted = index;
        self.close();
        Some(value)
    }

    // Hit regions, refreshed on every draw.
    pub fn set_trigger_area(&mut self, area: Rect) {
        self.trigger_area = Some(area);
    }

    pub fn trigger_area(&self) -> Option<Rect> {
        self.trigger_area
    }

    pub fn set_menu_area(&mut self, area: Rect) {
        self.menu_area = Some(area);
    }

    /// Routes a mouse press to this instance. Option rows sit inside the
    /// menu border, one row each, starting at `menu.y + 1`.
    pub fn click(&mut self, column: u16, row: u16) -> Option<DropdownEvent<T>> {
        if hit(self.trigger_area, column, row) {
            self.toggle();
            return Some(DropdownEvent::Toggled);
        }
        if !self.open {
            return None;
        }
        if let Some(menu) = self.menu_area
            && hit(Some(menu), column, row)
        {
            let offset = row.saturating_sub(menu.y).saturating_sub(1) as usize;
            if row > menu.y && offset < self.options.len() {
                return self.commit(offset).map(DropdownEvent::Committed);
            }
            return Some(DropdownEvent::Inside);
        }
        self.close();
        Some(DropdownEvent::Dismissed)
    }
}

fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    match area {
        Some(a) => {
            column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_dropdown() -> Dropdown<&'static str> {
        Dropdown::new(vec![
            ("All".to_string(), "All"),
            ("Read".to_string(), "Read"),
            ("Unread".to_string(), "Unread"),
        ])
    }

    #[test]
    fn starts_closed_and_toggles_open() {
        let mut dd = status_dropdown();
        assert!(!dd.is_open());
        dd.toggle();
        assert!(dd.is_open());
        dd.toggle();
        assert!(!dd.is_open());
    }

    #[test]
    fn committing_an_option_closes_and_yields_the_value_once() {
        let mut dd = status_dropdown();
        dd.toggle();
        dd.highlight_next();
        dd.highlight_next();
        let committed = dd.commit_highlighted();
        assert_eq!(committed, Some("Unread"));
        assert!(!dd.is_open());
        assert_eq!(dd.value(), Some(&"Unread"));
        assert_eq!(dd.label(), "Unread");
    }

    #[test]
    fn highlight_wraps_in_both_directions() {
        let mut dd = status_dropdown();
        dd.toggle();
        dd.highlight_prev();
        assert_eq!(dd.highlighted(), 2);
        dd.highlight_next();
        assert_eq!(dd.highlighted(), 0);
    }

    #[test]
    fn reopening_highlights_the_committed_value() {
        let mut dd = status_dropdown();
        dd.toggle();
        dd.highlight_next();
        dd.commit_highlighted();
        dd.toggle();
        assert_eq!(dd.highlighted(), 1);
    }

    #[test]
    fn click_on_trigger_toggles() {
        let mut dd = status_dropdown();
        dd.set_trigger_area(Rect::new(10, 2, 12, 1));
        assert_eq!(dd.click(12, 2), Some(DropdownEvent::Toggled));
        assert!(dd.is_open());
        assert_eq!(dd.click(12, 2), Some(DropdownEvent::Toggled));
        assert!(!dd.is_open());
    }

    #[test]
    fn click_on_an_option_row_commits_it() {
        let mut dd = status_dropdown();
        dd.set_trigger_area(Rect::new(10, 2, 12, 1));
        dd.toggle();
        // menu drawn below the trigger: border at y=3, options at y=4..7
        dd.set_menu_area(Rect::new(10, 3, 14, 5));
        assert_eq!(dd.click(11, 6), Some(DropdownEvent::Committed("Unread")));
        assert!(!dd.is_open());
        assert_eq!(dd.value(), Some(&"Unread"));
    }

    #[test]
    fn click_outside_dismisses_without_changing_the_value() {
        let mut dd = status_dropdown();
        dd.set_trigger_area(Rect::new(10, 2, 12, 1));
        dd.toggle();
        dd.set_menu_area(Rect::new(10, 3, 14, 5));
        assert_eq!(dd.click(50, 20), Some(DropdownEvent::Dismissed));
        assert!(!dd.is_open());
        assert_eq!(dd.value(), Some(&"All"));
    }

    #[test]
    fn click_is_ignored_while_closed_and_off_trigger() {
        let mut dd = status_dropdown();
        dd.set_trigger_area(Rect::new(10, 2, 12, 1));
        assert_eq!(dd.click(50, 20), None);
    }
}
