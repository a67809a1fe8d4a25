//! Dashboard application: input handling and view mounting.

use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use tracing::info;

use crate::config::{ROW_HEIGHT_PX, WHEEL_ROWS};
use crate::dashboard::{DashboardState, Tab};
use crate::view::{ScrollBus, TableView};
use crate::visualization::{render_dashboard, tab_at, DashboardLayout};


/// Rows of table chrome (borders, header, header margin) inside the main area.
const TABLE_CHROME_ROWS: u16 = 4;


/// Largest scroll offset for a dataset of `len` rows.
pub fn max_offset(len: usize) -> u32 {
    len.saturating_sub(1) as u32 * ROW_HEIGHT_PX
}


/// Application state
pub struct DashboardApp {
    pub running: bool,
    state: DashboardState,
    bus: Rc<ScrollBus>,
    table: Option<TableView>,
    layout: DashboardLayout,
}


impl DashboardApp {
    /// Mount the dashboard on `state`, showing its active tab.
    pub fn new(state: DashboardState) -> Self {
        let mut app = Self {
            running: true,
            state,
            bus: ScrollBus::new(),
            table: None,
            layout: DashboardLayout::default(),
        };
        app.mount_active_view();
        info!(tab = app.state.active_tab.title(), "dashboard mounted");
        app
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn table(&self) -> Option<&TableView> {
        self.table.as_ref()
    }

    pub fn bus(&self) -> &Rc<ScrollBus> {
        &self.bus
    }

    pub fn scroll_offset(&self) -> u32 {
        self.bus.offset()
    }

    /// Switch tabs and remount the child view if the tab changed.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.state.select_tab(tab) {
            return;
        }
        info!(tab = tab.title(), "tab selected");
        self.mount_active_view();
    }

    fn mount_active_view(&mut self) {
        self.bus.reset();

        let Some(data) = self.state.dataset(self.state.active_tab).cloned() else {
            self.table = None;
            return;
        };

        if let Some(view) = self.table.as_mut() {
            view.set_data(&self.bus, data);
        } else {
            self.table = Some(TableView::mount(&self.bus, data));
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('1') => self.select_tab(Tab::Table1),
            KeyCode::Char('2') => self.select_tab(Tab::Table2),
            KeyCode::Char('3') => self.select_tab(Tab::Charts),
            KeyCode::Tab | KeyCode::Right => self.select_tab(self.state.active_tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.select_tab(self.state.active_tab.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_rows(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_rows(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_rows(self.page_rows()),
            KeyCode::PageUp => self.scroll_rows(-self.page_rows()),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_rows(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_rows(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(tab) = tab_at(self.layout.tabs, mouse.column, mouse.row) {
                    self.select_tab(tab);
                }
            }
            _ => {}
        }
    }

    fn page_rows(&self) -> i64 {
        i64::from(self.layout.main.height.saturating_sub(TABLE_CHROME_ROWS).max(1))
    }

    fn scroll_rows(&mut self, rows: i64) {
        if let Some(view) = &self.table {
            let max = max_offset(view.data().len());
            self.bus.scroll_by(rows * i64::from(ROW_HEIGHT_PX), max);
        }
    }

    fn scroll_to_top(&mut self) {
        if self.table.is_some() {
            self.bus.scroll_to(0);
        }
    }

    fn scroll_to_bottom(&mut self) {
        if let Some(view) = &self.table {
            self.bus.scroll_to(max_offset(view.data().len()));
        }
    }

    /// Render the application and remember the layout for hit-testing.
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout = render_dashboard(frame, &self.state, self.table.as_ref(), self.bus.offset());
    }
}


#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::data::source_from_seed;

    fn new_app(count: usize) -> DashboardApp {
        let mut rng = source_from_seed(Some(12));
        DashboardApp::new(DashboardState::build(count, &mut rng))
    }

    fn press(app: &mut DashboardApp, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_max_offset() {
        assert_eq!(max_offset(0), 0);
        assert_eq!(max_offset(1), 0);
        assert_eq!(max_offset(1000), 999 * 30);
    }

    #[test]
    fn test_starts_on_table1() {
        let app = new_app(1000);
        assert_eq!(app.state().active_tab, Tab::Table1);
        let view = app.table().unwrap();
        assert!(Rc::ptr_eq(view.data(), &app.state().primary));
        assert_eq!(view.visible_count(), 100);
        assert_eq!(app.bus().listener_count(), 1);
    }

    #[test]
    fn test_scroll_keys_reveal_rows() {
        let mut app = new_app(1000);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.scroll_offset(), 300);
        assert_eq!(app.table().unwrap().visible_count(), 110);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll_offset(), 270);
        assert_eq!(app.table().unwrap().visible_count(), 109);

        press(&mut app, KeyCode::End);
        assert_eq!(app.table().unwrap().visible_count(), 1000);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll_offset(), 0);
        assert_eq!(app.table().unwrap().visible_count(), 100);
    }

    #[test]
    fn test_tab_round_trip_resets_view() {
        let mut app = new_app(1000);
        press(&mut app, KeyCode::End);
        assert_eq!(app.table().unwrap().visible_count(), 1000);

        press(&mut app, KeyCode::Char('3'));
        assert!(app.table().is_none());
        assert_eq!(app.bus().listener_count(), 0);

        press(&mut app, KeyCode::Char('1'));
        let view = app.table().unwrap();
        assert!(Rc::ptr_eq(view.data(), &app.state().primary));
        assert_eq!(view.visible_count(), 100);
        assert_eq!(app.scroll_offset(), 0);
        assert_eq!(app.bus().listener_count(), 1);
    }

    #[test]
    fn test_switching_tables_swaps_dataset() {
        let mut app = new_app(1000);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Char('2'));

        let view = app.table().unwrap();
        assert!(Rc::ptr_eq(view.data(), &app.state().modified));
        assert_eq!(view.visible_count(), 100);
        assert_eq!(app.bus().listener_count(), 1);
    }

    #[test]
    fn test_many_switches_keep_single_listener() {
        let mut app = new_app(300);
        for _ in 0..20 {
            press(&mut app, KeyCode::Tab);
            assert!(app.bus().listener_count() <= 1);
        }
        for _ in 0..7 {
            press(&mut app, KeyCode::BackTab);
        }
        assert_eq!(app.state().active_tab, Tab::Table2);
        assert_eq!(app.bus().listener_count(), 1);
    }

    #[test]
    fn test_scrolling_ignored_on_charts() {
        let mut app = new_app(1000);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll_offset(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app(10);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = new_app(10);
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!app.running);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut app = new_app(10);
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_event(Event::Key(release));
        assert!(app.running);
    }

    #[test]
    fn test_mouse_wheel_and_tab_click() {
        let mut app = new_app(1000);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        app.handle_event(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.scroll_offset(), 90);
        assert_eq!(app.table().unwrap().visible_count(), 103);

        // tab bar occupies rows 3..6; titles sit on row 4
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 24, 4));
        assert_eq!(app.state().active_tab, Tab::Charts);

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 14, 4));
        assert_eq!(app.state().active_tab, Tab::Table2);
    }

    #[test]
    fn test_page_size_follows_layout() {
        let mut app = new_app(1000);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        press(&mut app, KeyCode::PageDown);
        // main area is 23 rows high, 19 of them hold records
        assert_eq!(app.scroll_offset(), 19 * 30);
    }

    #[test]
    fn test_empty_dashboard() {
        let mut app = new_app(0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll_offset(), 0);
        assert_eq!(app.table().unwrap().visible_count(), 0);
    }
}
