use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

mod app;
mod config;
mod modules;
mod ui;

use app::{App, AppState, DropdownKind, MenuSection};

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new()?;
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(KeyEvent { code, modifiers, kind, .. }) => {
                if kind != KeyEventKind::Press {
                    continue;
                }
                match app.state {
                    AppState::Normal => {
                        // an open dropdown owns the navigation keys
                        if app.focused_open_dropdown().is_some() {
                            match code {
                                KeyCode::Up | KeyCode::Char('k') => app.dropdown_highlight_prev(),
                                KeyCode::Down | KeyCode::Char('j') => app.dropdown_highlight_next(),
                                KeyCode::Enter => app.dropdown_commit(),
                                KeyCode::Esc => app.dropdown_close(),
                                _ => {}
                            }
                            continue;
                        }
                        match code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(())
                            }
                            KeyCode::Char('?') => { app.show_help = !app.show_help; }
                            KeyCode::Char('1') => app.jump_to_section(MenuSection::Dashboard),
                            KeyCode::Char('2') => app.jump_to_section(MenuSection::RoleManagement),
                            KeyCode::Char('3') => app.jump_to_section(MenuSection::UserManagement),
                            KeyCode::Char('4') => app.jump_to_section(MenuSection::Notifications),
                            KeyCode::Char('5') => app.jump_to_section(MenuSection::SystemSettings),
                            KeyCode::Char('6') => {
                                app.jump_to_section(MenuSection::ProfileManagement)
                            }
                            KeyCode::Char('7') => app.request_logout(),
                            KeyCode::Tab => app.next_section(),
                            KeyCode::BackTab => app.previous_section(),
                            KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                            KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                            KeyCode::Home => app.go_home(),
                            KeyCode::End => app.go_end(),
                            KeyCode::Char('/') => app.open_search(),
                            KeyCode::Enter | KeyCode::Char('m') => app.mark_selected_read(),
                            KeyCode::Char('a') => app.mark_all_read(),
                            KeyCode::Char('d') => app.delete_selected(),
                            KeyCode::Char('c') => app.clear_filters(),
                            KeyCode::Char('s') => app.toggle_dropdown(DropdownKind::Status),
                            KeyCode::Char('t') => app.toggle_dropdown(DropdownKind::Kind),
                            KeyCode::Char('b') => app.toggle_dropdown(DropdownKind::Bell),
                            KeyCode::Char('u') => app.toggle_dropdown(DropdownKind::User),
                            KeyCode::Left => app.prev_page(),
                            KeyCode::Right => app.next_page(),
                            _ => {}
                        }
                    }
                    AppState::Search => match code {
                        KeyCode::Enter | KeyCode::Esc => app.close_search(),
                        KeyCode::Backspace => app.search_backspace(),
                        KeyCode::Left => app.search_move_left(),
                        KeyCode::Right => app.search_move_right(),
                        KeyCode::Char(c) => app.search_input_char(c),
                        _ => {}
                    },
                    AppState::Confirm => match code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_action(),
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            app.cancel_confirm()
                        }
                        _ => {}
                    },
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) if app.state == AppState::Normal => {
                app.handle_click(column, row);
            }
            _ => {}
        }
    }
}
