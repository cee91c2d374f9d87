use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, AppState, MenuSection, PaginationHit, SIDEBAR_ENTRIES};
use crate::modules::pagination::PageLabel;

pub fn draw(f: &mut Frame, app: &mut App) {
    app.pagination_hits.clear();
    app.search_area = None;
    app.mark_all_area = None;
    app.list_area = None;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_title(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(chunks[1]);

    draw_menu(f, app, main_chunks[0]);

    match app.current_section {
        MenuSection::Dashboard => draw_dashboard(f, app, main_chunks[1]),
        MenuSection::Notifications => draw_notifications(f, app, main_chunks[1]),
        MenuSection::RoleManagement => draw_placeholder(f, main_chunks[1], "Role Management"),
        MenuSection::UserManagement => draw_placeholder(f, main_chunks[1], "User Management"),
        MenuSection::SystemSettings => draw_placeholder(f, main_chunks[1], "System Settings"),
        MenuSection::ProfileManagement => {
            draw_placeholder(f, main_chunks[1], "Profile Management")
        }
    }

    draw_status(f, app, chunks[2]);

    draw_dropdown_menus(f, app);

    if app.state == AppState::Confirm {
        draw_confirm_popup(f, app);
    } else if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_title(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(8),
            Constraint::Length(16),
        ])
        .split(area);

    let username = std::env::var("USERNAME")
        .or_else(|_| std::env::var("USER"))
        .unwrap_or_else(|_| "unknown".to_string());
    let time_str = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let header = format!(
        "Admin Panel | {} | {} | {}",
        username,
        time_str,
        std::env::consts::ARCH
    );

    let title = Paragraph::new(header)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let unread = app.store.unread_count();
    let bell_style = if unread > 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let bell = Paragraph::new(format!("🔔 {}", unread))
        .style(bell_style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(bell, chunks[1]);
    app.bell_menu.set_trigger_area(chunks[1]);

    let user = Paragraph::new("👤 Admin User")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(user, chunks[2]);
    app.user_menu.set_trigger_area(chunks[2]);
}

fn draw_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = SIDEBAR_ENTRIES
        .iter()
        .map(|(key, name, section)| {
            let style = match section {
                Some(section) if *section == app.current_section => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default(),
                None => Style::default().fg(Color::Red),
            };
            ListItem::new(format!("{} {}", key, name)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Menu")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    f.render_widget(list, area);
    app.sidebar_area = Some(area);
}

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let summary = Paragraph::new(format!(
        "Notifications: {}\nUnread: {}",
        app.store.len(),
        app.store.unread_count()
    ))
    .block(Block::default().title("Overview").borders(Borders::ALL));
    f.render_widget(summary, chunks[0]);

    let recent: Vec<ListItem> = app
        .store
        .records()
        .iter()
        .take(5)
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", r.kind.icon()), Style::default().fg(r.kind.color())),
                Span::raw(format!("{} ({})", r.title, r.timestamp)),
            ]))
        })
        .collect();

    if recent.is_empty() {
        let empty = Paragraph::new("No notifications yet")
            .block(Block::default().title("Recent Notifications").borders(Borders::ALL));
        f.render_widget(empty, chunks[1]);
    } else {
        let list = List::new(recent)
            .block(Block::default().title("Recent Notifications").borders(Borders::ALL));
        f.render_widget(list, chunks[1]);
    }
}

fn draw_placeholder(f: &mut Frame, area: Rect, title: &str) {
    let body = Paragraph::new("This section is not part of the notifications build.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(body, area);
}

fn draw_notifications(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_heading(f, app, chunks[0]);
    draw_filter_bar(f, app, chunks[1]);
    draw_record_list(f, app, chunks[2]);
    draw_pagination(f, app, chunks[3]);
}

fn draw_heading(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(22)])
        .split(area);

    let heading = Paragraph::new("Notifications Management")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(heading, chunks[0]);

    let mark_all = Paragraph::new("a: Mark all as read")
        .style(Style::default().fg(Color::Blue))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(mark_all, chunks[1]);
    app.mark_all_area = Some(chunks[1]);
}

fn draw_filter_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(18),
            Constraint::Length(28),
        ])
        .split(area);

    let search_style = if app.state == AppState::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let term = if app.state == AppState::Search {
        // crude cursor marker while editing
        let mut t = app.filter.search_term.clone();
        t.insert(app.search_cursor.min(t.len()), '|');
        t
    } else if app.filter.search_term.is_empty() {
        "Search notifications...".to_string()
    } else {
        app.filter.search_term.clone()
    };
    let search = Paragraph::new(format!("/ {}", term)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(search_style),
    );
    f.render_widget(search, chunks[0]);
    app.search_area = Some(chunks[0]);

    let status = Paragraph::new(format!("Status: {}", app.status_dropdown.label())).block(
        Block::default()
            .title("s")
            .borders(Borders::ALL)
            .border_style(trigger_style(app.status_dropdown.is_open())),
    );
    f.render_widget(status, chunks[1]);
    app.status_dropdown.set_trigger_area(chunks[1]);

    let kind = Paragraph::new(format!("Type: {}", app.kind_dropdown.label())).block(
        Block::default()
            .title("t")
            .borders(Borders::ALL)
            .border_style(trigger_style(app.kind_dropdown.is_open())),
    );
    f.render_widget(kind, chunks[2]);
    app.kind_dropdown.set_trigger_area(chunks[2]);
}

fn trigger_style(open: bool) -> Style {
    if open {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_record_list(f: &mut Frame, app: &mut App, area: Rect) {
    let records = app.visible_snapshot();
    app.list_area = Some(area);

    if records.is_empty() {
        let empty = Paragraph::new(
            "No notifications found\n\nTry adjusting your search or filter criteria.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title("Notifications").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
        f.render_widget(empty, area);
        app.list_window_start = 0;
        return;
    }

    let window_height = area.height.saturating_sub(2) as usize;
    let start = app.selected_index.saturating_sub(window_height / 2);
    let end = usize::min(start + window_height.max(1), records.len());
    app.list_window_start = start;

    let items: Vec<ListItem> = records[start..end]
        .iter()
        .enumerate()
        .map(|(offset, r)| {
            let i = start + offset;
            let selected = i == app.selected_index;
            let dot = if r.read {
                Span::raw("  ")
            } else {
                Span::styled("● ", Style::default().fg(Color::Blue))
            };
            let title_style = if r.read {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let line = Line::from(vec![
                dot,
                Span::styled(format!("{} ", r.kind.icon()), Style::default().fg(r.kind.color())),
                Span::styled(r.title.clone(), title_style),
                Span::raw(" - "),
                Span::raw(r.message.clone()),
                Span::styled(
                    format!(" ({})", r.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Notifications (Enter/m: read, d: delete, /: search)")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn draw_pagination(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(inner);

    // Placeholder summary carried over from the original screen; not derived
    // from the filtered count.
    let summary = Paragraph::new("Showing 1-5 of 42").style(Style::default().fg(Color::DarkGray));
    f.render_widget(summary, chunks[0]);

    let strip = chunks[1];
    let mut spans: Vec<Span> = Vec::new();
    let mut x = strip.x;
    let y = strip.y;

    let mut push = |spans: &mut Vec<Span>,
                    x: &mut u16,
                    app: &mut App,
                    text: String,
                    style: Style,
                    hit: Option<PaginationHit>| {
        let width = text.chars().count() as u16;
        if let Some(hit) = hit {
            app.pagination_hits.push((Rect::new(*x, y, width, 1), hit));
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        *x += width + 1;
    };

    let prev_style = if app.pagination.at_first() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let prev_hit = (!app.pagination.at_first()).then_some(PaginationHit::Prev);
    push(&mut spans, &mut x, app, "Previous".to_string(), prev_style, prev_hit);

    for label in app.pagination.labels() {
        match label {
            PageLabel::Page(page) => {
                let style = if page == app.pagination.current_page {
                    Style::default().fg(Color::White).bg(Color::Blue)
                } else {
                    Style::default()
                };
                push(
                    &mut spans,
                    &mut x,
                    app,
                    format!(" {} ", page),
                    style,
                    Some(PaginationHit::Page(page)),
                );
            }
            PageLabel::Ellipsis => {
                push(
                    &mut spans,
                    &mut x,
                    app,
                    "...".to_string(),
                    Style::default().fg(Color::DarkGray),
                    None,
                );
            }
        }
    }

    let next_style = if app.pagination.at_last() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let next_hit = (!app.pagination.at_last()).then_some(PaginationHit::Next);
    push(&mut spans, &mut x, app, "Next".to_string(), next_style, next_hit);

    let strip_widget = Paragraph::new(Line::from(spans));
    f.render_widget(strip_widget, strip);
}

fn draw_dropdown_menus(f: &mut Frame, app: &mut App) {
    if app.current_section == MenuSection::Notifications {
        draw_menu_for(f, &mut app.status_dropdown, 16);
        draw_menu_for(f, &mut app.kind_dropdown, 26);
    }
    draw_menu_for(f, &mut app.bell_menu, 44);
    draw_menu_for(f, &mut app.user_menu, 16);
}

/// Renders one open dropdown anchored under its trigger and records the menu
/// rect for hit-testing.
fn draw_menu_for<T: Clone>(
    f: &mut Frame,
    dropdown: &mut crate::modules::dropdown::Dropdown<T>,
    width: u16,
) {
    if !dropdown.is_open() {
        return;
    }
    let Some(trigger) = dropdown.trigger_area() else {
        return;
    };
    let frame = f.area();
    let height = dropdown.options().len() as u16 + 2;
    let x = trigger
        .x
        .min(frame.width.saturating_sub(width));
    let y = (trigger.y + trigger.height).min(frame.height.saturating_sub(height));
    let area = Rect::new(x, y, width.min(frame.width), height.min(frame.height));

    let items: Vec<ListItem> = dropdown
        .options()
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            let style = if i == dropdown.highlighted() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label.clone()).style(style)
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new("(nothing new)")])
    } else {
        List::new(items)
    }
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
    dropdown.set_menu_area(area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.state {
        AppState::Normal => {
            if app.focused_open_dropdown().is_some() {
                "j/k: Highlight | Enter: Select | Esc: Close"
            } else {
                "q: Quit | Tab: Section | j/k: Navigate | Enter/m: Read | a: Read all | d: Delete | /: Search | s/t: Filters | ←/→: Page | ?: Help"
            }
        }
        AppState::Search => "Type to filter | Enter/Esc: Done | ←/→: Move cursor",
        AppState::Confirm => "y: Yes | n: No | Esc: Cancel",
    };

    let status = Paragraph::new(vec![
        Line::from(app.status_message.as_str()),
        Line::from(help_text),
    ])
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}

fn draw_confirm_popup(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 15, f.area());
    let confirm = Paragraph::new(app.confirm_message.as_str())
        .block(
            Block::default()
                .title("Confirm")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(confirm, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(70, 70, f.area());
    let help = "notidesk Help\n\nKeys:\n  q: Quit\n  Tab/BackTab: Next/previous section\n  1-7: Jump to section (7 logs out)\n  j/k or ↑/↓: Navigate notifications\n  Home/End: Jump to first/last\n  Enter or m: Mark selected as read\n  a: Mark all as read\n  d: Delete selected (with confirm)\n  /: Edit the search filter\n  c: Clear all filters\n  s: Status filter dropdown\n  t: Type filter dropdown\n  b: Notification menu (bell)\n  u: User menu\n  ←/→: Previous/next page\n  Mouse: click triggers, options, pages, rows\n  ?: Toggle this help";

    let paragraph = Paragraph::new(help)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
