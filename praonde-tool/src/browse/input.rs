use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use praonde_core::{Buzz, ClickTarget, PageKind};
use ratatui::layout::Position;

use super::app::BrowseApp;
use super::ui;

pub fn handle_event(app: &mut BrowseApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

fn handle_key(app: &mut BrowseApp, key: KeyEvent) {
    if app.modal_open() {
        handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_page();
            return;
        }
        KeyCode::F(1) => {
            app.navigate(PageKind::Discovery);
            return;
        }
        KeyCode::F(2) => {
            app.navigate(PageKind::Saved);
            return;
        }
        KeyCode::F(3) => {
            app.navigate(PageKind::Profile);
            return;
        }
        _ => {}
    }

    match app.session.page_kind() {
        PageKind::Discovery => handle_discovery_key(app, key),
        PageKind::Saved => handle_saved_key(app, key),
        PageKind::Profile => {}
    }
}

fn handle_discovery_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('x') => app.pass(),
        KeyCode::Right | KeyCode::Char('l') => app.like(),
        KeyCode::Up | KeyCode::Char('s') => app.super_like(),
        KeyCode::Char(']') | KeyCode::Char('f') => app.next_filter(),
        KeyCode::Char('[') => app.prev_filter(),
        KeyCode::Enter | KeyCode::Char('d') => app.open_current(),
        _ => {}
    }
}

fn handle_saved_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.saved_up(),
        KeyCode::Down | KeyCode::Char('j') => app.saved_down(),
        KeyCode::Enter => app.open_current(),
        _ => {}
    }
}

fn handle_modal_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Char('1') => app.submit_vibe(Buzz::Fraco),
        KeyCode::Char('2') => app.submit_vibe(Buzz::Medio),
        KeyCode::Char('3') => app.submit_vibe(Buzz::Bombando),
        KeyCode::Char('t') => app.open_ticket(),
        _ => {}
    }
}

fn handle_mouse(app: &mut BrowseApp, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !app.modal_open() {
        return;
    }

    let content = ui::modal_area(app.viewport);
    let target = if content.contains(Position::new(mouse.column, mouse.row)) {
        ClickTarget::Content
    } else {
        ClickTarget::Overlay
    };
    app.click(target);
}
