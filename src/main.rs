mod catalog;
mod clock;
mod content;
mod forms;
mod input;
mod nav;
mod site;
mod web;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use clock::FrameClock;
use input::{pixel_to_cell, ClickState, InputEvent, SpecialKey};
use ratzilla::event::{KeyCode, KeyEvent, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use site::render::{render, Chrome};
use site::Site;

/// Query the grid container's bounding rect and convert a pointer position
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn key_to_input(event: &KeyEvent) -> Option<InputEvent> {
    if event.ctrl || event.alt {
        return None;
    }
    let special = match event.code {
        KeyCode::Char(c) => return Some(InputEvent::Key(c)),
        KeyCode::Up => SpecialKey::Up,
        KeyCode::Down => SpecialKey::Down,
        KeyCode::Left => SpecialKey::Left,
        KeyCode::Right => SpecialKey::Right,
        KeyCode::PageUp => SpecialKey::PageUp,
        KeyCode::PageDown => SpecialKey::PageDown,
        KeyCode::Home => SpecialKey::Home,
        KeyCode::End => SpecialKey::End,
        KeyCode::Tab if event.shift => SpecialKey::BackTab,
        KeyCode::Tab => SpecialKey::Tab,
        KeyCode::Enter => SpecialKey::Enter,
        KeyCode::Backspace => SpecialKey::Backspace,
        KeyCode::Esc => SpecialKey::Esc,
        _ => return None,
    };
    Some(InputEvent::Special(special))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let site = Rc::new(RefCell::new(Site::from_location_hash(
        &web::location_hash(),
        web::current_year(),
    )));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let site = site.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let hit = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = hit {
                site.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let site = site.clone();
        move |key_event| {
            if let Some(event) = key_to_input(&key_event) {
                site.borrow_mut().handle_input(&event);
            }
        }
    });

    let mut clock = FrameClock::new();
    let mut chrome = Chrome::new();
    terminal.draw_web(move |f| {
        let delta_ms = clock.update(web::now_ms());
        let mut site = site.borrow_mut();
        site.sync_location(&web::location_hash());
        site.tick(delta_ms);
        site.flush_scroll();
        render(&mut site, &mut chrome, f, &mut click_state.borrow_mut(), delta_ms);
    });

    Ok(())
}
