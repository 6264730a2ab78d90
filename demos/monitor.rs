//! Prints every keyboard, mouse, and wheel event to the terminal until
//! Ctrl-C, colorized by event kind.

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::{thread, time::Duration};
use uiohook_rs::hook::keyboard::{KeyboardEvent, KeyboardEventType};
use uiohook_rs::hook::mouse::{MouseEvent, MouseEventType};
use uiohook_rs::hook::wheel::WheelEvent;
use uiohook_rs::{utils, EventHandler, Uiohook, UiohookEvent, WHEEL_VERTICAL_DIRECTION};

struct Monitor {
    running: Arc<AtomicBool>,
}

impl EventHandler for Monitor {
    fn handle_event(&self, event: &UiohookEvent) {
        match event {
            UiohookEvent::Keyboard(e) => print_keyboard(e),
            UiohookEvent::Mouse(e) => print_mouse(e),
            UiohookEvent::Wheel(e) => print_wheel(e),
            UiohookEvent::HookEnabled(_) => println!("{}", "hook enabled".green().bold()),
            UiohookEvent::HookDisabled(_) => {
                println!("{}", "hook disabled".red().bold());
                self.running.store(false, Ordering::SeqCst);
            }
        }
    }
}

fn print_keyboard(event: &KeyboardEvent) {
    match event.event_type {
        KeyboardEventType::Typed => {
            // `key_char` is a single UTF-16 unit; outside the BMP it's one
            // half of a surrogate pair and doesn't stand alone as a `char`.
            match event.key_char.and_then(|unit| char::from_u32(unit as u32)) {
                Some(ch) => println!("{} {:?}", "typed".blue(), ch),
                None => println!(
                    "{} unit {:#06x} (of U+{:06X})",
                    "typed".blue(),
                    event.key_char.unwrap_or(0),
                    event.codepoint.unwrap_or(0)
                ),
            }
        }
        KeyboardEventType::Pressed => {
            println!("{} {:?} (raw {})", "down".green(), event.key_code, event.raw_code);
        }
        KeyboardEventType::Released => {
            println!("{} {:?} (raw {})", "up".red(), event.key_code, event.raw_code);
        }
    }
}

fn print_mouse(event: &MouseEvent) {
    let label = match event.event_type {
        MouseEventType::Moved => "move".yellow(),
        MouseEventType::Pressed => "down".green(),
        MouseEventType::Released => "up".red(),
        MouseEventType::Clicked => "click".blue(),
        MouseEventType::Dragged => "drag".magenta(),
    };
    println!("{} {:?} clicks={} ({}, {})", label, event.button, event.clicks, event.x, event.y);
}

fn print_wheel(event: &WheelEvent) {
    let axis = if event.direction == WHEEL_VERTICAL_DIRECTION { "vertical" } else { "horizontal" };
    println!("{} {axis} rotation={} amount={} ({}, {})", "scroll".cyan(), event.rotation, event.amount, event.x, event.y);
}

fn main() {
    uiohook_rs::logger::init_logger();

    match utils::create_screen_info() {
        Ok(screens) => {
            for s in screens {
                println!("screen {}: {}x{} at ({}, {})", s.number, s.width, s.height, s.x, s.y);
            }
        }
        Err(e) => eprintln!("could not read screen info: {e}"),
    }

    let running = Arc::new(AtomicBool::new(true));
    let stop_flag = running.clone();
    ctrlc::set_handler(move || stop_flag.store(false, Ordering::SeqCst)).expect("failed to install Ctrl-C handler");

    let hook = Uiohook::new(Monitor { running: running.clone() });
    if let Err(e) = hook.run() {
        eprintln!("failed to start hook: {e}");
        return;
    }

    println!("listening, press Ctrl-C to stop");
    while running.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_millis(100));
    }

    if let Err(e) = hook.stop() {
        eprintln!("failed to stop hook: {e}");
    }
}
