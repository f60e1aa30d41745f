//! Button Demo
//!
//! Drives a themed button through a pointer and keyboard session and prints
//! its state after every input.
//!
//! Run with: cargo run -p tactile_layout --example button_demo
//! Set RUST_LOG=tactile_layout=trace to watch layout and style resolution.

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use tactile_layout::prelude::*;
use tracing_subscriber::EnvFilter;

const THEME: &str = r#"
[button.normal]
border = { top = 1, right = 1, bottom = 1, left = 1 }
paddings = { top = 4, right = 8, bottom = 4, left = 8 }
border_color = { r = 0.55, g = 0.55, b = 0.6 }
bg_color = { r = 0.93, g = 0.93, b = 0.95 }
fg_color = { r = 0.1, g = 0.1, b = 0.12 }

[button.hovered]
border = { top = 1, right = 1, bottom = 1, left = 1 }
paddings = { top = 4, right = 8, bottom = 4, left = 8 }
border_color = { r = 0.2, g = 0.45, b = 0.9 }
bg_color = { r = 0.96, g = 0.97, b = 1.0 }
fg_color = { r = 0.2, g = 0.45, b = 0.9 }
"#;

fn report(step: &str, button: &Button) {
    let c = button.color();
    println!(
        "{:<14} state={:<9} size={}x{} bg=({:.2}, {:.2}, {:.2})",
        step,
        format!("{:?}", button.visual_state()),
        button.width(),
        button.height(),
        c.r,
        c.g,
        c.b,
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme = Theme::from_toml_str(THEME)?;

    let mut save = button("Save");
    save.set_styles(theme.button_styles());
    save.set_icon(icons::SAVE);
    save.set_content_size(120.0, 28.0);

    let clicks = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&clicks);
    save.on_click(move |_| counter.set(counter.get() + 1));

    let mut router = EventRouter::new();
    report("created", &save);

    router.pointer_enter(&mut save);
    report("pointer enter", &save);

    router.pointer_down(&mut save, 12.0, 10.0);
    report("pointer down", &save);

    router.pointer_up(&mut save, 12.0, 10.0);
    report("pointer up", &save);

    router.key_down(&mut save, KeyCode::ENTER);
    report("enter down", &save);

    router.key_up(&mut save, KeyCode::ENTER);
    router.pointer_leave(&mut save);
    report("pointer leave", &save);

    save.set_enabled(false);
    report("disabled", &save);

    // A missing file leaves the icon in place
    if let Err(err) = save.set_image("assets/missing.png") {
        println!("image rejected: {err}");
    }
    println!("icon kept: {}", save.icon().is_some());

    println!("activations: {}", clicks.get());
    Ok(())
}
