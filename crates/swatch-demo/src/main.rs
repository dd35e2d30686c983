#![forbid(unsafe_code)]

//! Swatch demo binary entry point.

use std::cell::RefCell;
use std::process;
use std::rc::Rc;

use swatch_core::color::Rgba;
use swatch_core::cue::Cue;
use swatch_core::geometry::Point;
use swatch_core::input::{ControlMap, FrameInput};
use swatch_demo::cli;
use swatch_demo::script;
use swatch_widgets::{ColorEntry, ColorPanel, ColorPanelConfig, DrawList, Panel, PanelError};
use tracing_subscriber::EnvFilter;

const PALETTE: &[(&str, Rgba)] = &[
    ("Black", Rgba::BLACK),
    ("White", Rgba::WHITE),
    ("Red", Rgba::RED),
    ("Orange", Rgba::rgb(255, 128, 0)),
    ("Yellow", Rgba::rgb(255, 255, 0)),
    ("Lime", Rgba::rgb(128, 255, 0)),
    ("Green", Rgba::GREEN),
    ("Teal", Rgba::rgb(0, 128, 128)),
    ("Cyan", Rgba::rgb(0, 255, 255)),
    ("Blue", Rgba::BLUE),
    ("Purple", Rgba::rgb(128, 0, 255)),
    ("Magenta", Rgba::rgb(255, 0, 255)),
    ("Pink", Rgba::rgb(255, 192, 203)),
    ("Brown", Rgba::rgb(139, 69, 19)),
];

fn build_panel(opts: &cli::Opts) -> Result<ColorPanel, PanelError> {
    let config = ColorPanelConfig::default()
        .page_size(opts.page_size)
        .title(opts.title.clone())
        .title_style(opts.style)
        .show_count(opts.show_count)
        .colors(
            PALETTE
                .iter()
                .map(|&(name, color)| ColorEntry::new(name, color)),
        );
    ColorPanel::with_config(config)
}

fn main() {
    let opts = cli::Opts::parse();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cues: Rc<RefCell<Vec<Cue>>> = Rc::default();
    let mut panel = match build_panel(&opts) {
        Ok(panel) => panel.with_cue_player(Rc::clone(&cues)),
        Err(e) => {
            eprintln!("Failed to build panel: {e}");
            process::exit(1);
        }
    };
    panel.recalculate(Point::ZERO, opts.width);
    tracing::info!(
        entries = panel.len(),
        page_size = opts.page_size.get(),
        width = opts.width,
        "panel ready"
    );

    let map = ControlMap::default();
    let mut list = DrawList::new();
    for (n, events) in script::frames(&opts.script, opts.width).iter().enumerate() {
        if let Some(width) = script::resized_width(events) {
            tracing::debug!(width, "parent resized");
            panel.recalculate(Point::ZERO, width);
        }
        let mut input = FrameInput::collect(events, &map);
        list.clear();
        panel.process(&mut input, &mut list);

        println!(
            "frame {n}: selected {:?}, window {:?}",
            panel.selected().map(|entry| entry.name.as_str()),
            panel.visible_range()
        );
        for command in list.commands() {
            println!("  {command}");
        }
        for cue in cues.borrow_mut().drain(..) {
            println!("  cue   {cue}");
        }
    }
}
