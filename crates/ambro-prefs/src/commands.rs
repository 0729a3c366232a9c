//! Command execution against a bootstrapped store

use crate::cli::{Command, Field};
use ambro_a11y::{DocumentAttributes, DurableStore, PreferenceStore, PreferenceWidget, WidgetAction, widget};
use anyhow::{Context, Result};
use std::io::Write;

pub fn execute<S: DurableStore>(command: &Command, store: &mut PreferenceStore<S>, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Show { json } => show(store, *json, out),
        Command::Set { field, value } => {
            let result = match field {
                Field::FontSize => store.set_font_size_str(value),
                Field::Theme => store.set_theme_str(value),
                Field::ReduceMotion => store.set_reduce_motion_str(value),
            };
            result.context("Preference not changed")?;
            show(store, false, out)
        }
        Command::ToggleContrast => {
            PreferenceWidget::new().activate(WidgetAction::ToggleHighContrast, store);
            show(store, false, out)
        }
        Command::Controls => controls(store, out),
    }
}

fn show<S: DurableStore>(store: &PreferenceStore<S>, json: bool, out: &mut impl Write) -> Result<()> {
    let state = store.get_state();

    if json {
        serde_json::to_writer_pretty(&mut *out, &state).context("Failed to encode preferences")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "font-size:     {}", state.font_size)?;
    writeln!(out, "theme:         {}", state.theme)?;
    writeln!(out, "reduce-motion: {}", state.reduce_motion)?;
    writeln!(out, "classes:       {}", DocumentAttributes::derive(&state).classes.join(" "))?;
    for (name, value) in store.document().to_attributes().into_iter().skip(1) {
        writeln!(out, "{}: {}", name, value)?;
    }
    Ok(())
}

fn controls<S: DurableStore>(store: &PreferenceStore<S>, out: &mut impl Write) -> Result<()> {
    let mut panel = PreferenceWidget::new();
    panel.toggle_open();

    writeln!(out, "{}", widget::TITLE)?;
    for control in panel.controls(&store.get_state()) {
        let mark = if control.pressed { "[x]" } else { "[ ]" };
        writeln!(out, "{} {}", mark, control.label)?;
    }
    Ok(())
}
