//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game session.  No game logic is performed; this module only translates
//! state into terminal commands, scaling play-field units onto the grid.

use std::io::Write;
use std::time::Instant;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use plane_collector::assets::{Sprite, Sprites};
use plane_collector::buttons::{self, Button, ButtonId};
use plane_collector::entities::{GameSession, GameState, ItemKind, Rect, TrackKind};
use plane_collector::machine::win_countdown;
use plane_collector::upgrades::{self, currency_per_collect, describe};
use plane_collector::viewport::{CellRect, Viewport};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Blue;
const C_UPGRADE_TITLE: Color = Color::Magenta;
const C_TEXT: Color = Color::White;
const C_HUD: Color = Color::Black;
const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const C_SHOWCASE: Color = Color::Grey;
const C_PLAYER: Color = Color::Blue;
const C_TOWER: Color = Color::Yellow;
const C_EAGLE: Color = Color::Red;
const C_CURRENCY: Color = Color::Yellow;
const C_WIN: Color = Color::Yellow;
const C_LOSE: Color = Color::Red;
const C_BUTTON_TEXT: Color = Color::White;
const C_DISABLED: Color = Color::DarkGrey;

fn button_colour(id: ButtonId) -> Color {
    match id {
        ButtonId::Play => Color::DarkGreen,
        ButtonId::Upgrades => Color::DarkMagenta,
        ButtonId::Quit | ButtonId::Close => Color::DarkRed,
        ButtonId::Back | ButtonId::BackToMenu => Color::DarkBlue,
        ButtonId::Buy(_) => Color::DarkCyan,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &GameSession,
    sprites: &Sprites,
    vp: &Viewport,
    now: Instant,
) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match session.state {
        GameState::Menu => draw_menu(out, session, vp)?,
        GameState::Playing => draw_playing(out, session, sprites, vp)?,
        GameState::Upgrades => draw_upgrades(out, session, vp)?,
        GameState::GameOver { won, .. } => draw_game_over(out, session, vp, won, now)?,
    }

    for button in &buttons::layout(session) {
        let sub = match button.id {
            ButtonId::Buy(kind) => Some(describe(kind, &session.config, &session.upgrades)),
            _ => None,
        };
        draw_button(out, vp, button, sub.as_deref())?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn row_at(vp: &Viewport, y: f32) -> u16 {
    vp.to_cell(0.0, y).1
}

fn print_centred<W: Write>(
    out: &mut W,
    vp: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (vp.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn fill<W: Write>(out: &mut W, cells: CellRect, bg: Color) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(bg))?;
    let blank = " ".repeat(cells.width as usize);
    for r in 0..cells.height {
        out.queue(cursor::MoveTo(cells.col, cells.row + r))?;
        out.queue(Print(&blank))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Draw a sprite clipped to `cells`, or a solid block when it is missing.
fn draw_shape<W: Write>(
    out: &mut W,
    cells: CellRect,
    sprite: Option<&Sprite>,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    match sprite {
        Some(sprite) => {
            for (r, line) in sprite.rows.iter().take(cells.height as usize).enumerate() {
                let clipped: String = line.chars().take(cells.width as usize).collect();
                out.queue(cursor::MoveTo(cells.col, cells.row + r as u16))?;
                out.queue(Print(clipped))?;
            }
        }
        None => {
            let block = "█".repeat(cells.width as usize);
            for r in 0..cells.height {
                out.queue(cursor::MoveTo(cells.col, cells.row + r))?;
                out.queue(Print(&block))?;
            }
        }
    }
    Ok(())
}

fn draw_button<W: Write>(
    out: &mut W,
    vp: &Viewport,
    button: &Button,
    sub: Option<&str>,
) -> std::io::Result<()> {
    let cells = vp.to_cells(&button.rect);
    let bg = if button.enabled {
        button_colour(button.id)
    } else {
        C_DISABLED
    };
    fill(out, cells, bg)?;

    let label_row = cells.row + (cells.height - 1) / 2;
    let mut lines = vec![(label_row, button.label.as_str())];
    if let Some(sub) = sub {
        if label_row + 1 < cells.row + cells.height {
            lines.push((label_row + 1, sub));
        }
    }

    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(style::SetForegroundColor(C_BUTTON_TEXT))?;
    for (row, text) in lines {
        let text: String = text.chars().take(cells.width as usize).collect();
        let pad = (cells.width as usize).saturating_sub(text.chars().count()) / 2;
        out.queue(cursor::MoveTo(cells.col + pad as u16, row))?;
        out.queue(Print(text))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, session: &GameSession, vp: &Viewport) -> std::io::Result<()> {
    let field = &session.config.field;
    fill(out, vp.to_cells(&Rect::new(0.0, 0.0, field.width, field.height)), C_SKY)?;
    out.queue(style::SetBackgroundColor(C_SKY))?;
    let title_row = row_at(vp, field.height / 4.0 - 30.0);
    print_centred(out, vp, title_row, "PLANE COLLECTION GAME", C_TITLE)?;

    let showcase_top = field.height - 150.0;
    fill(
        out,
        vp.to_cells(&Rect::new(0.0, showcase_top, field.width, 150.0)),
        C_SHOWCASE,
    )?;

    let goal = session.config.rules.tower_goal;
    let instructions = [
        "Use LEFT and RIGHT arrow keys to move the plane".to_string(),
        "Collect the towers and avoid the eagles".to_string(),
        format!(
            "Each tower is worth {} currency",
            currency_per_collect(&session.config, &session.upgrades)
        ),
        format!("Collect {goal} towers to win!"),
        format!("Current Currency: {}", session.progress.currency),
    ];
    let first = row_at(vp, showcase_top) + 1;
    out.queue(style::SetBackgroundColor(C_SHOWCASE))?;
    for (i, line) in instructions.iter().enumerate() {
        print_centred(out, vp, first + i as u16, line, C_TEXT)?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Playing ───────────────────────────────────────────────────────────────────

fn draw_playing<W: Write>(
    out: &mut W,
    session: &GameSession,
    sprites: &Sprites,
    vp: &Viewport,
) -> std::io::Result<()> {
    let field = &session.config.field;
    fill(out, vp.to_cells(&Rect::new(0.0, 0.0, field.width, field.height)), C_SKY)?;

    out.queue(style::SetBackgroundColor(C_SKY))?;
    for item in &session.items {
        let (sprite, color) = match item.kind {
            ItemKind::Reward => (sprites.tower.as_ref(), C_TOWER),
            ItemKind::Hazard => (sprites.eagle.as_ref(), C_EAGLE),
        };
        draw_shape(out, vp.to_cells(&item.rect()), sprite, color)?;
    }
    draw_shape(
        out,
        vp.to_cells(&session.player.rect()),
        sprites.plane.as_ref(),
        C_PLAYER,
    )?;

    // HUD — top-left
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!(
        "Towers: {}/{}",
        session.progress.towers_collected, session.config.rules.tower_goal
    )))?;
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(Print(format!(
        "Currency per tower: {}",
        currency_per_collect(&session.config, &session.upgrades)
    )))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Upgrades ──────────────────────────────────────────────────────────────────

fn draw_upgrades<W: Write>(
    out: &mut W,
    session: &GameSession,
    vp: &Viewport,
) -> std::io::Result<()> {
    print_centred(out, vp, row_at(vp, 40.0), "UPGRADES", C_UPGRADE_TITLE)?;
    print_centred(
        out,
        vp,
        row_at(vp, 80.0),
        &format!("CURRENCY: {}", session.progress.currency),
        C_CURRENCY,
    )?;

    // Shortcut hint along the bottom row
    let hint = TrackKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{}: {}", i + 1, upgrades::label(*kind)))
        .collect::<Vec<_>>()
        .join("  ");
    let hint = format!("{hint}  B: Back");
    print_centred(out, vp, vp.rows.saturating_sub(1), &hint, C_DISABLED)?;
    Ok(())
}

// ── Game-over screen ──────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    session: &GameSession,
    vp: &Viewport,
    won: bool,
    now: Instant,
) -> std::io::Result<()> {
    let field = &session.config.field;
    let goal = session.config.rules.tower_goal;
    let third = field.height / 3.0;

    let (message, color) = if won {
        (format!("You Win! You collected {goal} towers!"), C_WIN)
    } else {
        ("Game Over! You hit an eagle.".to_string(), C_LOSE)
    };
    print_centred(out, vp, row_at(vp, third), &message, color)?;
    print_centred(
        out,
        vp,
        row_at(vp, third + 50.0),
        &format!("Towers Collected: {}/{}", session.progress.towers_collected, goal),
        C_TEXT,
    )?;

    if let Some(remaining) = win_countdown(session, now) {
        print_centred(
            out,
            vp,
            row_at(vp, third + 100.0),
            &format!("Returning to menu in: {remaining}s"),
            C_TEXT,
        )?;
    }
    Ok(())
}
