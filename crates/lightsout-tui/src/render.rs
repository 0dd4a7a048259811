use crate::animations::particles::hue_to_rgb;
use crate::animations::win_screen::WIN_TITLE;
use crate::app::{App, ScreenState};
use crate::layout::{GridLayout, CELL_HEIGHT, CELL_WIDTH};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use lightsout_core::Position;
use std::io;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide)?;

    match app.screen_state {
        // Redrawn fully every frame, no clear to avoid flicker
        ScreenState::Win => render_win_screen(stdout, app, term_width, term_height)?,
        ScreenState::Playing => {
            execute!(stdout, Clear(ClearType::All))?;
            render_game_screen(stdout, app, term_width, term_height)?;
        }
        ScreenState::About => {
            execute!(stdout, Clear(ClearType::All))?;
            render_game_screen(stdout, app, term_width, term_height)?;
            render_about(stdout, app, term_width, term_height)?;
        }
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    app.layout = GridLayout::centered(app.game.size(), term_width, term_height);
    let layout = app.layout;

    for pos in app.game.grid().positions() {
        render_cell(stdout, app, &layout, pos)?;
    }

    let info_x = layout.x + layout.width() + 3;
    render_info_panel(stdout, app, info_x, layout.y)?;

    let controls_y = layout.y + layout.height() + 1;
    render_controls(stdout, app, layout.x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    Ok(())
}

/// Draw one cell as an outlined box:
///
/// ```text
/// ┌─────┐
/// │     │
/// └─────┘
/// ```
fn render_cell(
    stdout: &mut io::Stdout,
    app: &App,
    layout: &GridLayout,
    pos: Position,
) -> io::Result<()> {
    let theme = &app.theme;
    let (fill, mut outline) = theme.cell_colors(app.game.is_lit(pos));
    if pos == app.cursor {
        outline = theme.cursor;
    }

    let (x, y) = layout.cell_origin(pos);
    let inner = (CELL_WIDTH - 2) as usize;
    let bar = "─".repeat(inner);

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(outline),
        MoveTo(x, y),
        Print(format!("┌{}┐", bar)),
        MoveTo(x, y + CELL_HEIGHT - 1),
        Print(format!("└{}┘", bar)),
    )?;

    for row in 1..CELL_HEIGHT - 1 {
        let body = if app.hint == Some(pos) {
            format!("{:^width$}", "◆", width = inner)
        } else {
            " ".repeat(inner)
        };
        execute!(
            stdout,
            MoveTo(x, y + row),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(outline),
            Print("│"),
            SetBackgroundColor(fill),
            SetForegroundColor(theme.hint),
            Print(body),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(outline),
            Print("│"),
        )?;
    }

    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let game = &app.game;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("═══ LIGHTS OUT ═══")
    )?;

    let size = game.size();
    execute!(
        stdout,
        MoveTo(x, y + 2),
        SetForegroundColor(theme.info),
        Print("Board:   "),
        SetForegroundColor(theme.fg),
        Print(format!("{}x{}", size, size)),
        MoveTo(x, y + 3),
        SetForegroundColor(theme.info),
        Print("Lit:     "),
        SetForegroundColor(theme.fg),
        Print(format!("{} / {}", game.grid().lit_count(), size * size)),
    )?;

    let (status, color) = if game.is_solved() {
        ("Solved!".to_string(), theme.success)
    } else {
        match game.min_presses() {
            Some(n) => (format!("{} presses to go", n), theme.fg),
            None => ("Unsolvable".to_string(), theme.warning),
        }
    };
    execute!(
        stdout,
        MoveTo(x, y + 4),
        SetForegroundColor(theme.info),
        Print("Status:  "),
        SetForegroundColor(color),
        Print(status),
    )?;

    execute!(
        stdout,
        MoveTo(x, y + 6),
        SetForegroundColor(theme.info),
        Print(format!("Cursor:  row {}, col {}", app.cursor.row + 1, app.cursor.col + 1)),
    )?;

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    let controls = [
        ("hjkl/Arrows", "Move"),
        ("Space/Click", "Press"),
        ("n", "New game"),
        ("r", "Relight"),
        ("3/4/5", "Board size"),
        ("?", "Hint"),
        ("a", "About"),
        ("q", "Quit"),
    ];

    // Two rows of four
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 2;
        let row = i % 2;
        let cx = x + (col as u16) * 24;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetForegroundColor(theme.key),
            Print(format!("{:>11}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.chars().count() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(theme.panel_bg),
        Print(&padded)
    )?;

    Ok(())
}

const ABOUT_LINES: [&str; 8] = [
    "LIGHTS OUT",
    "",
    "Pressing a light flips it and the",
    "lights above, below, left and right.",
    "Turn every light off to win.",
    "",
    "Click a cell or use Space to press.",
    "Press Esc to close.",
];

fn render_about(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let version = format!("Version {}", env!("CARGO_PKG_VERSION"));

    let width: u16 = 42;
    let height = ABOUT_LINES.len() as u16 + 4;
    let x = term_width.saturating_sub(width) / 2;
    let y = term_height.saturating_sub(height) / 2;

    execute!(
        stdout,
        SetBackgroundColor(theme.panel_bg),
        SetForegroundColor(theme.fg)
    )?;
    for row in 0..height {
        execute!(stdout, MoveTo(x, y + row), Print(" ".repeat(width as usize)))?;
    }

    for (i, line) in ABOUT_LINES.iter().enumerate() {
        let color = if i == 0 { theme.key } else { theme.fg };
        let lx = x + width.saturating_sub(line.chars().count() as u16) / 2;
        execute!(
            stdout,
            MoveTo(lx, y + 1 + i as u16),
            SetForegroundColor(color),
            Print(line)
        )?;
    }

    let vx = x + width.saturating_sub(version.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(vx, y + height - 2),
        SetForegroundColor(theme.info),
        Print(&version)
    )?;

    Ok(())
}

fn render_win_screen(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    app.win_screen.resize(term_width, term_height);

    // Lights are out: a dark backdrop
    let bg_base = app.theme.dark;

    execute!(stdout, SetBackgroundColor(bg_base))?;
    let blank = " ".repeat(term_width as usize);
    for y in 0..term_height {
        execute!(stdout, MoveTo(0, y), Print(&blank))?;
    }

    for particle in app.win_screen.particles() {
        if particle.is_visible(term_width, term_height) {
            execute!(
                stdout,
                MoveTo(particle.x as u16, particle.y as u16),
                SetForegroundColor(particle.color),
                Print(particle.char)
            )?;
        }
    }

    // Banner
    let banner = app.win_screen.current_banner();
    let lines: Vec<&str> = banner.lines().filter(|l| !l.is_empty()).collect();
    let banner_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(40) as u16;
    let banner_x = term_width.saturating_sub(banner_width) / 2;
    let banner_y = 3;

    for (i, line) in lines.iter().enumerate() {
        let hue = (app.win_screen.rainbow_offset() + i as f32 * 0.1) % 1.0;
        execute!(
            stdout,
            MoveTo(banner_x, banner_y + i as u16),
            SetForegroundColor(hue_to_rgb(hue)),
            Print(line)
        )?;
    }

    let title_y = banner_y + lines.len() as u16 + 2;
    let title_x = term_width.saturating_sub(WIN_TITLE.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(title_x, title_y),
        SetForegroundColor(app.theme.light),
        Print(WIN_TITLE)
    )?;

    let msg = app.win_screen.current_message();
    let msg_x = term_width.saturating_sub(msg.len() as u16) / 2;
    let hue = (app.win_screen.rainbow_offset() * 2.0) % 1.0;
    execute!(
        stdout,
        MoveTo(msg_x, title_y + 2),
        SetForegroundColor(hue_to_rgb(hue)),
        Print(msg)
    )?;

    let size = app.game.size();
    let board = format!(" {}x{} board cleared ", size, size);
    let board_x = term_width.saturating_sub(board.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(board_x, title_y + 4),
        SetForegroundColor(Color::White),
        SetBackgroundColor(Color::Rgb { r: 30, g: 50, b: 30 }),
        Print(&board),
        SetBackgroundColor(bg_base)
    )?;

    let instr = "Enter/n: new game   Esc: back to board   q: quit";
    let instr_x = term_width.saturating_sub(instr.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(instr_x, title_y + 6),
        SetForegroundColor(Color::Yellow),
        Print(instr)
    )?;

    Ok(())
}
