//! Life clock: Game of Life background behind an analog clock
//!
//! Ticks, simulation steps and painting all happen on this one loop, so a
//! frame always shows the grid between generations.

use crate::colors::{ColorState, Palette};
use crate::config::{FaceConfig, MAX_RATE, MIN_RATE};
use crate::help::{render_help_overlay, HELP_TEXT};
use crate::terminal::{Input, Terminal};
use chrono::{FixedOffset, Local, Timelike, Utc};
use crossterm::event::KeyCode;
use lifeclock::face::{line_points, Face, Hand, HandAngles};
use lifeclock::life::LifeGrid;
use lifeclock::scheduler::{Scheduler, Tick};
use lifeclock::seeder::RandomSeeder;
use std::io;

const ALIVE_CHAR: char = '█';
const SPAWN_CHAR: char = '░';
const GRID_CHAR: char = '·';
const TICK_CHAR: char = '◆';

/// Where the Life grid lands on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    ox: i32,
    oy: i32,
    cell_w: i32, // terminal columns per Life cell (twice the rows, cells are tall)
    cell_h: i32,
    cells: i32,
}

impl Layout {
    fn fit(term_w: u16, term_h: u16, cells: usize) -> Self {
        let n = cells.max(1) as i32;
        let cell_h = (term_h as i32 / n).min(term_w as i32 / 2 / n).max(1);
        let cell_w = cell_h * 2;
        Self {
            ox: ((term_w as i32 - n * cell_w) / 2).max(0),
            oy: ((term_h as i32 - n * cell_h) / 2).max(0),
            cell_w,
            cell_h,
            cells: n,
        }
    }

    /// Clock face in square units (one unit per terminal row)
    fn face(&self) -> Face {
        let half = (self.cells * self.cell_h) as f32 / 2.0;
        Face::new(half, half, (half - 0.5).max(1.0))
    }

    fn to_term(&self, (x, y): (f32, f32)) -> (i32, i32) {
        (self.ox + (x * 2.0).round() as i32, self.oy + y.round() as i32)
    }
}

/// Paints one frame of grid and clock into the back buffer
pub struct Renderer {
    pub show_grid: bool,
    pub show_seconds: bool,
    pub show_status: bool,
}

impl Renderer {
    pub fn new(config: &FaceConfig) -> Self {
        Self {
            show_grid: config.show_grid,
            show_seconds: config.show_seconds,
            show_status: config.show_status,
        }
    }

    pub fn paint(
        &self,
        term: &mut Terminal,
        grid: &LifeGrid,
        angles: HandAngles,
        colors: &ColorState,
        ambient: bool,
    ) {
        let (w, h) = term.size();
        let layout = Layout::fit(w, h, grid.width().max(grid.height()));
        let palette = colors.palette(ambient);
        term.clear();
        self.paint_cells(term, grid, &layout, palette);
        self.paint_clock(term, &layout, angles, palette, ambient);

        if self.show_status {
            let status = format!(
                " gen {}  cells {}{} ",
                grid.generation_count(),
                grid.live_cell_count(),
                if ambient { "  ambient" } else { "" }
            );
            term.set_str(0, h as i32 - 1, &status, Some(palette.grid), false);
        }
    }

    fn paint_cells(
        &self,
        term: &mut Terminal,
        grid: &LifeGrid,
        layout: &Layout,
        palette: &Palette,
    ) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let Ok(cell) = grid.cell(x, y) else { continue };
                let (ch, fg) = if cell.is_alive() {
                    let fg = if cell.is_dying() { palette.dying } else { palette.live };
                    (ALIVE_CHAR, fg)
                } else if cell.is_spawning() {
                    (SPAWN_CHAR, palette.spawn)
                } else if self.show_grid {
                    (GRID_CHAR, palette.grid)
                } else {
                    continue;
                };

                let tx = layout.ox + x as i32 * layout.cell_w;
                let ty = layout.oy + y as i32 * layout.cell_h;
                if ch == GRID_CHAR {
                    term.set(tx, ty, ch, Some(fg), false);
                    continue;
                }
                // Leave a one-column gap so neighbors read as separate cells
                for dy in 0..layout.cell_h {
                    for dx in 0..(layout.cell_w - 1).max(1) {
                        term.set(tx + dx, ty + dy, ch, Some(fg), false);
                    }
                }
            }
        }
    }

    fn paint_clock(
        &self,
        term: &mut Terminal,
        layout: &Layout,
        angles: HandAngles,
        palette: &Palette,
        ambient: bool,
    ) {
        let face = layout.face();

        for (inner, outer) in face.ticks() {
            for (x, y) in line_points(layout.to_term(inner), layout.to_term(outer)) {
                term.set(x, y, TICK_CHAR, Some(palette.tick), false);
            }
        }

        let seconds = self.show_seconds && !ambient;
        for (hand, (start, end)) in face.hands(angles, seconds) {
            let (ch, fg, bold) = match hand {
                Hand::Hour => ('●', palette.hands, true),
                Hand::Minute => ('•', palette.hands, false),
                Hand::Second => ('∙', palette.second_hand, false),
            };
            for (x, y) in line_points(layout.to_term(start), layout.to_term(end)) {
                term.set(x, y, ch, Some(fg), bold);
            }
        }
    }
}

/// Wall-clock time source, local or at a fixed offset
pub struct Clock {
    offset: Option<FixedOffset>,
}

impl Clock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }

    pub fn hand_angles(&self) -> HandAngles {
        let (h, m, s) = match self.offset {
            Some(offset) => {
                let now = Utc::now().with_timezone(&offset);
                (now.hour(), now.minute(), now.second())
            }
            None => {
                let now = Local::now();
                (now.hour(), now.minute(), now.second())
            }
        };
        HandAngles::from_hms(h, m, s)
    }
}

fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

fn new_grid(config: &FaceConfig, seeder: &mut RandomSeeder) -> io::Result<LifeGrid> {
    let mut grid = LifeGrid::new(config.grid_size, config.grid_size).map_err(io::Error::other)?;
    seeder.reseed(&mut grid, config.initial_cells).map_err(io::Error::other)?;
    Ok(grid)
}

/// Run the interactive watch face until the user quits
pub fn run(config: FaceConfig) -> io::Result<()> {
    let mut seeder = RandomSeeder::new(config.seed);
    let mut grid = new_grid(&config, &mut seeder)?;
    let mut scheduler = Scheduler::new(config.rate, config.ambient_rate);
    let mut renderer = Renderer::new(&config);
    let mut colors = ColorState::new(config.color_scheme);
    let clock = Clock::new(config.utc_offset);
    let mut term = Terminal::new(true)?;
    let mut show_help = false;
    let mut repaint = true;

    tracing::info!(
        grid = config.grid_size,
        rate_ms = config.rate.as_millis() as u64,
        seed = ?config.seed,
        "watch face started"
    );

    loop {
        match scheduler.poll(now_ms()) {
            Some(Tick::Advance) => {
                grid.advance();
                repaint = true;
            }
            Some(Tick::Repaint) => repaint = true,
            None => {}
        }

        if repaint && scheduler.is_visible() {
            renderer.paint(&mut term, &grid, clock.hand_angles(), &colors, scheduler.is_ambient());
            if show_help {
                render_help_overlay(&mut term, HELP_TEXT);
            }
            term.present()?;
            repaint = false;
        }

        let Some(input) = term.next_input(scheduler.timeout(now_ms()))? else {
            continue;
        };

        match input {
            Input::Key(code) => {
                repaint = true;
                if colors.handle_key(code) {
                    continue;
                }
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('?') => show_help = !show_help,
                    KeyCode::Char(' ') => {
                        let ambient = !scheduler.is_ambient();
                        scheduler.set_ambient(ambient);
                        tracing::info!(ambient, "ambient mode toggled");
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        seeder.reseed(&mut grid, config.reseed_cells).map_err(io::Error::other)?;
                    }
                    KeyCode::Char('s') | KeyCode::Char('S') => {
                        renderer.show_seconds = !renderer.show_seconds;
                    }
                    KeyCode::Char('g') | KeyCode::Char('G') => {
                        renderer.show_grid = !renderer.show_grid;
                    }
                    KeyCode::Char('i') | KeyCode::Char('I') => {
                        renderer.show_status = !renderer.show_status;
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        scheduler.set_rate((scheduler.rate() / 2).max(MIN_RATE));
                    }
                    KeyCode::Char('-') | KeyCode::Char('_') => {
                        scheduler.set_rate((scheduler.rate() * 2).min(MAX_RATE));
                    }
                    _ => {}
                }
            }
            Input::Focus(visible) => {
                if scheduler.set_visible(visible) {
                    tracing::info!(
                        visible,
                        generation = grid.generation_count(),
                        "visibility changed"
                    );
                    if !visible {
                        // Come back to a fresh pattern rather than a stale one
                        seeder.reseed(&mut grid, config.reseed_cells).map_err(io::Error::other)?;
                    }
                    repaint = true;
                }
            }
            Input::Resize(w, h) => {
                term.resize(w, h);
                term.clear_screen()?;
                repaint = true;
            }
        }
    }

    tracing::info!(generation = grid.generation_count(), "watch face stopped");
    Ok(())
}

/// Render a single frame to stdout after `generations` steps
pub fn print_frame(config: FaceConfig, generations: u64) -> io::Result<()> {
    let mut seeder = RandomSeeder::new(config.seed);
    let mut grid = new_grid(&config, &mut seeder)?;
    for _ in 0..generations {
        grid.advance();
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 40));
    let mut term = Terminal::offscreen(w, h.saturating_sub(1).max(1));
    let renderer = Renderer::new(&config);
    let colors = ColorState::new(config.color_scheme);
    renderer.paint(&mut term, &grid, Clock::new(config.utc_offset).hand_angles(), &colors, false);
    term.print_to_stdout();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{AMBIENT, PALETTES};
    use lifeclock::settings::Settings;

    fn config() -> FaceConfig {
        FaceConfig::from(&Settings::default())
    }

    fn glyph(term: &Terminal, x: u16, y: u16) -> char {
        term.get(x, y).map(|c| c.ch).unwrap_or('?')
    }

    #[test]
    fn layout_keeps_cells_twice_as_wide() {
        let layout = Layout::fit(200, 50, 32);
        assert_eq!((layout.cell_w, layout.cell_h), (2, 1));
        assert_eq!((layout.ox, layout.oy), (68, 9));

        let layout = Layout::fit(300, 70, 32);
        assert_eq!((layout.cell_w, layout.cell_h), (4, 2));
    }

    #[test]
    fn tiny_terminal_still_gets_one_row_per_cell() {
        let layout = Layout::fit(10, 5, 32);
        assert_eq!((layout.cell_w, layout.cell_h), (2, 1));
        assert_eq!((layout.ox, layout.oy), (0, 0));
    }

    #[test]
    fn paint_shows_alive_and_spawning_cells() {
        let mut grid = LifeGrid::new(32, 32).unwrap();
        grid.seed(10, 16).unwrap();
        grid.advance();
        grid.seed(20, 25).unwrap();

        let mut term = Terminal::offscreen(64, 32);
        let renderer = Renderer::new(&config());
        let colors = ColorState::new(0);
        renderer.paint(&mut term, &grid, HandAngles::from_hms(0, 0, 0), &colors, false);

        assert_eq!(glyph(&term, 20, 16), ALIVE_CHAR);
        assert_eq!(glyph(&term, 21, 16), ' ');
        assert_eq!(glyph(&term, 40, 25), SPAWN_CHAR);
        assert_eq!(glyph(&term, 4, 3), GRID_CHAR);
    }

    #[test]
    fn cell_states_take_palette_colors() {
        // A lone cell is alive and already marked to die after one advance
        let mut grid = LifeGrid::new(32, 32).unwrap();
        grid.seed(10, 16).unwrap();
        grid.advance();
        grid.seed(20, 25).unwrap();

        let mut term = Terminal::offscreen(64, 32);
        let renderer = Renderer::new(&config());
        let colors = ColorState::new(2);
        renderer.paint(&mut term, &grid, HandAngles::from_hms(0, 0, 0), &colors, false);

        let palette = &PALETTES[2];
        assert_eq!(term.get(20, 16).and_then(|c| c.fg), Some(palette.dying));
        assert_eq!(term.get(40, 25).and_then(|c| c.fg), Some(palette.spawn));

        renderer.paint(&mut term, &grid, HandAngles::from_hms(0, 0, 0), &colors, true);
        assert_eq!(term.get(20, 16).and_then(|c| c.fg), Some(AMBIENT.dying));
    }

    #[test]
    fn hands_are_drawn_from_center() {
        let grid = LifeGrid::new(32, 32).unwrap();
        let mut term = Terminal::offscreen(64, 32);
        let mut renderer = Renderer::new(&config());
        renderer.show_grid = false;
        let colors = ColorState::new(0);

        // 3:00:30 puts the hour hand flat to the right, seconds straight down
        renderer.paint(&mut term, &grid, HandAngles::from_hms(3, 0, 30), &colors, false);
        assert_eq!(glyph(&term, 38, 16), '●');
        assert_eq!(glyph(&term, 32, 12), '•');
        assert_eq!(glyph(&term, 20, 20), ' ');
    }

    #[test]
    fn ambient_hides_second_hand() {
        let grid = LifeGrid::new(32, 32).unwrap();
        let mut term = Terminal::offscreen(64, 32);
        let mut renderer = Renderer::new(&config());
        renderer.show_grid = false;
        let colors = ColorState::new(0);

        // 6:00:45 - second hand points left, nothing else does
        renderer.paint(&mut term, &grid, HandAngles::from_hms(6, 0, 45), &colors, false);
        assert_eq!(glyph(&term, 20, 16), '∙');
        renderer.paint(&mut term, &grid, HandAngles::from_hms(6, 0, 45), &colors, true);
        assert_eq!(glyph(&term, 20, 16), ' ');
    }

    #[test]
    fn status_line_reports_counters() {
        let mut grid = LifeGrid::new(8, 8).unwrap();
        grid.advance();
        let mut term = Terminal::offscreen(40, 20);
        let mut renderer = Renderer::new(&config());
        renderer.show_status = true;
        renderer.paint(&mut term, &grid, HandAngles::from_hms(0, 0, 0), &ColorState::new(0), false);

        let line: String = (0..40).map(|x| glyph(&term, x, 19)).collect();
        assert!(line.contains("gen 1"));
        assert!(line.contains("cells 0"));
    }
}
