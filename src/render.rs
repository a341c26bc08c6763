use crate::config::Settings;
use crate::model::{
    Behavior, Facing, Rules, StatusIcon, World, MAX_HAPPINESS, MAX_HUNGER, MAX_SLEEP,
};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
    pub(crate) bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
            bold: false,
        }
    }
}

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }
    pub(crate) fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    pub(crate) fn set(&mut self, x: u16, y: u16, c: Cell) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.cells[i] = c;
        }
    }
    pub(crate) fn clear(&mut self, bg: Color) {
        for c in &mut self.cells {
            c.ch = ' ';
            c.fg = Color::White;
            c.bg = bg;
            c.bold = false;
        }
    }
}

pub(crate) struct Terminal {
    pub(crate) out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    pub(crate) prev: CellBuffer,
    pub(crate) cur: CellBuffer,
}

impl Terminal {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        let prev = CellBuffer::new(cols, rows);
        let cur = CellBuffer::new(cols, rows);

        Ok(Self {
            out,
            cols,
            rows,
            prev,
            cur,
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            EndSynchronizedUpdate,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub(crate) fn resize_if_needed(&mut self) -> anyhow::Result<bool> {
        let (c, r) = terminal::size()?;
        if c == self.cols && r == self.rows {
            return Ok(false);
        }
        self.cols = c;
        self.rows = r;
        self.prev = CellBuffer::new(c, r);
        self.cur = CellBuffer::new(c, r);
        Ok(true)
    }

    pub(crate) fn present(&mut self, diff_only: bool) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bg = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if diff_only && c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;

                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }

                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

/* -----------------------------
   World <-> cell mapping
------------------------------ */

/// Terminal cell to world pixel, for routing pointer events. Samples the
/// cell center so the mapping survives a trip through world_to_cell.
pub(crate) fn cell_to_world(rules: &Rules, cols: u16, rows: u16, col: u16, row: u16) -> (i32, i32) {
    let x = ((col as i64 * 2 + 1) * rules.width as i64 / (cols.max(1) as i64 * 2)) as i32;
    let y = ((row as i64 * 2 + 1) * rules.height as i64 / (rows.max(1) as i64 * 2)) as i32;
    (x, y)
}

fn world_to_cell(rules: &Rules, cols: u16, rows: u16, x: i32, y: i32) -> (i32, i32) {
    let col = (x as i64 * cols as i64 / rules.width as i64) as i32;
    let row = (y as i64 * rows.max(1) as i64 / rules.height as i64) as i32;
    (col, row)
}

/* -----------------------------
   Scene
------------------------------ */

fn pet_art(behavior: Behavior, facing: Facing) -> [&'static str; 4] {
    match (behavior, facing) {
        (Behavior::Idle, Facing::Right) => [
            r"       \ /  ",
            r"   ____(oo) ",
            r"  /       \ ",
            r"~~\_______/ ",
        ],
        (Behavior::Idle, Facing::Left) => [
            r"  \ /       ",
            r" (oo)____   ",
            r" /       \  ",
            r" \_______/~~",
        ],
        (Behavior::Wandering, Facing::Right) => [
            r"    ?  \ /  ",
            r"   ____(..) ",
            r"  /       \ ",
            r"~~\_______/ ",
        ],
        (Behavior::Wandering, Facing::Left) => [
            r"  \ /  ?    ",
            r" (..)____   ",
            r" /       \  ",
            r" \_______/~~",
        ],
        (Behavior::Sleeping, Facing::Right) => [
            r"      z Z   ",
            r"   ____(--) ",
            r"  /       \ ",
            r"~~\_______/ ",
        ],
        (Behavior::Sleeping, Facing::Left) => [
            r"   Z z      ",
            r" (--)____   ",
            r" /       \  ",
            r" \_______/~~",
        ],
        (Behavior::Falling, Facing::Right) => [
            r"    !  \ /  ",
            r"   ____(@@) ",
            r"  /       \ ",
            r"  \_______/ ",
        ],
        (Behavior::Falling, Facing::Left) => [
            r"  \ /  !    ",
            r" (@@)____   ",
            r" /       \  ",
            r" \_______/  ",
        ],
    }
}

/// Writes a string with transparent spaces, clipping at the buffer edges.
fn draw_line(buf: &mut CellBuffer, x: i32, y: i32, s: &str, fg: Color) {
    if y < 0 || y >= buf.h as i32 {
        return;
    }
    let mut xx = x;
    for ch in s.chars() {
        if ch != ' ' && xx >= 0 && xx < buf.w as i32 {
            buf.set(
                xx as u16,
                y as u16,
                Cell {
                    ch,
                    fg,
                    bg: Color::Black,
                    bold: false,
                },
            );
        }
        xx += 1;
    }
}

pub(crate) fn draw_scene(buf: &mut CellBuffer, world: &World, rules: &Rules, settings: &Settings) {
    let cols = buf.w;
    let rows = buf.h;
    let ink = |c: Color| if settings.enable_color { c } else { Color::White };

    // ground
    let ground_row = rows.saturating_sub(1);
    for x in 0..cols {
        buf.set(
            x,
            ground_row,
            Cell {
                ch: '▔',
                fg: ink(Color::DarkGreen),
                bg: Color::Black,
                bold: false,
            },
        );
    }

    // the ball, anchored by its underside
    if world.prop.alive {
        let (c, r) = world_to_cell(
            rules,
            cols,
            rows,
            world.prop.body.x,
            world.prop.body.y + rules.obj_size,
        );
        draw_line(buf, c, r - 1, "(o)", ink(Color::Yellow));
    }

    // the pet, anchored by its feet
    let (c, r) = world_to_cell(
        rules,
        cols,
        rows,
        world.pet.body.x,
        world.pet.body.y + rules.pet_size,
    );
    let art = pet_art(world.pet.behavior, world.pet.facing);
    let top = r - art.len() as i32;
    for (i, line) in art.iter().enumerate() {
        draw_line(buf, c, top + i as i32, line, ink(Color::Green));
    }

    // status badge beside the head, where a graphical front end would put
    // the status sprite
    let badge = match world.pet.status {
        StatusIcon::Tired => "[Zz]",
        StatusIcon::Hungry => "[!]",
        StatusIcon::None => "",
    };
    if !badge.is_empty() {
        let (bc, br) = world_to_cell(
            rules,
            cols,
            rows,
            world.pet.body.x + rules.pet_size,
            world.pet.body.y + rules.status_size,
        );
        draw_line(buf, bc, br - 1, badge, ink(Color::Cyan));
    }
}

/* -----------------------------
   UI overlay (text + meters)
------------------------------ */

pub(crate) fn draw_text(buf: &mut CellBuffer, x: u16, y: u16, s: &str, fg: Color, bg: Color) {
    for (i, ch) in s.chars().enumerate() {
        let xx = x.saturating_add(i as u16);
        if xx >= buf.w || y >= buf.h {
            break;
        }
        buf.set(
            xx,
            y,
            Cell {
                ch,
                fg,
                bg,
                bold: false,
            },
        );
    }
}

fn bar(value01: f32, width: usize) -> String {
    let v = value01.clamp(0.0, 1.0);
    let fill = (v * width as f32 + 0.5) as usize;
    let mut s = String::new();
    s.push('[');
    for i in 0..width {
        s.push(if i < fill { '█' } else { ' ' });
    }
    s.push(']');
    s
}

pub(crate) fn ui_overlay(buf: &mut CellBuffer, world: &World, settings: &Settings, show_help: bool) {
    let bg = Color::Black;
    let fg = Color::White;

    let title = format!(
        "Termipet  |  {} the {}  |  tick {}",
        world.pet.name, world.pet.species, world.ticks
    );
    draw_text(buf, 1, 0, &title, fg, bg);

    let needs = world.pet.needs;
    let lines = [
        ("Happy ", needs.happiness, MAX_HAPPINESS),
        ("Hunger", needs.hunger, MAX_HUNGER),
        ("Sleep ", needs.sleep, MAX_SLEEP),
    ];
    for (i, (name, val, max)) in lines.iter().enumerate() {
        let b = bar(*val as f32 / *max as f32, 14);
        let s = format!("{name}: {b} {val:>6}");
        draw_text(buf, 1, 2 + i as u16, &s, fg, bg);
    }

    let mood = if world.pet.is_sad() { "glum" } else { "content" };
    let doing = match world.pet.behavior {
        Behavior::Idle => "walking",
        Behavior::Wandering => "daydreaming",
        Behavior::Sleeping => "sleeping",
        Behavior::Falling => "falling",
    };
    draw_text(
        buf,
        1,
        6,
        &format!("Mood: {mood}  |  {doing}, facing {}", world.pet.facing.token()),
        fg,
        bg,
    );

    // the asset keys a graphical front end would load right now
    draw_text(
        buf,
        1,
        7,
        &format!("Sprite: {}", world.pet.sprite_key(&settings.sprite_dir)),
        Color::DarkGrey,
        bg,
    );
    draw_text(
        buf,
        1,
        8,
        &format!("Status: {}", world.pet.status_key(&settings.sprite_dir)),
        Color::DarkGrey,
        bg,
    );
    if world.prop.alive {
        draw_text(
            buf,
            1,
            9,
            &format!("Object: {}", world.prop.sprite_key(&settings.sprite_dir)),
            Color::DarkGrey,
            bg,
        );
    }

    let footer = "q quit | h help | left-drag to carry | right-click the pet to feed it";
    draw_text(buf, 1, buf.h.saturating_sub(2), footer, fg, bg);

    if show_help {
        draw_help(buf);
    }
}

fn draw_help(buf: &mut CellBuffer) {
    let bg = Color::Black;
    let fg = Color::White;
    let lines = [
        "How to play",
        "",
        "Left-drag the pet or the ball anywhere on screen.",
        "Drop the ball from up high and it bounces until it rests.",
        "The pet kicks the ball around when it walks into it,",
        "and right-clicking the pet while the ball sits at its",
        "feet feeds it -- the ball is gone for good after that.",
        "Watch the badge over its head: Zz tired, ! hungry.",
        "",
        "h close | q quit",
    ];
    let w = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 4;
    let h = lines.len() as u16 + 2;
    let x0 = buf.w.saturating_sub(w) / 2;
    let y0 = buf.h.saturating_sub(h) / 2;

    for y in 0..h {
        for x in 0..w {
            buf.set(
                x0 + x,
                y0 + y,
                Cell {
                    ch: ' ',
                    fg,
                    bg,
                    bold: false,
                },
            );
        }
    }
    for (i, line) in lines.iter().enumerate() {
        draw_text(buf, x0 + 2, y0 + 1 + i as u16, line, fg, bg);
    }
}
