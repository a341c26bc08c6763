use crate::config::{load_settings, project_paths, save_settings_atomic, Paths, Settings};
use crate::input::{collect_input_nonblocking, map_key_action, AppAction, UiEvent};
use crate::model::{Rules, World};
use crate::render::{cell_to_world, draw_scene, ui_overlay, Terminal};
use crate::sim::PointerAction;
use crossterm::event::MouseButton;
use crossterm::style::Color;
use std::time::{Duration, Instant};

pub(crate) struct App {
    settings: Settings,
    rules: Rules,
    world: World,
    paths: Paths,
    term: Terminal,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn init() -> anyhow::Result<Self> {
        let paths = project_paths()?;
        let mut settings = load_settings(&paths.settings_path);

        // ensure deterministic seed exists
        if settings.seed == 0 {
            settings.seed = 0xC0FFEE_u64;
        }

        let rules = Rules::default();
        let world = World::new(&rules, &settings.pet_name, &settings.species, settings.seed);
        let term = Terminal::begin()?;

        Ok(Self {
            settings,
            rules,
            world,
            paths,
            term,
            show_help: false,
            should_quit: false,
        })
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let fps = self.settings.fps_cap.clamp(10, 240);
        let frame_dt = Duration::from_secs_f32(1.0 / fps as f32);
        let sim_step = Duration::from_millis(self.rules.tick_ms);

        let mut last_frame = Instant::now();
        let mut sim_accum = Duration::ZERO;

        while !self.should_quit {
            let _resized = self.term.resize_if_needed()?;

            // input: keys toggle app state, pointer gestures go to the world
            for ev in collect_input_nonblocking(frame_dt)? {
                match ev {
                    UiEvent::Key(code, mods) => match map_key_action(code, mods) {
                        Some(AppAction::Quit) => {
                            self.should_quit = true;
                            break;
                        }
                        Some(AppAction::HelpToggle) => self.show_help = !self.show_help,
                        None => {}
                    },
                    UiEvent::PointerDown(button, col, row) => {
                        let (x, y) = self.pointer_world(col, row);
                        let action = match button {
                            MouseButton::Left => PointerAction::Grab { x, y },
                            MouseButton::Right => PointerAction::Interact { x, y },
                            MouseButton::Middle => continue,
                        };
                        self.world.apply(action, &self.rules);
                    }
                    UiEvent::PointerDrag(col, row) => {
                        let (x, y) = self.pointer_world(col, row);
                        self.world.apply(PointerAction::DragTo { x, y }, &self.rules);
                    }
                    UiEvent::PointerUp => {
                        self.world.apply(PointerAction::Release, &self.rules);
                    }
                }
            }

            // sim fixed-step
            let now = Instant::now();
            let real_dt = now.saturating_duration_since(last_frame);
            last_frame = now;
            sim_accum = sim_accum.saturating_add(real_dt);

            while sim_accum >= sim_step {
                self.world.tick_fixed_step(&self.rules);
                sim_accum = sim_accum.saturating_sub(sim_step);
            }

            self.render_frame()?;

            // frame cap
            spin_sleep(frame_dt, Instant::now());
        }

        self.term.end()?;
        save_settings_atomic(&self.paths.settings_path, &self.settings)?;
        Ok(())
    }

    fn pointer_world(&self, col: u16, row: u16) -> (i32, i32) {
        cell_to_world(&self.rules, self.term.cols, self.term.rows, col, row)
    }

    fn render_frame(&mut self) -> anyhow::Result<()> {
        self.term.cur.clear(Color::Black);
        draw_scene(&mut self.term.cur, &self.world, &self.rules, &self.settings);
        ui_overlay(&mut self.term.cur, &self.world, &self.settings, self.show_help);
        self.term.present(true)?;
        Ok(())
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let mut app = App::init()?;
    app.run()?;
    Ok(())
}

/* -----------------------------
   Frame pacing helper
------------------------------ */

fn spin_sleep(target: Duration, now: Instant) {
    let end = now + target;
    loop {
        let t = Instant::now();
        if t >= end {
            break;
        }
        let left = end - t;
        if left > Duration::from_millis(2) {
            std::thread::sleep(Duration::from_millis(1));
        } else {
            std::hint::spin_loop();
        }
    }
}
