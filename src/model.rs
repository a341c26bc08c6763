pub(crate) const MAX_HAPPINESS: i32 = 10_000;
pub(crate) const EDG_HAPPINESS: i32 = 3_000; // early-warning threshold, below max
pub(crate) const MAX_HUNGER: i32 = 10_000;
pub(crate) const EDG_HUNGER: i32 = 8_000;
pub(crate) const MAX_SLEEP: i32 = 30_000;
pub(crate) const EDG_SLEEP: i32 = 20_000;
pub(crate) const BASE_SPEED: i32 = 2; // walking speed, px/tick

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Facing {
    Left,
    Right,
}

impl Facing {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    pub(crate) fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Exactly one of these holds at any instant; transitions go through the
/// methods in sim.rs so velocity stays consistent with the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Behavior {
    Idle,
    Wandering,
    Sleeping,
    Falling,
}

impl Behavior {
    pub(crate) fn pose_token(self) -> &'static str {
        match self {
            Behavior::Idle => "default",
            // the sprite sheets spell it "wondering"
            Behavior::Wandering => "wondering",
            Behavior::Sleeping => "sleeping",
            Behavior::Falling => "falling",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatusIcon {
    Tired,
    Hungry,
    None,
}

impl StatusIcon {
    pub(crate) fn file_name(self) -> &'static str {
        match self {
            StatusIcon::Tired => "status_tired.png",
            StatusIcon::Hungry => "status_hungry.png",
            StatusIcon::None => "blank.png",
        }
    }
}

/* -----------------------------
   Kinematics
------------------------------ */

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PhysicsBody {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) vx: i32,
    pub(crate) vy: i32,
}

impl PhysicsBody {
    pub(crate) fn at(x: i32, y: i32) -> Self {
        Self { x, y, vx: 0, vy: 0 }
    }

    /// Position integration only; bounds are the caller's problem.
    pub(crate) fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    pub(crate) fn set_velocity(&mut self, vx: i32, vy: i32) {
        self.vx = vx;
        self.vy = vy;
    }

    /// Invert and dampen vertical speed; magnitudes of 4 or less come to
    /// rest, so repeated calls at rest stay at rest.
    pub(crate) fn floor_bounce(&mut self, elasticity: f32) {
        self.vy = -self.vy;
        self.vy = if self.vy.abs() > 4 {
            (self.vy as f32 * elasticity).round() as i32
        } else {
            0
        };
    }

    /// Invert and dampen horizontal speed. No rest snap here, unlike
    /// floor_bounce; rolling friction is what stops a slow ball.
    pub(crate) fn wall_bounce(&mut self, elasticity: f32) {
        self.vx = -self.vx;
        self.vx = (self.vx as f32 * elasticity).round() as i32;
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rect {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) w: i32,
    pub(crate) h: i32,
}

impl Rect {
    pub(crate) fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// True only when `other` lies fully inside, edges included.
    pub(crate) fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }
}

/* -----------------------------
   The prop and the pet
------------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropKind {
    BeachBall,
    Pebble,
}

impl PropKind {
    pub(crate) fn elasticity(self) -> f32 {
        match self {
            PropKind::BeachBall => 0.7,
            PropKind::Pebble => 0.05,
        }
    }

    pub(crate) fn is_kickable(self) -> bool {
        matches!(self, PropKind::BeachBall)
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            PropKind::BeachBall => "beach_ball",
            PropKind::Pebble => "pebble",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Prop {
    pub(crate) kind: PropKind,
    pub(crate) body: PhysicsBody,
    pub(crate) alive: bool,
}

impl Prop {
    pub(crate) fn new(kind: PropKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            body: PhysicsBody::at(x, y),
            alive: true,
        }
    }

    /// One-way: a destroyed prop is a ghost for the rest of the run.
    pub(crate) fn destroy(&mut self) {
        self.alive = false;
    }

    pub(crate) fn sprite_key(&self, base: &str) -> String {
        format!("{}/object_{}.png", base, self.kind.token())
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Needs {
    pub(crate) happiness: i32,
    pub(crate) hunger: i32,
    pub(crate) sleep: i32,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            happiness: MAX_HAPPINESS,
            hunger: 0,
            sleep: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Pet {
    pub(crate) name: String,
    pub(crate) species: String,
    pub(crate) body: PhysicsBody,
    pub(crate) facing: Facing,
    pub(crate) behavior: Behavior,
    pub(crate) needs: Needs,
    pub(crate) status: StatusIcon,
}

impl Pet {
    pub(crate) fn new(name: &str, species: &str, x: i32, y: i32) -> Self {
        let mut body = PhysicsBody::at(x, y);
        body.vx = BASE_SPEED;
        Self {
            name: name.to_string(),
            species: species.to_string(),
            body,
            facing: Facing::Right,
            behavior: Behavior::Idle,
            needs: Needs::default(),
            status: StatusIcon::None,
        }
    }

    /// Asset key for the current pose, e.g.
    /// `resources/sprites/slug_default_right.png`.
    pub(crate) fn sprite_key(&self, base: &str) -> String {
        format!(
            "{}/{}_{}_{}.png",
            base,
            self.species,
            self.behavior.pose_token(),
            self.facing.token()
        )
    }

    pub(crate) fn status_key(&self, base: &str) -> String {
        format!("{}/{}", base, self.status.file_name())
    }
}

/* -----------------------------
   Deterministic RNG
------------------------------ */

#[derive(Clone, Debug)]
pub(crate) struct RngState {
    pub(crate) seed: u64,
    pub(crate) event_counter: u64,
}

impl RngState {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            seed,
            event_counter: 0,
        }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // Counter-based SplitMix64: deterministic and cheap.
        let mut z = self
            .seed
            .wrapping_add(self.event_counter.wrapping_mul(0x9E3779B97F4A7C15));
        self.event_counter = self.event_counter.wrapping_add(1);

        z = z.wrapping_add(0x9E3779B97F4A7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f32(&mut self) -> f32 {
        // [0,1)
        let v = self.next_u64() >> 40; // 24 bits
        (v as f32) / ((1u64 << 24) as f32)
    }

    pub(crate) fn roll(&mut self, p: f32) -> bool {
        self.next_f32() < p.clamp(0.0, 1.0)
    }

    pub(crate) fn coin(&mut self) -> bool {
        self.roll(0.5)
    }

    /// Uniform draw with inclusive bounds.
    pub(crate) fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i32
    }
}

/* -----------------------------
   World geometry and tick rules
------------------------------ */

#[derive(Clone, Debug)]
pub(crate) struct Rules {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) tick_ms: u64,
    pub(crate) pet_size: i32,
    pub(crate) status_size: i32,
    pub(crate) obj_size: i32,
    pub(crate) gravity: i32,
    pub(crate) floor_y: i32,
    pub(crate) obj_floor_y: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: 1366,
            height: 768,
            tick_ms: 33,
            pet_size: 150,
            status_size: 65,
            obj_size: 50,
            gravity: 4,
            floor_y: 637,
            obj_floor_y: 637 + 82, // props settle below the pet's walk line
        }
    }
}

impl Rules {
    pub(crate) fn pet_rect(&self, pet: &Pet) -> Rect {
        Rect {
            x: pet.body.x,
            y: pet.body.y,
            w: self.pet_size,
            h: self.pet_size,
        }
    }

    pub(crate) fn prop_rect(&self, prop: &Prop) -> Rect {
        Rect {
            x: prop.body.x,
            y: prop.body.y,
            w: self.obj_size,
            h: self.obj_size,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DragState {
    pub(crate) pet_held: bool,
    pub(crate) prop_held: bool,
    pub(crate) grab: (i32, i32),
}

#[derive(Clone, Debug)]
pub(crate) struct World {
    pub(crate) pet: Pet,
    pub(crate) prop: Prop,
    pub(crate) rng: RngState,
    pub(crate) drag: DragState,
    pub(crate) ticks: u64,
}

impl World {
    pub(crate) fn new(rules: &Rules, name: &str, species: &str, seed: u64) -> Self {
        Self {
            pet: Pet::new(name, species, 1, rules.floor_y),
            prop: Prop::new(PropKind::BeachBall, 1, 1),
            rng: RngState::new(seed),
            drag: DragState::default(),
            ticks: 0,
        }
    }
}
