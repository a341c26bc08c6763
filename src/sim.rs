use crate::model::{
    Behavior, Pet, Prop, RngState, Rules, StatusIcon, World, BASE_SPEED, EDG_HAPPINESS, EDG_HUNGER,
    EDG_SLEEP, MAX_HAPPINESS, MAX_HUNGER, MAX_SLEEP,
};

// Horizontal damping for the prop: once on impact with the floor, then per
// tick while it rolls; below the rest threshold it stops outright.
const IMPACT_DRAG: f32 = 0.7;
const ROLL_DRAG: f32 = 0.9;
const REST_THRESHOLD: i32 = 2;

// Per-tick odds for the autonomous behavior switches.
const WAKE_CHANCE: f32 = 0.01;
const WANDER_CHANCE: f32 = 0.003;

/// Pointer gestures forwarded by the shell, already in world pixels.
#[derive(Clone, Copy, Debug)]
pub(crate) enum PointerAction {
    Grab { x: i32, y: i32 },
    Interact { x: i32, y: i32 },
    DragTo { x: i32, y: i32 },
    Release,
}

impl Pet {
    /// Needs accounting for one fixed step. Order matters: sleep first (it
    /// may toggle the sleeping state the other steps read), then hunger,
    /// then the passive happiness drain, then the self-healing clamp.
    pub(crate) fn tick(&mut self) {
        if self.behavior != Behavior::Sleeping {
            if self.needs.sleep < MAX_SLEEP {
                self.needs.sleep += 1;
            } else {
                self.pass_out();
            }
        } else if self.needs.sleep > 0 {
            self.needs.sleep -= 7;
        } else {
            self.wake_up();
        }

        if self.needs.hunger < MAX_HUNGER {
            self.needs.hunger += 1;
        } else if self.needs.happiness > 0 {
            // starving: happiness pays for it
            self.needs.happiness -= 5;
        }

        if self.needs.happiness > 0 {
            self.needs.happiness -= 1;
        }

        self.clamp_needs();
        self.update_status();
    }

    fn clamp_needs(&mut self) {
        if self.needs.happiness > MAX_HAPPINESS {
            self.needs.happiness = MAX_HAPPINESS;
        }
        if self.needs.sleep < 0 {
            self.needs.sleep = 0;
        }
        if self.needs.hunger < 0 {
            self.needs.hunger = 0;
        }
    }

    /// One badge at a time; tiredness outranks hunger.
    fn update_status(&mut self) {
        self.status = if self.is_tired() || self.behavior == Behavior::Sleeping {
            StatusIcon::Tired
        } else if self.is_hungry() {
            StatusIcon::Hungry
        } else {
            StatusIcon::None
        };
    }

    pub(crate) fn is_tired(&self) -> bool {
        self.needs.sleep >= EDG_SLEEP
    }

    pub(crate) fn is_hungry(&self) -> bool {
        self.needs.hunger >= EDG_HUNGER
    }

    pub(crate) fn is_sad(&self) -> bool {
        self.needs.happiness <= EDG_HAPPINESS
    }

    pub(crate) fn turn_around(&mut self) {
        self.facing = self.facing.flipped();
        self.body.vx = -self.body.vx;
    }

    pub(crate) fn wander(&mut self) {
        self.behavior = Behavior::Wandering;
        self.body.vx = 0;
    }

    pub(crate) fn pass_out(&mut self) {
        self.behavior = Behavior::Sleeping;
        self.body.vx = 0;
    }

    pub(crate) fn wake_up(&mut self) {
        self.behavior = Behavior::Idle;
        self.body.vx = BASE_SPEED * self.facing.sign();
    }

    /// Walking stops; vertical speed is gravity's business, not ours.
    pub(crate) fn fall(&mut self) {
        self.behavior = Behavior::Falling;
        self.body.vx = 0;
    }

    pub(crate) fn land(&mut self) {
        self.behavior = Behavior::Idle;
        self.body.vx = BASE_SPEED * self.facing.sign();
        self.body.vy = 0;
    }

    /// Launch the prop away: sideways in the facing direction, always up.
    pub(crate) fn kick(&mut self, prop: &mut Prop, rng: &mut RngState) {
        let vx = rng.range_i32(30, 50) * self.facing.sign();
        let vy = rng.range_i32(-70, -50);
        prop.body.set_velocity(vx, vy);
        self.needs.happiness += 100;
    }

    /// Hunger may go negative here; the next tick's clamp heals it.
    pub(crate) fn eat(&mut self, prop: &mut Prop) {
        self.needs.happiness += 100;
        self.needs.hunger -= 1000;
        prop.destroy();
    }
}

impl World {
    /// One fixed simulation step. The shell calls this on a ~33ms clock and
    /// reads positions and sprite keys afterwards.
    pub(crate) fn tick_fixed_step(&mut self, rules: &Rules) {
        self.ticks += 1;
        self.pet.tick();
        self.falling_check(rules);

        if !self.drag.pet_held {
            self.pet.body.advance();

            if self.pet.behavior != Behavior::Sleeping {
                self.wander_check();

                if self.pet.behavior != Behavior::Wandering {
                    self.edge_check(rules);
                    self.proximity_check(rules);
                }
            }
        }

        if !self.drag.prop_held && self.prop.alive {
            self.prop.body.advance();
        }
    }

    /// Gravity, floor snapping and bounces for both bodies. A held body is
    /// the pointer's, not physics'; a dead prop is nobody's.
    fn falling_check(&mut self, rules: &Rules) {
        if !self.drag.pet_held {
            if self.pet.body.y < rules.floor_y {
                self.pet.body.vy += rules.gravity;
                self.pet.fall();
            }
            if self.pet.body.y > rules.floor_y {
                self.pet.body.y = rules.floor_y;
                self.pet.land();
            }
        }

        if !self.drag.prop_held && self.prop.alive {
            let elasticity = self.prop.kind.elasticity();
            let body = &mut self.prop.body;

            if body.y < rules.obj_floor_y {
                body.vy += rules.gravity;
            }
            if body.y > rules.obj_floor_y {
                body.vx = (body.vx as f32 * IMPACT_DRAG).round() as i32;
                body.y = rules.obj_floor_y;
                body.floor_bounce(elasticity);
            }
            if body.x < 0 {
                body.x = 1;
                body.wall_bounce(elasticity);
            }
            if body.x > rules.width - rules.obj_size {
                body.x = rules.width - rules.obj_size - 1;
                body.wall_bounce(elasticity);
            }
            // rolling friction once the prop sits exactly on the floor
            if body.y == rules.obj_floor_y {
                if body.vx.abs() > REST_THRESHOLD {
                    body.vx = (body.vx as f32 * ROLL_DRAG).round() as i32;
                } else {
                    body.vx = 0;
                }
            }
        }
    }

    fn wander_check(&mut self) {
        if self.pet.behavior == Behavior::Wandering {
            if self.rng.roll(WAKE_CHANCE) {
                self.pet.wake_up();
                if self.rng.coin() {
                    self.pet.turn_around();
                }
            }
        } else if self.rng.roll(WANDER_CHANCE) {
            self.pet.wander();
        }
    }

    fn edge_check(&mut self, rules: &Rules) {
        if self.pet.body.x >= rules.width - rules.pet_size || self.pet.body.x <= 0 {
            self.pet.turn_around();
        }
    }

    /// A kick fires when the prop's on-screen region sits fully inside the
    /// pet's, and only for kickable kinds.
    fn proximity_check(&mut self, rules: &Rules) {
        if !self.prop.alive || !self.prop.kind.is_kickable() {
            return;
        }
        if rules
            .pet_rect(&self.pet)
            .contains_rect(&rules.prop_rect(&self.prop))
        {
            self.pet.kick(&mut self.prop, &mut self.rng);
        }
    }

    /// A drag can park a body anywhere; pull both back inside the window.
    fn clamp_into_bounds(&mut self, rules: &Rules) {
        let pet = &mut self.pet.body;
        if pet.x > rules.width - rules.pet_size {
            pet.x = rules.width - rules.pet_size - 1;
        }
        if pet.x < 0 {
            pet.x = 1;
        }
        if pet.y > rules.floor_y {
            pet.y = rules.floor_y;
        }

        let prop = &mut self.prop.body;
        if prop.x < 0 {
            prop.x = 1;
        }
        if prop.x > rules.width - rules.obj_size {
            prop.x = rules.width - rules.obj_size - 1;
        }
        if prop.y > rules.obj_floor_y {
            prop.y = rules.obj_floor_y;
        }
    }

    pub(crate) fn apply(&mut self, action: PointerAction, rules: &Rules) {
        match action {
            PointerAction::Grab { x, y } => {
                // the prop sits on top of the pet visually, so it wins the hit test
                if self.prop.alive && rules.prop_rect(&self.prop).contains_point(x, y) {
                    self.drag.grab = (x - self.prop.body.x, y - self.prop.body.y);
                    self.drag.prop_held = true;
                } else if rules.pet_rect(&self.pet).contains_point(x, y) {
                    self.drag.grab = (x - self.pet.body.x, y - self.pet.body.y);
                    self.drag.pet_held = true;
                }
            }
            PointerAction::Interact { x, y } => {
                let pet_rect = rules.pet_rect(&self.pet);
                if pet_rect.contains_point(x, y)
                    && self.prop.alive
                    && pet_rect.contains_rect(&rules.prop_rect(&self.prop))
                {
                    self.pet.eat(&mut self.prop);
                }
            }
            PointerAction::DragTo { x, y } => {
                if self.drag.prop_held {
                    self.prop.body.x = x - self.drag.grab.0;
                    self.prop.body.y = y - self.drag.grab.1;
                } else if self.drag.pet_held {
                    self.pet.body.x = x - self.drag.grab.0;
                    self.pet.body.y = y - self.drag.grab.1;
                }
            }
            PointerAction::Release => {
                self.prop.body.set_velocity(0, 0);
                self.pet.body.vy = 0;
                self.drag.pet_held = false;
                self.drag.prop_held = false;
                self.clamp_into_bounds(rules);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facing, PropKind};

    fn world() -> (World, Rules) {
        let rules = Rules::default();
        let world = World::new(&rules, "Slugma", "slug", 7);
        (world, rules)
    }

    #[test]
    fn needs_stay_clamped_over_time() {
        let (mut w, rules) = world();
        // no prop: kicks would bump happiness mid-tick and that is fine,
        // but here we want the pure decay path across a full sleep cycle
        w.prop.destroy();
        for _ in 0..40_000 {
            w.tick_fixed_step(&rules);
            assert!(w.pet.needs.happiness >= 0);
            assert!(w.pet.needs.happiness <= MAX_HAPPINESS);
            assert!(w.pet.needs.sleep >= 0);
            assert!(w.pet.needs.hunger >= 0);
            assert!(w.pet.needs.hunger <= MAX_HUNGER);
        }
    }

    #[test]
    fn pet_passes_out_when_sleep_would_exceed_max() {
        let (mut w, _) = world();
        w.pet.needs.sleep = MAX_SLEEP - 1;

        w.pet.tick();
        assert_eq!(w.pet.needs.sleep, MAX_SLEEP);
        assert_ne!(w.pet.behavior, Behavior::Sleeping);

        w.pet.tick();
        assert_eq!(w.pet.behavior, Behavior::Sleeping);
        assert_eq!(w.pet.body.vx, 0);
        assert_eq!(w.pet.status, StatusIcon::Tired);
    }

    #[test]
    fn sleeping_pet_recovers_and_wakes() {
        let (mut w, _) = world();
        w.pet.pass_out();
        w.pet.needs.sleep = 5;

        // drain overshoots, clamp heals, and the empty meter wakes the pet
        w.pet.tick();
        assert_eq!(w.pet.needs.sleep, 0);
        assert_eq!(w.pet.behavior, Behavior::Sleeping);

        w.pet.tick();
        assert_eq!(w.pet.behavior, Behavior::Idle);
        assert_eq!(w.pet.body.vx, BASE_SPEED);
    }

    #[test]
    fn starvation_drains_happiness() {
        let (mut w, _) = world();
        w.pet.needs.hunger = MAX_HUNGER;
        let before = w.pet.needs.happiness;
        w.pet.tick();
        // -5 starvation, -1 passive
        assert_eq!(w.pet.needs.happiness, before - 6);
        assert_eq!(w.pet.needs.hunger, MAX_HUNGER);
    }

    #[test]
    fn status_priority_tired_over_hungry() {
        let (mut w, _) = world();
        w.pet.needs.sleep = EDG_SLEEP;
        w.pet.needs.hunger = EDG_HUNGER;
        w.pet.tick();
        assert_eq!(w.pet.status, StatusIcon::Tired);

        w.pet.needs.sleep = 0;
        w.pet.tick();
        assert_eq!(w.pet.status, StatusIcon::Hungry);

        w.pet.needs.hunger = 0;
        w.pet.tick();
        assert_eq!(w.pet.status, StatusIcon::None);
    }

    #[test]
    fn sadness_is_latent() {
        let (mut w, _) = world();
        w.pet.needs.happiness = EDG_HAPPINESS;
        w.pet.tick();
        assert!(w.pet.is_sad());
        // low happiness alone never drives the badge
        assert_eq!(w.pet.status, StatusIcon::None);
        assert_eq!(w.pet.behavior, Behavior::Idle);
    }

    #[test]
    fn behavior_transitions() {
        let (mut w, _) = world();

        w.pet.wander();
        assert_eq!(w.pet.behavior, Behavior::Wandering);
        assert_eq!(w.pet.body.vx, 0);

        w.pet.fall();
        assert_eq!(w.pet.behavior, Behavior::Falling);

        w.pet.land();
        assert_eq!(w.pet.behavior, Behavior::Idle);
        assert_eq!(w.pet.body.vx, BASE_SPEED);
        assert_eq!(w.pet.body.vy, 0);

        w.pet.pass_out();
        assert_eq!(w.pet.behavior, Behavior::Sleeping);
        w.pet.fall();
        assert_eq!(w.pet.behavior, Behavior::Falling);
    }

    #[test]
    fn turn_around_flips_facing_and_speed() {
        let (mut w, rules) = world();
        assert_eq!(w.pet.facing, Facing::Right);

        w.pet.body.x = -1;
        w.edge_check(&rules);
        assert_eq!(w.pet.facing, Facing::Left);
        assert_eq!(w.pet.body.vx, -BASE_SPEED);

        w.pet.body.x = rules.width - rules.pet_size;
        w.edge_check(&rules);
        assert_eq!(w.pet.facing, Facing::Right);
        assert_eq!(w.pet.body.vx, BASE_SPEED);
    }

    #[test]
    fn kick_velocity_stays_in_bounds() {
        let mut rng = RngState::new(99);
        let mut pet = Pet::new("Slugma", "slug", 0, 0);
        let mut prop = Prop::new(PropKind::BeachBall, 0, 0);
        for _ in 0..200 {
            pet.facing = Facing::Right;
            pet.kick(&mut prop, &mut rng);
            assert!((30..=50).contains(&prop.body.vx));
            assert!((-70..=-50).contains(&prop.body.vy));

            pet.facing = Facing::Left;
            pet.kick(&mut prop, &mut rng);
            assert!((-50..=-30).contains(&prop.body.vx));
            assert!((-70..=-50).contains(&prop.body.vy));
        }
    }

    #[test]
    fn proximity_kicks_contained_ball_once() {
        let (mut w, rules) = world();
        w.pet.body.x = 100;
        w.pet.body.y = rules.floor_y;
        w.prop.body.x = 130;
        w.prop.body.y = rules.obj_floor_y;
        let before = w.pet.needs.happiness;

        w.proximity_check(&rules);
        assert_eq!(w.pet.needs.happiness, before + 100);
        assert!(w.prop.body.vx >= 30 && w.prop.body.vx <= 50);
        assert!(w.prop.body.vy >= -70 && w.prop.body.vy <= -50);
    }

    #[test]
    fn proximity_ignores_far_dead_or_dull_props() {
        let (mut w, rules) = world();
        w.pet.body.x = 100;
        w.pet.body.y = rules.floor_y;

        // straddling the pet's edge: no kick
        w.prop.body.x = 100 + rules.pet_size - 10;
        w.prop.body.y = rules.obj_floor_y;
        w.proximity_check(&rules);
        assert_eq!(w.prop.body.vx, 0);

        // fully inside but dead: no kick
        w.prop.body.x = 130;
        w.prop.destroy();
        w.proximity_check(&rules);
        assert_eq!(w.prop.body.vx, 0);

        // fully inside and alive but not kickable: no kick
        let (mut w, rules) = world();
        w.pet.body.x = 100;
        w.pet.body.y = rules.floor_y;
        w.prop.kind = PropKind::Pebble;
        w.prop.body.x = 130;
        w.prop.body.y = rules.obj_floor_y;
        w.proximity_check(&rules);
        assert_eq!(w.prop.body.vx, 0);
    }

    #[test]
    fn prop_bounces_off_the_floor() {
        let (mut w, rules) = world();
        w.prop.body.x = 600;
        w.prop.body.y = rules.obj_floor_y + 5; // crossed the line this tick
        w.prop.body.set_velocity(10, 10);

        w.tick_fixed_step(&rules);
        // impact drag: 10 -> 7, roll drag in the same pass: 7 -> 6
        assert_eq!(w.prop.body.vx, 6);
        // bounce: 10 -> -7 (magnitude above the rest threshold)
        assert_eq!(w.prop.body.vy, -7);
        // snapped to the floor, then advanced by the new velocity
        assert_eq!(w.prop.body.y, rules.obj_floor_y - 7);
    }

    #[test]
    fn resting_prop_friction() {
        let (mut w, rules) = world();
        w.prop.body.x = 600;
        w.prop.body.y = rules.obj_floor_y;

        // |1| is under the rest threshold: zeroed outright
        w.prop.body.set_velocity(1, 0);
        w.tick_fixed_step(&rules);
        assert_eq!(w.prop.body.vx, 0);

        // |10| rolls on, shaved by the drag factor
        w.prop.body.set_velocity(10, 0);
        w.tick_fixed_step(&rules);
        assert_eq!(w.prop.body.vx, 9);
    }

    #[test]
    fn prop_bounces_off_walls_after_clamping() {
        let (mut w, rules) = world();
        w.prop.body.x = -6;
        w.prop.body.y = 300; // mid-air, so no floor branches interfere
        w.prop.body.set_velocity(-20, 0);

        w.tick_fixed_step(&rules);
        // clamped inside, then inverted and scaled by elasticity
        assert_eq!(w.prop.body.vx, 14);
        assert!(w.prop.body.x >= 1);

        let (mut w, rules) = world();
        w.prop.body.x = rules.width - rules.obj_size + 3;
        w.prop.body.y = 300;
        w.prop.body.set_velocity(20, 0);
        w.tick_fixed_step(&rules);
        assert_eq!(w.prop.body.vx, -14);
        assert!(w.prop.body.x <= rules.width - rules.obj_size);
    }

    #[test]
    fn dropped_pet_falls_then_lands() {
        let (mut w, rules) = world();
        w.pet.body.x = 400;
        w.pet.body.y = 200;

        w.falling_check(&rules);
        assert_eq!(w.pet.behavior, Behavior::Falling);
        assert_eq!(w.pet.body.vx, 0);
        assert_eq!(w.pet.body.vy, rules.gravity);

        let mut landed = false;
        for _ in 0..200 {
            w.tick_fixed_step(&rules);
            if w.pet.body.y == rules.floor_y {
                landed = true;
                break;
            }
        }
        assert!(landed, "pet should land within a few dozen ticks");
        assert_eq!(w.pet.body.vy, 0);
        assert_ne!(w.pet.behavior, Behavior::Falling);
    }

    #[test]
    fn held_bodies_are_left_to_the_pointer() {
        let (mut w, rules) = world();
        w.pet.body.y = 200;
        w.prop.body.y = 200;
        w.drag.pet_held = true;
        w.drag.prop_held = true;

        for _ in 0..10 {
            w.tick_fixed_step(&rules);
        }
        // no gravity, no movement while held
        assert_eq!(w.pet.body.y, 200);
        assert_eq!(w.pet.body.vy, 0);
        assert_eq!(w.prop.body.y, 200);
        assert_eq!(w.prop.body.vy, 0);
    }

    #[test]
    fn drag_release_resets_and_clamps() {
        let (mut w, rules) = world();

        // grab the ball (it spawns at (1,1))
        w.apply(PointerAction::Grab { x: 10, y: 10 }, &rules);
        assert!(w.drag.prop_held);
        assert!(!w.drag.pet_held);

        // park it far out of bounds
        w.apply(PointerAction::DragTo { x: -500, y: 2000 }, &rules);
        assert!(w.prop.body.x < 0);

        w.apply(PointerAction::Release, &rules);
        assert!(!w.drag.prop_held);
        assert_eq!((w.prop.body.vx, w.prop.body.vy), (0, 0));
        assert_eq!(w.prop.body.x, 1);
        assert_eq!(w.prop.body.y, rules.obj_floor_y);
    }

    #[test]
    fn grabbing_empty_air_holds_nothing() {
        let (mut w, rules) = world();
        w.apply(PointerAction::Grab { x: 700, y: 100 }, &rules);
        assert!(!w.drag.pet_held);
        assert!(!w.drag.prop_held);
    }

    #[test]
    fn pet_drag_release_zeroes_vertical_speed() {
        let (mut w, rules) = world();
        // point inside the pet but outside the ball
        w.apply(PointerAction::Grab { x: 60, y: 700 }, &rules);
        assert!(w.drag.pet_held);

        w.apply(PointerAction::DragTo { x: 500, y: 100 }, &rules);
        w.pet.body.vy = 55; // whatever gravity had built up before the grab
        w.apply(PointerAction::Release, &rules);
        assert_eq!(w.pet.body.vy, 0);
        assert!(!w.drag.pet_held);

        // airborne now: the next falling check starts the fall-land arc
        w.falling_check(&rules);
        assert_eq!(w.pet.behavior, Behavior::Falling);
    }

    #[test]
    fn feeding_destroys_the_prop_for_good() {
        let (mut w, rules) = world();
        w.pet.body.x = 100;
        w.pet.body.y = rules.floor_y;
        w.prop.body.x = 130;
        w.prop.body.y = rules.obj_floor_y;
        w.pet.needs.hunger = 500;
        let happiness = w.pet.needs.happiness;

        w.apply(
            PointerAction::Interact {
                x: 110,
                y: rules.floor_y + 10,
            },
            &rules,
        );
        assert!(!w.prop.alive);
        assert_eq!(w.pet.needs.hunger, 500 - 1000);
        assert_eq!(w.pet.needs.happiness, happiness + 100);

        // the ghost is skipped by physics, movement and proximity from now on
        let parked = (w.prop.body.x, w.prop.body.y);
        for _ in 0..50 {
            w.tick_fixed_step(&rules);
            assert_eq!((w.prop.body.x, w.prop.body.y), parked);
            assert_eq!((w.prop.body.vx, w.prop.body.vy), (0, 0));
        }
        // the clamp healed the hunger debt on the first tick; it has
        // been creeping up normally since
        assert_eq!(w.pet.needs.hunger, 49);
    }

    #[test]
    fn feeding_needs_the_ball_within_reach() {
        let (mut w, rules) = world();
        w.pet.body.x = 100;
        w.pet.body.y = rules.floor_y;
        w.prop.body.x = 600; // nowhere near
        w.prop.body.y = rules.obj_floor_y;

        w.apply(
            PointerAction::Interact {
                x: 110,
                y: rules.floor_y + 10,
            },
            &rules,
        );
        assert!(w.prop.alive);
    }

    #[test]
    fn dead_prop_cannot_be_grabbed() {
        let (mut w, rules) = world();
        w.prop.destroy();
        w.apply(PointerAction::Grab { x: 10, y: 10 }, &rules);
        assert!(!w.drag.prop_held);
    }

    #[test]
    fn wandering_pet_eventually_wakes() {
        let (mut w, _) = world();
        w.pet.wander();
        let mut rounds = 0;
        while w.pet.behavior == Behavior::Wandering && rounds < 10_000 {
            w.wander_check();
            rounds += 1;
        }
        assert_eq!(w.pet.behavior, Behavior::Idle);
        assert_ne!(w.pet.body.vx, 0);
    }

    #[test]
    fn idle_pet_eventually_wanders() {
        let (mut w, _) = world();
        let mut rounds = 0;
        while w.pet.behavior == Behavior::Idle && rounds < 30_000 {
            w.wander_check();
            rounds += 1;
        }
        assert_eq!(w.pet.behavior, Behavior::Wandering);
        assert_eq!(w.pet.body.vx, 0);
    }

    #[test]
    fn sleeping_pet_does_not_wander_or_kick() {
        let (mut w, rules) = world();
        w.pet.pass_out();
        w.pet.needs.sleep = MAX_SLEEP; // plenty left, stays asleep
        w.pet.body.x = 100;
        w.pet.body.y = rules.floor_y;
        w.prop.body.x = 130;
        w.prop.body.y = rules.obj_floor_y;

        for _ in 0..100 {
            w.tick_fixed_step(&rules);
        }
        assert_eq!(w.pet.behavior, Behavior::Sleeping);
        // ball untouched right under its nose
        assert_eq!((w.prop.body.vx, w.prop.body.vy), (0, 0));
    }
}
