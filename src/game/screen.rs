//! Game Screen
//!
//! Owns every entity on the play field and runs the frame loop. A frame is
//! two calls from the shell:
//!
//! 1. `update` mutates state: camera, entities, touch movement, coin refill,
//!    collisions, HUD, game over check.
//! 2. `draw` reads the result and fills a draw list; it never mutates.
//!
//! States: Active, Paused (nothing moves) and Terminal (health ran out).
//! Terminal is final; the shell drops the screen and shows game over.

use macroquad::logging::{debug, info};
use macroquad::math::Vec2;
use macroquad::prelude::Color;
use rand::rngs::StdRng;
use rand::Rng;
use crate::config::GameConfig;
use crate::hud::{Hud, PauseMenu};
use crate::input::FrameInput;
use crate::render::DrawList;
use super::camera::{ScreenCamera, Viewport};
use super::collision::run_collisions;
use super::constants::BACKGROUND;
use super::entity::{Coin, Enemy, Player};
use super::event::{CoinsCollectedEvent, CoinsSpawnedEvent, Events, PlayerHitEvent};
use super::movement::step_toward;
use super::spawn::CoinSpawner;

/// Where the screen is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Active,
    Paused,
    Terminal,
}

/// Final numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub coins_collected: u32,
    pub frames: u64,
}

/// What the shell should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Keep showing this screen
    Stay,
    /// Health ran out: drop this screen and show game over
    GameOver(RunSummary),
}

/// The play field and its frame loop
pub struct GameScreen<R: Rng = StdRng> {
    camera: ScreenCamera,
    player: Player,
    enemy: Enemy,
    coins: Vec<Coin>,
    spawner: CoinSpawner,
    hud: Hud,
    pause_menu: PauseMenu,
    rng: R,
    state: ScreenState,
    frame: u64,
    events: Events,
    enemy_damage: i32,
    debug_log: bool,
}

impl<R: Rng> GameScreen<R> {
    /// Build a screen and place the first coin batch.
    ///
    /// `rng` drives coin placement and the pause colors; pass a seeded
    /// generator for a reproducible run.
    pub fn new(config: &GameConfig, viewport: Viewport, mut rng: R) -> Self {
        let density = viewport.density;
        let camera = ScreenCamera::new(viewport);

        let player = Player::new(
            viewport.center(),
            Vec2::splat(config.player_speed * density),
            config.initial_health,
            viewport.player_size(),
        );
        let enemy = Enemy::new(
            Vec2::new(config.enemy_start.0, config.enemy_start.1),
            Vec2::splat(config.enemy_speed * density),
            viewport.enemy_size(),
        );
        let pause_menu = PauseMenu::new(density, rng.gen());

        let mut screen = Self {
            camera,
            hud: Hud::new(player.health.current, density),
            player,
            enemy,
            coins: Vec::new(),
            spawner: CoinSpawner::new(config.max_coin_batch, config.max_coin_speed),
            pause_menu,
            rng,
            state: ScreenState::Active,
            frame: 0,
            events: Events::new(),
            enemy_damage: config.enemy_damage,
            debug_log: config.debug_log,
        };
        screen.generate_coins();

        info!(
            "Game screen {}x{} (density {:.2}): {} coins in first batch",
            viewport.width, viewport.height, density, screen.coins.len()
        );
        screen
    }

    fn generate_coins(&mut self) {
        let viewport = self.camera.viewport();
        let batch = self.spawner.generate_coins(&mut self.rng, &viewport);
        let count = batch.len() as u32;
        self.coins.extend(batch);
        self.events.coins_spawned.send(CoinsSpawnedEvent {
            count,
            batch: self.spawner.batches(),
        });
        if self.debug_log {
            debug!("SPAWN|batch:{}|count:{}", self.spawner.batches(), count);
        }
    }

    /// Advance one frame
    pub fn update(&mut self, input: &FrameInput) -> ScreenTransition {
        match self.state {
            ScreenState::Terminal => return ScreenTransition::Stay,
            ScreenState::Paused => {
                if input.pause_pressed {
                    self.state = ScreenState::Active;
                    info!("Resumed at frame {}", self.frame);
                } else {
                    self.pause_menu.change_color();
                }
                return ScreenTransition::Stay;
            }
            ScreenState::Active => {
                if input.pause_pressed {
                    self.state = ScreenState::Paused;
                    self.pause_menu.change_color();
                    info!("Paused at frame {}", self.frame);
                    return ScreenTransition::Stay;
                }
            }
        }

        self.frame += 1;
        self.events.clear_all();
        let viewport = self.camera.viewport();

        self.camera.update();
        self.player.update(self.frame);
        self.enemy.update(self.frame, &viewport);
        for coin in &mut self.coins {
            coin.update(self.frame);
        }

        if let Some(touch) = input.touch {
            let target = self.camera.unproject(touch);
            let next = step_toward(self.player.position, self.player.velocity, target);
            self.player.set_position(next.x, next.y);
            self.player.update(self.frame);
        }

        if self.coins.is_empty() {
            self.generate_coins();
        }

        let position_before = self.player.position;
        let report = run_collisions(
            &mut self.player,
            &mut self.coins,
            &mut self.enemy,
            viewport.respawn_point(),
            self.enemy_damage,
        );

        if report.coins_collected > 0 {
            self.events.coins_collected.send(CoinsCollectedEvent {
                count: report.coins_collected,
                total: self.player.coins_collected,
            });
        }
        if report.enemy_hit {
            self.events.player_hit.send(PlayerHitEvent {
                position: position_before,
                health_left: self.player.health.current,
            });
            self.hud.set_health(self.player.health.current);
        }
        self.hud.set_coin_label(self.player.coins_collected);

        if self.debug_log && (report.coins_collected > 0 || report.enemy_hit) {
            debug!(
                "COL|frame:{}|coins:+{}={}|hit:{}|hp:{}|enemy_vel:({:.1},{:.1})",
                self.frame,
                report.coins_collected,
                self.player.coins_collected,
                if report.enemy_hit { "Y" } else { "N" },
                self.player.health.current,
                self.enemy.velocity.x,
                self.enemy.velocity.y
            );
        }

        if self.player.health.is_dead() {
            self.state = ScreenState::Terminal;
            let summary = RunSummary {
                coins_collected: self.player.coins_collected,
                frames: self.frame,
            };
            info!(
                "Game over after {} frames with {} coins",
                summary.frames, summary.coins_collected
            );
            return ScreenTransition::GameOver(summary);
        }

        ScreenTransition::Stay
    }

    /// Emit this frame's draw commands. Read-only.
    pub fn draw(&self, list: &mut DrawList) {
        let [r, g, b, a] = BACKGROUND;
        list.clear(Color::new(r, g, b, a));

        self.hud.draw(list);

        let player_size = Vec2::splat(self.player.size);
        list.sprite(self.player.sprite(), self.camera.project_rect(self.player.position, player_size));

        let enemy_size = Vec2::splat(self.enemy.size);
        list.sprite(self.enemy.sprite(), self.camera.project_rect(self.enemy.position, enemy_size));

        for coin in &self.coins {
            let size = Vec2::new(coin.width, coin.height);
            list.sprite(coin.sprite(), self.camera.project_rect(coin.position, size));
        }

        if self.state == ScreenState::Paused {
            self.pause_menu.draw(list);
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Events from the last active frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Coin batches generated so far, counting the one at construction
    pub fn batches(&self) -> u32 {
        self.spawner.batches()
    }

    pub fn viewport(&self) -> Viewport {
        self.camera.viewport()
    }

    #[cfg(test)]
    pub(crate) fn coins_mut(&mut self) -> &mut Vec<Coin> {
        &mut self.coins
    }

    #[cfg(test)]
    pub(crate) fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SpriteKind;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn viewport() -> Viewport {
        Viewport::new(480.0, 800.0, 1.0).unwrap()
    }

    fn seeded(seed: u64) -> GameScreen<StdRng> {
        GameScreen::new(&GameConfig::default(), viewport(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_first_batch_in_range() {
        for seed in 0..50 {
            let screen = seeded(seed);
            assert!(screen.coins().len() <= 9);
            assert_eq!(screen.batches(), 1);
            for coin in screen.coins() {
                assert!(coin.position.x + coin.width <= 480.0);
                assert!(coin.position.y + coin.height <= 800.0);
            }
        }
    }

    #[test]
    fn test_empty_first_batch_refills_next_frame() {
        // An all-zero generator always draws a batch size of zero
        let mut screen = GameScreen::new(&GameConfig::default(), viewport(), StepRng::new(0, 0));
        assert!(screen.coins().is_empty());
        assert_eq!(screen.batches(), 1);

        screen.update(&FrameInput::default());
        assert_eq!(screen.batches(), 2);
        assert_eq!(screen.events().coins_spawned.len(), 1);

        let mut list = DrawList::new();
        screen.draw(&mut list);
        assert_eq!(list.sprites_of(SpriteKind::Coin).count(), 0);
    }

    #[test]
    fn test_refill_happens_before_draw() {
        let mut screen = seeded(11);
        screen.coins_mut().clear();

        screen.update(&FrameInput::default());
        assert_eq!(screen.batches(), 2);

        let mut list = DrawList::new();
        screen.draw(&mut list);
        assert_eq!(list.sprites_of(SpriteKind::Coin).count(), screen.coins().len());
    }

    #[test]
    fn test_no_refill_while_coins_remain() {
        let mut screen = seeded(1);
        screen.coins_mut().clear();
        screen.coins_mut().push(Coin::new(Vec2::new(400.0, 700.0), Vec2::ONE, 24.0));

        screen.update(&FrameInput::default());
        assert_eq!(screen.batches(), 1);
        assert_eq!(screen.coins().len(), 1);
    }

    #[test]
    fn test_touch_steps_each_axis() {
        let mut screen = seeded(2);
        // Player starts at (240, 400). Screen (400, 700) is world (400, 100):
        // right of the player and below it.
        screen.update(&FrameInput::touch_at(400.0, 700.0));
        assert_eq!(screen.player().position, Vec2::new(245.0, 395.0));
    }

    #[test]
    fn test_no_touch_no_movement() {
        let mut screen = seeded(2);
        screen.update(&FrameInput::default());
        assert_eq!(screen.player().position, Vec2::new(240.0, 400.0));
    }

    #[test]
    fn test_coin_pickup_updates_counter_and_hud() {
        let mut screen = seeded(3);
        let player_pos = screen.player().position;
        screen.coins_mut().clear();
        screen.coins_mut().push(Coin::new(player_pos, Vec2::ONE, 24.0));
        screen.coins_mut().push(Coin::new(player_pos + Vec2::new(10.0, 0.0), Vec2::ONE, 24.0));
        screen.coins_mut().push(Coin::new(Vec2::new(400.0, 700.0), Vec2::ONE, 24.0));

        screen.update(&FrameInput::default());

        assert_eq!(screen.player().coins_collected, 2);
        assert_eq!(screen.coins().len(), 1);
        assert_eq!(screen.hud().coin_label(), "Coins: 2");
        let event = screen.events().coins_collected.iter().next().copied();
        assert_eq!(event, Some(CoinsCollectedEvent { count: 2, total: 2 }));
    }

    #[test]
    fn test_enemy_hits_until_game_over() {
        let config = GameConfig { initial_health: 30, ..Default::default() };
        let mut screen = GameScreen::new(&config, viewport(), StdRng::seed_from_u64(4));
        let respawn = viewport().respawn_point();

        let mut expected_velocity = screen.enemy().velocity;
        for hit in 1..=3 {
            let player_pos = screen.player().position;
            screen.enemy_mut().position = player_pos;

            let transition = screen.update(&FrameInput::default());
            expected_velocity = -expected_velocity;

            assert_eq!(screen.player().health.current, 30 - 10 * hit);
            assert_eq!(screen.player().position, respawn);
            assert_eq!(screen.enemy().velocity, expected_velocity);
            if hit < 3 {
                assert_eq!(transition, ScreenTransition::Stay);
                assert_eq!(screen.state(), ScreenState::Active);
            } else {
                assert!(matches!(transition, ScreenTransition::GameOver(_)));
                assert_eq!(screen.state(), ScreenState::Terminal);
            }
        }
        assert_eq!(screen.hud().health_label(), "Health: 0");

        // Terminal is final
        let frame = screen.frame();
        assert_eq!(screen.update(&FrameInput::touch_at(0.0, 0.0)), ScreenTransition::Stay);
        assert_eq!(screen.frame(), frame);
        assert_eq!(screen.player().position, respawn);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut screen = seeded(5);
        let enemy_before = screen.enemy().position;

        screen.update(&FrameInput::pause());
        assert_eq!(screen.state(), ScreenState::Paused);

        screen.update(&FrameInput::touch_at(0.0, 0.0));
        screen.update(&FrameInput::touch_at(0.0, 0.0));
        assert_eq!(screen.frame(), 0);
        assert_eq!(screen.player().position, Vec2::new(240.0, 400.0));
        assert_eq!(screen.enemy().position, enemy_before);

        let mut list = DrawList::new();
        screen.draw(&mut list);
        assert!(list.label_texts().any(|t| t == "[PAUSE]"));

        screen.update(&FrameInput::pause());
        assert_eq!(screen.state(), ScreenState::Active);
        screen.update(&FrameInput::default());
        assert_eq!(screen.frame(), 1);
    }

    #[test]
    fn test_draw_order_and_projection() {
        let screen = seeded(6);
        let mut list = DrawList::new();
        screen.draw(&mut list);

        let commands = list.commands();
        assert!(matches!(commands[0], crate::render::DrawCommand::Clear(_)));
        assert_eq!(
            list.label_texts().collect::<Vec<_>>(),
            vec!["Coins: 0", "Health: 100"]
        );

        // Player at world (240, 400), 32px: top edge is 800 - 400 - 32 = 368
        let player_rect = list.sprites_of(SpriteKind::Player).next().copied();
        assert_eq!(player_rect, Some(macroquad::math::Rect::new(240.0, 368.0, 32.0, 32.0)));
        assert_eq!(list.sprites_of(SpriteKind::Enemy).count(), 1);
        assert_eq!(list.sprites_of(SpriteKind::Coin).count(), screen.coins().len());
    }
}
