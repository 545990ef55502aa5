//! Collision System
//!
//! Axis-aligned box overlap between the player and everything else.
//! Boxes come from each entity's position and size every frame; nothing
//! is cached between frames.

use macroquad::math::{Rect, Vec2};
use super::entity::{Coin, Enemy, Player};

/// Result of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Coins removed this pass
    pub coins_collected: u32,
    /// Did the player touch the enemy?
    pub enemy_hit: bool,
}

/// Strict overlap: boxes that only share an edge do not collide
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Remove every coin overlapping the player and credit them.
///
/// Each coin is tested exactly once per pass, so two overlapping neighbours
/// are both collected in the same frame. Returns the number removed.
pub fn collect_coins(player: &mut Player, coins: &mut Vec<Coin>) -> u32 {
    let player_box = player.bounds();
    let before = coins.len();
    coins.retain(|coin| !overlaps(&player_box, &coin.bounds()));
    let collected = (before - coins.len()) as u32;
    player.coins_collected += collected;
    collected
}

/// Resolve a player/enemy hit: respawn the player, apply damage, bounce the enemy.
///
/// Returns true if they overlapped.
pub fn resolve_enemy_hit(player: &mut Player, enemy: &mut Enemy, respawn: Vec2, damage: i32) -> bool {
    if !overlaps(&player.bounds(), &enemy.bounds()) {
        return false;
    }
    player.set_position(respawn.x, respawn.y);
    player.health.damage(damage);
    enemy.bounce();
    true
}

/// Full per-frame pass: coins first, then the enemy
pub fn run_collisions(
    player: &mut Player,
    coins: &mut Vec<Coin>,
    enemy: &mut Enemy,
    respawn: Vec2,
    damage: i32,
) -> CollisionReport {
    let coins_collected = collect_coins(player, coins);
    let enemy_hit = resolve_enemy_hit(player, enemy, respawn, damage);
    CollisionReport { coins_collected, enemy_hit }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Vec2::splat(5.0), 100, 32.0)
    }

    fn coin_at(x: f32, y: f32) -> Coin {
        Coin::new(Vec2::new(x, y), Vec2::ONE, 24.0)
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(overlaps(&a, &Rect::new(9.5, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn test_adjacent_overlapping_coins_both_collected() {
        let mut player = player_at(100.0, 100.0);
        // Two consecutive overlapping coins, then one far away
        let mut coins = vec![coin_at(100.0, 100.0), coin_at(110.0, 110.0), coin_at(400.0, 400.0)];

        let collected = collect_coins(&mut player, &mut coins);

        assert_eq!(collected, 2);
        assert_eq!(player.coins_collected, 2);
        assert_eq!(coins, vec![coin_at(400.0, 400.0)]);
    }

    #[test]
    fn test_collected_coins_not_counted_twice() {
        let mut player = player_at(100.0, 100.0);
        let mut coins = vec![coin_at(100.0, 100.0)];
        assert_eq!(collect_coins(&mut player, &mut coins), 1);
        assert_eq!(collect_coins(&mut player, &mut coins), 0);
        assert_eq!(player.coins_collected, 1);
    }

    #[test]
    fn test_enemy_hit_respawns_damages_and_bounces() {
        let mut player = player_at(60.0, 60.0);
        let mut enemy = Enemy::new(Vec2::new(50.0, 50.0), Vec2::new(3.0, 3.0), 40.0);
        let respawn = Vec2::new(208.0, 368.0);

        assert!(resolve_enemy_hit(&mut player, &mut enemy, respawn, 10));
        assert_eq!(player.position, respawn);
        assert_eq!(player.health.current, 90);
        assert_eq!(enemy.velocity, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_enemy_miss_changes_nothing() {
        let mut player = player_at(300.0, 300.0);
        let mut enemy = Enemy::new(Vec2::new(50.0, 50.0), Vec2::new(3.0, 3.0), 40.0);

        let report = run_collisions(&mut player, &mut Vec::new(), &mut enemy, Vec2::ZERO, 10);

        assert_eq!(report, CollisionReport::default());
        assert_eq!(player.position, Vec2::new(300.0, 300.0));
        assert_eq!(player.health.current, 100);
        assert_eq!(enemy.velocity, Vec2::new(3.0, 3.0));
    }
}
