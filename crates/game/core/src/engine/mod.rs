//! Battle state machine.
//!
//! [`BattleState`] is the authoritative reducer for a battle. Callers feed it
//! one half-round at a time ([`BattleState::player_turn`] or
//! [`BattleState::enemy_turn`]); every call fully commits its mutations and
//! runs the end-of-turn check before returning the [`BattleEvent`]s it
//! produced.

mod errors;
mod events;
mod turns;

pub use errors::BattleError;
pub use events::BattleEvent;
pub use turns::{BattleStatus, PlayerAction, TurnOwner};

use crate::actor::{Character, Enemy, Player};
use crate::config::GameConfig;
use crate::env::RngOracle;

/// Complete state of one battle: the player, the roster and whose turn it is.
#[derive(Clone, Debug)]
pub struct BattleState {
    player: Player,
    enemies: Vec<Enemy>,
    round_number: usize,
    is_player_turn: bool,
    status: BattleStatus,
}

impl BattleState {
    /// Builds the roster described by `config`, in order.
    pub fn roster(config: &GameConfig, rng: &mut (impl RngOracle + ?Sized)) -> Vec<Enemy> {
        config
            .roster
            .iter()
            .map(|spec| Enemy::from_spec(spec, rng))
            .collect()
    }

    pub fn new(player: Player, enemies: Vec<Enemy>) -> Result<Self, BattleError> {
        if enemies.is_empty() {
            return Err(BattleError::EmptyRoster);
        }
        Ok(Self {
            player,
            enemies,
            round_number: 0,
            is_player_turn: false,
            status: BattleStatus::NotStarted,
        })
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Zero-based round; equals the number of enemies defeated so far.
    pub fn round_number(&self) -> usize {
        self.round_number
    }

    /// The enemy being fought, `None` once the roster is exhausted.
    pub fn current_enemy(&self) -> Option<&Enemy> {
        self.enemies.get(self.round_number)
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    /// Who acts next, or `None` when the battle is not in progress.
    pub fn turn_owner(&self) -> Option<TurnOwner> {
        if self.status != BattleStatus::InProgress {
            return None;
        }
        Some(if self.is_player_turn {
            TurnOwner::Player
        } else {
            TurnOwner::Enemy
        })
    }

    /// Starts the battle and opens the first round.
    pub fn begin(&mut self) -> Result<Vec<BattleEvent>, BattleError> {
        if self.status != BattleStatus::NotStarted {
            return Err(BattleError::CannotBegin {
                status: self.status,
            });
        }
        self.status = BattleStatus::InProgress;

        let mut events = Vec::new();
        self.start_round(&mut events)?;
        Ok(events)
    }

    /// Resolves the player's half-round.
    pub fn player_turn(
        &mut self,
        action: PlayerAction,
        rng: &mut dyn RngOracle,
    ) -> Result<Vec<BattleEvent>, BattleError> {
        self.ensure_turn(TurnOwner::Player)?;

        let mut events = Vec::new();
        match action {
            PlayerAction::Attack => {
                let damage = self.player.attack_value(rng);
                let enemy = self.current_enemy_mut()?;
                enemy.apply_damage(damage_amount(damage));
                events.push(BattleEvent::PlayerAttacked {
                    enemy: enemy.name().to_string(),
                    damage,
                });
                events.push(BattleEvent::HealthReported(enemy.describe_health()));
            }
            PlayerAction::UsePotion(Some(index)) => {
                let potion = self.player.use_potion(index)?;
                events.push(BattleEvent::PotionUsed(potion));
            }
            PlayerAction::UsePotion(None) => {
                if let Some(potions) = self.player.inventory() {
                    return Err(BattleError::PotionNotSelected {
                        available: potions.len(),
                    });
                }
                events.push(BattleEvent::NoPotions);
            }
        }

        self.end_of_turn(&mut events)?;
        Ok(events)
    }

    /// Resolves the current enemy's half-round.
    pub fn enemy_turn(&mut self, rng: &mut dyn RngOracle) -> Result<Vec<BattleEvent>, BattleError> {
        self.ensure_turn(TurnOwner::Enemy)?;

        let enemy = self.current_enemy().ok_or(BattleError::MissingEnemy {
            round: self.round_number,
        })?;
        let damage = enemy.attack_value(rng);
        let enemy_name = enemy.name().to_string();

        self.player.apply_damage(damage_amount(damage));

        let mut events = vec![
            BattleEvent::EnemyAttacked {
                enemy: enemy_name,
                damage,
            },
            BattleEvent::HealthReported(self.player.describe_health()),
        ];
        self.end_of_turn(&mut events)?;
        Ok(events)
    }

    /// Marks an unfinished battle as aborted. Terminal battles are left as is.
    pub fn abort(&mut self) {
        if !self.status.is_terminal() {
            self.status = BattleStatus::Aborted;
        }
    }

    fn ensure_turn(&self, actor: TurnOwner) -> Result<(), BattleError> {
        match self.turn_owner() {
            None => Err(BattleError::NotInProgress {
                status: self.status,
            }),
            Some(expected) if expected != actor => Err(BattleError::OutOfTurn { expected }),
            Some(_) => Ok(()),
        }
    }

    fn current_enemy_mut(&mut self) -> Result<&mut Enemy, BattleError> {
        let round = self.round_number;
        self.enemies
            .get_mut(round)
            .ok_or(BattleError::MissingEnemy { round })
    }

    /// Decides initiative and announces the round.
    fn start_round(&mut self, events: &mut Vec<BattleEvent>) -> Result<(), BattleError> {
        let round = self.round_number;
        let enemy = self
            .enemies
            .get(round)
            .ok_or(BattleError::MissingEnemy { round })?;

        // Ties go to the enemy.
        self.is_player_turn = self.player.agility() > enemy.agility();

        events.push(BattleEvent::StatsShown(self.player.snapshot()));
        events.push(BattleEvent::EnemyAppeared {
            round,
            description: enemy.describe_appearance(),
            player_first: self.is_player_turn,
        });
        Ok(())
    }

    fn end_of_turn(&mut self, events: &mut Vec<BattleEvent>) -> Result<(), BattleError> {
        let player_alive = self.player.is_alive();
        let enemy_alive = self.current_enemy_mut()?.is_alive();

        match (player_alive, enemy_alive) {
            (true, true) => {
                self.is_player_turn = !self.is_player_turn;
            }
            (true, false) => {
                let enemy = self.current_enemy_mut()?;
                let name = enemy.name().to_string();
                let reward = enemy.take_reward();

                events.push(BattleEvent::EnemyDefeated { enemy: name });
                if let Some(potion) = reward {
                    self.player.add_potion(potion);
                    events.push(BattleEvent::RewardClaimed(potion));
                }

                self.round_number += 1;
                if self.round_number < self.enemies.len() {
                    self.start_round(events)?;
                } else {
                    self.status = BattleStatus::PlayerWon;
                    events.push(BattleEvent::PlayerWon);
                }
            }
            (false, _) => {
                self.status = BattleStatus::PlayerDefeated;
                events.push(BattleEvent::PlayerDefeated);
            }
        }
        Ok(())
    }
}

fn damage_amount(damage: u32) -> i32 {
    i32::try_from(damage).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::CharacterStats;
    use crate::env::{PcgRng, SequenceRng};
    use crate::item::{Potion, PotionKind};

    fn enemy(name: &str, health: u32, agility: u32, reward: Potion) -> Enemy {
        Enemy::from_parts(CharacterStats::new(name, health, 9, agility), "stick", reward)
    }

    fn player(health: u32, strength: u32, agility: u32, inventory: Vec<Potion>) -> Player {
        Player::from_parts(CharacterStats::new("Dave", health, strength, agility), inventory)
    }

    fn defeated_count(events: &[BattleEvent]) -> usize {
        events
            .iter()
            .filter(|event| matches!(event, BattleEvent::EnemyDefeated { .. }))
            .count()
    }

    /// Attacks every player turn until the battle ends.
    fn run_to_end(state: &mut BattleState, rng: &mut dyn RngOracle) -> Vec<BattleEvent> {
        let mut log = state.begin().expect("battle begins");
        for _ in 0..10_000 {
            let events = match state.turn_owner() {
                Some(TurnOwner::Player) => state.player_turn(PlayerAction::Attack, rng),
                Some(TurnOwner::Enemy) => state.enemy_turn(rng),
                None => return log,
            };
            log.extend(events.expect("turn resolves"));
        }
        panic!("battle did not terminate");
    }

    #[test]
    fn new_rejects_empty_roster() {
        let err = BattleState::new(player(100, 9, 9, Vec::new()), Vec::new()).unwrap_err();
        assert_eq!(err, BattleError::EmptyRoster);
    }

    #[test]
    fn default_roster_is_goblin_orc_skeleton() {
        let mut rng = PcgRng::new(3);
        let roster = BattleState::roster(&GameConfig::default(), &mut rng);
        let names: Vec<_> = roster.iter().map(|e| (e.name(), e.weapon())).collect();
        assert_eq!(
            names,
            vec![("goblin", "sword"), ("orc", "baseball bat"), ("skeleton", "axe")]
        );
    }

    #[test]
    fn begin_announces_round_and_decides_initiative() {
        let reward = Potion::new(PotionKind::Health, 30);
        let mut state = BattleState::new(
            player(100, 9, 10, Vec::new()),
            vec![enemy("goblin", 50, 9, reward)],
        )
        .expect("state");

        let events = state.begin().expect("begin");
        assert_eq!(state.status(), BattleStatus::InProgress);
        assert!(matches!(events[0], BattleEvent::StatsShown(_)));
        assert_eq!(
            events[1],
            BattleEvent::EnemyAppeared {
                round: 0,
                description: "A goblin holding a stick has appeared!".to_string(),
                player_first: true,
            }
        );
        assert_eq!(state.turn_owner(), Some(TurnOwner::Player));

        assert_eq!(
            state.begin().unwrap_err(),
            BattleError::CannotBegin {
                status: BattleStatus::InProgress
            }
        );
    }

    #[test]
    fn agility_tie_favours_the_enemy() {
        let reward = Potion::new(PotionKind::Health, 30);
        let mut state = BattleState::new(
            player(100, 9, 9, Vec::new()),
            vec![enemy("goblin", 50, 9, reward)],
        )
        .expect("state");
        state.begin().expect("begin");
        assert_eq!(state.turn_owner(), Some(TurnOwner::Enemy));
    }

    #[test]
    fn attack_damages_enemy_and_passes_the_turn() {
        let reward = Potion::new(PotionKind::Health, 30);
        let mut state = BattleState::new(
            player(100, 10, 20, Vec::new()),
            vec![enemy("goblin", 50, 9, reward)],
        )
        .expect("state");
        state.begin().expect("begin");

        // Raw 3 → 5 + 3 = 8 damage.
        let mut rng = SequenceRng::new([3]);
        let events = state
            .player_turn(PlayerAction::Attack, &mut rng)
            .expect("attack");

        assert_eq!(
            events,
            vec![
                BattleEvent::PlayerAttacked {
                    enemy: "goblin".to_string(),
                    damage: 8,
                },
                BattleEvent::HealthReported("goblin's health is now 42!".to_string()),
            ]
        );
        assert_eq!(state.turn_owner(), Some(TurnOwner::Enemy));

        let err = state
            .player_turn(PlayerAction::Attack, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            BattleError::OutOfTurn {
                expected: TurnOwner::Enemy
            }
        );
    }

    #[test]
    fn empty_bag_still_spends_the_turn() {
        let reward = Potion::new(PotionKind::Health, 30);
        let mut state = BattleState::new(
            player(100, 10, 20, Vec::new()),
            vec![enemy("goblin", 50, 9, reward)],
        )
        .expect("state");
        state.begin().expect("begin");

        let mut rng = SequenceRng::new([0]);
        let events = state
            .player_turn(PlayerAction::UsePotion(None), &mut rng)
            .expect("no potion");
        assert_eq!(events, vec![BattleEvent::NoPotions]);
        assert_eq!(state.turn_owner(), Some(TurnOwner::Enemy));
    }

    #[test]
    fn potion_turns_apply_the_chosen_potion() {
        let reward = Potion::new(PotionKind::Health, 30);
        let strength = Potion::new(PotionKind::Strength, 8);
        let mut state = BattleState::new(
            player(100, 10, 20, vec![Potion::new(PotionKind::Health, 35), strength]),
            vec![enemy("goblin", 50, 9, reward)],
        )
        .expect("state");
        state.begin().expect("begin");
        let mut rng = SequenceRng::new([0]);

        let err = state
            .player_turn(PlayerAction::UsePotion(None), &mut rng)
            .unwrap_err();
        assert_eq!(err, BattleError::PotionNotSelected { available: 2 });

        let err = state
            .player_turn(PlayerAction::UsePotion(Some(2)), &mut rng)
            .unwrap_err();
        assert!(matches!(err, BattleError::Inventory(_)));
        assert_eq!(state.turn_owner(), Some(TurnOwner::Player));

        let events = state
            .player_turn(PlayerAction::UsePotion(Some(1)), &mut rng)
            .expect("drink");
        assert_eq!(events, vec![BattleEvent::PotionUsed(strength)]);
        assert_eq!(state.player().strength(), 18);
        assert_eq!(state.player().snapshot().potions, 1);
    }

    #[test]
    fn defeating_an_enemy_moves_the_reward_and_opens_next_round() {
        let goblin_reward = Potion::new(PotionKind::Agility, 7);
        let mut state = BattleState::new(
            player(100, 10, 20, Vec::new()),
            vec![
                enemy("goblin", 5, 9, goblin_reward),
                enemy("orc", 50, 30, Potion::new(PotionKind::Health, 30)),
            ],
        )
        .expect("state");
        state.begin().expect("begin");

        let mut rng = SequenceRng::new([9]);
        let events = state
            .player_turn(PlayerAction::Attack, &mut rng)
            .expect("attack");

        assert!(events.contains(&BattleEvent::EnemyDefeated {
            enemy: "goblin".to_string()
        }));
        assert!(events.contains(&BattleEvent::RewardClaimed(goblin_reward)));
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.current_enemy().map(|e| e.name()), Some("orc"));
        assert!(state.enemies()[0].reward().is_none());
        assert_eq!(
            state.player().inventory().expect("reward"),
            &[goblin_reward]
        );
        // Orc is faster, so the new round opens on the enemy's turn.
        assert_eq!(state.turn_owner(), Some(TurnOwner::Enemy));
        assert!(matches!(
            events.last(),
            Some(BattleEvent::EnemyAppeared {
                round: 1,
                player_first: false,
                ..
            })
        ));
    }

    #[test]
    fn strong_player_wins_after_exactly_three_defeats() {
        let mut rng = PcgRng::new(11);
        let enemies = BattleState::roster(&GameConfig::default(), &mut rng);
        let mut state =
            BattleState::new(player(100, 200, 100, Vec::new()), enemies).expect("state");

        let log = run_to_end(&mut state, &mut rng);

        assert_eq!(state.status(), BattleStatus::PlayerWon);
        assert_eq!(defeated_count(&log), 3);
        assert_eq!(log.last(), Some(&BattleEvent::PlayerWon));
        assert_eq!(state.round_number(), 3);
        assert!(state.current_enemy().is_none());
        assert_eq!(state.player().snapshot().potions, 3);
        assert_eq!(state.turn_owner(), None);
    }

    #[test]
    fn fragile_player_is_defeated() {
        let mut rng = PcgRng::new(12);
        let enemies = BattleState::roster(&GameConfig::default(), &mut rng);
        let mut state = BattleState::new(player(1, 7, 0, Vec::new()), enemies).expect("state");

        let log = run_to_end(&mut state, &mut rng);

        assert_eq!(state.status(), BattleStatus::PlayerDefeated);
        assert_eq!(defeated_count(&log), 0);
        assert_eq!(log.last(), Some(&BattleEvent::PlayerDefeated));
        assert_eq!(
            state.enemy_turn(&mut rng).unwrap_err(),
            BattleError::NotInProgress {
                status: BattleStatus::PlayerDefeated
            }
        );
    }

    #[test]
    fn seeded_battles_always_reach_a_terminal_state() {
        for seed in 0..200 {
            let mut rng = PcgRng::new(seed);
            let enemies = BattleState::roster(&GameConfig::default(), &mut rng);
            let hero = Player::new("Dave", &mut rng);
            let mut state = BattleState::new(hero, enemies).expect("state");

            let log = run_to_end(&mut state, &mut rng);

            match state.status() {
                BattleStatus::PlayerWon => assert_eq!(defeated_count(&log), 3),
                BattleStatus::PlayerDefeated => {
                    assert!(defeated_count(&log) < 3);
                    assert_eq!(state.player().health(), 0);
                }
                other => panic!("seed {seed} ended in {other}"),
            }
        }
    }

    #[test]
    fn abort_only_affects_unfinished_battles() {
        let reward = Potion::new(PotionKind::Health, 30);
        let mut state = BattleState::new(
            player(100, 9, 9, Vec::new()),
            vec![enemy("goblin", 50, 9, reward)],
        )
        .expect("state");
        state.begin().expect("begin");
        state.abort();
        assert_eq!(state.status(), BattleStatus::Aborted);
        assert_eq!(state.turn_owner(), None);
    }
}
