use serde::{Deserialize, Serialize};

use crate::logic::board::{corner_assignments, ConfigError, PlayerColor};

/// Corner directly across the board.
#[must_use]
pub const fn opposite_corner(corner: u8) -> u8 {
    (corner + 3) % 6
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: PlayerColor,
    /// Home corner, where the player's pieces start.
    pub corner: u8,
    /// Corner the player must fill to win.
    pub target_corner: u8,
    pub is_ai: bool,
    pub name: String,
}

impl Player {
    /// A player racing toward the corner opposite its home.
    #[must_use]
    pub fn new(color: PlayerColor, corner: u8, is_ai: bool, name: impl Into<String>) -> Self {
        Self {
            color,
            corner,
            target_corner: opposite_corner(corner),
            is_ai,
            name: name.into(),
        }
    }
}

/// Default roster for `player_count` players: colors in seating order,
/// corners from [`corner_assignments`], first seat human and the rest AI.
pub fn create_players(player_count: usize) -> Result<Vec<Player>, ConfigError> {
    let corners = corner_assignments(player_count)?;
    Ok(corners
        .iter()
        .zip(PlayerColor::ALL)
        .enumerate()
        .map(|(i, (&corner, color))| Player::new(color, corner, i > 0, format!("Player {}", i + 1)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_corner() {
        assert_eq!(opposite_corner(0), 3);
        assert_eq!(opposite_corner(3), 0);
        assert_eq!(opposite_corner(5), 2);
    }

    #[test]
    fn test_create_players_two() {
        let players = create_players(2).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].color, PlayerColor::Red);
        assert_eq!(players[0].corner, 0);
        assert_eq!(players[0].target_corner, 3);
        assert!(!players[0].is_ai);
        assert_eq!(players[1].color, PlayerColor::Blue);
        assert_eq!(players[1].corner, 3);
        assert_eq!(players[1].target_corner, 0);
        assert!(players[1].is_ai);
    }

    #[test]
    fn test_create_players_rejects_five() {
        assert_eq!(
            create_players(5),
            Err(ConfigError::UnsupportedPlayerCount(5))
        );
    }

    #[test]
    fn test_six_player_targets_are_assigned_corners() {
        let players = create_players(6).unwrap();
        for player in &players {
            assert!(players.iter().any(|p| p.corner == player.target_corner));
        }
    }
}
