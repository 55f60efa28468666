use citizen_pac::error::{ArenaError, GameError, LayoutError, SceneError};
use pretty_assertions::assert_eq;

#[test]
fn test_game_error_from_scene_error() {
    let game_error: GameError = SceneError::DuplicatePlayer.into();
    assert!(matches!(game_error, GameError::Scene(SceneError::DuplicatePlayer)));
}

#[test]
fn test_game_error_from_layout_error() {
    let layout_error = LayoutError::ArenaTooSmall {
        axis: "width",
        size: 150.0,
        pitch: 100.0,
    };
    let game_error: GameError = layout_error.into();
    assert!(matches!(game_error, GameError::Layout(_)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SceneError::DuplicatePlayer.to_string(),
        "There can only be one player per scene"
    );
    assert_eq!(SceneError::AdversaryIndex(4).to_string(), "Adversary not found: 4");
    assert_eq!(
        GameError::from(ArenaError::InvalidDimensions { width: 0.5, height: 600.0 }).to_string(),
        "Arena error: Arena dimensions must be finite and at least 1.0, got 0.5x600"
    );
    assert_eq!(
        GameError::from(LayoutError::ArenaTooSmall {
            axis: "height",
            size: 150.0,
            pitch: 100.0
        })
        .to_string(),
        "Layout error: Arena height of 150 must exceed twice the cell pitch (100)"
    );
    assert_eq!(
        LayoutError::TooManyCells {
            nx: 800,
            ny: 600,
            max: 65_536
        }
        .to_string(),
        "A 800x600 pickup grid exceeds the limit of 65536 cells"
    );
}
