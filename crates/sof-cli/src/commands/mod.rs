pub mod play;
pub mod stats;

use sof_core::{FaceSource, GameRoom, Player};

/// Seat the named players in the order given.
fn seat_players<S: FaceSource>(room: &mut GameRoom<S>, names: &[String]) -> Result<(), String> {
    for name in names {
        room.add_player(Player::new(name.as_str()))
            .map_err(|e| e.to_string())?;
    }
    room.reset_scores();
    Ok(())
}
