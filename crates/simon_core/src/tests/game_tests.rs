use super::*;
use crate::domain::ScriptedColors;

fn game_with(colors: &[Color]) -> Game {
    Game::new(Box::new(ScriptedColors::new(colors.to_vec())))
}

/// Plays back the whole sequence so the player has the turn.
fn finish_playback(game: &mut Game) {
    while game.is_machine_turn() {
        game.end_pause();
        game.advance_playback();
        game.begin_pause();
    }
}

#[test]
fn starts_in_machine_turn_with_one_color() {
    let game = game_with(&[Color::Green]);
    assert_eq!(game.sequence().colors(), &[Color::Green]);
    assert_eq!(game.phase(), Phase::Playing { step: 0 });
    assert_eq!(game.turn(), Turn::Machine);
    assert!(game.is_paused());
    assert_eq!(game.highlighted(), None);
    assert_eq!(game.score(), 0);
}

#[test]
fn playback_highlights_each_color_then_hands_over_without_appending() {
    let mut game = game_with(&[Color::Red, Color::Blue]);
    finish_playback(&mut game);
    game.submit(Color::Red);
    assert_eq!(game.sequence().colors(), &[Color::Red, Color::Blue]);

    let mut seen = Vec::new();
    let mut transitions = Vec::new();
    while game.is_machine_turn() {
        assert_eq!(game.highlighted(), None, "paused gap shows nothing");
        game.end_pause();
        seen.extend(game.highlighted());
        transitions.push(game.advance_playback());
        game.begin_pause();
    }

    assert_eq!(seen, [Color::Red, Color::Blue]);
    assert_eq!(
        transitions,
        [
            PlaybackTransition::Continued { step: 1 },
            PlaybackTransition::HandedToPlayer
        ]
    );
    assert_eq!(game.phase(), Phase::Playing { step: 0 });
    assert_eq!(game.turn(), Turn::Player);
    assert_eq!(game.sequence().len(), 2);
}

#[test]
fn inputs_during_machine_turn_are_ignored() {
    let mut game = game_with(&[Color::Green]);
    let revision = game.revision();
    assert_eq!(game.submit(Color::Green), InputOutcome::Ignored);
    assert_eq!(game.submit(Color::Red), InputOutcome::Ignored);
    assert_eq!(game.phase(), Phase::Playing { step: 0 });
    assert_eq!(game.revision(), revision);
}

#[test]
fn completing_a_round_appends_one_color_and_returns_to_machine() {
    let mut game = game_with(&[Color::Green, Color::Yellow]);
    finish_playback(&mut game);

    assert_eq!(
        game.submit(Color::Green),
        InputOutcome::RoundComplete { score: 1 }
    );
    assert_eq!(game.sequence().colors(), &[Color::Green, Color::Yellow]);
    assert_eq!(game.turn(), Turn::Machine);
    assert_eq!(game.phase(), Phase::Playing { step: 0 });
    assert_eq!(game.snapshot().score, 1);
}

#[test]
fn round_completes_only_after_the_last_color() {
    let mut game = game_with(&[Color::Red, Color::Blue, Color::Green]);
    finish_playback(&mut game);
    game.submit(Color::Red);
    finish_playback(&mut game);

    assert_eq!(game.submit(Color::Red), InputOutcome::Advanced { step: 1 });
    assert_eq!(game.turn(), Turn::Player);
    assert_eq!(game.sequence().len(), 2);
    assert_eq!(
        game.submit(Color::Blue),
        InputOutcome::RoundComplete { score: 2 }
    );
    assert_eq!(game.sequence().len(), 3);
}

#[test]
fn wrong_color_loses_regardless_of_progress() {
    let mut game = game_with(&[Color::Green, Color::Yellow]);
    finish_playback(&mut game);
    game.submit(Color::Green);
    finish_playback(&mut game);

    assert_eq!(game.submit(Color::Red), InputOutcome::Lost { score: 1 });
    assert!(game.is_lost());
    assert_eq!(game.step(), None);
    assert_eq!(game.snapshot().score, 1);
    assert!(game.snapshot().lost);
}

#[test]
fn lost_is_terminal_until_restart() {
    let mut game = game_with(&[Color::Green, Color::Blue, Color::Red]);
    finish_playback(&mut game);
    game.submit(Color::Red);

    assert_eq!(game.submit(Color::Green), InputOutcome::Ignored);
    assert_eq!(game.advance_playback(), PlaybackTransition::Ignored);
    assert!(game.is_lost());

    game.restart();
    assert_eq!(game.phase(), Phase::Playing { step: 0 });
    assert_eq!(game.turn(), Turn::Machine);
    assert_eq!(game.sequence().colors(), &[Color::Blue]);
    assert_eq!(game.score(), 0);
}

#[test]
fn revision_moves_on_every_transition_but_not_on_pause() {
    let mut game = game_with(&[Color::Green]);
    let start = game.revision();
    game.end_pause();
    game.begin_pause();
    assert_eq!(game.revision(), start);

    game.advance_playback();
    assert_eq!(game.revision(), start + 1);
    game.submit(Color::Green);
    assert_eq!(game.revision(), start + 2);
    game.restart();
    assert_eq!(game.revision(), start + 3);
}

#[test]
fn snapshot_marks_the_revealed_button_as_shining() {
    let mut game = game_with(&[Color::Yellow]);
    assert!(!game.snapshot().is_shining(Color::Yellow));
    game.end_pause();
    let snapshot = game.snapshot();
    assert!(snapshot.is_shining(Color::Yellow));
    assert!(!snapshot.is_shining(Color::Blue));
    assert!(snapshot.machine_turn);
}
