//! Integration tests for winner resolution and the champion lookup.

use kickoff::{champion, match_winner, new_champion, GameMatch, MatchStatus, Stage};

fn played(stage: Stage, home: u32, away: u32, penalties: Option<(u32, u32)>) -> GameMatch {
    let mut m = GameMatch::new("home", "away", stage);
    m.home_score = Some(home);
    m.away_score = Some(away);
    if let Some((hp, ap)) = penalties {
        m.home_penalty = Some(hp);
        m.away_penalty = Some(ap);
    }
    m.status = MatchStatus::Finished;
    m
}

#[test]
fn unplayed_match_has_no_winner() {
    let m = GameMatch::new("home", "away", Stage::SemiFinal);
    assert_eq!(match_winner(&m), None);

    let mut half = GameMatch::new("home", "away", Stage::SemiFinal);
    half.home_score = Some(1);
    assert_eq!(match_winner(&half), None);
}

#[test]
fn higher_score_wins() {
    assert_eq!(match_winner(&played(Stage::Group, 2, 1, None)), Some("home"));
    assert_eq!(match_winner(&played(Stage::Group, 0, 3, None)), Some("away"));
}

#[test]
fn level_score_goes_to_penalties() {
    assert_eq!(match_winner(&played(Stage::Final, 1, 1, Some((5, 4)))), Some("home"));
    assert_eq!(match_winner(&played(Stage::Final, 1, 1, Some((3, 4)))), Some("away"));
}

#[test]
fn draw_without_penalties_has_no_winner() {
    assert_eq!(match_winner(&played(Stage::Group, 1, 1, None)), None);
}

#[test]
fn equal_penalties_have_no_winner() {
    assert_eq!(match_winner(&played(Stage::Final, 2, 2, Some((4, 4)))), None);
}

#[test]
fn penalties_ignored_when_score_decides() {
    assert_eq!(match_winner(&played(Stage::Final, 2, 1, Some((0, 5)))), Some("home"));
}

#[test]
fn champion_is_the_final_winner() {
    let semi = played(Stage::SemiFinal, 3, 0, None);
    let mut fin = GameMatch::new("home", "away", Stage::Final);
    assert_eq!(champion(&[semi.clone(), fin.clone()]), None);

    fin.home_score = Some(0);
    fin.away_score = Some(1);
    fin.status = MatchStatus::Finished;
    assert_eq!(champion(&[semi, fin]), Some("away"));
}

#[test]
fn new_champion_only_on_the_deciding_update() {
    let open = GameMatch::new("home", "away", Stage::Final);
    let mut decided = open.clone();
    decided.home_score = Some(2);
    decided.away_score = Some(0);
    decided.status = MatchStatus::Finished;

    assert_eq!(new_champion(&[open.clone()], &[open.clone()]), None);
    assert_eq!(new_champion(&[open], &[decided.clone()]), Some("home"));
    // A later unrelated edit leaves the champion as it was.
    let group = played(Stage::Group, 1, 0, None);
    assert_eq!(
        new_champion(&[decided.clone()], &[decided.clone(), group]),
        None
    );

    let mut overturned = decided.clone();
    overturned.home_score = Some(0);
    overturned.away_score = Some(1);
    assert_eq!(new_champion(&[decided], &[overturned]), Some("away"));
}
