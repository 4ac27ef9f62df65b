//! Integration tests for the legacy two-group bracket: fixed seeding table and
//! the early TBD final that is filled in as semi-finals finish.

use kickoff::{
    advance_knockouts, first_round_name, generate_fixtures, BracketConfig, GameMatch, MatchStatus,
    Stage, Team, TeamStats, TournamentFormat, TBD_TEAM_ID,
};

fn grouped_teams(per_group: usize) -> Vec<Team> {
    let mut teams = Vec::new();
    for g in ["A", "B"] {
        for i in 1..=per_group {
            teams.push(Team {
                id: format!("{g}{i}"),
                name: format!("{g}{i}"),
                group: Some(g.to_string()),
                stats: TeamStats::default(),
            });
        }
    }
    teams
}

fn win_home(m: &GameMatch) -> GameMatch {
    GameMatch {
        home_score: Some(1),
        away_score: Some(0),
        status: MatchStatus::Finished,
        ..m.clone()
    }
}

fn finish_where(matches: &[GameMatch], pick: impl Fn(&GameMatch) -> bool) -> Vec<GameMatch> {
    matches
        .iter()
        .map(|m| if pick(m) && !m.is_finished() { win_home(m) } else { m.clone() })
        .collect()
}

fn pairs(matches: &[GameMatch], stage: Stage) -> Vec<(&str, &str)> {
    matches
        .iter()
        .filter(|m| m.stage == stage)
        .map(|m| (m.home_team_id.as_str(), m.away_team_id.as_str()))
        .collect()
}

fn legacy(teams: &[Team], matches: &[GameMatch]) -> Vec<GameMatch> {
    advance_knockouts(teams, matches, &BracketConfig::LegacyTwoGroup)
}

fn groups_done(teams: &[Team]) -> Vec<GameMatch> {
    let fixtures = generate_fixtures(teams, TournamentFormat::GroupsKnockout);
    finish_where(&fixtures, |m| m.stage == Stage::Group)
}

#[test]
fn small_bracket_seeds_semis_and_schedules_tbd_final() {
    let teams = grouped_teams(4);
    let matches = legacy(&teams, &groups_done(&teams));

    assert!(pairs(&matches, Stage::QuarterFinal).is_empty());
    assert_eq!(pairs(&matches, Stage::SemiFinal), vec![("A1", "B2"), ("B1", "A2")]);
    assert_eq!(pairs(&matches, Stage::Final), vec![(TBD_TEAM_ID, TBD_TEAM_ID)]);

    assert_eq!(legacy(&teams, &matches), matches);
}

#[test]
fn final_sides_are_patched_in_place() {
    let teams = grouped_teams(4);
    let matches = legacy(&teams, &groups_done(&teams));
    let final_id = matches
        .iter()
        .find(|m| m.stage == Stage::Final)
        .map(|m| m.id.clone())
        .unwrap();

    let first_semi = matches
        .iter()
        .find(|m| m.stage == Stage::SemiFinal)
        .map(|m| m.id.clone())
        .unwrap();
    let matches = legacy(&teams, &finish_where(&matches, |m| m.id == first_semi));
    assert_eq!(pairs(&matches, Stage::Final), vec![("A1", TBD_TEAM_ID)]);

    let matches = legacy(&teams, &finish_where(&matches, |m| m.stage == Stage::SemiFinal));
    assert_eq!(pairs(&matches, Stage::Final), vec![("A1", "B1")]);

    let fin: Vec<&GameMatch> = matches.iter().filter(|m| m.stage == Stage::Final).collect();
    assert_eq!(fin.len(), 1);
    assert_eq!(fin[0].id, final_id);
    assert_eq!(legacy(&teams, &matches), matches);
}

#[test]
fn large_bracket_starts_with_quarter_finals() {
    let teams = grouped_teams(5);
    let matches = legacy(&teams, &groups_done(&teams));

    assert_eq!(
        pairs(&matches, Stage::QuarterFinal),
        vec![("A1", "B4"), ("B2", "A3"), ("B1", "A4"), ("A2", "B3")]
    );
    assert!(pairs(&matches, Stage::SemiFinal).is_empty());
    assert!(pairs(&matches, Stage::Final).is_empty());

    let matches = legacy(&teams, &finish_where(&matches, |m| m.stage == Stage::QuarterFinal));
    assert_eq!(pairs(&matches, Stage::SemiFinal), vec![("A1", "B2"), ("B1", "A2")]);
    assert_eq!(pairs(&matches, Stage::Final), vec![(TBD_TEAM_ID, TBD_TEAM_ID)]);
}

#[test]
fn unfinished_quarter_finals_hold_the_semis() {
    let teams = grouped_teams(5);
    let matches = legacy(&teams, &groups_done(&teams));
    let first_qf = matches
        .iter()
        .find(|m| m.stage == Stage::QuarterFinal)
        .map(|m| m.id.clone())
        .unwrap();
    let matches = finish_where(&matches, |m| m.id == first_qf);
    assert_eq!(legacy(&teams, &matches), matches);
}

#[test]
fn unfinished_groups_hold_everything() {
    let teams = grouped_teams(4);
    let fixtures = generate_fixtures(&teams, TournamentFormat::GroupsKnockout);
    let first = fixtures[0].id.clone();
    let matches = finish_where(&fixtures, |m| m.id != first);
    assert_eq!(legacy(&teams, &matches), matches);
}

#[test]
fn generic_mode_waits_for_both_finalists() {
    let teams = grouped_teams(4);
    let generic = advance_knockouts(&teams, &groups_done(&teams), &BracketConfig::default());
    assert!(pairs(&generic, Stage::Final).is_empty());

    let early = legacy(&teams, &groups_done(&teams));
    assert_eq!(pairs(&early, Stage::Final).len(), 1);
}

#[test]
fn first_round_follows_team_count() {
    let legacy = BracketConfig::LegacyTwoGroup;
    assert_eq!(first_round_name(&legacy, 8), "Semi-finals");
    assert_eq!(first_round_name(&legacy, 10), "Quarter-finals");
    assert_eq!(first_round_name(&BracketConfig::default(), 8), "Semi-finals");
}

#[test]
fn decided_final_is_left_alone() {
    let teams = grouped_teams(4);
    let matches = legacy(&teams, &groups_done(&teams));
    let matches = legacy(&teams, &finish_where(&matches, |m| m.stage == Stage::SemiFinal));
    let matches = finish_where(&matches, |m| m.stage == Stage::Final);
    assert_eq!(legacy(&teams, &matches), matches);
}
