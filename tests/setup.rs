//! Integration tests for tournament creation: validation, group draw, fixtures.

use kickoff::logic::group_label;
use kickoff::{
    create_tournament, create_tournament_with_rng, BracketConfig, NewTournament, Stage,
    TournamentError, TournamentFormat, Visibility,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn request(format: TournamentFormat, names: &[&str], bracket: Option<BracketConfig>) -> NewTournament {
    NewTournament {
        name: "Summer League".to_string(),
        format,
        team_names: names.iter().map(|n| n.to_string()).collect(),
        bracket,
        visibility: Visibility::Public,
    }
}

fn numbered(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Club {i}")).collect()
}

fn groups_request(teams: usize, bracket: Option<BracketConfig>) -> NewTournament {
    NewTournament {
        team_names: numbered(teams),
        ..request(TournamentFormat::GroupsKnockout, &[], bracket)
    }
}

fn generic(num_groups: usize, advancing_per_group: usize) -> Option<BracketConfig> {
    Some(BracketConfig::Generic {
        num_groups,
        advancing_per_group,
    })
}

#[test]
fn league_schedules_a_full_round_robin() {
    let req = NewTournament {
        team_names: numbered(5),
        ..request(TournamentFormat::League, &[], generic(4, 1))
    };
    let t = create_tournament(&req).unwrap();

    assert_eq!(t.teams.len(), 5);
    assert_eq!(t.matches.len(), 10);
    assert!(t.groups.is_empty());
    assert_eq!(t.bracket, None);
    assert!(t.teams.iter().all(|team| team.group.is_none()));
    assert_eq!(t.current_stage, Stage::Group);
}

#[test]
fn groups_are_dealt_evenly() {
    let t = create_tournament(&groups_request(8, None)).unwrap();

    assert_eq!(t.groups, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(t.group_table("A").len(), 4);
    assert_eq!(t.group_table("B").len(), 4);
    assert_eq!(t.matches.len(), 12);
    assert_eq!(t.bracket, Some(BracketConfig::default()));
    for m in &t.matches {
        let home = t.team(&m.home_team_id).unwrap();
        let away = t.team(&m.away_team_id).unwrap();
        assert_eq!(home.group, away.group);
        assert_eq!(m.group, home.group);
    }
}

#[test]
fn four_groups_are_labelled_in_order() {
    let t = create_tournament(&groups_request(12, generic(4, 2))).unwrap();
    assert_eq!(t.groups, vec!["A", "B", "C", "D"]);
    for g in &t.groups {
        assert_eq!(t.group_table(g).len(), 3);
    }
    assert_eq!(t.matches.len(), 12);
}

#[test]
fn names_are_trimmed() {
    let req = NewTournament {
        name: "  Derby Day ".to_string(),
        ..request(TournamentFormat::League, &[" Rovers", "United  "], None)
    };
    let t = create_tournament(&req).unwrap();
    assert_eq!(t.name, "Derby Day");
    let mut names: Vec<&str> = t.teams.iter().map(|team| team.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Rovers", "United"]);
}

#[test]
fn same_seed_draws_the_same_groups() {
    let req = groups_request(16, generic(4, 2));
    let draw = |seed| {
        let t = create_tournament_with_rng(&req, &mut StdRng::seed_from_u64(seed)).unwrap();
        t.teams
            .into_iter()
            .map(|team| (team.name, team.group))
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(42), draw(42));
}

#[test]
fn visibility_is_carried_over() {
    let req = NewTournament {
        visibility: Visibility::Private,
        ..groups_request(4, None)
    };
    assert_eq!(create_tournament(&req).unwrap().visibility, Visibility::Private);
}

#[test]
fn blank_tournament_name_is_rejected() {
    let req = NewTournament {
        name: "   ".to_string(),
        ..request(TournamentFormat::League, &["A", "B"], None)
    };
    assert_eq!(create_tournament(&req), Err(TournamentError::EmptyName));
}

#[test]
fn single_team_is_rejected() {
    let req = request(TournamentFormat::League, &["Lonely"], None);
    assert_eq!(create_tournament(&req), Err(TournamentError::NotEnoughTeams));
}

#[test]
fn duplicate_names_ignore_case() {
    let req = request(TournamentFormat::League, &["Rovers", "City", "rovers"], None);
    assert_eq!(
        create_tournament(&req),
        Err(TournamentError::DuplicateTeamName("rovers".to_string()))
    );
}

#[test]
fn blank_team_name_is_rejected() {
    let req = request(TournamentFormat::League, &["Rovers", "  "], None);
    assert_eq!(create_tournament(&req), Err(TournamentError::EmptyName));
}

#[test]
fn uneven_split_is_rejected() {
    assert_eq!(
        create_tournament(&groups_request(10, generic(4, 1))),
        Err(TournamentError::UnevenGroups {
            teams: 10,
            groups: 4
        })
    );
}

#[test]
fn impossible_brackets_are_rejected() {
    let cases = [
        groups_request(8, generic(2, 5)),
        groups_request(8, generic(2, 0)),
        groups_request(8, generic(0, 1)),
        groups_request(27, generic(27, 1)),
        groups_request(2, Some(BracketConfig::LegacyTwoGroup)),
    ];
    for req in &cases {
        assert!(
            matches!(create_tournament(req), Err(TournamentError::InvalidBracket(_))),
            "{:?} should be rejected",
            req.bracket
        );
    }
}

#[test]
fn irregular_bracket_is_allowed_at_setup() {
    let t = create_tournament(&groups_request(9, generic(3, 2))).unwrap();
    assert_eq!(t.groups.len(), 3);
}

#[test]
fn group_labels_are_letters() {
    assert_eq!(group_label(0), "A");
    assert_eq!(group_label(1), "B");
    assert_eq!(group_label(25), "Z");
}
