use cluedeck::journal::TableEvent;
use cluedeck::{
    end_turn, get_hand, knowledge_snapshot, make_accusation, make_suggestion, move_player,
    start_game_with_solution, Category, GameConfig, GameError, GameState, InputError, InputRequest,
    Phase, Solution, WinKind,
};

fn fixed_game(players: usize, seed: u64) -> GameState {
    let cfg = GameConfig::new(players).with_seed(seed);
    start_game_with_solution(&cfg, Solution::new("Luis", "Cuchillo", "Biblioteca"))
        .expect("start game")
}

#[test]
fn solution_suggestion_is_unrefuted_then_accusation_wins() {
    let mut gs = fixed_game(3, 0x00C0_FFEE);

    let mv = move_player(&mut gs, 0, "Biblioteca").expect("move");
    assert_eq!(mv.room, "Biblioteca");

    let out = make_suggestion(&mut gs, 0, "Luis", "Cuchillo", "Biblioteca").expect("suggest");
    assert!(out.unrefuted);
    assert_eq!(out.refuter, None);
    assert_eq!(out.revealed, None);
    assert_eq!(knowledge_snapshot(&gs).unwrap().status_of("Luis"), Some(cluedeck::Status::Unknown));

    let acc = make_accusation(&mut gs, 0, "Luis", "Cuchillo", "Biblioteca").expect("accuse");
    assert!(acc.correct);
    assert_eq!(acc.winner, Some(0));
    assert_eq!(
        gs.phase,
        Phase::GameWon {
            winner: 0,
            kind: WinKind::Accusation
        }
    );
    assert_eq!(gs.pending_request(), None);
    assert_eq!(
        end_turn(&mut gs),
        Err(GameError::InvalidInput(InputError::GameOver))
    );
}

#[test]
fn wrong_accusations_eliminate_until_one_player_remains() {
    let mut gs = fixed_game(4, 42);

    assert_eq!(end_turn(&mut gs), Ok(1));
    assert_eq!(end_turn(&mut gs), Ok(2));

    let acc = make_accusation(&mut gs, 2, "Pablo", "Cuchillo", "Biblioteca").expect("accuse");
    assert!(!acc.correct);
    assert_eq!(acc.winner, None);
    assert_eq!(acc.eliminated, Some(2));
    assert_eq!(acc.next_player, Some(3));
    assert!(get_hand(&gs, 2).unwrap().is_empty());
    assert!(!gs.players[2].active);
    assert_eq!(gs.current, 3);

    // Two full rotations never land on seat 2.
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(end_turn(&mut gs).unwrap());
    }
    assert_eq!(seen, vec![0, 1, 3, 0, 1, 3]);

    // Seat 3 is current again; it and seat 0 get it wrong too.
    let acc = make_accusation(&mut gs, 3, "Luis", "Cuerda", "Biblioteca").unwrap();
    assert_eq!(acc.next_player, Some(0));
    let acc = make_accusation(&mut gs, 0, "Luis", "Cuchillo", "Sala").unwrap();
    assert!(!acc.correct);
    assert_eq!(acc.eliminated, Some(0));
    assert_eq!(acc.winner, Some(1), "last active player wins by elimination");
    assert_eq!(
        gs.phase,
        Phase::GameWon {
            winner: 1,
            kind: WinKind::Elimination
        }
    );
    assert_eq!(gs.active_players(), vec![1]);
    assert_eq!(
        gs.journal.last(),
        Some(&TableEvent::Won {
            player: 1,
            kind: WinKind::Elimination
        })
    );
}

#[test]
fn invalid_input_leaves_state_untouched() {
    let mut gs = fixed_game(3, 5);
    let before = gs.clone();

    assert_eq!(
        move_player(&mut gs, 0, "Atico").unwrap_err(),
        GameError::InvalidInput(InputError::UnknownItem {
            category: Category::Room,
            name: "Atico".into()
        })
    );
    assert_eq!(
        make_suggestion(&mut gs, 0, "", "Cuchillo", "Sala").unwrap_err(),
        GameError::InvalidInput(InputError::MissingField(Category::Suspect))
    );
    assert_eq!(
        make_suggestion(&mut gs, 0, "Cuchillo", "Cuchillo", "Sala").unwrap_err(),
        GameError::InvalidInput(InputError::UnknownItem {
            category: Category::Suspect,
            name: "Cuchillo".into()
        })
    );
    assert_eq!(
        make_accusation(&mut gs, 0, "Luis", "", "Biblioteca").unwrap_err(),
        GameError::InvalidInput(InputError::MissingField(Category::Weapon))
    );
    assert!(make_accusation(&mut gs, 0, "Luis", "Cuchillo", "Garaje").is_err());
    assert_eq!(
        move_player(&mut gs, 1, "Sala").unwrap_err(),
        GameError::InvalidInput(InputError::NotYourTurn { player: 1, current: 0 })
    );
    assert_eq!(
        move_player(&mut gs, 8, "Sala").unwrap_err(),
        GameError::InvalidInput(InputError::UnknownPlayer(8))
    );

    assert_eq!(gs, before, "rejected actions must not mutate the game");
    assert!(gs.players[0].active, "an accusation with an unknown room never eliminates");
}

#[test]
fn turn_flow_requests() {
    let mut gs = fixed_game(3, 8);
    assert_eq!(gs.pending_request(), Some(InputRequest::ChooseRoom { player: 0 }));
    move_player(&mut gs, 0, "Comedor").unwrap();
    assert_eq!(
        gs.pending_request(),
        Some(InputRequest::OfferSuggestion {
            player: 0,
            room: "Comedor".into()
        })
    );
    make_suggestion(&mut gs, 0, "Jean", "Cuerda", "").unwrap();
    assert_eq!(gs.pending_request(), Some(InputRequest::EndTurn { player: 0 }));
    end_turn(&mut gs).unwrap();
    assert_eq!(gs.pending_request(), Some(InputRequest::ChooseRoom { player: 1 }));
}

#[test]
fn refutation_reveals_card_from_nearest_holder() {
    let mut gs = fixed_game(4, 77);
    // Name a suspect, weapon and room all held by seat 2.
    let h2 = gs.players[2].hand.clone();
    let pick = |cat: Category| {
        h2.iter()
            .find(|c| c.category == cat)
            .map(|c| c.name.clone())
    };
    let suspect = pick(Category::Suspect).unwrap_or_else(|| "Luis".into());
    let weapon = pick(Category::Weapon).unwrap_or_else(|| "Cuchillo".into());
    let room = pick(Category::Room).unwrap_or_else(|| "Biblioteca".into());

    // Seat 1 asks; seat 2 sits right after it.
    end_turn(&mut gs).unwrap();
    let out = make_suggestion(&mut gs, 1, &suspect, &weapon, &room).unwrap();
    assert_eq!(out.refuter, Some(2));
    let card = out.revealed.expect("card shown");
    assert!(h2.contains(&card));
    assert!(out.suggestion.contains(&card));

    // Private notes: only seat 1 learns the card.
    assert_eq!(
        cluedeck::knowledge_snapshot_for(&gs, 1).unwrap().status_of(&card.name),
        Some(cluedeck::Status::Cleared)
    );
    for seat in [0, 2, 3] {
        assert_eq!(gs.players[seat].notes.cleared_count(), 0);
    }
    // The table only sees who showed whom.
    assert!(gs
        .journal
        .events()
        .contains(&TableEvent::Refuted { suggester: 1, refuter: 2 }));
}

#[test]
fn one_move_and_one_suggestion_per_turn() {
    let mut gs = fixed_game(3, 19);
    move_player(&mut gs, 0, "Sala").unwrap();
    make_suggestion(&mut gs, 0, "Pablo", "Cuerda", "").unwrap();
    let before = gs.clone();

    assert_eq!(
        make_suggestion(&mut gs, 0, "Jean", "Revolver", "Cocina").unwrap_err(),
        GameError::InvalidInput(InputError::WrongPhase { action: "suggest" })
    );
    assert_eq!(
        move_player(&mut gs, 0, "Comedor").unwrap_err(),
        GameError::InvalidInput(InputError::WrongPhase { action: "move" })
    );
    assert_eq!(gs, before);
    assert_eq!(gs.suggestions_made, 1);

    // Moving again while the offer is open is refused as well.
    end_turn(&mut gs).unwrap();
    move_player(&mut gs, 1, "Estudio").unwrap();
    assert_eq!(
        move_player(&mut gs, 1, "Cocina").unwrap_err(),
        GameError::InvalidInput(InputError::WrongPhase { action: "move" })
    );
    assert_eq!(gs.players[1].position, cluedeck::Position::Room("Estudio".into()));
}
