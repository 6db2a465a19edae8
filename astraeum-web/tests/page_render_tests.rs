use astraeum_game::{
    ArmyUnit, BattleSnapshot, BattleStatus, GameSnapshot, Inventory, OracleSummary, PuzzleData,
    PuzzleSession, Resources,
};
use astraeum_web::components::inventory::{InventoryPanel, InventoryPanelProps};
use astraeum_web::pages::{
    battle::{BattlePage, BattlePageProps},
    confrontation::{ConfrontationPage, ConfrontationPageProps},
    login::{LoginPage, LoginPageProps},
    map::{MapPage, MapPageProps},
    puzzle::{PuzzlePage, PuzzlePageProps},
};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn oracle(id: i64, name: &str, defeated: bool) -> OracleSummary {
    OracleSummary {
        id,
        name: String::from(name),
        domain: String::from("Time"),
        title: format!("{name} the Keeper"),
        description: String::new(),
        is_defeated: defeated,
        is_hostile: false,
    }
}

fn puzzle_session(time_limit: Option<u32>) -> PuzzleSession {
    PuzzleSession::new(PuzzleData {
        puzzle_type: String::from("time_sequence"),
        description: String::from("Solve the temporal paradox"),
        hints: vec![
            String::from("Consider the fundamental pattern"),
            String::from("Look beyond the obvious solution"),
        ],
        difficulty: 5,
        false_clues: Some(vec![String::from("The first path is always correct")]),
        time_limit,
    })
}

fn puzzle_props(puzzle: PuzzleSession) -> PuzzlePageProps {
    PuzzlePageProps {
        oracle: oracle(7, "Chronos", false),
        puzzle,
        input: "".into(),
        busy: false,
        insight_tokens: 1,
        tick_ms: 1_000,
        on_input: Callback::noop(),
        on_submit: Callback::noop(),
        on_hint: Callback::noop(),
        on_insight: Callback::noop(),
        on_tick: Callback::noop(),
    }
}

#[test]
fn login_page_renders_entry_form() {
    let props = LoginPageProps {
        error: None,
        busy: false,
        on_submit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("Thirteen Oracles of Astraeum"));
    assert!(html.contains("Enter Astraeum"));
    assert!(html.contains("Need an account? Register"));

    let props_err = LoginPageProps {
        error: Some("Authentication failed".into()),
        busy: false,
        on_submit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props_err).render());
    assert!(html.contains("Authentication failed"));
}

#[test]
fn map_page_lists_oracles_with_status() {
    let props = MapPageProps {
        game: GameSnapshot {
            game_id: 1,
            current_stage: 2,
            oracles_defeated: 1,
            resources: Resources {
                gold: 100,
                insight_tokens: 1,
            },
            oracles: vec![oracle(1, "Delphix", true), oracle(7, "Chronos", false)],
        },
        on_challenge: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MapPage>::with_props(props).render());
    assert!(html.contains("Select an Oracle to Challenge"));
    assert!(html.contains("Delphix"));
    assert!(html.contains("Defeated"));
    assert!(html.contains("Chronos"));
    assert!(html.contains("Neutral"));
}

#[test]
fn puzzle_page_shows_countdown_and_hints() {
    let mut puzzle = puzzle_session(Some(180));
    puzzle.reveal_next_hint();
    let html = block_on(LocalServerRenderer::<PuzzlePage>::with_props(puzzle_props(puzzle)).render());
    assert!(html.contains("Chronos's Challenge"));
    assert!(html.contains("3:00"));
    assert!(html.contains("Consider the fundamental pattern"));
    assert!(html.contains("Show Hint (1 remaining)"));
    assert!(html.contains("Warning: Some information may be deceptive"));
    assert!(html.contains("Difficulty: 5/13"));
}

#[test]
fn puzzle_page_without_timer_has_no_countdown() {
    let html = block_on(
        LocalServerRenderer::<PuzzlePage>::with_props(puzzle_props(puzzle_session(None))).render(),
    );
    assert!(!html.contains("time-indicator"));
    assert!(html.contains("Submit Solution"));
}

#[test]
fn battle_page_renders_placeholder_then_arena() {
    let preparing = BattlePageProps {
        oracle_name: "Chronos".into(),
        snapshot: None,
        on_prepare: Callback::noop(),
        on_action: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BattlePage>::with_props(preparing).render());
    assert!(html.contains("Preparing battle..."));

    let fighting = BattlePageProps {
        oracle_name: "Chronos".into(),
        snapshot: Some(BattleSnapshot {
            turn: 3,
            player_health: 820,
            enemy_health: 410,
            battle_log: vec![String::from("Turn 2: Player dealt 90 damage")],
            status: BattleStatus::InProgress,
        }),
        on_prepare: Callback::noop(),
        on_action: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BattlePage>::with_props(fighting).render());
    assert!(html.contains("Battle vs Chronos"));
    assert!(html.contains("Turn: 3"));
    assert!(html.contains("820 HP"));
    assert!(html.contains("Turn 2: Player dealt 90 damage"));
    assert!(html.contains("Execute Action"));
}

#[test]
fn terminal_battle_hides_the_action_row() {
    let props = BattlePageProps {
        oracle_name: "Chronos".into(),
        snapshot: Some(BattleSnapshot {
            turn: 6,
            player_health: 120,
            enemy_health: 0,
            battle_log: vec![String::from("Victory! Enemy defeated!")],
            status: BattleStatus::Victory,
        }),
        on_prepare: Callback::noop(),
        on_action: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BattlePage>::with_props(props).render());
    assert!(!html.contains("Execute Action"));
    assert!(html.contains("Victory! Enemy defeated!"));
}

#[test]
fn confrontation_page_names_the_oracle() {
    let props = ConfrontationPageProps {
        oracle_name: "Typhon".into(),
    };
    let html = block_on(LocalServerRenderer::<ConfrontationPage>::with_props(props).render());
    assert!(html.contains("Final confrontation with Typhon..."));
}

#[test]
fn inventory_panel_loading_and_loaded() {
    let loading = InventoryPanelProps {
        inventory: None,
        on_close: Callback::noop(),
        on_deploy: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InventoryPanel>::with_props(loading).render());
    assert!(html.contains("Loading inventory..."));

    let loaded = InventoryPanelProps {
        inventory: Some(Inventory {
            weapons: vec![String::from("Mortal Spear")],
            special_items: Vec::new(),
            potions: vec![String::from("Healing Draught")],
            armies: vec![ArmyUnit {
                unit_name: String::from("Hoplites"),
                quantity: 50,
                total_health: 4_200,
                morale: 0.85,
                experience_level: 2,
                is_deployed: false,
            }],
        }),
        on_close: Callback::noop(),
        on_deploy: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InventoryPanel>::with_props(loaded).render());
    assert!(html.contains("Mortal Spear"));
    assert!(html.contains("No special items yet"));
    assert!(html.contains("Hoplites"));
    assert!(html.contains("4200/5000"));
    assert!(html.contains("Deploy"));
}
