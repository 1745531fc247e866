//! End-to-end routing of intents through `handler::dispatch`, without Discord.
use exchange_desk_bot::AppState;
use exchange_desk_bot::exchange::intent::{ButtonPress, Command, Intent};
use exchange_desk_bot::exchange::memory::{MemoryStore, RecordingNotifier};
use exchange_desk_bot::exchange::{
    Caller, Decision, PendingAction, RateLimits, Role, WorkflowEngine, WorkflowError,
};
use exchange_desk_bot::handler::dispatch;
use exchange_desk_bot::interactions::{authorize_press, ids};
use exchange_desk_bot::ui::Reply;
use std::sync::Arc;

const ADMIN: u64 = 10;
const USER: u64 = 20;
const STRANGER: u64 = 30;
const OTHER_ADMIN: u64 = 11;

async fn state() -> (AppState, Arc<RecordingNotifier>) {
    let store = Arc::new(
        MemoryStore::with_actors([
            (ADMIN, Role::Admin, "boss"),
            (OTHER_ADMIN, Role::Admin, "deputy"),
            (USER, Role::User, "petar"),
        ])
        .await,
    );
    let notifier = Arc::new(RecordingNotifier::new());
    let engine = WorkflowEngine::new(store.clone(), store, notifier.clone(), RateLimits::default());
    (AppState::new(engine, ADMIN, "!"), notifier)
}

fn admin() -> Caller {
    Caller::new(ADMIN, "boss")
}

fn user() -> Caller {
    Caller::new(USER, "petar")
}

async fn text(state: &AppState, caller: &Caller, line: &str) -> Option<Reply> {
    let intent = Intent::from_text(line, &state.prefix)?;
    dispatch(state, caller, intent).await
}

async fn press(state: &AppState, caller: &Caller, button: ButtonPress) -> Reply {
    dispatch(state, caller, Intent::Button(button))
        .await
        .expect("buttons always answer")
}

#[tokio::test]
async fn admin_sets_rate_through_buttons() {
    let (state, _) = state().await;
    let staged = text(&state, &admin(), "!kurs_evra 117.2 118.0").await.unwrap();
    assert!(staged.content.contains("Buy: 117.2"));
    assert_eq!(staged.components.len(), 1, "confirm row expected");

    let done = press(&state, &admin(), ButtonPress::Decision(Decision::Confirm)).await;
    assert!(done.content.contains("Rate set"));
    assert!(done.components.is_empty());

    let card = text(&state, &user(), "!kurs_evra").await.unwrap();
    assert!(card.content.contains("Buy: 117.2"));
    assert!(card.content.contains("1000,EUR,117.2,18.00"));
}

#[tokio::test]
async fn admin_with_wrong_args_gets_usage() {
    let (state, _) = state().await;
    let reply = text(&state, &admin(), "!kurs_evra").await.unwrap();
    assert!(reply.content.contains("/kurs_evra BUY SELL"));
    assert!(reply.components.is_empty());
}

#[tokio::test]
async fn user_without_rate_is_pointed_at_the_admin() {
    let (state, _) = state().await;
    let reply = text(&state, &user(), "!kurs_evra").await.unwrap();
    assert!(reply.content.contains("not been set"));
    assert!(reply.content.contains(&format!("<@{ADMIN}>")));
}

#[tokio::test]
async fn full_request_reaches_the_admin() {
    let (state, notifier) = state().await;
    text(&state, &admin(), "!kurs_evra 117.0 118.0").await.unwrap();
    press(&state, &admin(), ButtonPress::Decision(Decision::Confirm)).await;
    text(&state, &admin(), "!add_location Centar").await.unwrap();
    press(&state, &admin(), ButtonPress::Decision(Decision::Confirm)).await;

    let prompt = text(&state, &user(), "500,EUR,117.5,10.15").await.unwrap();
    assert!(prompt.content.contains("Pick a location"));
    assert_eq!(prompt.components.len(), 1);

    let staged = press(&state, &user(), ButtonPress::SelectLocation(1)).await;
    assert!(staged.content.contains("Location: Centar"));
    let sent = press(&state, &user(), ButtonPress::Decision(Decision::Confirm)).await;
    assert!(sent.content.contains("sent to the administrator"));
    assert_eq!(notifier.sent().await.len(), 1);
}

#[tokio::test]
async fn bad_request_line_repeats_the_format() {
    let (state, _) = state().await;
    text(&state, &admin(), "!kurs_evra 117.0 118.0").await.unwrap();
    press(&state, &admin(), ButtonPress::Decision(Decision::Confirm)).await;
    let reply = text(&state, &user(), "1000,EUR,117,5,18.00").await.unwrap();
    assert!(reply.content.contains("decimal separator"));
    assert!(reply.content.contains("Correct format"));
}

#[tokio::test]
async fn strangers_are_mostly_ignored() {
    let (state, _) = state().await;
    let stranger = Caller::new(STRANGER, "who");
    assert!(text(&state, &stranger, "hello").await.is_none());
    assert!(text(&state, &stranger, "!help").await.is_none());
    let start = text(&state, &stranger, "!start").await.unwrap();
    assert!(start.content.contains("permission"));
    let line = text(&state, &stranger, "1000,EUR,117.2,18.00").await.unwrap();
    assert!(line.content.contains("permission"));
    assert!(!line.content.contains("Correct format"));
    let cmd = text(&state, &stranger, "!list_users").await.unwrap();
    assert!(cmd.content.contains("permission"));
}

#[tokio::test]
async fn help_and_fallbacks_follow_the_role() {
    let (state, _) = state().await;
    assert!(text(&state, &user(), "!help").await.is_none());
    let help = text(&state, &admin(), "!help").await.unwrap();
    assert!(help.content.contains("!list_locations"));

    let unknown = text(&state, &user(), "!dance").await.unwrap();
    assert!(unknown.content.contains("Invalid command"));
    assert!(!unknown.content.contains("!add "));

    let free = text(&state, &user(), "hi there").await.unwrap();
    assert!(free.content.contains("must start with !"));
}

#[tokio::test]
async fn location_board_toggles_in_place() {
    let (state, _) = state().await;
    for name in ["Centar", "Zemun"] {
        dispatch(&state, &admin(), Intent::command(Command::AddLocation, vec![name.into()])).await;
        press(&state, &admin(), ButtonPress::Decision(Decision::Confirm)).await;
    }
    let board = text(&state, &admin(), "!list_locations").await.unwrap();
    assert!(board.content.contains("🟢 **Centar**"));
    assert_eq!(board.components.len(), 1);

    let after = press(&state, &admin(), ButtonPress::ToggleLocation { id: 1, active: false }).await;
    assert!(after.content.contains("🔴 Centar"));

    let missing = press(&state, &admin(), ButtonPress::ToggleLocation { id: 99, active: true }).await;
    assert!(missing.content.contains("not available"));
}

#[tokio::test]
async fn confirm_without_stage_says_so() {
    let (state, _) = state().await;
    let reply = press(&state, &user(), ButtonPress::Decision(Decision::Cancel)).await;
    assert!(reply.content.contains("no pending action"));
}

/// Runs a raw custom id the way the component router does: owner check first.
async fn press_id(state: &AppState, caller: &Caller, custom_id: &str) -> Result<Reply, WorkflowError> {
    let parsed = ids::parse_button(custom_id).expect("desk button id");
    let press = authorize_press(parsed, caller.id)?;
    Ok(dispatch(state, caller, Intent::Button(press)).await.expect("buttons always answer"))
}

#[tokio::test]
async fn buttons_only_answer_their_owner() {
    let (state, _) = state().await;
    let deputy = Caller::new(OTHER_ADMIN, "deputy");
    text(&state, &admin(), "!delete 20").await.unwrap();
    text(&state, &deputy, "!kurs_evra 117 118").await.unwrap();

    for id in [ids::confirm(ADMIN), ids::cancel(ADMIN), ids::location_select(ADMIN, 1)] {
        let err = press_id(&state, &deputy, &id).await.unwrap_err();
        assert!(matches!(err, WorkflowError::ForeignButton), "{id}");
    }
    assert_eq!(
        state.engine.stager().peek(ADMIN).await,
        Some(PendingAction::DeleteUser { id: USER })
    );
    assert!(state.engine.stager().peek(OTHER_ADMIN).await.is_some());

    let own = press_id(&state, &deputy, &ids::confirm(OTHER_ADMIN)).await.unwrap();
    assert!(own.content.contains("Rate set"));
    let owner = press_id(&state, &admin(), &ids::cancel(ADMIN)).await.unwrap();
    assert!(owner.content.contains("cancelled"));
}

#[tokio::test]
async fn location_toggles_are_shared_between_admins() {
    let (state, _) = state().await;
    text(&state, &admin(), "!add_location Centar").await.unwrap();
    press(&state, &admin(), ButtonPress::Decision(Decision::Confirm)).await;
    let deputy = Caller::new(OTHER_ADMIN, "deputy");
    let board = press_id(&state, &deputy, &ids::location_toggle(1, false)).await.unwrap();
    assert!(board.content.contains("🔴 Centar"));
}
