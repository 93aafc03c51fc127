use empath_session::{ProviderConfig, SessionEvent, VoiceSession};
use empath_types::{ConnectionStatus, ConversationTurn, EmotionScores};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn subscribers_observe_the_connection_lifecycle() {
    init_tracing();
    let mut session = VoiceSession::new(ProviderConfig::default());
    let mut events = session.subscribe();

    session.begin_connect().expect("should start connecting");
    session.mark_connected().expect("should connect");
    session.disconnect();

    let mut statuses = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::StatusChanged(status) = event {
            statuses.push(status);
        }
    }
    assert_eq!(
        statuses,
        vec![
            ConnectionStatus::Connecting,
            ConnectionStatus::Connected,
            ConnectionStatus::Disconnected,
        ]
    );
}

#[tokio::test]
async fn mute_events_carry_the_new_state() {
    let mut session = VoiceSession::new(ProviderConfig::default());
    session.begin_connect().expect("should start connecting");
    session.mark_connected().expect("should connect");

    let mut events = session.subscribe();
    session.mute().expect("mute should work");
    session.mute().expect("repeat mute should be a no-op");
    session.unmute().expect("unmute should work");

    let mut changes = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::MuteChanged(muted) = event {
            changes.push(muted);
        }
    }
    // The repeated mute produced no event.
    assert_eq!(changes, vec![true, false]);
}

#[tokio::test]
async fn appended_turns_are_broadcast_with_their_scores() {
    let mut session = VoiceSession::new(ProviderConfig::default());
    session.begin_connect().expect("should start connecting");
    session.mark_connected().expect("should connect");

    let mut events = session.subscribe();
    let scores: EmotionScores = [("joy", 0.5)].into_iter().collect();
    session.append_turn(ConversationTurn::user("hello").with_scores(scores.clone()));

    match events.try_recv().expect("event should be queued") {
        SessionEvent::TurnAppended(turn) => {
            assert_eq!(turn.text, "hello");
            assert_eq!(turn.scores, Some(scores));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn disconnect_unmute_is_broadcast() {
    let mut session = VoiceSession::new(ProviderConfig::default());
    session.begin_connect().expect("should start connecting");
    session.mark_connected().expect("should connect");
    session.mute().expect("mute should work");

    let mut events = session.subscribe();
    session.disconnect();

    let mut saw_unmute = false;
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::MuteChanged(false) = event {
            saw_unmute = true;
        }
    }
    assert!(saw_unmute, "disconnect should broadcast the implicit unmute");
}

#[test]
fn sessions_get_distinct_ids() {
    let a = VoiceSession::new(ProviderConfig::default());
    let b = VoiceSession::new(ProviderConfig::default());
    assert_ne!(a.id(), b.id());
}
