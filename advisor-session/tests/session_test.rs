//! Tests for [`advisor_session::ConversationSession`] with a scripted LLM client.
//!
//! Covers empty input, success path (facts + history + render), every failure kind leaving state
//! untouched, and the single-flight guard.
//! External interactions: none (mock client and recording renderer).

mod common;

use advisor_session::{
    ConversationSession, TurnOutcome, GREETING, MSG_CONNECTION_PREFIX, MSG_UNEXPECTED_RESPONSE,
};
use common::{BlockingLlmClient, Frame, RecordingRenderer, ScriptedLlmClient};
use llm_client::LlmError;
use memory_core::SkinType;
use prompt::{ChatMessage, MessageRole, DEFAULT_SYSTEM_MESSAGE};
use std::sync::Arc;
use tokio::sync::Notify;

fn session_with(
    responses: Vec<llm_client::Result<String>>,
) -> (ConversationSession, Arc<ScriptedLlmClient>, Arc<RecordingRenderer>) {
    let client = Arc::new(ScriptedLlmClient::new(responses));
    let renderer = Arc::new(RecordingRenderer::default());
    let session = ConversationSession::new(client.clone(), renderer.clone());
    (session, client, renderer)
}

/// **Test: start() renders the greeting.**
#[tokio::test]
async fn start_renders_greeting() {
    let (session, _, renderer) = session_with(vec![]);
    session.start().await;
    assert_eq!(renderer.frames(), vec![Frame::Greeting(GREETING.to_string())]);
}

/// **Test: Whitespace-only input is ignored: no render, no request.**
#[tokio::test]
async fn empty_utterance_ignored() {
    let (session, client, renderer) = session_with(vec![]);
    assert_eq!(session.handle_turn("   \n").await, TurnOutcome::Ignored);
    assert!(client.requests().is_empty());
    assert!(renderer.frames().is_empty());
}

/// **Test: Success renders the placeholder then the reply, and records the trimmed exchange.**
#[tokio::test]
async fn successful_turn_updates_state_and_renders() {
    let (session, client, renderer) = session_with(vec![Ok("Hello Ana!".to_string())]);

    let outcome = session.handle_turn("  My name is Ana  ").await;

    assert_eq!(outcome, TurnOutcome::Replied("Hello Ana!".to_string()));
    assert_eq!(
        renderer.frames(),
        vec![
            Frame::Exchange("My name is Ana".to_string(), "Thinking...".to_string()),
            Frame::Exchange("My name is Ana".to_string(), "Hello Ana!".to_string()),
        ]
    );
    assert_eq!(
        client.requests()[0],
        vec![
            ChatMessage::system(DEFAULT_SYSTEM_MESSAGE),
            ChatMessage::user("My name is Ana"),
        ]
    );
    let history = session.history().await;
    assert_eq!(
        history.messages(),
        &[
            ChatMessage::user("My name is Ana"),
            ChatMessage::assistant("Hello Ana!"),
        ]
    );
    assert_eq!(session.profile().await.name.as_deref(), Some("Ana"));
}

/// **Test: Each failure kind renders its message and leaves profile and history unchanged.**
#[tokio::test]
async fn failures_do_not_mutate_state() {
    let failures = vec![
        LlmError::Network("connection refused".to_string()),
        LlmError::HttpStatus {
            status: 500,
            body: "oops".to_string(),
        },
        LlmError::Timeout,
        LlmError::PayloadParse("expected value".to_string()),
        LlmError::Api(Some("model overloaded".to_string())),
        LlmError::UnexpectedShape,
    ];
    let (session, client, renderer) =
        session_with(failures.iter().cloned().map(Err).collect());

    for expected in &failures {
        let outcome = session
            .handle_turn("My name is Ana, I have oily skin and I love serums")
            .await;
        match outcome {
            TurnOutcome::Failed { error, message } => {
                assert_eq!(&error, expected);
                assert_eq!(
                    renderer.last(),
                    Some(Frame::Exchange(
                        "My name is Ana, I have oily skin and I love serums".to_string(),
                        message,
                    ))
                );
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    assert_eq!(client.requests().len(), failures.len());
    assert!(session.profile().await.is_empty());
    assert!(session.history().await.is_empty());
}

/// **Test: Transport failures render the connectivity text; shape failures the rephrase text.**
#[tokio::test]
async fn failure_messages_by_kind() {
    let (session, _, _) = session_with(vec![
        Err(LlmError::HttpStatus {
            status: 503,
            body: String::new(),
        }),
        Err(LlmError::UnexpectedShape),
        Err(LlmError::Api(None)),
    ]);

    match session.handle_turn("hi").await {
        TurnOutcome::Failed { message, .. } => assert!(message.starts_with(MSG_CONNECTION_PREFIX)),
        other => panic!("unexpected {:?}", other),
    }
    match session.handle_turn("hi").await {
        TurnOutcome::Failed { message, .. } => assert_eq!(message, MSG_UNEXPECTED_RESPONSE),
        other => panic!("unexpected {:?}", other),
    }
    match session.handle_turn("hi").await {
        TurnOutcome::Failed { message, .. } => assert!(message.contains("Unknown error")),
        other => panic!("unexpected {:?}", other),
    }
}

/// **Test: The second request carries the derived context message and prior history.**
#[tokio::test]
async fn second_turn_sends_context_and_history() {
    let (session, client, _) = session_with(vec![
        Ok("Nice to meet you, Sam.".to_string()),
        Ok("Try a gel cleanser.".to_string()),
    ]);

    session.handle_turn("I'm Sam and I have oily skin").await;
    session.handle_turn("Any cleanser?").await;

    let second = &client.requests()[1];
    assert_eq!(second.len(), 5);
    assert_eq!(second[1].role, MessageRole::System);
    assert!(second[1].content.contains("Name: Sam."));
    assert!(second[1].content.contains("Skin type: oily."));
    assert_eq!(second[2], ChatMessage::user("I'm Sam and I have oily skin"));
    assert_eq!(second[3], ChatMessage::assistant("Nice to meet you, Sam."));
    assert_eq!(second[4], ChatMessage::user("Any cleanser?"));

    let profile = session.profile().await;
    assert_eq!(profile.skin_type, Some(SkinType::Oily));
}

/// **Test: A custom system prompt and thinking message are used.**
#[tokio::test]
async fn custom_system_prompt_and_thinking_message() {
    let client = Arc::new(ScriptedLlmClient::new(vec![Ok("ok".to_string())]));
    let renderer = Arc::new(RecordingRenderer::default());
    let session = ConversationSession::new(client.clone(), renderer.clone())
        .with_system_prompt("Be brief.")
        .with_thinking_message("One moment...");

    session.handle_turn("hello").await;

    assert_eq!(client.requests()[0][0], ChatMessage::system("Be brief."));
    assert_eq!(
        renderer.frames()[0],
        Frame::Exchange("hello".to_string(), "One moment...".to_string())
    );
}

/// **Test: preview_messages shows what would be sent without calling the client.**
#[tokio::test]
async fn preview_messages_does_not_send() {
    let (session, client, _) = session_with(vec![Ok("Hi Lee".to_string())]);
    session.handle_turn("call me Lee").await;

    let preview = session.preview_messages("  next?  ").await;
    assert_eq!(preview.len(), 5);
    assert!(preview[1].content.contains("Name: Lee."));
    assert_eq!(preview.last(), Some(&ChatMessage::user("next?")));
    assert_eq!(client.requests().len(), 1);
}

/// **Test: A turn submitted while another is in flight is rejected as Busy and renders nothing.**
#[tokio::test]
async fn overlapping_turn_is_busy() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let client = Arc::new(BlockingLlmClient {
        started: started.clone(),
        release: release.clone(),
    });
    let renderer = Arc::new(RecordingRenderer::default());
    let session = Arc::new(ConversationSession::new(client, renderer.clone()));

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.handle_turn("first question").await })
    };
    started.notified().await;

    assert_eq!(session.handle_turn("second question").await, TurnOutcome::Busy);
    assert_eq!(renderer.frames().len(), 1);

    release.notify_one();
    let outcome = first.await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied("Done waiting.".to_string()));

    let history = session.history().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history.messages()[0], ChatMessage::user("first question"));
}

/// **Test: An empty reply is returned and rendered but only the user turn is recorded.**
#[tokio::test]
async fn empty_reply_records_user_turn_only() {
    let (session, client, _) = session_with(vec![Ok(String::new()), Ok("Sure.".to_string())]);

    assert_eq!(
        session.handle_turn("hello").await,
        TurnOutcome::Replied(String::new())
    );
    assert_eq!(session.history().await.messages(), &[ChatMessage::user("hello")]);

    session.handle_turn("still there?").await;
    let second = &client.requests()[1];
    assert!(second.iter().all(|m| !m.content.is_empty()));
}

/// **Test: Snapshots taken while a turn is in flight return at once with the pre-turn state.**
#[tokio::test]
async fn snapshots_do_not_wait_for_in_flight_turn() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let client = Arc::new(BlockingLlmClient {
        started: started.clone(),
        release: release.clone(),
    });
    let session = Arc::new(ConversationSession::new(
        client,
        Arc::new(RecordingRenderer::default()),
    ));

    let turn = {
        let session = session.clone();
        tokio::spawn(async move { session.handle_turn("My name is Ana").await })
    };
    started.notified().await;

    let timeout = std::time::Duration::from_secs(1);
    let history = tokio::time::timeout(timeout, session.history()).await.unwrap();
    let profile = tokio::time::timeout(timeout, session.profile()).await.unwrap();
    assert!(history.is_empty());
    assert!(profile.is_empty());
    assert_eq!(session.handle_turn("again").await, TurnOutcome::Busy);

    release.notify_one();
    turn.await.unwrap();
    assert_eq!(session.profile().await.name.as_deref(), Some("Ana"));
}
