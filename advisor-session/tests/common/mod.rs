//! Shared test doubles: scripted LLM client and recording renderer.

#![allow(dead_code)]

use advisor_core::{Renderer, Result as AdvisorResult};
use async_trait::async_trait;
use llm_client::{LlmClient, LlmError, Result as LlmResult};
use prompt::ChatMessage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock LLM client: returns scripted results in order and records every request.
pub struct ScriptedLlmClient {
    responses: Mutex<VecDeque<LlmResult<String>>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedLlmClient {
    pub fn new(responses: Vec<LlmResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> LlmResult<String> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::UnexpectedShape))
    }
}

/// Mock LLM client that signals `started` and then blocks until `release` is notified.
pub struct BlockingLlmClient {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[async_trait]
impl LlmClient for BlockingLlmClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> LlmResult<String> {
        self.started.notify_one();
        self.release.notified().await;
        Ok("Done waiting.".to_string())
    }
}

/// A frame drawn by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Greeting(String),
    Exchange(String, String),
}

/// Renderer that records every frame.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Mutex<Vec<Frame>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Frame> {
        self.frames.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Renderer for RecordingRenderer {
    async fn render_greeting(&self, greeting: &str) -> AdvisorResult<()> {
        self.frames
            .lock()
            .unwrap()
            .push(Frame::Greeting(greeting.to_string()));
        Ok(())
    }

    async fn render_exchange(&self, user_text: &str, assistant_text: &str) -> AdvisorResult<()> {
        self.frames.lock().unwrap().push(Frame::Exchange(
            user_text.to_string(),
            assistant_text.to_string(),
        ));
        Ok(())
    }
}
