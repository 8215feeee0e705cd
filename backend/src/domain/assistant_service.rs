use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use shared::{AssistantChatRequest, AssistantChatResponse, AssistantRole};

use crate::config::AssistantConfig;

/// System prompt specialized for travel assistance
const SYSTEM_PROMPT: &str = "Sei un assistente AI specializzato in viaggi e itinerari. Il tuo nome è TravelBot e lavori per un'app di pianificazione viaggi chiamata Wanderlust.

COMPETENZE:
- Pianificazione itinerari dettagliati
- Consigli su destinazioni, attrazioni, ristoranti
- Informazioni su trasporti e logistica
- Suggerimenti su budget e costi
- Consigli stagionali e meteo
- Cultura locale e tradizioni
- Sicurezza e documenti di viaggio

STILE DI RISPOSTA:
- Entusiasta ma professionale
- Risposte dettagliate ma concise
- Suggerimenti pratici e actionable
- Sempre in italiano
- Includi emoji occasionali per rendere le risposte più vivaci

FUNZIONALITÀ SPECIALI:
- Puoi suggerire modifiche all'itinerario dell'utente
- Puoi consigliare orari ottimali per visitare luoghi
- Puoi stimare durate e costi
- Puoi suggerire alternative in base al meteo o stagionalità

Rispondi sempre in modo utile e cerca di essere specifico nei tuoi consigli.";

/// Fallback responses shown when the upstream AI is unreachable
const FALLBACK_RESPONSES: [&str; 3] = [
    "Mi dispiace, al momento sto avendo difficoltà tecniche. Tuttavia posso comunque aiutarti! Che tipo di viaggio stai pianificando? 🗺️",
    "C'è un piccolo problema con la connessione, ma sono qui per aiutarti! Dimmi la tua destinazione e ti darò alcuni consigli utili! ✈️",
    "Al momento non riesco ad accedere a tutte le mie funzionalità, ma posso comunque fornirti consigli di base. Cosa vorresti sapere sul tuo viaggio? 🧳",
];

/// Stateless proxy to the external chat-completion service.
///
/// One forwarded HTTP request per message, no retry. Failure is always soft:
/// any upstream problem resolves to a fallback text with `success: false`,
/// never an error the caller has to handle. At most one upstream request is
/// in flight at a time; later sends queue behind it.
pub struct AssistantService {
    config: AssistantConfig,
    client: reqwest::Client,
    in_flight: Mutex<()>,
    fallback_cursor: AtomicUsize,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<UpstreamMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct UpstreamMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: String,
}

impl AssistantService {
    pub fn new(config: AssistantConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build assistant HTTP client")?;

        Ok(Self {
            config,
            client,
            in_flight: Mutex::new(()),
            fallback_cursor: AtomicUsize::new(0),
        })
    }

    /// Forward one chat message. Always resolves to displayable text.
    pub async fn chat(&self, request: AssistantChatRequest) -> AssistantChatResponse {
        let _guard = self.in_flight.lock().await;

        match self.forward(&request).await {
            Ok(text) => {
                info!("Assistant replied ({} chars)", text.len());
                AssistantChatResponse {
                    response: text,
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Assistant request failed, using fallback: {:#}", e);
                AssistantChatResponse {
                    response: self.next_fallback().to_string(),
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn forward(&self, request: &AssistantChatRequest) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .context("Assistant API key not configured")?;

        let mut messages = vec![UpstreamMessage {
            role: "system",
            content: SYSTEM_PROMPT,
        }];
        for turn in &request.conversation {
            messages.push(UpstreamMessage {
                role: match turn.role {
                    AssistantRole::User => "user",
                    AssistantRole::Assistant => "assistant",
                },
                content: &turn.content,
            });
        }
        messages.push(UpstreamMessage {
            role: "user",
            content: &request.message,
        });

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("Assistant API request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Assistant API error: {}", status);
        }

        let data: ChatCompletionResponse = response
            .json()
            .await
            .context("Assistant API returned an unreadable body")?;

        data.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("Assistant API returned no choices")
    }

    fn next_fallback(&self) -> &'static str {
        let index = self.fallback_cursor.fetch_add(1, Ordering::Relaxed);
        FALLBACK_RESPONSES[index % FALLBACK_RESPONSES.len()]
    }
}
