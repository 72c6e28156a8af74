//! Typewriter effect for the home page headline.
//!
//! [`Typewriter`] is a pure state machine: each [`Typewriter::tick`] says
//! what to render (if anything) and how long to wait before the next tick.
//! The browser loop just applies steps to `#typing` forever.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::config::TypingConfig;

/// What one tick produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// New text for the element, or `None` at a direction change.
    pub text: Option<String>,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypingConfig,
    phrase: usize,
    chars: usize,
    forward: bool,
}

impl Typewriter {
    /// Start typing the first phrase. `None` if there are no phrases.
    #[must_use]
    pub fn new(config: TypingConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self { config, phrase: 0, chars: 0, forward: true })
    }

    fn current(&self) -> &str {
        &self.config.phrases[self.phrase]
    }

    pub fn tick(&mut self) -> Step {
        let len = self.current().chars().count();
        if self.forward {
            self.chars += 1;
            if self.chars > len {
                self.forward = false;
                return Step { text: None, delay_ms: self.config.hold_delay_ms };
            }
        } else if self.chars == 0 {
            self.forward = true;
            self.phrase = (self.phrase + 1) % self.config.phrases.len();
            return Step { text: None, delay_ms: self.config.next_phrase_delay_ms };
        } else {
            self.chars -= 1;
        }

        let text = self.current().chars().take(self.chars).collect();
        let delay_ms = if self.forward { self.config.type_delay_ms } else { self.config.erase_delay_ms };
        Step { text: Some(text), delay_ms }
    }
}

/// Run the effect on `#typing` for the rest of the page's life.
#[cfg(feature = "hydrate")]
pub fn start(document: &web_sys::Document, config: &TypingConfig) {
    use std::time::Duration;

    use crate::consts::TYPING_ID;

    let Some(el) = crate::dom::by_id(document, TYPING_ID) else {
        return;
    };
    let Some(mut writer) = Typewriter::new(config.clone()) else {
        log::warn!("typing effect has no phrases");
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            let step = writer.tick();
            if let Some(text) = step.text {
                el.set_text_content(Some(&text));
            }
            gloo_timers::future::sleep(Duration::from_millis(u64::from(step.delay_ms))).await;
        }
    });
}
