use web_sys::Document;

use crate::config::TypingConfig;
use crate::error::FolioError;
use crate::typewriter::Typewriter;

/// Run the typewriter loop in `#typing-text` for the page lifetime.
pub fn mount(document: &Document, config: &TypingConfig) -> Result<(), FolioError> {
    let Some(target) = document.get_element_by_id("typing-text") else {
        return Ok(());
    };
    let mut typewriter = Typewriter::new(config);
    wasm_bindgen_futures::spawn_local(async move {
        while let Some(step) = typewriter.tick() {
            target.set_text_content(Some(&step.text));
            gloo_timers::future::TimeoutFuture::new(step.delay_ms).await;
        }
    });
    Ok(())
}
