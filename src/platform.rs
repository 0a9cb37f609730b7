use explorer_core::FullscreenPlatform;
use web_sys as web;

/// Browser Fullscreen API bound to one target element.
pub struct DomFullscreen {
    document: web::Document,
    target: web::Element,
}

impl DomFullscreen {
    pub fn new(document: web::Document, target: web::Element) -> Self {
        Self { document, target }
    }
}

impl FullscreenPlatform for DomFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&self) -> anyhow::Result<()> {
        self.target
            .request_fullscreen()
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }

    fn exit_fullscreen(&self) -> anyhow::Result<()> {
        self.document.exit_fullscreen();
        Ok(())
    }
}
