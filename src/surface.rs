//! DOM rendering surface.
//!
//! Draws a [`RenderSnapshot`] into the host page: the active and outgoing
//! scene images, the hotspot buttons, the stage transform and the thumbnail
//! strip. Work is keyed on the snapshot revision and on which scene ids are
//! already on screen, so an idle frame touches nothing.

use crate::constants::*;
use crate::dom;
use explorer_core::{
    FullscreenMode, Hotspot, RenderSnapshot, SceneChangeObserver, SceneChanged, SceneGraph,
    SceneId,
};
use web_sys as web;

pub struct DomSurface {
    document: web::Document,
    stage: web::HtmlElement,
    active_img: web::HtmlImageElement,
    outgoing_img: web::HtmlImageElement,
    hotspot_layer: web::HtmlElement,
    thumbnails: Vec<web::HtmlElement>,
    fullscreen_button: Option<web::Element>,
    rendered_revision: Option<u64>,
    rendered_active: Option<SceneId>,
    rendered_outgoing: Option<SceneId>,
    rendered_index: Option<usize>,
    rendered_fullscreen: Option<FullscreenMode>,
}

impl DomSurface {
    pub fn build(document: &web::Document, graph: &SceneGraph) -> anyhow::Result<Self> {
        let strip: web::HtmlElement = dom::element_by_id(document, THUMBNAIL_STRIP_ID)?;
        strip.set_inner_html("");
        let mut thumbnails = Vec::with_capacity(graph.scene_count());
        for (i, scene) in graph.scenes().iter().enumerate() {
            let button: web::HtmlElement = dom::create_element(document, "button")?;
            _ = button.set_attribute("type", "button");
            _ = button.set_attribute("class", THUMBNAIL_CLASS);
            _ = button.set_attribute(THUMBNAIL_INDEX_ATTR, &i.to_string());
            _ = button.set_attribute("aria-label", &format!("Go to scene {}", i + 1));
            let img: web::HtmlImageElement = dom::create_element(document, "img")?;
            img.set_src(&scene.image_url);
            img.set_alt(&scene.alt);
            _ = button.append_child(&img);
            _ = strip.append_child(&button);
            thumbnails.push(button);
        }

        Ok(Self {
            document: document.clone(),
            stage: dom::element_by_id(document, STAGE_ID)?,
            active_img: dom::element_by_id(document, ACTIVE_IMAGE_ID)?,
            outgoing_img: dom::element_by_id(document, OUTGOING_IMAGE_ID)?,
            hotspot_layer: dom::element_by_id(document, HOTSPOT_LAYER_ID)?,
            thumbnails,
            fullscreen_button: document.get_element_by_id(FULLSCREEN_BUTTON_ID),
            rendered_revision: None,
            rendered_active: None,
            rendered_outgoing: None,
            rendered_index: None,
            rendered_fullscreen: None,
        })
    }

    pub fn render(&mut self, snap: &RenderSnapshot<'_>, fullscreen: FullscreenMode) {
        if self.rendered_fullscreen != Some(fullscreen) {
            self.render_fullscreen_button(fullscreen);
            self.rendered_fullscreen = Some(fullscreen);
        }
        if self.rendered_revision == Some(snap.revision) {
            return;
        }
        self.rendered_revision = Some(snap.revision);

        if self.rendered_active != Some(snap.active.id) {
            self.active_img.set_src(&snap.active.image_url);
            self.active_img.set_alt(&snap.active.alt);
            if let Err(e) = self.rebuild_hotspots(&snap.active.hotspots) {
                log::error!("[surface] hotspots for scene {}: {:?}", snap.active.id, e);
            }
            self.rendered_active = Some(snap.active.id);
        }

        let outgoing = snap.outgoing.map(|s| s.id);
        if self.rendered_outgoing != outgoing {
            match snap.outgoing {
                Some(scene) => {
                    self.outgoing_img.set_src(&scene.image_url);
                    self.outgoing_img.set_alt(&scene.alt);
                    self.restart_dissolve();
                }
                None => {
                    dom::set_class(&self.outgoing_img, DISSOLVE_OUT_CLASS, false);
                    dom::set_class(&self.outgoing_img, HIDDEN_CLASS, true);
                    _ = self.outgoing_img.remove_attribute("src");
                }
            }
            self.rendered_outgoing = outgoing;
        }

        // Hotspots stay hidden (and inert) through the crossfade
        dom::set_class(&self.hotspot_layer, HIDDEN_CLASS, !snap.hotspots_visible);
        dom::set_class(&self.hotspot_layer, FADE_IN_CLASS, snap.hotspots_visible);

        self.render_transform(snap);

        if self.rendered_index != Some(snap.current_index) {
            self.render_thumbnails(snap.current_index);
            self.rendered_index = Some(snap.current_index);
        }
    }

    fn render_transform(&self, snap: &RenderSnapshot<'_>) {
        let style = self.stage.style();
        let transform = format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            snap.translate.x, snap.translate.y, snap.scale
        );
        _ = style.set_property("transform", &transform);
        let cursor = if snap.dragging {
            "grabbing"
        } else if snap.pannable {
            "grab"
        } else {
            "default"
        };
        _ = style.set_property("cursor", cursor);
    }

    fn rebuild_hotspots(&self, hotspots: &[Hotspot]) -> anyhow::Result<()> {
        self.hotspot_layer.set_inner_html("");
        for hotspot in hotspots {
            let button: web::HtmlElement = dom::create_element(&self.document, "button")?;
            _ = button.set_attribute("type", "button");
            _ = button.set_attribute("class", HOTSPOT_CLASS);
            _ = button.set_attribute(HOTSPOT_ID_ATTR, &hotspot.id);
            _ = button.set_attribute("aria-label", &format!("Go to {}", hotspot.label));
            let style = button.style();
            let r = hotspot.region;
            _ = style.set_property("top", &format!("{}%", r.top));
            _ = style.set_property("left", &format!("{}%", r.left));
            _ = style.set_property("width", &format!("{}%", r.width));
            _ = style.set_property("height", &format!("{}%", r.height));

            let label: web::HtmlElement = dom::create_element(&self.document, "span")?;
            _ = label.set_attribute("class", HOTSPOT_LABEL_CLASS);
            label.set_text_content(Some(&hotspot.label));
            _ = button.append_child(&label);
            _ = self.hotspot_layer.append_child(&button);
        }
        Ok(())
    }

    fn restart_dissolve(&self) {
        dom::set_class(&self.outgoing_img, HIDDEN_CLASS, false);
        dom::set_class(&self.outgoing_img, DISSOLVE_OUT_CLASS, false);
        // Force a reflow so re-adding the class restarts the animation
        _ = self.outgoing_img.offset_width();
        dom::set_class(&self.outgoing_img, DISSOLVE_OUT_CLASS, true);
    }

    fn render_thumbnails(&self, current: usize) {
        for (i, thumb) in self.thumbnails.iter().enumerate() {
            let active = i == current;
            dom::set_class(thumb, ACTIVE_CLASS, active);
            if active {
                _ = thumb.set_attribute("aria-current", "true");
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Nearest);
                opts.set_inline(web::ScrollLogicalPosition::Center);
                thumb.scroll_into_view_with_scroll_into_view_options(&opts);
            } else {
                _ = thumb.remove_attribute("aria-current");
            }
        }
    }

    fn render_fullscreen_button(&self, mode: FullscreenMode) {
        if let Some(button) = &self.fullscreen_button {
            let label = match mode {
                FullscreenMode::Fullscreen => "Exit fullscreen",
                FullscreenMode::Windowed => "Enter fullscreen",
            };
            _ = button.set_attribute("aria-label", label);
            _ = button.set_attribute(
                "aria-pressed",
                if mode == FullscreenMode::Fullscreen { "true" } else { "false" },
            );
        }
    }
}

/// Writes "Scene n of m" into the aria-live status region on every change.
pub struct SceneAnnouncer {
    status: web::Element,
    scene_count: usize,
}

impl SceneAnnouncer {
    pub fn new(status: web::Element, scene_count: usize) -> Self {
        Self {
            status,
            scene_count,
        }
    }
}

impl SceneChangeObserver for SceneAnnouncer {
    fn scene_changed(&mut self, change: &SceneChanged) {
        let text = format!("Scene {} of {}", change.to.index + 1, self.scene_count);
        self.status.set_text_content(Some(&text));
    }
}
