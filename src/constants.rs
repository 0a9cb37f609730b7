// DOM contract with the host page (`index.html`): element ids the frontend
// binds to, plus the class names the stylesheet keys its animations on.

// Layout
pub const VIEWPORT_ID: &str = "viewport"; // receives pointer/wheel input; size drives pan bounds
pub const STAGE_ID: &str = "stage"; // transformed container holding images + hotspots
pub const ACTIVE_IMAGE_ID: &str = "scene-active";
pub const OUTGOING_IMAGE_ID: &str = "scene-outgoing";
pub const HOTSPOT_LAYER_ID: &str = "hotspots";
pub const THUMBNAIL_STRIP_ID: &str = "thumbnails";
pub const STATUS_ID: &str = "scene-status"; // aria-live region

// Controls
pub const PREV_BUTTON_ID: &str = "btn-prev";
pub const NEXT_BUTTON_ID: &str = "btn-next";
pub const ZOOM_IN_BUTTON_ID: &str = "btn-zoom-in";
pub const ZOOM_OUT_BUTTON_ID: &str = "btn-zoom-out";
pub const ZOOM_RESET_BUTTON_ID: &str = "btn-zoom-reset";
pub const FULLSCREEN_BUTTON_ID: &str = "btn-fullscreen";

// Classes
pub const DISSOLVE_OUT_CLASS: &str = "dissolve-out";
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const ACTIVE_CLASS: &str = "active";
pub const HOTSPOT_CLASS: &str = "hotspot";
pub const HOTSPOT_LABEL_CLASS: &str = "hotspot-label";
pub const THUMBNAIL_CLASS: &str = "thumbnail";

// Data attributes used for delegated clicks
pub const HOTSPOT_ID_ATTR: &str = "data-hotspot-id";
pub const THUMBNAIL_INDEX_ATTR: &str = "data-index";

// Only the primary button starts a pan
pub const PRIMARY_BUTTON: i16 = 0;
